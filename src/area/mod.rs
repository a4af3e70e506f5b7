//! Area file conversion.
//!
//! Reads the `#OBJECTS` section of a game area file and produces the JSON
//! catalog document that [`crate::Catalog`] loads. Flag letters become
//! flag names and numbered affect locations become location names.
//!
//! ```
//! use itemview::area::AreaFile;
//!
//! let area = AreaFile::parse_str(
//!     "#OBJECTS\n#1\nrock~\na rock~\nA rock.~\nstone~\ntrash 0 AO\n0 0 0 0 0\n1 2 3 P\n#0\n#$\n",
//!     "rocks.are",
//! );
//! assert_eq!(area.objects[0].wear_flags, "take hold");
//! ```

mod error;
mod parser;
mod reader;
mod tables;
mod types;

pub use error::AreaError;
pub use types::{AffectKind, AreaAffect, AreaFile, AreaHeader, AreaObject, ObjectValues};
