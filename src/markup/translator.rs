//! Legacy markup to HTML translation.
//!
//! Input text is held as a token list. Packed color escapes are decoded
//! first, then each [`CodeTable`] rule rewrites every occurrence of its code
//! in the remaining plain text, in table order. Output is emitted through a
//! scope stack, so a reset always closes the innermost scope with the right
//! closer and anything left open at end of input is closed.

use regex::{Captures, Regex};
use tracing::trace;

use super::error::MarkupError;
use super::table::{Channel, CodeAction, CodeTable, Rgb};

/// Packed color escape: a literal backslash, `t`, then `[F050]` or `[B050]`.
const PACKED_PATTERN: &str = r"\\t\[([FB])([0-5]{3})\]";

/// An open formatting scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Color { channel: Channel, css: String },
    Bold,
    Blink,
    Reverse,
}

impl Scope {
    pub fn open_tag(&self) -> String {
        match self {
            Scope::Color { channel, css } => {
                format!("<span style=\"{}: {}\">", channel.css_property(), css)
            }
            Scope::Bold => "<strong>".to_string(),
            Scope::Blink => "<span class=\"blink\">".to_string(),
            Scope::Reverse => "<span class=\"reverse\">".to_string(),
        }
    }

    pub fn close_tag(&self) -> &'static str {
        match self {
            Scope::Bold => "</strong>",
            _ => "</span>",
        }
    }
}

#[derive(Debug)]
enum Token {
    Text(String),
    Open(Scope),
    Close,
}

impl From<&CodeAction> for Token {
    fn from(action: &CodeAction) -> Self {
        match action {
            CodeAction::Color { channel, rgb } => Token::Open(Scope::Color {
                channel: *channel,
                css: rgb.to_hex(),
            }),
            CodeAction::Bold => Token::Open(Scope::Bold),
            CodeAction::Blink => Token::Open(Scope::Blink),
            CodeAction::Reverse => Token::Open(Scope::Reverse),
            CodeAction::Reset => Token::Close,
            CodeAction::Literal(c) => Token::Text(c.to_string()),
        }
    }
}

#[derive(Debug)]
struct Rule {
    pattern: Regex,
    action: CodeAction,
}

/// Compiled translator for one code table.
#[derive(Debug)]
pub struct Translator {
    packed: Regex,
    rules: Vec<Rule>,
}

impl Translator {
    /// Compile a translator from a code table.
    pub fn new(table: &CodeTable) -> Result<Self, MarkupError> {
        let packed = Regex::new(PACKED_PATTERN).map_err(|source| MarkupError::Pattern {
            code: PACKED_PATTERN.to_string(),
            source,
        })?;

        let rules = table
            .entries()
            .iter()
            .map(|entry| {
                Regex::new(&regex::escape(&entry.code))
                    .map(|pattern| Rule {
                        pattern,
                        action: entry.action.clone(),
                    })
                    .map_err(|source| MarkupError::Pattern {
                        code: entry.code.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { packed, rules })
    }

    /// Translator for the standard legacy table.
    pub fn legacy() -> Result<Self, MarkupError> {
        Self::new(&CodeTable::legacy())
    }

    /// Translate codes into nested HTML.
    ///
    /// Text outside codes is copied unchanged; it is not HTML-escaped.
    pub fn translate(&self, input: &str) -> String {
        self.emit(input, HtmlWriter::default())
    }

    /// Remove all codes, keeping the text and literal escapes.
    pub fn strip(&self, input: &str) -> String {
        self.emit(input, PlainWriter::default())
    }

    fn tokenize(&self, input: &str) -> Vec<Token> {
        let mut tokens = rewrite(vec![Token::Text(input.to_string())], &self.packed, |caps| {
            let channel = if &caps[1] == "F" {
                Channel::Foreground
            } else {
                Channel::Background
            };
            match Rgb::from_packed(&caps[2]) {
                Some(rgb) => Token::Open(Scope::Color {
                    channel,
                    css: rgb.to_css_rgb(),
                }),
                None => Token::Text(caps[0].to_string()),
            }
        });

        for rule in &self.rules {
            tokens = rewrite(tokens, &rule.pattern, |_| Token::from(&rule.action));
        }
        tokens
    }

    fn emit<W: ScopeWriter>(&self, input: &str, mut writer: W) -> String {
        if input.is_empty() {
            return String::new();
        }

        let mut stack: Vec<Scope> = Vec::new();
        for token in self.tokenize(input) {
            match token {
                Token::Text(text) => writer.text(&text),
                Token::Open(scope) => {
                    writer.open(&scope);
                    stack.push(scope);
                }
                Token::Close => match stack.pop() {
                    Some(scope) => writer.close(&scope),
                    None => trace!("Reset with no open scope ignored"),
                },
            }
        }

        if !stack.is_empty() {
            trace!(open = stack.len(), "Closing unterminated scopes");
        }
        while let Some(scope) = stack.pop() {
            writer.close(&scope);
        }
        writer.finish()
    }
}

/// Split every text token on `pattern`, replacing each match.
///
/// Replacement text is merged with its neighbours, so a literal `{` can
/// complete a code matched by a later rule.
fn rewrite<F>(tokens: Vec<Token>, pattern: &Regex, mut replace: F) -> Vec<Token>
where
    F: FnMut(&Captures<'_>) -> Token,
{
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        let Token::Text(text) = token else {
            out.push(token);
            continue;
        };

        let mut last = 0;
        for caps in pattern.captures_iter(&text) {
            let Some(m) = caps.get(0) else { continue };
            push_token(&mut out, Token::Text(text[last..m.start()].to_string()));
            push_token(&mut out, replace(&caps));
            last = m.end();
        }
        push_token(&mut out, Token::Text(text[last..].to_string()));
    }
    out
}

fn push_token(out: &mut Vec<Token>, token: Token) {
    if let Token::Text(text) = &token {
        if text.is_empty() {
            return;
        }
        if let Some(Token::Text(prev)) = out.last_mut() {
            prev.push_str(text);
            return;
        }
    }
    out.push(token);
}

trait ScopeWriter {
    fn text(&mut self, text: &str);
    fn open(&mut self, scope: &Scope);
    fn close(&mut self, scope: &Scope);
    fn finish(self) -> String;
}

#[derive(Default)]
struct HtmlWriter {
    out: String,
}

impl ScopeWriter for HtmlWriter {
    fn text(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn open(&mut self, scope: &Scope) {
        self.out.push_str(&scope.open_tag());
    }

    fn close(&mut self, scope: &Scope) {
        self.out.push_str(scope.close_tag());
    }

    fn finish(self) -> String {
        self.out
    }
}

#[derive(Default)]
struct PlainWriter {
    out: String,
}

impl ScopeWriter for PlainWriter {
    fn text(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn open(&mut self, _scope: &Scope) {}

    fn close(&mut self, _scope: &Scope) {}

    fn finish(self) -> String {
        self.out
    }
}
