use lazy_static::lazy_static;
use regex::bytes::Regex;
use tracing::trace;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Turns the text matched by a pattern into a token, or `None` for input
/// that is skipped (whitespace, comments).
pub type PatternHandler = fn(&str, Span) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    // Tried in order; every regex is anchored, so the first hit is the token
    // at the cursor. Longer spellings come before their prefixes. Comments
    // match with Unicode off so they may contain invalid UTF-8.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Identifier) },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Number) },
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\"[^\"]*\"").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::String) },
        RegexPattern { regex: Regex::new("^//(?-u:[^\\n])*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^/\\*(?s-u:.*?)\\*/").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket) },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket) },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals) },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not) },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { regex: Regex::new("^<<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftLeft) },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals) },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        RegexPattern { regex: Regex::new("^>>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftRight) },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals) },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
        RegexPattern { regex: Regex::new("^\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or) },
        RegexPattern { regex: Regex::new("^&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And) },
        RegexPattern { regex: Regex::new("^\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Pipe) },
        RegexPattern { regex: Regex::new("^&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ampersand) },
        RegexPattern { regex: Regex::new("^\\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret) },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot) },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon) },
        RegexPattern { regex: Regex::new("^\\?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Question) },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new("^~").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Tilde) },
        RegexPattern { regex: Regex::new("^\\+\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusPlus) },
        RegexPattern { regex: Regex::new("^--").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusMinus) },
        RegexPattern { regex: Regex::new("^\\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals) },
        RegexPattern { regex: Regex::new("^-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusEquals) },
        RegexPattern { regex: Regex::new("^\\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarEquals) },
        RegexPattern { regex: Regex::new("^/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SlashEquals) },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        RegexPattern { regex: Regex::new("^%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent) },
    ];
}

fn skip_handler(_matched: &str, _span: Span) -> Option<Token> {
    None
}

/// On-demand token source with one token of lookahead.
///
/// Tokens are scanned only when the parser asks for them. `peek` stores the
/// scanned token in `peeked` and `consume` drains it before scanning again,
/// so a `peek` followed by a `consume` always yields the same token.
///
/// The source is scanned as raw bytes, so spans are offsets into exactly the
/// bytes handed to `init`, valid UTF-8 or not.
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    source: Vec<u8>,
    pos: usize,
    peeked: Option<Token>,
}

impl Lexer {
    pub fn new(source: &[u8]) -> Lexer {
        let mut lexer = Lexer::default();
        lexer.init(source);
        lexer
    }

    /// Resets the cursor to the start of `source` and drops any buffered token.
    pub fn init(&mut self, source: &[u8]) {
        self.source = source.to_vec();
        self.pos = 0;
        self.peeked = None;
    }

    /// Returns the next token without advancing.
    pub fn peek(&mut self) -> &Token {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.scan(),
        };
        self.peeked.insert(token)
    }

    /// Returns the next token and advances past it.
    pub fn consume(&mut self) -> Token {
        match self.peeked.take() {
            Some(token) => token,
            None => self.scan(),
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn span(&self, start: usize) -> Span {
        Span {
            start: Position(start),
            end: Position(self.pos),
        }
    }

    fn scan(&mut self) -> Token {
        loop {
            let start = self.pos;

            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.span(start));
            }

            let remainder = &self.source[start..];
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|found| {
                        let text = String::from_utf8_lossy(found.as_bytes()).into_owned();
                        (pattern.handler, text, found.len())
                    })
            });

            let Some((handler, text, len)) = matched else {
                let (illegal, len) = leading_char(remainder);
                self.pos += len;
                let token = MK_TOKEN!(TokenKind::Illegal, illegal, self.span(start));
                trace!(%token, start, "unrecognised input");
                return token;
            };

            self.pos += len;
            if let Some(token) = handler(&text, self.span(start)) {
                trace!(%token, start, "scanned token");
                return token;
            }
        }
    }
}

/// Splits off the character at the front of `bytes`: a whole UTF-8 sequence
/// when one is there, otherwise a single byte shown as U+FFFD.
fn leading_char(bytes: &[u8]) -> (String, usize) {
    let width = match bytes.first() {
        Some(0xC2..=0xDF) => 2,
        Some(0xE0..=0xEF) => 3,
        Some(0xF0..=0xF4) => 4,
        _ => 1,
    };

    match bytes.get(..width).map(std::str::from_utf8) {
        Some(Ok(text)) => (text.to_string(), width),
        _ => (String::from_utf8_lossy(&bytes[..1]).into_owned(), 1),
    }
}
