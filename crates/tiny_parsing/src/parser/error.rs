use itertools::Itertools;
use std::fmt::Write as _;
use tiny_tokens::spanned::{LineReader, Span};
use tiny_tokens::token::{Token, TokenKind};

/// Represents an error occurring during parsing.
///
/// Parsing stops at the first error, so a failed parse produces exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("syntax error at {location}: {kind}")]
pub struct SyntaxError {
    pub kind: ErrorKind,
    /// Where the error was detected. Errors at the end of input point directly after the last
    /// token that was consumed.
    pub location: Span,
    /// The grammar rules being parsed when the error occurred, outermost first
    pub non_terminal_stack: Vec<&'static str>,
}

impl SyntaxError {
    /// Creates a new error
    pub fn new(kind: ErrorKind, location: Span, non_terminals: Vec<&'static str>) -> Self {
        Self {
            kind,
            location,
            non_terminal_stack: non_terminals,
        }
    }

    /// The human readable message, without the location
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn line(&self) -> usize {
        self.location.line()
    }

    pub fn column(&self) -> usize {
        self.location.column()
    }

    /// Renders this error with the lines of `source` around its location, marking the offending
    /// text.
    ///
    /// ```text
    /// syntax error: expected END, found end of input
    ///   -> 1:18
    /// 1 | if x then write x
    ///   | -----------------^
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = String::new();
        // writing into a String never fails
        let _ = self.write_rendered(&mut out, source);
        out
    }

    fn write_rendered(&self, f: &mut String, source: &str) -> std::fmt::Result {
        writeln!(f, "syntax error: {}", self.kind)?;
        writeln!(f, "  -> {}", self.location)?;
        let (lines, base_line) = LineReader::new(2, 0).lines(source, &self.location);
        let width = lines
            .iter()
            .map(|line| line.line.to_string().len())
            .max()
            .unwrap_or(1);
        for line in &lines {
            writeln!(f, "{:>width$} | {}", line.line, line.src.trim_end())?;
            if line.line == base_line {
                let marker = if self.location.is_empty() {
                    format!("{}^", "-".repeat(line.col))
                } else {
                    let len = source
                        .get(self.location.offset()..self.location.offset() + self.location.len())
                        .map_or(1, |text| text.chars().count());
                    format!("{}{}", " ".repeat(line.col), "~".repeat(len))
                };
                writeln!(f, "{:width$} | {marker}", "")?;
            }
        }
        Ok(())
    }
}

/// [SyntaxError] kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("expected {}, found {}", describe_expected(.expected), describe(.found))]
    ExpectedToken {
        expected: Vec<TokenKind>,
        found: Token,
    },
    #[error("expected start of statement, found {}", describe(.0))]
    ExpectedStatement(Token),
    #[error("expected an expression, found {}", describe(.0))]
    ExpectedFactor(Token),
    #[error("unrecognized character {0:?}")]
    InvalidCharacter(String),
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("invalid number {0:?}, numbers must fit in a signed 64 bit integer")]
    InvalidNumber(String),
    #[error("nesting exceeds the maximum depth of {0}")]
    NestingTooDeep(usize),
}

impl ErrorKind {
    pub fn expected_token(expected: impl IntoIterator<Item = TokenKind>, found: Token) -> Self {
        Self::ExpectedToken {
            expected: expected.into_iter().collect(),
            found,
        }
    }

    /// The error for an [TokenKind::Error] token in a place where a real token was required
    pub fn invalid_token(token: &Token) -> Self {
        match token.lexeme() {
            "{" => Self::UnterminatedComment,
            other => Self::InvalidCharacter(other.to_string()),
        }
    }
}

fn describe(token: &Token) -> String {
    match token.kind() {
        TokenKind::Eof => "end of input".to_string(),
        kind => format!("{kind} {:?}", token.lexeme()),
    }
}

fn describe_expected(expected: &[TokenKind]) -> String {
    expected.iter().join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiny_tokens::spanned::Position;

    fn eof_at(offset: usize, column: usize) -> Token {
        Token::eof(offset, Position::new(1, column))
    }

    #[test]
    fn test_messages() {
        let found = eof_at(17, 18);
        assert_eq!(
            ErrorKind::expected_token([TokenKind::End], found.clone()).to_string(),
            "expected END, found end of input"
        );
        assert_eq!(
            ErrorKind::expected_token([TokenKind::Semicolon, TokenKind::Eof], found).to_string(),
            "expected SEMICOLON or EOF, found end of input"
        );
        let then = Token::new(
            Span::new(0, 4, Position::new(1, 1), Position::new(1, 5)),
            TokenKind::Then,
            "then",
        );
        assert_eq!(
            ErrorKind::ExpectedStatement(then).to_string(),
            "expected start of statement, found THEN \"then\""
        );
    }

    #[test]
    fn test_invalid_token_kind() {
        let span = Span::new(0, 1, Position::START, Position::new(1, 2));
        assert_eq!(
            ErrorKind::invalid_token(&Token::new(span, TokenKind::Error, "{")),
            ErrorKind::UnterminatedComment
        );
        assert_eq!(
            ErrorKind::invalid_token(&Token::new(span, TokenKind::Error, "!")),
            ErrorKind::InvalidCharacter("!".to_string())
        );
    }

    #[test]
    fn test_render_point() {
        let error = SyntaxError::new(
            ErrorKind::expected_token([TokenKind::End], eof_at(17, 18)),
            Span::point(17, Position::new(1, 18)),
            vec!["program", "if_stmt"],
        );
        assert_eq!(error.to_string(), "syntax error at 1:18: expected END, found end of input");
        assert_eq!(
            error.render("if x then write x"),
            "\
syntax error: expected END, found end of input
  -> 1:18
1 | if x then write x
  | -----------------^
"
        );
    }

    #[test]
    fn test_render_token() {
        let source = "read x;\nx := 1 ! 2";
        let span = Span::new(15, 1, Position::new(2, 8), Position::new(2, 9));
        let error = SyntaxError::new(ErrorKind::InvalidCharacter("!".to_string()), span, vec![]);
        assert_eq!(
            error.render(source),
            "\
syntax error: unrecognized character \"!\"
  -> 2:8
1 | read x;
2 | x := 1 ! 2
  |        ~
"
        );
    }
}
