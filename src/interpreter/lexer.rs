use std::str::FromStr;

use bigdecimal::BigDecimal;
use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Decimal literal tokens, such as `42`, `3.14`, `.5` or `1.5E+3`.
    ///
    /// Literals are read exactly; there is no intermediate binary float.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_decimal)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_decimal)]
    Number(BigDecimal),
    /// Identifier tokens; variable or function names such as `x` or `is_prime`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `~`
    #[token("~")]
    Tilde,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,

    /// Statement separator.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Largest decimal exponent, in either direction, a literal may carry.
pub const MAX_LITERAL_SCALE: u64 = 1_000_000;

/// Parses a decimal literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(BigDecimal)`: The exact value of the literal.
/// - `None`: If the token slice is not a valid decimal or its scale exceeds
///   [`MAX_LITERAL_SCALE`].
fn parse_decimal(lex: &logos::Lexer<Token>) -> Option<BigDecimal> {
    let slice = lex.slice();
    let value = if slice.starts_with('.') {
        BigDecimal::from_str(&format!("0{slice}")).ok()?
    } else {
        BigDecimal::from_str(slice).ok()?
    };

    let (_, scale) = value.as_bigint_and_exponent();
    (scale.unsigned_abs() <= MAX_LITERAL_SCALE).then_some(value)
}

/// Whether a rejected slice was a numeric literal rather than a stray
/// character.
fn is_numeric_literal(slice: &str) -> bool {
    slice.starts_with(|c: char| c.is_ascii_digit()) || (slice.len() > 1 && slice.starts_with('.'))
}

/// Splits source text into tokens paired with their line numbers.
///
/// Lines are numbered from 1.
///
/// # Errors
/// - `NumberOutOfRange` for a literal whose exponent is too large.
/// - `UnexpectedToken` for the first character sequence that is not a valid
///   token.
///
/// # Example
/// ```
/// use decalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1\ny").unwrap();
///
/// assert_eq!(tokens[0], (Token::Identifier("x".into()), 1));
/// assert_eq!(tokens[3], (Token::NewLine, 2));
/// assert_eq!(tokens[4], (Token::Identifier("y".into()), 2));
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) if is_numeric_literal(lexer.slice()) => {
                return Err(ParseError::NumberOutOfRange { literal: lexer.slice().to_string(),
                                                          line:    lexer.extras.line, });
            },
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         line:  lexer.extras.line, });
            },
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(tok, _)| tok).collect()
    }

    fn dec(s: &str) -> Token {
        Token::Number(BigDecimal::from_str(s).unwrap())
    }

    #[test]
    fn literal_forms() {
        assert_eq!(kinds("42 3.25 .5 1E+3 2.5e-2"),
                   vec![dec("42"), dec("3.25"), dec("0.5"), dec("1000"), dec("0.025")]);
    }

    #[test]
    fn literals_keep_every_digit() {
        assert_eq!(kinds("0.1000000000000000000000000000000000000001"),
                   vec![dec("0.1000000000000000000000000000000000000001")]);
    }

    #[test]
    fn longest_operator_wins() {
        assert_eq!(kinds("a<<b<=c!=d!"),
                   vec![Token::Identifier("a".into()),
                        Token::ShiftLeft,
                        Token::Identifier("b".into()),
                        Token::LessEqual,
                        Token::Identifier("c".into()),
                        Token::BangEqual,
                        Token::Identifier("d".into()),
                        Token::Bang]);
    }

    #[test]
    fn comments_are_skipped_but_newlines_counted() {
        let tokens = tokenize("1 // one\n// nothing\n3").unwrap();
        assert_eq!(tokens,
                   vec![(dec("1"), 1), (Token::NewLine, 2), (Token::NewLine, 3), (dec("3"), 3)]);
    }

    #[test]
    fn literals_with_extreme_exponents_are_rejected() {
        assert_eq!(tokenize("1\n1E-5000000000000000000").unwrap_err(),
                   ParseError::NumberOutOfRange { literal: "1E-5000000000000000000".into(),
                                                  line:    2, });
        assert!(matches!(tokenize(".5e1000002").unwrap_err(),
                         ParseError::NumberOutOfRange { .. }));
        assert_eq!(kinds("1E-1000000"), vec![Token::Number(BigDecimal::new(1.into(), 1_000_000))]);
    }

    #[test]
    fn unknown_character_is_reported_with_line() {
        let err = tokenize("1\n2 $ 3").unwrap_err();
        assert_eq!(err,
                   ParseError::UnexpectedToken { token: "$".into(),
                                                 line:  2, });
    }
}
