use super::error::ParseError;
use crate::common::*;
use crate::roll::Number;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, RawKind>, RawKind>;

fn lexer(s: &str) -> Lexer {
    RawKind::lexer(s).peekable_lexer()
}

/// One character (or numeric literal) of input, before the context rules
/// decide what it means.
#[derive(Logos, Debug, Copy, Clone, PartialEq)]
enum RawKind {
    #[regex(r"[0-9]+", parse_integer)]
    Integer(Number),
    #[regex(r"([0-9]+\.[0-9]*)|(\.[0-9]+)", |lex| lex.slice().parse::<Float>().ok().map(Number::Float))]
    Float(Number),

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("d")]
    Dice,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[error]
    Error,
}

impl RawKind {
    /// Characters after which `+` and `-` are read as unary.
    fn expects_operand(prev: Option<Self>) -> bool {
        use RawKind::*;
        matches!(
            prev,
            None | Some(Plus | Minus | Star | Slash | Percent | Caret | LeftParen)
        )
    }

    /// Characters before which a `d` has no sides of its own.
    fn ends_operand(next: Option<&Self>) -> bool {
        use RawKind::*;
        matches!(
            next,
            None | Some(Plus | Minus | Star | Slash | Percent | Caret | RightParen)
        )
    }
}

fn parse_integer(lex: &mut LogosLexer<RawKind>) -> Option<Number> {
    let s = lex.slice();
    s.parse::<Int>()
        .map(Number::Int)
        .or_else(|_| s.parse::<Float>().map(Number::Float))
        .ok()
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    Number(Number),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    pub(crate) const fn int(x: Int) -> Self {
        Self::Number(Number::Int(x))
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(x) => fmt::Display::fmt(x, f),
            Self::Operator(op) => fmt::Display::fmt(op, f),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

/// Splits `s` into tokens, resolving unary signs and sides-less dice.
///
/// Spaces are removed before scanning, so `1 2` is the number `12`. A `d`
/// directly followed by an operator, a closing parenthesis or the end of
/// input gets `default_sides` as its sides operand.
pub fn tokenize(s: &str, default_sides: UInt) -> Result<Vec<Token>, ParseError> {
    let stripped = s.replace(' ', "");
    let mut lexer = lexer(&stripped);
    let mut tokens: Vec<Token> = Vec::new();
    let mut prev = None;

    while let Some(kind) = lexer.next() {
        match kind {
            RawKind::Integer(x) | RawKind::Float(x) => tokens.push(Token::Number(x)),
            RawKind::Plus if RawKind::expects_operand(prev) => tokens.push(Operator::Pos.into()),
            RawKind::Minus if RawKind::expects_operand(prev) => tokens.push(Operator::Neg.into()),
            RawKind::Plus => tokens.push(Operator::Add.into()),
            RawKind::Minus => tokens.push(Operator::Sub.into()),
            RawKind::Star => tokens.push(Operator::Mul.into()),
            RawKind::Slash => tokens.push(Operator::Div.into()),
            RawKind::Percent => tokens.push(Operator::Rem.into()),
            RawKind::Caret => tokens.push(Operator::Pow.into()),
            RawKind::Dice => {
                tokens.push(Operator::Dice.into());
                if RawKind::ends_operand(lexer.peek()) {
                    tokens.push(Token::Number(default_sides_literal(default_sides)));
                }
            }
            RawKind::LeftParen => tokens.push(Token::LeftParen),
            RawKind::RightParen => tokens.push(Token::RightParen),
            RawKind::Error => {
                let position = lexer.span().start;
                return Err(ParseError::InvalidCharacter {
                    found: stripped[position..].chars().next().unwrap_or_default(),
                    position,
                });
            }
        }
        prev = Some(kind);
    }

    Ok(tokens)
}

fn default_sides_literal(sides: UInt) -> Number {
    Int::try_from(sides)
        .map(Number::Int)
        .unwrap_or(Number::Float(sides as Float))
}
