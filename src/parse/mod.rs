mod error;
mod lexer;
mod parser;

pub use error::ParseError;
pub use lexer::{tokenize, Token};
pub use parser::Parser;

/// Converts an infix token sequence to postfix order.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    Parser::new(tokens).parse()
}

/// Tokenizes `s` and returns its postfix form, ready for
/// [`RollContext::eval`](crate::RollContext::eval).
pub fn parse(s: &str, default_sides: crate::UInt) -> Result<Vec<Token>, ParseError> {
    to_postfix(&tokenize(s, default_sides)?)
}
