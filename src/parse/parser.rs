use super::{error::ParseError, lexer::Token};
use crate::common::*;

type PResult<T = ()> = Result<T, ParseError>;

/// Dice count supplied when a `d` has no left operand, as in `d20`.
const DEFAULT_DICE_COUNT: Int = 1;

/// Shunting-yard conversion from infix tokens to postfix order.
pub struct Parser<'a> {
    tokens: &'a [Token],
    output: Vec<Token>,
    operators: Vec<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            output: Vec::with_capacity(tokens.len() + 1),
            operators: Vec::new(),
        }
    }

    pub fn parse(mut self) -> PResult<Vec<Token>> {
        for (i, &token) in self.tokens.iter().enumerate() {
            match token {
                Token::Number(_) => self.output.push(token),
                Token::Operator(op) => {
                    if op == Operator::Dice && self.is_prefix_position(i) {
                        self.output.push(Token::int(DEFAULT_DICE_COUNT));
                    }
                    self.push_operator(op);
                }
                Token::LeftParen => self.operators.push(token),
                Token::RightParen => self.close_paren()?,
            }
        }
        self.finish()
    }

    /// `d` has no left operand when it opens the expression or a group, or
    /// directly follows another operator.
    fn is_prefix_position(&self, i: usize) -> bool {
        match i.checked_sub(1).map(|prev| self.tokens[prev]) {
            None => true,
            Some(Token::LeftParen | Token::Operator(_)) => true,
            Some(Token::Number(_) | Token::RightParen) => false,
        }
    }

    fn push_operator(&mut self, op: Operator) {
        while let Some(&Token::Operator(top)) = self.operators.last() {
            if !top.binds_before(op) {
                break;
            }
            self.output.push(Token::Operator(top));
            self.operators.pop();
        }
        self.operators.push(Token::Operator(op));
    }

    fn close_paren(&mut self) -> PResult {
        loop {
            match self.operators.pop() {
                Some(Token::LeftParen) => return Ok(()),
                Some(token) => self.output.push(token),
                None => return Err(ParseError::UnbalancedParentheses),
            }
        }
    }

    fn finish(mut self) -> PResult<Vec<Token>> {
        while let Some(token) = self.operators.pop() {
            match token {
                Token::LeftParen | Token::RightParen => {
                    return Err(ParseError::UnbalancedParentheses)
                }
                _ => self.output.push(token),
            }
        }
        Ok(self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::tokenize;

    /// Renders the postfix form of `s` with single spaces between tokens.
    fn postfix(s: &str) -> PResult<String> {
        let tokens = tokenize(s, 100)?;
        let output = Parser::new(&tokens).parse()?;
        Ok(output
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn check(s: &str, expected: &str) {
        assert_eq!(postfix(s).unwrap(), expected, "postfix of {:?}", s);
    }

    fn check_err(s: &str, expected: ParseError) {
        assert_eq!(postfix(s), Err(expected), "postfix of {:?}", s);
    }

    #[test]
    fn test_precedence() {
        check("1+2*3", "1 2 3 * +");
        check("(1+2)*3", "1 2 + 3 *");
        check("2*3^2", "2 3 2 ^ *");
        check("10%4-1", "10 4 % 1 -");
    }

    #[test]
    fn test_associativity() {
        check("1-2-3", "1 2 - 3 -");
        check("8/4/2", "8 4 / 2 /");
        check("2^3^2", "2 3 2 ^ ^");
        check("2d2d2", "2 2 2 d d");
    }

    #[test]
    fn test_unary() {
        check("-2^2", "2 N 2 ^");
        check("-(2^2)", "2 2 ^ N");
        check("-+2", "2 P N");
        check("4+-3", "4 3 N +");
        check("-2d6", "2 6 d N");
    }

    #[test]
    fn test_default_dice_count() {
        check("d20", "1 20 d");
        check("d", "1 100 d");
        check("2*d10", "2 1 10 d *");
        check("(d6)", "1 6 d");
        check("-d20", "1 20 d N");
        check("2d+3", "2 100 d 3 +");
        check("(2d4)d6", "2 4 d 6 d");
        check("3d(2+4)", "3 2 4 + d");
    }

    #[test]
    fn test_empty() {
        check("", "");
    }

    #[test]
    fn test_unbalanced() {
        check_err("(2+3", ParseError::UnbalancedParentheses);
        check_err("2+3)", ParseError::UnbalancedParentheses);
        check_err(")(", ParseError::UnbalancedParentheses);
        check_err("((1)", ParseError::UnbalancedParentheses);
    }
}
