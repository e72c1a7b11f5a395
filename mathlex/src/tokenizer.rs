#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;
use thiserror::Error;

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Number(String),
    Op(String),
    OParen,
    CParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(lexeme) => write!(f, "{}", lexeme),
            Token::Op(op) => write!(f, "{}", op),
            Token::OParen => write!(f, "("),
            Token::CParen => write!(f, ")"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("unrecognized character '{0}'")]
pub struct LexError(pub char);

pub struct MathTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item = char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer { src: Scanner::new(source) }
    }

    fn get_token(&mut self) -> Option<Result<Token, LexError>> {
        self.src.skip_ws();
        // Ops are tried before numbers, so a '-' or '+' right after another
        // operator, an open paren or at the start of input still lexes as a
        // plain binary operator. Callers that want unary signs have to
        // rewrite the token stream themselves before converting.
        if let Some(op) = self.src.accept("+-*/^") {
            self.src.ignore();
            return Some(Ok(Token::Op(op.to_string())));
        }
        if let Some(paren) = self.src.accept("()") {
            self.src.ignore();
            return Some(Ok(match paren {
                '(' => Token::OParen,
                _ => Token::CParen,
            }));
        }
        if let Some(num) = self.src.scan_number() {
            return Some(Ok(Token::Number(num)));
        }
        self.src.next().map(|chr| Err(LexError(chr)))
    }
}

impl<I: Iterator<Item = char>> Iterator for MathTokenizer<I> {
    type Item = Result<Token, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

// Tokenize a whole expression, stopping at the first bad character.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    MathTokenizer::new(input.chars()).collect()
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{tokenize, LexError, MathTokenizer, Token};

    fn num(lexeme: &str) -> Token {
        Token::Number(lexeme.to_string())
    }

    fn op(sym: &str) -> Token {
        Token::Op(sym.to_string())
    }

    #[test]
    fn basic_ops() {
        let tokens = tokenize("3+4*2/(1-5)^2^3").unwrap();
        let expect = [
            num("3"),
            op("+"),
            num("4"),
            op("*"),
            num("2"),
            op("/"),
            Token::OParen,
            num("1"),
            op("-"),
            num("5"),
            Token::CParen,
            op("^"),
            num("2"),
            op("^"),
            num("3"),
        ];
        assert_eq!(tokens, expect);
    }

    #[test]
    fn numbers_and_whitespace() {
        let tokens = tokenize("  12 +\t4.5 * 2\n").unwrap();
        let expect = [num("12"), op("+"), num("4.5"), op("*"), num("2")];
        assert_eq!(tokens, expect);
    }

    #[test]
    fn signs_are_binary_ops() {
        // no unary disambiguation, a sign is always an operator token
        let tokens = tokenize("-3+4").unwrap();
        assert_eq!(tokens, [op("-"), num("3"), op("+"), num("4")]);

        let tokens = tokenize("2*-3").unwrap();
        assert_eq!(tokens, [num("2"), op("*"), op("-"), num("3")]);

        let tokens = tokenize("2---3").unwrap();
        assert_eq!(tokens, [num("2"), op("-"), op("-"), op("-"), num("3")]);
    }

    #[test]
    fn trailing_dot_is_not_a_number() {
        let mut lx = MathTokenizer::new("3.".chars());
        assert_eq!(lx.next(), Some(Ok(num("3"))));
        assert_eq!(lx.next(), Some(Err(LexError('.'))));
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn bad_chars() {
        assert_eq!(tokenize("2 & 3"), Err(LexError('&')));
        assert_eq!(tokenize("sin(3)"), Err(LexError('s')));

        let mut lx = MathTokenizer::new("2 & 3".chars());
        assert_eq!(lx.next(), Some(Ok(num("2"))));
        assert_eq!(lx.next(), Some(Err(LexError('&'))));
    }

    #[test]
    fn empty_input() {
        assert_eq!(tokenize(""), Ok(vec![]));
        assert_eq!(tokenize("   "), Ok(vec![]));
    }
}
