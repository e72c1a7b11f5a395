use mathlex::{tokenize, LexError, Token};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Clone, PartialEq, Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("unmatched ')' with no open paren")]
    UnmatchedCParen,
    #[error("unclosed '(' left at end of input")]
    UnmatchedOParen,
    #[error("operator '{0}' missing from the op table")]
    UnknownOp(String),
}

// Precedence and associativity per operator symbol. Higher binds tighter.
#[derive(Clone, Debug)]
pub struct OpTable(HashMap<String, (u32, Assoc)>);

impl Default for OpTable {
    fn default() -> Self {
        let mut ops = OpTable::empty();
        ops.define("^", 4, Assoc::Right);
        ops.define("*", 3, Assoc::Left);
        ops.define("/", 3, Assoc::Left);
        ops.define("+", 2, Assoc::Left);
        ops.define("-", 2, Assoc::Left);
        ops
    }
}

impl OpTable {
    pub fn empty() -> Self {
        OpTable(HashMap::new())
    }

    pub fn define(&mut self, op: &str, prec: u32, assoc: Assoc) {
        self.0.insert(op.to_string(), (prec, assoc));
    }

    pub fn lookup(&self, op: &str) -> Option<(u32, Assoc)> {
        self.0.get(op).copied()
    }
}

// RPN token sequence produced by the converter.
#[derive(Clone, PartialEq, Debug)]
pub struct RPNExpr(pub Vec<Token>);

impl RPNExpr {
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub struct ShuntingConverter {
    ops: OpTable,
}

impl Default for ShuntingConverter {
    fn default() -> Self {
        ShuntingConverter::new()
    }
}

impl ShuntingConverter {
    pub fn new() -> Self {
        ShuntingConverter { ops: OpTable::default() }
    }

    pub fn with_ops(ops: OpTable) -> Self {
        ShuntingConverter { ops }
    }

    pub fn parse_str(&self, expr: &str) -> Result<RPNExpr, ParseError> {
        self.parse(tokenize(expr)?)
    }

    // Single pass over the token stream. The stack only ever holds Op and
    // OParen tokens, and is fully drained by the time parse returns Ok.
    pub fn parse(&self, tokens: impl IntoIterator<Item = Token>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack: Vec<Token> = Vec::new();

        for token in tokens {
            match token {
                Token::Number(_) => out.push(token),
                Token::OParen => stack.push(token),
                Token::CParen => loop {
                    match stack.pop() {
                        Some(Token::OParen) => break,
                        Some(op) => out.push(op),
                        None => return Err(ParseError::UnmatchedCParen),
                    }
                },
                Token::Op(op) => {
                    let (prec, _) = self.lookup(&op)?;
                    while let Some(top) = stack.last() {
                        let top_op = match top {
                            Token::Op(top_op) => top_op,
                            // an OParen fences off the rest of the stack
                            _ => break,
                        };
                        let (top_prec, top_assoc) = self.lookup(top_op)?;
                        // equal-precedence right-associative ops stay put so
                        // they later drain rightmost-first
                        if top_prec > prec || (top_prec == prec && top_assoc == Assoc::Left) {
                            out.push(stack.pop().unwrap());
                        } else {
                            break;
                        }
                    }
                    stack.push(Token::Op(op));
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                Token::OParen => return Err(ParseError::UnmatchedOParen),
                op => out.push(op),
            }
        }
        Ok(RPNExpr(out))
    }

    fn lookup(&self, op: &str) -> Result<(u32, Assoc), ParseError> {
        self.ops
            .lookup(op)
            .ok_or_else(|| ParseError::UnknownOp(op.to_string()))
    }
}
