use crate::parser::RPNExpr;
use std::fmt;

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut sep = "";
        for token in self.iter() {
            write!(f, "{}{}", sep, token)?;
            sep = " ";
        }
        Ok(())
    }
}
