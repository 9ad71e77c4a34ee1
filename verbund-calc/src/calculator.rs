use verbund::{literal, number, Combinator};

use crate::{
    ast::{BinaryOp, Expr},
    error::Error,
    Config,
};

/// Parser and evaluator for integer arithmetic expressions.
///
/// The grammar is
///
/// ```text
/// expression = term (("+" | "-") term)*
/// term       = factor (("*" | "/") factor)*
/// factor     = "(" expression ")" | number
/// ```
///
/// where all operators are left associative. With [`Config::whitespace`] set, blanks are allowed
/// around every token.
///
/// A calculator can parse any number of inputs that outlive it. It can be shared between threads.
#[derive(Debug)]
pub struct Calculator<'src> {
    expression: Combinator<'src, Expr>,
}

impl<'src> Calculator<'src> {
    /// Builds the grammar.
    pub fn new(config: Config) -> Self {
        let token = |text: &'src str| padded_if(config.whitespace, literal(text));

        let expression = Combinator::declare();

        let number = padded_if(config.whitespace, number::<i64>()).map(Expr::Number);
        let factor = token("(")
            .then(&expression)
            .then(&token(")"))
            .map(|_, inner, _| inner)
            .or(&number);

        let multiplicative = token("*")
            .map(|_| BinaryOp::Mul)
            .or(&token("/").map(|_| BinaryOp::Div));
        let term = left_assoc(&factor, &multiplicative);

        let additive = token("+")
            .map(|_| BinaryOp::Add)
            .or(&token("-").map(|_| BinaryOp::Sub));
        expression.define(left_assoc(&term, &additive));

        Calculator { expression }
    }

    /// Parses a complete input into an expression tree.
    pub fn parse(&self, input: &'src str) -> Result<Expr, Error> {
        Ok(self.expression.parse_all(input)?)
    }

    /// Parses and evaluates a complete input.
    pub fn evaluate(&self, input: &'src str) -> Result<i64, Error> {
        Ok(self.parse(input)?.eval()?)
    }
}

impl<'src> Default for Calculator<'src> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<'src> Drop for Calculator<'src> {
    fn drop(&mut self) {
        self.expression.reset();
    }
}

fn padded_if<'src, T: 'src>(padded: bool, parser: Combinator<'src, T>) -> Combinator<'src, T> {
    if padded {
        parser.padded()
    } else {
        parser
    }
}

/// `operand (operator operand)*`, folded to the left.
fn left_assoc<'src>(
    operand: &Combinator<'src, Expr>,
    operator: &Combinator<'src, BinaryOp>,
) -> Combinator<'src, Expr> {
    let tail = operator.then(operand).into_combinator().many();
    operand.then(&tail).map(|first, rest| {
        rest.into_iter()
            .fold(first, |lhs, (op, rhs)| Expr::binary(op, lhs, rhs))
    })
}
