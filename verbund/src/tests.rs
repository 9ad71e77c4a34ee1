use assert_matches::assert_matches;

use crate::*;

fn operator<'src>() -> Combinator<'src, &'src str> {
    literal("+")
        .or(&literal("-"))
        .or(&literal("*"))
        .or(&literal("/"))
}

fn apply(lhs: i32, op: &str, rhs: i32) -> i32 {
    match op {
        "+" => lhs + rhs,
        "-" => lhs - rhs,
        "*" => lhs * rhs,
        _ => lhs / rhs,
    }
}

#[test]
fn single_operation() {
    let number = number::<i32>();
    let plus = literal("+");
    let sum = number
        .then(&plus)
        .then(&number)
        .map(|lhs, _, rhs| lhs + rhs);

    assert_eq!(sum.parse("12+3"), Match(15, ""));
    assert_eq!(sum.parse("12+3 rest"), Match(15, " rest"));
    assert_eq!(sum.parse("12-3"), Fallthrough);
}

#[test]
fn operator_choice() {
    let number = number::<i32>();
    let binary = number
        .then(&operator())
        .then(&number)
        .map(|lhs, op, rhs| apply(lhs, op, rhs));

    assert_eq!(binary.parse_all("10+15"), Ok(25));
    assert_eq!(binary.parse_all("11*11"), Ok(121));
    assert_eq!(binary.parse_all("23-12"), Ok(11));
    assert_eq!(binary.parse_all("84/4"), Ok(21));
    assert_eq!(binary.parse("88^66"), Fallthrough);
    assert_matches!(
        binary.parse_all("88^66"),
        Err(SyntaxError {
            kind: SyntaxErrorKind::NoMatch,
            offset: 0,
            ..
        })
    );
}

/// Right recursive arithmetic grammar:
///
/// ```text
/// expr   = term ("+" | "-") expr | term
/// term   = factor ("*" | "/") term | factor
/// factor = "(" expr ")" | number
/// ```
struct Arithmetic<'src> {
    expr: Combinator<'src, i32>,
    term: Combinator<'src, i32>,
}

impl<'src> Arithmetic<'src> {
    fn new() -> Self {
        let expr = Combinator::declare();
        let term = Combinator::declare();
        let factor = Combinator::declare();

        expr.define(
            term.then(&literal("+").or(&literal("-")))
                .then(&expr)
                .map(|lhs, op, rhs| apply(lhs, op, rhs))
                .or(&term),
        );
        term.define(
            factor
                .then(&literal("*").or(&literal("/")))
                .then(&term)
                .map(|lhs, op, rhs| apply(lhs, op, rhs))
                .or(&factor),
        );
        factor.define(
            literal("(")
                .then(&expr)
                .then(&literal(")"))
                .map(|_, value, _| value)
                .or(&number()),
        );

        Arithmetic { expr, term }
    }
}

impl<'src> Drop for Arithmetic<'src> {
    fn drop(&mut self) {
        self.expr.reset();
        self.term.reset();
    }
}

#[test]
fn recursive_grammar() {
    let arithmetic = Arithmetic::new();
    let expr = &arithmetic.expr;

    assert_eq!(expr.parse_all("10*(5-2)+3"), Ok(33));
    assert_eq!(expr.parse_all("1314"), Ok(1314));
    assert_eq!(expr.parse_all("(1314)"), Ok(1314));
    assert_eq!(expr.parse_all("((1314))"), Ok(1314));
    assert_eq!(expr.parse_all("1+2+3+4+10"), Ok(20));
    assert_eq!(expr.parse_all("1*2*3*4"), Ok(24));
    assert_eq!(expr.parse_all("2*3+24"), Ok(30));
    assert_eq!(expr.parse_all("1+3*3+4"), Ok(14));
    assert_eq!(expr.parse_all("10*3-2*5"), Ok(20));
}

#[test]
fn recursive_grammar_errors() {
    let arithmetic = Arithmetic::new();
    let expr = &arithmetic.expr;

    let err = expr.parse_all("(1+2").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::NoMatch);

    let err = expr.parse_all("1+2)").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::TrailingInput);
    assert_eq!(err.offset, 3);

    assert_eq!(expr.parse("1+"), Match(1, "+"));
}

#[test]
fn recursive_grammar_is_released() {
    let arithmetic = Arithmetic::new();
    let expr = arithmetic.expr.clone();
    drop(arithmetic);
    assert!(!expr.is_defined());
}

#[test]
fn failures_consume_nothing() {
    let number = number::<i32>();
    let parsers = [
        number.then(&literal("+")).then(&number).map(|a, _, b| a + b),
        literal("(").then(&number).then(&literal(")")).map(|_, n, _| n),
        number.padded(),
    ];
    for parser in &parsers {
        for input in ["x", "(x", "  x", ""] {
            assert_eq!(parser.parse(input), Fallthrough, "input {input:?}");
        }
    }
}

#[test]
fn remainders_are_suffixes() {
    let words = identifier().padded().many();
    let input = " alpha beta 42 gamma";
    let Match(items, rest) = words.parse(input) else {
        panic!("many always matches");
    };
    assert_eq!(items, ["alpha", "beta"]);
    assert!(input.ends_with(rest));
    assert_eq!(rest, "42 gamma");
}

#[test]
fn flattened_types() {
    let number = number::<u8>();
    let name = identifier();
    let sep = literal(",");

    let _: Seq<'_, (u8, &str, &str, &str, u8)> = number
        .then(&sep)
        .then(&name.then(&sep))
        .then(&number);

    let _: Alt<'_, Sum2<u8, &str>> = number.either(&name).or(&name).or(&number);
    let _: Alt<'_, Sum3<u8, &str, ()>> = number.either(&name).either(&end());
    let _: Combinator<'_, u8> = number.or(&number);
}
