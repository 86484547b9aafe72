//! Numeric functions and arithmetic

use crate::registry::catalog::CatalogBuilder;
use crate::registry::operator::{BindingSupport, Operator};
use crate::registry::selector::Selector;

pub fn ceil() -> Operator {
    Operator::simple_function(Selector::CEIL, "CEIL")
}

pub fn cos() -> Operator {
    Operator::simple_function(Selector::COS, "COS")
}

pub fn cosh() -> Operator {
    Operator::simple_function(Selector::COSH, "COSH")
}

pub fn abs() -> Operator {
    Operator::simple_function(Selector::ABS, "ABS")
}

pub fn acos() -> Operator {
    Operator::simple_function(Selector::ACOS, "ACOS")
}

pub fn asin() -> Operator {
    Operator::simple_function(Selector::ASIN, "ASIN")
}

pub fn atan() -> Operator {
    Operator::simple_function(Selector::ATAN, "ATAN")
}

pub fn atan2() -> Operator {
    Operator::simple_two_argument_function(Selector::ATAN2, "ATAN2")
}

pub fn exp() -> Operator {
    Operator::simple_function(Selector::EXP, "EXP")
}

pub fn sqrt() -> Operator {
    Operator::simple_function(Selector::SQRT, "SQRT")
}

pub fn floor() -> Operator {
    Operator::simple_function(Selector::FLOOR, "FLOOR")
}

pub fn ln() -> Operator {
    Operator::simple_function(Selector::LN, "LN")
}

pub fn log() -> Operator {
    Operator::simple_function(Selector::LOG, "LOG")
}

/// `MOD(a, b)`
pub fn modulo() -> Operator {
    Operator::simple_two_argument_function(Selector::MOD, "MOD")
        .with_binding(BindingSupport::Unsupported)
}

pub fn power() -> Operator {
    Operator::simple_two_argument_function(Selector::POWER, "POWER")
}

pub fn round() -> Operator {
    Operator::simple_two_argument_function(Selector::ROUND, "ROUND")
}

pub fn sign() -> Operator {
    Operator::simple_function(Selector::SIGN, "SIGN")
}

pub fn sin() -> Operator {
    Operator::simple_function(Selector::SIN, "SIN")
}

pub fn sinh() -> Operator {
    Operator::simple_function(Selector::SINH, "SINH")
}

pub fn tan() -> Operator {
    Operator::simple_function(Selector::TAN, "TAN")
}

pub fn tanh() -> Operator {
    Operator::simple_function(Selector::TANH, "TANH")
}

pub fn trunc() -> Operator {
    Operator::simple_two_argument_function(Selector::TRUNC, "TRUNC")
}

pub fn greatest() -> Operator {
    Operator::simple_two_argument_function(Selector::GREATEST, "GREATEST")
}

pub fn least() -> Operator {
    Operator::simple_two_argument_function(Selector::LEAST, "LEAST")
}

pub fn add() -> Operator {
    Operator::simple_math(Selector::ADD, "+")
}

pub fn subtract() -> Operator {
    Operator::simple_math(Selector::SUBTRACT, "-")
}

pub fn divide() -> Operator {
    Operator::simple_math(Selector::DIVIDE, "/")
}

pub fn multiply() -> Operator {
    Operator::simple_math(Selector::MULTIPLY, "*")
}

pub fn cot() -> Operator {
    Operator::simple_function(Selector::COT, "COT")
}

/// `-(a)`
pub fn negate() -> Operator {
    Operator::simple_function(Selector::NEGATE, "-")
}

/// Register the numeric functions and arithmetic
pub fn register_math_operators(builder: &mut CatalogBuilder) {
    for operator in [
        ceil(),
        cos(),
        cosh(),
        abs(),
        acos(),
        asin(),
        atan(),
        atan2(),
        exp(),
        sqrt(),
        floor(),
        ln(),
        log(),
        modulo(),
        power(),
        round(),
        sign(),
        sin(),
        sinh(),
        tan(),
        tanh(),
        trunc(),
        greatest(),
        least(),
        add(),
        subtract(),
        divide(),
        multiply(),
        cot(),
        negate(),
    ] {
        builder.add_operator(operator);
    }
}
