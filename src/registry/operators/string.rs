//! Character functions and conditional expressions

use crate::registry::catalog::CatalogBuilder;
use crate::registry::operator::{BindingSupport, ListFragments, Operator};
use crate::registry::selector::Selector;

pub fn to_upper_case() -> Operator {
    Operator::simple_function_with_api(Selector::TO_UPPER_CASE, "UPPER", "toUpperCase")
}

pub fn to_lower_case() -> Operator {
    Operator::simple_function_with_api(Selector::TO_LOWER_CASE, "LOWER", "toLowerCase")
}

pub fn chr() -> Operator {
    Operator::simple_function(Selector::CHR, "CHR")
}

/// `(a + b)`; platforms with a CONCAT function or `||` override this
pub fn concat() -> Operator {
    Operator::simple_math(Selector::CONCAT, "+")
}

pub fn hex_to_raw() -> Operator {
    Operator::simple_function(Selector::HEX_TO_RAW, "HEXTORAW")
}

pub fn initcap() -> Operator {
    Operator::simple_function(Selector::INITCAP, "INITCAP")
}

pub fn instring() -> Operator {
    Operator::simple_two_argument_function(Selector::INSTRING, "INSTR")
}

pub fn soundex() -> Operator {
    Operator::simple_function(Selector::SOUNDEX, "SOUNDEX")
}

pub fn left_pad() -> Operator {
    Operator::simple_three_argument_function(Selector::LEFT_PAD, "LPAD")
}

pub fn left_trim() -> Operator {
    Operator::simple_function(Selector::LEFT_TRIM, "LTRIM")
}

/// `LTRIM(string, characters)`
pub fn left_trim2() -> Operator {
    Operator::simple_two_argument_function(Selector::LEFT_TRIM2, "LTRIM")
}

pub fn replace() -> Operator {
    Operator::simple_three_argument_function(Selector::REPLACE, "REPLACE")
        .with_binding(BindingSupport::Unsupported)
}

pub fn right_pad() -> Operator {
    Operator::simple_three_argument_function(Selector::RIGHT_PAD, "RPAD")
}

pub fn right_trim() -> Operator {
    Operator::simple_function(Selector::RIGHT_TRIM, "RTRIM")
}

/// `RTRIM(string, characters)`
pub fn right_trim2() -> Operator {
    Operator::simple_two_argument_function(Selector::RIGHT_TRIM2, "RTRIM")
}

/// `SUBSTR(string, start, length)`
pub fn substring() -> Operator {
    Operator::simple_three_argument_function(Selector::SUBSTRING, "SUBSTR")
        .with_binding(BindingSupport::Unsupported)
}

/// `SUBSTR(string, start)`
pub fn substring_single_arg() -> Operator {
    Operator::simple_two_argument_function(Selector::SUBSTRING_SINGLE_ARG, "SUBSTR")
}

pub fn to_number() -> Operator {
    Operator::simple_function(Selector::TO_NUMBER, "TO_NUMBER")
}

pub fn translate() -> Operator {
    Operator::simple_three_argument_function(Selector::TRANSLATE, "TRANSLATE")
        .with_binding(BindingSupport::Unsupported)
}

pub fn trim() -> Operator {
    Operator::simple_function(Selector::TRIM, "TRIM")
}

/// `TRIM(characters FROM string)`, arguments are (string, characters)
pub fn trim2() -> Operator {
    Operator::with_strings(Selector::TRIM2, ["TRIM(", " FROM ", ")"])
        .prefix()
        .with_argument_indices([1, 0])
        .with_binding(BindingSupport::Unsupported)
}

pub fn ascii() -> Operator {
    Operator::simple_function(Selector::ASCII, "ASCII")
}

pub fn length() -> Operator {
    Operator::simple_function(Selector::LENGTH, "LENGTH")
}

pub fn char_index() -> Operator {
    Operator::simple_two_argument_function(Selector::CHAR_INDEX, "CHARINDEX")
}

pub fn char_length() -> Operator {
    Operator::simple_function(Selector::CHAR_LENGTH, "CHAR_LENGTH")
}

pub fn difference() -> Operator {
    Operator::simple_two_argument_function(Selector::DIFFERENCE, "DIFFERENCE")
}

pub fn reverse() -> Operator {
    Operator::simple_function(Selector::REVERSE, "REVERSE")
}

pub fn replicate() -> Operator {
    Operator::simple_two_argument_function(Selector::REPLICATE, "REPLICATE")
}

pub fn right() -> Operator {
    Operator::simple_two_argument_function(Selector::RIGHT, "RIGHT")
}

/// `LOCATE(substring, string)`, arguments are (string, substring)
pub fn locate() -> Operator {
    Operator::simple_two_argument_function(Selector::LOCATE, "LOCATE")
        .with_argument_indices([1, 0])
        .with_binding(BindingSupport::Unsupported)
}

/// `LOCATE(substring, string, start)`, arguments are (string, substring, start)
pub fn locate2() -> Operator {
    Operator::simple_three_argument_function(Selector::LOCATE2, "LOCATE")
        .with_argument_indices([1, 0, 2])
        .with_binding(BindingSupport::Unsupported)
}

pub fn to_char() -> Operator {
    Operator::simple_function(Selector::TO_CHAR, "TO_CHAR")
}

/// `TO_CHAR(value, format)`
pub fn to_char_with_format() -> Operator {
    Operator::simple_two_argument_function(Selector::TO_CHAR_WITH_FORMAT, "TO_CHAR")
}

/// `CAST(value AS type)`
pub fn cast() -> Operator {
    Operator::with_strings(Selector::CAST, ["CAST(", " AS ", ")"])
        .prefix()
        .with_name("CAST")
}

/// `EXTRACT(part FROM value)`, arguments are (value, part)
pub fn extract() -> Operator {
    Operator::with_strings(Selector::EXTRACT, ["EXTRACT(", " FROM ", ")"])
        .prefix()
        .with_argument_indices([1, 0])
        .with_name("EXTRACT")
}

pub fn null_if() -> Operator {
    Operator::simple_two_argument_function(Selector::NULL_IF, "NULLIF")
}

/// `NVL(value, replacement)`
pub fn if_null() -> Operator {
    Operator::simple_two_argument_function(Selector::NVL, "NVL")
}

/// `COALESCE(a, b, ...)`
pub fn coalesce() -> Operator {
    Operator::list(
        Selector::COALESCE,
        ListFragments::new(["COALESCE("], [", "], [")"]),
    )
}

/// `CASE a WHEN b THEN c ... ELSE d END`
pub fn case_statement() -> Operator {
    Operator::list(
        Selector::CASE,
        ListFragments::new(["CASE "], [" WHEN ", " THEN "], [" ELSE ", " END"]),
    )
    .with_binding(BindingSupport::Unsupported)
}

/// `CASE WHEN a THEN b ... ELSE c END`
pub fn case_condition_statement() -> Operator {
    Operator::list(
        Selector::CASE_CONDITION,
        ListFragments::new(
            ["CASE WHEN ", " THEN "],
            [" WHEN ", " THEN "],
            [" ELSE ", " END "],
        ),
    )
    .with_binding(BindingSupport::Unsupported)
}

/// DECODE has no portable rendering; platforms register their own
pub fn decode() -> Operator {
    Operator::new(Selector::DECODE).prefix()
}

/// Register the character functions and conditional expressions
pub fn register_string_operators(builder: &mut CatalogBuilder) {
    for operator in [
        to_upper_case(),
        to_lower_case(),
        chr(),
        concat(),
        hex_to_raw(),
        initcap(),
        instring(),
        soundex(),
        left_pad(),
        left_trim(),
        left_trim2(),
        replace(),
        right_pad(),
        right_trim(),
        right_trim2(),
        substring(),
        substring_single_arg(),
        to_number(),
        translate(),
        trim(),
        trim2(),
        ascii(),
        length(),
        char_index(),
        char_length(),
        difference(),
        reverse(),
        replicate(),
        right(),
        locate(),
        locate2(),
        to_char(),
        to_char_with_format(),
        cast(),
        extract(),
        null_if(),
        if_null(),
        coalesce(),
        case_statement(),
        case_condition_statement(),
        decode(),
    ] {
        builder.add_operator(operator);
    }
}
