//! Object-relational and XML operators
//!
//! REF and DEREF print the table alias of their object argument instead of the
//! argument itself; see the composer.

use crate::registry::catalog::CatalogBuilder;
use crate::registry::operator::Operator;
use crate::registry::selector::Selector;

pub fn deref() -> Operator {
    Operator::simple_function(Selector::DEREF, "DEREF")
}

pub fn reference() -> Operator {
    Operator::simple_function(Selector::REF, "REF")
}

pub fn ref_to_hex() -> Operator {
    Operator::simple_function(Selector::REF_TO_HEX, "REFTOHEX")
}

pub fn value() -> Operator {
    Operator::simple_function(Selector::VALUE, "VALUE")
}

/// `extract(document,path)`
pub fn extract_xml() -> Operator {
    Operator::with_strings(Selector::EXTRACT_XML, ["extract(", ",", ")"]).prefix()
}

/// `extractValue(document,path)`
pub fn extract_value() -> Operator {
    Operator::with_strings(Selector::EXTRACT_VALUE, ["extractValue(", ",", ")"]).prefix()
}

/// `existsNode(document,path)`
pub fn exists_node() -> Operator {
    Operator::with_strings(Selector::EXISTS_NODE, ["existsNode(", ",", ")"]).prefix()
}

/// `document.getStringVal()`
pub fn get_string_val() -> Operator {
    Operator::with_strings(Selector::GET_STRING_VAL, [".getStringVal()"])
}

/// `document.getNumberVal()`
pub fn get_number_val() -> Operator {
    Operator::with_strings(Selector::GET_NUMBER_VAL, [".getNumberVal()"])
}

/// `document.isFragment()`
pub fn is_fragment() -> Operator {
    Operator::with_strings(Selector::IS_FRAGMENT, [".isFragment()"])
}

/// Register the object-relational and XML operators
pub fn register_object_operators(builder: &mut CatalogBuilder) {
    builder.add_operator(deref());
    builder.add_operator(reference());
    builder.add_operator(ref_to_hex());
    builder.add_operator(value());
    builder.add_operator(extract_xml());
    builder.add_operator(extract_value());
    builder.add_operator(exists_node());
    builder.add_operator(get_string_val());
    builder.add_operator(get_number_val());
    builder.add_operator(is_fragment());
}
