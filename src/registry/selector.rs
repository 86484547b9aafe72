//! Operator selectors
//!
//! A selector is the stable integer identity of an operation. Operators are
//! stored, compared and hashed by selector; the numeric values are part of the
//! public contract and must not be renumbered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer identity of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(pub i32);

impl Selector {
    /// Operators built ad hoc without a selector
    pub const ANONYMOUS: Selector = Selector(0);

    // Logical
    pub const AND: Selector = Selector(1);
    pub const OR: Selector = Selector(2);
    pub const NOT: Selector = Selector(3);

    // Comparison
    pub const EQUAL: Selector = Selector(4);
    pub const NOT_EQUAL: Selector = Selector(5);
    pub const EQUAL_OUTER_JOIN: Selector = Selector(6);
    pub const LESS_THAN: Selector = Selector(7);
    pub const LESS_THAN_EQUAL: Selector = Selector(8);
    pub const GREATER_THAN: Selector = Selector(9);
    pub const GREATER_THAN_EQUAL: Selector = Selector(10);
    pub const LIKE: Selector = Selector(11);
    pub const NOT_LIKE: Selector = Selector(12);
    pub const IN: Selector = Selector(13);
    pub const NOT_IN: Selector = Selector(14);
    pub const BETWEEN: Selector = Selector(15);
    pub const NOT_BETWEEN: Selector = Selector(16);
    pub const IS_NULL: Selector = Selector(17);
    pub const NOT_NULL: Selector = Selector(18);
    pub const EXISTS: Selector = Selector(86);
    pub const NOT_EXISTS: Selector = Selector(88);
    pub const LIKE_ESCAPE: Selector = Selector(89);
    pub const DECODE: Selector = Selector(105);
    pub const CASE: Selector = Selector(117);
    pub const IN_SUB_QUERY: Selector = Selector(129);
    pub const NOT_IN_SUB_QUERY: Selector = Selector(130);
    pub const NULL_IF: Selector = Selector(131);
    pub const COALESCE: Selector = Selector(132);
    pub const NOT_LIKE_ESCAPE: Selector = Selector(134);
    pub const CASE_CONDITION: Selector = Selector(136);
    pub const REGEXP: Selector = Selector(141);

    // Aggregate
    pub const COUNT: Selector = Selector(19);
    pub const SUM: Selector = Selector(20);
    pub const AVERAGE: Selector = Selector(21);
    pub const MAXIMUM: Selector = Selector(22);
    pub const MINIMUM: Selector = Selector(23);
    pub const STANDARD_DEVIATION: Selector = Selector(24);
    pub const VARIANCE: Selector = Selector(25);
    pub const DISTINCT: Selector = Selector(87);

    // Alias
    pub const AS: Selector = Selector(148);

    // Set operations
    pub const UNION: Selector = Selector(142);
    pub const UNION_ALL: Selector = Selector(143);
    pub const INTERSECT: Selector = Selector(144);
    pub const INTERSECT_ALL: Selector = Selector(145);
    pub const EXCEPT: Selector = Selector(146);
    pub const EXCEPT_ALL: Selector = Selector(147);

    // Ordering
    pub const ASCENDING: Selector = Selector(26);
    pub const DESCENDING: Selector = Selector(27);
    pub const NULLS_FIRST: Selector = Selector(139);
    pub const NULLS_LAST: Selector = Selector(140);

    // String functions
    pub const TO_UPPER_CASE: Selector = Selector(28);
    pub const TO_LOWER_CASE: Selector = Selector(29);
    pub const CHR: Selector = Selector(30);
    pub const CONCAT: Selector = Selector(31);
    pub const HEX_TO_RAW: Selector = Selector(32);
    pub const INITCAP: Selector = Selector(33);
    pub const INSTRING: Selector = Selector(34);
    pub const SOUNDEX: Selector = Selector(35);
    pub const LEFT_PAD: Selector = Selector(36);
    pub const LEFT_TRIM: Selector = Selector(37);
    pub const REPLACE: Selector = Selector(38);
    pub const RIGHT_PAD: Selector = Selector(39);
    pub const RIGHT_TRIM: Selector = Selector(40);
    pub const SUBSTRING: Selector = Selector(41);
    pub const TO_NUMBER: Selector = Selector(42);
    pub const TRANSLATE: Selector = Selector(43);
    pub const TRIM: Selector = Selector(44);
    pub const ASCII: Selector = Selector(45);
    pub const LENGTH: Selector = Selector(46);
    pub const CHAR_INDEX: Selector = Selector(96);
    pub const CHAR_LENGTH: Selector = Selector(97);
    pub const DIFFERENCE: Selector = Selector(98);
    pub const REVERSE: Selector = Selector(99);
    pub const REPLICATE: Selector = Selector(100);
    pub const RIGHT: Selector = Selector(101);
    pub const LOCATE: Selector = Selector(112);
    pub const LOCATE2: Selector = Selector(113);
    pub const TO_CHAR: Selector = Selector(114);
    pub const TO_CHAR_WITH_FORMAT: Selector = Selector(115);
    pub const RIGHT_TRIM2: Selector = Selector(116);
    pub const ANY: Selector = Selector(118);
    pub const SOME: Selector = Selector(119);
    pub const ALL: Selector = Selector(120);
    pub const TRIM2: Selector = Selector(121);
    pub const LEFT_TRIM2: Selector = Selector(122);
    pub const SUBSTRING_SINGLE_ARG: Selector = Selector(133);
    pub const CAST: Selector = Selector(137);
    pub const EXTRACT: Selector = Selector(138);

    // Date functions
    pub const ADD_MONTHS: Selector = Selector(47);
    pub const DATE_TO_STRING: Selector = Selector(48);
    pub const LAST_DAY: Selector = Selector(49);
    pub const MONTHS_BETWEEN: Selector = Selector(50);
    pub const NEXT_DAY: Selector = Selector(51);
    pub const ROUND_DATE: Selector = Selector(52);
    pub const TO_DATE: Selector = Selector(53);
    pub const TODAY: Selector = Selector(54);
    pub const ADD_DATE: Selector = Selector(90);
    pub const DATE_NAME: Selector = Selector(92);
    pub const DATE_PART: Selector = Selector(93);
    pub const DATE_DIFFERENCE: Selector = Selector(94);
    pub const TRUNCATE_DATE: Selector = Selector(102);
    pub const NEW_TIME: Selector = Selector(103);
    pub const NVL: Selector = Selector(104);
    pub const CURRENT_DATE: Selector = Selector(123);
    pub const CURRENT_TIME: Selector = Selector(128);

    // Math functions
    pub const CEIL: Selector = Selector(55);
    pub const COS: Selector = Selector(56);
    pub const COSH: Selector = Selector(57);
    pub const ABS: Selector = Selector(58);
    pub const ACOS: Selector = Selector(59);
    pub const ASIN: Selector = Selector(60);
    pub const ATAN: Selector = Selector(61);
    pub const EXP: Selector = Selector(62);
    pub const SQRT: Selector = Selector(63);
    pub const FLOOR: Selector = Selector(64);
    pub const LN: Selector = Selector(65);
    pub const LOG: Selector = Selector(66);
    pub const MOD: Selector = Selector(67);
    pub const POWER: Selector = Selector(68);
    pub const ROUND: Selector = Selector(69);
    pub const SIGN: Selector = Selector(70);
    pub const SIN: Selector = Selector(71);
    pub const SINH: Selector = Selector(72);
    pub const TAN: Selector = Selector(73);
    pub const TANH: Selector = Selector(74);
    pub const TRUNC: Selector = Selector(75);
    pub const GREATEST: Selector = Selector(76);
    pub const LEAST: Selector = Selector(77);
    pub const ADD: Selector = Selector(78);
    pub const SUBTRACT: Selector = Selector(79);
    pub const DIVIDE: Selector = Selector(80);
    pub const MULTIPLY: Selector = Selector(81);
    pub const ATAN2: Selector = Selector(91);
    pub const COT: Selector = Selector(95);
    pub const NEGATE: Selector = Selector(135);

    // Object-relational
    pub const DEREF: Selector = Selector(82);
    pub const REF: Selector = Selector(83);
    pub const REF_TO_HEX: Selector = Selector(84);
    pub const VALUE: Selector = Selector(85);

    // XML
    pub const EXTRACT_XML: Selector = Selector(106);
    pub const EXTRACT_VALUE: Selector = Selector(107);
    pub const EXISTS_NODE: Selector = Selector(108);
    pub const GET_STRING_VAL: Selector = Selector(109);
    pub const GET_NUMBER_VAL: Selector = Selector(110);
    pub const IS_FRAGMENT: Selector = Selector(111);

    // Spatial, named only; platforms supply the operators
    pub const SDO_WITHIN_DISTANCE: Selector = Selector(124);
    pub const SDO_RELATE: Selector = Selector(125);
    pub const SDO_FILTER: Selector = Selector(126);
    pub const SDO_NN: Selector = Selector(127);

    /// Raw selector value
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whether this is the anonymous selector
    pub const fn is_anonymous(self) -> bool {
        self.0 == 0
    }
}

impl From<i32> for Selector {
    fn from(value: i32) -> Self {
        Selector(value)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_values_are_stable() {
        assert_eq!(Selector::AND.value(), 1);
        assert_eq!(Selector::REGEXP.value(), 141);
        assert_eq!(Selector::AS.value(), 148);
        assert_eq!(Selector::NEGATE.value(), 135);
        assert!(Selector::ANONYMOUS.is_anonymous());
    }

    #[test]
    fn test_selector_serializes_as_integer() {
        let json = serde_json::to_string(&Selector::LIKE).unwrap();
        assert_eq!(json, "11");
        let back: Selector = serde_json::from_str("11").unwrap();
        assert_eq!(back, Selector::LIKE);
    }
}
