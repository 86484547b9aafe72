//! Platform operator names
//!
//! Maps selectors to the names platforms use when reporting or overriding an
//! operator, and names back to selectors. The reverse table is separate because
//! several selectors share a display name (`Substring`, `Locate`, `ToChar`) and
//! the spatial operators are looked up by their unqualified names.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::sync::LazyLock;

use super::selector::Selector;

const STANDARD_NAMES: &[(Selector, &str)] = &[
    (Selector::TO_UPPER_CASE, "ToUpperCase"),
    (Selector::TO_LOWER_CASE, "ToLowerCase"),
    (Selector::CHR, "Chr"),
    (Selector::CONCAT, "Concat"),
    (Selector::COALESCE, "Coalesce"),
    (Selector::CASE, "Case"),
    (Selector::CASE_CONDITION, "Case(codition)"),
    (Selector::DECODE, "Decode"),
    (Selector::HEX_TO_RAW, "HexToRaw"),
    (Selector::INITCAP, "Initcap"),
    (Selector::INSTRING, "Instring"),
    (Selector::SOUNDEX, "Soundex"),
    (Selector::LEFT_PAD, "LeftPad"),
    (Selector::LEFT_TRIM, "LeftTrim"),
    (Selector::RIGHT_PAD, "RightPad"),
    (Selector::RIGHT_TRIM, "RightTrim"),
    (Selector::SUBSTRING, "Substring"),
    (Selector::SUBSTRING_SINGLE_ARG, "Substring"),
    (Selector::TRANSLATE, "Translate"),
    (Selector::ASCII, "Ascii"),
    (Selector::LENGTH, "Length"),
    (Selector::CHAR_INDEX, "CharIndex"),
    (Selector::CHAR_LENGTH, "CharLength"),
    (Selector::DIFFERENCE, "Difference"),
    (Selector::REVERSE, "Reverse"),
    (Selector::REPLICATE, "Replicate"),
    (Selector::RIGHT, "Right"),
    (Selector::LOCATE, "Locate"),
    (Selector::LOCATE2, "Locate"),
    (Selector::TO_NUMBER, "ToNumber"),
    (Selector::TO_CHAR, "ToChar"),
    (Selector::TO_CHAR_WITH_FORMAT, "ToChar"),
    (Selector::ADD_MONTHS, "AddMonths"),
    (Selector::DATE_TO_STRING, "DateToString"),
    (Selector::MONTHS_BETWEEN, "MonthsBetween"),
    (Selector::NEXT_DAY, "NextDay"),
    (Selector::ROUND_DATE, "RoundDate"),
    (Selector::ADD_DATE, "AddDate"),
    (Selector::DATE_NAME, "DateName"),
    (Selector::DATE_PART, "DatePart"),
    (Selector::DATE_DIFFERENCE, "DateDifference"),
    (Selector::TRUNCATE_DATE, "TruncateDate"),
    (Selector::EXTRACT, "Extract"),
    (Selector::CAST, "Cast"),
    (Selector::NEW_TIME, "NewTime"),
    (Selector::NVL, "Nvl"),
    (Selector::CEIL, "Ceil"),
    (Selector::COS, "Cos"),
    (Selector::COSH, "Cosh"),
    (Selector::ABS, "Abs"),
    (Selector::ACOS, "Acos"),
    (Selector::ASIN, "Asin"),
    (Selector::ATAN, "Atan"),
    (Selector::EXP, "Exp"),
    (Selector::SQRT, "Sqrt"),
    (Selector::FLOOR, "Floor"),
    (Selector::LN, "Ln"),
    (Selector::LOG, "Log"),
    (Selector::MOD, "Mod"),
    (Selector::POWER, "Power"),
    (Selector::ROUND, "Round"),
    (Selector::SIGN, "Sign"),
    (Selector::SIN, "Sin"),
    (Selector::SINH, "Sinh"),
    (Selector::TAN, "Tan"),
    (Selector::TANH, "Tanh"),
    (Selector::TRUNC, "Trunc"),
    (Selector::GREATEST, "Greatest"),
    (Selector::LEAST, "Least"),
    (Selector::ADD, "Add"),
    (Selector::SUBTRACT, "Subtract"),
    (Selector::DIVIDE, "Divide"),
    (Selector::MULTIPLY, "Multiply"),
    (Selector::ATAN2, "Atan2"),
    (Selector::COT, "Cot"),
    (Selector::DEREF, "Deref"),
    (Selector::REF, "Ref"),
    (Selector::REF_TO_HEX, "RefToHex"),
    (Selector::VALUE, "Value"),
    (Selector::EXTRACT_XML, "ExtractXml"),
    (Selector::EXTRACT_VALUE, "ExtractValue"),
    (Selector::EXISTS_NODE, "ExistsNode"),
    (Selector::GET_STRING_VAL, "GetStringVal"),
    (Selector::GET_NUMBER_VAL, "GetNumberVal"),
    (Selector::IS_FRAGMENT, "IsFragment"),
    (Selector::SDO_WITHIN_DISTANCE, "MDSYS.SDO_WITHIN_DISTANCE"),
    (Selector::SDO_RELATE, "MDSYS.SDO_RELATE"),
    (Selector::SDO_FILTER, "MDSYS.SDO_FILTER"),
    (Selector::SDO_NN, "MDSYS.SDO_NN"),
    (Selector::NULL_IF, "NullIf"),
    (Selector::REGEXP, "REGEXP"),
    (Selector::UNION, "UNION"),
    (Selector::UNION_ALL, "UNION ALL"),
    (Selector::INTERSECT, "INTERSECT"),
    (Selector::INTERSECT_ALL, "INTERSECT ALL"),
    (Selector::EXCEPT, "EXCEPT"),
    (Selector::EXCEPT_ALL, "EXCEPT ALL"),
];

const STANDARD_SELECTORS: &[(&str, Selector)] = &[
    ("ToUpperCase", Selector::TO_UPPER_CASE),
    ("ToLowerCase", Selector::TO_LOWER_CASE),
    ("Chr", Selector::CHR),
    ("Concat", Selector::CONCAT),
    ("Coalesce", Selector::COALESCE),
    ("Case", Selector::CASE),
    ("Decode", Selector::DECODE),
    ("HexToRaw", Selector::HEX_TO_RAW),
    ("Initcap", Selector::INITCAP),
    ("Instring", Selector::INSTRING),
    ("Soundex", Selector::SOUNDEX),
    ("LeftPad", Selector::LEFT_PAD),
    ("LeftTrim", Selector::LEFT_TRIM),
    ("RightPad", Selector::RIGHT_PAD),
    ("RightTrim", Selector::RIGHT_TRIM),
    ("Substring", Selector::SUBSTRING),
    ("Translate", Selector::TRANSLATE),
    ("Ascii", Selector::ASCII),
    ("Length", Selector::LENGTH),
    ("CharIndex", Selector::CHAR_INDEX),
    ("CharLength", Selector::CHAR_LENGTH),
    ("Difference", Selector::DIFFERENCE),
    ("Reverse", Selector::REVERSE),
    ("Replicate", Selector::REPLICATE),
    ("Right", Selector::RIGHT),
    ("Locate", Selector::LOCATE),
    ("ToNumber", Selector::TO_NUMBER),
    ("ToChar", Selector::TO_CHAR),
    ("AddMonths", Selector::ADD_MONTHS),
    ("DateToString", Selector::DATE_TO_STRING),
    ("MonthsBetween", Selector::MONTHS_BETWEEN),
    ("NextDay", Selector::NEXT_DAY),
    ("RoundDate", Selector::ROUND_DATE),
    ("AddDate", Selector::ADD_DATE),
    ("DateName", Selector::DATE_NAME),
    ("DatePart", Selector::DATE_PART),
    ("DateDifference", Selector::DATE_DIFFERENCE),
    ("TruncateDate", Selector::TRUNCATE_DATE),
    ("NewTime", Selector::NEW_TIME),
    ("Nvl", Selector::NVL),
    ("Ceil", Selector::CEIL),
    ("Cos", Selector::COS),
    ("Cosh", Selector::COSH),
    ("Abs", Selector::ABS),
    ("Acos", Selector::ACOS),
    ("Asin", Selector::ASIN),
    ("Atan", Selector::ATAN),
    ("Exp", Selector::EXP),
    ("Sqrt", Selector::SQRT),
    ("Floor", Selector::FLOOR),
    ("Ln", Selector::LN),
    ("Log", Selector::LOG),
    ("Mod", Selector::MOD),
    ("Power", Selector::POWER),
    ("Round", Selector::ROUND),
    ("Sign", Selector::SIGN),
    ("Sin", Selector::SIN),
    ("Sinh", Selector::SINH),
    ("Tan", Selector::TAN),
    ("Tanh", Selector::TANH),
    ("Trunc", Selector::TRUNC),
    ("Greatest", Selector::GREATEST),
    ("Least", Selector::LEAST),
    ("Add", Selector::ADD),
    ("Subtract", Selector::SUBTRACT),
    ("Divide", Selector::DIVIDE),
    ("Multiply", Selector::MULTIPLY),
    ("Atan2", Selector::ATAN2),
    ("Cot", Selector::COT),
    ("Deref", Selector::DEREF),
    ("Ref", Selector::REF),
    ("RefToHex", Selector::REF_TO_HEX),
    ("Value", Selector::VALUE),
    ("Cast", Selector::CAST),
    ("Extract", Selector::EXTRACT),
    ("ExtractXml", Selector::EXTRACT_XML),
    ("ExtractValue", Selector::EXTRACT_VALUE),
    ("ExistsNode", Selector::EXISTS_NODE),
    ("GetStringVal", Selector::GET_STRING_VAL),
    ("GetNumberVal", Selector::GET_NUMBER_VAL),
    ("IsFragment", Selector::IS_FRAGMENT),
    ("SDO_WITHIN_DISTANCE", Selector::SDO_WITHIN_DISTANCE),
    ("SDO_RELATE", Selector::SDO_RELATE),
    ("SDO_FILTER", Selector::SDO_FILTER),
    ("SDO_NN", Selector::SDO_NN),
    ("NullIf", Selector::NULL_IF),
];

static STANDARD: LazyLock<OperatorNames> = LazyLock::new(OperatorNames::standard);

/// Bidirectional selector/name table
#[derive(Debug, Clone, Default)]
pub struct OperatorNames {
    names: IndexMap<Selector, String>,
    selectors: FxHashMap<String, Selector>,
}

impl OperatorNames {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table pre-populated with the standard names
    pub fn standard() -> Self {
        let mut table = Self::new();
        for (selector, name) in STANDARD_NAMES {
            table.names.insert(*selector, (*name).to_string());
        }
        for (name, selector) in STANDARD_SELECTORS {
            table.selectors.insert((*name).to_string(), *selector);
        }
        table
    }

    /// Register a name in both directions, replacing earlier entries
    pub fn register(&mut self, selector: Selector, name: impl Into<String>) {
        let name = name.into();
        self.selectors.insert(name.clone(), selector);
        self.names.insert(selector, name);
    }

    /// Registered name of a selector
    pub fn get(&self, selector: Selector) -> Option<&str> {
        self.names.get(&selector).map(String::as_str)
    }

    /// Name of a selector, or its decimal value when unnamed
    pub fn name(&self, selector: Selector) -> Cow<'_, str> {
        match self.get(selector) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(selector.to_string()),
        }
    }

    /// Selector registered for a name
    pub fn selector(&self, name: &str) -> Option<Selector> {
        self.selectors.get(name).copied()
    }

    /// Iterate over selector/name pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (Selector, &str)> {
        self.names.iter().map(|(selector, name)| (*selector, name.as_str()))
    }

    /// Number of named selectors
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Standard name of a selector, or its decimal value when unnamed
pub fn operator_name(selector: Selector) -> String {
    STANDARD.name(selector).into_owned()
}

/// Selector for a standard operator name
pub fn selector_for_name(name: &str) -> Option<Selector> {
    STANDARD.selector(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_names() {
        assert_eq!(operator_name(Selector::TO_UPPER_CASE), "ToUpperCase");
        assert_eq!(operator_name(Selector::SUBSTRING_SINGLE_ARG), "Substring");
        assert_eq!(operator_name(Selector::SDO_NN), "MDSYS.SDO_NN");
        assert_eq!(operator_name(Selector::UNION_ALL), "UNION ALL");
    }

    #[test]
    fn test_unnamed_selector_falls_back_to_number() {
        assert_eq!(operator_name(Selector::EQUAL), "4");
        assert_eq!(operator_name(Selector(9999)), "9999");
    }

    #[test]
    fn test_reverse_lookup_uses_canonical_entries() {
        assert_eq!(selector_for_name("Substring"), Some(Selector::SUBSTRING));
        assert_eq!(selector_for_name("Locate"), Some(Selector::LOCATE));
        assert_eq!(selector_for_name("SDO_NN"), Some(Selector::SDO_NN));
        assert_eq!(selector_for_name("MDSYS.SDO_NN"), None);
    }

    #[test]
    fn test_register_adds_both_directions() {
        let mut names = OperatorNames::standard();
        names.register(Selector(500), "Soundslike");
        assert_eq!(names.name(Selector(500)), "Soundslike");
        assert_eq!(names.selector("Soundslike"), Some(Selector(500)));
    }
}
