// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Operator definitions
//!
//! An [`Operator`] knows how to print itself by interleaving its database strings
//! (print fragments) with its arguments, in the order given by its argument-index
//! permutation. Variable-arity operators (CASE, COALESCE) carry [`ListFragments`]
//! and generate their fragments per call.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::selector::Selector;

/// Argument-index permutation storage
pub type ArgumentIndices = SmallVec<[usize; 4]>;

/// Classification of an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorType {
    /// AND, OR, NOT
    Logical,
    /// Relations and predicates
    Comparison,
    /// COUNT, SUM and friends
    Aggregate,
    /// ASC, DESC, NULLS FIRST/LAST
    Order,
    /// Everything else
    Function,
}

/// Kind of expression node a tree should create for the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeClass {
    /// Function application
    Function,
    /// Binary relation between two operands
    Relation,
    /// Logical connective
    Logical,
    /// Variable-length argument list
    ArgumentList,
}

/// Whether an operator's arguments may be bound as parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BindingSupport {
    /// Arguments can be bound
    Supported,
    /// Arguments must be inlined when the platform requires it
    Unsupported,
    /// Follow the enclosing call
    #[default]
    Inherit,
}

/// Fragment layout for variable-arity operators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFragments {
    /// Leading fragments printed before the first arguments
    pub start: Vec<String>,
    /// Fragments cycled between arguments
    pub separators: Vec<String>,
    /// Trailing fragments, the last of which closes the expression
    pub terminators: Vec<String>,
}

impl ListFragments {
    /// Create a list layout
    pub fn new<S: Into<String>>(
        start: impl IntoIterator<Item = S>,
        separators: impl IntoIterator<Item = S>,
        terminators: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            start: start.into_iter().map(Into::into).collect(),
            separators: separators.into_iter().map(Into::into).collect(),
            terminators: terminators.into_iter().map(Into::into).collect(),
        }
    }

    /// Generate `argument_count + 1` fragments
    ///
    /// Start strings come first, the tail is filled from the end of the
    /// terminators and the slots in between cycle through the separators.
    pub fn fragments_for(&self, argument_count: usize) -> Vec<String> {
        let total = argument_count + 1;
        let mut fragments = Vec::with_capacity(total);

        fragments.extend(self.start.iter().take(total).cloned());

        let remaining = total - fragments.len();
        let tail = self.terminators.len().min(remaining);
        let middle = remaining - tail;

        if !self.separators.is_empty() {
            fragments.extend(self.separators.iter().cycle().take(middle).cloned());
        } else {
            fragments.extend(std::iter::repeat_n(String::new(), middle));
        }

        fragments.extend(
            self.terminators[self.terminators.len() - tail..]
                .iter()
                .cloned(),
        );
        fragments
    }
}

/// A catalog entry describing how one SQL operation prints and evaluates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operator {
    selector: Selector,
    name: Option<String>,
    operator_type: OperatorType,
    node_class: NodeClass,
    database_strings: Vec<String>,
    api_strings: Option<Vec<String>>,
    is_prefix: bool,
    argument_indices: Option<ArgumentIndices>,
    binding: BindingSupport,
    list: Option<ListFragments>,
}

fn strings<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Vec<String> {
    items.into_iter().map(Into::into).collect()
}

impl Operator {
    /// Create an empty postfix function operator for a selector
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            name: None,
            operator_type: OperatorType::Function,
            node_class: NodeClass::Function,
            database_strings: Vec::new(),
            api_strings: None,
            is_prefix: false,
            argument_indices: None,
            binding: BindingSupport::Inherit,
            list: None,
        }
    }

    /// Create an operator from its print fragments
    pub fn with_strings<S: Into<String>>(
        selector: Selector,
        database_strings: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(selector).with_database_strings(database_strings)
    }

    /// Create a variable-arity list operator
    pub fn list(selector: Selector, fragments: ListFragments) -> Self {
        Self {
            node_class: NodeClass::ArgumentList,
            is_prefix: true,
            list: Some(fragments),
            ..Self::new(selector)
        }
    }

    /// `NAME(` `)`
    pub fn simple_function(selector: Selector, database_name: &str) -> Self {
        Self::with_strings(selector, [format!("{database_name}("), ")".to_string()])
            .prefix()
            .with_name(database_name)
    }

    /// `NAME(` `)` with an API rendering `.api_name()`
    pub fn simple_function_with_api(
        selector: Selector,
        database_name: &str,
        api_name: &str,
    ) -> Self {
        Self::simple_function(selector, database_name).with_api_strings([format!(".{api_name}()")])
    }

    /// `NAME`, for niladic functions such as CURRENT_DATE
    pub fn simple_function_no_parentheses(selector: Selector, database_name: &str) -> Self {
        Self::with_strings(selector, [database_name])
            .prefix()
            .with_name(database_name)
    }

    /// `NAME(` `, ` `)`
    pub fn simple_two_argument_function(selector: Selector, database_name: &str) -> Self {
        Self::with_strings(
            selector,
            [format!("{database_name}("), ", ".to_string(), ")".to_string()],
        )
        .prefix()
        .with_name(database_name)
    }

    /// `NAME(` `, ` `, ` `)`
    pub fn simple_three_argument_function(selector: Selector, database_name: &str) -> Self {
        Self::with_strings(
            selector,
            [
                format!("{database_name}("),
                ", ".to_string(),
                ", ".to_string(),
                ")".to_string(),
            ],
        )
        .prefix()
        .with_name(database_name)
    }

    /// `(` ` OP ` `)`, arithmetic that cannot take bound parameters
    pub fn simple_math(selector: Selector, operator: &str) -> Self {
        Self::with_strings(
            selector,
            ["(".to_string(), format!(" {operator} "), ")".to_string()],
        )
        .prefix()
        .with_binding(BindingSupport::Unsupported)
    }

    /// Postfix binary relation ` OP `
    pub fn simple_relation(selector: Selector, operator: &str) -> Self {
        Self {
            operator_type: OperatorType::Comparison,
            node_class: NodeClass::Relation,
            ..Self::with_strings(selector, [format!(" {operator} ")])
        }
    }

    /// Postfix binary relation with an API rendering `.api_name(` `)`
    pub fn simple_relation_with_api(selector: Selector, operator: &str, api_name: &str) -> Self {
        Self::simple_relation(selector, operator)
            .with_api_strings([format!(".{api_name}("), ")".to_string()])
    }

    /// Postfix logical connective ` OP `
    pub fn simple_logical(selector: Selector, operator: &str, api_name: &str) -> Self {
        Self {
            operator_type: OperatorType::Logical,
            node_class: NodeClass::Logical,
            ..Self::with_strings(selector, [format!(" {operator} ")])
        }
        .with_api_strings([format!(".{api_name}("), ")".to_string()])
    }

    /// Prefix `` ` OP ` ``, binary keyword operators printed without parentheses
    pub fn simple_logical_no_parens(selector: Selector, operator: &str) -> Self {
        Self::with_strings(
            selector,
            [String::new(), format!(" {operator} "), String::new()],
        )
        .prefix()
    }

    /// `NAME(` `)` aggregate with an API rendering
    pub fn simple_aggregate(selector: Selector, database_name: &str, api_name: &str) -> Self {
        Self {
            operator_type: OperatorType::Aggregate,
            ..Self::with_strings(selector, [format!("{database_name}("), ")".to_string()])
        }
        .prefix()
        .with_name(database_name)
        .with_api_strings([format!(".{api_name}()")])
    }

    /// Postfix ordering keyword ` NAME`
    pub fn simple_ordering(selector: Selector, database_name: &str, api_name: &str) -> Self {
        Self {
            operator_type: OperatorType::Order,
            ..Self::with_strings(selector, [format!(" {database_name}")])
        }
        .with_api_strings([format!(".{api_name}()")])
    }

    /// Set the print fragments
    pub fn with_database_strings<S: Into<String>>(
        mut self,
        database_strings: impl IntoIterator<Item = S>,
    ) -> Self {
        self.database_strings = strings(database_strings);
        self
    }

    /// Set the API rendering fragments
    pub fn with_api_strings<S: Into<String>>(mut self, api_strings: impl IntoIterator<Item = S>) -> Self {
        self.api_strings = Some(strings(api_strings));
        self
    }

    /// Set an explicit argument-index permutation
    pub fn with_argument_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.argument_indices = Some(indices.into_iter().collect());
        self
    }

    /// Set binding support
    pub fn with_binding(mut self, binding: BindingSupport) -> Self {
        self.binding = binding;
        self
    }

    /// Set the operator name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the classification
    pub fn with_type(mut self, operator_type: OperatorType) -> Self {
        self.operator_type = operator_type;
        self
    }

    /// Set the node class
    pub fn with_node_class(mut self, node_class: NodeClass) -> Self {
        self.node_class = node_class;
        self
    }

    /// Print the first fragment before the first argument
    pub fn prefix(mut self) -> Self {
        self.is_prefix = true;
        self
    }

    /// Print the first argument before the first fragment
    pub fn postfix(mut self) -> Self {
        self.is_prefix = false;
        self
    }

    /// Selector of this operator
    pub fn selector(&self) -> Selector {
        self.selector
    }

    /// Name of this operator, if set
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Classification of this operator
    pub fn operator_type(&self) -> OperatorType {
        self.operator_type
    }

    /// Node class the expression tree should use
    pub fn node_class(&self) -> NodeClass {
        self.node_class
    }

    /// Fixed print fragments; empty for list operators
    pub fn database_strings(&self) -> &[String] {
        &self.database_strings
    }

    /// API rendering fragments
    pub fn api_strings(&self) -> Option<&[String]> {
        self.api_strings.as_deref()
    }

    /// List layout for variable-arity operators
    pub fn list_fragments(&self) -> Option<&ListFragments> {
        self.list.as_ref()
    }

    /// Whether this is a variable-arity list operator
    pub fn is_list(&self) -> bool {
        self.list.is_some()
    }

    /// Whether the first fragment is printed before the first argument
    pub fn is_prefix(&self) -> bool {
        self.is_prefix
    }

    /// Binding support
    pub fn binding(&self) -> BindingSupport {
        self.binding
    }

    /// Explicit argument-index permutation, if any
    pub fn explicit_argument_indices(&self) -> Option<&[usize]> {
        self.argument_indices.as_deref()
    }

    /// Whether the operator can be printed without a platform override
    pub fn is_complete(&self) -> bool {
        match &self.list {
            Some(list) => !list.start.is_empty(),
            None => !self.database_strings.is_empty(),
        }
    }

    /// Print fragments for a call with `argument_count` arguments
    pub fn database_strings_for(&self, argument_count: usize) -> Cow<'_, [String]> {
        match &self.list {
            Some(list) => Cow::Owned(list.fragments_for(argument_count)),
            None => Cow::Borrowed(&self.database_strings),
        }
    }

    /// Argument order for a call with `argument_count` arguments
    ///
    /// The identity permutation is computed per call.
    pub fn argument_indices(&self, argument_count: usize) -> ArgumentIndices {
        match &self.argument_indices {
            Some(indices) => indices.clone(),
            None => (0..argument_count).collect(),
        }
    }

    /// Whether this is an aggregate operator
    pub fn is_aggregate_operator(&self) -> bool {
        self.operator_type == OperatorType::Aggregate
    }

    /// Whether this is a comparison operator
    pub fn is_comparison_operator(&self) -> bool {
        self.operator_type == OperatorType::Comparison
    }

    /// Whether this is a function operator
    pub fn is_function_operator(&self) -> bool {
        self.operator_type == OperatorType::Function
    }

    /// Whether this is a logical operator
    pub fn is_logical_operator(&self) -> bool {
        self.operator_type == OperatorType::Logical
    }

    /// Whether this is an ordering operator
    pub fn is_order_operator(&self) -> bool {
        self.operator_type == OperatorType::Order
    }

    /// ANY or SOME
    pub fn is_any(&self) -> bool {
        self.selector == Selector::ANY || self.selector == Selector::SOME
    }

    /// ALL
    pub fn is_all(&self) -> bool {
        self.selector == Selector::ALL
    }

    /// ANY, SOME or ALL
    pub fn is_any_or_all(&self) -> bool {
        self.is_any() || self.is_all()
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        if self.is_list() != other.is_list() || self.selector != other.selector {
            return false;
        }
        if self.selector.is_anonymous() {
            return self.database_strings == other.database_strings && self.list == other.list;
        }
        true
    }
}

impl Eq for Operator {}

impl Hash for Operator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.selector.hash(state);
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_complete() {
            return write!(
                f,
                "platform operator - {}",
                super::names::operator_name(self.selector)
            );
        }
        let fragments = match &self.list {
            Some(list) => list
                .start
                .iter()
                .chain(&list.separators)
                .chain(&list.terminators)
                .cloned()
                .collect::<Vec<_>>(),
            None => self.database_strings.clone(),
        };
        write!(f, "operator [{}]", fragments.join(", "))
    }
}
