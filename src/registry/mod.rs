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

//! Operator registry for SQL expressions
//!
//! Operators are plain data keyed by [`Selector`]. The standard set is registered
//! family by family on a [`CatalogBuilder`] and frozen into an
//! [`OperatorCatalog`].

pub mod catalog;
pub mod names;
pub mod operator;
pub mod operators;
pub mod selector;

pub use catalog::{CatalogBuilder, OperatorCatalog};
pub use names::OperatorNames;
pub use operator::{BindingSupport, ListFragments, NodeClass, Operator, OperatorType};
pub use selector::Selector;

/// Create a catalog with the standard operators and the given platform's overrides
pub fn create_platform_catalog(platform: &dyn crate::platform::Platform) -> OperatorCatalog {
    CatalogBuilder::standard()
        .with_config(platform.config().clone())
        .with_platform(platform)
        .build()
}
