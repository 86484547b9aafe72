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

//! SQL expression operators
//!
//! A catalog of SQL operators keyed by selector, a composer that prints an
//! operator applied to its arguments by interleaving print fragments, and an
//! in-memory evaluator used when a predicate can be checked without the database.
//!
//! ```
//! use sqlexpr_operators::{Expr, GenericPlatform, OperatorCatalog, Selector, render_sql};
//!
//! let platform = GenericPlatform::default();
//! let expr = Expr::apply(
//!     Selector::LOCATE,
//!     vec![Expr::column("NAME"), Expr::literal("x")],
//! );
//! let sql = render_sql(&expr, OperatorCatalog::standard(), &platform).unwrap();
//! assert_eq!(sql.sql, "LOCATE('x', NAME)");
//! ```

pub mod config;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod platform;
pub mod printer;
pub mod registry;

pub use config::{FragmentValidation, OperatorConfig};
pub use error::{OperatorError, OperatorResult};
pub use evaluator::InMemoryEvaluator;
pub use model::{SqlValue, ValueKind};
pub use platform::{GenericPlatform, Platform};
pub use printer::{ApiWriter, Expr, RenderedSql, SqlExpression, SqlWriter, render_api, render_sql};
pub use registry::{
    BindingSupport, CatalogBuilder, ListFragments, NodeClass, Operator, OperatorCatalog, OperatorType,
    Selector,
};
