//! Built-in leaf rules
//!
//! Each leaf rule is a single predicate behind the [`Rule`](crate::foundation::Rule)
//! contract. They are registered in the default factory namespace and double
//! as reference implementations for custom rules.
//!
//! - **Type**: [`ScalarVal`]
//! - **String**: [`NoWhitespace`]
//! - **Comparison**: [`Equals`]
//! - **Custom**: [`Callback`]

pub mod callback;
pub mod equals;
pub mod scalar;
pub mod whitespace;

pub use callback::Callback;
pub use equals::Equals;
pub use scalar::ScalarVal;
pub use whitespace::NoWhitespace;
