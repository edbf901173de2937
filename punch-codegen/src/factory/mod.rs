//! Config class synthesis.
//!
//! - [`ConfigClassFactory`] - Orchestrates the leaf factories into a [`ClassSpec`](crate::builder::ClassSpec)
//! - [`PropertyFactory`] - One private typed property per parameter
//! - [`SetterMethodFactory`] - One fluent setter per parameter
//! - [`ToArrayMethodFactory`] - The `toArray()` export
//! - [`separate_by_blank`] - Blank-marker interleaving

mod config_class;
mod property;
mod separator;
mod setter;
mod to_array;

pub use config_class::{CREATE_METHOD, ConfigClassFactory};
pub use property::PropertyFactory;
pub use separator::separate_by_blank;
pub use setter::SetterMethodFactory;
pub use to_array::{TO_ARRAY_METHOD, ToArrayMethodFactory};
