//! Provide the kind-specific access traits of [`Reflect`].
//!
//! ## Menu
//!
//! - [`List`]: For ordered collections (e.g. `Vec<T>`).
//! - [`Map`]: For key-value maps (e.g. `BTreeMap<K, V>`).
//! - [`Object`]: For structs with declared fields, usually derived.
//! - [`Scalar`]: For numbers, `bool`, `char` and other unquoted values.
//! - [`Serializable`]: The marker an [`Object`] opts into to be serialized.
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod list_ops;
mod map_ops;
mod object_ops;
mod scalar_ops;

// -----------------------------------------------------------------------------
// Exports

pub use list_ops::List;
pub use map_ops::Map;
pub use object_ops::{Object, Serializable};
pub use scalar_ops::Scalar;
