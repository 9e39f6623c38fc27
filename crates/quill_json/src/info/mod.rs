//! Provide the type metadata the engine introspects.
//!
//! - [`ObjectInfo`]: per-type metadata, the declared fields in order.
//! - [`FieldInfo`]: one declared field, with its flags and bound rules.
//! - [`RootName`]: the optional label prefixed to a serialized document.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod object_info;
mod root_name;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::FieldInfo;
pub use object_info::ObjectInfo;
pub use root_name::RootName;
