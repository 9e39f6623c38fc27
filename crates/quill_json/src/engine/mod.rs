//! Provide the serialization engine.
//!
//! ## Menu
//!
//! - [`Engine`]: The serialization contract, `serialize` and `serialize_to_stream`.
//! - [`JsonEngine`]: The quasi-JSON implementation, configured by [`EngineConfig`].
//! - [`JsonStream`]: A computed document exposed as a read-once sink.
//! - [`SerializationContext`]: The depth counter of one call.
//!
//! The free functions [`to_string`], [`to_stream`] and [`to_writer`] use
//! [`JsonEngine::DEFAULT`].
//!
//! ## Output
//!
//! ```text
//! "Person" {"name" : "joao pedro", "age" : 12, "tags" : ["a", "b"]}
//! ```
//!
//! - Fields appear in declaration order, separated by `, `, keys and values by ` : `.
//! - Transient and null fields are left out; an object with nothing left is `{}`.
//! - Numbers, booleans and chars are written raw; text is quoted.
//! - A type declaring a root label is prefixed with the quoted label and a space
//!   at the document root and as a list element or map value. Objects held
//!   directly by a field are never labeled.
//! - Quoted text is not escaped unless [`EngineConfig::strict`] is used.

// -----------------------------------------------------------------------------
// Modules

mod config;
mod context;
mod dispatch;
mod document;
mod introspect;
mod render;
mod stream;
mod text;

// -----------------------------------------------------------------------------
// Exports

pub use config::EngineConfig;
pub use context::SerializationContext;
pub use stream::JsonStream;

// -----------------------------------------------------------------------------
// Engine

use alloc::string::String;
use core::fmt;

use crate::{Reflect, SerializeError};

/// Turns an object into text.
pub trait Engine {
    /// Serializes `object` into a new string.
    ///
    /// `object` must be a [`Serializable`](crate::ops::Serializable) object,
    /// anything else fails with [`SerializeError::NotSerializable`] before a
    /// single field is read.
    fn serialize(&self, object: &dyn Reflect) -> Result<String, SerializeError>;

    /// Serializes `object` and exposes the result as a [`JsonStream`].
    ///
    /// The whole document is computed first.
    #[inline]
    fn serialize_to_stream(&self, object: &dyn Reflect) -> Result<JsonStream, SerializeError> {
        self.serialize(object).map(JsonStream::new)
    }
}

/// The quasi-JSON [`Engine`].
///
/// The engine only holds its immutable [`EngineConfig`]; every call owns its
/// own buffer and depth counter, so one engine can be shared freely between
/// threads.
///
/// # Examples
///
/// ```
/// use quill_json::derive::Reflect;
/// use quill_json::{Engine, EngineConfig, JsonEngine};
///
/// #[derive(Reflect)]
/// #[reflect(Serializable, root = "Person")]
/// struct Person {
///     name: String,
///     age: u32,
///     nickname: Option<String>,
/// }
///
/// let person = Person {
///     name: "joao pedro".into(),
///     age: 12,
///     nickname: None,
/// };
///
/// let text = JsonEngine::new().serialize(&person).unwrap();
/// assert_eq!(text, r#""Person" {"name" : "joao pedro", "age" : 12}"#);
///
/// # #[cfg(feature = "strict")]
/// # {
/// let strict = JsonEngine::with_config(EngineConfig::strict());
/// assert_eq!(
///     strict.serialize(&person).unwrap(),
///     r#"{"name" : "joao pedro", "age" : 12}"#,
/// );
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonEngine {
    config: EngineConfig,
}

impl JsonEngine {
    /// The engine behind [`to_string`], [`to_stream`] and [`to_writer`].
    pub const DEFAULT: Self = Self::new();

    #[inline]
    pub const fn new() -> Self {
        Self::with_config(EngineConfig::new())
    }

    #[inline]
    pub const fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Serializes `object` and writes the result into `sink`.
    ///
    /// Nothing reaches `sink` unless the whole document was computed; a
    /// refusing sink is reported as [`SerializeError::Sink`].
    pub fn serialize_into(
        &self,
        object: &dyn Reflect,
        sink: &mut impl fmt::Write,
    ) -> Result<(), SerializeError> {
        let text = self.serialize(object)?;
        sink.write_str(&text)?;
        Ok(())
    }
}

impl Engine for JsonEngine {
    fn serialize(&self, object: &dyn Reflect) -> Result<String, SerializeError> {
        let mut out = String::new();
        document::write_document(&mut out, object, &self.config)?;
        Ok(out)
    }
}

// -----------------------------------------------------------------------------
// Free functions

/// Serializes `object` with [`JsonEngine::DEFAULT`].
///
/// # Examples
///
/// ```
/// use quill_json::derive::Reflect;
///
/// #[derive(Reflect)]
/// #[reflect(Serializable)]
/// struct Empty;
///
/// assert_eq!(quill_json::to_string(&Empty).unwrap(), "{}");
/// ```
#[inline]
pub fn to_string(object: &dyn Reflect) -> Result<String, SerializeError> {
    JsonEngine::DEFAULT.serialize(object)
}

/// Serializes `object` with [`JsonEngine::DEFAULT`] into a [`JsonStream`].
#[inline]
pub fn to_stream(object: &dyn Reflect) -> Result<JsonStream, SerializeError> {
    JsonEngine::DEFAULT.serialize_to_stream(object)
}

/// Serializes `object` with [`JsonEngine::DEFAULT`] into `sink`.
#[inline]
pub fn to_writer(object: &dyn Reflect, sink: &mut impl fmt::Write) -> Result<(), SerializeError> {
    JsonEngine::DEFAULT.serialize_into(object, sink)
}

// -----------------------------------------------------------------------------
// Tests
