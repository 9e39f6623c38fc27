#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Usually, we need to use `crate` in the crate itself and use `quill_json` in doc testing.
// But `macro_utils::Manifest` can only choose one, so we must have an
// `extern self` to ensure `quill_json` can be used as an alias for `crate`.
extern crate self as quill_json;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod impls;
mod reflection;

pub mod engine;
pub mod info;
pub mod ops;
pub mod rules;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use engine::{Engine, EngineConfig, JsonEngine, JsonStream, SerializationContext};
pub use engine::{to_stream, to_string, to_writer};
pub use error::SerializeError;
pub use quill_json_derive as derive;
pub use reflection::{Reflect, ReflectRef};
