//! Low-level text writers shared by the assembler and the renderer.
//!
//! Separators are written *before* every entry but the first, so nothing is
//! ever stripped afterwards and an empty frame closes as `{}` or `[]`.

use alloc::string::String;
#[cfg(feature = "strict")]
use alloc::string::ToString;
use core::fmt::{Display, Write};

use crate::SerializeError;

pub(crate) const SEPARATOR: &str = ", ";
pub(crate) const KEY_SEPARATOR: &str = " : ";

// -----------------------------------------------------------------------------
// Quoting

/// Writes `"value"`, escaping the content when `escape` is set.
///
/// Escaped text follows JSON string rules and goes through `serde_json`.
pub(crate) fn write_quoted(
    out: &mut String,
    value: &dyn Display,
    escape: bool,
) -> Result<(), SerializeError> {
    #[cfg(feature = "strict")]
    if escape {
        let text = value.to_string();
        let quoted = serde_json::to_string(text.as_str()).map_err(|_| core::fmt::Error)?;
        out.push_str(&quoted);
        return Ok(());
    }
    #[cfg(not(feature = "strict"))]
    let _ = escape;

    out.push('"');
    write!(out, "{value}")?;
    out.push('"');
    Ok(())
}

/// Writes the `Display` form of a value, unquoted.
#[inline]
pub(crate) fn write_raw(out: &mut String, value: &dyn Display) -> Result<(), SerializeError> {
    write!(out, "{value}")?;
    Ok(())
}

// -----------------------------------------------------------------------------
// Frames

/// An open `{ ... }` frame.
pub(crate) struct ObjectFrame<'a> {
    out: &'a mut String,
    escape: bool,
    empty: bool,
}

impl<'a> ObjectFrame<'a> {
    #[inline]
    pub fn open(out: &'a mut String, escape: bool) -> Self {
        out.push('{');
        Self {
            out,
            escape,
            empty: true,
        }
    }

    /// Starts a `"key" : ` entry and returns the buffer its value goes to.
    pub fn entry(&mut self, key: &dyn Display) -> Result<&mut String, SerializeError> {
        if !self.empty {
            self.out.push_str(SEPARATOR);
        }
        self.empty = false;
        write_quoted(self.out, key, self.escape)?;
        self.out.push_str(KEY_SEPARATOR);
        Ok(&mut *self.out)
    }

    #[inline]
    pub fn close(self) {
        self.out.push('}');
    }
}

/// An open `[ ... ]` frame.
pub(crate) struct ListFrame<'a> {
    out: &'a mut String,
    empty: bool,
}

impl<'a> ListFrame<'a> {
    #[inline]
    pub fn open(out: &'a mut String) -> Self {
        out.push('[');
        Self { out, empty: true }
    }

    /// Starts an element and returns the buffer it goes to.
    pub fn item(&mut self) -> &mut String {
        if !self.empty {
            self.out.push_str(SEPARATOR);
        }
        self.empty = false;
        &mut *self.out
    }

    #[inline]
    pub fn close(self) {
        self.out.push(']');
    }
}

// -----------------------------------------------------------------------------
// Tests
