use alloc::string::String;
use core::fmt;

/// A fully serialized document, handed out through a read-once sink.
///
/// The whole text is computed before the stream is created, so reading it
/// can never fail with a serialization error.
///
/// # Examples
///
/// ```
/// use quill_json::derive::Reflect;
///
/// #[derive(Reflect)]
/// #[reflect(Serializable)]
/// struct Point {
///     x: i32,
/// }
///
/// let stream = quill_json::to_stream(&Point { x: 3 }).unwrap();
/// assert_eq!(stream.as_str(), r#"{"x" : 3}"#);
/// assert_eq!(stream.to_string(), r#"{"x" : 3}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStream {
    text: String,
    position: usize,
}

impl JsonStream {
    #[inline]
    pub(crate) const fn new(text: String) -> Self {
        Self { text, position: 0 }
    }

    /// Returns the whole document, regardless of what was already read.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the document in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the bytes not yet consumed through `std::io::Read`.
    #[inline]
    pub fn remaining(&self) -> &[u8] {
        &self.text.as_bytes()[self.position..]
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Writes the whole document into `sink` with a single call.
    #[inline]
    pub fn write_to(&self, sink: &mut impl fmt::Write) -> fmt::Result {
        sink.write_str(&self.text)
    }
}

impl fmt::Display for JsonStream {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for JsonStream {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<JsonStream> for String {
    #[inline]
    fn from(stream: JsonStream) -> Self {
        stream.text
    }
}

#[cfg(feature = "std")]
impl std::io::Read for JsonStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let remaining = self.remaining();
        let len = remaining.len().min(buf.len());
        buf[..len].copy_from_slice(&remaining[..len]);
        self.position += len;
        Ok(len)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::JsonStream;

    #[test]
    fn write_to_sink() {
        let stream = JsonStream::new(String::from("{}"));
        let mut sink = String::new();
        stream.write_to(&mut sink).unwrap();
        assert_eq!(sink, "{}");
        assert_eq!(String::from(stream), "{}");
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_once() {
        use std::io::Read;

        let mut stream = JsonStream::new(String::from(r#"{"x" : 1}"#));
        let mut first = [0_u8; 4];
        assert_eq!(stream.read(&mut first).unwrap(), 4);
        assert_eq!(&first, b"{\"x\"");

        let mut rest = String::new();
        stream.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, " : 1}");
        assert!(stream.remaining().is_empty());
        assert_eq!(stream.read(&mut first).unwrap(), 0);
        assert_eq!(stream.as_str(), r#"{"x" : 1}"#);
    }
}
