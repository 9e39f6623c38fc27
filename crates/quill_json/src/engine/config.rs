/// The immutable settings of a [`JsonEngine`](super::JsonEngine).
///
/// The default configuration produces the engine's quasi-JSON:
///
/// - quoted values are written as-is, without escaping;
/// - a root label declared by the serialized type is prefixed to the document;
/// - nested objects may go [`DEFAULT_MAX_DEPTH`](Self::DEFAULT_MAX_DEPTH) levels deep.
///
/// [`EngineConfig::strict`] escapes quoted values and drops the root label, so
/// the output can be read by a JSON parser. It requires the `strict` feature.
///
/// # Examples
///
/// ```
/// use quill_json::EngineConfig;
///
/// let config = EngineConfig::new().with_max_depth(5);
/// assert_eq!(config.max_depth(), 5);
/// assert!(!config.escape_text());
///
/// # #[cfg(feature = "strict")]
/// # {
/// let strict = EngineConfig::strict();
/// assert!(strict.escape_text());
/// assert!(!strict.root_label());
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    max_depth: usize,
    escape_text: bool,
    root_label: bool,
}

impl EngineConfig {
    /// The default depth ceiling.
    pub const DEFAULT_MAX_DEPTH: usize = 20;

    /// Quasi-JSON output, see the type documentation.
    #[inline]
    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            escape_text: false,
            root_label: true,
        }
    }

    /// JSON-compatible output: escaped text, no root label.
    #[cfg(feature = "strict")]
    #[inline]
    pub const fn strict() -> Self {
        Self::new().with_escape_text(true).with_root_label(false)
    }

    /// Sets the depth ceiling. The root object is at depth 1, so `0` rejects everything.
    #[inline]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enables escaping of `"`, `\` and control characters in quoted values.
    ///
    /// Escaping also quotes `char` values and writes non-finite floats as `null`.
    #[cfg(feature = "strict")]
    #[inline]
    pub const fn with_escape_text(mut self, escape_text: bool) -> Self {
        self.escape_text = escape_text;
        self
    }

    /// Enables the root label prefix.
    #[inline]
    pub const fn with_root_label(mut self, root_label: bool) -> Self {
        self.root_label = root_label;
        self
    }

    #[inline]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[inline]
    pub const fn escape_text(&self) -> bool {
        self.escape_text
    }

    #[inline]
    pub const fn root_label(&self) -> bool {
        self.root_label
    }
}

impl Default for EngineConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
