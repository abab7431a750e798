//! Configuration options for Markdown conversion.

/// Default maximum element nesting depth accepted by the loader.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options controlling how HTML is loaded and converted.
///
/// The defaults reproduce the documented conversion rules exactly; every
/// option here only tightens or trims the input before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ConversionOptions {
    /// Maximum element nesting depth before conversion fails with
    /// [`crate::ErrorKind::InputTooDeep`].
    pub max_depth: usize,

    /// Tag names whose elements (including all descendants) are dropped
    /// while loading, e.g. `script` or `style`. Matched case-insensitively.
    pub strip_tags: Vec<String>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strip_tags: Vec::new(),
        }
    }
}

impl ConversionOptions {
    /// Set the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the tags to drop, normalizing names to lowercase.
    #[must_use]
    pub fn with_strip_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.strip_tags = tags
            .into_iter()
            .map(|tag| tag.as_ref().trim().to_ascii_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();
        self
    }

    /// Whether elements named `tag_name` should be dropped.
    pub(crate) fn strips(&self, tag_name: &str) -> bool {
        self.strip_tags.iter().any(|tag| tag.eq_ignore_ascii_case(tag_name))
    }
}
