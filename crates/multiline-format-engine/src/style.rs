use serde::{Deserialize, Serialize};

/// A named pair of wrapper strings plus per-construct skip switches.
///
/// One style parameterises one format operation; the formatter never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub id: String,
    pub nickname: String,
    /// Inserted at the start of each run, e.g. `<span>` or `**`.
    pub left: String,
    /// Inserted at the end of each run, e.g. `</span>` or `**`.
    pub right: String,
    #[serde(default)]
    pub skip_headings: bool,
    #[serde(default)]
    pub skip_list_items: bool,
    #[serde(default)]
    pub skip_blockquotes: bool,
}

impl Style {
    /// An ad-hoc style with no skip switches set.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            nickname: String::new(),
            left: left.into(),
            right: right.into(),
            skip_headings: false,
            skip_list_items: false,
            skip_blockquotes: false,
        }
    }

    /// Defaults for a freshly added style: empty wrappers, awaiting edits.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nickname: "Empty format".to_string(),
            ..Self::new("", "")
        }
    }

    pub fn cyan_highlight() -> Self {
        Self {
            id: "multi-line-format-cyan-highlight".to_string(),
            nickname: "Cyan Highlighter, even over multiple lines".to_string(),
            ..Self::new(r#"<span style="background-color:#00FEFE">"#, "</span>")
        }
    }

    pub fn bold() -> Self {
        Self {
            id: "multi-line-format-bold".to_string(),
            nickname: "Bold, even over multiple lines".to_string(),
            ..Self::new("**", "**")
        }
    }

    /// Whether this style matches an id or nickname given on a command line.
    #[must_use]
    pub fn matches(&self, key: &str) -> bool {
        self.id == key || self.nickname.eq_ignore_ascii_case(key)
    }
}
