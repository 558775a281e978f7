// Template handling: placeholder substitution and document skeleton edits
// Plain string surgery; the documents involved are small and well-known,
// so no HTML parser dependency is pulled in (same trade-off the XML
// report formats make).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Placeholder token: `[token_name]`
static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([a-z_]+)\]").expect("invalid placeholder regex"));

/// Substitute named placeholders in a fragment template. The template is
/// scanned exactly once, left to right; every `[token]` is replaced with its
/// value, or the empty string when no value is supplied. Values are emitted
/// verbatim and never re-scanned, so user content containing placeholder
/// syntax cannot trigger a second substitution.
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| {
            let token = &caps[1];
            values
                .iter()
                .find(|(name, _)| *name == token)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_default()
        })
        .into_owned()
}

/// Escape user-supplied text for embedding in HTML attribute or text context
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// A document skeleton with a head, a body and one container element that
/// receives the rendered suite blocks.
#[derive(Debug, Clone)]
pub struct Skeleton {
    doc: String,
    container_id: String,
}

impl Skeleton {
    /// Accept a host-supplied template. Returns None when the template is
    /// unusable: no `</head>`, no `</body>`, or no element carrying the
    /// container id.
    pub fn parse(source: &str, container_id: &str) -> Option<Self> {
        let skeleton = Self {
            doc: source.to_string(),
            container_id: container_id.to_string(),
        };
        let usable = skeleton.find_marker("</head>").is_some()
            && skeleton.find_marker("</body>").is_some()
            && skeleton.container_open_end().is_some();
        usable.then_some(skeleton)
    }

    /// Minimal built-in skeleton used when no usable template is supplied
    pub fn builtin(container_id: &str, title: &str) -> Self {
        let doc = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{title}</title>\n</head>\n<body>\n\
             <div id=\"{container_id}\">\n</div>\n</body>\n</html>\n",
            title = escape_html(title),
            container_id = escape_html(container_id),
        );
        Self {
            doc,
            container_id: container_id.to_string(),
        }
    }

    /// Insert a fragment just before `</head>`
    pub fn push_head(&mut self, fragment: &str) {
        self.insert_before_marker("</head>", fragment);
    }

    /// Insert a fragment just before `</body>`
    pub fn push_body(&mut self, fragment: &str) {
        self.insert_before_marker("</body>", fragment);
    }

    /// Append a fragment inside the container element, right after its
    /// opening tag
    pub fn push_container(&mut self, fragment: &str) {
        if let Some(at) = self.container_open_end() {
            self.doc.insert_str(at, fragment);
        }
    }

    /// Serialize the final document
    pub fn into_string(self) -> String {
        self.doc
    }

    fn find_marker(&self, marker: &str) -> Option<usize> {
        // Case-insensitive search; templates in the wild mix tag casing.
        self.doc.to_ascii_lowercase().find(marker)
    }

    fn insert_before_marker(&mut self, marker: &str, fragment: &str) {
        if let Some(at) = self.find_marker(marker) {
            self.doc.insert_str(at, fragment);
        }
    }

    /// Byte offset just past the `>` of the container's opening tag
    fn container_open_end(&self) -> Option<usize> {
        let id_attr_double = format!("id=\"{}\"", self.container_id);
        let id_attr_single = format!("id='{}'", self.container_id);
        let at = self
            .doc
            .find(&id_attr_double)
            .or_else(|| self.doc.find(&id_attr_single))?;
        let close = self.doc[at..].find('>')?;
        Some(at + close + 1)
    }
}
