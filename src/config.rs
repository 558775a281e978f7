// Exporter configuration
// Constructor-style options; `file_path` is required to activate the export

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default id of the template element that receives rendered suite blocks
pub const DEFAULT_CONTAINER_ID: &str = "uitests";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Destination of the rendered report. Without it the exporter stays
    /// inert: events are accepted and ignored, nothing is ever written.
    #[serde(default)]
    pub file_path: Option<PathBuf>,

    /// Optional HTML template; the built-in skeleton is used when absent or
    /// unreadable.
    #[serde(default)]
    pub template_path: Option<PathBuf>,

    /// Stylesheet references linked into the document head, in order
    #[serde(default)]
    pub css_paths: Vec<String>,

    /// Script references appended at the end of the body, in order
    #[serde(default)]
    pub js_paths: Vec<String>,

    /// Icon shown next to passing suites, cases and assertions
    #[serde(default = "default_pass_icon")]
    pub pass_icon: String,

    /// Icon shown next to failing suites, cases and assertions
    #[serde(default = "default_fail_icon")]
    pub fail_icon: String,

    /// Id of the container element inside the template. `replace_id` is
    /// accepted as an alias, matching older configuration files.
    #[serde(default = "default_container_id", alias = "replace_id")]
    pub container_id: String,

    /// Project label used in the document title and suite block ids
    #[serde(default)]
    pub project_label: Option<String>,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            file_path: None,
            template_path: None,
            css_paths: Vec::new(),
            js_paths: Vec::new(),
            pass_icon: default_pass_icon(),
            fail_icon: default_fail_icon(),
            container_id: default_container_id(),
            project_label: None,
        }
    }
}

fn default_pass_icon() -> String {
    String::from("icons/pass.png")
}

fn default_fail_icon() -> String {
    String::from("icons/fail.png")
}

fn default_container_id() -> String {
    String::from(DEFAULT_CONTAINER_ID)
}

impl ExporterConfig {
    /// Create a config that writes to `file_path` with defaults elsewhere
    pub fn for_file(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: Some(file_path.into()),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Option<Self> {
        toml::from_str(content).ok()
    }

    /// Render the configuration back to TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }

    /// An exporter only attaches to the session when a destination is set
    pub fn is_active(&self) -> bool {
        self.file_path.is_some()
    }
}
