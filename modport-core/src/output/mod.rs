//! Output rendering
//!
//! Supports two output formats:
//! - script: the formatted ModAPI script
//! - json: a conversion report per input, including the script

mod formatter;
mod report;
mod script;

pub use formatter::{format_script, LISTENER_CLOSE_MARKER, LISTENER_OPEN_MARKER};
pub use report::{reports_to_json, ConversionReport, FileReport, HandlerSummary};
pub use script::{render_listener, render_metadata, render_requires, RUNTIME_GUARD};

/// Output format for converted files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Formatted script text
    #[default]
    Script,
    /// JSON conversion reports
    Json,
}

impl OutputFormat {
    /// Parse format from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "script" | "js" => Some(OutputFormat::Script),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    /// Get list of all valid format names
    pub fn valid_formats() -> &'static [&'static str] {
        &["script", "json"]
    }
}
