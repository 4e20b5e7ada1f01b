//! Serializable summary of one conversion

use serde::Serialize;

use crate::events::EventCategory;
use crate::extract::ModuleMetadata;
use crate::modules::RequiredModules;

/// Everything a conversion found, plus the script it produced
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub metadata: ModuleMetadata,
    pub handlers: Vec<HandlerSummary>,
    pub required_modules: RequiredModules,
    pub script: String,
}

/// One converted subscriber method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerSummary {
    pub method_name: String,
    pub event_type: String,
    pub category: EventCategory,
}

/// A report tagged with the file it came from
#[derive(Debug, Serialize)]
pub struct FileReport<'a> {
    pub file: &'a str,
    #[serde(flatten)]
    pub report: &'a ConversionReport,
}

/// Pretty JSON array of file reports
pub fn reports_to_json(reports: &[FileReport<'_>]) -> String {
    serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
}
