//! modport-core: Forge mod source to EaglerForge ModAPI script conversion
//!
//! This library provides:
//! - TreeSitter-based parsing of Java compilation units
//! - Table- and rule-driven rewriting of handler bodies
//! - Event category resolution and required-module detection
//! - Script and JSON report output

pub mod events;
pub mod extract;
pub mod modules;
pub mod output;
pub mod parser;
pub mod rewrite;
pub mod tables;
mod converter;
#[cfg(feature = "native")]
pub mod parallel;

pub use converter::{ConvertError, Converter};
pub use events::{resolve, EventCategory};
pub use extract::{extract_handlers, extract_metadata, EventHandler, ModuleMetadata};
pub use modules::{detect, ModuleId, RequiredModules};
pub use output::{
    format_script, reports_to_json, ConversionReport, FileReport, HandlerSummary, OutputFormat,
};
pub use parser::{CompilationUnit, FrontEnd, JavaFrontEnd, ParseError};
pub use rewrite::{rewrite_body, RewriteRule, RuleSet};
pub use tables::{MappingTables, TableError, TableOverlay};
#[cfg(feature = "native")]
pub use parallel::{
    convert_file, convert_files_parallel, expand_globs, filter_java_files, script_path,
    FileConversion,
};
