//! Conversion of one Forge compilation unit into a ModAPI script

use thiserror::Error;
use tracing::debug;

use crate::events;
use crate::extract::{extract_handlers, extract_metadata};
use crate::modules::{self, RequiredModules};
use crate::output::{
    format_script, render_listener, render_metadata, render_requires, ConversionReport,
    HandlerSummary,
};
use crate::parser::{FrontEnd, JavaFrontEnd, ParseError};
use crate::rewrite::rewrite_body;
use crate::tables::MappingTables;

/// Errors that can occur during conversion
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Conversion failed: {0}")]
    Parse(#[from] ParseError),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

static JAVA_FRONT_END: JavaFrontEnd = JavaFrontEnd;

/// Runs the conversion pipeline.
///
/// The required-module set lives on the converter, not on the call: every
/// successful conversion adds to it and the require lines reflect everything
/// seen so far. Use [`Converter::reset`] or a fresh converter per source to
/// get per-source requires.
pub struct Converter<'a> {
    tables: &'a MappingTables,
    front_end: &'a dyn FrontEnd,
    required: RequiredModules,
}

impl Converter<'static> {
    /// Built-in tables and the Java front end
    pub fn new() -> Self {
        Converter::with_tables(MappingTables::builtin())
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Converter<'a> {
    pub fn with_tables(tables: &'a MappingTables) -> Self {
        Converter::with_front_end(tables, &JAVA_FRONT_END)
    }

    pub fn with_front_end(tables: &'a MappingTables, front_end: &'a dyn FrontEnd) -> Self {
        Converter {
            tables,
            front_end,
            required: RequiredModules::new(),
        }
    }

    /// Convert `source` and return the formatted script
    pub fn convert(&mut self, source: &str) -> Result<String, ConvertError> {
        self.analyze(source).map(|report| report.script)
    }

    /// Convert `source` and return the script together with what was found
    /// along the way. Nothing is recorded when parsing fails.
    pub fn analyze(&mut self, source: &str) -> Result<ConversionReport, ConvertError> {
        let unit = self.front_end.parse(source)?;

        let metadata = extract_metadata(&unit);
        let handlers = extract_handlers(&unit);
        self.required.extend(modules::detect(self.tables, source));

        debug!(
            handlers = handlers.len(),
            modules = self.required.len(),
            "extracted compilation unit"
        );

        let mut buf = String::new();
        render_metadata(&metadata, &mut buf);
        render_requires(self.tables, &self.required, &mut buf);

        let mut summaries = Vec::with_capacity(handlers.len());
        for handler in handlers {
            let category = events::resolve(self.tables, &handler.event_type);
            debug!(
                handler = %handler.method_name,
                event_type = %handler.event_type,
                category = %category,
                "resolved event category"
            );
            let body = rewrite_body(self.tables, &handler.body, &handler.method_name);
            render_listener(&category, &handler.method_name, &body, &mut buf);
            summaries.push(HandlerSummary {
                method_name: handler.method_name,
                event_type: handler.event_type,
                category,
            });
        }

        Ok(ConversionReport {
            metadata,
            handlers: summaries,
            required_modules: self.required.clone(),
            script: format_script(&buf),
        })
    }

    /// Modules accumulated by every conversion so far
    pub fn required_modules(&self) -> &RequiredModules {
        &self.required
    }

    /// Forget accumulated modules
    pub fn reset(&mut self) {
        self.required.clear();
    }
}
