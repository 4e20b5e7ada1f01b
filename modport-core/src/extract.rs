//! Metadata and event handler extraction from a parsed compilation unit

use serde::Serialize;
use tracing::warn;

use crate::parser::CompilationUnit;

/// Annotation that describes the mod itself
pub const MOD_ANNOTATION: &str = "Mod";

/// Annotations that mark a method as an event subscriber
pub const SUBSCRIBER_ANNOTATIONS: &[&str] = &["SubscribeEvent", "EventHandler"];

/// Identity attributes from the `@Mod` annotation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ModuleMetadata {
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.version.is_none() && self.name.is_none() && self.description.is_none()
    }

    /// Text for the description line: name and description combined when
    /// both exist, otherwise whichever is present.
    pub fn description_text(&self) -> Option<String> {
        match (&self.name, &self.description) {
            (Some(name), Some(description)) => Some(format!("{} - {}", name, description)),
            (Some(name), None) => Some(name.clone()),
            (None, Some(description)) => Some(description.clone()),
            (None, None) => None,
        }
    }
}

/// A subscriber method pulled out of the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventHandler {
    pub method_name: String,
    /// First parameter's declared type, as written
    pub event_type: String,
    /// Body text including braces
    pub body: String,
}

/// Read the `@Mod` attributes. With several `@Mod` declarations, each
/// field keeps the value from the last one that sets it.
pub fn extract_metadata(unit: &CompilationUnit) -> ModuleMetadata {
    let mut metadata = ModuleMetadata::default();

    let annotations = unit
        .type_decls
        .iter()
        .flat_map(|decl| decl.annotations.iter())
        .filter(|a| a.simple_name() == MOD_ANNOTATION);

    for annotation in annotations {
        for (key, value) in &annotation.attributes {
            let slot = match key.as_str() {
                "modid" => &mut metadata.id,
                "version" => &mut metadata.version,
                "name" => &mut metadata.name,
                "description" => &mut metadata.description,
                _ => continue,
            };
            *slot = Some(strip_quotes(value).to_string());
        }
    }

    metadata
}

/// Collect subscriber methods in document order.
///
/// Methods without parameters or without a body are skipped.
pub fn extract_handlers(unit: &CompilationUnit) -> Vec<EventHandler> {
    unit.methods
        .iter()
        .filter(|method| method.has_annotation(SUBSCRIBER_ANNOTATIONS))
        .filter_map(|method| {
            let Some(event_type) = method.parameter_types.first() else {
                warn!(method = %method.name, "subscriber has no event parameter, skipping");
                return None;
            };
            let Some(body) = &method.body else {
                warn!(method = %method.name, "subscriber has no body, skipping");
                return None;
            };
            Some(EventHandler {
                method_name: method.name.clone(),
                event_type: event_type.clone(),
                body: body.clone(),
            })
        })
        .collect()
}

fn strip_quotes(value: &str) -> &str {
    let value = value.trim();
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
