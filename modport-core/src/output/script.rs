//! Rendering of the script sections before formatting
//!
//! Each function appends unindented lines to a buffer. Indentation is left
//! to [`super::format_script`].

use crate::events::EventCategory;
use crate::extract::ModuleMetadata;
use crate::modules::RequiredModules;
use crate::tables::MappingTables;

/// Guard at the top of every listener
pub const RUNTIME_GUARD: &str = "if (!ModAPI.minecraft || !ModAPI.player) return;";

/// Metadata calls, one per present field.
///
/// Values go between double quotes as-is, without escaping. A non-literal
/// attribute such as `modid = Reference.MOD_ID` is emitted as the text
/// `"Reference.MOD_ID"`, not the constant's value.
pub fn render_metadata(metadata: &ModuleMetadata, buf: &mut String) {
    if let Some(id) = &metadata.id {
        buf.push_str(&format!("ModAPI.meta.title(\"{}\");\n", id));
    }
    if let Some(version) = &metadata.version {
        buf.push_str(&format!("ModAPI.meta.version(\"{}\");\n", version));
    }
    if let Some(description) = metadata.description_text() {
        buf.push_str(&format!("ModAPI.meta.description(\"{}\");\n", description));
    }
    if !metadata.is_empty() {
        buf.push('\n');
    }
}

/// One require line per detected module, in table order
pub fn render_requires(tables: &MappingTables, modules: &RequiredModules, buf: &mut String) {
    let mut any = false;
    for (id, _) in &tables.modules {
        if modules.contains(id) {
            buf.push_str(&format!("ModAPI.require('{}');\n", id));
            any = true;
        }
    }
    if any {
        buf.push('\n');
    }
}

/// A listener registration wrapping an already rewritten body
pub fn render_listener(
    category: &EventCategory,
    handler_name: &str,
    body: &str,
    buf: &mut String,
) {
    buf.push_str(&format!("ModAPI.addEventListener('{}', (event) => {{\n", category));
    buf.push_str(RUNTIME_GUARD);
    buf.push('\n');
    buf.push_str("try {\n");
    let inner = strip_outer_braces(body);
    if !inner.is_empty() {
        buf.push_str(inner);
        buf.push('\n');
    }
    buf.push_str("} catch (error) {\n");
    buf.push_str(&format!("console.error('[{}] Error:', error);\n", handler_name));
    buf.push_str("}\n");
    buf.push_str("});\n\n");
}

fn strip_outer_braces(body: &str) -> &str {
    let trimmed = body.trim();
    trimmed
        .strip_prefix('{')
        .and_then(|b| b.strip_suffix('}'))
        .unwrap_or(trimmed)
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::ModuleId;

    #[test]
    fn test_metadata_name_without_description() {
        let metadata = ModuleMetadata {
            id: Some("combathelper".to_string()),
            version: Some("2.1".to_string()),
            name: Some("Combat Helper".to_string()),
            description: None,
        };
        let mut buf = String::new();
        render_metadata(&metadata, &mut buf);
        assert_eq!(
            buf,
            "ModAPI.meta.title(\"combathelper\");\n\
             ModAPI.meta.version(\"2.1\");\n\
             ModAPI.meta.description(\"Combat Helper\");\n\n"
        );
    }

    #[test]
    fn test_metadata_only_present_fields() {
        let metadata = ModuleMetadata {
            version: Some("1.0".to_string()),
            ..Default::default()
        };
        let mut buf = String::new();
        render_metadata(&metadata, &mut buf);
        assert_eq!(buf, "ModAPI.meta.version(\"1.0\");\n\n");
    }

    #[test]
    fn test_metadata_non_literal_value_quoted_verbatim() {
        let metadata = ModuleMetadata {
            id: Some("Reference.MOD_ID".to_string()),
            ..Default::default()
        };
        let mut buf = String::new();
        render_metadata(&metadata, &mut buf);
        assert_eq!(buf, "ModAPI.meta.title(\"Reference.MOD_ID\");\n\n");
    }

    #[test]
    fn test_empty_metadata_renders_nothing() {
        let mut buf = String::new();
        render_metadata(&ModuleMetadata::default(), &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_requires_in_table_order() {
        let modules: RequiredModules = [ModuleId::Resolution, ModuleId::Player].into_iter().collect();
        let mut buf = String::new();
        render_requires(MappingTables::builtin(), &modules, &mut buf);
        assert_eq!(buf, "ModAPI.require('player');\nModAPI.require('resolution');\n\n");
    }

    #[test]
    fn test_listener_block() {
        let mut buf = String::new();
        render_listener(&EventCategory::Tick, "onTick", "{\n  ModAPI.player.jump();\n}", &mut buf);
        assert_eq!(
            buf,
            "ModAPI.addEventListener('tick', (event) => {\n\
             if (!ModAPI.minecraft || !ModAPI.player) return;\n\
             try {\n\
             ModAPI.player.jump();\n\
             } catch (error) {\n\
             console.error('[onTick] Error:', error);\n\
             }\n\
             });\n\n"
        );
    }

    #[test]
    fn test_listener_empty_body() {
        let mut buf = String::new();
        render_listener(&EventCategory::Custom("MyEvent".to_string()), "noop", "{}", &mut buf);
        assert!(buf.starts_with("ModAPI.addEventListener('custom:MyEvent', (event) => {\n"));
        assert!(buf.contains("try {\n} catch (error) {"));
    }
}
