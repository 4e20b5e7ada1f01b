//! Mapping tables used by every conversion stage
//!
//! Tables are built once and passed around by reference. The built-in set
//! lives in [`builtin`]; a TOML overlay can extend it at startup.

pub mod builtin;

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::events::EventCategory;
use crate::modules::ModuleId;

/// Errors that can occur while loading a table overlay
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to read tables file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid tables file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Unknown module '{0}'")]
    UnknownModule(String),
    #[error("Unknown event category '{0}'")]
    UnknownCategory(String),
}

/// All lookup tables for one conversion setup
#[derive(Debug, Clone, PartialEq)]
pub struct MappingTables {
    /// Source expression → ModAPI expression, applied in order
    pub classes: Vec<(String, String)>,
    /// Method name → method name
    pub methods: Vec<(String, String)>,
    /// Event type name → category
    pub events: Vec<(String, EventCategory)>,
    /// Module → literal triggers, in emission order
    pub modules: Vec<(ModuleId, Vec<String>)>,
}

static BUILTIN: Lazy<MappingTables> = Lazy::new(MappingTables::from_builtin_data);

impl MappingTables {
    /// The built-in tables, constructed on first use
    pub fn builtin() -> &'static MappingTables {
        &BUILTIN
    }

    fn from_builtin_data() -> Self {
        MappingTables {
            classes: owned_pairs(builtin::CLASS_MAPPINGS),
            methods: owned_pairs(builtin::METHOD_MAPPINGS),
            events: builtin::EVENT_MAPPINGS
                .iter()
                .map(|(name, category)| (name.to_string(), category.clone()))
                .collect(),
            modules: builtin::MODULE_TRIGGERS
                .iter()
                .map(|(id, triggers)| (*id, triggers.iter().map(|t| t.to_string()).collect()))
                .collect(),
        }
    }

    /// Look up the category for an exact event type name
    pub fn event_category(&self, event_type: &str) -> Option<&EventCategory> {
        self.events
            .iter()
            .find(|(name, _)| name == event_type)
            .map(|(_, category)| category)
    }

    /// Return a copy of these tables with `overlay` merged in.
    ///
    /// Class and method entries go before the existing ones. Event entries
    /// shadow existing ones with the same name. Triggers extend their module.
    pub fn with_overlay(&self, overlay: TableOverlay) -> Result<MappingTables, TableError> {
        let mut tables = self.clone();

        let mut classes: Vec<_> = overlay.classes.into_iter().map(|m| (m.from, m.to)).collect();
        classes.append(&mut tables.classes);
        tables.classes = classes;

        let mut methods: Vec<_> = overlay.methods.into_iter().map(|m| (m.from, m.to)).collect();
        methods.append(&mut tables.methods);
        tables.methods = methods;

        let mut events = Vec::with_capacity(overlay.events.len());
        for entry in overlay.events {
            let category = entry
                .category
                .parse::<EventCategory>()
                .map_err(|_| TableError::UnknownCategory(entry.category.clone()))?;
            events.push((entry.name, category));
        }
        events.append(&mut tables.events);
        tables.events = events;

        for entry in overlay.modules {
            let id = entry
                .module
                .parse::<ModuleId>()
                .map_err(|_| TableError::UnknownModule(entry.module.clone()))?;
            match tables.modules.iter_mut().find(|(existing, _)| *existing == id) {
                Some((_, triggers)) => triggers.extend(entry.triggers),
                None => tables.modules.push((id, entry.triggers)),
            }
        }

        Ok(tables)
    }
}

fn owned_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

/// Extra table entries read from a TOML file:
///
/// ```toml
/// [[classes]]
/// from = "MyUtil.player()"
/// to = "ModAPI.player"
///
/// [[events]]
/// name = "MyCustomEvent"
/// category = "tick"
///
/// [[modules]]
/// module = "player"
/// triggers = ["MyUtil.player()"]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOverlay {
    pub classes: Vec<Rename>,
    pub methods: Vec<Rename>,
    pub events: Vec<EventEntry>,
    pub modules: Vec<ModuleEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventEntry {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleEntry {
    pub module: String,
    pub triggers: Vec<String>,
}

impl TableOverlay {
    pub fn from_toml_str(text: &str) -> Result<Self, TableError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, TableError> {
        let text = fs::read_to_string(path).map_err(|e| TableError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_mappings_never_shadow_later_entries() {
        let classes = &MappingTables::builtin().classes;
        for (i, (later, _)) in classes.iter().enumerate() {
            for (earlier, _) in &classes[..i] {
                assert!(
                    !later.contains(earlier.as_str()),
                    "'{}' would be corrupted by earlier entry '{}'",
                    later,
                    earlier
                );
            }
        }
    }

    #[test]
    fn test_builtin_modules_follow_enum_order() {
        let ids: Vec<_> = MappingTables::builtin().modules.iter().map(|(id, _)| *id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_event_lookup() {
        let tables = MappingTables::builtin();
        assert_eq!(tables.event_category("ServerChatEvent"), Some(&EventCategory::SendChatMessage));
        assert_eq!(tables.event_category("serverchatevent"), None);
    }

    #[test]
    fn test_overlay_merge() {
        let overlay = TableOverlay::from_toml_str(
            r#"
            [[classes]]
            from = "Helpers.player()"
            to = "ModAPI.player"

            [[methods]]
            from = "jumpNow"
            to = "jump"

            [[events]]
            name = "ServerChatEvent"
            category = "receivechatmessage"

            [[modules]]
            module = "player"
            triggers = ["Helpers.player()"]
            "#,
        )
        .unwrap();

        let tables = MappingTables::builtin().with_overlay(overlay).unwrap();
        assert_eq!(tables.classes[0].0, "Helpers.player()");
        assert_eq!(tables.classes.len(), MappingTables::builtin().classes.len() + 1);
        assert_eq!(tables.methods[0], ("jumpNow".to_string(), "jump".to_string()));
        assert_eq!(
            tables.event_category("ServerChatEvent"),
            Some(&EventCategory::ReceiveChatMessage)
        );
        let player = &tables.modules.iter().find(|(id, _)| *id == ModuleId::Player).unwrap().1;
        assert!(player.contains(&"Helpers.player()".to_string()));
        assert!(player.contains(&"thePlayer".to_string()));
    }

    #[test]
    fn test_overlay_unknown_module() {
        let overlay = TableOverlay::from_toml_str(
            "[[modules]]\nmodule = \"graphics\"\ntriggers = [\"GL11\"]\n",
        )
        .unwrap();
        let err = MappingTables::builtin().with_overlay(overlay).unwrap_err();
        assert!(matches!(err, TableError::UnknownModule(name) if name == "graphics"));
    }

    #[test]
    fn test_overlay_rejects_unknown_keys() {
        assert!(TableOverlay::from_toml_str("[[classes]]\nsource = \"a\"\nto = \"b\"\n").is_err());
    }

    #[test]
    fn test_overlay_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.toml");
        fs::write(&path, "[[events]]\nname = \"MyEvent\"\ncategory = \"custom:mine\"\n").unwrap();

        let overlay = TableOverlay::load(&path).unwrap();
        let tables = MappingTables::builtin().with_overlay(overlay).unwrap();
        assert_eq!(
            tables.event_category("MyEvent"),
            Some(&EventCategory::Custom("mine".to_string()))
        );
    }

    #[test]
    fn test_overlay_missing_file() {
        let err = TableOverlay::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }
}
