//! Required-module detection
//!
//! ModAPI only exposes some globals (`ModAPI.player`, `ModAPI.world`, ...)
//! after `ModAPI.require('<module>')`. Detection is a plain substring scan of
//! the whole, unmodified source: a trigger inside a comment or an unused
//! field still counts.

use std::collections::BTreeSet;

use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::tables::MappingTables;

/// Capability modules that can be requested from ModAPI
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Display, EnumString, IntoStaticStr, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    Player,
    World,
    Network,
    Resolution,
    Settings,
    Server,
}

/// Deduplicated set of detected modules
pub type RequiredModules = BTreeSet<ModuleId>;

/// Scan `source` for every module's trigger substrings
pub fn detect(tables: &MappingTables, source: &str) -> RequiredModules {
    tables
        .modules
        .iter()
        .filter(|(_, triggers)| triggers.iter().any(|t| source.contains(t.as_str())))
        .map(|(id, _)| *id)
        .collect()
}
