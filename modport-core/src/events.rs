//! Event categories and the event type resolver
//!
//! A handler's declared event type is resolved in three steps:
//! 1. exact lookup in the event table
//! 2. the first matching entry of [`EVENT_PREDICATES`]
//! 3. a synthesized `custom:<name>` category

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::tables::MappingTables;

/// Canonical ModAPI event name a source event type resolves to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Tick,
    Render,
    Load,
    ReceiveChatMessage,
    SendChatMessage,
    Frame,
    ServerStart,
    ServerStop,
    ProcessCommand,
    Bootstrap,
    /// Fallback for event types nothing else matched; holds the lowercased name
    Custom(String),
}

impl EventCategory {
    /// The fixed vocabulary, without `Custom`
    pub const KNOWN: &'static [EventCategory] = &[
        EventCategory::Tick,
        EventCategory::Render,
        EventCategory::Load,
        EventCategory::ReceiveChatMessage,
        EventCategory::SendChatMessage,
        EventCategory::Frame,
        EventCategory::ServerStart,
        EventCategory::ServerStop,
        EventCategory::ProcessCommand,
        EventCategory::Bootstrap,
    ];

    pub fn name(&self) -> &str {
        match self {
            EventCategory::Tick => "tick",
            EventCategory::Render => "render",
            EventCategory::Load => "load",
            EventCategory::ReceiveChatMessage => "receivechatmessage",
            EventCategory::SendChatMessage => "sendchatmessage",
            EventCategory::Frame => "frame",
            EventCategory::ServerStart => "serverstart",
            EventCategory::ServerStop => "serverstop",
            EventCategory::ProcessCommand => "processcommand",
            EventCategory::Bootstrap => "bootstrap",
            EventCategory::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, EventCategory::Custom(_))
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventCategory::Custom(name) => write!(f, "custom:{}", name),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(name) = s.strip_prefix("custom:") {
            return Ok(EventCategory::Custom(name.to_lowercase()));
        }
        EventCategory::KNOWN
            .iter()
            .find(|c| c.name() == s)
            .cloned()
            .ok_or_else(|| format!("unknown event category '{}'", s))
    }
}

impl Serialize for EventCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Substring heuristics, evaluated in order. First match wins, so more
/// specific needles must stay above the general ones they overlap with.
pub static EVENT_PREDICATES: &[(&str, EventCategory)] = &[
    ("RenderTick", EventCategory::Frame),
    ("RenderGameOverlay", EventCategory::Render),
    ("Render", EventCategory::Render),
    ("Overlay", EventCategory::Render),
    ("Gui", EventCategory::Render),
    ("ServerChat", EventCategory::SendChatMessage),
    ("ChatSent", EventCategory::SendChatMessage),
    ("Chat", EventCategory::ReceiveChatMessage),
    ("Command", EventCategory::ProcessCommand),
    ("ServerStart", EventCategory::ServerStart),
    ("ServerStop", EventCategory::ServerStop),
    ("PreInit", EventCategory::Bootstrap),
    ("Construction", EventCategory::Bootstrap),
    ("PostInit", EventCategory::Load),
    ("Init", EventCategory::Load),
    ("Load", EventCategory::Load),
    ("Frame", EventCategory::Frame),
    ("Tick", EventCategory::Tick),
    ("Update", EventCategory::Tick),
    ("Player", EventCategory::Tick),
    ("Living", EventCategory::Tick),
    ("Input", EventCategory::Tick),
];

/// Resolve a declared event type name to its category. Never fails.
pub fn resolve(tables: &MappingTables, event_type: &str) -> EventCategory {
    if let Some(category) = tables.event_category(event_type) {
        return category.clone();
    }

    EVENT_PREDICATES
        .iter()
        .find(|(needle, _)| event_type.contains(needle))
        .map(|(_, category)| category.clone())
        .unwrap_or_else(|| EventCategory::Custom(event_type.to_lowercase()))
}
