//! Handler body rewriting
//!
//! A body goes through four passes, in this order:
//! 1. class/expression substitution from [`MappingTables::classes`]
//! 2. method renames from [`MappingTables::methods`]
//! 3. [`rules::SPECIAL_CASE_RULES`]
//! 4. [`rules::SYNTAX_RULES`]
//!
//! Every rule sees the output of the one before it, so the order of each
//! list is part of its behavior.

pub mod rules;

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use crate::tables::MappingTables;

/// How a rule matches and what it puts in place of each match
#[derive(Clone, Copy)]
pub enum RuleKind {
    /// Plain substring replaced by plain text
    Literal { from: &'static str, to: &'static str },
    /// Regular expression replaced by a `${n}` template
    Pattern { pattern: &'static str, template: &'static str },
    /// Regular expression replaced by text computed from its captures
    Computed { pattern: &'static str, compute: fn(&Captures) -> String },
}

/// A named rewrite rule
#[derive(Clone, Copy)]
pub struct RewriteRule {
    pub name: &'static str,
    pub kind: RuleKind,
}

impl fmt::Debug for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (matcher, replacement) = match self.kind {
            RuleKind::Literal { from, to } => (from, to),
            RuleKind::Pattern { pattern, template } => (pattern, template),
            RuleKind::Computed { pattern, .. } => (pattern, "<computed>"),
        };
        f.debug_struct("RewriteRule")
            .field("name", &self.name)
            .field("matcher", &matcher)
            .field("replacement", &replacement)
            .finish()
    }
}

impl RewriteRule {
    pub const fn literal(name: &'static str, from: &'static str, to: &'static str) -> Self {
        RewriteRule { name, kind: RuleKind::Literal { from, to } }
    }

    pub const fn pattern(name: &'static str, pattern: &'static str, template: &'static str) -> Self {
        RewriteRule { name, kind: RuleKind::Pattern { pattern, template } }
    }

    pub const fn computed(
        name: &'static str,
        pattern: &'static str,
        compute: fn(&Captures) -> String,
    ) -> Self {
        RewriteRule { name, kind: RuleKind::Computed { pattern, compute } }
    }
}

struct CompiledRule {
    rule: &'static RewriteRule,
    regex: Option<Regex>,
}

/// An ordered list of rules with their patterns compiled
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    pub fn compile(rules: &'static [RewriteRule]) -> Result<Self, regex::Error> {
        let rules = rules
            .iter()
            .map(|rule| {
                let regex = match rule.kind {
                    RuleKind::Literal { .. } => None,
                    RuleKind::Pattern { pattern, .. } | RuleKind::Computed { pattern, .. } => {
                        Some(Regex::new(pattern)?)
                    }
                };
                Ok(CompiledRule { rule, regex })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(RuleSet { rules })
    }

    /// Rule names in evaluation order
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.rule.name).collect()
    }

    /// Run every rule over `text`, each on the previous rule's output
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();

        for compiled in &self.rules {
            current = match (compiled.rule.kind, &compiled.regex) {
                (RuleKind::Literal { from, to }, _) => {
                    if current.contains(from) {
                        current.replace(from, to)
                    } else {
                        current
                    }
                }
                (RuleKind::Pattern { template, .. }, Some(re)) => {
                    re.replace_all(&current, template).into_owned()
                }
                (RuleKind::Computed { compute, .. }, Some(re)) => {
                    re.replace_all(&current, |caps: &Captures| compute(caps)).into_owned()
                }
                // compile() gives every pattern rule a regex
                (_, None) => current,
            };
        }

        current
    }
}

static SPECIAL_CASES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::compile(rules::SPECIAL_CASE_RULES).expect("special-case rules must compile")
});

static SYNTAX: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::compile(rules::SYNTAX_RULES).expect("syntax rules must compile")
});

/// Rewrite a handler body into ModAPI script.
///
/// `handler_name` is only used for diagnostics.
pub fn rewrite_body(tables: &MappingTables, body: &str, handler_name: &str) -> String {
    let mut text = body.to_string();

    for (from, to) in &tables.classes {
        if text.contains(from.as_str()) {
            text = text.replace(from.as_str(), to);
        }
    }

    for (from, to) in &tables.methods {
        let call = format!(".{}(", from);
        if text.contains(&call) {
            text = text.replace(&call, &format!(".{}(", to));
        }
    }

    let text = SPECIAL_CASES.apply(&text);
    let text = SYNTAX.apply(&text);

    debug!(handler = handler_name, bytes = text.len(), "rewrote handler body");
    text
}
