//! Built-in rewrite rules
//!
//! Both lists run top to bottom. Later rules are written against the output
//! of earlier ones (and of the class/method table passes), so moving a rule
//! changes what it sees.

use regex::Captures;

use super::RewriteRule;

/// Forge idioms with a direct ModAPI counterpart.
///
/// These run after the table passes, so they match `ModAPI.player` rather
/// than `mc.thePlayer`, and `addChatMessage` rather than
/// `addChatComponentMessage`.
pub static SPECIAL_CASE_RULES: &[RewriteRule] = &[
    RewriteRule::literal("cancel-event", "event.setCanceled(true)", "event.preventDefault = true"),
    RewriteRule::literal("uncancel-event", "event.setCanceled(false)", "event.preventDefault = false"),
    RewriteRule::literal("is-canceled", "event.isCanceled()", "event.preventDefault"),
    // No output line may contain "});", which closes a listener block
    RewriteRule::pattern(
        "chat-to-player",
        r"ModAPI\.player\.addChatMessage\(\s*new\s+ChatComponentText\((.*)\)\s*\)\s*;",
        "ModAPI.displayToChat(ModAPI.util.str(${1}));",
    ),
    RewriteRule::literal("chat-component", "new ChatComponentText(", "ModAPI.util.str("),
    // new KeyBinding(description, keyCode, category) → register(description, category, keyCode)
    RewriteRule::pattern(
        "key-binding",
        r"new\s+KeyBinding\(\s*([^,()]+?)\s*,\s*([^,()]+?)\s*,\s*([^,()]+?)\s*\)",
        "ModAPI.keybinds.register(${1}, ${3}, ${2})",
    ),
    RewriteRule::literal(
        "enable-lighting",
        "RenderHelper.enableStandardItemLighting()",
        "ModAPI.render.enableLighting()",
    ),
    RewriteRule::literal(
        "disable-lighting",
        "RenderHelper.disableStandardItemLighting()",
        "ModAPI.render.disableLighting()",
    ),
    RewriteRule::literal("push-matrix", "GlStateManager.pushMatrix()", "ModAPI.render.pushMatrix()"),
    RewriteRule::literal("pop-matrix", "GlStateManager.popMatrix()", "ModAPI.render.popMatrix()"),
    RewriteRule::literal("console-out", "System.out.println(", "console.log("),
    RewriteRule::literal("console-err", "System.err.println(", "console.error("),
];

/// Java → JavaScript syntax normalization
pub static SYNTAX_RULES: &[RewriteRule] = &[
    // Declarations
    RewriteRule::pattern(
        "enhanced-for",
        r"for\s*\(\s*(?:final\s+)?[\w$.]+(?:<[^<>;]*>)?(?:\[\])*\s+([\w$]+)\s*:",
        "for (let ${1} of",
    ),
    RewriteRule::pattern(
        "typed-local-init",
        r"\b(?:final\s+)?(?:int|long|short|byte|float|double|boolean|char|var|[A-Z][\w$]*(?:\.[A-Z][\w$]*)*(?:<[^<>;=]*>)?)(?:\[\])*\s+([a-z_$][\w$]*)\s*=([^=])",
        "let ${1} =${2}",
    ),
    RewriteRule::pattern(
        "typed-local-bare",
        r"\b(?:final\s+)?(?:int|long|short|byte|float|double|boolean|char|[A-Z][\w$]*(?:<[^<>;=]*>)?)(?:\[\])*\s+([a-z_$][\w$]*)\s*;",
        "let ${1};",
    ),
    RewriteRule::pattern("final-modifier", r"\bfinal\s+", ""),
    // Null comparisons. Equality must run first: "!== null" contains "== null".
    RewriteRule::literal("strict-null-equality", "== null", "=== null"),
    RewriteRule::literal("strict-null-inequality", "!= null", "!== null"),
    // Casts
    RewriteRule::pattern(
        "integer-cast",
        r"\((?:int|long|short|byte)\)\s*(\([^()]*\)|[\w$.]+(?:\([^()]*\))?)",
        "Math.floor(${1})",
    ),
    RewriteRule::pattern("float-cast", r"\((?:float|double)\)\s*", ""),
    RewriteRule::pattern(
        "reference-cast",
        r"([=(,]\s*|\breturn\s+)\([A-Z][\w$]*\)\s*([\w$(])",
        "${1}${2}",
    ),
    // Collections
    RewriteRule::literal("collection-size", ".size()", ".$size()"),
    RewriteRule::literal("collection-is-empty", ".isEmpty()", ".$isEmpty()"),
    RewriteRule::literal("collection-get", ".get(", ".$get("),
    RewriteRule::literal("collection-contains", ".contains(", ".$contains("),
    // Strings
    RewriteRule::computed("single-quoted-strings", r#""((?:[^"\\\n]|\\.)*)""#, single_quote),
    // Type checks
    RewriteRule::pattern(
        "instanceof-check",
        r"([\w$.]+(?:\(\))?)\s+instanceof\s+([\w$.]+)",
        "(${1}.getClass() === ModAPI.reflect.getClassByName('${2}'))",
    ),
    // Whitespace and braces
    RewriteRule::pattern("lambda-arrow", r"\s*->\s*", " => "),
    RewriteRule::pattern("collapse-spaces", r"[ \t]{2,}", " "),
    RewriteRule::pattern("trailing-space", r"(?m)[ \t]+$", ""),
    RewriteRule::pattern("space-before-semicolon", r"[ \t]+;", ";"),
    RewriteRule::pattern("paren-brace", r"\)\s*\{", ") {"),
    RewriteRule::pattern("else-brace", r"\belse\s*\{", "else {"),
    RewriteRule::pattern("brace-else", r"\}\s*else\b", "} else"),
    RewriteRule::pattern("empty-block", r"\{\s+\}", "{}"),
];

/// Re-quote a double-quoted Java string literal with single quotes
fn single_quote(caps: &Captures) -> String {
    let inner = &caps[1];
    let mut out = String::with_capacity(inner.len() + 2);
    out.push('\'');

    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('"') => out.push('"'),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            },
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }

    out.push('\'');
    out
}
