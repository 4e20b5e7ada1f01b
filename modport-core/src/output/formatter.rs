//! Line-oriented formatter for assembled ModAPI scripts
//!
//! A single pass over the buffer, tracking whether we are inside a listener
//! block and the current indent level. It only understands the markers the
//! script renderer emits; anything unbalanced inside a body shifts the
//! indentation of everything after it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Opens a listener block
pub const LISTENER_OPEN_MARKER: &str = "ModAPI.addEventListener(";

/// Closes a listener block
pub const LISTENER_CLOSE_MARKER: &str = "});";

const INDENT: &str = "  ";

static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Formatter state, reset for every buffer
#[derive(Debug, Default)]
struct FormatState {
    in_listener: bool,
    indent: usize,
}

/// Re-indent and normalize blank lines in an assembled script
pub fn format_script(buffer: &str) -> String {
    let mut state = FormatState::default();
    let mut lines: Vec<String> = Vec::new();

    for raw in buffer.lines() {
        let line = raw.trim();

        if line.contains(LISTENER_OPEN_MARKER) {
            lines.push(line.to_string());
            state.in_listener = true;
            state.indent = 1;
        } else if line.contains(LISTENER_CLOSE_MARKER) {
            lines.push(LISTENER_CLOSE_MARKER.to_string());
            lines.push(String::new());
            state = FormatState::default();
        } else if line.is_empty() {
            if !state.in_listener {
                lines.push(String::new());
            }
        } else {
            let opens = line.ends_with('{');
            if opens {
                state.indent += 1;
            }
            if line.starts_with('}') {
                state.indent = state.indent.saturating_sub(1);
            }
            lines.push(format!("{}{}", INDENT.repeat(state.indent), line));
            // Second increment for the same opening brace
            if opens {
                state.indent += 1;
            }
        }
    }

    let joined = lines.join("\n");
    BLANK_RUNS.replace_all(&joined, "\n\n").trim().to_string()
}
