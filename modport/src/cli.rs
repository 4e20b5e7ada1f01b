//! CLI argument parsing using clap

use std::path::PathBuf;

use clap::Parser;

/// Convert Forge mod sources into EaglerForge ModAPI scripts
#[derive(Parser, Debug)]
#[command(name = "modport")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Convert one mod, print the script
    modport src/main/java/com/example/CombatHelper.java

    # Convert a whole source tree into out/
    modport "src/**/*.java" --out-dir out

    # Convert from stdin
    cat CombatHelper.java | modport

    # Convert a list of paths read from stdin
    find src -name '*.java' | modport --paths-from-stdin

    # Inspect what was detected, as JSON
    modport CombatHelper.java -o json

    # Extend the built-in mappings
    modport CombatHelper.java --tables my-tables.toml
"#)]
pub struct Args {
    /// Files to convert (supports glob patterns like "src/**/*.java")
    #[arg()]
    pub files: Vec<String>,

    /// Write `<name>.js` files into this directory instead of stdout
    #[arg(short = 'd', long = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Output format: script (default), json
    #[arg(short = 'o', long = "output", default_value = "script")]
    pub output: String,

    /// TOML file with extra class, method, event and module mappings
    #[arg(short = 't', long = "tables")]
    pub tables: Option<PathBuf>,

    /// Treat stdin as a list of file paths rather than Java source
    #[arg(long = "paths-from-stdin")]
    pub paths_from_stdin: bool,

    /// Number of parallel workers
    #[arg(short = 'c', long = "concurrency")]
    pub concurrency: Option<usize>,

    /// Show verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
