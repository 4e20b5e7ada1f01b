//! modport - Forge mod to EaglerForge ModAPI converter
//!
//! This is the main CLI entry point: it collects inputs, converts them in
//! parallel and writes scripts or JSON reports.

mod cli;

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use modport_core::{
    convert_files_parallel, expand_globs, filter_java_files, reports_to_json, script_path,
    ConversionReport, Converter, FileReport, MappingTables, OutputFormat, TableOverlay,
};

use cli::Args;

/// Split a slice into exponentially growing batches, capped at a maximum.
/// Batch sizes: n, 2n, 4n, 8n, 8n, 8n... (where n = num_threads)
fn exponential_batches<T>(items: &[T], num_threads: usize) -> Vec<&[T]> {
    let mut batches = Vec::new();
    let mut start = 0;
    let mut batch_size = num_threads.max(1);
    let max_batch_size = num_threads.max(1) * 8;

    while start < items.len() {
        let end = (start + batch_size).min(items.len());
        batches.push(&items[start..end]);
        start = end;
        batch_size = (batch_size * 2).min(max_batch_size);
    }

    batches
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            eprintln!("error: {} file(s) failed to convert", failed);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout only carries scripts and reports
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn load_tables(path: Option<&Path>) -> Result<Option<MappingTables>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let overlay = TableOverlay::load(path)
        .with_context(|| format!("loading tables from {}", path.display()))?;
    let tables = MappingTables::builtin()
        .with_overlay(overlay)
        .with_context(|| format!("merging tables from {}", path.display()))?;
    info!(path = %path.display(), "loaded table overlay");
    Ok(Some(tables))
}

/// Where converted output goes
struct Sink<'a> {
    format: OutputFormat,
    out_dir: Option<&'a Path>,
    /// Print a `// <path>` line before each script on stdout
    label_scripts: bool,
}

impl Sink<'_> {
    fn emit_script(&self, path: &str, script: &str, out: &mut impl Write) -> Result<()> {
        match self.out_dir {
            Some(dir) => {
                let target = script_path(Path::new(path), dir);
                fs::write(&target, format!("{}\n", script))
                    .with_context(|| format!("writing {}", target.display()))?;
                info!(input = %path, output = %target.display(), "wrote script");
            }
            None => {
                if self.label_scripts {
                    writeln!(out, "// {}", path)?;
                }
                writeln!(out, "{}", script)?;
            }
        }
        Ok(())
    }
}

/// Returns the number of inputs that failed to convert
fn run(args: Args) -> Result<usize> {
    let format = OutputFormat::from_str(&args.output).with_context(|| {
        format!(
            "invalid format '{}'. Valid formats: {}",
            args.output,
            OutputFormat::valid_formats().join(", ")
        )
    })?;

    let overlay_tables = load_tables(args.tables.as_deref())?;
    let tables = overlay_tables.as_ref().unwrap_or_else(|| MappingTables::builtin());

    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    // Collect files
    let mut files: Vec<String> = expand_globs(&args.files);

    // Handle stdin input modes
    let stdin_piped = !atty::is(atty::Stream::Stdin);
    let stdin_source = files.is_empty() && stdin_piped && !args.paths_from_stdin;
    let stdin_files = files.is_empty() && stdin_piped && args.paths_from_stdin;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if stdin_source {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).context("reading stdin")?;
        let report = Converter::with_tables(tables)
            .analyze(&source)
            .context("<stdin>")?;
        let sink = Sink { format, out_dir: args.out_dir.as_deref(), label_scripts: false };
        match format {
            OutputFormat::Script => sink.emit_script("stdin", &report.script, &mut out)?,
            OutputFormat::Json => {
                let reports = [FileReport { file: "<stdin>", report: &report }];
                writeln!(out, "{}", reports_to_json(&reports))?;
            }
        }
        return Ok(0);
    }

    if stdin_files {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let path = line.context("reading paths from stdin")?;
            let path = path.trim();
            if !path.is_empty() {
                files.push(path.to_string());
            }
        }
    }

    files = filter_java_files(files);

    if files.is_empty() {
        eprintln!("Usage: modport <files...> [OPTIONS]");
        eprintln!("   or: cat Mod.java | modport");
        eprintln!("   or: find src -name '*.java' | modport --paths-from-stdin");
        eprintln!("\nUse --help for more information.");
        bail!("no input files");
    }

    let concurrency = args.concurrency.unwrap_or_else(num_cpus::get);
    debug!(files = files.len(), concurrency, "converting");

    let sink = Sink {
        format,
        out_dir: args.out_dir.as_deref(),
        label_scripts: files.len() > 1,
    };
    let mut failed = 0usize;
    let mut collected: Vec<(String, ConversionReport)> = Vec::new();

    // Stream results batch by batch, keeping input order
    for batch in exponential_batches(&files, concurrency) {
        for conversion in convert_files_parallel(batch, tables, Some(concurrency)) {
            match conversion.result {
                Ok(report) => match sink.format {
                    OutputFormat::Script => {
                        sink.emit_script(&conversion.path, &report.script, &mut out)?
                    }
                    OutputFormat::Json => collected.push((conversion.path, report)),
                },
                Err(e) => {
                    error!(file = %conversion.path, "{}", e);
                    failed += 1;
                }
            }
        }
        out.flush()?;
    }

    if matches!(sink.format, OutputFormat::Json) {
        let reports: Vec<FileReport> = collected
            .iter()
            .map(|(file, report)| FileReport { file, report })
            .collect();
        writeln!(out, "{}", reports_to_json(&reports))?;
    }

    Ok(failed)
}
