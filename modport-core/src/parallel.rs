//! Parallel file conversion using Rayon

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::converter::{ConvertError, Converter};
use crate::output::ConversionReport;
use crate::tables::MappingTables;

/// Outcome of converting one file
#[derive(Debug)]
pub struct FileConversion {
    pub path: String,
    pub result: Result<ConversionReport, ConvertError>,
}

/// Read and convert a single file with its own converter
pub fn convert_file(path: &Path, tables: &MappingTables) -> Result<ConversionReport, ConvertError> {
    let source = fs::read_to_string(path).map_err(|e| ConvertError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "converting file");
    Converter::with_tables(tables).analyze(&source)
}

/// Convert multiple files in parallel. Results keep the input order.
pub fn convert_files_parallel<P: AsRef<Path> + Sync>(
    files: &[P],
    tables: &MappingTables,
    concurrency: Option<usize>,
) -> Vec<FileConversion> {
    // Configure thread pool
    if let Some(num_threads) = concurrency {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if pool already initialized
    }

    files
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            FileConversion {
                path: path.display().to_string(),
                result: convert_file(path, tables),
            }
        })
        .collect()
}

/// Expand glob patterns to file paths
pub fn expand_globs(patterns: &[String]) -> Vec<String> {
    let mut files = Vec::new();

    for pattern in patterns {
        if pattern.contains('*') || pattern.contains('?') {
            match glob::glob(pattern) {
                Ok(paths) => {
                    for entry in paths.flatten() {
                        if entry.is_file() {
                            if let Some(path) = entry.to_str() {
                                files.push(path.to_string());
                            }
                        }
                    }
                }
                Err(e) => {
                    warn!(pattern = %pattern, error = %e, "invalid glob pattern");
                }
            }
        } else {
            // Not a glob, use as-is
            files.push(pattern.clone());
        }
    }

    files
}

/// Keep only `.java` sources
pub fn filter_java_files(files: Vec<String>) -> Vec<String> {
    files
        .into_iter()
        .filter(|f| {
            Path::new(f)
                .extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("java"))
        })
        .collect()
}

/// Output path for a converted file: `<stem>.js` inside `out_dir`
pub fn script_path(input: &Path, out_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());
    out_dir.join(format!("{}.js", stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_globs_non_glob() {
        let patterns = vec!["Mod.java".to_string()];
        let files = expand_globs(&patterns);
        assert_eq!(files, vec!["Mod.java"]);
    }

    #[test]
    fn test_expand_globs_pattern() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("A.java"), "class A {}").unwrap();
        fs::write(dir.path().join("B.java"), "class B {}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let pattern = format!("{}/*.java", dir.path().display());
        let mut files = expand_globs(&[pattern]);
        files.sort();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("A.java"));
        assert!(files[1].ends_with("B.java"));
    }

    #[test]
    fn test_filter_java_files() {
        let files = vec![
            "Mod.java".to_string(),
            "Other.JAVA".to_string(),
            "mod.js".to_string(),
            "readme.md".to_string(),
        ];
        let filtered = filter_java_files(files);
        assert_eq!(filtered, vec!["Mod.java", "Other.JAVA"]);
    }

    #[test]
    fn test_script_path() {
        assert_eq!(
            script_path(Path::new("src/CombatHelper.java"), Path::new("out")),
            PathBuf::from("out/CombatHelper.js")
        );
    }

    #[test]
    fn test_files_do_not_share_modules() {
        let dir = tempfile::tempdir().unwrap();
        let player = dir.path().join("P.java");
        let world = dir.path().join("W.java");
        fs::write(&player, "class P { Object p = mc.thePlayer; }").unwrap();
        fs::write(&world, "class W { Object w = mc.theWorld; }").unwrap();

        let results = convert_files_parallel(&[&player, &world], MappingTables::builtin(), None);
        assert_eq!(results.len(), 2);

        let first = results[0].result.as_ref().unwrap();
        let second = results[1].result.as_ref().unwrap();
        assert_eq!(first.script, "ModAPI.require('player');");
        assert_eq!(second.script, "ModAPI.require('world');");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let results = convert_files_parallel(
            &["/definitely/not/here/Mod.java"],
            MappingTables::builtin(),
            None,
        );
        assert!(matches!(results[0].result, Err(ConvertError::Io { .. })));
    }
}
