//! Loading of example and ruleset files.
//!
//! Examples are raw file contents fed to the prompt builder as few-shot
//! context. Rulesets are the same, except each file's content is prefixed
//! with a `Filename:` header so the model can reference the rule's origin.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::utils::error::ExgenError;

/// Recursively collect every regular file under `root`, in path order.
///
/// All ignore-file handling is disabled: the loader must see every file the
/// user pointed it at, including hidden and gitignored ones.
fn walk_files(root: &Path) -> Result<Vec<PathBuf>, ExgenError> {
    let mut files = Vec::new();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    for result in walker {
        let entry = result.map_err(|e| {
            ExgenError::FileSystem(std::io::Error::other(format!(
                "failed to walk directory {}: {}",
                root.display(),
                e
            )))
        })?;
        if entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}

/// Load all files under a directory as raw strings.
///
/// A non-empty `extensions` list restricts loading to matching files
/// (case-insensitive, entries normalized to a leading dot). An empty list
/// loads everything.
pub fn load_directory(dir: &Path, extensions: &[String]) -> Result<Vec<String>, ExgenError> {
    let normalized = normalize_extensions(extensions);
    let mut examples = Vec::new();

    for path in walk_files(dir)? {
        if !normalized.is_empty() && !has_allowed_extension(&path, &normalized) {
            continue;
        }
        let content = std::fs::read_to_string(&path).map_err(|e| ExgenError::read_failed(&path, e))?;
        examples.push(content);
    }

    Ok(examples)
}

/// Load the content of explicitly listed file paths.
///
/// Any single read failure aborts the whole call; no partial results.
pub fn load_files(paths: &[String]) -> Result<Vec<String>, ExgenError> {
    let mut examples = Vec::with_capacity(paths.len());

    for path in paths {
        let path = Path::new(path);
        let content = std::fs::read_to_string(path).map_err(|e| ExgenError::read_failed(path, e))?;
        examples.push(content);
    }

    Ok(examples)
}

/// Load ruleset files from a directory, prefixing each with a
/// `Filename: <base name>` header line.
///
/// A non-existent directory is "not configured" rather than misconfigured:
/// it returns an empty list with no error.
pub fn load_rulesets_if_exists(dir: &str) -> Result<Vec<String>, ExgenError> {
    let path = Path::new(dir);
    if dir.is_empty() || !path.exists() {
        tracing::debug!("Ruleset directory not present, skipping: {}", dir);
        return Ok(Vec::new());
    }

    let mut rulesets = Vec::new();
    for file in walk_files(path)? {
        let content = std::fs::read_to_string(&file).map_err(|e| ExgenError::read_failed(&file, e))?;
        let base = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        rulesets.push(format!("Filename: {}\n{}", base, content));
    }

    Ok(rulesets)
}

/// Remove exact duplicate strings, preserving first-seen order.
pub fn deduplicate(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(items.len());

    for item in items {
        if seen.insert(item.clone()) {
            result.push(item);
        }
    }

    result
}

/// Split a comma-separated path list, trimming whitespace and dropping
/// empty entries.
pub fn split_paths(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated extension list, trimming whitespace and dropping
/// empty entries. Entries keep their user-supplied form; normalization
/// happens at match time.
pub fn split_extensions(csv: &str) -> Vec<String> {
    split_paths(csv)
}

/// Normalize extensions to lowercase with a leading dot.
fn normalize_extensions(extensions: &[String]) -> HashSet<String> {
    extensions
        .iter()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .map(|e| {
            if e.starts_with('.') {
                e
            } else {
                format!(".{}", e)
            }
        })
        .collect()
}

fn has_allowed_extension(path: &Path, normalized: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| normalized.contains(&format!(".{}", e.to_lowercase())))
        .unwrap_or(false)
}
