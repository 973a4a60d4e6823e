//! Output destination classification and generated-content parsing.
//!
//! The router's branching depends entirely on [`classify_destination`] and
//! [`parse_generated_files`], both pure over their inputs (classification
//! only probes the filesystem for existence), which keeps the state-dependent
//! logic unit-testable.

pub mod writer;

use std::path::{Path, PathBuf};

/// Where generated content should go, derived from the destination string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Empty destination: print to standard output.
    Stdout,
    /// Destination exists and is a directory: split content into files.
    ExistingDir(PathBuf),
    /// Destination exists and is a file: overwrite with raw content.
    ExistingFile(PathBuf),
    /// Destination does not exist yet. `trailing_sep` records whether the
    /// string is syntactically a directory path.
    NewPath { path: PathBuf, trailing_sep: bool },
}

/// Classify a destination string.
pub fn classify_destination(destination: &str) -> Destination {
    if destination.is_empty() {
        return Destination::Stdout;
    }

    let path = PathBuf::from(destination);
    if path.is_dir() {
        return Destination::ExistingDir(path);
    }
    if path.exists() {
        return Destination::ExistingFile(path);
    }

    let trailing_sep = destination.ends_with('/')
        || destination.ends_with(std::path::MAIN_SEPARATOR);
    Destination::NewPath { path, trailing_sep }
}

/// One named file parsed out of the generated content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFile {
    /// Sanitized, possibly nested, relative path.
    pub name: String,
    /// File body with surrounding whitespace trimmed.
    pub body: String,
}

/// Split generated content into named files on `---` delimiter lines.
///
/// Each segment's first trimmed line is the filename, the trimmed remainder
/// the body. Segments without a body line are malformed model output; they
/// are dropped with a warning rather than failing the whole run.
pub fn parse_generated_files(content: &str) -> Vec<ParsedFile> {
    let mut files = Vec::new();

    for segment in split_on_delimiter_lines(content) {
        let segment = segment.trim();
        let Some((first_line, rest)) = segment.split_once('\n') else {
            if !segment.is_empty() {
                tracing::warn!(
                    "Dropping generated segment without a body line: {:?}",
                    segment.lines().next().unwrap_or_default()
                );
            }
            continue;
        };

        let name = sanitize_filename(first_line.trim());
        if name.is_empty() {
            tracing::warn!("Dropping generated segment with empty filename");
            continue;
        }

        files.push(ParsedFile {
            name,
            body: rest.trim().to_string(),
        });
    }

    files
}

/// Split content into segments separated by lines whose trimmed text is
/// exactly `---`.
fn split_on_delimiter_lines(content: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for line in content.lines() {
        if line.trim() == "---" {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    segments.push(current);

    segments
}

/// Sanitize a candidate filename from model output.
///
/// Applied per path component so nested names like `b/c.txt` keep their
/// structure: characters outside `[A-Za-z0-9._-]` collapse to single
/// underscores, leading underscores are trimmed, and empty components are
/// discarded.
pub fn sanitize_filename(name: &str) -> String {
    let components: Vec<String> = name
        .split('/')
        .map(sanitize_component)
        .filter(|c| !c.is_empty())
        .collect();
    components.join("/")
}

fn sanitize_component(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    let mut last_was_underscore = false;

    for ch in component.chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-') {
            out.push(ch);
            last_was_underscore = ch == '_';
        } else if !last_was_underscore {
            out.push('_');
            last_was_underscore = true;
        }
    }

    out.trim_start_matches('_').to_string()
}

/// Join a sanitized relative name under a destination directory.
pub(crate) fn join_output_path(dir: &Path, name: &str) -> PathBuf {
    let mut path = dir.to_path_buf();
    for component in name.split('/') {
        path.push(component);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_classify_empty_is_stdout() {
        assert_eq!(classify_destination(""), Destination::Stdout);
    }

    #[test]
    fn test_classify_existing_dir_and_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("out.yaml");
        std::fs::write(&file, "x").unwrap();

        assert_eq!(
            classify_destination(&dir.path().to_string_lossy()),
            Destination::ExistingDir(dir.path().to_path_buf())
        );
        assert_eq!(
            classify_destination(&file.to_string_lossy()),
            Destination::ExistingFile(file)
        );
    }

    #[test]
    fn test_classify_new_path_trailing_separator() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("not-yet");

        let plain = classify_destination(&missing.to_string_lossy());
        assert_eq!(
            plain,
            Destination::NewPath {
                path: missing.clone(),
                trailing_sep: false
            }
        );

        let with_sep = format!("{}/", missing.to_string_lossy());
        match classify_destination(&with_sep) {
            Destination::NewPath { trailing_sep, .. } => assert!(trailing_sep),
            other => panic!("expected NewPath, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_two_files() {
        let content = "a.txt\nHELLO\n---\nb/c.txt\nWORLD\n";
        let files = parse_generated_files(content);
        assert_eq!(
            files,
            vec![
                ParsedFile {
                    name: "a.txt".to_string(),
                    body: "HELLO".to_string()
                },
                ParsedFile {
                    name: "b/c.txt".to_string(),
                    body: "WORLD".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_parse_drops_bodyless_segment() {
        let files = parse_generated_files("onlyheader\n---\nname\nbody");
        assert_eq!(
            files,
            vec![ParsedFile {
                name: "name".to_string(),
                body: "body".to_string()
            }]
        );
    }

    #[test]
    fn test_parse_multi_line_body() {
        let files = parse_generated_files("deploy.yaml\nkind: Deployment\nreplicas: 2\n");
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].body, "kind: Deployment\nreplicas: 2");
    }

    #[test]
    fn test_parse_ignores_indented_dashes() {
        // Only a line that is exactly `---` after trimming is a delimiter;
        // a YAML document with inline dashes stays in one segment.
        let files = parse_generated_files("list.yaml\nitems:\n- a\n- b\n");
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].body, "items:\n- a\n- b");
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_generated_files("").is_empty());
        assert!(parse_generated_files("\n\n---\n\n").is_empty());
    }

    #[test]
    fn test_sanitize_collapses_runs_to_single_underscore() {
        assert_eq!(sanitize_filename("my file (1).yaml"), "my_file_1_.yaml");
        assert_eq!(sanitize_filename("a.txt"), "a.txt");
    }

    #[test]
    fn test_sanitize_trims_leading_underscores() {
        assert_eq!(sanitize_filename("__hidden.yaml"), "hidden.yaml");
        assert_eq!(sanitize_filename("**bold**.md"), "bold_.md");
    }

    #[test]
    fn test_sanitize_preserves_nested_paths() {
        assert_eq!(sanitize_filename("b/c.txt"), "b/c.txt");
        assert_eq!(sanitize_filename("deep/er/file name.tf"), "deep/er/file_name.tf");
    }

    #[test]
    fn test_sanitize_drops_empty_components() {
        assert_eq!(sanitize_filename("/abs/path.txt"), "abs/path.txt");
        assert_eq!(sanitize_filename("a//b.txt"), "a/b.txt");
    }
}
