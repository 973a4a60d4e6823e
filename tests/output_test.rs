//! Integration tests for output routing.

use exgen::output::writer::write_output;
use tempfile::TempDir;

/// Empty destination prints to stdout and creates no file.
#[test]
fn test_stdout_destination_creates_no_files() {
    let written = write_output("", "hello").unwrap();
    assert!(written.is_empty());
}

/// An existing directory receives one file per parsed segment, with nested
/// paths creating intermediate directories.
#[test]
fn test_existing_directory_gets_split_files() {
    let dir = TempDir::new().unwrap();

    let content = "a.txt\nHELLO\n---\nb/c.txt\nWORLD\n";
    let written = write_output(&dir.path().to_string_lossy(), content).unwrap();
    assert_eq!(written.len(), 2);

    assert_eq!(
        std::fs::read_to_string(dir.path().join("a.txt")).unwrap(),
        "HELLO"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("b/c.txt")).unwrap(),
        "WORLD"
    );
}

/// A non-existent path without a trailing separator and single-file content
/// is written as one raw file, creating parent directories.
#[test]
fn test_new_single_file_destination() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("nested/file.txt");

    let content = "file content";
    let written = write_output(&target.to_string_lossy(), content).unwrap();
    assert_eq!(written, vec![target.clone()]);
    assert_eq!(std::fs::read_to_string(&target).unwrap(), content);
}

/// A non-existent path with a trailing separator is treated as a directory
/// even for single-file content.
#[test]
fn test_new_path_with_trailing_separator_is_directory() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("outdir");

    let content = "result.yaml\nkind: Pod\n";
    let written = write_output(&format!("{}/", target.to_string_lossy()), content).unwrap();

    assert!(target.is_dir());
    assert_eq!(written.len(), 1);
    assert_eq!(
        std::fs::read_to_string(target.join("result.yaml")).unwrap(),
        "kind: Pod"
    );
}

/// An existing file destination receives the raw combined content even when
/// the content would parse into multiple files.
#[test]
fn test_existing_file_gets_raw_combined_content() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("combined.yaml");
    std::fs::write(&target, "stale").unwrap();

    let content = "a.txt\nHELLO\n---\nb.txt\nWORLD\n";
    write_output(&target.to_string_lossy(), content).unwrap();
    assert_eq!(std::fs::read_to_string(&target).unwrap(), content);
}

/// Hostile characters in generated filenames are sanitized before writing.
#[test]
fn test_generated_filenames_are_sanitized() {
    let dir = TempDir::new().unwrap();

    let content = "my config (final).yaml\nkind: Pod\n---\nplain.yaml\nkind: Service\n";
    let written = write_output(&dir.path().to_string_lossy(), content).unwrap();
    assert_eq!(written.len(), 2);
    assert!(dir.path().join("my_config_final_.yaml").exists());
    assert!(dir.path().join("plain.yaml").exists());
}

/// Segments without a body line are dropped, not written and not fatal.
#[test]
fn test_bodyless_segments_are_dropped() {
    let dir = TempDir::new().unwrap();

    let content = "onlyheader\n---\nname.txt\nbody\n";
    let written = write_output(&dir.path().to_string_lossy(), content).unwrap();
    assert_eq!(written.len(), 1);
    assert!(dir.path().join("name.txt").exists());
    assert!(!dir.path().join("onlyheader").exists());
}
