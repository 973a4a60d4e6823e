//! File writing for generated content.
//!
//! Routes content to stdout, a single file, or a directory tree based on the
//! classified destination. Writes are not transactional: a failure aborts the
//! run but files written before it stay on disk.

use std::path::{Path, PathBuf};

use crate::output::{
    Destination, ParsedFile, classify_destination, join_output_path, parse_generated_files,
};
use crate::utils::error::ExgenError;

/// Write generated content to the destination.
///
/// Returns the paths written (empty for stdout).
pub fn write_output(destination: &str, content: &str) -> Result<Vec<PathBuf>, ExgenError> {
    match classify_destination(destination) {
        Destination::Stdout => {
            println!("{}", content);
            Ok(Vec::new())
        }
        Destination::ExistingDir(dir) => {
            let files = parse_generated_files(content);
            write_parsed_files(&dir, &files)
        }
        Destination::ExistingFile(path) => write_single_file(&path, content),
        Destination::NewPath { path, trailing_sep } => {
            let files = parse_generated_files(content);
            if trailing_sep || files.len() > 1 {
                std::fs::create_dir_all(&path).map_err(|e| {
                    ExgenError::FileSystem(std::io::Error::new(
                        e.kind(),
                        format!("failed to create directory {}: {}", path.display(), e),
                    ))
                })?;
                write_parsed_files(&path, &files)
            } else {
                write_single_file(&path, content)
            }
        }
    }
}

/// Write each parsed file under the destination directory, creating
/// intermediate directories as needed.
fn write_parsed_files(dir: &Path, files: &[ParsedFile]) -> Result<Vec<PathBuf>, ExgenError> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let full_path = join_output_path(dir, &file.name);
        create_parent_dirs(&full_path)?;
        std::fs::write(&full_path, &file.body).map_err(|e| {
            ExgenError::FileSystem(std::io::Error::new(
                e.kind(),
                format!("failed to write file {}: {}", full_path.display(), e),
            ))
        })?;
        tracing::info!("Wrote {} to {}", file.name, full_path.display());
        written.push(full_path);
    }

    Ok(written)
}

/// Write the raw, unparsed content as one file, creating missing parents.
fn write_single_file(path: &Path, content: &str) -> Result<Vec<PathBuf>, ExgenError> {
    create_parent_dirs(path)?;
    std::fs::write(path, content).map_err(|e| {
        ExgenError::FileSystem(std::io::Error::new(
            e.kind(),
            format!("failed to write file {}: {}", path.display(), e),
        ))
    })?;
    tracing::info!("Result written to {}", path.display());
    Ok(vec![path.to_path_buf()])
}

fn create_parent_dirs(path: &Path) -> Result<(), ExgenError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ExgenError::FileSystem(std::io::Error::new(
                    e.kind(),
                    format!("failed to create directory {}: {}", parent.display(), e),
                ))
            })?;
        }
    }
    Ok(())
}
