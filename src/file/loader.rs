//! YAML file loading functionality.
//!
//! This module provides functions to load YAML streams from files, readers or
//! stdin, parsing every document into a [`YamlNode`] tree. Gzip-compressed
//! input is decompressed transparently.

use crate::document::node::YamlNode;
use crate::document::parser::parse_yaml_documents;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Loads and parses every document of a YAML file.
///
/// Files ending in `.gz` are decompressed first.
///
/// # Examples
///
/// ```no_run
/// use yit::file::loader::load_yaml_file;
///
/// let documents = load_yaml_file("config.yaml").unwrap();
/// println!("{} documents", documents.len());
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip data
/// - The contents are not valid YAML
pub fn load_yaml_file<P: AsRef<Path>>(path: P) -> Result<Vec<YamlNode>> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);
    debug!(path = %path_ref.display(), is_gzipped, "loading YAML file");

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    parse_content(&content)
}

/// Loads and parses every document read from standard input until EOF.
///
/// # Errors
///
/// Returns an error if reading stdin fails or the input is not valid YAML.
pub fn load_yaml_from_stdin() -> Result<Vec<YamlNode>> {
    load_yaml_from_reader(io::stdin().lock()).context("Failed to load YAML from stdin")
}

/// Loads and parses every document from `reader`.
///
/// Input starting with the gzip magic bytes (`0x1f 0x8b`) is decompressed
/// first.
///
/// # Examples
///
/// ```
/// use yit::file::loader::load_yaml_from_reader;
///
/// let documents = load_yaml_from_reader("a: 1\n---\nb: 2\n".as_bytes()).unwrap();
/// assert_eq!(documents.len(), 2);
/// ```
pub fn load_yaml_from_reader<R: Read>(mut reader: R) -> Result<Vec<YamlNode>> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .context("Failed to read input")?;

    let content = if buffer.starts_with(&GZIP_MAGIC) {
        debug!(bytes = buffer.len(), "input is gzip compressed");
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")?
    };

    parse_content(&content)
}

fn parse_content(content: &str) -> Result<Vec<YamlNode>> {
    let documents = parse_yaml_documents(content)?;
    debug!(documents = documents.len(), "parsed YAML stream");
    Ok(documents)
}

/// Reads and decompresses a gzipped file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file is not valid gzip format (corrupted)
/// - The decompressed content is not valid UTF-8
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::{NodeKind, TreeNode};
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::TempDir;

    fn gzip(content: &str) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_load_plain_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.yaml");
        fs::write(&path, "name: Alice\nage: 30\n").unwrap();

        let documents = load_yaml_file(&path).unwrap();
        assert_eq!(documents.len(), 1);
        let root = &documents[0].children()[0];
        assert_eq!(root.kind(), NodeKind::Mapping);
        assert_eq!(root.children().len(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_yaml_file(dir.path().join("missing.yaml"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read file"));
    }

    #[test]
    fn test_read_gzipped_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.yaml.gz");
        fs::write(&path, gzip("test: value\n")).unwrap();

        assert_eq!(read_gzipped_file(&path).unwrap(), "test: value\n");
    }

    #[test]
    fn test_read_gzipped_file_corrupted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.yaml.gz");
        fs::write(&path, b"not gzip data").unwrap();

        let err_msg = read_gzipped_file(&path).unwrap_err().to_string();
        assert!(err_msg.contains("decompress") || err_msg.contains("corrupted"));
    }

    #[test]
    fn test_load_gzipped_multi_document_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stream.yaml.gz");
        fs::write(&path, gzip("a: 1\n---\nb: 2\n---\nc: 3\n")).unwrap();

        let documents = load_yaml_file(&path).unwrap();
        assert_eq!(documents.len(), 3);
    }

    #[test]
    fn test_reader_detects_gzip_magic() {
        let documents = load_yaml_from_reader(gzip("[1, 2, 3]").as_slice()).unwrap();
        assert_eq!(documents[0].children()[0].children().len(), 3);
    }

    #[test]
    fn test_reader_rejects_invalid_utf8() {
        let result = load_yaml_from_reader(&[0xff, 0xfe, 0x00][..]);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid UTF-8"));
    }

    #[test]
    fn test_reader_rejects_invalid_yaml() {
        assert!(load_yaml_from_reader("a: [1, 2".as_bytes()).is_err());
    }
}
