//! File I/O for YAML streams.
//!
//! Documents are loaded from disk (optionally gzip-compressed) or stdin.

pub mod loader;
