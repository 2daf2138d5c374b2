//! # Collaborators
//!
//! The two external collaborators the orchestrator depends on: a content
//! source and an id generator. Both are traits so tests can inject an
//! in-memory source and a deterministic id sequence, while production
//! uses the filesystem and UUID v4.

use std::fs;
use std::io;
use std::path::Path;

use uuid::Uuid;

// =============================================================================
// Content Source
// =============================================================================

/// Supplies raw cart content for a path.
///
/// The orchestrator reads content exactly once per parse. Failures
/// propagate as-is; the orchestrator wraps them with the offending path.
pub trait ContentSource {
    /// Reads the full content at `path` as UTF-8 text.
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Filesystem-backed content source (the production collaborator).
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl ContentSource for FsSource {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

// =============================================================================
// Id Generator
// =============================================================================

/// Supplies a freshly generated opaque id, unique per call.
///
/// The format is unspecified beyond uniqueness; consumers must treat the
/// id as opaque.
pub trait IdGenerator {
    /// Returns a new unique id.
    fn next_id(&self) -> String;
}

/// UUID v4 id generator (the production collaborator).
///
/// ## Why UUID v4?
/// Globally unique without coordination, so repeated parses of the same
/// file never collide.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
