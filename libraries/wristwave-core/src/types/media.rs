//! Media catalog entry types

use crate::types::EntryId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of media an entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Audio track selected from storage
    Music,

    /// Video file
    Video,

    /// Still image
    Image,

    /// Microphone capture produced in-app
    Recording,
}

/// Opaque resource locator handed to the platform transport
///
/// The core never inspects the locator; it only passes it to collaborators
/// (transport load, image render, recorder sink).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceLocator(String);

impl SourceLocator {
    /// Wrap a platform resource locator
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single item in a playlist
///
/// Created when the user picks a file or finishes a recording.
/// Immutable once created; destroyed only by removal from a playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaEntry {
    /// Unique entry identifier
    pub id: EntryId,

    /// What the entry contains
    pub kind: MediaKind,

    /// Best-effort human-readable name
    pub display_name: String,

    /// Opaque resource locator for collaborators
    pub locator: SourceLocator,
}

impl MediaEntry {
    /// Create a new entry with a generated ID
    pub fn new(kind: MediaKind, display_name: impl Into<String>, locator: SourceLocator) -> Self {
        Self {
            id: EntryId::generate(),
            kind,
            display_name: display_name.into(),
            locator,
        }
    }
}
