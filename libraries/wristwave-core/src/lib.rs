//! WristWave Core
//!
//! Platform-agnostic domain types, collaborator traits, and error handling
//! for the WristWave playback core.
//!
//! This crate defines:
//! - **Domain Types**: `MediaEntry`, `MediaKind`, `EntryId`, `SourceLocator`
//! - **Mode Enums**: `RepeatMode`, `ImageFormat`, `VideoQuality`,
//!   `RecordingFormat` — closed variants with validated string boundaries
//! - **Collaborator Traits**: `MediaPicker`, `ImageRenderer`
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use wristwave_core::types::{MediaEntry, MediaKind, SourceLocator};
//!
//! let entry = MediaEntry::new(
//!     MediaKind::Music,
//!     "My Song",
//!     SourceLocator::new("content://media/audio/42"),
//! );
//! assert_eq!(entry.kind, MediaKind::Music);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use traits::{ImageRenderer, MediaPicker, PickedFile};
pub use types::{
    EntryId, ImageFormat, MediaEntry, MediaKind, RecordingFormat, RepeatMode, SourceLocator,
    VideoQuality,
};
