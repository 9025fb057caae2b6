mod ids;
mod media;
mod modes;

pub use ids::EntryId;
pub use media::{MediaEntry, MediaKind, SourceLocator};
pub use modes::{ImageFormat, RecordingFormat, RepeatMode, VideoQuality};
