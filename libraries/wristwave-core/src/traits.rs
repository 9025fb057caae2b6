//! Collaborator traits implemented by the embedding platform
//!
//! These cover the non-playback seams: picking files and rendering images.
//! Playback- and capture-specific seams (`Transport`, `Recorder`) live in
//! `wristwave-playback` next to the state machines that drive them.

use crate::error::Result;
use crate::types::{MediaEntry, MediaKind, SourceLocator};

/// A file chosen by the user through the platform picker
#[derive(Debug, Clone)]
pub struct PickedFile {
    /// Opaque locator with persistent read access already granted
    pub locator: SourceLocator,

    /// Best-effort display name resolved by the platform
    pub display_name: Option<String>,
}

/// Platform file picker
///
/// Supplies opaque locators plus best-effort display names. Granting
/// persistent read access is the platform's concern.
pub trait MediaPicker {
    /// Let the user pick zero or more files of the given kind
    fn pick(&mut self, kind: MediaKind) -> Result<Vec<PickedFile>>;
}

/// Single-shot image renderer
///
/// Image viewing has no state machine: one render call per navigation,
/// with a placeholder shown when the source cannot be decoded.
pub trait ImageRenderer {
    /// Render the image at `locator`
    fn render(&mut self, locator: &SourceLocator) -> Result<()>;

    /// Show the fallback placeholder
    fn render_placeholder(&mut self);

    /// Render the image, falling back to the placeholder on failure
    ///
    /// Returns the render error for diagnostics; the placeholder has
    /// already been shown when `Err` is returned.
    fn render_or_placeholder(&mut self, locator: &SourceLocator) -> Result<()> {
        match self.render(locator) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.render_placeholder();
                Err(e)
            }
        }
    }
}

/// Build catalog entries from picked files
///
/// Files without a resolvable display name get a positional fallback
/// (`Untitled 1`, `Untitled 2`, …) counted across this batch.
pub fn entries_from_picked(kind: MediaKind, picked: Vec<PickedFile>) -> Vec<MediaEntry> {
    picked
        .into_iter()
        .enumerate()
        .map(|(i, file)| {
            let name = file
                .display_name
                .unwrap_or_else(|| format!("Untitled {}", i + 1));
            MediaEntry::new(kind, name, file.locator)
        })
        .collect()
}
