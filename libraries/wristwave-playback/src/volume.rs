//! Volume control with mute save/restore
//!
//! Volume is 0-100. Muting remembers the level at mute time and restores it
//! on unmute; an explicit level change while muted clears the mute.

/// Volume controller
#[derive(Debug, Clone)]
pub struct VolumeControl {
    /// Volume level (0-100)
    level: u8,

    /// Mute state
    muted: bool,

    /// Level saved when mute was engaged
    level_before_mute: u8,
}

impl VolumeControl {
    /// Create a new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume (0-100, clamped)
    pub fn new(level: u8) -> Self {
        let level = level.min(100);
        Self {
            level,
            muted: false,
            level_before_mute: level,
        }
    }

    /// Set volume level (0-100, clamped)
    ///
    /// An explicit change while muted clears the mute.
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
        self.muted = false;
    }

    /// Get the configured volume level (0-100)
    ///
    /// Unaffected by mute; see [`effective_level`](Self::effective_level).
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Toggle mute state
    ///
    /// Muting saves the current level; unmuting restores it.
    pub fn toggle_mute(&mut self) {
        if self.muted {
            self.muted = false;
            self.level = self.level_before_mute;
        } else {
            self.level_before_mute = self.level;
            self.muted = true;
        }
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Level actually heard: 0 while muted, the configured level otherwise
    pub fn effective_level(&self) -> u8 {
        if self.muted {
            0
        } else {
            self.level
        }
    }

    /// Gain for the transport's 0.0..1.0 scale
    pub fn gain(&self) -> f32 {
        f32::from(self.effective_level()) / 100.0
    }
}

impl Default for VolumeControl {
    fn default() -> Self {
        Self::new(50)
    }
}
