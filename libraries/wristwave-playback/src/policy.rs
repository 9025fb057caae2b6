//! Next/previous index policy
//!
//! The one genuinely algorithmic piece of the core: given the cursor, the
//! playlist size, and the shuffle/repeat state, compute which index plays
//! next. Pure function over its parameters; randomness comes in through the
//! caller's `Rng` so results are reproducible under a seeded source.

use crate::types::Direction;
use rand::Rng;
use wristwave_core::types::RepeatMode;

/// Compute the adjacent playlist index for a navigation step
///
/// Returns `None` when there is nothing to advance to:
/// - the playlist is empty, or
/// - sequential mode hit a list edge and repeat is `Off`/`One`.
///
/// Precedence:
/// 1. `size == 0` — `None`; the caller must not start playback.
/// 2. `size == 1` — always index 0 (the sole item replays itself).
/// 3. Shuffle — uniform draw over `0..size`; a draw equal to `current` is
///    resolved to `(draw + 1) % size`, so a different item is always picked
///    when `size > 1`. The slight bias of this resolution is intentional,
///    matching observed behavior.
/// 4. Sequential — step by one; wrap only under `RepeatMode::All`.
///
/// Completion-driven restart under `RepeatMode::One` never reaches this
/// function; the controller restarts the same entry in place.
pub fn adjacent_index<R: Rng + ?Sized>(
    current: usize,
    size: usize,
    direction: Direction,
    shuffle: bool,
    repeat: RepeatMode,
    rng: &mut R,
) -> Option<usize> {
    if size == 0 {
        return None;
    }
    if size == 1 {
        return Some(0);
    }

    if shuffle {
        let drawn = rng.gen_range(0..size);
        let index = if drawn == current {
            (drawn + 1) % size
        } else {
            drawn
        };
        return Some(index);
    }

    match direction {
        Direction::Next => {
            if current < size - 1 {
                Some(current + 1)
            } else if repeat == RepeatMode::All {
                Some(0)
            } else {
                None
            }
        }
        Direction::Previous => {
            if current > 0 {
                Some(current - 1)
            } else if repeat == RepeatMode::All {
                Some(size - 1)
            } else {
                None
            }
        }
    }
}
