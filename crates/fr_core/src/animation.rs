//! Frame-based sprite animation: fixed-size clips and a keyed player.
//!
//! A `Clip` is a row of equally-timed frames on a sprite sheet; the runtime
//! `ClipPlayer` tracks which clip is active (by a caller-chosen key type),
//! the current frame index and the frame timer. Advancement steps at most
//! one frame per call and only once the timer strictly exceeds the frame
//! duration, so the sequence of frames is a deterministic function of the
//! sequence of deltas fed in.

/// A fixed-length animation clip. `frame_count` must be at least 1; clip
/// tables are compile-time constants, so this is a construction-time
/// invariant rather than a runtime check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clip {
    pub frame_count: u32,
    pub frame_seconds: f32,
    pub looping: bool,
}

impl Clip {
    pub const fn new(frame_count: u32, frame_seconds: f32, looping: bool) -> Self {
        Self {
            frame_count,
            frame_seconds,
            looping,
        }
    }

    pub const fn last_frame(&self) -> u32 {
        self.frame_count - 1
    }
}

/// Runtime playback state for one animated entity.
///
/// The key type identifies which clip is active (an enum in practice).
/// `play` with the currently active key is a no-op; this is what prevents a
/// state that is re-selected every tick from restarting its animation each
/// frame.
#[derive(Debug, Clone, Copy)]
pub struct ClipPlayer<K> {
    key: K,
    frame_index: u32,
    timer: f32,
}

impl<K: Copy + PartialEq> ClipPlayer<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            frame_index: 0,
            timer: 0.0,
        }
    }

    pub fn key(&self) -> K {
        self.key
    }

    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    /// Switch the active clip. Identity-equal keys leave playback untouched;
    /// a new key resets the frame index and timer to the clip start.
    pub fn play(&mut self, key: K) {
        if key != self.key {
            self.key = key;
            self.reset();
        }
    }

    /// Rewind to frame 0 without changing the active clip.
    pub fn reset(&mut self) {
        self.frame_index = 0;
        self.timer = 0.0;
    }

    /// Accumulate `dt` seconds; once the timer strictly exceeds the frame
    /// duration, reset it and step one frame. Looping clips wrap past the
    /// last frame to 0; non-looping clips hold on the last frame.
    pub fn advance(&mut self, dt: f32, clip: &Clip) {
        self.timer += dt;
        if self.timer > clip.frame_seconds {
            self.timer = 0.0;
            self.frame_index += 1;
            if self.frame_index >= clip.frame_count {
                self.frame_index = if clip.looping { 0 } else { clip.last_frame() };
            }
        }
    }

    pub fn on_last_frame(&self, clip: &Clip) -> bool {
        self.frame_index >= clip.last_frame()
    }
}
