//! Collectible goal items, one fruit kind per view.
//!
//! A goal plays its fruit idle clip until touched, then a short "collected"
//! burst clip. Once the burst reaches its final frame the goal is finished
//! and the renderer stops drawing it. `collect` reports true exactly once;
//! the caller owns the level-wide collected counter.

use fr_core::animation::{Clip, ClipPlayer};
use fr_core::geometry::Rect;
use glam::Vec2;

/// Goal collision box edge length. Drawn at 2x, collided at 1x.
pub const GOAL_SIZE: f32 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    Kiwi,
    Melon,
    Cherries,
}

impl GoalKind {
    /// Fruit for a given view ordinal. Views past the third wrap around;
    /// the three-kind cycle keeps oversized levels loadable.
    pub fn from_view_index(view: usize) -> Self {
        match view % 3 {
            0 => Self::Kiwi,
            1 => Self::Melon,
            _ => Self::Cherries,
        }
    }
}

/// Animation selector for a goal: the per-fruit idle clip while waiting,
/// the shared burst clip once collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalClip {
    Idle(GoalKind),
    Collected,
}

impl GoalClip {
    pub const fn clip(self) -> Clip {
        match self {
            GoalClip::Idle(_) => Clip::new(17, 0.1, true),
            GoalClip::Collected => Clip::new(6, 0.1, true),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Goal {
    pub rect: Rect,
    pub kind: GoalKind,
    collected: bool,
    finished: bool,
    pub animation: ClipPlayer<GoalClip>,
}

impl Goal {
    pub fn new(kind: GoalKind, pos: Vec2) -> Self {
        Self {
            rect: Rect::from_pos_size(pos, Vec2::splat(GOAL_SIZE)),
            kind,
            collected: false,
            finished: false,
            animation: ClipPlayer::new(GoalClip::Idle(kind)),
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// True once the collected burst has played out; the renderer skips
    /// finished goals.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// First call flips the goal to collected, rewinds the animation and
    /// returns true; every later call is a no-op returning false. The
    /// caller increments the level counter only on true.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        self.animation.reset();
        true
    }

    /// Per-tick update. The finished latch is checked against the active
    /// clip before advancing, so it engages on the burst's last frame and
    /// never un-sets until `reset`.
    pub fn update(&mut self, dt: f32) {
        let active = self.animation.key().clip();
        if self.collected && self.animation.on_last_frame(&active) {
            self.finished = true;
        }
        self.animation.advance(dt, &active);

        let target = if self.collected {
            GoalClip::Collected
        } else {
            GoalClip::Idle(self.kind)
        };
        self.animation.play(target);
    }

    /// Back to the uncollected state; used on level restart. The next
    /// update switches the animation back to the idle clip.
    pub fn reset(&mut self) {
        self.collected = false;
        self.finished = false;
    }
}
