//! Level session state: view progression, goal bookkeeping, win/loss flags.
//!
//! The world owns the per-view platform and goal collections parsed at
//! startup and the counters that drive completion and game over. All
//! operations are total: view stepping saturates at the ends and the flag
//! setters are idempotent, so nothing in the per-tick path can fail.

use crate::goal::Goal;
use crate::level::ViewData;
use crate::platform::Platform;

pub const GAME_FINISHED_TEXT: &str = "Game Finished!";
pub const GAME_OVER_TEXT: &str = "Game Over!";
pub const RESTART_TEXT: &str = "Press R to Restart";
pub const INSTRUCTIONS_TEXT: &str = "Press a or d to move or space to jump.";

/// End-of-session banner for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    GameOver,
    Finished,
}

impl Banner {
    pub const fn headline(self) -> &'static str {
        match self {
            Banner::GameOver => GAME_OVER_TEXT,
            Banner::Finished => GAME_FINISHED_TEXT,
        }
    }

    pub const fn hint(self) -> &'static str {
        RESTART_TEXT
    }
}

pub struct World {
    views: Vec<ViewData>,
    current_view: usize,
    max_view: usize,
    collected_count: u32,
    completed: bool,
    game_over: bool,
}

impl World {
    /// Build a session from parsed level data. The loader guarantees at
    /// least one view.
    pub fn new(views: Vec<ViewData>) -> Self {
        let max_view = views.len().saturating_sub(1);
        Self {
            views,
            current_view: 0,
            max_view,
            collected_count: 0,
            completed: false,
            game_over: false,
        }
    }

    pub fn current_view_index(&self) -> usize {
        self.current_view
    }

    pub fn max_view(&self) -> usize {
        self.max_view
    }

    pub fn collected_count(&self) -> u32 {
        self.collected_count
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    // The view index is allowed to sit one past the last view (see
    // `next_view`), so every collection read clamps it.
    fn clamped_view(&self) -> usize {
        self.current_view.min(self.max_view)
    }

    pub fn current_platforms(&self) -> &[Platform] {
        &self.views[self.clamped_view()].platforms
    }

    pub fn current_goals(&self) -> &[Goal] {
        &self.views[self.clamped_view()].goals
    }

    pub fn current_goals_mut(&mut self) -> &mut [Goal] {
        let view = self.clamped_view();
        &mut self.views[view].goals
    }

    /// Step to the next view. Succeeds while the index has not gone past
    /// the last view, which means one extra step beyond it is granted;
    /// the trailing position still reads the last view's collections.
    pub fn next_view(&mut self) -> bool {
        if self.current_view <= self.max_view {
            self.current_view += 1;
            log::debug!("Advanced to view {}", self.current_view);
            true
        } else {
            false
        }
    }

    /// Step to the previous view; refuses at view 0.
    pub fn prev_view(&mut self) -> bool {
        if self.current_view > 0 {
            self.current_view -= 1;
            log::debug!("Returned to view {}", self.current_view);
            true
        } else {
            false
        }
    }

    /// Credit one collected goal. Completion fires once the count exceeds
    /// the highest view index: with one goal per view that is the moment
    /// the final goal lands.
    pub fn add_collected(&mut self) {
        self.collected_count += 1;
        if self.collected_count as usize > self.max_view && !self.completed {
            self.completed = true;
            log::info!(
                "All {} goals collected, level finished",
                self.collected_count
            );
        }
    }

    /// Sticky loss flag; idempotent.
    pub fn trigger_game_over(&mut self) {
        if !self.game_over {
            log::info!("Game over triggered");
        }
        self.game_over = true;
    }

    /// Advance goal animations in the current view only. Off-screen goals
    /// do not tick, so their idle timers hold still until revisited.
    pub fn update(&mut self, dt: f32) {
        let view = self.clamped_view();
        for goal in &mut self.views[view].goals {
            goal.update(dt);
        }
    }

    /// Full session reset: every goal in every view back to uncollected,
    /// counters and flags cleared, first view active.
    pub fn restart(&mut self) {
        for view in &mut self.views {
            for goal in &mut view.goals {
                goal.reset();
            }
        }
        self.current_view = 0;
        self.collected_count = 0;
        self.completed = false;
        self.game_over = false;
        log::info!("World restarted");
    }

    pub fn banner(&self) -> Option<Banner> {
        if self.game_over {
            Some(Banner::GameOver)
        } else if self.completed {
            Some(Banner::Finished)
        } else {
            None
        }
    }
}
