//! Player kinematics and the per-tick physics/collision pass.
//!
//! The tick is axis-separated: horizontal displacement is applied and
//! resolved against the current view's platforms, then vertical. Resolution
//! snaps position only; horizontal velocity survives wall contact so a held
//! direction key keeps pressing against the wall, while vertical contact
//! zeroes vertical velocity and (on a downward hit) re-arms the floor flag.
//! Platforms are tested in the view's stored order and every overlap is
//! corrected in sequence, so simultaneous overlaps compound; this ordering
//! is part of the game's movement feel and is pinned by tests.
//!
//! Goals are collected in both axis passes. `Goal::collect` is idempotent,
//! so the double check cannot double-count.

use fr_core::animation::{Clip, ClipPlayer};
use fr_core::geometry::Rect;
use glam::Vec2;

use crate::level::{VIEW_HEIGHT, VIEW_WIDTH};
use crate::world::World;

pub const PLAYER_WIDTH: f32 = 29.0;
pub const PLAYER_HEIGHT: f32 = 30.0;
/// Spawn point: grid cell (3, 10).
pub const SPAWN_POS: Vec2 = Vec2::new(192.0, 640.0);

/// X the player is placed at after advancing a view. Slightly negative so
/// the hitbox straddles the seam and the next horizontal pass does not
/// re-trigger the boundary check.
const ENTER_FROM_LEFT_X: f32 = -15.0;
/// X the player is placed at after backing into the previous view.
const ENTER_FROM_RIGHT_X: f32 = 1270.0;

/// Discrete movement state, derived every tick from the floor flag and the
/// velocity signs; selects the active animation clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Run,
    Jump,
    Fall,
}

impl PlayerState {
    pub const fn clip(self) -> Clip {
        match self {
            PlayerState::Idle => Clip::new(11, 0.1, true),
            PlayerState::Run => Clip::new(12, 0.1, true),
            PlayerState::Jump => Clip::new(1, 0.1, true),
            PlayerState::Fall => Clip::new(1, 0.1, true),
        }
    }
}

/// Snapshot of the held movement keys for one tick. Built by the shell
/// from the input state and the configured bindings; the simulation never
/// reads the keyboard directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Movement tuning. `gravity_step` is added to the vertical velocity once
/// per tick, deliberately not scaled by dt; displacement is dt-scaled.
/// Driving the simulation at a fixed step keeps this consistent.
#[derive(Debug, Clone, Copy)]
pub struct PlayerConfig {
    pub run_speed: f32,
    pub jump_speed: f32,
    pub gravity_step: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            run_speed: 200.0,
            jump_speed: 430.0,
            gravity_step: 10.0,
        }
    }
}

pub struct Player {
    pub rect: Rect,
    pub velocity: Vec2,
    on_floor: bool,
    jump_latched: bool,
    state: PlayerState,
    pub animation: ClipPlayer<PlayerState>,
    config: PlayerConfig,
}

impl Player {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            rect: Rect::from_pos_size(SPAWN_POS, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)),
            velocity: Vec2::ZERO,
            on_floor: true,
            jump_latched: false,
            state: PlayerState::Idle,
            animation: ClipPlayer::new(PlayerState::Idle),
            config,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_on_floor(&self) -> bool {
        self.on_floor
    }

    /// Render mirrored when moving left; rightward and standing still
    /// render normally. Derived, never stored.
    pub fn is_mirrored(&self) -> bool {
        self.velocity.x < 0.0
    }

    /// One simulation tick. `dt` is the elapsed step time in seconds; the
    /// world supplies the active view's geometry and absorbs goal and
    /// progression side effects.
    pub fn update(&mut self, dt: f32, input: PlayerInput, world: &mut World) {
        self.check_boundaries(world);
        self.resolve_input(input);

        let dx = self.velocity.x * dt;
        self.velocity.y += self.config.gravity_step;
        let dy = self.velocity.y * dt;

        self.rect.offset_x(dx);
        self.resolve_horizontal(world);

        self.rect.offset_y(dy);
        self.resolve_vertical(world);

        self.derive_state();
        self.animation.play(self.state);
        self.animation.advance(dt, &self.state.clip());
    }

    /// Back to the spawn point with motion cleared. Restart is a full
    /// reset: a mid-fall restart must not carry accumulated fall speed
    /// into the fresh session.
    pub fn restart(&mut self) {
        self.rect = Rect::from_pos_size(SPAWN_POS, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT));
        self.velocity = Vec2::ZERO;
        self.on_floor = true;
        self.jump_latched = false;
    }

    /// Pre-movement checks against the viewport edges, using last tick's
    /// resolved position and velocity. Falling below the screen is a loss;
    /// crossing a side edge asks the world for the adjacent view and, when
    /// granted, carries the player across the seam at the same height.
    fn check_boundaries(&mut self, world: &mut World) {
        if self.rect.top() > VIEW_HEIGHT {
            world.trigger_game_over();
        }
        if self.velocity.x > 0.0 && self.rect.right() > VIEW_WIDTH && world.next_view() {
            self.rect.move_to(Vec2::new(ENTER_FROM_LEFT_X, self.rect.y));
        }
        if self.velocity.x < 0.0 && self.rect.left() < 0.0 && world.prev_view() {
            self.rect.move_to(Vec2::new(ENTER_FROM_RIGHT_X, self.rect.y));
        }
    }

    /// Held keys to velocity. Opposing horizontal keys cancel to zero.
    /// A jump fires only from the floor with the latch clear; the latch
    /// holds until the key is released, so a held key cannot re-jump on
    /// landing.
    fn resolve_input(&mut self, input: PlayerInput) {
        self.velocity.x = match (input.left, input.right) {
            (true, false) => -self.config.run_speed,
            (false, true) => self.config.run_speed,
            _ => 0.0,
        };

        if input.jump {
            if self.on_floor && !self.jump_latched {
                self.velocity.y = -self.config.jump_speed;
                self.on_floor = false;
                self.jump_latched = true;
            }
        } else {
            self.jump_latched = false;
        }
    }

    fn resolve_horizontal(&mut self, world: &mut World) {
        for platform in world.current_platforms() {
            if self.rect.intersects(&platform.rect) {
                if self.velocity.x < 0.0 {
                    self.rect.offset_x(platform.rect.right() - self.rect.left());
                } else if self.velocity.x > 0.0 {
                    self.rect.offset_x(platform.rect.left() - self.rect.right());
                }
            }
        }
        self.collect_overlapping_goals(world);
    }

    fn resolve_vertical(&mut self, world: &mut World) {
        for platform in world.current_platforms() {
            if self.rect.intersects(&platform.rect) {
                if self.velocity.y < 0.0 {
                    self.rect.offset_y(platform.rect.bottom() - self.rect.top());
                    self.velocity.y = 0.0;
                } else if self.velocity.y > 0.0 {
                    self.rect.offset_y(platform.rect.top() - self.rect.bottom());
                    self.velocity.y = 0.0;
                    self.on_floor = true;
                }
            }
        }
        self.collect_overlapping_goals(world);
    }

    fn collect_overlapping_goals(&mut self, world: &mut World) {
        let mut gained = 0;
        for goal in world.current_goals_mut() {
            if self.rect.intersects(&goal.rect) && goal.collect() {
                gained += 1;
            }
        }
        for _ in 0..gained {
            world.add_collected();
        }
    }

    fn derive_state(&mut self) {
        self.state = if self.on_floor {
            if self.velocity.x == 0.0 {
                PlayerState::Idle
            } else {
                PlayerState::Run
            }
        } else if self.velocity.y > 0.0 {
            PlayerState::Fall
        } else {
            PlayerState::Jump
        };
    }
}
