//! Frame description: turns simulation state into draw quads and text.
//!
//! The simulation stays presentation-agnostic; each frame it is flattened
//! into a list of [`QuadSpec`]s (sheet id, frame, source and dest rects,
//! mirror flag) plus overlay text lines. A backend walks the list in order,
//! so list order is paint order.

use fr_core::geometry::Rect;
use glam::Vec2;

use crate::goal::{GoalClip, GoalKind, GOAL_SIZE};
use crate::platform::BLOCK_SOURCE_SIZE;
use crate::player::{Player, PlayerState};
use crate::world::{World, INSTRUCTIONS_TEXT};

/// Player sprite frame edge on its sheets. The sprite is slightly wider
/// than the 29-px collision box.
pub const PLAYER_SOURCE_SIZE: f32 = 32.0;
/// Fruit and burst sprite frame edge.
pub const GOAL_SOURCE_SIZE: f32 = 32.0;
/// Platforms and goals draw at twice their source resolution.
const SPRITE_SCALE: f32 = 2.0;

/// Which sprite sheet a quad samples from. The backend maps these to
/// loaded textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetId {
    PlayerIdle,
    PlayerRun,
    PlayerJump,
    PlayerFall,
    Kiwi,
    Melon,
    Cherries,
    Collected,
    Terrain,
}

impl SheetId {
    fn for_player_state(state: PlayerState) -> Self {
        match state {
            PlayerState::Idle => Self::PlayerIdle,
            PlayerState::Run => Self::PlayerRun,
            PlayerState::Jump => Self::PlayerJump,
            PlayerState::Fall => Self::PlayerFall,
        }
    }

    fn for_goal_clip(clip: GoalClip) -> Self {
        match clip {
            GoalClip::Idle(GoalKind::Kiwi) => Self::Kiwi,
            GoalClip::Idle(GoalKind::Melon) => Self::Melon,
            GoalClip::Idle(GoalKind::Cherries) => Self::Cherries,
            GoalClip::Collected => Self::Collected,
        }
    }
}

/// One textured quad. `source` is in sheet pixels, `dest` in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSpec {
    pub sheet: SheetId,
    pub source: Rect,
    pub dest: Rect,
    pub mirror_x: bool,
}

/// Everything a backend needs to draw one frame.
#[derive(Debug, Default)]
pub struct FrameDesc {
    pub quads: Vec<QuadSpec>,
    /// Overlay lines, top to bottom.
    pub text_lines: Vec<&'static str>,
}

/// Source rect for frame `index` on a horizontal strip sheet.
fn strip_frame(index: u32, frame_size: f32) -> Rect {
    Rect::new(index as f32 * frame_size, 0.0, frame_size, frame_size)
}

pub fn build_frame(world: &World, player: &Player) -> FrameDesc {
    let mut frame = FrameDesc::default();

    for platform in world.current_platforms() {
        let quarter_dest = BLOCK_SOURCE_SIZE * SPRITE_SCALE;
        for (i, block) in platform.kind.quarters().iter().enumerate() {
            let col = (i % 2) as f32;
            let row = (i / 2) as f32;
            frame.quads.push(QuadSpec {
                sheet: SheetId::Terrain,
                source: block.source_rect(),
                dest: Rect::new(
                    platform.rect.x + col * quarter_dest,
                    platform.rect.y + row * quarter_dest,
                    quarter_dest,
                    quarter_dest,
                ),
                mirror_x: false,
            });
        }
    }

    for goal in world.current_goals() {
        if goal.is_finished() {
            continue;
        }
        let clip_key = goal.animation.key();
        frame.quads.push(QuadSpec {
            sheet: SheetId::for_goal_clip(clip_key),
            source: strip_frame(goal.animation.frame_index(), GOAL_SOURCE_SIZE),
            dest: Rect::from_pos_size(
                goal.rect.position(),
                Vec2::splat(GOAL_SIZE * SPRITE_SCALE),
            ),
            mirror_x: false,
        });
    }

    // The sprite overhangs the 29x30 collision box by a few pixels.
    frame.quads.push(QuadSpec {
        sheet: SheetId::for_player_state(player.state()),
        source: strip_frame(player.animation.frame_index(), PLAYER_SOURCE_SIZE),
        dest: Rect::new(
            player.rect.x,
            player.rect.y,
            PLAYER_SOURCE_SIZE,
            PLAYER_SOURCE_SIZE,
        ),
        mirror_x: player.is_mirrored(),
    });

    frame.text_lines.push(INSTRUCTIONS_TEXT);
    if let Some(banner) = world.banner() {
        frame.text_lines.push(banner.headline());
        frame.text_lines.push(banner.hint());
    }

    frame
}
