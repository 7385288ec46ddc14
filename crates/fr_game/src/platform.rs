//! Static platform blocks and their sprite-sheet tiling data.
//!
//! Every platform is a solid 60x60 collision box placed on the 64-px level
//! grid. The shape kind is purely cosmetic: it selects which four 16-px
//! terrain-sheet cells tile the block when drawn at 2x. Collision never
//! branches on the kind.

use fr_core::geometry::Rect;
use glam::Vec2;

/// Collision box edge length. Slightly smaller than the 64-px visual cell
/// so the player can slip through one-cell gaps.
pub const PLATFORM_SIZE: f32 = 60.0;

/// Edge length of one cell on the terrain sprite sheet.
pub const BLOCK_SOURCE_SIZE: f32 = 16.0;

/// Cosmetic tiling category, one per digit in the level grid format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    Ground,
    Block,
    GroundGrassLeft,
    GroundGrassRight,
    GroundGrassCenter,
    GroundLeft,
    GroundCenter,
    GroundRight,
    GroundGrassPatchLeft,
    GroundGrassPatchRight,
}

/// One 16-px cell on the terrain sheet, a quarter of a drawn platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingBlock {
    GrassLeft,
    GrassCenter,
    GrassRight,
    GroundLeft,
    GroundCenter,
    GroundRight,
}

impl PlatformKind {
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Ground),
            1 => Some(Self::Block),
            2 => Some(Self::GroundGrassLeft),
            3 => Some(Self::GroundGrassRight),
            4 => Some(Self::GroundGrassCenter),
            5 => Some(Self::GroundLeft),
            6 => Some(Self::GroundCenter),
            7 => Some(Self::GroundRight),
            8 => Some(Self::GroundGrassPatchLeft),
            9 => Some(Self::GroundGrassPatchRight),
            _ => None,
        }
    }

    /// The four sheet cells tiling this kind, in row-major order
    /// (top-left, top-right, bottom-left, bottom-right).
    pub fn quarters(self) -> [BuildingBlock; 4] {
        use BuildingBlock::*;
        match self {
            Self::Ground => [GrassLeft, GrassRight, GroundLeft, GroundRight],
            Self::Block => [GrassLeft, GrassLeft, GrassLeft, GrassLeft],
            Self::GroundGrassLeft => [GrassLeft, GrassCenter, GroundLeft, GroundCenter],
            Self::GroundGrassRight => [GrassCenter, GrassRight, GroundCenter, GroundRight],
            Self::GroundGrassCenter => [GrassCenter, GrassCenter, GroundCenter, GroundCenter],
            Self::GroundLeft => [GroundLeft, GroundCenter, GroundLeft, GroundCenter],
            Self::GroundCenter => [GroundCenter, GroundCenter, GroundCenter, GroundCenter],
            Self::GroundRight => [GroundCenter, GroundRight, GroundCenter, GroundRight],
            Self::GroundGrassPatchLeft => [GroundCenter, GroundRight, GroundCenter, GroundRight],
            Self::GroundGrassPatchRight => [GroundCenter, GroundRight, GroundCenter, GroundRight],
        }
    }
}

impl BuildingBlock {
    /// Source sub-rectangle on the terrain sheet. The six cells sit in a
    /// 3x2 group starting at column 6: grass row on top, ground row below.
    pub fn source_rect(self) -> Rect {
        let (col, row) = match self {
            Self::GrassLeft => (6, 0),
            Self::GrassCenter => (7, 0),
            Self::GrassRight => (8, 0),
            Self::GroundLeft => (6, 1),
            Self::GroundCenter => (7, 1),
            Self::GroundRight => (8, 1),
        };
        Rect::new(
            col as f32 * BLOCK_SOURCE_SIZE,
            row as f32 * BLOCK_SOURCE_SIZE,
            BLOCK_SOURCE_SIZE,
            BLOCK_SOURCE_SIZE,
        )
    }
}

/// A static solid block. Immutable after level load.
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn new(pos: Vec2, kind: PlatformKind) -> Self {
        Self {
            rect: Rect::from_pos_size(pos, Vec2::splat(PLATFORM_SIZE)),
            kind,
        }
    }
}
