pub mod animation;
pub mod geometry;
pub mod input;
pub mod time;

pub use animation::{Clip, ClipPlayer};
pub use geometry::Rect;
pub use input::{InputState, Key};
pub use time::TimeState;
