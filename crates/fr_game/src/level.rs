//! Level data: the plain-text grid format and the viewport geometry.
//!
//! A level file is a sequence of fixed-size screen "views". The first line
//! holds the view count; each view is 12 rows of 20 characters followed by
//! a blank separator line. `G` marks a goal cell (the fruit kind follows
//! the view's ordinal), a digit `0`..`9` marks a platform of that shape
//! kind, `X` marks empty space.
//!
//! The format is a durable external interface: files authored for the
//! original release of this game load unchanged. Loading happens once at
//! startup; any malformed input is fatal, never partially applied.

use std::fs;
use std::path::Path;

use glam::Vec2;

use crate::goal::{Goal, GoalKind};
use crate::platform::{Platform, PlatformKind};

/// Viewport width in pixels. Also the x threshold for advancing a view.
pub const VIEW_WIDTH: f32 = 1280.0;
/// Viewport height in pixels. Also the fall-off game-over threshold.
pub const VIEW_HEIGHT: f32 = 768.0;
/// Level grid cell edge in pixels.
pub const CELL_SIZE: f32 = 64.0;
/// Grid columns per view (VIEW_WIDTH / CELL_SIZE).
pub const GRID_COLS: usize = 20;
/// Grid rows per view (VIEW_HEIGHT / CELL_SIZE).
pub const GRID_ROWS: usize = 12;

/// One screen's worth of static level content.
#[derive(Debug, Clone)]
pub struct ViewData {
    pub platforms: Vec<Platform>,
    pub goals: Vec<Goal>,
}

pub fn load_level_from_path(path: &Path) -> Result<Vec<ViewData>, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read level file {}: {e}", path.display()))?;
    parse_level(&raw).map_err(|e| format!("Failed to parse level file {}: {e}", path.display()))
}

pub fn parse_level(raw: &str) -> Result<Vec<ViewData>, String> {
    let mut lines = raw.lines();

    let count_line = lines
        .next()
        .ok_or_else(|| "level is empty, expected a view count".to_string())?;
    let view_count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| format!("invalid view count '{}'", count_line.trim()))?;
    if view_count == 0 {
        return Err("view count must be at least 1".to_string());
    }

    let mut views = Vec::with_capacity(view_count);
    for view_index in 0..view_count {
        let mut platforms = Vec::new();
        let mut goals = Vec::new();

        for row in 0..GRID_ROWS {
            let line = lines.next().ok_or_else(|| {
                format!("view {view_index}: missing row {row}, file ends early")
            })?;
            let cells: Vec<char> = line.chars().collect();
            if cells.len() < GRID_COLS {
                return Err(format!(
                    "view {view_index} row {row}: expected {GRID_COLS} columns, got {}",
                    cells.len()
                ));
            }

            for (col, &cell) in cells.iter().take(GRID_COLS).enumerate() {
                let pos = Vec2::new(col as f32 * CELL_SIZE, row as f32 * CELL_SIZE);
                match cell {
                    'X' => {}
                    'G' => {
                        goals.push(Goal::new(GoalKind::from_view_index(view_index), pos));
                    }
                    '0'..='9' => {
                        let digit = cell as u8 - b'0';
                        let kind = PlatformKind::from_digit(digit).ok_or_else(|| {
                            format!("view {view_index} row {row} col {col}: bad shape digit")
                        })?;
                        platforms.push(Platform::new(pos, kind));
                    }
                    other => {
                        return Err(format!(
                            "view {view_index} row {row} col {col}: unexpected character '{other}'"
                        ));
                    }
                }
            }
        }

        // Blank separator; the one after the final view may be omitted.
        if let Some(separator) = lines.next() {
            if !separator.trim().is_empty() {
                return Err(format!(
                    "view {view_index}: expected blank separator line, got '{separator}'"
                ));
            }
        } else if view_index + 1 < view_count {
            return Err(format!(
                "view {view_index}: missing separator line, file ends early"
            ));
        }

        if goals.is_empty() {
            log::warn!("Level view {view_index} has no goal cell. This is allowed but often accidental.");
        }
        if view_index >= 3 {
            log::debug!(
                "View {view_index} wraps the fruit cycle to {:?}",
                GoalKind::from_view_index(view_index)
            );
        }

        views.push(ViewData { platforms, goals });
    }

    Ok(views)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file_path(name_hint: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "fr_level_test_{}_{}_{}.txt",
            name_hint,
            std::process::id(),
            nanos
        ))
    }

    fn empty_row() -> String {
        "X".repeat(GRID_COLS)
    }

    /// A single view whose bottom row is solid ground with a goal above it.
    fn one_view_body() -> String {
        let mut rows = vec![empty_row(); GRID_ROWS];
        rows[7] = format!("{}G{}", "X".repeat(9), "X".repeat(10));
        rows[8] = format!("{}565{}", "X".repeat(8), "X".repeat(9));
        rows[11] = format!("2{}3", "4".repeat(18));
        rows.join("\n")
    }

    fn one_view_level() -> String {
        format!("1\n{}\n\n", one_view_body())
    }

    #[test]
    fn parses_a_single_view() {
        let views = parse_level(&one_view_level()).expect("level should parse");
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].platforms.len(), GRID_COLS + 3);
        assert_eq!(views[0].goals.len(), 1);

        let goal = &views[0].goals[0];
        assert_eq!(goal.kind, GoalKind::Kiwi);
        assert_eq!(goal.rect.x, 9.0 * CELL_SIZE);
        assert_eq!(goal.rect.y, 7.0 * CELL_SIZE);
    }

    #[test]
    fn platform_positions_follow_the_grid() {
        let views = parse_level(&one_view_level()).expect("level should parse");
        let first_floor = views[0]
            .platforms
            .iter()
            .find(|p| p.rect.y == 11.0 * CELL_SIZE)
            .expect("floor platform");
        assert_eq!(first_floor.rect.x, 0.0);
        assert_eq!(first_floor.kind, PlatformKind::GroundGrassLeft);
    }

    #[test]
    fn goal_kind_follows_view_ordinal() {
        let body = one_view_body();
        let level = format!("3\n{body}\n\n{body}\n\n{body}\n");
        let views = parse_level(&level).expect("level should parse");
        assert_eq!(views[0].goals[0].kind, GoalKind::Kiwi);
        assert_eq!(views[1].goals[0].kind, GoalKind::Melon);
        assert_eq!(views[2].goals[0].kind, GoalKind::Cherries);
    }

    #[test]
    fn rejects_short_rows() {
        let mut rows = vec![empty_row(); GRID_ROWS];
        rows[3] = "XXXX".to_string();
        let level = format!("1\n{}\n", rows.join("\n"));
        let err = parse_level(&level).expect_err("short row should fail");
        assert!(err.contains("expected 20 columns"));
    }

    #[test]
    fn rejects_unknown_characters() {
        let mut rows = vec![empty_row(); GRID_ROWS];
        rows[5] = format!("{}?{}", "X".repeat(10), "X".repeat(9));
        let level = format!("1\n{}\n", rows.join("\n"));
        let err = parse_level(&level).expect_err("unknown character should fail");
        assert!(err.contains("unexpected character"));
    }

    #[test]
    fn rejects_bad_view_count() {
        let err = parse_level("banana\n").expect_err("bad count should fail");
        assert!(err.contains("invalid view count"));

        let err = parse_level("0\n").expect_err("zero views should fail");
        assert!(err.contains("at least 1"));
    }

    #[test]
    fn rejects_truncated_file() {
        let body = one_view_body();
        let truncated: String = format!("2\n{body}\n\n");
        let err = parse_level(&truncated).expect_err("missing second view should fail");
        assert!(err.contains("file ends early"));
    }

    #[test]
    fn rejects_missing_separator() {
        let body = one_view_body();
        let level = format!("2\n{body}\n{body}\n");
        let err = parse_level(&level).expect_err("missing blank line should fail");
        assert!(err.contains("separator"));
    }

    #[test]
    fn load_level_from_path_reports_missing_file() {
        let path = temp_file_path("missing");
        let err = load_level_from_path(&path).expect_err("missing file should fail");
        assert!(err.contains("Failed to read level file"));
    }

    #[test]
    fn load_level_from_path_roundtrips_through_disk() {
        let path = temp_file_path("ok");
        fs::write(&path, one_view_level()).expect("write temp level");
        let views = load_level_from_path(&path).expect("level should load");
        assert_eq!(views.len(), 1);
        let _ = fs::remove_file(path);
    }
}
