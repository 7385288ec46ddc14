//! Game configuration: key bindings and movement tuning, loaded from JSON.
//!
//! An absent config file is normal and falls back to defaults; a present
//! but malformed file is a fatal startup error, never silently patched.

use std::fs;
use std::path::Path;

use fr_core::input::Key;
use serde::Deserialize;

use crate::player::PlayerConfig;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyBindings {
    #[serde(default = "default_left")]
    pub left: Key,
    #[serde(default = "default_right")]
    pub right: Key,
    #[serde(default = "default_jump")]
    pub jump: Key,
    #[serde(default = "default_restart")]
    pub restart: Key,
}

fn default_left() -> Key {
    Key::A
}

fn default_right() -> Key {
    Key::D
}

fn default_jump() -> Key {
    Key::Space
}

fn default_restart() -> Key {
    Key::R
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: default_left(),
            right: default_right(),
            jump: default_jump(),
            restart: default_restart(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhysicsConfig {
    #[serde(default = "default_run_speed")]
    pub run_speed: f32,
    #[serde(default = "default_jump_speed")]
    pub jump_speed: f32,
    #[serde(default = "default_gravity_step")]
    pub gravity_step: f32,
}

fn default_run_speed() -> f32 {
    200.0
}

fn default_jump_speed() -> f32 {
    430.0
}

fn default_gravity_step() -> f32 {
    10.0
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            run_speed: default_run_speed(),
            jump_speed: default_jump_speed(),
            gravity_step: default_gravity_step(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    #[serde(default)]
    pub bindings: KeyBindings,
    #[serde(default)]
    pub physics: PhysicsConfig,
}

impl GameConfig {
    pub fn player_config(&self) -> PlayerConfig {
        PlayerConfig {
            run_speed: self.physics.run_speed,
            jump_speed: self.physics.jump_speed,
            gravity_step: self.physics.gravity_step,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.physics.run_speed <= 0.0 {
            return Err(format!(
                "physics.run_speed must be positive, got {}",
                self.physics.run_speed
            ));
        }
        if self.physics.jump_speed <= 0.0 {
            return Err(format!(
                "physics.jump_speed must be positive, got {}",
                self.physics.jump_speed
            ));
        }
        if self.physics.gravity_step <= 0.0 {
            return Err(format!(
                "physics.gravity_step must be positive, got {}",
                self.physics.gravity_step
            ));
        }
        let keys = [
            self.bindings.left,
            self.bindings.right,
            self.bindings.jump,
            self.bindings.restart,
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                if a == b {
                    return Err(format!("key {a:?} is bound to more than one action"));
                }
            }
        }
        Ok(())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<GameConfig, String> {
    if !path.exists() {
        log::info!(
            "No config file at {}, using default bindings and physics",
            path.display()
        );
        return Ok(GameConfig::default());
    }
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse config file {}: {e}", path.display()))?;
    config
        .validate()
        .map_err(|e| format!("Invalid config file {}: {e}", path.display()))?;
    Ok(config)
}
