//! Fruit Run -- main loop and application entry point.
//!
//! winit drives the event loop via `ApplicationHandler`. All simulation runs
//! inside `RedrawRequested` using a fixed-timestep model (see `TimeState`):
//!
//!   1. `begin_frame()` -- measure wall-clock delta, feed accumulator
//!   2. `while should_step()` -- consume fixed-dt slices for deterministic
//!      simulation: goal animations, then the player physics pass
//!   3. Flatten the session into a `FrameDesc` for the presentation backend
//!
//! Level and config files load once at startup and are fatal on error; a
//! session that starts always has a consistent world.

mod config;
mod goal;
mod level;
mod platform;
mod player;
mod render;
#[cfg(test)]
mod replay;
mod world;

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use config::{load_config_from_path, GameConfig};
use fr_core::input::{InputState, Key};
use fr_core::time::TimeState;
use fr_platform::window::PlatformConfig;
use level::load_level_from_path;
use player::{Player, PlayerInput};
use render::{build_frame, FrameDesc};
use world::World;

const LEVEL_PATH: &str = "assets/maps/world1.txt";
const CONFIG_PATH: &str = "assets/config/game.json";

/// All mutable game state, constructed in `ApplicationHandler::resumed`
/// once the window exists.
struct GameState {
    window: Arc<Window>,
    time: TimeState,
    input: InputState,
    config: GameConfig,
    world: World,
    player: Player,
    /// Last flattened frame, handed to the presentation backend.
    frame: FrameDesc,
}

impl GameState {
    fn new(window: Arc<Window>) -> Self {
        let config_path = std::path::Path::new(CONFIG_PATH);
        let config = load_config_from_path(config_path).unwrap_or_else(|err| {
            panic!("Failed to load config '{CONFIG_PATH}': {err}");
        });

        let level_path = std::path::Path::new(LEVEL_PATH);
        let views = load_level_from_path(level_path).unwrap_or_else(|err| {
            panic!("Failed to load level '{LEVEL_PATH}': {err}");
        });
        log::info!("Loaded level '{LEVEL_PATH}' with {} views", views.len());

        let world = World::new(views);
        let player = Player::new(config.player_config());

        Self {
            window,
            time: TimeState::new(),
            input: InputState::new(),
            config,
            world,
            player,
            frame: FrameDesc::default(),
        }
    }

    /// One rendered frame: drain the accumulator in fixed steps, then
    /// flatten the session for drawing.
    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        self.time.begin_frame();

        while self.time.should_step() {
            if self.input.is_just_pressed(Key::Escape) {
                log::info!("Escape pressed, exiting.");
                event_loop.exit();
                return;
            }
            if self.input.is_just_pressed(self.config.bindings.restart) {
                self.world.restart();
                self.player.restart();
            }

            // The simulation keeps ticking while an end banner is up: the
            // final goal's collected burst plays out and the player stays
            // controllable until a restart.
            let dt = self.time.fixed_dt as f32;
            let input = PlayerInput {
                left: self.input.is_held(self.config.bindings.left),
                right: self.input.is_held(self.config.bindings.right),
                jump: self.input.is_held(self.config.bindings.jump),
            };
            self.world.update(dt);
            self.player.update(dt, input, &mut self.world);
        }

        // Only clear edge-triggered input after at least one fixed step
        // consumed it; a press landing on a zero-step frame must survive.
        if self.time.steps_this_frame > 0 {
            self.input.end_frame();
        }

        self.frame = build_frame(&self.world, &self.player);
        log::trace!(
            "Frame {}: {} quads, {} text lines",
            self.time.frame_count,
            self.frame.quads.len(),
            self.frame.text_lines.len()
        );
    }
}

struct App {
    config: PlatformConfig,
    state: Option<GameState>,
}

impl App {
    fn new() -> Self {
        Self {
            config: PlatformConfig::default(),
            state: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window = fr_platform::window::create_window(event_loop, &self.config);
        self.state = Some(GameState::new(window));
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(key) = map_key(key_code) {
                        match event.state {
                            ElementState::Pressed => state.input.key_down(key),
                            ElementState::Released => state.input.key_up(key),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                state.run_frame(event_loop);
            }

            _ => {}
        }
    }
}

fn map_key(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::ArrowLeft => Some(Key::Left),
        KeyCode::ArrowRight => Some(Key::Right),
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::Space => Some(Key::Space),
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyD => Some(Key::D),
        KeyCode::KeyR => Some(Key::R),
        _ => None,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Fruit Run starting...");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
