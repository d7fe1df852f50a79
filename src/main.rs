//! Maze Runner entry point
//!
//! Runs the simulation headless with an autopilot standing in for the
//! keyboard. Usage: `maze-runner [--config PATH] [--seed N] [--frames N]`

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use maze_runner::renderer::{build_scene, tessellate};
use maze_runner::sim::{FrameInput, GameEvent, GamePhase, GameState, TickInput, tick};
use maze_runner::{GameConfig, frame_period_ms};

/// Command-line options
struct Options {
    config_path: Option<String>,
    seed: u64,
    frames: u64,
}

impl Options {
    fn parse() -> Self {
        let mut opts = Self {
            config_path: None,
            seed: 12345,
            frames: 3600,
        };
        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => opts.config_path = args.next(),
                "--seed" => match args.next().map(|s| s.parse()) {
                    Some(Ok(seed)) => opts.seed = seed,
                    _ => log::warn!("--seed expects an integer; keeping {}", opts.seed),
                },
                "--frames" => match args.next().map(|s| s.parse()) {
                    Some(Ok(frames)) => opts.frames = frames,
                    _ => log::warn!("--frames expects an integer; keeping {}", opts.frames),
                },
                other => log::warn!("Ignoring unknown argument {other:?}"),
            }
        }
        opts
    }
}

/// Random walker: holds a heading for a while, sometimes sprints, shoots often
struct Autopilot {
    rng: Pcg32,
    heading: FrameInput,
    hold: u32,
}

impl Autopilot {
    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed ^ 0x5eed),
            heading: FrameInput::default(),
            hold: 0,
        }
    }

    fn next(&mut self, phase: GamePhase) -> TickInput {
        if phase != GamePhase::Playing {
            return TickInput {
                confirm: phase == GamePhase::Title,
                ..Default::default()
            };
        }
        if self.hold == 0 {
            self.heading = FrameInput {
                move_left: self.rng.random_bool(0.3),
                move_right: self.rng.random_bool(0.3),
                move_up: self.rng.random_bool(0.3),
                move_down: self.rng.random_bool(0.3),
                sprint: self.rng.random_bool(0.2),
                shoot: false,
            };
            self.hold = self.rng.random_range(10..60);
        }
        self.hold -= 1;
        TickInput {
            frame: FrameInput {
                shoot: self.rng.random_bool(0.1),
                ..self.heading
            },
            confirm: false,
        }
    }
}

fn load_config(path: Option<&str>) -> GameConfig {
    let Some(path) = path else {
        return GameConfig::default();
    };
    match GameConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Could not use config {path}: {e}; using defaults");
            GameConfig::default()
        }
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Maze Runner (headless) starting...");

    let opts = Options::parse();
    let config = load_config(opts.config_path.as_deref());
    let period = frame_period_ms(config.fps);
    log::info!(
        "Grid {}x{} at {} FPS, seed {}, {} frames",
        config.grid_width(),
        config.grid_height(),
        config.fps,
        opts.seed,
        opts.frames
    );

    let mut state = GameState::new(config, opts.seed);
    let mut pilot = Autopilot::new(opts.seed);
    let mut kills = 0u32;
    let mut shots = 0u32;
    let mut levels_cleared = 0u32;

    for frame in 0..opts.frames {
        let input = pilot.next(state.phase);
        tick(&mut state, &input, frame * period);

        for event in &state.events {
            match event {
                GameEvent::LevelStarted { level } => {
                    if let Some(maze) = &state.maze {
                        println!("Level {level}\n{}", maze.to_ascii());
                    }
                }
                GameEvent::ShotFired { .. } => shots += 1,
                GameEvent::EnemyKilled { .. } => kills += 1,
                GameEvent::LevelCompleted { .. } => levels_cleared += 1,
                GameEvent::PlayerCaught { enemy_id, level } => {
                    println!("Caught by enemy {enemy_id} on level {level} at frame {frame}");
                }
                GameEvent::RunWon { level } => println!("Won after level {level}"),
                _ => {}
            }
        }

        if matches!(state.phase, GamePhase::GameOver | GamePhase::Win) {
            break;
        }
    }

    let vertices = tessellate(&build_scene(&state));
    log::debug!("Final frame: {} vertices", vertices.len());
    println!(
        "Frames: {}, level: {}, levels cleared: {}, shots: {}, enemies destroyed: {}, phase: {:?}",
        state.frame, state.level, levels_cleared, shots, kills, state.phase
    );
}
