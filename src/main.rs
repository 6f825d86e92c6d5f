//! Tilt Maze entry point
//!
//! Runs a headless round driven by the autopilot. Window, input and audio
//! backends plug in through `Tilt::from_pointer`, `TickResult` and
//! `SoundSink`.

use tilt_maze::audio::LogSink;
use tilt_maze::consts::*;
use tilt_maze::sim::{Autopilot, GamePhase, Maze, Session, TickInput, tick};
use tilt_maze::{AudioManager, Settings};

/// Host loop state
struct Game {
    session: Session,
    audio: AudioManager<LogSink>,
    pilot: Autopilot,
    accumulator: f64,
    input: TickInput,
}

impl Game {
    fn new(settings: &Settings, maze: Maze, seed: u64) -> Self {
        Self {
            session: Session::with_config(maze, settings.spawn(), settings.session_config()),
            audio: AudioManager::from_settings(LogSink, settings),
            pilot: Autopilot::new(seed),
            accumulator: 0.0,
            input: TickInput::default(),
        }
    }

    /// Run simulation ticks for one rendered frame
    fn update(&mut self, dt: f64) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.input.tilt = self.pilot.next_tilt(&self.session);
            let result = tick(&mut self.session, &self.input, SIM_DT);
            self.audio.dispatch(&result.events);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.reset = false;
            self.input.new_game = false;
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Tilt Maze (headless) starting...");

    let settings_path =
        std::env::var("TILT_MAZE_SETTINGS").unwrap_or_else(|_| "tilt_maze.json".to_string());
    let mut settings = Settings::load_from(&settings_path);
    if settings.time_limit_secs.is_none() {
        log::warn!("Endless settings in headless mode, capping the round at 60s");
        settings.time_limit_secs = Some(60.0);
    }

    let maze = match std::env::var("TILT_MAZE_MAZE") {
        Ok(path) => match Maze::load(&path) {
            Ok(maze) => maze,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        Err(_) => Maze::classic(),
    };

    let seed = std::env::var("TILT_MAZE_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5eed);
    log::info!("Autopilot seed: {}", seed);

    let mut game = Game::new(&settings, maze, seed);
    while game.session.phase() != GamePhase::GameOver {
        game.update(SIM_DT);
    }

    log::info!(
        "Round finished after {} ticks with score {}",
        game.session.time_ticks(),
        game.session.score()
    );
    println!("Final score: {}", game.session.score());
}
