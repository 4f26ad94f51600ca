//! Hover Tank headless host
//!
//! Runs back-to-back sessions with a built-in autopilot driving the touch
//! pads, restarting after every game over.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;

use hover_tank::consts::{AIM_PAD_CENTER, MOVE_PAD_CENTER};
use hover_tank::scoreboard::ScoreEntry;
use hover_tank::sim::{GameEvent, GameState, tick};
use hover_tank::{InputMapper, Scoreboard, SimulationConfig};

const MOVE_FINGER: u64 = 1;
const AIM_FINGER: u64 = 2;

#[derive(Parser, Debug)]
#[command(name = "hover-tank")]
#[command(about = "Run Hover Tank sessions headless with an autopilot")]
struct Args {
    /// Seed for enemy spawns
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Number of sessions to play
    #[arg(long, default_value_t = 3)]
    sessions: u32,

    /// Give up on a session after this many frames
    #[arg(long, default_value_t = 60 * 60 * 5)]
    max_frames: u64,

    /// Arena width
    #[arg(long, default_value_t = 1920.0)]
    width: f32,

    /// Arena height
    #[arg(long, default_value_t = 1080.0)]
    height: f32,

    /// JSON config file (overrides --width/--height)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final snapshot of each session as JSON
    #[arg(long)]
    dump_snapshot: bool,
}

fn load_config(args: &Args) -> Result<SimulationConfig> {
    match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SimulationConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => {
            let config = SimulationConfig::for_arena(args.width, args.height);
            config.validate().context("invalid arena size")?;
            Ok(config)
        }
    }
}

/// Press the pads like a cautious player: aim at the closest enemy, back away from it
fn autopilot(state: &GameState, mapper: &mut InputMapper) {
    let config = &state.config;
    let arena = Vec2::new(config.width, config.height);
    let reach = config.control_area_height / 2.0;
    let tank = state.tank.pos;

    let nearest = state
        .entities
        .enemies()
        .iter()
        .min_by(|a, b| {
            a.pos
                .distance_squared(tank)
                .partial_cmp(&b.pos.distance_squared(tank))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(enemy) = nearest else {
        mapper.finger_up(AIM_FINGER);
        mapper.finger_up(MOVE_FINGER);
        return;
    };

    let to_enemy = (enemy.pos - tank).normalize_or_zero();
    let aim_center = Vec2::new(AIM_PAD_CENTER.0, AIM_PAD_CENTER.1) * arena;
    let aim_touch = (aim_center + to_enemy * reach) / arena;
    mapper.finger_down(AIM_FINGER, aim_touch.x, aim_touch.y);

    // Flee, but drift back toward the middle so the walls don't pin us
    let to_center = (arena / 2.0 - tank) / arena;
    let flee = (-to_enemy + to_center * 2.0).normalize_or_zero();
    let move_center = Vec2::new(MOVE_PAD_CENTER.0, MOVE_PAD_CENTER.1) * arena;
    let move_touch = (move_center + flee * reach) / arena;
    mapper.finger_down(MOVE_FINGER, move_touch.x, move_touch.y);
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args)?;
    log::info!("Hover Tank (headless) starting, {} sessions", args.sessions);

    let mut state = GameState::new(config, args.seed);
    let mut mapper = InputMapper::new(&state.config);
    let mut board = Scoreboard::new();

    for session in 0..args.sessions {
        if session > 0 {
            state.restart();
            mapper.clear();
        }

        let mut shots = 0u64;
        while !state.is_game_over() && state.frame < args.max_frames {
            autopilot(&state, &mut mapper);
            let report = tick(&mut state, &mapper.sample());
            shots += report
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::ProjectileFired { .. }))
                .count() as u64;
        }

        if !state.is_game_over() {
            log::warn!("Session {} hit the {} frame limit", state.session, args.max_frames);
        }
        log::info!(
            "Session {} over: score {}, {} frames, {} shots, {} enemies left",
            state.session,
            state.score,
            state.frame,
            shots,
            state.entities.enemies().len()
        );

        if args.dump_snapshot {
            let json = serde_json::to_string(&state.snapshot()).context("serializing snapshot")?;
            println!("{json}");
        }

        board.record(ScoreEntry {
            score: state.score,
            frames: state.frame,
            session: state.session,
        });
    }

    println!("\nScoreboard:");
    for (rank, entry) in board.entries.iter().enumerate() {
        println!(
            "{:>2}. {:>5} pts  {:>6} frames  (session {})",
            rank + 1,
            entry.score,
            entry.frames,
            entry.session
        );
    }

    Ok(())
}
