//! Maze Drop entry point
//!
//! Generates a maze, prints it, and drives it in the headless engine.
//! Each line on stdin is a sequence of keys (w/a/s/d); after each line the
//! world advances a few frames and the ball position is printed. Reaching
//! the goal unlocks the world and the walls start to fall.
//!
//! Usage: maze-drop [settings.json] [--seed N]

use std::io::BufRead;
use std::time::{SystemTime, UNIX_EPOCH};

use maze_drop::consts::SIM_DT;
use maze_drop::engine::HeadlessEngine;
use maze_drop::sim::InputDirection;
use maze_drop::{MazeWorld, PhysicsEngine, Settings, build_maze};

/// Frames simulated per input line
const FRAMES_PER_LINE: u32 = 10;

struct Args {
    settings_path: Option<String>,
    seed: Option<u64>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        settings_path: None,
        seed: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--seed" {
            let value = iter.next().ok_or("--seed needs a value")?;
            let seed = value
                .parse()
                .map_err(|e| format!("bad seed {value:?}: {e}"))?;
            args.seed = Some(seed);
        } else {
            args.settings_path = Some(arg);
        }
    }
    Ok(args)
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();
    log::info!("Maze Drop starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: maze-drop [settings.json] [--seed N]");
            std::process::exit(2);
        }
    };

    let settings = match &args.settings_path {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let seed = args.seed.or(settings.seed).unwrap_or_else(time_seed);

    let (maze, layout) = match build_maze(&settings, seed) {
        Ok(built) => built,
        Err(e) => {
            log::error!("Maze generation failed: {e}");
            std::process::exit(1);
        }
    };

    println!("seed {seed}");
    print!("{}", maze.edges);

    let mut engine = HeadlessEngine::new();
    let mut world = MazeWorld::build(&mut engine, &layout, settings.gravity());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read input: {e}");
                break;
            }
        };
        for key in line.chars().filter(|c| !c.is_whitespace()) {
            match InputDirection::from_key(&key.to_string()) {
                Some(direction) => world.on_input(&mut engine, direction),
                None => log::warn!("Ignoring key {key:?}"),
            }
        }
        for _ in 0..FRAMES_PER_LINE {
            engine.step(SIM_DT);
            let pairs = engine.collision_starts();
            if world.on_collision_start(&mut engine, &pairs) {
                println!("goal reached, walls collapsing");
            }
        }
        if let Some(ball) = engine.body(world.ball()) {
            println!(
                "ball ({:.1}, {:.1}) vel ({:.1}, {:.1})",
                ball.pos.x, ball.pos.y, ball.vel.x, ball.vel.y
            );
        }
    }
}
