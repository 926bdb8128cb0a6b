//! salvo: run the missile-command simulation headless and print the final
//! snapshot as JSON.
//!
//! Usage:
//!   salvo --frames 600 --seed 7
//!   salvo --config salvo.json --realtime

use std::path::PathBuf;
use std::process;

use salvo_app::config::load_config;
use salvo_app::game_loop;
use salvo_app::script;
use salvo_app::HostError;
use salvo_sim::SimConfig;

const DEFAULT_FRAMES: u64 = 500;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), HostError> {
    let mut config = match parse_config_path(args) {
        Some(path) => load_config(&path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = parse_u64(args, "--seed") {
        config.seed = seed;
    }
    let frames = parse_u64(args, "--frames").unwrap_or(DEFAULT_FRAMES);

    let (snapshot, summary) = if args.iter().any(|a| a == "--realtime") {
        game_loop::run_realtime(config, frames, script::commands_for_frame)?
    } else {
        game_loop::run_headless(config, frames, script::commands_for_frame)?
    };

    log::info!(
        "{} frames: {} shots, {} impacts, {} planes destroyed; draws {:?}",
        summary.frames,
        snapshot.score.shots_fired,
        snapshot.score.impacts,
        snapshot.score.planes_destroyed,
        summary.draws,
    );

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn print_usage() {
    eprintln!(
        "salvo: missile-command simulation, scripted demo\n\
         \n\
           --frames <N>     Frames to simulate (default: {DEFAULT_FRAMES})\n\
           --seed <S>       RNG seed (overrides the config file)\n\
           --config <path>  JSON SimConfig; missing fields use defaults\n\
           --realtime       Run on the game loop thread at the tick rate\n\
         \n\
         Set RUST_LOG=debug for per-frame audio and sortie logging.\n"
    );
}

fn parse_u64(args: &[String], flag: &str) -> Option<u64> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn parse_config_path(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--config" && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}
