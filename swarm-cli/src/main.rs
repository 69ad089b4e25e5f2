use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use swarm_core::{run_scene, EngineConfig, Scene, LEGACY_ENGINE};
use tracing_subscriber::EnvFilter;

mod watch;

#[derive(Parser)]
#[command(name = "swarm")]
#[command(about = "Swarm - force-directed layout of people and the files they touch", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a scene and print the final node states
    Run(RunArgs),
    /// Like `run`, but re-run every time the scene file changes
    Watch(RunArgs),
}

#[derive(Args, Clone)]
pub struct RunArgs {
    /// Path to the scene JSON file
    file: PathBuf,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 100)]
    frames: u64,

    /// Engine configuration (.json, or Key=Value properties otherwise)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Physics engine to use
    #[arg(short, long, default_value = LEGACY_ENGINE)]
    engine: String,

    /// Seed for the coincident-node randomizer
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => run_file(&args),
        Commands::Watch(args) => watch::watch_file(&args),
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(EngineConfig::load(path)?),
        None => Ok(EngineConfig::default()),
    }
}

pub fn run_file(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref())?;
    let scene = Scene::load(&args.file)?;
    let result = run_scene(&scene, config, &args.engine, args.frames, args.seed)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for node in result.nodes {
        println!(
            "{} ({:?}) pos = ({:.3}, {:.3}) vel = ({:.3}, {:.3})",
            node.name, node.kind, node.pos.x, node.pos.y, node.vel.x, node.vel.y
        );
    }

    Ok(())
}
