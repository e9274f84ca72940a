use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use toroidal_life::{Engine, EngineConfig, LifeRng, rendering};

#[derive(Parser, Debug)]
#[command(name = "toroidal-life")]
#[command(about = "Conway's Game of Life on a toroidal grid, printed to the console")]
struct Args {
    /// Side length of the square universe
    #[arg(default_value_t = 10)]
    size: i64,

    /// Number of generations to show before stopping
    #[arg(default_value_t = 100)]
    generations: i64,

    /// Seed for a reproducible run (OS entropy if not given)
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between generations, in milliseconds
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => {
            log::info!("seeding universe with --seed {seed}");
            LifeRng::seeded(seed)
        }
        None => LifeRng::from_entropy(),
    };

    let mut engine = Engine::new(
        EngineConfig {
            size: args.size,
            max_generations: args.generations,
        },
        rng,
    )
    .context("cannot start the simulation")?;

    engine.seed_random();
    show(&engine);

    while !engine.is_terminal() {
        engine.step()?;
        show(&engine);
        thread::sleep(Duration::from_millis(args.delay_ms));
    }

    if let Some(reason) = engine.termination() {
        log::info!(
            "finished at generation {}: {:?}",
            engine.generation(),
            reason
        );
    }
    println!("The End");
    Ok(())
}

/// Print one generation: the header, the grid rows, a blank spacer line
fn show(engine: &Engine) {
    println!("{}", rendering::header(engine.generation()));
    for row in engine.render_rows() {
        println!("{row}");
    }
    println!();
}
