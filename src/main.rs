//! Duck Sort headless runner
//!
//! Starts a session and drives it with an autopilot pointer until the board
//! is sorted or the tick budget runs out. Useful for checking seeds and
//! tuning without a renderer.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glam::DVec2;

use duck_sort::seed::SeedSource;
use duck_sort::sim::Duck;
use duck_sort::{Session, SessionPhase, Settings};

#[derive(Debug, Parser)]
#[command(name = "duck-sort", about = "Headless duck sorting run")]
struct Cli {
    /// Seed to play (defaults to today's daily seed)
    #[arg(long, conflicts_with_all = ["daily", "random"])]
    seed: Option<String>,
    /// Use today's UTC daily seed
    #[arg(long)]
    daily: bool,
    /// Use a fresh random seed
    #[arg(long, conflicts_with = "daily")]
    random: bool,
    /// Number of ducks (4-50)
    #[arg(long)]
    pieces: Option<u32>,
    /// Number of colors (2-10)
    #[arg(long)]
    colors: Option<u32>,
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Give up after this many ticks
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u64,
}

impl Cli {
    fn seed_source(&self) -> SeedSource {
        match (&self.seed, self.daily, self.random) {
            (Some(seed), _, _) => SeedSource::Fixed(seed.clone()),
            (None, false, true) => SeedSource::Random,
            _ => SeedSource::Daily,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> duck_sort::Result<()> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(pieces) = cli.pieces {
        settings.piece_count = pieces;
    }
    if let Some(colors) = cli.colors {
        settings.color_count = colors;
    }

    let seed = cli.seed_source().resolve();
    let mut session = Session::new(&seed, settings)?;
    let cluster_radius = session.settings().physics.cluster_radius;

    while session.ticks() < cli.max_ticks {
        let pointer = herd_pointer(session.ducks(), cluster_radius);
        let outcome = session.tick_default(pointer);
        if outcome.phase == SessionPhase::Won {
            break;
        }
    }

    match session.result() {
        Some(result) => {
            println!(
                "Sorted in {} ticks ({}s) on seed {}",
                result.ticks,
                result.time_display(),
                result.seed
            );
        }
        None => {
            let left: Vec<&str> = session
                .unsorted_colors()
                .into_iter()
                .map(|c| c.name())
                .collect();
            println!(
                "Not sorted after {} ticks on seed {} (still scattered: {})",
                session.ticks(),
                session.seed(),
                left.join(", ")
            );
        }
    }
    Ok(())
}

/// Distance behind a duck the pointer sits to push it toward its group
const PUSH_OFFSET: f64 = 50.0;

/// Pick the stray duck farthest from its color's centroid and put the
/// pointer behind it, so the repulsion field pushes it home.
fn herd_pointer(ducks: &[Duck], cluster_radius: f64) -> Option<DVec2> {
    let stray = ducks
        .iter()
        .enumerate()
        .filter(|(i, duck)| {
            let mut same = ducks
                .iter()
                .enumerate()
                .filter(|(j, other)| j != i && other.color == duck.color)
                .peekable();
            same.peek().is_some() && !same.any(|(_, o)| duck.distance_to(o) < cluster_radius)
        })
        .filter_map(|(i, duck)| {
            let target = color_centroid(ducks, duck, i)?;
            Some((duck, target, duck.pos.distance(target)))
        })
        .max_by(|a, b| a.2.total_cmp(&b.2))?;

    let (duck, target, _) = stray;
    let toward = (target - duck.pos).normalize_or_zero();
    Some(duck.pos - toward * PUSH_OFFSET)
}

/// Centroid of the other ducks sharing `duck`'s color
fn color_centroid(ducks: &[Duck], duck: &Duck, index: usize) -> Option<DVec2> {
    let (sum, count) = ducks
        .iter()
        .enumerate()
        .filter(|(j, other)| *j != index && other.color == duck.color)
        .fold((DVec2::ZERO, 0usize), |(sum, n), (_, o)| (sum + o.pos, n + 1));
    (count > 0).then(|| sum / count as f64)
}
