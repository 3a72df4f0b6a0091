//! Session state machine
//!
//! A [`Session`] owns one board from placement until it is won, restarted or
//! dropped. The host drives it by calling [`Session::tick`] once per frame
//! from whatever scheduler it has (render loop, timer, test harness).
//!
//! Phases: `Idle` until the first tick, `Running` while ducks move, `Won`
//! once the cluster check first passes. `Stopped` is entered only through
//! [`Session::stop`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::palette::DuckColor;
use crate::settings::{ConfigCheck, Settings};
use crate::sim::{self, Bounds, Duck, Sfc32, SpawnParams, TickInput};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Placed, waiting for the first tick
    Idle,
    /// Physics advancing, win check polled every tick
    Running,
    /// Sorted (terminal)
    Won,
    /// Torn down by the host; ticks are no-ops
    Stopped,
}

/// Completion record, produced exactly once per session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    /// Wall-clock seconds from the first tick to the winning tick
    pub elapsed_seconds: f64,
    pub seed: String,
    /// Ticks simulated, including the winning one
    pub ticks: u64,
}

impl GameResult {
    /// Elapsed time with two decimals, e.g. `"12.34"`
    pub fn time_display(&self) -> String {
        format!("{:.2}", self.elapsed_seconds)
    }
}

/// What a tick hands back to the host
#[derive(Debug, Clone, Copy)]
pub struct TickOutcome<'a> {
    pub ducks: &'a [Duck],
    pub phase: SessionPhase,
    pub result: Option<&'a GameResult>,
}

/// Monotonic time source for elapsed-time measurement
pub trait Clock {
    /// Time since an arbitrary fixed origin
    fn now(&self) -> Duration;
}

/// Real monotonic clock
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Host-advanced clock; clones share the same time
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// One game attempt
pub struct Session {
    seed: String,
    settings: Settings,
    winnable: bool,
    ducks: Vec<Duck>,
    phase: SessionPhase,
    ticks: u64,
    started_at: Option<Duration>,
    result: Option<GameResult>,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("seed", &self.seed)
            .field("phase", &self.phase)
            .field("ticks", &self.ticks)
            .field("ducks", &self.ducks.len())
            .field("result", &self.result)
            .finish()
    }
}

/// Start a session with default board and physics
pub fn start_session(seed: &str, piece_count: u32, color_count: u32) -> Result<Session> {
    Session::new(seed, Settings::with_counts(piece_count, color_count))
}

impl Session {
    /// Validate `settings` and place the ducks for `seed`
    pub fn new(seed: &str, settings: Settings) -> Result<Self> {
        Self::with_clock(seed, settings, Box::new(SystemClock::default()))
    }

    /// Like [`Session::new`], timing the run with `clock`
    pub fn with_clock(seed: &str, settings: Settings, clock: Box<dyn Clock>) -> Result<Self> {
        let winnable = match settings.check()? {
            ConfigCheck::Ok => true,
            ConfigCheck::Unwinnable => {
                log::warn!(
                    "{} ducks in {} colors: every color is a single duck, this board cannot be won",
                    settings.piece_count,
                    settings.color_count
                );
                false
            }
        };
        let ducks = place(seed, &settings)?;
        log::info!(
            "Session started with seed {} ({} ducks, {} colors)",
            seed,
            settings.piece_count,
            settings.color_count
        );

        Ok(Self {
            seed: seed.to_string(),
            settings,
            winnable,
            ducks,
            phase: SessionPhase::Idle,
            ticks: 0,
            started_at: None,
            result: None,
            clock,
        })
    }

    /// Re-place the same seed and go back to `Idle` ("play again")
    pub fn restart(&mut self) -> Result<()> {
        self.ducks = place(&self.seed, &self.settings)?;
        self.phase = SessionPhase::Idle;
        self.ticks = 0;
        self.started_at = None;
        self.result = None;
        log::info!("Session restarted with seed {}", self.seed);
        Ok(())
    }

    /// Tear the session down; the board stays readable but no longer moves
    pub fn stop(&mut self) {
        if self.phase != SessionPhase::Stopped {
            log::debug!("Session {} stopped after {} ticks", self.seed, self.ticks);
            self.phase = SessionPhase::Stopped;
        }
    }

    /// Advance one frame.
    ///
    /// `pointer` is sampled once by the host and held fixed for the whole
    /// tick. Once `Won` (or `Stopped`) the board is frozen and the stored
    /// result is returned unchanged.
    pub fn tick(&mut self, pointer: Option<DVec2>, bounds: Bounds) -> TickOutcome<'_> {
        match self.phase {
            SessionPhase::Won | SessionPhase::Stopped => return self.outcome(),
            SessionPhase::Idle => {
                self.started_at = Some(self.clock.now());
                self.phase = SessionPhase::Running;
            }
            SessionPhase::Running => {}
        }

        let input = TickInput { pointer };
        sim::step(&mut self.ducks, &input, &bounds, &self.settings.physics);
        self.ticks += 1;

        if self.winnable && sim::is_sorted(&self.ducks, self.settings.physics.cluster_radius) {
            let started = self.started_at.unwrap_or_default();
            let elapsed = self.clock.now().saturating_sub(started);
            let result = GameResult {
                elapsed_seconds: elapsed.as_secs_f64(),
                seed: self.seed.clone(),
                ticks: self.ticks,
            };
            log::info!(
                "Sorted in {}s ({} ticks) on seed {}",
                result.time_display(),
                result.ticks,
                result.seed
            );
            self.result = Some(result);
            self.phase = SessionPhase::Won;
        }

        self.outcome()
    }

    /// Tick against the board size the session was created with
    pub fn tick_default(&mut self, pointer: Option<DVec2>) -> TickOutcome<'_> {
        let bounds = self.settings.bounds();
        self.tick(pointer, bounds)
    }

    fn outcome(&self) -> TickOutcome<'_> {
        TickOutcome {
            ducks: &self.ducks,
            phase: self.phase,
            result: self.result.as_ref(),
        }
    }

    pub fn ducks(&self) -> &[Duck] {
        &self.ducks
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// False when every color has exactly one duck
    pub fn is_winnable(&self) -> bool {
        self.winnable
    }

    /// Colors still scattered, for hints
    pub fn unsorted_colors(&self) -> Vec<DuckColor> {
        sim::unsorted_colors(&self.ducks, self.settings.physics.cluster_radius)
    }
}

fn place(seed: &str, settings: &Settings) -> Result<Vec<Duck>> {
    let params = SpawnParams {
        piece_count: settings.piece_count as usize,
        color_count: settings.color_count,
        bounds: settings.bounds(),
        radius: settings.physics.radius,
        max_attempts: settings.max_placement_attempts,
    };
    sim::spawn_ducks(&params, &mut Sfc32::from_seed_str(seed))
}
