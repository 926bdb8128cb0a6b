//! Game loop thread: runs the simulation engine at `TICK_RATE` and publishes
//! snapshots.
//!
//! The engine is built on the caller's thread so configuration errors are
//! returned from `spawn_game_loop`. Commands arrive via `mpsc` channel and
//! the latest snapshot is stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use salvo_core::commands::PlayerCommand;
use salvo_core::constants::TICK_RATE;
use salvo_core::state::GameStateSnapshot;
use salvo_sim::{SimConfig, SimulationEngine};

use crate::error::HostError;
use crate::recorder::{FrameRecorder, FrameStats};
use crate::state::{GameLoopCommand, LatchedInput};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// What a finished run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub draws: FrameStats,
}

/// Handle to a running game loop thread.
pub struct GameLoopHandle {
    command_tx: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    thread: JoinHandle<RunSummary>,
}

impl GameLoopHandle {
    /// Forward a player command. Returns `false` if the loop has exited.
    pub fn send(&self, cmd: PlayerCommand) -> bool {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(cmd))
            .is_ok()
    }

    /// Latest published snapshot, if any tick has run.
    pub fn latest_snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Stop the loop and wait for it.
    pub fn shutdown(self) -> Result<RunSummary, HostError> {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        self.thread.join().map_err(|_| HostError::LoopPanicked)
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(config: SimConfig) -> Result<GameLoopHandle, HostError> {
    let engine = SimulationEngine::new(config)?;
    let latest_snapshot = Arc::new(Mutex::new(None));
    let (command_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let shared = Arc::clone(&latest_snapshot);
    let thread = std::thread::Builder::new()
        .name("salvo-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, &shared))
        .map_err(HostError::Spawn)?;

    log::info!("game loop started at {TICK_RATE} Hz");
    Ok(GameLoopHandle {
        command_tx,
        latest_snapshot,
        thread,
    })
}

/// Advance one frame and drain its side effects.
pub fn step(engine: &mut SimulationEngine, input: &LatchedInput, recorder: &mut FrameRecorder) {
    engine.tick(input, recorder);
    let draws = recorder.end_frame();
    for event in engine.drain_audio_events() {
        log::debug!("audio: {event:?}");
    }
    log::trace!("frame {}: {draws:?}", engine.time().tick);
}

/// Run `frames` ticks on the current thread as fast as possible, feeding
/// each frame the commands `script` returns for it.
pub fn run_headless(
    config: SimConfig,
    frames: u64,
    mut script: impl FnMut(u64) -> Vec<PlayerCommand>,
) -> Result<(GameStateSnapshot, RunSummary), HostError> {
    let mut engine = SimulationEngine::new(config)?;
    let mut input = LatchedInput::new();
    let mut recorder = FrameRecorder::new();

    for frame in 0..frames {
        for cmd in script(frame) {
            if input.apply(&cmd) {
                engine.init();
            }
        }
        step(&mut engine, &input, &mut recorder);
    }

    Ok((engine.snapshot(), summarize(&recorder)))
}

/// Feed `script` to a running loop, one batch of commands per tick period.
/// Stops at the first frame the loop no longer accepts commands. Returns
/// the number of frames fed.
pub fn feed_script(
    handle: &GameLoopHandle,
    frames: u64,
    mut script: impl FnMut(u64) -> Vec<PlayerCommand>,
) -> u64 {
    for frame in 0..frames {
        for cmd in script(frame) {
            if !handle.send(cmd) {
                log::warn!("game loop exited early, stopped feeding at frame {frame}");
                return frame;
            }
        }
        std::thread::sleep(TICK_DURATION);
    }
    frames
}

/// Run the threaded game loop at `TICK_RATE` while feeding it `script`.
pub fn run_realtime(
    config: SimConfig,
    frames: u64,
    script: impl FnMut(u64) -> Vec<PlayerCommand>,
) -> Result<(GameStateSnapshot, RunSummary), HostError> {
    let handle = spawn_game_loop(config.clone())?;
    feed_script(&handle, frames, script);

    let snapshot = handle.latest_snapshot();
    let summary = handle.shutdown()?;
    let snapshot = match snapshot {
        Some(s) => s,
        // No tick published yet: report the freshly initialized state
        None => SimulationEngine::new(config)?.snapshot(),
    };
    Ok((snapshot, summary))
}

fn summarize(recorder: &FrameRecorder) -> RunSummary {
    RunSummary {
        frames: recorder.frames(),
        draws: recorder.totals(),
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> RunSummary {
    let mut input = LatchedInput::new();
    let mut recorder = FrameRecorder::new();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    if input.apply(&cmd) {
                        engine.init();
                    }
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("game loop stopped after {} frames", recorder.frames());
                    return summarize(&recorder);
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick
        step(&mut engine, &input, &mut recorder);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(engine.snapshot());
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
