//! Simulation engine: the game controller.
//!
//! `SimulationEngine` owns the missile pool, the plane, the RNG and the
//! counters. `init` and `tick` are its only mutating entry points.
//! Completely headless: drawing and input go through the platform traits.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use salvo_core::constants::LAUNCH_VOLUME;
use salvo_core::events::AudioEvent;
use salvo_core::state::GameStateSnapshot;
use salvo_core::types::SimTime;

use crate::config::{ConfigError, SimConfig};
use crate::plane::Plane;
use crate::platform::{InputPanel, Surface};
use crate::pool::MissilePool;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::fire_control::FireLatch;

/// Longest status line: "Impacted: 4294967295".
const STATUS_TEXT_CAPACITY: usize = 24;

/// Undrained audio events kept before new ones are dropped.
pub(crate) const AUDIO_EVENT_CAPACITY: usize = 8;

/// The simulation engine. Owns the pool and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    pool: MissilePool,
    plane: Plane,
    rng: ChaCha8Rng,
    time: SimTime,
    fire_latch: FireLatch,
    score: ScoreState,
    audio_events: Vec<AudioEvent>,
    status_text: String,
}

impl SimulationEngine {
    /// Validate the config, allocate the pool and run `init`.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let pool = MissilePool::new(&config);
        let plane = Plane::new(pool.plane_slot(), &mut rng);

        let mut engine = Self {
            config,
            pool,
            plane,
            rng,
            time: SimTime::default(),
            fire_latch: FireLatch::default(),
            score: ScoreState::default(),
            audio_events: Vec::with_capacity(AUDIO_EVENT_CAPACITY),
            status_text: String::with_capacity(STATUS_TEXT_CAPACITY),
        };
        engine.init();
        Ok(engine)
    }

    /// Reset the pool, plane and counters.
    ///
    /// Enemy slots are launched immediately; player and plane slots park.
    pub fn init(&mut self) {
        for i in self.pool.enemy_range() {
            self.pool[i].spawn_enemy(&mut self.rng);
        }
        for i in self.pool.player_range().chain(self.pool.plane_range()) {
            self.pool[i].spawn_idle();
        }
        self.plane.init(self.pool.plane_slot(), &mut self.rng);

        self.score = ScoreState::default();
        self.time = SimTime::default();
        self.fire_latch.reset();
        self.audio_events.clear();
        self.audio_events.push(AudioEvent::SetVolume {
            percent: LAUNCH_VOLUME,
        });

        log::debug!(
            "engine init: {} enemy, {} player, {} plane slots",
            self.pool.enemy_range().len(),
            self.pool.player_range().len(),
            self.pool.plane_range().len(),
        );
    }

    /// Advance the simulation by one frame. Never fails.
    ///
    /// Audio events accumulate until `drain_audio_events` is called; once
    /// `AUDIO_EVENT_CAPACITY` are pending, further events are dropped.
    pub fn tick(&mut self, input: &impl InputPanel, surface: &mut impl Surface) {
        // 1. Missile state machines, in slot order
        for missile in self.pool.iter_mut() {
            missile.tick(surface);
        }
        // 2. Keep the enemy supply saturated
        systems::replenish::run(&mut self.pool, &mut self.rng);
        // 3. Player fire on the button edge
        systems::fire_control::run(
            &mut self.pool,
            input,
            &mut self.fire_latch,
            &mut self.score,
            &mut self.audio_events,
        );
        // 4. Chain detonations, applied on the next tick
        systems::collision::flag_chain_detonations(&mut self.pool);
        // 5. Ground impacts
        systems::scoring::count_impacts(&self.pool, &mut self.score);
        // 6. Plane and status line
        let plane_missile = match self.plane.missile_slot() {
            Some(slot) => self.pool.get_mut(slot),
            None => None,
        };
        self.plane.tick(plane_missile, &mut self.rng, surface);
        systems::hud::draw_status(&self.score, &mut self.status_text, surface);
        // 7. Plane caught in a blast
        if systems::collision::check_plane(&self.pool, &mut self.plane, &mut self.rng) {
            self.score.planes_destroyed += 1;
        }

        self.time.advance();
    }

    /// Drain audio requests produced since the last call.
    pub fn drain_audio_events(&mut self) -> std::vec::Drain<'_, AudioEvent> {
        self.audio_events.drain(..)
    }

    /// Build a snapshot of the current state.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(&self.pool, &self.plane, &self.score, &self.time)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn pool(&self) -> &MissilePool {
        &self.pool
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Mutable pool access for scenario setup in tests.
    #[cfg(test)]
    pub(crate) fn pool_mut(&mut self) -> &mut MissilePool {
        &mut self.pool
    }
}
