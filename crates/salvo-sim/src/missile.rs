//! Missile entity: geometry, kind and the per-tick state machine.
//!
//! Player, enemy and plane missiles share this one record. Behavior
//! branches on `MissileKind` only for speed, color and spawn geometry.

use rand::Rng;

use salvo_core::constants::*;
use salvo_core::enums::{MissileKind, MissileState};
use salvo_core::types::{distance, Point};

use crate::platform::Surface;

/// One projectile slot.
#[derive(Debug, Clone)]
pub struct Missile {
    kind: MissileKind,
    state: MissileState,
    origin: Point,
    destination: Point,
    current: Point,
    /// Distance covered along origin -> destination.
    traveled: f32,
    total_distance: f32,
    explode_requested: bool,
    blast_radius: f32,
}

impl Default for Missile {
    fn default() -> Self {
        Self {
            kind: MissileKind::default(),
            state: MissileState::Idle,
            origin: Point::ZERO,
            destination: Point::ZERO,
            current: Point::ZERO,
            traveled: 0.0,
            total_distance: 0.0,
            explode_requested: false,
            blast_radius: 0.0,
        }
    }
}

/// Launch site for a player missile aimed at `target_x`.
///
/// Three sites sit on the bottom edge at 1/4, 1/2 and 3/4 of the width;
/// the closest one fires.
pub fn player_launch_site(target_x: i32) -> Point {
    let x = if target_x < 3 * DISPLAY_WIDTH / 8 {
        DISPLAY_WIDTH / 4
    } else if target_x < 5 * DISPLAY_WIDTH / 8 {
        DISPLAY_WIDTH / 2
    } else {
        3 * DISPLAY_WIDTH / 4
    };
    Point::new(x, DISPLAY_HEIGHT)
}

impl Missile {
    // --- Spawning ---

    /// Park the slot. No geometry is touched.
    pub fn spawn_idle(&mut self) {
        self.state = MissileState::Idle;
    }

    /// Launch from the nearest ground site toward `target`.
    pub fn spawn_player(&mut self, target: Point) {
        self.launch(MissileKind::Player, player_launch_site(target.x), target);
    }

    /// Launch from a random point near the top toward a random ground point.
    pub fn spawn_enemy(&mut self, rng: &mut impl Rng) {
        let origin = Point::new(
            rng.gen_range(0..DISPLAY_WIDTH),
            rng.gen_range(0..DISPLAY_HEIGHT / ENEMY_ORIGIN_BAND_DIVISOR),
        );
        let destination = random_ground_point(rng);
        self.launch(MissileKind::Enemy, origin, destination);
    }

    /// Launch from the plane's position toward a random ground point.
    pub fn spawn_plane(&mut self, rng: &mut impl Rng, origin: Point) {
        let destination = random_ground_point(rng);
        self.launch(MissileKind::Plane, origin, destination);
    }

    fn launch(&mut self, kind: MissileKind, origin: Point, destination: Point) {
        *self = Self {
            kind,
            state: MissileState::Initializing,
            origin,
            destination,
            current: origin,
            traveled: 0.0,
            total_distance: distance(origin, destination),
            explode_requested: false,
            blast_radius: 0.0,
        };
    }

    // --- Control ---

    /// Ask a moving missile to detonate. Takes effect on its next tick.
    pub fn request_explosion(&mut self) {
        self.explode_requested = true;
    }

    /// Advance one tick: state transition first, then the state's action.
    pub fn tick(&mut self, surface: &mut impl Surface) {
        self.transition();
        self.act(surface);
    }

    fn transition(&mut self) {
        self.state = match self.state {
            MissileState::Initializing => MissileState::Moving,
            MissileState::Moving if self.explode_requested => {
                self.explode_requested = false;
                MissileState::ExplodingGrowing
            }
            MissileState::Moving
                if self.kind != MissileKind::Player && self.arrived() =>
            {
                MissileState::Impacted
            }
            MissileState::ExplodingGrowing if self.blast_radius >= EXPLOSION_MAX_RADIUS => {
                MissileState::ExplodingShrinking
            }
            MissileState::ExplodingShrinking if self.blast_radius <= 0.0 => MissileState::Idle,
            MissileState::Impacted => MissileState::Idle,
            other => other,
        };
    }

    fn act(&mut self, surface: &mut impl Surface) {
        match self.state {
            MissileState::Moving => {
                self.traveled += self.kind.speed();
                self.current = self.interpolate();
                surface.draw_line(self.origin, self.current, self.kind.color());

                // Player missiles detonate at the aim point instead of impacting.
                if self.kind == MissileKind::Player && self.arrived() {
                    self.request_explosion();
                }
            }
            MissileState::ExplodingGrowing => {
                self.blast_radius += EXPLOSION_RADIUS_STEP;
                surface.fill_circle(self.current, self.blast_radius, self.kind.color());
            }
            MissileState::ExplodingShrinking => {
                self.blast_radius = (self.blast_radius - EXPLOSION_RADIUS_STEP).max(0.0);
                surface.fill_circle(self.current, self.blast_radius, self.kind.color());
            }
            MissileState::Initializing | MissileState::Impacted | MissileState::Idle => {}
        }
    }

    fn arrived(&self) -> bool {
        self.traveled >= self.total_distance
    }

    /// Point on the trajectory for the distance traveled so far.
    fn interpolate(&self) -> Point {
        let fraction = if self.total_distance > 0.0 {
            (self.traveled / self.total_distance).min(1.0)
        } else {
            1.0
        };
        let delta = (self.destination - self.origin).as_vec2();
        (self.origin.as_vec2() + delta * fraction).as_ivec2()
    }

    // --- Status ---

    pub fn kind(&self) -> MissileKind {
        self.kind
    }

    pub fn state(&self) -> MissileState {
        self.state
    }

    pub fn position(&self) -> Point {
        self.current
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn destination(&self) -> Point {
        self.destination
    }

    pub fn traveled(&self) -> f32 {
        self.traveled
    }

    pub fn total_distance(&self) -> f32 {
        self.total_distance
    }

    pub fn blast_radius(&self) -> f32 {
        self.blast_radius
    }

    pub fn explode_requested(&self) -> bool {
        self.explode_requested
    }

    pub fn is_moving(&self) -> bool {
        self.state == MissileState::Moving
    }

    /// Exploding missiles can detonate other missiles and the plane.
    pub fn is_exploding(&self) -> bool {
        matches!(
            self.state,
            MissileState::ExplodingGrowing | MissileState::ExplodingShrinking
        )
    }

    pub fn is_idle(&self) -> bool {
        self.state == MissileState::Idle
    }

    pub fn is_impacted(&self) -> bool {
        self.state == MissileState::Impacted
    }

    /// Whether an object at `point` is inside this missile's blast.
    /// The other object is treated as a point.
    pub fn is_colliding(&self, point: Point) -> bool {
        self.is_exploding() && distance(point, self.current) <= self.blast_radius
    }
}

fn random_ground_point(rng: &mut impl Rng) -> Point {
    Point::new(rng.gen_range(0..DISPLAY_WIDTH), DISPLAY_HEIGHT)
}
