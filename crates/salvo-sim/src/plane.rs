//! Plane entity: crosses the display right to left and drops one missile
//! per sortie into a pool slot it was handed at init.

use rand::Rng;

use salvo_core::constants::*;
use salvo_core::enums::PlaneState;
use salvo_core::types::Point;

use crate::missile::Missile;
use crate::platform::Surface;

#[derive(Debug, Clone)]
pub struct Plane {
    state: PlaneState,
    x_position: i32,
    idle_timeout: i32,
    /// Column below which the plane releases its missile.
    launch_trigger_x: i32,
    shots_remaining: u8,
    /// Pool index of the owned missile. `None` when the plane partition is empty.
    missile_slot: Option<usize>,
}

impl Plane {
    /// A parked, armed plane owning `missile_slot`.
    pub fn new(missile_slot: Option<usize>, rng: &mut impl Rng) -> Self {
        let mut plane = Self {
            state: PlaneState::Idle,
            x_position: DISPLAY_WIDTH,
            idle_timeout: PLANE_IDLE_TIME_TICKS,
            launch_trigger_x: 0,
            shots_remaining: 0,
            missile_slot,
        };
        plane.init(missile_slot, rng);
        plane
    }

    /// Park the plane and arm it for the next sortie.
    pub fn init(&mut self, missile_slot: Option<usize>, rng: &mut impl Rng) {
        self.missile_slot = missile_slot;
        self.rearm(rng);
    }

    /// Shot down: back to Idle, rearmed as after a full crossing.
    pub fn explode(&mut self, rng: &mut impl Rng) {
        log::info!("plane shot down at x={}", self.x_position);
        self.rearm(rng);
    }

    fn rearm(&mut self, rng: &mut impl Rng) {
        self.state = PlaneState::Idle;
        self.idle_timeout = PLANE_IDLE_TIME_TICKS;
        self.launch_trigger_x = rng.gen_range(0..DISPLAY_WIDTH);
        self.shots_remaining = 1;
    }

    /// Advance one tick. `missile` is the owned slot, if any.
    pub fn tick(
        &mut self,
        missile: Option<&mut Missile>,
        rng: &mut impl Rng,
        surface: &mut impl Surface,
    ) {
        match self.state {
            PlaneState::Idle => {
                if self.idle_timeout < 0 {
                    self.state = PlaneState::Moving;
                    self.x_position = DISPLAY_WIDTH;
                    log::debug!("plane sortie, release below x={}", self.launch_trigger_x);
                }
            }
            PlaneState::Moving => {
                if self.x_position < -PLANE_WIDTH {
                    log::debug!("plane left the display");
                    self.rearm(rng);
                }
            }
        }

        match self.state {
            PlaneState::Idle => self.idle_timeout -= 1,
            PlaneState::Moving => {
                self.x_position -= PLANE_DISTANCE_PER_TICK;
                let nose = self.position();
                let tail_x = self.x_position + PLANE_WIDTH;
                surface.fill_triangle(
                    nose,
                    Point::new(tail_x, PLANE_Y - PLANE_HEIGHT / 2),
                    Point::new(tail_x, PLANE_Y + PLANE_HEIGHT / 2),
                    COLOR_PLANE,
                );
                self.try_launch(missile, rng);
            }
        }
    }

    fn try_launch(&mut self, missile: Option<&mut Missile>, rng: &mut impl Rng) {
        // Off-screen columns never count as past the trigger.
        let past_trigger = (0..self.launch_trigger_x).contains(&self.x_position);
        if !past_trigger || self.shots_remaining == 0 {
            return;
        }
        match missile {
            Some(missile) if missile.is_idle() => {
                missile.spawn_plane(rng, self.position());
                self.shots_remaining -= 1;
            }
            Some(_) => log::trace!("plane missile slot busy, holding fire"),
            None => {}
        }
    }

    // --- Status ---

    pub fn state(&self) -> PlaneState {
        self.state
    }

    /// Nose position.
    pub fn position(&self) -> Point {
        Point::new(self.x_position, PLANE_Y)
    }

    pub fn is_flying(&self) -> bool {
        self.state == PlaneState::Moving
    }

    pub fn idle_timeout(&self) -> i32 {
        self.idle_timeout
    }

    pub fn launch_trigger_x(&self) -> i32 {
        self.launch_trigger_x
    }

    pub fn shots_remaining(&self) -> u8 {
        self.shots_remaining
    }

    pub fn missile_slot(&self) -> Option<usize> {
        self.missile_slot
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use salvo_core::enums::MissileKind;

    use super::*;
    use crate::platform::NullSurface;

    /// Run idle ticks until the plane takes off.
    fn launch(plane: &mut Plane, missile: &mut Missile, rng: &mut ChaCha8Rng) -> usize {
        let mut ticks = 0;
        while !plane.is_flying() {
            plane.tick(Some(&mut *missile), rng, &mut NullSurface);
            ticks += 1;
            assert!(ticks < 1000, "plane never took off");
        }
        ticks
    }

    #[test]
    fn test_init_parks_and_arms() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let plane = Plane::new(Some(4), &mut rng);
        assert_eq!(plane.state(), PlaneState::Idle);
        assert_eq!(plane.idle_timeout(), PLANE_IDLE_TIME_TICKS);
        assert_eq!(plane.shots_remaining(), 1);
        assert_eq!(plane.missile_slot(), Some(4));
        assert!((0..DISPLAY_WIDTH).contains(&plane.launch_trigger_x()));
    }

    #[test]
    fn test_takeoff_after_timeout_goes_negative() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut plane = Plane::new(None, &mut rng);
        let mut missile = Missile::default();
        let ticks = launch(&mut plane, &mut missile, &mut rng);
        // Timeout counts PLANE_IDLE_TIME_TICKS..=0 then -1, takeoff on the following tick.
        assert_eq!(ticks, PLANE_IDLE_TIME_TICKS as usize + 2);
        assert_eq!(plane.position().x, DISPLAY_WIDTH - PLANE_DISTANCE_PER_TICK);
    }

    #[test]
    fn test_single_launch_per_sortie() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut plane = Plane::new(Some(0), &mut rng);
        let mut missile = Missile::default();
        launch(&mut plane, &mut missile, &mut rng);

        let trigger = plane.launch_trigger_x();
        let mut launches = 0;
        while plane.is_flying() {
            let was_idle = missile.is_idle();
            plane.tick(Some(&mut missile), &mut rng, &mut NullSurface);
            if was_idle && !missile.is_idle() {
                launches += 1;
                assert_eq!(missile.kind(), MissileKind::Plane);
                assert_eq!(missile.origin(), plane.position());
                assert!(plane.position().x < trigger);
            }
        }
        // A trigger at column 0 is never crossed on-screen.
        assert_eq!(launches, usize::from(trigger > 0));
        assert_eq!(plane.shots_remaining(), 1, "rearmed after the crossing");
    }

    #[test]
    fn test_busy_slot_skips_launch() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut plane = Plane::new(Some(0), &mut rng);
        let mut missile = Missile::default();
        missile.spawn_enemy(&mut rng);
        launch(&mut plane, &mut missile, &mut rng);
        let occupant = missile.origin();

        while plane.is_flying() {
            plane.tick(Some(&mut missile), &mut rng, &mut NullSurface);
            assert_ne!(missile.kind(), MissileKind::Plane);
        }
        assert_eq!(missile.origin(), occupant);
    }

    #[test]
    fn test_crossing_ends_past_left_edge() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut plane = Plane::new(None, &mut rng);
        let mut missile = Missile::default();
        launch(&mut plane, &mut missile, &mut rng);
        let mut last_x = plane.position().x;
        while plane.is_flying() {
            last_x = plane.position().x;
            plane.tick(None, &mut rng, &mut NullSurface);
        }
        assert_eq!(last_x, -PLANE_WIDTH - 1);
        assert_eq!(plane.idle_timeout(), PLANE_IDLE_TIME_TICKS - 1);
    }

    #[test]
    fn test_explode_rearms() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut plane = Plane::new(Some(0), &mut rng);
        let mut missile = Missile::default();
        launch(&mut plane, &mut missile, &mut rng);
        for _ in 0..DISPLAY_WIDTH / 2 {
            plane.tick(Some(&mut missile), &mut rng, &mut NullSurface);
        }
        assert!(plane.is_flying());

        plane.explode(&mut rng);
        assert_eq!(plane.state(), PlaneState::Idle);
        assert_eq!(plane.idle_timeout(), PLANE_IDLE_TIME_TICKS);
        assert_eq!(plane.shots_remaining(), 1);
    }
}
