//! Simulation constants and tuning parameters.
//!
//! Distances are in display pixels; speeds are pixels per tick with no
//! further physical unit attached.

use crate::types::Color;

/// Simulation tick rate (Hz). One frame every 40 ms.
pub const TICK_RATE: u32 = 25;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Display ---

/// Display width in pixels.
pub const DISPLAY_WIDTH: i32 = 320;

/// Display height in pixels. The bottom edge is the ground line.
pub const DISPLAY_HEIGHT: i32 = 240;

// --- Entity pool ---

/// Hard ceiling on the number of missile slots in one pool.
pub const MAX_POOL_SLOTS: usize = 32;

/// Default number of enemy missile slots.
pub const MAX_ENEMY_MISSILES: usize = 7;

/// Default number of player missile slots.
pub const MAX_PLAYER_MISSILES: usize = 4;

/// Default number of plane missile slots (zero or one).
pub const MAX_PLANE_MISSILES: usize = 1;

// --- Missiles ---

/// Enemy missile distance per tick.
pub const ENEMY_MISSILE_DISTANCE_PER_TICK: f32 = 1.0;

/// Player missile distance per tick.
pub const PLAYER_MISSILE_DISTANCE_PER_TICK: f32 = 5.0;

/// Plane missile distance per tick. Plane missiles fly like enemy missiles.
pub const PLANE_MISSILE_DISTANCE_PER_TICK: f32 = ENEMY_MISSILE_DISTANCE_PER_TICK;

/// Radius at which a growing explosion starts to shrink.
pub const EXPLOSION_MAX_RADIUS: f32 = 30.0;

/// Radius change per tick while growing or shrinking.
pub const EXPLOSION_RADIUS_STEP: f32 = 0.5;

/// Enemy missiles start within the top `DISPLAY_HEIGHT / ENEMY_ORIGIN_BAND_DIVISOR` rows.
pub const ENEMY_ORIGIN_BAND_DIVISOR: i32 = 8;

// --- Plane ---

/// Plane horizontal distance per tick.
pub const PLANE_DISTANCE_PER_TICK: i32 = 1;

/// Ticks the plane waits off-screen between sorties (5 seconds).
pub const PLANE_IDLE_TIME_TICKS: i32 = 125;

/// Plane silhouette width.
pub const PLANE_WIDTH: i32 = 20;

/// Plane silhouette height.
pub const PLANE_HEIGHT: i32 = 10;

/// Fixed altitude (row) the plane flies at.
pub const PLANE_Y: i32 = 20;

// --- Input ---

/// Mask of the buttons that count as "fire".
pub const BUTTON_MASK: u32 = 0b1111;

// --- Status line ---

/// Row of the status line.
pub const STATUS_Y: i32 = 5;

/// Column of the shots-fired counter.
pub const STATUS_SHOTS_X: i32 = 50;

/// Column of the impacts counter.
pub const STATUS_IMPACTS_X: i32 = 150;

// --- Sound ---

/// Volume set on init (percent).
pub const LAUNCH_VOLUME: u8 = 20;

// --- Colors ---

pub const COLOR_PLAYER_MISSILE: Color = Color::rgb(0, 255, 0);
pub const COLOR_ENEMY_MISSILE: Color = Color::rgb(255, 0, 0);
pub const COLOR_PLANE_MISSILE: Color = Color::rgb(255, 255, 255);
pub const COLOR_PLANE: Color = Color::rgb(255, 255, 255);
pub const COLOR_STATUS: Color = Color::rgb(255, 255, 0);
