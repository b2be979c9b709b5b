pub const WORLD_WIDTH: f32 = 1600.0;
pub const WORLD_HEIGHT: f32 = 840.0;
/// Fraction of the world height reserved for the path buttons strip.
pub const GUI_HEIGHT_PROPORTION: f32 = 0.12;
/// Fraction of each axis kept free of stations along the borders.
pub const STATION_PADDING_RATIO: f32 = 0.1;

pub const NUM_STATIONS: usize = 10;
pub const STATION_SIZE: f32 = 60.0;
pub const MIN_STATION_DISTANCE: f32 = STATION_SIZE * 3.0;
pub const STATION_CAPACITY: usize = 12;
/// Upper bound on rejection-sampling attempts per station placement.
pub const STATION_PLACEMENT_ATTEMPTS: usize = 1_000;

pub const METRO_CAPACITY: usize = 6;
/// Metro speed in pixels per millisecond.
pub const METRO_SPEED_PER_MS: f32 = 0.15;
pub const MAX_METROS: usize = 6;

pub const MAX_PATHS: usize = 5;
pub const PATH_WIDTH: f32 = 10.0;
/// Perpendicular distance in pixels between two parallel lines of
/// consecutive path order.
pub const PATH_ORDER_SHIFT: f32 = 10.0;

pub const PASSENGER_SPAWN_INTERVAL_MS: f32 = 8_000.0;
/// The first spawn fires after `interval / FIRST_SPAWN_DIVISOR`.
pub const FIRST_SPAWN_DIVISOR: f32 = 3.0;

/// Simulated milliseconds advanced per fixed tick at speed 1.
pub const TICK_MS: f32 = 16.0;
pub const MAX_GAME_SPEED: u32 = 8;

/// Any station queue above this length marks the run as failed.
pub const FAIL_QUEUE_THRESHOLD: usize = 10;
/// A station held at full capacity this long marks the run as failed.
pub const OVERFLOW_TIMEOUT_MS: f32 = 2_000.0;
