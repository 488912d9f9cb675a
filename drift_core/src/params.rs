/// Tuning table for the drift model
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 960.0;
    pub const ARENA_HEIGHT: f32 = 540.0;

    // Vehicle
    pub const VEHICLE_SIZE: f32 = 20.0; // footprint, also the sprite width
    pub const VEHICLE_LENGTH_RATIO: f32 = 1.6; // sprite length = size * ratio
    pub const MAX_SPEED: f32 = 600.0; // units per second
    pub const ACCELERATION: f32 = 1200.0;
    pub const REVERSE_THROTTLE: f32 = 0.8; // braking is weaker than driving

    // Steering (rad/s at full lock)
    pub const NORMAL_STEER_RATE: f32 = 3.5;
    pub const DRIFT_STEER_RATE: f32 = 4.5;
    pub const MIN_STEER_DAMPING: f32 = 0.3;
    pub const STEER_FALLOFF_SPEED_RATIO: f32 = 1.2;

    // Drift
    pub const DRIFT_THRESHOLD: f32 = 100.0;

    // Friction (per second)
    pub const NORMAL_LONG_FRICTION: f32 = 2.5;
    pub const NORMAL_LAT_FRICTION: f32 = 4.0;
    pub const DRIFT_LONG_FRICTION: f32 = 4.0;
    pub const DRIFT_LAT_FRICTION: f32 = 0.05; // very slippery sideways

    // Drag
    pub const AIR_DRAG_COEFF: f32 = 1.2;
    pub const ROLLING_RESIST: f32 = 120.0;

    // Smoke
    pub const SMOKE_MIN_LATERAL: f32 = 20.0;
    pub const SMOKE_PER_FRAME: usize = 5;
    pub const SMOKE_MAX_LIFE: f32 = 1.3;

    // Frame timing
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps after a stall
}
