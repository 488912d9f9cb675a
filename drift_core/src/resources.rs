use glam::Vec2;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed simulated time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

/// Turns wall-clock timestamps (milliseconds) into per-frame dt
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick; 0 on the first tick
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.frames += 1;
        dt
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

}

/// Random number generator for decorative effects
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Read-only view of the car after a step, handed to render/particles/HUD
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Telemetry {
    pub position: Vec2,
    pub heading: f32,
    pub velocity: Vec2,
    pub speed: f32,
    pub lateral_velocity: Vec2,
    pub traction: f32,
    pub drifting: bool,
}

impl Telemetry {
    pub fn lateral_speed(&self) -> f32 {
        self.lateral_velocity.length()
    }

    /// Heading in degrees reduced to [0, 360)
    pub fn heading_degrees(&self) -> f32 {
        let deg = self.heading.to_degrees().rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if deg >= 360.0 {
            0.0
        } else {
            deg
        }
    }
}
