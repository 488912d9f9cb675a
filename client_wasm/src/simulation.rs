use drift_core::hud::hud_lines;
use drift_core::systems::{age_particles, collect_particles, emit_smoke};
use drift_core::{
    Config, ConfigError, FrameClock, GameRng, InputSnapshot, Lifetime, Particle, Simulation,
    Telemetry,
};
use hecs::World;
use proto::InputRecording;

/// Ten minutes at 60 FPS; later frames are driven but not recorded
pub const MAX_RECORDED_FRAMES: usize = 60 * 60 * 10;

/// What the renderer and HUD need after one frame
#[derive(Debug, Clone)]
pub struct FrameOutput {
    pub telemetry: Telemetry,
    pub particles: Vec<(Particle, Lifetime)>,
    pub hud: [String; 5],
}

/// Single-player drive running entirely in the browser
pub struct LocalGame {
    pub sim: Simulation,
    pub particles: World,
    pub rng: GameRng,
    pub clock: FrameClock,
    pub recording: InputRecording,
    /// Frames kept in `recording`, counted from the start of the drive
    pub record_limit: usize,
    running: bool,
}

impl LocalGame {
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            sim: Simulation::new(config)?,
            particles: World::new(),
            rng: GameRng::new(seed),
            clock: FrameClock::new(),
            recording: InputRecording::new(),
            record_limit: MAX_RECORDED_FRAMES,
            running: true,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop between frames; later calls to `frame` do nothing
    pub fn stop(&mut self) {
        if self.running {
            log::info!(
                "Drive stopped after {} frames ({:.1}s simulated, {:.1}s recorded)",
                self.clock.frames(),
                self.sim.time.now,
                self.recording.duration()
            );
        }
        self.running = false;
    }

    /// Advance one frame stamped `now_ms` (performance.now()).
    ///
    /// Returns `None` once the game has been stopped.
    pub fn frame(&mut self, now_ms: f64, input: &InputSnapshot) -> Option<FrameOutput> {
        if !self.running {
            return None;
        }

        let dt = self.clock.tick(now_ms);
        // Replays start from the first frame, so keep the oldest frames
        if self.recording.len() < self.record_limit {
            self.recording.push(input, dt);
            if self.recording.len() == self.record_limit {
                log::warn!(
                    "Input recording full at {} frames, later input is not recorded",
                    self.record_limit
                );
            }
        }

        let telemetry = self.sim.advance(input, dt);
        emit_smoke(&mut self.particles, &telemetry, &self.sim.config, &mut self.rng);
        age_particles(&mut self.particles, &self.sim.time);

        Some(FrameOutput {
            telemetry,
            particles: collect_particles(&self.particles),
            hud: hud_lines(&telemetry),
        })
    }

    /// Encode the recorded inputs; the recording keeps growing afterwards
    pub fn export_recording(&self) -> Result<Vec<u8>, String> {
        self.recording
            .to_bytes()
            .map_err(|e| format!("Failed to serialize recording: {:?}", e))
    }
}
