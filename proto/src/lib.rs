//! Input recordings for reproducing a drive
//!
//! Uses postcard for compact binary serialization. A recording holds every
//! frame's input and dt, which is all the integrator needs to rebuild the
//! exact same run.

use drift_core::{InputSnapshot, Simulation, Telemetry};
use postcard::{from_bytes, to_allocvec};
use thiserror::Error;

/// Bumped whenever the encoded layout changes
pub const RECORDING_VERSION: u16 = 1;

#[derive(Debug, Error)]
pub enum RecordingError {
    #[error("recording version {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u16, expected: u16 },
    #[error("malformed recording: {0}")]
    Decode(#[from] postcard::Error),
}

/// One frame of player intent plus the time it covered
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputFrame {
    pub steer: i8,
    pub throttle: f32,
    pub drift: bool,
    pub dt: f32,
}

impl InputFrame {
    pub fn new(input: &InputSnapshot, dt: f32) -> Self {
        Self {
            steer: input.steer,
            throttle: input.throttle,
            drift: input.drift_button,
            dt,
        }
    }

    pub fn input(&self) -> InputSnapshot {
        InputSnapshot::new(self.steer, self.throttle, self.drift)
    }
}

/// Ordered input frames of a session
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputRecording {
    pub version: u16,
    pub frames: Vec<InputFrame>,
}

impl InputRecording {
    pub fn new() -> Self {
        Self {
            version: RECORDING_VERSION,
            frames: Vec::new(),
        }
    }

    pub fn push(&mut self, input: &InputSnapshot, dt: f32) {
        self.frames.push(InputFrame::new(input, dt));
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total simulated time requested by the recording
    pub fn duration(&self) -> f32 {
        self.frames.iter().map(|f| f.dt).sum()
    }

    /// Feed every frame through `sim`, returning the telemetry of each step
    pub fn replay(&self, sim: &mut Simulation) -> Vec<Telemetry> {
        self.frames
            .iter()
            .map(|frame| sim.advance(&frame.input(), frame.dt))
            .collect()
    }

    /// Serialize recording to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize recording from bytes, rejecting other layout versions
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordingError> {
        let recording: Self = from_bytes(bytes)?;
        if recording.version != RECORDING_VERSION {
            return Err(RecordingError::UnsupportedVersion {
                found: recording.version,
                expected: RECORDING_VERSION,
            });
        }
        Ok(recording)
    }
}

impl Default for InputRecording {
    fn default() -> Self {
        Self::new()
    }
}
