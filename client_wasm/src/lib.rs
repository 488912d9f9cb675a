//! WebGPU client for the drift sandbox
//!
//! Runs the simulation locally in the browser and draws it with wgpu using
//! the "webgpu" feature. Only `client`, `hud`, `logger` and `renderer` need
//! the wasm32 target; the rest builds (and is tested) natively.

pub mod camera;
pub mod input;
pub mod mesh;
pub mod scene;
pub mod simulation;
pub mod surface;

#[cfg(target_arch = "wasm32")]
mod client;
#[cfg(target_arch = "wasm32")]
mod hud;
#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use client::*;
