//! Surface format and configuration choices
//!
//! Kept apart from the canvas setup so they build and test natively.

use wgpu::{
    CompositeAlphaMode, PresentMode, SurfaceCapabilities, SurfaceConfiguration, TextureFormat,
    TextureUsages,
};

/// First sRGB format, else whatever the surface lists first.
///
/// Scene tints are linear, so a non-sRGB surface shows them too dark.
pub fn choose_format(formats: &[TextureFormat]) -> Result<TextureFormat, String> {
    let format = formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first().copied())
        .ok_or_else(|| "Surface reports no formats".to_string())?;
    if !format.is_srgb() {
        log::warn!("No sRGB surface format, falling back to {:?}", format);
    }
    Ok(format)
}

/// Opaque when offered; the arena covers the whole canvas
pub fn choose_alpha_mode(modes: &[CompositeAlphaMode]) -> CompositeAlphaMode {
    if modes.contains(&CompositeAlphaMode::Opaque) {
        CompositeAlphaMode::Opaque
    } else {
        modes.first().copied().unwrap_or(CompositeAlphaMode::Auto)
    }
}

pub fn surface_config(
    caps: &SurfaceCapabilities,
    width: u32,
    height: u32,
) -> Result<SurfaceConfiguration, String> {
    Ok(SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format: choose_format(&caps.formats)?,
        // A zero-sized surface cannot be configured
        width: width.max(1),
        height: height.max(1),
        present_mode: PresentMode::Fifo,
        alpha_mode: choose_alpha_mode(&caps.alpha_modes),
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    })
}
