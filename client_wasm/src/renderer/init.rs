use crate::surface::surface_config;
use web_sys::HtmlCanvasElement;
use wgpu::*;

pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: (u32, u32),
}

async fn open_device(adapter: &Adapter) -> Result<(Device, Queue), String> {
    adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Drift Device"),
                required_features: Features::empty(),
                required_limits: Limits::downlevel_webgl2_defaults(),
                memory_hints: MemoryHints::default(),
            },
            None,
        )
        .await
        .map_err(|e| format!("Failed to create device: {:?}", e))
}

/// Bind wgpu to `canvas` and configure its surface at the canvas size
pub async fn init_wgpu(canvas: HtmlCanvasElement) -> Result<WgpuContext, String> {
    let size = (canvas.width(), canvas.height());

    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| format!("Failed to create surface: {:?}", e))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or_else(|| "No WebGPU adapter available".to_string())?;
    let info = adapter.get_info();
    log::info!("WebGPU adapter: {} ({:?})", info.name, info.backend);

    let (device, queue) = open_device(&adapter).await?;

    let config = surface_config(&surface.get_capabilities(&adapter), size.0, size.1)?;
    log::debug!("Surface {:?} at {}x{}", config.format, config.width, config.height);
    surface.configure(&device, &config);

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
        size,
    })
}
