use std::sync::Arc;

use anyhow::{Context, Result};
use winit::window::Window;

pub mod config;
pub mod model;
pub mod renderer;
pub mod scene;

pub use config::Config;
use renderer::Renderer;
use scene::Scene;

pub struct State {
    window: Arc<Window>,
    pub scene: Scene,
    renderer: Renderer,
}

impl State {
    pub fn new(window: Arc<Window>, config: &Config) -> Result<Self> {
        let size = window.inner_size();
        log::info!("Window size: {}x{}", size.width, size.height);

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            flags: wgpu::InstanceFlags::from_build_config(),
            dx12_shader_compiler: Default::default(),
            gles_minor_version: wgpu::Gles3MinorVersion::default(),
        });

        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("Failed to find an appropriate adapter")?;

        let info = adapter.get_info();
        log::info!("Using adapter: {} ({:?})", info.name, info.backend);
        log::debug!("Adapter driver: {} {}", info.driver, info.driver_info);

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Primary Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("Failed to create device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("Surface reports no supported formats")?;
        log::info!("Selected surface format: {:?}", surface_format);

        let requested: wgpu::PresentMode = config.present_mode.into();
        let present_mode = match requested {
            wgpu::PresentMode::AutoVsync | wgpu::PresentMode::AutoNoVsync => requested,
            mode if surface_caps.present_modes.contains(&mode) => mode,
            mode => {
                log::warn!("Present mode {:?} unsupported, falling back to Fifo", mode);
                wgpu::PresentMode::Fifo
            }
        };
        log::info!("Selected present mode: {:?}", present_mode);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode: surface_caps.alpha_modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        let aspect = surface_config.width as f32 / surface_config.height as f32;
        let scene = Scene::from_config(config, aspect);
        let renderer = Renderer::new(device, queue, surface_config, surface);

        Ok(Self {
            window,
            scene,
            renderer,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.renderer.size()
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.renderer.resize(new_size);
            self.scene.resize(new_size.width, new_size.height);
        }
    }

    pub fn update(&mut self) {
        self.scene.update();
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.renderer.render(&self.scene)
    }
}
