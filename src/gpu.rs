use anyhow::Result;

use crate::config::FftConfig;
use crate::handle::Handle;

/// Live GPU runtime used as a source of real handle identities for the probe.
/// Holds the objects; everything else (buffers, pipelines, FFT plans) belongs
/// to the library being probed.
pub struct GpuContext {
    instance: wgpu::Instance,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl GpuContext {
    pub async fn new() -> Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("Failed to find suitable adapter"))?;

        let adapter_info = adapter.get_info();
        println!(
            "Using GPU: {} ({:?})",
            adapter_info.name, adapter_info.backend
        );

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await?;

        Ok(Self {
            instance,
            device,
            queue,
        })
    }

    /// Config carrying the identities of the live runtime objects. Addresses
    /// only; the objects stay owned by `self`.
    pub fn probe_config(&self) -> FftConfig {
        FftConfig::new(
            Handle::of(&self.instance),
            Handle::of(&self.queue),
            Handle::of(&self.device),
        )
    }
}
