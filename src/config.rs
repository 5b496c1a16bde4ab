use bytemuck::{Pod, Zeroable};

use crate::handle::Handle;

/// Configuration bundle handed to the FFT library: the three handles it needs
/// to plan and dispatch on the caller's GPU runtime. Field order matches the
/// order the probe reports them in. No field is validated anywhere.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Pod, Zeroable)]
pub struct FftConfig {
    pub context: Handle,
    pub queue: Handle,
    pub device: Handle,
}

impl FftConfig {
    pub fn new(context: Handle, queue: Handle, device: Handle) -> Self {
        Self {
            context,
            queue,
            device,
        }
    }
}

impl Default for FftConfig {
    fn default() -> Self {
        Self {
            context: Handle::NULL,
            queue: Handle::NULL,
            device: Handle::NULL,
        }
    }
}
