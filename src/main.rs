mod config;
mod gpu;
mod handle;
mod probe;
mod utils;

use anyhow::Result;
use config::FftConfig;
use gpu::GpuContext;
use probe::{probe, ProbeStatus};
use utils::synthetic_config;

#[tokio::main]
async fn main() -> Result<()> {
    println!("GPU FFT Binding Probe");
    println!("{}", "=".repeat(70));

    // Degenerate bundle: every handle null.
    println!("\nScenario 1: all-null handles");
    let status = probe(&FftConfig::default());
    println!("   status: {:?}", status);
    assert_eq!(status, ProbeStatus::PLACEHOLDER);

    // Three distinct synthetic handles, reproducible via the seed.
    println!("\nScenario 2: distinct synthetic handles");
    let status = probe(&synthetic_config(Some(42)));
    println!("   status: {:?}", status);
    assert_eq!(status, ProbeStatus::PLACEHOLDER);

    // Real runtime identities, when a GPU is around to provide them.
    println!("\nScenario 3: live GPU runtime");
    match GpuContext::new().await {
        Ok(gpu) => {
            let status = probe(&gpu.probe_config());
            println!("   status: {:?}", status);
            assert_eq!(status, ProbeStatus::PLACEHOLDER);
        }
        Err(e) => println!("   skipped, no usable GPU: {}", e),
    }

    println!("\nDone.");
    Ok(())
}
