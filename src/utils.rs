use rand::prelude::*;

use crate::config::FftConfig;
use crate::handle::Handle;

/// Builds a config with three distinct, non-null, pointer-plausible addresses
/// so the probe can be exercised without any GPU present. Seeded runs are
/// reproducible.
pub fn synthetic_config(seed: Option<u64>) -> FftConfig {
    let mut rng = if let Some(s) = seed {
        StdRng::seed_from_u64(s)
    } else {
        StdRng::from_entropy()
    };

    let mut addrs = [0usize; 3];
    for i in 0..3 {
        loop {
            // 16-byte aligned and non-null, like a real allocation.
            let addr = (rng.gen_range(0x1_0000u64..0x7fff_ffff_0000) as usize) & !0xf;
            if addr != 0 && !addrs[..i].contains(&addr) {
                addrs[i] = addr;
                break;
            }
        }
    }

    FftConfig::new(
        Handle::from(addrs[0]),
        Handle::from(addrs[1]),
        Handle::from(addrs[2]),
    )
}
