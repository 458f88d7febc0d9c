use candle_core::Device;
use tracing::{debug, warn};

use super::error::EmbeddingError;

/// Selects the compute device for encoder inference.
///
/// Tries the feature-enabled GPU backends in order (Metal, then CUDA) and falls
/// back to CPU when none is available. Sentence encoding for a single upload is
/// cheap enough that CPU is a serviceable default.
pub fn select_device() -> Result<Device, EmbeddingError> {
    #[cfg(feature = "metal")]
    match Device::new_metal(0) {
        Ok(device) => {
            debug!("Using Metal GPU for embedding inference");
            return Ok(device);
        }
        Err(e) => warn!(error = %e, "Metal device unavailable"),
    }

    #[cfg(feature = "cuda")]
    match Device::new_cuda(0) {
        Ok(device) => {
            debug!("Using CUDA GPU for embedding inference");
            return Ok(device);
        }
        Err(e) => warn!(error = %e, "CUDA device unavailable"),
    }

    debug!("Using CPU device for embedding inference");
    Ok(Device::Cpu)
}
