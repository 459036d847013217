use crate::{config::IconEncodeOptions, error::AppResult};
use std::sync::Arc;

pub trait IconContainerEncoderPort: Send + Sync {
    /// Builds a multi-resolution container from one RGBA PNG master.
    fn encode(&self, png: &[u8], options: IconEncodeOptions) -> AppResult<Vec<u8>>;
}

pub type DynIconContainerEncoderPort = Arc<dyn IconContainerEncoderPort>;
