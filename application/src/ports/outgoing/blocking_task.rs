use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use domain::conversion::OutputArtifact;

use crate::error::AppResult;

pub type ConversionJob = Box<dyn FnOnce() -> AppResult<OutputArtifact> + Send + 'static>;

pub trait BlockingConversionPort: Send + Sync {
    fn run(
        &self,
        job: ConversionJob,
    ) -> Pin<Box<dyn Future<Output = AppResult<OutputArtifact>> + Send + 'static>>;
}

pub type DynBlockingConversionPort = Arc<dyn BlockingConversionPort>;
