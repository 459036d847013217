use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::{task::spawn_blocking, time::timeout};
use tracing::warn;

use domain::conversion::OutputArtifact;
use iconsmith_application::{
    error::{AppError, AppResult},
    ports::outgoing::blocking_task::{BlockingConversionPort, ConversionJob},
};

/// Runs conversions on tokio's blocking pool, bounded by a deadline.
pub struct TokioBlockingConversionAdapter {
    deadline: Duration,
}

impl TokioBlockingConversionAdapter {
    pub fn new(deadline: Duration) -> Self {
        Self { deadline }
    }
}

impl BlockingConversionPort for TokioBlockingConversionAdapter {
    fn run(
        &self,
        job: ConversionJob,
    ) -> Pin<Box<dyn Future<Output = AppResult<OutputArtifact>> + Send + 'static>> {
        let deadline = self.deadline;

        Box::pin(async move {
            let task = spawn_blocking(job);

            // A timed-out job keeps running on the pool; only its result is dropped.
            timeout(deadline, task)
                .await
                .map_err(|_| {
                    warn!("Conversion exceeded {:?}", deadline);
                    AppError::TaskError {
                        message: format!("conversion timed out after {deadline:?}"),
                    }
                })?
                .map_err(|e| AppError::TaskError {
                    message: format!("conversion task failed: {e}"),
                })?
        })
    }
}
