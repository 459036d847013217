use domain::conversion::OutputArtifact;

use crate::{contracts::upload::ConvertUpload, error::AppResult};

#[async_trait::async_trait]
pub trait ConvertIconUseCase: Send + Sync {
    async fn convert(&self, upload: ConvertUpload) -> AppResult<OutputArtifact>;
}
