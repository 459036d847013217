use std::sync::Arc;
use tracing::{debug, instrument};

use domain::conversion::{ConversionKind, ConversionRequest, OutputArtifact};

use crate::{
    contracts::upload::ConvertUpload,
    error::{AppError, AppResult},
    ports::{
        incoming::convert::ConvertIconUseCase, outgoing::blocking_task::DynBlockingConversionPort,
    },
};

use super::pipeline::ConversionPipeline;

pub struct ConversionService {
    pipeline: Arc<ConversionPipeline>,
    blocking_port: DynBlockingConversionPort,
}

impl ConversionService {
    pub fn new(pipeline: Arc<ConversionPipeline>, blocking_port: DynBlockingConversionPort) -> Self {
        Self {
            pipeline,
            blocking_port,
        }
    }

    /// Turns raw form fields into a request. The file check runs first, so a
    /// missing file is reported whatever the type field says.
    pub fn validate(upload: ConvertUpload) -> AppResult<ConversionRequest> {
        let Some(file) = upload.file.filter(|file| !file.data.is_empty()) else {
            return Err(AppError::MissingFile);
        };

        let Some(kind) = upload.kind else {
            return Err(AppError::InvalidConversionType {
                message: "type field is missing".to_string(),
            });
        };

        let kind = kind
            .parse::<ConversionKind>()
            .map_err(|e| AppError::InvalidConversionType {
                message: e.to_string(),
            })?;

        Ok(ConversionRequest::new(file.data, file.filename, kind))
    }

    #[instrument(skip(self, upload))]
    pub async fn handle(&self, upload: ConvertUpload) -> AppResult<OutputArtifact> {
        let request = Self::validate(upload)?;
        debug!(
            "Converting {} bytes from {:?} to {}",
            request.image_bytes.len(),
            request.original_filename,
            request.kind
        );

        let pipeline = Arc::clone(&self.pipeline);
        let artifact = self
            .blocking_port
            .run(Box::new(move || pipeline.run(&request)))
            .await?;

        debug!(
            "Conversion produced {} ({} bytes)",
            artifact.suggested_filename,
            artifact.bytes.len()
        );
        Ok(artifact)
    }
}

#[async_trait::async_trait]
impl ConvertIconUseCase for ConversionService {
    async fn convert(&self, upload: ConvertUpload) -> AppResult<OutputArtifact> {
        self.handle(upload).await
    }
}
