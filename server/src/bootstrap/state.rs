use std::sync::Arc;

use iconsmith_adapters::outgoing::{
    icns_rs::icon_container_icns::IcnsContainerAdapter,
    image_rs::png_codec_image::{ImagePngAdapter, ImagePngConfig},
    tokio_spawn::blocking_conversion_tokio::TokioBlockingConversionAdapter,
    zip_rs::archive_writer_zip::ZipArchiveAdapter,
};
use iconsmith_adapters::shared::app_state::AppState as AdaptersAppState;
use iconsmith_application::{
    convert::{
        pipeline::{ConversionPipeline, PipelineDeps},
        service::ConversionService,
    },
    infrastructure_config::Config,
    ports::{
        incoming::convert::ConvertIconUseCase,
        outgoing::{
            archive_writer::ArchiveWriterPort, blocking_task::BlockingConversionPort,
            icon_container::IconContainerEncoderPort, image_codec::ImageCodecPort,
        },
    },
};

/// Wires adapters into the conversion service.
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<Config>,
    pub conversion_service: Arc<ConversionService>,
}

impl ServiceContainer {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let conversion_service = Self::create_conversion_service(&config);

        Self {
            config,
            conversion_service,
        }
    }

    fn create_conversion_service(config: &Config) -> Arc<ConversionService> {
        let settings = config.conversion_settings();

        let codec_port: Arc<dyn ImageCodecPort> = Arc::new(ImagePngAdapter::new(ImagePngConfig {
            resampling: settings.icon_options.resampling,
            compression: settings.icon_options.compression,
        }));
        let icon_encoder_port: Arc<dyn IconContainerEncoderPort> =
            Arc::new(IcnsContainerAdapter::new());
        let archive_writer_port: Arc<dyn ArchiveWriterPort> = Arc::new(ZipArchiveAdapter::new());
        let blocking_port: Arc<dyn BlockingConversionPort> = Arc::new(
            TokioBlockingConversionAdapter::new(config.conversion_timeout()),
        );

        let pipeline = ConversionPipeline::new(
            settings,
            PipelineDeps {
                codec_port,
                icon_encoder_port,
                archive_writer_port,
            },
        );

        Arc::new(ConversionService::new(Arc::new(pipeline), blocking_port))
    }

    pub fn to_adapters_state(self) -> AdaptersAppState {
        AdaptersAppState::new(
            self.config,
            self.conversion_service as Arc<dyn ConvertIconUseCase + Send + Sync>,
        )
    }
}
