use std::sync::Arc;

use iconsmith_application::{
    infrastructure_config::Config, ports::incoming::convert::ConvertIconUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub convert_use_case: Arc<dyn ConvertIconUseCase + Send + Sync>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        convert_use_case: Arc<dyn ConvertIconUseCase + Send + Sync>,
    ) -> Self {
        Self {
            config,
            convert_use_case,
        }
    }
}
