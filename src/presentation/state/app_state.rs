use std::sync::Arc;

use crate::application::ports::LanguageAiClient;
use crate::application::services::AnalysisPipeline;
use crate::presentation::config::Settings;

pub struct AppState<C>
where
    C: LanguageAiClient,
{
    pub pipeline: Arc<AnalysisPipeline<C>>,
    pub settings: Settings,
}

impl<C> AppState<C>
where
    C: LanguageAiClient,
{
    pub fn new(pipeline: Arc<AnalysisPipeline<C>>, settings: Settings) -> Self {
        Self { pipeline, settings }
    }
}

impl<C> Clone for AppState<C>
where
    C: LanguageAiClient,
{
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
            settings: self.settings.clone(),
        }
    }
}
