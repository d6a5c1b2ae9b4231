#![allow(dead_code)]

mod mock_provider;

use std::sync::Arc;
use std::time::Duration;

use agrilingo::application::services::{
    AnalysisPipeline, PipelineTimeouts, ProviderGateway, RetryPolicy,
};

pub use mock_provider::{
    MockProvider, TranslateCall, location_entities_payload, positive_sentiment_payload,
};

pub const STEP_TIMEOUT: Duration = Duration::from_secs(3);

pub fn gateway_for(provider: &Arc<MockProvider>) -> ProviderGateway<MockProvider> {
    ProviderGateway::new(Arc::clone(provider), RetryPolicy::default())
}

pub fn pipeline_for(provider: &Arc<MockProvider>) -> AnalysisPipeline<MockProvider> {
    AnalysisPipeline::new(gateway_for(provider), PipelineTimeouts::default())
}
