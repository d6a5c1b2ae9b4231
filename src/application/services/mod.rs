mod analysis_pipeline;
mod provider_gateway;
mod result_formatter;
mod retry_policy;

pub use analysis_pipeline::{
    AnalysisPipeline, AnalysisResponse, AudioAnalysisRequest, DEGRADED_SERVICE_SENTENCE,
    PipelineError, PipelineTimeouts, TextAnalysisRequest, TranscriptionResponse,
};
pub use provider_gateway::ProviderGateway;
pub use result_formatter::{MAX_LISTED_ENTITIES, NO_PATTERNS_SENTENCE, format_analysis};
pub use retry_policy::RetryPolicy;
