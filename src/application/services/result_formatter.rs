use crate::domain::{EntitiesResult, SentimentResult};

pub const NO_PATTERNS_SENTENCE: &str = "Analysis completed. No significant patterns detected.";
pub const MAX_LISTED_ENTITIES: usize = 10;

/// Renders sentiment and entity findings as one human-readable summary.
///
/// Parts are joined with `". "` and the summary ends with a period. Entities
/// without a surface word are skipped.
pub fn format_analysis(
    sentiment: Option<&SentimentResult>,
    entities: Option<&EntitiesResult>,
) -> String {
    let mut parts = Vec::with_capacity(2);

    if let Some(sentiment) = sentiment {
        parts.push(format!("Sentiment: {}", sentiment.overall_sentiment));
    }

    if let Some(entities) = entities.filter(|e| !e.is_empty()) {
        let listed: Vec<String> = entities
            .entities
            .iter()
            .take(MAX_LISTED_ENTITIES)
            .filter(|entity| !entity.word.is_empty())
            .map(|entity| format!("{} ({})", entity.word, entity.entity))
            .collect();

        if !listed.is_empty() {
            parts.push(format!("Entities found: {}", listed.join(", ")));
        }
    }

    if parts.is_empty() {
        return NO_PATTERNS_SENTENCE.to_string();
    }

    format!("{}.", parts.join(". "))
}
