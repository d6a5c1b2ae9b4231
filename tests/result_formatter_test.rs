use agrilingo::application::services::{MAX_LISTED_ENTITIES, NO_PATTERNS_SENTENCE, format_analysis};
use agrilingo::domain::{EntitiesResult, Entity, SentimentResult};
use serde_json::json;

fn sentiment(labels: &[&str]) -> SentimentResult {
    SentimentResult::from_labels(labels.iter().copied(), json!({}))
}

fn entities(items: Vec<Entity>) -> EntitiesResult {
    EntitiesResult::new(items, json!({}))
}

#[test]
fn given_no_findings_when_formatting_then_no_patterns_sentence() {
    assert_eq!(format_analysis(None, None), NO_PATTERNS_SENTENCE);
}

#[test]
fn given_empty_entities_only_when_formatting_then_no_patterns_sentence() {
    let empty = entities(Vec::new());

    assert_eq!(format_analysis(None, Some(&empty)), NO_PATTERNS_SENTENCE);
}

#[test]
fn given_sentiment_only_when_formatting_then_single_sentence() {
    let result = sentiment(&["positive"]);

    assert_eq!(format_analysis(Some(&result), None), "Sentiment: positive.");
}

#[test]
fn given_entities_only_when_formatting_then_lists_word_and_type() {
    let found = entities(vec![Entity::new("location", "Lagos", 10, 15)]);

    assert_eq!(
        format_analysis(None, Some(&found)),
        "Entities found: Lagos (location)."
    );
}

#[test]
fn given_both_findings_when_formatting_then_joins_parts_with_period() {
    let result = sentiment(&["negative", "negative", "neutral"]);
    let found = entities(vec![
        Entity::new("location", "Kano", 0, 4),
        Entity::new("person", "Amina", 5, 10),
    ]);

    assert_eq!(
        format_analysis(Some(&result), Some(&found)),
        "Sentiment: negative. Entities found: Kano (location), Amina (person)."
    );
}

#[test]
fn given_more_than_ten_entities_when_formatting_then_lists_first_ten() {
    let found = entities(
        (0..15)
            .map(|i| Entity::new("location", format!("Place{i}"), i, i + 1))
            .collect(),
    );

    let summary = format_analysis(None, Some(&found));

    assert_eq!(summary.matches("(location)").count(), MAX_LISTED_ENTITIES);
    assert!(summary.contains("Place9 (location)."));
    assert!(!summary.contains("Place10"));
}

#[test]
fn given_entities_without_words_when_formatting_then_skips_them() {
    let found = entities(vec![
        Entity::new("location", "", 0, 0),
        Entity::new("organization", "Co-op", 3, 8),
    ]);

    assert_eq!(
        format_analysis(None, Some(&found)),
        "Entities found: Co-op (organization)."
    );
}

#[test]
fn given_only_wordless_entities_and_sentiment_when_formatting_then_sentiment_only() {
    let result = sentiment(&["neutral"]);
    let found = entities(vec![Entity::new("location", "", 0, 0)]);

    assert_eq!(
        format_analysis(Some(&result), Some(&found)),
        "Sentiment: neutral."
    );
}
