use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }

    /// Strict majority over both other labels, `Neutral` otherwise.
    pub fn majority(positive: usize, negative: usize, neutral: usize) -> Self {
        if positive > negative && positive > neutral {
            SentimentLabel::Positive
        } else if negative > positive && negative > neutral {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            other => Err(format!("Invalid sentiment label: {}", other)),
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    pub overall_sentiment: SentimentLabel,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub full_data: Value,
}

impl SentimentResult {
    /// Tallies per-sentence labels. Labels outside the three known ones are not counted.
    pub fn from_labels<'a, I>(labels: I, full_data: Value) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (mut positive, mut negative, mut neutral) = (0, 0, 0);
        for label in labels {
            match label.parse::<SentimentLabel>() {
                Ok(SentimentLabel::Positive) => positive += 1,
                Ok(SentimentLabel::Negative) => negative += 1,
                Ok(SentimentLabel::Neutral) => neutral += 1,
                Err(_) => {}
            }
        }

        Self {
            overall_sentiment: SentimentLabel::majority(positive, negative, neutral),
            positive_count: positive,
            negative_count: negative,
            neutral_count: neutral,
            full_data,
        }
    }

    /// Reads the provider's per-sentence payload.
    ///
    /// Sentences live under `sentiments` (or `Sentiments`); each carries its top
    /// label as the first element of `labels` or `sentiment`. Returns `None` when
    /// the payload holds no sentences.
    pub fn from_payload(payload: Value) -> Option<Self> {
        let sentences = ["sentiments", "Sentiments"]
            .iter()
            .filter_map(|key| payload.get(key).and_then(Value::as_array))
            .find(|sentences| !sentences.is_empty())?;

        let labels: Vec<String> = sentences
            .iter()
            .filter_map(|sentence| {
                ["labels", "sentiment"]
                    .iter()
                    .filter_map(|key| sentence.get(key).and_then(Value::as_array))
                    .find_map(|labels| labels.first())
            })
            .map(|top| {
                top.get("label")
                    .and_then(Value::as_str)
                    .unwrap_or("neutral")
                    .to_string()
            })
            .collect();

        Some(Self::from_labels(labels.iter().map(String::as_str), payload))
    }
}
