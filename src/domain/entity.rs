use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named entity span reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default = "unknown_entity_type")]
    pub entity: String,
    #[serde(default)]
    pub word: String,
    /// Character offsets; absent when the provider sends none.
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
}

impl Entity {
    pub fn new(entity: impl Into<String>, word: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            entity: entity.into(),
            word: word.into(),
            start: Some(start),
            end: Some(end),
        }
    }
}

fn unknown_entity_type() -> String {
    "unknown".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitiesResult {
    pub entities: Vec<Entity>,
    pub entity_count: usize,
    pub full_data: Value,
}

impl EntitiesResult {
    pub fn new(entities: Vec<Entity>, full_data: Value) -> Self {
        Self {
            entity_count: entities.len(),
            entities,
            full_data,
        }
    }

    /// Accepts either a bare entity list or an object carrying it under
    /// `entities` / `Entities`. Anything else yields an empty result.
    pub fn from_payload(payload: Value) -> Self {
        let items = match &payload {
            Value::Array(items) => Some(items),
            other => ["entities", "Entities"]
                .iter()
                .find_map(|key| other.get(key).and_then(Value::as_array)),
        };

        let entities = items
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| match serde_json::from_value::<Entity>(item.clone()) {
                        Ok(entity) => Some(entity),
                        Err(e) => {
                            tracing::debug!(error = %e, "Skipping malformed entity");
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self::new(entities, payload)
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
