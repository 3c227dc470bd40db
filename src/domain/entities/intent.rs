/// Coarse-grained purpose the NLU gateway assigns to a translated message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Parting,
    Weather,
    /// The classifier matched nothing it was trained on.
    None,
    /// A label outside the known set. Carried verbatim so the router can
    /// log it without pretending to understand it.
    Other(String),
}

impl Intent {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Greeting" => Intent::Greeting,
            "Parting" => Intent::Parting,
            "Weather" => Intent::Weather,
            "None" => Intent::None,
            other => Intent::Other(other.to_string()),
        }
    }
}

/// Kind of span the NLU gateway extracts from a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    City,
    Time,
}

/// A typed span extracted from the message, in extraction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub kind: EntityKind,
    pub value: String,
}

impl Entity {
    pub fn city(value: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::City,
            value: value.into(),
        }
    }

    pub fn time(value: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::Time,
            value: value.into(),
        }
    }
}

/// The classifier's verdict for one message. Read-only after parsing.
#[derive(Debug, Clone)]
pub struct RecognizedIntent {
    pub intent: Intent,
    /// Reported by the gateway but not used for branching.
    pub confidence: f32,
    pub entities: Vec<Entity>,
}

impl RecognizedIntent {
    /// First entity of the given kind; later duplicates are ignored.
    pub fn first_entity(&self, kind: EntityKind) -> Option<&str> {
        self.entities
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_from_label() {
        assert_eq!(Intent::from_label("Weather"), Intent::Weather);
        assert_eq!(Intent::from_label("None"), Intent::None);
        assert_eq!(
            Intent::from_label("BookFlight"),
            Intent::Other("BookFlight".to_string())
        );
    }

    #[test]
    fn test_first_entity_wins() {
        let recognized = RecognizedIntent {
            intent: Intent::Weather,
            confidence: 0.9,
            entities: vec![
                Entity::city("paris"),
                Entity::time("tomorrow"),
                Entity::city("london"),
            ],
        };
        assert_eq!(recognized.first_entity(EntityKind::City), Some("paris"));
        assert_eq!(recognized.first_entity(EntityKind::Time), Some("tomorrow"));
    }
}
