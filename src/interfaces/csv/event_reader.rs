use crate::error::{Result, TipError};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Kind of event delivered by the host UI.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Stepper moved to an explicit value.
    Stepper,
    /// Stepper "+" tapped.
    Increment,
    /// Stepper "-" tapped.
    Decrement,
    /// Bill text field gained focus.
    Edit,
    /// Return pressed in the bill text field.
    Submit,
    /// Bill amount discarded.
    Clear,
}

/// One UI event row.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct UiEvent {
    pub event: EventType,
    #[serde(default)]
    pub value: Option<String>,
}

impl UiEvent {
    pub fn new(event: EventType, value: Option<&str>) -> Self {
        Self {
            event,
            value: value.map(str::to_string),
        }
    }
}

/// Reads UI events from a CSV source with an `event,value` header.
///
/// Fields are trimmed and records may omit the value column.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes events; a malformed row yields an error and reading continues.
    pub fn events(self) -> impl Iterator<Item = Result<UiEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(TipError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "event, value\nsubmit, 50\nstepper, 0.20\nedit\nclear,";
        let reader = EventReader::new(data.as_bytes());
        let results: Vec<Result<UiEvent>> = reader.events().collect();

        assert_eq!(results.len(), 4);
        let submit = results[0].as_ref().unwrap();
        assert_eq!(submit.event, EventType::Submit);
        assert_eq!(submit.value.as_deref(), Some("50"));
        assert_eq!(
            results[1].as_ref().unwrap(),
            &UiEvent::new(EventType::Stepper, Some("0.20"))
        );
        assert_eq!(results[2].as_ref().unwrap().event, EventType::Edit);
        assert_eq!(results[2].as_ref().unwrap().value, None);
        assert_eq!(results[3].as_ref().unwrap().event, EventType::Clear);
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "event,value\nexplode,1\nincrement,";
        let reader = EventReader::new(data.as_bytes());
        let results: Vec<Result<UiEvent>> = reader.events().collect();

        assert!(results[0].is_err());
        assert_eq!(results[1].as_ref().unwrap().event, EventType::Increment);
    }
}
