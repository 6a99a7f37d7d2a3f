//! Per-stage outcome of an insights view.

use serde::Serialize;

/// The outcome of one insights stage: either display-ready data or an
/// explicit "no data" state with the message to show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Section<T> {
    /// The stage produced data.
    Ready {
        /// The stage output.
        data: T,
    },
    /// The filtered dataset had nothing for this stage.
    NoData {
        /// User-facing explanation.
        message: String,
    },
}

impl<T> Section<T> {
    /// Builds a section from an optional stage output, using `message` when empty.
    pub fn from_option(value: Option<T>, message: &str) -> Self {
        match value {
            Some(data) => Section::Ready { data },
            None => Section::NoData {
                message: message.to_string(),
            },
        }
    }

    /// Returns the data if the stage produced any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Section::Ready { data } => Some(data),
            Section::NoData { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_serializes_with_status_tag() {
        let section = Section::from_option(Some(3), "empty");
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["status"], "ready");
        assert_eq!(json["data"], 3);
    }

    #[test]
    fn test_no_data_carries_message() {
        let section: Section<u32> = Section::from_option(None, "No data to display.");
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["status"], "no_data");
        assert_eq!(json["message"], "No data to display.");
        assert!(section.data().is_none());
    }
}
