//! Progress update domain types
//!
//! A status query can carry a list of named sub-step reports. The `name`
//! field is a step identifier (sometimes numeric-as-string, including the
//! "-1" sentinel the service uses for the job summary table) and the
//! `description` is an opaque payload rendered by the hosting front end.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named sub-step report attached to a status query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub name: String,
    pub status: StepStatus,
    pub description: Option<String>,
}

/// Completion state of a single progress step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

/// Builds a step-name to description lookup from an ordered update list
///
/// Descriptions are passed through untouched. If two updates share a name,
/// the later one in the sequence wins.
pub fn table_mapping(updates: &[ProgressUpdate]) -> HashMap<String, String> {
    let mut tables = HashMap::new();

    for update in updates {
        tables.insert(
            update.name.clone(),
            update.description.clone().unwrap_or_default(),
        );
    }

    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(name: &str, description: Option<&str>) -> ProgressUpdate {
        ProgressUpdate {
            name: name.to_string(),
            status: StepStatus::Completed,
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_table_mapping_round_trip() {
        let updates = vec![
            update("-1", Some("{\"columnNames\":[\"jobStatistics\"]}")),
            update("1", Some("{\"columnNames\":[\"dependencyName\"]}")),
            update("2", Some("{\"columnNames\":[\"apiFullyQualifiedName\"]}")),
        ];

        let mapping = table_mapping(&updates);
        assert_eq!(mapping.len(), 3);
        assert_eq!(
            mapping.get("-1").map(String::as_str),
            Some("{\"columnNames\":[\"jobStatistics\"]}")
        );
        assert_eq!(
            mapping.get("2").map(String::as_str),
            Some("{\"columnNames\":[\"apiFullyQualifiedName\"]}")
        );
    }

    #[test]
    fn test_table_mapping_last_duplicate_wins() {
        let updates = vec![
            update("1", Some("first")),
            update("1", Some("second")),
        ];

        let mapping = table_mapping(&updates);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("1").map(String::as_str), Some("second"));
    }

    #[test]
    fn test_table_mapping_missing_description_is_empty() {
        let mapping = table_mapping(&[update("3", None)]);
        assert_eq!(mapping.get("3").map(String::as_str), Some(""));
    }

    #[test]
    fn test_table_mapping_empty_input() {
        assert!(table_mapping(&[]).is_empty());
    }
}
