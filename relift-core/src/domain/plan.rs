//! Transformation plan domain types

use serde::{Deserialize, Serialize};

/// Opaque transformation plan payload
///
/// Fetched once a job reaches a success status and handed to the hosting
/// front end untouched; this core never inspects its content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransformationPlan(pub serde_json::Value);
