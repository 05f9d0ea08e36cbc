//! Typed views of the extraction backend's JSON payloads.
//!
//! The API client hands back raw `serde_json::Value`s; these types are the
//! structured reading of them. Fields the backend adds beyond the known shape
//! are kept in each type's `extra` map.

use crate::ModelError;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Priority assumed for tasks the backend returned without one.
pub const DEFAULT_PRIORITY: &str = "Normal";

const UNKNOWN_DOCUMENT_NAME: &str = "N/A";

/// `GET /health` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, alias = "documentName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_DOCUMENT_NAME)
    }
}

/// A single task extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// The task's priority label, or [`DEFAULT_PRIORITY`] when absent.
    pub fn effective_priority(&self) -> &str {
        self.priority.as_deref().unwrap_or(DEFAULT_PRIORITY)
    }

    pub fn has_due_date(&self) -> bool {
        self.due_date
            .as_deref()
            .is_some_and(|due| !due.trim().is_empty())
    }
}

/// `POST /upload` and `POST /process-text` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingResult {
    #[serde(default)]
    pub document: Document,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl ProcessingResult {
    /// Read a processing result out of an opaque response body.
    #[track_caller]
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        Ok(serde_json::from_value(value)?)
    }
}

impl HealthStatus {
    #[track_caller]
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        Ok(serde_json::from_value(value)?)
    }
}
