//! Output format types for session views.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::{Color, Draft, Note};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    /// 1-based position in the visible list
    pub position: usize,
    pub id: String,
    pub text: String,
    pub color: Color,
    pub created: String,
}

impl NoteListing {
    pub fn new(position: usize, note: &Note) -> Self {
        Self {
            position,
            id: note.id().to_string(),
            text: note.text().to_string(),
            color: note.color(),
            created: note.created().to_rfc3339(),
        }
    }
}

/// The draft in listing output.
#[derive(Debug, Serialize)]
pub struct DraftListing {
    pub text: String,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing: Option<String>,
    pub search: String,
}

impl From<&Draft> for DraftListing {
    fn from(draft: &Draft) -> Self {
        Self {
            text: draft.text().to_string(),
            color: draft.color(),
            editing: draft.editing().map(|id| id.to_string()),
            search: draft.search().to_string(),
        }
    }
}
