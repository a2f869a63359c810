//! Task data structure and related functionality.
//!
//! This module defines the `Task` record that the form produces and the store
//! persists. Key names follow the on-disk format written by earlier versions of
//! the tool, so existing `tasks.json` files keep loading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single captured work item.
///
/// Text fields hold exactly what was typed. `attachments` and `comments` are
/// always lists; timestamps are RFC 3339 strings on disk and `null` when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub urgency: String,
    pub status: String,
    pub assigned_by: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub attachments: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub comments: Vec<String>,
    #[serde(rename = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "starttime")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(rename = "endtime")]
    pub end_time: Option<DateTime<Utc>>,
    pub due: Option<DateTime<Utc>>,
}

/// Values collected by the form, in field order.
///
/// Kept separate from `Task` so the form never has to know about timestamps
/// or list-typed columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub urgency: String,
    pub status: String,
    pub assigned_by: String,
    pub comment: String,
}

impl TaskDraft {
    /// Finish the draft into a persisted record stamped with `created_at`.
    ///
    /// A blank comment becomes an empty list rather than `[""]`.
    pub fn into_task(self, created_at: DateTime<Utc>) -> Task {
        let comments = if self.comment.trim().is_empty() {
            Vec::new()
        } else {
            vec![self.comment]
        };
        Task {
            title: self.title,
            description: self.description,
            urgency: self.urgency,
            status: self.status,
            assigned_by: self.assigned_by,
            attachments: Vec::new(),
            comments,
            created_at: Some(created_at),
            start_time: None,
            end_time: None,
            due: None,
        }
    }
}

// Older files store empty lists as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
