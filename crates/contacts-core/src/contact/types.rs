//! Contact record types
//!
//! The wire format uses camelCase field names; the optional fields
//! serialize as `null` when unset so the record shape stays constant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted contact record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Store-assigned identifier, immutable after creation
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all contacts (exact-match comparison)
    pub email: String,
    pub phone_number: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Build a new record from a validated draft, assigning id and timestamps
    pub fn new(draft: ContactDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            phone_number: draft.phone_number,
            company: draft.company,
            job_title: draft.job_title,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A full candidate for the create operation.
///
/// Missing required fields deserialize to empty strings so validation,
/// not deserialization, reports them with the proper message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
}

/// A partial update: only supplied fields overwrite the stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
}

impl ContactPatch {
    /// Merge this patch over an existing record, producing the candidate
    /// that must pass the same validation rules as a create.
    pub fn apply(&self, existing: &Contact) -> ContactDraft {
        ContactDraft {
            first_name: self
                .first_name
                .clone()
                .unwrap_or_else(|| existing.first_name.clone()),
            last_name: self
                .last_name
                .clone()
                .unwrap_or_else(|| existing.last_name.clone()),
            email: self.email.clone().unwrap_or_else(|| existing.email.clone()),
            phone_number: self
                .phone_number
                .clone()
                .unwrap_or_else(|| existing.phone_number.clone()),
            company: self.company.clone().or_else(|| existing.company.clone()),
            job_title: self.job_title.clone().or_else(|| existing.job_title.clone()),
        }
    }
}
