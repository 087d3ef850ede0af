//! Submitted application payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// All values of the application, assembled on submit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    // Personal
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country: String,
    // Academic
    pub school: String,
    pub grade: String,
    pub gpa: String,
    // Parent
    pub parent_name: String,
    pub parent_email: String,
    pub parent_phone: String,
    // Research
    pub fields_of_interest: Vec<String>,
    pub research_interest: String,
    pub motivation: String,
    // Activities
    pub extracurriculars: Vec<String>,
    pub achievements: String,
    // Additional
    pub financial_aid: bool,
    pub referral_source: String,
    pub additional_info: String,
}

/// Acknowledgement returned by a submission sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }

    /// Short reference shown to the applicant
    pub fn reference(&self) -> String {
        self.id.simple().to_string()[..8].to_uppercase()
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}
