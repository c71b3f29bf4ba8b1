use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::list_pipeline::ListRecord;

/// Student record for the education module (A003)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,

    /// Course the student is enrolled in
    pub course: String,

    /// Enrollment date (YYYY-MM-DD)
    pub enrolled_at: String,

    /// Status code, see [`EnrollmentStatus`]
    pub status: String,

    /// Outstanding tuition balance
    pub balance_due: f64,
}

impl Student {
    pub fn new(
        name: String,
        email: String,
        course: String,
        enrolled_at: String,
        status: EnrollmentStatus,
        balance_due: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            course,
            enrolled_at,
            status: status.code().to_string(),
            balance_due,
        }
    }
}

impl ListRecord for Student {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.course.as_str()]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "status" => Some(&self.status),
            "course" => Some(&self.course),
            _ => None,
        }
    }
}

/// Enrollment status of a student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    Active,
    Graduated,
    Withdrawn,
}

impl EnrollmentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "active",
            EnrollmentStatus::Graduated => "graduated",
            EnrollmentStatus::Withdrawn => "withdrawn",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "Active",
            EnrollmentStatus::Graduated => "Graduated",
            EnrollmentStatus::Withdrawn => "Withdrawn",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(EnrollmentStatus::Active),
            "graduated" => Some(EnrollmentStatus::Graduated),
            "withdrawn" => Some(EnrollmentStatus::Withdrawn),
            _ => None,
        }
    }

    pub fn all() -> Vec<EnrollmentStatus> {
        vec![
            EnrollmentStatus::Active,
            EnrollmentStatus::Graduated,
            EnrollmentStatus::Withdrawn,
        ]
    }
}
