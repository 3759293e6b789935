use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Self-reported study metrics for one student, as captured by the input
/// collector. The record is immutable once submitted; the engine derives a
/// fresh [`RiskAnalysis`](crate::analysis::RiskAnalysis) from it wholesale on
/// every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentData {
    pub subjects: Vec<String>,
    pub exam_date: NaiveDate,
    pub daily_study_hours: f64,
    pub missed_study_days: f64,
    pub topic_difficulty: f64,
    pub stress_level: u8,
}

impl StudentData {
    /// Structural validation applied at the collection boundary. The scoring
    /// engine itself never rejects a record; it only clamps.
    pub fn validate(&self) -> Result<(), StudentDataError> {
        if self.subjects.is_empty() {
            return Err(StudentDataError::NoSubjects);
        }

        for (index, subject) in self.subjects.iter().enumerate() {
            if subject.trim().is_empty() {
                return Err(StudentDataError::BlankSubject);
            }
            if self.subjects[..index].contains(subject) {
                return Err(StudentDataError::DuplicateSubject(subject.clone()));
            }
        }

        Ok(())
    }

    /// Clamp every numeric field into its documented range. Out-of-range
    /// values are folded back rather than rejected so the scoring arithmetic
    /// stays total for any submission that made it past type checking.
    pub fn sanitized(&self) -> StudentData {
        StudentData {
            subjects: self.subjects.clone(),
            exam_date: self.exam_date,
            daily_study_hours: self.daily_study_hours.clamp(0.0, 16.0),
            missed_study_days: self.missed_study_days.clamp(0.0, 7.0),
            topic_difficulty: self.topic_difficulty.clamp(0.0, 100.0),
            stress_level: self.stress_level.clamp(1, 5),
        }
    }
}

/// Validation errors raised at the collection boundary.
#[derive(Debug, thiserror::Error)]
pub enum StudentDataError {
    #[error("at least one subject is required")]
    NoSubjects,
    #[error("subject names must not be blank")]
    BlankSubject,
    #[error("duplicate subject: {0}")]
    DuplicateSubject(String),
}

/// Three-band classification shared by the academic and burnout scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Band boundaries sit at 35 and 65: 34 is low, 35 medium, 64 medium,
    /// 65 high.
    pub fn from_score(score: u8) -> Self {
        if score < 35 {
            Self::Low
        } else if score < 65 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Chart hue for this band, one distinct color per band.
    pub const fn chart_color(self) -> &'static str {
        match self {
            Self::Low => "hsl(145, 63%, 49%)",
            Self::Medium => "hsl(36, 100%, 55%)",
            Self::High => "hsl(4, 77%, 57%)",
        }
    }
}

/// Severity tag attached to each insight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Danger => "Danger",
        }
    }
}

/// Priority tag attached to each recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}
