use super::super::domain::{Priority, RiskLevel, Severity};
use serde::Serialize;

/// One bar of the subject-wise risk chart, in submission order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectRiskView {
    pub name: String,
    pub risk: u8,
    pub color: &'static str,
}

/// A single insight card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

/// A prioritized action-plan entry with concrete steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: String,
    pub steps: Vec<String>,
    pub priority: Priority,
}

/// Everything the presentation layer needs, derived wholesale from one
/// [`StudentData`](crate::analysis::domain::StudentData) record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAnalysis {
    pub academic_risk: u8,
    pub burnout_risk: u8,
    pub risk_level: RiskLevel,
    pub risk_level_label: &'static str,
    pub burnout_level: RiskLevel,
    pub burnout_level_label: &'static str,
    pub days_until_exam: i64,
    pub subject_risks: Vec<SubjectRiskView>,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<Recommendation>,
    pub quick_tips: Vec<&'static str>,
}
