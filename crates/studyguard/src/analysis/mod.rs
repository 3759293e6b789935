pub mod domain;
mod engine;
pub mod report;

pub use engine::{RiskAssessment, SubjectRisk};
pub use report::{Insight, Recommendation, RiskAnalysis, SubjectRiskView};

use chrono::NaiveDate;
use domain::{RiskLevel, StudentData};
use rand::Rng;

/// Derive a full [`RiskAnalysis`] from one submission. Pure apart from the
/// per-subject jitter, which is drawn from an RNG seeded by the subject list
/// so identical input always yields identical output.
pub fn analyze(data: &StudentData, today: NaiveDate) -> RiskAnalysis {
    analyze_with_rng(data, today, &mut engine::seeded_rng(data))
}

/// Same as [`analyze`] with an explicit randomness source.
pub fn analyze_with_rng<R: Rng>(data: &StudentData, today: NaiveDate, rng: &mut R) -> RiskAnalysis {
    let data = data.sanitized();
    let assessment = RiskAssessment::with_rng(&data, today, rng);

    let insights = report::generate_insights(&assessment, &data);
    let recommendations = report::generate_recommendations(&assessment, &data);
    let quick_tips = report::quick_tips(&assessment, &data);

    let risk_level = assessment.risk_level();
    let burnout_level = assessment.burnout_level();
    let subject_risks = assessment
        .subject_risks
        .iter()
        .map(|subject| SubjectRiskView {
            name: subject.name.clone(),
            risk: subject.risk,
            color: RiskLevel::from_score(subject.risk).chart_color(),
        })
        .collect();

    RiskAnalysis {
        academic_risk: assessment.academic_risk,
        burnout_risk: assessment.burnout_risk,
        risk_level,
        risk_level_label: risk_level.label(),
        burnout_level,
        burnout_level_label: burnout_level.label(),
        days_until_exam: assessment.days_until_exam,
        subject_risks,
        insights,
        recommendations,
        quick_tips,
    }
}
