use super::domain::{RiskLevel, StudentData};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hash::{DefaultHasher, Hash, Hasher};

/// Floor for a single subject's risk score.
const SUBJECT_RISK_FLOOR: i32 = 10;

/// Risk computed for a single subject, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRisk {
    pub name: String,
    pub risk: u8,
}

/// Numeric core of an analysis: both headline scores, the exam countdown,
/// and the per-subject breakdown. Insight and recommendation text is layered
/// on top by the report module.
#[derive(Debug, Clone)]
pub struct RiskAssessment {
    pub academic_risk: u8,
    pub burnout_risk: u8,
    pub days_until_exam: i64,
    pub subject_risks: Vec<SubjectRisk>,
}

impl RiskAssessment {
    /// Score a record with the deterministic per-record RNG. Callers that
    /// need a specific randomness source use [`RiskAssessment::with_rng`].
    pub fn new(data: &StudentData, today: NaiveDate) -> Self {
        Self::with_rng(data, today, &mut seeded_rng(data))
    }

    pub fn with_rng<R: Rng>(data: &StudentData, today: NaiveDate, rng: &mut R) -> Self {
        let days_until_exam = days_until_exam(data.exam_date, today);
        let academic_risk = academic_risk(data, days_until_exam);
        let burnout_risk = burnout_risk(data, days_until_exam);
        let subject_risks = subject_risks(&data.subjects, academic_risk, rng);

        Self {
            academic_risk,
            burnout_risk,
            days_until_exam,
            subject_risks,
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.academic_risk)
    }

    pub fn burnout_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.burnout_risk)
    }

    /// The subject with the highest risk; ties resolve to the earliest
    /// submitted subject. `None` only when the subject list is empty.
    pub fn weakest_subject(&self) -> Option<&SubjectRisk> {
        let mut weakest: Option<&SubjectRisk> = None;
        for subject in &self.subject_risks {
            if weakest.map_or(true, |current| subject.risk > current.risk) {
                weakest = Some(subject);
            }
        }
        weakest
    }
}

/// Whole days from `today` to the exam, clamped so an exam today or in the
/// past still reports one day remaining.
pub(crate) fn days_until_exam(exam_date: NaiveDate, today: NaiveDate) -> i64 {
    (exam_date - today).num_days().max(1)
}

fn academic_risk(data: &StudentData, days_until_exam: i64) -> u8 {
    let mut score = match days_until_exam {
        d if d < 7 => 30.0,
        d if d < 14 => 20.0,
        d if d < 30 => 10.0,
        _ => 0.0,
    };

    score += match data.daily_study_hours {
        h if h < 2.0 => 25.0,
        h if h < 4.0 => 15.0,
        h if h < 6.0 => 5.0,
        _ => 0.0,
    };

    score += data.missed_study_days / 7.0 * 25.0;
    score += data.topic_difficulty / 100.0 * 20.0;

    score.round().min(100.0) as u8
}

fn burnout_risk(data: &StudentData, days_until_exam: i64) -> u8 {
    let mut score = f64::from(data.stress_level) / 5.0 * 40.0;

    score += match data.daily_study_hours {
        h if h > 8.0 => 30.0,
        h if h > 6.0 => 15.0,
        h if h < 2.0 => 20.0,
        _ => 0.0,
    };

    score += match days_until_exam {
        d if d < 7 => 30.0,
        d if d < 14 => 20.0,
        d if d < 21 => 10.0,
        _ => 0.0,
    };

    score.round().min(100.0) as u8
}

/// Spread the headline academic score across subjects: even positions lean
/// heavier, odd positions lighter, with a small jitter so equal inputs do
/// not render as a flat bar chart. Results stay within [10, 100].
fn subject_risks<R: Rng>(subjects: &[String], academic_risk: u8, rng: &mut R) -> Vec<SubjectRisk> {
    subjects
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let spread = if index % 2 == 0 { 15 } else { -10 };
            let jitter = rng.random_range(0..15);
            let base = i32::from(academic_risk) + spread + jitter;

            SubjectRisk {
                name: name.clone(),
                risk: base.clamp(SUBJECT_RISK_FLOOR, 100) as u8,
            }
        })
        .collect()
}

/// The original implementation drew unseeded randomness per render; here the
/// RNG is seeded from the subject list so identical submissions always
/// produce identical analyses.
pub(crate) fn seeded_rng(data: &StudentData) -> StdRng {
    let mut hasher = DefaultHasher::new();
    for subject in &data.subjects {
        subject.hash(&mut hasher);
    }
    StdRng::seed_from_u64(hasher.finish())
}
