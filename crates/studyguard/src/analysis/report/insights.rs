use super::super::domain::{Severity, StudentData};
use super::super::engine::RiskAssessment;
use super::views::Insight;

/// Build the insight cards for an assessment. Order is fixed: the academic
/// band first (always exactly one entry), then the burnout band when it
/// fires, then the weakest-subject spotlight when it clears the 50% bar.
pub(crate) fn generate_insights(assessment: &RiskAssessment, data: &StudentData) -> Vec<Insight> {
    let mut insights = Vec::new();

    let days = assessment.days_until_exam;
    let hours = data.daily_study_hours;
    let missed = data.missed_study_days;

    if assessment.academic_risk >= 65 {
        let extra_hours = ((100.0 - f64::from(assessment.academic_risk)) / 10.0).ceil();
        let knowledge_gap = (missed * 2.5).round();
        insights.push(Insight {
            title: "High Failure Risk Detected".to_string(),
            description: format!(
                "With {days} days left and {hours}h daily study, you need {extra_hours} more \
                 hours/day to catch up. Your {missed} missed days have created a \
                 {knowledge_gap}% knowledge gap."
            ),
            severity: Severity::Danger,
        });
    } else if assessment.academic_risk >= 35 {
        let pace = if hours < 4.0 { "below average" } else { "adequate" };
        insights.push(Insight {
            title: "Moderate Risk - Room for Improvement".to_string(),
            description: format!(
                "You're studying {hours}h/day which is {pace}. With {days} days left, \
                 increasing by 1-2 hours can reduce your risk by 15-20%."
            ),
            severity: Severity::Warning,
        });
    } else {
        let active_days = 7.0 - missed;
        insights.push(Insight {
            title: "You're On Track!".to_string(),
            description: format!(
                "Great progress! Your {hours}h daily study with {active_days} active days/week \
                 puts you ahead of 70% of students."
            ),
            severity: Severity::Success,
        });
    }

    if assessment.burnout_risk >= 65 {
        let workload = if hours > 6.0 { "excessive" } else { "irregular" };
        insights.push(Insight {
            title: "Burnout Warning".to_string(),
            description: format!(
                "Stress level {}/5 combined with {workload} study hours indicates burnout. \
                 Energy typically drops 40% when burned out, making study ineffective.",
                data.stress_level
            ),
            severity: Severity::Danger,
        });
    } else if assessment.burnout_risk >= 35 && data.stress_level >= 3 {
        insights.push(Insight {
            title: "Stress Building Up".to_string(),
            description: format!(
                "Your stress level ({}/5) is elevated. Students at this level retain 25% less \
                 information. Consider 10-min breaks every 45 mins.",
                data.stress_level
            ),
            severity: Severity::Warning,
        });
    }

    if let Some(weakest) = assessment.weakest_subject() {
        if weakest.risk >= 50 {
            let severity = if weakest.risk >= 65 {
                Severity::Danger
            } else {
                Severity::Warning
            };
            insights.push(Insight {
                title: format!("Focus Area: {}", weakest.name),
                description: format!(
                    "{} shows {}% risk - allocate 40% of your study time here. Start with \
                     foundational concepts before advanced topics.",
                    weakest.name, weakest.risk
                ),
                severity,
            });
        }
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::engine::SubjectRisk;
    use chrono::NaiveDate;

    fn data(hours: f64, missed: f64, stress: u8) -> StudentData {
        StudentData {
            subjects: vec!["Math".to_string()],
            exam_date: NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date"),
            daily_study_hours: hours,
            missed_study_days: missed,
            topic_difficulty: 50.0,
            stress_level: stress,
        }
    }

    fn assessment(academic: u8, burnout: u8, subject_risk: u8) -> RiskAssessment {
        RiskAssessment {
            academic_risk: academic,
            burnout_risk: burnout,
            days_until_exam: 10,
            subject_risks: vec![SubjectRisk {
                name: "Math".to_string(),
                risk: subject_risk,
            }],
        }
    }

    #[test]
    fn high_academic_risk_emits_danger_with_catch_up_numbers() {
        let insights = generate_insights(&assessment(91, 20, 40), &data(1.0, 5.0, 2));

        assert_eq!(insights[0].title, "High Failure Risk Detected");
        assert_eq!(insights[0].severity, Severity::Danger);
        // ceil((100-91)/10) = 1 extra hour, 5 * 2.5 = 12.5 rounds to 13.
        assert!(insights[0].description.contains("1 more hours/day"));
        assert!(insights[0].description.contains("13% knowledge gap"));
    }

    #[test]
    fn moderate_band_distinguishes_pace() {
        let below = generate_insights(&assessment(40, 20, 30), &data(3.0, 1.0, 1));
        assert!(below[0].description.contains("below average"));

        let adequate = generate_insights(&assessment(40, 20, 30), &data(5.0, 1.0, 1));
        assert!(adequate[0].description.contains("adequate"));
        assert_eq!(adequate[0].severity, Severity::Warning);
    }

    #[test]
    fn low_risk_gets_a_success_card_and_nothing_else() {
        let insights = generate_insights(&assessment(20, 20, 30), &data(5.0, 1.0, 1));

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "You're On Track!");
        assert_eq!(insights[0].severity, Severity::Success);
        assert!(insights[0].description.contains("6 active days/week"));
    }

    #[test]
    fn mid_burnout_needs_elevated_stress_to_fire() {
        let calm = generate_insights(&assessment(20, 50, 30), &data(5.0, 1.0, 2));
        assert!(calm.iter().all(|i| i.title != "Stress Building Up"));

        let stressed = generate_insights(&assessment(20, 50, 30), &data(5.0, 1.0, 3));
        assert!(stressed.iter().any(|i| i.title == "Stress Building Up"));
    }

    #[test]
    fn burnout_warning_describes_workload() {
        let excessive = generate_insights(&assessment(20, 70, 30), &data(7.0, 1.0, 5));
        assert!(excessive
            .iter()
            .any(|i| i.title == "Burnout Warning" && i.description.contains("excessive")));

        let irregular = generate_insights(&assessment(20, 70, 30), &data(1.0, 1.0, 5));
        assert!(irregular
            .iter()
            .any(|i| i.title == "Burnout Warning" && i.description.contains("irregular")));
    }

    #[test]
    fn subject_spotlight_requires_fifty_percent_risk() {
        let quiet = generate_insights(&assessment(20, 20, 49), &data(5.0, 1.0, 1));
        assert!(quiet.iter().all(|i| !i.title.starts_with("Focus Area")));

        let spotlight = generate_insights(&assessment(20, 20, 55), &data(5.0, 1.0, 1));
        let focus = spotlight
            .iter()
            .find(|i| i.title == "Focus Area: Math")
            .expect("spotlight emitted");
        assert_eq!(focus.severity, Severity::Warning);

        let urgent = generate_insights(&assessment(20, 20, 70), &data(5.0, 1.0, 1));
        let focus = urgent
            .iter()
            .find(|i| i.title == "Focus Area: Math")
            .expect("spotlight emitted");
        assert_eq!(focus.severity, Severity::Danger);
    }
}
