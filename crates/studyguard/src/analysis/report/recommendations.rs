use super::super::domain::{Priority, StudentData};
use super::super::engine::RiskAssessment;
use super::views::Recommendation;

const TIP_CRAM: &str = "\u{1F3AF} Focus on frequently tested topics only";
const TIP_BREATHE: &str = "\u{1F9D8} Take 3 deep breaths before each study session";
const TIP_QUALITY: &str = "\u{26A1} Quality > Quantity. 6 focused hours beat 10 distracted hours";
const TIP_ROUTINE: &str = "\u{1F4C5} Study at the same time daily to build momentum";
const TIP_REVIEW: &str =
    "\u{1F4A1} Review notes within 24 hours - retention jumps from 20% to 80%";
const TIP_MUSIC: &str = "\u{1F3A7} Lo-fi or classical music can improve focus by 15%";

const MAX_QUICK_TIPS: usize = 4;

/// Build the action plan. Conditions are independent and evaluated in a
/// fixed order, except the two schedule plans which are mutually exclusive
/// (the emergency plan wins inside one week).
pub(crate) fn generate_recommendations(
    assessment: &RiskAssessment,
    data: &StudentData,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let days = assessment.days_until_exam;
    let hours = data.daily_study_hours;
    let missed = data.missed_study_days;

    if days <= 7 {
        let weakest = assessment
            .weakest_subject()
            .map(|subject| subject.name.as_str())
            .unwrap_or("weakest subject");
        recommendations.push(Recommendation {
            title: "Emergency 7-Day Plan",
            description: format!(
                "With only {days} days left, every hour counts. Focus on high-yield topics only."
            ),
            steps: vec![
                format!("Day 1-2: Review {weakest} core concepts only"),
                "Day 3-4: Practice problems from past papers (aim for 20+ questions/day)"
                    .to_string(),
                "Day 5-6: Revise all formulas, definitions, and key facts".to_string(),
                "Day 7: Light review + rest. Sleep 8 hours before exam".to_string(),
            ],
            priority: Priority::High,
        });
    } else if days <= 14 {
        recommendations.push(Recommendation {
            title: "2-Week Intensive Strategy",
            description: "You have time to cover everything if you're strategic.".to_string(),
            steps: vec![
                format!(
                    "Week 1: Complete all {} syllabus with notes",
                    data.subjects.join(", ")
                ),
                "Daily: 2 hours theory + 1 hour practice problems".to_string(),
                "Week 2: Focus on weak areas and past paper practice".to_string(),
                "Last 3 days: Revision only, no new topics".to_string(),
            ],
            priority: Priority::High,
        });
    }

    if hours < 4.0 {
        let target = 6.0_f64.min(hours + 2.0);
        let priority = if assessment.academic_risk >= 50 {
            Priority::High
        } else {
            Priority::Medium
        };
        recommendations.push(Recommendation {
            title: "Increase Study Time Gradually",
            description: format!("You're at {hours}h/day. Aim for {target}h for optimal results."),
            steps: vec![
                format!("Tomorrow: Add 30 minutes (total {}h)", hours + 0.5),
                "Day 3: Add another 30 minutes".to_string(),
                "Use phone timer - study 25 min, break 5 min (Pomodoro)".to_string(),
                "Study your hardest subject when most alert (usually morning)".to_string(),
            ],
            priority,
        });
    }

    if missed >= 3.0 {
        recommendations.push(Recommendation {
            title: "Build Consistent Habits",
            description: format!("{missed} missed days/week creates gaps. Consistency beats intensity."),
            steps: vec![
                "Set a fixed study time (e.g., 6-8 PM daily)".to_string(),
                "Start with just 30 minutes on 'off' days - something is better than nothing"
                    .to_string(),
                "Use a habit tracker app or calendar to mark study days".to_string(),
                "Reward yourself after completing a study streak".to_string(),
            ],
            priority: Priority::Medium,
        });
    }

    if assessment.burnout_risk >= 50 || data.stress_level >= 4 {
        recommendations.push(Recommendation {
            title: "Prevent Burnout Now",
            description: "High stress reduces memory retention by 30%. Recovery is essential."
                .to_string(),
            steps: vec![
                "Take a 10-min walk after every 2 hours of study".to_string(),
                "Sleep 7-8 hours minimum - memory consolidates during sleep".to_string(),
                "Try 4-7-8 breathing: inhale 4s, hold 7s, exhale 8s".to_string(),
                "Schedule 1 hour of non-study activity daily (exercise, hobby)".to_string(),
            ],
            priority: Priority::High,
        });
    }

    if data.topic_difficulty >= 66.0 {
        recommendations.push(Recommendation {
            title: "Tackle Difficult Topics",
            description: "Hard topics need different strategies than easy ones.".to_string(),
            steps: vec![
                "Break complex topics into 3-5 smaller sub-topics".to_string(),
                "Watch YouTube explanations before reading textbooks".to_string(),
                "Teach the concept out loud (even to yourself)".to_string(),
                "Do 5 practice problems per difficult concept".to_string(),
            ],
            priority: Priority::Medium,
        });
    }

    recommendations
}

/// Situational tips first, the two evergreen tips last, truncated to four.
/// When every conditional tip fires the evergreen ones fall off the end.
pub(crate) fn quick_tips(assessment: &RiskAssessment, data: &StudentData) -> Vec<&'static str> {
    let mut tips = Vec::new();

    if assessment.days_until_exam <= 3 {
        tips.push(TIP_CRAM);
    }
    if data.stress_level >= 4 {
        tips.push(TIP_BREATHE);
    }
    if data.daily_study_hours >= 8.0 {
        tips.push(TIP_QUALITY);
    }
    if data.missed_study_days >= 2.0 {
        tips.push(TIP_ROUTINE);
    }

    tips.push(TIP_REVIEW);
    tips.push(TIP_MUSIC);
    tips.truncate(MAX_QUICK_TIPS);

    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::engine::SubjectRisk;
    use chrono::NaiveDate;

    fn data(subjects: &[&str], hours: f64, missed: f64, difficulty: f64, stress: u8) -> StudentData {
        StudentData {
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            exam_date: NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date"),
            daily_study_hours: hours,
            missed_study_days: missed,
            topic_difficulty: difficulty,
            stress_level: stress,
        }
    }

    fn assessment(academic: u8, burnout: u8, days: i64, subjects: &[(&str, u8)]) -> RiskAssessment {
        RiskAssessment {
            academic_risk: academic,
            burnout_risk: burnout,
            days_until_exam: days,
            subject_risks: subjects
                .iter()
                .map(|(name, risk)| SubjectRisk {
                    name: name.to_string(),
                    risk: *risk,
                })
                .collect(),
        }
    }

    #[test]
    fn emergency_plan_names_the_weakest_subject() {
        let assessment = assessment(80, 40, 5, &[("Math", 60), ("Physics", 85)]);
        let recommendations =
            generate_recommendations(&assessment, &data(&["Math", "Physics"], 5.0, 1.0, 30.0, 2));

        let plan = &recommendations[0];
        assert_eq!(plan.title, "Emergency 7-Day Plan");
        assert_eq!(plan.priority, Priority::High);
        assert_eq!(plan.steps.len(), 4);
        assert_eq!(plan.steps[0], "Day 1-2: Review Physics core concepts only");
    }

    #[test]
    fn emergency_plan_falls_back_without_subjects() {
        let assessment = assessment(80, 40, 5, &[]);
        let recommendations = generate_recommendations(&assessment, &data(&[], 5.0, 1.0, 30.0, 2));

        assert_eq!(
            recommendations[0].steps[0],
            "Day 1-2: Review weakest subject core concepts only"
        );
    }

    #[test]
    fn two_week_window_gets_the_intensive_strategy_instead() {
        let assessment = assessment(50, 40, 10, &[("Math", 60), ("Physics", 55)]);
        let recommendations =
            generate_recommendations(&assessment, &data(&["Math", "Physics"], 5.0, 1.0, 30.0, 2));

        assert_eq!(recommendations[0].title, "2-Week Intensive Strategy");
        assert!(recommendations[0].steps[0].contains("Math, Physics"));
        assert!(recommendations
            .iter()
            .all(|rec| rec.title != "Emergency 7-Day Plan"));
    }

    #[test]
    fn study_time_priority_follows_academic_risk() {
        let relaxed = assessment(30, 20, 40, &[("Math", 30)]);
        let recommendations =
            generate_recommendations(&relaxed, &data(&["Math"], 2.0, 1.0, 30.0, 2));
        let rec = recommendations
            .iter()
            .find(|rec| rec.title == "Increase Study Time Gradually")
            .expect("study time recommendation fires below 4h");
        assert_eq!(rec.priority, Priority::Medium);
        assert!(rec.description.contains("Aim for 4h"));
        assert_eq!(rec.steps[0], "Tomorrow: Add 30 minutes (total 2.5h)");

        let pressured = assessment(60, 20, 40, &[("Math", 30)]);
        let recommendations =
            generate_recommendations(&pressured, &data(&["Math"], 2.0, 1.0, 30.0, 2));
        let rec = recommendations
            .iter()
            .find(|rec| rec.title == "Increase Study Time Gradually")
            .expect("study time recommendation fires below 4h");
        assert_eq!(rec.priority, Priority::High);
    }

    #[test]
    fn burnout_prevention_fires_on_score_or_stress() {
        let by_score = assessment(30, 55, 40, &[("Math", 30)]);
        let recommendations =
            generate_recommendations(&by_score, &data(&["Math"], 5.0, 1.0, 30.0, 2));
        assert!(recommendations
            .iter()
            .any(|rec| rec.title == "Prevent Burnout Now"));

        let by_stress = assessment(30, 20, 40, &[("Math", 30)]);
        let recommendations =
            generate_recommendations(&by_stress, &data(&["Math"], 5.0, 1.0, 30.0, 4));
        assert!(recommendations
            .iter()
            .any(|rec| rec.title == "Prevent Burnout Now"));
    }

    #[test]
    fn quiet_profile_triggers_nothing() {
        let calm = assessment(7, 8, 60, &[("A", 20), ("B", 15)]);
        let recommendations =
            generate_recommendations(&calm, &data(&["A", "B"], 5.0, 0.0, 10.0, 1));
        assert!(recommendations.is_empty());
    }

    #[test]
    fn habit_and_difficulty_triggers_fire_independently() {
        let assessment = assessment(30, 20, 40, &[("Math", 30)]);
        let recommendations =
            generate_recommendations(&assessment, &data(&["Math"], 5.0, 3.0, 70.0, 2));

        let titles: Vec<&str> = recommendations.iter().map(|rec| rec.title).collect();
        assert_eq!(titles, vec!["Build Consistent Habits", "Tackle Difficult Topics"]);
    }

    #[test]
    fn quick_tips_cap_at_four_and_drop_evergreens_last() {
        let busy = assessment(80, 80, 2, &[("Math", 80)]);
        let tips = quick_tips(&busy, &data(&["Math"], 9.0, 3.0, 80.0, 5));

        assert_eq!(tips.len(), 4);
        assert_eq!(tips[0], TIP_CRAM);
        assert_eq!(tips[3], TIP_ROUTINE);
        assert!(!tips.contains(&TIP_REVIEW));

        let calm = assessment(7, 8, 60, &[("A", 20)]);
        let tips = quick_tips(&calm, &data(&["A"], 5.0, 0.0, 10.0, 1));
        assert_eq!(tips, vec![TIP_REVIEW, TIP_MUSIC]);
    }
}
