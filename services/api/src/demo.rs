use chrono::{Local, NaiveDate};
use clap::Args;
use studyguard::analysis::domain::StudentData;
use studyguard::analysis::{analyze, RiskAnalysis};
use studyguard::error::AppError;
use studyguard::session::{SessionEvent, StudySession};

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Subjects being studied (comma separated or repeated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub(crate) subjects: Vec<String>,
    /// Exam date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) exam_date: NaiveDate,
    /// Hours studied per day
    #[arg(long, default_value_t = 4.0)]
    pub(crate) daily_study_hours: f64,
    /// Study days missed in the last week
    #[arg(long, default_value_t = 2.0)]
    pub(crate) missed_study_days: f64,
    /// Topic difficulty from 0 (easy) to 100 (hard)
    #[arg(long, default_value_t = 50.0)]
    pub(crate) topic_difficulty: f64,
    /// Stress level from 1 to 5
    #[arg(long, default_value_t = 3)]
    pub(crate) stress_level: u8,
    /// Evaluation date for the report (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Emit the full analysis as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Exam date for the canned submission (defaults to today + 10 days)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) exam_date: Option<NaiveDate>,
    /// Evaluation date override (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        subjects,
        exam_date,
        daily_study_hours,
        missed_study_days,
        topic_difficulty,
        stress_level,
        today,
        json,
    } = args;

    let data = StudentData {
        subjects,
        exam_date,
        daily_study_hours,
        missed_study_days,
        topic_difficulty,
        stress_level,
    };
    data.validate()?;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let analysis = analyze(&data, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        render_analysis(&data, today, &analysis);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let exam_date = args
        .exam_date
        .unwrap_or_else(|| today + chrono::Duration::days(10));

    println!("Study risk demo");

    let mut session = StudySession::new();
    println!("Screen: {}", session.screen().label());

    session.apply(SessionEvent::GetStarted);
    println!("Get started -> {}", session.screen().label());

    let data = StudentData {
        subjects: vec![
            "Mathematics".to_string(),
            "Physics".to_string(),
            "Chemistry".to_string(),
        ],
        exam_date,
        daily_study_hours: 3.0,
        missed_study_days: 3.0,
        topic_difficulty: 70.0,
        stress_level: 4,
    };
    data.validate()?;

    session.apply(SessionEvent::Submit(data));
    println!("Submit -> {}", session.screen().label());

    if let Some(submission) = session.student_data() {
        let analysis = analyze(submission, today);
        println!();
        render_analysis(submission, today, &analysis);
    }

    session.apply(SessionEvent::StartOver);
    println!(
        "\nStart over -> {} (stored submission cleared: {})",
        session.screen().label(),
        session.student_data().is_none()
    );

    Ok(())
}

fn render_analysis(data: &StudentData, today: NaiveDate, analysis: &RiskAnalysis) {
    println!("Risk analysis");
    println!(
        "Exam {} ({} day(s) away, evaluated {}) | {} subject(s)",
        data.exam_date,
        analysis.days_until_exam,
        today,
        data.subjects.len()
    );
    println!(
        "Academic risk: {}% ({})",
        analysis.academic_risk, analysis.risk_level_label
    );
    println!(
        "Burnout risk: {}% ({})",
        analysis.burnout_risk, analysis.burnout_level_label
    );

    if analysis.subject_risks.is_empty() {
        println!("\nSubject breakdown: none");
    } else {
        println!("\nSubject breakdown");
        for subject in &analysis.subject_risks {
            println!("- {}: {}%", subject.name, subject.risk);
        }
    }

    println!("\nKey insights");
    for insight in &analysis.insights {
        println!(
            "- [{}] {}: {}",
            insight.severity.label(),
            insight.title,
            insight.description
        );
    }

    if analysis.recommendations.is_empty() {
        println!("\nAction plan: nothing to flag");
    } else {
        println!("\nAction plan");
        for recommendation in &analysis.recommendations {
            println!(
                "- [{} priority] {}: {}",
                recommendation.priority.label(),
                recommendation.title,
                recommendation.description
            );
            for (index, step) in recommendation.steps.iter().enumerate() {
                println!("    {}. {}", index + 1, step);
            }
        }
    }

    println!("\nQuick tips");
    for tip in &analysis.quick_tips {
        println!("- {tip}");
    }
}
