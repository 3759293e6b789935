mod insights;
mod recommendations;
pub mod views;

pub use views::{Insight, Recommendation, RiskAnalysis, SubjectRiskView};

pub(crate) use insights::generate_insights;
pub(crate) use recommendations::{generate_recommendations, quick_tips};
