use crate::infra::{deserialize_date, deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use studyguard::analysis::domain::StudentData;
use studyguard::analysis::{analyze, RiskAnalysis};
use studyguard::error::AppError;

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    pub(crate) subjects: Vec<String>,
    #[serde(deserialize_with = "deserialize_date")]
    pub(crate) exam_date: NaiveDate,
    pub(crate) daily_study_hours: f64,
    pub(crate) missed_study_days: f64,
    pub(crate) topic_difficulty: f64,
    pub(crate) stress_level: u8,
    /// Evaluation date override; defaults to the server's local date.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeResponse {
    pub(crate) exam_date: NaiveDate,
    pub(crate) today: NaiveDate,
    pub(crate) analysis: RiskAnalysis,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/analyze", post(analyze_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn analyze_endpoint(
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let AnalyzeRequest {
        subjects,
        exam_date,
        daily_study_hours,
        missed_study_days,
        topic_difficulty,
        stress_level,
        today,
    } = payload;

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

    Ok(Json(AnalyzeResponse {
        exam_date,
        today,
        analysis,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn sample_request() -> AnalyzeRequest {
        AnalyzeRequest {
            subjects: vec!["Math".to_string(), "Physics".to_string()],
            exam_date: NaiveDate::from_ymd_opt(2026, 3, 12).expect("valid exam date"),
            daily_study_hours: 3.0,
            missed_study_days: 2.0,
            topic_difficulty: 60.0,
            stress_level: 3,
            today: NaiveDate::from_ymd_opt(2026, 3, 2),
        }
    }

    #[tokio::test]
    async fn analyze_endpoint_returns_full_analysis() {
        let Json(body) = analyze_endpoint(Json(sample_request()))
            .await
            .expect("analysis builds");

        assert_eq!(body.today, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert_eq!(body.analysis.days_until_exam, 10);
        assert_eq!(body.analysis.subject_risks.len(), 2);
        assert!(body.analysis.quick_tips.len() <= 4);
        assert!(!body.analysis.insights.is_empty());
    }

    #[tokio::test]
    async fn analyze_endpoint_rejects_empty_subject_list() {
        let mut request = sample_request();
        request.subjects.clear();

        let result = analyze_endpoint(Json(request)).await;
        assert!(matches!(result, Err(AppError::Invalid(_))));
    }

    #[tokio::test]
    async fn analyze_route_round_trips_json() {
        let app = router();
        let payload = json!({
            "subjects": ["Math"],
            "exam_date": "2026-03-07",
            "daily_study_hours": 1.0,
            "missed_study_days": 5.0,
            "topic_difficulty": 90.0,
            "stress_level": 5,
            "today": "2026-03-02"
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body collects");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("valid json body");

        assert_eq!(body["analysis"]["academic_risk"], 91);
        assert_eq!(body["analysis"]["burnout_risk"], 90);
        assert_eq!(body["analysis"]["risk_level"], "high");
        assert_eq!(body["analysis"]["risk_level_label"], "High");
    }

    #[tokio::test]
    async fn analyze_route_rejects_invalid_submission_with_400() {
        let app = router();
        let payload = json!({
            "subjects": [],
            "exam_date": "2026-03-07",
            "daily_study_hours": 1.0,
            "missed_study_days": 5.0,
            "topic_difficulty": 90.0,
            "stress_level": 5
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body collects");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("valid json body");
        assert!(body["error"]
            .as_str()
            .expect("error message present")
            .contains("subject"));
    }
}
