//! Best-effort analytics tracking.
//!
//! Analytics is intentionally non-fatal: every failure path here logs at
//! `warn` and returns normally, so a dead analytics service can never break
//! a page view or a project click. This is the one place the error policy
//! diverges from the CRUD surface, and it diverges on purpose.

use serde::Serialize;

use crate::ApiClient;

#[derive(Serialize)]
struct TrackEventBody<'a> {
    action: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<&'a str>,
    data: serde_json::Value,
}

#[derive(Serialize)]
struct TrackProjectBody<'a> {
    action: &'a str,
}

impl ApiClient {
    /// Record a page-level event, correlated by the anonymous session id.
    pub async fn track_event(&self, action: &str, page: Option<&str>, session_id: &str) {
        let action = action.trim();
        if action.is_empty() {
            tracing::warn!("analytics: action is required");
            return;
        }
        let body = TrackEventBody {
            action,
            page: page.map(str::trim).filter(|p| !p.is_empty()),
            data: serde_json::json!({}),
        };
        let request = self
            .http_post_with_session("/api/analytics/track", session_id)
            .json(&body);
        if let Err(e) = self.execute::<serde_json::Value>(request).await {
            tracing::warn!(error = %e, "analytics tracking failed");
        }
    }

    /// Record an interaction with a specific project (view, click-through).
    pub async fn track_project(&self, project_id: &str, action: &str, session_id: &str) {
        let project_id = project_id.trim();
        let action = action.trim();
        if project_id.is_empty() || action.is_empty() {
            tracing::warn!("analytics: project id and action are required");
            return;
        }
        let body = TrackProjectBody { action };
        let request = self
            .http_post_with_session(&format!("/api/analytics/project/{project_id}"), session_id)
            .json(&body);
        if let Err(e) = self.execute::<serde_json::Value>(request).await {
            tracing::warn!(error = %e, "project analytics tracking failed");
        }
    }

    fn http_post_with_session(&self, endpoint: &str, session_id: &str) -> reqwest::RequestBuilder {
        self.http
            .post(format!("{}{}", self.base_url(), endpoint))
            .header("X-Session-ID", session_id)
    }
}
