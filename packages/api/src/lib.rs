//! # API crate — HTTP client for the portfolio backend
//!
//! Everything the frontends say to the backend goes through [`ApiClient`], a
//! thin wrapper over `reqwest` that prefixes the configured origin, attaches
//! the JSON content type, attaches a bearer token when the caller supplies
//! one, and collapses the uniform `{success, data, error}` envelope into a
//! `Result<T, ApiError>` the caller pattern-matches.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`envelope`] | The response envelope and its status+body → result collapse |
//! | [`error`] | [`ApiError`] taxonomy (auth / validation / network / server) |
//! | [`models`] | Wire models: projects, skills, contacts, stats, login data |
//! | [`payload`] | Write-side drafts, comma-list splitting, contact validation |
//!
//! ## Ground rules
//!
//! - The client never reads persisted state; callers inject the token and the
//!   analytics session id.
//! - No retries, no explicit timeout, no de-duplication. Each call is
//!   independent; re-entrancy control (disabling a submit button) is the
//!   caller's job.
//! - Analytics tracking is best-effort: failures are logged at `warn` and
//!   swallowed, never surfaced.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod envelope;
pub mod error;
pub mod models;
pub mod payload;

mod analytics;

pub use error::ApiError;
pub use models::{
    AdminUser, Contact, DashboardStats, EmailServiceStatus, LoginData, Project, ProjectStatus,
    Skill, SkillCategory, SkillsPayload,
};
pub use payload::{ContactForm, ProjectDraft, SkillDraft};

use store::Session;

/// HTTP client bound to one backend origin.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &store::SiteConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Issue a prepared request and collapse status + envelope into a result.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        // warn, not error: best-effort analytics calls share this path.
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "API request failed");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        envelope::decode(status, &body)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        token: Option<&str>,
    ) -> Result<Option<T>, ApiError> {
        let mut request = self
            .http
            .get(self.url(endpoint))
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<Option<T>, ApiError> {
        let mut request = self.http.post(self.url(endpoint)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<Option<T>, ApiError> {
        let mut request = self.http.put(self.url(endpoint)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.execute(request).await
    }

    async fn delete(&self, endpoint: &str, token: Option<&str>) -> Result<(), ApiError> {
        let mut request = self
            .http
            .delete(self.url(endpoint))
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.execute::<serde_json::Value>(request).await.map(|_| ())
    }

    // ---- auth ----

    /// Exchange credentials for a session. A server-side rejection (bad
    /// credentials) surfaces as [`ApiError::Auth`] so the login form shows it
    /// inline; transport failures stay [`ApiError::Network`].
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let data: LoginData = self
            .post("/api/auth/login", &body, None)
            .await
            .map_err(as_auth_rejection)
            .and_then(require_data)?;
        Ok(Session {
            token: data.token,
            user: data.user,
        })
    }

    // ---- admin reads ----

    pub async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats, ApiError> {
        self.get("/api/admin/dashboard", Some(token))
            .await
            .and_then(require_data)
    }

    /// Full project list including drafts.
    pub async fn admin_projects(&self, token: &str) -> Result<Vec<Project>, ApiError> {
        self.get("/api/admin/projects", Some(token))
            .await
            .and_then(require_data)
    }

    pub async fn admin_contacts(&self, token: &str) -> Result<Vec<Contact>, ApiError> {
        self.get("/api/admin/contacts", Some(token))
            .await
            .and_then(require_data)
    }

    // ---- public reads ----

    /// Published projects for the public page.
    pub async fn public_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get("/api/projects", None).await.and_then(require_data)
    }

    /// Flat skill list for both the public page and the admin skills tab.
    pub async fn public_skills(&self) -> Result<Vec<Skill>, ApiError> {
        let payload: SkillsPayload = self
            .get("/api/skills", None)
            .await
            .and_then(require_data)?;
        Ok(payload.skills)
    }

    // ---- project CRUD ----

    pub async fn create_project(
        &self,
        draft: &ProjectDraft,
        token: &str,
    ) -> Result<Project, ApiError> {
        self.post("/api/projects", draft, Some(token))
            .await
            .and_then(require_data)
    }

    pub async fn update_project(
        &self,
        id: &str,
        draft: &ProjectDraft,
        token: &str,
    ) -> Result<Project, ApiError> {
        self.put(&format!("/api/projects/{id}"), draft, Some(token))
            .await
            .and_then(require_data)
    }

    pub async fn delete_project(&self, id: &str, token: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/projects/{id}"), Some(token)).await
    }

    // ---- skill CRUD ----

    pub async fn create_skill(&self, draft: &SkillDraft, token: &str) -> Result<Skill, ApiError> {
        self.post("/api/skills", draft, Some(token))
            .await
            .and_then(require_data)
    }

    pub async fn update_skill(
        &self,
        id: &str,
        draft: &SkillDraft,
        token: &str,
    ) -> Result<Skill, ApiError> {
        self.put(&format!("/api/skills/{id}"), draft, Some(token))
            .await
            .and_then(require_data)
    }

    pub async fn delete_skill(&self, id: &str, token: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/skills/{id}"), Some(token)).await
    }

    // ---- contact ----

    /// Validate and submit the public contact form. Validation failures block
    /// the request entirely and never reach the network.
    pub async fn submit_contact(&self, form: &ContactForm) -> Result<(), ApiError> {
        form.validate()?;
        self.post::<serde_json::Value, _>("/api/contact", &form.to_payload(), None)
            .await
            .map(|_| ())
    }

    // ---- service probes ----

    /// Email-delivery probe for the dashboard status card. Any failure reads
    /// as Offline; this never errors.
    pub async fn email_service_status(&self) -> EmailServiceStatus {
        match self
            .get::<serde_json::Value>("/api/contact/test-email", None)
            .await
        {
            Ok(_) => EmailServiceStatus::Online,
            Err(_) => EmailServiceStatus::Offline,
        }
    }

    /// Liveness probe. `/health` is the one endpoint outside the envelope.
    pub async fn health_check(&self) -> bool {
        match self.http.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

/// A successful status with no `data` is a malformed response for the typed
/// operations; endpoints that legitimately omit it (delete, contact) ignore
/// the payload instead of calling this.
fn require_data<T>(data: Option<T>) -> Result<T, ApiError> {
    data.ok_or_else(|| ApiError::InvalidResponse("response missing data".to_string()))
}

/// Login rejections become auth errors; everything else passes through.
fn as_auth_rejection(err: ApiError) -> ApiError {
    match err {
        ApiError::Server { message, .. } => ApiError::Auth(message),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_rejection_maps_to_auth() {
        let err = as_auth_rejection(ApiError::Server {
            status: 401,
            message: "Invalid credentials".to_string(),
        });
        assert_eq!(err, ApiError::Auth("Invalid credentials".to_string()));
        assert!(err.is_auth());
    }

    #[test]
    fn test_network_failure_stays_network_on_login() {
        let err = as_auth_rejection(ApiError::Network("connection refused".to_string()));
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[test]
    fn test_missing_data_is_invalid_response() {
        assert!(matches!(
            require_data::<u32>(None),
            Err(ApiError::InvalidResponse(_))
        ));
        assert_eq!(require_data(Some(5)).unwrap(), 5);
    }
}
