//! Backend API client.
//!
//! One method per endpoint; each attaches the bearer token when present,
//! awaits the response, and maps failures into [`ApiError`]. There are no
//! retries and no timeouts. A 401 is always surfaced as `Unauthorized` so
//! every page can treat it the same way.

use questforge_shared::{
    AdminUser, BEARER_SCHEME, Character, CharacterTemplate, CharacterTemplateUpsert,
    CreateCharacterRequest, DEFAULT_API_BASE, DevResetRequest, HEADER_AUTHORIZATION,
    LeaderboardEntry, LeaderboardSort, LoginRequest, LoginResponse, Quest, QuestAttemptOutcome,
    QuestAttemptRequest, QuestCompletion, QuestUpsert, RegisterRequest, RegisterResponse,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::session::Session;
use crate::web::{HttpClient, HttpError, HttpRequestBuilder, HttpResponse};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend rejected the token. Treated uniformly as "session over".
    Unauthorized,
    /// Non-2xx with a best-effort message mined from the body.
    Http { status: u16, message: String },
    Network(String),
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "your session has expired, please log in again"),
            ApiError::Http { message, .. } => write!(f, "{message}"),
            ApiError::Network(msg) => write!(f, "could not reach the server: {msg}"),
            ApiError::Decode(msg) => write!(f, "unexpected server response: {msg}"),
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::RequestBuildFailed(msg) | HttpError::NetworkError(msg) => {
                ApiError::Network(msg)
            }
            HttpError::ResponseParseFailed(msg) => ApiError::Decode(msg),
        }
    }
}

const GENERIC_ERROR: &str = "Something went wrong on the server.";

/// Pulls a human-readable message out of an error body. The backend usually
/// sends `{"message": ...}`; problem-details bodies carry `title`.
fn extract_error_message(body: Option<&str>) -> String {
    let Some(body) = body else {
        return GENERIC_ERROR.to_string();
    };
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "title", "error"] {
            if let Some(msg) = value.get(key).and_then(|m| m.as_str()) {
                if !msg.trim().is_empty() {
                    return msg.to_string();
                }
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('{') || trimmed.starts_with('<') {
        GENERIC_ERROR.to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestForgeApi {
    base_url: String,
    token: Option<String>,
}

impl QuestForgeApi {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, token }
    }

    /// Client bound to the token currently in session storage.
    pub fn from_session() -> Self {
        Self::new(DEFAULT_API_BASE, Session::token())
    }

    /// Unauthenticated client for login/register.
    pub fn anonymous() -> Self {
        Self::new(DEFAULT_API_BASE, None)
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn authorize(&self, builder: HttpRequestBuilder) -> HttpRequestBuilder {
        match &self.token {
            Some(token) => builder.header(HEADER_AUTHORIZATION, &format!("{BEARER_SCHEME} {token}")),
            None => builder,
        }
    }

    async fn expect_ok(&self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        if response.status() == 401 {
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.ok();
            return Err(ApiError::Http {
                status,
                message: extract_error_message(body.as_deref()),
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.authorize(HttpClient::get(&self.url(path))).send().await?;
        Ok(self.expect_ok(response).await?.json().await?)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(HttpClient::post(&self.url(path)).json(body)?)
            .send()
            .await?;
        Ok(self.expect_ok(response).await?.json().await?)
    }

    async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .authorize(HttpClient::post(&self.url(path)).json(body)?)
            .send()
            .await?;
        self.expect_ok(response).await.map(|_| ())
    }

    async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .authorize(HttpClient::put(&self.url(path)).json(body)?)
            .send()
            .await?;
        self.expect_ok(response).await.map(|_| ())
    }

    async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(HttpClient::delete(&self.url(path)))
            .send()
            .await?;
        self.expect_ok(response).await.map(|_| ())
    }

    // -----------------------------------------------------------------
    // Account
    // -----------------------------------------------------------------

    pub async fn login(&self, email: String, password: String) -> Result<LoginResponse, ApiError> {
        self.post_json("/account/login", &LoginRequest { email, password })
            .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post_json("/register", request).await
    }

    // -----------------------------------------------------------------
    // User characters
    // -----------------------------------------------------------------

    pub async fn my_characters(&self) -> Result<Vec<Character>, ApiError> {
        self.get_json("/usercharacter").await
    }

    /// The authoritative current selection. A 404 means "nothing selected",
    /// which is an ordinary state, not an error.
    pub async fn selected_character(&self) -> Result<Option<Character>, ApiError> {
        let response = self
            .authorize(HttpClient::get(&self.url("/usercharacter/selected")))
            .send()
            .await?;
        if response.status() == 404 {
            return Ok(None);
        }
        self.expect_ok(response).await?.json().await.map_err(Into::into)
    }

    pub async fn select_character(&self, character_id: i64) -> Result<(), ApiError> {
        self.post_unit(
            "/usercharacter/select",
            &questforge_shared::SelectCharacterRequest { character_id },
        )
        .await
    }

    pub async fn create_character(&self, character_id: i64) -> Result<(), ApiError> {
        self.post_unit(
            "/usercharacter/create",
            &CreateCharacterRequest { character_id },
        )
        .await
    }

    pub async fn delete_user_character(&self, character_id: i64) -> Result<(), ApiError> {
        self.delete_unit(&format!("/usercharacter/{character_id}")).await
    }

    // -----------------------------------------------------------------
    // Character catalog (admin)
    // -----------------------------------------------------------------

    pub async fn character_catalog(&self) -> Result<Vec<CharacterTemplate>, ApiError> {
        self.get_json("/character").await
    }

    pub async fn create_catalog_character(
        &self,
        upsert: &CharacterTemplateUpsert,
    ) -> Result<(), ApiError> {
        self.post_unit("/character", upsert).await
    }

    pub async fn update_catalog_character(
        &self,
        character_id: i64,
        upsert: &CharacterTemplateUpsert,
    ) -> Result<(), ApiError> {
        self.put_unit(&format!("/character/{character_id}"), upsert).await
    }

    pub async fn delete_catalog_character(&self, character_id: i64) -> Result<(), ApiError> {
        self.delete_unit(&format!("/character/{character_id}")).await
    }

    // -----------------------------------------------------------------
    // Quests
    // -----------------------------------------------------------------

    pub async fn quests(&self) -> Result<Vec<Quest>, ApiError> {
        self.get_json("/quest").await
    }

    pub async fn create_quest(&self, upsert: &QuestUpsert) -> Result<(), ApiError> {
        self.post_unit("/quest", upsert).await
    }

    pub async fn update_quest(&self, quest_id: i64, upsert: &QuestUpsert) -> Result<(), ApiError> {
        self.put_unit(&format!("/quest/{quest_id}"), upsert).await
    }

    pub async fn delete_quest(&self, quest_id: i64) -> Result<(), ApiError> {
        self.delete_unit(&format!("/quest/{quest_id}")).await
    }

    pub async fn attempt_quest(
        &self,
        quest_id: i64,
        character_id: i64,
    ) -> Result<QuestAttemptOutcome, ApiError> {
        self.post_json(
            "/quest/attempt",
            &QuestAttemptRequest {
                quest_id,
                character_id,
            },
        )
        .await
    }

    pub async fn completed_quests(
        &self,
        character_id: i64,
    ) -> Result<Vec<QuestCompletion>, ApiError> {
        self.get_json(&format!("/quest/character/{character_id}/completed"))
            .await
    }

    // -----------------------------------------------------------------
    // Leaderboard / admin / dev
    // -----------------------------------------------------------------

    pub async fn leaderboard(
        &self,
        sort: LeaderboardSort,
    ) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.get_json(&format!("/leaderboard?sortBy={}", sort.query_value()))
            .await
    }

    pub async fn admin_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.get_json("/roles/users").await
    }

    pub async fn dev_reset(&self, token: String) -> Result<(), ApiError> {
        self.post_unit("/dev/reset", &DevResetRequest { token }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_join_handles_slashes() {
        let api = QuestForgeApi::new("http://localhost:5233/api/", None);
        assert_eq!(api.url("/quest"), "http://localhost:5233/api/quest");
        assert_eq!(api.url("quest"), "http://localhost:5233/api/quest");
    }

    #[test]
    fn leaderboard_paths_carry_sort_keys() {
        let api = QuestForgeApi::new(DEFAULT_API_BASE, None);
        assert_eq!(
            api.url(&format!(
                "/leaderboard?sortBy={}",
                LeaderboardSort::Gold.query_value()
            )),
            "http://localhost:5233/api/leaderboard?sortBy=gold"
        );
    }

    #[test]
    fn error_message_extraction_prefers_message_field() {
        assert_eq!(
            extract_error_message(Some(r#"{"message":"Wrong password"}"#)),
            "Wrong password"
        );
        assert_eq!(
            extract_error_message(Some(r#"{"title":"Bad Request","status":400}"#)),
            "Bad Request"
        );
        assert_eq!(extract_error_message(Some("plain failure")), "plain failure");
    }

    #[test]
    fn error_message_falls_back_to_generic() {
        assert_eq!(extract_error_message(None), GENERIC_ERROR);
        assert_eq!(extract_error_message(Some("")), GENERIC_ERROR);
        assert_eq!(extract_error_message(Some(r#"{"status":500}"#)), GENERIC_ERROR);
        assert_eq!(
            extract_error_message(Some("<html>502 Bad Gateway</html>")),
            GENERIC_ERROR
        );
    }
}
