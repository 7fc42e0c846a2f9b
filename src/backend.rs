//! Scoreboard gateway
//!
//! Thin glue over the score API. All calls are fired from `spawn_local`
//! after game over (or from explicit UI actions) and never awaited by the
//! tick loop; failures surface as user-visible message strings.

use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Score submission body (`POST /api/score`)
#[derive(Debug, Serialize)]
pub struct ScoreSubmission<'a> {
    pub name: &'a str,
    pub score: u64,
}

#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// One leaderboard row, highest score first
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u64,
}

#[derive(Debug, Deserialize)]
struct LeaderboardResponse {
    #[serde(default)]
    scores: Vec<ScoreEntry>,
    error: Option<String>,
}

/// Identity-provider callback body (`POST /api/auth/google`)
#[derive(Debug, Serialize)]
pub struct AuthRequest<'a> {
    pub id_token: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    /// Resolved account identifier, cached as the default submission name
    pub account: Option<String>,
    pub name: Option<String>,
    pub error: Option<String>,
}

fn js_err(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Fetch a URL and return the response body as text (plus the HTTP ok flag)
async fn fetch_text(request: Request) -> Result<(bool, String), String> {
    let window = web_sys::window().ok_or("no window")?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = response.dyn_into().map_err(js_err)?;
    let ok = response.ok();
    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok((ok, text.as_string().unwrap_or_default()))
}

fn post_request(url: &str, body: &impl Serialize) -> Result<Request, String> {
    let json = serde_json::to_string(body).map_err(|e| e.to_string())?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&json));
    let request = Request::new_with_str_and_init(url, &init).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;
    Ok(request)
}

/// Submit a finished session's score. `Err` carries a user-visible message.
pub async fn submit_score(name: &str, score: u64) -> Result<SubmitResponse, String> {
    let request = post_request("/api/score", &ScoreSubmission { name, score })?;
    let (ok, body) = fetch_text(request).await?;
    let parsed: SubmitResponse =
        serde_json::from_str(&body).map_err(|_| "Unexpected server response".to_string())?;
    if !ok {
        return Err(parsed
            .error
            .unwrap_or_else(|| "Failed to save score".to_string()));
    }
    // The offline proxy answers with 200 and an error body
    if let Some(error) = parsed.error {
        return Err(error);
    }
    Ok(parsed)
}

/// Fetch ranked scores, highest first. An empty list is a valid response.
pub async fn fetch_leaderboard() -> Result<Vec<ScoreEntry>, String> {
    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init("/api/scores", &init).map_err(js_err)?;
    let (ok, body) = fetch_text(request).await?;
    let parsed: LeaderboardResponse =
        serde_json::from_str(&body).map_err(|_| "Unexpected server response".to_string())?;
    if !ok {
        return Err(parsed
            .error
            .unwrap_or_else(|| "Failed to load leaderboard".to_string()));
    }
    if let Some(error) = parsed.error {
        return Err(error);
    }
    Ok(parsed.scores)
}

/// Exchange an identity-provider credential for an account name
pub async fn verify_identity(id_token: &str) -> Result<AuthResponse, String> {
    let request = post_request("/api/auth/google", &AuthRequest { id_token })?;
    let (ok, body) = fetch_text(request).await?;
    let parsed: AuthResponse =
        serde_json::from_str(&body).map_err(|_| "Unexpected server response".to_string())?;
    if !ok || parsed.account.is_none() {
        return Err(parsed
            .error
            .unwrap_or_else(|| "Sign-in failed".to_string()));
    }
    Ok(parsed)
}
