//! REST helpers for the analysis API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against
//! [`crate::config::api_base_url`].
//! Server-side (SSR) and native tests: every call returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics. Non-OK statuses are
//! turned into `ApiError::Status` with the server's `{detail}` when present,
//! so each call site can decide between logging, alerting, or toasting.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::request::AbortHandle;
use super::types::{AskRequest, AskResponse, Conversation, ConversationId, Message, SpeechAudio};

#[cfg(any(test, feature = "hydrate"))]
fn conversations_endpoint(base: &str) -> String {
    format!("{base}/conversations")
}

#[cfg(any(test, feature = "hydrate"))]
fn conversation_endpoint(base: &str, id: &ConversationId) -> String {
    format!("{base}/conversations/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn messages_endpoint(base: &str, id: &ConversationId) -> String {
    format!("{base}/conversations/{id}/messages")
}

#[cfg(any(test, feature = "hydrate"))]
fn ask_endpoint(base: &str) -> String {
    format!("{base}/{}", super::types::ACCOUNT_KIND)
}

#[cfg(any(test, feature = "hydrate"))]
fn speech_endpoint(base: &str) -> String {
    format!("{base}/tts")
}

/// Reject empty audio bodies; an OK response with no bytes is a failure.
#[cfg(any(test, feature = "hydrate"))]
fn audio_payload(bytes: Vec<u8>, content_type: Option<String>) -> Result<SpeechAudio, ApiError> {
    if bytes.is_empty() {
        return Err(ApiError::EmptyAudio);
    }
    Ok(SpeechAudio { bytes, content_type: content_type.filter(|t| !t.trim().is_empty()) })
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

/// Fetch every conversation via `GET /conversations`.
///
/// # Errors
///
/// Returns an error if the request fails, is aborted, or the body is not a
/// conversation list.
pub async fn fetch_conversations(abort: Option<&AbortHandle>) -> Result<Vec<Conversation>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = conversations_endpoint(&crate::config::api_base_url());
        let signal = abort.and_then(AbortHandle::signal);
        let resp = gloo_net::http::Request::get(&url)
            .abort_signal(signal.as_ref())
            .send()
            .await
            .map_err(network_error)?;
        let resp = ensure_ok(resp).await?;
        resp.json::<Vec<Conversation>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = abort;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the stored history of one conversation via
/// `GET /conversations/{id}/messages`.
///
/// # Errors
///
/// Returns an error if the request fails, is aborted, or the body is not a
/// message list.
pub async fn fetch_messages(id: &ConversationId, abort: Option<&AbortHandle>) -> Result<Vec<Message>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = messages_endpoint(&crate::config::api_base_url(), id);
        let signal = abort.and_then(AbortHandle::signal);
        let resp = gloo_net::http::Request::get(&url)
            .abort_signal(signal.as_ref())
            .send()
            .await
            .map_err(network_error)?;
        let resp = ensure_ok(resp).await?;
        resp.json::<Vec<Message>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, abort);
        Err(ApiError::Unavailable)
    }
}

/// Rename a conversation via `PATCH /conversations/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn rename_conversation(id: &ConversationId, title: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = conversation_endpoint(&crate::config::api_base_url(), id);
        let body = super::types::RenameRequest { title };
        let resp = gloo_net::http::Request::patch(&url)
            .json(&body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, title);
        Err(ApiError::Unavailable)
    }
}

/// Delete a conversation via `DELETE /conversations/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn delete_conversation(id: &ConversationId) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = conversation_endpoint(&crate::config::api_base_url(), id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Ask the analyst a question via `POST /conta-corrente`.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers non-OK, or the
/// body is not JSON.
pub async fn ask(request: &AskRequest) -> Result<AskResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = ask_endpoint(&crate::config::api_base_url());
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        let resp = ensure_ok(resp).await?;
        resp.json::<AskResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Synthesize speech for `text` via `POST /tts`, returning the raw audio and
/// its content type.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers non-OK (with its
/// `detail` when supplied), or the audio body is empty.
pub async fn synthesize_speech(text: &str, voice: &str) -> Result<SpeechAudio, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = speech_endpoint(&crate::config::api_base_url());
        let body = super::types::SpeechRequest { text, voice };
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        let resp = ensure_ok(resp).await?;
        let content_type = resp.headers().get("content-type");
        let bytes = resp.binary().await.map_err(network_error)?;
        audio_payload(bytes, content_type)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (text, voice);
        Err(ApiError::Unavailable)
    }
}
