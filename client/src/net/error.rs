//! Error type for analysis API calls.
//!
//! ERROR HANDLING
//! ==============
//! `Display` output is what the user sees (toast text, tooltip), so messages
//! stay short and in the UI language. Call sites log the error and decide how
//! it surfaces; nothing here propagates past the triggering action.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single request against the analysis API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-OK status, optionally explaining why.
    #[error("{}", status_message(.status, .detail))]
    Status { status: u16, detail: Option<String> },

    /// The response body did not match the expected shape.
    #[error("resposta inválida: {0}")]
    Decode(String),

    /// The speech endpoint answered OK with zero bytes.
    #[error("Áudio vazio recebido")]
    EmptyAudio,

    /// Browser-only call made outside the browser (SSR, native tests).
    #[error("indisponível fora do navegador")]
    Unavailable,
}

#[allow(clippy::trivially_copy_pass_by_ref, clippy::ref_option)]
fn status_message(status: &u16, detail: &Option<String>) -> String {
    match detail.as_deref().map(str::trim) {
        Some(detail) if !detail.is_empty() => detail.to_owned(),
        _ => format!("Erro {status}"),
    }
}

impl ApiError {
    /// Build a status error from a non-OK response body.
    ///
    /// The body is parsed as `{detail}` when possible; anything else yields a
    /// detail-less error.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<super::types::ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail);
        Self::Status { status, detail }
    }
}
