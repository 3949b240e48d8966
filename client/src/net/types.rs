//! Wire DTOs for the analysis API.
//!
//! DESIGN
//! ======
//! Only minimal shape checks are applied here. Chart payloads stay as raw
//! JSON until `ChartDescriptor::from_value` decides whether they can render,
//! so an empty `{}` from the server never fails deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-issued conversation identifier.
///
/// The API emits integer ids, but the client treats them opaquely. Integer
/// ids serialize back as JSON numbers so request bodies match what the server
/// handed out.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ConversationId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0.parse::<i64>() {
            Ok(int) => serializer.serialize_i64(int),
            Err(_) => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for ConversationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    return Ok(Self(int.to_string()));
                }
                if let Some(uint) = number.as_u64() {
                    return Ok(Self(uint.to_string()));
                }
                Err(D::Error::custom("expected integer conversation id"))
            }
            serde_json::Value::String(s) if !s.is_empty() => Ok(Self(s)),
            _ => Err(D::Error::custom("expected conversation id")),
        }
    }
}

/// Conversation summary as returned by `GET /conversations`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub created_at: String,
}

impl Conversation {
    /// Creation date rendered as `dd/mm/yyyy`.
    ///
    /// Falls back to the raw server string when it does not start with an
    /// ISO `yyyy-mm-dd` date.
    pub fn display_date(&self) -> String {
        format_created_date(&self.created_at)
    }
}

pub(crate) fn format_created_date(raw: &str) -> String {
    let Some(date) = raw.get(..10) else {
        return raw.to_owned();
    };
    let mut parts = date.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) if is_digits(y, 4) && is_digits(m, 2) && is_digits(d, 2) => format!("{d}/{m}/{y}"),
        _ => raw.to_owned(),
    }
}

fn is_digits(part: &str, len: usize) -> bool {
    part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
}

/// Who authored a message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    #[default]
    #[serde(other)]
    Assistant,
}

/// Stored message as returned by `GET /conversations/{id}/messages`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub sender: Sender,
    #[serde(default)]
    pub chart_data: Option<serde_json::Value>,
}

/// A renderable chart: a chart kind plus the library payload.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartDescriptor {
    pub kind: String,
    pub data: serde_json::Value,
}

impl ChartDescriptor {
    /// Extract a descriptor from a raw server payload.
    ///
    /// Returns `None` for `null`, non-objects, empty objects, and objects
    /// without a string `type`.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let obj = value.as_object().filter(|o| !o.is_empty())?;
        let kind = obj.get("type")?.as_str()?.trim();
        if kind.is_empty() {
            return None;
        }
        Some(Self {
            kind: kind.to_owned(),
            data: obj.get("data").cloned().unwrap_or(serde_json::Value::Null),
        })
    }

    /// Pie and doughnut charts have no cartesian axes.
    pub fn is_radial(&self) -> bool {
        matches!(self.kind.as_str(), "pie" | "doughnut")
    }
}

/// Account kind sent with every question. The client only talks to the
/// checking-account analyst.
pub const ACCOUNT_KIND: &str = "conta-corrente";

/// Request body for `POST /conta-corrente`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AskRequest {
    pub pergunta: String,
    pub tipo_conta: &'static str,
    pub conversation_id: Option<ConversationId>,
}

impl AskRequest {
    pub fn new(question: impl Into<String>, conversation_id: Option<ConversationId>) -> Self {
        Self { pergunta: question.into(), tipo_conta: ACCOUNT_KIND, conversation_id }
    }
}

/// Response body for `POST /conta-corrente`. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub analise_texto: Option<String>,
    #[serde(default)]
    pub grafico: Option<serde_json::Value>,
    #[serde(default)]
    pub conversation_id: Option<ConversationId>,
    #[serde(default)]
    pub sql_gerado: Option<String>,
    #[serde(default)]
    pub dados: Option<serde_json::Value>,
}

impl AskResponse {
    pub fn chart(&self) -> Option<ChartDescriptor> {
        self.grafico.as_ref().and_then(ChartDescriptor::from_value)
    }
}

/// Request body for `PATCH /conversations/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenameRequest<'a> {
    pub title: &'a str,
}

/// Request body for `POST /tts`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpeechRequest<'a> {
    pub text: &'a str,
    pub voice: &'a str,
}

/// JSON error body the API returns alongside non-OK statuses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Synthesized speech as returned by `POST /tts`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeechAudio {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}
