//! Reduction of markup-validator output to an error/warning summary.
//!
//! The validator itself is an external collaborator behind
//! [`W3cValidator`]; only its message list is consumed here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::http::FetchError;

/// Raw validator response (Nu HTML Checker JSON shape).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ValidatorResponse {
    #[serde(default)]
    pub messages: Vec<ValidatorMessage>,
}

/// One raw validator message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub sub_type: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default, alias = "lastLine")]
    pub line: Option<u32>,
}

/// Severity of a kept validator message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum W3cMessageType {
    Error,
    Warning,
}

/// A classified validator message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct W3cMessage {
    #[serde(rename = "type")]
    pub kind: W3cMessageType,
    pub line: Option<u32>,
    pub text: String,
}

/// Validation summary consumed by the `w3c` scoring rule.
///
/// The default value (not valid, no counts, no messages) stands for
/// "validator absent or unreachable". With zero errors and warnings it
/// lands in the `clean` bucket of the `w3c` rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct W3cSummary {
    pub valid: bool,
    pub errors: usize,
    pub warnings: usize,
    pub messages: Vec<W3cMessage>,
}

impl W3cSummary {
    /// Classify a validator response.
    ///
    /// `error` and `non-document-error` count as errors, `info` with subtype
    /// `warning` counts as a warning, everything else is ignored.
    #[must_use]
    pub fn from_response(response: &ValidatorResponse) -> Self {
        let messages: Vec<W3cMessage> = response
            .messages
            .iter()
            .filter_map(|m| {
                let kind = classify(&m.kind, m.sub_type.as_deref())?;
                Some(W3cMessage {
                    kind,
                    line: m.line,
                    text: m.message.clone(),
                })
            })
            .collect();

        let errors = messages.iter().filter(|m| m.kind == W3cMessageType::Error).count();
        let warnings = messages.len() - errors;

        Self {
            valid: errors == 0,
            errors,
            warnings,
            messages,
        }
    }
}

fn classify(kind: &str, sub_type: Option<&str>) -> Option<W3cMessageType> {
    match (kind, sub_type) {
        ("error" | "non-document-error", _) => Some(W3cMessageType::Error),
        ("info", Some("warning")) => Some(W3cMessageType::Warning),
        _ => None,
    }
}

/// Markup validator collaborator.
///
/// Implementations validate a public URL and return the raw message list.
#[async_trait]
pub trait W3cValidator: Send + Sync {
    async fn validate(&self, url: &str) -> Result<ValidatorResponse, FetchError>;
}
