use serde::{Deserialize, Serialize};

use crate::{
    domain::HintSet,
    error::{ApiFailure, ServiceRejection},
};

pub const START_GAME_PATH: &str = "/api/start-game";
pub const SUBMIT_WORD_PATH: &str = "/api/submit-word";
pub const GET_HINT_PATH: &str = "/api/get-hint";

/// Common `success` / `message` envelope carried by every Game Service reply.
pub trait ServiceEnvelope {
    fn success(&self) -> bool;
    fn message(&self) -> Option<&str>;

    fn into_result(self) -> Result<Self, ServiceRejection>
    where
        Self: Sized,
    {
        if self.success() {
            return Ok(self);
        }
        Err(ApiFailure {
            message: self.message().map(str::to_string),
        }
        .into())
    }
}

macro_rules! impl_envelope {
    ($name:ident) => {
        impl ServiceEnvelope for $name {
            fn success(&self) -> bool {
                self.success
            }

            fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartGameResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitWordRequest {
    pub current_word: String,
    pub new_word: String,
    pub used_words: Vec<String>,
    pub from_hint: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitWordResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(default)]
    pub modified_rule: bool,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintRequest {
    pub current_word: String,
    pub used_words: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintResponse {
    pub success: bool,
    #[serde(default)]
    pub original_rule_hints: Vec<String>,
    #[serde(default)]
    pub modified_rule_hints: Vec<String>,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HintResponse {
    pub fn hint_set(&self) -> HintSet {
        HintSet {
            original_rule_hints: self.original_rule_hints.clone(),
            modified_rule_hints: self.modified_rule_hints.clone(),
        }
    }
}

impl_envelope!(StartGameResponse);
impl_envelope!(SubmitWordResponse);
impl_envelope!(HintResponse);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_response_tolerates_missing_optional_fields() {
        let reply: SubmitWordResponse =
            serde_json::from_str(r#"{"success": true, "points": 12}"#).expect("decode");
        assert_eq!(reply.points, Some(12));
        assert!(!reply.modified_rule);
        assert!(!reply.game_over);
    }

    #[test]
    fn failed_envelope_becomes_rejection_with_service_message() {
        let reply = SubmitWordResponse {
            success: false,
            message: Some("Not a valid word".into()),
            ..Default::default()
        };
        let err = reply.into_result().expect_err("rejected");
        assert_eq!(err.message, "Not a valid word");
    }

    #[test]
    fn failed_envelope_without_message_uses_default_text() {
        let err = StartGameResponse::default()
            .into_result()
            .expect_err("rejected");
        assert_eq!(err.message, crate::error::DEFAULT_REJECTION_MESSAGE);
    }

    #[test]
    fn submit_request_uses_snake_case_wire_names() {
        let body = serde_json::to_value(SubmitWordRequest {
            current_word: "cat".into(),
            new_word: "cats".into(),
            used_words: vec![],
            from_hint: true,
        })
        .expect("encode");
        assert_eq!(body["current_word"], "cat");
        assert_eq!(body["new_word"], "cats");
        assert_eq!(body["from_hint"], true);
        assert!(body["used_words"].as_array().expect("array").is_empty());
    }
}
