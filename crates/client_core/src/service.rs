use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::HintSet,
    protocol::{
        HintRequest, HintResponse, ServiceEnvelope, StartGameResponse, SubmitWordRequest,
        SubmitWordResponse, GET_HINT_PATH, START_GAME_PATH, SUBMIT_WORD_PATH,
    },
};
use tracing::debug;
use url::Url;

use crate::error::ServiceError;

/// One word submission as sent to the Game Service.
pub type WordSubmission = SubmitWordRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub points: u64,
    pub modified_rule: bool,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintOutcome {
    pub hints: HintSet,
    pub game_over: bool,
}

#[async_trait]
pub trait GameService: Send + Sync {
    async fn start_game(&self) -> Result<String, ServiceError>;
    async fn submit_word(&self, submission: &WordSubmission) -> Result<SubmitOutcome, ServiceError>;
    async fn get_hints(&self, request: &HintRequest) -> Result<HintOutcome, ServiceError>;
}

pub struct HttpGameService {
    http: Client,
    server_url: String,
}

impl HttpGameService {
    pub fn new(server_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self> {
        let parsed = Url::parse(server_url)
            .with_context(|| format!("invalid game service url '{server_url}'"))?;
        if parsed.cannot_be_a_base() {
            anyhow::bail!("game service url '{server_url}' cannot be used as a base url");
        }
        Ok(Self {
            http,
            server_url: server_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }
}

/// Decodes an envelope regardless of HTTP status; the service reports
/// failures in the body.
async fn decode_envelope<T>(response: Response) -> Result<T, ServiceError>
where
    T: DeserializeOwned + ServiceEnvelope,
{
    let status = response.status();
    let body = response.bytes().await?;
    match serde_json::from_slice::<T>(&body) {
        Ok(reply) => Ok(reply.into_result()?),
        Err(err) if status.is_success() => Err(ServiceError::Malformed(err.to_string())),
        Err(_) => Err(ServiceError::Transport(format!(
            "game service returned HTTP {status}"
        ))),
    }
}

#[async_trait]
impl GameService for HttpGameService {
    async fn start_game(&self) -> Result<String, ServiceError> {
        debug!(url = %self.server_url, "requesting starting word");
        let response = self.http.get(self.endpoint(START_GAME_PATH)).send().await?;
        let reply: StartGameResponse = decode_envelope(response).await?;
        match reply.word.map(|word| word.trim().to_lowercase()) {
            Some(word) if !word.is_empty() => Ok(word),
            _ => Err(ServiceError::Malformed(
                "start-game response is missing a word".into(),
            )),
        }
    }

    async fn submit_word(&self, submission: &WordSubmission) -> Result<SubmitOutcome, ServiceError> {
        debug!(
            current_word = %submission.current_word,
            new_word = %submission.new_word,
            from_hint = submission.from_hint,
            "submitting word"
        );
        let response = self
            .http
            .post(self.endpoint(SUBMIT_WORD_PATH))
            .json(submission)
            .send()
            .await?;
        let reply: SubmitWordResponse = decode_envelope(response).await?;
        let points = match reply.points {
            None => 0,
            Some(points) => u64::try_from(points).map_err(|_| {
                ServiceError::Malformed(format!("negative points in response: {points}"))
            })?,
        };
        Ok(SubmitOutcome {
            points,
            modified_rule: reply.modified_rule,
            game_over: reply.game_over,
        })
    }

    async fn get_hints(&self, request: &HintRequest) -> Result<HintOutcome, ServiceError> {
        debug!(current_word = %request.current_word, "requesting hints");
        let response = self
            .http
            .post(self.endpoint(GET_HINT_PATH))
            .json(request)
            .send()
            .await?;
        let reply: HintResponse = decode_envelope(response).await?;
        Ok(HintOutcome {
            hints: reply.hint_set(),
            game_over: reply.game_over,
        })
    }
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
