use std::env;

use async_trait::async_trait;
use log::warn;
use reqwest::Client;

use vidlearn_core::model::{Question, VideoId};

use super::payload::{QuizPayload, SummaryPayload};
use super::source::QuestionSource;
use crate::error::QuestionSourceError;

#[derive(Clone, Debug)]
pub struct HttpSourceConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl HttpSourceConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("VIDLEARN_API_BASE_URL").ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        let api_key = env::var("VIDLEARN_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        Some(Self { base_url, api_key })
    }
}

/// Question source backed by the companion content service over HTTP.
///
/// Unconfigured instances stay constructible; every fetch then fails with
/// `QuestionSourceError::Disabled` so hosts can degrade gracefully.
#[derive(Clone)]
pub struct HttpQuestionSource {
    client: Client,
    config: Option<HttpSourceConfig>,
}

impl HttpQuestionSource {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(HttpSourceConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<HttpSourceConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    fn endpoint(
        &self,
        video: &VideoId,
        resource: &str,
    ) -> Result<(String, Option<&str>), QuestionSourceError> {
        let config = self.config.as_ref().ok_or(QuestionSourceError::Disabled)?;
        let url = format!(
            "{}/videos/{}/{resource}",
            config.base_url.trim_end_matches('/'),
            video.as_str()
        );
        Ok((url, config.api_key.as_deref()))
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch_questions(
        &self,
        video: &VideoId,
        count: u32,
    ) -> Result<Vec<Question>, QuestionSourceError> {
        let (url, api_key) = self.endpoint(video, "quiz")?;
        let mut request = self.client.get(url).query(&[("count", count)]);
        if let Some(key) = api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            warn!("quiz fetch for {video} failed with {}", response.status());
            return Err(QuestionSourceError::HttpStatus(response.status()));
        }

        let payload: QuizPayload = response.json().await?;
        payload.validate()
    }

    async fn fetch_summary(&self, video: &VideoId) -> Result<String, QuestionSourceError> {
        let (url, api_key) = self.endpoint(video, "summary")?;
        let mut request = self.client.get(url);
        if let Some(key) = api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            warn!(
                "summary fetch for {video} failed with {}",
                response.status()
            );
            return Err(QuestionSourceError::HttpStatus(response.status()));
        }

        let payload: SummaryPayload = response.json().await?;
        payload.validate()
    }
}
