//! Canned generation client for tests and offline use.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::suggestion::{
    domain::{GenerateContentRequest, GenerateContentResponse},
    ports::{GenerationClient, GenerationError, GenerationResult},
};

/// Generation client that answers every request with the same reply.
#[derive(Debug)]
pub struct StaticGenerationClient {
    reply: GenerationResult<GenerateContentResponse>,
    requests: Mutex<Vec<GenerateContentRequest>>,
}

impl StaticGenerationClient {
    /// Answers with `text` as the first candidate.
    #[must_use]
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(Ok(GenerateContentResponse::from_text(text)))
    }

    /// Answers with a full response envelope.
    #[must_use]
    pub fn with_response(response: GenerateContentResponse) -> Self {
        Self::with_reply(Ok(response))
    }

    /// Fails every request with `error`.
    #[must_use]
    pub fn failing(error: GenerationError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(reply: GenerationResult<GenerateContentResponse>) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns the requests received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl GenerationClient for StaticGenerationClient {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> GenerationResult<GenerateContentResponse> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());
        self.reply.clone()
    }

    fn is_configured(&self) -> bool {
        self.reply != Err(GenerationError::NotConfigured)
    }
}
