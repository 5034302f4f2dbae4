//! Wire types of the `generateContent` endpoint.

use serde::{Deserialize, Serialize};

/// Request body: a single user turn made of text parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// Conversation turns.
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Wraps a single prompt.
    #[must_use]
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
        }
    }

    /// Returns the text of the first part, if any.
    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.contents.first().and_then(Content::first_text)
    }
}

/// One conversation turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Ordered parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn first_text(&self) -> Option<&str> {
        self.parts.first().and_then(|part| part.text.as_deref())
    }
}

/// A text part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Text payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates, best first.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Wraps generated text as a single candidate.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part {
                        text: Some(text.into()),
                    }],
                }),
            }],
        }
    }

    /// Returns `candidates[0].content.parts[0].text` when present and
    /// non-empty.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(Content::first_text)
            .filter(|text| !text.is_empty())
    }
}

/// One generated candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Generated content.
    #[serde(default)]
    pub content: Option<Content>,
}
