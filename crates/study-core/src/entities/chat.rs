use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Where an answer's supporting text was found.
///
/// Both fields are optional on the wire: the retrieval service may answer
/// with bare `{id, text}` chunks, which decode to an unnamed, unpaged source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceCitation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub filename: String,
    #[serde(default)]
    pub page: Option<u32>,
}

impl SourceCitation {
    fn label(&self) -> String {
        let name = if self.filename.is_empty() { "source" } else { &self.filename };
        match self.page {
            Some(page) => format!("{name} (p{page})"),
            None => name.to_string(),
        }
    }
}

/// Body of `POST /chat/{workspace_id}/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub answer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<SourceCitation>,
}

/// One question/answer exchange in a chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTurn {
    pub question: String,
    pub answer: String,
    pub sources: Vec<SourceCitation>,
}

impl ChatTurn {
    #[must_use]
    pub fn from_reply(question: impl Into<String>, reply: ChatReply) -> Self {
        Self {
            question: question.into(),
            answer: reply.answer,
            sources: reply.sources,
        }
    }

    /// Citations rendered as `notes.pdf (p12), slides.pdf (p3)`.
    #[must_use]
    pub fn citation_line(&self) -> String {
        self.sources.iter().map(SourceCitation::label).collect::<Vec<_>>().join(", ")
    }
}
