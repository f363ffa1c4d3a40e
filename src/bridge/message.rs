//! Request and response envelopes exchanged with the browser.
//!
//! Requests are tagged by `action`, responses by `type`:
//!
//! ```json
//! {"action": "summarize", "text": "...", "targetSentences": 5}
//! {"type": "summary", "text": "..."}
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::ErrorCode;
use crate::page::{PageContent, PageRegions};

/// A request from the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    /// Summarize free text, optionally overriding the sentence count and
    /// input cap
    #[serde(rename_all = "camelCase")]
    Summarize {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_sentences: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_input_length: Option<usize>,
    },
    /// Build the page-content envelope from extracted regions
    Page(PageRegions),
}

/// A response to the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Response {
    Summary { text: String },
    Page(PageContent),
    Error { code: ErrorCode, message: String },
}

impl Response {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Error {
            code,
            message: message.into(),
        }
    }
}
