//! Native-messaging host loop.
//!
//! Reads requests from the browser until end of stream and answers each one.
//! A request that does not decode gets an error response and the loop keeps
//! going; a broken stream ends it. A request may lower the input cap but never
//! raise it above the host's own `max_input_length`.

use std::io::{Read, Write};

use crate::bridge::codec::{read_frame, write_message};
use crate::bridge::message::{Request, Response};
use crate::config::SummarizerConfig;
use crate::errors::{BridgeError, ConfigError, ErrorCode};
use crate::page::PageContent;
use crate::pipeline::runner::Summarizer;

/// Serves summarization requests over a native-messaging stream
#[derive(Debug, Clone)]
pub struct NativeHost {
    text: Summarizer,
    page: Summarizer,
}

impl Default for NativeHost {
    fn default() -> Self {
        Self::new(Summarizer::new())
    }
}

impl NativeHost {
    /// Create a host whose text requests start from `summarizer`'s config
    pub fn new(summarizer: Summarizer) -> Self {
        Self {
            text: summarizer,
            page: Summarizer::page(),
        }
    }

    /// Answer one request
    pub fn handle(&self, request: Request) -> Response {
        match request {
            Request::Summarize {
                text,
                target_sentences,
                max_input_length,
            } => {
                if target_sentences.is_none() && max_input_length.is_none() {
                    return Response::Summary {
                        text: self.text.summarize(&text),
                    };
                }

                let base = self.text.config().clone();
                if let Some(requested) = max_input_length {
                    if requested > base.max_input_length {
                        let err = ConfigError::InputLengthAboveLimit {
                            requested,
                            limit: base.max_input_length,
                        };
                        #[cfg(feature = "tracing")]
                        tracing::warn!(
                            requested,
                            limit = base.max_input_length,
                            "input cap override rejected"
                        );
                        return Response::error(err.code(), err.detail());
                    }
                }

                let config = SummarizerConfig {
                    target_sentences: target_sentences.unwrap_or(base.target_sentences),
                    max_input_length: max_input_length.unwrap_or(base.max_input_length),
                    ..base
                };
                match Summarizer::with_config(config) {
                    Ok(summarizer) => Response::Summary {
                        text: summarizer.summarize(&text),
                    },
                    Err(e) => Response::error(e.code(), e.detail()),
                }
            }
            Request::Page(regions) => {
                Response::Page(PageContent::from_regions(regions, &self.page))
            }
        }
    }

    /// Serve requests until the reader reaches end of stream.
    ///
    /// Returns the number of requests answered.
    pub fn serve<R, W>(&self, reader: &mut R, writer: &mut W) -> Result<usize, BridgeError>
    where
        R: Read,
        W: Write,
    {
        let mut answered = 0;

        while let Some(payload) = read_frame(reader)? {
            let response = match serde_json::from_slice::<Request>(&payload) {
                Ok(request) => self.handle(request),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(error = %e, "undecodable request");
                    Response::error(ErrorCode::InvalidMessageJson, e.to_string())
                }
            };

            match write_message(writer, &response) {
                Ok(()) => {}
                Err(e @ BridgeError::FrameTooLarge { .. }) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(error = %e, "response too large for the browser");
                    write_message(writer, &Response::error(e.code(), e.to_string()))?;
                }
                Err(e) => return Err(e),
            }
            answered += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::info!(answered, "message stream closed");

        Ok(answered)
    }
}
