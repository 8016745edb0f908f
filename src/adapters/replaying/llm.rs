//! Replaying adapter for the `LlmClient` port.

use std::sync::Mutex;

use super::{extract_result, next_output};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::llm::{CompletionFuture, CompletionRequest, LlmClient};

/// Serves recorded LLM completions from a cassette.
pub struct ReplayingLlmClient {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingLlmClient {
    /// Creates a replaying LLM client backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl LlmClient for ReplayingLlmClient {
    fn complete(&self, _request: &CompletionRequest) -> CompletionFuture<'_> {
        let output = next_output(&self.replayer, "llm", "complete");
        Box::pin(async move { extract_result(&output, "llm::complete") })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(interactions: Vec<Interaction>) -> CassetteReplayer {
        let cassette =
            Cassette { name: "test".into(), recorded_at: Utc::now(), interactions };
        CassetteReplayer::new(&cassette)
    }

    #[tokio::test]
    async fn replays_completions_in_order() {
        let replayer = make_replayer(vec![
            Interaction {
                seq: 0,
                port: "llm".into(),
                method: "complete".into(),
                input: json!({}),
                output: json!({"ok": {
                    "text": "first",
                    "prompt_tokens": 10,
                    "completion_tokens": 1
                }}),
            },
            Interaction {
                seq: 1,
                port: "llm".into(),
                method: "complete".into(),
                input: json!({}),
                output: json!({"ok": {
                    "text": "second",
                    "prompt_tokens": 12,
                    "completion_tokens": 1
                }}),
            },
        ]);
        let llm = ReplayingLlmClient::new(replayer);

        let request = CompletionRequest {
            model: "test-model".into(),
            prompt: "whatever".into(),
            max_tokens: 16,
            temperature: 0.0,
        };
        let first = llm.complete(&request).await.unwrap();
        assert_eq!(first.text, "first");
        let second = llm.complete(&request).await.unwrap();
        assert_eq!(second.text, "second");
    }

    #[tokio::test]
    async fn replays_recorded_failures() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "llm".into(),
            method: "complete".into(),
            input: json!({}),
            output: json!({"err": "rate limited"}),
        }]);
        let llm = ReplayingLlmClient::new(replayer);

        let request = CompletionRequest {
            model: "test-model".into(),
            prompt: "whatever".into(),
            max_tokens: 16,
            temperature: 0.0,
        };
        let result = llm.complete(&request).await;
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().to_string(), "rate limited");
    }
}
