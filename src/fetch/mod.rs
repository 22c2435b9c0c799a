//! Dictionary lookups.
//!
//! A lookup runs on its own Tokio task so the render loop never waits on the
//! network. The task reports back through the event channel with exactly one
//! [`Event::Fetched`], whether the request succeeded, failed, timed out or
//! was cancelled.

mod error;

pub use error::FetchError;

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::{Client, Url};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::event::Event;
use crate::state::ResultSet;

/// Urban Dictionary define endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.urbandictionary.com/v0/define";

/// Deadline for a single lookup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Something that can look up definitions for a term.
#[cfg_attr(test, mockall::automock)]
pub trait DefinitionSource: Send + Sync {
    /// Look up `term`. One attempt, no retries.
    fn define(&self, term: &str) -> BoxFuture<'static, Result<ResultSet, FetchError>>;
}

/// HTTP client for the Urban Dictionary API.
#[derive(Debug, Clone)]
pub struct UrbanDictionary {
    client: Client,
    endpoint: String,
}

impl UrbanDictionary {
    /// Create a client for `endpoint`. `timeout` bounds each request at the
    /// transport level as well.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Build the lookup URL with the term percent-encoded.
    pub fn request_url(&self, term: &str) -> Result<Url, FetchError> {
        let raw = format!("{}?term={}", self.endpoint, urlencoding::encode(term));
        Url::parse(&raw).map_err(|err| FetchError::Request(format!("{raw}: {err}")))
    }
}

impl DefinitionSource for UrbanDictionary {
    fn define(&self, term: &str) -> BoxFuture<'static, Result<ResultSet, FetchError>> {
        let client = self.client.clone();
        let url = self.request_url(term);

        async move {
            let url = url?;
            debug!(%url, "sending lookup");

            let response = client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = response.text().await?;
            decode(&body)
        }
        .boxed()
    }
}

/// Decode a response body. Malformed JSON is an error, never an empty set.
///
/// The body must be a JSON object; serde would otherwise accept an array in
/// place of the struct and fill the gaps with defaults.
pub fn decode(body: &str) -> Result<ResultSet, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(FetchError::Decode("expected a JSON object".to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

/// Run one lookup against `source`, bounded by `timeout` and `cancel`.
///
/// Dropping the request future on timeout or cancellation abandons the
/// underlying network call.
pub async fn fetch(
    source: &dyn DefinitionSource,
    term: &str,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<ResultSet, FetchError> {
    let request = source.define(term);

    tokio::select! {
        _ = cancel.cancelled() => Err(FetchError::Cancelled),
        result = tokio::time::timeout(timeout, request) => {
            result.unwrap_or(Err(FetchError::Timeout))
        }
    }
}

/// Spawn a lookup task that sends its outcome tagged with `generation`.
pub fn spawn_fetch(
    source: Arc<dyn DefinitionSource>,
    query: String,
    generation: u64,
    timeout: Duration,
    cancel: CancellationToken,
    tx: UnboundedSender<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = fetch(source.as_ref(), &query, timeout, &cancel).await;

        match &outcome {
            Ok(results) => info!(%query, generation, entries = results.len(), "lookup finished"),
            Err(FetchError::Cancelled) => debug!(%query, generation, "lookup cancelled"),
            Err(err) => warn!(%query, generation, error = %err, "lookup failed"),
        }

        // The receiver is gone once the app has quit.
        let _ = tx.send(Event::Fetched { generation, outcome });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DefinitionEntry;
    use futures::future;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tokio::sync::mpsc;

    fn greeting() -> ResultSet {
        ResultSet::new(vec![DefinitionEntry {
            headword: "hello".into(),
            definition: "a greeting".into(),
            ..Default::default()
        }])
    }

    #[rstest]
    #[case("hello", "term=hello")]
    #[case("hello world", "term=hello%20world")]
    #[case("a&b=c", "term=a%26b%3Dc")]
    #[case("café", "term=caf%C3%A9")]
    fn request_url_encodes_term(#[case] term: &str, #[case] query: &str) {
        let client = UrbanDictionary::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT).unwrap();
        let url = client.request_url(term).unwrap();

        assert_eq!(url.host_str(), Some("api.urbandictionary.com"));
        assert_eq!(url.path(), "/v0/define");
        assert_eq!(url.query(), Some(query));
    }

    #[test]
    fn bad_endpoint_is_request_error() {
        let client = UrbanDictionary::new("not a url", DEFAULT_TIMEOUT).unwrap();
        assert!(matches!(client.request_url("x"), Err(FetchError::Request(_))));
    }

    #[test]
    fn decode_empty_list() {
        let results = decode(r#"{"list":[]}"#).unwrap();
        assert!(results.is_empty());
    }

    #[rstest]
    #[case("")]
    #[case("<html>rate limited</html>")]
    #[case(r#"{"list": "nope"}"#)]
    #[case(r#"{"list":[{"thumbs_up":"many"}]}"#)]
    #[case("[]")]
    #[case(r#"[[{"definition":"x"}]]"#)]
    #[case("null")]
    fn decode_rejects_malformed(#[case] body: &str) {
        assert!(matches!(decode(body), Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn fetch_passes_through_success() {
        let mut source = MockDefinitionSource::new();
        source
            .expect_define()
            .withf(|term| term == "hello")
            .times(1)
            .returning(|_| future::ready(Ok(greeting())).boxed());

        let outcome = fetch(&source, "hello", DEFAULT_TIMEOUT, &CancellationToken::new()).await;
        assert_eq!(outcome, Ok(greeting()));
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_times_out() {
        let mut source = MockDefinitionSource::new();
        source
            .expect_define()
            .returning(|_| future::pending().boxed());

        let outcome = fetch(&source, "hello", DEFAULT_TIMEOUT, &CancellationToken::new()).await;
        assert_eq!(outcome, Err(FetchError::Timeout));
    }

    #[tokio::test]
    async fn fetch_observes_cancellation() {
        let mut source = MockDefinitionSource::new();
        source
            .expect_define()
            .returning(|_| future::pending().boxed());

        let cancel = CancellationToken::new();
        cancel.cancel();

        let outcome = fetch(&source, "hello", DEFAULT_TIMEOUT, &cancel).await;
        assert_eq!(outcome, Err(FetchError::Cancelled));
    }

    #[tokio::test]
    async fn spawned_fetch_reports_once_with_generation() {
        let mut source = MockDefinitionSource::new();
        source
            .expect_define()
            .times(1)
            .returning(|_| future::ready(Err(FetchError::Status(503))).boxed());

        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_fetch(
            Arc::new(source),
            "hello".into(),
            7,
            DEFAULT_TIMEOUT,
            CancellationToken::new(),
            tx,
        )
        .await
        .unwrap();

        match rx.recv().await {
            Some(Event::Fetched { generation, outcome }) => {
                assert_eq!(generation, 7);
                assert_eq!(outcome, Err(FetchError::Status(503)));
            }
            other => panic!("unexpected event: {other:?}"),
        }
        // The sender was dropped with the task, so nothing else can arrive.
        assert!(rx.recv().await.is_none());
    }
}
