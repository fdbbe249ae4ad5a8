//! # HTTP Service
//!
//! Issues the single outbound request off the UI thread and reports the
//! result back as a [`DispatchCompletion`] on a channel the controller drains.
//!
//! The wire work sits behind the [`HttpTransport`] trait; production uses
//! [`ReqwestTransport`], tests plug in scripted transports.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use bytes::Bytes;
use reqwest::{Client, Method};
use tokio::sync::mpsc;

use crate::config::{DEFAULT_SCHEME_PREFIX, REQUEST_TIMEOUT};
use crate::repl::events::{DispatchCompletion, DispatchOutcome};
use crate::repl::services::formatter::format_response;

/// Capacity of the completion channel
const COMPLETION_CHANNEL_SIZE: usize = 10;

/// One request as handed to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: String,
    pub url: String,
    pub timeout: Duration,
}

/// What the transport brings back
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Boxed future returned by [`HttpTransport::execute`]
pub type TransportFuture = Pin<Box<dyn Future<Output = Result<TransportResponse>> + Send>>;

/// Low-level HTTP collaborator
pub trait HttpTransport: Send + Sync {
    /// Perform `request` and return status and full body.
    ///
    /// A failure to read the body must not be reported as an error; the
    /// transport substitutes an empty body instead.
    fn execute(&self, request: OutboundRequest) -> TransportFuture;
}

/// Transport backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: OutboundRequest) -> TransportFuture {
        let client = self.client.clone();
        Box::pin(async move {
            let method = Method::from_bytes(request.method.as_bytes())
                .with_context(|| format!("Invalid HTTP method '{}'", request.method))?;

            let response = client
                .request(method, &request.url)
                .timeout(request.timeout)
                .send()
                .await
                .with_context(|| format!("Request to {} failed", request.url))?;

            let status = response.status().as_u16();
            let body = match response.bytes().await {
                Ok(body) => body,
                Err(e) if e.is_timeout() => {
                    return Err(e).context("Timed out reading response body");
                }
                Err(e) => {
                    tracing::warn!("Failed to read response body, using empty body: {e}");
                    Bytes::new()
                }
            };

            Ok(TransportResponse { status, body })
        })
    }
}

/// Prepend `http://` unless the URL already carries an http(s) scheme.
///
/// A bare `http` prefix is not enough: hosts like `httpbin.org` need a scheme too.
pub fn normalize_url(raw_url: &str) -> String {
    let lower = raw_url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        raw_url.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{raw_url}")
    }
}

/// Render an error with its whole cause chain
fn describe_error(error: &anyhow::Error) -> String {
    let mut message = format!("{error}");
    for cause in error.chain().skip(1) {
        message.push_str(&format!("\n  Caused by: {cause}"));
    }
    message
}

/// Run one request to completion and classify the result.
///
/// Steps: normalise the URL, build and execute the request under
/// `timeout`, then format the body. Never returns an error; every failure
/// becomes [`DispatchOutcome::RequestFailed`].
pub async fn send_request(
    transport: &dyn HttpTransport,
    method: &str,
    raw_url: &str,
    timeout: Duration,
) -> DispatchOutcome {
    let request = OutboundRequest {
        method: method.to_string(),
        url: normalize_url(raw_url),
        timeout,
    };
    tracing::info!("Sending {} {}", request.method, request.url);

    let started = Instant::now();
    let url = request.url.clone();
    match tokio::time::timeout(timeout, transport.execute(request)).await {
        Err(_) => {
            tracing::warn!("Request to {url} timed out after {timeout:?}");
            DispatchOutcome::RequestFailed {
                message: format!("Request to {url} timed out after {timeout:?}"),
            }
        }
        Ok(Err(e)) => {
            let message = describe_error(&e);
            tracing::error!("HTTP request failed: {message}");
            DispatchOutcome::RequestFailed { message }
        }
        Ok(Ok(response)) => {
            let elapsed = started.elapsed();
            tracing::info!(
                "Received {} from {url} ({} bytes, {elapsed:?})",
                response.status,
                response.body.len()
            );
            DispatchOutcome::ResponseReady {
                text: format_response(&response.body),
                status: response.status,
                elapsed,
            }
        }
    }
}

/// A request the view model has decided to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub generation: u64,
    pub method: String,
    pub url: String,
}

/// Spawns requests as background tasks and collects their completions
pub struct HttpDispatcher {
    transport: Arc<dyn HttpTransport>,
    timeout: Duration,
    completion_receiver: mpsc::Receiver<DispatchCompletion>,
    completion_sender: mpsc::Sender<DispatchCompletion>,
}

impl HttpDispatcher {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_timeout(transport, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(transport: Arc<dyn HttpTransport>, timeout: Duration) -> Self {
        let (completion_sender, completion_receiver) = mpsc::channel(COMPLETION_CHANNEL_SIZE);
        Self {
            transport,
            timeout,
            completion_receiver,
            completion_sender,
        }
    }

    /// Execute `ticket` on a tokio task.
    ///
    /// The completion is posted to the internal channel; the caller picks it
    /// up with [`poll_completion`](Self::poll_completion) or
    /// [`next_completion`](Self::next_completion).
    pub fn dispatch(&self, ticket: RequestTicket) {
        let transport = Arc::clone(&self.transport);
        let sender = self.completion_sender.clone();
        let timeout = self.timeout;

        tokio::spawn(async move {
            let outcome = send_request(transport.as_ref(), &ticket.method, &ticket.url, timeout).await;
            // Receiver is gone only when the controller has shut down
            let _ = sender
                .send(DispatchCompletion::new(ticket.generation, outcome))
                .await;
        });
    }

    /// Non-blocking check for a finished request
    pub fn poll_completion(&mut self) -> Option<DispatchCompletion> {
        self.completion_receiver.try_recv().ok()
    }

    /// Wait for the next finished request
    pub async fn next_completion(&mut self) -> Option<DispatchCompletion> {
        self.completion_receiver.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Transport that records requests and replays a canned result
    struct ScriptedTransport {
        seen: Mutex<Vec<OutboundRequest>>,
        status: u16,
        body: &'static str,
        delay: Duration,
        fail_with: Option<&'static str>,
    }

    impl ScriptedTransport {
        fn ok(status: u16, body: &'static str) -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                status,
                body,
                delay: Duration::ZERO,
                fail_with: None,
            }
        }

        fn failing(message: &'static str) -> Self {
            Self {
                fail_with: Some(message),
                ..Self::ok(0, "")
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                delay,
                ..Self::ok(200, "late")
            }
        }

        fn seen_urls(&self) -> Vec<String> {
            self.seen
                .lock()
                .unwrap()
                .iter()
                .map(|r| r.url.clone())
                .collect()
        }
    }

    impl HttpTransport for ScriptedTransport {
        fn execute(&self, request: OutboundRequest) -> TransportFuture {
            self.seen.lock().unwrap().push(request);
            let status = self.status;
            let body = self.body;
            let delay = self.delay;
            let fail_with = self.fail_with;
            Box::pin(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                match fail_with {
                    Some(message) => Err(anyhow::anyhow!(message)),
                    None => Ok(TransportResponse {
                        status,
                        body: Bytes::from_static(body.as_bytes()),
                    }),
                }
            })
        }
    }

    #[test]
    fn normalize_url_should_prepend_scheme_when_missing() {
        assert_eq!(normalize_url("example.com/path"), "http://example.com/path");
    }

    #[test]
    fn normalize_url_should_keep_http_and_https() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn normalize_url_should_treat_http_host_names_as_schemeless() {
        assert_eq!(normalize_url("httpbin.org/get"), "http://httpbin.org/get");
        assert_eq!(normalize_url("HTTPS://example.com"), "HTTPS://example.com");
        assert_eq!(normalize_url(""), "http://");
    }

    #[test]
    fn describe_error_should_include_cause_chain() {
        let error = anyhow::anyhow!("connection refused").context("Request to x failed");
        assert_eq!(
            describe_error(&error),
            "Request to x failed\n  Caused by: connection refused"
        );
    }

    #[tokio::test]
    async fn send_request_should_format_json_response() {
        let transport = ScriptedTransport::ok(200, r#"{"ok":true}"#);
        let outcome = send_request(&transport, "GET", "example.com/path", REQUEST_TIMEOUT).await;

        match outcome {
            DispatchOutcome::ResponseReady { text, status, .. } => {
                assert_eq!(text, "{\n  \"ok\": true\n}\n");
                assert_eq!(status, 200);
            }
            other => panic!("Expected ResponseReady, got {other:?}"),
        }
        assert_eq!(transport.seen_urls(), vec!["http://example.com/path"]);
    }

    #[tokio::test]
    async fn send_request_should_pass_method_and_timeout() {
        let transport = ScriptedTransport::ok(201, "created");
        send_request(&transport, "POST", "https://example.com", REQUEST_TIMEOUT).await;

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].method, "POST");
        assert_eq!(seen[0].url, "https://example.com");
        assert_eq!(seen[0].timeout, REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn send_request_should_report_transport_failure() {
        let transport = ScriptedTransport::failing("connection refused");
        let outcome = send_request(&transport, "GET", "localhost:1", REQUEST_TIMEOUT).await;
        assert_eq!(
            outcome,
            DispatchOutcome::RequestFailed {
                message: "connection refused".to_string()
            }
        );
    }

    #[tokio::test]
    async fn send_request_should_fail_on_deadline() {
        let transport = ScriptedTransport::slow(Duration::from_secs(5));
        let outcome = send_request(&transport, "GET", "slow.test", Duration::from_millis(20)).await;

        match outcome {
            DispatchOutcome::RequestFailed { message } => {
                assert!(message.contains("timed out"), "unexpected message: {message}");
            }
            other => panic!("Expected RequestFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn dispatcher_should_post_tagged_completion() {
        let transport = Arc::new(ScriptedTransport::ok(200, "plain"));
        let mut dispatcher = HttpDispatcher::new(transport);

        dispatcher.dispatch(RequestTicket {
            generation: 3,
            method: "GET".to_string(),
            url: "example.com".to_string(),
        });

        let completion = dispatcher.next_completion().await.unwrap();
        assert_eq!(completion.generation, 3);
        match completion.outcome {
            DispatchOutcome::ResponseReady { text, .. } => assert_eq!(text, "plain"),
            other => panic!("Expected ResponseReady, got {other:?}"),
        }
        assert!(dispatcher.poll_completion().is_none());
    }

    #[tokio::test]
    async fn reqwest_transport_should_reject_invalid_method() {
        let transport = ReqwestTransport::new().unwrap();
        let outcome = send_request(&transport, "BAD METHOD", "http://127.0.0.1:9", REQUEST_TIMEOUT).await;
        match outcome {
            DispatchOutcome::RequestFailed { message } => {
                assert!(message.contains("Invalid HTTP method"));
            }
            other => panic!("Expected RequestFailed, got {other:?}"),
        }
    }
}
