// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! Origin download adapter for the `ImageFetcher` port.
//!
//! One shared `reqwest` client with a hard per-request timeout; a timed-out
//! or otherwise failed download surfaces as a fetch error, which the HTTP
//! layer turns into a 404.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::{FetchError, ImageFetcher};

/// User agent sent to origin servers.
pub const USER_AGENT: &str = concat!(
    "picel/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/henvic/picel)"
);

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// `ImageFetcher` adapter backed by reqwest.
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    /// Build the shared download client with the picel user agent and the
    /// per-request timeout applied.
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(DOWNLOAD_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    #[allow(clippy::cast_possible_truncation)] // Download sizes fit in u64
    async fn fetch(&self, url: &str, destination: &Path) -> Result<u64, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|err| FetchError::Transport(err.to_string()))?;

                tokio::fs::write(destination, &bytes)
                    .await
                    .map_err(|err| FetchError::Transport(err.to_string()))?;

                Ok(bytes.len() as u64)
            }
            reqwest::StatusCode::NOT_FOUND => Err(FetchError::Missing),
            _ => Err(FetchError::Backend),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;

    /// Serve a tiny origin on an ephemeral port for the duration of a test.
    async fn origin() -> String {
        let app = Router::new()
            .route("/ok.jpg", get(|| async { "jpeg-bytes" }))
            .route(
                "/gone.jpg",
                get(|| async { (StatusCode::NOT_FOUND, "not here") }),
            )
            .route(
                "/broken.jpg",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_fetch_writes_destination() {
        let origin = origin().await;
        let fetcher = HttpImageFetcher::new().unwrap();
        let destination = tempfile::NamedTempFile::new().unwrap();

        let size = fetcher
            .fetch(&format!("{origin}/ok.jpg"), destination.path())
            .await
            .unwrap();

        assert_eq!(size, 10);
        let content = tokio::fs::read(destination.path()).await.unwrap();
        assert_eq!(content, b"jpeg-bytes");
    }

    #[tokio::test]
    async fn test_fetch_missing_origin_file() {
        let origin = origin().await;
        let fetcher = HttpImageFetcher::new().unwrap();
        let destination = tempfile::NamedTempFile::new().unwrap();

        let err = fetcher
            .fetch(&format!("{origin}/gone.jpg"), destination.path())
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Missing));
    }

    #[tokio::test]
    async fn test_fetch_backend_failure() {
        let origin = origin().await;
        let fetcher = HttpImageFetcher::new().unwrap();
        let destination = tempfile::NamedTempFile::new().unwrap();

        let err = fetcher
            .fetch(&format!("{origin}/broken.jpg"), destination.path())
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Backend));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host() {
        let fetcher = HttpImageFetcher::new().unwrap();
        let destination = tempfile::NamedTempFile::new().unwrap();

        let err = fetcher
            .fetch("http://127.0.0.1:1/x.jpg", destination.path())
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[test]
    fn test_user_agent_names_picel() {
        assert!(USER_AGENT.starts_with("picel/"));
    }
}
