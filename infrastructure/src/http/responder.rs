//! reqwest-backed responder.
//!
//! One exchange is one `GET <url>?<param>=<text>` with the text
//! URL-encoded. Any 2xx body is decoded as a [`ResponderReply`].

use crate::config::FileResponderConfig;
use async_trait::async_trait;
use chatline_application::{Responder, ResponderError};
use chatline_domain::{ResponderReply, preview};
use reqwest::{Client, Url, header};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors raised while building the adapter
#[derive(Error, Debug)]
pub enum HttpResponderError {
    #[error("Invalid responder URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

pub struct HttpResponder {
    client: Client,
    url: Url,
    query_param: String,
}

impl HttpResponder {
    /// Create a responder for `url`, sending the text under `query_param`.
    ///
    /// `timeout` bounds the whole request, including reading the body.
    pub fn new(
        url: &str,
        query_param: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, HttpResponderError> {
        let parsed = Url::parse(url).map_err(|e| HttpResponderError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(HttpResponderError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: parsed,
            query_param: query_param.into(),
        })
    }

    pub fn from_config(config: &FileResponderConfig) -> Result<Self, HttpResponderError> {
        Self::new(
            &config.url(),
            config.query_param.clone(),
            Some(config.timeout()),
        )
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Responder for HttpResponder {
    async fn respond(&self, text: &str) -> Result<ResponderReply, ResponderError> {
        debug!(url = %self.url, text = %preview(text, 60), "Sending chat request");

        let response = self
            .client
            .get(self.url.clone())
            .query(&[(self.query_param.as_str(), text)])
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResponderError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        let reply: ResponderReply = serde_json::from_slice(&body)
            .map_err(|e| ResponderError::Decode(e.to_string()))?;

        debug!(success = reply.success, "Chat response decoded");
        Ok(reply)
    }
}

fn map_transport_error(e: reqwest::Error) -> ResponderError {
    if e.is_timeout() {
        ResponderError::Timeout
    } else {
        ResponderError::Network(e.to_string())
    }
}
