use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::api::retell_dtos::{CreatePhoneCallRequest, ProviderReply};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    InvalidBody(#[from] serde_json::Error),
}

/// Places one outbound call with the voice provider.
///
/// A non-2xx answer is still `Ok`: the caller decides how to report it.
/// `Err` is reserved for calls that never produced a readable answer.
#[cfg_attr(test, mockall::automock)]
pub trait CallDispatcher: Send + Sync {
    fn create_phone_call(
        &self,
        request: CreatePhoneCallRequest,
    ) -> BoxFuture<'static, Result<ProviderReply, DispatchError>>;
}

#[derive(Clone)]
pub struct RetellClient {
    http: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl RetellClient {
    pub fn new(endpoint: Url, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            api_key,
        }
    }
}

impl CallDispatcher for RetellClient {
    fn create_phone_call(
        &self,
        request: CreatePhoneCallRequest,
    ) -> BoxFuture<'static, Result<ProviderReply, DispatchError>> {
        let client = self.clone();
        async move {
            let mut builder = client.http.post(client.endpoint.clone()).json(&request);
            if let Some(key) = &client.api_key {
                builder = builder.bearer_auth(key);
            }

            let response = builder.send().await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            let body: Value = serde_json::from_slice(&bytes)?;

            tracing::debug!("Retell answered {} for {}", status, request.to_number);
            Ok(ProviderReply { status, body })
        }
        .boxed()
    }
}
