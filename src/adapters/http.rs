use crate::core::{ConfigProvider, HttpClient, HttpClientResult, HttpCompletion, HttpResponse};
use crate::utils::error::Result;
use anyhow::Context;
use reqwest::Client;
use std::time::Duration;
use tokio::runtime::Handle;
use url::Url;

/// [`HttpClient`] backed by `reqwest`, running each request as a task on the
/// tokio runtime of the caller.
///
/// Calling `get` outside a runtime reports a `Failure` right away. A request
/// still in flight when its runtime shuts down is cancelled with the runtime,
/// and its completion is dropped without being called.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self::new(client))
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        // No runtime to run the request on: fail right away
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                let error = anyhow::Error::new(e).context(format!("GET {} not started", url));
                completion(HttpClientResult::Failure(error));
                return;
            }
        };

        let client = self.client.clone();
        let url = url.clone();

        handle.spawn(async move {
            let result = match fetch(&client, url).await {
                Ok((data, response)) => HttpClientResult::Success { data, response },
                Err(e) => HttpClientResult::Failure(e),
            };
            completion(result);
        });
    }
}

async fn fetch(client: &Client, url: Url) -> anyhow::Result<(Vec<u8>, HttpResponse)> {
    // Send the GET request
    tracing::debug!("Making API request to: {}", url);
    let response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?;

    // Keep the status and the final URL after redirects
    tracing::debug!("API response status: {}", response.status());
    let metadata = HttpResponse {
        url: response.url().clone(),
        status_code: response.status().as_u16(),
    };

    // Read the whole body; a failed read is a transport failure
    let data = response
        .bytes()
        .await
        .with_context(|| format!("reading body from {} failed", url))?;

    Ok((data.to_vec(), metadata))
}
