use std::{sync::Arc, time::Duration};

use crate::{client::ApiClient, config::AppConfig, upstream::ServiceRegistry};

#[derive(Clone)]
pub struct AppState {
    pub services: Arc<ServiceRegistry>,
    /// Shared connection pool for proxied upstream calls.
    pub http: reqwest::Client,
    pub api: ApiClient,
    pub poll_interval: Duration,
}

impl AppState {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            services: Arc::new(config.services.clone()),
            api: ApiClient::new(config.web_base_url.clone(), http.clone()),
            http,
            poll_interval: config.poll_interval,
        })
    }
}
