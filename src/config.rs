use std::{env, net::IpAddr, time::Duration};

use crate::upstream::ServiceRegistry;

const DEFAULT_POLL_INTERVAL_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Origin the typed client uses to reach this server's own proxy routes.
    pub web_base_url: String,
    pub poll_interval: Duration,
    pub services: ServiceRegistry,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let web_base_url = lookup("WEB_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| own_origin(&host, port));
        let poll_secs = lookup("POLL_INTERVAL_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS);

        if reqwest::Url::parse(&web_base_url).is_err() {
            anyhow::bail!("WEB_BASE_URL is not a valid URL: {web_base_url}");
        }

        Ok(Self {
            host,
            port,
            web_base_url,
            poll_interval: Duration::from_secs(poll_secs),
            services: ServiceRegistry::from_lookup(&lookup),
        })
    }
}

/// Origin for reaching this server from itself. Wildcard binds are reached
/// over loopback; IPv6 literals are bracketed.
fn own_origin(host: &str, port: u16) -> String {
    match host.parse::<IpAddr>() {
        Ok(ip) if ip.is_unspecified() => format!("http://127.0.0.1:{port}"),
        Ok(IpAddr::V6(ip)) => format!("http://[{ip}]:{port}"),
        _ => format!("http://{host}:{port}"),
    }
}
