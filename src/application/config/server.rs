use std::collections::HashMap;

use crate::application::error::MalformedRangeError;

use super::ip_range::{parse_ip_range_list, IpRange};

/// Applied when `IP_WHITELIST` is unset: every IPv4 address is allowed.
const DEFAULT_IP_WHITELIST: &str = "[[0.0.0.0,255.255.255.255]]";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Inclusive IP ranges allowed to reach the API, parsed from
    /// `IP_WHITELIST`. The access-control layer denies any client outside
    /// these ranges.
    pub ip_allowlist: Vec<IpRange>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, MalformedRangeError> {
        Self::from_map(&std::env::vars().collect())
    }

    /// A malformed `IP_WHITELIST` is fatal; the error propagates so startup
    /// code can abort rather than run with a half-parsed allowlist.
    pub fn from_map(env: &HashMap<String, String>) -> Result<Self, MalformedRangeError> {
        let allowlist_text = env
            .get("IP_WHITELIST")
            .map(String::as_str)
            .unwrap_or(DEFAULT_IP_WHITELIST);

        Ok(Self {
            host: env
                .get("HOST")
                .cloned()
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port: env
                .get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            ip_allowlist: parse_ip_range_list(allowlist_text)?,
        })
    }
}
