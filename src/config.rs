// Config module for environment-driven configuration
//
// The process environment is only read here, once, by the binary. Everything
// downstream receives plain values.

use crate::constants::{API_URL_ENV, BUILD_ENV, DEFAULT_API_URL, VERSION_ENV};

/// Selector fallbacks taken from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Value of `MC_VERSION`, if set.
    pub mc_version: Option<String>,
    /// Raw value of `MC_BUILD`, if set. Parsed during resolution.
    pub mc_build: Option<String>,
}

impl Environment {
    pub fn from_process() -> Self {
        Self {
            mc_version: std::env::var(VERSION_ENV).ok(),
            mc_build: std::env::var(BUILD_ENV).ok(),
        }
    }
}

pub fn api_base_url() -> String {
    std::env::var(API_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
