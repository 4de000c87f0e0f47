//! REST operations and the HTTP client implementing the transport seam.

pub mod auth;
pub mod client;
pub mod recipes;

#[cfg(test)]
mod tests;

pub use client::ApiClient;

use reqwest::Method;

/// One REST-style call: where it goes and which effects follow success.
#[derive(Debug, Clone)]
pub struct Operation {
    /// Human-readable identifier used in logs ("register user").
    pub name: &'static str,
    pub method: Method,
    pub path: String,
    /// Notification text shown on success.
    pub success_message: &'static str,
    /// Route to navigate to after success, if any.
    pub redirect: Option<&'static str>,
}
