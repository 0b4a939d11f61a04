//! Minimal HTTP relay that forwards templated-email send requests to
//! SendGrid and normalizes the provider's response into a uniform result.

pub mod config;
pub mod email;
pub mod logger;
pub mod routes;
pub mod template_data;
