//! HTTP client for the company profile backend.

pub mod client;
pub mod error;

pub use client::CompanyClient;
pub use error::ApiError;
