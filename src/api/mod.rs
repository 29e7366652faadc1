//! Backend API surface
//!
//! Split between the reqwest client (`client`) and the tolerant wire models
//! (`models`).

pub mod client;
pub mod models;

pub use client::{ApiClient, ApiError};
