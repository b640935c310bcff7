//! HTTP handlers for the relay endpoints.

pub mod answer;
pub mod health;
pub mod image;
