//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep HTTP/handler layers decoupled from storage details.

pub mod experiment_service;
pub mod result_service;
pub mod scientist_service;
