//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate stores and external collaborators into use-case APIs.
//! - Keep CLI/UI layers decoupled from storage details.

pub mod devotion_service;
pub mod stats;
