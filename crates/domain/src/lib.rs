//! # sandman-web-domain
//!
//! Pure domain model for the sandman web front-end.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **health model** (per-service status, aggregated snapshot)
//! - Define **reports** (one day of hub activity as written by the daemon)
//! - Define the **config snapshot** handed out by the download operation,
//!   including the attachment-name convention
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod config_file;
pub mod health;
pub mod report;
