//! # sandman-web-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**: reports home, per-day report view, settings,
//!   status
//! - Stream the config file as a download and drive the reset flow
//!   (redirect + one-shot flash notice on failure)
//! - Redirect `/rhasspy` to the rhasspy admin page on whatever interface
//!   the client connected through
//! - Compute the per-request health snapshot in a middleware layer and
//!   hand it to every rendered page
//! - Map application results into HTTP responses (HTML, attachment,
//!   redirect)
//!
//! ## Dependency rule
//! Depends on `sandman-web-app` (for port traits and services) and
//! `sandman-web-domain` (for domain types used in response mapping). Never
//! leaks axum types into the domain.

pub mod dashboard;
pub mod error;
pub mod flash;
pub mod middleware;
pub mod router;
pub mod state;
