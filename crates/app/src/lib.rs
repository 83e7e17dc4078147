//! # sandman-web-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HealthProbe` — liveness of one collaborator service
//!   - `ConfigStore` — read the live config, copy defaults over it
//!   - `ElevatedCopy` — privileged fallback for the defaults copy
//!   - `ReportStore` — enumerate and load daily reports
//! - Define **driving/inbound ports** as use-case structs:
//!   - `HealthService` — aggregate two probes into one snapshot
//!   - `ConfigService` — download and reset, including the two-tier retry
//!   - `ReportService` — list, load, latest
//! - Orchestrate domain objects without knowing *how* IO works
//!
//! ## Dependency rule
//! Depends on `sandman-web-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
