//! Application services — one per use-case group.

pub mod config_service;
pub mod health_service;
pub mod report_service;
