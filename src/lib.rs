pub mod api;
pub mod config;
pub mod consts;
pub mod core_types;
pub mod detector;
pub mod drift;
pub mod error;
pub mod layout;
pub mod metrics;
