//! Beyond Sports API Library
//!
//! Record management for football teams and their players: domain rules,
//! consistency services, Store adapters and the HTTP layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
