// Infrastructure layer module
// Contains database adapters, bootstrap helpers and tracing setup
// Follows Hexagonal Architecture

pub mod database;
pub mod logging;
pub mod repositories;
pub mod seed;
