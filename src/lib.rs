//! userview — typed REST resource client and view controllers (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod controller;
pub mod env;
pub mod logging;
pub mod models;
pub mod output;
pub mod resource;
