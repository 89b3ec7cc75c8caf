//! Stagebook: a booking directory for live-music venues, artists and shows.
//!
//! The library exposes every module so integration tests can drive the router.

pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod services;
pub mod state;
pub mod templates;
pub mod test_utils;
