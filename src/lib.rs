//! REST API for tracking household waste: user registration and login,
//! category and waste item reference data, and per-user disposal history.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod router;
pub mod schemas;

mod openapi_tests;
mod test_utils;
