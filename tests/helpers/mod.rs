//! Test helpers module
//!
//! This module provides utilities and helpers for testing the directory
//! store: mock servers, a stateful fake backend and sample data.

#![allow(dead_code)]

pub mod api_mock;
pub mod fake_backend;
pub mod simple_test;
pub mod test_data;

pub use api_mock::*;
pub use fake_backend::*;
pub use simple_test::*;
pub use test_data::*;
