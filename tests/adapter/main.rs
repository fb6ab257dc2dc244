//! Adapter tests for homework-relay
//!
//! Exercise the HTTP adapters against a local stub server.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

mod telegram_test;
