//! Core domain logic for homework-relay
//!
//! This module contains the polling logic with no direct I/O.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`HomeworkStatus`, `HomeworkRecord`)
//! - `services/` - Validation, interpretation and the poll loop
//! - `ports/` - Trait definitions for the review API and the notifier

pub mod models;
pub mod ports;
pub mod services;
