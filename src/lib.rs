//! Receipt Processor
//!
//! This crate provides a small HTTP service that stores submitted receipts and
//! scores them for loyalty points using a fixed set of rules.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod telemetry;
