//! HomeScout Store - Search log port and adapters
//!
//! This crate defines the search log port and provides an in-memory adapter
//! for development and a PostgreSQL adapter for deployments.

pub mod memory;
pub mod ports;
pub mod postgres;
