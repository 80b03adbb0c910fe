//! HTTP API
//!
//! Client functions for the remote expense API.

pub mod client;

pub use client::*;
