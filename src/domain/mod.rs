//! Domain layer for DiscoveryLastFM
//!
//! Typed configuration model and the environment settings schema.

pub mod models;
