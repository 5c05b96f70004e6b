//! Test fixtures for route-optimizer.
//!
//! Provides realistic test data including:
//! - Real Las Vegas / Henderson locations (from OpenStreetMap)
//! - Builders for vehicles, stops, and requests

#![allow(dead_code)]

pub mod las_vegas_locations;
pub mod requests;

pub use requests::*;
