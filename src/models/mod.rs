//! Diesel row types and their conversions to and from domain entities.

#[cfg(feature = "server")]
pub mod config;
pub mod mention;
pub mod review;
pub mod widget;
