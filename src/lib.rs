//! Core library exports for the InstantProof service.
//!
//! This crate exposes the domain, models, repositories, source adapters,
//! routes and service layers used by the InstantProof web application.

pub mod db;
pub mod domain;
pub mod error_conversions;
pub mod models;
pub mod repository;
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod sources;
