//! ICU Sentinel - Clinical Deterioration Scoring Service
//!
//! This crate implements a deterministic rule-based scoring engine mapping
//! patient physiological parameters to organ-severity subscores, a composite
//! mortality-risk estimate, and categorical status labels, with transparent
//! failover to a local estimator when the remote prediction model is
//! unreachable.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
