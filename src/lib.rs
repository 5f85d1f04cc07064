//! HRMS Calculation Engine
//!
//! This crate computes the figures an HR management system stamps onto its
//! records: the countable days of a leave request and the pro-rated payroll
//! for an employee's month. Both calculators are pure functions; a thin
//! `axum` adapter in [`api`] exposes them over JSON.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
