//! Payroll computation engine for Italian domestic employment.
//!
//! This crate computes payroll artifacts under the CCNL Lavoro Domestico:
//! monthly payslips ("cedolino"), quarterly INPS contribution summaries,
//! and annual tax certifications ("Certificazione Unica"), governed by
//! versioned regulatory rate tables.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
