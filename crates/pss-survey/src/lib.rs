//! Perceived Stress Scale (PSS-10) survey platform.
//!
//! The crate hosts the fixed question catalog, the scoring engine that turns a
//! completed answer sheet into a total score and stress category, and the
//! response lifecycle (submit, list, edit, delete) behind a storage
//! abstraction. HTTP wiring for the service binary lives in
//! [`survey::router`].

pub mod config;
pub mod error;
pub mod survey;
pub mod telemetry;
