//! Follow-up scheduling for personal relationship tracking.
//!
//! Rapport decides, for every tracked contact ("connection"), whether the
//! relationship is healthy, due for a follow-up soon, or overdue, and turns
//! that into the two views a relationship tracker needs:
//!
//! | Surface | Function | Output |
//! |---------|----------|--------|
//! | Detail view | [`schedule::message()`] | One reminder sentence, or nothing |
//! | Dashboard widget | [`schedule::rank()`] | Top overdue/due-soon connections |
//! | Follow-ups screen | [`schedule::categorize()`] | Overdue / week / month / no-schedule buckets |
//!
//! All of these are pure functions of the connection list and a caller-supplied
//! `now`. Capture `now` once per pass so every view agrees.
//!
//! # Modules
//!
//! - [`schedule`]: Health classification, reminder text, ranking and bucketing
//! - [`records`]: Loading and validating backend connection records
//! - [`notify`]: Single-slot transient notifications with auto-dismiss
//! - [`config`]: Configuration loading from TOML files and environment variables

pub mod config;
pub mod notify;
pub mod records;
pub mod schedule;
