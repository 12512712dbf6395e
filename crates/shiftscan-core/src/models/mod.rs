//! Data models for shifts, calendar payloads, and configuration.

pub mod calendar;
pub mod config;
pub mod shift;
