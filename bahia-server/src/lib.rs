//! Schedule server for the Cercanías Bahía de Cádiz network.
//!
//! Answers: "which trains run from this station to that station, and
//! where are they right now?" The schedule data comes from the upstream
//! GTFS feed, normalized by the `build_dataset` batch job into a JSON
//! dataset that the server holds read-only in memory.

pub mod domain;
pub mod feed;
pub mod index;
pub mod query;
pub mod registry;
pub mod status;
pub mod web;
