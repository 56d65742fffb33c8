//! Rail booking core.
//!
//! Answers one question well: what is the cheapest path between two
//! stations in a weighted network, and what is that path? A thin layer on
//! top validates bookings against it and reports travel times.

pub mod booking;
pub mod cache;
pub mod config;
pub mod domain;
pub mod network;
pub mod render;
pub mod travel_time;
pub mod web;
