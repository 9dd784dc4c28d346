//! # Base types for parlorchess
//!
//! This is an auxiliary crate for `parlorchess`, which contains the core value types:
//! files, ranks, square coordinates, colors, piece kinds and displacement vectors.
//!
//! Normally you don't want to use this crate directly. Use `parlorchess` instead.

pub mod geometry;
pub mod types;
