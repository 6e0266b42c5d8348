//! Shared type definitions.

pub mod catalog;
