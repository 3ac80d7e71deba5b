//! # pulse-core
//!
//! Core types, insight generation, and ranking for MarketPulse.
//!
//! This crate provides the foundational types shared across all MarketPulse crates:
//! - Entity structs (insights, users, directory entries)
//! - The fixed activity / classification-code catalog
//! - The insight generator (seedable, pure)
//! - The ranking engine and dashboard statistics
//! - Repository traits for insight and credential storage, plus an in-memory
//!   implementation for tests
//! - The shared storage error
//! - CLI response types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod generator;
pub mod ranking;
pub mod responses;
pub mod store;
