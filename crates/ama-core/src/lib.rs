//! # ama-core
//!
//! Core types and error types for the auto-ads network config resolver.
//!
//! This crate provides the foundational types shared across the workspace:
//! - Network identifiers (`adsense`, `doubleclick`)
//! - Element attribute lookup and the output attribute map
//! - Page context (canonical URL, viewport) and call-time page window state
//! - Default ad-density constraints
//! - Sticky-ad opt-in config parsed from the fetched auto-ads config
//! - The serializable per-network report returned by `amacfg`
//! - Cross-cutting error types

pub mod attributes;
pub mod constraints;
pub mod errors;
pub mod network;
pub mod page;
pub mod responses;
pub mod sticky;
