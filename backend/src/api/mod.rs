//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for different API domains:
//! the Pi-hole disable action, the submitted URL history and the blocked
//! URL denylist.

pub mod blocked_urls;
pub mod common;
pub mod pihole;
pub mod urls;
