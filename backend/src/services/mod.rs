//! Module for core business logic services.
//!
//! This module encapsulates services that perform specific business operations
//! and orchestrate interactions between different parts of the application,
//! such as the Pi-hole session handshake or the URL denylist checks.

pub mod blocked_url_service;
pub mod pihole_service;
pub mod submitted_url_service;
