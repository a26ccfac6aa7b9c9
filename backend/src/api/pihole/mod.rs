//! Module for the Pi-hole disable API endpoint.
//!
//! This module handles the temporary-disable action: validate the submitted
//! URL, record it and suspend blocking on the appliance.

pub mod handlers;
pub mod routes;
