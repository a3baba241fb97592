//! Core domain logic for the notifications dashboard.
//!
//! This module contains the application snapshot, the pure fold over incoming
//! events and the services that connect it to the outside world.

pub mod models;
pub mod services;
