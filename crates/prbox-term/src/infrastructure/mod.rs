//! Infrastructure layer providing external integrations.
//!
//! This module contains the `gh` GraphQL transport, the notifications query,
//! the system URL opener and terminal tone detection.

pub mod background;
pub mod browser;
pub mod clients;
pub mod github;
