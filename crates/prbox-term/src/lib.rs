//! Terminal dashboard for unread GitHub notification threads.
//!
//! The crate is split the same way as the rest of prbox: `domain` holds the
//! snapshot, its fold and the message types, `application` drives the terminal
//! and renders frames, and `infrastructure` talks to the `gh` CLI and the host.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, Event, HostClient, HostClientBox, NotificationThread, Screen};
pub use domain::services::{ActionsService, AppState, EventsService};
pub use infrastructure::clients::SystemHost;
