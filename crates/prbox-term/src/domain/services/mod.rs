pub mod actions;
mod app_state;
pub mod events;
mod themes;

pub use actions::ActionsService;
pub use app_state::*;
pub use events::EventsService;
pub use themes::*;
