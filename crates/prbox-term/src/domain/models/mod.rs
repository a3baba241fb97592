mod action;
mod event;
mod host_client;
mod notification;
mod screen;

pub use action::*;
pub use event::*;
pub use host_client::*;
pub use notification::*;
pub use screen::*;
