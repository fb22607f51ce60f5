//! Core-to-presentation notifications.

mod event;
mod presenter;

pub use event::MatchEvent;
pub use presenter::{EventLog, NullPresenter, Presenter};
