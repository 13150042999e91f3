mod listeners;
mod store;

pub use listeners::{Listener, ListenerId, Listeners};
pub use store::{ProjectStore, HEADCOUNT_RANGE};
