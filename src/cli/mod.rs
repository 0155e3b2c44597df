pub mod session;
pub mod terminal;
pub mod ui;

pub use session::{Session, SessionState};
