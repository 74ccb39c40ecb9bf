pub mod app;
pub mod event;
pub mod mode;
pub mod session;

pub use app::App;
pub use event::AppEvent;
pub use mode::AppMode;
pub use session::{run_session, PROMPT};
