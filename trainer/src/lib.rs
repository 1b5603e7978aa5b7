mod autostep;
mod session;
mod view;

pub use autostep::{AUTO_STEP_PERIOD, SessionHandle};
pub use session::{TrainerSession, apply_step};
pub use view::SessionView;
