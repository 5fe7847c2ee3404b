pub mod session;
pub mod track;

pub use session::{Session, SessionPhase};
pub use track::Track;
