/// Data model for FilmSleuth.
///
/// Re-exports the validated record, the load session and display helpers.
pub mod format;
pub mod record;
pub mod session;

pub use record::{decade_label, Record};
pub use session::{RejectedLine, Session};
