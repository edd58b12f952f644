pub mod application_handlers;
pub mod submission_handlers;
pub mod system_handlers;

pub use application_handlers::*;
pub use submission_handlers::*;
pub use system_handlers::*;
