pub mod panic_guard;
pub mod request_logging;

pub use panic_guard::catch_panics;
pub use request_logging::log_requests;
