//! OTC Clock Infrastructure
//!
//! Time sources for quote expiry checks:
//! - `SystemClock`: wall-clock UTC time for production
//! - `FixedClock`: a settable instant for deterministic tests

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use otc_ports::Clock;
