//! Process Implementations
//!
//! Concrete implementations of the CommandRunner port.

mod system;

pub use system::SystemCommandRunner;
