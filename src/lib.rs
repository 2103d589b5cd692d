pub mod bootstrap;
pub mod launch;
pub mod platform;

pub use bootstrap::*;
pub use launch::*;
pub use platform::*;
