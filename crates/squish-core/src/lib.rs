pub mod error;
pub mod validate;

pub mod config;
pub mod key;
pub mod machine;
pub mod stats;

pub use crate::config::SquishConfig;
pub use crate::error::{Result, SquishError};
pub use crate::machine::squisher::{squish_bytes, Squisher};
pub use crate::machine::state::WriteState;
