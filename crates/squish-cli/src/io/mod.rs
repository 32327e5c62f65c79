// crates/squish-cli/src/io/mod.rs

pub mod input;
pub mod output;
pub mod pump;
