pub mod squisher;
pub mod state;
pub mod transition;
