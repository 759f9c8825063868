//! Service modules

pub mod audio;
pub mod messages;
pub mod quiz;
