pub mod app;
pub mod command_sender;
mod error;
pub mod theme;
mod ui;

pub use crate::error::{Error, Result};
