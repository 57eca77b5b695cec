pub mod contact_form;
pub mod content;
pub mod controller;
mod error;
pub mod links;
pub mod map_tab;
pub mod marquee;
pub mod navbar;
pub mod site;
pub mod template;
pub mod transition;
pub mod view;

pub use crate::error::{Error, Result};
pub use crate::site::Site;
pub use crate::view::ViewId;
