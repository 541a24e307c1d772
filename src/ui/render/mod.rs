mod catalog;
mod contact;
mod footer;
mod layout;
mod log;
mod navigation;
mod static_page;

use super::Frame;

pub use layout::render;
