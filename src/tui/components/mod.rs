//! Widgets shared by every screen.

pub mod status_bar;
pub mod tab_bar;
