//! Full-screen layouts.

pub mod confirmation;
pub mod menu;
