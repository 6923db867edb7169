//! Clinic UI component library. Each component ships its own stylesheet.

pub mod components;

pub use components::*;
