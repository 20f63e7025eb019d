//! Colors used by scene objects.

pub mod color;

pub use color::Color;
