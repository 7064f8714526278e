//! Sprite sheet loading and frame blitting.

pub mod frame;
pub mod sheet;
