//! Perspective camera and screen-to-world ray derivation.

mod core;

pub use self::core::Camera;
