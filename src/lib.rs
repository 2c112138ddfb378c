// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics / float allowances: casts and exact comparisons are intentional
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::module_name_repetitions)]

//! Core of an interactive 3D scene viewer: a fixed grid of wireframe
//! solids, ray picking from screen coordinates, and a click-to-focus
//! animation state machine.
//!
//! Clicking an object tweens it to a fixed focal point and spins it;
//! clicking again (anywhere) tweens it back to its grid slot. Rendering
//! is an external collaborator behind [`render::RenderBackend`]; this
//! crate owns everything between the click coordinate and the
//! interpolated transform.
//!
//! # Key entry points
//!
//! - [`engine::Viewer`] - the per-frame coordinator
//! - [`engine::ViewerCommand`] - the complete interactive vocabulary
//! - [`scene::SceneRegistry`] - the fixed set of pickable objects
//! - [`animation::TweenScheduler`] - keyed, preemptible attribute tweens
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Control flow
//!
//! Host input events feed an [`input::InputProcessor`], which emits
//! [`engine::ViewerCommand`] values; the [`engine::Viewer`] executes
//! commands synchronously and advances all state once per
//! [`tick`](engine::Viewer::tick).

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod render;
pub mod scene;
pub mod util;
