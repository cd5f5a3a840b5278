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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! First-person "noclip" camera rig.
//!
//! Translates pointer deltas and held movement keys into the orientation
//! and position of a two-node camera hierarchy, and mirrors the host's
//! cursor-lock state.
//!
//! # Key entry points
//!
//! - [`camera::CameraRig`] - the rig: `look`, `set_move_flag`, `update`,
//!   `forward_direction`, `root_transform`
//! - [`input::dispatch`] - applies platform-agnostic [`input::InputEvent`]s
//!   to a rig
//! - [`options::Options`] - look and movement tuning, loadable from TOML
//! - `web::WebControls` (feature `web`) - DOM listener wiring with explicit
//!   `dispose()`, plus the `NoclipControls` JavaScript class
//!
//! # Frame loop
//!
//! The rig is single-threaded and synchronous. Events mutate flags and
//! angles as they arrive; the host calls `update(dt)` once per rendered
//! frame and then reads the root transform to position its camera.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use camera::CameraRig;
pub use error::NoclipError;
pub use input::{InputEvent, MoveAction};
pub use options::Options;
