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
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
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

//! Interactive perspective preview of a single image or video.
//!
//! The media sits on a CSS 3D stage; dragging with the left button pans it,
//! dragging with the middle button rotates it, the wheel zooms and Escape
//! resets.
//!
//! # Key entry points
//!
//! - [`session::PreviewSession`] - camera, input and stage for one preview
//! - [`camera::CameraSource`] - the camera interface, with
//!   [`camera::DirectCamera`] and [`camera::SmoothedCamera`]
//! - [`input::InputBehaviour`] - raw events → [`command::CameraCommand`]
//! - [`stage::Stage`] - writes the camera as a transform through a
//!   [`stage::Surface`]
//! - [`options::PreviewOptions`] - runtime configuration
//!
//! # Architecture
//!
//! Everything runs on the browser's UI thread. Event handlers are the only
//! writers of camera state and [`stage::Stage::update`], driven by the
//! caller once per frame, is the only reader. The DOM is reached only
//! through [`stage::Surface`], so everything above it is testable natively;
//! the browser implementation sits behind the `web` feature.

pub mod camera;
pub mod command;
pub mod error;
pub mod input;
pub mod media;
pub mod options;
pub mod session;
pub mod stage;
pub mod util;
#[cfg(feature = "web")]
pub mod web;
