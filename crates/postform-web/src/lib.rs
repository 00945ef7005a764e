#![forbid(unsafe_code)]

//! Browser binding for the floating post form.
//!
//! Wires [`postform_core`] to the board page:
//! - DOM handles implementing the core panel and text-field traits,
//! - listener guards that register on construction and deregister on drop,
//! - installation on `DOMContentLoaded` plus an explicit `installPostForm`,
//! - `quote(id)` exported and assigned to `window.quote`,
//! - console logging through `tracing-subscriber`.
//!
//! Everything except [`InstallError`] is only compiled for `wasm32`.

mod error;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod floating_form;
#[cfg(target_arch = "wasm32")]
mod listener;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use error::InstallError;

#[cfg(target_arch = "wasm32")]
pub use floating_form::FloatingForm;
#[cfg(target_arch = "wasm32")]
pub use wasm::{install_post_form, quote, uninstall_post_form};
