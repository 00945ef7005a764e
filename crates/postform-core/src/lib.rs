#![forbid(unsafe_code)]

//! Core logic for the floating post form.
//!
//! # Role
//! `postform-core` holds everything that does not need a browser: the clamp
//! and bounds math, the drag controller, the quote action and the wiring
//! configuration. Hosts plug in through the [`PanelSurface`],
//! [`FloatingSurface`] and [`TextField`] traits; `postform-web` implements
//! them over DOM elements, while [`PanelState`] and [`TextFieldState`] serve
//! headless use and tests.
//!
//! # Lifecycle
//! A host builds one [`DragController`] per panel and forwards handle
//! presses, pointer moves/releases, window resizes and open clicks to it. The
//! returned [`DragDispatch`] tells the host whether to attach or detach its
//! session listeners.

pub mod config;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod panel;
pub mod quote;

pub use config::{LogLevel, PanelConfig, ViewportSource};
pub use drag::{
    DragCancelReason, DragController, DragDispatch, DragIgnoredReason, DragOutcome, DragPhase,
    DragSession, DragState, ListenerCommand, PressTarget,
};
pub use error::ConfigError;
pub use geometry::{Point, Size, ViewportBounds, clamp};
pub use panel::{FloatingSurface, PanelState, PanelSurface, TextField, TextFieldState};
pub use quote::{quote, quote_reference};
