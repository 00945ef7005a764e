#![forbid(unsafe_code)]

//! Drag controller for the floating panel.
//!
//! The controller owns nothing but the optional [`DragSession`]. Every
//! lifecycle signal takes the panel (and, where bounds matter, the current
//! viewport size) as arguments and returns a [`DragDispatch`] describing what
//! happened, including an optional [`ListenerCommand`] the host must execute:
//! - `Attach` when a session starts: register pointer move/release listeners,
//! - `Detach` when it ends: drop them again.
//!
//! Moves and releases outside a session are ignored deterministically, so a
//! host that is late to detach cannot move the panel.

use tracing::{debug, trace};

use crate::geometry::{Point, Size, ViewportBounds};
use crate::panel::{FloatingSurface, PanelSurface};

/// What the press landed on inside the handle region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// Anywhere in the handle except the close control.
    Handle,
    /// The close control embedded in the handle.
    CloseControl,
}

/// Ephemeral state between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pointer_offset: Point,
}

impl DragSession {
    /// Offset from the panel origin to the pointer at press time.
    #[must_use]
    pub const fn pointer_offset(&self) -> Point {
        self.pointer_offset
    }

    fn origin_for(&self, pointer: Point) -> Point {
        pointer - self.pointer_offset
    }
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging { pointer_offset: Point },
}

/// Host instruction for the session's move/release listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerCommand {
    Attach,
    Detach,
}

/// Lifecycle phase recorded for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Press,
    PointerMove,
    PointerUp,
    Cancel,
    ViewportResize,
    Open,
}

/// Why an active session was cancelled without a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragCancelReason {
    /// The window lost focus mid-gesture.
    Blur,
    /// The host is tearing down its bindings.
    Teardown,
    /// The host could not register the session's move/release listeners.
    ListenerAttachFailed,
}

/// Why a signal was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragIgnoredReason {
    NoActiveSession,
}

/// Outcome category for one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    SessionStarted,
    /// A second handle press during a session replaced the pointer offset.
    SessionReanchored,
    /// The panel moved; `clamped` is set when either axis hit a bound.
    Moved { clamped: bool },
    /// The close control cleared floating mode.
    Closed,
    Opened,
    SessionEnded,
    /// A resize pulled the panel back inside the viewport.
    Reclamped,
    /// A resize left the panel where it was.
    Unchanged,
    Ignored(DragIgnoredReason),
}

/// Result of one lifecycle dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragDispatch {
    pub phase: DragPhase,
    pub outcome: DragOutcome,
    /// Panel origin after the dispatch, when the dispatch looked at it.
    pub origin: Option<Point>,
    pub listener_command: Option<ListenerCommand>,
}

impl DragDispatch {
    const fn new(phase: DragPhase, outcome: DragOutcome) -> Self {
        Self {
            phase,
            outcome,
            origin: None,
            listener_command: None,
        }
    }

    const fn ignored(phase: DragPhase, reason: DragIgnoredReason) -> Self {
        Self::new(phase, DragOutcome::Ignored(reason))
    }

    const fn with_origin(mut self, origin: Point) -> Self {
        self.origin = Some(origin);
        self
    }

    const fn with_command(mut self, command: ListenerCommand) -> Self {
        self.listener_command = Some(command);
        self
    }

    /// Whether the signal was dropped without touching any state.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self.outcome, DragOutcome::Ignored(_))
    }
}

/// Idle/Dragging state machine for the panel's handle.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    #[must_use]
    pub const fn new() -> Self {
        Self { session: None }
    }

    #[must_use]
    pub const fn state(&self) -> DragState {
        match self.session {
            Some(session) => DragState::Dragging {
                pointer_offset: session.pointer_offset,
            },
            None => DragState::Idle,
        }
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub const fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Handle a press inside the handle region.
    ///
    /// A press on the close control only clears floating mode. Any other
    /// press captures the pointer offset from the current panel origin.
    pub fn press<P: PanelSurface>(
        &mut self,
        target: PressTarget,
        pointer: Point,
        panel: &mut P,
    ) -> DragDispatch {
        let origin = panel.origin();
        match target {
            PressTarget::CloseControl => {
                panel.set_floating(false);
                debug!(target: "postform::drag", "close control pressed");
                let dispatch =
                    DragDispatch::new(DragPhase::Press, DragOutcome::Closed).with_origin(origin);
                match self.session.take() {
                    Some(_) => dispatch.with_command(ListenerCommand::Detach),
                    None => dispatch,
                }
            }
            PressTarget::Handle => {
                let session = DragSession {
                    pointer_offset: pointer - origin,
                };
                let reanchored = self.session.replace(session).is_some();
                debug!(
                    target: "postform::drag",
                    offset_x = session.pointer_offset.x,
                    offset_y = session.pointer_offset.y,
                    reanchored,
                    "drag session started"
                );
                if reanchored {
                    DragDispatch::new(DragPhase::Press, DragOutcome::SessionReanchored)
                        .with_origin(origin)
                } else {
                    DragDispatch::new(DragPhase::Press, DragOutcome::SessionStarted)
                        .with_origin(origin)
                        .with_command(ListenerCommand::Attach)
                }
            }
        }
    }

    /// Handle a pointer move; moves the panel when a session is active.
    pub fn pointer_move<P: PanelSurface>(
        &mut self,
        pointer: Point,
        viewport: Size,
        panel: &mut P,
    ) -> DragDispatch {
        let Some(session) = self.session else {
            return DragDispatch::ignored(
                DragPhase::PointerMove,
                DragIgnoredReason::NoActiveSession,
            );
        };
        let raw = session.origin_for(pointer);
        let bounds = ViewportBounds::derive(viewport, panel.size());
        let origin = bounds.clamp_origin(raw);
        panel.set_origin(origin);
        trace!(
            target: "postform::drag",
            x = origin.x,
            y = origin.y,
            clamped = origin != raw,
            "panel moved"
        );
        DragDispatch::new(
            DragPhase::PointerMove,
            DragOutcome::Moved {
                clamped: origin != raw,
            },
        )
        .with_origin(origin)
    }

    /// Handle pointer release; ends the session.
    pub fn release(&mut self) -> DragDispatch {
        if self.session.take().is_none() {
            return DragDispatch::ignored(
                DragPhase::PointerUp,
                DragIgnoredReason::NoActiveSession,
            );
        }
        debug!(target: "postform::drag", "drag session ended");
        DragDispatch::new(DragPhase::PointerUp, DragOutcome::SessionEnded)
            .with_command(ListenerCommand::Detach)
    }

    /// End an active session without a release. The panel keeps its
    /// last position.
    pub fn cancel(&mut self, reason: DragCancelReason) -> DragDispatch {
        if self.session.take().is_none() {
            return DragDispatch::ignored(
                DragPhase::Cancel,
                DragIgnoredReason::NoActiveSession,
            );
        }
        debug!(target: "postform::drag", ?reason, "drag session cancelled");
        DragDispatch::new(DragPhase::Cancel, DragOutcome::SessionEnded)
            .with_command(ListenerCommand::Detach)
    }

    /// Reclamp the panel against a new viewport size. Independent of the
    /// session; writes the panel only when its origin actually changes.
    pub fn viewport_resized<P: PanelSurface>(&self, viewport: Size, panel: &mut P) -> DragDispatch {
        let current = panel.origin();
        let origin = ViewportBounds::derive(viewport, panel.size()).clamp_origin(current);
        if origin == current {
            return DragDispatch::new(DragPhase::ViewportResize, DragOutcome::Unchanged)
                .with_origin(current);
        }
        panel.set_origin(origin);
        debug!(
            target: "postform::drag",
            x = origin.x,
            y = origin.y,
            viewport_width = viewport.width,
            viewport_height = viewport.height,
            "panel reclamped after resize"
        );
        DragDispatch::new(DragPhase::ViewportResize, DragOutcome::Reclamped).with_origin(origin)
    }

    /// Switch the panel into floating mode. Position is left alone.
    pub fn open<F: FloatingSurface>(&self, panel: &mut F) -> DragDispatch {
        panel.set_floating(true);
        debug!(target: "postform::drag", "panel opened");
        DragDispatch::new(DragPhase::Open, DragOutcome::Opened)
    }
}
