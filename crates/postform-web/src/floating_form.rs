#![forbid(unsafe_code)]

//! Installed page context: element handles, drag controller and listeners.
//!
//! Handlers hold a [`Weak`] reference to the shared state so that dropping
//! the [`FloatingForm`] tears everything down. The document-level
//! move/release listeners only exist while the controller reports an active
//! session.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use postform_core::{
    DragCancelReason, DragController, ListenerCommand, PanelConfig, Point, PressTarget,
};
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlTextAreaElement, MouseEvent, Window,
};

use crate::dom::{DomPanel, DomTextField, FloatingClass, element_by_id, viewport_size};
use crate::error::InstallError;
use crate::listener::EventListener;

type SharedState = Rc<RefCell<FormState>>;

struct FormState {
    config: PanelConfig,
    window: Window,
    document: Document,
    close: Element,
    panel: DomPanel,
    field: DomTextField,
    controller: DragController,
    session: Option<SessionListeners>,
}

impl FormState {
    fn press_target(&self, event: &Event) -> PressTarget {
        let close: &EventTarget = self.close.as_ref();
        match event.target() {
            Some(target) if &target == close => PressTarget::CloseControl,
            _ => PressTarget::Handle,
        }
    }

    fn quote(&mut self, id: &str) -> bool {
        match self.field.owning_form(&self.config.floating_class) {
            Some(mut owner) => postform_core::quote(&mut owner, &mut self.field, id),
            None => postform_core::quote(&mut self.panel, &mut self.field, id),
        }
    }
}

/// Move/release listeners for one drag session.
struct SessionListeners {
    _move: EventListener,
    _release: EventListener,
}

impl SessionListeners {
    fn attach(state: &SharedState) -> Result<Self, InstallError> {
        let document: EventTarget = state.borrow().document.clone().into();
        let weak = Rc::downgrade(state);
        let on_move = {
            let weak = weak.clone();
            move |event: Event| handle_move(&weak, &event)
        };
        let on_release = move |event: Event| handle_release(&weak, &event);
        Ok(Self {
            _move: EventListener::new(&document, "mousemove", on_move)?,
            _release: EventListener::new(&document, "mouseup", on_release)?,
        })
    }
}

/// The floating post form wired to the page.
///
/// Dropping it cancels any active drag and removes every listener.
pub struct FloatingForm {
    state: SharedState,
    _wiring: Vec<EventListener>,
}

impl FloatingForm {
    /// Resolve the configured elements and register the page handlers.
    pub fn install(config: PanelConfig) -> Result<Self, InstallError> {
        config.validate()?;
        let window = web_sys::window().ok_or(InstallError::NoWindow)?;
        let document = window.document().ok_or(InstallError::NoDocument)?;

        let form: HtmlElement = element_by_id(&document, &config.form_id, "HtmlElement")?;
        let header: Element = element_by_id(&document, &config.header_id, "Element")?;
        let close: Element = element_by_id(&document, &config.close_id, "Element")?;
        let open: Element = element_by_id(&document, &config.open_id, "Element")?;
        let comment: HtmlTextAreaElement =
            element_by_id(&document, &config.comment_id, "HtmlTextAreaElement")?;

        let panel = DomPanel::new(form, &config.floating_class);
        let open_target: &EventTarget = open.as_ref();
        let header_target: &EventTarget = header.as_ref();
        let window_target: EventTarget = window.clone().into();
        let state = Rc::new(RefCell::new(FormState {
            config,
            window,
            document,
            close,
            panel,
            field: DomTextField::new(comment),
            controller: DragController::new(),
            session: None,
        }));

        let weak = Rc::downgrade(&state);
        let wiring = vec![
            EventListener::new(open_target, "click", {
                let weak = weak.clone();
                move |event: Event| handle_open(&weak, &event)
            })?,
            EventListener::new(header_target, "mousedown", {
                let weak = weak.clone();
                move |event: Event| handle_press(&weak, &event)
            })?,
            EventListener::new(&window_target, "resize", {
                let weak = weak.clone();
                move |_event: Event| handle_resize(&weak)
            })?,
            EventListener::new(&window_target, "blur", move |_event: Event| {
                handle_blur(&weak)
            })?,
        ];

        info!(
            target: "postform::web",
            form_id = %state.borrow().config.form_id,
            "floating post form installed"
        );
        Ok(Self {
            state,
            _wiring: wiring,
        })
    }

    /// Quote post `id` into the reply box. Always `false`.
    pub fn quote(&self, id: &str) -> bool {
        self.state.borrow_mut().quote(id)
    }
}

impl Drop for FloatingForm {
    fn drop(&mut self) {
        let retired = {
            let mut state = self.state.borrow_mut();
            state.controller.cancel(DragCancelReason::Teardown);
            state.session.take()
        };
        drop(retired);
        info!(target: "postform::web", "floating post form removed");
    }
}

/// Quote without an installed form: resolve the textarea and its owner now.
pub(crate) fn quote_detached(config: &PanelConfig, id: &str) -> Result<bool, InstallError> {
    let window = web_sys::window().ok_or(InstallError::NoWindow)?;
    let document = window.document().ok_or(InstallError::NoDocument)?;
    let comment: HtmlTextAreaElement =
        element_by_id(&document, &config.comment_id, "HtmlTextAreaElement")?;
    let mut field = DomTextField::new(comment);
    let mut owner = match field.owning_form(&config.floating_class) {
        Some(owner) => owner,
        None => {
            let form: Element = element_by_id(&document, &config.form_id, "Element")?;
            FloatingClass::new(form, &config.floating_class)
        }
    };
    Ok(postform_core::quote(&mut owner, &mut field, id))
}

fn client_point(event: &MouseEvent) -> Point {
    Point::new(event.client_x(), event.client_y())
}

fn apply_listener_command(state: &SharedState, command: Option<ListenerCommand>) {
    match command {
        Some(ListenerCommand::Attach) => match SessionListeners::attach(state) {
            Ok(listeners) => state.borrow_mut().session = Some(listeners),
            Err(err) => {
                warn!(target: "postform::web", error = %err, "failed to attach drag listeners");
                state
                    .borrow_mut()
                    .controller
                    .cancel(DragCancelReason::ListenerAttachFailed);
            }
        },
        Some(ListenerCommand::Detach) => {
            let retired = state.borrow_mut().session.take();
            drop(retired);
        }
        None => {}
    }
}

fn handle_press(weak: &Weak<RefCell<FormState>>, event: &Event) {
    let (Some(state), Some(mouse)) = (weak.upgrade(), event.dyn_ref::<MouseEvent>()) else {
        return;
    };
    mouse.prevent_default();
    let dispatch = {
        let mut guard = state.borrow_mut();
        let target = guard.press_target(event);
        let FormState {
            controller, panel, ..
        } = &mut *guard;
        controller.press(target, client_point(mouse), panel)
    };
    apply_listener_command(&state, dispatch.listener_command);
}

fn handle_move(weak: &Weak<RefCell<FormState>>, event: &Event) {
    let (Some(state), Some(mouse)) = (weak.upgrade(), event.dyn_ref::<MouseEvent>()) else {
        return;
    };
    mouse.prevent_default();
    let mut guard = state.borrow_mut();
    let Some(viewport) = viewport_size(&guard.window, guard.config.viewport) else {
        return;
    };
    let FormState {
        controller, panel, ..
    } = &mut *guard;
    controller.pointer_move(client_point(mouse), viewport, panel);
}

fn handle_release(weak: &Weak<RefCell<FormState>>, event: &Event) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    event.prevent_default();
    let dispatch = state.borrow_mut().controller.release();
    apply_listener_command(&state, dispatch.listener_command);
}

fn handle_resize(weak: &Weak<RefCell<FormState>>) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let mut guard = state.borrow_mut();
    let Some(viewport) = viewport_size(&guard.window, guard.config.viewport) else {
        return;
    };
    let FormState {
        controller, panel, ..
    } = &mut *guard;
    controller.viewport_resized(viewport, panel);
}

fn handle_open(weak: &Weak<RefCell<FormState>>, event: &Event) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    event.prevent_default();
    let mut guard = state.borrow_mut();
    let FormState {
        controller, panel, ..
    } = &mut *guard;
    controller.open(panel);
}

fn handle_blur(weak: &Weak<RefCell<FormState>>) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    let dispatch = state.borrow_mut().controller.cancel(DragCancelReason::Blur);
    apply_listener_command(&state, dispatch.listener_command);
}
