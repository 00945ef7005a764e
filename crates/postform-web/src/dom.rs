#![forbid(unsafe_code)]

//! DOM handles implementing the core collaborator traits.

use js_sys::{Function, Reflect};
use postform_core::{FloatingSurface, PanelSurface, Point, Size, TextField, ViewportSource};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlTextAreaElement, Window};

use crate::error::InstallError;

/// Stringify any JS value the way the global `String()` does.
pub(crate) fn js_display(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    Reflect::get(&js_sys::global(), &JsValue::from_str("String"))
        .ok()
        .and_then(|string| string.dyn_into::<Function>().ok())
        .and_then(|string| string.call1(&JsValue::UNDEFINED, value).ok())
        .and_then(|text| text.as_string())
        .unwrap_or_default()
}

/// Look up `#id` and cast it to `T`.
pub(crate) fn element_by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, InstallError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| InstallError::MissingElement { id: id.to_owned() })?
        .dyn_into::<T>()
        .map_err(|_| InstallError::WrongElementType {
            id: id.to_owned(),
            expected,
        })
}

/// Current viewport size from the configured source, or `None` when it
/// cannot be read. Callers leave the panel where it is in that case.
pub(crate) fn viewport_size(window: &Window, source: ViewportSource) -> Option<Size> {
    usable_viewport(source, read_viewport(window, source))
}

fn read_viewport(window: &Window, source: ViewportSource) -> Result<Size, JsValue> {
    match source {
        ViewportSource::Window => {
            let width = window.inner_width()?;
            let height = window.inner_height()?;
            match (width.as_f64(), height.as_f64()) {
                (Some(width), Some(height)) => Ok(Size::new(width as i32, height as i32)),
                _ => Err(JsValue::from_str("inner size is not a number")),
            }
        }
        ViewportSource::Screen => {
            let screen = window.screen()?;
            Ok(Size::new(screen.width()?, screen.height()?))
        }
    }
}

fn usable_viewport(source: ViewportSource, size: Result<Size, JsValue>) -> Option<Size> {
    size.map_err(|err| {
        warn!(
            target: "postform::web",
            ?source,
            error = %js_display(&err),
            "viewport size unavailable"
        );
    })
    .ok()
}

/// Class-membership toggle for floating mode on any element.
#[derive(Debug, Clone)]
pub struct FloatingClass {
    element: Element,
    class: String,
}

impl FloatingClass {
    pub fn new(element: Element, class: &str) -> Self {
        Self {
            element,
            class: class.to_owned(),
        }
    }
}

impl FloatingSurface for FloatingClass {
    fn is_floating(&self) -> bool {
        self.element.class_list().contains(&self.class)
    }

    fn set_floating(&mut self, floating: bool) {
        let classes = self.element.class_list();
        let result = if floating {
            classes.add_1(&self.class)
        } else {
            classes.remove_1(&self.class)
        };
        if let Err(err) = result {
            warn!(
                target: "postform::web",
                class = %self.class,
                floating,
                error = %js_display(&err),
                "failed to toggle floating class"
            );
        }
    }
}

/// The form element acting as the panel.
#[derive(Debug, Clone)]
pub struct DomPanel {
    element: HtmlElement,
    floating: FloatingClass,
}

impl DomPanel {
    pub fn new(element: HtmlElement, floating_class: &str) -> Self {
        let floating = FloatingClass::new(element.clone().into(), floating_class);
        Self { element, floating }
    }
}

impl FloatingSurface for DomPanel {
    fn is_floating(&self) -> bool {
        self.floating.is_floating()
    }

    fn set_floating(&mut self, floating: bool) {
        self.floating.set_floating(floating);
    }
}

impl PanelSurface for DomPanel {
    fn origin(&self) -> Point {
        Point::new(self.element.offset_left(), self.element.offset_top())
    }

    fn size(&self) -> Size {
        Size::new(self.element.client_width(), self.element.client_height())
    }

    fn set_origin(&mut self, origin: Point) {
        let style = self.element.style();
        let result = style
            .set_property("top", &format!("{}px", origin.y))
            .and_then(|()| style.set_property("left", &format!("{}px", origin.x)));
        if let Err(err) = result {
            warn!(
                target: "postform::web",
                x = origin.x,
                y = origin.y,
                error = %js_display(&err),
                "failed to position panel"
            );
        }
    }
}

/// The reply textarea.
#[derive(Debug, Clone)]
pub struct DomTextField {
    element: HtmlTextAreaElement,
}

impl DomTextField {
    pub fn new(element: HtmlTextAreaElement) -> Self {
        Self { element }
    }

    /// Floating toggle for the form owning this textarea, if any.
    pub fn owning_form(&self, floating_class: &str) -> Option<FloatingClass> {
        self.element
            .form()
            .map(|form| FloatingClass::new(form.into(), floating_class))
    }
}

impl TextField for DomTextField {
    fn value(&self) -> String {
        self.element.value()
    }

    fn set_value(&mut self, value: &str) {
        self.element.set_value(value);
    }

    fn focus(&mut self) {
        if let Err(err) = self.element.focus() {
            warn!(
                target: "postform::web",
                error = %js_display(&err),
                "failed to focus text field"
            );
        }
    }
}
