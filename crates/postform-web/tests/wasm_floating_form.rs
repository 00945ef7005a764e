#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

use postform_web::{install_post_form, quote, uninstall_post_form};
use pretty_assertions::assert_eq;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlTextAreaElement, MouseEvent,
    MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r##"
<div id="fixture">
  <a id="pfopen" href="#reply">Reply</a>
  <form id="postForm" style="position: fixed; left: 20px; top: 20px; width: 200px; height: 100px; margin: 0; padding: 0; border: 0;">
    <div id="pfheader">New post <span id="pfclose">x</span></div>
    <textarea id="comment"></textarea>
  </form>
</div>
"##;

/// Inserts the form markup; removes it and uninstalls on drop.
struct Fixture {
    document: Document,
}

impl Fixture {
    fn new() -> Self {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("browser document");
        let body = document.body().expect("document body");
        body.insert_adjacent_html("beforeend", FIXTURE)
            .expect("insert fixture");
        Self { document }
    }

    fn element(&self, id: &str) -> Element {
        self.document
            .get_element_by_id(id)
            .unwrap_or_else(|| panic!("fixture element #{id}"))
    }

    fn form(&self) -> HtmlElement {
        self.element("postForm").unchecked_into()
    }

    fn comment(&self) -> HtmlTextAreaElement {
        self.element("comment").unchecked_into()
    }

    fn is_floating(&self) -> bool {
        self.form().class_list().contains("floating")
    }

    fn style(&self, property: &str) -> String {
        self.form()
            .style()
            .get_property_value(property)
            .expect("style read")
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        uninstall_post_form();
        if let Some(fixture) = self.document.get_element_by_id("fixture") {
            fixture.remove();
        }
    }
}

fn mouse(kind: &str, x: i32, y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(x);
    init.set_client_y(y);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect("mouse event")
}

fn fire(target: &EventTarget, event: &Event) {
    target.dispatch_event(event).expect("dispatch");
}

#[wasm_bindgen_test]
fn header_drag_moves_form_until_release() {
    let fixture = Fixture::new();
    install_post_form(None).expect("install");
    let document: EventTarget = fixture.document.clone().into();
    let header = fixture.element("pfheader");

    fire(&header, &mouse("mousedown", 30, 30));
    fire(&document, &mouse("mousemove", 70, 50));
    assert_eq!(fixture.style("left"), "60px");
    assert_eq!(fixture.style("top"), "40px");

    fire(&document, &mouse("mouseup", 70, 50));
    fire(&document, &mouse("mousemove", 120, 120));
    assert_eq!(fixture.style("left"), "60px");
    assert_eq!(fixture.style("top"), "40px");
}

#[wasm_bindgen_test]
fn drag_past_top_left_is_clamped() {
    let fixture = Fixture::new();
    install_post_form(None).expect("install");
    let document: EventTarget = fixture.document.clone().into();

    fire(&fixture.element("pfheader"), &mouse("mousedown", 30, 30));
    fire(&document, &mouse("mousemove", -100, -100));
    assert_eq!(fixture.style("left"), "0px");
    assert_eq!(fixture.style("top"), "0px");
    fire(&document, &mouse("mouseup", -100, -100));
}

fn window_target() -> EventTarget {
    web_sys::window().expect("window").into()
}

fn inner_size() -> (i32, i32) {
    let window = web_sys::window().expect("window");
    let width = window.inner_width().expect("inner width").as_f64().expect("number");
    let height = window.inner_height().expect("inner height").as_f64().expect("number");
    (width as i32, height as i32)
}

#[wasm_bindgen_test]
fn window_resize_pulls_form_back_on_screen() {
    let fixture = Fixture::new();
    install_post_form(None).expect("install");
    let style = fixture.form().style();
    style.set_property("left", "20000px").expect("left");
    style.set_property("top", "20000px").expect("top");

    fire(&window_target(), &Event::new("resize").expect("resize event"));
    let (width, height) = inner_size();
    assert_eq!(fixture.style("left"), format!("{}px", width - 200));
    assert_eq!(fixture.style("top"), format!("{}px", height - 100));
}

#[wasm_bindgen_test]
fn window_blur_ends_drag() {
    let fixture = Fixture::new();
    install_post_form(None).expect("install");
    let document: EventTarget = fixture.document.clone().into();

    fire(&fixture.element("pfheader"), &mouse("mousedown", 30, 30));
    fire(&window_target(), &Event::new("blur").expect("blur event"));
    fire(&document, &mouse("mousemove", 90, 90));
    assert_eq!(fixture.style("left"), "20px");
    assert_eq!(fixture.style("top"), "20px");
}

#[wasm_bindgen_test]
fn screen_viewport_bounds_the_drag() {
    let fixture = Fixture::new();
    install_post_form(Some(r#"{"viewport":"screen"}"#.to_owned())).expect("install");
    let screen = web_sys::window().expect("window").screen().expect("screen");
    let document: EventTarget = fixture.document.clone().into();

    fire(&fixture.element("pfheader"), &mouse("mousedown", 30, 30));
    fire(&document, &mouse("mousemove", 50_000, 50_000));
    let width = screen.width().expect("screen width");
    let height = screen.height().expect("screen height");
    assert_eq!(fixture.style("left"), format!("{}px", width - 200));
    assert_eq!(fixture.style("top"), format!("{}px", height - 100));
    fire(&document, &mouse("mouseup", 50_000, 50_000));
}

#[wasm_bindgen_test]
fn close_press_unfloats_without_dragging() {
    let fixture = Fixture::new();
    install_post_form(None).expect("install");
    fixture.form().class_list().add_1("floating").expect("add class");
    let document: EventTarget = fixture.document.clone().into();

    fire(&fixture.element("pfclose"), &mouse("mousedown", 200, 25));
    assert!(!fixture.is_floating());
    fire(&document, &mouse("mousemove", 90, 90));
    assert_eq!(fixture.style("left"), "20px");
}

#[wasm_bindgen_test]
fn open_click_floats_form() {
    let fixture = Fixture::new();
    install_post_form(None).expect("install");
    let open: HtmlElement = fixture.element("pfopen").unchecked_into();
    open.click();
    assert!(fixture.is_floating());
}

#[wasm_bindgen_test]
fn quote_appends_reference_and_floats() {
    let fixture = Fixture::new();
    install_post_form(None).expect("install");

    let handled = quote(JsValue::from(42)).expect("quote");
    assert!(!handled);
    assert_eq!(fixture.comment().value(), ">>42\n");
    assert!(fixture.is_floating());

    quote(JsValue::from_str("abc")).expect("quote");
    assert_eq!(fixture.comment().value(), ">>42\n>>abc\n");
}

#[wasm_bindgen_test]
fn quote_works_before_install() {
    let fixture = Fixture::new();
    uninstall_post_form();
    quote(JsValue::from(7)).expect("quote");
    assert_eq!(fixture.comment().value(), ">>7\n");
    assert!(fixture.is_floating());
}

#[wasm_bindgen_test]
fn install_reports_missing_element() {
    let err = install_post_form(Some(r#"{"form_id":"nope"}"#.to_owned()))
        .expect_err("missing form should fail");
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .unwrap_or_default();
    assert_eq!(message, "element `#nope` not found");
}

#[wasm_bindgen_test]
fn window_quote_is_assigned_and_removed() {
    let fixture = Fixture::new();
    install_post_form(None).expect("install");
    let window = web_sys::window().expect("window");
    let hook = js_sys::Reflect::get(&window, &JsValue::from_str("quote")).expect("read quote");
    assert!(hook.is_function());

    drop(fixture);
    let hook = js_sys::Reflect::get(&window, &JsValue::from_str("quote")).expect("read quote");
    assert!(hook.is_undefined());
}
