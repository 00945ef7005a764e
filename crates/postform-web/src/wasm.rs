//! `wasm-bindgen` exports: page-load installation and `quote`.

use std::cell::RefCell;

use js_sys::Reflect;
use postform_core::PanelConfig;
use tracing::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::dom::js_display;
use crate::error::InstallError;
use crate::floating_form::{FloatingForm, quote_detached};
use crate::logging;

const QUOTE_GLOBAL: &str = "quote";

/// `window.quote`, removed again when dropped.
struct QuoteHook {
    window: web_sys::Window,
    _callback: Closure<dyn FnMut(JsValue) -> bool>,
}

impl QuoteHook {
    fn install(window: web_sys::Window) -> Result<Self, InstallError> {
        let callback = Closure::<dyn FnMut(JsValue) -> bool>::new(|id: JsValue| {
            match quote(id) {
                Ok(handled) => handled,
                Err(err) => wasm_bindgen::throw_val(err),
            }
        });
        Reflect::set(&window, &JsValue::from_str(QUOTE_GLOBAL), callback.as_ref())?;
        Ok(Self {
            window,
            _callback: callback,
        })
    }
}

impl Drop for QuoteHook {
    fn drop(&mut self) {
        let _ = Reflect::delete_property(&self.window, &JsValue::from_str(QUOTE_GLOBAL));
    }
}

struct Installed {
    form: FloatingForm,
    _quote_hook: QuoteHook,
}

thread_local! {
    static INSTALLED: RefCell<Option<Installed>> = const { RefCell::new(None) };
}

fn install(config: PanelConfig) -> Result<(), InstallError> {
    logging::init(config.log_level);
    let window = web_sys::window().ok_or(InstallError::NoWindow)?;
    // Tear down the previous installation before wiring the new one so the
    // same elements never carry two sets of handlers.
    let previous = INSTALLED.with(|slot| slot.borrow_mut().take());
    drop(previous);
    let form = FloatingForm::install(config)?;
    let quote_hook = QuoteHook::install(window)?;
    INSTALLED.with(|slot| {
        *slot.borrow_mut() = Some(Installed {
            form,
            _quote_hook: quote_hook,
        });
    });
    Ok(())
}

fn is_installed() -> bool {
    INSTALLED.with(|slot| slot.borrow().is_some())
}

fn install_default_on_load() {
    if is_installed() {
        debug!(target: "postform::web", "form already installed; skipping default install");
        return;
    }
    if let Err(err) = install(PanelConfig::default()) {
        error!(target: "postform::web", error = %err, "floating post form install failed");
    }
}

/// Module entry point: install the stock wiring once the DOM is ready.
///
/// A page without the form only logs the failure here; `installPostForm`
/// throws instead.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    logging::install_panic_hook();
    let window = web_sys::window().ok_or(InstallError::NoWindow)?;
    let document = window.document().ok_or(InstallError::NoDocument)?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(install_default_on_load);
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        install_default_on_load();
    }
    Ok(())
}

/// Install (or reinstall) with a JSON config; `undefined` uses the defaults.
#[wasm_bindgen(js_name = installPostForm)]
pub fn install_post_form(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => PanelConfig::from_json(&json).map_err(InstallError::from)?,
        None => PanelConfig::default(),
    };
    install(config)?;
    Ok(())
}

/// Remove every handler and `window.quote`. Returns whether anything was
/// installed.
#[wasm_bindgen(js_name = uninstallPostForm)]
pub fn uninstall_post_form() -> bool {
    let previous = INSTALLED.with(|slot| slot.borrow_mut().take());
    previous.is_some()
}

/// Append `>>id` to the reply box and float the form. Always `false`, for
/// use as `onclick="return quote(123)"`.
#[wasm_bindgen]
pub fn quote(id: JsValue) -> Result<bool, JsValue> {
    let id = js_display(&id);
    let installed = INSTALLED.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|installed| installed.form.quote(&id))
    });
    match installed {
        Some(handled) => Ok(handled),
        None => Ok(quote_detached(&PanelConfig::default(), &id)?),
    }
}
