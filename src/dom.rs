use heart_core::Viewport;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("element `{0}` is not a {1}")]
    WrongElementType(&'static str, &'static str),
    #[error("canvas 2d context unavailable")]
    NoContext2d,
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}

#[inline]
pub fn window() -> Result<web::Window, DomError> {
    web::window().ok_or(DomError::NoWindow)
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn document(window: &web::Window) -> Result<web::Document, DomError> {
    window.document().ok_or(DomError::NoDocument)
}

fn cast<T: JsCast>(el: web::Element, selector: &'static str) -> Result<T, DomError> {
    el.dyn_into::<T>()
        .map_err(|_| DomError::WrongElementType(selector, std::any::type_name::<T>()))
}

pub fn by_id<T: JsCast>(document: &web::Document, id: &'static str) -> Result<T, DomError> {
    let el = document
        .get_element_by_id(id)
        .ok_or(DomError::MissingElement(id))?;
    cast(el, id)
}

pub fn query<T: JsCast>(document: &web::Document, selector: &'static str) -> Result<T, DomError> {
    let el = document
        .query_selector(selector)?
        .ok_or(DomError::MissingElement(selector))?;
    cast(el, selector)
}

/// All matches in document order. Non-HTML nodes are skipped.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn viewport(window: &web::Window) -> Viewport {
    let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    Viewport::new(px(window.inner_width()), px(window.inner_height()))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// `display:block; opacity:1`
pub fn show(el: &web::HtmlElement) {
    set_style(el, "display", "block");
    set_style(el, "opacity", "1");
}

pub fn hide(el: &web::HtmlElement) {
    set_style(el, "display", "none");
}

/// An attached event listener. Dropping it detaches the handler.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, DomError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Fires at most once; the browser removes it after the first event.
    pub fn once(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, DomError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &opts,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Keep the handler attached for the rest of the page's life.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// A single `setTimeout` slot: arming again replaces any pending timeout.
pub struct TimeoutSlot {
    window: web::Window,
    callback: Closure<dyn FnMut()>,
    handle: Option<i32>,
}

impl TimeoutSlot {
    pub fn new(window: web::Window, callback: impl FnMut() + 'static) -> Self {
        Self {
            window,
            callback: Closure::wrap(Box::new(callback) as Box<dyn FnMut()>),
            handle: None,
        }
    }

    pub fn arm(&mut self, delay_ms: f64) {
        self.cancel();
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                delay_ms.max(0.0).ceil() as i32,
            ) {
            Ok(handle) => self.handle = Some(handle),
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

impl Drop for TimeoutSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
