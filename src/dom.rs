use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    console, window, Document, Element, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

use crate::{
    accessibility::focus_ring,
    config::{EffectsConfig, CONFIG_ELEMENT_ID},
    content::CONTACT_EMAIL,
    interactions::Rect,
    particles::Viewport,
    reveal::{RevealLatch, RevealOptions},
};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

pub fn scroll_offset() -> f64 {
    window()
        .and_then(|win| win.page_y_offset().ok())
        .unwrap_or(0.0)
}

pub fn viewport() -> Viewport {
    let Some(win) = window() else {
        return Viewport {
            width: 1280.0,
            height: 720.0,
        };
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    Viewport { width, height }
}

pub fn smooth_scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

pub fn element_offset_top(id: &str) -> Option<f64> {
    let element = document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;

    Some(f64::from(element.offset_top()))
}

/// Offsets of the given sections in the order given, skipping missing ones.
pub fn section_offsets<'a>(ids: &[&'a str]) -> Vec<(&'a str, f64)> {
    ids.iter()
        .filter_map(|&id| element_offset_top(id).map(|top| (id, top)))
        .collect()
}

pub fn element_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();

    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

pub fn document_is_loaded() -> bool {
    document()
        .map(|document| document.ready_state() == "complete")
        .unwrap_or(false)
}

/// Appends a `<style>` element to the head unless one with `id` exists.
pub fn inject_stylesheet(id: &str, css: &str) {
    let Some(document) = document() else {
        return;
    };

    if document.get_element_by_id(id).is_some() {
        return;
    }

    let Some(head) = document.head() else {
        return;
    };

    let Ok(style) = document.create_element("style") else {
        return;
    };

    style.set_id(id);
    style.set_text_content(Some(css));
    let _ = head.append_child(&style);
}

pub fn apply_focus_ring(element: &HtmlElement, focused: bool) {
    let style = element.style();

    for (property, value) in focus_ring(focused) {
        let _ = style.set_property(property, value);
    }
}

pub fn count_preconnect_links() -> u32 {
    document()
        .and_then(|document| document.query_selector_all("link[rel=\"preconnect\"]").ok())
        .map(|links| links.length())
        .unwrap_or(0)
}

pub fn load_config() -> EffectsConfig {
    document()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
        .map(|raw| EffectsConfig::from_json(&raw))
        .unwrap_or_default()
}

pub fn print_console_greeting() {
    let lines = [
        (
            "%c👋 Hello, Recruiter!".to_string(),
            "color: #667eea; font-size: 24px; font-weight: bold;",
        ),
        (
            "%cThanks for checking out my portfolio!".to_string(),
            "color: #00f2fe; font-size: 16px;",
        ),
        (
            format!("%cFeel free to reach out: {CONTACT_EMAIL}"),
            "color: #43e97b; font-size: 14px;",
        ),
    ];

    for (message, style) in lines {
        console::log_2(&JsValue::from_str(&message), &JsValue::from_str(style));
    }
}

/// Intersection observer watching a single element until it first enters the
/// viewport. Disconnects when dropped.
pub struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_enter` once, the first time `element` intersects the viewport.
/// `None` options use the browser's default threshold and margin.
pub fn observe_once(
    element: &Element,
    options: Option<RevealOptions>,
    mut on_enter: impl FnMut() + 'static,
) -> Option<Observation> {
    let mut latch = RevealLatch::default();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();

                if latch.observe(entry.is_intersecting()) {
                    observer.unobserve(&entry.target());
                    on_enter();
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    if let Some(options) = options {
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(element);

    Some(Observation {
        observer,
        _callback: callback,
    })
}
