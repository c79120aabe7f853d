use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::context::PageLayout;
use crate::section::SectionId;
use crate::visibility::IntersectionSample;

pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0)
}

pub fn measure_layout() -> PageLayout {
    let Some(win) = window() else {
        return PageLayout::default();
    };
    let Some(document) = win.document() else {
        return PageLayout::default();
    };

    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);
    let document_height = document
        .document_element()
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(viewport_height);
    let section_tops = SectionId::ALL
        .into_iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id.as_str())?;
            Some((id, element.get_bounding_client_rect().top()))
        })
        .collect();

    PageLayout {
        document_height,
        viewport_height,
        section_tops,
    }
}

pub fn scroll_to_section(id: SectionId) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id.as_str()))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Passive listener on `window`, removed when the returned handle drops.
pub fn window_listener<F>(event: &'static str, callback: F) -> Option<EventListener>
where
    F: FnMut(&Event) + 'static,
{
    let options = EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: true,
    };
    Some(EventListener::new_with_options(
        &window()?,
        event,
        options,
        callback,
    ))
}

/// Elements carry their registry key in `data-reveal-key`. The handler
/// returns `true` once an element no longer needs watching.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn new<F>(threshold: f64, mut on_entry: F) -> Option<Self>
    where
        F: FnMut(&str, IntersectionSample) -> bool + 'static,
    {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let Some(key) = target.get_attribute(REVEAL_KEY_ATTR) else {
                        continue;
                    };
                    let sample = IntersectionSample {
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if on_entry(&key, sample) {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .ok()?;

        Some(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    pub fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
