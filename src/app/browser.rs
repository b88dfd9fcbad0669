use std::{rc::Rc, time::Duration};

use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::viewport::{
    Clipboard, ClipboardError, ClipboardFuture, Environment, PointerHandler, Scheduler,
    ScrollHandler, Subscription, TimerHandle, Viewport,
};

pub fn environment() -> Environment {
    Environment {
        viewport: Rc::new(WindowViewport),
        scheduler: Rc::new(TimeoutScheduler),
        clipboard: Rc::new(NavigatorClipboard),
    }
}

struct WindowViewport;

impl Viewport for WindowViewport {
    fn on_scroll(&self, handler: ScrollHandler) -> Subscription {
        let stop = use_event_listener(use_window(), ev::scroll, move |_| {
            let offset = window().scroll_y().unwrap_or_default();
            handler(offset.round() as i32);
        });
        Subscription::new(stop)
    }

    fn on_pointer_move(&self, handler: PointerHandler) -> Subscription {
        let stop = use_event_listener(use_window(), ev::mousemove, move |e| {
            handler(e.client_x(), e.client_y());
        });
        Subscription::new(stop)
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(el) = document().get_element_by_id(id) else {
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}

struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        match set_timeout_with_handle(callback, delay) {
            Ok(handle) => TimerHandle::new(move || handle.clear()),
            Err(err) => {
                log::error!("couldn't schedule timeout: {err:?}");
                TimerHandle::new(|| {})
            }
        }
    }
}

struct NavigatorClipboard;

impl Clipboard for NavigatorClipboard {
    fn write_text(&self, text: &str) -> ClipboardFuture {
        let navigator = window().navigator();
        // undefined outside secure contexts
        let available = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map(|v| !v.is_undefined())
            .unwrap_or(false);
        if !available {
            return Box::pin(async { Err(ClipboardError::Unavailable) });
        }
        let promise = navigator.clipboard().write_text(text);
        Box::pin(async move {
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Denied(format!("{e:?}")))
        })
    }
}
