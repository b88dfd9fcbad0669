use std::{
    cell::{Cell, RefCell},
    future::Future,
    pin::Pin,
    rc::Rc,
    time::Duration,
};

use thiserror::Error;

use crate::{motion, section::Section};

/// Delay between mount and the entrance transitions starting.
pub const LOADED_DELAY: Duration = Duration::from_millis(50);
/// How long the "copied" label stays up after a successful copy.
pub const EMAIL_COPIED_RESET: Duration = Duration::from_millis(2000);

pub type ScrollHandler = Rc<dyn Fn(i32)>;
pub type PointerHandler = Rc<dyn Fn(i32, i32)>;
pub type ClipboardFuture = Pin<Box<dyn Future<Output = Result<(), ClipboardError>>>>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is unavailable")]
    Unavailable,
    #[error("clipboard write was rejected: {0}")]
    Denied(String),
}

/// Ambient scroll/pointer streams plus the anchor lookup.
pub trait Viewport {
    fn on_scroll(&self, handler: ScrollHandler) -> Subscription;
    fn on_pointer_move(&self, handler: PointerHandler) -> Subscription;
    /// Returns false when no element carries `id`.
    fn scroll_into_view(&self, id: &str) -> bool;
}

pub trait Scheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> ClipboardFuture;
}

/// Deregisters a listener when dropped.
#[must_use]
pub struct Subscription(Option<Box<dyn FnOnce()>>);

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(cancel)))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}

/// Clears a pending timer when dropped.
#[must_use]
pub struct TimerHandle(Option<Box<dyn FnOnce()>>);

impl TimerHandle {
    pub fn new(clear: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(clear)))
    }

    /// Forget the handle without clearing; used once the timer has fired.
    fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportSnapshot {
    pub scroll_position: i32,
    pub pointer_position: PointerPosition,
    pub mounted: bool,
    pub loaded: bool,
    pub menu_open: bool,
    pub email_copied: bool,
}

impl ViewportSnapshot {
    pub fn parallax_offset(&self) -> f64 {
        motion::parallax_offset(self.scroll_position)
    }

    pub fn nav_bar_is_elevated(&self) -> bool {
        motion::nav_bar_is_elevated(self.scroll_position)
    }

    pub fn frame(&self) -> Frame {
        if self.mounted {
            Frame::Live(*self)
        } else {
            Frame::Placeholder
        }
    }
}

/// What the rendering layer is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Placeholder,
    Live(ViewportSnapshot),
}

/// The host primitives a controller runs against.
#[derive(Clone)]
pub struct Environment {
    pub viewport: Rc<dyn Viewport>,
    pub scheduler: Rc<dyn Scheduler>,
    pub clipboard: Rc<dyn Clipboard>,
}

type Observer = Box<dyn Fn(&ViewportSnapshot)>;

struct Inner {
    state: RefCell<ViewportSnapshot>,
    listeners: RefCell<Vec<Subscription>>,
    loaded_timer: RefCell<Option<TimerHandle>>,
    email_timer: RefCell<Option<TimerHandle>>,
    torn_down: Cell<bool>,
    observer: Option<Observer>,
}

impl Inner {
    fn update(&self, f: impl FnOnce(&mut ViewportSnapshot)) {
        if self.torn_down.get() {
            return;
        }
        let snapshot = {
            let mut state = self.state.borrow_mut();
            let before = *state;
            f(&mut state);
            if *state == before {
                return;
            }
            *state
        };
        if let Some(observer) = &self.observer {
            observer(&snapshot);
        }
    }
}

/// Per-page-view animation state fed by scroll and pointer input.
pub struct ViewportController {
    inner: Rc<Inner>,
    env: Environment,
}

impl ViewportController {
    pub fn new(env: Environment) -> Self {
        Self::build(env, None)
    }

    /// Like [`ViewportController::new`], but `observer` sees every snapshot change.
    pub fn with_observer(
        env: Environment,
        observer: impl Fn(&ViewportSnapshot) + 'static,
    ) -> Self {
        Self::build(env, Some(Box::new(observer)))
    }

    fn build(env: Environment, observer: Option<Observer>) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(ViewportSnapshot::default()),
                listeners: RefCell::new(Vec::new()),
                loaded_timer: RefCell::new(None),
                email_timer: RefCell::new(None),
                torn_down: Cell::new(false),
                observer,
            }),
            env,
        }
    }

    pub fn mount(&self) {
        if self.inner.torn_down.get() || self.inner.state.borrow().mounted {
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let on_scroll = self.env.viewport.on_scroll(Rc::new(move |offset| {
            if let Some(inner) = weak.upgrade() {
                inner.update(|s| s.scroll_position = offset.max(0));
            }
        }));
        let weak = Rc::downgrade(&self.inner);
        let on_pointer = self.env.viewport.on_pointer_move(Rc::new(move |x, y| {
            if let Some(inner) = weak.upgrade() {
                inner.update(|s| s.pointer_position = PointerPosition { x, y });
            }
        }));
        self.inner
            .listeners
            .borrow_mut()
            .extend([on_scroll, on_pointer]);

        self.inner.update(|s| s.mounted = true);
        log::debug!("viewport controller mounted");

        let weak = Rc::downgrade(&self.inner);
        let timer = self.env.scheduler.schedule(
            LOADED_DELAY,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    if let Some(handle) = inner.loaded_timer.borrow_mut().take() {
                        handle.disarm();
                    }
                    inner.update(|s| s.loaded = true);
                }
            }),
        );
        *self.inner.loaded_timer.borrow_mut() = Some(timer);
    }

    pub fn handle_scroll(&self, offset: i32) {
        self.inner.update(|s| s.scroll_position = offset.max(0));
    }

    pub fn handle_pointer_move(&self, x: i32, y: i32) {
        self.inner
            .update(|s| s.pointer_position = PointerPosition { x, y });
    }

    pub fn navigate_to_section(&self, section: Section) {
        if !self.inner.torn_down.get() && !self.env.viewport.scroll_into_view(section.id()) {
            log::trace!("no element for section #{}", section.id());
        }
        self.inner.update(|s| s.menu_open = false);
    }

    pub fn toggle_menu(&self) {
        self.inner.update(|s| s.menu_open = !s.menu_open);
    }

    /// Writes `address` to the clipboard. The returned future must be spawned,
    /// not awaited on the render path.
    pub fn copy_email_to_clipboard(
        &self,
        address: impl Into<String>,
    ) -> impl Future<Output = ()> + 'static {
        let address = address.into();
        let weak = Rc::downgrade(&self.inner);
        let clipboard = self.env.clipboard.clone();
        let scheduler = self.env.scheduler.clone();
        async move {
            let res = clipboard.write_text(&address).await;
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if inner.torn_down.get() {
                return;
            }
            match res {
                Ok(()) => {
                    inner.update(|s| s.email_copied = true);
                    let reset = Rc::downgrade(&inner);
                    let timer = scheduler.schedule(
                        EMAIL_COPIED_RESET,
                        Box::new(move || {
                            if let Some(inner) = reset.upgrade() {
                                if let Some(handle) = inner.email_timer.borrow_mut().take() {
                                    handle.disarm();
                                }
                                inner.update(|s| s.email_copied = false);
                            }
                        }),
                    );
                    // dropping the previous handle clears its timer
                    let prev = inner.email_timer.borrow_mut().replace(timer);
                    drop(prev);
                }
                Err(err) => {
                    log::error!("Failed to copy email: {err}");
                }
            }
        }
    }

    pub fn snapshot(&self) -> ViewportSnapshot {
        *self.inner.state.borrow()
    }

    pub fn frame(&self) -> Frame {
        self.snapshot().frame()
    }

    pub fn is_torn_down(&self) -> bool {
        self.inner.torn_down.get()
    }

    pub fn teardown(&self) {
        if self.inner.torn_down.replace(true) {
            return;
        }
        let listeners = std::mem::take(&mut *self.inner.listeners.borrow_mut());
        drop(listeners);
        let loaded = self.inner.loaded_timer.borrow_mut().take();
        drop(loaded);
        let email = self.inner.email_timer.borrow_mut().take();
        drop(email);
        log::debug!("viewport controller torn down");
    }
}

impl Drop for ViewportController {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct FakeViewport {
        scroll: RefCell<BTreeMap<usize, ScrollHandler>>,
        pointer: RefCell<BTreeMap<usize, PointerHandler>>,
        next_id: Cell<usize>,
        anchors: Vec<&'static str>,
        scrolled_to: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        fn with_anchors(anchors: &[&'static str]) -> Rc<Self> {
            Rc::new(Self {
                anchors: anchors.to_vec(),
                ..Default::default()
            })
        }

        fn emit_scroll(&self, offset: i32) {
            let handlers = self.scroll.borrow().values().cloned().collect::<Vec<_>>();
            handlers.iter().for_each(|h| h(offset));
        }

        fn emit_pointer(&self, x: i32, y: i32) {
            let handlers = self.pointer.borrow().values().cloned().collect::<Vec<_>>();
            handlers.iter().for_each(|h| h(x, y));
        }

        fn listener_count(&self) -> usize {
            self.scroll.borrow().len() + self.pointer.borrow().len()
        }

        fn id(&self) -> usize {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            id
        }
    }

    // Subscriptions remove themselves through a weak handle to the fake
    struct Shared(Rc<FakeViewport>);

    impl Viewport for Shared {
        fn on_scroll(&self, handler: ScrollHandler) -> Subscription {
            let id = self.0.id();
            self.0.scroll.borrow_mut().insert(id, handler);
            let weak = Rc::downgrade(&self.0);
            Subscription::new(move || {
                if let Some(vp) = weak.upgrade() {
                    vp.scroll.borrow_mut().remove(&id);
                }
            })
        }

        fn on_pointer_move(&self, handler: PointerHandler) -> Subscription {
            let id = self.0.id();
            self.0.pointer.borrow_mut().insert(id, handler);
            let weak = Rc::downgrade(&self.0);
            Subscription::new(move || {
                if let Some(vp) = weak.upgrade() {
                    vp.pointer.borrow_mut().remove(&id);
                }
            })
        }

        fn scroll_into_view(&self, id: &str) -> bool {
            self.0.scrolled_to.borrow_mut().push(id.to_string());
            self.0.anchors.contains(&id)
        }
    }

    type Pending = BTreeMap<usize, (u64, Box<dyn FnOnce()>)>;

    /// Manual clock; callbacks only run from `advance`.
    #[derive(Default)]
    struct FakeScheduler {
        now: Cell<u64>,
        next_id: Cell<usize>,
        pending: Rc<RefCell<Pending>>,
    }

    impl FakeScheduler {
        fn advance(&self, ms: u64) {
            let target = self.now.get() + ms;
            loop {
                let due = self
                    .pending
                    .borrow()
                    .iter()
                    .filter(|(_, (at, _))| *at <= target)
                    .min_by_key(|(id, (at, _))| (*at, **id))
                    .map(|(id, (at, _))| (*id, *at));
                let Some((id, at)) = due else {
                    break;
                };
                let (_, callback) = self
                    .pending
                    .borrow_mut()
                    .remove(&id)
                    .expect("due timer should be pending");
                self.now.set(at);
                callback();
            }
            self.now.set(target);
        }

        fn pending_count(&self) -> usize {
            self.pending.borrow().len()
        }
    }

    impl Scheduler for FakeScheduler {
        fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let at = self.now.get() + delay.as_millis() as u64;
            self.pending.borrow_mut().insert(id, (at, callback));
            let pending = Rc::downgrade(&self.pending);
            TimerHandle::new(move || {
                if let Some(pending) = pending.upgrade() {
                    pending.borrow_mut().remove(&id);
                }
            })
        }
    }

    struct FakeClipboard {
        result: RefCell<Result<(), ClipboardError>>,
        written: RefCell<Vec<String>>,
    }

    impl FakeClipboard {
        fn new(result: Result<(), ClipboardError>) -> Rc<Self> {
            Rc::new(Self {
                result: RefCell::new(result),
                written: RefCell::new(Vec::new()),
            })
        }
    }

    impl Clipboard for Rc<FakeClipboard> {
        fn write_text(&self, text: &str) -> ClipboardFuture {
            self.written.borrow_mut().push(text.to_string());
            let res = self.result.borrow().clone();
            Box::pin(async move { res })
        }
    }

    struct Harness {
        viewport: Rc<FakeViewport>,
        scheduler: Rc<FakeScheduler>,
        clipboard: Rc<FakeClipboard>,
        controller: ViewportController,
    }

    fn harness(clipboard: Result<(), ClipboardError>) -> Harness {
        let viewport = FakeViewport::with_anchors(&["about", "work", "skills", "contact"]);
        let scheduler = Rc::new(FakeScheduler::default());
        let clipboard = FakeClipboard::new(clipboard);
        let env = Environment {
            viewport: Rc::new(Shared(viewport.clone())),
            scheduler: scheduler.clone(),
            clipboard: Rc::new(clipboard.clone()),
        };
        Harness {
            viewport,
            scheduler,
            clipboard,
            controller: ViewportController::new(env),
        }
    }

    const EMAIL: &str = "hello@example.com";

    #[test]
    fn test_placeholder_until_mounted() {
        let h = harness(Ok(()));
        h.controller.handle_scroll(300);
        h.controller.handle_pointer_move(10, 20);
        h.controller.toggle_menu();
        assert_eq!(h.controller.frame(), Frame::Placeholder);

        h.controller.mount();
        match h.controller.frame() {
            Frame::Live(s) => {
                assert_eq!(s.scroll_position, 300);
                assert!(s.menu_open);
            }
            Frame::Placeholder => panic!("mounted controller should be live"),
        }
    }

    #[test]
    fn test_mount_registers_listeners_once() {
        let h = harness(Ok(()));
        h.controller.mount();
        h.controller.mount();
        assert_eq!(h.viewport.listener_count(), 2);
        assert_eq!(h.scheduler.pending_count(), 1);
    }

    #[test]
    fn test_loaded_latch_after_delay() {
        let h = harness(Ok(()));
        h.controller.mount();
        assert!(h.controller.snapshot().mounted);
        assert!(!h.controller.snapshot().loaded);

        h.scheduler.advance(LOADED_DELAY.as_millis() as u64 - 1);
        assert!(!h.controller.snapshot().loaded);
        h.scheduler.advance(1);
        assert!(h.controller.snapshot().loaded);

        // nothing resets it
        h.viewport.emit_scroll(0);
        h.scheduler.advance(10_000);
        assert!(h.controller.snapshot().loaded);
    }

    #[test]
    fn test_ambient_input_updates_state() {
        let h = harness(Ok(()));
        h.controller.mount();
        h.viewport.emit_scroll(120);
        h.viewport.emit_pointer(640, 360);

        let s = h.controller.snapshot();
        assert_eq!(s.scroll_position, 120);
        assert_eq!(s.pointer_position, PointerPosition { x: 640, y: 360 });
        assert_eq!(s.parallax_offset(), 60.0);
        assert!(s.nav_bar_is_elevated());
    }

    #[test]
    fn test_negative_scroll_clamped() {
        let h = harness(Ok(()));
        h.controller.mount();
        h.viewport.emit_scroll(-40);
        assert_eq!(h.controller.snapshot().scroll_position, 0);
    }

    #[test]
    fn test_nav_elevation_boundary() {
        let h = harness(Ok(()));
        h.controller.mount();
        h.viewport.emit_scroll(50);
        assert!(!h.controller.snapshot().nav_bar_is_elevated());
        h.viewport.emit_scroll(51);
        assert!(h.controller.snapshot().nav_bar_is_elevated());
    }

    #[test]
    fn test_toggle_menu_twice_restores() {
        let h = harness(Ok(()));
        h.controller.mount();
        let before = h.controller.snapshot().menu_open;
        h.controller.toggle_menu();
        assert_ne!(h.controller.snapshot().menu_open, before);
        h.controller.toggle_menu();
        assert_eq!(h.controller.snapshot().menu_open, before);
    }

    #[test]
    fn test_navigate_closes_menu() {
        let h = harness(Ok(()));
        h.controller.mount();
        h.controller.toggle_menu();
        h.controller.navigate_to_section(Section::Work);
        assert!(!h.controller.snapshot().menu_open);
        assert_eq!(*h.viewport.scrolled_to.borrow(), vec!["work".to_string()]);
    }

    #[test]
    fn test_navigate_missing_target_still_closes_menu() {
        let viewport = FakeViewport::with_anchors(&[]);
        let scheduler = Rc::new(FakeScheduler::default());
        let env = Environment {
            viewport: Rc::new(Shared(viewport.clone())),
            scheduler,
            clipboard: Rc::new(FakeClipboard::new(Ok(()))),
        };
        let controller = ViewportController::new(env);
        controller.mount();
        controller.toggle_menu();
        controller.navigate_to_section(Section::Contact);
        assert!(!controller.snapshot().menu_open);

        // already closed stays closed
        controller.navigate_to_section(Section::About);
        assert!(!controller.snapshot().menu_open);
    }

    #[tokio::test]
    async fn test_copy_email_success_resets_after_window() {
        let h = harness(Ok(()));
        h.controller.mount();
        h.controller.copy_email_to_clipboard(EMAIL).await;

        assert_eq!(*h.clipboard.written.borrow(), vec![EMAIL.to_string()]);
        assert!(h.controller.snapshot().email_copied);

        h.scheduler.advance(1999);
        assert!(h.controller.snapshot().email_copied);
        h.scheduler.advance(1);
        assert!(!h.controller.snapshot().email_copied);
    }

    #[tokio::test]
    async fn test_copy_email_failure_leaves_flag_clear() {
        let h = harness(Err(ClipboardError::Denied("NotAllowedError".into())));
        h.controller.mount();
        h.controller.copy_email_to_clipboard(EMAIL).await;

        assert!(!h.controller.snapshot().email_copied);
        h.scheduler.advance(5000);
        assert!(!h.controller.snapshot().email_copied);
    }

    #[tokio::test]
    async fn test_second_copy_restarts_reset_window() {
        let h = harness(Ok(()));
        h.controller.mount();
        h.scheduler.advance(LOADED_DELAY.as_millis() as u64);

        h.controller.copy_email_to_clipboard(EMAIL).await;
        h.scheduler.advance(1500);
        h.controller.copy_email_to_clipboard(EMAIL).await;

        // the first reset would have fired here
        h.scheduler.advance(1000);
        assert!(h.controller.snapshot().email_copied);
        assert_eq!(h.scheduler.pending_count(), 1);

        h.scheduler.advance(1000);
        assert!(!h.controller.snapshot().email_copied);
    }

    #[tokio::test]
    async fn test_teardown_cancels_reset_timer() {
        let h = harness(Ok(()));
        h.controller.mount();
        h.controller.copy_email_to_clipboard(EMAIL).await;
        assert_eq!(h.scheduler.pending_count(), 2);

        h.controller.teardown();
        assert_eq!(h.scheduler.pending_count(), 0);
    }

    #[tokio::test]
    async fn test_copy_result_after_teardown_ignored() {
        let h = harness(Ok(()));
        h.controller.mount();
        let pending = h.controller.copy_email_to_clipboard(EMAIL);
        h.controller.teardown();
        pending.await;

        assert!(!h.controller.snapshot().email_copied);
        assert_eq!(h.scheduler.pending_count(), 0);
    }

    #[test]
    fn test_teardown_removes_listeners() {
        let h = harness(Ok(()));
        h.controller.mount();
        h.viewport.emit_scroll(10);
        h.viewport.emit_pointer(1, 2);
        let before = h.controller.snapshot();

        h.controller.teardown();
        assert_eq!(h.viewport.listener_count(), 0);
        assert!(h.controller.is_torn_down());

        h.viewport.emit_scroll(900);
        h.viewport.emit_pointer(300, 400);
        h.scheduler.advance(10_000);
        assert_eq!(h.controller.snapshot(), before);
    }

    #[test]
    fn test_drop_tears_down() {
        let h = harness(Ok(()));
        h.controller.mount();
        let Harness {
            viewport,
            scheduler,
            controller,
            ..
        } = h;
        drop(controller);
        assert_eq!(viewport.listener_count(), 0);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_observer_sees_changes() {
        let viewport = FakeViewport::with_anchors(&["about"]);
        let seen = Rc::new(RefCell::new(Vec::<ViewportSnapshot>::new()));
        let env = Environment {
            viewport: Rc::new(Shared(viewport.clone())),
            scheduler: Rc::new(FakeScheduler::default()),
            clipboard: Rc::new(FakeClipboard::new(Ok(()))),
        };
        let sink = seen.clone();
        let controller =
            ViewportController::with_observer(env, move |s| sink.borrow_mut().push(*s));
        controller.mount();
        viewport.emit_scroll(75);
        // unchanged value is not re-published
        viewport.emit_scroll(75);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].mounted);
        assert_eq!(seen[1].scroll_position, 75);
    }
}
