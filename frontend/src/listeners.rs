use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};

/// Something event listeners can be registered on.
pub trait ListenerHost: Clone + 'static {
    type Event;
    type Handle;

    fn attach(&self, event: &'static str, handler: Box<dyn FnMut(&Self::Event)>) -> Option<Self::Handle>;
    fn detach(&self, event: &'static str, handle: &Self::Handle);
    fn inner_width(&self) -> Option<f64>;
}

/// The browser's `window`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserWindow;

impl ListenerHost for BrowserWindow {
    type Event = Event;
    type Handle = Closure<dyn FnMut(Event)>;

    fn attach(&self, event: &'static str, mut handler: Box<dyn FnMut(&Event)>) -> Option<Self::Handle> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(move |e: Event| handler(&e)) as Box<dyn FnMut(Event)>);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(callback)
    }

    fn detach(&self, event: &'static str, handle: &Self::Handle) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(event, handle.as_ref().unchecked_ref());
        }
    }

    fn inner_width(&self) -> Option<f64> {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
}

/// A listener registered on a host for as long as this value lives.
///
/// Effects hold one of these and drop it in their destructor, so a listener
/// is removed on every way out of its scope, unmount included.
pub struct Listener<H: ListenerHost> {
    host: H,
    event: &'static str,
    handle: H::Handle,
}

pub type WindowListener = Listener<BrowserWindow>;

impl<H: ListenerHost> Listener<H> {
    /// Returns `None` when the host refuses the registration.
    pub fn attach<F>(host: H, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(&H::Event) + 'static,
    {
        let handle = host.attach(event, Box::new(handler))?;
        Some(Self { host, event, handle })
    }

    /// Calls `handler` with the host's inner width on every resize.
    pub fn resize_on<F>(host: H, mut handler: F) -> Option<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let source = host.clone();
        Self::attach(host, "resize", move |_| {
            if let Some(width) = source.inner_width() {
                handler(width);
            }
        })
    }
}

impl Listener<BrowserWindow> {
    pub fn keydown<F>(mut handler: F) -> Option<Self>
    where
        F: FnMut(&KeyboardEvent) + 'static,
    {
        Self::attach(BrowserWindow, "keydown", move |event: &Event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                handler(event);
            }
        })
    }

    pub fn resize<F>(handler: F) -> Option<Self>
    where
        F: FnMut(f64) + 'static,
    {
        Self::resize_on(BrowserWindow, handler)
    }
}

impl<H: ListenerHost> Drop for Listener<H> {
    fn drop(&mut self) {
        self.host.detach(self.event, &self.handle);
    }
}

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl Key {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "Escape" | "Esc" => Some(Key::Escape),
            _ => None,
        }
    }

    pub fn of(event: &KeyboardEvent) -> Option<Self> {
        Self::from_key(&event.key())
    }
}

/// In-memory host that records registrations and fires events on demand.
#[cfg(test)]
pub(crate) mod test_host {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::ListenerHost;

    type Handler = Rc<RefCell<Box<dyn FnMut(&())>>>;

    #[derive(Default)]
    struct Registry {
        width: Option<f64>,
        next_id: usize,
        attached: Vec<&'static str>,
        live: Vec<(usize, &'static str, Handler)>,
    }

    #[derive(Clone, Default)]
    pub(crate) struct TestHost {
        registry: Rc<RefCell<Registry>>,
    }

    impl TestHost {
        pub(crate) fn with_width(width: f64) -> Self {
            let host = Self::default();
            host.set_width(width);
            host
        }

        pub(crate) fn set_width(&self, width: f64) {
            self.registry.borrow_mut().width = Some(width);
        }

        /// Listeners for `event` currently registered.
        pub(crate) fn live(&self, event: &str) -> usize {
            self.registry.borrow().live.iter().filter(|(_, e, _)| *e == event).count()
        }

        /// Registrations for `event` ever made.
        pub(crate) fn attached(&self, event: &str) -> usize {
            self.registry.borrow().attached.iter().filter(|e| **e == event).count()
        }

        pub(crate) fn fire(&self, event: &str) {
            let handlers: Vec<Handler> = self
                .registry
                .borrow()
                .live
                .iter()
                .filter(|(_, e, _)| *e == event)
                .map(|(_, _, handler)| handler.clone())
                .collect();
            for handler in handlers {
                let mut handler = handler.borrow_mut();
                (*handler)(&());
            }
        }
    }

    impl ListenerHost for TestHost {
        type Event = ();
        type Handle = usize;

        fn attach(&self, event: &'static str, handler: Box<dyn FnMut(&())>) -> Option<usize> {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.attached.push(event);
            registry.live.push((id, event, Rc::new(RefCell::new(handler))));
            Some(id)
        }

        fn detach(&self, _event: &'static str, handle: &usize) {
            self.registry.borrow_mut().live.retain(|(id, _, _)| id != handle);
        }

        fn inner_width(&self) -> Option<f64> {
            self.registry.borrow().width
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::test_host::TestHost;
    use super::*;

    #[test]
    fn maps_navigation_keys() {
        assert_eq!(Key::from_key("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_key("ArrowRight"), Some(Key::ArrowRight));
        assert_eq!(Key::from_key("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_key("Esc"), Some(Key::Escape));
    }

    #[test]
    fn ignores_other_keys() {
        assert_eq!(Key::from_key("Enter"), None);
        assert_eq!(Key::from_key("a"), None);
        assert_eq!(Key::from_key("arrowleft"), None);
    }

    #[test]
    fn dropping_the_guard_unregisters() {
        let host = TestHost::default();
        let calls = Rc::new(Cell::new(0));
        let listener = {
            let calls = calls.clone();
            Listener::attach(host.clone(), "scroll", move |_| calls.set(calls.get() + 1))
        };
        assert!(listener.is_some());
        host.fire("scroll");
        assert_eq!(host.live("scroll"), 1);

        drop(listener);
        host.fire("scroll");
        assert_eq!(host.live("scroll"), 0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn resize_reports_current_width() {
        let host = TestHost::with_width(1024.0);
        let seen = Rc::new(Cell::new(0.0));
        let _listener = {
            let seen = seen.clone();
            Listener::resize_on(host.clone(), move |width| seen.set(width))
        };
        host.set_width(640.0);
        host.fire("resize");
        assert_eq!(seen.get(), 640.0);
        host.fire("keydown");
        assert_eq!(seen.get(), 640.0);
    }
}
