use std::any::Any;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Window};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("no browser window available")]
    NoWindow,
    #[error("pushing {url} onto history failed: {reason}")]
    Push { url: String, reason: String },
    #[error("could not listen for history traversal: {0}")]
    Listen(String),
}

/// The URL/history surface the navigator drives.
pub trait HistoryBackend {
    /// Current path, without query string or fragment.
    fn pathname(&self) -> String;

    /// Pushes a new entry. Does not notify anyone.
    fn push(&self, url: &str) -> Result<(), NavigationError>;

    /// Calls `callback` whenever the user traverses history (back/forward).
    /// The callback stays registered for as long as the returned listener lives.
    fn on_traverse(&self, callback: Rc<dyn Fn()>) -> Result<TraverseListener, NavigationError>;
}

/// Keeps a traversal callback registered; dropping it unregisters.
pub struct TraverseListener {
    _guard: Box<dyn Any>,
}

impl TraverseListener {
    pub fn new(guard: impl Any) -> Self {
        Self {
            _guard: Box::new(guard),
        }
    }
}

/// `window.history` backed implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserHistory;

struct PopStateGuard {
    window: Window,
    closure: Closure<dyn FnMut()>,
}

impl Drop for PopStateGuard {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("popstate", self.closure.as_ref().unchecked_ref());
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl HistoryBackend for BrowserHistory {
    fn pathname(&self) -> String {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn push(&self, url: &str) -> Result<(), NavigationError> {
        let window = window().ok_or(NavigationError::NoWindow)?;
        let to_error = |err: JsValue| NavigationError::Push {
            url: url.to_string(),
            reason: describe(err),
        };
        let history = window.history().map_err(to_error)?;
        history
            .push_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(to_error)
    }

    fn on_traverse(&self, callback: Rc<dyn Fn()>) -> Result<TraverseListener, NavigationError> {
        let window = window().ok_or(NavigationError::NoWindow)?;
        let closure = Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            .map_err(|err| NavigationError::Listen(describe(err)))?;
        Ok(TraverseListener::new(PopStateGuard { window, closure }))
    }
}

#[cfg(test)]
pub use memory::MemoryHistory;

#[cfg(test)]
mod memory {
    use super::*;
    use std::cell::{Cell, RefCell};

    type Callbacks = Rc<RefCell<Vec<(usize, Rc<dyn Fn()>)>>>;

    /// In-process history stack standing in for the browser in tests.
    pub struct MemoryHistory {
        entries: RefCell<Vec<String>>,
        index: Cell<usize>,
        callbacks: Callbacks,
        next_id: Cell<usize>,
        refuse_pushes: Cell<bool>,
    }

    struct Unregister {
        callbacks: Callbacks,
        id: usize,
    }

    impl Drop for Unregister {
        fn drop(&mut self) {
            self.callbacks.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }

    impl MemoryHistory {
        pub fn new(initial: &str) -> Self {
            Self {
                entries: RefCell::new(vec![initial.to_string()]),
                index: Cell::new(0),
                callbacks: Rc::new(RefCell::new(Vec::new())),
                next_id: Cell::new(0),
                refuse_pushes: Cell::new(false),
            }
        }

        pub fn len(&self) -> usize {
            self.entries.borrow().len()
        }

        pub fn current_url(&self) -> String {
            self.entries.borrow()[self.index.get()].clone()
        }

        pub fn traverse_listeners(&self) -> usize {
            self.callbacks.borrow().len()
        }

        pub fn refuse_pushes(&self, refuse: bool) {
            self.refuse_pushes.set(refuse);
        }

        pub fn back(&self) {
            let index = self.index.get();
            if index > 0 {
                self.index.set(index - 1);
                self.fire();
            }
        }

        pub fn forward(&self) {
            let index = self.index.get();
            if index + 1 < self.len() {
                self.index.set(index + 1);
                self.fire();
            }
        }

        fn fire(&self) {
            let callbacks: Vec<_> = self.callbacks.borrow().iter().map(|(_, cb)| cb.clone()).collect();
            for callback in callbacks {
                callback();
            }
        }
    }

    impl HistoryBackend for MemoryHistory {
        fn pathname(&self) -> String {
            let url = self.current_url();
            let end = url.find(|c: char| c == '?' || c == '#').unwrap_or(url.len());
            url[..end].to_string()
        }

        fn push(&self, url: &str) -> Result<(), NavigationError> {
            if self.refuse_pushes.get() {
                return Err(NavigationError::Push {
                    url: url.to_string(),
                    reason: "refused".to_string(),
                });
            }
            let mut entries = self.entries.borrow_mut();
            entries.truncate(self.index.get() + 1);
            entries.push(url.to_string());
            self.index.set(entries.len() - 1);
            Ok(())
        }

        fn on_traverse(&self, callback: Rc<dyn Fn()>) -> Result<TraverseListener, NavigationError> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.callbacks.borrow_mut().push((id, callback));
            Ok(TraverseListener::new(Unregister {
                callbacks: self.callbacks.clone(),
                id,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn memory_pathname_drops_query_and_fragment() {
        let history = MemoryHistory::new("/");
        history.push("/pricing?plan=pro#faq").unwrap();
        assert_eq!(history.pathname(), "/pricing");
        assert_eq!(history.current_url(), "/pricing?plan=pro#faq");
    }

    #[test]
    fn push_after_back_discards_forward_entries() {
        let history = MemoryHistory::new("/");
        history.push("/pricing").unwrap();
        history.push("/features/ai").unwrap();
        history.back();
        history.back();
        history.push("/features/qr-menu").unwrap();
        assert_eq!(history.len(), 2);
        history.forward();
        assert_eq!(history.pathname(), "/features/qr-menu");
    }

    #[test]
    fn dropping_listener_unregisters_callback() {
        let history = MemoryHistory::new("/");
        history.push("/pricing").unwrap();
        let fired = Rc::new(Cell::new(0));
        let listener = {
            let fired = fired.clone();
            history
                .on_traverse(Rc::new(move || fired.set(fired.get() + 1)))
                .unwrap()
        };
        history.back();
        assert_eq!(fired.get(), 1);

        drop(listener);
        assert_eq!(history.traverse_listeners(), 0);
        history.forward();
        assert_eq!(fired.get(), 1);
    }
}
