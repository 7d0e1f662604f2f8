use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, error};

use super::history::{BrowserHistory, HistoryBackend, NavigationError, TraverseListener};
use super::route::{parse_path, Route};

type Listener = Rc<dyn Fn(&Route)>;

struct Inner {
    backend: Rc<dyn HistoryBackend>,
    listeners: RefCell<Vec<(usize, Listener)>>,
    next_id: Cell<usize>,
    traversal: RefCell<Option<TraverseListener>>,
}

/// Dispatches navigation and publishes route changes to subscribers.
///
/// Programmatic navigation publishes directly on the subscriber list after
/// the history push; back/forward traversal reaches the same list through a
/// single listener on the backend. Clones share the same channel.
#[derive(Clone)]
pub struct Navigator {
    inner: Rc<Inner>,
}

impl PartialEq for Navigator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

thread_local! {
    static GLOBAL: RefCell<Option<Navigator>> = RefCell::new(None);
}

impl Navigator {
    pub fn new(backend: Rc<dyn HistoryBackend>) -> Self {
        Self {
            inner: Rc::new(Inner {
                backend,
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                traversal: RefCell::new(None),
            }),
        }
    }

    /// The process-wide navigator over `window.history`.
    pub fn global() -> Navigator {
        GLOBAL.with(|cell| {
            cell.borrow_mut()
                .get_or_insert_with(|| Navigator::new(Rc::new(BrowserHistory)))
                .clone()
        })
    }

    pub fn current_path(&self) -> String {
        self.inner.backend.pathname()
    }

    pub fn current_route(&self) -> Route {
        parse_path(&self.current_path())
    }

    /// Pushes `path` onto history and publishes the new route.
    ///
    /// Returns `Ok(false)` without touching history when `path` is already
    /// the current path and carries no `#fragment`. Paths with a fragment
    /// always push so in-page anchors keep working.
    pub fn navigate(&self, path: &str) -> Result<bool, NavigationError> {
        if self.current_path() == path && !path.contains('#') {
            debug!("Already at {}, skipping navigation", path);
            return Ok(false);
        }

        self.inner.backend.push(path)?;
        debug!("Navigated to {}", path);
        self.publish();
        Ok(true)
    }

    /// Registers `listener` for every published route change.
    pub fn subscribe(&self, listener: impl Fn(&Route) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let listener: Listener = Rc::new(listener);
        self.inner.listeners.borrow_mut().push((id, listener));
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Subscribes to route changes from both navigation and history
    /// traversal. Safe to call from any number of observers.
    pub fn observe(&self, listener: impl Fn(&Route) + 'static) -> Result<Subscription, NavigationError> {
        self.listen_for_traversal()?;
        Ok(self.subscribe(listener))
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn listen_for_traversal(&self) -> Result<(), NavigationError> {
        if self.inner.traversal.borrow().is_some() {
            return Ok(());
        }

        let weak = Rc::downgrade(&self.inner);
        let listener = self.inner.backend.on_traverse(Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                Navigator { inner }.publish();
            }
        }))?;
        *self.inner.traversal.borrow_mut() = Some(listener);
        debug!("Installed history traversal listener");
        Ok(())
    }

    fn publish(&self) {
        let route = self.current_route();
        let snapshot: Vec<(usize, Listener)> = self.inner.listeners.borrow().clone();
        for (id, listener) in snapshot {
            // an earlier listener may have unsubscribed this one
            let still_subscribed = self.inner.listeners.borrow().iter().any(|(other, _)| *other == id);
            if still_subscribed {
                listener(&route);
            }
        }
    }
}

/// Keeps a route listener registered; dropping it unsubscribes.
pub struct Subscription {
    inner: Weak<Inner>,
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Navigates and logs instead of returning failures, for use from event handlers.
pub fn navigate_or_log(navigator: &Navigator, path: &str) {
    if let Err(e) = navigator.navigate(path) {
        error!("Navigation to {} failed: {}", path, e);
    }
}
