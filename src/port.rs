//! Typed outbound channel from the application to its host.
//!
//! A `Port<T>` is single-threaded: messages are delivered synchronously, in
//! send order, to every subscriber in subscription order. A send issued while
//! the port is already dispatching (from inside a handler) is queued and
//! delivered once the current message has been handled by everyone.
//!
//! The first handler error ends the dispatch tick. Messages still queued in
//! that tick are discarded and the error goes back to the outermost sender.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::error::{BridgeError, Result};

type Handler<T> = Box<dyn FnMut(&T) -> Result<()>>;

/// Handle returned by [`Port::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(u64);

struct PortInner<T> {
    name: String,
    handlers: RefCell<Vec<(Subscription, Handler<T>)>>,
    active: RefCell<BTreeSet<Subscription>>,
    queue: RefCell<VecDeque<T>>,
    dispatching: Cell<bool>,
    next_id: Cell<u64>,
}

pub struct Port<T> {
    inner: Rc<PortInner<T>>,
}

impl<T> Clone for Port<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Port<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Port")
            .field("name", &self.inner.name)
            .field("subscribers", &self.subscriber_count())
            .field("dispatching", &self.inner.dispatching.get())
            .finish()
    }
}

impl<T> Port<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(PortInner {
                name: name.into(),
                handlers: RefCell::new(Vec::new()),
                active: RefCell::new(BTreeSet::new()),
                queue: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.active.borrow().len()
    }

    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&T) -> Result<()> + 'static,
    {
        let id = Subscription(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.active.borrow_mut().insert(id);
        // During a dispatch the live list is checked out; anything pushed here
        // is merged back when the current message finishes.
        self.inner
            .handlers
            .borrow_mut()
            .push((id, Box::new(handler)));
        trace!("port {}: subscribed #{}", self.inner.name, id.0);
        id
    }

    /// Returns false if the subscription was not active.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let removed = self.inner.active.borrow_mut().remove(&subscription);
        if removed && !self.inner.dispatching.get() {
            self.inner
                .handlers
                .borrow_mut()
                .retain(|(id, _)| *id != subscription);
        }
        removed
    }

    /// Deliver `value` to all subscribers.
    ///
    /// With no subscribers the value is dropped.
    pub fn send(&self, value: T) -> Result<()> {
        self.inner.queue.borrow_mut().push_back(value);
        if self.inner.dispatching.get() {
            return Ok(());
        }

        self.inner.dispatching.set(true);
        let res = self.drain();
        self.inner.dispatching.set(false);
        res
    }

    /// Like [`Port::send`], but fails with `NoSubscriber` instead of
    /// dropping the value when nobody is listening.
    pub fn send_handled(&self, value: T) -> Result<()> {
        if self.subscriber_count() == 0 {
            return Err(BridgeError::NoSubscriber {
                port: self.inner.name.clone(),
            });
        }
        self.send(value)
    }

    fn drain(&self) -> Result<()> {
        loop {
            let Some(msg) = self.inner.queue.borrow_mut().pop_front() else {
                return Ok(());
            };

            let mut handlers = std::mem::take(&mut *self.inner.handlers.borrow_mut());
            if handlers.is_empty() {
                debug!("port {}: no subscribers, message dropped", self.inner.name);
            }

            let mut outcome = Ok(());
            for (id, handler) in handlers.iter_mut() {
                if !self.inner.active.borrow().contains(id) {
                    continue;
                }
                if let Err(e) = handler(&msg) {
                    outcome = Err(e);
                    break;
                }
            }

            {
                let mut slot = self.inner.handlers.borrow_mut();
                handlers.append(&mut slot);
                let active = self.inner.active.borrow();
                handlers.retain(|(id, _)| active.contains(id));
                *slot = handlers;
            }

            if let Err(e) = outcome {
                let dropped = {
                    let mut q = self.inner.queue.borrow_mut();
                    let n = q.len();
                    q.clear();
                    n
                };
                if dropped > 0 {
                    debug!(
                        "port {}: dispatch failed, discarding {} queued message(s)",
                        self.inner.name, dropped
                    );
                }
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(port: &Port<u32>) -> Rc<RefCell<Vec<u32>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        port.subscribe(move |v| {
            sink.borrow_mut().push(*v);
            Ok(())
        });
        seen
    }

    #[test]
    fn delivers_in_send_order() {
        let port = Port::new("numbers");
        let seen = recorder(&port);
        for v in [3, 1, 2] {
            port.send(v).unwrap();
        }
        assert_eq!(*seen.borrow(), vec![3, 1, 2]);
    }

    #[test]
    fn unsubscribed_port_drops_values() {
        let port = Port::new("numbers");
        port.send(7).unwrap();

        let seen = recorder(&port);
        port.send(8).unwrap();
        assert_eq!(*seen.borrow(), vec![8]);
    }

    #[test]
    fn handled_send_reports_missing_subscriber() {
        let port = Port::new("numbers");
        let err = port.send_handled(7).unwrap_err();
        assert!(matches!(err, BridgeError::NoSubscriber { ref port } if port == "numbers"));

        let seen = recorder(&port);
        port.send_handled(8).unwrap();
        assert_eq!(*seen.borrow(), vec![8]);
    }

    #[test]
    fn handlers_run_in_subscription_order() {
        let port = Port::new("numbers");
        let log = Rc::new(RefCell::new(Vec::new()));
        for tag in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            port.subscribe(move |_| {
                log.borrow_mut().push(tag);
                Ok(())
            });
        }
        port.send(0).unwrap();
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let port = Port::new("numbers");
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        let sub = port.subscribe(move |_| {
            *sink.borrow_mut() += 1;
            Ok(())
        });

        port.send(1).unwrap();
        assert!(port.unsubscribe(sub));
        assert!(!port.unsubscribe(sub));
        port.send(2).unwrap();

        assert_eq!(*seen.borrow(), 1);
        assert_eq!(port.subscriber_count(), 0);
    }

    #[test]
    fn reentrant_send_is_queued_after_current_message() {
        let port: Port<u32> = Port::new("numbers");
        let log = Rc::new(RefCell::new(Vec::new()));

        let echo = port.clone();
        let log_a = Rc::clone(&log);
        port.subscribe(move |v| {
            log_a.borrow_mut().push(format!("a{v}"));
            if *v == 1 {
                echo.send(2)?;
            }
            Ok(())
        });
        let log_b = Rc::clone(&log);
        port.subscribe(move |v| {
            log_b.borrow_mut().push(format!("b{v}"));
            Ok(())
        });

        port.send(1).unwrap();
        assert_eq!(*log.borrow(), vec!["a1", "b1", "a2", "b2"]);
    }

    #[test]
    fn subscribe_during_dispatch_takes_effect_next_message() {
        let port: Port<u32> = Port::new("numbers");
        let late = Rc::new(RefCell::new(Vec::new()));

        let handle = port.clone();
        let late_sink = Rc::clone(&late);
        let mut armed = true;
        port.subscribe(move |_| {
            if armed {
                armed = false;
                let sink = Rc::clone(&late_sink);
                handle.subscribe(move |v| {
                    sink.borrow_mut().push(*v);
                    Ok(())
                });
            }
            Ok(())
        });

        port.send(1).unwrap();
        port.send(2).unwrap();
        assert_eq!(*late.borrow(), vec![2]);
        assert_eq!(port.subscriber_count(), 2);
    }

    #[test]
    fn first_error_ends_the_tick() {
        let port: Port<u32> = Port::new("numbers");

        let echo = port.clone();
        port.subscribe(move |v| {
            if *v == 1 {
                echo.send(10)?;
                echo.send(11)?;
                return Err(BridgeError::ElementNotFound {
                    id: "gone".to_string(),
                });
            }
            Ok(())
        });
        let after = recorder(&port);

        let err = port.send(1).unwrap_err();
        assert!(matches!(err, BridgeError::ElementNotFound { ref id } if id == "gone"));
        // Neither the failing message nor the queued ones reached the second handler.
        assert!(after.borrow().is_empty());

        // The port keeps working for later ticks.
        port.send(5).unwrap();
        assert_eq!(*after.borrow(), vec![5]);
    }
}
