//! Request tickets and abort handles for superseded fetches.
//!
//! DESIGN
//! ======
//! Every list refresh and history load takes a `Ticket` from a `Latest`
//! counter before it starts. When the response lands, it only touches the UI
//! if its ticket is still the newest one issued, so a slow early fetch cannot
//! overwrite a fast later one. The previous fetch is also aborted through its
//! `AbortHandle` so the browser drops the connection.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

/// Opaque sequence number identifying one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Issues tickets and remembers which one is newest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Latest {
    issued: u64,
}

impl Latest {
    /// Issue a new ticket, invalidating every earlier one.
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Whether `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }
}

/// Cancellation handle for one in-flight fetch.
///
/// Outside the browser this is inert; aborting is then a no-op.
#[derive(Debug, Default)]
pub struct AbortHandle {
    #[cfg(feature = "hydrate")]
    controller: Option<web_sys::AbortController>,
}

impl AbortHandle {
    pub fn new() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self { controller: web_sys::AbortController::new().ok() }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {}
        }
    }

    pub fn abort(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }

    #[cfg(feature = "hydrate")]
    pub(crate) fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.controller.as_ref().map(web_sys::AbortController::signal)
    }
}

/// Holds the abort handle of the single fetch allowed in flight for one
/// purpose (list refresh, history load).
#[derive(Debug, Default)]
pub struct InFlight {
    current: Option<std::rc::Rc<AbortHandle>>,
}

impl InFlight {
    /// Abort whatever is in flight and register a fresh handle for the next
    /// request.
    pub fn replace(&mut self) -> std::rc::Rc<AbortHandle> {
        if let Some(previous) = self.current.take() {
            previous.abort();
        }
        let handle = std::rc::Rc::new(AbortHandle::new());
        self.current = Some(std::rc::Rc::clone(&handle));
        handle
    }

    /// Abort the in-flight request, if any.
    pub fn cancel(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}
