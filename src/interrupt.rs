use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Ctrl-C state shared between the signal handler and the raw data pager.
///
/// While a [`PagingGuard`] is alive an interrupt only raises a flag that the
/// pager checks at its next page or prompt; at any other time it terminates
/// the process.
#[derive(Debug, Default)]
pub struct Interrupt {
    paging: AtomicBool,
    tripped: AtomicBool,
}

/// Exit status used when Ctrl-C ends the program.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

impl Interrupt {
    /// Register the process-wide Ctrl-C handler.
    ///
    /// # Errors
    /// If a handler is already installed or the platform refuses one.
    pub fn install() -> Result<Arc<Self>, ctrlc::Error> {
        let state = Arc::new(Self::default());
        let handler_state = Arc::clone(&state);
        ctrlc::set_handler(move || {
            if !handler_state.signal() {
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
        })?;
        Ok(state)
    }

    /// Record an interrupt. Returns `false` when no pager is running, in which
    /// case the caller should terminate.
    pub fn signal(&self) -> bool {
        if self.paging.load(Ordering::SeqCst) {
            self.tripped.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Consume a pending interrupt.
    pub fn take(&self) -> bool {
        self.tripped.swap(false, Ordering::SeqCst)
    }

    /// Mark the pager as running until the guard is dropped.
    pub fn paging(&self) -> PagingGuard<'_> {
        self.paging.store(true, Ordering::SeqCst);
        PagingGuard { state: self }
    }
}

#[derive(Debug)]
pub struct PagingGuard<'a> {
    state: &'a Interrupt,
}

impl Drop for PagingGuard<'_> {
    fn drop(&mut self) {
        self.state.paging.store(false, Ordering::SeqCst);
        self.state.tripped.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_is_only_absorbed_while_paging() {
        let i = Interrupt::default();
        assert!(!i.signal());
        assert!(!i.take());
        {
            let _guard = i.paging();
            assert!(i.signal());
            assert!(i.take());
            assert!(!i.take());
            assert!(i.signal());
        }
        // dropping the guard discards the pending interrupt
        assert!(!i.take());
    }
}
