//! User interruption handling
//!
//! Ctrl+C raises a shared flag instead of killing the process; the runner
//! polls it between steps and while pausing, so an interrupted run can still
//! print its farewell and exit with a distinct code.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{DemoError, Result};

/// Longest stretch a pause sleeps before looking at the flag again
const POLL_SLICE: Duration = Duration::from_millis(25);

/// Process-wide interruption flag
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    raised: Arc<AtomicBool>,
}

impl Interrupt {
    /// Create a flag with no signal hook attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a flag raised by Ctrl+C. Only one hook may exist per process.
    pub fn install() -> std::result::Result<Self, ctrlc::Error> {
        let interrupt = Self::new();
        let r = interrupt.raised.clone();

        ctrlc::set_handler(move || {
            r.store(true, Ordering::SeqCst);
        })?;

        Ok(interrupt)
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Lower the flag, returning whether it was raised
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::SeqCst)
    }

    /// Fail with `DemoError::Interrupted` if the flag is up
    pub fn checkpoint(&self) -> Result<()> {
        if self.is_raised() {
            Err(DemoError::Interrupted)
        } else {
            Ok(())
        }
    }

    /// Sleep for `duration`, waking early if the flag goes up
    pub fn sleep(&self, duration: Duration) -> Result<()> {
        let deadline = Instant::now() + duration;

        loop {
            self.checkpoint()?;

            let now = Instant::now();
            if now >= deadline {
                return Ok(());
            }
            std::thread::sleep((deadline - now).min(POLL_SLICE));
        }
    }
}
