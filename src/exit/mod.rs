//! Interrupt handling and process exit
//!
//! OS interrupts reach the exit handler over an explicit shutdown
//! channel, and the handler loop runs on a thread whose handle the
//! caller retains. The exiter function is injected so tests can observe
//! exits without terminating the test process.

use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Exit code reported when an interrupt terminates the process.
pub const INTERRUPT_EXIT_CODE: i32 = 130;

/// A received OS interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupt;

type Exiter = Box<dyn Fn(i32) + Send + Sync>;
type Cleanup = Box<dyn FnOnce() + Send>;

/// Runs registered cleanups and terminates the process through the
/// injected exiter.
pub struct ExitHandler {
    exiter: Exiter,
    requested_code: Mutex<Option<i32>>,
    cleanups: Mutex<Vec<Cleanup>>,
}

impl ExitHandler {
    pub fn new(exiter: Exiter) -> Self {
        ExitHandler {
            exiter,
            requested_code: Mutex::new(None),
            cleanups: Mutex::new(Vec::new()),
        }
    }

    /// Register a cleanup to run before exit. Cleanups run LIFO.
    pub fn on_exit(&self, cleanup: Cleanup) {
        self.cleanups
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(cleanup);
    }

    /// Record the code an interrupt-triggered exit should use instead of
    /// the default.
    pub fn set_exit_code(&self, code: i32) {
        *self
            .requested_code
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(code);
    }

    /// Run cleanups, then exit with `code`.
    pub fn exit(&self, code: i32) {
        let cleanups: Vec<Cleanup> = self
            .cleanups
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .drain(..)
            .collect();
        for cleanup in cleanups.into_iter().rev() {
            cleanup();
        }
        (self.exiter)(code);
    }

    /// Block on the shutdown channel until an interrupt arrives, then
    /// exit. The channel closing without an interrupt ends the loop
    /// quietly, which is how the process winds the listener down on a
    /// normal exit.
    pub fn run(&self, signals: Receiver<Interrupt>) {
        if signals.recv().is_ok() {
            debug!("interrupt received, shutting down");
            let code = self
                .requested_code
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .unwrap_or(INTERRUPT_EXIT_CODE);
            self.exit(code);
        }
    }
}

/// Run the handler loop on its own thread. The caller keeps the handle
/// for the life of the process.
pub fn spawn_listener(handler: Arc<ExitHandler>, signals: Receiver<Interrupt>) -> JoinHandle<()> {
    thread::spawn(move || handler.run(signals))
}
