//! Cancellable one-second ticker for interactive callers.
//!
//! The session engine itself is caller-ticked; this helper owns the
//! cadence for frontends that want wall-clock ticks. Cancelling (or
//! dropping the receiver) stops the thread, so no orphaned ticker
//! outlives the session it drives.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct Countdown {
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Countdown {
    /// Spawn a ticker that sends a clone of `tick` on `tx` every second
    /// until cancelled or the receiver hangs up.
    pub fn start<T>(tx: Sender<T>, tick: T) -> Self
    where
        T: Clone + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let handle = thread::spawn(move || loop {
            thread::sleep(Duration::from_secs(1));
            if flag.load(Ordering::Relaxed) || tx.send(tick.clone()).is_err() {
                break;
            }
        });
        Self {
            cancelled,
            handle: Some(handle),
        }
    }

    /// Stop ticking and wait for the thread to exit.
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        // Signal only; the thread exits within one tick on its own.
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn ticks_arrive_until_cancelled() {
        let (tx, rx) = mpsc::channel();
        let mut countdown = Countdown::start(tx, ());
        assert!(rx.recv_timeout(Duration::from_secs(3)).is_ok());
        countdown.cancel();
        // After cancel the sender side is done; the channel drains and closes.
        while rx.recv_timeout(Duration::from_millis(1500)).is_ok() {}
    }

    #[test]
    fn receiver_hangup_stops_the_ticker() {
        let (tx, rx) = mpsc::channel::<()>();
        let mut countdown = Countdown::start(tx, ());
        drop(rx);
        // Must not hang: the thread notices the hangup on its next send.
        countdown.cancel();
    }
}
