//! Debounce timers
//!
//! A timer delivers `Msg::Toolbar(RecomputeReady { generation })` back to the
//! controller once the delay has elapsed. Arming replaces any previous
//! wakeup; superseded or cancelled generations that still arrive are
//! discarded by the debounce bookkeeping.

use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::messages::{Msg, ToolbarMsg};

pub trait Timer {
    /// Deliver `RecomputeReady { generation }` on `tx` after `delay`
    fn arm(&mut self, generation: u64, delay: Duration, tx: &Sender<Msg>);

    /// Drop the pending wakeup, if the timer can
    fn disarm(&mut self);
}

fn ready(generation: u64) -> Msg {
    Msg::Toolbar(ToolbarMsg::RecomputeReady { generation })
}

/// Sleeps on a background thread, then posts to the message channel
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadTimer;

impl Timer for ThreadTimer {
    fn arm(&mut self, generation: u64, delay: Duration, tx: &Sender<Msg>) {
        let tx = tx.clone();
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            // Receiver gone means the controller was dropped
            let _ = tx.send(ready(generation));
        });
    }

    fn disarm(&mut self) {
        // Sleeping threads can't be interrupted; their generation is stale.
    }
}

#[derive(Debug)]
struct Pending {
    generation: u64,
    remaining: Duration,
    tx: Sender<Msg>,
}

/// Timer driven by explicit [`ManualTimer::advance`] calls
#[derive(Debug, Default)]
pub struct ManualTimer {
    pending: Option<Pending>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Let `elapsed` pass, firing the pending wakeup if it is due
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        if pending.remaining > elapsed {
            pending.remaining -= elapsed;
            return false;
        }

        match self.pending.take() {
            Some(pending) => pending.tx.send(ready(pending.generation)).is_ok(),
            None => false,
        }
    }
}

impl Timer for ManualTimer {
    fn arm(&mut self, generation: u64, delay: Duration, tx: &Sender<Msg>) {
        self.pending = Some(Pending {
            generation,
            remaining: delay,
            tx: tx.clone(),
        });
    }

    fn disarm(&mut self) {
        self.pending = None;
    }
}
