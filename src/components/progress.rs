//! Cosmetic upload progress bar.
//!
//! The bar is a pure UI placebo: a fixed-rate timer walks it forward while
//! the request is in flight, and the settled outcome snaps it to 100% or
//! back to 0%. It says nothing about bytes actually transferred.

use gloo_timers::callback::Interval;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::config::PROGRESS_TICK_MS;
use crate::types::ProgressMeter;

#[component]
pub fn ProgressSection(percent: ReadSignal<u8>, shown: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div
            class="progress-bar-container"
            id="progressBarContainer"
            style:display=move || if shown.get() { "block" } else { "none" }
        >
            <div
                class="progress-bar"
                id="progressBar"
                style:width=move || format!("{}%", percent.get())
            ></div>
        </div>
    }
}

/// Repeating task that animates the bar until cancelled.
///
/// The interval lives in a slot shared with its own callback, so whichever
/// side terminates first (the bar reaching the cap, or the request settling)
/// takes it out and stops the timer; the other side then finds the slot
/// empty. [`Interval`] clears the underlying browser timer on drop.
pub struct ProgressTicker {
    interval: Rc<Cell<Option<Interval>>>,
    meter: Rc<Cell<ProgressMeter>>,
    set_percent: WriteSignal<u8>,
}

impl ProgressTicker {
    /// Reset the bar to 0% and start ticking every [`PROGRESS_TICK_MS`] ms.
    pub fn start(set_percent: WriteSignal<u8>) -> Self {
        let meter = Rc::new(Cell::new(ProgressMeter::idle()));
        set_percent.set(meter.get().percent());

        let interval: Rc<Cell<Option<Interval>>> = Rc::new(Cell::new(None));
        let tick_interval = Rc::clone(&interval);
        let tick_meter = Rc::clone(&meter);
        interval.set(Some(Interval::new(PROGRESS_TICK_MS, move || {
            let mut current = tick_meter.get();
            if current.is_full() {
                // la barre est pleine: le timer s'arrête tout seul
                drop(tick_interval.take());
                return;
            }
            current.tick();
            tick_meter.set(current);
            set_percent.set(current.percent());
        })));

        Self {
            interval,
            meter,
            set_percent,
        }
    }

    /// Successful settle: stop the animation and snap to 100%.
    pub fn finish(self) {
        self.stop();
        let mut meter = self.meter.get();
        self.set_percent.set(meter.complete());
        self.meter.set(meter);
    }

    /// Failed settle: stop the animation and snap back to 0%.
    pub fn cancel(self) {
        self.stop();
        let mut meter = self.meter.get();
        self.set_percent.set(meter.reset());
        self.meter.set(meter);
    }

    fn stop(&self) {
        // at most one side ever finds the interval in the slot
        drop(self.interval.take());
    }
}
