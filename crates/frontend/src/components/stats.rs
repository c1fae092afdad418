use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use meridian_shared::counter::{Counter, COUNTER_TICK_MS};

use crate::content;
use crate::observer;

/// Fraction of the presence section that must be visible to start counting.
const START_THRESHOLD: f64 = 0.3;

#[component]
pub fn StatsRow() -> Element {
    let counters = use_signal(|| {
        content::STATS
            .iter()
            .map(|stat| Counter::new(stat.target))
            .collect::<Vec<_>>()
    });
    let started = use_signal(|| false);

    // One-shot visibility trigger on the enclosing section.
    use_effect(move || {
        let mut started = started;
        observer::observe_once(content::PRESENCE_SECTION_ID, START_THRESHOLD, move || {
            if !*started.peek() {
                started.set(true);
            }
        });
    });

    // Animation loop, armed exactly once when the trigger fires. The
    // counters' own latch keeps a repeated trigger harmless.
    use_effect(move || {
        if !*started.read() {
            return;
        }
        let mut counters = counters;
        for counter in counters.write().iter_mut() {
            counter.start();
        }
        wasm_bindgen_futures::spawn_local(async move {
            loop {
                TimeoutFuture::new(COUNTER_TICK_MS).await;
                let mut all_done = true;
                {
                    let mut counters = counters.write();
                    for counter in counters.iter_mut() {
                        counter.tick();
                        if !counter.is_done() {
                            all_done = false;
                        }
                    }
                }
                if all_done {
                    break;
                }
            }
        });
    });

    let values: Vec<u32> = counters.read().iter().map(|c| c.value()).collect();

    rsx! {
        div { class: "stats-row",
            for (stat, value) in content::STATS.iter().zip(values) {
                div { class: "stat",
                    span { class: "stat-number", "{value}{stat.suffix}" }
                    span { class: "stat-label", "{stat.label}" }
                }
            }
        }
    }
}
