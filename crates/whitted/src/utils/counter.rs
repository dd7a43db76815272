//! Global named counters, reported at the end of a render.
//!
//! Counting is compiled in only with the `counter` feature.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
};

#[derive(Default)]
pub struct Counter {
    atomic: AtomicU64,
}

impl Counter {
    pub const fn new() -> Self {
        Self {
            atomic: AtomicU64::new(0),
        }
    }
    pub fn inc(&self) {
        self.atomic.fetch_add(1, Ordering::Relaxed); // Adding one is associative and commutative
    }
    pub fn value(&self) -> u64 {
        self.atomic.load(Ordering::Acquire)
    }
}

/// Logs every counter registered so far, sorted by name
pub fn report_counters() {
    let Ok(counters) = __COUNTERS.lock() else {
        log::warn!("counters are poisoned, skipping report");
        return;
    };
    let mut counters = counters.iter().collect::<Vec<_>>();
    counters.sort_by_key(|(name, _)| **name);
    for (counter_name, counter) in counters {
        log::log!(target: "counter_report", log::Level::Info, "{}: {}", counter_name, counter.value())
    }
}

/// Value of the counter named `descr`, if it has been hit at least once
pub fn counter_value(descr: &str) -> Option<u64> {
    __COUNTERS.lock().ok()?.get(descr).map(|c| c.value())
}

lazy_static::lazy_static! {
    pub static ref __COUNTERS: Mutex<HashMap<&'static str, Arc<Counter>>> = Mutex::new(HashMap::new());
}

pub fn insert_counter(descr: &'static str) -> Arc<Counter> {
    let mut counters = __COUNTERS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    counters
        .entry(descr)
        .or_insert_with(|| Arc::new(Counter::new()))
        .clone()
}

#[macro_export]
macro_rules! counter {
    ($descr:literal) => {
        if cfg!(feature = "counter") {
            use $crate::utils::counter::{insert_counter, lazy_static, Counter};
            lazy_static::lazy_static! {
                static ref COUNTER_REF: std::sync::Arc<Counter> = insert_counter($descr);
            }
            COUNTER_REF.inc();
        }
    };
}

pub use crate::counter;
// Reexport for ease of use
pub use lazy_static;
