use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
};

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

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

/// Registers (or finds) the counter called `name`
pub fn insert_counter(name: &'static str) -> Arc<Counter> {
    let mut counters = __COUNTERS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    counters.entry(name).or_default().clone()
}

pub fn report_counters() {
    let counters = __COUNTERS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let mut counters = counters.iter().collect::<Vec<_>>();
    counters.sort_by_key(|(name, _)| **name);
    for (counter_name, counter) in counters {
        log::info!(target: "counter_report", "{}: {}", counter_name, counter.value())
    }
}

lazy_static::lazy_static! {
    pub static ref __COUNTERS: Mutex<HashMap<&'static str, Arc<Counter>>> = Mutex::new(HashMap::new());
}

/// Increments the global counter `$descr`, reported by [report_counters]
#[macro_export]
macro_rules! counter {
    ($descr:literal) => {
        if cfg!(feature = "counter") {
            lazy_static::lazy_static! {
                static ref COUNTER_REF: std::sync::Arc<$crate::utils::counter::Counter> =
                    $crate::utils::counter::insert_counter($descr);
            }
            COUNTER_REF.inc();
        }
    };
}

#[cfg(test)]
mod tests {
    use super::insert_counter;

    #[test]
    #[cfg(feature = "counter")]
    fn counters_are_shared_by_name() {
        let a = insert_counter("test counter");
        let before = a.value();
        crate::counter!("test counter");
        crate::counter!("test counter");
        assert_eq!(insert_counter("test counter").value(), before + 2);
    }
}
