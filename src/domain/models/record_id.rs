use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Millisecond-timestamp id for expenses, incomes and goals.
///
/// Ids are strictly increasing within one process: when two records are created
/// in the same millisecond the later one is bumped forward. Separate processes
/// writing to the same store can still collide.
pub fn next_record_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ISSUED.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_ISSUED.compare_exchange_weak(last, candidate, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return candidate.to_string(),
            Err(actual) => last = actual,
        }
    }
}
