/// Wall-clock milliseconds: `Date.now()` in the browser, a monotonic clock
/// natively.
#[cfg(target_arch = "wasm32")]
#[inline]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Section timer. Only ever constructed while perf metrics are on, so a
/// disabled tick never reads the clock.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start_ms: f64,
}

impl PerfTimer {
    /// Start timing when `enabled`, otherwise `None`.
    #[inline]
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        enabled.then(|| PerfTimer { start_ms: now_ms() })
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        now_ms() - self.start_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_timer_is_never_created() {
        assert!(PerfTimer::start_if(false).is_none());
    }

    #[test]
    fn elapsed_is_non_negative() {
        let timer = PerfTimer::start_if(true).unwrap();
        assert!(timer.elapsed_ms() >= 0.0);
    }
}
