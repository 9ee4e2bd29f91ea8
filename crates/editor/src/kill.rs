use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Shared flag to call off effects already handed to the async side,
/// for example when a newer navigation starts mid settle delay
#[derive(Debug, Clone, Default)]
pub struct Kill {
    stop: Arc<AtomicBool>,
}

impl Kill {
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::Release)
    }
}
