use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use reactive_graph::owner::Owner;
use state::options::ModalOptions;
use web_time::Duration;

use crate::host::ModalHost;
use crate::scheduler::CloseScheduler;

type Pending = Vec<(Duration, Box<dyn FnOnce() + Send>)>;

/// Holds callbacks until the test fires them. `cancel` is only counted, so
/// a test can still fire a callback the host tried to cancel.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    pending: Arc<Mutex<Pending>>,
    pub cancels: Arc<AtomicUsize>,
}

impl CloseScheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, on_elapsed: Box<dyn FnOnce() + Send>) -> bool {
        self.pending.lock().unwrap().push((delay, on_elapsed));
        true
    }

    fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }
}

impl ManualScheduler {
    pub fn delays(&self) -> Vec<Duration> {
        self.pending.lock().unwrap().iter().map(|(d, _)| *d).collect()
    }

    pub fn fire_all(&self) {
        let due: Pending = self.pending.lock().unwrap().drain(..).collect();
        for (_, on_elapsed) in due {
            on_elapsed();
        }
    }
}

pub fn manual_host_with(options: ModalOptions) -> (Owner, ModalHost, ManualScheduler) {
    let owner = Owner::new();
    owner.set();
    let scheduler = ManualScheduler::default();
    let host = ModalHost::with_scheduler(options, scheduler.clone());
    (owner, host, scheduler)
}

pub fn manual_host() -> (Owner, ModalHost, ManualScheduler) {
    manual_host_with(ModalOptions::default())
}
