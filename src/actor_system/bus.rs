//! Event bus - observability side channel of the kernel.

use tokio::sync::broadcast;

use crate::actor_system::actor::Pid;

/// Lifecycle and delivery events published by the kernel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KernelEvent {
    Spawned { pid: Pid },
    Delivered { pid: Pid },
    DeadLetter { to: Pid },
    Failed { pid: Pid, reason: String },
    Killed { pid: Pid },
}

/// Broadcast bus for [`KernelEvent`]s.
///
/// Publishing never blocks and never fails; without subscribers events are
/// simply dropped. Subscribers that fall behind lose the oldest events.
#[derive(Clone, Debug)]
pub struct EventBus {
    sender: broadcast::Sender<KernelEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        EventBus { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<KernelEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: KernelEvent) {
        if self.sender.receiver_count() > 0 && self.sender.send(event).is_err() {
            log::trace!("Event dropped, all subscribers are gone");
        }
    }
}
