//! Kernel - registry, scheduling queue and the step loop.

use std::collections::{HashMap, VecDeque};

use tokio::sync::broadcast;

use crate::actor_system::actor::{
    Actor, ActorContext, ActorError, Effect, Message, Pid, PidAllocator, runner::ActorRecord,
};
use crate::actor_system::bus::{EventBus, KernelEvent};
use crate::config::KernelConfig;

/// Single-threaded actor kernel.
///
/// Every successful `send` enqueues exactly one scheduling entry, and every
/// `step` consumes exactly one, so the order of `behave` invocations is fully
/// determined by the order of `spawn` and `send` calls.
pub struct Kernel<M: Message> {
    name: String,
    registry: HashMap<Pid, ActorRecord<M>>,
    queue: VecDeque<Pid>,
    pids: PidAllocator,
    bus: EventBus,
}

impl<M: Message> Kernel<M> {
    pub fn new(config: KernelConfig) -> Self {
        log::debug!("Starting kernel '{}'", config.name);
        Kernel {
            name: config.name,
            registry: HashMap::new(),
            queue: VecDeque::new(),
            pids: PidAllocator::new(),
            bus: EventBus::new(config.event_capacity),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subscribe to kernel events.
    pub fn events(&self) -> broadcast::Receiver<KernelEvent> {
        self.bus.subscribe()
    }

    /// Allocate a PID, build the actor with `factory(pid, init)` and register it.
    ///
    /// A factory error is returned as is and nothing gets registered. The PID
    /// handed to the failed factory stays consumed.
    pub fn spawn<A, F, I>(&mut self, factory: F, init: I) -> Result<Pid, ActorError>
    where
        A: Actor<M>,
        F: FnOnce(Pid, I) -> Result<A, ActorError>,
    {
        let pid = self.pids.next();
        let actor = factory(pid, init).inspect_err(|error| {
            log::debug!("Actor {} failed to construct: {}", pid, error);
        })?;
        self.register(pid, Box::new(actor));
        Ok(pid)
    }

    /// Queue `message` for `to`. Messages to dead or unknown PIDs are dropped.
    pub fn send(&mut self, to: Pid, message: M) {
        match self.registry.get_mut(&to) {
            Some(record) => {
                log::trace!("Sending to actor {} message: {:?}", to, message);
                record.mailbox.push(message);
                self.queue.push_back(to);
            }
            None => {
                log::debug!("Dead letter to {}: {:?}", to, message);
                self.bus.publish(KernelEvent::DeadLetter { to });
            }
        }
    }

    /// Deliver one message.
    ///
    /// Returns `false` only when the scheduling queue is empty. An entry whose
    /// actor has died still counts as progress. Failures are contained only
    /// inside `behave`; applying its effects afterwards runs unguarded.
    pub fn step(&mut self) -> bool {
        let Some(pid) = self.queue.pop_front() else {
            return false;
        };

        let Some(record) = self.registry.get_mut(&pid) else {
            log::debug!("Skipping stale entry for dead actor {}", pid);
            return true;
        };

        let mut ctx = ActorContext::new(pid, &mut self.pids);
        let outcome = record.run_next(&mut ctx);
        let effects = ctx.into_effects();

        match outcome {
            Some(result) => {
                self.bus.publish(KernelEvent::Delivered { pid });
                self.apply(effects);
                if let Err(error) = result {
                    log::error!("Actor {} failed: {}", pid, error);
                    self.bus.publish(KernelEvent::Failed {
                        pid,
                        reason: error.to_string(),
                    });
                    self.kill(pid);
                }
            }
            None => log::warn!("Actor {} scheduled with an empty mailbox", pid),
        }
        true
    }

    /// Remove `pid` from the registry. Unknown or dead PIDs are ignored.
    pub fn kill(&mut self, pid: Pid) {
        if let Some(record) = self.registry.remove(&pid) {
            log::debug!(
                "Actor {} killed after {} of {} message(s), {} still pending",
                pid,
                record.mailbox.processed_count(),
                record.mailbox.enqueued_count(),
                record.mailbox.len()
            );
            self.bus.publish(KernelEvent::Killed { pid });
        }
    }

    /// Step until the scheduling queue is exhausted, returning the number of
    /// consumed entries.
    pub fn run(&mut self) -> usize {
        let mut steps = 0;
        while self.step() {
            steps += 1;
        }
        log::debug!("Kernel '{}' idle after {} step(s)", self.name, steps);
        steps
    }

    pub fn is_alive(&self, pid: Pid) -> bool {
        self.registry.contains_key(&pid)
    }

    pub fn live_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of scheduling entries not yet consumed, stale ones included.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn mailbox_len(&self, pid: Pid) -> Option<usize> {
        self.registry.get(&pid).map(|record| record.mailbox.len())
    }

    fn register(&mut self, pid: Pid, actor: Box<dyn Actor<M>>) {
        log::debug!("Spawned actor {}", pid);
        self.registry.insert(pid, ActorRecord::new(pid, actor));
        self.bus.publish(KernelEvent::Spawned { pid });
    }

    fn apply(&mut self, effects: Vec<Effect<M>>) {
        for effect in effects {
            match effect {
                Effect::Spawn(pid, actor) => self.register(pid, actor),
                Effect::Send(to, message) => self.send(to, message),
                Effect::Kill(pid) => self.kill(pid),
            }
        }
    }
}

impl<M: Message> Default for Kernel<M> {
    fn default() -> Self {
        Self::new(KernelConfig::default())
    }
}

impl<M: Message> std::fmt::Debug for Kernel<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kernel")
            .field("name", &self.name)
            .field("live", &self.registry.len())
            .field("pending", &self.queue.len())
            .field("issued", &self.pids.issued())
            .finish()
    }
}
