//! Ring of actors - a chain of forwarders ending in a terminal actor.
//!
//! Each link adds one to the value it receives, forwards it to the actor
//! spawned before it and stops. The terminal actor keeps the value it finally
//! receives and stops as well, leaving the kernel idle.

use std::cell::Cell;
use std::rc::Rc;

use crate::actor_system::{Actor, ActorContext, ActorError, Kernel, Pid};

/// Forwards `value + 1` to `target`, then stops.
pub struct RingLink {
    target: Pid,
}

impl Actor<u64> for RingLink {
    fn behave(&mut self, value: u64, ctx: &mut ActorContext<'_, u64>) -> Result<(), ActorError> {
        let next = value
            .checked_add(1)
            .ok_or_else(|| anyhow::anyhow!("ring value overflowed at {}", ctx.pid()))?;
        ctx.send(self.target, next);
        ctx.stop();
        Ok(())
    }
}

/// Stores the value it receives, then stops.
pub struct RingEnd {
    result: Rc<Cell<Option<u64>>>,
}

impl Actor<u64> for RingEnd {
    fn behave(&mut self, value: u64, ctx: &mut ActorContext<'_, u64>) -> Result<(), ActorError> {
        log::info!("Ring end {} received {}", ctx.pid(), value);
        self.result.set(Some(value));
        ctx.stop();
        Ok(())
    }
}

/// Handles to a spawned ring.
#[derive(Debug)]
pub struct Ring {
    pub end: Pid,
    pub head: Pid,
    result: Rc<Cell<Option<u64>>>,
}

impl Ring {
    /// Spawn the terminal actor followed by `links` forwarders, each one
    /// targeting the actor spawned just before it.
    pub fn spawn(kernel: &mut Kernel<u64>, links: usize) -> Result<Self, ActorError> {
        let result = Rc::new(Cell::new(None));
        let end = kernel.spawn(
            |_pid, result| Ok(RingEnd { result }),
            Rc::clone(&result),
        )?;

        let mut head = end;
        for _ in 0..links {
            head = kernel.spawn(|_pid, target| Ok(RingLink { target }), head)?;
        }

        Ok(Ring { end, head, result })
    }

    /// Kick the ring off by sending the terminal actor's own PID to the head.
    pub fn start(&self, kernel: &mut Kernel<u64>) {
        kernel.send(self.head, self.end.get());
    }

    /// Value received by the terminal actor, once it has run.
    pub fn result(&self) -> Option<u64> {
        self.result.get()
    }
}
