//! Actor record - one registered actor and its mailbox.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::{Actor, ActorContext, ActorError, Message, Pid, handler::Mailbox};

pub(crate) struct ActorRecord<M: Message> {
    pid: Pid,
    actor: Box<dyn Actor<M>>,
    pub(crate) mailbox: Mailbox<M>,
}

impl<M: Message> ActorRecord<M> {
    pub fn new(pid: Pid, actor: Box<dyn Actor<M>>) -> Self {
        ActorRecord {
            pid,
            actor,
            mailbox: Mailbox::new(),
        }
    }

    /// Pop the oldest message and let the actor behave on it.
    ///
    /// Returns `None` when the mailbox is empty. An error returned by the
    /// actor and a panic raised by it are both reported as `Err`.
    pub fn run_next(&mut self, ctx: &mut ActorContext<'_, M>) -> Option<Result<(), ActorError>> {
        let message = self.mailbox.pop()?;
        log::trace!("Actor {} behaving on {:?}", self.pid, message);

        let actor = &mut self.actor;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| actor.behave(message, ctx)));

        Some(match outcome {
            Ok(result) => result,
            Err(payload) => Err(ActorError::Panicked(panic_reason(payload.as_ref()))),
        })
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(reason) = payload.downcast_ref::<&str>() {
        reason.to_string()
    } else if let Some(reason) = payload.downcast_ref::<String>() {
        reason.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
