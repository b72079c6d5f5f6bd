//! Actor module - core actor types and traits.

pub(crate) mod handler;
pub(crate) mod runner;

use thiserror::Error;

mod pid;
pub use pid::Pid;
pub(crate) use pid::PidAllocator;

/// Anything that can travel through a mailbox.
pub trait Message: std::fmt::Debug + 'static {}

impl<T: std::fmt::Debug + 'static> Message for T {}

/// Basic trait for actors.
///
/// `behave` runs to completion for every delivered message. It must not
/// block; all interaction with other actors goes through the context.
pub trait Actor<M: Message>: 'static {
    fn behave(&mut self, message: M, ctx: &mut ActorContext<'_, M>) -> Result<(), ActorError>;
}

/// A side effect requested by an actor while it was behaving.
pub(crate) enum Effect<M: Message> {
    Spawn(Pid, Box<dyn Actor<M>>),
    Send(Pid, M),
    Kill(Pid),
}

/// Restricted kernel handle given to a running actor.
///
/// Requests are recorded in order and applied by the kernel as soon as
/// `behave` returns, even when it returns an error or panics.
pub struct ActorContext<'k, M: Message> {
    pid: Pid,
    pids: &'k mut PidAllocator,
    effects: Vec<Effect<M>>,
}

impl<'k, M: Message> ActorContext<'k, M> {
    pub(crate) fn new(pid: Pid, pids: &'k mut PidAllocator) -> Self {
        ActorContext {
            pid,
            pids,
            effects: Vec::new(),
        }
    }

    /// The PID of the actor currently behaving.
    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// Fire and forget sending of a message. Messages to dead actors are dropped.
    pub fn send(&mut self, to: Pid, message: M) {
        self.effects.push(Effect::Send(to, message));
    }

    /// Kill an actor. Killing a dead or unknown PID does nothing.
    pub fn kill(&mut self, pid: Pid) {
        self.effects.push(Effect::Kill(pid));
    }

    /// Kill the actor currently behaving once this invocation returns.
    pub fn stop(&mut self) {
        self.kill(self.pid);
    }

    /// Spawn a new actor. The PID is usable right away for `send` and `kill`.
    ///
    /// A construction failure is returned to the calling actor.
    pub fn spawn<A, F, I>(&mut self, factory: F, init: I) -> Result<Pid, ActorError>
    where
        A: Actor<M>,
        F: FnOnce(Pid, I) -> Result<A, ActorError>,
    {
        let pid = self.pids.next();
        let actor = factory(pid, init)?;
        self.effects.push(Effect::Spawn(pid, Box::new(actor)));
        Ok(pid)
    }

    pub(crate) fn into_effects(self) -> Vec<Effect<M>> {
        self.effects
    }
}

impl<M: Message> std::fmt::Debug for ActorContext<'_, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActorContext")
            .field("pid", &self.pid)
            .field("pending_effects", &self.effects.len())
            .finish()
    }
}

#[derive(Error, Debug)]
pub enum ActorError {
    #[error("Actor creation failed: {0}")]
    CreateError(String),

    #[error("Actor panicked: {0}")]
    Panicked(String),

    #[error("Actor runtime error: {0}")]
    RuntimeError(anyhow::Error),
}

impl ActorError {
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::RuntimeError(anyhow::Error::new(error))
    }
}

impl From<anyhow::Error> for ActorError {
    fn from(error: anyhow::Error) -> Self {
        Self::RuntimeError(error)
    }
}
