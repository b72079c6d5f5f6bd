//! Tiny step actor - a cooperative, single-threaded actor kernel.
//!
//! Actors are addressed by [`Pid`], own a FIFO mailbox and are driven one
//! message at a time by [`Kernel::step`]. A failing actor is killed and
//! reported on the [`EventBus`]; the rest of the system keeps running.

mod actor;
mod bus;
mod system;

pub use actor::{Actor, ActorContext, ActorError, Message, Pid};

pub use bus::{EventBus, KernelEvent};
pub use system::Kernel;
