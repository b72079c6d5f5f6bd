//! A tiny actor kernel with deterministic, step-driven scheduling.
//!
//! ```
//! use tiny_step_actor::{Actor, ActorContext, ActorError, Kernel};
//!
//! struct Counter(u32);
//!
//! impl Actor<u32> for Counter {
//!     fn behave(&mut self, n: u32, ctx: &mut ActorContext<'_, u32>) -> Result<(), ActorError> {
//!         self.0 += n;
//!         if self.0 >= 3 {
//!             ctx.stop();
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut kernel = Kernel::<u32>::default();
//! let pid = kernel.spawn(|_pid, start| Ok(Counter(start)), 0).unwrap();
//! kernel.send(pid, 1);
//! kernel.send(pid, 2);
//! kernel.send(pid, 4);
//! assert_eq!(kernel.run(), 3);
//! assert!(!kernel.is_alive(pid));
//! ```

pub mod actor_system;
pub mod config;
pub mod ring;

pub use actor_system::{Actor, ActorContext, ActorError, EventBus, Kernel, KernelEvent, Message, Pid};
