//! # System Lifecycle
//!
//! Starting, wiring and stopping the counter.
//!
//! 1. **Startup** - [`CounterSystem::new`] creates the queue actor and its client
//!    and spawns the actor's loop.
//! 2. **Use** - callers clone [`CounterSystem::queue_client`] freely; every clone
//!    talks to the same actor.
//! 3. **Shutdown** - [`CounterSystem::shutdown`] drops the client, which closes the
//!    channel once every clone is gone, then awaits the actor task.
//!
//! [`setup_tracing`] initializes logging and is called once by the binary.

pub mod counter_system;
pub mod tracing;

pub use counter_system::*;
pub use self::tracing::setup_tracing;
