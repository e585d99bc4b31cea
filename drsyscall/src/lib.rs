// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! System call metadata and argument introspection.
//!
//! Given a call number and the registers of the thread making it, the
//! engine tells which parameters point at memory, how big those regions are
//! and whether the kernel reads or writes them. Tables cover Linux and
//! Windows; the running process is reached through the [`Host`] trait.

use std::sync::{
    atomic::{AtomicI32, Ordering},
    Arc, Mutex,
};

use log::debug;

mod arg;
mod engine;
mod error;
pub mod formatting;
mod host;
mod index;
mod interp;
mod iter;
mod options;
mod os;
mod state;
mod syscall;
pub mod sysnum_file;
mod unknown;
mod walk;

#[cfg(test)]
mod tests;

pub use arg::{Arg, Location};
pub use drsyscall_common::{ParamMode, ParamType, Personality};
pub use engine::{Engine, SyscallResult};
pub use error::{DrsysError, InitStatus, Result};
#[cfg(target_os = "linux")]
pub use host::ProcessHost;
pub use host::{FakeHost, Host, MachineContext};
pub use options::{Options, Os};
pub use state::ThreadState;
pub use syscall::{Syscall, SyscallType, Sysnum};
pub use walk::Callback;

static ENGINE: Mutex<Option<(Arc<Engine>, InitStatus)>> = Mutex::new(None);
static REFCOUNT: AtomicI32 = AtomicI32::new(0);

/// Takes a reference on the process-wide engine, building it on first use.
/// Later calls get the same engine whatever options they pass.
pub fn init(options: Options, host: &dyn Host) -> Result<(Arc<Engine>, InitStatus)> {
    let mut engine = ENGINE.lock().unwrap_or_else(|e| e.into_inner());
    if let Some((engine, status)) = engine.as_ref() {
        REFCOUNT.fetch_add(1, Ordering::SeqCst);
        return Ok((engine.clone(), *status));
    }

    let (built, status) = Engine::new(options, host)?;
    let built = Arc::new(built);
    debug!("engine initialized: {built:?} ({status:?})");
    *engine = Some((built.clone(), status));
    REFCOUNT.fetch_add(1, Ordering::SeqCst);
    Ok((built, status))
}

/// Drops a reference taken by [`init`]. The last one tears the engine down;
/// clones of the `Arc` handed out stay usable until dropped.
pub fn exit() -> Result<()> {
    let mut engine = ENGINE.lock().unwrap_or_else(|e| e.into_inner());
    if REFCOUNT.load(Ordering::SeqCst) <= 0 {
        return Err(DrsysError::InvalidCall);
    }
    if REFCOUNT.fetch_sub(1, Ordering::SeqCst) == 1 {
        debug!("last reference gone, tearing down the engine");
        *engine = None;
    }
    Ok(())
}
