// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::{
    cell::Cell,
    io::{IoSlice, IoSliceMut},
};

use log::trace;
use nix::{
    sys::uio::{process_vm_readv, process_vm_writev, RemoteIoVec},
    unistd::Pid,
};

use super::{Host, MachineContext};

/// A live Linux process. Memory goes through `process_vm_readv(2)` and
/// `process_vm_writev(2)`; registers are whatever the tracer last handed
/// over with [`ProcessHost::set_mc`].
#[derive(Debug)]
pub struct ProcessHost {
    pid: Pid,
    mc: Cell<MachineContext>,
}

impl ProcessHost {
    pub fn new(pid: u32) -> Self {
        ProcessHost {
            pid: Pid::from_raw(pid as i32),
            mc: Cell::new(MachineContext::default()),
        }
    }

    pub fn set_mc(&self, mc: MachineContext) {
        self.mc.set(mc);
    }
}

impl Host for ProcessHost {
    fn machine_context(&self) -> MachineContext {
        self.mc.get()
    }

    fn safe_read(&self, addr: u64, buf: &mut [u8]) -> bool {
        if buf.is_empty() {
            return true;
        }
        let len = buf.len();
        let remote = [RemoteIoVec {
            base: addr as usize,
            len,
        }];
        match process_vm_readv(self.pid, &mut [IoSliceMut::new(buf)], &remote) {
            Ok(n) => n == len,
            Err(e) => {
                trace!("read of {len} bytes at {addr:#x} failed: {e}");
                false
            }
        }
    }

    fn safe_write(&self, addr: u64, buf: &[u8]) -> bool {
        if buf.is_empty() {
            return true;
        }
        let remote = [RemoteIoVec {
            base: addr as usize,
            len: buf.len(),
        }];
        match process_vm_writev(self.pid, &[IoSlice::new(buf)], &remote) {
            Ok(n) => n == buf.len(),
            Err(e) => {
                trace!("write of {} bytes at {addr:#x} failed: {e}", buf.len());
                false
            }
        }
    }

    fn pid(&self) -> u32 {
        self.pid.as_raw() as u32
    }

    fn sem_count(&self, semid: i32) -> Option<u32> {
        let mut ds: libc::semid_ds = unsafe { std::mem::zeroed() };
        let ret = unsafe { libc::semctl(semid, 0, libc::IPC_STAT, &mut ds as *mut libc::semid_ds) };
        if ret < 0 {
            return None;
        }
        Some(ds.sem_nsems as u32)
    }
}
