// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, HashMap},
};

use super::{Host, MachineContext};

/// An in-memory stand-in for a traced process: a sparse byte map plus a
/// settable register snapshot. Unmapped bytes fail to read.
#[derive(Debug, Default)]
pub struct FakeHost {
    pid: u32,
    memory: RefCell<BTreeMap<u64, u8>>,
    mc: Cell<MachineContext>,
    sems: HashMap<i32, u32>,
    wrappers: HashMap<String, i32>,
}

impl FakeHost {
    pub fn new(pid: u32) -> Self {
        FakeHost {
            pid,
            ..Default::default()
        }
    }

    pub fn map(&self, addr: u64, bytes: &[u8]) {
        let mut memory = self.memory.borrow_mut();
        for (i, b) in bytes.iter().enumerate() {
            memory.insert(addr + i as u64, *b);
        }
    }

    /// Maps `len` zero bytes.
    pub fn map_zeroed(&self, addr: u64, len: usize) {
        self.map(addr, &vec![0; len]);
    }

    pub fn unmap(&self, addr: u64, len: usize) {
        let mut memory = self.memory.borrow_mut();
        for a in addr..addr + len as u64 {
            memory.remove(&a);
        }
    }

    pub fn put_u16(&self, addr: u64, v: u16) {
        self.map(addr, &v.to_le_bytes());
    }

    pub fn put_u32(&self, addr: u64, v: u32) {
        self.map(addr, &v.to_le_bytes());
    }

    pub fn put_u64(&self, addr: u64, v: u64) {
        self.map(addr, &v.to_le_bytes());
    }

    /// Writes a pointer-sized value.
    pub fn put_word(&self, addr: u64, v: u64, ptr_size: usize) {
        self.map(addr, &v.to_le_bytes()[..ptr_size]);
    }

    pub fn bytes(&self, addr: u64, len: usize) -> Option<Vec<u8>> {
        let mut buf = vec![0; len];
        self.safe_read(addr, &mut buf).then_some(buf)
    }

    pub fn set_mc(&self, mc: MachineContext) {
        self.mc.set(mc);
    }

    pub fn set_args(&self, args: &[u64]) {
        let mut mc = self.mc.get();
        mc.args = [0; 6];
        mc.args[..args.len()].copy_from_slice(args);
        self.mc.set(mc);
    }

    pub fn set_result(&self, result: u64) {
        let mut mc = self.mc.get();
        mc.result = result;
        self.mc.set(mc);
    }

    pub fn with_sem_count(mut self, semid: i32, count: u32) -> Self {
        self.sems.insert(semid, count);
        self
    }

    pub fn with_wrapper_number(mut self, name: &str, num: i32) -> Self {
        self.wrappers.insert(name.to_string(), num);
        self
    }
}

impl Host for FakeHost {
    fn machine_context(&self) -> MachineContext {
        self.mc.get()
    }

    fn safe_read(&self, addr: u64, buf: &mut [u8]) -> bool {
        let memory = self.memory.borrow();
        for (i, b) in buf.iter_mut().enumerate() {
            match addr.checked_add(i as u64).and_then(|a| memory.get(&a)) {
                Some(v) => *b = *v,
                None => return false,
            }
        }
        true
    }

    fn safe_write(&self, addr: u64, buf: &[u8]) -> bool {
        let mut memory = self.memory.borrow_mut();
        let mapped = (0..buf.len() as u64)
            .all(|i| addr.checked_add(i).is_some_and(|a| memory.contains_key(&a)));
        if !mapped {
            return false;
        }
        for (i, b) in buf.iter().enumerate() {
            memory.insert(addr.wrapping_add(i as u64), *b);
        }
        true
    }

    fn pid(&self) -> u32 {
        self.pid
    }

    fn sem_count(&self, semid: i32) -> Option<u32> {
        self.sems.get(&semid).copied()
    }

    fn wrapper_number(&self, name: &str) -> Option<i32> {
        self.wrappers.get(name).copied()
    }
}
