// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Number and name lookup over the active tables, built once when the
//! engine starts.

use std::collections::{hash_map::Entry, HashMap};

use drsyscall_common::{Numbers, SysinfoFlags, SyscallRecord, BASE_ENTRY_INDEX};
use log::{trace, warn};

use crate::syscall::Sysnum;

#[derive(Debug, Default)]
pub(crate) struct Index {
    primary: HashMap<Sysnum, &'static SyscallRecord>,
    secondary: HashMap<Sysnum, &'static SyscallRecord>,
    names: HashMap<String, Sysnum>,
    /// Primary entries in insertion order, for table walks.
    order: Vec<(Sysnum, &'static SyscallRecord)>,
    case_insensitive: bool,
}

impl Index {
    pub fn new(case_insensitive: bool) -> Self {
        Index {
            case_insensitive,
            ..Default::default()
        }
    }

    fn key(&self, name: &str) -> String {
        if self.case_insensitive {
            name.to_ascii_lowercase()
        } else {
            name.to_string()
        }
    }

    /// Registers `name` for `num`. The first registration wins.
    pub fn add_name(&mut self, name: &str, num: Sysnum) -> bool {
        let key = self.key(name);
        match self.names.entry(key) {
            Entry::Occupied(e) => {
                if *e.get() != num {
                    warn!("duplicate system call name {name}: {} and {num}", e.get());
                }
                false
            }
            Entry::Vacant(e) => {
                trace!("name {name} => {num}");
                e.insert(num);
                true
            }
        }
    }

    fn insert(&mut self, secondary: bool, num: Sysnum, record: &'static SyscallRecord) -> bool {
        let map = if secondary {
            &mut self.secondary
        } else {
            &mut self.primary
        };
        match map.entry(num) {
            Entry::Occupied(e) => {
                warn!(
                    "system call number {num} of {} already taken by {}",
                    record.name,
                    e.get().name
                );
                debug_assert!(false, "duplicate system call number {num} ({})", record.name);
                false
            }
            Entry::Vacant(e) => {
                e.insert(record);
                true
            }
        }
    }

    /// Adds `record` under primary `number`, along with its secondary table
    /// if it has one. `names` are extra names to register besides the
    /// record's own. Returns false if the number was already taken.
    pub fn add(&mut self, number: i32, record: &'static SyscallRecord, names: &[String]) -> bool {
        self.add_with_codes(number, record, names, &|entry| entry.code().map(|c| c as i32))
    }

    /// Like [`Index::add`], taking the secondary codes from `code_of`.
    pub fn add_with_codes(
        &mut self,
        number: i32,
        record: &'static SyscallRecord,
        names: &[String],
        code_of: &dyn Fn(&SyscallRecord) -> Option<i32>,
    ) -> bool {
        let num = Sysnum::new(number);
        if !self.insert(false, num, record) {
            return false;
        }
        trace!("system call {:<35} = {num}", record.name);
        self.order.push((num, record));
        self.add_name(record.name, num);
        for name in names {
            self.add_name(name, num);
        }

        if record.flags.contains(SysinfoFlags::SECONDARY_TABLE) {
            self.add_secondary(number, record, code_of);
        }
        true
    }

    fn add_secondary(
        &mut self,
        number: i32,
        record: &'static SyscallRecord,
        code_of: &dyn Fn(&SyscallRecord) -> Option<i32>,
    ) {
        let Some(table) = record.secondary else {
            warn!("{} is multiplexed but has no secondary table", record.name);
            return;
        };
        for entry in table.entries {
            let Some(code) = code_of(entry) else {
                if entry.nums == Numbers::ByName {
                    trace!("no code for {} on this kernel", entry.name);
                } else {
                    warn!("secondary entry {} has no code", entry.name);
                }
                continue;
            };
            let num = Sysnum::with_secondary(number, code);
            if self.insert(true, num, entry) {
                self.add_name(entry.name, num);
            }
        }
        if let Some(base) = table.base {
            let num = Sysnum::with_secondary(number, BASE_ENTRY_INDEX);
            if self.insert(true, num, base) {
                self.add_name(base.name, num);
            }
        }
    }

    /// Looks `num` up, trying the secondary tables first when asked to.
    pub fn lookup(&self, num: Sysnum, resolve_secondary: bool) -> Option<&'static SyscallRecord> {
        if resolve_secondary {
            if let Some(r) = self.secondary.get(&num) {
                return Some(r);
            }
        }
        self.primary.get(&num).copied()
    }

    /// Resolves the record for a call entering with number `number`,
    /// picking the secondary entry from the selector argument.
    pub fn resolve(
        &self,
        number: i32,
        sysarg: impl Fn(usize) -> u64,
    ) -> (Sysnum, Option<&'static SyscallRecord>) {
        let mut num = Sysnum::new(number);
        let Some(record) = self.lookup(num, false) else {
            return (num, None);
        };
        if !record.flags.contains(SysinfoFlags::SECONDARY_TABLE) {
            return (num, Some(record));
        }
        debug_assert!(record.arg_count >= 1, "{} has no selector", record.name);
        let Some(selector) = record.selector() else {
            return (num, Some(record));
        };
        num.secondary = sysarg(selector as usize) as u32 as i32;
        if let Some(r) = self.lookup(num, true) {
            return (num, Some(r));
        }
        num.secondary = BASE_ENTRY_INDEX;
        (num, self.lookup(num, true))
    }

    pub fn number(&self, name: &str) -> Option<Sysnum> {
        self.names.get(&self.key(name)).copied()
    }

    pub fn primary_entries(&self) -> &[(Sysnum, &'static SyscallRecord)] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }
}

#[cfg(test)]
mod tests {
    use drsyscall_common::{tables, Personality};

    use super::*;

    fn linux_index() -> Index {
        let mut index = Index::new(false);
        for r in tables::linux::SYSCALLS {
            if let Some(n) = r.nums.primary(Personality::X86_64) {
                index.add(n, r, &[]);
            }
        }
        index
    }

    #[test]
    fn primary_and_names() {
        let index = linux_index();
        let read = index.lookup(Sysnum::new(0), false).unwrap();
        assert_eq!(read.name, "read");
        assert_eq!(index.number("read"), Some(Sysnum::new(0)));
        assert_eq!(index.number("READ"), None);
        assert!(index.lookup(Sysnum::new(100_000), true).is_none());
    }

    #[test]
    fn ioctl_requests_resolve() {
        let index = linux_index();
        let (num, record) = index.resolve(16, |i| if i == 1 { 0x5401 } else { 0 });
        assert_eq!(num, Sysnum::with_secondary(16, 0x5401));
        assert_eq!(record.map(|r| r.name), Some("ioctl.TCGETS"));
        assert_eq!(index.number("ioctl.TCGETS"), Some(num));

        // No base entry for ioctl, so unlisted requests stay unknown.
        let (num, record) = index.resolve(16, |_| 0xdead);
        assert_eq!(num, Sysnum::with_secondary(16, -1));
        assert!(record.is_none());
    }

    #[test]
    fn case_insensitive_names() {
        let mut index = Index::new(true);
        let r = &tables::windows::NTOSKRNL[0];
        index.add(2, r, &["ZwAcceptConnectPort".to_string()]);
        assert_eq!(index.number("ntacceptconnectport"), Some(Sysnum::new(2)));
        assert_eq!(index.number("ZWACCEPTCONNECTPORT"), Some(Sysnum::new(2)));
    }

    #[test]
    fn secondary_codes_by_name() {
        let mut index = Index::new(true);
        let one_param = tables::windows::NTUSER
            .iter()
            .find(|r| r.name == "NtUserCallOneParam")
            .unwrap();
        index.add_with_codes(0x1062, one_param, &[], &|entry| {
            (entry.name == "NtUserCallOneParam.GETCURSORPOS").then_some(0x1c)
        });

        let (num, record) = index.resolve(0x1062, |i| if i == 1 { 0x1c } else { 0x5000 });
        assert_eq!(num, Sysnum::with_secondary(0x1062, 0x1c));
        assert_eq!(record.map(|r| r.name), Some("NtUserCallOneParam.GETCURSORPOS"));

        // Entries the resolver has no code for only exist through the base.
        assert_eq!(index.number("NtUserCallOneParam.GETQUEUESTATUS"), None);
        let (num, record) = index.resolve(0x1062, |_| 0x1d);
        assert_eq!(num, Sysnum::with_secondary(0x1062, -1));
        assert_eq!(record.map(|r| r.name), Some("NtUserCallOneParam.UNKNOWN"));
    }

    #[test]
    #[should_panic(expected = "duplicate system call number")]
    fn duplicate_numbers_assert() {
        let mut index = Index::new(false);
        let record = &tables::linux::SYSCALLS[0];
        index.add(0, record, &[]);
        index.add(0, record, &[]);
    }
}
