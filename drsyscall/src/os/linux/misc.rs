// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Calls whose parameters depend on flags or commands passed alongside.

use drsyscall_common::{
    kernel_types::linux::{
        Sigaction, SysctlArgs, ARCH_GET_FS, CLONE_CHILD_CLEARTID, CLONE_CHILD_SETTID,
        CLONE_PARENT_SETTID, CLONE_SETTLS, FUTEX_CMD_MASK, FUTEX_CMP_REQUEUE, FUTEX_FD,
        FUTEX_REQUEUE, FUTEX_WAIT, FUTEX_WAKE, F_GETFD, F_GETFL, F_GETLEASE, F_GETOWN, F_GETSIG,
        MREMAP_FIXED, O_CREAT, POLLFD_REVENTS, POLLFD_SIZE, PRCTL_NAME_SIZE, PR_CAPBSET_DROP,
        PR_CAPBSET_READ, PR_GET_DUMPABLE, PR_GET_ENDIAN, PR_GET_FPEMU, PR_GET_FPEXC,
        PR_GET_KEEPCAPS, PR_GET_NAME, PR_GET_PDEATHSIG, PR_GET_SECCOMP, PR_GET_SECUREBITS,
        PR_GET_TIMERSLACK, PR_GET_TIMING, PR_GET_TSC, PR_GET_UNALIGN, PR_SET_DUMPABLE,
        PR_SET_ENDIAN, PR_SET_FPEMU, PR_SET_FPEXC, PR_SET_KEEPCAPS, PR_SET_NAME,
        PR_SET_PDEATHSIG, PR_SET_SECCOMP, PR_SET_SECUREBITS, PR_SET_TIMERSLACK, PR_SET_TIMING,
        PR_SET_TSC, PR_SET_UNALIGN, SA_RESTORER, USER_DESC_SIZE,
    },
    sizes as sz, ParamType, Personality, SysargFlags,
};
use log::warn;

use super::net::check_iov;
use crate::{arg::param_id, os::ArgAccess, walk::Walk};

/// Upper bound on `char **` entries walked.
const STR_ARRAY_MAX_ITER: u64 = 64 * 1024;

/// Above any open file limit the kernel would accept.
const POLL_MAX_FDS: u64 = 1 << 20;

fn report(
    walk: &mut Walk<'_>,
    ordinal: usize,
    flags: SysargFlags,
    ptr: u64,
    size: u64,
    ty: ParamType,
) -> bool {
    walk.report_memarg_type(ordinal as i32, flags, ptr, size, None, ty, None)
}

/// The kernel writes thread ids when the call returns, but checking on
/// entry avoids racing with the new thread.
pub(crate) fn pre_clone(walk: &mut Walk<'_>) {
    let flags = walk.sysarg(0);
    // x86_64 swaps the child tid and tls parameters.
    let (tls_arg, child_tid_arg) = if walk.personality() == Personality::X86_64 {
        (4, 3)
    } else {
        (3, 4)
    };

    if flags & CLONE_PARENT_SETTID != 0 {
        let ptid = walk.sysarg(2);
        if !walk.report_sysarg(2, SysargFlags::WRITE) {
            return;
        }
        if ptid != 0 && !report(walk, 2, SysargFlags::WRITE, ptid, 4, ParamType::Int) {
            return;
        }
    }
    if flags & CLONE_SETTLS != 0 {
        let tls = walk.sysarg(tls_arg);
        if !walk.report_sysarg(tls_arg, SysargFlags::READ) {
            return;
        }
        // Elsewhere the value is the thread pointer itself.
        if walk.personality() == Personality::X86
            && tls != 0
            && !report(walk, tls_arg, SysargFlags::READ, tls, USER_DESC_SIZE, ParamType::Struct)
        {
            return;
        }
    }
    if flags & (CLONE_CHILD_SETTID | CLONE_CHILD_CLEARTID) != 0 {
        // The kernel keeps the clear address until the child exits.
        let ctid = walk.sysarg(child_tid_arg);
        if !walk.report_sysarg(child_tid_arg, SysargFlags::WRITE) {
            return;
        }
        if ctid != 0 {
            report(walk, child_tid_arg, SysargFlags::WRITE, ctid, 4, ParamType::Int);
        }
    }
}

/// `select` and `pselect6`. Only the bitmaps are special: one bit per
/// descriptor. Nothing needs checking afterwards since the sets were
/// defined on entry.
pub(crate) fn pre_select(walk: &mut Walk<'_>) {
    let nfds = walk.sysarg(0) as i32;
    let size = (nfds.max(0) as u64).div_ceil(8);
    let sets = [
        (1, "select readfds"),
        (2, "select writefds"),
        (3, "select exceptfds"),
    ];
    for (i, id) in sets {
        let ptr = walk.sysarg(i);
        if ptr != 0
            && !walk.report_memarg_type(i as i32, SysargFlags::READ, ptr, size, Some(id), ParamType::Struct, None)
        {
            return;
        }
    }

    let p = walk.personality();
    let pselect = walk.syscall.name() == "pselect6";
    let timeout = walk.sysarg(4);
    let timeout_size = if pselect {
        sz::TIMESPEC.get(p)
    } else {
        sz::TIMEVAL.get(p)
    };
    if timeout != 0
        && !walk.report_memarg_type(
            4,
            SysargFlags::READ,
            timeout,
            timeout_size as u64,
            Some("select timeout"),
            ParamType::Struct,
            None,
        )
    {
        return;
    }
    let sigmask = walk.sysarg(5);
    if pselect && sigmask != 0 {
        walk.report_memarg_type(
            5,
            SysargFlags::READ,
            sigmask,
            sz::SIGSET.get(p) as u64,
            Some("pselect sigmask"),
            ParamType::Struct,
            None,
        );
    }
}

/// Each `struct pollfd` has its descriptor and requested events as input
/// and the returned events as output.
pub(crate) fn poll(walk: &mut Walk<'_>) {
    let fds = walk.sysarg(0);
    let nfds = walk.sysarg(1).min(POLL_MAX_FDS);
    if fds == 0 {
        return;
    }
    let pre = walk.pre();
    for i in 0..nfds {
        let Some(entry) = fds.checked_add(i * POLLFD_SIZE) else {
            return;
        };
        let reported = if pre {
            report(walk, 0, SysargFlags::READ, entry, POLLFD_REVENTS, ParamType::Struct)
        } else {
            let Some(revents) = entry.checked_add(POLLFD_REVENTS) else {
                return;
            };
            report(
                walk,
                0,
                SysargFlags::WRITE,
                revents,
                POLLFD_SIZE - POLLFD_REVENTS,
                ParamType::Struct,
            )
        };
        if !reported {
            return;
        }
    }
}

pub(crate) fn pre_prctl(walk: &mut Walk<'_>) {
    let request = walk.sysarg(0) as u32;
    let arg = walk.sysarg(1);
    match request {
        PR_SET_PDEATHSIG | PR_SET_UNALIGN | PR_SET_FPEMU | PR_SET_FPEXC | PR_SET_DUMPABLE
        | PR_SET_TIMING | PR_SET_TSC | PR_SET_SECUREBITS | PR_SET_SECCOMP | PR_SET_KEEPCAPS
        | PR_SET_ENDIAN | PR_SET_TIMERSLACK | PR_CAPBSET_READ | PR_CAPBSET_DROP => {
            walk.report_sysarg(1, SysargFlags::READ);
        }
        PR_GET_PDEATHSIG | PR_GET_UNALIGN | PR_GET_FPEMU | PR_GET_FPEXC | PR_GET_TSC
        | PR_GET_ENDIAN => {
            if walk.report_sysarg(1, SysargFlags::READ) {
                report(walk, 1, SysargFlags::WRITE, arg, 4, ParamType::Int);
            }
        }
        // The result is the return value.
        PR_GET_DUMPABLE | PR_GET_TIMING | PR_GET_SECUREBITS | PR_GET_SECCOMP
        | PR_GET_KEEPCAPS | PR_GET_TIMERSLACK => {}
        PR_SET_NAME | PR_GET_NAME => {
            let flags = if request == PR_GET_NAME {
                SysargFlags::WRITE
            } else {
                SysargFlags::READ
            };
            if walk.report_sysarg(1, SysargFlags::READ) {
                report(walk, 1, flags, arg, PRCTL_NAME_SIZE, ParamType::Carray);
            }
        }
        other => warn!("unknown prctl request {other}"),
    }
}

pub(crate) fn post_prctl(walk: &mut Walk<'_>) {
    let request = walk.sysarg(0) as u32;
    let arg = walk.sysarg(1);
    match request {
        PR_GET_PDEATHSIG | PR_GET_UNALIGN | PR_GET_FPEMU | PR_GET_FPEXC | PR_GET_TSC
        | PR_GET_ENDIAN => {
            if walk.signed_result() >= 0 {
                report(walk, 1, SysargFlags::WRITE, arg, 4, ParamType::Int);
            }
        }
        PR_GET_NAME => {
            // TODO: only the bytes up to the terminator are written.
            report(walk, 1, SysargFlags::WRITE, arg, PRCTL_NAME_SIZE, ParamType::Carray);
        }
        _ => {}
    }
}

/// Reads happen on entry; the output is reported afterwards with the
/// length the kernel stored.
pub(crate) fn pre_sysctl(walk: &mut Walk<'_>) {
    let args = walk.sysarg(0);
    if args == 0 {
        return;
    }
    let p = walk.ptr_size();
    let (Some(name), Some(nlen)) = (
        walk.read_ptr_at(args, SysctlArgs::NAME),
        walk.read_u32_at(args, SysctlArgs::nlen(p)),
    ) else {
        return;
    };
    if !report(walk, 0, SysargFlags::READ, name, nlen as u64 * 4, ParamType::Struct) {
        return;
    }
    let newval = walk.read_ptr_at(args, SysctlArgs::newval(p)).unwrap_or(0);
    if newval != 0 {
        if let Some(newlen) = walk.read_ptr_at(args, SysctlArgs::newlen(p)) {
            report(walk, 0, SysargFlags::READ, newval, newlen, ParamType::Struct);
        }
    }
}

pub(crate) fn post_sysctl(walk: &mut Walk<'_>) {
    let args = walk.sysarg(0);
    if walk.result() != 0 || args == 0 {
        return;
    }
    let p = walk.ptr_size();
    let oldval = walk.read_ptr_at(args, SysctlArgs::oldval(p)).unwrap_or(0);
    let oldlenp = walk.read_ptr_at(args, SysctlArgs::oldlenp(p)).unwrap_or(0);
    if oldval == 0 {
        return;
    }
    if let Some(len) = walk.read_ptr(oldlenp) {
        report(walk, 0, SysargFlags::WRITE, oldval, len, ParamType::Struct);
    }
}

/// The new address is only a parameter with MREMAP_FIXED.
pub(crate) fn pre_mremap(walk: &mut Walk<'_>) {
    if walk.sysarg(3) & MREMAP_FIXED != 0 {
        walk.report_sysarg(4, SysargFlags::READ);
    }
}

/// The mode is only a parameter with O_CREAT.
pub(crate) fn pre_open(walk: &mut Walk<'_>) {
    if walk.sysarg(1) & O_CREAT != 0 {
        walk.report_sysarg(2, SysargFlags::READ);
    }
}

/// Some kernels add their own commands, so every command not known to
/// ignore the third parameter is taken to read it.
pub(crate) fn pre_fcntl(walk: &mut Walk<'_>) {
    let cmd = walk.sysarg(1) as i32;
    if !matches!(cmd, F_GETFD | F_GETFL | F_GETOWN | F_GETSIG | F_GETLEASE) {
        walk.report_sysarg(2, SysargFlags::READ);
    }
}

/// The restorer field is only read with SA_RESTORER.
pub(crate) fn pre_rt_sigaction(walk: &mut Walk<'_>) {
    let sa = walk.sysarg(1);
    if sa == 0 {
        return;
    }
    let p = walk.ptr_size();
    let size = Sigaction::size(p);
    let flags = walk.read_ptr_at(sa, Sigaction::flags(p));
    if flags.is_none_or(|f| f & SA_RESTORER != 0) {
        report(walk, 1, SysargFlags::READ, sa, size, ParamType::Struct);
        return;
    }
    if !report(walk, 1, SysargFlags::READ, sa, Sigaction::restorer(p), ParamType::Struct) {
        return;
    }
    let mask = Sigaction::mask(p);
    if let Some(mask_addr) = sa.checked_add(mask) {
        report(walk, 1, SysargFlags::READ, mask_addr, size - mask, ParamType::Struct);
    }
}

/// Later parameters are only meaningful for some operations.
pub(crate) fn pre_futex(walk: &mut Walk<'_>) {
    let op = walk.sysarg(1) as i32 & FUTEX_CMD_MASK;
    match op {
        FUTEX_WAKE | FUTEX_FD => {}
        FUTEX_WAIT => {
            let timeout = walk.sysarg(3);
            if !walk.report_sysarg(3, SysargFlags::READ) {
                return;
            }
            if timeout != 0 {
                let size = sz::TIMESPEC.get(walk.personality()) as u64;
                report(walk, 3, SysargFlags::READ, timeout, size, ParamType::Struct);
            }
        }
        FUTEX_REQUEUE | FUTEX_CMP_REQUEUE => {
            if !walk.report_sysarg(4, SysargFlags::READ) {
                return;
            }
            if op == FUTEX_CMP_REQUEUE && !walk.report_sysarg(5, SysargFlags::READ) {
                return;
            }
            let uaddr2 = walk.sysarg(4);
            report(walk, 4, SysargFlags::READ, uaddr2, 4, ParamType::Int);
        }
        _ => {}
    }
}

/// Remote vectors are only addresses in this process when the target is
/// ourselves.
fn targets_self(walk: &Walk<'_>) -> bool {
    walk.sysarg(0) as u32 == walk.host.pid()
}

pub(crate) fn pre_process_vm(walk: &mut Walk<'_>) {
    let readv = walk.syscall.name() == "process_vm_readv";
    let local_flags = if readv {
        if targets_self(walk) {
            let (riov, riovcnt) = (walk.sysarg(3), walk.sysarg(4));
            check_iov(walk, riov, riovcnt, u64::MAX, 3, SysargFlags::READ, Some("remote_iov"));
        }
        SysargFlags::WRITE
    } else {
        SysargFlags::READ
    };
    // The count may still run past the real vector.
    let (liov, liovcnt) = (walk.sysarg(1), walk.sysarg(2));
    check_iov(walk, liov, liovcnt, u64::MAX, 1, local_flags, Some("local_iov"));
}

pub(crate) fn post_process_vm(walk: &mut Walk<'_>) {
    let res = walk.signed_result();
    if res <= 0 {
        return;
    }
    if walk.syscall.name() == "process_vm_readv" {
        let (liov, liovcnt) = (walk.sysarg(1), walk.sysarg(2));
        check_iov(walk, liov, liovcnt, res as u64, 1, SysargFlags::WRITE, Some("local_iov"));
    } else if targets_self(walk) {
        let (riov, riovcnt) = (walk.sysarg(3), walk.sysarg(4));
        check_iov(walk, riov, riovcnt, res as u64, 3, SysargFlags::WRITE, Some("remote_iov"));
    }
}

/// ARCH_GET_FS stores the base through its address parameter; the other
/// codes take values.
pub(crate) fn arch_prctl(walk: &mut Walk<'_>) {
    if walk.personality() != Personality::X86_64 || walk.sysarg(0) as i32 != ARCH_GET_FS {
        return;
    }
    let addr = walk.sysarg(1);
    let size = walk.ptr_size();
    report(walk, 1, SysargFlags::WRITE, addr, size, ParamType::UnsignedInt);
}

/// Walks a NULL-terminated array of strings.
fn check_strarray(walk: &mut Walk<'_>, array: u64, ordinal: i32, id: Option<&'static str>) {
    let p = walk.ptr_size();
    for i in 0..STR_ARRAY_MAX_ITER {
        let s = match walk.read_ptr_at(array, i * p) {
            Some(s) if s != 0 => s,
            _ => break,
        };
        walk.handle_cstring(ordinal, SysargFlags::READ, id, s, 0, false);
        if walk.abort {
            break;
        }
    }
}

pub(crate) fn strarray_access(walk: &mut Walk<'_>, access: &ArgAccess<'_>) -> bool {
    let param = access.desc.param;
    check_strarray(walk, access.start, param as i32, param_id(param));
    true
}

/// The regular pass checks that the whole capacity is addressable.
pub(crate) fn cstring_access(walk: &mut Walk<'_>, access: &ArgAccess<'_>) -> bool {
    walk.handle_cstring(
        access.desc.param as i32,
        access.desc.flags,
        None,
        access.start,
        access.size,
        false,
    )
}

#[cfg(test)]
mod tests {
    use crate::{
        host::FakeHost,
        memarg_test,
        tests::{Trace, IN, OUT},
    };

    const SYS_POLL: i32 = 7;
    const SYS_EXECVE: i32 = 59;

    fn no_memory(_: &FakeHost) {}

    memarg_test!(
        poll_reads_requests_and_writes_revents,
        Trace::linux(),
        SYS_POLL,
        [0x1000, 2, 100],
        no_memory,
        [(0, 0x1000, 6, IN), (0, 0x1008, 6, IN)],
        1,
        no_memory,
        [(0, 0x1006, 2, OUT), (0, 0x100e, 2, OUT)]
    );

    memarg_test!(
        string_array_ends_at_null,
        Trace::linux(),
        SYS_EXECVE,
        [0x1000, 0x3000, 0],
        |host: &FakeHost| {
            host.map(0x1000, b"/bin/sh\0");
            host.put_u64(0x3000, 0x2000);
            host.put_u64(0x3008, 0x2010);
            host.put_u64(0x3010, 0);
            host.map(0x2000, b"a\0");
            host.map(0x2010, b"bc\0");
        },
        [(0, 0x1000, 8, IN), (1, 0x2000, 2, IN), (1, 0x2010, 3, IN)],
        0,
        no_memory,
        []
    );
}
