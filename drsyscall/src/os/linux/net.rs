// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Sockets: addresses, message headers, scatter-gather vectors and the
//! 32-bit `socketcall` multiplexer.

use drsyscall_common::{
    kernel_types::linux::{
        iovec_size, socketcall as sc, Msghdr, AF_INET, AF_INET6, AF_NETLINK, AF_UNIX,
        UNIX_PATH_MAX,
    },
    ParamType, SysargFlags,
};
use log::{trace, warn};

use crate::{arg::param_id, os::ArgAccess, state::SocketStash, walk::Walk};

const SOCKLEN_SIZE: u64 = 4;

/// The kernel rejects longer vectors.
const UIO_MAXIOV: u64 = 1024;

/// `socketcall` passes the real arguments through this parameter.
const SOCK_ARRAY_ARG: usize = 1;
const SOCK_ORDINAL: i32 = SOCK_ARRAY_ARG as i32;

/// Reports a socket address of `socklen` bytes.
///
/// Only the fields meaningful for the address family are checked on input.
/// On output the kernel reports the size it needed, so the capacity seen at
/// entry caps what gets reported as written.
pub(crate) fn handle_sockaddr(
    walk: &mut Walk<'_>,
    ptr: u64,
    socklen: u64,
    ordinal: i32,
    flags: SysargFlags,
    id: Option<&'static str>,
) {
    let mut socklen = socklen;
    if flags.contains(SysargFlags::WRITE) {
        if walk.pre() {
            if walk.first_iter() {
                walk.state.extra.sockaddr = Some(socklen);
            }
        } else {
            match walk.state.extra.sockaddr {
                Some(pre_len) => socklen = socklen.min(pre_len),
                None => warn!("sockaddr at {ptr:#x} checked after the call but not before"),
            }
        }
        // Written solidly with no gaps, so the fields are not walked.
        walk.report_memarg_type(ordinal, flags, ptr, socklen, id, ParamType::Sockaddr, None);
        return;
    }

    if walk.pre() && !walk.report_memarg_type(ordinal, flags, ptr, 2, id, ParamType::Int, None) {
        return;
    }
    let Some(family) = walk.read_u16(ptr) else {
        return;
    };
    let fields: &[(u64, u64, ParamType)] = match family {
        AF_UNIX => {
            let room = socklen.saturating_sub(2).min(UNIX_PATH_MAX);
            let Some(path) = ptr.checked_add(2) else {
                return;
            };
            let len = strnlen(walk, path, room);
            if len > 0 {
                walk.report_memarg_type(ordinal, flags, path, len, id, ParamType::Carray, None);
            }
            return;
        }
        // port, addr
        AF_INET => &[(2, 2, ParamType::Int), (4, 4, ParamType::Struct)],
        // port, flowinfo, addr, scope_id
        AF_INET6 => &[
            (2, 2, ParamType::Int),
            (4, 4, ParamType::Int),
            (8, 16, ParamType::Struct),
            (24, 4, ParamType::Int),
        ],
        // pad, pid, groups
        AF_NETLINK => &[
            (2, 2, ParamType::Int),
            (4, 4, ParamType::Int),
            (8, 4, ParamType::Int),
        ],
        other => {
            warn!("unknown sockaddr family {other}");
            return;
        }
    };
    for &(offset, size, ty) in fields {
        if socklen < offset + size {
            continue;
        }
        let Some(field) = ptr.checked_add(offset) else {
            return;
        };
        if !walk.report_memarg_type(ordinal, flags, field, size, id, ty, None) {
            return;
        }
    }
}

/// Length of the string at `addr` not counting the terminator, scanning at
/// most `max` bytes.
fn strnlen(walk: &Walk<'_>, addr: u64, max: u64) -> u64 {
    let mut c = [0u8];
    let mut len = 0;
    while len < max {
        match addr.checked_add(len) {
            Some(a) if walk.read(a, &mut c) && c[0] != 0 => len += 1,
            _ => break,
        }
    }
    len
}

/// Reports a scatter-gather vector and the buffers it points at, stopping
/// once `bytes` bytes have been covered.
pub(crate) fn check_iov(
    walk: &mut Walk<'_>,
    iov: u64,
    count: u64,
    bytes: u64,
    ordinal: i32,
    flags: SysargFlags,
    id: Option<&'static str>,
) {
    if iov == 0 || count == 0 {
        return;
    }
    let p = walk.ptr_size();
    let entry_size = iovec_size(p);
    if !walk.report_memarg_type(
        ordinal,
        flags,
        iov,
        count.saturating_mul(entry_size),
        id,
        ParamType::Struct,
        None,
    ) {
        return;
    }

    let mut so_far: u64 = 0;
    for i in 0..count.min(UIO_MAXIOV) {
        // A vector wrapping around the address space is garbage.
        let Some(entry) = i.checked_mul(entry_size).and_then(|o| iov.checked_add(o)) else {
            break;
        };
        let (Some(base), Some(mut len)) = (walk.read_ptr(entry), walk.read_ptr_at(entry, p)) else {
            continue;
        };
        let done = so_far.saturating_add(len) > bytes;
        if done {
            len = bytes - so_far;
        }
        so_far += len;
        trace!("iov entry {i}, buf={base:#x}, len={len:#x}");
        if len > 0
            && !walk.report_memarg_type(ordinal, flags, base, len, id, ParamType::Struct, None)
        {
            return;
        }
        if done {
            break;
        }
    }
}

/// Reports every header field and buffer of a `struct msghdr`. `flags`
/// carries READ for sendmsg and WRITE for recvmsg.
pub(crate) fn check_msghdr(walk: &mut Walk<'_>, msg: u64, ordinal: i32, flags: SysargFlags) {
    let send = flags.contains(SysargFlags::READ);
    let p = walk.ptr_size();
    // Every field offset is below the header size.
    if msg.checked_add(Msghdr::size(p)).is_none() {
        warn!("msghdr at {msg:#x} runs past the address space");
        return;
    }
    let name = walk.read_ptr(msg + Msghdr::NAME);
    let namelen = walk.read_u32(msg + Msghdr::namelen(p)).map(u64::from);
    let iov = walk.read_ptr(msg + Msghdr::iov(p));
    let iovlen = walk.read_ptr(msg + Msghdr::iovlen(p));

    if walk.pre() {
        // msg_flags is an output of recvmsg.
        let len = if send {
            Msghdr::size(p)
        } else {
            Msghdr::flags(p)
        };
        let id = if send { "sendmsg msg" } else { "recvmsg msg" };
        if !walk.report_memarg_type(ordinal, flags, msg, len, Some(id), ParamType::Struct, None) {
            return;
        }
        if !send
            && !walk.report_memarg_type(
                ordinal,
                flags,
                msg + Msghdr::flags(p),
                4,
                Some("recvmsg msg_flags"),
                ParamType::Int,
                None,
            )
        {
            return;
        }

        if let (Some(name), Some(namelen)) = (name, namelen) {
            if name != 0 {
                if send {
                    handle_sockaddr(walk, name, namelen, ordinal, SysargFlags::READ, Some("sendmsg addr"));
                    if walk.abort {
                        return;
                    }
                } else {
                    if walk.first_iter() {
                        walk.state.extra.sockaddr = Some(namelen);
                    }
                    if !walk.report_memarg_type(
                        ordinal,
                        flags,
                        name,
                        namelen,
                        Some("recvmsg addr"),
                        ParamType::Struct,
                        None,
                    ) {
                        return;
                    }
                }
            }
        }

        if let (Some(iov), Some(iovlen)) = (iov, iovlen) {
            let id = if send { "sendmsg iov" } else { "recvmsg iov" };
            check_iov(walk, iov, iovlen, u64::MAX, ordinal, flags, Some(id));
            if walk.abort {
                return;
            }
        }

        let control = walk.read_ptr(msg + Msghdr::control(p));
        let controllen = walk.read_ptr(msg + Msghdr::controllen(p));
        match (control, controllen) {
            (Some(control), Some(controllen)) => {
                if walk.first_iter() {
                    walk.state.extra.msg_control = Some(control);
                    walk.state.extra.msg_controllen = Some(controllen);
                }
                let id = if send {
                    "sendmsg msg_control"
                } else {
                    "recvmsg msg_control"
                };
                if control != 0 {
                    walk.report_memarg_type(
                        ordinal,
                        flags,
                        control,
                        controllen,
                        Some(id),
                        ParamType::Struct,
                        None,
                    );
                }
            }
            _ => {
                if walk.first_iter() {
                    walk.state.extra.msg_control = Some(0);
                    walk.state.extra.msg_controllen = Some(0);
                }
            }
        }
        return;
    }

    // Only recvmsg writes anything.
    let received = walk.signed_result().max(0) as u64;
    let pre_control = walk.state.extra.msg_control.unwrap_or(0);
    let pre_controllen = walk.state.extra.msg_controllen.unwrap_or(0);
    if !walk.report_memarg_type(
        ordinal,
        flags,
        msg + Msghdr::flags(p),
        4,
        Some("recvmsg msg_flags"),
        ParamType::Int,
        None,
    ) {
        return;
    }
    if let (Some(iov), Some(iovlen)) = (iov, iovlen) {
        check_iov(walk, iov, iovlen, received, ordinal, flags, Some("recvmsg iov"));
        if walk.abort {
            return;
        }
    }
    if let (Some(name), Some(namelen)) = (name, namelen) {
        if name != 0 {
            handle_sockaddr(walk, name, namelen, ordinal, flags, Some("recvmsg addr"));
            if walk.abort {
                return;
            }
        }
    }
    // The kernel updates msg_controllen with what it wrote.
    if let Some(controllen) = walk.read_ptr(msg + Msghdr::controllen(p)) {
        let len = controllen.min(pre_controllen);
        if !walk.report_memarg_type(
            ordinal,
            flags,
            msg + Msghdr::controllen(p),
            p,
            Some("recvmsg msg_controllen"),
            ParamType::Int,
            None,
        ) {
            return;
        }
        if pre_control != 0 && len > 0 {
            walk.report_memarg_type(
                ordinal,
                flags,
                pre_control,
                len,
                Some("recvmsg msg_control"),
                ParamType::Struct,
                None,
            );
        }
    }
}

/// `readv` and `writev`.
pub(crate) fn pre_rw_vector(walk: &mut Walk<'_>) {
    let flags = vector_flags(walk);
    let (iov, count) = (walk.sysarg(1), walk.sysarg(2));
    check_iov(walk, iov, count, u64::MAX, 1, flags, param_id(1));
}

pub(crate) fn post_rw_vector(walk: &mut Walk<'_>) {
    let flags = vector_flags(walk);
    let done = walk.signed_result();
    if done <= 0 || !flags.contains(SysargFlags::WRITE) {
        return;
    }
    let (iov, count) = (walk.sysarg(1), walk.sysarg(2));
    check_iov(walk, iov, count, done as u64, 1, flags, param_id(1));
}

fn vector_flags(walk: &Walk<'_>) -> SysargFlags {
    if walk.syscall.name() == "writev" {
        SysargFlags::READ
    } else {
        SysargFlags::WRITE
    }
}

pub(crate) fn sockaddr_access(walk: &mut Walk<'_>, access: &ArgAccess<'_>) -> bool {
    handle_sockaddr(
        walk,
        access.start,
        access.size,
        access.desc.param as i32,
        access.desc.flags,
        None,
    );
    true
}

pub(crate) fn msghdr_access(walk: &mut Walk<'_>, access: &ArgAccess<'_>) -> bool {
    check_msghdr(walk, access.start, access.desc.param as i32, access.desc.flags);
    true
}

fn sock_word(walk: &Walk<'_>, args: u64, i: u64) -> Option<u64> {
    walk.read_ptr_at(args, i * walk.ptr_size())
}

/// A length slot of the argument block, which the kernel reads as an int.
fn sock_len(walk: &Walk<'_>, args: u64, i: u64) -> Option<u32> {
    walk.read_u32_at(args, i * walk.ptr_size())
}

/// Reports the first `words` slots of the argument block.
fn sock_block(walk: &mut Walk<'_>, args: u64, words: u64, id: &'static str) -> bool {
    let size = words * walk.ptr_size();
    walk.report_memarg_type(
        SOCK_ORDINAL,
        SysargFlags::READ,
        args,
        size,
        Some(id),
        ParamType::Struct,
        None,
    )
}

pub(crate) fn pre_socketcall(walk: &mut Walk<'_>) {
    let request = walk.sysarg(0) as u32;
    let args = walk.sysarg(SOCK_ARRAY_ARG);
    if walk.first_iter() {
        walk.state.extra.socket = SocketStash::default();
    }
    trace!("pre-socketcall request={request} args={args:#x}");
    if args == 0 {
        return;
    }

    match request {
        sc::SOCKET => {
            sock_block(walk, args, 3, "socket");
        }
        sc::BIND | sc::CONNECT => {
            let id = if request == sc::BIND { "bind" } else { "connect" };
            if !sock_block(walk, args, 3, id) {
                return;
            }
            if let (Some(len), Some(addr)) = (sock_len(walk, args, 2), sock_word(walk, args, 1))
            {
                handle_sockaddr(walk, addr, len as u64, SOCK_ORDINAL, SysargFlags::READ, Some(id));
            }
        }
        sc::SHUTDOWN | sc::LISTEN => {
            let id = if request == sc::SHUTDOWN {
                "shutdown"
            } else {
                "listen"
            };
            sock_block(walk, args, 2, id);
        }
        sc::ACCEPT | sc::GETSOCKNAME | sc::GETPEERNAME | sc::ACCEPT4 => {
            let id = match request {
                sc::ACCEPT => "accept",
                sc::GETSOCKNAME => "getsockname",
                sc::GETPEERNAME => "getpeername",
                _ => "accept4",
            };
            if !sock_block(walk, args, 3, id) {
                return;
            }
            let Some(lenp) = sock_word(walk, args, 2) else {
                return;
            };
            let (Some(len), Some(addr)) = (walk.read_u32(lenp), sock_word(walk, args, 1)) else {
                return;
            };
            // The length is in-out.
            if !walk.report_memarg_type(
                SOCK_ORDINAL,
                SysargFlags::READ,
                lenp,
                SOCKLEN_SIZE,
                Some(id),
                ParamType::Int,
                None,
            ) {
                return;
            }
            if walk.first_iter() {
                walk.state.extra.socket.addr = addr;
                walk.state.extra.socket.addrlen = len as u64;
            }
            if addr != 0 {
                handle_sockaddr(walk, addr, len as u64, SOCK_ORDINAL, SysargFlags::WRITE, Some(id));
            }
        }
        sc::SOCKETPAIR => {
            if !sock_block(walk, args, 4, "socketpair") {
                return;
            }
            if let Some(sv) = sock_word(walk, args, 3) {
                walk.report_memarg_type(
                    SOCK_ORDINAL,
                    SysargFlags::WRITE,
                    sv,
                    8,
                    Some("socketpair"),
                    ParamType::Struct,
                    None,
                );
            }
        }
        sc::SEND | sc::RECV => {
            let (id, flags) = if request == sc::SEND {
                ("send", SysargFlags::READ)
            } else {
                ("recv", SysargFlags::WRITE)
            };
            if !sock_block(walk, args, 4, id) {
                return;
            }
            pre_sock_buffer(walk, args, flags, id);
        }
        sc::SENDTO | sc::RECVFROM => {
            let send = request == sc::SENDTO;
            let (block_id, buf_id, flags) = if send {
                ("sendto args", "sendto buf", SysargFlags::READ)
            } else {
                ("recvfrom args", "recvfrom buf", SysargFlags::WRITE)
            };
            if !sock_block(walk, args, 6, block_id) || !pre_sock_buffer(walk, args, flags, buf_id)
            {
                return;
            }

            // sendto passes the length by value, recvfrom by reference.
            let socklen = if send {
                sock_len(walk, args, 5).map(|len| (len as u64, 0))
            } else {
                sock_word(walk, args, 5)
                    .and_then(|lenp| walk.read_u32(lenp).map(|len| (len as u64, lenp)))
            };
            let (Some((len, lenp)), Some(addr)) = (socklen, sock_word(walk, args, 4)) else {
                return;
            };
            if walk.first_iter() {
                walk.state.extra.socket.addr = addr;
                walk.state.extra.socket.addrlen = len;
            }
            // Optional for both.
            if addr == 0 {
                return;
            }
            if send {
                handle_sockaddr(walk, addr, len, SOCK_ORDINAL, SysargFlags::READ, Some("sendto addr"));
                return;
            }
            // sa_family is not yet set, so the fields cannot be walked.
            if walk.first_iter() {
                walk.state.extra.sockaddr = Some(len);
            }
            if !walk.report_memarg_type(
                SOCK_ORDINAL,
                SysargFlags::WRITE,
                addr,
                len,
                Some("recvfrom addr"),
                ParamType::Struct,
                None,
            ) {
                return;
            }
            walk.report_memarg_type(
                SOCK_ORDINAL,
                SysargFlags::READ | SysargFlags::WRITE,
                lenp,
                SOCKLEN_SIZE,
                Some("recvfrom socklen"),
                ParamType::UnsignedInt,
                None,
            );
        }
        sc::SETSOCKOPT => {
            if !sock_block(walk, args, 5, "setsockopt args") {
                return;
            }
            if let (Some(len), Some(optval)) =
                (sock_len(walk, args, 4), sock_word(walk, args, 3))
            {
                walk.report_memarg_type(
                    SOCK_ORDINAL,
                    SysargFlags::READ,
                    optval,
                    len as u64,
                    Some("setsockopt optval"),
                    ParamType::Struct,
                    None,
                );
            }
        }
        sc::GETSOCKOPT => {
            if !sock_block(walk, args, 5, "getsockopt args") {
                return;
            }
            let Some(lenp) = sock_word(walk, args, 4) else {
                return;
            };
            let (Some(len), Some(optval)) = (walk.read_u32(lenp), sock_word(walk, args, 3)) else {
                return;
            };
            if optval == 0 {
                return;
            }
            if !walk.report_memarg_type(
                SOCK_ORDINAL,
                SysargFlags::READ,
                lenp,
                SOCKLEN_SIZE,
                Some("getsockopt optlen"),
                ParamType::Int,
                None,
            ) {
                return;
            }
            if walk.first_iter() {
                walk.state.extra.socket.addr = optval;
                walk.state.extra.socket.addrlen = len as u64;
            }
            walk.report_memarg_type(
                SOCK_ORDINAL,
                SysargFlags::WRITE,
                optval,
                len as u64,
                Some("getsockopt optval"),
                ParamType::Struct,
                None,
            );
        }
        sc::SENDMSG | sc::RECVMSG => {
            let (id, flags) = if request == sc::SENDMSG {
                ("sendmsg args", SysargFlags::READ)
            } else {
                ("recvmsg args", SysargFlags::WRITE)
            };
            if !sock_block(walk, args, 3, id) {
                return;
            }
            if let Some(msg) = sock_word(walk, args, 1) {
                if walk.first_iter() {
                    walk.state.extra.socket.msg = msg;
                }
                check_msghdr(walk, msg, SOCK_ORDINAL, flags);
            }
        }
        other => warn!("unknown socketcall request {other}"),
    }
}

/// The data buffer of send, recv, sendto and recvfrom.
fn pre_sock_buffer(walk: &mut Walk<'_>, args: u64, flags: SysargFlags, id: &'static str) -> bool {
    let (Some(len), Some(buf)) = (sock_word(walk, args, 2), sock_word(walk, args, 1)) else {
        return true;
    };
    if walk.first_iter() {
        walk.state.extra.socket.buf = buf;
        walk.state.extra.socket.buflen = len;
    }
    walk.report_memarg_type(SOCK_ORDINAL, flags, buf, len, Some(id), ParamType::Struct, None)
}

pub(crate) fn post_socketcall(walk: &mut Walk<'_>) {
    let request = walk.sysarg(0) as u32;
    let args = walk.sysarg(SOCK_ARRAY_ARG);
    let result = walk.signed_result();
    trace!("post-socketcall result={result:#x}");
    if result < 0 {
        return;
    }
    let stash = walk.state.extra.socket;
    let received = result as u64;

    match request {
        sc::ACCEPT | sc::GETSOCKNAME | sc::GETPEERNAME | sc::ACCEPT4 => {
            let id = match request {
                sc::ACCEPT => "accept",
                sc::GETSOCKNAME => "getsockname",
                sc::GETPEERNAME => "getpeername",
                _ => "accept4",
            };
            if stash.addrlen == 0 || stash.addr == 0 {
                return;
            }
            // The kernel stores the size it needed.
            if let Some(len) = sock_word(walk, args, 2).and_then(|lenp| walk.read_u32(lenp)) {
                handle_sockaddr(walk, stash.addr, len as u64, SOCK_ORDINAL, SysargFlags::WRITE, Some(id));
            }
        }
        sc::RECV | sc::RECVFROM => {
            let id = if request == sc::RECV {
                "recv"
            } else {
                "recvfrom buf"
            };
            if stash.buf != 0 {
                let len = received.min(stash.buflen);
                if len > 0
                    && !walk.report_memarg_type(
                        SOCK_ORDINAL,
                        SysargFlags::WRITE,
                        stash.buf,
                        len,
                        Some(id),
                        ParamType::Struct,
                        None,
                    )
                {
                    return;
                }
            }
            if request == sc::RECVFROM && stash.addrlen > 0 && stash.addr != 0 {
                let len = sock_word(walk, args, 5).and_then(|lenp| walk.read_u32(lenp));
                if let Some(len) = len.filter(|&l| l > 0) {
                    handle_sockaddr(
                        walk,
                        stash.addr,
                        len as u64,
                        SOCK_ORDINAL,
                        SysargFlags::WRITE,
                        Some("recvfrom addr"),
                    );
                }
            }
        }
        sc::GETSOCKOPT => {
            if stash.addrlen == 0 || stash.addr == 0 {
                return;
            }
            if let Some(len) = sock_word(walk, args, 4).and_then(|lenp| walk.read_u32(lenp)) {
                let len = (len as u64).min(stash.addrlen);
                walk.report_memarg_type(
                    SOCK_ORDINAL,
                    SysargFlags::WRITE,
                    stash.addr,
                    len,
                    Some("getsockopt optval"),
                    ParamType::Struct,
                    None,
                );
            }
        }
        sc::RECVMSG => {
            // Zero when the header could not be read at entry.
            if stash.msg != 0 {
                check_msghdr(walk, stash.msg, SOCK_ORDINAL, SysargFlags::WRITE);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use drsyscall_common::kernel_types::linux::{AF_INET, AF_INET6, AF_UNIX};

    use crate::{
        host::FakeHost,
        memarg_test,
        tests::{Trace, IN},
    };

    const SYS_SENDTO: i32 = 44;

    fn no_memory(_: &FakeHost) {}

    memarg_test!(
        unix_address_reports_the_path,
        Trace::linux(),
        SYS_SENDTO,
        [3, 0x1000, 16, 0, 0x2000, 110],
        |host: &FakeHost| {
            host.put_u16(0x2000, AF_UNIX);
            host.map(0x2002, b"/s\0");
        },
        [(1, 0x1000, 16, IN), (4, 0x2000, 2, IN), (4, 0x2002, 2, IN)],
        16,
        no_memory,
        []
    );

    memarg_test!(
        inet6_address_skips_padding,
        Trace::linux(),
        SYS_SENDTO,
        [3, 0x1000, 16, 0, 0x2000, 28],
        |host: &FakeHost| host.put_u16(0x2000, AF_INET6),
        [
            (1, 0x1000, 16, IN),
            (4, 0x2000, 2, IN),
            (4, 0x2002, 2, IN),
            (4, 0x2004, 4, IN),
            (4, 0x2008, 16, IN),
            (4, 0x2018, 4, IN)
        ],
        16,
        no_memory,
        []
    );

    memarg_test!(
        short_length_leaves_out_fields,
        Trace::linux(),
        SYS_SENDTO,
        [3, 0x1000, 16, 0, 0x2000, 6],
        |host: &FakeHost| host.put_u16(0x2000, AF_INET),
        [(1, 0x1000, 16, IN), (4, 0x2000, 2, IN), (4, 0x2002, 2, IN)],
        16,
        no_memory,
        []
    );

    memarg_test!(
        unknown_family_checks_only_the_family,
        Trace::linux(),
        SYS_SENDTO,
        [3, 0x1000, 16, 0, 0x2000, 16],
        |host: &FakeHost| host.put_u16(0x2000, 0x7777),
        [(1, 0x1000, 16, IN), (4, 0x2000, 2, IN)],
        16,
        no_memory,
        []
    );
}
