// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! ioctl requests whose argument holds further pointers. Everything else is
//! described by the request table.

use drsyscall_common::{
    kernel_types::linux::{
        Ifconf, IpmiRecv, IpmiReq, IPMI_LAN_ADDR_TYPE, IPMI_SYSTEM_INTERFACE_ADDR_TYPE,
    },
    sizes as sz,
    tables::linux_ioctl::{
        IPMICTL_RECEIVE_MSG, IPMICTL_RECEIVE_MSG_TRUNC, IPMICTL_SEND_COMMAND,
        IPMICTL_SEND_COMMAND_SETTIME, SIOCGIFCONF,
    },
    ParamType, SysargFlags,
};

use crate::walk::Walk;

const IOCTL_BUF_ARGNUM: i32 = 2;

/// Reports part of the ioctl argument. Returns false to stop.
fn check(walk: &mut Walk<'_>, flags: SysargFlags, ptr: u64, size: u64, id: Option<&'static str>) -> bool {
    walk.report_memarg_type(IOCTL_BUF_ARGNUM, flags, ptr, size, id, ParamType::Struct, None)
}

fn check_def(walk: &mut Walk<'_>, ptr: u64, size: u64, id: Option<&'static str>) -> bool {
    check(walk, SysargFlags::READ, ptr, size, id)
}

fn check_addr(walk: &mut Walk<'_>, ptr: u64, size: u64, id: Option<&'static str>) -> bool {
    check(walk, SysargFlags::WRITE, ptr, size, id)
}

/// Some address types end in a padding byte that callers filling the
/// struct field by field leave unset.
fn ipmi_addr_len_adjust(walk: &Walk<'_>, addr: u64) -> u64 {
    match walk.read_u32(addr).map(|t| t as i32) {
        Some(IPMI_SYSTEM_INTERFACE_ADDR_TYPE | IPMI_LAN_ADDR_TYPE) => 1,
        _ => 0,
    }
}

/// A `struct ipmi_recv` as read from the traced process.
struct IpmiBuffers {
    addr: u64,
    addr_len: u64,
    data: u64,
    data_len: u64,
}

fn read_ipmi_recv(walk: &Walk<'_>, arg: u64) -> Option<IpmiBuffers> {
    let p = walk.ptr_size();
    Some(IpmiBuffers {
        addr: walk.read_ptr_at(arg, IpmiRecv::addr(p))?,
        addr_len: walk.read_u32_at(arg, IpmiRecv::addr_len(p))? as u64,
        data: walk.read_ptr_at(arg, IpmiRecv::msg_data(p))?,
        data_len: walk.read_u16_at(arg, IpmiRecv::msg_data_len(p))? as u64,
    })
}

fn read_ipmi_req(walk: &Walk<'_>, arg: u64) -> Option<IpmiBuffers> {
    let p = walk.ptr_size();
    Some(IpmiBuffers {
        addr: walk.read_ptr_at(arg, IpmiReq::ADDR)?,
        addr_len: walk.read_u32_at(arg, IpmiReq::addr_len(p))? as u64,
        data: walk.read_ptr_at(arg, IpmiReq::msg_data(p))?,
        data_len: walk.read_u16_at(arg, IpmiReq::msg_data_len(p))? as u64,
    })
}

pub(crate) fn pre_ioctl(walk: &mut Walk<'_>) {
    let request = walk.sysarg(1) as u32;
    let arg = walk.sysarg(2);
    if arg == 0 {
        return;
    }
    let p = walk.personality();
    let ptr = walk.ptr_size();

    match request {
        SIOCGIFCONF => {
            if !check_def(walk, arg, Ifconf::size(ptr), None) {
                return;
            }
            let len = walk.read_u32_at(arg, Ifconf::LEN);
            let buf = walk.read_ptr_at(arg, Ifconf::buf(ptr));
            if let (Some(len), Some(buf)) = (len, buf) {
                check_addr(walk, buf, len as u64, Some("SIOCGIFCONF ifc_buf"));
            }
        }
        IPMICTL_SEND_COMMAND | IPMICTL_SEND_COMMAND_SETTIME => {
            let (size, addr_id, data_id) = if request == IPMICTL_SEND_COMMAND {
                (
                    sz::IPMI_REQ.get(p),
                    "IPMICTL_SEND_COMMAND addr",
                    "IPMICTL_SEND_COMMAND msg.data",
                )
            } else {
                (
                    sz::IPMI_REQ_SETTIME.get(p),
                    "IPMICTL_SEND_COMMAND_SETTIME addr",
                    "IPMICTL_SEND_COMMAND_SETTIME msg.data",
                )
            };
            // No id: the argument itself.
            if !check_def(walk, arg, size as u64, None) {
                return;
            }
            if let Some(req) = read_ipmi_req(walk, arg) {
                let addr_len = req
                    .addr_len
                    .saturating_sub(ipmi_addr_len_adjust(walk, req.addr));
                if !check_def(walk, req.addr, addr_len, Some(addr_id)) {
                    return;
                }
                check_def(walk, req.data, req.data_len, Some(data_id));
            }
        }
        IPMICTL_RECEIVE_MSG | IPMICTL_RECEIVE_MSG_TRUNC => {
            if !check_addr(walk, arg, sz::IPMI_RECV.get(p) as u64, None) {
                return;
            }
            // Some fields are purely outputs, so the inputs go separately.
            let inputs = [
                (IpmiRecv::addr(ptr), ptr),
                (IpmiRecv::addr_len(ptr), 4),
                (IpmiRecv::msg_data(ptr), ptr),
                (IpmiRecv::msg_data_len(ptr), 2),
            ];
            for (offset, size) in inputs {
                let Some(field) = arg.checked_add(offset) else {
                    return;
                };
                if !check_def(walk, field, size, None) {
                    return;
                }
            }
            if let Some(recv) = read_ipmi_recv(walk, arg) {
                if !check_addr(walk, recv.addr, recv.addr_len, Some("IPMICTL_RECEIVE_MSG* addr")) {
                    return;
                }
                check_addr(walk, recv.data, recv.data_len, Some("IPMICTL_RECEIVE_MSG* msg.data"));
            }
        }
        _ => {}
    }
}

pub(crate) fn post_ioctl(walk: &mut Walk<'_>) {
    let request = walk.sysarg(1) as u32;
    let arg = walk.sysarg(2);
    if arg == 0 || walk.signed_result() < 0 {
        return;
    }
    let ptr = walk.ptr_size();

    match request {
        SIOCGIFCONF => {
            let len = walk.read_u32_at(arg, Ifconf::LEN);
            let buf = walk.read_ptr_at(arg, Ifconf::buf(ptr));
            if let (Some(len), Some(buf)) = (len, buf) {
                check_addr(walk, buf, len as u64, Some("SIOCGIFCONF ifc_buf"));
            }
        }
        IPMICTL_RECEIVE_MSG | IPMICTL_RECEIVE_MSG_TRUNC => {
            if let Some(recv) = read_ipmi_recv(walk, arg) {
                if !check_addr(walk, recv.addr, recv.addr_len, Some("IPMICTL_RECEIVE_MSG* addr")) {
                    return;
                }
                check_addr(walk, recv.data, recv.data_len, Some("IPMICTL_RECEIVE_MSG* msg.data"));
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use drsyscall_common::tables::linux_ioctl::{
        IPMICTL_RECEIVE_MSG, IPMICTL_SEND_COMMAND, SIOCGIFCONF,
    };

    use crate::{
        host::FakeHost,
        memarg_test,
        tests::{Trace, IN, OUT},
    };

    const SYS_IOCTL: i32 = 16;

    fn no_memory(_: &FakeHost) {}

    memarg_test!(
        ipmi_send_keeps_full_address_length,
        Trace::linux(),
        SYS_IOCTL,
        [3, IPMICTL_SEND_COMMAND as u64, 0x4000],
        |host: &FakeHost| {
            host.put_u64(0x4000, 0x6000);
            host.put_u32(0x4008, 8);
            host.put_u16(0x401a, 3);
            host.put_u64(0x4020, 0x7000);
            host.put_u32(0x6000, 1);
        },
        [(2, 0x4000, 40, IN), (2, 0x6000, 8, IN), (2, 0x7000, 3, IN)],
        0,
        no_memory,
        []
    );

    memarg_test!(
        ipmi_receive_writes_address_and_data,
        Trace::linux(),
        SYS_IOCTL,
        [3, IPMICTL_RECEIVE_MSG as u64, 0x4000],
        |host: &FakeHost| {
            host.put_u64(0x4008, 0x6000);
            host.put_u32(0x4010, 8);
            host.put_u16(0x4022, 4);
            host.put_u64(0x4028, 0x7000);
        },
        [
            (2, 0x4000, 48, OUT),
            (2, 0x4008, 8, IN),
            (2, 0x4010, 4, IN),
            (2, 0x4028, 8, IN),
            (2, 0x4022, 2, IN),
            (2, 0x6000, 8, OUT),
            (2, 0x7000, 4, OUT)
        ],
        0,
        |host: &FakeHost| host.put_u16(0x4022, 2),
        [(2, 0x6000, 8, OUT), (2, 0x7000, 2, OUT)]
    );

    memarg_test!(
        failed_siocgifconf_writes_nothing,
        Trace::linux(),
        SYS_IOCTL,
        [3, SIOCGIFCONF as u64, 0x4000],
        |host: &FakeHost| {
            host.put_u32(0x4000, 64);
            host.put_u64(0x4008, 0x5000);
        },
        [(2, 0x4000, 16, IN), (2, 0x5000, 64, OUT)],
        (-22i64) as u64,
        no_memory,
        []
    );
}
