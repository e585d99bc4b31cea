// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Information queries whose classes write more than the output buffer.

use drsyscall_common::{
    kernel_types::windows::{
        nt_success, SessionProcessInformation, ThreadTebInformation, MEMORY_WORKING_SET_LIST,
        STATUS_INFO_LENGTH_MISMATCH, SYSTEM_SESSION_PROCESSES_INFORMATION,
        THREAD_TEB_INFORMATION,
    },
    ParamType, SysargFlags,
};

use crate::walk::Walk;

/// Whether a working set query came back with only the entry count
/// written.
pub(crate) fn working_set_count_only(result: u64, sysarg: &[u64], ptr_size: u64) -> bool {
    let arg = |i: usize| sysarg.get(i).copied().unwrap_or(0);
    result as u32 == STATUS_INFO_LENGTH_MISMATCH
        && arg(2) == MEMORY_WORKING_SET_LIST
        && arg(4) >= ptr_size
}

pub(crate) fn post_query_virtual_memory(walk: &mut Walk<'_>) {
    let ptr = walk.ptr_size();
    if !working_set_count_only(walk.result(), &walk.state.sysarg, ptr) {
        return;
    }
    walk.report_memarg_type(
        3,
        SysargFlags::WRITE,
        walk.sysarg(3),
        ptr,
        Some("MEMORY_WORKING_SET_LIST.NumberOfEntries"),
        ParamType::Struct,
        Some("MEMORY_WORKING_SET_LIST"),
    );
}

/// ThreadTebInformation copies part of the TEB to a buffer named inside
/// the input structure.
pub(crate) fn query_information_thread(walk: &mut Walk<'_>) {
    if walk.sysarg(1) != THREAD_TEB_INFORMATION || walk.pre() {
        return;
    }
    if !nt_success(walk.result() as u32) {
        return;
    }
    let info = walk.sysarg(2);
    let ptr = walk.ptr_size();
    let buffer = walk.read_ptr_at(info, ThreadTebInformation::OUTPUT_BUFFER);
    let len = walk.read_u32_at(info, ThreadTebInformation::bytes_to_read(ptr));
    if let (Some(buffer), Some(len)) = (buffer, len) {
        walk.report_memarg_type(
            2,
            SysargFlags::WRITE,
            buffer,
            len as u64,
            Some("TebInfo"),
            ParamType::Struct,
            None,
        );
    }
}

/// SystemSessionProcessesInformation takes a descriptor of the real
/// output buffer instead of the buffer itself.
pub(crate) fn query_system_information(walk: &mut Walk<'_>) {
    if walk.sysarg(0) != SYSTEM_SESSION_PROCESSES_INFORMATION {
        return;
    }
    let info = walk.sysarg(1);
    let ptr = walk.ptr_size();
    if walk.pre()
        && !walk.report_memarg_type(
            1,
            SysargFlags::READ,
            info,
            SessionProcessInformation::size(ptr),
            Some("SYSTEM_SESSION_PROCESS_INFORMATION"),
            ParamType::Struct,
            None,
        )
    {
        return;
    }
    let len = walk.read_u32_at(info, SessionProcessInformation::SIZE_OF_BUF);
    let buffer = walk.read_ptr_at(info, SessionProcessInformation::BUFFER);
    if let (Some(len), Some(buffer)) = (len, buffer) {
        walk.report_memarg_type(
            1,
            SysargFlags::WRITE,
            buffer,
            len as u64,
            Some("Buffer"),
            ParamType::Struct,
            None,
        );
    }
}

#[cfg(test)]
mod tests {
    use drsyscall_common::kernel_types::windows::STATUS_BUFFER_OVERFLOW;

    use super::*;

    #[test]
    fn working_set_count_needs_room_for_the_count() {
        let args = [0, 0, MEMORY_WORKING_SET_LIST, 0x1000, 8];
        assert!(working_set_count_only(STATUS_INFO_LENGTH_MISMATCH as u64, &args, 8));
        assert!(!working_set_count_only(STATUS_BUFFER_OVERFLOW as u64, &args, 8));

        let short = [0, 0, MEMORY_WORKING_SET_LIST, 0x1000, 4];
        assert!(!working_set_count_only(STATUS_INFO_LENGTH_MISMATCH as u64, &short, 8));
        assert!(working_set_count_only(STATUS_INFO_LENGTH_MISMATCH as u64, &short, 4));

        let basic = [0, 0, 0, 0x1000, 8];
        assert!(!working_set_count_only(STATUS_INFO_LENGTH_MISMATCH as u64, &basic, 8));
    }
}
