// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Resolves table descriptors into concrete memory regions against the
//! live state of a call.

use drsyscall_common::{
    kernel_types::windows::{STATUS_BUFFER_OVERFLOW, STATUS_BUFFER_TOO_SMALL, STATUS_PENDING},
    Misc, ParamType, SizeSpec, SysargFlags, SyscallRecord,
};
use log::{trace, warn};

use crate::{arg::param_id, options::Os, os::ArgAccess, walk::Walk};

/// Size of a string argument whose length is only known by scanning it.
pub(crate) const SIZE_DYNAMIC: u64 = u64::MAX;

/// Evaluates the size of descriptor `argnum` for the current phase.
pub(crate) fn arg_size(walk: &mut Walk<'_>, record: &SyscallRecord, argnum: usize) -> u64 {
    let desc = &record.args[argnum];
    let p = walk.personality();
    let pre = walk.pre();
    let start = walk.sysarg(desc.param as usize);

    if desc.fixed_size(p) == Some(0) && desc.is_complex(ParamType::Cstring) {
        return SIZE_DYNAMIC;
    }

    let mut size = match desc.size {
        SizeSpec::Retval => {
            if pre {
                0
            } else {
                (walk.result() as i64).max(0) as u64
            }
        }
        SizeSpec::InField => {
            let offset = match desc.misc {
                Misc::Field(off) => off as u64,
                _ => 0,
            };
            if pre {
                let mut size = 0;
                if let Some(field) = start.checked_add(offset).filter(|_| start != 0) {
                    if !walk.report_memarg_type(
                        desc.param as i32,
                        SysargFlags::READ,
                        field,
                        4,
                        None,
                        ParamType::Int,
                        None,
                    ) {
                        return 0;
                    }
                    if walk.first_iter() {
                        match walk.read_u32(field) {
                            Some(v) => size = v as u64,
                            None => warn!("cannot read struct size field at {field:#x}"),
                        }
                    } else {
                        size = walk.state.extra.size_from_field.unwrap_or(0);
                    }
                }
                if walk.first_iter() {
                    walk.state.extra.size_from_field = Some(size);
                }
                size
            } else {
                walk.state.extra.size_from_field.unwrap_or(0)
            }
        }
        SizeSpec::Fixed(s) => s.get(p) as u64,
        SizeSpec::Arg(k) => {
            let mut size = walk.sysarg(k as usize);
            let from = if k < desc.param { 0 } else { argnum + 1 };
            let size_desc = record.find_arg(from, k).map(|(_, d)| d);
            let size_width = size_desc.and_then(|d| d.fixed_size(p));
            if size_width == Some(4) {
                size &= 0xffff_ffff;
            }

            if desc.flags.contains(SysargFlags::LENGTH_INOUT) {
                let ptr = walk.sysarg(k as usize);
                size = match size_width {
                    Some(w) if ptr != 0 && w > 0 => {
                        walk.read_uint(ptr, w as usize).unwrap_or(0)
                    }
                    _ => 0,
                };
            } else if desc.flags.contains(SysargFlags::POST_SIZE_IO_STATUS) {
                // The Information field follows the Status/Pointer union.
                let status = walk.sysarg(k as usize);
                size = match walk.read_ptr_at(status, walk.ptr_size()) {
                    Some(v) => v,
                    None => {
                        warn!("cannot read IO_STATUS_BLOCK at {status:#x}");
                        0
                    }
                };
            }
            size
        }
    };

    if desc.flags.contains(SysargFlags::SIZE_PLUS_1) {
        size = size.wrapping_add(1);
    }
    if desc.flags.contains(SysargFlags::SIZE_IN_ELEMENTS) {
        let stride = match desc.misc {
            Misc::Stride(s) => s.get(p) as u64,
            Misc::StrideArg(k) => walk.sysarg(k as usize) as i32 as i64 as u64,
            _ => 1,
        };
        size = size.wrapping_mul(stride);
    }
    size
}

/// Whether descriptor `i` should be skipped because the neighbouring
/// parameter it depends on is NULL.
pub(crate) fn should_ignore(walk: &Walk<'_>, record: &SyscallRecord, i: usize) -> bool {
    let flags = record.args[i].flags;
    let neighbour = if flags.contains(SysargFlags::IGNORE_IF_NEXT_NULL) {
        record.args.get(i + 1)
    } else if flags.contains(SysargFlags::IGNORE_IF_PREV_NULL) {
        i.checked_sub(1).and_then(|j| record.args.get(j))
    } else {
        return false;
    };
    neighbour.is_some_and(|d| walk.sysarg(d.param as usize) == 0)
}

fn arg_access(walk: &mut Walk<'_>, record: &SyscallRecord, argnum: usize, start: u64, size: u64) -> bool {
    let access = ArgAccess {
        desc: &record.args[argnum],
        start,
        size,
    };
    let engine = walk.engine;
    engine.platform().handlers().arg_access(walk, &access)
}

/// Reports every memory parameter the call reads, and checks the capacity
/// of those it will write.
pub(crate) fn pre_reads_and_writes(walk: &mut Walk<'_>, record: &SyscallRecord) {
    trace!(
        "processing pre system call #{} {}",
        walk.state.num,
        record.name
    );
    let mut last_param = None;
    for (i, desc) in record.args.iter().enumerate() {
        // Double entries describe the written size; only the post pass
        // looks at the second one.
        if last_param == Some(desc.param) {
            continue;
        }
        last_param = Some(desc.param);

        if desc
            .flags
            .intersects(SysargFlags::INLINED | SysargFlags::NON_MEMARG)
        {
            continue;
        }

        let param = desc.param as usize;
        let start = walk.sysarg(param);
        let size = arg_size(walk, record, i);
        if let Some(known) = walk.state.known_sz.get_mut(param) {
            *known = size;
        }
        trace!("\tpre storing size {size:#x} for arg {param}");
        if walk.abort {
            break;
        }

        if start != 0 && size > 0 {
            let real = if size == SIZE_DYNAMIC { 0 } else { size };
            let mut skip = arg_access(walk, record, i, start, real);
            if walk.abort {
                break;
            }
            if !skip && should_ignore(walk, record, i) {
                skip = true;
            }
            if !skip && !walk.report_nonfield(desc, start, real, param_id(desc.param)) {
                break;
            }
        }
    }
}

/// Whether a Windows status leaves the second entry of a double entry
/// meaningless, so the capacity applies.
fn keeps_capacity(os: Os, result: u64) -> bool {
    os == Os::Windows
        && matches!(
            result as u32,
            STATUS_PENDING | STATUS_BUFFER_TOO_SMALL | STATUS_BUFFER_OVERFLOW
        )
}

/// Reports the memory the call wrote.
pub(crate) fn post_reads_and_writes(walk: &mut Walk<'_>, record: &SyscallRecord) {
    let result = walk.result();
    let os = walk.engine.platform().os();
    trace!(
        "processing post system call #{} {} res={:#x}",
        walk.state.num,
        record.name,
        result
    );
    let small_write_last = walk.engine.platform().small_write_last(record, result);

    let mut last_param = None;
    let mut last_size = 0;
    for (i, desc) in record.args.iter().enumerate() {
        if !desc.flags.contains(SysargFlags::WRITE) {
            continue;
        }
        debug_assert!(
            !desc.flags.contains(SysargFlags::INLINED),
            "{}: inlined parameter {} marked as written",
            record.name,
            desc.param
        );
        // Only the last parameter is written when the buffer was too small.
        if small_write_last && i + 1 < record.args.len() {
            continue;
        }

        let param = desc.param as usize;
        let start = walk.sysarg(param);
        let mut size = arg_size(walk, record, i);
        if walk.abort {
            break;
        }

        // Truncated outputs report the size needed, not the size written.
        let known = walk.state.known_sz.get(param).copied().unwrap_or(0);
        if size > known {
            trace!("\ttruncating out size of arg {param} from {size:#x} to {known:#x}");
            size = known;
        }

        if last_param == Some(desc.param) {
            // The second entry of a double entry is the size written.
            if size == 0 || keeps_capacity(os, result) {
                size = last_size;
            }
            if desc.flags.contains(SysargFlags::NO_WRITE_IF_COUNT_0) {
                let count_param = i
                    .checked_sub(1)
                    .and_then(|j| record.args.get(j))
                    .and_then(|prev| match prev.size {
                        SizeSpec::Arg(k) => Some(k as usize),
                        _ => None,
                    });
                if count_param.is_some_and(|k| walk.sysarg(k) == 0) {
                    size = 0;
                }
            }
            if start != 0 && size > 0 {
                let real = if size == SIZE_DYNAMIC { 0 } else { size };
                let mut skip = arg_access(walk, record, i, start, real);
                if !skip && should_ignore(walk, record, i) {
                    skip = true;
                }
                if !skip && !walk.report_nonfield(desc, start, real, param_id(desc.param)) {
                    break;
                }
            }
            continue;
        }

        last_param = Some(desc.param);
        last_size = size;
        // The next entry for the same parameter has the written size; keep
        // this one around in case that one turns out empty.
        if record.args.get(i + 1).is_some_and(|next| next.param == desc.param) {
            continue;
        }
        trace!("\tstart {start:#x}, size {size:#x}");
        if start != 0 && size > 0 {
            let real = if size == SIZE_DYNAMIC { 0 } else { size };
            let skip = arg_access(walk, record, i, start, real);
            if !skip && !walk.report_nonfield(desc, start, real, param_id(desc.param)) {
                break;
            }
        }
    }
}
