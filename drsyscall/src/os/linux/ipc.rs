// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! System V IPC. The control calls take a command that decides which of
//! their parameters mean anything, so they are walked here rather than
//! through secondary tables.

use drsyscall_common::{
    kernel_types::linux::{
        ipc, msginfo_size, msqid_ds_size, seminfo_size, semid_ds_size, shmid_ds_size,
        shminfo_size, GETALL, GETNCNT, GETPID, GETVAL, GETZCNT, IPC_64, IPC_INFO, IPC_RMID,
        IPC_SET, IPC_STAT, MSG_INFO, MSG_STAT, SEMBUF_SIZE, SEM_INFO, SEM_STAT, SETALL, SETVAL,
        SHM_INFO, SHM_STAT,
    },
    sizes as sz, ParamType, SysargFlags,
};
use log::warn;

use crate::{os::ArgAccess, walk::Walk};

fn report_struct(
    walk: &mut Walk<'_>,
    ordinal: usize,
    flags: SysargFlags,
    ptr: u64,
    size: u64,
    id: &'static str,
) -> bool {
    walk.report_memarg_type(ordinal as i32, flags, ptr, size, Some(id), ParamType::Struct, None)
}

/// Failed calls wrote nothing.
fn failed_post(walk: &Walk<'_>) -> bool {
    !walk.pre() && walk.signed_result() < 0
}

/// `semctl(semid, semnum, cmd, arg)` with its parameters starting at
/// `semid`. Runs both before and after the call.
fn handle_semctl(walk: &mut Walk<'_>, semid: usize) {
    let (semnum, cmd_arg, semun) = (semid + 1, semid + 2, semid + 3);
    // libc ors in the version flag.
    let cmd = walk.sysarg(cmd_arg) as u32 & !IPC_64;
    let arg = walk.sysarg(semun);
    let id = walk.sysarg(semid) as i32;
    if failed_post(walk) {
        return;
    }
    let pre = walk.pre();
    if pre
        && (!walk.report_sysarg(semid, SysargFlags::READ)
            || !walk.report_sysarg(cmd_arg, SysargFlags::READ))
    {
        return;
    }
    let ptr = walk.ptr_size();

    match cmd {
        IPC_SET => {
            if pre && walk.report_sysarg(semun, SysargFlags::READ) {
                report_struct(walk, semun, SysargFlags::READ, arg, semid_ds_size(ptr), "semctl.IPC_SET");
            }
        }
        IPC_STAT | SEM_STAT | IPC_INFO | SEM_INFO => {
            if pre && !walk.report_sysarg(semun, SysargFlags::READ) {
                return;
            }
            let (size, name) = match cmd {
                IPC_STAT => (semid_ds_size(ptr), "semctl.IPC_STAT"),
                SEM_STAT => (semid_ds_size(ptr), "semctl.SEM_STAT"),
                IPC_INFO => (seminfo_size(), "semctl.IPC_INFO"),
                _ => (seminfo_size(), "semctl.SEM_INFO"),
            };
            report_struct(walk, semun, SysargFlags::WRITE, arg, size, name);
        }
        IPC_RMID => {}
        GETALL => {
            // The array length is the size of the set.
            let count = walk.host.sem_count(id).unwrap_or(0) as u64;
            if pre && !walk.report_sysarg(semun, SysargFlags::READ) {
                return;
            }
            report_struct(walk, semun, SysargFlags::WRITE, arg, count * 2, "semctl.GETALL");
        }
        SETALL => {
            if pre {
                let count = walk.host.sem_count(id).unwrap_or(0) as u64;
                if walk.report_sysarg(semun, SysargFlags::READ) {
                    report_struct(walk, semun, SysargFlags::READ, arg, count * 2, "semctl.SETALL");
                }
            }
        }
        GETNCNT | GETZCNT | GETPID | GETVAL => {
            if pre {
                walk.report_sysarg(semnum, SysargFlags::READ);
            }
        }
        SETVAL => {
            if pre && walk.report_sysarg(semnum, SysargFlags::READ) {
                walk.report_sysarg(semun, SysargFlags::READ);
            }
        }
        other => warn!("unknown semctl command {other}"),
    }
}

/// `msgctl(msqid, cmd, buf)`; the positions differ between the direct call
/// and the `ipc` multiplexer.
fn handle_msgctl(walk: &mut Walk<'_>, msqid: usize, cmd_arg: usize, buf_arg: usize) {
    let cmd = walk.sysarg(cmd_arg) as u32 & !IPC_64;
    let buf = walk.sysarg(buf_arg);
    if failed_post(walk) {
        return;
    }
    let pre = walk.pre();
    if pre
        && (!walk.report_sysarg(msqid, SysargFlags::READ)
            || !walk.report_sysarg(cmd_arg, SysargFlags::READ))
    {
        return;
    }
    let ptr = walk.ptr_size();

    match cmd {
        IPC_INFO | MSG_INFO | IPC_STAT | MSG_STAT => {
            if pre && !walk.report_sysarg(buf_arg, SysargFlags::READ) {
                return;
            }
            // Not every field gets set.
            let (size, name) = match cmd {
                IPC_INFO => (msginfo_size(), "msgctl ipc_info"),
                MSG_INFO => (msginfo_size(), "msgctl msg_info"),
                IPC_STAT => (msqid_ds_size(ptr), "msgctl ipc_stat"),
                _ => (msqid_ds_size(ptr), "msgctl msg_stat"),
            };
            report_struct(walk, buf_arg, SysargFlags::WRITE, buf, size, name);
        }
        IPC_SET => {
            if pre && walk.report_sysarg(buf_arg, SysargFlags::READ) {
                report_struct(walk, buf_arg, SysargFlags::READ, buf, msqid_ds_size(ptr), "msgctl ipc_set");
            }
        }
        IPC_RMID => {}
        other => warn!("unknown msgctl command {other}"),
    }
}

fn handle_shmctl(walk: &mut Walk<'_>, shmid: usize, cmd_arg: usize, buf_arg: usize) {
    let cmd = walk.sysarg(cmd_arg) as u32 & !IPC_64;
    let buf = walk.sysarg(buf_arg);
    if failed_post(walk) {
        return;
    }
    let pre = walk.pre();
    if pre
        && (!walk.report_sysarg(shmid, SysargFlags::READ)
            || !walk.report_sysarg(cmd_arg, SysargFlags::READ))
    {
        return;
    }
    let ptr = walk.ptr_size();

    match cmd {
        IPC_INFO | SHM_INFO | IPC_STAT | SHM_STAT => {
            if pre && !walk.report_sysarg(buf_arg, SysargFlags::READ) {
                return;
            }
            let (size, name) = match cmd {
                IPC_INFO | SHM_INFO => (shminfo_size(ptr), "shmctl ipc_info"),
                IPC_STAT => (shmid_ds_size(ptr), "shmctl ipc_stat"),
                _ => (shmid_ds_size(ptr), "shmctl shm_stat"),
            };
            report_struct(walk, buf_arg, SysargFlags::WRITE, buf, size, name);
        }
        IPC_SET => {
            if pre && !walk.report_sysarg(buf_arg, SysargFlags::READ) {
                return;
            }
            // Reported as written on entry; a read after the call is never
            // reported, so the struct is only checked for capacity.
            let flags = if pre {
                SysargFlags::WRITE
            } else {
                SysargFlags::READ
            };
            report_struct(walk, buf_arg, flags, buf, shmid_ds_size(ptr), "shmctl ipc_set");
        }
        IPC_RMID => {}
        other => warn!("unknown shmctl command {other}"),
    }
}

pub(crate) fn semctl(walk: &mut Walk<'_>) {
    handle_semctl(walk, 0);
}

pub(crate) fn msgctl(walk: &mut Walk<'_>) {
    handle_msgctl(walk, 0, 1, 2);
}

pub(crate) fn shmctl(walk: &mut Walk<'_>) {
    handle_shmctl(walk, 0, 1, 2);
}

/// A `struct msgbuf`: a long type followed by `len` bytes of text. `flags`
/// carries READ for msgsnd and WRITE for msgrcv.
fn check_msgbuf(walk: &mut Walk<'_>, ptr: u64, len: u64, ordinal: usize, flags: SysargFlags) {
    let send = flags.contains(SysargFlags::READ);
    let mut len = len;
    if !walk.pre() {
        if send {
            return;
        }
        len = walk.signed_result().max(0) as u64;
    }
    let long = walk.ptr_size();
    let (type_id, text_id) = if send {
        ("msgsnd mtype", "msgsnd mtext")
    } else {
        ("msgrcv mtype", "msgrcv mtext")
    };
    if !walk.report_memarg_type(
        ordinal as i32,
        flags,
        ptr,
        long,
        Some(type_id),
        ParamType::Int,
        None,
    ) {
        return;
    }
    if let Some(text) = ptr.checked_add(long) {
        report_struct(walk, ordinal, flags, text, len, text_id);
    }
}

pub(crate) fn msgbuf_access(walk: &mut Walk<'_>, access: &ArgAccess<'_>) -> bool {
    check_msgbuf(
        walk,
        access.start,
        access.size,
        access.desc.param as usize,
        access.desc.flags,
    );
    true
}

/// Reports the parameters in `args`, stopping at the first the callback
/// rejects.
fn report_sysargs(walk: &mut Walk<'_>, args: &[usize]) -> bool {
    args.iter().all(|&i| walk.report_sysarg(i, SysargFlags::READ))
}

/// The 32-bit `ipc(call, first, second, third, ptr, fifth)` multiplexer.
pub(crate) fn pre_ipc(walk: &mut Walk<'_>) {
    // The high half carries an interface version.
    let request = walk.sysarg(0) as u32 & 0xffff;
    let second = walk.sysarg(2) as i32 as i64;
    let ptr = walk.sysarg(4);
    let fifth = walk.sysarg(5);
    let p = walk.personality();

    match request {
        ipc::SEMTIMEDOP | ipc::SEMOP => {
            if request == ipc::SEMTIMEDOP
                && (!walk.report_sysarg(5, SysargFlags::READ)
                    || !report_struct(
                        walk,
                        5,
                        SysargFlags::READ,
                        fifth,
                        sz::TIMESPEC.get(p) as u64,
                        "semtimedop",
                    ))
            {
                return;
            }
            if !report_sysargs(walk, &[1, 2, 4]) {
                return;
            }
            let size = (second.max(0) as u64).saturating_mul(SEMBUF_SIZE);
            report_struct(walk, 4, SysargFlags::READ, ptr, size, "semop");
        }
        ipc::SEMGET | ipc::SHMGET => {
            report_sysargs(walk, &[1, 2, 3]);
        }
        ipc::SEMCTL => handle_semctl(walk, 1),
        ipc::MSGSND => {
            // msqid, msgsz, msgflg, msgp
            if report_sysargs(walk, &[1, 2, 3, 4]) {
                check_msgbuf(walk, ptr, second.max(0) as u64, 4, SysargFlags::READ);
            }
        }
        ipc::MSGRCV => {
            // msqid, msgsz, msgflg, msgp, msgtyp
            if report_sysargs(walk, &[1, 2, 3, 4, 5]) {
                check_msgbuf(walk, ptr, second.max(0) as u64, 4, SysargFlags::WRITE);
            }
        }
        ipc::MSGGET => {
            report_sysargs(walk, &[1, 2]);
        }
        ipc::MSGCTL => handle_msgctl(walk, 1, 2, 4),
        ipc::SHMAT => {
            report_sysargs(walk, &[1, 2, 4]);
        }
        ipc::SHMDT => {
            walk.report_sysarg(4, SysargFlags::READ);
        }
        ipc::SHMCTL => handle_shmctl(walk, 1, 2, 4),
        other => warn!("unknown ipc request {other}"),
    }
}

pub(crate) fn post_ipc(walk: &mut Walk<'_>) {
    let request = walk.sysarg(0) as u32 & 0xffff;
    let ptr = walk.sysarg(4);
    match request {
        ipc::SEMCTL => handle_semctl(walk, 1),
        ipc::MSGRCV => {
            let result = walk.signed_result();
            if result >= 0 {
                check_msgbuf(walk, ptr, result as u64, 4, SysargFlags::WRITE);
            }
        }
        ipc::MSGCTL => handle_msgctl(walk, 1, 2, 4),
        ipc::SHMCTL => handle_shmctl(walk, 1, 2, 4),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        host::FakeHost,
        memarg_test,
        tests::{Trace, IN, OUT},
    };

    const SYS_MSGSND: i32 = 69;
    const SYS_MSGRCV: i32 = 70;

    fn no_memory(_: &FakeHost) {}

    memarg_test!(
        msgsnd_reads_type_and_text,
        Trace::linux(),
        SYS_MSGSND,
        [7, 0x1000, 16, 0],
        no_memory,
        [(1, 0x1000, 8, IN), (1, 0x1008, 16, IN)],
        0,
        no_memory,
        []
    );

    memarg_test!(
        msgrcv_writes_received_text,
        Trace::linux(),
        SYS_MSGRCV,
        [7, 0x1000, 64, 1, 0],
        no_memory,
        [(1, 0x1000, 8, OUT), (1, 0x1008, 64, OUT)],
        10,
        no_memory,
        [(1, 0x1000, 8, OUT), (1, 0x1008, 10, OUT)]
    );

    memarg_test!(
        failed_msgrcv_writes_nothing,
        Trace::linux(),
        SYS_MSGRCV,
        [7, 0x1000, 64, 1, 0],
        no_memory,
        [(1, 0x1000, 8, OUT), (1, 0x1008, 64, OUT)],
        (-42i64) as u64,
        no_memory,
        []
    );
}
