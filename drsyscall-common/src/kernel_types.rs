// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Kernel ABI constants and structure layouts used by the special-case
//! handlers. Layouts take the traced code's pointer size, since a 64-bit
//! engine may be looking at a 32-bit process.

pub mod linux {
    pub const CLONE_SETTLS: u64 = 0x0008_0000;
    pub const CLONE_PARENT_SETTID: u64 = 0x0010_0000;
    pub const CLONE_CHILD_CLEARTID: u64 = 0x0020_0000;
    pub const CLONE_CHILD_SETTID: u64 = 0x0100_0000;
    /// `struct user_desc`, only passed by pointer on x86.
    pub const USER_DESC_SIZE: u64 = 16;

    pub const O_CREAT: u64 = 0o100;
    pub const MREMAP_FIXED: u64 = 2;

    pub const F_GETFD: i32 = 1;
    pub const F_GETFL: i32 = 3;
    pub const F_GETOWN: i32 = 9;
    pub const F_GETSIG: i32 = 11;
    pub const F_GETLEASE: i32 = 1025;

    pub const FUTEX_WAIT: i32 = 0;
    pub const FUTEX_WAKE: i32 = 1;
    pub const FUTEX_FD: i32 = 2;
    pub const FUTEX_REQUEUE: i32 = 3;
    pub const FUTEX_CMP_REQUEUE: i32 = 4;
    /// Strips FUTEX_PRIVATE_FLAG and FUTEX_CLOCK_REALTIME.
    pub const FUTEX_CMD_MASK: i32 = !(128 | 256);

    pub const SA_RESTORER: u64 = 0x0400_0000;

    pub const ARCH_SET_FS: i32 = 0x1002;
    pub const ARCH_GET_FS: i32 = 0x1003;

    pub const PAGE_SIZE: i64 = 4096;

    pub const POLLFD_SIZE: u64 = 8;
    pub const POLLFD_REVENTS: u64 = 6;

    pub const PRCTL_NAME_SIZE: u64 = 16;
    pub const PR_SET_PDEATHSIG: u32 = 1;
    pub const PR_GET_PDEATHSIG: u32 = 2;
    pub const PR_GET_DUMPABLE: u32 = 3;
    pub const PR_SET_DUMPABLE: u32 = 4;
    pub const PR_GET_UNALIGN: u32 = 5;
    pub const PR_SET_UNALIGN: u32 = 6;
    pub const PR_GET_KEEPCAPS: u32 = 7;
    pub const PR_SET_KEEPCAPS: u32 = 8;
    pub const PR_GET_FPEMU: u32 = 9;
    pub const PR_SET_FPEMU: u32 = 10;
    pub const PR_GET_FPEXC: u32 = 11;
    pub const PR_SET_FPEXC: u32 = 12;
    pub const PR_GET_TIMING: u32 = 13;
    pub const PR_SET_TIMING: u32 = 14;
    pub const PR_SET_NAME: u32 = 15;
    pub const PR_GET_NAME: u32 = 16;
    pub const PR_GET_ENDIAN: u32 = 19;
    pub const PR_SET_ENDIAN: u32 = 20;
    pub const PR_GET_SECCOMP: u32 = 21;
    pub const PR_SET_SECCOMP: u32 = 22;
    pub const PR_CAPBSET_READ: u32 = 23;
    pub const PR_CAPBSET_DROP: u32 = 24;
    pub const PR_GET_TSC: u32 = 25;
    pub const PR_SET_TSC: u32 = 26;
    pub const PR_GET_SECUREBITS: u32 = 27;
    pub const PR_SET_SECUREBITS: u32 = 28;
    pub const PR_SET_TIMERSLACK: u32 = 29;
    pub const PR_GET_TIMERSLACK: u32 = 30;

    pub const IPC_64: u32 = 0x100;
    pub const IPC_RMID: u32 = 0;
    pub const IPC_SET: u32 = 1;
    pub const IPC_STAT: u32 = 2;
    pub const IPC_INFO: u32 = 3;
    pub const GETPID: u32 = 11;
    pub const GETVAL: u32 = 12;
    pub const GETALL: u32 = 13;
    pub const GETNCNT: u32 = 14;
    pub const GETZCNT: u32 = 15;
    pub const SETVAL: u32 = 16;
    pub const SETALL: u32 = 17;
    pub const SEM_STAT: u32 = 18;
    pub const SEM_INFO: u32 = 19;
    pub const MSG_STAT: u32 = 11;
    pub const MSG_INFO: u32 = 12;
    pub const SHM_STAT: u32 = 13;
    pub const SHM_INFO: u32 = 14;

    /// Sub-calls of the 32-bit `ipc` multiplexer.
    pub mod ipc {
        pub const SEMOP: u32 = 1;
        pub const SEMGET: u32 = 2;
        pub const SEMCTL: u32 = 3;
        pub const SEMTIMEDOP: u32 = 4;
        pub const MSGSND: u32 = 11;
        pub const MSGRCV: u32 = 12;
        pub const MSGGET: u32 = 13;
        pub const MSGCTL: u32 = 14;
        pub const SHMAT: u32 = 21;
        pub const SHMDT: u32 = 22;
        pub const SHMGET: u32 = 23;
        pub const SHMCTL: u32 = 24;
    }

    /// Sub-calls of the 32-bit `socketcall` multiplexer.
    pub mod socketcall {
        pub const SOCKET: u32 = 1;
        pub const BIND: u32 = 2;
        pub const CONNECT: u32 = 3;
        pub const LISTEN: u32 = 4;
        pub const ACCEPT: u32 = 5;
        pub const GETSOCKNAME: u32 = 6;
        pub const GETPEERNAME: u32 = 7;
        pub const SOCKETPAIR: u32 = 8;
        pub const SEND: u32 = 9;
        pub const RECV: u32 = 10;
        pub const SENDTO: u32 = 11;
        pub const RECVFROM: u32 = 12;
        pub const SHUTDOWN: u32 = 13;
        pub const SETSOCKOPT: u32 = 14;
        pub const GETSOCKOPT: u32 = 15;
        pub const SENDMSG: u32 = 16;
        pub const RECVMSG: u32 = 17;
        pub const ACCEPT4: u32 = 18;
    }

    pub const AF_UNIX: u16 = 1;
    pub const AF_INET: u16 = 2;
    pub const AF_INET6: u16 = 10;
    pub const AF_NETLINK: u16 = 16;
    pub const UNIX_PATH_MAX: u64 = 108;

    pub const IPMI_SYSTEM_INTERFACE_ADDR_TYPE: i32 = 0x0c;
    pub const IPMI_LAN_ADDR_TYPE: i32 = 0x04;

    /// `struct sembuf`.
    pub const SEMBUF_SIZE: u64 = 6;

    pub const fn semid_ds_size(ptr: u64) -> u64 {
        if ptr == 8 {
            104
        } else {
            72
        }
    }

    pub const fn seminfo_size() -> u64 {
        40
    }

    pub const fn msqid_ds_size(ptr: u64) -> u64 {
        if ptr == 8 {
            120
        } else {
            88
        }
    }

    pub const fn msginfo_size() -> u64 {
        32
    }

    pub const fn shmid_ds_size(ptr: u64) -> u64 {
        if ptr == 8 {
            112
        } else {
            84
        }
    }

    pub const fn shminfo_size(ptr: u64) -> u64 {
        5 * ptr
    }

    /// `struct kernel_sigaction`: handler, flags, restorer, mask.
    pub struct Sigaction;

    impl Sigaction {
        pub const fn flags(ptr: u64) -> u64 {
            ptr
        }

        pub const fn restorer(ptr: u64) -> u64 {
            2 * ptr
        }

        pub const fn mask(ptr: u64) -> u64 {
            3 * ptr
        }

        pub const fn size(ptr: u64) -> u64 {
            3 * ptr + 8
        }
    }

    /// `struct __sysctl_args`.
    pub struct SysctlArgs;

    impl SysctlArgs {
        pub const NAME: u64 = 0;

        pub const fn nlen(ptr: u64) -> u64 {
            ptr
        }

        pub const fn oldval(ptr: u64) -> u64 {
            2 * ptr
        }

        pub const fn oldlenp(ptr: u64) -> u64 {
            3 * ptr
        }

        pub const fn newval(ptr: u64) -> u64 {
            4 * ptr
        }

        pub const fn newlen(ptr: u64) -> u64 {
            5 * ptr
        }
    }

    /// `struct iovec`: base pointer then length.
    pub const fn iovec_size(ptr: u64) -> u64 {
        2 * ptr
    }

    /// `struct msghdr`.
    pub struct Msghdr;

    impl Msghdr {
        pub const NAME: u64 = 0;

        pub const fn namelen(ptr: u64) -> u64 {
            ptr
        }

        pub const fn iov(ptr: u64) -> u64 {
            2 * ptr
        }

        pub const fn iovlen(ptr: u64) -> u64 {
            3 * ptr
        }

        pub const fn control(ptr: u64) -> u64 {
            4 * ptr
        }

        pub const fn controllen(ptr: u64) -> u64 {
            5 * ptr
        }

        pub const fn flags(ptr: u64) -> u64 {
            6 * ptr
        }

        pub const fn size(ptr: u64) -> u64 {
            7 * ptr
        }
    }

    /// `struct ifconf`: length, padded to a pointer, then the buffer.
    pub struct Ifconf;

    impl Ifconf {
        pub const LEN: u64 = 0;

        pub const fn buf(ptr: u64) -> u64 {
            ptr
        }

        pub const fn size(ptr: u64) -> u64 {
            2 * ptr
        }
    }

    /// `struct ipmi_req`: addr, addr_len, msgid, then `struct ipmi_msg`
    /// (netfn, cmd, data_len, data).
    pub struct IpmiReq;

    impl IpmiReq {
        pub const ADDR: u64 = 0;

        pub const fn addr_len(ptr: u64) -> u64 {
            ptr
        }

        pub const fn msg_data_len(ptr: u64) -> u64 {
            3 * ptr + 2
        }

        pub const fn msg_data(ptr: u64) -> u64 {
            4 * ptr
        }

        pub const fn size(ptr: u64) -> u64 {
            5 * ptr
        }
    }

    /// `struct ipmi_recv`: recv_type, addr, addr_len, msgid, then the msg.
    pub struct IpmiRecv;

    impl IpmiRecv {
        pub const fn addr(ptr: u64) -> u64 {
            ptr
        }

        pub const fn addr_len(ptr: u64) -> u64 {
            2 * ptr
        }

        pub const fn msg_data_len(ptr: u64) -> u64 {
            4 * ptr + 2
        }

        pub const fn msg_data(ptr: u64) -> u64 {
            5 * ptr
        }

        pub const fn size(ptr: u64) -> u64 {
            6 * ptr
        }
    }
}

pub mod windows {
    pub const STATUS_PENDING: u32 = 0x0000_0103;
    pub const STATUS_BUFFER_OVERFLOW: u32 = 0x8000_0005;
    pub const STATUS_INFO_LENGTH_MISMATCH: u32 = 0xC000_0004;
    pub const STATUS_BUFFER_TOO_SMALL: u32 = 0xC000_0023;

    pub const MEMORY_WORKING_SET_LIST: u64 = 1;
    pub const THREAD_TEB_INFORMATION: u64 = 26;
    pub const SYSTEM_SESSION_PROCESSES_INFORMATION: u64 = 53;

    pub const SE_DACL_PRESENT: u16 = 0x0004;
    pub const SE_SACL_PRESENT: u16 = 0x0010;

    /// `SECURITY_QUALITY_OF_SERVICE` as the kernel reads it.
    pub const SECURITY_QOS_SIZE: u64 = 12;

    pub const fn nt_success(status: u32) -> bool {
        (status as i32) >= 0
    }

    /// `UNICODE_STRING`: two 16-bit lengths then the buffer pointer.
    pub struct UnicodeString;

    impl UnicodeString {
        pub const LENGTH: u64 = 0;
        pub const MAXIMUM_LENGTH: u64 = 2;

        pub const fn buffer(ptr: u64) -> u64 {
            ptr
        }

        pub const fn size(ptr: u64) -> u64 {
            2 * ptr
        }
    }

    pub struct ObjectAttributes;

    impl ObjectAttributes {
        pub const LENGTH: u64 = 0;

        pub const fn root_directory(ptr: u64) -> u64 {
            ptr
        }

        pub const fn object_name(ptr: u64) -> u64 {
            2 * ptr
        }

        pub const fn attributes(ptr: u64) -> u64 {
            3 * ptr
        }

        pub const fn security_descriptor(ptr: u64) -> u64 {
            4 * ptr
        }

        pub const fn security_qos(ptr: u64) -> u64 {
            5 * ptr
        }

        pub const fn size(ptr: u64) -> u64 {
            6 * ptr
        }
    }

    /// Self-relative header of `SECURITY_DESCRIPTOR`.
    pub struct SecurityDescriptor;

    impl SecurityDescriptor {
        pub const CONTROL: u64 = 2;

        pub const fn owner(ptr: u64) -> u64 {
            if ptr == 8 {
                8
            } else {
                4
            }
        }

        pub const fn sacl(ptr: u64) -> u64 {
            Self::owner(ptr) + 2 * ptr
        }

        pub const fn dacl(ptr: u64) -> u64 {
            Self::sacl(ptr) + ptr
        }

        pub const fn size(ptr: u64) -> u64 {
            Self::dacl(ptr) + ptr
        }
    }

    /// `THREAD_TEB_INFORMATION`: output buffer, offset and length.
    pub struct ThreadTebInformation;

    impl ThreadTebInformation {
        pub const OUTPUT_BUFFER: u64 = 0;

        pub const fn bytes_to_read(ptr: u64) -> u64 {
            ptr + 4
        }

        pub const fn size(ptr: u64) -> u64 {
            ptr + 8
        }
    }

    /// `SYSTEM_SESSION_PROCESS_INFORMATION`.
    pub struct SessionProcessInformation;

    impl SessionProcessInformation {
        pub const SIZE_OF_BUF: u64 = 4;
        pub const BUFFER: u64 = 8;

        pub const fn size(ptr: u64) -> u64 {
            8 + ptr
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{linux, windows};

    #[test]
    fn msghdr_layouts() {
        assert_eq!(linux::Msghdr::size(8), 56);
        assert_eq!(linux::Msghdr::size(4), 28);
        assert_eq!(linux::Msghdr::flags(8), 48);
        assert_eq!(linux::Msghdr::controllen(4), 20);
    }

    #[test]
    fn sigaction_layouts() {
        assert_eq!(linux::Sigaction::size(8), 32);
        assert_eq!(linux::Sigaction::size(4), 20);
        assert_eq!(linux::Sigaction::mask(8), 24);
    }

    #[test]
    fn security_descriptor_layouts() {
        assert_eq!(windows::SecurityDescriptor::sacl(8), 24);
        assert_eq!(windows::SecurityDescriptor::dacl(8), 32);
        assert_eq!(windows::SecurityDescriptor::sacl(4), 12);
        assert_eq!(windows::SecurityDescriptor::dacl(4), 16);
    }

    #[test]
    fn ipmi_layouts() {
        assert_eq!(linux::IpmiReq::size(8), 40);
        assert_eq!(linux::IpmiReq::size(4), 20);
        assert_eq!(linux::IpmiRecv::size(8), 48);
        assert_eq!(linux::IpmiReq::msg_data(8), 32);
    }
}
