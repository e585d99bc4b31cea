// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Linux system calls. Numbers are given for x86_64, x86, arm and aarch64.
//! Calls without descriptors still get a record so they are known by name
//! and number; their memory arguments are either irregular (handled in code)
//! or not yet described.

use super::dsl::*;
use super::linux_ioctl::IOCTLS;
use crate::{SecondaryTable, SyscallRecord};

pub static SYSCALLS: &[SyscallRecord] = &[
    syscall!(nums(219, 0, 0, 128), "restart_syscall", OK, RLONG, 0, []),
    syscall!(nums(60, 1, 1, 93), "exit", OK, RLONG, 1, []),
    syscall!(nums(57, 2, 2, -1), "fork", OK, RLONG, 0, []),
    syscall!(nums(0, 3, 3, 63), "read", OK, RLONG, 3, [
        arg(0, fixed(4), INLINED).ty(SIGNED_INT),
        arg(1, from(2), W),
        arg(1, RET, W),
        arg(2, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
    ]),
    syscall!(nums(1, 4, 4, 64), "write", OK, RLONG, 3, [
        arg(0, fixed(4), INLINED).ty(SIGNED_INT),
        arg(1, from(2), R),
        arg(2, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
    ]),
    syscall!(nums(2, 5, 5, -1), "open", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(3, 6, 6, 57), "close", OK, RLONG, 1, []),
    syscall!(nums(-1, 7, 7, -1), "waitpid", OK, RLONG, 3, [
        arg(1, fixed(4), W),
    ]),
    syscall!(nums(85, 8, 8, -1), "creat", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(86, 9, 9, -1), "link", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(87, 10, 10, -1), "unlink", OK, RLONG, 1, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(59, 11, 11, 221), "execve", OK, RLONG, 3, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, abi(sz::PTR), R | CT).ty(CSTRARRAY),
        arg(2, abi(sz::PTR), R | CT).ty(CSTRARRAY),
    ]),
    syscall!(nums(80, 12, 12, 49), "chdir", OK, RLONG, 1, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(201, 13, 13, -1), "time", OK, RLONG, 1, [
        arg(0, abi(sz::LONG), W),
    ]),
    syscall!(nums(133, 14, 14, -1), "mknod", OK, RLONG, 3, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(90, 15, 15, -1), "chmod", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(-1, 16, 16, -1), "lchown16", OK, RLONG, 3, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(-1, 18, 18, -1), "stat", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, abi(sz::OLD_KERNEL_STAT), W),
    ]),
    syscall!(nums(4, -1, -1, -1), "stat", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, abi(sz::STAT), W),
    ]),
    syscall!(nums(8, 19, 19, 62), "lseek", OK, RLONG, 3, []),
    syscall!(nums(39, 20, 20, 172), "getpid", OK, RLONG, 0, []),
    syscall!(nums(165, 21, 21, 40), "mount", OK, RLONG, 5, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(-1, 22, 22, -1), "oldumount", OK, RLONG, 1, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(-1, 23, 23, -1), "setuid16", OK, RLONG, 1, []),
    syscall!(nums(-1, 24, 24, -1), "getuid16", OK, RLONG, 0, []),
    syscall!(nums(-1, 25, 25, -1), "stime", OK, RLONG, 1, [
        arg(0, abi(sz::LONG), R),
    ]),
    syscall!(nums(101, 26, 26, 117), "ptrace", OK, RLONG, 4, []),
    syscall!(nums(37, 27, 27, -1), "alarm", OK, RLONG, 1, []),
    syscall!(nums(-1, 28, 28, -1), "fstat", OK, RLONG, 2, [
        arg(1, abi(sz::OLD_KERNEL_STAT), W),
    ]),
    syscall!(nums(5, -1, -1, 80), "fstat", OK, RLONG, 2, [
        arg(1, abi(sz::STAT), W),
    ]),
    syscall!(nums(34, 29, 29, -1), "pause", OK, RLONG, 0, []),
    syscall!(nums(132, 30, 30, -1), "utime", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, abi(sz::UTIMBUF), R),
    ]),
    syscall!(nums(21, 33, 33, -1), "access", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(-1, 34, 34, -1), "nice", OK, RLONG, 1, []),
    syscall!(nums(162, 36, 36, 81), "sync", OK, RLONG, 0, []),
    syscall!(nums(62, 37, 37, 129), "kill", OK, RLONG, 2, []),
    syscall!(nums(82, 38, 38, -1), "rename", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(83, 39, 39, -1), "mkdir", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(84, 40, 40, -1), "rmdir", OK, RLONG, 1, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(32, 41, 41, 23), "dup", OK, RLONG, 1, []),
    syscall!(nums(22, 42, 42, -1), "pipe", OK, RLONG, 1, [
        arg(0, fixed(8), W),
    ]),
    syscall!(nums(100, 43, 43, 153), "times", OK, RLONG, 1, [
        arg(0, abi(sz::TMS), W),
    ]),
    syscall!(nums(12, 45, 45, 214), "brk", OK, RLONG, 1, []),
    syscall!(nums(-1, 46, 46, -1), "setgid16", OK, RLONG, 1, []),
    syscall!(nums(-1, 47, 47, -1), "getgid16", OK, RLONG, 0, []),
    syscall!(nums(-1, 48, 48, -1), "signal", OK, RLONG, 2, []),
    syscall!(nums(-1, 49, 49, -1), "geteuid16", OK, RLONG, 0, []),
    syscall!(nums(-1, 50, 50, -1), "getegid16", OK, RLONG, 0, []),
    syscall!(nums(163, 51, 51, 89), "acct", OK, RLONG, 1, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(-1, 52, 52, -1), "umount", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(16, 54, 54, 29), "ioctl", OK | SECONDARY_TABLE, RLONG, 3, [
        arg(1, fixed(4), INLINED).ty(UNSIGNED_INT),
    ]; SecondaryTable { entries: IOCTLS, base: None }),
    syscall!(nums(72, 55, 55, 25), "fcntl", OK, RLONG, 2, []),
    syscall!(nums(109, 57, 57, 154), "setpgid", OK, RLONG, 2, []),
    syscall!(nums(-1, 59, 59, -1), "olduname", OK, RLONG, 1, []),
    syscall!(nums(95, 60, 60, 166), "umask", OK, RLONG, 1, []),
    syscall!(nums(161, 61, 61, 51), "chroot", OK, RLONG, 1, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(136, 62, 62, -1), "ustat", OK, RLONG, 2, [
        arg(1, abi(sz::USTAT), W),
    ]),
    syscall!(nums(33, 63, 63, -1), "dup2", OK, RLONG, 2, []),
    syscall!(nums(110, 64, 64, 173), "getppid", OK, RLONG, 0, []),
    syscall!(nums(111, 65, 65, -1), "getpgrp", OK, RLONG, 0, []),
    syscall!(nums(112, 66, 66, 157), "setsid", OK, RLONG, 0, []),
    syscall!(nums(-1, 67, 67, -1), "sigaction", OK, RLONG, 3, []),
    syscall!(nums(-1, 68, 68, -1), "sgetmask", OK, RLONG, 0, []),
    syscall!(nums(-1, 69, 69, -1), "ssetmask", OK, RLONG, 1, []),
    syscall!(nums(-1, 70, 70, -1), "setreuid16", OK, RLONG, 2, []),
    syscall!(nums(-1, 71, 71, -1), "setregid16", OK, RLONG, 2, []),
    syscall!(nums(-1, 72, 72, -1), "sigsuspend", OK, RLONG, 3, []),
    syscall!(nums(-1, 73, 73, -1), "sigpending", OK, RLONG, 1, []),
    syscall!(nums(170, 74, 74, 161), "sethostname", OK, RLONG, 2, [
        arg(0, from(1), R),
    ]),
    syscall!(nums(160, 75, 75, 164), "setrlimit", OK, RLONG, 2, [
        arg(1, abi(sz::RLIMIT), R),
    ]),
    syscall!(nums(-1, 76, 76, -1), "old_getrlimit", OK, RLONG, 2, [
        arg(1, abi(sz::RLIMIT), W),
    ]),
    syscall!(nums(98, 77, 77, 165), "getrusage", OK, RLONG, 2, [
        arg(1, abi(sz::RUSAGE), W),
    ]),
    syscall!(nums(96, 78, 78, 169), "gettimeofday", OK, RLONG, 2, [
        arg(0, abi(sz::TIMEVAL), W),
        arg(1, abi(sz::TIMEZONE), W),
    ]),
    syscall!(nums(164, 79, 79, 170), "settimeofday", OK, RLONG, 2, [
        arg(0, abi(sz::TIMEVAL), R),
        arg(1, abi(sz::TIMEZONE), R),
    ]),
    syscall!(nums(-1, 80, 80, -1), "getgroups16", OK, RLONG, 2, []),
    syscall!(nums(-1, 81, 81, -1), "setgroups16", OK, RLONG, 2, []),
    syscall!(nums(-1, 82, 82, -1), "old_select", OK, RLONG, 0, []),
    syscall!(nums(88, 83, 83, -1), "symlink", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(-1, 84, 84, -1), "lstat", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, abi(sz::OLD_KERNEL_STAT), W),
    ]),
    syscall!(nums(6, -1, -1, -1), "lstat", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, abi(sz::STAT), W),
    ]),
    syscall!(nums(89, 85, 85, -1), "readlink", OK, RLONG, 3, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, from(2), W),
        arg(1, RET, W),
    ]),
    syscall!(nums(134, 86, 86, -1), "uselib", OK, RLONG, 1, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(167, 87, 87, 224), "swapon", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(169, 88, 88, 142), "reboot", OK, RLONG, 4, []),
    syscall!(nums(-1, 89, 89, -1), "old_readdir", OK, RLONG, 3, []),
    syscall!(nums(-1, 90, 90, -1), "mmap", OK, RLONG, 0, []),
    syscall!(nums(11, 91, 91, 215), "munmap", OK, RLONG, 2, []),
    syscall!(nums(76, 92, 92, 45), "truncate", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(77, 93, 93, 46), "ftruncate", OK, RLONG, 2, []),
    syscall!(nums(91, 94, 94, 52), "fchmod", OK, RLONG, 2, []),
    syscall!(nums(-1, 95, 95, -1), "fchown16", OK, RLONG, 3, []),
    syscall!(nums(140, 96, 96, 141), "getpriority", OK, RLONG, 2, []),
    syscall!(nums(141, 97, 97, 140), "setpriority", OK, RLONG, 3, []),
    syscall!(nums(137, 99, 99, 43), "statfs", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, abi(sz::STATFS), W),
    ]),
    syscall!(nums(138, 100, 100, 44), "fstatfs", OK, RLONG, 2, [
        arg(1, abi(sz::STATFS), W),
    ]),
    syscall!(nums(173, 101, 101, -1), "ioperm", OK, RLONG, 3, []),
    syscall!(nums(-1, 102, 102, -1), "socketcall", OK, RLONG, 2, []),
    syscall!(nums(103, 103, 103, 116), "syslog", OK, RLONG, 3, [
        arg(1, from(2), W),
    ]),
    syscall!(nums(38, 104, 104, 103), "setitimer", OK, RLONG, 3, [
        arg(1, abi(sz::ITIMERVAL), R),
        arg(2, abi(sz::ITIMERVAL), W),
    ]),
    syscall!(nums(36, 105, 105, 102), "getitimer", OK, RLONG, 2, [
        arg(1, abi(sz::ITIMERVAL), W),
    ]),
    syscall!(nums(-1, 106, 106, -1), "newstat", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, abi(sz::STAT), W),
    ]),
    syscall!(nums(-1, 107, 107, -1), "newlstat", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, abi(sz::STAT), W),
    ]),
    syscall!(nums(-1, 108, 108, -1), "newfstat", OK, RLONG, 2, [
        arg(1, abi(sz::STAT), W),
    ]),
    syscall!(nums(63, 109, 109, 160), "uname", OK, RLONG, 1, []),
    syscall!(nums(172, 110, 110, -1), "iopl", OK, RLONG, 1, []),
    syscall!(nums(153, 111, 111, 58), "vhangup", OK, RLONG, 0, []),
    syscall!(nums(-1, 113, 113, -1), "vm86old", OK, RLONG, 1, []),
    syscall!(nums(61, 114, 114, 260), "wait4", OK, RLONG, 4, [
        arg(1, fixed(4), W),
        arg(3, abi(sz::RUSAGE), W),
    ]),
    syscall!(nums(168, 115, 115, 225), "swapoff", OK, RLONG, 1, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(99, 116, 116, 179), "sysinfo", OK, RLONG, 1, [
        arg(0, abi(sz::SYSINFO), W),
    ]),
    syscall!(nums(-1, 117, 117, -1), "ipc", OK, RLONG, 1, []),
    syscall!(nums(74, 118, 118, 82), "fsync", OK, RLONG, 1, []),
    syscall!(nums(-1, 119, 119, -1), "sigreturn", OK, RLONG, 0, []),
    syscall!(nums(56, 120, 120, 220), "clone", OK, RLONG, 2, []),
    syscall!(nums(171, 121, 121, 162), "setdomainname", OK, RLONG, 2, [
        arg(0, from(1), R),
    ]),
    syscall!(nums(-1, 122, 122, -1), "newuname", OK, RLONG, 1, [
        arg(0, abi(sz::NEW_UTSNAME), W),
    ]),
    syscall!(nums(154, 123, 123, -1), "modify_ldt", OK, RLONG, 3, []),
    syscall!(nums(159, 124, 124, 171), "adjtimex", OK, RLONG, 1, [
        arg(0, abi(sz::TIMEX), R),
    ]),
    syscall!(nums(10, 125, 125, 226), "mprotect", OK, RLONG, 3, []),
    syscall!(nums(-1, 126, 126, -1), "sigprocmask", OK, RLONG, 3, []),
    syscall!(nums(175, 128, 128, 105), "init_module", OK, RLONG, 3, [
        arg(0, from(1), R),
        arg(2, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(176, 129, 129, 106), "delete_module", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(179, 131, 131, 60), "quotactl", OK, RLONG, 4, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(121, 132, 132, 155), "getpgid", OK, RLONG, 1, []),
    syscall!(nums(81, 133, 133, 50), "fchdir", OK, RLONG, 1, []),
    syscall!(nums(-1, 134, 134, -1), "bdflush", OK, RLONG, 2, []),
    syscall!(nums(139, 135, 135, -1), "sysfs", OK, RLONG, 3, []),
    syscall!(nums(135, 136, 136, 92), "personality", OK, RLONG, 1, []),
    syscall!(nums(-1, 138, 138, -1), "setfsuid16", OK, RLONG, 1, []),
    syscall!(nums(-1, 139, 139, -1), "setfsgid16", OK, RLONG, 1, []),
    syscall!(nums(-1, 140, 140, -1), "llseek", OK, RLONG, 5, [
        arg(3, fixed(8), W),
    ]),
    syscall!(nums(78, 141, 141, -1), "getdents", OK, RLONG, 3, [
        arg(1, from(2), W),
        arg(1, RET, W),
    ]),
    syscall!(nums(23, 142, 142, -1), "select", OK, RLONG, 5, []),
    syscall!(nums(73, 143, 143, 32), "flock", OK, RLONG, 2, []),
    syscall!(nums(26, 144, 144, 227), "msync", OK, RLONG, 3, [
        arg(0, from(1), R),
    ]),
    syscall!(nums(19, 145, 145, 65), "readv", OK, RLONG, 3, []),
    syscall!(nums(20, 146, 146, 66), "writev", OK, RLONG, 3, []),
    syscall!(nums(124, 147, 147, 156), "getsid", OK, RLONG, 1, []),
    syscall!(nums(75, 148, 148, 83), "fdatasync", OK, RLONG, 1, []),
    syscall!(nums(156, 149, 149, -1), "_sysctl", OK, RLONG, 1, [
        arg(0, abi(sz::SYSCTL_ARGS), R),
    ]),
    syscall!(nums(149, 150, 150, 228), "mlock", OK, RLONG, 2, []),
    syscall!(nums(150, 151, 151, 229), "munlock", OK, RLONG, 2, []),
    syscall!(nums(151, 152, 152, 230), "mlockall", OK, RLONG, 1, []),
    syscall!(nums(152, 153, 153, 231), "munlockall", OK, RLONG, 0, []),
    syscall!(nums(142, 154, 154, 118), "sched_setparam", OK, RLONG, 2, [
        arg(1, abi(sz::SCHED_PARAM), R),
    ]),
    syscall!(nums(143, 155, 155, 121), "sched_getparam", OK, RLONG, 2, [
        arg(1, abi(sz::SCHED_PARAM), W),
    ]),
    syscall!(nums(144, 156, 156, 119), "sched_setscheduler", OK, RLONG, 3, [
        arg(2, abi(sz::SCHED_PARAM), R),
    ]),
    syscall!(nums(145, 157, 157, 120), "sched_getscheduler", OK, RLONG, 1, []),
    syscall!(nums(24, 158, 158, 124), "sched_yield", OK, RLONG, 0, []),
    syscall!(nums(146, 159, 159, 125), "sched_get_priority_max", OK, RLONG, 1, []),
    syscall!(nums(147, 160, 160, 126), "sched_get_priority_min", OK, RLONG, 1, []),
    syscall!(nums(148, 161, 161, 127), "sched_rr_get_interval", OK, RLONG, 2, []),
    syscall!(nums(35, 162, 162, 101), "nanosleep", OK, RLONG, 2, [
        arg(0, abi(sz::TIMESPEC), R),
        arg(1, abi(sz::TIMESPEC), W),
    ]),
    syscall!(nums(25, 163, 163, 216), "mremap", OK, RLONG, 4, []),
    syscall!(nums(-1, 164, 164, -1), "setresuid16", OK, RLONG, 3, []),
    syscall!(nums(-1, 165, 165, -1), "getresuid16", OK, RLONG, 3, []),
    syscall!(nums(-1, 166, 166, -1), "vm86", OK, RLONG, 2, []),
    syscall!(nums(7, 168, 168, -1), "poll", OK, RLONG, 3, []),
    syscall!(nums(180, 169, 169, 42), "nfsservctl", OK, RLONG, 3, []),
    syscall!(nums(-1, 170, 170, -1), "setresgid16", OK, RLONG, 3, []),
    syscall!(nums(-1, 171, 171, -1), "getresgid16", OK, RLONG, 3, []),
    syscall!(nums(157, 172, 172, 167), "prctl", OK, RLONG, 1, []),
    syscall!(nums(15, 173, 173, 139), "rt_sigreturn", OK, RLONG, 0, []),
    syscall!(nums(13, 174, 174, 134), "rt_sigaction", OK, RLONG, 4, [
        arg(2, abi(sz::KERNEL_SIGACTION), W),
    ]),
    syscall!(nums(14, 175, 175, 135), "rt_sigprocmask", OK, RLONG, 4, [
        arg(1, abi(sz::SIGSET), R),
        arg(2, abi(sz::SIGSET), W),
    ]),
    syscall!(nums(127, 176, 176, 136), "rt_sigpending", OK, RLONG, 2, [
        arg(0, abi(sz::SIGSET), W),
    ]),
    syscall!(nums(128, 177, 177, 137), "rt_sigtimedwait", OK, RLONG, 4, [
        arg(0, abi(sz::SIGSET), R),
        arg(1, abi(sz::SIGINFO), W),
        arg(2, abi(sz::TIMESPEC), R),
    ]),
    syscall!(nums(129, 178, 178, 138), "rt_sigqueueinfo", OK, RLONG, 3, [
        arg(2, abi(sz::SIGINFO), R),
    ]),
    syscall!(nums(130, 179, 179, 133), "rt_sigsuspend", OK, RLONG, 2, []),
    syscall!(nums(17, 180, 180, 67), "pread64", OK, RLONG, 4, [
        arg(1, from(2), W),
        arg(1, RET, W),
    ]),
    syscall!(nums(18, 181, 181, 68), "pwrite64", OK, RLONG, 4, [
        arg(1, from(2), R),
    ]),
    syscall!(nums(-1, 182, 182, -1), "chown16", OK, RLONG, 3, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(79, 183, 183, 17), "getcwd", OK, RLONG, 2, [
        arg(0, from(1), W),
        arg(0, RET, W),
    ]),
    syscall!(nums(125, 184, 184, 90), "capget", OK, RLONG, 2, [
        arg(0, abi(sz::PTR), R),
        arg(1, abi(sz::PTR), W),
    ]),
    syscall!(nums(126, 185, 185, 91), "capset", OK, RLONG, 2, [
        arg(0, abi(sz::PTR), R),
        arg(1, abi(sz::PTR), R),
    ]),
    syscall!(nums(131, 186, 186, 132), "sigaltstack", OK, RLONG, 2, []),
    syscall!(nums(40, 187, 187, 71), "sendfile", OK, RLONG, 4, [
        arg(2, abi(sz::LONG), W),
    ]),
    syscall!(nums(58, 190, 190, -1), "vfork", OK, RLONG, 0, []),
    syscall!(nums(97, 191, 191, 163), "getrlimit", OK, RLONG, 2, [
        arg(1, abi(sz::RLIMIT), W),
    ]),
    syscall!(nums(-1, 192, 192, -1), "mmap2", OK, RLONG, 6, []),
    syscall!(nums(9, -1, -1, 222), "mmap", OK, RLONG, 6, []),
    syscall!(nums(-1, 193, 193, -1), "truncate64", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(-1, 194, 194, -1), "ftruncate64", OK, RLONG, 2, []),
    syscall!(nums(-1, 195, 195, -1), "stat64", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, abi(sz::STAT64), W),
    ]),
    syscall!(nums(-1, 196, 196, -1), "lstat64", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, abi(sz::STAT64), W),
    ]),
    syscall!(nums(-1, 197, 197, -1), "fstat64", OK, RLONG, 2, [
        arg(1, abi(sz::STAT64), W),
    ]),
    syscall!(nums(94, 198, 198, -1), "lchown", OK, RLONG, 3, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(102, 199, 199, 174), "getuid", OK, RLONG, 0, []),
    syscall!(nums(104, 200, 200, 176), "getgid", OK, RLONG, 0, []),
    syscall!(nums(107, 201, 201, 175), "geteuid", OK, RLONG, 0, []),
    syscall!(nums(108, 202, 202, 177), "getegid", OK, RLONG, 0, []),
    syscall!(nums(113, 203, 203, 145), "setreuid", OK, RLONG, 2, []),
    syscall!(nums(114, 204, 204, 143), "setregid", OK, RLONG, 2, []),
    syscall!(nums(115, 205, 205, 158), "getgroups", OK, RLONG, 2, []),
    syscall!(nums(116, 206, 206, 159), "setgroups", OK, RLONG, 2, []),
    syscall!(nums(93, 207, 207, 55), "fchown", OK, RLONG, 3, []),
    syscall!(nums(117, 208, 208, 147), "setresuid", OK, RLONG, 3, []),
    syscall!(nums(118, 209, 209, 148), "getresuid", OK, RLONG, 3, [
        arg(0, fixed(4), W),
        arg(1, fixed(4), W),
        arg(2, fixed(4), W),
    ]),
    syscall!(nums(119, 210, 210, 149), "setresgid", OK, RLONG, 3, []),
    syscall!(nums(120, 211, 211, 150), "getresgid", OK, RLONG, 3, [
        arg(0, fixed(4), W),
        arg(1, fixed(4), W),
        arg(2, fixed(4), W),
    ]),
    syscall!(nums(92, 212, 212, -1), "chown", OK, RLONG, 3, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(105, 213, 213, 146), "setuid", OK, RLONG, 1, []),
    syscall!(nums(106, 214, 214, 144), "setgid", OK, RLONG, 1, []),
    syscall!(nums(122, 215, 215, 151), "setfsuid", OK, RLONG, 1, []),
    syscall!(nums(123, 216, 216, 152), "setfsgid", OK, RLONG, 1, []),
    syscall!(nums(155, 217, 218, 41), "pivot_root", OK, RLONG, 2, []),
    syscall!(nums(27, 218, 219, 232), "mincore", OK, RLONG, 3, [
        arg(2, from(1), W),
    ]),
    syscall!(nums(28, 219, 220, 233), "madvise", OK, RLONG, 3, []),
    syscall!(nums(217, 220, 217, 61), "getdents64", OK, RLONG, 3, [
        arg(1, from(2), W),
        arg(1, RET, W),
    ]),
    syscall!(nums(-1, 221, 221, -1), "fcntl64", OK, RLONG, 2, []),
    syscall!(nums(186, 224, 224, 178), "gettid", OK, RLONG, 0, []),
    syscall!(nums(187, 225, 225, 213), "readahead", OK, RLONG, 3, []),
    syscall!(nums(188, 226, 226, 5), "setxattr", OK, RLONG, 5, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, from(3), R),
    ]),
    syscall!(nums(189, 227, 227, 6), "lsetxattr", OK, RLONG, 5, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, from(3), R),
    ]),
    syscall!(nums(190, 228, 228, 7), "fsetxattr", OK, RLONG, 5, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, from(3), R),
    ]),
    syscall!(nums(191, 229, 229, 8), "getxattr", OK, RLONG, 4, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, from(3), W),
        arg(2, RET, W),
    ]),
    syscall!(nums(192, 230, 230, 9), "lgetxattr", OK, RLONG, 4, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, from(3), W),
        arg(2, RET, W),
    ]),
    syscall!(nums(193, 231, 231, 10), "fgetxattr", OK, RLONG, 4, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, from(3), W),
        arg(2, RET, W),
    ]),
    syscall!(nums(194, 232, 232, 11), "listxattr", OK, RLONG, 3, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, from(2), W),
        arg(1, RET, W),
    ]),
    syscall!(nums(195, 233, 233, 12), "llistxattr", OK, RLONG, 3, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, from(2), W),
        arg(1, RET, W),
    ]),
    syscall!(nums(196, 234, 234, 13), "flistxattr", OK, RLONG, 3, [
        arg(1, from(2), W),
        arg(1, RET, W),
    ]),
    syscall!(nums(197, 235, 235, 14), "removexattr", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(198, 236, 236, 15), "lremovexattr", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(199, 237, 237, 16), "fremovexattr", OK, RLONG, 2, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(200, 238, 238, 130), "tkill", OK, RLONG, 2, []),
    syscall!(nums(-1, 239, 239, -1), "sendfile64", OK, RLONG, 4, [
        arg(2, fixed(8), W),
    ]),
    syscall!(nums(202, 240, 240, 98), "futex", OK, RLONG, 3, [
        arg(0, fixed(4), R),
    ]),
    syscall!(nums(203, 241, 241, 122), "sched_setaffinity", OK, RLONG, 3, [
        arg(2, from(1), R),
    ]),
    syscall!(nums(204, 242, 242, 123), "sched_getaffinity", OK, RLONG, 3, [
        arg(2, from(1), W),
    ]),
    syscall!(nums(205, 243, -1, -1), "set_thread_area", OK, RLONG, 0, []),
    syscall!(nums(211, 244, -1, -1), "get_thread_area", OK, RLONG, 0, []),
    syscall!(nums(206, 245, 243, 0), "io_setup", OK, RLONG, 2, []),
    syscall!(nums(207, 246, 244, 1), "io_destroy", OK, RLONG, 1, []),
    syscall!(nums(208, 247, 245, 4), "io_getevents", OK, RLONG, 5, []),
    syscall!(nums(209, 248, 246, 2), "io_submit", OK, RLONG, 3, []),
    syscall!(nums(210, 249, 247, 3), "io_cancel", OK, RLONG, 3, []),
    syscall!(nums(221, 250, -1, 223), "fadvise64", OK, RLONG, 4, []),
    syscall!(nums(231, 252, 248, 94), "exit_group", OK, RLONG, 1, []),
    syscall!(nums(212, 253, 249, 18), "lookup_dcookie", OK, RLONG, 3, []),
    syscall!(nums(213, 254, 250, -1), "epoll_create", OK, RLONG, 1, []),
    syscall!(nums(233, 255, 251, 21), "epoll_ctl", OK, RLONG, 4, [
        arg(3, abi(sz::EPOLL_EVENT), R),
    ]),
    syscall!(nums(232, 256, 252, -1), "epoll_wait", OK, RLONG, 4, [
        arg(1, from(2), W | SIZE_IN_ELEMENTS).stride(sz::EPOLL_EVENT),
        arg(1, RET, W | SIZE_IN_ELEMENTS).stride(sz::EPOLL_EVENT),
    ]),
    syscall!(nums(216, 257, 253, 234), "remap_file_pages", OK, RLONG, 5, []),
    syscall!(nums(218, 258, 256, 96), "set_tid_address", OK, RLONG, 1, []),
    syscall!(nums(222, 259, 257, 107), "timer_create", OK, RLONG, 3, [
        arg(1, abi(sz::SIGEVENT), R),
        arg(2, abi(sz::PTR), W),
    ]),
    syscall!(nums(223, 260, 258, 110), "timer_settime", OK, RLONG, 4, [
        arg(2, abi(sz::ITIMERSPEC), R),
        arg(3, abi(sz::ITIMERSPEC), W),
    ]),
    syscall!(nums(224, 261, 259, 108), "timer_gettime", OK, RLONG, 2, [
        arg(1, abi(sz::ITIMERSPEC), W),
    ]),
    syscall!(nums(225, 262, 260, 109), "timer_getoverrun", OK, RLONG, 1, []),
    syscall!(nums(226, 263, 261, 111), "timer_delete", OK, RLONG, 1, []),
    syscall!(nums(227, 264, 262, 112), "clock_settime", OK, RLONG, 2, [
        arg(1, abi(sz::TIMESPEC), R),
    ]),
    syscall!(nums(228, 265, 263, 113), "clock_gettime", OK, RLONG, 2, [
        arg(1, abi(sz::TIMESPEC), W),
    ]),
    syscall!(nums(229, 266, 264, 114), "clock_getres", OK, RLONG, 2, [
        arg(1, abi(sz::TIMESPEC), W),
    ]),
    syscall!(nums(230, 267, 265, 115), "clock_nanosleep", OK, RLONG, 4, [
        arg(2, abi(sz::TIMESPEC), R),
        arg(3, abi(sz::TIMESPEC), W),
    ]),
    syscall!(nums(-1, 268, 266, -1), "statfs64", OK, RLONG, 3, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(2, from(1), W),
    ]),
    syscall!(nums(-1, 269, 267, -1), "fstatfs64", OK, RLONG, 3, [
        arg(2, from(1), W),
    ]),
    syscall!(nums(234, 270, 268, 131), "tgkill", OK, RLONG, 3, []),
    syscall!(nums(235, 271, 269, -1), "utimes", OK, RLONG, 2, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, abi(sz::TIMEVAL.times(2)), R),
    ]),
    syscall!(nums(-1, 272, 270, -1), "fadvise64_64", OK, RLONG, 4, []),
    syscall!(nums(237, 274, 319, 235), "mbind", OK, RLONG, 6, []),
    syscall!(nums(239, 275, 320, 236), "get_mempolicy", OK, RLONG, 5, []),
    syscall!(nums(238, 276, 321, 237), "set_mempolicy", OK, RLONG, 3, []),
    syscall!(nums(240, 277, 274, 180), "mq_open", OK, RLONG, 4, []),
    syscall!(nums(241, 278, 275, 181), "mq_unlink", OK, RLONG, 1, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(242, 279, 276, 182), "mq_timedsend", OK, RLONG, 5, [
        arg(1, from(2), R),
        arg(4, abi(sz::TIMESPEC), R),
    ]),
    syscall!(nums(243, 280, 277, 183), "mq_timedreceive", OK, RLONG, 5, [
        arg(1, from(2), W),
        arg(3, fixed(4), W),
        arg(4, abi(sz::TIMESPEC), R),
    ]),
    syscall!(nums(244, 281, 278, 184), "mq_notify", OK, RLONG, 2, [
        arg(1, abi(sz::SIGEVENT), R),
    ]),
    syscall!(nums(245, 282, 279, 185), "mq_getsetattr", OK, RLONG, 3, []),
    syscall!(nums(246, 283, 347, 104), "kexec_load", OK, RLONG, 4, []),
    syscall!(nums(247, 284, 280, 95), "waitid", OK, RLONG, 5, [
        arg(2, abi(sz::SIGINFO), W),
        arg(4, abi(sz::RUSAGE), W),
    ]),
    syscall!(nums(248, 286, 309, 217), "add_key", OK, RLONG, 5, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, from(3), R),
    ]),
    syscall!(nums(249, 287, 310, 218), "request_key", OK, RLONG, 4, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(250, 288, 311, 219), "keyctl", OK, RLONG, 5, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, from(3), R),
        arg(2, RET, R),
        arg(3, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(251, 289, 314, 30), "ioprio_set", OK, RLONG, 3, []),
    syscall!(nums(252, 290, 315, 31), "ioprio_get", OK, RLONG, 2, []),
    syscall!(nums(253, 291, 316, -1), "inotify_init", OK, RLONG, 0, []),
    syscall!(nums(254, 292, 317, 27), "inotify_add_watch", OK, RLONG, 3, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(255, 293, 318, 28), "inotify_rm_watch", OK, RLONG, 2, []),
    syscall!(nums(256, 294, -1, 238), "migrate_pages", OK, RLONG, 4, []),
    syscall!(nums(257, 295, 322, 56), "openat", OK, RLONG, 4, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(258, 296, 323, 34), "mkdirat", OK, RLONG, 3, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(259, 297, 324, 33), "mknodat", OK, RLONG, 4, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(260, 298, 325, 54), "fchownat", OK, RLONG, 5, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(261, 299, 326, -1), "futimesat", OK, RLONG, 3, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, abi(sz::TIMEVAL.times(2)), R),
    ]),
    syscall!(nums(-1, 300, 327, -1), "fstatat64", OK, RLONG, 4, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, abi(sz::STAT64), W),
    ]),
    syscall!(nums(263, 301, 328, 35), "unlinkat", OK, RLONG, 3, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(264, 302, 329, 38), "renameat", OK, RLONG, 4, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(3, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(265, 303, 330, 37), "linkat", OK, RLONG, 5, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(3, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(266, 304, 331, 36), "symlinkat", OK, RLONG, 3, [
        arg(0, fixed(0), R | CT).ty(CSTRING),
        arg(2, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(267, 305, 332, 78), "readlinkat", OK, RLONG, 4, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, from(3), W),
        arg(2, RET, W),
    ]),
    syscall!(nums(268, 306, 333, 53), "fchmodat", OK, RLONG, 3, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(269, 307, 334, 48), "faccessat", OK, RLONG, 3, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
    ]),
    syscall!(nums(270, 308, 335, 72), "pselect6", OK, RLONG, 6, []),
    syscall!(nums(271, 309, 336, 73), "ppoll", OK, RLONG, 5, []),
    syscall!(nums(272, 310, 337, 97), "unshare", OK, RLONG, 1, []),
    syscall!(nums(273, 311, 338, 99), "set_robust_list", OK, RLONG, 2, [
        arg(0, from(1), R),
    ]),
    syscall!(nums(274, 312, 339, 100), "get_robust_list", OK, RLONG, 3, []),
    syscall!(nums(275, 313, 340, 76), "splice", OK, RLONG, 6, []),
    syscall!(nums(277, 314, 341, 84), "sync_file_range", OK, RLONG, 4, []),
    syscall!(nums(276, 315, 342, 77), "tee", OK, RLONG, 4, []),
    syscall!(nums(278, 316, 343, 75), "vmsplice", OK, RLONG, 4, []),
    syscall!(nums(279, 317, 344, 239), "move_pages", OK, RLONG, 6, []),
    syscall!(nums(309, 318, 345, 168), "getcpu", OK, RLONG, 3, []),
    syscall!(nums(281, 319, 346, 22), "epoll_pwait", OK, RLONG, 6, [
        arg(1, from(2), W | SIZE_IN_ELEMENTS).stride(sz::EPOLL_EVENT),
        arg(1, RET, W | SIZE_IN_ELEMENTS).stride(sz::EPOLL_EVENT),
        arg(4, abi(sz::SIGSET), R),
    ]),
    syscall!(nums(280, 320, 348, 88), "utimensat", OK, RLONG, 4, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, abi(sz::TIMESPEC.times(2)), R),
    ]),
    syscall!(nums(282, 321, 349, -1), "signalfd", OK, RLONG, 3, [
        arg(1, abi(sz::SIGSET), R),
    ]),
    syscall!(nums(283, 322, 350, 85), "timerfd_create", OK, RLONG, 2, []),
    syscall!(nums(284, 323, 351, -1), "eventfd", OK, RLONG, 1, []),
    syscall!(nums(285, 324, 352, 47), "fallocate", OK, RLONG, 4, []),
    syscall!(nums(286, 325, 353, 86), "timerfd_settime", OK, RLONG, 4, [
        arg(2, abi(sz::ITIMERSPEC), R),
        arg(3, abi(sz::ITIMERSPEC), W),
    ]),
    syscall!(nums(287, 326, 354, 87), "timerfd_gettime", OK, RLONG, 2, [
        arg(1, abi(sz::ITIMERSPEC), W),
    ]),
    syscall!(nums(289, 327, 355, 74), "signalfd4", OK, RLONG, 4, []),
    syscall!(nums(290, 328, 356, 19), "eventfd2", OK, RLONG, 2, []),
    syscall!(nums(291, 329, 357, 20), "epoll_create1", OK, RLONG, 1, []),
    syscall!(nums(292, 330, 358, 24), "dup3", OK, RLONG, 3, []),
    syscall!(nums(293, 331, 359, 59), "pipe2", OK, RLONG, 2, [
        arg(0, fixed(8), W),
        arg(1, fixed(4), INLINED).ty(SIGNED_INT),
    ]),
    syscall!(nums(294, 332, 360, 26), "inotify_init1", OK, RLONG, 1, []),
    syscall!(nums(295, 333, 361, 69), "preadv", UNKNOWN, RLONG, 0, []),
    syscall!(nums(296, 334, 362, 70), "pwritev", UNKNOWN, RLONG, 0, []),
    syscall!(nums(297, 335, 363, 240), "rt_tgsigqueueinfo", UNKNOWN, RLONG, 0, []),
    syscall!(nums(298, 336, 364, 241), "perf_event_open", UNKNOWN, RLONG, 0, []),
    syscall!(nums(299, 337, 365, 243), "recvmmsg", UNKNOWN, RLONG, 0, []),
    syscall!(nums(300, 338, 367, 262), "fanotify_init", UNKNOWN, RLONG, 0, []),
    syscall!(nums(301, 339, 368, 263), "fanotify_mark", UNKNOWN, RLONG, 0, []),
    syscall!(nums(302, 340, 369, 261), "prlimit64", OK, RLONG, 4, [
        arg(0, fixed(4), INLINED).ty(SIGNED_INT),
        arg(1, fixed(4), INLINED).ty(SIGNED_INT),
        arg(2, abi(sz::RLIMIT), R),
        arg(3, abi(sz::RLIMIT), W),
    ]),
    syscall!(nums(303, 341, 370, 264), "name_to_handle_at", UNKNOWN, RLONG, 0, []),
    syscall!(nums(304, 342, 371, 265), "open_by_handle_at", UNKNOWN, RLONG, 0, []),
    syscall!(nums(305, 343, 372, 266), "clock_adjtime", UNKNOWN, RLONG, 0, []),
    syscall!(nums(306, 344, 373, 267), "syncfs", OK, RLONG, 1, [
        arg(0, fixed(4), INLINED).ty(SIGNED_INT),
    ]),
    syscall!(nums(307, 345, 374, 269), "sendmmsg", UNKNOWN, RLONG, 0, []),
    syscall!(nums(308, 346, 375, 268), "setns", UNKNOWN, RLONG, 0, []),
    syscall!(nums(310, 347, 376, 270), "process_vm_readv", OK, RLONG, 6, [
        arg(0, fixed(4), INLINED).ty(UNSIGNED_INT),
        arg(1, from(2), R | SIZE_IN_ELEMENTS).stride(sz::IOVEC),
        arg(2, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
        arg(3, from(4), R | SIZE_IN_ELEMENTS).stride(sz::IOVEC),
        arg(4, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
        arg(5, fixed(4), INLINED).ty(SIGNED_INT),
    ]),
    syscall!(nums(311, 348, 377, 271), "process_vm_writev", OK, RLONG, 6, [
        arg(0, fixed(4), INLINED).ty(UNSIGNED_INT),
        arg(1, from(2), R | SIZE_IN_ELEMENTS).stride(sz::IOVEC),
        arg(2, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
        arg(3, from(4), R | SIZE_IN_ELEMENTS).stride(sz::IOVEC),
        arg(4, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
        arg(5, fixed(4), INLINED).ty(SIGNED_INT),
    ]),
    syscall!(nums(312, 349, -1, 272), "kcmp", UNKNOWN, RLONG, 0, []),
    syscall!(nums(313, 350, -1, 273), "finit_module", OK, RLONG, 3, [
        arg(0, fixed(4), INLINED).ty(SIGNED_INT),
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, fixed(4), INLINED).ty(SIGNED_INT),
    ]),
    syscall!(nums(318, 355, 384, 278), "getrandom", OK, RLONG, 3, [
        arg(0, from(1), W),
        arg(1, abi(sz::LONG), INLINED).ty(SIGNED_INT),
        arg(2, fixed(4), INLINED).ty(SIGNED_INT),
    ]),
    syscall!(nums(334, 386, 398, 293), "rseq", OK, RLONG, 4, [
        arg(0, from(1), R),
        arg(1, fixed(4), INLINED).ty(SIGNED_INT),
        arg(2, fixed(4), INLINED).ty(SIGNED_INT),
        arg(3, fixed(4), INLINED).ty(SIGNED_INT),
    ]),
    syscall!(nums(29, -1, 307, 194), "shmget", OK, RLONG, 3, []),
    syscall!(nums(30, -1, 305, 196), "shmat", OK, RLONG, 3, []),
    syscall!(nums(31, -1, 308, 195), "shmctl", OK, RLONG, 3, []),
    syscall!(nums(41, -1, 281, 198), "socket", OK, RLONG, 3, []),
    syscall!(nums(42, -1, 283, 203), "connect", OK, RLONG, 3, [
        arg(1, from(2), R | CT).ty(SOCKADDR),
    ]),
    syscall!(nums(43, -1, 285, 202), "accept", OK, RLONG, 3, [
        arg(1, from(2), WI | CT).ty(SOCKADDR),
        arg(2, fixed(4), W | HT).ty(UNSIGNED_INT),
    ]),
    syscall!(nums(44, -1, 290, 206), "sendto", OK, RLONG, 6, [
        arg(1, from(2), R),
        arg(4, from(5), R | CT).ty(SOCKADDR),
        arg(5, fixed(4), INLINED).ty(UNSIGNED_INT),
    ]),
    syscall!(nums(45, -1, 292, 207), "recvfrom", OK, RLONG, 6, [
        arg(1, from(2), W),
        arg(1, RET, W),
        arg(4, from(5), WI | CT).ty(SOCKADDR),
        arg(5, fixed(4), R | W | HT | IGNORE_IF_PREV_NULL).ty(UNSIGNED_INT),
    ]),
    syscall!(nums(46, -1, 296, 211), "sendmsg", OK, RLONG, 3, [
        arg(1, abi(sz::MSGHDR), R | CT).ty(MSGHDR),
    ]),
    syscall!(nums(47, -1, 297, 212), "recvmsg", OK, RLONG, 3, [
        arg(1, abi(sz::MSGHDR), W | CT).ty(MSGHDR),
    ]),
    syscall!(nums(48, -1, 293, 210), "shutdown", OK, RLONG, 2, []),
    syscall!(nums(49, -1, 282, 200), "bind", OK, RLONG, 3, [
        arg(1, from(2), R | CT).ty(SOCKADDR),
    ]),
    syscall!(nums(50, -1, 284, 201), "listen", OK, RLONG, 2, []),
    syscall!(nums(51, -1, 286, 204), "getsockname", OK, RLONG, 3, [
        arg(1, from(2), WI | CT).ty(SOCKADDR),
        arg(2, fixed(4), W | HT).ty(UNSIGNED_INT),
    ]),
    syscall!(nums(52, -1, 287, 205), "getpeername", OK, RLONG, 3, [
        arg(1, from(2), WI | CT).ty(SOCKADDR),
        arg(2, fixed(4), W | HT).ty(UNSIGNED_INT),
    ]),
    syscall!(nums(53, -1, 288, 199), "socketpair", OK, RLONG, 4, [
        arg(3, fixed(8), W),
    ]),
    syscall!(nums(54, -1, 294, 208), "setsockopt", OK, RLONG, 5, [
        arg(3, from(4), R),
    ]),
    syscall!(nums(55, -1, 295, 209), "getsockopt", OK, RLONG, 5, [
        arg(3, from(4), WI),
        arg(4, fixed(4), W | HT).ty(UNSIGNED_INT),
    ]),
    syscall!(nums(64, -1, 299, 190), "semget", OK, RLONG, 3, []),
    syscall!(nums(65, -1, 298, 193), "semop", OK, RLONG, 3, [
        arg(1, from(2), R | SIZE_IN_ELEMENTS).stride(sz::SEMBUF),
    ]),
    syscall!(nums(66, -1, 300, 191), "semctl", OK, RLONG, 4, []),
    syscall!(nums(67, -1, 306, 197), "shmdt", OK, RLONG, 1, []),
    syscall!(nums(68, -1, 303, 186), "msgget", OK, RLONG, 2, []),
    syscall!(nums(69, -1, 301, 189), "msgsnd", OK, RLONG, 4, [
        arg(1, from(2), R | CT).ty(MSGBUF),
    ]),
    syscall!(nums(70, -1, 302, 188), "msgrcv", OK, RLONG, 5, [
        arg(1, from(2), W | CT).ty(MSGBUF),
    ]),
    syscall!(nums(71, -1, 304, 187), "msgctl", OK, RLONG, 3, []),
    syscall!(nums(158, 384, -1, -1), "arch_prctl", OK, RLONG, 2, [
        arg(0, fixed(4), INLINED).ty(SIGNED_INT),
    ]),
    syscall!(nums(166, -1, -1, 39), "umount2", UNKNOWN, RLONG, 0, []),
    syscall!(nums(174, -1, -1, -1), "create_module", UNKNOWN, RLONG, 0, []),
    syscall!(nums(177, -1, -1, -1), "get_kernel_syms", UNKNOWN, RLONG, 0, []),
    syscall!(nums(178, -1, -1, -1), "query_module", UNKNOWN, RLONG, 0, []),
    syscall!(nums(181, -1, -1, -1), "getpmsg", UNKNOWN, RLONG, 0, []),
    syscall!(nums(182, -1, -1, -1), "putpmsg", UNKNOWN, RLONG, 0, []),
    syscall!(nums(183, -1, -1, -1), "afs_syscall", UNKNOWN, RLONG, 0, []),
    syscall!(nums(184, -1, -1, -1), "tuxcall", UNKNOWN, RLONG, 0, []),
    syscall!(nums(185, -1, -1, -1), "security", UNKNOWN, RLONG, 0, []),
    syscall!(nums(214, -1, -1, -1), "epoll_ctl_old", UNKNOWN, RLONG, 0, []),
    syscall!(nums(215, -1, -1, -1), "epoll_wait_old", UNKNOWN, RLONG, 0, []),
    syscall!(nums(220, -1, -1, 192), "semtimedop", OK, RLONG, 4, [
        arg(1, from(2), R | SIZE_IN_ELEMENTS).stride(sz::SEMBUF),
        arg(3, abi(sz::TIMESPEC), R),
    ]),
    syscall!(nums(236, -1, -1, -1), "vserver", UNKNOWN, RLONG, 0, []),
    syscall!(nums(262, -1, -1, 79), "newfstatat", OK, RLONG, 4, [
        arg(1, fixed(0), R | CT).ty(CSTRING),
        arg(2, abi(sz::STAT), W),
    ]),
    syscall!(nums(288, -1, 366, -1), "paccept", OK, RLONG, 4, [
        arg(1, from(2), WI | CT).ty(SOCKADDR),
        arg(2, fixed(4), W).ty(SIGNED_INT),
    ]),
    syscall!(nums(-1, -1, 271, -1), "pciconfig_iobase", OK, RLONG, 3, [
        arg(0, abi(sz::LONG), INLINED).ty(SIGNED_INT),
        arg(1, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
        arg(2, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
    ]),
    syscall!(nums(-1, -1, 272, -1), "pciconfig_read", OK, RLONG, 5, [
        arg(0, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
        arg(1, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
        arg(2, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
        arg(3, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
        arg(4, from(3), W),
    ]),
    syscall!(nums(-1, -1, 273, -1), "pciconfig_write", OK, RLONG, 5, [
        arg(0, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
        arg(1, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
        arg(2, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
        arg(3, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
        arg(4, from(3), R),
    ]),
    syscall!(nums(-1, -1, 289, -1), "send", OK, RLONG, 4, [
        arg(1, from(2), R),
    ]),
    syscall!(nums(-1, -1, 291, -1), "recv", OK, RLONG, 4, [
        arg(1, from(2), W),
        arg(1, RET, W),
    ]),
    syscall!(nums(-1, -1, 0x0f0001, -1), "breakpoint", OK, RLONG, 1, [
        arg(0, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
    ]),
    syscall!(nums(-1, -1, 0x0f0002, -1), "cacheflush", OK, RLONG, 3, [
        arg(0, abi(sz::PTR), INLINED).ty(POINTER),
        arg(1, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
        arg(2, fixed(4), INLINED).ty(UNSIGNED_INT),
    ]),
    syscall!(nums(-1, -1, 0x0f0003, -1), "usr26", OK, RLONG, 1, [
        arg(0, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
    ]),
    syscall!(nums(-1, -1, 0x0f0004, -1), "usr32", OK, RLONG, 1, [
        arg(0, abi(sz::LONG), INLINED).ty(UNSIGNED_INT),
    ]),
    syscall!(nums(-1, -1, 0x0f0005, -1), "settls", OK, RLONG, 1, [
        arg(0, abi(sz::PTR), INLINED).ty(POINTER),
    ]),
];
