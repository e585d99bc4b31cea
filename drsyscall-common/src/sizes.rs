// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Sizes of the kernel types referenced by the tables, per personality.
//! Values are the kernel's view of each structure, not libc's.

use crate::AbiSize;

pub const PTR: AbiSize = AbiSize::by_width(8, 4);
pub const LONG: AbiSize = AbiSize::by_width(8, 4);

pub const STAT: AbiSize = AbiSize([144, 64, 64, 128]);
pub const STAT64: AbiSize = AbiSize([144, 96, 104, 128]);
pub const OLD_KERNEL_STAT: AbiSize = AbiSize::all(32);
pub const STATFS: AbiSize = AbiSize([120, 64, 64, 120]);
pub const USTAT: AbiSize = AbiSize::by_width(32, 20);

pub const TIMESPEC: AbiSize = AbiSize::by_width(16, 8);
pub const TIMEVAL: AbiSize = AbiSize::by_width(16, 8);
pub const TIMEZONE: AbiSize = AbiSize::all(8);
pub const ITIMERSPEC: AbiSize = AbiSize::by_width(32, 16);
pub const ITIMERVAL: AbiSize = AbiSize::by_width(32, 16);
pub const TIMEX: AbiSize = AbiSize::by_width(208, 128);
pub const TMS: AbiSize = AbiSize::by_width(32, 16);
pub const UTIMBUF: AbiSize = AbiSize::by_width(16, 8);

pub const RUSAGE: AbiSize = AbiSize::by_width(144, 72);
pub const RLIMIT: AbiSize = AbiSize::by_width(16, 8);
pub const SYSINFO: AbiSize = AbiSize::by_width(112, 64);
pub const NEW_UTSNAME: AbiSize = AbiSize::all(390);
pub const SCHED_PARAM: AbiSize = AbiSize::all(4);

pub const SIGSET: AbiSize = AbiSize::all(8);
pub const SIGINFO: AbiSize = AbiSize::all(128);
pub const SIGEVENT: AbiSize = AbiSize::all(64);
pub const KERNEL_SIGACTION: AbiSize = AbiSize::by_width(32, 20);

pub const EPOLL_EVENT: AbiSize = AbiSize([12, 12, 16, 16]);
pub const IOVEC: AbiSize = AbiSize::by_width(16, 8);
pub const MSGHDR: AbiSize = AbiSize::by_width(56, 28);
pub const SEMBUF: AbiSize = AbiSize::all(6);
pub const SYSCTL_ARGS: AbiSize = AbiSize::by_width(80, 40);
pub const ROBUST_LIST_HEAD: AbiSize = AbiSize::by_width(24, 12);

pub const TERMIOS: AbiSize = AbiSize::all(36);
pub const WINSIZE: AbiSize = AbiSize::all(8);
pub const SERIAL_STRUCT: AbiSize = AbiSize::by_width(72, 60);
pub const IFREQ: AbiSize = AbiSize::by_width(40, 32);
pub const IFCONF: AbiSize = AbiSize::by_width(16, 8);
pub const ARPREQ: AbiSize = AbiSize::all(68);
pub const RTENTRY: AbiSize = AbiSize::by_width(120, 92);
pub const CDROM_MSF: AbiSize = AbiSize::all(6);
pub const CDROM_TI: AbiSize = AbiSize::all(4);
pub const CDROM_TOCHDR: AbiSize = AbiSize::all(2);
pub const CDROM_TOCENTRY: AbiSize = AbiSize::all(12);
pub const CDROM_VOLCTRL: AbiSize = AbiSize::all(4);
pub const CDROM_SUBCHNL: AbiSize = AbiSize::all(16);
pub const CDROM_READ_AUDIO: AbiSize = AbiSize::by_width(24, 16);
pub const CDROM_MULTISESSION: AbiSize = AbiSize::all(8);
pub const HD_GEOMETRY: AbiSize = AbiSize::by_width(16, 12);
pub const VT_MODE: AbiSize = AbiSize::all(8);
pub const VT_STAT: AbiSize = AbiSize::all(6);
pub const VT_SIZES: AbiSize = AbiSize::all(6);
pub const VT_CONSIZE: AbiSize = AbiSize::all(12);
pub const KBENTRY: AbiSize = AbiSize::all(4);
pub const KBKEYCODE: AbiSize = AbiSize::all(8);
pub const MTOP: AbiSize = AbiSize::all(8);
pub const MTGET: AbiSize = AbiSize::by_width(48, 28);
pub const MTPOS: AbiSize = AbiSize::by_width(8, 4);
pub const IPMI_REQ: AbiSize = AbiSize::by_width(40, 20);
pub const IPMI_REQ_SETTIME: AbiSize = AbiSize::by_width(48, 28);
pub const IPMI_RECV: AbiSize = AbiSize::by_width(48, 24);
pub const IPMI_CMDSPEC: AbiSize = AbiSize::all(2);
pub const IPMI_CMDSPEC_CHANS: AbiSize = AbiSize::all(12);
pub const IPMI_CHANNEL_LUN_ADDRESS_SET: AbiSize = AbiSize::all(4);
pub const IPMI_TIMING_PARMS: AbiSize = AbiSize::all(8);

pub const HANDLE: AbiSize = PTR;
pub const UNICODE_STRING: AbiSize = AbiSize::by_width(16, 8);
pub const OBJECT_ATTRIBUTES: AbiSize = AbiSize::by_width(48, 24);
pub const IO_STATUS_BLOCK: AbiSize = AbiSize::by_width(16, 8);
pub const LARGE_INTEGER: AbiSize = AbiSize::all(8);
pub const CLIENT_ID: AbiSize = AbiSize::by_width(16, 8);
pub const CONTEXT: AbiSize = AbiSize::by_width(1232, 716);
pub const FILE_BASIC_INFORMATION: AbiSize = AbiSize::all(40);
pub const POINTL: AbiSize = AbiSize::all(8);
pub const WIN_MSG: AbiSize = AbiSize::by_width(48, 28);
pub const WIDTHDATA: AbiSize = AbiSize::all(12);
