// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Windows system calls. Numbers change with every kernel build, so all
//! records are [`Numbers::ByName`](crate::Numbers::ByName) and get their
//! numbers from a number set or a sysnum file when the engine starts.

use super::dsl::*;
use crate::{AbiSize, ArgDesc, SecondaryTable, SyscallRecord};

/// `GetKeyboardState` always fills 256 key slots.
const USER_KEYBOARD_STATE_SIZE: u32 = 256;

const HANDLE_IN: ArgDesc = arg(0, abi(sz::HANDLE), INLINED).ty(HANDLE);

const fn handle(param: u8) -> ArgDesc {
    arg(param, abi(sz::HANDLE), INLINED).ty(HANDLE)
}

const fn ulong(param: u8) -> ArgDesc {
    arg(param, fixed(4), INLINED).ty(UNSIGNED_INT)
}

const fn class(param: u8) -> ArgDesc {
    arg(param, fixed(4), INLINED).ty(SIGNED_INT)
}

const fn boolean(param: u8) -> ArgDesc {
    arg(param, fixed(1), INLINED).ty(BOOL)
}

const fn out_handle(param: u8) -> ArgDesc {
    arg(param, abi(sz::HANDLE), W | HT).ty(HANDLE)
}

const fn out_ulong(param: u8) -> ArgDesc {
    arg(param, fixed(4), W | HT).ty(UNSIGNED_INT)
}

const fn obj_attrs(param: u8) -> ArgDesc {
    arg(param, abi(sz::OBJECT_ATTRIBUTES), R | CT).ty(OBJECT_ATTRIBUTES)
}

const fn io_status(param: u8) -> ArgDesc {
    arg(param, abi(sz::IO_STATUS_BLOCK), W | HT).ty(IO_STATUS_BLOCK)
}

const fn timeout(param: u8) -> ArgDesc {
    arg(param, abi(sz::LARGE_INTEGER), R | HT).ty(LARGE_INTEGER)
}

/// The usual information query shape: a buffer of the given length whose
/// written size comes back through the last parameter.
macro_rules! info_query {
    ($name:literal, $class:expr) => {
        syscall!(BY_NAME, $name, OK | RET_SMALL_WRITE_LAST, RNTST, 5, [
            HANDLE_IN,
            $class,
            arg(2, from(3), W),
            arg(2, from(4), WI),
            ulong(3),
            out_ulong(4),
        ])
    };
}

macro_rules! key_info {
    ($code:expr, $name:literal, $class:expr, $ty:expr) => {
        syscall!($code, concat!("NtQueryKey.", $name), KEY_QUERY, RNTST, 5, [
            HANDLE_IN,
            class(1).named($class),
            arg(2, from(3), W).named($ty),
            arg(2, from(4), WI),
            ulong(3),
            out_ulong(4),
        ])
    };
}

macro_rules! enum_key_info {
    ($code:expr, $name:literal, $class:expr, $ty:expr) => {
        syscall!($code, concat!("NtEnumerateKey.", $name), OK, RNTST, 6, [
            HANDLE_IN,
            ulong(1),
            class(2).named($class),
            arg(3, from(4), W).named($ty),
            arg(3, from(5), WI),
            ulong(4),
            out_ulong(5),
        ])
    };
}

const KEY_QUERY: u32 = OK | RET_SMALL_WRITE_LAST;

const QUERY_KEY_INFO: &[SyscallRecord] = &[
    key_info!(code(0), "KeyBasicInformation", "KeyBasicInformation", "_KEY_BASIC_INFORMATION"),
    key_info!(code(1), "KeyNodeInformation", "KeyNodeInformation", "_KEY_NODE_INFORMATION"),
    key_info!(code(2), "KeyFullInformation", "KeyFullInformation", "_KEY_FULL_INFORMATION"),
    key_info!(code(3), "KeyNameInformation", "KeyNameInformation", "_KEY_NAME_INFORMATION"),
    key_info!(code(4), "KeyCachedInformation", "KeyCachedInformation", "_KEY_CACHED_INFORMATION"),
    key_info!(code(5), "KeyFlagsInformation", "KeyFlagsInformation", "_KEY_FLAGS_INFORMATION"),
    key_info!(code(6), "KeyVirtualizationInformation", "KeyVirtualizationInformation", "_KEY_VIRTUALIZATION_INFORMATION"),
    key_info!(code(7), "KeyHandleTagsInformation", "KeyHandleTagsInformation", "_KEY_HANDLE_TAGS_INFORMATION"),
];

static QUERY_KEY_UNKNOWN: SyscallRecord = syscall!(BY_NAME, "NtQueryKey.UNKNOWN", KEY_QUERY, RNTST, 5, [
    HANDLE_IN,
    class(1),
    arg(2, from(3), W),
    arg(2, from(4), WI),
    ulong(3),
    out_ulong(4),
]);

const ENUMERATE_KEY_INFO: &[SyscallRecord] = &[
    enum_key_info!(code(0), "KeyBasicInformation", "KeyBasicInformation", "_KEY_BASIC_INFORMATION"),
    enum_key_info!(code(1), "KeyNodeInformation", "KeyNodeInformation", "_KEY_NODE_INFORMATION"),
    enum_key_info!(code(2), "KeyFullInformation", "KeyFullInformation", "_KEY_FULL_INFORMATION"),
    enum_key_info!(code(3), "KeyNameInformation", "KeyNameInformation", "_KEY_NAME_INFORMATION"),
    enum_key_info!(code(4), "KeyCachedInformation", "KeyCachedInformation", "_KEY_CACHED_INFORMATION"),
    enum_key_info!(code(5), "KeyFlagsInformation", "KeyFlagsInformation", "_KEY_FLAGS_INFORMATION"),
    enum_key_info!(code(6), "KeyVirtualizationInformation", "KeyVirtualizationInformation", "_KEY_VIRTUALIZATION_INFORMATION"),
    enum_key_info!(code(7), "KeyHandleTagsInformation", "KeyHandleTagsInformation", "_KEY_HANDLE_TAGS_INFORMATION"),
];

static ENUMERATE_KEY_UNKNOWN: SyscallRecord = syscall!(BY_NAME, "NtEnumerateKey.UNKNOWN", OK, RNTST, 6, [
    HANDLE_IN,
    ulong(1),
    class(2),
    arg(3, from(4), W),
    arg(3, from(5), WI),
    ulong(4),
    out_ulong(5),
]);

/// Codes of the `NtUserCall*` families move between builds, so their
/// entries are numbered by name from the number set.
macro_rules! usercall {
    ($name:literal, $flags:expr, $ret:expr, $count:literal) => {
        syscall!(BY_NAME, $name, $flags, $ret, $count, [])
    };
    ($name:literal, $flags:expr, $ret:expr, $count:literal, [$($arg:expr),+ $(,)?]) => {
        syscall!(BY_NAME, $name, $flags, $ret, $count, [$($arg),+])
    };
}

const USER_CALL_NO_PARAM: &[SyscallRecord] = &[
    usercall!("NtUserCallNoParam.CREATEMENU", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.CREATEMENUPOPUP", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.DISABLEPROCWNDGHSTING", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.MSQCLEARWAKEMASK", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.ALLOWFOREGNDACTIVATION", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.CREATESYSTEMTHREADS", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.DESKTOPHASWATERMARK", UNKNOWN, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.DESTROY_CARET", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.GETDEVICECHANGEINFO", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.GETIMESHOWSTATUS", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.GETINPUTDESKTOP", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.GETMSESSAGEPOS", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.GETREMOTEPROCID", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.GETUNPREDICTEDMESSAGEPOS", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.HIDECURSORNOCAPTURE", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.LOADCURSANDICOS", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.ISQUEUEATTACHED", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.PREPAREFORLOGOFF", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.RELEASECAPTURE", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.RESETDBLCLICK", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.ZAPACTIVEANDFOUS", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.REMOTECONSHDWSTOP", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.REMOTEDISCONNECT", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.REMOTELOGOFF", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.REMOTENTSECURITY", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.REMOTESHDWSETUP", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.REMOTESHDWSTOP", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.REMOTEPASSTHRUENABLE", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.REMOTEPASSTHRUDISABLE", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.REMOTECONNECTSTATE", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.UPDATEPERUSERIMMENABLING", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.USERPWRCALLOUTWORKER", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.WAKERITFORSHTDWN", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.INIT_MESSAGE_PUMP", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.UNINIT_MESSAGE_PUMP", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.LOADUSERAPIHOOK", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.ENABLEMIPSHELLTHREAD", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.ISMIPSHELLTHREADENABLED", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.DEFERREDDESKTOPROTATION", OK, UNSIGNED_INT, 1),
    usercall!("NtUserCallNoParam.ENABLEPERMONITORMENUSCALING", OK, UNSIGNED_INT, 1),
];

static USER_CALL_NO_PARAM_UNKNOWN: SyscallRecord =
    usercall!("NtUserCallNoParam.UNKNOWN", OK, UNSIGNED_INT, 1);

const USER_CALL_ONE_PARAM: &[SyscallRecord] = &[
    usercall!("NtUserCallOneParam.BEGINDEFERWNDPOS", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.GETSENDMSGRECVR", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.WINDOWFROMDC", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.ALLOWSETFOREGND", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.CREATEEMPTYCUROBJECT", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.CREATESYSTEMTHREADS", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.CSDDEUNINITIALIZE", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.DIRECTEDYIELD", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.ENUMCLIPBOARDFORMATS", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.GETCURSORPOS", OK, UNSIGNED_INT, 2, [
        arg(0, abi(sz::POINTL), W),
    ]),
    usercall!("NtUserCallOneParam.FORCEFOCUSBASEDMOUSEWHEELROUTING", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.GETINPUTEVENT", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.GETKEYBOARDLAYOUT", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.GETKEYBOARDTYPE", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.GETPROCDEFLAYOUT", OK, UNSIGNED_INT, 2, [
        arg(0, fixed(4), W),
    ]),
    usercall!("NtUserCallOneParam.GETQUEUESTATUS", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.GETWINSTAINFO", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.HANDLESYSTHRDCREATFAIL", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.LOCKFOREGNDWINDOW", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.LOADFONTS", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.MAPDEKTOPOBJECT", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.MESSAGEBEEP", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.PLAYEVENTSOUND", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.POSTQUITMESSAGE", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.PREPAREFORLOGOFF", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.REALIZEPALETTE", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.REGISTERLPK", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.REGISTERSYSTEMTHREAD", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.REMOTERECONNECT", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.REMOTETHINWIRESTATUS", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.RELEASEDC", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.REMOTENOTIFY", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.REPLYMESSAGE", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.SETCARETBLINKTIME", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.SETDBLCLICKTIME", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.SETIMESHOWSTATUS", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.SETMESSAGEEXTRAINFO", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.SETPROCDEFLAYOUT", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.SETWATERMARKSTRINGS", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.SHOWCURSOR", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.SHOWSTARTGLASS", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.SWAPMOUSEBUTTON", OK, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.WOWMODULEUNLOAD", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.DWMLOCKSCREENUPDATES", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.ENABLESESSIONFORMMCSS", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.ISTHREADMESSAGEQUEUEATTACHED", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.POSTUIACTIONS", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.SETINPUTSERVICESTATE", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.GETDPIDEPENDENTMETRIC", UNKNOWN, UNSIGNED_INT, 2),
    usercall!("NtUserCallOneParam.FORCEENABLENUMPADTRANSLATION", UNKNOWN, UNSIGNED_INT, 2),
];

static USER_CALL_ONE_PARAM_UNKNOWN: SyscallRecord =
    usercall!("NtUserCallOneParam.UNKNOWN", UNKNOWN, UNSIGNED_INT, 2);

const USER_CALL_HWND: &[SyscallRecord] = &[
    usercall!("NtUserCallHwnd.DEREGISTERSHELLHOOKWINDOW", OK, UINT32, 2),
    usercall!("NtUserCallHwnd.DWP_GETENABLEDPOPUP", UNKNOWN, UINT32, 2),
    usercall!("NtUserCallHwnd.GETWNDCONTEXTHLPID", OK, UINT32, 2),
    usercall!("NtUserCallHwnd.REGISTERSHELLHOOKWINDOW", OK, UINT32, 2),
];

static USER_CALL_HWND_UNKNOWN: SyscallRecord =
    usercall!("NtUserCallHwnd.UNKNOWN", UNKNOWN, UINT32, 2);

const USER_CALL_HWND_OPT: &[SyscallRecord] = &[
    usercall!("NtUserCallHwndOpt.SETPROGMANWINDOW", OK, UINT32, 2),
    usercall!("NtUserCallHwndOpt.SETTASKMANWINDOW", OK, UINT32, 2),
];

static USER_CALL_HWND_OPT_UNKNOWN: SyscallRecord =
    usercall!("NtUserCallHwndOpt.UNKNOWN", UNKNOWN, UINT32, 2);

const USER_CALL_HWND_PARAM: &[SyscallRecord] = &[
    usercall!("NtUserCallHwndParam.GETCLASSICOCUR", UNKNOWN, UINT32, 3),
    usercall!("NtUserCallHwndParam.CLEARWINDOWSTATE", UNKNOWN, UINT32, 3),
    usercall!("NtUserCallHwndParam.KILLSYSTEMTIMER", OK, UINT32, 3),
    usercall!("NtUserCallHwndParam.NOTIFYOVERLAYWINDOW", OK, UINT32, 3),
    usercall!("NtUserCallHwndParam.REGISTERKBDCORRECTION", OK, UINT32, 3),
    usercall!("NtUserCallHwndParam.SETDIALOGPOINTER", OK, UINT32, 3),
    usercall!("NtUserCallHwndParam.SETVISIBLE", UNKNOWN, UINT32, 3),
    usercall!("NtUserCallHwndParam.SETWNDCONTEXTHLPID", OK, UINT32, 3),
    usercall!("NtUserCallHwndParam.SETWINDOWSTATE", UNKNOWN, UINT32, 3),
    usercall!("NtUserCallHwndParam.REGISTERWINDOWARRANGEMENTCALLOUT", UNKNOWN, UINT32, 3),
    usercall!("NtUserCallHwndParam.ENABLEMODERNAPPWINDOWKBDINTERCEPT", UNKNOWN, UINT32, 3),
];

static USER_CALL_HWND_PARAM_UNKNOWN: SyscallRecord =
    usercall!("NtUserCallHwndParam.UNKNOWN", UNKNOWN, UINT32, 3);

const USER_CALL_HWND_LOCK: &[SyscallRecord] = &[
    usercall!("NtUserCallHwndLock.WINDOWHASSHADOW", OK, BOOL32, 2),
    usercall!("NtUserCallHwndLock.ARRANGEICONICWINDOWS", OK, BOOL32, 2),
    usercall!("NtUserCallHwndLock.DRAWMENUBAR", OK, BOOL32, 2),
    usercall!("NtUserCallHwndLock.CHECKIMESHOWSTATUSINTHRD", OK, BOOL32, 2),
    usercall!("NtUserCallHwndLock.GETSYSMENUHANDLE", OK, BOOL32, 2),
    usercall!("NtUserCallHwndLock.REDRAWFRAME", OK, BOOL32, 2),
    usercall!("NtUserCallHwndLock.REDRAWFRAMEANDHOOK", OK, BOOL32, 2),
    usercall!("NtUserCallHwndLock.SETDLGSYSMENU", OK, BOOL32, 2),
    usercall!("NtUserCallHwndLock.SETFOREGROUNDWINDOW", OK, BOOL32, 2),
    usercall!("NtUserCallHwndLock.SETSYSMENU", OK, BOOL32, 2),
    usercall!("NtUserCallHwndLock.UPDATECKIENTRECT", OK, BOOL32, 2),
    usercall!("NtUserCallHwndLock.UPDATEWINDOW", OK, BOOL32, 2),
    usercall!("NtUserCallHwndLock.SETACTIVEIMMERSIVEWINDOW", UNKNOWN, BOOL32, 2),
    usercall!("NtUserCallHwndLock.GETWINDOWTRACKINFOASYNC", UNKNOWN, BOOL32, 2),
];

static USER_CALL_HWND_LOCK_UNKNOWN: SyscallRecord =
    usercall!("NtUserCallHwndLock.UNKNOWN", UNKNOWN, BOOL32, 2);

const USER_CALL_TWO_PARAM: &[SyscallRecord] = &[
    usercall!("NtUserCallTwoParam.CHANGEWNDMSGFILTER", UNKNOWN, UNSIGNED_INT, 3),
    // The other parameter is always 1.
    usercall!("NtUserCallTwoParam.GETCURSORPOS", OK, UNSIGNED_INT, 3, [
        arg(0, abi(sz::POINTL), W),
    ]),
    usercall!("NtUserCallTwoParam.GETHDEVNAME", OK, UNSIGNED_INT, 3, [
        arg(1, from(2), W),
    ]),
    usercall!("NtUserCallTwoParam.INITANSIOEM", OK, UNSIGNED_INT, 3, [
        arg(1, fixed(0), W | CT).ty(CWSTRING),
    ]),
    usercall!("NtUserCallTwoParam.NLSSENDIMENOTIFY", UNKNOWN, UNSIGNED_INT, 3),
    usercall!("NtUserCallTwoParam.REGISTERGHSTWND", UNKNOWN, UNSIGNED_INT, 3),
    usercall!("NtUserCallTwoParam.REGISTERLOGONPROCESS", OK, UNSIGNED_INT, 3),
    usercall!("NtUserCallTwoParam.REGISTERSYSTEMTHREAD", UNKNOWN, UNSIGNED_INT, 3),
    usercall!("NtUserCallTwoParam.REGISTERSBLFROSTWND", UNKNOWN, UNSIGNED_INT, 3),
    usercall!("NtUserCallTwoParam.REGISTERUSERHUNGAPPHANDLERS", UNKNOWN, UNSIGNED_INT, 3),
    usercall!("NtUserCallTwoParam.SHADOWCLEANUP", UNKNOWN, UNSIGNED_INT, 3),
    usercall!("NtUserCallTwoParam.REMOTESHADOWSTART", UNKNOWN, UNSIGNED_INT, 3),
    usercall!("NtUserCallTwoParam.SETCARETPOS", OK, UNSIGNED_INT, 3),
    usercall!("NtUserCallTwoParam.SETCURSORPOS", OK, UNSIGNED_INT, 3),
    usercall!("NtUserCallTwoParam.SETTHREADQUEUEMERGESETTING", UNKNOWN, UNSIGNED_INT, 3),
    usercall!("NtUserCallTwoParam.SETPHYSCURSORPOS", UNKNOWN, UNSIGNED_INT, 3),
    usercall!("NtUserCallTwoParam.UNHOOKWINDOWSHOOK", OK, UNSIGNED_INT, 3),
    usercall!("NtUserCallTwoParam.WOWCLEANUP", UNKNOWN, UNSIGNED_INT, 3),
    usercall!("NtUserCallTwoParam.ENABLESHELLWINDOWMGT", UNKNOWN, UNSIGNED_INT, 3),
    usercall!("NtUserCallTwoParam.SCALESYSTEMMETRICFORDPI", UNKNOWN, UNSIGNED_INT, 3),
];

static USER_CALL_TWO_PARAM_UNKNOWN: SyscallRecord =
    usercall!("NtUserCallTwoParam.UNKNOWN", UNKNOWN, UNSIGNED_INT, 3);

const USER_CALL_HWND_PARAM_LOCK: &[SyscallRecord] = &[
    usercall!("NtUserCallHwndParamLock.ENABLEWINDOW", OK, UNSIGNED_INT, 3),
    usercall!("NtUserCallHwndParamLock.SETMODERNAPPWINDOW", UNKNOWN, UNSIGNED_INT, 3),
    usercall!("NtUserCallHwndParamLock.REDRAWTITLE", UNKNOWN, UNSIGNED_INT, 3),
    usercall!("NtUserCallHwndParamLock.SHOWOWNEDPOPUPS", OK, UNSIGNED_INT, 3),
    usercall!("NtUserCallHwndParamLock.SWITCHTOTHISWINDOW", UNKNOWN, UNSIGNED_INT, 3),
    usercall!("NtUserCallHwndParamLock.UPDATEWINDOWS", UNKNOWN, UNSIGNED_INT, 3),
    usercall!("NtUserCallHwndParamLock.VALIDATERGN", OK, UINT32, 3),
];

static USER_CALL_HWND_PARAM_LOCK_UNKNOWN: SyscallRecord =
    usercall!("NtUserCallHwndParamLock.UNKNOWN", UNKNOWN, UINT32, 3);

/// A `NtUserCall*` primary: `selector` is the parameter holding the code.
macro_rules! usercall_family {
    ($name:literal, $ret:expr, $count:literal, $selector:literal, $entries:expr, $base:expr) => {
        syscall!(BY_NAME, $name, OK | SECONDARY_TABLE, $ret, $count, [
            arg($selector, fixed(0), 0),
        ]; SecondaryTable { entries: $entries, base: Some($base) })
    };
}

pub static NTOSKRNL: &[SyscallRecord] = &[
    syscall!(BY_NAME, "NtAcceptConnectPort", OK, RNTST, 6, [
        out_handle(0),
        arg(1, abi(sz::PTR), INLINED).ty(POINTER),
        arg(2, fixed(24), R | CT).ty(PORT_MESSAGE),
        boolean(3),
        arg(4, abi(AbiSize::by_width(48, 24)), R | W),
        arg(5, abi(AbiSize::by_width(24, 12)), R | W),
    ]),
    syscall!(BY_NAME, "NtWaitForSingleObject", OK, RNTST, 3, [
        HANDLE_IN,
        boolean(1),
        timeout(2),
    ]),
    syscall!(BY_NAME, "NtCallbackReturn", OK, RNTST, 3, [
        arg(0, abi(sz::PTR), INLINED).ty(VOID),
        ulong(1),
        arg(2, fixed(4), INLINED).ty(NTSTATUS),
    ]),
    syscall!(BY_NAME, "NtReadFile", OK, RNTST, 9, [
        HANDLE_IN,
        handle(1),
        arg(2, abi(sz::PTR), INLINED).ty(FUNCTION),
        arg(3, abi(sz::PTR), INLINED).ty(VOID),
        io_status(4),
        arg(5, from(6), W | HT).ty(VOID),
        arg(5, from(4), W | POST_SIZE_IO_STATUS | HT).ty(VOID),
        ulong(6),
        timeout(7),
        arg(8, fixed(4), R | HT).ty(UNSIGNED_INT),
    ]),
    // Input and output buffers depend on the control code.
    syscall!(BY_NAME, "NtDeviceIoControlFile", UNKNOWN, RNTST, 10, [
        HANDLE_IN,
        handle(1),
        arg(2, abi(sz::PTR), INLINED).ty(FUNCTION),
        arg(3, abi(sz::PTR), INLINED).ty(UNKNOWN_TYPE),
        io_status(4),
        ulong(5),
        ulong(7),
        arg(8, from(9), W),
        ulong(9),
    ]),
    syscall!(BY_NAME, "NtWriteFile", OK, RNTST, 9, [
        HANDLE_IN,
        handle(1),
        arg(2, abi(sz::PTR), INLINED).ty(FUNCTION),
        arg(3, abi(sz::PTR), INLINED).ty(VOID),
        io_status(4),
        arg(5, from(6), R | HT).ty(VOID),
        ulong(6),
        timeout(7),
        arg(8, fixed(4), R | HT).ty(UNSIGNED_INT),
    ]),
    syscall!(BY_NAME, "NtReleaseSemaphore", OK, RNTST, 3, [
        HANDLE_IN,
        arg(1, fixed(4), INLINED).ty(SIGNED_INT),
        arg(2, fixed(4), W | HT).ty(SIGNED_INT),
    ]),
    syscall!(BY_NAME, "NtSetInformationThread", OK, RNTST, 4, [
        HANDLE_IN,
        class(1),
        arg(2, from(3), R),
        ulong(3),
    ]),
    syscall!(BY_NAME, "NtSetEvent", OK, RNTST, 2, [
        HANDLE_IN,
        out_ulong(1),
    ]),
    syscall!(BY_NAME, "NtClose", OK, RNTST, 1, [
        HANDLE_IN,
    ]),
    info_query!("NtQueryObject", class(1)),
    syscall!(BY_NAME, "NtOpenKey", OK, RNTST, 3, [
        out_handle(0),
        ulong(1),
        obj_attrs(2),
    ]),
    syscall!(BY_NAME, "NtFindAtom", OK, RNTST, 3, [
        arg(0, from(1), R | HT).ty(CWSTRING),
        ulong(1),
        arg(2, fixed(2), W | HT).ty(ATOM),
    ]),
    syscall!(BY_NAME, "NtQueryDefaultLocale", OK, RNTST, 2, [
        boolean(0),
        arg(1, fixed(4), W | HT).ty(UNSIGNED_INT),
    ]),
    syscall!(BY_NAME, "NtQueryKey", OK | SECONDARY_TABLE, RNTST, 5, [
        arg(1, fixed(0), 0),
    ]; SecondaryTable { entries: QUERY_KEY_INFO, base: Some(&QUERY_KEY_UNKNOWN) }),
    syscall!(BY_NAME, "NtQueryValueKey", OK, RNTST, 6, [
        HANDLE_IN,
        arg(1, abi(sz::UNICODE_STRING), R | CT).ty(UNICODE_STRING),
        class(2),
        arg(3, from(4), W),
        arg(3, from(5), WI),
        ulong(4),
        out_ulong(5),
    ]),
    syscall!(BY_NAME, "NtAllocateVirtualMemory", OK, RNTST, 6, [
        HANDLE_IN,
        arg(1, abi(sz::PTR), R | W | HT).ty(POINTER),
        ulong(2),
        arg(3, abi(sz::PTR), R | W | HT).ty(UNSIGNED_INT),
        ulong(4).named("MEM_COMMIT"),
        ulong(5).named("PAGE_NOACCESS"),
    ]),
    info_query!("NtQueryInformationProcess", class(1)),
    syscall!(BY_NAME, "NtSetInformationProcess", OK, RNTST, 4, [
        HANDLE_IN,
        class(1),
        arg(2, from(3), NON_MEMARG),
        ulong(3),
    ]),
    syscall!(BY_NAME, "NtCreateKey", OK, RNTST, 7, [
        out_handle(0),
        ulong(1),
        obj_attrs(2),
        ulong(3),
        arg(4, abi(sz::UNICODE_STRING), R | CT).ty(UNICODE_STRING),
        ulong(5).named("REG_OPTION_RESERVED"),
        out_ulong(6),
    ]),
    syscall!(BY_NAME, "NtFreeVirtualMemory", OK, RNTST, 4, [
        HANDLE_IN,
        arg(1, abi(sz::PTR), R | W | HT).ty(POINTER),
        arg(2, abi(sz::PTR), R | W | HT).ty(UNSIGNED_INT),
        ulong(3).named("MEM_COMMIT"),
    ]),
    syscall!(BY_NAME, "NtReleaseMutant", OK, RNTST, 2, [
        HANDLE_IN,
        out_ulong(1),
    ]),
    info_query!("NtQueryInformationToken", class(1)),
    syscall!(BY_NAME, "NtQueryVirtualMemory", OK, RNTST, 6, [
        HANDLE_IN,
        arg(1, abi(sz::PTR), INLINED).ty(POINTER),
        class(2),
        arg(3, from(4), W),
        arg(3, from(5), WI),
        arg(4, abi(sz::PTR), INLINED).ty(UNSIGNED_INT),
        arg(5, abi(sz::PTR), W | HT).ty(UNSIGNED_INT),
    ]),
    syscall!(BY_NAME, "NtOpenThreadToken", OK, RNTST, 4, [
        HANDLE_IN,
        ulong(1),
        boolean(2),
        out_handle(3),
    ]),
    info_query!("NtQueryInformationThread", class(1)),
    syscall!(BY_NAME, "NtOpenProcess", OK, RNTST, 4, [
        out_handle(0),
        ulong(1),
        obj_attrs(2),
        arg(3, abi(sz::CLIENT_ID), R),
    ]),
    syscall!(BY_NAME, "NtMapViewOfSection", OK, RNTST, 10, [
        HANDLE_IN,
        handle(1),
        arg(2, abi(sz::PTR), R | W | HT).ty(POINTER),
        arg(3, abi(sz::PTR), INLINED).ty(UNSIGNED_INT),
        arg(4, abi(sz::PTR), INLINED).ty(UNSIGNED_INT),
        arg(5, abi(sz::LARGE_INTEGER), R | W | HT).ty(LARGE_INTEGER),
        arg(6, abi(sz::PTR), R | W | HT).ty(UNSIGNED_INT),
        class(7),
        ulong(8).named("MEM_COMMIT"),
        ulong(9).named("PAGE_NOACCESS"),
    ]),
    syscall!(BY_NAME, "NtUnmapViewOfSection", OK, RNTST, 2, [
        HANDLE_IN,
        arg(1, abi(sz::PTR), INLINED).ty(UNKNOWN_TYPE),
    ]),
    syscall!(BY_NAME, "NtTerminateProcess", OK, RNTST, 2, [
        HANDLE_IN,
        arg(1, fixed(4), INLINED).ty(NTSTATUS),
    ]),
    syscall!(BY_NAME, "NtSetEventBoostPriority", OK, RNTST, 1, [
        HANDLE_IN,
    ]),
    syscall!(BY_NAME, "NtOpenThreadTokenEx", OK, RNTST, 5, [
        HANDLE_IN,
        ulong(1),
        boolean(2),
        ulong(3).named("OBJ_INHERIT"),
        out_handle(4),
    ]),
    syscall!(BY_NAME, "NtOpenProcessTokenEx", OK, RNTST, 4, [
        HANDLE_IN,
        ulong(1),
        ulong(2).named("OBJ_INHERIT"),
        out_handle(3),
    ]),
    syscall!(BY_NAME, "NtQueryPerformanceCounter", OK, RNTST, 2, [
        arg(0, abi(sz::LARGE_INTEGER), W | HT).ty(LARGE_INTEGER),
        arg(1, abi(sz::LARGE_INTEGER), W | HT).ty(LARGE_INTEGER),
    ]),
    syscall!(BY_NAME, "NtEnumerateKey", OK | SECONDARY_TABLE, RNTST, 6, [
        arg(2, fixed(0), 0),
    ]; SecondaryTable { entries: ENUMERATE_KEY_INFO, base: Some(&ENUMERATE_KEY_UNKNOWN) }),
    syscall!(BY_NAME, "NtOpenFile", OK, RNTST, 6, [
        out_handle(0),
        ulong(1),
        obj_attrs(2),
        io_status(3),
        ulong(4).named("FILE_SHARE_READ"),
        ulong(5).named("FILE_DIRECTORY_FILE"),
    ]),
    syscall!(BY_NAME, "NtDelayExecution", OK, RNTST, 2, [
        boolean(0),
        timeout(1),
    ]),
    syscall!(BY_NAME, "NtQuerySystemInformation", OK | RET_SMALL_WRITE_LAST, RNTST, 4, [
        class(0),
        arg(1, from(2), W),
        arg(1, from(3), WI),
        ulong(2),
        out_ulong(3),
    ]),
    syscall!(BY_NAME, "NtOpenSection", OK, RNTST, 3, [
        out_handle(0),
        ulong(1),
        obj_attrs(2),
    ]),
    info_query!("NtQueryTimer", class(1)),
    syscall!(BY_NAME, "NtWriteVirtualMemory", OK, RNTST, 5, [
        HANDLE_IN,
        arg(1, abi(sz::PTR), INLINED).ty(POINTER),
        arg(2, from(3), R | HT).ty(VOID),
        arg(3, abi(sz::PTR), INLINED).ty(UNSIGNED_INT),
        arg(4, abi(sz::PTR), W | HT).ty(UNSIGNED_INT),
    ]),
    syscall!(BY_NAME, "NtDuplicateObject", OK, RNTST, 7, [
        HANDLE_IN,
        handle(1),
        handle(2),
        out_handle(3),
        ulong(4),
        ulong(5).named("OBJ_INHERIT"),
        ulong(6).named("DUPLICATE_CLOSE_SOURCE"),
    ]),
    syscall!(BY_NAME, "NtQueryAttributesFile", OK, RNTST, 2, [
        obj_attrs(0),
        arg(1, abi(sz::FILE_BASIC_INFORMATION), W),
    ]),
    syscall!(BY_NAME, "NtClearEvent", OK, RNTST, 1, [
        HANDLE_IN,
    ]),
    syscall!(BY_NAME, "NtReadVirtualMemory", OK, RNTST, 5, [
        HANDLE_IN,
        arg(1, abi(sz::PTR), INLINED).ty(UNKNOWN_TYPE),
        arg(2, from(3), W | HT).ty(VOID),
        arg(2, from(4), WI | HT).ty(VOID),
        arg(3, abi(sz::PTR), INLINED).ty(UNSIGNED_INT),
        arg(4, abi(sz::PTR), W | HT).ty(UNSIGNED_INT),
    ]),
    syscall!(BY_NAME, "NtOpenEvent", OK, RNTST, 3, [
        out_handle(0),
        ulong(1),
        obj_attrs(2),
    ]),
    syscall!(BY_NAME, "NtContinue", OK, RNTST, 2, [
        arg(0, abi(sz::CONTEXT), R | CT).ty(CONTEXT),
        boolean(1),
    ]),
    syscall!(BY_NAME, "NtQueryDefaultUILanguage", OK, RNTST, 1, [
        arg(0, fixed(2), W | HT).ty(UNSIGNED_INT),
    ]),
    syscall!(BY_NAME, "NtQueueApcThread", OK, RNTST, 5, [
        HANDLE_IN,
        arg(1, abi(sz::PTR), INLINED).ty(FUNCTION),
        arg(2, abi(sz::PTR), INLINED).ty(VOID),
        arg(3, abi(sz::PTR), INLINED).ty(VOID),
        arg(4, abi(sz::PTR), INLINED).ty(VOID),
    ]),
    syscall!(BY_NAME, "NtYieldExecution", OK, RNTST, 0, []),
    syscall!(BY_NAME, "NtAddAtom", OK, RNTST, 3, [
        arg(0, from(1), R | HT).ty(CWSTRING),
        ulong(1),
        arg(2, fixed(2), W | HT).ty(ATOM),
    ]),
    syscall!(BY_NAME, "NtCreateEvent", OK, RNTST, 5, [
        out_handle(0),
        ulong(1),
        obj_attrs(2),
        class(3),
        boolean(4),
    ]),
    syscall!(BY_NAME, "NtCreateSection", OK, RNTST, 7, [
        out_handle(0),
        ulong(1),
        obj_attrs(2),
        timeout(3),
        ulong(4).named("PAGE_NOACCESS"),
        ulong(5).named("SEC_FILE"),
        handle(6),
    ]),
    syscall!(BY_NAME, "NtFlushBuffersFile", OK, RNTST, 2, [
        HANDLE_IN,
        io_status(1),
    ]),
    syscall!(BY_NAME, "NtIsProcessInJob", OK, RNTST, 2, [
        HANDLE_IN,
        handle(1),
    ]),
    syscall!(BY_NAME, "NtProtectVirtualMemory", OK, RNTST, 5, [
        HANDLE_IN,
        arg(1, abi(sz::PTR), R | W | HT).ty(POINTER),
        arg(2, abi(sz::PTR), R | W | HT).ty(UNSIGNED_INT),
        ulong(3).named("PAGE_NOACCESS"),
        out_ulong(4),
    ]),
    info_query!("NtQuerySection", class(1)),
    syscall!(BY_NAME, "NtResumeThread", OK, RNTST, 2, [
        HANDLE_IN,
        out_ulong(1),
    ]),
    syscall!(BY_NAME, "NtTerminateThread", OK, RNTST, 2, [
        HANDLE_IN,
        arg(1, fixed(4), INLINED).ty(NTSTATUS),
    ]),
    syscall!(BY_NAME, "NtCreateFile", OK, RNTST, 11, [
        out_handle(0),
        ulong(1),
        obj_attrs(2),
        io_status(3),
        timeout(4),
        ulong(5).named("FILE_ATTRIBUTE_READONLY"),
        ulong(6).named("FILE_SHARE_READ"),
        ulong(7).named("FILE_SUPERSEDE"),
        ulong(8).named("FILE_DIRECTORY_FILE"),
        arg(9, from(10), R),
        ulong(10),
    ]),
    syscall!(BY_NAME, "NtOpenDirectoryObject", OK, RNTST, 3, [
        out_handle(0),
        ulong(1),
        obj_attrs(2),
    ]),
    syscall!(BY_NAME, "NtQuerySystemTime", OK, RNTST, 1, [
        arg(0, abi(sz::LARGE_INTEGER), W | HT).ty(LARGE_INTEGER),
    ]),
    syscall!(BY_NAME, "NtWaitForMultipleObjects", OK, RNTST, 5, [
        ulong(0),
        arg(1, abi(sz::HANDLE), R | HT).ty(HANDLE),
        class(2),
        boolean(3),
        timeout(4),
    ]),
    syscall!(BY_NAME, "NtCancelIoFile", OK, RNTST, 2, [
        HANDLE_IN,
        io_status(1),
    ]),
    syscall!(BY_NAME, "NtSetValueKey", OK, RNTST, 6, [
        HANDLE_IN,
        arg(1, abi(sz::UNICODE_STRING), R | CT).ty(UNICODE_STRING),
        ulong(2),
        ulong(3).named("REG_NONE"),
        arg(4, abi(sz::PTR), INLINED).ty(UNKNOWN_TYPE),
        ulong(5),
    ]),
    syscall!(BY_NAME, "NtCancelTimer", OK, RNTST, 2, [
        HANDLE_IN,
        arg(1, fixed(1), W | HT).ty(BOOL),
    ]),
    // Numbered only through a sysnum file: these move between builds.
    syscall!(BY_NAME, "NtOpenThread", OK, RNTST, 4, [
        out_handle(0),
        ulong(1),
        obj_attrs(2),
        arg(3, abi(sz::CLIENT_ID), R),
    ]),
    syscall!(BY_NAME, "NtOpenProcessToken", OK, RNTST, 3, [
        HANDLE_IN,
        ulong(1),
        out_handle(2),
    ]),
    syscall!(BY_NAME, "NtDeleteKey", OK, RNTST, 1, [
        HANDLE_IN,
    ]),
    syscall!(BY_NAME, "NtDeleteValueKey", OK, RNTST, 2, [
        HANDLE_IN,
        arg(1, abi(sz::UNICODE_STRING), R | CT).ty(UNICODE_STRING),
    ]),
    syscall!(BY_NAME, "NtGetContextThread", OK, RNTST, 2, [
        HANDLE_IN,
        arg(1, abi(sz::CONTEXT), W | CT).ty(CONTEXT),
    ]),
    syscall!(BY_NAME, "NtSetContextThread", OK, RNTST, 2, [
        HANDLE_IN,
        arg(1, abi(sz::CONTEXT), R | CT).ty(CONTEXT),
    ]),
    syscall!(BY_NAME, "NtSuspendThread", OK, RNTST, 2, [
        HANDLE_IN,
        out_ulong(1),
    ]),
];

pub static NTUSER: &[SyscallRecord] = &[
    usercall_family!("NtUserCallNoParam", UNSIGNED_INT, 1, 0, USER_CALL_NO_PARAM, &USER_CALL_NO_PARAM_UNKNOWN),
    usercall_family!("NtUserCallOneParam", UNSIGNED_INT, 2, 1, USER_CALL_ONE_PARAM, &USER_CALL_ONE_PARAM_UNKNOWN),
    usercall_family!("NtUserCallTwoParam", UNSIGNED_INT, 3, 2, USER_CALL_TWO_PARAM, &USER_CALL_TWO_PARAM_UNKNOWN),
    usercall_family!("NtUserCallHwnd", UINT32, 2, 1, USER_CALL_HWND, &USER_CALL_HWND_UNKNOWN),
    usercall_family!("NtUserCallHwndLock", BOOL32, 2, 1, USER_CALL_HWND_LOCK, &USER_CALL_HWND_LOCK_UNKNOWN),
    usercall_family!("NtUserCallHwndOpt", RHANDLE, 2, 1, USER_CALL_HWND_OPT, &USER_CALL_HWND_OPT_UNKNOWN),
    usercall_family!("NtUserCallHwndParam", UINT32, 3, 2, USER_CALL_HWND_PARAM, &USER_CALL_HWND_PARAM_UNKNOWN),
    usercall_family!("NtUserCallHwndParamLock", UINT32, 3, 2, USER_CALL_HWND_PARAM_LOCK, &USER_CALL_HWND_PARAM_LOCK_UNKNOWN),
    syscall!(BY_NAME, "NtUserGetKeyState", OK, SINT16, 1, [
        arg(0, fixed(4), INLINED).ty(SIGNED_INT),
    ]),
    syscall!(BY_NAME, "NtUserGetAsyncKeyState", OK, SINT16, 1, [
        arg(0, fixed(4), INLINED).ty(SIGNED_INT),
    ]),
    syscall!(BY_NAME, "NtUserGetForegroundWindow", OK, RHANDLE, 0, []),
    syscall!(BY_NAME, "NtUserGetGUIThreadInfo", OK, BOOL32, 2, [
        arg(0, fixed(4), INLINED).ty(UNSIGNED_INT),
        arg(1, IN_FIELD, W).field(0),
    ]),
    syscall!(BY_NAME, "NtUserGetDC", OK, RHANDLE, 1, [
        arg(0, abi(sz::HANDLE), INLINED).ty(HWND),
    ]),
    syscall!(BY_NAME, "NtUserGetKeyboardLayoutName", OK, BOOL32, 1, [
        arg(0, fixed(9 * 2), W | CT).ty(CWSTRING),
    ]),
    syscall!(BY_NAME, "NtUserGetClassName", OK, SINT32, 3, [
        arg(0, abi(sz::HANDLE), INLINED).ty(HWND),
        arg(1, fixed(4), INLINED).ty(BOOL),
        arg(2, abi(sz::UNICODE_STRING), W | CT).ty(UNICODE_STRING_NOLEN),
    ]),
    syscall!(BY_NAME, "NtUserPeekMessage", OK, RNTST, 5, [
        arg(0, abi(sz::WIN_MSG), W | HT).ty(STRUCT),
        arg(1, abi(sz::HANDLE), INLINED).ty(HWND),
        ulong(2),
        ulong(3),
        ulong(4),
    ]),
    syscall!(BY_NAME, "NtUserGetMessage", OK, RNTST, 4, [
        arg(0, abi(sz::WIN_MSG), W | HT).ty(STRUCT),
        arg(1, abi(sz::HANDLE), INLINED).ty(HWND),
        ulong(2),
        ulong(3),
    ]),
    syscall!(BY_NAME, "NtUserSetCursor", OK, RHANDLE, 1, [
        HANDLE_IN,
    ]),
    syscall!(BY_NAME, "NtUserCheckMenuItem", OK | RET_MINUS1_FAIL, UINT32, 3, [
        HANDLE_IN,
        ulong(1),
        ulong(2),
    ]),
    syscall!(BY_NAME, "NtUserGetAtomName", OK | RET_ZERO_FAIL, UINT32, 2, [
        arg(0, fixed(2), INLINED).ty(ATOM),
        arg(1, abi(sz::UNICODE_STRING), W | CT).ty(UNICODE_STRING_NOLEN),
    ]),
    syscall!(BY_NAME, "NtUserCountClipboardFormats", OK, UINT32, 0, []),
    syscall!(BY_NAME, "NtUserGetKeyboardState", OK, UINT32, 1, [
        arg(0, fixed(USER_KEYBOARD_STATE_SIZE), W | HT).ty(UNSIGNED_INT),
    ]),
    syscall!(BY_NAME, "NtUserSetKeyboardState", OK, BOOL32, 1, [
        arg(0, fixed(USER_KEYBOARD_STATE_SIZE), R | HT).ty(UNSIGNED_INT),
    ]),
    syscall!(BY_NAME, "NtUserGetCursorInfo", OK, BOOL32, 1, [
        arg(0, IN_FIELD, W).field(0),
    ]),
    syscall!(BY_NAME, "NtUserGetTitleBarInfo", OK, BOOL8, 2, [
        arg(0, abi(sz::HANDLE), INLINED).ty(HWND),
        arg(1, IN_FIELD, W).field(0),
    ]),
    syscall!(BY_NAME, "NtUserGetCaretPos", OK, BOOL32, 1, [
        arg(0, abi(sz::POINTL), W | HT).ty(STRUCT),
    ]),
    syscall!(BY_NAME, "NtUserGetClipCursor", OK, BOOL32, 1, [
        arg(0, fixed(16), W | HT).ty(STRUCT),
    ]),
    syscall!(BY_NAME, "NtUserGetThreadState", OK, UNSIGNED_INT, 1, [
        ulong(0),
    ]),
    syscall!(BY_NAME, "NtUserGetDoubleClickTime", OK, UINT32, 0, []),
    syscall!(BY_NAME, "NtUserShowWindow", OK, BOOL32, 2, [
        arg(0, abi(sz::HANDLE), INLINED).ty(HWND),
        class(1),
    ]),
    syscall!(BY_NAME, "NtUserDestroyWindow", OK, BOOL8, 1, [
        arg(0, abi(sz::HANDLE), INLINED).ty(HWND),
    ]),
    syscall!(BY_NAME, "NtUserGetWindowDC", OK, RHANDLE, 1, [
        arg(0, abi(sz::HANDLE), INLINED).ty(HWND),
    ]),
    syscall!(BY_NAME, "NtUserSetFocus", OK, RHANDLE, 1, [
        arg(0, abi(sz::HANDLE), INLINED).ty(HWND),
    ]),
    syscall!(BY_NAME, "NtUserInternalGetWindowText", OK, SINT32, 3, [
        arg(0, abi(sz::HANDLE), INLINED).ty(HWND),
        arg(1, from(2), W | SIZE_IN_ELEMENTS).stride(AbiSize::all(2)),
        arg(1, fixed(0), W | CT).ty(CWSTRING),
        class(2),
    ]),
    syscall!(BY_NAME, "NtUserGetKeyboardLayoutList", OK, UINT32, 2, [
        ulong(0),
        arg(1, from(0), W | SIZE_IN_ELEMENTS).stride(sz::HANDLE),
        arg(1, RET, W | NO_WRITE_IF_COUNT_0 | SIZE_IN_ELEMENTS).stride(sz::HANDLE),
    ]),
    // The returned length leaves out the terminator.
    syscall!(BY_NAME, "NtUserGetClipboardFormatName", OK, SINT32, 3, [
        ulong(0),
        arg(1, from(2), W | SIZE_IN_ELEMENTS).stride(AbiSize::all(2)),
        arg(1, RET, W | SIZE_IN_ELEMENTS | SIZE_PLUS_1).stride(AbiSize::all(2)),
        class(2),
    ]),
    syscall!(BY_NAME, "NtUserGetKeyNameText", OK, UINT32, 3, [
        class(0),
        arg(1, from(2), W | SIZE_IN_ELEMENTS).stride(AbiSize::all(2)),
        arg(1, RET, W | SIZE_IN_ELEMENTS | SIZE_PLUS_1).stride(AbiSize::all(2)),
        class(2),
    ]),
];

pub static NTGDI: &[SyscallRecord] = &[
    syscall!(BY_NAME, "NtGdiCreateCompatibleDC", OK, RHANDLE, 1, [
        HANDLE_IN,
    ]),
    syscall!(BY_NAME, "NtGdiDeleteObjectApp", OK, BOOL32, 1, [
        HANDLE_IN,
    ]),
    syscall!(BY_NAME, "NtGdiBitBlt", OK, BOOL32, 11, [
        HANDLE_IN,
        class(1),
        class(2),
        class(3),
        class(4),
        handle(5),
        class(6),
        class(7),
        ulong(8),
        ulong(9),
        ulong(10),
    ]),
    syscall!(BY_NAME, "NtGdiGetTextFaceW", OK, SINT32, 4, [
        HANDLE_IN,
        class(1),
        arg(2, from(1), W | SIZE_IN_ELEMENTS).stride(AbiSize::all(2)),
        arg(2, RET, W | SIZE_IN_ELEMENTS).stride(AbiSize::all(2)),
        arg(3, fixed(4), INLINED).ty(BOOL),
    ]),
    syscall!(BY_NAME, "NtGdiFlush", OK, RVOID, 0, []),
    syscall!(BY_NAME, "NtGdiCreateSolidBrush", OK, RHANDLE, 2, [
        ulong(0),
        handle(1),
    ]),
    syscall!(BY_NAME, "NtGdiSelectBitmap", OK, RHANDLE, 2, [
        HANDLE_IN,
        handle(1),
    ]),
    syscall!(BY_NAME, "NtGdiGetWidthTable", OK | RET_MINUS1_FAIL, SINT32, 7, [
        HANDLE_IN,
        ulong(1),
        arg(2, from(3), R | SIZE_IN_ELEMENTS).stride(AbiSize::all(2)),
        ulong(3),
        arg(4, from(3), W | SIZE_IN_ELEMENTS).stride(AbiSize::all(2)),
        arg(5, abi(sz::WIDTHDATA), W | HT).ty(STRUCT),
        arg(6, fixed(4), W | HT).ty(UNSIGNED_INT),
    ]),
    // Returns the highest format index, so 0 is a failure.
    syscall!(BY_NAME, "NtGdiDescribePixelFormat", OK, SINT32, 4, [
        HANDLE_IN,
        class(1),
        ulong(2),
        arg(3, from(2), W | HT).ty(STRUCT),
    ]),
    syscall!(BY_NAME, "NtGdiSetPixelFormat", OK, BOOL32, 2, [
        HANDLE_IN,
        class(1),
    ]),
    syscall!(BY_NAME, "NtGdiSwapBuffers", OK, BOOL32, 1, [
        HANDLE_IN,
    ]),
    // Only TRUE is success.
    syscall!(BY_NAME, "NtGdiGetRasterizerCaps", OK, BOOL32, 2, [
        arg(0, from(1), W | HT).ty(STRUCT),
        ulong(1),
    ]),
    syscall!(BY_NAME, "NtGdiDdAttachSurface", OK, BOOL32, 2, [
        HANDLE_IN,
        handle(1),
    ]),
    syscall!(BY_NAME, "NtGdiDdCreateDirectDrawObject", OK, RHANDLE, 1, [
        HANDLE_IN,
    ]),
    syscall!(BY_NAME, "NtGdiDdDeleteDirectDrawObject", OK, BOOL32, 1, [
        HANDLE_IN,
    ]),
    syscall!(BY_NAME, "NtGdiDdDeleteSurfaceObject", OK, BOOL32, 1, [
        HANDLE_IN,
    ]),
    syscall!(BY_NAME, "NtGdiDdDestroySurface", OK, UINT32, 2, [
        HANDLE_IN,
        arg(1, fixed(4), INLINED).ty(BOOL),
    ]),
    syscall!(BY_NAME, "NtGdiDxgGenericThunk", OK, UINT32, 6, [
        arg(0, abi(sz::PTR), INLINED).ty(UNSIGNED_INT),
        arg(1, abi(sz::PTR), INLINED).ty(UNSIGNED_INT),
        arg(2, abi(sz::PTR), R | W | HT).ty(UNSIGNED_INT),
        arg(3, abi(sz::PTR), R | W | HT).ty(POINTER),
        arg(4, abi(sz::PTR), R | W | HT).ty(UNSIGNED_INT),
        arg(5, abi(sz::PTR), R | W | HT).ty(POINTER),
    ]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Numbers, SizeSpec, SysargFlags};
    extern crate std;
    use std::format;

    #[test]
    fn read_file_double_entry() {
        let r = NTOSKRNL
            .iter()
            .find(|r| r.name == "NtReadFile")
            .expect("NtReadFile is in the table");
        let (first, a) = r.find_arg(0, 5).expect("buffer descriptor");
        assert_eq!(a.size, SizeSpec::Arg(6));
        let (_, b) = r.find_arg(first + 1, 5).expect("written size descriptor");
        assert_eq!(b.size, SizeSpec::Arg(4));
        assert!(b.flags.contains(SysargFlags::POST_SIZE_IO_STATUS));
    }

    #[test]
    fn key_infoclass_tables() {
        let q = NTOSKRNL
            .iter()
            .find(|r| r.name == "NtQueryKey")
            .expect("NtQueryKey is in the table");
        assert_eq!(q.selector(), Some(1));
        let table = q.secondary.expect("secondary table");
        assert_eq!(table.entries.len(), 8);
        assert_eq!(table.entries[3].nums, Numbers::Code(3));
        assert_eq!(table.entries[3].name, "NtQueryKey.KeyNameInformation");
        assert_eq!(table.base.map(|b| b.name), Some("NtQueryKey.UNKNOWN"));
    }

    #[test]
    fn usercall_families() {
        let families = [
            ("NtUserCallNoParam", 0),
            ("NtUserCallOneParam", 1),
            ("NtUserCallTwoParam", 2),
            ("NtUserCallHwnd", 1),
            ("NtUserCallHwndLock", 1),
            ("NtUserCallHwndOpt", 1),
            ("NtUserCallHwndParam", 2),
            ("NtUserCallHwndParamLock", 2),
        ];
        for (name, selector) in families {
            let r = NTUSER.iter().find(|r| r.name == name).expect(name);
            assert_eq!(r.selector(), Some(selector), "{name}");
            let table = r.secondary.expect("secondary table");
            let base = table.base.expect("base entry");
            assert_eq!(base.name, format!("{name}.UNKNOWN"));
            for entry in table.entries {
                assert_eq!(entry.nums, Numbers::ByName, "{}", entry.name);
                assert_eq!(entry.name.split_once('.').map(|(p, _)| p), Some(name));
                assert_eq!(entry.arg_count, r.arg_count, "{}", entry.name);
            }
        }

        let two = NTUSER.iter().find(|r| r.name == "NtUserCallTwoParam").unwrap();
        let hdev = two
            .secondary
            .unwrap()
            .entries
            .iter()
            .find(|e| e.name == "NtUserCallTwoParam.GETHDEVNAME")
            .unwrap();
        assert_eq!(hdev.args[0].size, SizeSpec::Arg(2));
    }

    #[test]
    fn all_by_name() {
        for r in NTOSKRNL.iter().chain(NTUSER).chain(NTGDI) {
            assert_eq!(r.nums, Numbers::ByName, "{}", r.name);
        }
    }
}
