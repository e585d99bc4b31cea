// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Built-in Windows number sets.
//!
//! Only the low ntoskrnl range, which stayed put across Windows 10 x64
//! releases, is carried here. Everything else comes from a sysnum file.

/// System call numbers for a range of kernel builds.
#[derive(Debug)]
pub struct NumberSet {
    pub name: &'static str,
    /// First and last build number (inclusive) this set applies to.
    pub builds: (u32, u32),
    /// The call whose running number is compared against the set to make
    /// sure the guess was right.
    pub differentiator: &'static str,
    pub numbers: &'static [(&'static str, i32)],
}

impl NumberSet {
    pub fn number(&self, name: &str) -> Option<i32> {
        self.numbers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, num)| num)
    }
}

pub static WIN10_X64: NumberSet = NumberSet {
    name: "win10-x64",
    builds: (10240, 19045),
    differentiator: "NtQueryKey",
    numbers: &[
        ("NtAccessCheck", 0x00),
        ("NtWorkerFactoryWorkerReady", 0x01),
        ("NtAcceptConnectPort", 0x02),
        ("NtMapUserPhysicalPagesScatter", 0x03),
        ("NtWaitForSingleObject", 0x04),
        ("NtCallbackReturn", 0x05),
        ("NtReadFile", 0x06),
        ("NtDeviceIoControlFile", 0x07),
        ("NtWriteFile", 0x08),
        ("NtRemoveIoCompletion", 0x09),
        ("NtReleaseSemaphore", 0x0a),
        ("NtReplyWaitReceivePort", 0x0b),
        ("NtReplyPort", 0x0c),
        ("NtSetInformationThread", 0x0d),
        ("NtSetEvent", 0x0e),
        ("NtClose", 0x0f),
        ("NtQueryObject", 0x10),
        ("NtQueryInformationFile", 0x11),
        ("NtOpenKey", 0x12),
        ("NtEnumerateValueKey", 0x13),
        ("NtFindAtom", 0x14),
        ("NtQueryDefaultLocale", 0x15),
        ("NtQueryKey", 0x16),
        ("NtQueryValueKey", 0x17),
        ("NtAllocateVirtualMemory", 0x18),
        ("NtQueryInformationProcess", 0x19),
        ("NtWaitForMultipleObjects32", 0x1a),
        ("NtWriteFileGather", 0x1b),
        ("NtSetInformationProcess", 0x1c),
        ("NtCreateKey", 0x1d),
        ("NtFreeVirtualMemory", 0x1e),
        ("NtImpersonateClientOfPort", 0x1f),
        ("NtReleaseMutant", 0x20),
        ("NtQueryInformationToken", 0x21),
        ("NtRequestWaitReplyPort", 0x22),
        ("NtQueryVirtualMemory", 0x23),
        ("NtOpenThreadToken", 0x24),
        ("NtQueryInformationThread", 0x25),
        ("NtOpenProcess", 0x26),
        ("NtSetInformationFile", 0x27),
        ("NtMapViewOfSection", 0x28),
        ("NtAccessCheckAndAuditAlarm", 0x29),
        ("NtUnmapViewOfSection", 0x2a),
        ("NtReplyWaitReceivePortEx", 0x2b),
        ("NtTerminateProcess", 0x2c),
        ("NtSetEventBoostPriority", 0x2d),
        ("NtReadFileScatter", 0x2e),
        ("NtOpenThreadTokenEx", 0x2f),
        ("NtOpenProcessTokenEx", 0x30),
        ("NtQueryPerformanceCounter", 0x31),
        ("NtEnumerateKey", 0x32),
        ("NtOpenFile", 0x33),
        ("NtDelayExecution", 0x34),
        ("NtQueryDirectoryFile", 0x35),
        ("NtQuerySystemInformation", 0x36),
        ("NtOpenSection", 0x37),
        ("NtQueryTimer", 0x38),
        ("NtFsControlFile", 0x39),
        ("NtWriteVirtualMemory", 0x3a),
        ("NtCloseObjectAuditAlarm", 0x3b),
        ("NtDuplicateObject", 0x3c),
        ("NtQueryAttributesFile", 0x3d),
        ("NtClearEvent", 0x3e),
        ("NtReadVirtualMemory", 0x3f),
        ("NtOpenEvent", 0x40),
        ("NtAdjustPrivilegesToken", 0x41),
        ("NtDuplicateToken", 0x42),
        ("NtContinue", 0x43),
        ("NtQueryDefaultUILanguage", 0x44),
        ("NtQueueApcThread", 0x45),
        ("NtYieldExecution", 0x46),
        ("NtAddAtom", 0x47),
        ("NtCreateEvent", 0x48),
        ("NtQueryVolumeInformationFile", 0x49),
        ("NtCreateSection", 0x4a),
        ("NtFlushBuffersFile", 0x4b),
        ("NtApphelpCacheControl", 0x4c),
        ("NtCreateProcessEx", 0x4d),
        ("NtCreateThread", 0x4e),
        ("NtIsProcessInJob", 0x4f),
        ("NtProtectVirtualMemory", 0x50),
        ("NtQuerySection", 0x51),
        ("NtResumeThread", 0x52),
        ("NtTerminateThread", 0x53),
        ("NtReadRequestData", 0x54),
        ("NtCreateFile", 0x55),
        ("NtQueryEvent", 0x56),
        ("NtWriteRequestData", 0x57),
        ("NtOpenDirectoryObject", 0x58),
        ("NtAccessCheckByTypeAndAuditAlarm", 0x59),
        ("NtQuerySystemTime", 0x5a),
        ("NtWaitForMultipleObjects", 0x5b),
        ("NtSetInformationObject", 0x5c),
        ("NtCancelIoFile", 0x5d),
        ("NtTraceEvent", 0x5e),
        ("NtPowerInformation", 0x5f),
        ("NtSetValueKey", 0x60),
        ("NtCancelTimer", 0x61),
        ("NtSetTimer", 0x62),
    ],
};

pub static NUMBER_SETS: &[&NumberSet] = &[&WIN10_X64];

/// The built-in set covering `build`, if any.
pub fn for_build(build: u32) -> Option<&'static NumberSet> {
    NUMBER_SETS
        .iter()
        .copied()
        .find(|s| (s.builds.0..=s.builds.1).contains(&build))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win10_lookup() {
        let set = for_build(19041).expect("20H1 is covered");
        assert_eq!(set.number("NtReadFile"), Some(6));
        assert_eq!(set.number("NtQueryKey"), Some(0x16));
        assert_eq!(set.number("NtOpenThread"), None);
    }

    #[test]
    fn unknown_build() {
        assert!(for_build(7601).is_none());
        assert!(for_build(22621).is_none());
    }

    #[test]
    fn numbers_are_unique() {
        let nums = WIN10_X64.numbers;
        for (i, (a, x)) in nums.iter().enumerate() {
            for (b, y) in &nums[i + 1..] {
                assert_ne!(x, y, "{a} and {b}");
            }
        }
    }
}
