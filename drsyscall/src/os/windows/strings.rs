// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Counted strings and the structures that carry them. These hold
//! pointers to further memory, and some of their fields are optional.

use drsyscall_common::{
    kernel_types::windows::{
        ObjectAttributes, SecurityDescriptor, UnicodeString, SECURITY_QOS_SIZE, SE_DACL_PRESENT,
        SE_SACL_PRESENT,
    },
    ArgDesc, ParamType, SysargFlags,
};
use log::{trace, warn};

use crate::{os::ArgAccess, walk::Walk};

/// Whether a `size` byte structure at `start` ends inside the address
/// space. Field offsets are only added to starts that pass.
fn in_address_space(start: u64, size: u64, what: &str) -> bool {
    if start.checked_add(size).is_none() {
        warn!("{what} at {start:#x} runs past the address space");
        return false;
    }
    true
}

/// Only Length, ImpersonationLevel, ContextTrackingMode and EffectiveOnly
/// need to be set; the rest is padding.
const SECURITY_QOS_DEFINED: u64 = 4 + 4 + 1 + 1;

pub(crate) fn security_qos_access(walk: &mut Walk<'_>, access: &ArgAccess<'_>) -> bool {
    handle_security_qos(walk, access.desc, access.start);
    true
}

fn handle_security_qos(walk: &mut Walk<'_>, desc: &ArgDesc, start: u64) {
    debug_assert!(SECURITY_QOS_DEFINED <= SECURITY_QOS_SIZE);
    walk.report(desc, start, SECURITY_QOS_DEFINED, None);
}

pub(crate) fn security_descriptor_access(walk: &mut Walk<'_>, access: &ArgAccess<'_>) -> bool {
    handle_security_descriptor(walk, access.desc, access.start);
    true
}

/// The trailing Sacl and Dacl pointers only need to be set when the
/// matching Control bits are.
fn handle_security_descriptor(walk: &mut Walk<'_>, desc: &ArgDesc, start: u64) {
    debug_assert!(!desc.flags.contains(SysargFlags::WRITE), "descriptors are only read");
    if !walk.pre() {
        return;
    }
    let ptr = walk.ptr_size();
    if !in_address_space(start, SecurityDescriptor::size(ptr), "SECURITY_DESCRIPTOR") {
        return;
    }
    if !walk.report(desc, start, SecurityDescriptor::sacl(ptr), None) {
        return;
    }
    let Some(control) = walk.read_u16(start + SecurityDescriptor::CONTROL) else {
        return;
    };
    if control & SE_SACL_PRESENT != 0
        && !walk.report(desc, start + SecurityDescriptor::sacl(ptr), ptr, None)
    {
        return;
    }
    if control & SE_DACL_PRESENT != 0 {
        walk.report(desc, start + SecurityDescriptor::dacl(ptr), ptr, None);
    }
}

pub(crate) fn unicode_string_access(walk: &mut Walk<'_>, access: &ArgAccess<'_>) -> bool {
    handle_unicode_string(walk, access.desc, access.start, false);
    true
}

/// Some calls leave a stale Length in their output strings, so the
/// content written is found by scanning instead.
pub(crate) fn unicode_string_nolen_access(walk: &mut Walk<'_>, access: &ArgAccess<'_>) -> bool {
    handle_unicode_string(walk, access.desc, access.start, true);
    true
}

/// A `UNICODE_STRING` as read from the traced process.
struct CountedString {
    length: u64,
    maximum_length: u64,
    buffer: u64,
}

fn read_unicode_string(walk: &Walk<'_>, start: u64) -> Option<CountedString> {
    Some(CountedString {
        length: walk.read_u16(start + UnicodeString::LENGTH)? as u64,
        maximum_length: walk.read_u16(start + UnicodeString::MAXIMUM_LENGTH)? as u64,
        buffer: walk.read_ptr(start + UnicodeString::buffer(walk.ptr_size()))?,
    })
}

fn handle_unicode_string(walk: &mut Walk<'_>, desc: &ArgDesc, start: u64, ignore_len: bool) {
    if start == 0 {
        return;
    }
    let ptr = walk.ptr_size();
    if !in_address_space(start, UnicodeString::size(ptr), "UNICODE_STRING") {
        return;
    }
    let input = desc.flags.contains(SysargFlags::READ);

    // Output strings only have their Buffer written.
    if walk.pre() {
        let header_ok = if input {
            walk.report(desc, start + UnicodeString::LENGTH, 2, Some("UNICODE_STRING.Length"))
        } else {
            // Length may be unset for outputs, MaximumLength for inputs.
            walk.report_memarg_type(
                desc.param as i32,
                SysargFlags::READ,
                start + UnicodeString::MAXIMUM_LENGTH,
                2,
                Some("UNICODE_STRING.MaximumLength"),
                ParamType::UnicodeString,
                None,
            )
        };
        if !header_ok {
            return;
        }
        if !walk.report(
            desc,
            start + UnicodeString::buffer(ptr),
            ptr,
            Some("UNICODE_STRING.Buffer"),
        ) {
            return;
        }
    }

    let Some(us) = read_unicode_string(walk, start) else {
        warn!("unable to read UNICODE_STRING at {start:#x}");
        return;
    };
    trace!(
        "UNICODE_STRING Buffer={:#x} Length={} MaximumLength={}",
        us.buffer,
        us.length,
        us.maximum_length
    );

    if walk.pre() {
        if input {
            debug_assert!(!ignore_len, "input strings carry their length");
            walk.report(desc, us.buffer, us.length, Some("UNICODE_STRING content"));
        } else {
            walk.report(desc, us.buffer, us.maximum_length, Some("UNICODE_STRING capacity"));
        }
    } else if us.maximum_length > 0 {
        if ignore_len {
            walk.handle_cwstring(
                desc.param as i32,
                desc.flags,
                Some("UNICODE_STRING content"),
                us.buffer,
                us.maximum_length,
                false,
            );
        } else {
            // Length leaves out the terminator, which is written too.
            walk.report(desc, us.buffer, us.length + 2, Some("UNICODE_STRING content"));
        }
    }
}

pub(crate) fn object_attributes_access(walk: &mut Walk<'_>, access: &ArgAccess<'_>) -> bool {
    handle_object_attributes(walk, access.desc, access.start);
    true
}

fn handle_object_attributes(walk: &mut Walk<'_>, desc: &ArgDesc, start: u64) {
    let ptr = walk.ptr_size();
    if !in_address_space(start, ObjectAttributes::size(ptr), "OBJECT_ATTRIBUTES") {
        return;
    }
    // Fields are reported one by one to skip the padding on 64-bit.
    let fields = [
        (ObjectAttributes::LENGTH, 4, "OBJECT_ATTRIBUTES.Length"),
        (ObjectAttributes::root_directory(ptr), ptr, "OBJECT_ATTRIBUTES.RootDirectory"),
        (ObjectAttributes::object_name(ptr), ptr, "OBJECT_ATTRIBUTES.ObjectName"),
        (ObjectAttributes::attributes(ptr), 4, "OBJECT_ATTRIBUTES.Attributes"),
        (
            ObjectAttributes::security_descriptor(ptr),
            ptr,
            "OBJECT_ATTRIBUTES.SecurityDescriptor",
        ),
        (
            ObjectAttributes::security_qos(ptr),
            ptr,
            "OBJECT_ATTRIBUTES.SecurityQualityOfService",
        ),
    ];
    for (offset, size, id) in fields {
        if !walk.report(desc, start + offset, size, Some(id)) {
            return;
        }
    }

    let name = walk.read_ptr(start + ObjectAttributes::object_name(ptr));
    let sd = walk.read_ptr(start + ObjectAttributes::security_descriptor(ptr));
    let qos = walk.read_ptr(start + ObjectAttributes::security_qos(ptr));
    let (Some(name), Some(sd), Some(qos)) = (name, sd, qos) else {
        warn!("unable to read OBJECT_ATTRIBUTES at {start:#x}");
        return;
    };
    if name != 0 {
        handle_unicode_string(walk, desc, name, false);
    }
    if walk.abort {
        return;
    }
    if sd != 0 {
        handle_security_descriptor(walk, desc, sd);
    }
    if walk.abort {
        return;
    }
    if qos != 0 {
        handle_security_qos(walk, desc, qos);
    }
}

/// Wide strings: the normal size check covers the whole output buffer, so
/// only the content gets scanned.
pub(crate) fn cwstring_access(walk: &mut Walk<'_>, access: &ArgAccess<'_>) -> bool {
    walk.handle_cwstring(
        access.desc.param as i32,
        access.desc.flags,
        None,
        access.start,
        access.size,
        false,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structures_must_end_inside_the_address_space() {
        assert!(in_address_space(0x1000, 16, "UNICODE_STRING"));
        assert!(in_address_space(u64::MAX - 16, 16, "UNICODE_STRING"));
        assert!(!in_address_space(u64::MAX - 15, 16, "UNICODE_STRING"));
        assert!(!in_address_space(u64::MAX, 1, "OBJECT_ATTRIBUTES"));
    }
}
