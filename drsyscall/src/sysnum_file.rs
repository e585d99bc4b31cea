// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Windows system call numbers loaded from a text file, for kernels the
//! built-in number sets do not cover.
//!
//! ```text
//! DrSyscall Number File
//! 1
//! NtGetContextThread
//! START=0xe5
//! NtBindCompositionSurface=0x1121
//! NtUserCallNoParam.CREATEMENU=0x0
//! =END
//! ```
//!
//! Each block starts with the number the differentiator call has on the
//! kernel it describes.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context, Result};
use log::debug;

use crate::error::DrsysError;

pub const HEADER: &str = "DrSyscall Number File";
pub const VERSION: u32 = 1;
pub const FOOTER: &str = "=END";

/// Libraries holding system call wrappers, relative to `system32`.
pub const SYSNUM_LIBS: [&str; 7] = [
    "ntdll.dll",
    "kernelbase.dll",
    "kernel32.dll",
    "gdi32.dll",
    "imm32.dll",
    "user32.dll",
    "win32u.dll",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberBlock {
    /// The differentiator's number on the kernel this block describes.
    pub start: i32,
    pub numbers: Vec<(String, i32)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SysnumFile {
    pub version: u32,
    pub differentiator: String,
    pub blocks: Vec<NumberBlock>,
}

fn parse_hex(s: &str) -> Result<i32> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| anyhow!("expected a 0x-prefixed number, got {s:?}"))?;
    let value = u32::from_str_radix(digits, 16).with_context(|| format!("bad number {s:?}"))?;
    Ok(value as i32)
}

impl SysnumFile {
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let (_, header) = lines.next().context("empty file")?;
        if header != HEADER {
            bail!("not a system call number file: first line is {header:?}");
        }
        let (n, version) = lines.next().context("missing format version")?;
        let version: u32 = version
            .parse()
            .with_context(|| format!("line {n}: bad format version {version:?}"))?;
        if version > VERSION {
            bail!("format version {version} is newer than the supported {VERSION}");
        }
        let (_, differentiator) = lines.next().context("missing differentiator name")?;
        let differentiator = differentiator.to_string();

        let mut blocks = Vec::new();
        let mut current: Option<NumberBlock> = None;
        for (n, line) in lines {
            match current.as_mut() {
                None => {
                    let start = line
                        .strip_prefix("START=")
                        .with_context(|| format!("line {n}: expected START=, got {line:?}"))?;
                    let start = parse_hex(start).with_context(|| format!("line {n}"))?;
                    current = Some(NumberBlock {
                        start,
                        numbers: Vec::new(),
                    });
                }
                Some(block) => {
                    if line == FOOTER {
                        blocks.extend(current.take());
                        continue;
                    }
                    let (name, num) = line
                        .split_once('=')
                        .with_context(|| format!("line {n}: expected name=number, got {line:?}"))?;
                    if name.is_empty() {
                        bail!("line {n}: missing system call name");
                    }
                    let num = parse_hex(num).with_context(|| format!("line {n}"))?;
                    block.numbers.push((name.to_string(), num));
                }
            }
        }
        if let Some(block) = current {
            bail!("block START={:#x} is missing {FOOTER}", block.start);
        }

        Ok(SysnumFile {
            version,
            differentiator,
            blocks,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let file = Self::parse(&text).with_context(|| format!("parsing {}", path.display()))?;
        debug!(
            "{}: {} blocks keyed on {}",
            path.display(),
            file.blocks.len(),
            file.differentiator
        );
        Ok(file)
    }

    /// The block for a kernel on which the differentiator has number
    /// `start`.
    pub fn block(&self, start: i32) -> Option<&NumberBlock> {
        self.blocks.iter().find(|b| b.start == start)
    }
}

/// The readable system call libraries under `system_root`, the input to
/// generating a number file. Fails with [`DrsysError::InvalidSize`] when
/// more than `capacity` exist.
pub fn sysnum_libs(system_root: &Path, capacity: usize) -> Result<Vec<PathBuf>, DrsysError> {
    let libs: Vec<PathBuf> = SYSNUM_LIBS
        .iter()
        .map(|lib| system_root.join("system32").join(lib))
        .filter(|path| fs::File::open(path).is_ok())
        .collect();
    if libs.len() > capacity {
        return Err(DrsysError::InvalidSize { needed: libs.len() });
    }
    if libs.is_empty() {
        return Err(DrsysError::NotFound);
    }
    Ok(libs)
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const TWO_KERNELS: &str = indoc! {"
        DrSyscall Number File
        1
        NtGetContextThread
        START=0xe5
        NtBindCompositionSurface=0x1121
        NtUserCallNoParam.CREATEMENU=0x0

        =END
        START=0xe6
        NtBindCompositionSurface=0x1120
        =END
    "};

    #[test]
    fn picks_block_by_differentiator() {
        let file = SysnumFile::parse(TWO_KERNELS).unwrap();
        assert_eq!(file.version, 1);
        assert_eq!(file.differentiator, "NtGetContextThread");
        assert_eq!(file.blocks.len(), 2);

        let block = file.block(0xe6).unwrap();
        assert_eq!(
            block.numbers,
            vec![("NtBindCompositionSurface".to_string(), 0x1120)]
        );
        assert_eq!(file.block(0xe5).unwrap().numbers.len(), 2);
        assert!(file.block(0xe7).is_none());
    }

    #[test]
    fn rejects_malformed_block_line() {
        let text = indoc! {"
            DrSyscall Number File
            1
            NtGetContextThread
            START=0xe5
            NtBindCompositionSurface 0x1121
            =END
        "};
        let err = SysnumFile::parse(text).unwrap_err();
        assert!(format!("{err:#}").contains("line 5"), "{err:#}");
    }

    #[test]
    fn rejects_bad_header_and_version() {
        assert!(SysnumFile::parse("Something Else\n1\nNtFoo\n").is_err());
        assert!(SysnumFile::parse("DrSyscall Number File\n2\nNtFoo\n").is_err());
        assert!(SysnumFile::parse("DrSyscall Number File\nx\nNtFoo\n").is_err());
    }

    #[test]
    fn unterminated_block() {
        let text = "DrSyscall Number File\n1\nNtFoo\nSTART=0x1\nNtFoo=0x1\n";
        assert!(SysnumFile::parse(text).is_err());
    }

    #[test]
    fn libs_capacity() {
        let root = std::env::temp_dir().join(format!("drsys-libs-{}", std::process::id()));
        let system32 = root.join("system32");
        fs::create_dir_all(&system32).unwrap();
        fs::write(system32.join("ntdll.dll"), b"MZ").unwrap();
        fs::write(system32.join("user32.dll"), b"MZ").unwrap();

        assert_eq!(
            sysnum_libs(&root, 1),
            Err(DrsysError::InvalidSize { needed: 2 })
        );
        let libs = sysnum_libs(&root, 7).unwrap();
        assert_eq!(libs, vec![system32.join("ntdll.dll"), system32.join("user32.dll")]);

        fs::remove_dir_all(&root).unwrap();
    }
}
