// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! Text rendering of system call descriptions, used by the `drsys` tool.

use std::pin::Pin;

use anyhow::Result;
use clap::ValueEnum;
use drsyscall_common::{ParamMode, SysinfoFlags};
use tokio::io::{AsyncWrite, AsyncWriteExt as _};

use crate::{arg::Arg, engine::Engine, syscall::Syscall};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum FormattingStyle {
    #[default]
    OneLine,
    MultiLine,
}

pub struct Formatter<'f> {
    style: FormattingStyle,
    output: Pin<&'f mut dyn AsyncWrite>,
}

impl<'f> Formatter<'f> {
    pub fn new(output: Pin<&'f mut dyn AsyncWrite>, style: FormattingStyle) -> Self {
        Formatter { style, output }
    }

    /// Starts the signature of `syscall`, prefixed by its number.
    pub async fn push_syscall(mut self, syscall: &Syscall) -> Result<SyscallFormatter<'f>> {
        let output = &mut self.output;

        output.write_all(syscall.number().to_string().as_bytes()).await?;

        match self.style {
            FormattingStyle::OneLine => output.write_all(b" ").await?,
            FormattingStyle::MultiLine => output.write_all(b"\n\t").await?,
        };

        output.write_all(syscall.name().as_bytes()).await?;
        output.write_all(b"(").await?;

        Ok(SyscallFormatter {
            formatter: self,
            argc: 0,
        })
    }
}

pub struct SyscallFormatter<'f> {
    formatter: Formatter<'f>,
    argc: usize,
}

const INDENT_STEP: &[u8] = &[b' '; 4];
impl<'f> SyscallFormatter<'f> {
    pub async fn push_arg(&mut self, arg: &[u8]) -> Result<()> {
        let argc = self.argc;
        let output = &mut self.formatter.output;

        if argc > 0 {
            output.write_all(b",").await?;
        }
        match self.formatter.style {
            FormattingStyle::OneLine => {
                if argc > 0 {
                    output.write_all(b" ").await?;
                }
                output.write_all(arg).await?;
            }
            FormattingStyle::MultiLine => {
                output.write_all(b"\n\t").await?;
                output.write_all(INDENT_STEP).await?;
                output.write_all(arg).await?;
            }
        }

        self.argc += 1;

        Ok(())
    }

    /// Closes the signature with the return value text.
    pub async fn finish(mut self, ret: &str, suffix: Option<&[u8]>) -> Result<Formatter<'f>> {
        let output = &mut self.formatter.output;

        if let FormattingStyle::MultiLine = self.formatter.style {
            output.write_all(b"\n\t").await?;
        }

        output.write_all(b") = ").await?;
        output.write_all(ret.as_bytes()).await?;

        if let Some(suffix) = suffix {
            output.write_all(suffix).await?;
        }

        output.write_all(b"\n").await?;

        Ok(self.formatter)
    }
}

pub fn mode_name(mode: ParamMode) -> String {
    let mut parts = Vec::new();
    if mode.contains(ParamMode::IN) {
        parts.push("in");
    }
    if mode.contains(ParamMode::OUT) {
        parts.push("out");
    }
    if mode.contains(ParamMode::INLINED) {
        parts.push("inlined");
    }
    if mode.contains(ParamMode::BOUNDS) {
        parts.push("bounds");
    }
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join("|")
    }
}

/// One parameter as `#ordinal type [size] mode`, plus the enum it draws
/// its values from, if any.
pub fn format_param(arg: &Arg) -> String {
    let mut text = format!(
        "#{} {} [{}] {}",
        arg.ordinal,
        arg.type_name.unwrap_or("?"),
        arg.size,
        mode_name(arg.mode)
    );
    if let Some(name) = arg.enum_name {
        text.push_str(" enum ");
        text.push_str(name);
    }
    text
}

/// Writes the declared signature of `syscall`. Calls whose return type
/// depends on the arguments end in `?`.
pub async fn format_signature<'f>(
    engine: &Engine,
    syscall: &Syscall,
    formatter: Formatter<'f>,
) -> Result<Formatter<'f>> {
    let args = engine.collect_arg_types(syscall)?;

    let mut sf = formatter.push_syscall(syscall).await?;
    let mut ret = "?".to_string();
    for arg in &args {
        if arg.is_retval() {
            ret = format!("{} [{}]", arg.type_name.unwrap_or("?"), arg.size);
            continue;
        }
        sf.push_arg(format_param(arg).as_bytes()).await?;
    }

    let record = syscall.record();
    let suffix = if record.flags.contains(SysinfoFlags::ALL_PARAMS_KNOWN) {
        None
    } else {
        Some(&b" <INCOMPLETE>"[..])
    };
    sf.finish(&ret, suffix).await
}

/// Writes the signature followed by the call's properties, one per line.
pub async fn format_details<'f>(
    engine: &Engine,
    syscall: &Syscall,
    formatter: Formatter<'f>,
) -> Result<Formatter<'f>> {
    let mut formatter = format_signature(engine, syscall, formatter).await?;
    let record = syscall.record();
    let details = [
        format!("type: {:?}\n", syscall.syscall_type()),
        format!("known: {}\n", syscall.is_known()),
        format!("flags: {:?}\n", record.flags),
    ];
    for line in details {
        formatter.output.write_all(line.as_bytes()).await?;
    }
    Ok(formatter)
}

#[cfg(test)]
mod test {
    use drsyscall_common::Personality;
    use indoc::indoc;

    use super::*;
    use crate::{host::FakeHost, options::Options, options::Os, syscall::Sysnum};

    fn linux() -> Engine {
        let options = Options::new()
            .with_os(Os::Linux)
            .with_personality(Personality::X86_64);
        Engine::new(options, &FakeHost::new(1)).unwrap().0
    }

    #[tokio::test]
    async fn read_signature() {
        let engine = linux();
        let read = engine.number_to_syscall(Sysnum::new(0)).unwrap();

        let mut output: Vec<u8> = vec![];
        let formatter = Formatter::new(Pin::new(&mut output) as Pin<&mut Vec<u8>>, FormattingStyle::OneLine);
        format_signature(&engine, &read, formatter).await.unwrap();

        assert_eq!(
            String::from_utf8_lossy(&output),
            "0 read(#0 int [4] in|inlined, #1 <struct> [8] out, #2 unsigned int [8] in|inlined) = int [8]\n"
        );
    }

    #[tokio::test]
    async fn read_signature_multi_line() {
        let engine = linux();
        let read = engine.name_to_syscall("read").unwrap();

        let mut output: Vec<u8> = vec![];
        let formatter = Formatter::new(Pin::new(&mut output) as Pin<&mut Vec<u8>>, FormattingStyle::MultiLine);
        format_signature(&engine, &read, formatter).await.unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            indoc! {"
                0
                \tread(
                \t    #0 int [4] in|inlined,
                \t    #1 <struct> [8] out,
                \t    #2 unsigned int [8] in|inlined
                \t) = int [8]
            "}
        );
    }

    #[test]
    fn modes() {
        assert_eq!(mode_name(ParamMode::IN | ParamMode::OUT), "in|out");
        assert_eq!(mode_name(ParamMode::RETVAL), "none");
    }
}
