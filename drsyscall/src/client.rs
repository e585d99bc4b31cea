// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

use std::{
    path::{Path, PathBuf},
    pin::Pin,
};

use anyhow::{anyhow, Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use drsyscall::{
    formatting::{self, format_details, format_signature, Formatter, FormattingStyle},
    sysnum_file::SysnumFile,
    Engine, FakeHost, InitStatus, Options, Os, Personality, Syscall, Sysnum,
};
use drsyscall_common::tables::windows::{NTGDI, NTOSKRNL, NTUSER};
use log::{debug, warn};
use tokio::io::{AsyncWrite, AsyncWriteExt as _};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Arch {
    #[value(name = "x86_64")]
    X86_64,
    X86,
    Arm,
    Aarch64,
}

impl From<Arch> for Personality {
    fn from(arch: Arch) -> Self {
        match arch {
            Arch::X86_64 => Personality::X86_64,
            Arch::X86 => Personality::X86,
            Arch::Arm => Personality::Arm,
            Arch::Aarch64 => Personality::Aarch64,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Query the system call tables")]
struct Args {
    /// Operating system whose tables to use
    #[arg(long, value_enum, default_value_t = Os::host(), global = true)]
    os: Os,

    /// Personality of the traced code, defaults to the native one
    #[arg(long, value_enum, global = true)]
    personality: Option<Arch>,

    /// Windows system call number file
    #[arg(long, global = true)]
    sysnum_file: Option<PathBuf>,

    /// Windows build number selecting a built-in number set
    #[arg(long, global = true)]
    windows_build: Option<u32>,

    // Formatting style, `one-line` or `multi-line`
    #[arg(long = "format", value_enum, default_value_t = FormattingStyle::default(), global = true)]
    style: FormattingStyle,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every numbered system call
    List,
    /// Describe one system call, by name or number
    Show { call: String },
    /// List the parameters of a system call
    Args { name: String },
    /// Validate a system call number file
    CheckSysnumFile { path: PathBuf },
}

fn engine(args: &Args) -> Result<Engine> {
    let mut options = Options::new().with_os(args.os);
    if let Some(arch) = args.personality {
        options = options.with_personality(arch.into());
    }
    if let Some(path) = &args.sysnum_file {
        options = options.with_sysnum_file(path);
    }
    if let Some(build) = args.windows_build {
        options = options.with_windows_build(build);
    }

    let (engine, status) =
        Engine::new(options, &FakeHost::new(std::process::id())).map_err(|e| {
            anyhow!("unable to load the {:?} tables: {e}", args.os)
        })?;
    if status == InitStatus::WarningUnsupportedKernel {
        warn!("no system call numbers for this kernel; Windows calls are unnumbered");
    }
    debug!("{engine:?}");
    Ok(engine)
}

/// Looks `call` up as a number, `number.secondary` pair or name.
fn lookup(engine: &Engine, call: &str) -> Result<Syscall> {
    let num = match call.split_once('.') {
        Some((n, s)) => n
            .parse()
            .ok()
            .zip(s.parse().ok())
            .map(|(n, s)| Sysnum::with_secondary(n, s)),
        None => call.parse().ok().map(Sysnum::new),
    };
    let found = match num {
        Some(num) => engine.number_to_syscall(num),
        None => engine.name_to_syscall(call),
    };
    found.with_context(|| format!("no system call {call}"))
}

async fn list(engine: &Engine, output: &mut (dyn AsyncWrite + Unpin)) -> Result<()> {
    let mut lines = Vec::new();
    engine.iterate_syscalls(|num, syscall| {
        lines.push(format!("{num} {}\n", syscall.name()));
        true
    });
    for line in lines {
        output.write_all(line.as_bytes()).await?;
    }
    Ok(())
}

async fn list_args(engine: &Engine, name: &str, output: &mut (dyn AsyncWrite + Unpin)) -> Result<()> {
    let syscall = lookup(engine, name)?;
    for arg in engine.collect_arg_types(&syscall)? {
        let line = if arg.is_retval() {
            format!("ret {} [{}]\n", arg.type_name.unwrap_or("?"), arg.size)
        } else {
            format!("{}\n", formatting::format_param(&arg))
        };
        output.write_all(line.as_bytes()).await?;
    }
    Ok(())
}

fn known_windows_name(name: &str) -> bool {
    let base = name.split_once('.').map_or(name, |(b, _)| b);
    NTOSKRNL
        .iter()
        .chain(NTUSER)
        .chain(NTGDI)
        .any(|r| r.name.eq_ignore_ascii_case(base))
}

async fn check_sysnum_file(path: &Path, output: &mut (dyn AsyncWrite + Unpin)) -> Result<()> {
    let file = SysnumFile::load(path)?;
    let mut text = format!(
        "version {}, differentiator {}, {} blocks\n",
        file.version,
        file.differentiator,
        file.blocks.len()
    );
    for block in &file.blocks {
        let unknown = block
            .numbers
            .iter()
            .filter(|(name, _)| !known_windows_name(name))
            .count();
        text.push_str(&format!(
            "START={:#x}: {} numbers, {unknown} not in the tables\n",
            block.start,
            block.numbers.len()
        ));
    }
    output.write_all(text.as_bytes()).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut stdout = tokio::io::BufWriter::new(tokio::io::stdout());

    match &args.command {
        Command::List => list(&engine(&args)?, &mut stdout).await?,
        Command::Show { call } => {
            let engine = engine(&args)?;
            let syscall = lookup(&engine, call)?;
            let formatter = Formatter::new(Pin::new(&mut stdout) as Pin<&mut tokio::io::BufWriter<tokio::io::Stdout>>, args.style);
            format_details(&engine, &syscall, formatter).await?;
        }
        Command::Args { name } => {
            let engine = engine(&args)?;
            if let FormattingStyle::MultiLine = args.style {
                let syscall = lookup(&engine, name)?;
                let formatter = Formatter::new(Pin::new(&mut stdout) as Pin<&mut tokio::io::BufWriter<tokio::io::Stdout>>, args.style);
                format_signature(&engine, &syscall, formatter).await?;
            } else {
                list_args(&engine, name, &mut stdout).await?;
            }
        }
        Command::CheckSysnumFile { path } => check_sysnum_file(path, &mut stdout).await?,
    }

    Ok(stdout.flush().await?)
}
