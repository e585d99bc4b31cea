// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gustavo Noronha Silva <gustavo@noronha.dev.br>

//! End-to-end scenarios: a [`FakeHost`] stands in for the traced process
//! and each call goes through entry, memory iteration and exit.

use drsyscall_common::{ParamMode, Personality};

use crate::{
    arg::{Arg, Location},
    engine::Engine,
    host::{FakeHost, MachineContext},
    options::{Options, Os},
    state::ThreadState,
};

mod iteration;
mod lifecycle;
mod linux;
mod unknown;
mod windows;

pub(crate) const IN: ParamMode = ParamMode::IN;
pub(crate) const OUT: ParamMode = ParamMode::OUT;
pub(crate) const INOUT: ParamMode = ParamMode::IN.union(ParamMode::OUT);

/// Top of the fake stack; Windows parameters past the registers go above.
pub(crate) const STACK: u64 = 0x7ff0_0000;

/// What a test compares: parameter ordinal, start, size and mode.
pub(crate) type Region = (i32, u64, u64, ParamMode);

fn regions(args: Vec<Arg>) -> Vec<Region> {
    args.iter()
        .map(|a| (a.ordinal, a.start_addr, a.size, a.mode))
        .collect()
}

/// One traced thread of one process.
pub(crate) struct Trace {
    pub engine: Engine,
    pub host: FakeHost,
    pub state: ThreadState,
}

impl Trace {
    pub fn new(options: Options, host: FakeHost) -> Self {
        let (engine, _) = Engine::new(options, &host).unwrap();
        Trace {
            engine,
            host,
            state: ThreadState::new(),
        }
    }

    pub fn linux() -> Self {
        Self::linux_with(Options::new())
    }

    pub fn linux_with(options: Options) -> Self {
        let options = options
            .with_os(Os::Linux)
            .with_personality(Personality::X86_64);
        Self::new(options, FakeHost::new(100))
    }

    /// Windows 10 x64 with the built-in numbers.
    pub fn windows() -> Self {
        let options = Options::new()
            .with_os(Os::Windows)
            .with_personality(Personality::X86_64)
            .with_windows_build(19045);
        Self::new(options, FakeHost::new(100))
    }

    /// Places `args` where the calling convention expects them and enters
    /// call `number`.
    pub fn start(&mut self, number: i32, args: &[u64]) {
        let ptr_size = self.engine.personality().pointer_size();
        let mut mc = MachineContext {
            sp: STACK,
            ..Default::default()
        };
        for (i, &v) in args.iter().enumerate() {
            let location =
                self.engine
                    .platform()
                    .param_location(self.engine.personality(), &mc, i);
            match location {
                Some(Location::Register(_)) => mc.args[i] = v,
                Some(Location::Stack(addr)) => self.host.put_word(addr, v, ptr_size),
                None => panic!("no room for parameter {i}"),
            }
        }
        self.host.set_mc(mc);
        self.engine.pre_syscall(&mut self.state, &self.host, number);
    }

    /// Enters the call and returns the regions reported at entry.
    pub fn enter(&mut self, number: i32, args: &[u64]) -> Vec<Region> {
        self.start(number, args);
        regions(
            self.engine
                .collect_memargs(&mut self.state, &self.host)
                .unwrap(),
        )
    }

    /// Returns from the call and returns the regions reported as written.
    pub fn exit(&mut self, result: u64) -> Vec<Region> {
        self.host.set_result(result);
        self.engine.post_syscall(&mut self.state, &self.host);
        let written = regions(
            self.engine
                .collect_memargs(&mut self.state, &self.host)
                .unwrap(),
        );
        self.engine.post_syscall_last(&mut self.state, &self.host);
        written
    }
}

/// Runs a call through entry and exit and compares the reported regions.
///
/// `$init` prepares the process memory before entry and `$update` plays
/// the kernel's part before exit.
#[macro_export]
macro_rules! memarg_test {
    (
        $name:ident,
        $trace:expr,
        $number:expr,
        [$($arg:expr),* $(,)?],
        $init:expr,
        [$($pre:expr),* $(,)?],
        $result:expr,
        $update:expr,
        [$($post:expr),* $(,)?]
    ) => {
        #[test]
        fn $name() {
            let mut trace: $crate::tests::Trace = $trace;
            let init: fn(&$crate::host::FakeHost) = $init;
            init(&trace.host);

            let pre = trace.enter($number, &[$($arg),*]);
            let expected: Vec<$crate::tests::Region> = vec![$($pre),*];
            assert_eq!(pre, expected, "regions at entry");

            let update: fn(&$crate::host::FakeHost) = $update;
            update(&trace.host);

            let post = trace.exit($result);
            let expected: Vec<$crate::tests::Region> = vec![$($post),*];
            assert_eq!(post, expected, "regions at exit");
        }
    };
}
