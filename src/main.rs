// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use coreutils_cli::{Console, builtin_registry, dispatch, exit};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let registry = builtin_registry();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let code = {
        let mut console = Console::new(&mut out, &mut err);
        dispatch(&registry, &args, &mut console)
    };

    if let Err(e) = out.flush() {
        log::debug!("flushing stdout failed: {e}");
        return ExitCode::from(exit::FAILURE);
    }
    ExitCode::from(code)
}
