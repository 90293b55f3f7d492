// WRT - wrtd
// Module: CLI host for the module loader
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)]

//! The loader's CLI surface: a single positional path to a Wasm binary
//! module, an optional `--arena-size <bytes>` override, exit code 0 on
//! a successful parse and non-zero on an I/O or parse failure.

use std::env;
use std::fs;
use std::process::ExitCode;

/// Default arena capacity, sized generously for the sample cartridges
/// this loader targets; pass `--arena-size` for anything larger.
const DEFAULT_ARENA_SIZE: usize = 1 << 20;

struct Args {
    path: String,
    arena_size: usize,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, String> {
    let _program = argv.next();
    let mut path = None;
    let mut arena_size = DEFAULT_ARENA_SIZE;

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--arena-size" => {
                let value =
                    argv.next().ok_or_else(|| "--arena-size requires a value".to_string())?;
                arena_size = value
                    .parse()
                    .map_err(|_| format!("invalid --arena-size value: {value}"))?;
            }
            _ if path.is_none() => path = Some(arg),
            other => return Err(format!("unexpected argument: {other}")),
        }
    }

    let path = path
        .ok_or_else(|| "usage: wrtd <path-to-wasm-module> [--arena-size <bytes>]".to_string())?;
    Ok(Args { path, arena_size })
}

fn run(args: &Args) -> wrt_error::Result<()> {
    let bytes = fs::read(&args.path).map_err(wrt_error::kinds::io_error)?;
    let arena = wrt_foundation::Arena::new(args.arena_size);
    let mut parser = wrt_decoder::Parser::new(&arena, &bytes);
    parser.parse()?;

    let type_count = parser.type_section().map_or(0, |s| s.len());
    let function_count = parser.function_section().map_or(0, |s| s.len());
    let export_count = parser.export_section().map_or(0, |s| s.len());
    let code_count = parser.code_section().map_or(0, |s| s.len());
    wrt_logging::info(&format!(
        "{}: {type_count} type(s), {function_count} function(s), {export_count} export(s), \
         {code_count} code entr(y/ies)",
        args.path
    ));
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args(env::args()) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            wrt_logging::error(&format!("{err}"));
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
