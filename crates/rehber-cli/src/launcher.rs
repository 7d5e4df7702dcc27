//! Tool dispatch
//!
//! Routes the first command-line argument, case-insensitively, to one of
//! the tools in a fixed table. No arguments, or `version`, prints the
//! version banner. An unrecognized name prints the supported names to the
//! error sink and reports a parameter error.

use std::io::Write;

use rehber_core::{version_lines, ResultCode};
use tracing::debug;

use crate::sink::Sink;
use crate::tools;

/// A named tool entry point.
struct ToolEntry {
    name: &'static str,
    run: fn(&mut Sink<'_>, &mut Sink<'_>, &[String]) -> ResultCode,
}

/// The fixed dispatch table, in the order shown by the usage listing.
const TOOLS: &[ToolEntry] = &[
    ToolEntry {
        name: "bind-properties",
        run: tools::bind_properties::run,
    },
    ToolEntry {
        name: "decode-qop",
        run: tools::decode_qop::run,
    },
];

/// Dispatch `args` to the selected tool, writing to the given sinks.
///
/// Either sink may be `None` to suppress that stream. Returns the result
/// code produced by the selected tool, `Success` for the version path, or
/// `ParamError` for an unrecognized tool name.
pub fn run(
    out: Option<&mut dyn Write>,
    err: Option<&mut dyn Write>,
    args: &[String],
) -> ResultCode {
    let mut out = Sink::new(out);
    let mut err = Sink::new(err);

    if args.is_empty() || args[0].eq_ignore_ascii_case("version") {
        for line in version_lines() {
            out.line(&line);
        }
        return ResultCode::Success;
    }

    let name = args[0].to_ascii_lowercase();
    let remaining = &args[1..];

    for tool in TOOLS {
        if tool.name == name {
            debug!(tool = tool.name, "dispatching");
            return (tool.run)(&mut out, &mut err, remaining);
        }
    }

    err.line(&format!("Unrecognized tool name '{}'", args[0]));
    err.line("Supported tool names include:");
    for tool in TOOLS {
        err.line(&format!("     {}", tool.name));
    }
    err.line("     version");
    ResultCode::ParamError
}
