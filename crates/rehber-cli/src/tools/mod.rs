//! Tool implementations
//!
//! Each tool exposes `run(out, err, args) -> ResultCode` and parses its own
//! arguments with clap, so a bad flag reports a parameter error through the
//! error sink instead of terminating the process.

pub mod bind_properties;
pub mod decode_qop;

use clap::Parser;
use rehber_core::ResultCode;

use crate::sink::Sink;

/// Parse tool arguments, writing clap's rendered message (help output or
/// error) to the appropriate sink on failure.
pub(crate) fn parse_args<T: Parser>(
    tool_name: &str,
    out: &mut Sink<'_>,
    err: &mut Sink<'_>,
    args: &[String],
) -> Result<T, ResultCode> {
    let argv = std::iter::once(tool_name.to_string()).chain(args.iter().cloned());
    match T::try_parse_from(argv) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            let rendered = e.to_string();
            if e.use_stderr() {
                err.line(rendered.trim_end());
                Err(ResultCode::ParamError)
            } else {
                // --help and --version land here
                out.line(rendered.trim_end());
                Err(ResultCode::Success)
            }
        }
    }
}
