//! decode-qop tool
//!
//! Decodes a comma-delimited QoP preference string and prints the decoded
//! values one per line, in preference order.

use clap::Parser;
use rehber_core::ResultCode;
use rehber_sasl::QualityOfProtection;

use crate::sink::Sink;

#[derive(Parser)]
#[command(name = "decode-qop")]
#[command(about = "Decode a comma-delimited QoP preference string")]
#[command(disable_version_flag = true)]
struct DecodeQopArgs {
    /// QoP preference string, most preferred first (e.g. "auth-conf,auth")
    qop: String,
}

pub fn run(out: &mut Sink<'_>, err: &mut Sink<'_>, args: &[String]) -> ResultCode {
    let parsed: DecodeQopArgs = match super::parse_args("decode-qop", out, err, args) {
        Ok(parsed) => parsed,
        Err(code) => return code,
    };

    match QualityOfProtection::decode_list(&parsed.qop) {
        Ok(list) => {
            for qop in &list {
                out.line(qop.as_str());
            }
            ResultCode::Success
        }
        Err(e) => {
            err.line(&e.to_string());
            e.result_code()
        }
    }
}
