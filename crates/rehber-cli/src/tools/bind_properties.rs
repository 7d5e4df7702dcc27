//! bind-properties tool
//!
//! Assembles a DIGEST-MD5 bind property set from command-line flags and
//! prints its diagnostic rendering, or a JSON summary with `--json`. The
//! password never appears in either form of output.

use clap::Parser;
use rehber_core::ResultCode;
use rehber_sasl::{DigestMd5BindProperties, QualityOfProtection};
use serde_json::json;

use crate::sink::Sink;

#[derive(Parser)]
#[command(name = "bind-properties")]
#[command(about = "Assemble and display DIGEST-MD5 bind properties")]
#[command(disable_version_flag = true)]
struct BindPropertiesArgs {
    /// Authentication ID ("dn:<full-DN>" or "u:<username>")
    #[arg(long)]
    auth_id: String,

    /// Password (omit for an anonymous bind)
    #[arg(long)]
    password: Option<String>,

    /// Authorization ID to act as, if different from the authentication ID
    #[arg(long)]
    authz_id: Option<String>,

    /// Realm to authenticate in
    #[arg(long)]
    realm: Option<String>,

    /// Comma-delimited QoP preference list, most preferred first
    /// (values: auth, auth-int, auth-conf)
    #[arg(long)]
    qop: Option<String>,

    /// Print a JSON summary instead of the diagnostic line
    #[arg(long)]
    json: bool,
}

pub fn run(out: &mut Sink<'_>, err: &mut Sink<'_>, args: &[String]) -> ResultCode {
    let parsed: BindPropertiesArgs = match super::parse_args("bind-properties", out, err, args) {
        Ok(parsed) => parsed,
        Err(code) => return code,
    };

    let mut props =
        match DigestMd5BindProperties::new(Some(parsed.auth_id.as_str()), parsed.password) {
            Ok(props) => props,
            Err(e) => {
                err.line(&e.to_string());
                return e.result_code();
            }
        };

    props.set_authorization_id(parsed.authz_id.as_deref());
    props.set_realm(parsed.realm.as_deref());

    if let Some(qop_text) = &parsed.qop {
        match QualityOfProtection::decode_list(qop_text) {
            Ok(list) => props.set_allowed_qop(&list),
            Err(e) => {
                err.line(&e.to_string());
                return e.result_code();
            }
        }
    }

    if parsed.json {
        let summary = json!({
            "authentication_id": props.authentication_id(),
            "authorization_id": props.authorization_id(),
            "realm": props.realm(),
            "anonymous": props.password().is_empty(),
            "allowed_qop": props.allowed_qop(),
        });
        out.line(&summary.to_string());
    } else {
        out.line(&props.to_string());
    }

    ResultCode::Success
}
