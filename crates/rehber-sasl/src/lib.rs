//! SASL credential handling for Rehber
//!
//! Provides the client-side credential types used to parametrize a SASL
//! bind against a directory server:
//! - Binary-safe secret handling with redacted diagnostics
//! - Quality of protection negotiation preferences
//! - DIGEST-MD5 bind request properties

pub mod digest_md5;
pub mod qop;
pub mod secret;

pub use digest_md5::DigestMd5BindProperties;
pub use qop::QualityOfProtection;
pub use secret::Secret;
