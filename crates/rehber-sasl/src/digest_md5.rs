//! DIGEST-MD5 bind request properties
//!
//! The credential configuration consumed by the DIGEST-MD5 bind layer. It
//! holds the authentication identity, the secret, the optional authorization
//! identity and realm, and the ordered quality-of-protection preference
//! list. Not safe for concurrent mutation; the owner configures it and then
//! hands it, read-only, to the bind layer.

use std::fmt;

use rehber_core::{Error, Result};

use crate::qop::QualityOfProtection;
use crate::secret::Secret;

/// Properties for a SASL DIGEST-MD5 bind request.
///
/// The authentication ID is mandatory; it is conventionally `dn:` followed
/// by the user's full DN, or `u:` followed by the username, but the value is
/// opaque here and no format is enforced. Optional fields distinguish
/// "absent" from an explicitly empty value: an absent authorization ID means
/// no alternate identity is requested, and an absent realm lets the server
/// pick one.
#[derive(Clone)]
pub struct DigestMd5BindProperties {
    authentication_id: String,
    password: Secret,
    authorization_id: Option<String>,
    realm: Option<String>,
    allowed_qop: Vec<QualityOfProtection>,
}

impl DigestMd5BindProperties {
    /// Create a new set of properties.
    ///
    /// `authentication_id` must be present; `None` fails with
    /// `InvalidArgument`. The password may be absent, text, or raw bytes
    /// (anything convertible to [`Secret`]); an absent or empty password is
    /// stored as an explicit zero-length secret for anonymous binds.
    ///
    /// Defaults: no authorization ID, no realm, and an allowed QoP list of
    /// just [`QualityOfProtection::Auth`].
    pub fn new(
        authentication_id: Option<&str>,
        password: impl Into<Secret>,
    ) -> Result<Self> {
        let authentication_id = require_authentication_id(authentication_id)?;
        Ok(Self {
            authentication_id,
            password: password.into(),
            authorization_id: None,
            realm: None,
            allowed_qop: vec![QualityOfProtection::Auth],
        })
    }

    /// The authentication ID.
    pub fn authentication_id(&self) -> &str {
        &self.authentication_id
    }

    /// Replace the authentication ID. `None` fails with `InvalidArgument`
    /// and leaves the stored value unchanged.
    pub fn set_authentication_id(&mut self, authentication_id: Option<&str>) -> Result<()> {
        self.authentication_id = require_authentication_id(authentication_id)?;
        Ok(())
    }

    /// The authorization ID, or `None` if no alternate identity should be
    /// requested.
    pub fn authorization_id(&self) -> Option<&str> {
        self.authorization_id.as_deref()
    }

    /// Replace the authorization ID. `None` clears it; any text, including
    /// the empty string, is stored as given.
    pub fn set_authorization_id(&mut self, authorization_id: Option<&str>) {
        self.authorization_id = authorization_id.map(str::to_owned);
    }

    /// The realm, or `None` to let the server choose one.
    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }

    /// Replace the realm. `None` clears it; any text, including the empty
    /// string, is stored as given.
    pub fn set_realm(&mut self, realm: Option<&str>) {
        self.realm = realm.map(str::to_owned);
    }

    /// The password.
    pub fn password(&self) -> &Secret {
        &self.password
    }

    /// Replace the password. Accepts the same forms as [`Self::new`];
    /// absent or empty input becomes the explicit zero-length secret.
    pub fn set_password(&mut self, password: impl Into<Secret>) {
        self.password = password.into();
    }

    /// The allowed QoP values for traffic after authentication completes,
    /// in order from most preferred to least preferred. Never empty.
    pub fn allowed_qop(&self) -> &[QualityOfProtection] {
        &self.allowed_qop
    }

    /// Replace the allowed QoP list. The caller's order is preserved
    /// exactly, with no sorting or de-duplication. An empty list resets to
    /// the default of just [`QualityOfProtection::Auth`].
    pub fn set_allowed_qop(&mut self, allowed_qop: &[QualityOfProtection]) {
        if allowed_qop.is_empty() {
            self.allowed_qop = vec![QualityOfProtection::Auth];
        } else {
            self.allowed_qop = allowed_qop.to_vec();
        }
    }
}

fn require_authentication_id(authentication_id: Option<&str>) -> Result<String> {
    match authentication_id {
        Some(id) => Ok(id.to_owned()),
        None => Err(Error::InvalidArgument(
            "The DIGEST-MD5 authentication ID must be provided".to_string(),
        )),
    }
}

// The diagnostic rendering must never include the password, on any path.
impl fmt::Display for DigestMd5BindProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DigestMd5BindProperties(authenticationID='{}'",
            self.authentication_id
        )?;

        if let Some(authorization_id) = &self.authorization_id {
            write!(f, ", authorizationID='{}'", authorization_id)?;
        }

        if let Some(realm) = &self.realm {
            write!(f, ", realm='{}'", realm)?;
        }

        write!(f, ", qop='{}')", QualityOfProtection::join(&self.allowed_qop))
    }
}

impl fmt::Debug for DigestMd5BindProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestMd5BindProperties")
            .field("authentication_id", &self.authentication_id)
            .field("password", &self.password)
            .field("authorization_id", &self.authorization_id)
            .field("realm", &self.realm)
            .field("allowed_qop", &self.allowed_qop)
            .finish()
    }
}
