//! Wallet/identity session supplied by the wallet collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page never validates or requires a session. Components that need
//! an author name (the message composer) read it from this typed record
//! instead of poking at untyped wallet objects.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Deserialize;

/// Author name used when no EOS account is connected.
pub const ANONYMOUS_AUTHOR: &str = "anonymous";

/// Blockchain tag of EOS accounts in a wallet identity.
pub const EOS_BLOCKCHAIN: &str = "eos";

/// Browser wallet extension handle.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletConnector {
    pub name: String,
    pub chain_id: String,
}

/// Identity shared by the wallet after the user approves the app.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

/// One on-chain account attached to an identity.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub name: String,
    pub authority: String,
    pub blockchain: String,
}

/// Session context. Both fields are optional; absence is decided by the
/// wallet collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub wallet: Option<WalletConnector>,
    #[serde(default)]
    pub identity: Option<Identity>,
}

impl Session {
    /// Parse a session handed over by the wallet bridge as JSON.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Wallet present and identity shared.
    pub fn is_connected(&self) -> bool {
        self.wallet.is_some() && self.identity.is_some()
    }

    /// First EOS account name of the identity, if any.
    pub fn account_name(&self) -> Option<&str> {
        self.identity
            .as_ref()?
            .accounts
            .iter()
            .find(|a| a.blockchain == EOS_BLOCKCHAIN)
            .map(|a| a.name.as_str())
    }

    /// Name to attribute board messages to.
    pub fn author_name(&self) -> String {
        self.account_name().unwrap_or(ANONYMOUS_AUTHOR).to_owned()
    }
}

/// Global the wallet bridge script sets to the JSON-encoded session.
#[cfg(feature = "hydrate")]
const SESSION_GLOBAL: &str = "monstereosSession";

/// Read the session published by the wallet bridge.
///
/// Returns an empty session on the server, when the bridge has not published
/// one, or when its payload does not parse.
pub fn load_browser_session() -> Session {
    #[cfg(feature = "hydrate")]
    {
        let raw = js_sys::Reflect::get(&js_sys::global(), &SESSION_GLOBAL.into())
            .ok()
            .and_then(|value| value.as_string());
        let Some(raw) = raw else {
            return Session::default();
        };
        match Session::from_json(&raw) {
            Ok(session) => session,
            Err(e) => {
                log::warn!("ignoring malformed wallet session: {e}");
                Session::default()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Session::default()
    }
}
