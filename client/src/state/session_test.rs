use super::*;

fn eos_account(name: &str) -> Account {
    Account { name: name.to_owned(), authority: "active".to_owned(), blockchain: "eos".to_owned() }
}

fn wallet() -> WalletConnector {
    WalletConnector { name: "scatter".to_owned(), chain_id: "cf057bbfb726".to_owned() }
}

// =============================================================
// Session defaults
// =============================================================

#[test]
fn session_default_is_disconnected() {
    let session = Session::default();
    assert!(session.wallet.is_none());
    assert!(session.identity.is_none());
    assert!(!session.is_connected());
    assert_eq!(session.account_name(), None);
    assert_eq!(session.author_name(), ANONYMOUS_AUTHOR);
}

// =============================================================
// Account resolution
// =============================================================

#[test]
fn account_name_picks_first_eos_account() {
    let identity = Identity {
        name: "tamer".to_owned(),
        accounts: vec![
            Account { name: "0xabc".to_owned(), authority: "owner".to_owned(), blockchain: "eth".to_owned() },
            eos_account("monstertamer"),
            eos_account("secondacct"),
        ],
    };
    let session = Session { wallet: Some(wallet()), identity: Some(identity) };
    assert!(session.is_connected());
    assert_eq!(session.account_name(), Some("monstertamer"));
    assert_eq!(session.author_name(), "monstertamer");
}

#[test]
fn identity_without_eos_account_is_anonymous() {
    let identity = Identity { name: "tamer".to_owned(), accounts: Vec::new() };
    let session = Session { wallet: None, identity: Some(identity) };
    assert!(!session.is_connected());
    assert_eq!(session.author_name(), ANONYMOUS_AUTHOR);
}

// =============================================================
// JSON boundary
// =============================================================

#[test]
fn from_json_accepts_missing_fields() {
    let session = Session::from_json("{}").unwrap();
    assert_eq!(session, Session::default());
}

#[test]
fn from_json_parses_wallet_and_identity() {
    let raw = r#"{
        "wallet": { "name": "scatter", "chainId": "cf057bbfb726" },
        "identity": {
            "name": "tamer",
            "accounts": [{ "name": "monstertamer", "authority": "active", "blockchain": "eos" }]
        }
    }"#;
    let session = Session::from_json(raw).unwrap();
    assert_eq!(session.wallet, Some(wallet()));
    assert_eq!(session.account_name(), Some("monstertamer"));
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(Session::from_json("{\"identity\": 7}").is_err());
}

#[test]
fn from_json_rejects_snake_case_chain_id() {
    let raw = r#"{ "wallet": { "name": "scatter", "chain_id": "cf057bbfb726" } }"#;
    assert!(Session::from_json(raw).is_err());
}
