use super::*;
use crate::state::session::{ANONYMOUS_AUTHOR, Account, Identity, WalletConnector};

fn connected_session() -> Session {
    Session {
        wallet: Some(WalletConnector { name: "scatter".to_owned(), chain_id: "cf057bbfb726".to_owned() }),
        identity: Some(Identity {
            name: "tamer".to_owned(),
            accounts: vec![Account {
                name: "monstertamer".to_owned(),
                authority: "active".to_owned(),
                blockchain: "eos".to_owned(),
            }],
        }),
    }
}

// =============================================================
// submit_draft
// =============================================================

#[test]
fn submit_posts_as_eos_account() {
    let mut board = MessageBoardState::default();
    let id = submit_draft(&mut board, &connected_session(), "  gm tamers  ", 42.0).unwrap();
    assert_eq!(board.messages.len(), 1);
    let msg = &board.messages[0];
    assert_eq!(msg.id, id);
    assert_eq!(msg.author, "monstertamer");
    assert_eq!(msg.content, "gm tamers");
    assert_eq!(msg.created_at, 42.0);
}

#[test]
fn submit_without_identity_posts_as_anonymous() {
    let mut board = MessageBoardState::default();
    submit_draft(&mut board, &Session::default(), "hello", 0.0).unwrap();
    assert_eq!(board.messages[0].author, ANONYMOUS_AUTHOR);
}

#[test]
fn submit_blank_draft_leaves_board_unchanged() {
    let mut board = MessageBoardState::default();
    submit_draft(&mut board, &connected_session(), "first", 1.0).unwrap();
    let err = submit_draft(&mut board, &connected_session(), "   \n", 2.0).unwrap_err();
    assert_eq!(err, ComposeError::Empty);
    assert_eq!(board.messages.len(), 1);
    assert_eq!(board.messages[0].content, "first");
}

#[test]
fn submit_oversized_draft_is_rejected() {
    let mut board = MessageBoardState::default();
    let draft = "x".repeat(300);
    let err = submit_draft(&mut board, &Session::default(), &draft, 0.0).unwrap_err();
    assert!(matches!(err, ComposeError::TooLong { len: 300, .. }));
    assert!(board.messages.is_empty());
}

// =============================================================
// sending_as_label
// =============================================================

#[test]
fn label_names_connected_account() {
    assert_eq!(sending_as_label(&connected_session()), "Posting as monstertamer");
}

#[test]
fn label_flags_missing_wallet() {
    assert_eq!(sending_as_label(&Session::default()), "Wallet not connected; posting as anonymous");
}
