use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use slices::MemoryStore;

use super::*;
use crate::state::messages::{AUTHOR_REPLY, post, welcome_log};

fn site_with_post(text: &str) -> (SiteSlices, PendingReply) {
    let site = SiteSlices::open(Rc::new(MemoryStore::new()));
    let mut log = welcome_log();
    let pending = post(&mut log, text, 1_000).expect("pending");
    site.messages.write(log);
    (site, pending)
}

#[test]
fn reply_refreshes_open_board() {
    let (site, pending) = site_with_post("生日快乐");
    let owner = Owner::new();
    let board = owner.with(|| RwSignal::new(site.messages.read()));

    deliver_reply(&site, board, &pending, 1_700, &mut StdRng::seed_from_u64(1));

    assert_eq!(board.with_untracked(Vec::len), 3);
    assert_eq!(board.with_untracked(|b| b[2].text.clone()), content::REPLY_BIRTHDAY);
}

#[test]
fn reply_is_stored_after_board_is_disposed() {
    let (site, pending) = site_with_post("thanks");
    let owner = Owner::new();
    let board = owner.with(|| RwSignal::new(site.messages.read()));
    owner.cleanup();

    deliver_reply(&site, board, &pending, 1_700, &mut StdRng::seed_from_u64(1));

    let stored = site.messages.read();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[2].author, AUTHOR_REPLY);
}
