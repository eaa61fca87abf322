//! End-to-end client sessions against an in-process card

use std::{path::Path, time::Duration};

use hex_literal::hex;
use universe_applet::{CounterStore, FileStore, HelloUniverseApplet, MemoryStore, VirtualCard};
use universe_client::{Outcome, Session, SessionConfig, Terminals, VirtualTerminals};
use universe_protocol::Aid;

const READER: &str = "Virtual Reader 0";

fn card<S: CounterStore>(store: S) -> VirtualCard<S> {
    let aid = Aid::try_from(&hex!("A00000061700C8E4A0C401")[..]).unwrap();
    VirtualCard::new(HelloUniverseApplet::new(store).unwrap(), aid)
}

fn run<T: Terminals>(terminals: &mut T, args: &[&str]) -> (Outcome, String) {
    let mut session = Session::new(SessionConfig::default(), Vec::new());
    let request = session
        .prepare(args.first().copied(), args.get(1).copied())
        .unwrap();
    let outcome = session.run(terminals, &request).unwrap();
    (outcome, String::from_utf8(session.into_inner()).unwrap())
}

fn stored_counter(path: &Path) -> u16 {
    FileStore::new(path).load().unwrap()
}

#[test]
fn greets_and_counts_on_fresh_card() {
    let mut terminals = VirtualTerminals::with_card_present(READER, card(MemoryStore::default()));
    let (outcome, report) = run(&mut terminals, &["c8e4a0c4"]);

    assert_eq!(
        outcome,
        Outcome::Completed {
            greeting: "Hello Universe!".into(),
            count: 2,
        }
    );
    assert_eq!(
        report,
        "Client started\n\
         Short AID detected. Assuming that it is a Fidesmo app id and expanding to full AID\n\
         Waiting for smart card\n\
         Saying hello...\n\
         \tHello Universe!\n\
         Getting access count...\n\
         \t2\n"
    );
    assert_eq!(terminals.waited(), None);
}

#[test]
fn waits_for_inserted_card() {
    let mut terminals = VirtualTerminals::with_card_inserted(READER, card(MemoryStore::default()));
    let (outcome, report) = run(&mut terminals, &["A00000061700C8E4A0C401"]);

    assert!(matches!(outcome, Outcome::Completed { count: 2, .. }));
    assert!(report.contains("Waiting for smart card\nCard detected: Virtual Reader 0\n"));
    assert_eq!(terminals.waited(), Some(Duration::from_secs(15)));
}

#[test]
fn times_out_without_card() {
    let mut terminals = VirtualTerminals::<VirtualCard<MemoryStore>>::empty(READER);
    let (outcome, report) = run(&mut terminals, &["c8e4a0c4"]);

    assert_eq!(outcome, Outcome::NoCard);
    assert!(report.ends_with("Waiting for smart card\nTimeout reached. Exiting\n"));
    assert_eq!(terminals.waited(), Some(Duration::from_secs(15)));
}

#[test]
fn continues_after_failed_select() {
    let mut terminals = VirtualTerminals::with_card_present(READER, card(MemoryStore::default()));
    let (outcome, report) = run(&mut terminals, &["F000000001"]);

    assert_eq!(
        outcome,
        Outcome::Completed {
            greeting: "ERROR: Response Status = 6986".into(),
            count: -1,
        }
    );
    assert_eq!(
        report,
        "Client started\n\
         Waiting for smart card\n\
         Error in applet select command. Response status = 6a82\n\
         Saying hello...\n\
         \tERROR: Response Status = 6986\n\
         Getting access count...\n\
         \t-1\n"
    );
}

#[test]
fn reset_clears_counter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("counter");
    FileStore::new(&path).commit(500).unwrap();

    let mut terminals = VirtualTerminals::with_card_present(READER, card(FileStore::new(&path)));
    let (outcome, report) = run(&mut terminals, &["c8e4a0c4", "Reset"]);

    assert_eq!(outcome, Outcome::Reset { success: true });
    assert!(report.ends_with("Waiting for smart card\nResetting access count...\n\tsuccess\n"));
    assert_eq!(stored_counter(&path), 0);
}

#[test]
fn reset_reports_rejection() {
    let mut terminals = VirtualTerminals::with_card_present(READER, card(MemoryStore::default()));
    let (outcome, report) = run(&mut terminals, &["F000000001", "reset"]);

    assert_eq!(outcome, Outcome::Reset { success: false });
    assert!(report.ends_with(
        "Resetting access count...\nERROR: Response status = 6986\n\n"
    ));
}

#[test]
fn counter_accumulates_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("counter");

    for expected in [2, 4, 6] {
        let mut terminals =
            VirtualTerminals::with_card_present(READER, card(FileStore::new(&path)));
        let (outcome, _) = run(&mut terminals, &["c8e4a0c4"]);
        assert!(matches!(outcome, Outcome::Completed { count, .. } if count == expected));
    }
    assert_eq!(stored_counter(&path), 6);
}
