//! Hardware tests for the PC/SC transport
//!
//! These need a running PC/SC daemon; they return early when none is reachable
//! and only talk to a card when one is already present.

use std::time::Duration;

use universe_apdu_core::prelude::*;
use universe_apdu_transport_pcsc::{PcscDeviceManager, PcscError};

fn manager() -> Option<PcscDeviceManager> {
    match PcscDeviceManager::new() {
        Ok(manager) => Some(manager),
        Err(e) => {
            eprintln!("Skipping, PC/SC unavailable: {e}");
            None
        }
    }
}

#[test]
fn list_readers_reports_names() {
    let Some(manager) = manager() else { return };

    match manager.list_readers() {
        Ok(readers) => {
            for reader in readers {
                assert!(!reader.name().is_empty());
                assert_eq!(reader.has_card(), reader.atr().is_some());
            }
        }
        Err(PcscError::NoReadersAvailable) => {}
        Err(e) => panic!("unexpected error: {e}"),
    }
}

#[test]
fn monitor_times_out_without_insertion() {
    let Some(manager) = manager() else { return };
    if manager.first_reader_with_card().ok().flatten().is_some() {
        return;
    }

    let mut monitor = manager.monitor().expect("monitor");
    let event = monitor
        .wait_for_card(Duration::from_millis(200))
        .expect("wait");
    assert!(event.is_none());
}

#[test]
fn select_unknown_aid_returns_status() {
    let Some(manager) = manager() else { return };
    let Some(reader) = manager.first_reader_with_card().ok().flatten() else {
        return;
    };

    let transport = manager.open_reader(reader.name()).expect("open reader");
    let mut executor = CardExecutor::new(transport);

    let aid = hex::decode("F0DEADBEEF00").expect("hex");
    let select = Command::new(0x00, 0xA4, 0x04, 0x00).with_data(aid).with_le(0x00);
    let response = executor.execute(&select).expect("transmit");
    assert!(!response.is_success(), "unexpected success for unknown AID");
}
