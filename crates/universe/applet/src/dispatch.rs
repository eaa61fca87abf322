//! Instruction dispatch table
//!
//! Every supported instruction maps to a handler with the same signature. The
//! counter has already been incremented when a handler runs.

use bytes::Bytes;
use tracing::debug;
use universe_apdu_core::{Response, StatusWord};
use universe_protocol::constants::{GREETING, ins};

use crate::AccessCounter;

/// Instruction handler: mutable counter and command data in, reply out
pub type Handler = fn(&mut AccessCounter, &[u8]) -> Response;

/// Supported instructions and their handlers
pub static HANDLERS: &[(u8, Handler)] = &[
    (ins::NOOP, noop as Handler),
    (ins::GREET, greet as Handler),
    (ins::READ_COUNTER, read_counter as Handler),
    (ins::WRITE_COUNTER, write_counter as Handler),
];

/// Find the handler for an instruction
pub fn lookup(instruction: u8) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(code, _)| *code == instruction)
        .map(|(_, handler)| *handler)
}

/// Run the handler for `instruction`, answering 6D00 when there is none
pub fn dispatch(instruction: u8, counter: &mut AccessCounter, data: &[u8]) -> Response {
    match lookup(instruction) {
        Some(handler) => handler(counter, data),
        None => {
            debug!("Unsupported instruction {:#04x}", instruction);
            Response::error(StatusWord::INS_NOT_SUPPORTED)
        }
    }
}

fn noop(_: &mut AccessCounter, _: &[u8]) -> Response {
    Response::ok_empty()
}

fn greet(_: &mut AccessCounter, _: &[u8]) -> Response {
    Response::ok(Bytes::from_static(GREETING))
}

fn read_counter(counter: &mut AccessCounter, _: &[u8]) -> Response {
    Response::ok(counter.get().to_be_bytes().to_vec())
}

fn write_counter(counter: &mut AccessCounter, data: &[u8]) -> Response {
    let Some(&[hi, lo]) = data.first_chunk::<2>() else {
        debug!("Write counter with {} data byte(s)", data.len());
        return Response::error(StatusWord::WRONG_LENGTH);
    };

    counter.set(u16::from_be_bytes([hi, lo]));
    Response::ok_empty()
}
