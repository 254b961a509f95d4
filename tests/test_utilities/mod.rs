#![allow(dead_code)]

pub mod mocks;

#[path = "../../src/adapters/outbound/network/test_server.rs"]
pub mod test_server;
