//! Domain layer: payment states, gateway exchange types, the transaction
//! mapper and the ports it talks to.

pub mod gateway;
pub mod mapper;
pub mod messages;
pub mod outcome;
pub mod payment;
pub mod ports;
pub mod transaction;
