//! Core types and utilities for the SMPP protocol
//!
//! This crate provides the error type and the small wire-level value types
//! shared by the PDU layers of the SMPP implementation.

pub mod data_coding;
pub mod error;

pub use data_coding::DataCoding;
pub use error::{SmppError, SmppResult};
