//! Data models used throughout the application
//!
//! This module contains the JSON-RPC envelopes exchanged with the node and with
//! callers of this service, and the transaction, block and receipt records the
//! fee computation reads.

// JSON-RPC protocol data structures
pub mod jsonrpc;

// Node records and the derived priority fee
pub mod records;
