//! Fee arithmetic tests
//!
//! Hex decoding, unit conversion and the EIP-1559 tip formula, plus the
//! formatting of the resulting figures.

pub mod property_tests;
