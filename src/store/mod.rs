//! Persistence layer for the horas application.
//!
//! Month ledgers are kept as plain JSON files in the platform-specific
//! application data directory, one file per calendar month. The layer
//! translates between the in-memory ledger types and their on-disk
//! representation, and keeps writes atomic so a crash can never leave a
//! half-written file behind.

pub mod ledger;
