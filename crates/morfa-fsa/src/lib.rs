//! Byte-labeled finite-state automaton engine.
//!
//! This crate provides the automaton that backs morfa dictionaries: a
//! deterministic, byte-labeled FSA with final-arc flags, storing a finite
//! set of byte strings. Dictionaries are compiled elsewhere; this crate
//! loads them, assembles them in memory, and walks them.
//!
//! # Architecture
//!
//! - [`automaton`] -- Arena-backed automaton representation and builder
//! - [`format`] -- Binary image parsing and serialization
//! - [`walker`] -- Sequence matching and accepted-path enumeration

pub mod automaton;
pub mod format;
pub mod walker;

pub use automaton::{Fsa, FsaArc, FsaBuilder, NodeId};
pub use walker::{accepted_sequences, match_sequence, AcceptedSequences, MatchResult};

/// Error type for FSA image parsing and validation.
#[derive(Debug, thiserror::Error)]
pub enum FsaError {
    #[error("invalid magic number in FSA image header")]
    InvalidMagic,
    #[error("unsupported FSA image version: {0}")]
    UnsupportedVersion(u8),
    #[error("image too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("automaton has no nodes")]
    EmptyAutomaton,
    #[error("corrupt FSA image: {0}")]
    Corrupt(String),
}
