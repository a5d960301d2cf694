//! Morphological dictionary lookup and encoding over FSA images.
//!
//! A compiled dictionary stores records of the shape
//! `surface ++ sep ++ delta ++ sep ++ tag` in a byte-labeled finite-state
//! automaton. This crate finds the records for an inflected surface word
//! and reconstructs each lemma from the surface plus its delta code, and
//! provides the inverse encoders used when compiling dictionaries.
//!
//! # Architecture
//!
//! - [`features`] -- Declared encoding, separator byte, scheme flags
//! - [`codec`] -- The delta codec (standard / prefix / infix schemes)
//! - [`lookup`] -- The lookup engine walking the automaton
//! - [`encoder`] -- Charset-aware and UTF-8 encoding entry points
//! - [`dictionary`] -- The automaton + features pair

pub mod codec;
pub mod dictionary;
pub mod encoder;
pub mod features;
pub mod lookup;

pub use dictionary::Dictionary;
pub use encoder::MorphEncoder;
pub use features::DictionaryFeatures;
pub use lookup::DictionaryLookup;

/// Error type for dictionary construction and lookup.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The automaton image could not be loaded.
    #[error(transparent)]
    Automaton(#[from] morfa_fsa::FsaError),

    /// The declared encoding name does not resolve to a known charset.
    #[error("unknown character encoding: {0}")]
    UnknownEncoding(String),

    /// The separator is not a single usable byte.
    #[error("invalid separator: {0}")]
    InvalidSeparator(String),

    /// A required key is absent from the dictionary features.
    #[error("missing dictionary feature: {0}")]
    MissingFeature(&'static str),

    /// A boolean feature key has a value other than `true`/`false`.
    #[error("invalid boolean for {key}: {value}")]
    InvalidFlag { key: &'static str, value: String },

    /// Input text cannot be represented in the dictionary encoding.
    ///
    /// This indicates a misconfiguration against a live dictionary and is
    /// the only error surfaced at lookup time.
    #[error("cannot represent {text:?} in {encoding}")]
    Charset { encoding: String, text: String },
}
