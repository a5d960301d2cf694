// Encoding entry points for dictionary compilation input.
//
// The delta codec works on bytes. `MorphEncoder` bridges string-typed
// training data through a dictionary's declared charset; the `*_utf8`
// free functions are the fixed-charset shortcut for UTF-8 dictionaries,
// where the stored bytes are simply the words' UTF-8 bytes.

use crate::codec;
use crate::features::DictionaryFeatures;
use crate::DictionaryError;

/// Charset-aware encoder producing records for the dictionary compiler.
///
/// The scheme is chosen from the feature flags: infixes win over
/// prefixes, prefixes over standard.
pub struct MorphEncoder<'a> {
    features: &'a DictionaryFeatures,
}

impl<'a> MorphEncoder<'a> {
    pub fn new(features: &'a DictionaryFeatures) -> Self {
        Self { features }
    }

    /// Encode a training triple with the scheme the features select.
    pub fn encode(
        &self,
        form: &str,
        lemma: &str,
        tag: &str,
    ) -> Result<Vec<u8>, DictionaryError> {
        if self.features.uses_infixes() {
            self.infix(form, lemma, tag)
        } else if self.features.uses_prefixes() {
            self.prefix(form, lemma, tag)
        } else {
            self.standard(form, lemma, tag)
        }
    }

    /// Encode with the standard scheme regardless of the feature flags.
    pub fn standard(
        &self,
        form: &str,
        lemma: &str,
        tag: &str,
    ) -> Result<Vec<u8>, DictionaryError> {
        self.convert(form, lemma, tag, codec::standard_encode)
    }

    /// Encode with the prefix scheme regardless of the feature flags.
    pub fn prefix(
        &self,
        form: &str,
        lemma: &str,
        tag: &str,
    ) -> Result<Vec<u8>, DictionaryError> {
        self.convert(form, lemma, tag, codec::prefix_encode)
    }

    /// Encode with the infix scheme regardless of the feature flags.
    pub fn infix(
        &self,
        form: &str,
        lemma: &str,
        tag: &str,
    ) -> Result<Vec<u8>, DictionaryError> {
        self.convert(form, lemma, tag, codec::infix_encode)
    }

    fn convert(
        &self,
        form: &str,
        lemma: &str,
        tag: &str,
        encode: fn(&[u8], &[u8], &[u8], u8) -> Vec<u8>,
    ) -> Result<Vec<u8>, DictionaryError> {
        let mut form_bytes = Vec::new();
        let mut lemma_bytes = Vec::new();
        let mut tag_bytes = Vec::new();
        self.features.encode_word(form, &mut form_bytes)?;
        self.features.encode_word(lemma, &mut lemma_bytes)?;
        self.features.encode_word(tag, &mut tag_bytes)?;
        Ok(encode(
            &form_bytes,
            &lemma_bytes,
            &tag_bytes,
            self.features.separator(),
        ))
    }
}

/// Standard-scheme record from UTF-8 strings; offsets count UTF-8 bytes.
pub fn standard_encode_utf8(form: &str, lemma: &str, tag: &str, separator: u8) -> Vec<u8> {
    codec::standard_encode(form.as_bytes(), lemma.as_bytes(), tag.as_bytes(), separator)
}

/// Prefix-scheme record from UTF-8 strings; offsets count UTF-8 bytes.
pub fn prefix_encode_utf8(form: &str, lemma: &str, tag: &str, separator: u8) -> Vec<u8> {
    codec::prefix_encode(form.as_bytes(), lemma.as_bytes(), tag.as_bytes(), separator)
}

/// Infix-scheme record from UTF-8 strings; offsets count UTF-8 bytes.
pub fn infix_encode_utf8(form: &str, lemma: &str, tag: &str, separator: u8) -> Vec<u8> {
    codec::infix_encode(form.as_bytes(), lemma.as_bytes(), tag.as_bytes(), separator)
}
