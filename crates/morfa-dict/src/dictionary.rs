// A dictionary is the automaton plus the features it was compiled with.

use morfa_fsa::Fsa;

use crate::features::DictionaryFeatures;
use crate::lookup::DictionaryLookup;
use crate::DictionaryError;

/// A compiled dictionary: the automaton and its features.
///
/// Both parts are immutable; a `Dictionary` can back any number of
/// lookup engines at once.
#[derive(Debug)]
pub struct Dictionary {
    fsa: Fsa,
    features: DictionaryFeatures,
}

impl Dictionary {
    /// Pair an automaton with features assembled in memory.
    pub fn new(fsa: Fsa, features: DictionaryFeatures) -> Self {
        Self { fsa, features }
    }

    /// Load a dictionary from its binary image and sidecar info text.
    pub fn from_bytes(image: &[u8], info_text: &str) -> Result<Self, DictionaryError> {
        let fsa = Fsa::from_bytes(image)?;
        let features = DictionaryFeatures::from_info(info_text)?;
        Ok(Self { fsa, features })
    }

    pub fn fsa(&self) -> &Fsa {
        &self.fsa
    }

    pub fn features(&self) -> &DictionaryFeatures {
        &self.features
    }

    /// Create a lookup engine borrowing this dictionary.
    pub fn lookup(&self) -> DictionaryLookup<'_> {
        DictionaryLookup::new(&self.fsa, &self.features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::standard_encode;
    use morfa_fsa::FsaBuilder;

    const INFO: &str = "fsa.dict.encoding=UTF-8\nfsa.dict.separator=+\n";

    fn sample_image() -> Vec<u8> {
        let mut builder = FsaBuilder::new();
        builder.insert(&standard_encode(b"werken", b"werk", b"V", b'+'));
        builder.freeze().to_bytes()
    }

    #[test]
    fn from_bytes_builds_a_working_dictionary() {
        let dict = Dictionary::from_bytes(&sample_image(), INFO).unwrap();
        let mut lookup = dict.lookup();
        assert_eq!(lookup.stem("werken").unwrap(), vec!["werk"]);
    }

    #[test]
    fn corrupt_image_fails_construction() {
        let err = Dictionary::from_bytes(&[1, 2, 3], INFO).unwrap_err();
        assert!(matches!(err, DictionaryError::Automaton(_)));
    }

    #[test]
    fn bad_info_fails_construction() {
        let err = Dictionary::from_bytes(&sample_image(), "fsa.dict.separator=+\n").unwrap_err();
        assert!(matches!(err, DictionaryError::MissingFeature(_)));
    }

    #[test]
    fn several_engines_share_one_dictionary() {
        let dict = Dictionary::from_bytes(&sample_image(), INFO).unwrap();
        let mut a = dict.lookup();
        let mut b = dict.lookup();
        assert_eq!(a.stem("werken").unwrap(), b.stem("werken").unwrap());
    }
}
