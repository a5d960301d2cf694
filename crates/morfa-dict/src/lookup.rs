// Dictionary lookup: walk the automaton to the separator, enumerate the
// stored records and decode each delta against the surface word.

use morfa_fsa::{accepted_sequences, match_sequence, Fsa, MatchResult};

use crate::codec;
use crate::features::DictionaryFeatures;
use crate::DictionaryError;

/// Lookup engine over a compiled dictionary.
///
/// Borrows the automaton and features immutably and owns two reusable
/// byte buffers, so a `&mut self` receiver on the query methods. The
/// buffers only ever grow. For concurrent lookups over one shared
/// automaton, clone the engine; clones are cheap (two empty buffers and
/// two references).
#[derive(Debug, Clone)]
pub struct DictionaryLookup<'a> {
    fsa: &'a Fsa,
    features: &'a DictionaryFeatures,
    /// Surface word in the dictionary encoding.
    word_buf: Vec<u8>,
    /// Decoded lemma bytes.
    lemma_buf: Vec<u8>,
}

impl<'a> DictionaryLookup<'a> {
    pub fn new(fsa: &'a Fsa, features: &'a DictionaryFeatures) -> Self {
        Self {
            fsa,
            features,
            word_buf: Vec::new(),
            lemma_buf: Vec::new(),
        }
    }

    /// Look up the lemmas of an inflected word.
    ///
    /// Returns one string per stored record, in the automaton's stable
    /// enumeration order; an unknown word yields an empty vector.
    pub fn stem(&mut self, word: &str) -> Result<Vec<String>, DictionaryError> {
        self.lookup(word, false)
    }

    /// Look up lemmas and tags, flattened as
    /// `[lemma1, tag1, lemma2, tag2, ...]`.
    pub fn stem_and_form(&mut self, word: &str) -> Result<Vec<String>, DictionaryError> {
        self.lookup(word, true)
    }

    fn lookup(&mut self, word: &str, return_forms: bool) -> Result<Vec<String>, DictionaryError> {
        let fsa = self.fsa;
        let features = self.features;
        let separator = features.separator();

        features.encode_word(word, &mut self.word_buf)?;

        // The whole surface must be consumed with the entry continuing
        // past it; any other outcome means the word is not in the
        // dictionary.
        let node = match match_sequence(fsa, &self.word_buf, fsa.root()) {
            MatchResult::PrematureEnd { node } => node,
            _ => return Ok(Vec::new()),
        };

        let Some(arc) = fsa.arc_by_label(node, separator) else {
            return Ok(Vec::new());
        };
        if arc.is_final() {
            // A final separator arc would mean an entry without a delta
            // body. Well-formed dictionaries never produce one; treat it
            // as no result.
            return Ok(Vec::new());
        }

        let mut results = Vec::new();
        for record in accepted_sequences(fsa, arc.target()) {
            let split = record.iter().position(|&b| b == separator);
            // No second separator: the whole record is the delta and the
            // tag is empty.
            let delta = match split {
                Some(j) => &record[..j],
                None => &record[..],
            };
            codec::decode_into(
                &mut self.lemma_buf,
                delta,
                &self.word_buf,
                features.decodes_prefixes(),
                features.uses_infixes(),
            );
            results.push(features.decode_bytes(&self.lemma_buf));
            if return_forms {
                let tag: &[u8] = match split {
                    Some(j) => &record[j + 1..],
                    None => &[],
                };
                results.push(features.decode_bytes(tag));
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{infix_encode, prefix_encode, standard_encode};
    use morfa_fsa::FsaBuilder;

    const SEP: u8 = b'+';

    fn utf8_features(prefixes: bool, infixes: bool) -> DictionaryFeatures {
        DictionaryFeatures::new("UTF-8", SEP, prefixes, infixes).unwrap()
    }

    fn build_fsa(records: &[Vec<u8>]) -> Fsa {
        let mut builder = FsaBuilder::new();
        for r in records {
            builder.insert(r);
        }
        builder.freeze()
    }

    #[test]
    fn stem_finds_single_lemma() {
        let fsa = build_fsa(&[standard_encode(b"werken", b"werk", b"V", SEP)]);
        let features = utf8_features(false, false);
        let mut lookup = DictionaryLookup::new(&fsa, &features);
        assert_eq!(lookup.stem("werken").unwrap(), vec!["werk"]);
    }

    #[test]
    fn stem_and_form_interleaves_tags() {
        let fsa = build_fsa(&[standard_encode(b"werken", b"werk", b"V", SEP)]);
        let features = utf8_features(false, false);
        let mut lookup = DictionaryLookup::new(&fsa, &features);
        assert_eq!(lookup.stem_and_form("werken").unwrap(), vec!["werk", "V"]);
    }

    #[test]
    fn miss_returns_empty_list() {
        let fsa = build_fsa(&[standard_encode(b"werken", b"werk", b"V", SEP)]);
        let features = utf8_features(false, false);
        let mut lookup = DictionaryLookup::new(&fsa, &features);
        assert!(lookup.stem("xyzzy").unwrap().is_empty());
        assert!(lookup.stem("werk").unwrap().is_empty());
        assert!(lookup.stem("werkende").unwrap().is_empty());
        assert!(lookup.stem("").unwrap().is_empty());
    }

    #[test]
    fn ambiguous_surface_yields_all_records() {
        let fsa = build_fsa(&[
            standard_encode(b"goes", b"go", b"VBZ", SEP),
            standard_encode(b"goes", b"goes", b"NNS", SEP),
        ]);
        let features = utf8_features(false, false);
        let mut lookup = DictionaryLookup::new(&fsa, &features);
        let mut lemmas = lookup.stem("goes").unwrap();
        lemmas.sort();
        assert_eq!(lemmas, vec!["go", "goes"]);
        let pairs = lookup.stem_and_form("goes").unwrap();
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn prefix_scheme_end_to_end() {
        let fsa = build_fsa(&[prefix_encode(b"nagrzac", b"grzac", b"V", SEP)]);
        let features = utf8_features(true, false);
        let mut lookup = DictionaryLookup::new(&fsa, &features);
        assert_eq!(lookup.stem_and_form("nagrzac").unwrap(), vec!["grzac", "V"]);
    }

    #[test]
    fn infix_scheme_end_to_end() {
        let fsa = build_fsa(&[infix_encode(b"ABXYCDE", b"ABCDE", b"T", SEP)]);
        let features = utf8_features(true, true);
        let mut lookup = DictionaryLookup::new(&fsa, &features);
        assert_eq!(lookup.stem("ABXYCDE").unwrap(), vec!["ABCDE"]);
    }

    #[test]
    fn infix_flag_alone_enables_prefix_layout() {
        let fsa = build_fsa(&[infix_encode(b"ABXYCDE", b"ABCDE", b"T", SEP)]);
        let features = utf8_features(false, true);
        let mut lookup = DictionaryLookup::new(&fsa, &features);
        assert_eq!(lookup.stem("ABXYCDE").unwrap(), vec!["ABCDE"]);
    }

    #[test]
    fn multibyte_utf8_word_round_trips() {
        let form = "\u{17c}\u{f3}\u{142}wia";
        let lemma = "\u{17c}\u{f3}\u{142}w";
        let fsa = build_fsa(&[standard_encode(
            form.as_bytes(),
            lemma.as_bytes(),
            b"subst",
            SEP,
        )]);
        let features = utf8_features(false, false);
        let mut lookup = DictionaryLookup::new(&fsa, &features);
        assert_eq!(lookup.stem_and_form(form).unwrap(), vec![lemma, "subst"]);
    }

    #[test]
    fn record_without_tag_separator_gives_empty_tag() {
        // surface ++ sep ++ delta, no tag field at all.
        let mut record = b"kot".to_vec();
        record.push(SEP);
        record.extend_from_slice(b"A");
        let fsa = build_fsa(&[record]);
        let features = utf8_features(false, false);
        let mut lookup = DictionaryLookup::new(&fsa, &features);
        assert_eq!(lookup.stem_and_form("kot").unwrap(), vec!["kot", ""]);
    }

    #[test]
    fn malformed_delta_is_returned_verbatim() {
        // 'Z' wants to strip 25 bytes from a 3-byte surface; legacy
        // dictionaries used this field for the raw lemma.
        let mut record = b"kot".to_vec();
        record.push(SEP);
        record.extend_from_slice(b"Zraw");
        record.push(SEP);
        record.extend_from_slice(b"N");
        let fsa = build_fsa(&[record]);
        let features = utf8_features(false, false);
        let mut lookup = DictionaryLookup::new(&fsa, &features);
        assert_eq!(lookup.stem("kot").unwrap(), vec!["Zraw"]);
    }

    #[test]
    fn final_separator_arc_yields_no_result() {
        // An entry that stops right at the separator has no delta body.
        let fsa = build_fsa(&[b"kot+".to_vec()]);
        let features = utf8_features(false, false);
        let mut lookup = DictionaryLookup::new(&fsa, &features);
        assert!(lookup.stem("kot").unwrap().is_empty());
    }

    #[test]
    fn results_are_deterministic() {
        let fsa = build_fsa(&[
            standard_encode(b"pila", b"pila", b"N1", SEP),
            standard_encode(b"pila", b"pic", b"V2", SEP),
            standard_encode(b"pila", b"pil", b"N3", SEP),
        ]);
        let features = utf8_features(false, false);
        let mut lookup = DictionaryLookup::new(&fsa, &features);
        let first = lookup.stem_and_form("pila").unwrap();
        let second = lookup.stem_and_form("pila").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
    }

    #[test]
    fn charset_mismatch_surfaces_an_error() {
        let fsa = build_fsa(&[standard_encode(b"kot", b"kot", b"N", SEP)]);
        let features = DictionaryFeatures::new("ISO-8859-2", SEP, false, false).unwrap();
        let mut lookup = DictionaryLookup::new(&fsa, &features);
        let err = lookup.stem("\u{65e5}\u{672c}").unwrap_err();
        assert!(matches!(err, DictionaryError::Charset { .. }));
    }

    #[test]
    fn decode_buffer_capacity_is_monotone() {
        let fsa = build_fsa(&[
            standard_encode(b"a", b"a", b"X", SEP),
            standard_encode(b"considerations", b"consideration", b"N", SEP),
        ]);
        let features = utf8_features(false, false);
        let mut lookup = DictionaryLookup::new(&fsa, &features);

        let mut last = 0;
        for word in ["a", "considerations", "a", "considerations", "a"] {
            lookup.stem(word).unwrap();
            let cap = lookup.lemma_buf.capacity();
            assert!(cap >= last, "buffer capacity shrank: {last} -> {cap}");
            last = cap;
        }
    }

    #[test]
    fn clones_share_the_automaton_but_not_buffers() {
        let fsa = build_fsa(&[standard_encode(b"werken", b"werk", b"V", SEP)]);
        let features = utf8_features(false, false);
        let mut first = DictionaryLookup::new(&fsa, &features);
        first.stem("werken").unwrap();
        let mut second = first.clone();
        assert_eq!(second.stem("werken").unwrap(), vec!["werk"]);
        assert_eq!(first.stem("werken").unwrap(), vec!["werk"]);
    }
}
