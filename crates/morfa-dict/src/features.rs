// Dictionary features: the declared character encoding, the separator
// byte and the delta scheme flags, validated once at construction.
//
// Compiled dictionaries ship these in a sidecar info file of `key=value`
// lines. Only four keys are interpreted here; the rest are kept available
// for tooling.

use encoding_rs::Encoding;
use hashbrown::HashMap;

use crate::DictionaryError;

pub const KEY_ENCODING: &str = "fsa.dict.encoding";
pub const KEY_SEPARATOR: &str = "fsa.dict.separator";
pub const KEY_USES_PREFIXES: &str = "fsa.dict.uses-prefixes";
pub const KEY_USES_INFIXES: &str = "fsa.dict.uses-infixes";

/// Features of a compiled dictionary. Immutable after construction.
#[derive(Debug, Clone)]
pub struct DictionaryFeatures {
    encoding: &'static Encoding,
    encoding_name: String,
    separator: u8,
    uses_prefixes: bool,
    uses_infixes: bool,
    /// Unrecognized info keys, preserved verbatim.
    extra: HashMap<String, String>,
}

impl DictionaryFeatures {
    /// Create features from explicit values.
    ///
    /// The encoding name must resolve to an installed charset. The
    /// separator must be a single ASCII byte: in variable-width encodings
    /// an ASCII byte can never occur inside a multi-byte sequence, which
    /// is what keeps byte-level record splitting sound.
    pub fn new(
        encoding_name: &str,
        separator: u8,
        uses_prefixes: bool,
        uses_infixes: bool,
    ) -> Result<Self, DictionaryError> {
        let encoding = Encoding::for_label(encoding_name.as_bytes())
            .ok_or_else(|| DictionaryError::UnknownEncoding(encoding_name.to_string()))?;
        if !separator.is_ascii() || separator == b'\n' || separator == b'\r' {
            return Err(DictionaryError::InvalidSeparator(format!(
                "0x{separator:02x}"
            )));
        }
        Ok(Self {
            encoding,
            encoding_name: encoding_name.to_string(),
            separator,
            uses_prefixes,
            uses_infixes,
            extra: HashMap::new(),
        })
    }

    /// Parse features from sidecar info text.
    ///
    /// Lines are `key=value`; blank lines and `#` comments are skipped.
    /// `fsa.dict.encoding` and `fsa.dict.separator` are required; the two
    /// scheme flags default to `false`.
    pub fn from_info(text: &str) -> Result<Self, DictionaryError> {
        let mut map: HashMap<&str, &str> = HashMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                map.insert(key.trim(), value.trim());
            }
        }

        let encoding_name = map
            .remove(KEY_ENCODING)
            .ok_or(DictionaryError::MissingFeature(KEY_ENCODING))?;
        let separator_value = map
            .remove(KEY_SEPARATOR)
            .ok_or(DictionaryError::MissingFeature(KEY_SEPARATOR))?;
        if separator_value.len() != 1 {
            return Err(DictionaryError::InvalidSeparator(
                separator_value.to_string(),
            ));
        }
        let uses_prefixes = parse_flag(map.remove(KEY_USES_PREFIXES), KEY_USES_PREFIXES)?;
        let uses_infixes = parse_flag(map.remove(KEY_USES_INFIXES), KEY_USES_INFIXES)?;

        let mut features = Self::new(
            encoding_name,
            separator_value.as_bytes()[0],
            uses_prefixes,
            uses_infixes,
        )?;
        features.extra = map
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Ok(features)
    }

    /// The declared encoding name.
    pub fn encoding_name(&self) -> &str {
        &self.encoding_name
    }

    /// The record separator byte.
    #[inline]
    pub fn separator(&self) -> u8 {
        self.separator
    }

    /// Whether records were compiled with the prefix scheme.
    #[inline]
    pub fn uses_prefixes(&self) -> bool {
        self.uses_prefixes
    }

    /// Whether records were compiled with the infix scheme.
    #[inline]
    pub fn uses_infixes(&self) -> bool {
        self.uses_infixes
    }

    /// Whether the decoder must assume the prefix layout. Infixes imply
    /// prefixes.
    #[inline]
    pub fn decodes_prefixes(&self) -> bool {
        self.uses_prefixes || self.uses_infixes
    }

    /// Look up an unrecognized info key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }

    /// Encode `word` into `out` using the declared charset.
    ///
    /// Unmappable input is an error: the configuration is static, so this
    /// only fires when a dictionary is paired with the wrong encoding.
    pub fn encode_word(&self, word: &str, out: &mut Vec<u8>) -> Result<(), DictionaryError> {
        let (bytes, _, had_errors) = self.encoding.encode(word);
        if had_errors {
            return Err(DictionaryError::Charset {
                encoding: self.encoding_name.clone(),
                text: word.to_string(),
            });
        }
        out.clear();
        out.extend_from_slice(&bytes);
        Ok(())
    }

    /// Decode stored bytes using the declared charset. Decoding is lossy
    /// on malformed sequences; output text never fails.
    pub fn decode_bytes(&self, bytes: &[u8]) -> String {
        let (text, _) = self.encoding.decode_without_bom_handling(bytes);
        text.into_owned()
    }
}

fn parse_flag(value: Option<&str>, key: &'static str) -> Result<bool, DictionaryError> {
    match value {
        None => Ok(false),
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(DictionaryError::InvalidFlag {
            key,
            value: other.to_string(),
        }),
    }
}
