use regex::Regex;

use crate::error::{Error, Result};

/// Pulls every run of decimal digits out of a filename, left to right.
#[derive(Debug, Clone)]
pub struct TokenExtractor {
    digits: Regex,
}

impl TokenExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            digits: Regex::new(r"\d+")?,
        })
    }

    /// Returns all maximal digit runs in `name` as integers.
    pub fn extract(&self, name: &str) -> Result<Vec<u64>> {
        let tokens = self
            .digits
            .find_iter(name)
            .map(|m| {
                m.as_str().parse::<u64>().map_err(|_| Error::TokenOutOfRange {
                    name: name.to_string(),
                    token: m.as_str().to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if tokens.is_empty() {
            return Err(Error::NoNumericToken {
                name: name.to_string(),
            });
        }
        Ok(tokens)
    }

    /// Returns the digit run at `index`, keeping "no digits" and
    /// "index out of range" apart.
    pub fn token_at(&self, name: &str, index: usize) -> Result<u64> {
        let tokens = self.extract(name)?;
        tokens
            .get(index)
            .copied()
            .ok_or_else(|| Error::InvalidMatchIndex {
                index,
                name: name.to_string(),
                available: tokens.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_runs_in_order() {
        let extractor = TokenExtractor::new().unwrap();
        assert_eq!(extractor.extract("Bleach 1S30E04.mkv").unwrap(), vec![1, 30, 4]);
        assert_eq!(extractor.extract("ep101.mkv").unwrap(), vec![101]);
        assert_eq!(extractor.extract("x264-007").unwrap(), vec![264, 7]);
    }

    #[test]
    fn test_extract_without_digits() {
        let extractor = TokenExtractor::new().unwrap();
        assert!(matches!(
            extractor.extract("epx.mkv"),
            Err(Error::NoNumericToken { .. })
        ));
    }

    #[test]
    fn test_extract_overflow() {
        let extractor = TokenExtractor::new().unwrap();
        assert!(matches!(
            extractor.extract("ep99999999999999999999999.mkv"),
            Err(Error::TokenOutOfRange { .. })
        ));
    }

    #[test]
    fn test_token_at_bounds() {
        let extractor = TokenExtractor::new().unwrap();
        assert_eq!(extractor.token_at("s4ep12.mkv", 1).unwrap(), 12);
        match extractor.token_at("s4ep12.mkv", 2) {
            Err(Error::InvalidMatchIndex { index, available, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(available, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
