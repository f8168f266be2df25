use crate::error::Result;
use crate::media::MediaItem;
use crate::tokens::TokenExtractor;

/// Orders a batch of episodes by the digit run at `match_index`.
#[derive(Debug, Clone)]
pub struct EpisodeSorter {
    extractor: TokenExtractor,
    match_index: usize,
}

impl EpisodeSorter {
    pub fn new(match_index: usize) -> Result<Self> {
        Ok(Self {
            extractor: TokenExtractor::new()?,
            match_index,
        })
    }

    /// Keys every item before sorting so a single bad filename rejects the
    /// whole batch. Equal keys keep their input order.
    pub fn sort(&self, items: Vec<MediaItem>) -> Result<Vec<MediaItem>> {
        let mut keyed = items
            .into_iter()
            .map(|item| {
                let key = self.extractor.token_at(&item.file_name, self.match_index)?;
                Ok((key, item))
            })
            .collect::<Result<Vec<_>>>()?;

        keyed.sort_by_key(|(key, _)| *key);

        Ok(keyed.into_iter().map(|(_, item)| item).collect())
    }
}
