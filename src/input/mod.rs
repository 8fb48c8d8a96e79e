use std::fs;
use std::path::Path;

use crate::domain::SummonerId;
use crate::errors::InputError;

/// Loads summoner ids from a text file, one per line.
///
/// Blank lines and lines starting with `#` are skipped. File order is kept.
pub fn load_summoner_ids<P: AsRef<Path>>(path: P) -> Result<Vec<SummonerId>, InputError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_summoner_ids(&content)
}

pub fn parse_summoner_ids(content: &str) -> Result<Vec<SummonerId>, InputError> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, value)| {
            value.parse::<SummonerId>().map_err(|_| InputError::InvalidId {
                line,
                value: value.to_string(),
            })
        })
        .collect()
}
