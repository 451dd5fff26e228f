use std::path::Path;

use super::DatasetError;
use crate::types::RankedArtist;

pub const RANKING_COLUMNS: [&str; 5] = [
    "artist",
    "song_count",
    "betweenness_centrality",
    "degree_centrality",
    "number_of_collaborators",
];

pub fn write_ranking(path: &Path, ranking: &[RankedArtist]) -> Result<(), DatasetError> {
    let mut writer = csv::Writer::from_path(path)?;
    if ranking.is_empty() {
        writer.write_record(RANKING_COLUMNS)?;
    }
    for artist in ranking {
        writer.serialize(artist)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a ranking table back. The pipeline itself never reads its output;
/// this exists for round-trip verification of written tables and for callers
/// comparing runs.
pub fn read_ranking(path: &Path) -> Result<Vec<RankedArtist>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;
    reader
        .deserialize::<RankedArtist>()
        .map(|row| row.map_err(DatasetError::from))
        .collect()
}
