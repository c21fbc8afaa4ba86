use super::SongRecord;
use std::collections::HashMap;

/// The full set of songs available for recommendation.
///
/// Songs keep the positional order they were supplied in; position i here is
/// row i of the fitted feature matrix. Identifier uniqueness is a loading
/// precondition, the catalog itself never mutates after construction.
#[derive(Debug)]
pub struct Catalog {
    songs: Vec<SongRecord>,
    positions: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(songs: Vec<SongRecord>) -> Self {
        let mut positions = HashMap::with_capacity(songs.len());
        for (position, song) in songs.iter().enumerate() {
            positions.entry(song.song_id.clone()).or_insert(position);
        }
        Catalog { songs, positions }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&SongRecord> {
        self.songs.get(position)
    }

    pub fn get_song(&self, song_id: &str) -> Option<&SongRecord> {
        self.positions.get(song_id).map(|&p| &self.songs[p])
    }

    pub fn position_of(&self, song_id: &str) -> Option<usize> {
        self.positions.get(song_id).copied()
    }

    pub fn iter_songs(&self) -> impl Iterator<Item = &SongRecord> {
        self.songs.iter()
    }

    pub fn song_ids(&self) -> Vec<String> {
        self.songs.iter().map(|s| s.song_id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str, danceability: f64) -> SongRecord {
        SongRecord {
            song_id: id.to_string(),
            title: format!("title-{id}"),
            artist: "artist".to_string(),
            danceability,
            energy: 0.5,
            speechiness: 0.1,
            acousticness: 0.2,
            instrumentalness: 0.0,
            liveness: 0.15,
            valence: 0.4,
            tempo: 120.0,
        }
    }

    #[test]
    fn positions_follow_supply_order() {
        let catalog = Catalog::new(vec![song("a", 0.1), song("b", 0.2), song("c", 0.3)]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.position_of("a"), Some(0));
        assert_eq!(catalog.position_of("c"), Some(2));
        assert_eq!(catalog.get(1).unwrap().song_id, "b");
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::new(vec![song("a", 0.1), song("b", 0.2)]);
        assert_eq!(catalog.get_song("b").unwrap().danceability, 0.2);
        assert!(catalog.get_song("nope").is_none());
        assert_eq!(catalog.position_of("nope"), None);
    }

    #[test]
    fn first_occurrence_wins_on_duplicate_ids() {
        let catalog = Catalog::new(vec![song("a", 0.1), song("a", 0.9)]);
        assert_eq!(catalog.position_of("a"), Some(0));
        assert_eq!(catalog.get_song("a").unwrap().danceability, 0.1);
    }
}
