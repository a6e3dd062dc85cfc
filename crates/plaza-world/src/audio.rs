//! Background music playlist state.
//!
//! Decoding and playback belong to the audio backend; this only tracks which
//! track should be playing. Nothing plays until the first user interaction.

use plaza_config::AudioConfig;
use tracing::info;

#[derive(Clone, Debug, PartialEq)]
pub struct MusicPlaylist {
    tracks: Vec<String>,
    current: usize,
    playing: bool,
    pub volume: f32,
    pub looping: bool,
}

impl MusicPlaylist {
    pub fn new(config: &AudioConfig) -> Self {
        Self {
            tracks: config.music_tracks.clone(),
            current: 0,
            playing: false,
            volume: config.music_volume,
            looping: config.looping,
        }
    }

    /// Start the first track if nothing has played yet. Returns true when
    /// this call started playback.
    pub fn notify_interaction(&mut self) -> bool {
        if self.playing || self.tracks.is_empty() {
            return false;
        }
        self.playing = true;
        info!("Playing track 1 of {}", self.tracks.len());
        true
    }

    /// Advance to the next track, wrapping. Returns the new index, or `None`
    /// for an empty playlist.
    pub fn next_track(&mut self) -> Option<usize> {
        if self.tracks.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.tracks.len();
        self.playing = true;
        info!("Playing track {} of {}", self.current + 1, self.tracks.len());
        Some(self.current)
    }

    pub fn current_track(&self) -> Option<&str> {
        self.tracks.get(self.current).map(String::as_str)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_track_wraps() {
        let mut playlist = MusicPlaylist::new(&AudioConfig::default());
        assert_eq!(playlist.current_track(), Some("assets/theme.mp3"));
        assert_eq!(playlist.next_track(), Some(1));
        assert_eq!(playlist.current_track(), Some("assets/theme2.mp3"));
        assert_eq!(playlist.next_track(), Some(0));
    }

    #[test]
    fn test_empty_playlist_is_noop() {
        let mut playlist = MusicPlaylist::new(&AudioConfig {
            music_tracks: Vec::new(),
            ..Default::default()
        });
        assert_eq!(playlist.next_track(), None);
        assert!(!playlist.notify_interaction());
        assert!(playlist.current_track().is_none());
    }

    #[test]
    fn test_first_interaction_starts_once() {
        let mut playlist = MusicPlaylist::new(&AudioConfig::default());
        assert!(!playlist.is_playing());
        assert!(playlist.notify_interaction());
        assert!(playlist.is_playing());
        assert!(!playlist.notify_interaction());
    }

    #[test]
    fn test_volume_from_config() {
        let playlist = MusicPlaylist::new(&AudioConfig::default());
        assert_eq!(playlist.volume, 0.3);
        assert!(playlist.looping);
    }
}
