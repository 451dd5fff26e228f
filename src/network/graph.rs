use std::collections::{HashMap, HashSet};

use petgraph::{
    graph::{NodeIndex, UnGraph},
    visit::EdgeRef,
};

use crate::types::CreditedTrack;

/// Attributes of one collaboration edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Collaboration {
    /// Number of tracks crediting both artists.
    pub weight: u32,
    /// Song names that established the edge, in first-seen order.
    pub songs: Vec<String>,
}

/// Undirected artist collaboration graph.
///
/// Artists are identified by their exact name. Nodes are numbered in the order
/// they first appear in an edge; centrality vectors and the ranking tie-break
/// use that numbering. An artist who never shares a credit is not a node, but
/// still has a song count.
#[derive(Debug, Clone, Default)]
pub struct CollabGraph {
    inner: UnGraph<String, Collaboration>,
    index: HashMap<String, NodeIndex>,
    mentions: HashMap<String, u32>,
}

impl CollabGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tracks(tracks: &[CreditedTrack]) -> Self {
        let mut graph = Self::new();
        for track in tracks {
            graph.add_track(&track.song_name, &track.artists);
        }
        graph
    }

    /// Adds one track: counts a mention for every credited artist and links
    /// every unordered pair of distinct artists.
    pub fn add_track(&mut self, song_name: &str, artists: &[String]) {
        let mut seen = HashSet::new();
        let credited: Vec<&str> = artists
            .iter()
            .map(|a| a.as_str())
            .filter(|a| !a.is_empty() && seen.insert(*a))
            .collect();

        for artist in &credited {
            *self.mentions.entry(artist.to_string()).or_insert(0) += 1;
        }

        for (i, first) in credited.iter().enumerate() {
            for second in &credited[i + 1..] {
                self.link(first, second, song_name);
            }
        }
    }

    fn link(&mut self, first: &str, second: &str, song_name: &str) {
        let a = self.node(first);
        let b = self.node(second);

        match self.inner.find_edge(a, b) {
            Some(edge) => {
                if let Some(collaboration) = self.inner.edge_weight_mut(edge) {
                    collaboration.weight += 1;
                    collaboration.songs.push(song_name.to_string());
                }
            }
            None => {
                self.inner.add_edge(
                    a,
                    b,
                    Collaboration {
                        weight: 1,
                        songs: vec![song_name.to_string()],
                    },
                );
            }
        }
    }

    fn node(&mut self, artist: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(artist) {
            return idx;
        }
        let idx = self.inner.add_node(artist.to_string());
        self.index.insert(artist.to_string(), idx);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Artist names in node order.
    pub fn artists(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.node_weights().map(String::as_str)
    }

    pub fn node_index(&self, artist: &str) -> Option<usize> {
        self.index.get(artist).map(|idx| idx.index())
    }

    pub fn collaboration(&self, first: &str, second: &str) -> Option<&Collaboration> {
        let a = *self.index.get(first)?;
        let b = *self.index.get(second)?;
        let edge = self.inner.find_edge(a, b)?;
        self.inner.edge_weight(edge)
    }

    /// Neighbours of a node with the connecting edge.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, &Collaboration)> + '_ {
        let idx = NodeIndex::new(node);
        self.inner.edges(idx).map(move |edge| {
            let other = if edge.source() == idx {
                edge.target()
            } else {
                edge.source()
            };
            (other.index(), edge.weight())
        })
    }

    pub fn degree(&self, node: usize) -> usize {
        self.inner.edges(NodeIndex::new(node)).count()
    }

    /// Edges as node index pairs, in creation order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, &Collaboration)> + '_ {
        self.inner
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), e.weight()))
    }

    /// Number of tracks crediting the artist, collaborations and solo tracks
    /// alike. Zero for unknown names.
    pub fn song_count(&self, artist: &str) -> u32 {
        self.mentions.get(artist).copied().unwrap_or(0)
    }
}
