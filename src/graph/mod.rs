//! Actor/movie entities and the co-occurrence builder
//!
//! Every actor's movie set is treated as a clique: each pair of distinct
//! movies reachable from the same actor becomes a neighbor relation, recorded
//! in both movies' neighbor sets. Nothing is deduplicated, so two actors
//! sharing the same pair produce two entries on each side.

mod index;

pub use index::MovieIndex;

use std::fmt;

use crate::tree::{OrderedSet, TreeError};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Actor identifier (`nm` prefix stripped).
pub type ActorId = u32;

/// Title identifier (`tt` prefix stripped).
pub type MovieId = u32;

/// A person and the titles they are associated with.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Actor {
    /// Numeric identifier.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Associated title ids, with multiplicity.
    pub movies: OrderedSet<MovieId>,
}

impl Actor {
    /// Actor with no titles yet.
    pub fn new(id: ActorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            movies: OrderedSet::new(),
        }
    }

    /// Actor populated from a list of title ids.
    pub fn with_movies(
        id: ActorId,
        name: impl Into<String>,
        movies: impl IntoIterator<Item = MovieId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            movies: movies.into_iter().collect(),
        }
    }

    /// Record one more title for this actor.
    pub fn add_movie(&mut self, movie: MovieId) -> Result<(), TreeError> {
        self.movies.insert(movie)
    }
}

/// A title and, once the graph is built, its neighbors.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Movie {
    /// Numeric identifier.
    pub id: MovieId,
    /// Primary title.
    pub title: String,
    neighbors: OrderedSet<MovieId>,
}

impl Movie {
    /// Movie with an empty neighbor set.
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            neighbors: OrderedSet::new(),
        }
    }

    /// Movie whose neighbor set holds at most `limit` entries.
    pub fn with_neighbor_limit(id: MovieId, title: impl Into<String>, limit: usize) -> Self {
        Self {
            id,
            title: title.into(),
            neighbors: OrderedSet::with_node_limit(limit),
        }
    }

    /// Neighbor ids, possibly repeated.
    pub fn neighbors(&self) -> &OrderedSet<MovieId> {
        &self.neighbors
    }

    /// Number of neighbor entries, counting repeats.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Counters collected while building the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Actors walked.
    pub actors: usize,
    /// Neighbor entries written (each pair writes two).
    pub edges_inserted: usize,
    /// Pairs skipped because one side was not a loaded movie.
    pub unresolved_pairs: usize,
    /// Pairs skipped because both sides were the same id.
    pub self_pairs: usize,
    /// Neighbor entries lost to allocation failure.
    pub dropped_inserts: usize,
}

impl fmt::Display for BuildStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "actors={} edges={} unresolved={} self={} dropped={}",
            self.actors,
            self.edges_inserted,
            self.unresolved_pairs,
            self.self_pairs,
            self.dropped_inserts
        )
    }
}

/// Derive neighbor sets for `movies` from the actors' title sets.
///
/// For each actor, every pair of positions `i < j` in the ascending walk of
/// its title set is considered once. Distinct ids that both resolve to a
/// loaded movie are inserted in both directions; anything else is skipped.
pub fn build_graph(actors: &[Actor], movies: &mut [Movie]) -> BuildStats {
    let index = MovieIndex::build(movies);
    let mut stats = BuildStats::default();

    tracing::debug!(
        actors = actors.len(),
        movies = movies.len(),
        "building co-occurrence graph"
    );

    for actor in actors {
        stats.actors += 1;
        let before = stats.edges_inserted;

        for (position, &first) in actor.movies.iter().enumerate() {
            for &second in actor.movies.iter().skip(position + 1) {
                if first == second {
                    stats.self_pairs += 1;
                    continue;
                }

                match (index.get(first), index.get(second)) {
                    (Some(a), Some(b)) => {
                        link(&mut movies[a], second, &mut stats);
                        link(&mut movies[b], first, &mut stats);
                    }
                    _ => stats.unresolved_pairs += 1,
                }
            }
        }

        tracing::trace!(
            actor = actor.id,
            titles = actor.movies.len(),
            edges = stats.edges_inserted - before,
            "actor linked"
        );
    }

    tracing::debug!(%stats, "co-occurrence graph built");
    stats
}

fn link(movie: &mut Movie, neighbor: MovieId, stats: &mut BuildStats) {
    match movie.neighbors.insert(neighbor) {
        Ok(()) => stats.edges_inserted += 1,
        Err(err) => {
            stats.dropped_inserts += 1;
            tracing::debug!(movie = movie.id, neighbor, %err, "neighbor dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors(movie: &Movie) -> Vec<MovieId> {
        movie.neighbors().iter().copied().collect()
    }

    #[test]
    fn test_single_actor_clique() {
        let actors = vec![Actor::with_movies(1, "A", [10, 20, 30])];
        let mut movies = vec![
            Movie::new(10, "Ten"),
            Movie::new(20, "Twenty"),
            Movie::new(30, "Thirty"),
        ];
        let stats = build_graph(&actors, &mut movies);

        assert_eq!(neighbors(&movies[0]), vec![20, 30]);
        assert_eq!(neighbors(&movies[1]), vec![10, 30]);
        assert_eq!(neighbors(&movies[2]), vec![10, 20]);
        assert_eq!(stats.edges_inserted, 6);
        assert_eq!(stats.actors, 1);
    }

    #[test]
    fn test_unknown_title_is_skipped() {
        let actors = vec![Actor::with_movies(2, "B", [10, 99])];
        let mut movies = vec![Movie::new(10, "Ten")];
        let stats = build_graph(&actors, &mut movies);

        assert!(movies[0].neighbors().is_empty());
        assert_eq!(stats.unresolved_pairs, 1);
        assert_eq!(stats.edges_inserted, 0);
    }

    #[test]
    fn test_repeated_title_is_not_a_self_edge() {
        let actors = vec![Actor::with_movies(3, "C", [10, 10, 20])];
        let mut movies = vec![Movie::new(10, "Ten"), Movie::new(20, "Twenty")];
        let stats = build_graph(&actors, &mut movies);

        assert!(!movies[0].neighbors().contains(&10));
        assert_eq!(stats.self_pairs, 1);
        // Both copies of 10 pair with 20.
        assert_eq!(neighbors(&movies[0]), vec![20, 20]);
        assert_eq!(neighbors(&movies[1]), vec![10, 10]);
    }

    #[test]
    fn test_allocation_failure_drops_entry() {
        let actors = vec![Actor::with_movies(4, "D", [1, 2, 3])];
        let mut movies = vec![
            Movie::with_neighbor_limit(1, "One", 1),
            Movie::new(2, "Two"),
            Movie::new(3, "Three"),
        ];
        let stats = build_graph(&actors, &mut movies);

        assert_eq!(neighbors(&movies[0]), vec![2]);
        assert_eq!(stats.dropped_inserts, 1);
        assert_eq!(neighbors(&movies[2]), vec![1, 2]);
    }

    #[test]
    fn test_no_actors_no_edges() {
        let mut movies = vec![Movie::new(1, "One")];
        let stats = build_graph(&[], &mut movies);
        assert_eq!(stats, BuildStats::default());
        assert_eq!(movies[0].degree(), 0);
    }
}
