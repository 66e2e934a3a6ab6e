//! # Actor co-occurrence graphs
//!
//! Reads a set of actors (each with the titles they appeared in) and a set of
//! movies, links every pair of movies that share an actor, and writes the
//! result as an undirected DOT graph.
//!
//! ## Pipeline
//!
//! 1. **Ingest**: actors and movies are loaded from tab-separated files; each
//!    actor's title ids land in an [`OrderedSet`]
//! 2. **Build**: [`build_graph`] walks every actor's set and inserts each pair
//!    of resolvable titles into both movies' neighbor sets
//! 3. **Emit**: [`dot::write_dot`] walks each movie's neighbor set
//!
//! ## Usage Example
//!
//! ```
//! use castgraph::{build_graph, Actor, Movie};
//!
//! let actors = vec![Actor::with_movies(1, "A", [10, 20, 30])];
//! let mut movies = vec![Movie::new(10, "X"), Movie::new(20, "Y"), Movie::new(30, "Z")];
//! build_graph(&actors, &mut movies);
//!
//! let neighbors: Vec<u32> = movies[0].neighbors().iter().copied().collect();
//! assert_eq!(neighbors, vec![20, 30]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod tree;    // AVL ordered multiset
pub mod graph;   // Actors, movies, co-occurrence builder
pub mod ingest;  // TSV dataset loaders
pub mod dot;     // Graphviz writer

// Re-exports for convenience
pub use tree::{OrderedSet, TreeError};
pub use graph::{build_graph, Actor, ActorId, BuildStats, Movie, MovieId, MovieIndex};
pub use ingest::IngestError;

/// Limits applied while loading the datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Maximum number of actor records read.
    pub max_actors: usize,

    /// Maximum number of movies kept (non-movie titles do not count).
    pub max_movies: usize,
}

impl GraphConfig {
    /// Default actor limit.
    pub const DEFAULT_MAX_ACTORS: usize = 10;

    /// Default movie limit.
    pub const DEFAULT_MAX_MOVIES: usize = 100_000;

    /// Configuration with no practical limits.
    pub fn unbounded() -> Self {
        Self {
            max_actors: usize::MAX,
            max_movies: usize::MAX,
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_actors: Self::DEFAULT_MAX_ACTORS,
            max_movies: Self::DEFAULT_MAX_MOVIES,
        }
    }
}
