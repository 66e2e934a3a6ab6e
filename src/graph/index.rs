//! Identifier → movie slot lookup

use std::collections::HashMap;

use super::{Movie, MovieId};

/// Hash index from [`MovieId`] to a position in a movie slice.
///
/// When ids repeat, the earliest movie in the slice wins.
#[derive(Debug, Clone, Default)]
pub struct MovieIndex {
    slots: HashMap<MovieId, usize>,
}

impl MovieIndex {
    /// Index `movies` by id.
    pub fn build(movies: &[Movie]) -> Self {
        let mut slots = HashMap::with_capacity(movies.len());
        for (slot, movie) in movies.iter().enumerate() {
            slots.entry(movie.id).or_insert(slot);
        }
        Self { slots }
    }

    /// Slot of the movie with this id, if it was loaded.
    #[inline]
    pub fn get(&self, id: MovieId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    /// Resolve `id` against the slice this index was built from.
    pub fn resolve<'a>(&self, movies: &'a [Movie], id: MovieId) -> Option<&'a Movie> {
        self.get(id).and_then(|slot| movies.get(slot))
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
