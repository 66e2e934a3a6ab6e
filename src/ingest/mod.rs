//! Loaders for the actor and title datasets
//!
//! Both files are tab-separated with a header line.
//!
//! Actors (`name.basics.tsv`): column 0 is the `nm` id, column 1 the name,
//! column 5 a comma-separated list of `tt` ids.
//!
//! Titles (`title.basics.tsv`): column 0 is the `tt` id, column 1 the title
//! type, column 2 the primary title. Only `movie` rows are kept, so actors
//! routinely reference titles that never load.

mod tsv;

pub use tsv::{parse_identifier, ACTOR_PREFIX, MOVIE_PREFIX, MOVIE_TITLE_TYPE, NULL_FIELD};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::graph::{Actor, Movie};
use tsv::{list_entries, split_record};

/// Errors raised while reading a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input ended before the header line.
    #[error("missing header line")]
    MissingHeader,

    /// An identifier column did not carry the expected prefix and digits.
    #[error("invalid identifier '{value}' on line {line}")]
    InvalidIdentifier {
        /// 1-based line number, header included.
        line: usize,
        /// Offending token.
        value: String,
    },
}

fn identifier(token: &str, prefix: &str, line: usize) -> Result<u32, IngestError> {
    parse_identifier(token, prefix).ok_or_else(|| IngestError::InvalidIdentifier {
        line,
        value: token.to_string(),
    })
}

/// Records after the header, paired with their 1-based line numbers.
fn records<R: BufRead>(
    reader: R,
) -> Result<impl Iterator<Item = (usize, io::Result<String>)>, IngestError> {
    let mut lines = reader.lines();
    match lines.next() {
        Some(header) => {
            header?;
        }
        None => return Err(IngestError::MissingHeader),
    }
    Ok(lines.enumerate().map(|(offset, line)| (offset + 2, line)))
}

/// Read at most `limit` actors.
pub fn load_actors<R: BufRead>(reader: R, limit: usize) -> Result<Vec<Actor>, IngestError> {
    let mut actors = Vec::new();

    for (line_no, line) in records(reader)? {
        if actors.len() >= limit {
            break;
        }
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_record(&line);
        if fields.len() < 2 {
            tracing::warn!(line = line_no, "actor record has too few columns; skipped");
            continue;
        }

        let mut actor = Actor::new(identifier(fields[0], ACTOR_PREFIX, line_no)?, fields[1]);
        if let Some(titles) = fields.get(5) {
            for token in list_entries(titles) {
                let movie = identifier(token, MOVIE_PREFIX, line_no)?;
                if let Err(err) = actor.add_movie(movie) {
                    tracing::warn!(actor = actor.id, movie, %err, "title dropped");
                }
            }
        }
        actors.push(actor);
    }

    tracing::debug!(count = actors.len(), "actors loaded");
    Ok(actors)
}

/// Read at most `limit` titles of type `movie`.
pub fn load_movies<R: BufRead>(reader: R, limit: usize) -> Result<Vec<Movie>, IngestError> {
    let mut movies = Vec::new();
    let mut skipped = 0usize;

    for (line_no, line) in records(reader)? {
        if movies.len() >= limit {
            break;
        }
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_record(&line);
        if fields.len() < 3 {
            tracing::warn!(line = line_no, "title record has too few columns; skipped");
            continue;
        }
        if fields[1] != MOVIE_TITLE_TYPE {
            skipped += 1;
            continue;
        }

        movies.push(Movie::new(identifier(fields[0], MOVIE_PREFIX, line_no)?, fields[2]));
    }

    tracing::debug!(count = movies.len(), skipped, "movies loaded");
    Ok(movies)
}

/// [`load_actors`] from a file.
pub fn load_actors_from_path<P: AsRef<Path>>(
    path: P,
    limit: usize,
) -> Result<Vec<Actor>, IngestError> {
    load_actors(BufReader::new(File::open(path)?), limit)
}

/// [`load_movies`] from a file.
pub fn load_movies_from_path<P: AsRef<Path>>(
    path: P,
    limit: usize,
) -> Result<Vec<Movie>, IngestError> {
    load_movies(BufReader::new(File::open(path)?), limit)
}
