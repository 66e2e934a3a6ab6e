//! Graphviz (DOT) output for the co-occurrence graph

use anyhow::{anyhow, Result};
use std::io::Write;

use crate::graph::{Movie, MovieIndex};

const HEADER: &str = "graph {\n    concentrate=true;\n";
const FOOTER: &str = "}\n";

/// Quote-safe form of a title for use inside a DOT string.
fn escape(title: &str) -> String {
    title.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Write one undirected edge per neighbor entry, keyed by title.
///
/// Movies are emitted in slice order and neighbors in ascending id order.
/// Repeated neighbor entries produce repeated lines.
pub fn write_dot<W: Write>(writer: &mut W, movies: &[Movie]) -> Result<()> {
    let index = MovieIndex::build(movies);
    writer.write_all(HEADER.as_bytes())?;

    for movie in movies {
        let title = escape(&movie.title);
        for &neighbor in movie.neighbors() {
            let Some(other) = index.resolve(movies, neighbor) else {
                continue;
            };
            writeln!(writer, "    \"{}\" -- \"{}\";", title, escape(&other.title))?;
        }
    }

    writer.write_all(FOOTER.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Render the graph into a DOT string (useful for tests and snapshots).
pub fn render_dot(movies: &[Movie]) -> Result<String> {
    let mut buffer = Vec::new();
    write_dot(&mut buffer, movies)?;
    String::from_utf8(buffer).map_err(|_| anyhow!("rendered DOT is not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, Actor};

    #[test]
    fn test_empty_graph() {
        assert_eq!(render_dot(&[]).unwrap(), "graph {\n    concentrate=true;\n}\n");
    }

    #[test]
    fn test_titles_are_escaped() {
        let actors = vec![Actor::with_movies(1, "A", [1, 2])];
        let mut movies = vec![Movie::new(1, "The \"Thing\""), Movie::new(2, "C:\\Dir")];
        build_graph(&actors, &mut movies);

        let dot = render_dot(&movies).unwrap();
        assert!(dot.contains("    \"The \\\"Thing\\\"\" -- \"C:\\\\Dir\";\n"));
        assert!(dot.contains("    \"C:\\\\Dir\" -- \"The \\\"Thing\\\"\";\n"));
    }
}
