#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use castgraph::{Actor, Movie};

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("CASTGRAPH_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set CASTGRAPH_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}

/// Three actors over four movies, one of them filtered out (id 99).
pub fn small_cast() -> (Vec<Actor>, Vec<Movie>) {
    let actors = vec![
        Actor::with_movies(1, "Ana", [10, 20, 30]),
        Actor::with_movies(2, "Bo", [10, 99]),
        Actor::with_movies(3, "Cy", [20, 10]),
    ];
    let movies = vec![
        Movie::new(10, "Alpha"),
        Movie::new(20, "Beta"),
        Movie::new(30, "Gamma"),
        Movie::new(40, "Delta"),
    ];
    (actors, movies)
}
