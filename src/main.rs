use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use castgraph::dot::write_dot;
use castgraph::ingest::{load_actors_from_path, load_movies_from_path};
use castgraph::{build_graph, Actor, BuildStats, GraphConfig, Movie};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "castgraph", about = "Movie co-occurrence graphs from shared actors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct Inputs {
    /// Actor dataset (`name.basics.tsv` layout).
    actors: PathBuf,
    /// Title dataset (`title.basics.tsv` layout).
    movies: PathBuf,
    /// Maximum number of actor records to read.
    #[arg(long, default_value_t = GraphConfig::DEFAULT_MAX_ACTORS)]
    max_actors: usize,
    /// Maximum number of movies to keep.
    #[arg(long, default_value_t = GraphConfig::DEFAULT_MAX_MOVIES)]
    max_movies: usize,
}

impl Inputs {
    fn config(&self) -> GraphConfig {
        GraphConfig {
            max_actors: self.max_actors,
            max_movies: self.max_movies,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the graph and write it as DOT.
    Build {
        #[command(flatten)]
        inputs: Inputs,
        /// Output file.
        #[arg(long, short, default_value = "input.dot")]
        output: PathBuf,
    },
    /// Build the graph and print summary counts.
    Stats {
        #[command(flatten)]
        inputs: Inputs,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("castgraph=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { inputs, output } => run_build(&inputs, &output)?,
        Commands::Stats { inputs } => run_stats(&inputs)?,
    }

    Ok(())
}

fn load_and_build(inputs: &Inputs) -> Result<(Vec<Actor>, Vec<Movie>, BuildStats)> {
    let config = inputs.config();

    let actors = load_actors_from_path(&inputs.actors, config.max_actors).with_context(|| {
        format!("failed to load actors from {}", inputs.actors.display())
    })?;
    let mut movies = load_movies_from_path(&inputs.movies, config.max_movies).with_context(|| {
        format!("failed to load movies from {}", inputs.movies.display())
    })?;
    tracing::info!(actors = actors.len(), movies = movies.len(), "datasets loaded");

    let stats = build_graph(&actors, &mut movies);
    tracing::info!(%stats, "graph built");
    Ok((actors, movies, stats))
}

fn run_build(inputs: &Inputs, output: &Path) -> Result<()> {
    let (_, movies, _) = load_and_build(inputs)?;

    let file = File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    write_dot(&mut writer, &movies)
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(path = %output.display(), "graph written");
    Ok(())
}

fn run_stats(inputs: &Inputs) -> Result<()> {
    let (actors, movies, stats) = load_and_build(inputs)?;

    let linked = movies.iter().filter(|movie| movie.degree() > 0).count();
    let tallest = movies
        .iter()
        .filter_map(|movie| movie.neighbors().height())
        .max();

    println!("actors\t{}", actors.len());
    println!("movies\t{}", movies.len());
    println!("linked_movies\t{}", linked);
    println!("neighbor_entries\t{}", stats.edges_inserted);
    println!("unresolved_pairs\t{}", stats.unresolved_pairs);
    println!("dropped_entries\t{}", stats.dropped_inserts);
    match tallest {
        Some(height) => println!("max_neighbor_tree_height\t{}", height),
        None => println!("max_neighbor_tree_height\t-"),
    }

    Ok(())
}
