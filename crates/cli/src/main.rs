use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use song_filter::{apply_filters, playlist_songs, FilterCriteria, Playlist};
use song_loader::{Song, SongCatalog};
use std::path::PathBuf;

mod render;

use render::Card;

/// Songbook - browse and filter a song catalog
#[derive(Parser)]
#[command(name = "songbook")]
#[command(about = "Filter a comma-separated song catalog by key, artist, year, tag and playlist", long_about = None)]
struct Cli {
    /// Path to the catalog file
    #[arg(short, long, env = "SONGBOOK_CATALOG", default_value = "songDB.csv")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List songs matching every given filter
    List {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List songs on a playlist
    Playlist {
        /// "8-track" for the 8-Track playlist, anything else for My Deck
        name: Playlist,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the detail card for one song
    Show {
        /// Position of the song in the catalog, starting at 1
        index: usize,
    },
}

/// Filter flags; each one left out places no constraint
#[derive(Args)]
struct FilterArgs {
    /// Exact musical key, e.g. "C" or "Am"
    #[arg(long)]
    key: Option<String>,

    /// Exact artist name
    #[arg(long)]
    artist: Option<String>,

    /// Exact year
    #[arg(long)]
    year: Option<String>,

    /// Exact value of the Em&a tag
    #[arg(long = "em-a")]
    em_a: Option<String>,

    /// Case-insensitive text to find in title or artist
    #[arg(short, long)]
    search: Option<String>,
}

impl FilterArgs {
    fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            key: self.key.unwrap_or_default(),
            artist: self.artist.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            em_a: self.em_a.unwrap_or_default(),
            search: self.search.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = SongCatalog::load_from_file(&cli.catalog)
        .with_context(|| format!("Failed to load song catalog {}", cli.catalog.display()))?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List { filters, format } => handle_list(&catalog, filters.into_criteria(), format)?,
        Commands::Playlist { name, format } => handle_playlist(&catalog, name, format)?,
        Commands::Show { index } => handle_show(&catalog, index)?,
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(catalog: &SongCatalog, criteria: FilterCriteria, format: OutputFormat) -> Result<()> {
    tracing::debug!("Filtering with {:?}", criteria);
    let songs = apply_filters(catalog.songs(), &criteria);
    print_songs(catalog, &songs, format)
}

/// Handle the 'playlist' command
fn handle_playlist(catalog: &SongCatalog, playlist: Playlist, format: OutputFormat) -> Result<()> {
    let songs = playlist_songs(catalog.songs(), playlist);
    print_songs(catalog, &songs, format)
}

/// Handle the 'show' command
fn handle_show(catalog: &SongCatalog, index: usize) -> Result<()> {
    let song = index
        .checked_sub(1)
        .and_then(|position| catalog.get(position))
        .ok_or_else(|| anyhow!("No song at position {} (catalog has {})", index, catalog.len()))?;

    Card::for_song(song).print();
    Ok(())
}

fn print_songs(catalog: &SongCatalog, songs: &[&Song], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => render::print_text(&numbered(catalog.songs(), songs)?),
        OutputFormat::Json => println!("{}", render::json(songs)?),
        OutputFormat::Html => print!("{}", render::html_table(songs)),
    }
    Ok(())
}

/// Pair each selected song with its position in `all`.
///
/// `selected` must be an in-order subsequence borrowed from `all`, which is
/// what the filter engine returns.
fn numbered<'a>(all: &'a [Song], selected: &[&'a Song]) -> Result<Vec<(usize, &'a Song)>> {
    let mut remaining = selected.iter().peekable();
    let mut out = Vec::with_capacity(selected.len());
    for (position, song) in all.iter().enumerate() {
        if remaining.next_if(|hit| std::ptr::eq(**hit, song)).is_some() {
            out.push((position, song));
        }
    }
    if remaining.peek().is_some() {
        return Err(anyhow!("Selected songs are not an ordered part of the catalog"));
    }
    Ok(out)
}
