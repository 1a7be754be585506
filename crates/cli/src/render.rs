//! Output formatting for song lists and the detail card.

use anyhow::Result;
use colored::Colorize;
use song_loader::Song;

/// Placeholder shown on the card for an empty column
const MISSING: &str = "–";

/// Render songs as the catalog table.
///
/// Columns: suit, title with the artist underneath, progression, key.
/// All cell text is escaped.
pub fn html_table(songs: &[&Song]) -> String {
    let mut out = String::from("<table id=\"song-table\">\n  <tbody>\n");
    for song in songs {
        out.push_str("    <tr>\n");
        out.push_str(&format!("      <td>{}</td>\n", escape_html(song.suit())));
        out.push_str(&format!(
            "      <td><strong>{}</strong><br><small>{}</small></td>\n",
            escape_html(song.title()),
            escape_html(song.artist())
        ));
        out.push_str(&format!("      <td>{}</td>\n", escape_html(song.progression())));
        out.push_str(&format!("      <td>{}</td>\n", escape_html(song.key())));
        out.push_str("    </tr>\n");
    }
    out.push_str("  </tbody>\n</table>\n");
    out
}

/// Songs as a JSON array, with the catalog's column names as keys
pub fn json(songs: &[&Song]) -> Result<String> {
    Ok(serde_json::to_string_pretty(songs)?)
}

/// Print one line per song: position, title, artist and key
pub fn print_text(songs: &[(usize, &Song)]) {
    if songs.is_empty() {
        println!("{}", "No songs match.".yellow());
        return;
    }
    for (position, song) in songs {
        let key = if song.key().is_empty() {
            String::new()
        } else {
            format!(" [{}]", song.key())
        };
        println!(
            "{:>4}. {} – {}{}",
            (position + 1).to_string().green(),
            song.title().bold(),
            song.artist(),
            key.cyan()
        );
    }
    println!("{}", format!("{} song(s)", songs.len()).dimmed());
}

/// The three regions of the detail card
#[derive(Debug, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub meta: String,
    pub details: String,
}

impl Card {
    pub fn for_song(song: &Song) -> Self {
        Self {
            title: format!("{} – {}", song.title(), song.artist()),
            meta: format!(
                "Key: {} | Em&A: {} | Time Signature: {}",
                or_missing(song.key()),
                or_missing(song.em_a()),
                or_missing(song.time_signature())
            ),
            details: song.notes().to_string(),
        }
    }

    pub fn print(&self) {
        println!("{}", self.title.bold().blue());
        println!("{}", self.meta);
        if !self.details.is_empty() {
            println!();
            println!("{}", self.details.italic());
        }
    }
}

fn or_missing(value: &str) -> &str {
    if value.is_empty() { MISSING } else { value }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
