//! Benchmarks for the filter engine
//!
//! Run with: cargo bench --package song-filter
//!
//! Uses a synthetic catalog so no data file is needed.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use song_filter::{apply_filters, get_playlist_songs, FilterCriteria};
use song_loader::Song;

const KEYS: [&str; 6] = ["C", "G", "D", "A", "E", "F"];

fn synthetic_catalog(size: usize) -> Vec<Song> {
    (0..size)
        .map(|i| {
            let mut song = Song::default();
            song.set_field("Title", format!("Song {}", i));
            song.set_field("Artist", format!("Artist {}", i % 50));
            song.set_field("Key", KEYS[i % KEYS.len()]);
            song.set_field("Date", (1960 + i % 40).to_string());
            if i % 3 == 0 {
                song.set_field("Playlists", "8-Track");
            } else if i % 3 == 1 {
                song.set_field("Playlists", "My Deck");
            }
            song
        })
        .collect()
}

fn bench_apply_filters(c: &mut Criterion) {
    let songs = synthetic_catalog(10_000);
    let criteria = FilterCriteria {
        key: "C".to_string(),
        search: "artist 1".to_string(),
        ..Default::default()
    };

    c.bench_function("apply_filters", |b| {
        b.iter(|| {
            let result = apply_filters(black_box(&songs), black_box(&criteria));
            black_box(result)
        })
    });
}

fn bench_playlist_songs(c: &mut Criterion) {
    let songs = synthetic_catalog(10_000);

    c.bench_function("get_playlist_songs", |b| {
        b.iter(|| {
            let result = get_playlist_songs(black_box(&songs), black_box("8-track"));
            black_box(result)
        })
    });
}

criterion_group!(benches, bench_apply_filters, bench_playlist_songs);
criterion_main!(benches);
