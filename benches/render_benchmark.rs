//! Performance benchmarks for feed rendering
//!
//! Measures card sizing and full-page rendering for different feed sizes.
//! Run with: cargo bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use postdeck::adapters::{InMemoryStore, MockHttpClient};
use postdeck::api::ApiClient;
use postdeck::app::{App, AppMessage};
use postdeck::models::Post;
use postdeck::ui::{self, card_height, wrapped_line_count};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Generate posts with content of varying length
fn generate_posts(count: usize) -> Vec<Post> {
    (0..count)
        .map(|i| {
            Post::new(
                i as i64,
                format!("Post number {}", i + 1),
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(i % 7 + 1),
                "Jane Doe",
                "2024-01-01",
            )
        })
        .collect()
}

fn bench_wrapped_line_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrapped_line_count");
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(40);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for width in [20u16, 60, 120] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| black_box(wrapped_line_count(black_box(&text), width)))
        });
    }
    group.finish();
}

fn bench_card_height(c: &mut Criterion) {
    let posts = generate_posts(50);
    c.bench_function("card_height_50_posts", |b| {
        b.iter(|| {
            let total: u32 = posts.iter().map(|p| card_height(p, 80) as u32).sum();
            black_box(total)
        })
    });
}

fn bench_full_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_render");

    for count in [1usize, 10, 50] {
        let api = ApiClient::new("http://bench/api", Arc::new(MockHttpClient::new()));
        let mut app = App::new(api, Box::new(InMemoryStore::new()));
        app.handle_message(AppMessage::PostsResolved(Ok(generate_posts(count))));
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                terminal.draw(|frame| ui::render(frame, &mut app)).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_wrapped_line_count,
    bench_card_height,
    bench_full_render
);
criterion_main!(benches);
