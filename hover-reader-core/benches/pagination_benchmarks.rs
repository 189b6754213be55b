use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hover_reader_core::pagination::{advance, render};
use hover_reader_core::{Corpus, Direction, PagerState};
use std::hint::black_box;

fn build_corpus(lines: usize) -> Corpus {
    let text: String = (0..lines)
        .map(|i| format!("line {i} of a rather long book\n\n"))
        .collect();
    Corpus::from_text(&text)
}

fn bench_corpus_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus_from_text");
    for size in [1_000, 10_000, 100_000] {
        let text: String = (0..size).map(|i| format!("line {i}\n  \n")).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| Corpus::from_text(black_box(text)))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let corpus = build_corpus(100_000);
    let mut group = c.benchmark_group("render_page");
    for lines_per_page in [1, 2, 10, 50] {
        group.bench_with_input(
            BenchmarkId::from_parameter(lines_per_page),
            &lines_per_page,
            |b, &per_page| {
                let state = PagerState::new(corpus.len() / per_page / 2, Direction::Forward);
                b.iter(|| render(black_box(&state), corpus.lines(), per_page))
            },
        );
    }
    group.finish();
}

fn bench_advance_cycle(c: &mut Criterion) {
    c.bench_function("advance_full_cycle_1k_pages", |b| {
        b.iter(|| {
            let mut state = PagerState::default();
            for _ in 0..1_000 {
                state = advance(state, black_box(2_000), 2);
            }
            state
        })
    });
}

criterion_group!(benches, bench_corpus_build, bench_render, bench_advance_cycle);
criterion_main!(benches);
