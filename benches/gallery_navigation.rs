// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery operations.
//!
//! Measures the performance of:
//! - Catalog parsing (TOML and JSON-encoded image lists)
//! - Opening an item in the modal
//! - Stepping through a large image set

use criterion::{criterion_group, criterion_main, Criterion};
use kiln_gallery::catalog::{Catalog, GalleryItem};
use kiln_gallery::ui::gallery_modal::{Direction, ModalState};
use std::hint::black_box;

fn sample_catalog_source(items: usize, images_per_item: usize) -> String {
    let mut source = String::from("[gallery]\ntitle = \"Bench\"\n");
    for item in 0..items {
        let images: Vec<String> = (0..images_per_item)
            .map(|image| format!("\"item{item}/{image}.jpg\""))
            .collect();
        source.push_str(&format!(
            "\n[[items]]\ntitle = \"Piece {item}\"\nimages = [{}]\n",
            images.join(", ")
        ));
    }
    source
}

fn bench_parse_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let source = sample_catalog_source(200, 8);

    group.bench_function("parse_catalog", |b| {
        b.iter(|| {
            let catalog = Catalog::parse(black_box(&source), None);
            black_box(catalog)
        });
    });

    group.finish();
}

fn bench_open_and_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let item = GalleryItem::new("Bench", "")
        .with_images((0..500).map(|i| format!("image{i}.jpg")));

    group.bench_function("open_item", |b| {
        b.iter(|| {
            let mut modal = ModalState::new();
            modal.open(black_box(&item));
            black_box(modal.current_index())
        });
    });

    let mut modal = ModalState::new();
    modal.open(&item);

    group.bench_function("advance_full_cycle", |b| {
        b.iter(|| {
            for _ in 0..item.images.len() {
                modal.advance(Direction::Next);
            }
            modal.advance(Direction::Previous);
            black_box(modal.main_image_src().len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_catalog, bench_open_and_advance);
criterion_main!(benches);
