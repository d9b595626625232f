//! 分組計算基準測試

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ppg_calc::PackingEngine;
use ppg_core::LineItem;

const COLOR_STYLES: [&str; 7] = [
    "RED - 12",
    "BLUE - 34",
    "NAVY - 9",
    "GREEN - 101",
    "WHITE - 55",
    "BLACK - 7",
    "PINK - 88",
];

const SIZES: [&str; 7] = ["6-12M", "12-18M", "18-24M", "2-3Y", "3-4Y", "5-6Y", "7-8Y"];

/// 產生固定種子的合成明細（不用隨機數，跑幾次都一樣）
fn synth_items(count: usize) -> Vec<LineItem> {
    (0..count)
        .map(|i| {
            LineItem::new(
                format!("45{:08}", i % 97),
                COLOR_STYLES[i % COLOR_STYLES.len()].to_string(),
                SIZES[(i * 3) % SIZES.len()].to_string(),
                ((i * 13) % 40) as u32,
            )
        })
        .collect()
}

fn bench_full_run(c: &mut Criterion) {
    let engine = PackingEngine::with_default_chart();

    for count in [500, 2_000, 10_000] {
        let items = synth_items(count);
        c.bench_function(&format!("packing_run_{}_items", count), |b| {
            b.iter(|| engine.run(black_box(&items)).unwrap())
        });
    }
}

criterion_group!(benches, bench_full_run);
criterion_main!(benches);
