//! Benchmarks for hierarchy building and treemap layout.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use salesmap_core::{Size, TreeNode};
use salesmap_layout::{Hierarchy, Tiling, TreemapLayout};

/// Roughly the shape of the sales dataset: consoles grouping a hundred games.
fn sales_like(groups: usize, per_group: usize) -> TreeNode {
    TreeNode::branch(
        "Video Game Sales",
        (0..groups)
            .map(|g| {
                TreeNode::branch(
                    &format!("console-{g}"),
                    (0..per_group)
                        .map(|i| {
                            let value = 1.0 + ((g * 31 + i * 17) % 80) as f64;
                            TreeNode::leaf(&format!("game-{g}-{i}"), &format!("console-{g}"), value)
                        })
                        .collect(),
                )
            })
            .collect(),
    )
}

fn bench_hierarchy_build(c: &mut Criterion) {
    let root = sales_like(18, 6);

    c.bench_function("hierarchy_build_100_leaves", |b| {
        b.iter(|| Hierarchy::build(black_box(&root)))
    });
}

fn bench_squarify_100(c: &mut Criterion) {
    let root = sales_like(18, 6);
    let layout = TreemapLayout::new(Size::new(800.0, 720.0)).padding_inner(2.0);

    c.bench_function("squarify_100_leaves", |b| {
        b.iter(|| layout.compute(black_box(&root)))
    });
}

fn bench_squarify_10k(c: &mut Criterion) {
    let root = sales_like(100, 100);
    let layout = TreemapLayout::new(Size::new(1920.0, 1080.0)).padding_inner(1.0);

    c.bench_function("squarify_10k_leaves", |b| {
        b.iter(|| layout.compute(black_box(&root)))
    });
}

fn bench_slice_and_dice_100(c: &mut Criterion) {
    let root = sales_like(18, 6);
    let layout = TreemapLayout::new(Size::new(800.0, 720.0))
        .padding_inner(2.0)
        .tiling(Tiling::SliceAndDice);

    c.bench_function("slice_and_dice_100_leaves", |b| {
        b.iter(|| layout.compute(black_box(&root)))
    });
}

criterion_group!(
    benches,
    bench_hierarchy_build,
    bench_squarify_100,
    bench_squarify_10k,
    bench_slice_and_dice_100,
);
criterion_main!(benches);
