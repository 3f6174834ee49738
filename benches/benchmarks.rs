//! Performance benchmarks for limb

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use limb::{Walker, WalkerConfig};
use std::convert::Infallible;
use std::fs;
use tempfile::TempDir;

/// Build a tree of `dirs` directories, each holding `files_per_dir` files
/// split between matching and non-matching extensions.
fn create_tree(dirs: usize, files_per_dir: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("tree");
    fs::create_dir(&root).unwrap();

    for d in 0..dirs {
        let sub = root.join(format!("dir_{}", d));
        fs::create_dir(&sub).unwrap();
        for f in 0..files_per_dir {
            let ext = if f % 2 == 0 { "txt" } else { "log" };
            fs::write(sub.join(format!("file_{}.{}", f, ext)), "content").unwrap();
        }
    }

    dir
}

fn count_walk(walker: &Walker, root: &std::path::Path) -> (usize, usize) {
    let mut leaves = 0;
    let mut dirs = 0;
    walker.walk(
        root,
        |_| leaves += 1,
        |_| {
            dirs += 1;
            Ok::<_, Infallible>(())
        },
    );
    (leaves, dirs)
}

fn bench_walk(c: &mut Criterion) {
    let walker = Walker::new(&WalkerConfig {
        extensions: vec!["txt".to_string()],
        max_depth: 4,
        ..Default::default()
    });

    let mut group = c.benchmark_group("walk");

    let small = create_tree(5, 10);
    group.bench_function("small_tree_50_files", |b| {
        b.iter(|| count_walk(&walker, black_box(&small.path().join("tree"))))
    });

    let medium = create_tree(20, 50);
    group.bench_function("medium_tree_1000_files", |b| {
        b.iter(|| count_walk(&walker, black_box(&medium.path().join("tree"))))
    });

    let large = create_tree(50, 100);
    group.bench_function("large_tree_5000_files", |b| {
        b.iter(|| count_walk(&walker, black_box(&large.path().join("tree"))))
    });

    group.finish();
}

fn bench_truncated_walk(c: &mut Criterion) {
    let tree = create_tree(50, 100);
    let root = tree.path().join("tree");

    let walker = Walker::new(&WalkerConfig {
        extensions: vec!["txt".to_string()],
        max_depth: 0,
        ..Default::default()
    });

    let mut group = c.benchmark_group("truncated_walk");
    group.bench_function("depth_zero_over_large_tree", |b| {
        b.iter(|| count_walk(&walker, black_box(&root)))
    });
    group.finish();
}

fn bench_walker_construction(c: &mut Criterion) {
    let config = WalkerConfig {
        extensions: vec!["txt".to_string(), "md".to_string(), "rs".to_string()],
        ignore_names: vec!["node_modules".to_string(), "target".to_string()],
        include_dot_entries: false,
        max_depth: 10,
    };

    c.bench_function("walker_construction", |b| {
        b.iter(|| Walker::new(black_box(&config)))
    });
}

criterion_group!(
    benches,
    bench_walk,
    bench_truncated_walk,
    bench_walker_construction,
);
criterion_main!(benches);
