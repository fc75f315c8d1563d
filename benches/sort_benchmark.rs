//! Performance benchmarks for file-sorter
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use file_sorter::core::sort_directory;
use file_sorter::fs::ExtensionKey;
use std::path::Path;
use tempfile::TempDir;

const EXTENSIONS: [&str; 6] = ["txt", "JPG", "rs", "tar.gz", "md", ""];

/// Populate `dir` with `count` files spread over a few subfolders and extensions
fn create_tree(dir: &Path, count: usize, size: usize) {
    let payload: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();

    for i in 0..count {
        let sub = dir.join(format!("d{}", i % 8));
        std::fs::create_dir_all(&sub).unwrap();

        let ext = EXTENSIONS[i % EXTENSIONS.len()];
        let name = if ext.is_empty() {
            format!("file_{}", i)
        } else {
            format!("file_{}.{}", i, ext)
        };
        std::fs::write(sub.join(name), &payload).unwrap();
    }
}

fn bench_sort_small_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_small_files");

    for count in [100usize, 1000].iter() {
        let src_dir = TempDir::new().unwrap();
        create_tree(src_dir.path(), *count, 1024);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| {
                let dst_dir = TempDir::new().unwrap();
                let _ = black_box(sort_directory(src_dir.path(), dst_dir.path()));
            });
        });
    }

    group.finish();
}

fn bench_extension_key(c: &mut Criterion) {
    let paths: Vec<_> = (0..1000)
        .map(|i| format!("/data/set/file_{}.{}", i, EXTENSIONS[i % EXTENSIONS.len()]))
        .collect();

    c.bench_function("extension_key_1000", |b| {
        b.iter(|| {
            for p in &paths {
                black_box(ExtensionKey::from_path(Path::new(p)));
            }
        });
    });
}

criterion_group!(benches, bench_sort_small_files, bench_extension_key);
criterion_main!(benches);
