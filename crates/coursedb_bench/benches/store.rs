use coursedb_bench::fill_store;
use coursedb_core::{report, CourseStore, Thresholds};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::tempdir;

fn bench_store(c: &mut Criterion) {
    let tmp = tempdir().unwrap();
    let store = CourseStore::open(tmp.path().join("bench.dat")).unwrap();
    fill_store(&store, 10_000).unwrap();
    let all = store.read_all().unwrap();
    let t = Thresholds::default();

    c.bench_function("read_all_10k", |b| b.iter(|| black_box(store.read_all().unwrap())));
    c.bench_function("find_by_code_last", |b| b.iter(|| black_box(store.find_by_code(10_000).unwrap())));
    c.bench_function("update_cost_at_mid", |b| b.iter(|| store.update_cost_at(black_box(5_000), 1.0).unwrap()));
    c.bench_function("sorted_by_name", |b| b.iter(|| black_box(report::sorted_by_name(all.clone()))));
    c.bench_function("classify", |b| b.iter(|| black_box(report::classify(&all, &t))));
}

criterion_group!(benches, bench_store);
criterion_main!(benches);
