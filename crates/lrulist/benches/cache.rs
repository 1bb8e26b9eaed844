use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lrulist::LruList;

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_hit_1k", |b| {
        let cache = LruList::new(1000).unwrap();
        for i in 0..1000u64 {
            cache.set(i, vec![b'x'; 64]).unwrap();
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 1000)).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_set_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("set_update_1k", |b| {
        let cache = LruList::new(1000).unwrap();
        for i in 0..1000u64 {
            cache.set(i, i).unwrap();
        }

        let mut counter = 0u64;
        b.iter(|| {
            cache.set(black_box(counter % 1000), counter).unwrap();
            counter += 1;
        });
    });

    group.finish();
}

fn bench_set_evict(c: &mut Criterion) {
    let mut group = c.benchmark_group("evict");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("set_new_key_full_cache", |b| {
        let cache = LruList::with_evict(100, |v: &u64| {
            black_box(v);
            Ok(())
        })
        .unwrap();

        // Every iteration inserts an unseen key into a full cache
        let mut counter = 0u64;
        b.iter(|| {
            cache.set(counter, counter).unwrap();
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_get_hit, bench_set_update, bench_set_evict);
criterion_main!(benches);
