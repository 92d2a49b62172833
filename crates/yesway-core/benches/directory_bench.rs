// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for directory mutations and the position lookups the
// UI performs on every click.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use yesway_core::config::StoreConfig;
use yesway_core::{Confirmation, DirectoryStore, NewClient, WorkerFields};

fn populated(services: usize) -> DirectoryStore {
    let mut store = DirectoryStore::with_sample_data(StoreConfig::default());
    for i in 0..services {
        store.quick_add_service("Demo", &format!("task-{i}"));
    }
    store
}

fn bench_create_clients(c: &mut Criterion) {
    c.bench_function("create_client (200 clients)", |b| {
        b.iter(|| {
            let mut store = DirectoryStore::new(StoreConfig::default());
            for i in 0..200 {
                let result = store.create_client(NewClient::named(format!("client-{i}")));
                assert!(result.is_ok());
            }
            black_box(store.clients().len())
        });
    });
}

fn bench_service_lookup(c: &mut Criterion) {
    let store = populated(1_000);

    c.bench_function("service_id_at (middle of 1000)", |b| {
        b.iter(|| {
            let id = store.service_id_at(black_box(500));
            assert!(id.is_ok());
        });
    });

    c.bench_function("dashboard_stats (1000 services)", |b| {
        b.iter(|| black_box(store.dashboard_stats()));
    });
}

fn bench_delete_and_add(c: &mut Criterion) {
    c.bench_function("delete first service then quick add", |b| {
        let mut store = populated(1_000);
        b.iter(|| {
            if let Ok(id) = store.service_id_at(0) {
                let removed = store.delete_service(id, Confirmation::Confirmed);
                assert!(removed.is_ok());
            }
            store.quick_add_service("Demo", "Remote Fix");
        });
    });
}

fn bench_add_workers(c: &mut Criterion) {
    c.bench_function("add_worker (100 workers)", |b| {
        b.iter(|| {
            let mut store = DirectoryStore::new(StoreConfig::default());
            for i in 0..100 {
                let result =
                    store.add_worker(WorkerFields::new(format!("worker-{i}"), "Kochi", "Available"));
                assert!(result.is_ok());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_create_clients,
    bench_service_lookup,
    bench_delete_and_add,
    bench_add_workers
);
criterion_main!(benches);
