//! Benchmark for the linked lists vs standard VecDeque and LinkedList.

use classic_structures::list::{DoublyLinkedList, SinglyLinkedList};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::{LinkedList, VecDeque};
use std::hint::black_box;

// =============================================================================
// insert_tail / insert_head Benchmark
// =============================================================================

fn benchmark_insert_ends(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert_ends");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("DoublyLinkedList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = DoublyLinkedList::new();
                    for index in 0..size {
                        if index % 2 == 0 {
                            list.insert_tail(black_box(index));
                        } else {
                            list.insert_head(black_box(index));
                        }
                    }
                    black_box(list)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("SinglyLinkedList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = SinglyLinkedList::new();
                    for index in 0..size {
                        list.insert_head(black_box(index));
                    }
                    black_box(list)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("std::LinkedList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = LinkedList::new();
                    for index in 0..size {
                        if index % 2 == 0 {
                            list.push_back(black_box(index));
                        } else {
                            list.push_front(black_box(index));
                        }
                    }
                    black_box(list)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut deque = VecDeque::new();
                    for index in 0..size {
                        if index % 2 == 0 {
                            deque.push_back(black_box(index));
                        } else {
                            deque.push_front(black_box(index));
                        }
                    }
                    black_box(deque)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// delete_value Benchmark
// =============================================================================

fn benchmark_delete_value(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("delete_value");

    for size in [100, 1000] {
        let doubly: DoublyLinkedList<i32> = (0..size).collect();
        let deque: VecDeque<i32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("DoublyLinkedList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = doubly.clone();
                    for value in (0..size).step_by(2) {
                        black_box(list.delete_value(&value));
                    }
                    black_box(list)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut deque = deque.clone();
                    for value in (0..size).step_by(2) {
                        if let Some(position) = deque.iter().position(|element| *element == value) {
                            black_box(deque.remove(position));
                        }
                    }
                    black_box(deque)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Iteration Benchmark
// =============================================================================

fn benchmark_iter_sum(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iter_sum");

    for size in [1000, 10000] {
        let doubly: DoublyLinkedList<i64> = (0..size).collect();
        let singly: SinglyLinkedList<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("DoublyLinkedList", size), &doubly, |bencher, list| {
            bencher.iter(|| black_box(list.iter().sum::<i64>()));
        });

        group.bench_with_input(BenchmarkId::new("SinglyLinkedList", size), &singly, |bencher, list| {
            bencher.iter(|| black_box(list.iter().sum::<i64>()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert_ends,
    benchmark_delete_value,
    benchmark_iter_sum
);
criterion_main!(benches);
