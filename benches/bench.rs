use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

use basic_collections::collections::binary_tree::BinarySearchTree;
use basic_collections::collections::linked::{DoublyLinkedList, SinglyLinkedList};
use basic_collections::collections::stack::Stack;

/// Produces `count` values in a fixed, shuffled order so that the tree built from them isn't a
/// single chain.
fn scattered(count: u32) -> impl Iterator<Item = u32> {
    // Stepping by a prime coprime to the modulus visits every value once.
    let modulus = count.max(1);
    (0..count).map(move |i| (i as u64 * 7919 % modulus as u64) as u32)
}

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_search_tree");

    for size in [127, 1023, 8191] {
        let tree = BinarySearchTree::from_iter(scattered(size));

        group.bench_with_input(BenchmarkId::new("insert", size), &size, |b, &size| {
            b.iter(|| BinarySearchTree::from_iter(black_box(scattered(size))))
        });
        group.bench_with_input(BenchmarkId::new("find", size), &tree, |b, tree| {
            b.iter(|| black_box(tree.find(&black_box(size / 3)).is_some()))
        });
        group.bench_with_input(BenchmarkId::new("iter", size), &tree, |b, tree| {
            b.iter(|| tree.iter().copied().sum::<u32>())
        });
        group.bench_with_input(BenchmarkId::new("remove", size), &tree, |b, tree| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| black_box(tree.remove(&(size / 2))),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked");

    for size in [64, 1024] {
        group.bench_with_input(BenchmarkId::new("singly_push_back", size), &size, |b, &size| {
            b.iter(|| SinglyLinkedList::from_iter(0..black_box(size)))
        });
        group.bench_with_input(BenchmarkId::new("doubly_push_back", size), &size, |b, &size| {
            b.iter(|| DoublyLinkedList::from_iter(0..black_box(size)))
        });

        let singly = SinglyLinkedList::from_iter(0..size);
        let doubly = DoublyLinkedList::from_iter(0..size);
        group.bench_with_input(BenchmarkId::new("singly_get_back", size), &singly, |b, list| {
            b.iter(|| *list.get(black_box(size - 1)))
        });
        group.bench_with_input(BenchmarkId::new("doubly_get_back", size), &doubly, |b, list| {
            b.iter(|| *list.get(black_box(size - 1)))
        });
    }

    group.bench_function("stack_push_pop", |b| {
        b.iter(|| {
            let mut stack = Stack::new();
            for i in 0..black_box(256) {
                stack.push(i);
            }
            while stack.pop().is_some() {}
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tree, bench_lists);
criterion_main!(benches);
