#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use rand::{Rng, RngCore, thread_rng};
use symmetric_merkle_tree::{MerkleProof, MerkleTree, Value, build_root};

fn random_leaves(count: usize) -> Vec<Value> {
    let mut rng = thread_rng();
    (0..count)
        .map(|_| {
            let mut v = [0u8; 32];
            rng.fill_bytes(&mut v);
            v
        })
        .collect()
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("build root");
        let inputs = [1_000usize, 10_000, 100_000];
        for input in inputs.iter() {
            let leaves = random_leaves(*input);
            group.bench_with_input(BenchmarkId::new("leaves", input), &leaves, |b, leaves| {
                b.iter(|| build_root(leaves).unwrap());
            });
        }
    }

    c.bench_function("generate proof", |b| {
        let leaves = random_leaves(100_000);
        let tree = MerkleTree::build(&leaves).unwrap();
        let mut rng = thread_rng();
        b.iter(|| {
            let index = rng.gen_range(0..leaves.len());
            tree.proof(index).unwrap()
        });
    });

    c.bench_function("verify proof", |b| {
        let leaves = random_leaves(100_000);
        let tree = MerkleTree::build(&leaves).unwrap();
        let root = tree.root();
        let mut rng = thread_rng();
        let proofs: Vec<(usize, MerkleProof)> = (0..1_000)
            .map(|_| {
                let index = rng.gen_range(0..leaves.len());
                (index, tree.proof(index).unwrap())
            })
            .collect();
        b.iter(|| {
            let (index, proof) = &proofs[rng.gen_range(0..proofs.len())];
            proof.verify(&leaves[*index], &root)
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench
);
criterion_main!(benches);
