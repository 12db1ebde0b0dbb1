use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use five_card_trick::hand::Hand;
use five_card_trick::trick::{decode, encode};

fn bench_trick(c: &mut Criterion) {
    let hand: Hand = "Ac 5h Jd Qc Ks".parse().expect("valid hand");
    let encoding = encode(&hand).expect("encodes");

    let mut g = c.benchmark_group("trick");
    g.bench_function("encode", |b| b.iter(|| encode(black_box(&hand))));
    g.bench_function("decode", |b| b.iter(|| decode(black_box(&encoding.visible))));
    g.finish();
}

criterion_group!(benches, bench_trick);
criterion_main!(benches);
