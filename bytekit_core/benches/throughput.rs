use bytekit_core::codec::base64;
use bytekit_core::{Md5, Sha1};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_digests(c: &mut Criterion) {
    let small = vec![0xa5u8; 4 * 1024];
    let large = vec![0xa5u8; 1024 * 1024];

    let mut group = c.benchmark_group("digest");

    group.bench_function("md5_4k", |b| b.iter(|| Md5::new(&small)));
    group.bench_function("md5_1mb", |b| b.iter(|| Md5::new(&large)));
    group.bench_function("sha1_4k", |b| b.iter(|| Sha1::new(&small)));
    group.bench_function("sha1_1mb", |b| b.iter(|| Sha1::new(&large)));

    group.finish();
}

fn bench_base64(c: &mut Criterion) {
    let raw = vec![0x5au8; 1024 * 1024];
    let encoded = base64::encode(&raw);

    let mut group = c.benchmark_group("base64");

    group.bench_function("encode_1mb", |b| b.iter(|| base64::encode(&raw)));
    group.bench_function("decode_1mb", |b| b.iter(|| base64::decode(&encoded).unwrap()));

    group.finish();
}

criterion_group!(throughput, bench_digests, bench_base64);
criterion_main!(throughput);
