use branca_core::TokenCodec;

fn make_payload(size: usize) -> Vec<u8> {
    (0..size)
        .map(|i| (i.wrapping_mul(31) ^ (i >> 5)) as u8)
        .collect()
}

#[divan::bench(args = [64, 1024, 65536])]
fn bench_encode(bencher: divan::Bencher, size: usize) {
    let codec = TokenCodec::new(&[0x42u8; 32]).unwrap();
    let payload = make_payload(size);
    bencher
        .counter(divan::counter::BytesCount::new(size))
        .bench(|| codec.encode(divan::black_box(&payload)).unwrap());
}

#[divan::bench(args = [64, 1024, 65536])]
fn bench_decode(bencher: divan::Bencher, size: usize) {
    let codec = TokenCodec::new(&[0x42u8; 32]).unwrap();
    let token = codec.encode(&make_payload(size)).unwrap();
    bencher
        .counter(divan::counter::BytesCount::new(size))
        .bench(|| codec.decode(divan::black_box(&token)).unwrap());
}

fn main() {
    divan::main();
}
