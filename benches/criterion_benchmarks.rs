use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use idnconv::punycode;
use idnconv::{ToAsciiOptions, domain_to_ascii, domain_to_unicode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Script blocks used to build labels: (first code point, block size).
const BLOCKS: &[(u32, u32)] = &[
    (0x00E0, 0x20),  // Latin-1 letters
    (0x0430, 0x20),  // Cyrillic
    (0x3041, 0x50),  // Hiragana
    (0x4E00, 0x2000), // CJK
];

fn gen_label(rng: &mut StdRng, len: usize, ascii_ratio: f64) -> String {
    (0..len)
        .map(|_| {
            if rng.random_bool(ascii_ratio) {
                char::from(rng.random_range(b'a'..=b'z'))
            } else {
                let (start, size) = BLOCKS[rng.random_range(0..BLOCKS.len())];
                char::from_u32(start + rng.random_range(0..size)).unwrap_or('ü')
            }
        })
        .collect()
}

fn gen_domains(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let labels = rng.random_range(1..4);
            let mut parts: Vec<String> = (0..labels)
                .map(|_| {
                    let len = rng.random_range(3..20);
                    gen_label(&mut rng, len, 0.5)
                })
                .collect();
            parts.push("com".to_string());
            parts.join(".")
        })
        .collect()
}

fn bench_label_codec(c: &mut Criterion) {
    let mut g = c.benchmark_group("label_codec");
    let mut rng = StdRng::seed_from_u64(7);
    for &len in &[8usize, 32, 63, 256] {
        let label: Vec<char> = gen_label(&mut rng, len, 0.3).chars().collect();
        let encoded = punycode::encode(&label).unwrap();
        g.throughput(Throughput::Elements(len as u64));

        g.bench_with_input(BenchmarkId::new("encode", len), &label, |b, label| {
            b.iter(|| punycode::encode(black_box(label)).unwrap())
        });
        g.bench_with_input(BenchmarkId::new("decode", len), &encoded, |b, encoded| {
            b.iter(|| punycode::decode(black_box(encoded)).unwrap())
        });
    }
    g.finish();
}

fn bench_domains(c: &mut Criterion) {
    let domains = gen_domains(1000, 42);
    let ace: Vec<String> = domains.iter().map(|d| domain_to_ascii(d).unwrap()).collect();

    let mut g = c.benchmark_group("domains");
    g.throughput(Throughput::Elements(domains.len() as u64));
    g.bench_function("to_ascii", |b| {
        b.iter(|| {
            for d in &domains {
                black_box(domain_to_ascii(black_box(d)).unwrap());
            }
        })
    });
    g.bench_function("to_unicode", |b| {
        b.iter(|| {
            for d in &ace {
                black_box(domain_to_unicode(black_box(d)).unwrap());
            }
        })
    });
    g.bench_function("to_ascii_batch", |b| {
        let opts = ToAsciiOptions::default();
        b.iter(|| black_box(idnconv::idna::domains_to_ascii(black_box(&domains), &opts)))
    });
    g.finish();
}

criterion_group!(benches, bench_label_codec, bench_domains);
criterion_main!(benches);
