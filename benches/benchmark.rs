use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use utfconv::{convert, UtfFormat};

const REPEAT: usize = 4096;

// BOM-carrying UTF-8 corpora weighted toward each encoder branch
fn corpus(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(text.repeat(REPEAT).as_bytes());
    bytes
}

const TARGETS: [(&str, UtfFormat); 3] = [
    ("utf8", UtfFormat::Utf8),
    ("utf16", UtfFormat::Utf16),
    ("utf32", UtfFormat::Utf32),
];

fn conversions(c: &mut Criterion) {
    let corpora = [
        ("ascii", corpus("file conversion ")),
        ("bmp", corpus("€αβγ汉字")),
        ("astral", corpus("𝄞𐍈😀")),
    ];
    for (name, input) in corpora {
        let mut group = c.benchmark_group(name);
        group.throughput(Throughput::Bytes(input.len() as u64));
        for (target_name, target) in TARGETS {
            group.bench_with_input(
                BenchmarkId::from_parameter(target_name),
                &input,
                |b, input| b.iter(|| convert(input, target)),
            );
        }
        group.finish();
    }
}

criterion_group!(benches, conversions);

criterion_main!(benches);
