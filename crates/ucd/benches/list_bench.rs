use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ucd::{list, parse_line, Query};

/// Builds a synthetic UnicodeData.txt with `records` lines.
fn synthetic_ucd(records: u32) -> String {
    let words = ["LATIN", "CAPITAL", "SMALL", "LETTER", "SIGN", "MARK", "CAT", "FACE"];
    let mut data = String::new();
    for cp in 0..records {
        let a = words[(cp % 8) as usize];
        let b = words[(cp / 8 % 8) as usize];
        data.push_str(&format!("{cp:04X};{a} {b}-WORD;Lu;0;L;;;;;N;;;;;\n"));
    }
    data
}

fn bench_parse_line(c: &mut Criterion) {
    let line = "0027;APOSTROPHE;Po;0;ON;;;;;N;APOSTROPHE-QUOTE;;;";
    c.bench_function("parse_line_with_alias", |b| {
        b.iter(|| parse_line(black_box(line)).expect("parse"))
    });
}

fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");

    for records in [1_000u32, 10_000, 40_000] {
        let data = synthetic_ucd(records);
        let query = Query::new(["cat", "sign"]);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_function(format!("records_{records}"), |b| {
            b.iter(|| {
                let mut sink = std::io::sink();
                list(black_box(data.as_bytes()), &query, &mut sink).expect("list")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_line, bench_list);
criterion_main!(benches);
