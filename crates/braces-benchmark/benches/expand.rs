use std::hint::black_box;

use braces_syntax::{ExpandFlags, ParseFlags};
use codspeed_criterion_compat::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn benchmark_expand(c: &mut Criterion) {
    let inputs = [
        ("Literal", "abcdefg"),
        ("Alternate", "{abc,def,ghi}"),
        ("Mixed", "aaa{abc,def,ghi}bbb"),
        ("CharRange:[0-9]", "{0..9}"),
        ("CharRange:[a-z]", "{a..z}"),
        ("CharRange:[A-Z]", "{A..Z}"),
        ("IntRange:10", "{1..10}"),
        ("IntRange:100", "{1..100}"),
        ("Product", "{a..z}{0..9}{,x,y}"),
    ];

    let mut group = c.benchmark_group("Expand Benchmark");

    for (name, input) in inputs {
        let tree = match braces_parse::parse(input, ParseFlags::empty()) {
            Ok(tree) => tree,
            Err(err) => panic!("{input}: {err}"),
        };

        let mut buffer = Vec::new();
        group.bench_with_input(BenchmarkId::new("walk", name), &tree, |b, tree| {
            b.iter(|| {
                braces_expand::walk(tree, ExpandFlags::empty(), &mut buffer, |bytes| {
                    black_box(bytes);
                });
            });
        });
        group.bench_with_input(BenchmarkId::new("collect", name), &tree, |b, tree| {
            b.iter(|| black_box(braces_expand::expand(tree, ExpandFlags::empty())));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_expand);
criterion_main!(benches);
