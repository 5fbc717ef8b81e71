//! Benchmarks for building and serializing trees.
//!
//! Run with: `cargo bench`

#![allow(clippy::unwrap_used)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use htmlgen::{Document, DocumentError, Element, Node, SerializeOptions};

/// A table with `rows` rows of five cells each, inside html and body.
fn build_table(doc: &Document, rows: usize) -> Result<Element<'_>, DocumentError> {
    let table = doc.element("table")?.with_attribute("class", "data")?;
    for row in 0..rows {
        let tr = doc.element("tr")?;
        for cell in 0..5 {
            let td = doc
                .element_with_text("td", &format!("r{row} c{cell} & more"))?
                .with_attribute("title", &format!("cell \"{cell}\""))?;
            tr.add(td)?;
        }
        table.add(tr)?;
    }
    let body = doc.element_with("body", [table])?;
    doc.element_with("html", [body])
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_100_rows", |b| {
        b.iter(|| {
            let doc = Document::new();
            let html = build_table(&doc, black_box(100)).unwrap();
            black_box(html.has_elements());
        });
    });
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    for rows in [10, 100, 1000] {
        let doc = Document::new();
        let html = build_table(&doc, rows).unwrap();
        let size = html.serialize().len();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("formatted", rows), &html, |b, html| {
            b.iter(|| black_box(html.serialize()));
        });
        group.bench_with_input(BenchmarkId::new("compact", rows), &html, |b, html| {
            b.iter(|| black_box(html.serialize_with(&SerializeOptions::NO_FORMATTING)));
        });
    }
    group.finish();
}

fn bench_descendants(c: &mut Criterion) {
    let doc = Document::new();
    let html = build_table(&doc, 1000).unwrap();
    c.bench_function("descendants_by_tag", |b| {
        b.iter(|| black_box(html.descendants_by_tag("td").count()));
    });
}

criterion_group!(benches, bench_build, bench_serialize, bench_descendants);
criterion_main!(benches);
