// benches/decode_bench.rs
//! Benchmarks for decoding and encoding property maps.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use notion_props::codec::{decode_properties, encode, DatabaseContext, PageContext};
use notion_props::DecodeOptions;
use serde_json::json;

fn create_sample_schema_json(num_properties: usize) -> Vec<u8> {
    let mut properties = serde_json::Map::new();

    for i in 0..num_properties {
        let prop_name = format!("Property_{}", i);
        let property = match i % 5 {
            0 => json!({
                "id": format!("prop_{}", i),
                "name": prop_name,
                "type": "number",
                "number": {"format": "number"}
            }),
            1 => json!({
                "id": format!("prop_{}", i),
                "name": prop_name,
                "type": "select",
                "select": {
                    "options": [
                        {"id": "opt1", "name": "Option 1", "color": "red"},
                        {"id": "opt2", "name": "Option 2", "color": "blue"}
                    ]
                }
            }),
            2 => json!({
                "id": format!("prop_{}", i),
                "name": prop_name,
                "type": "checkbox",
                "checkbox": {}
            }),
            3 => json!({
                "id": format!("prop_{}", i),
                "name": prop_name,
                "type": "rollup",
                "rollup": {
                    "relation_property_name": "Tasks",
                    "rollup_property_name": "Estimate",
                    "function": "sum"
                }
            }),
            _ => json!({
                "id": format!("prop_{}", i),
                "name": prop_name,
                "type": "rich_text",
                "rich_text": {}
            }),
        };
        properties.insert(prop_name, property);
    }

    serde_json::to_vec(&properties).unwrap()
}

fn create_sample_page_json(num_properties: usize, text_len: usize) -> Vec<u8> {
    let text = "x".repeat(text_len);
    let mut properties = serde_json::Map::new();

    for i in 0..num_properties {
        let prop_name = format!("Property_{}", i);
        let property = match i % 4 {
            0 => json!({
                "id": format!("prop_{}", i),
                "type": "rich_text",
                "rich_text": [{
                    "type": "text",
                    "text": {"content": text, "link": null},
                    "annotations": {"bold": false, "italic": false, "strikethrough": false,
                                    "underline": false, "code": false, "color": "default"},
                    "plain_text": text,
                    "href": null
                }]
            }),
            1 => json!({"id": format!("prop_{}", i), "type": "number", "number": i}),
            2 => json!({
                "id": format!("prop_{}", i),
                "type": "multi_select",
                "multi_select": [{"id": "a", "name": "alpha", "color": "green"}]
            }),
            _ => json!({
                "id": format!("prop_{}", i),
                "type": "date",
                "date": {"start": "2024-01-01", "end": null}
            }),
        };
        properties.insert(prop_name, property);
    }

    serde_json::to_vec(&properties).unwrap()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let property_counts = vec![(10, "small"), (100, "medium"), (1000, "large")];

    for (count, name) in property_counts {
        let schema = create_sample_schema_json(count);
        let page = create_sample_page_json(count, 200);

        group.bench_with_input(
            BenchmarkId::new("database_sequential", name),
            &schema,
            |b, bytes| {
                b.iter(|| {
                    decode_properties::<DatabaseContext>(
                        black_box(bytes),
                        &DecodeOptions::sequential(),
                    )
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("page_sequential", name), &page, |b, bytes| {
            b.iter(|| {
                decode_properties::<PageContext>(black_box(bytes), &DecodeOptions::sequential())
            });
        });

        group.bench_with_input(BenchmarkId::new("page_parallel", name), &page, |b, bytes| {
            b.iter(|| {
                decode_properties::<PageContext>(
                    black_box(bytes),
                    &DecodeOptions {
                        parallel_threshold: 1,
                    },
                )
            });
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for (count, name) in [(10, "small"), (100, "medium"), (1000, "large")] {
        let page = decode_properties::<PageContext>(
            &create_sample_page_json(count, 200),
            &DecodeOptions::default(),
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::new("page", name), &page, |b, page| {
            b.iter(|| encode(black_box(page)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
