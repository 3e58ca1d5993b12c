use criterion::{Criterion, black_box, criterion_group, criterion_main};
use within_core::prelude::*;

/// Zig-zag path that changes street every `run` edges
fn zigzag(edge_count: usize, run: usize) -> RouteData {
    let nodes = (0..=edge_count)
        .map(|i| {
            let step = i as f64 * 0.0005;
            let lon = if (i / run) % 2 == 0 { step } else { step + 0.0002 };
            (i as NodeId, within_core::route::NodeRecord { x: lon, y: step })
        })
        .collect();
    let edges = (0..edge_count)
        .map(|i| within_core::route::EdgeRecord {
            from: i as NodeId,
            to: i as NodeId + 1,
            length: 75.0,
            name: serde_json::Value::String(format!("Street {}", i / run)),
        })
        .collect();
    RouteData {
        graph_node_idx: (0..=edge_count as NodeId).collect(),
        edges,
        nodes,
    }
}

fn bench_geometry(c: &mut Criterion) {
    c.bench_function("great_circle_distance", |b| {
        b.iter(|| {
            great_circle_distance(
                black_box(40.750504),
                black_box(-73.993438),
                black_box(40.7048),
                black_box(-74.0173),
            )
        });
    });
    c.bench_function("cardinal_direction", |b| {
        b.iter(|| cardinal_direction(black_box(292.0)));
    });
}

fn bench_route(c: &mut Criterion) {
    let data = zigzag(2_000, 8);
    c.bench_function("route_from_data_2000_edges", |b| {
        b.iter(|| Route::try_from(black_box(data.clone())).unwrap());
    });
}

criterion_group!(benches, bench_geometry, bench_route);
criterion_main!(benches);
