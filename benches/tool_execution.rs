//! Tool Execution Performance Benchmarks
//!
//! Measures registry dispatch overhead, standard tool execution and batched
//! concurrent dispatch.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::json;
use std::time::Duration;
use tokio::runtime::Runtime;
use toolgate_core::{ToolArgs, ToolCall};
use toolgate_testing::MockTool;
use toolgate_tools::standard::math::evaluate;
use toolgate_tools::{InMemoryToolRegistry, ToolRegistry, register_standard_tools};

fn registry_with_mocks(count: usize) -> InMemoryToolRegistry {
    let registry = InMemoryToolRegistry::new();
    for i in 0..count {
        registry.register_descriptor(
            MockTool::new(format!("tool{i}"))
                .with_default_response(format!("response{i}"))
                .descriptor(),
        );
    }
    registry
}

/// Benchmark registry lookup and dispatch at different registry sizes
fn bench_tool_registry(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("tool_registry");

    group.throughput(Throughput::Elements(1));
    group.sample_size(1000);
    group.measurement_time(Duration::from_secs(10));

    for (name, size) in [("small_3_tools", 3), ("medium_20_tools", 20), ("large_100_tools", 100)] {
        let registry = registry_with_mocks(size);
        group.bench_with_input(
            BenchmarkId::new("registry_execute", name),
            &registry,
            |b, registry| {
                b.to_async(&rt).iter(|| async {
                    std::hint::black_box(
                        registry
                            .execute("tool1", ToolArgs::new().with("input", "benchmark"))
                            .await
                            .unwrap(),
                    )
                })
            },
        );
    }

    group.finish();
}

/// Benchmark the standard tools through the registry
fn bench_standard_tools(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("standard_tools");

    group.throughput(Throughput::Elements(1));
    group.sample_size(1000);

    let registry = InMemoryToolRegistry::new();
    register_standard_tools(&registry);

    let cases = [
        ("calculate", ToolArgs::new().with("expression", "15 * 8 + 42")),
        ("greet", ToolArgs::new().with("name", "Alice").with("language", "French")),
        ("analyze_data", ToolArgs::new().with("data", json!([1, 5, 3, 9, 2, 8, 4, 7, 6]))),
        ("validate_email", ToolArgs::new().with("email", "user@example.com")),
        ("get_cat_fact", ToolArgs::new().with("category", "science")),
    ];

    for (tool, args) in cases {
        group.bench_with_input(BenchmarkId::new("execute", tool), &args, |b, args| {
            b.to_async(&rt).iter(|| async {
                std::hint::black_box(registry.execute(tool, args.clone()).await.unwrap())
            })
        });
    }

    group.bench_function("evaluate_nested", |b| {
        b.iter(|| std::hint::black_box(evaluate(std::hint::black_box("((2 + 3) * 4 - 1) ^ 2 / 7"))))
    });

    group.finish();
}

/// Benchmark batched dispatch
fn bench_batch_tool_execution(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("batch_tool_execution");

    group.sample_size(500);
    group.measurement_time(Duration::from_secs(15));

    let registry = registry_with_mocks(4);

    for batch_size in [1usize, 2, 4, 8, 16] {
        group.throughput(Throughput::Elements(batch_size as u64));

        let calls: Vec<ToolCall> = (0..batch_size)
            .map(|i| {
                ToolCall::new(
                    format!("tool{}", i % 4),
                    ToolArgs::new().with("input", format!("batch input {i}")),
                )
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("execute_all", batch_size),
            &calls,
            |b, calls| {
                b.to_async(&rt)
                    .iter(|| async { std::hint::black_box(registry.execute_all(calls).await) })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_tool_registry,
    bench_standard_tools,
    bench_batch_tool_execution
);
criterion_main!(benches);
