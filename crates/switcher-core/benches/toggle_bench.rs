//! Criterion benchmarks for the locate and toggle passes.
//!
//! Config files are small in practice; these benches exist to catch
//! accidental quadratic behaviour when a file holds many organizations.
//!
//! Run with:
//! ```bash
//! cargo bench --package switcher-core --bench toggle_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use switcher_core::{discover_group_names, locate_groups, toggle_groups};

// ── Fixture builders ──────────────────────────────────────────────────────────

/// Builds a config with `n` groups of ten profile lines each.  Group 0 is active.
fn build_config_with_n_groups(n: usize) -> Vec<String> {
    let mut lines = vec!["[default]".to_string(), "region = us-east-1".to_string()];
    for g in 0..n {
        let prefix = if g == 0 { "" } else { "#" };
        lines.push(format!("## BEGIN ORG_{g}"));
        for p in 0..10 {
            lines.push(format!("{prefix}[profile org{g}-p{p}]"));
            lines.push(format!("{prefix}region = eu-west-1"));
            lines.push(String::new());
        }
        lines.push(format!("## END ORG_{g}"));
    }
    lines
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate_groups");
    for n in [2usize, 16, 128] {
        let lines = build_config_with_n_groups(n);
        let names = discover_group_names(&lines);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| locate_groups(black_box(&lines), black_box(&names)))
        });
    }
    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle_groups");
    for n in [2usize, 16, 128] {
        let lines = build_config_with_n_groups(n);
        let names = discover_group_names(&lines);
        let registry = locate_groups(&lines, &names);
        let target = names[n - 1].clone();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                toggle_groups(black_box(&lines), &registry, &names, black_box(&target))
                    .expect("well-formed fixture")
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_locate, bench_toggle);
criterion_main!(benches);
