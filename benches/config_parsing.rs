//! Config File Parsing Benchmarks
//!
//! **Purpose:** Measure configuration loading, validation and preset resolution
//!
//! **Regression Threshold:** >20% slower than baseline
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench config_parsing
//! ```
//!
//! **What's Being Measured:**
//! 1. `load config from file` - File I/O + TOML parsing + validation
//! 2. `parse config string` - TOML parsing + validation, no I/O
//! 3. `resolve preset` - Preset lookup and section merging
//! 4. `validate config` - Full validator registry pass
//!
//! **Performance Notes:**
//! - TOML parsing uses toml_edit
//! - The category table override rebuilds the engine's lookup table

use broker_roi::config::{ConfigLoader, DomainPreset, PresetResolver, ValidatorRegistry};
use criterion::{criterion_group, criterion_main, Criterion};
use std::fs;
use std::hint::black_box;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = r#"
domain = "Cloud & SaaS"
category = "Cloud Services"

[broker]
annual-spend = 2500000.0
savings-pct = 28.0
fee-pct = 9.0

[time]
baseline-hours = 650.0
time-saved-pct = 45.0

[forecast]
years = 5
discount-rate = 0.07

[sensitivity]
savings-range = [10.0, 50.0]
fee-range = [6.0, 14.0]
step = 2.5

[[categories]]
name = "Cloud Services"
license-rate = 0.35
implementation-rate = 0.15

[[categories]]
name = "Edge Computing"
license-rate = 0.25
implementation-rate = 0.10
"#;

fn create_config_file(dir: &TempDir) -> std::path::PathBuf {
    let config_path = dir.path().join(".broker-roi.toml");
    fs::write(&config_path, CONFIG).unwrap();
    config_path
}

fn bench_load_config(c: &mut Criterion) {
    c.bench_function("load config from file", |b| {
        b.iter_batched(
            || {
                let temp_dir = TempDir::new().unwrap();
                create_config_file(&temp_dir);
                temp_dir
            },
            |temp_dir| {
                black_box(ConfigLoader::load(temp_dir.path())).unwrap();
                drop(temp_dir);
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_parse_config(c: &mut Criterion) {
    let path = Path::new(".broker-roi.toml");
    c.bench_function("parse config string", |b| {
        b.iter(|| black_box(ConfigLoader::parse(black_box(CONFIG), path)).unwrap());
    });
}

fn bench_resolve_preset(c: &mut Criterion) {
    let config = ConfigLoader::parse(CONFIG, Path::new(".broker-roi.toml")).unwrap();
    c.bench_function("resolve preset", |b| {
        b.iter(|| black_box(PresetResolver::resolve(black_box(&config))).unwrap());
    });
}

fn bench_validate_config(c: &mut Criterion) {
    let config = ConfigLoader::parse(CONFIG, Path::new(".broker-roi.toml")).unwrap();
    let registry = ValidatorRegistry::with_defaults();
    c.bench_function("validate config", |b| {
        b.iter(|| black_box(registry.validate_all(black_box(&config))));
    });
}

fn bench_preset_lookup(c: &mut Criterion) {
    c.bench_function("preset lookup", |b| {
        b.iter(|| {
            black_box(DomainPreset::get("Telecom"));
            black_box(DomainPreset::get("mobility-iot"));
            black_box(DomainPreset::get("Cloud & SaaS"));
        });
    });
}

criterion_group!(
    benches,
    bench_load_config,
    bench_parse_config,
    bench_resolve_preset,
    bench_validate_config,
    bench_preset_lookup
);
criterion_main!(benches);
