use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pyo3_concept_chart::chart_engine::plan::plan_for;
use pyo3_concept_chart::chart_engine::renderer::render;
use pyo3_concept_chart::types::{GenerateConfig, IndicatorKind, RenderConfig, Scenario};
use pyo3_concept_chart::{build_gallery, generate_samples};

fn bench_generate(c: &mut Criterion) {
    let config = GenerateConfig::seeded(7);
    c.bench_function("generate_macd_divergence", |b| {
        b.iter(|| {
            generate_samples(
                black_box(IndicatorKind::Macd),
                black_box(Scenario::DivergenceBull),
                &config,
            )
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let chart = generate_samples(
        IndicatorKind::Vol,
        Scenario::BreakoutUp,
        &GenerateConfig::seeded(7),
    )
    .expect("generate vol samples");
    let plan = plan_for(IndicatorKind::Vol);
    let render_config = RenderConfig::default();
    c.bench_function("render_vol_breakout", |b| {
        b.iter(|| render(black_box(&chart), &plan, &render_config))
    });
}

fn bench_gallery(c: &mut Criterion) {
    let generate = GenerateConfig::seeded(7);
    let render_config = RenderConfig::default();
    let mut group = c.benchmark_group("gallery");
    group.sample_size(10);
    group.bench_function("build_gallery", |b| {
        b.iter(|| build_gallery(&generate, &render_config))
    });
    group.finish();
}

criterion_group!(benches, bench_generate, bench_render, bench_gallery);
criterion_main!(benches);
