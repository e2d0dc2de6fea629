use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use planviz::builder::build_graph;
use planviz::config::Config;
use planviz::i18n::Messages;
use planviz::layout::compute_layout;
use planviz::plan::{ExecutionPlan, PlanStep};
use planviz::render::render_layout_svg;
use planviz::render_plan_svg;
use std::hint::black_box;

const KINDS: [&str; 6] = ["pre", "native", "command", "task", "transform", "post"];

fn synthetic_plan(steps: usize, keys: usize) -> ExecutionPlan {
    ExecutionPlan {
        current: (steps / 2) as i64,
        steps: (0..steps)
            .map(|idx| {
                let mut step = PlanStep::new(KINDS[idx % KINDS.len()])
                    .named(format!("plugin step number {idx}"));
                step.request_keys = (0..keys).map(|k| format!("request_key_{k}")).collect();
                step.response_keys = (0..keys / 2).map(|k| format!("response_{k}")).collect();
                step.version = Some(format!("1.{idx}.0"));
                step
            })
            .collect(),
        command_path: vec!["tg".into(), "deploy".into()],
        command_args: vec!["--env".into(), "staging".into()],
    }
}

fn bench_pipeline(c: &mut Criterion) {
    let config = Config::default();
    let messages = Messages::for_locale(config.locale);
    let cases = [("tiny", 1, 0), ("small", 5, 3), ("medium", 25, 6), ("large", 200, 8)];

    let mut group = c.benchmark_group("build");
    for (name, steps, keys) in cases {
        let plan = synthetic_plan(steps, keys);
        group.bench_with_input(BenchmarkId::from_parameter(name), &plan, |b, plan| {
            b.iter(|| black_box(build_graph(black_box(plan), messages)))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("layout");
    for (name, steps, keys) in cases {
        let graph = build_graph(&synthetic_plan(steps, keys), messages);
        group.bench_with_input(BenchmarkId::from_parameter(name), &graph, |b, graph| {
            b.iter(|| {
                let graph = graph.clone().unwrap_or_default();
                black_box(compute_layout(graph, &config.layout))
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render");
    for (name, steps, keys) in cases {
        let graph = build_graph(&synthetic_plan(steps, keys), messages).unwrap_or_default();
        let layout = compute_layout(graph, &config.layout);
        group.bench_with_input(BenchmarkId::from_parameter(name), &layout, |b, layout| {
            b.iter(|| black_box(render_layout_svg(black_box(layout), &config)))
        });
    }
    group.finish();

    let mut group = c.benchmark_group("end_to_end");
    for (name, steps, keys) in cases {
        let plan = synthetic_plan(steps, keys);
        group.bench_with_input(BenchmarkId::from_parameter(name), &plan, |b, plan| {
            b.iter(|| black_box(render_plan_svg(black_box(plan), &config)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
