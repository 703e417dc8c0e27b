use criterion::{black_box, criterion_group, criterion_main, Criterion};

use essaylens_core::analyzer::analyze;
use essaylens_core::model::Goal;

fn short_essay() -> String {
    "I went to the store and realized something had changed.".to_string()
}

fn long_essay() -> String {
    let paragraph = "The moment I walked in, the room crackled with energy and I realized \
                     that everything I had learned about leading others was about to be \
                     tested in a way I had never imagined before that gentle evening. ";
    paragraph.repeat(50)
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    let short = short_essay();
    group.bench_function("short", |b| {
        b.iter(|| analyze(black_box(&short), black_box(&Goal::Leadership)))
    });

    let long = long_essay();
    group.bench_function("long_50_paragraphs", |b| {
        b.iter(|| analyze(black_box(&long), black_box(&Goal::Resilience)))
    });

    group.bench_function("empty", |b| {
        b.iter(|| analyze(black_box(""), black_box(&Goal::Curiosity)))
    });

    group.finish();
}

fn bench_sub_scores(c: &mut Criterion) {
    use essaylens_core::analyzer::{authenticity_score, clarity_score, impact_score};

    let mut group = c.benchmark_group("sub_scores");
    let essay = long_essay();

    group.bench_function("clarity", |b| b.iter(|| clarity_score(black_box(&essay))));
    group.bench_function("authenticity", |b| {
        b.iter(|| authenticity_score(black_box(&essay)))
    });
    group.bench_function("impact", |b| b.iter(|| impact_score(black_box(&essay))));

    group.finish();
}

criterion_group!(benches, bench_analyze, bench_sub_scores);
criterion_main!(benches);
