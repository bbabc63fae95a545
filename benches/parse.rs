//! Performance benchmarks for a3s-schedule
//!
//! Run with: cargo bench

use a3s_schedule::{build, classify, parse, EditorConfig, FieldEdit, ScheduleEditor, ScheduleIntent};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify", |b| {
        b.iter(|| {
            for raw in ["*", "30", "*/15", "1-5"] {
                black_box(classify(black_box(raw)));
            }
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, text) in [
        ("daily", "0 6 * * *"),
        ("interval", "*/15 * * * *"),
        ("monthly", "30 2 15 * *"),
        ("custom", "0 6 1,15 * *"),
    ] {
        group.bench_function(name, |b| b.iter(|| parse(black_box(text))));
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let intents = [
        ScheduleIntent::every_seconds(10),
        ScheduleIntent::every_hours(2, 30, 0),
        ScheduleIntent::weekly(1, 9, 0, 0),
        ScheduleIntent::monthly(15, 2, 30, 5),
    ];

    c.bench_function("build", |b| {
        b.iter(|| {
            for intent in &intents {
                black_box(build(black_box(intent)));
            }
        });
    });
}

fn bench_editor(c: &mut Criterion) {
    c.bench_function("editor set + edit", |b| {
        let mut editor = ScheduleEditor::new(EditorConfig::default());
        let mut hour = 0;
        b.iter(|| {
            editor.set_external_value("0 6 * * *");
            editor.settle();
            hour = (hour + 1) % 24;
            black_box(editor.apply_edit(FieldEdit::Hour(hour)))
        });
    });
}

criterion_group!(benches, bench_classify, bench_parse, bench_build, bench_editor);
criterion_main!(benches);
