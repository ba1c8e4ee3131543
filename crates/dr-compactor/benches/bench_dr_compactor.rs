use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dr_compactor::{Preprocessor, ReductionEngine};
use rand::Rng;

const SECTIONS: &[&str] = &["SSH", "Kernel", "Disk Space", "Cron", "Postfix", "Misc"];

fn generate_report(size_kb: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        let section = SECTIONS[rng.gen_range(0..SECTIONS.len())];
        text.push_str(&format!("### {} ###\n", section));
        for _ in 0..rng.gen_range(20..80) {
            let line = match rng.gen_range(0..4) {
                0 => format!(
                    "Failed password for invalid user admin from 10.0.{}.{} port {}",
                    rng.gen_range(0..255), rng.gen_range(0..255), rng.gen_range(1024..65535)
                ),
                1 => format!("Oct {} 04:{:02}:{:02} cron[{}]: job finished in {}ms",
                    rng.gen_range(1..31), rng.gen_range(0..60), rng.gen_range(0..60),
                    rng.gen_range(100..9999), rng.gen_range(1..5000)),
                2 => format!("/dev/sda{} {}% used", rng.gen_range(1..9), rng.gen_range(1..100)),
                _ => format!("message {} delivered to user{}@example.com", rng.gen::<u32>(), rng.gen_range(0..50)),
            };
            text.push_str(&line);
            text.push('\n');
        }
    }
    text.truncate(size_kb * 1024);
    text
}

fn generate_events(size_kb: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut text = String::from("## Security Events\n");
    while text.len() < size_kb * 1024 {
        text.push_str(&format!(
            "{} GET /api/v1/orders/{} 401 from 192.168.{}.{} in {}ms\n",
            "2026-01-15T10:00:00Z", rng.gen_range(1..100_000),
            rng.gen_range(0..255), rng.gen_range(0..255), rng.gen_range(1..900)
        ));
        if rng.gen_bool(0.05) {
            text.push_str("## Queue Workers\n");
        }
    }
    text
}

fn bench_system_log(c: &mut Criterion) {
    let engine = ReductionEngine::system_log().unwrap();
    for kb in [10, 100] {
        let report = generate_report(kb);
        c.bench_function(&format!("system_log_{kb}kb"), |b| {
            b.iter(|| black_box(engine.process(black_box(&report)).unwrap()))
        });
        c.bench_function(&format!("system_log_{kb}kb_fallback"), |b| {
            b.iter(|| black_box(engine.reduce_with_budget(black_box(&report), 200)))
        });
    }
}

fn bench_app_events(c: &mut Criterion) {
    let engine = ReductionEngine::app_events().unwrap();
    let events = generate_events(100);
    c.bench_function("app_events_100kb", |b| {
        b.iter(|| black_box(engine.process(black_box(&events)).unwrap()))
    });
}

criterion_group!(benches, bench_system_log, bench_app_events);
criterion_main!(benches);
