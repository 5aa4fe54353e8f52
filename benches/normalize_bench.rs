use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tastelex::{DescriptorLevel, ExclusionSet, Lexicon, LexiconRow, Normalizer, NormalizerConfig};

const REVIEW: &str = "Marmalade, toffee, vanilla and tonka bean swirl on the nose. \
    Rich and smooth, rounded and mellow, yet with an incredibly bright, aromatic core \
    of fine citrus. Think dried and candied orange peel and candied blood orange. \
    What a magical balance the citrus freshness strikes with the cushioning, gentle \
    vanilla. Textural bliss and aromatic fireworks. Drink until 2040, at least.";

fn row(raw: &str, l1: &str, l3: &str) -> LexiconRow {
    LexiconRow {
        descriptor_raw: raw.to_string(),
        descriptor_level_1: Some(l1.to_string()),
        descriptor_level_2: None,
        descriptor_level_3: Some(l3.to_string()),
    }
}

fn bench_lexicon() -> Lexicon {
    Lexicon::from_rows(vec![
        row("citrus", "fruit", "citrus"),
        row("orang", "fruit", "orange"),
        row("vanilla", "oak", "vanilla"),
        row("toffe", "oak", "toffee"),
        row("marmalad", "fruit", "marmalade"),
        row("tonka bean", "oak", "tonka_bean"),
        row("blood orang", "fruit", "blood_orange"),
    ])
    .expect("bench lexicon builds")
}

fn bench_exclusions() -> ExclusionSet {
    ExclusionSet::from_words([
        "and", "the", "with", "on", "of", "a", "an", "at", "yet", "what", "until",
    ])
}

fn single_text_bench(c: &mut Criterion) {
    let normalizer = Normalizer::new(bench_lexicon(), bench_exclusions());
    c.bench_function("normalize_review", |b| {
        b.iter(|| {
            let out = normalizer.normalize_at(black_box(REVIEW), DescriptorLevel::Specific);
            black_box(out);
        });
    });
}

fn batch_bench(c: &mut Criterion) {
    let texts: Vec<String> = (0..256).map(|_| REVIEW.to_string()).collect();

    let sequential = Normalizer::new(bench_lexicon(), bench_exclusions());
    c.bench_function("normalize_batch_256_sequential", |b| {
        b.iter(|| {
            let out = sequential.normalize_batch(black_box(&texts), DescriptorLevel::Specific);
            black_box(out);
        });
    });

    let parallel = Normalizer::with_config(
        NormalizerConfig {
            parallel_batch: true,
            ..Default::default()
        },
        bench_lexicon(),
        bench_exclusions(),
    )
    .expect("valid config");
    c.bench_function("normalize_batch_256_parallel", |b| {
        b.iter(|| {
            let out = parallel.normalize_batch(black_box(&texts), DescriptorLevel::Specific);
            black_box(out);
        });
    });
}

criterion_group!(benches, single_text_bench, batch_bench);
criterion_main!(benches);
