// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for notegen
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Pitch and numeral parsing
//! - Scale-degree resolution and chord construction
//! - Progression generation for each entry point
//! - Complexity scoring and event rendering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use notegen::generators::calculate_pattern_complexity;
use notegen::{
    AdvancedRequest, Chord, ChordProgressionGenerator, ChordQuality, Pattern, Pitch,
    PresetLibrary, RomanNumeral, ScaleContext,
};

fn generator() -> ChordProgressionGenerator {
    ChordProgressionGenerator::new(ScaleContext::parse("C4", "major").unwrap()).with_seed(42)
}

/// Benchmark pitch and numeral parsing
fn bench_parsing(c: &mut Criterion) {
    c.bench_function("pitch_from_name", |b| {
        b.iter(|| Pitch::from_name(black_box("F#5")).unwrap())
    });

    c.bench_function("roman_numeral_parse", |b| {
        b.iter(|| {
            for text in ["I", "ii7", "V7", "viiø", "IVΔ", "bVII", "V/V"] {
                black_box(RomanNumeral::parse(black_box(text)).unwrap());
            }
        })
    });
}

/// Benchmark scale-degree resolution and chord building
fn bench_chords(c: &mut Criterion) {
    let context = ScaleContext::parse("Eb3", "minor").unwrap();

    c.bench_function("note_for_degree", |b| {
        b.iter(|| {
            for degree in -7..=14 {
                black_box(context.note_for_degree(black_box(degree)).unwrap());
            }
        })
    });

    let root = Pitch::from_name("C4").unwrap();
    c.bench_function("chord_all_qualities", |b| {
        b.iter(|| {
            for quality in ChordQuality::ALL {
                black_box(Chord::new(root.clone(), quality, black_box(1)).unwrap());
            }
        })
    });
}

/// Benchmark progression generation by length
fn bench_generation(c: &mut Criterion) {
    let gen = generator();
    let mut group = c.benchmark_group("generate");

    for length in [4usize, 8, 32].iter() {
        group.bench_with_input(BenchmarkId::new("random", length), length, |b, &length| {
            b.iter(|| gen.generate(None, Some(length)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("genre", length), length, |b, &length| {
            b.iter(|| gen.generate_genre_specific_pattern("jazz", length).unwrap())
        });

        let request = AdvancedRequest {
            length: Some(*length),
            complexity_target: 0.7,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::new("advanced", length), &request, |b, request| {
            b.iter(|| gen.generate_advanced(request).unwrap())
        });
    }

    let pattern = Pattern::numerals(["I-V-vi-iii-IV-I-IV-V"]);
    group.bench_function("numerals", |b| {
        b.iter(|| gen.generate(Some(black_box(&pattern)), None).unwrap())
    });
    group.bench_function("tension", |b| {
        b.iter(|| gen.generate_with_tension_resolution(black_box(&pattern)).unwrap())
    });

    let library = PresetLibrary::with_builtins();
    group.bench_function("preset", |b| {
        b.iter(|| gen.generate_from_preset(&library, black_box("Canon")).unwrap())
    });

    group.finish();
}

/// Benchmark complexity scoring and event rendering
fn bench_scoring(c: &mut Criterion) {
    let gen = generator();
    let steps = gen.random_steps(32).unwrap();

    c.bench_function("pattern_complexity_32", |b| {
        b.iter(|| calculate_pattern_complexity(black_box(&steps)))
    });

    let progression = gen.generate(None, Some(32)).unwrap();
    c.bench_function("render_events_32", |b| {
        b.iter(|| progression.to_events(black_box(96)))
    });
}

criterion_group!(benches, bench_parsing, bench_chords, bench_generation, bench_scoring);
criterion_main!(benches);
