//! Benchmarks for the damage calculation pipeline.
//!
//! The engine is meant to sit inside UI refresh loops and batch analyzers,
//! so single-calculation latency matters.
//!
//! Run with:
//!   cargo bench --package poke_calc --bench damage_calc

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use poke_calc::{
    calculate_all_moves, calculate_damage, BattleConditions, CombatantSnapshot, Dex, NatureId,
};

/// A typical singles matchup.
fn setup_singles(dex: &Dex) -> (CombatantSnapshot, CombatantSnapshot) {
    let attacker = CombatantSnapshot::from_species(dex, "garchomp")
        .expect("garchomp exists")
        .level(50)
        .evs([0, 252, 0, 0, 4, 252])
        .nature(NatureId::Adamant)
        .moves(&["Earthquake", "Outrage", "Stone Edge", "Flare Blitz"])
        .build()
        .expect("valid snapshot");
    let defender = CombatantSnapshot::from_species(dex, "tyranitar")
        .expect("tyranitar exists")
        .level(50)
        .evs([252, 0, 128, 0, 128, 0])
        .build()
        .expect("valid snapshot");
    (attacker, defender)
}

fn bench_single_move(c: &mut Criterion) {
    let dex = Dex::standard();
    let (attacker, defender) = setup_singles(&dex);
    let conditions = BattleConditions::default();

    let mut group = c.benchmark_group("damage");
    group.throughput(Throughput::Elements(1));
    group.bench_function("single_move", |b| {
        b.iter(|| {
            calculate_damage(
                black_box(&dex),
                black_box(&attacker),
                black_box(&defender),
                black_box("Earthquake"),
                black_box(&conditions),
            )
        })
    });
    group.finish();
}

fn bench_full_moveset(c: &mut Criterion) {
    let dex = Dex::standard();
    let (attacker, defender) = setup_singles(&dex);
    let conditions = BattleConditions::default();

    let mut group = c.benchmark_group("damage");
    group.throughput(Throughput::Elements(4));
    group.bench_function("full_moveset", |b| {
        b.iter(|| {
            calculate_all_moves(
                black_box(&dex),
                black_box(&attacker),
                black_box(&defender),
                black_box(&conditions),
            )
        })
    });
    group.finish();
}

criterion_group!(benches, bench_single_move, bench_full_moveset);
criterion_main!(benches);
