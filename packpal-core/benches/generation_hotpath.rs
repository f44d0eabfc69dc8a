use criterion::{criterion_group, criterion_main, Criterion};
use packpal_core::{generate_packing_list, EntityIdType, ItemPatch, LuggageCapacity, TripPurpose};
use packpal_test_utils::fixtures;
use std::hint::black_box;

fn bench_generation(c: &mut Criterion) {
    let beach = fixtures::lisbon_beach_trip();
    let hot = fixtures::hot_dry_forecast();
    let winter = fixtures::trip_with(TripPurpose::WinterSports, LuggageCapacity::Checked, 12);
    let freezing = fixtures::cold_wet_forecast();

    c.bench_function("generate/beach_hot", |b| {
        b.iter(|| {
            let list = generate_packing_list(black_box(&beach), black_box(&hot))
                .expect("generate list");
            black_box(list.items.len());
        });
    });

    c.bench_function("generate/winter_freezing", |b| {
        b.iter(|| {
            let list = generate_packing_list(black_box(&winter), black_box(&freezing))
                .expect("generate list");
            black_box(list.items.len());
        });
    });
}

fn bench_mutation(c: &mut Criterion) {
    let list = generate_packing_list(&fixtures::lisbon_beach_trip(), &fixtures::hot_dry_forecast())
        .expect("generate list");
    let target = list.items[list.items.len() / 2].id;

    c.bench_function("list/toggle_and_update", |b| {
        b.iter(|| {
            let toggled = list.toggle_item(black_box(target));
            let updated = toggled
                .update_item(target, &ItemPatch::default().with_quantity(2))
                .expect("update item");
            black_box(updated.item(target).map(|item| item.id.as_uuid()));
        });
    });
}

criterion_group!(benches, bench_generation, bench_mutation);
criterion_main!(benches);
