use criterion::{criterion_group, criterion_main, Criterion};
use reactivities::client::group_by_date;
use reactivities::models::Activity;
use std::hint::black_box;
use uuid::Uuid;

const ACTIVITY_COUNT: u128 = 5_000;

/// A few activities per day spread over roughly a year, in shuffled order.
fn fixture() -> Vec<Activity> {
    (0..ACTIVITY_COUNT)
        .map(|n| {
            let day = (n * 7919) % 365;
            let date = chrono::NaiveDate::from_yo_opt(2020, day as u32 + 1)
                .and_then(|d| d.and_hms_opt((n % 24) as u32, (n % 60) as u32, 0))
                .expect("valid fixture date");
            Activity {
                id: Uuid::from_u128(n),
                title: format!("Activity {}", n),
                category: "culture".to_string(),
                description: "Benchmark fixture".to_string(),
                date: reactivities::time_utils::format_activity_date(date),
                city: "London".to_string(),
                venue: "Museum".to_string(),
            }
        })
        .collect()
}

fn benchmark_group_by_date(c: &mut Criterion) {
    let activities = fixture();

    c.bench_function("group_by_date_5000", |b| {
        b.iter(|| group_by_date(black_box(activities.clone())))
    });
}

criterion_group!(benches, benchmark_group_by_date);
criterion_main!(benches);
