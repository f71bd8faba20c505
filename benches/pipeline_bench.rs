//! Benchmarks for the CrimeScope data pipeline
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use crimescope::{
    merge, rate_lookup, CountryDto, CountryName, FlagSet, Observation, RateScale, SortField,
    SortOrder, TableQuery,
};

fn synth_countries(count: usize) -> Vec<CountryDto> {
    (0..count)
        .map(|i| CountryDto {
            name: CountryName {
                common: format!("Country {:03}", i),
                official: format!("Republic of Country {:03}", i),
            },
            cca3: format!("{:03}", i),
            region: ["Africa", "Americas", "Asia", "Europe", "Oceania"][i % 5].to_string(),
            population: 1_000_001 + (i as u64) * 1_000_000,
            flags: FlagSet {
                svg: format!("https://flags.example/{}.svg", i),
                png: String::new(),
            },
            subregion: None,
            capital: Vec::new(),
        })
        .collect()
}

fn synth_observations(count: usize) -> Vec<Observation> {
    (0..count)
        .map(|i| Observation {
            countryiso3code: format!("{:03}", i),
            date: "2022".to_string(),
            value: if i % 10 == 0 {
                None
            } else {
                Some((i % 60) as f64 / 1.7)
            },
        })
        .collect()
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for size in [50, 150, 300] {
        let countries = synth_countries(size);
        let rates = rate_lookup(&synth_observations(size));

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("merge_{}", size), |b| {
            b.iter(|| merge(black_box(&countries), black_box(&rates)))
        });
    }

    group.finish();
}

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");

    let countries = synth_countries(300);
    let rates = rate_lookup(&synth_observations(300));
    let records = merge(&countries, &rates);

    group.throughput(Throughput::Elements(records.len() as u64));

    group.bench_function("apply_default", |b| {
        let query = TableQuery::default();
        b.iter(|| query.apply(black_box(&records)))
    });

    group.bench_function("apply_search_and_region", |b| {
        let query = TableQuery {
            search: "country 1".to_string(),
            region: "Europe".to_string(),
            ..TableQuery::default()
        };
        b.iter(|| query.apply(black_box(&records)))
    });

    group.bench_function("apply_sort_name_asc", |b| {
        let query = TableQuery {
            field: SortField::Name,
            order: SortOrder::Asc,
            ..TableQuery::default()
        };
        b.iter(|| query.apply(black_box(&records)))
    });

    group.finish();
}

fn bench_color_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    let countries = synth_countries(300);
    let rates = rate_lookup(&synth_observations(300));
    let observed: Vec<f64> = merge(&countries, &rates)
        .iter()
        .map(|r| r.homicide_rate)
        .collect();

    group.bench_function("from_rates_300", |b| {
        b.iter(|| RateScale::from_rates(black_box(observed.iter().copied())))
    });

    let scale = RateScale::from_rates(observed.iter().copied());

    group.bench_function("color_300", |b| {
        b.iter(|| {
            observed
                .iter()
                .map(|&rate| scale.color(black_box(rate)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_merge, bench_table, bench_color_scale);
criterion_main!(benches);
