use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::io::Cursor;
use weather_aggregator::processors::StreamAggregator;

// Build an input CSV of hourly readings for `station_count` stations over
// `days` days, 24 readings per station per day.
fn create_test_input(station_count: usize, days: usize) -> String {
    let mut input = String::from("Station Name,Measurement Timestamp,Air Temperature\n");

    for station_id in 1..=station_count {
        for day in 0..days {
            for hour in 0..24u32 {
                let (clock_hour, meridiem) = match hour {
                    0 => (12, "AM"),
                    1..=11 => (hour, "AM"),
                    12 => (12, "PM"),
                    _ => (hour - 12, "PM"),
                };
                let temperature =
                    10.0 + (station_id as f64) * 0.5 + (day as f64) * 0.1 + (hour as f64) * 0.25;
                input.push_str(&format!(
                    "Test Station {},{:02}/{:02}/2023 {:02}:00:00 {},{}\n",
                    station_id,
                    1 + day / 28,
                    1 + day % 28,
                    clock_hour,
                    meridiem,
                    temperature
                ));
            }
        }
    }

    input
}

fn benchmark_stream_aggregator(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_aggregator");

    for (stations, days) in [(10, 7), (100, 30), (500, 30)] {
        let input = create_test_input(stations, days);
        group.bench_with_input(
            BenchmarkId::new("process", format!("{}x{}", stations, days)),
            &input,
            |b, input| {
                b.iter(|| {
                    let mut output = Vec::new();
                    StreamAggregator::new()
                        .process(Cursor::new(black_box(input.as_str())), &mut output)
                        .unwrap();
                    output
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_stream_aggregator);
criterion_main!(benches);
