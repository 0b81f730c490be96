
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pedal_proto::device::Parameter;
use pedal_proto::{generate, Message, ValueType};

struct Knob;

impl Parameter for Knob {
    fn parent_id(&self) -> u32 {
        2
    }

    fn id(&self) -> u32 {
        5
    }

    fn value_type(&self) -> ValueType {
        ValueType::FLOAT32
    }

    fn current(&self) -> [u8; 4] {
        120.4_f32.to_le_bytes()
    }

    fn min(&self) -> [u8; 4] {
        0.0_f32.to_le_bytes()
    }

    fn max(&self) -> [u8; 4] {
        240.0_f32.to_le_bytes()
    }
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    group.throughput(Throughput::Elements(1));
    group.bench_function("generate_parameter_change", |b| {
        b.iter(|| {
            black_box(generate::parameter_change(black_box(&Knob)));
        });
    });

    group.bench_function("generate_tempo_change", |b| {
        b.iter(|| {
            black_box(generate::parameter_tempo_change(black_box(&Knob)));
        });
    });

    group.bench_function("generate_preset_query", |b| {
        b.iter(|| {
            black_box(generate::preset_query(black_box(12), black_box(3)));
        });
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let parameter = generate::parameter_change(&Knob).encode();
    group.throughput(Throughput::Bytes(parameter.len() as u64));
    group.bench_function("decode_parameter_change", |b| {
        b.iter(|| {
            black_box(Message::decode(&parameter).unwrap());
        });
    });

    let header_only = generate::preset_load().encode();
    group.throughput(Throughput::Bytes(header_only.len() as u64));
    group.bench_function("decode_header_only", |b| {
        b.iter(|| {
            black_box(Message::decode(&header_only).unwrap());
        });
    });

    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let msg = generate::parameter_change_max(&Knob);
    group.bench_function("roundtrip_parameter", |b| {
        b.iter(|| {
            let encoded = msg.encode();
            black_box(Message::decode(&encoded).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_decode, bench_roundtrip);
criterion_main!(benches);
