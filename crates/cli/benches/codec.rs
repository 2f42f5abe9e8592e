// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for value parsing, stepping and payload encoding.

#![allow(clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use vitals_core::{encode, Codec, Direction, EditOp, VitalField, VitalSet};

fn value_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_parsing");
    let codec = Codec::default();

    let inputs = [
        ("blood_pressure", VitalField::BloodPressure, "120/80"),
        ("spo2", VitalField::SpO2, "98%"),
        ("temperature", VitalField::Temperature, "37.25"),
        ("opaque", VitalField::HeartRate, "not recorded"),
    ];

    for (name, field, input) in inputs {
        group.bench_with_input(BenchmarkId::new("parse", name), input, |b, i| {
            b.iter(|| codec.parse(field, i))
        });
    }
    group.finish();
}

fn value_stepping(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_stepping");
    let codec = Codec::default();

    for field in VitalField::ALL {
        let reading = codec.parse(field, &VitalSet::default().get_pending(field));
        let value = *reading.value().expect("default vitals are typed");
        group.bench_function(BenchmarkId::new("step_up", field.as_str()), |b| {
            b.iter(|| codec.step(field, &value, Direction::Up))
        });
    }
    group.finish();
}

fn payload_encoding(c: &mut Criterion) {
    let mut vitals = VitalSet::default();
    vitals.apply_edit(VitalField::BloodPressure, EditOp::SetManual("135/90".into()));
    vitals.apply_edit(VitalField::Temperature, EditOp::Increment);
    let snapshot = vitals.snapshot_for_send();

    c.bench_function("encode_snapshot", |b| b.iter(|| encode(&snapshot)));
    c.bench_function("snapshot_for_send", |b| b.iter(|| vitals.snapshot_for_send()));
}

criterion_group!(benches, value_parsing, value_stepping, payload_encoding);
criterion_main!(benches);
