use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use mascara::{
    CurrencyFormat, MaskKind, apply_currency_mask, apply_mask, format_currency,
    parse_currency_input, remove_currency_mask,
};

/// Per-keystroke hot path: one apply per template kind on full-length input.
fn bench_apply_templates(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_template");
    group.bench_function("cpf", |b| {
        b.iter(|| apply_mask(MaskKind::Cpf, black_box("12345678901")))
    });
    group.bench_function("cnpj", |b| {
        b.iter(|| apply_mask(MaskKind::Cnpj, black_box("12345678000195")))
    });
    group.bench_function("cep", |b| {
        b.iter(|| apply_mask(MaskKind::Cep, black_box("01234567")))
    });
    group.bench_function("phone_11", |b| {
        b.iter(|| apply_mask(MaskKind::Phone, black_box("11987654321")))
    });
    group.finish();
}

fn bench_currency_mask(c: &mut Criterion) {
    let mut group = c.benchmark_group("currency_mask");
    group.bench_function("apply_small", |b| {
        b.iter(|| apply_currency_mask(black_box("150000")))
    });
    group.bench_function("apply_large", |b| {
        b.iter(|| apply_currency_mask(black_box("123456789012345678901234567890")))
    });
    group.bench_function("remove", |b| {
        b.iter(|| remove_currency_mask(black_box("1.234.567,89")))
    });
    group.finish();
}

fn bench_display(c: &mut Criterion) {
    let brl = CurrencyFormat::default();
    let mut group = c.benchmark_group("display");
    group.bench_function("format", |b| {
        b.iter(|| format_currency(black_box(dec!(1234567.89)), &brl))
    });
    group.bench_function("parse", |b| {
        b.iter(|| parse_currency_input(black_box("R$ 1.234.567,89")))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_apply_templates,
    bench_currency_mask,
    bench_display
);
criterion_main!(benches);
