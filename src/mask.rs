//! Per-domain mask/unmask façade.
//!
//! One `apply_*_mask` / `remove_*_mask` pair per domain, plus the tagged
//! [`MaskKind`] dispatch for callers that configure fields from data. All
//! functions are pure and total: `apply` is the live-typing display value,
//! `remove` the canonical value read on blur/submit.

use serde::{Deserialize, Serialize};

use crate::currency;
use crate::digits::extract_digits;
use crate::template;

/// Mask domain tag for generic dispatch.
///
/// Serializes in lowercase (`"cpf"`, `"currency"`, ...) so field
/// configuration can come straight from form metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskKind {
    /// Personal tax ID, 11 digits, `ddd.ddd.ddd-dd`.
    Cpf,
    /// Company tax ID, 14 digits, `dd.ddd.ddd/dddd-dd`.
    Cnpj,
    /// Postal code, 8 digits, `ddddd-ddd`.
    Cep,
    /// Landline or mobile number, 10 or 11 digits.
    Phone,
    /// BRL amount in centavos, unbounded.
    Currency,
}

impl MaskKind {
    /// Maximum digit count the domain keeps, `None` for unbounded.
    pub fn max_digits(self) -> Option<usize> {
        match self {
            MaskKind::Cpf => Some(11),
            MaskKind::Cnpj => Some(14),
            MaskKind::Cep => Some(8),
            MaskKind::Phone => Some(11),
            MaskKind::Currency => None,
        }
    }
}

/// Format `text` for display per `kind`. Excess digits are truncated, never
/// rejected; empty input degrades to `""` (or `"0,00"` for currency).
pub fn apply_mask(kind: MaskKind, text: &str) -> String {
    match kind {
        MaskKind::Cpf => template::CPF.apply(text),
        MaskKind::Cnpj => template::CNPJ.apply(text),
        MaskKind::Cep => template::CEP.apply(text),
        MaskKind::Phone => {
            let digits = extract_digits(text);
            // Re-evaluated on every change: the 11th digit switches the
            // template and re-flows the already-formatted prefix.
            if digits.len() <= 10 {
                template::PHONE_SHORT.apply(&digits)
            } else {
                template::PHONE_LONG.apply(&digits)
            }
        }
        MaskKind::Currency => currency::apply_currency_mask(text),
    }
}

/// Reduce masked `text` to its canonical value: the digit string truncated to
/// the domain maximum, or the plain decimal string for currency.
pub fn remove_mask(kind: MaskKind, text: &str) -> String {
    match kind {
        MaskKind::Currency => currency::remove_currency_mask(text),
        _ => {
            let mut digits = extract_digits(text);
            if let Some(max) = kind.max_digits() {
                digits.truncate(max);
            }
            digits
        }
    }
}

/// Mask a CPF for display: `"12345678901"` becomes `"123.456.789-01"`.
pub fn apply_cpf_mask(text: &str) -> String {
    apply_mask(MaskKind::Cpf, text)
}

/// Canonical CPF digits from masked text, at most 11.
pub fn remove_cpf_mask(text: &str) -> String {
    remove_mask(MaskKind::Cpf, text)
}

/// Mask a CNPJ for display: `"12345678000195"` becomes
/// `"12.345.678/0001-95"`.
pub fn apply_cnpj_mask(text: &str) -> String {
    apply_mask(MaskKind::Cnpj, text)
}

/// Canonical CNPJ digits from masked text, at most 14.
pub fn remove_cnpj_mask(text: &str) -> String {
    remove_mask(MaskKind::Cnpj, text)
}

/// Mask a CEP for display: `"01234567"` becomes `"01234-567"`.
pub fn apply_cep_mask(text: &str) -> String {
    apply_mask(MaskKind::Cep, text)
}

/// Canonical CEP digits from masked text, at most 8.
pub fn remove_cep_mask(text: &str) -> String {
    remove_mask(MaskKind::Cep, text)
}

/// Mask a phone number for display, switching between the 10-digit
/// `(dd) dddd-dddd` and 11-digit `(dd) ddddd-dddd` layouts as typed.
///
/// ```
/// use mascara::apply_phone_mask;
///
/// assert_eq!(apply_phone_mask("1187654321"), "(11) 8765-4321");
/// assert_eq!(apply_phone_mask("11987654321"), "(11) 98765-4321");
/// ```
pub fn apply_phone_mask(text: &str) -> String {
    apply_mask(MaskKind::Phone, text)
}

/// Canonical phone digits from masked text, at most 11.
pub fn remove_phone_mask(text: &str) -> String {
    remove_mask(MaskKind::Phone, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_round_trip() {
        assert_eq!(apply_cpf_mask("12345678901"), "123.456.789-01");
        assert_eq!(remove_cpf_mask("123.456.789-01"), "12345678901");
    }

    #[test]
    fn cep_round_trip() {
        assert_eq!(apply_cep_mask("01234567"), "01234-567");
        assert_eq!(remove_cep_mask("01234-567"), "01234567");
    }

    #[test]
    fn phone_reflows_on_eleventh_digit() {
        assert_eq!(apply_phone_mask("1187654321"), "(11) 8765-4321");
        assert_eq!(apply_phone_mask("11987654321"), "(11) 98765-4321");
        // remove + re-apply reproduces the re-flowed form
        let removed = remove_phone_mask("(11) 8765-43219");
        assert_eq!(removed, "11876543219");
        assert_eq!(apply_phone_mask(&removed), "(11) 87654-3219");
    }

    #[test]
    fn overlong_input_truncates() {
        assert_eq!(apply_cpf_mask("123456789012"), apply_cpf_mask("12345678901"));
        assert_eq!(remove_cpf_mask("1234567890123"), "12345678901");
        assert_eq!(remove_phone_mask("119876543210000"), "11987654321");
    }

    #[test]
    fn malformed_input_degrades() {
        assert_eq!(apply_cpf_mask(""), "");
        assert_eq!(apply_cpf_mask("x!"), "");
        assert_eq!(remove_cep_mask("abc"), "");
        assert_eq!(apply_mask(MaskKind::Currency, ""), "0,00");
    }

    #[test]
    fn generic_dispatch_matches_wrappers() {
        assert_eq!(apply_mask(MaskKind::Cpf, "12345678901"), apply_cpf_mask("12345678901"));
        assert_eq!(remove_mask(MaskKind::Cep, "01234-567"), remove_cep_mask("01234-567"));
        assert_eq!(
            apply_mask(MaskKind::Currency, "150000"),
            crate::currency::apply_currency_mask("150000")
        );
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MaskKind::Cpf).unwrap(), "\"cpf\"");
        assert_eq!(
            serde_json::from_str::<MaskKind>("\"currency\"").unwrap(),
            MaskKind::Currency
        );
    }
}
