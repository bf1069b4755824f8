//! # mascara
//!
//! Brazilian form-input masking and formatting: CPF, CNPJ, CEP, phone
//! numbers, and BRL currency amounts.
//!
//! Two surfaces share one template engine:
//!
//! * **Live-typing masks** (`apply_*_mask` / `remove_*_mask`): recomputed per
//!   keystroke, total functions that degrade on malformed input instead of
//!   failing. `apply` produces the display value, `remove` the canonical
//!   value read on blur/submit.
//! * **Read-only display** ([`format_currency`] / [`parse_currency_input`]):
//!   one-directional rendering with configurable symbol and separators.
//!
//! All display-path amounts use [`rust_decimal::Decimal`] — never floating
//! point. The masking path works on digit strings directly, so currency
//! amounts are exact and unbounded.
//!
//! ## Quick Start
//!
//! ```rust
//! use mascara::{apply_cpf_mask, apply_currency_mask, remove_currency_mask};
//! use mascara::{CurrencyFormat, format_currency};
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(apply_cpf_mask("12345678901"), "123.456.789-01");
//! assert_eq!(apply_currency_mask("150000"), "1.500,00");
//! assert_eq!(remove_currency_mask("1.500,00"), "1500.00");
//!
//! let brl = CurrencyFormat::default();
//! assert_eq!(format_currency(dec!(1234.5), &brl), "R$ 1.234,50");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`digits`] | Digit extraction from arbitrary input |
//! | [`template`] | Fixed-position mask templates (CPF, CNPJ, CEP, phone) |
//! | [`currency`] | Minor-unit currency mask and display formatter |
//! | [`mask`] | Per-domain apply/remove façade and [`MaskKind`] dispatch |

pub mod currency;
pub mod digits;
pub mod mask;
pub mod template;

// Re-export the public surface at the crate root for convenience
pub use crate::currency::{
    CurrencyFormat, ParseAmountError, apply_currency_mask, format_currency, parse_amount,
    parse_currency_input, remove_currency_mask,
};
pub use crate::digits::extract_digits;
pub use crate::mask::{
    MaskKind, apply_cep_mask, apply_cnpj_mask, apply_cpf_mask, apply_mask, apply_phone_mask,
    remove_cep_mask, remove_cnpj_mask, remove_cpf_mask, remove_mask, remove_phone_mask,
};
pub use crate::template::MaskTemplate;
