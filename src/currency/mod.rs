//! BRL currency handling: the live-typing cents mask and the read-only
//! display formatter.
//!
//! The two paths are deliberately separate. The mask (`apply_currency_mask` /
//! `remove_currency_mask`) runs per keystroke and works on digit strings
//! only, so repeated edit cycles conserve the minor-unit amount exactly. The
//! display path (`format_currency` / `parse_currency_input`) renders stored
//! amounts for read-only views and never feeds back into a mask.

mod cents;
mod display;

pub use cents::{apply_currency_mask, remove_currency_mask};
pub use display::{
    CurrencyFormat, ParseAmountError, format_currency, parse_amount, parse_currency_input,
};
