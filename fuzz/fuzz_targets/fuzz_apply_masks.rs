#![no_main]

use libfuzzer_sys::fuzz_target;
use mascara::{MaskKind, apply_mask, remove_mask};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — the mask façade is total.
        for kind in [
            MaskKind::Cpf,
            MaskKind::Cnpj,
            MaskKind::Cep,
            MaskKind::Phone,
            MaskKind::Currency,
        ] {
            let _ = apply_mask(kind, s);
            let _ = remove_mask(kind, s);
        }
    }
});
