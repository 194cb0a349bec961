// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Checks shared by the register layout tests.

use tock_registers::fields::Field;
use tock_registers::RegisterLongName;

/// In-place mask of a 32-bit field.
pub fn mask<R: RegisterLongName>(field: Field<u32, R>) -> u32 {
    field.mask << field.shift
}

/// In-place mask of a 16-bit field, widened.
pub fn mask16<R: RegisterLongName>(field: Field<u16, R>) -> u32 {
    u32::from(field.mask << field.shift)
}

/// In-place mask of an 8-bit field, widened.
pub fn mask8<R: RegisterLongName>(field: Field<u8, R>) -> u32 {
    u32::from(field.mask << field.shift)
}

/// Every field is a contiguous run of ones that stays inside the register
/// width, and no two fields share a bit. Returns the union of the masks.
pub fn assert_fields(width: u32, masks: &[u32]) -> u32 {
    let width_mask = if width == 32 { u32::MAX } else { (1 << width) - 1 };
    let mut union = 0;
    for (index, &field) in masks.iter().enumerate() {
        assert_ne!(field, 0, "field {index} is empty");
        assert_eq!(field & !width_mask, 0, "field {index} ({field:#010x}) exceeds {width} bits");
        let shifted = field >> field.trailing_zeros();
        assert_eq!(
            shifted & shifted.wrapping_add(1),
            0,
            "field {index} ({field:#010x}) is not contiguous"
        );
        assert_eq!(union & field, 0, "field {index} ({field:#010x}) overlaps {union:#010x}");
        union |= field;
    }
    union
}

/// Single-bit components of a multi-bit field are disjoint single bits whose
/// union is exactly the composite field.
pub fn assert_components(composite: u32, components: &[u32]) {
    let mut union = 0;
    for &bit in components {
        assert_eq!(bit.count_ones(), 1, "{bit:#010x} is not a single bit");
        assert_eq!(union & bit, 0, "{bit:#010x} listed twice");
        union |= bit;
    }
    assert_eq!(union, composite);
}
