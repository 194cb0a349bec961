// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! True random number generator.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::static_ref::StaticRef;

register_structs! {
    pub RngRegisters {
        (0x00 => pub cr: ReadWrite<u32, CR::Register>),
        (0x04 => pub sr: ReadWrite<u32, SR::Register>),
        (0x08 => pub dr: ReadOnly<u32, DR::Register>),
        (0x0C => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Random number generator enable
        RNGEN OFFSET(2) NUMBITS(1) [],
        /// Interrupt enable
        IE OFFSET(3) NUMBITS(1) []
    ],
    pub SR [
        /// Data ready
        DRDY OFFSET(0) NUMBITS(1) [],
        /// Clock error current status
        CECS OFFSET(1) NUMBITS(1) [],
        /// Seed error current status
        SECS OFFSET(2) NUMBITS(1) [],
        /// Clock error interrupt status
        CEIS OFFSET(5) NUMBITS(1) [],
        /// Seed error interrupt status
        SEIS OFFSET(6) NUMBITS(1) []
    ],
    pub DR [
        /// Random data
        RNDATA OFFSET(0) NUMBITS(32) []
    ]
];

pub(crate) const RNG: StaticRef<RngRegisters> =
    unsafe { StaticRef::new(memory_map::RNG_BASE as *const RngRegisters) };

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use super::*;
    use crate::test_util::{assert_fields, mask};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(RngRegisters, cr), 0x0);
        assert_eq!(offset_of!(RngRegisters, sr), 0x4);
        assert_eq!(offset_of!(RngRegisters, dr), 0x8);
        assert_eq!(size_of::<RngRegisters>(), 0xC);
        assert_eq!(RNG.address(), 0x5006_0800);
    }

    #[test]
    fn fields() {
        assert_eq!(assert_fields(32, &[mask(CR::RNGEN), mask(CR::IE)]), 0x0C);
        assert_eq!(assert_fields(32, &[
            mask(SR::DRDY),
            mask(SR::CECS),
            mask(SR::SECS),
            mask(SR::CEIS),
            mask(SR::SEIS),
        ]), 0x67);
        assert_eq!(mask(DR::RNDATA), u32::MAX);
    }
}
