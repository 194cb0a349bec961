// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Window watchdog.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::static_ref::StaticRef;

pub const CR_RESET: u32 = 0x7F;
pub const CFR_RESET: u32 = 0x7F;

register_structs! {
    pub WwdgRegisters {
        /// control register
        (0x0 => pub cr: ReadWrite<u32, CR::Register>),
        /// configuration register
        (0x4 => pub cfr: ReadWrite<u32, CFR::Register>),
        /// status register
        (0x8 => pub sr: ReadWrite<u32, SR::Register>),
        (0xC => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// 7-bit counter, a reset occurs when T6 clears
        T OFFSET(0) NUMBITS(7) [],
        /// Activation bit
        WDGA OFFSET(7) NUMBITS(1) [],
        T_0 OFFSET(0) NUMBITS(1) [],
        T_1 OFFSET(1) NUMBITS(1) [],
        T_2 OFFSET(2) NUMBITS(1) [],
        T_3 OFFSET(3) NUMBITS(1) [],
        T_4 OFFSET(4) NUMBITS(1) [],
        T_5 OFFSET(5) NUMBITS(1) [],
        T_6 OFFSET(6) NUMBITS(1) []
    ],
    pub CFR [
        /// 7-bit window value
        W OFFSET(0) NUMBITS(7) [],
        /// Timer base, PCLK1/4096 divided by
        WDGTB OFFSET(7) NUMBITS(2) [
            DivideBy1 = 0,
            DivideBy2 = 1,
            DivideBy4 = 2,
            DivideBy8 = 3
        ],
        /// Early wakeup interrupt
        EWI OFFSET(9) NUMBITS(1) [],
        W_0 OFFSET(0) NUMBITS(1) [],
        W_1 OFFSET(1) NUMBITS(1) [],
        W_2 OFFSET(2) NUMBITS(1) [],
        W_3 OFFSET(3) NUMBITS(1) [],
        W_4 OFFSET(4) NUMBITS(1) [],
        W_5 OFFSET(5) NUMBITS(1) [],
        W_6 OFFSET(6) NUMBITS(1) [],
        WDGTB_0 OFFSET(7) NUMBITS(1) [],
        WDGTB_1 OFFSET(8) NUMBITS(1) []
    ],
    pub SR [
        /// Early wakeup interrupt flag
        EWIF OFFSET(0) NUMBITS(1) []
    ]
];

pub(crate) const WWDG: StaticRef<WwdgRegisters> =
    unsafe { StaticRef::new(memory_map::WWDG_BASE as *const WwdgRegisters) };

/// Unseparated component names.
#[allow(non_snake_case)]
pub mod legacy {
    pub mod CR {
        pub use crate::wwdg::CR::{
            T_0 as T0, T_1 as T1, T_2 as T2, T_3 as T3, T_4 as T4, T_5 as T5, T_6 as T6,
        };
    }

    pub mod CFR {
        pub use crate::wwdg::CFR::{
            WDGTB_0 as WDGTB0, WDGTB_1 as WDGTB1, W_0 as W0, W_1 as W1, W_2 as W2, W_3 as W3,
            W_4 as W4, W_5 as W5, W_6 as W6,
        };
    }
}

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use tock_registers::interfaces::{ReadWriteable, Readable};
    use tock_registers::registers::InMemoryRegister;

    use super::*;
    use crate::test_util::{assert_components, assert_fields, mask};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(WwdgRegisters, cr), 0x0);
        assert_eq!(offset_of!(WwdgRegisters, cfr), 0x4);
        assert_eq!(offset_of!(WwdgRegisters, sr), 0x8);
        assert_eq!(size_of::<WwdgRegisters>(), 0xC);
        assert_eq!(WWDG.address(), 0x4000_2C00);
    }

    #[test]
    fn fields() {
        assert_eq!(assert_fields(32, &[mask(CR::T), mask(CR::WDGA)]), 0xFF);
        assert_eq!(assert_fields(32, &[mask(CFR::W), mask(CFR::WDGTB), mask(CFR::EWI)]), 0x3FF);
        assert_components(
            mask(CR::T),
            &[
                mask(CR::T_0),
                mask(CR::T_1),
                mask(CR::T_2),
                mask(CR::T_3),
                mask(CR::T_4),
                mask(CR::T_5),
                mask(CR::T_6),
            ],
        );
        assert_components(mask(CFR::WDGTB), &[mask(CFR::WDGTB_0), mask(CFR::WDGTB_1)]);
        assert_eq!(mask(CFR::W) & CFR_RESET, CFR_RESET);
    }

    #[test]
    fn legacy_names() {
        assert_eq!(mask(legacy::CR::T0), 1);
        assert_eq!(mask(legacy::CR::T6), 0x40);
        assert_eq!(mask(legacy::CFR::WDGTB1), mask(CFR::WDGTB_1));
        assert_eq!(legacy::CFR::W3.shift, 3);
    }

    #[test]
    fn counter_reset_keeps_t6_set() {
        let cr = InMemoryRegister::<u32, CR::Register>::new(CR_RESET);
        assert!(cr.is_set(CR::T_6));
        cr.modify(CR::WDGA::SET + CR::T.val(0x50));
        assert_eq!(cr.get(), 0xD0);
    }

    #[test]
    fn status_fields() {
        assert_eq!(assert_fields(32, &[mask(SR::EWIF)]), 0x01);
    }
}
