// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Digital-to-analog converter.
//!
//! One block drives both output channels. Channel 2 fields of CR and SR
//! mirror channel 1 sixteen bits higher.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::static_ref::StaticRef;

register_structs! {
    pub DacRegisters {
        /// control register
        (0x00 => pub cr: ReadWrite<u32, CR::Register>),
        /// software trigger register
        (0x04 => pub swtrigr: WriteOnly<u32, SWTRIGR::Register>),
        /// channel 1 12-bit right-aligned data holding register
        (0x08 => pub dhr12r1: ReadWrite<u32, DHR12R1::Register>),
        /// channel 1 12-bit left-aligned data holding register
        (0x0C => pub dhr12l1: ReadWrite<u32, DHR12L1::Register>),
        /// channel 1 8-bit right-aligned data holding register
        (0x10 => pub dhr8r1: ReadWrite<u32, DHR8R1::Register>),
        /// channel 2 12-bit right-aligned data holding register
        (0x14 => pub dhr12r2: ReadWrite<u32, DHR12R2::Register>),
        /// channel 2 12-bit left-aligned data holding register
        (0x18 => pub dhr12l2: ReadWrite<u32, DHR12L2::Register>),
        /// channel 2 8-bit right-aligned data holding register
        (0x1C => pub dhr8r2: ReadWrite<u32, DHR8R2::Register>),
        /// dual 12-bit right-aligned data holding register
        (0x20 => pub dhr12rd: ReadWrite<u32, DHR12RD::Register>),
        /// dual 12-bit left-aligned data holding register
        (0x24 => pub dhr12ld: ReadWrite<u32, DHR12LD::Register>),
        /// dual 8-bit right-aligned data holding register
        (0x28 => pub dhr8rd: ReadWrite<u32, DHR8RD::Register>),
        /// channel 1 data output register
        (0x2C => pub dor1: ReadOnly<u32, DOR1::Register>),
        /// channel 2 data output register
        (0x30 => pub dor2: ReadOnly<u32, DOR2::Register>),
        /// status register
        (0x34 => pub sr: ReadWrite<u32, SR::Register>),
        (0x38 => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Channel 1 enable
        EN1 OFFSET(0) NUMBITS(1) [],
        /// Channel 1 output buffer disable
        BOFF1 OFFSET(1) NUMBITS(1) [],
        /// Channel 1 trigger enable
        TEN1 OFFSET(2) NUMBITS(1) [],
        /// Channel 1 trigger selection
        TSEL1 OFFSET(3) NUMBITS(3) [
            Tim6Trgo = 0,
            Tim8Trgo = 1,
            Tim7Trgo = 2,
            Tim5Trgo = 3,
            Tim2Trgo = 4,
            Tim4Trgo = 5,
            Exti9 = 6,
            Software = 7
        ],
        /// Channel 1 noise/triangle wave generation
        WAVE1 OFFSET(6) NUMBITS(2) [
            Disabled = 0,
            Noise = 1,
            Triangle = 2
        ],
        /// Channel 1 mask/amplitude selector
        MAMP1 OFFSET(8) NUMBITS(4) [],
        /// Channel 1 DMA enable
        DMAEN1 OFFSET(12) NUMBITS(1) [],
        /// Channel 1 DMA underrun interrupt enable
        DMAUDRIE1 OFFSET(13) NUMBITS(1) [],
        /// Channel 2 enable
        EN2 OFFSET(16) NUMBITS(1) [],
        /// Channel 2 output buffer disable
        BOFF2 OFFSET(17) NUMBITS(1) [],
        /// Channel 2 trigger enable
        TEN2 OFFSET(18) NUMBITS(1) [],
        /// Channel 2 trigger selection
        TSEL2 OFFSET(19) NUMBITS(3) [
            Tim6Trgo = 0,
            Tim8Trgo = 1,
            Tim7Trgo = 2,
            Tim5Trgo = 3,
            Tim2Trgo = 4,
            Tim4Trgo = 5,
            Exti9 = 6,
            Software = 7
        ],
        /// Channel 2 noise/triangle wave generation
        WAVE2 OFFSET(22) NUMBITS(2) [
            Disabled = 0,
            Noise = 1,
            Triangle = 2
        ],
        /// Channel 2 mask/amplitude selector
        MAMP2 OFFSET(24) NUMBITS(4) [],
        /// Channel 2 DMA enable
        DMAEN2 OFFSET(28) NUMBITS(1) [],
        /// Channel 2 DMA underrun interrupt enable
        DMAUDRIE2 OFFSET(29) NUMBITS(1) [],
        TSEL1_0 OFFSET(3) NUMBITS(1) [],
        TSEL1_1 OFFSET(4) NUMBITS(1) [],
        TSEL1_2 OFFSET(5) NUMBITS(1) [],
        WAVE1_0 OFFSET(6) NUMBITS(1) [],
        WAVE1_1 OFFSET(7) NUMBITS(1) [],
        MAMP1_0 OFFSET(8) NUMBITS(1) [],
        MAMP1_1 OFFSET(9) NUMBITS(1) [],
        MAMP1_2 OFFSET(10) NUMBITS(1) [],
        MAMP1_3 OFFSET(11) NUMBITS(1) [],
        TSEL2_0 OFFSET(19) NUMBITS(1) [],
        TSEL2_1 OFFSET(20) NUMBITS(1) [],
        TSEL2_2 OFFSET(21) NUMBITS(1) [],
        WAVE2_0 OFFSET(22) NUMBITS(1) [],
        WAVE2_1 OFFSET(23) NUMBITS(1) [],
        MAMP2_0 OFFSET(24) NUMBITS(1) [],
        MAMP2_1 OFFSET(25) NUMBITS(1) [],
        MAMP2_2 OFFSET(26) NUMBITS(1) [],
        MAMP2_3 OFFSET(27) NUMBITS(1) []
    ],
    pub SWTRIGR [
        SWTRIG1 OFFSET(0) NUMBITS(1) [],
        SWTRIG2 OFFSET(1) NUMBITS(1) []
    ],
    pub DHR12R1 [
        DACC1DHR OFFSET(0) NUMBITS(12) []
    ],
    pub DHR12L1 [
        DACC1DHR OFFSET(4) NUMBITS(12) []
    ],
    pub DHR8R1 [
        DACC1DHR OFFSET(0) NUMBITS(8) []
    ],
    pub DHR12R2 [
        DACC2DHR OFFSET(0) NUMBITS(12) []
    ],
    pub DHR12L2 [
        DACC2DHR OFFSET(4) NUMBITS(12) []
    ],
    pub DHR8R2 [
        DACC2DHR OFFSET(0) NUMBITS(8) []
    ],
    pub DHR12RD [
        DACC1DHR OFFSET(0) NUMBITS(12) [],
        DACC2DHR OFFSET(16) NUMBITS(12) []
    ],
    pub DHR12LD [
        DACC1DHR OFFSET(4) NUMBITS(12) [],
        DACC2DHR OFFSET(20) NUMBITS(12) []
    ],
    pub DHR8RD [
        DACC1DHR OFFSET(0) NUMBITS(8) [],
        DACC2DHR OFFSET(8) NUMBITS(8) []
    ],
    pub DOR1 [
        DACC1DOR OFFSET(0) NUMBITS(12) []
    ],
    pub DOR2 [
        DACC2DOR OFFSET(0) NUMBITS(12) []
    ],
    pub SR [
        /// Channel 1 DMA underrun flag
        DMAUDR1 OFFSET(13) NUMBITS(1) [],
        /// Channel 2 DMA underrun flag
        DMAUDR2 OFFSET(29) NUMBITS(1) []
    ]
];

/// The two output channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    One,
    Two,
}

impl Channel {
    /// Distance of this channel's fields in CR and SR from channel 1's.
    pub const fn shift(self) -> usize {
        match self {
            Channel::One => 0,
            Channel::Two => 16,
        }
    }

    /// Output pin: PA4 for channel 1, PA5 for channel 2.
    pub const fn pin(self) -> (crate::gpio::Port, u8) {
        match self {
            Channel::One => (crate::gpio::Port::A, 4),
            Channel::Two => (crate::gpio::Port::A, 5),
        }
    }
}

pub(crate) const DAC: StaticRef<DacRegisters> =
    unsafe { StaticRef::new(memory_map::DAC_BASE as *const DacRegisters) };

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use tock_registers::interfaces::{ReadWriteable, Readable};
    use tock_registers::registers::InMemoryRegister;

    use super::*;
    use crate::test_util::{assert_components, assert_fields, mask};

    #[test]
    fn layout() {
        let offsets = [
            (offset_of!(DacRegisters, cr), 0x00),
            (offset_of!(DacRegisters, swtrigr), 0x04),
            (offset_of!(DacRegisters, dhr12r1), 0x08),
            (offset_of!(DacRegisters, dhr12l1), 0x0C),
            (offset_of!(DacRegisters, dhr8r1), 0x10),
            (offset_of!(DacRegisters, dhr12r2), 0x14),
            (offset_of!(DacRegisters, dhr12l2), 0x18),
            (offset_of!(DacRegisters, dhr8r2), 0x1C),
            (offset_of!(DacRegisters, dhr12rd), 0x20),
            (offset_of!(DacRegisters, dhr12ld), 0x24),
            (offset_of!(DacRegisters, dhr8rd), 0x28),
            (offset_of!(DacRegisters, dor1), 0x2C),
            (offset_of!(DacRegisters, dor2), 0x30),
            (offset_of!(DacRegisters, sr), 0x34),
        ];
        for (actual, expected) in offsets {
            assert_eq!(actual, expected);
        }
        assert_eq!(size_of::<DacRegisters>(), 0x38);
        assert_eq!(DAC.address(), 0x4000_7400);
    }

    #[test]
    fn control_fields() {
        assert_eq!(assert_fields(32, &[
            mask(CR::EN1),
            mask(CR::BOFF1),
            mask(CR::TEN1),
            mask(CR::TSEL1),
            mask(CR::WAVE1),
            mask(CR::MAMP1),
            mask(CR::DMAEN1),
            mask(CR::DMAUDRIE1),
            mask(CR::EN2),
            mask(CR::BOFF2),
            mask(CR::TEN2),
            mask(CR::TSEL2),
            mask(CR::WAVE2),
            mask(CR::MAMP2),
            mask(CR::DMAEN2),
            mask(CR::DMAUDRIE2),
        ]), 0x3FFF_3FFF);
        assert_components(
            mask(CR::TSEL1),
            &[mask(CR::TSEL1_0), mask(CR::TSEL1_1), mask(CR::TSEL1_2)],
        );
        assert_components(mask(CR::WAVE2), &[mask(CR::WAVE2_0), mask(CR::WAVE2_1)]);
        assert_components(
            mask(CR::MAMP2),
            &[mask(CR::MAMP2_0), mask(CR::MAMP2_1), mask(CR::MAMP2_2), mask(CR::MAMP2_3)],
        );
    }

    #[test]
    fn channel_two_mirrors_channel_one() {
        let pairs = [
            (mask(CR::EN1), mask(CR::EN2)),
            (mask(CR::TSEL1), mask(CR::TSEL2)),
            (mask(CR::MAMP1), mask(CR::MAMP2)),
            (mask(CR::DMAUDRIE1), mask(CR::DMAUDRIE2)),
            (mask(SR::DMAUDR1), mask(SR::DMAUDR2)),
        ];
        for (one, two) in pairs {
            assert_eq!(one << Channel::Two.shift(), two);
        }
    }

    #[test]
    fn data_holding_alignment() {
        assert_eq!(mask(DHR12R1::DACC1DHR), 0x0FFF);
        assert_eq!(mask(DHR12L1::DACC1DHR), 0xFFF0);
        assert_eq!(mask(DHR8R2::DACC2DHR), 0xFF);
        assert_eq!(
            assert_fields(32, &[mask(DHR12RD::DACC1DHR), mask(DHR12RD::DACC2DHR)]),
            0x0FFF_0FFF,
        );
        assert_eq!(
            assert_fields(32, &[mask(DHR12LD::DACC1DHR), mask(DHR12LD::DACC2DHR)]),
            0xFFF0_FFF0,
        );
        assert_eq!(assert_fields(32, &[mask(DHR8RD::DACC1DHR), mask(DHR8RD::DACC2DHR)]), 0xFFFF);
    }

    #[test]
    fn triangle_on_channel_two() {
        let cr = InMemoryRegister::<u32, CR::Register>::new(0);
        cr.modify(CR::EN2::SET + CR::TEN2::SET + CR::TSEL2::Software + CR::WAVE2::Triangle);
        assert_eq!(cr.get(), (1 << 16) | (1 << 18) | (7 << 19) | (2 << 22));
        assert_eq!(cr.read(CR::EN1), 0);
        assert_eq!(Channel::Two.pin(), (crate::gpio::Port::A, 5));
    }

    #[test]
    fn left_aligned_and_software_trigger_fields() {
        assert_eq!(assert_fields(32, &[mask(DHR12L2::DACC2DHR)]), 0xFFF0);
        assert_eq!(assert_fields(32, &[mask(SWTRIGR::SWTRIG1), mask(SWTRIGR::SWTRIG2)]), 0x03);
    }
}
