// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Analog-to-digital converters.
//!
//! ADC1, ADC2 and ADC3 each have their own register block at a 0x100
//! stride; the status, control and multi-mode data registers they share
//! live in a separate common block after them.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::static_ref::StaticRef;

/// Injected channels per converter.
pub const INJECTED_CHANNELS: usize = 4;

register_structs! {
    /// Per-converter registers
    pub AdcRegisters {
        /// status register
        (0x00 => pub sr: ReadWrite<u32, SR::Register>),
        /// control register 1
        (0x04 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// control register 2
        (0x08 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// sample time register 1
        (0x0C => pub smpr1: ReadWrite<u32, SMPR1::Register>),
        /// sample time register 2
        (0x10 => pub smpr2: ReadWrite<u32, SMPR2::Register>),
        /// injected channel data offset registers 1 to 4
        (0x14 => pub jofr: [ReadWrite<u32, JOFR::Register>; INJECTED_CHANNELS]),
        /// watchdog higher threshold register
        (0x24 => pub htr: ReadWrite<u32, HTR::Register>),
        /// watchdog lower threshold register
        (0x28 => pub ltr: ReadWrite<u32, LTR::Register>),
        /// regular sequence register 1
        (0x2C => pub sqr1: ReadWrite<u32, SQR1::Register>),
        /// regular sequence register 2
        (0x30 => pub sqr2: ReadWrite<u32, SQR2::Register>),
        /// regular sequence register 3
        (0x34 => pub sqr3: ReadWrite<u32, SQR3::Register>),
        /// injected sequence register
        (0x38 => pub jsqr: ReadWrite<u32, JSQR::Register>),
        /// injected data registers 1 to 4
        (0x3C => pub jdr: [ReadOnly<u32, JDR::Register>; INJECTED_CHANNELS]),
        /// regular data register
        (0x4C => pub dr: ReadOnly<u32, DR::Register>),
        (0x50 => @END),
    },

    /// Registers shared by the three converters
    pub AdcCommonRegisters {
        /// common status register
        (0x00 => pub csr: ReadOnly<u32, CSR::Register>),
        /// common control register
        (0x04 => pub ccr: ReadWrite<u32, CCR::Register>),
        /// common regular data register for dual and triple modes
        (0x08 => pub cdr: ReadOnly<u32, CDR::Register>),
        (0x0C => @END),
    }
}

register_bitfields![u32,
    pub SR [
        /// Analog watchdog flag
        AWD OFFSET(0) NUMBITS(1) [],
        /// Regular channel end of conversion
        EOC OFFSET(1) NUMBITS(1) [],
        /// Injected channel end of conversion
        JEOC OFFSET(2) NUMBITS(1) [],
        /// Injected channel start flag
        JSTRT OFFSET(3) NUMBITS(1) [],
        /// Regular channel start flag
        STRT OFFSET(4) NUMBITS(1) [],
        /// Overrun
        OVR OFFSET(5) NUMBITS(1) []
    ],
    pub CR1 [
        /// Analog watchdog channel select
        AWDCH OFFSET(0) NUMBITS(5) [],
        /// Interrupt enable for EOC
        EOCIE OFFSET(5) NUMBITS(1) [],
        /// Analog watchdog interrupt enable
        AWDIE OFFSET(6) NUMBITS(1) [],
        /// Interrupt enable for injected channels
        JEOCIE OFFSET(7) NUMBITS(1) [],
        /// Scan mode
        SCAN OFFSET(8) NUMBITS(1) [],
        /// Enable the watchdog on a single channel in scan mode
        AWDSGL OFFSET(9) NUMBITS(1) [],
        /// Automatic injected group conversion
        JAUTO OFFSET(10) NUMBITS(1) [],
        /// Discontinuous mode on regular channels
        DISCEN OFFSET(11) NUMBITS(1) [],
        /// Discontinuous mode on injected channels
        JDISCEN OFFSET(12) NUMBITS(1) [],
        /// Discontinuous mode channel count
        DISCNUM OFFSET(13) NUMBITS(3) [],
        /// Analog watchdog enable on injected channels
        JAWDEN OFFSET(22) NUMBITS(1) [],
        /// Analog watchdog enable on regular channels
        AWDEN OFFSET(23) NUMBITS(1) [],
        /// Resolution
        RES OFFSET(24) NUMBITS(2) [
            TwelveBit = 0,
            TenBit = 1,
            EightBit = 2,
            SixBit = 3
        ],
        /// Overrun interrupt enable
        OVRIE OFFSET(26) NUMBITS(1) [],
        AWDCH_0 OFFSET(0) NUMBITS(1) [],
        AWDCH_1 OFFSET(1) NUMBITS(1) [],
        AWDCH_2 OFFSET(2) NUMBITS(1) [],
        AWDCH_3 OFFSET(3) NUMBITS(1) [],
        AWDCH_4 OFFSET(4) NUMBITS(1) [],
        RES_0 OFFSET(24) NUMBITS(1) [],
        RES_1 OFFSET(25) NUMBITS(1) []
    ],
    pub CR2 [
        /// A/D converter ON / OFF
        ADON OFFSET(0) NUMBITS(1) [],
        /// Continuous conversion
        CONT OFFSET(1) NUMBITS(1) [],
        /// Direct memory access mode
        DMA OFFSET(8) NUMBITS(1) [],
        /// DMA disable selection
        DDS OFFSET(9) NUMBITS(1) [],
        /// End of conversion selection
        EOCS OFFSET(10) NUMBITS(1) [],
        /// Data alignment
        ALIGN OFFSET(11) NUMBITS(1) [
            Right = 0,
            Left = 1
        ],
        /// External event select for injected group
        JEXTSEL OFFSET(16) NUMBITS(4) [],
        /// External trigger enable for injected channels
        JEXTEN OFFSET(20) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            BothEdges = 3
        ],
        /// Start conversion of injected channels
        JSWSTART OFFSET(22) NUMBITS(1) [],
        /// External event select for regular group
        EXTSEL OFFSET(24) NUMBITS(4) [],
        /// External trigger enable for regular channels
        EXTEN OFFSET(28) NUMBITS(2) [
            Disabled = 0,
            RisingEdge = 1,
            FallingEdge = 2,
            BothEdges = 3
        ],
        /// Start conversion of regular channels
        SWSTART OFFSET(30) NUMBITS(1) [],
        EXTSEL_0 OFFSET(24) NUMBITS(1) [],
        EXTSEL_1 OFFSET(25) NUMBITS(1) [],
        EXTSEL_2 OFFSET(26) NUMBITS(1) [],
        EXTSEL_3 OFFSET(27) NUMBITS(1) [],
        EXTEN_0 OFFSET(28) NUMBITS(1) [],
        EXTEN_1 OFFSET(29) NUMBITS(1) []
    ],
    /// Sample time for channels 10 to 18
    pub SMPR1 [
        SMP10 OFFSET(0) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP11 OFFSET(3) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP12 OFFSET(6) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP13 OFFSET(9) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP14 OFFSET(12) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP15 OFFSET(15) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP16 OFFSET(18) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP17 OFFSET(21) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP18 OFFSET(24) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ]
    ],
    /// Sample time for channels 0 to 9
    pub SMPR2 [
        SMP0 OFFSET(0) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP1 OFFSET(3) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP2 OFFSET(6) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP3 OFFSET(9) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP4 OFFSET(12) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP5 OFFSET(15) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP6 OFFSET(18) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP7 OFFSET(21) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP8 OFFSET(24) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ],
        SMP9 OFFSET(27) NUMBITS(3) [
            Cycles3 = 0,
            Cycles15 = 1,
            Cycles28 = 2,
            Cycles56 = 3,
            Cycles84 = 4,
            Cycles112 = 5,
            Cycles144 = 6,
            Cycles480 = 7
        ]
    ],
    pub JOFR [
        /// Data offset for injected channel
        JOFFSET OFFSET(0) NUMBITS(12) []
    ],
    pub HTR [
        /// Analog watchdog higher threshold
        HT OFFSET(0) NUMBITS(12) []
    ],
    pub LTR [
        /// Analog watchdog lower threshold
        LT OFFSET(0) NUMBITS(12) []
    ],
    pub SQR1 [
        /// 13th conversion in regular sequence
        SQ13 OFFSET(0) NUMBITS(5) [],
        /// 14th conversion in regular sequence
        SQ14 OFFSET(5) NUMBITS(5) [],
        /// 15th conversion in regular sequence
        SQ15 OFFSET(10) NUMBITS(5) [],
        /// 16th conversion in regular sequence
        SQ16 OFFSET(15) NUMBITS(5) [],
        /// Regular channel sequence length, minus one
        L OFFSET(20) NUMBITS(4) [],
        L_0 OFFSET(20) NUMBITS(1) [],
        L_1 OFFSET(21) NUMBITS(1) [],
        L_2 OFFSET(22) NUMBITS(1) [],
        L_3 OFFSET(23) NUMBITS(1) []
    ],
    pub SQR2 [
        SQ7 OFFSET(0) NUMBITS(5) [],
        SQ8 OFFSET(5) NUMBITS(5) [],
        SQ9 OFFSET(10) NUMBITS(5) [],
        SQ10 OFFSET(15) NUMBITS(5) [],
        SQ11 OFFSET(20) NUMBITS(5) [],
        SQ12 OFFSET(25) NUMBITS(5) []
    ],
    pub SQR3 [
        SQ1 OFFSET(0) NUMBITS(5) [],
        SQ2 OFFSET(5) NUMBITS(5) [],
        SQ3 OFFSET(10) NUMBITS(5) [],
        SQ4 OFFSET(15) NUMBITS(5) [],
        SQ5 OFFSET(20) NUMBITS(5) [],
        SQ6 OFFSET(25) NUMBITS(5) []
    ],
    pub JSQR [
        /// 1st conversion in injected sequence
        JSQ1 OFFSET(0) NUMBITS(5) [],
        /// 2nd conversion in injected sequence
        JSQ2 OFFSET(5) NUMBITS(5) [],
        /// 3rd conversion in injected sequence
        JSQ3 OFFSET(10) NUMBITS(5) [],
        /// 4th conversion in injected sequence
        JSQ4 OFFSET(15) NUMBITS(5) [],
        /// Injected sequence length, minus one
        JL OFFSET(20) NUMBITS(2) []
    ],
    pub JDR [
        /// Injected data
        JDATA OFFSET(0) NUMBITS(16) []
    ],
    pub DR [
        /// Regular data
        DATA OFFSET(0) NUMBITS(16) []
    ],
    /// Common status: flags of the three converters, read only
    pub CSR [
        AWD1 OFFSET(0) NUMBITS(1) [],
        EOC1 OFFSET(1) NUMBITS(1) [],
        JEOC1 OFFSET(2) NUMBITS(1) [],
        JSTRT1 OFFSET(3) NUMBITS(1) [],
        STRT1 OFFSET(4) NUMBITS(1) [],
        OVR1 OFFSET(5) NUMBITS(1) [],
        AWD2 OFFSET(8) NUMBITS(1) [],
        EOC2 OFFSET(9) NUMBITS(1) [],
        JEOC2 OFFSET(10) NUMBITS(1) [],
        JSTRT2 OFFSET(11) NUMBITS(1) [],
        STRT2 OFFSET(12) NUMBITS(1) [],
        OVR2 OFFSET(13) NUMBITS(1) [],
        AWD3 OFFSET(16) NUMBITS(1) [],
        EOC3 OFFSET(17) NUMBITS(1) [],
        JEOC3 OFFSET(18) NUMBITS(1) [],
        JSTRT3 OFFSET(19) NUMBITS(1) [],
        STRT3 OFFSET(20) NUMBITS(1) [],
        OVR3 OFFSET(21) NUMBITS(1) []
    ],
    pub CCR [
        /// Multi ADC mode selection
        MULTI OFFSET(0) NUMBITS(5) [
            Independent = 0,
            DualRegularInjected = 1,
            DualRegularAlternateTrigger = 2,
            DualInjected = 5,
            DualRegular = 6,
            DualInterleaved = 7,
            DualAlternateTrigger = 9,
            TripleRegularInjected = 17,
            TripleRegularAlternateTrigger = 18,
            TripleInjected = 21,
            TripleRegular = 22,
            TripleInterleaved = 23,
            TripleAlternateTrigger = 25
        ],
        /// Delay between two sampling phases, minus 5 cycles
        DELAY OFFSET(8) NUMBITS(4) [],
        /// DMA disable selection in multi ADC mode
        DDS OFFSET(13) NUMBITS(1) [],
        /// Direct memory access mode for multi ADC mode
        DMA OFFSET(14) NUMBITS(2) [
            Disabled = 0,
            Mode1 = 1,
            Mode2 = 2,
            Mode3 = 3
        ],
        /// ADC prescaler, PCLK2 divided by
        ADCPRE OFFSET(16) NUMBITS(2) [
            DivideBy2 = 0,
            DivideBy4 = 1,
            DivideBy6 = 2,
            DivideBy8 = 3
        ],
        /// VBAT enable
        VBATE OFFSET(22) NUMBITS(1) [],
        /// Temperature sensor and VREFINT enable
        TSVREFE OFFSET(23) NUMBITS(1) [],
        MULTI_0 OFFSET(0) NUMBITS(1) [],
        MULTI_1 OFFSET(1) NUMBITS(1) [],
        MULTI_2 OFFSET(2) NUMBITS(1) [],
        MULTI_3 OFFSET(3) NUMBITS(1) [],
        MULTI_4 OFFSET(4) NUMBITS(1) [],
        ADCPRE_0 OFFSET(16) NUMBITS(1) [],
        ADCPRE_1 OFFSET(17) NUMBITS(1) []
    ],
    pub CDR [
        /// 1st data item of a pair of regular conversions
        DATA1 OFFSET(0) NUMBITS(16) [],
        /// 2nd data item of a pair of regular conversions
        DATA2 OFFSET(16) NUMBITS(16) []
    ]
];

instances! {
    pub enum Adc {
        Adc1("ADC1") = memory_map::ADC1_BASE,
        Adc2("ADC2") = memory_map::ADC2_BASE,
        Adc3("ADC3") = memory_map::ADC3_BASE,
    }
}

impl Adc {
    /// Address of the common block this converter reports to.
    pub const fn common_base(self) -> usize {
        match self {
            Adc::Adc1 | Adc::Adc2 | Adc::Adc3 => memory_map::ADC123_COMMON_BASE,
        }
    }

    /// Master of dual and triple modes.
    pub const fn is_multimode_master(self) -> bool {
        match self {
            Adc::Adc1 => true,
            Adc::Adc2 | Adc::Adc3 => false,
        }
    }

    /// Temperature sensor, VREFINT and VBAT are only wired to ADC1 (channels
    /// 16 to 18).
    pub const fn has_internal_channels(self) -> bool {
        match self {
            Adc::Adc1 => true,
            Adc::Adc2 | Adc::Adc3 => false,
        }
    }

    /// Bit of this converter's flags in the common status register.
    pub const fn csr_shift(self) -> usize {
        match self {
            Adc::Adc1 => 0,
            Adc::Adc2 => 8,
            Adc::Adc3 => 16,
        }
    }
}

pub(crate) const ADC1: StaticRef<AdcRegisters> =
    unsafe { StaticRef::new(memory_map::ADC1_BASE as *const AdcRegisters) };
pub(crate) const ADC2: StaticRef<AdcRegisters> =
    unsafe { StaticRef::new(memory_map::ADC2_BASE as *const AdcRegisters) };
pub(crate) const ADC3: StaticRef<AdcRegisters> =
    unsafe { StaticRef::new(memory_map::ADC3_BASE as *const AdcRegisters) };
pub(crate) const ADC123_COMMON: StaticRef<AdcCommonRegisters> =
    unsafe { StaticRef::new(memory_map::ADC123_COMMON_BASE as *const AdcCommonRegisters) };

#[allow(non_snake_case)]
pub mod legacy {
    pub mod CSR {
        pub use crate::adc::CSR::{OVR1 as DOVR1, OVR2 as DOVR2, OVR3 as DOVR3};
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
    fn converter_offsets() {
        let offsets = [
            (offset_of!(AdcRegisters, sr), 0x00),
            (offset_of!(AdcRegisters, cr1), 0x04),
            (offset_of!(AdcRegisters, cr2), 0x08),
            (offset_of!(AdcRegisters, smpr1), 0x0C),
            (offset_of!(AdcRegisters, smpr2), 0x10),
            (offset_of!(AdcRegisters, jofr), 0x14),
            (offset_of!(AdcRegisters, htr), 0x24),
            (offset_of!(AdcRegisters, ltr), 0x28),
            (offset_of!(AdcRegisters, sqr1), 0x2C),
            (offset_of!(AdcRegisters, sqr2), 0x30),
            (offset_of!(AdcRegisters, sqr3), 0x34),
            (offset_of!(AdcRegisters, jsqr), 0x38),
            (offset_of!(AdcRegisters, jdr), 0x3C),
            (offset_of!(AdcRegisters, dr), 0x4C),
        ];
        for (actual, expected) in offsets {
            assert_eq!(actual, expected);
        }
        // JOFR4 and JDR4
        assert_eq!(offset_of!(AdcRegisters, jofr) + 3 * size_of::<ReadWrite<u32>>(), 0x20);
        assert_eq!(offset_of!(AdcRegisters, jdr) + 3 * size_of::<ReadOnly<u32>>(), 0x48);
        assert_eq!(size_of::<AdcRegisters>(), 0x50);
    }

    #[test]
    fn common_offsets() {
        assert_eq!(offset_of!(AdcCommonRegisters, csr), 0x00);
        assert_eq!(offset_of!(AdcCommonRegisters, ccr), 0x04);
        assert_eq!(offset_of!(AdcCommonRegisters, cdr), 0x08);
        assert_eq!(size_of::<AdcCommonRegisters>(), 0x0C);
    }

    #[test]
    fn watchdog_channel_components_rebuild_the_field() {
        assert_eq!(mask(CR1::AWDCH), 0x1F);
        assert_components(
            mask(CR1::AWDCH),
            &[
                mask(CR1::AWDCH_0),
                mask(CR1::AWDCH_1),
                mask(CR1::AWDCH_2),
                mask(CR1::AWDCH_3),
                mask(CR1::AWDCH_4),
            ],
        );
    }

    #[test]
    fn other_components() {
        assert_components(mask(CR1::RES), &[mask(CR1::RES_0), mask(CR1::RES_1)]);
        assert_components(
            mask(CR2::EXTSEL),
            &[
                mask(CR2::EXTSEL_0),
                mask(CR2::EXTSEL_1),
                mask(CR2::EXTSEL_2),
                mask(CR2::EXTSEL_3),
            ],
        );
        assert_components(mask(CR2::EXTEN), &[mask(CR2::EXTEN_0), mask(CR2::EXTEN_1)]);
        assert_components(
            mask(SQR1::L),
            &[mask(SQR1::L_0), mask(SQR1::L_1), mask(SQR1::L_2), mask(SQR1::L_3)],
        );
        assert_components(
            mask(CCR::MULTI),
            &[
                mask(CCR::MULTI_0),
                mask(CCR::MULTI_1),
                mask(CCR::MULTI_2),
                mask(CCR::MULTI_3),
                mask(CCR::MULTI_4),
            ],
        );
        assert_components(mask(CCR::ADCPRE), &[mask(CCR::ADCPRE_0), mask(CCR::ADCPRE_1)]);
    }

    #[test]
    fn fields_are_disjoint() {
        assert_eq!(assert_fields(32, &[
            mask(SR::AWD),
            mask(SR::EOC),
            mask(SR::JEOC),
            mask(SR::JSTRT),
            mask(SR::STRT),
            mask(SR::OVR),
        ]), 0x3F);
        assert_eq!(assert_fields(32, &[
            mask(CR1::AWDCH),
            mask(CR1::EOCIE),
            mask(CR1::AWDIE),
            mask(CR1::JEOCIE),
            mask(CR1::SCAN),
            mask(CR1::AWDSGL),
            mask(CR1::JAUTO),
            mask(CR1::DISCEN),
            mask(CR1::JDISCEN),
            mask(CR1::DISCNUM),
            mask(CR1::JAWDEN),
            mask(CR1::AWDEN),
            mask(CR1::RES),
            mask(CR1::OVRIE),
        ]), 0x07C0_FFFF);
        assert_eq!(assert_fields(32, &[
            mask(CR2::ADON),
            mask(CR2::CONT),
            mask(CR2::DMA),
            mask(CR2::DDS),
            mask(CR2::EOCS),
            mask(CR2::ALIGN),
            mask(CR2::JEXTSEL),
            mask(CR2::JEXTEN),
            mask(CR2::JSWSTART),
            mask(CR2::EXTSEL),
            mask(CR2::EXTEN),
            mask(CR2::SWSTART),
        ]), 0x7F7F_0F03);
        assert_eq!(assert_fields(32, &[
            mask(SMPR1::SMP10),
            mask(SMPR1::SMP11),
            mask(SMPR1::SMP12),
            mask(SMPR1::SMP13),
            mask(SMPR1::SMP14),
            mask(SMPR1::SMP15),
            mask(SMPR1::SMP16),
            mask(SMPR1::SMP17),
            mask(SMPR1::SMP18),
        ]), 0x07FF_FFFF);
        assert_eq!(assert_fields(32, &[
            mask(SMPR2::SMP0),
            mask(SMPR2::SMP1),
            mask(SMPR2::SMP2),
            mask(SMPR2::SMP3),
            mask(SMPR2::SMP4),
            mask(SMPR2::SMP5),
            mask(SMPR2::SMP6),
            mask(SMPR2::SMP7),
            mask(SMPR2::SMP8),
            mask(SMPR2::SMP9),
        ]), 0x3FFF_FFFF);
        assert_eq!(assert_fields(32, &[
            mask(SQR1::SQ13),
            mask(SQR1::SQ14),
            mask(SQR1::SQ15),
            mask(SQR1::SQ16),
            mask(SQR1::L),
        ]), 0x00FF_FFFF);
        assert_eq!(assert_fields(32, &[
            mask(SQR2::SQ7),
            mask(SQR2::SQ8),
            mask(SQR2::SQ9),
            mask(SQR2::SQ10),
            mask(SQR2::SQ11),
            mask(SQR2::SQ12),
        ]), 0x3FFF_FFFF);
        assert_eq!(assert_fields(32, &[
            mask(JSQR::JSQ1),
            mask(JSQR::JSQ2),
            mask(JSQR::JSQ3),
            mask(JSQR::JSQ4),
            mask(JSQR::JL),
        ]), 0x003F_FFFF);
        assert_eq!(assert_fields(32, &[
            mask(CSR::AWD1),
            mask(CSR::EOC1),
            mask(CSR::JEOC1),
            mask(CSR::JSTRT1),
            mask(CSR::STRT1),
            mask(CSR::OVR1),
            mask(CSR::AWD2),
            mask(CSR::EOC2),
            mask(CSR::JEOC2),
            mask(CSR::JSTRT2),
            mask(CSR::STRT2),
            mask(CSR::OVR2),
            mask(CSR::AWD3),
            mask(CSR::EOC3),
            mask(CSR::JEOC3),
            mask(CSR::JSTRT3),
            mask(CSR::STRT3),
            mask(CSR::OVR3),
        ]), 0x003F_3F3F);
        assert_eq!(assert_fields(32, &[
            mask(CCR::MULTI),
            mask(CCR::DELAY),
            mask(CCR::DDS),
            mask(CCR::DMA),
            mask(CCR::ADCPRE),
            mask(CCR::VBATE),
            mask(CCR::TSVREFE),
        ]), 0x00C3_EF1F);
    }

    #[test]
    fn injected_sequence_positions() {
        assert_eq!(mask(JSQR::JSQ1), 0x0000_001F);
        assert_eq!(mask(JSQR::JSQ2), 0x0000_03E0);
        assert_eq!(mask(JSQR::JSQ3), 0x0000_7C00);
        assert_eq!(mask(JSQR::JSQ4), 0x000F_8000);
        assert_eq!(mask(JSQR::JL), 0x0030_0000);
    }

    #[test]
    fn sample_time_composes() {
        let smpr = InMemoryRegister::<u32, SMPR2::Register>::new(0);
        smpr.modify(SMPR2::SMP3::Cycles480 + SMPR2::SMP9::Cycles15);
        assert_eq!(smpr.get(), (7 << 9) | (1 << 27));
        let cr1 = InMemoryRegister::<u32, CR1::Register>::new(0);
        cr1.modify(CR1::RES::SixBit + CR1::AWDCH.val(18));
        assert_eq!(cr1.get(), 0x0300_0012);
        assert!(cr1.is_set(CR1::AWDCH_4));
        assert!(cr1.is_set(CR1::AWDCH_1));
        assert!(!cr1.is_set(CR1::AWDCH_0));
    }

    #[test]
    fn legacy_names() {
        assert_eq!(mask(legacy::CSR::DOVR1), mask(CSR::OVR1));
        assert_eq!(legacy::CSR::DOVR2.shift, CSR::OVR2.shift);
        assert_eq!(mask(legacy::CSR::DOVR3), mask(CSR::OVR3));
    }

    #[test]
    fn roster() {
        for adc in Adc::ALL {
            assert_eq!(Adc::from_base(adc.base()), Some(*adc));
            assert_eq!(adc.common_base(), memory_map::ADC123_COMMON_BASE);
            assert_eq!(mask(CSR::OVR1) << adc.csr_shift(), 1 << (5 + adc.csr_shift()));
        }
        assert_eq!(Adc::Adc2.base() - Adc::Adc1.base(), 0x100);
        assert!(Adc::Adc1.is_multimode_master());
        assert!(!Adc::Adc3.is_multimode_master());
        assert!(!Adc::Adc2.has_internal_channels());
        assert_eq!(ADC3.address(), memory_map::ADC3_BASE);
        assert_eq!(ADC123_COMMON.address(), Adc::Adc1.base() + 0x300);
    }

    #[test]
    fn sequence_and_watchdog_threshold_fields() {
        assert_eq!(assert_fields(32, &[
            mask(SQR3::SQ1),
            mask(SQR3::SQ2),
            mask(SQR3::SQ3),
            mask(SQR3::SQ4),
            mask(SQR3::SQ5),
            mask(SQR3::SQ6),
        ]), 0x3FFF_FFFF);
        assert_eq!(assert_fields(32, &[mask(LTR::LT)]), 0x0FFF);
        assert_eq!(assert_fields(32, &[mask(HTR::HT)]), 0x0FFF);
    }
}
