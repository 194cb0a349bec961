// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! External interrupt and event controller.
//!
//! Lines 0 to 15 follow the GPIO pins selected in SYSCFG; the remaining
//! lines are wired to internal sources.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::static_ref::StaticRef;

/// Number of EXTI lines.
pub const LINES: usize = 23;

pub const PVD_LINE: usize = 16;
pub const RTC_ALARM_LINE: usize = 17;
pub const OTG_FS_WKUP_LINE: usize = 18;
pub const ETH_WKUP_LINE: usize = 19;
pub const OTG_HS_WKUP_LINE: usize = 20;
pub const RTC_TAMP_STAMP_LINE: usize = 21;
pub const RTC_WKUP_LINE: usize = 22;

register_structs! {
    pub ExtiRegisters {
        /// interrupt mask register
        (0x00 => pub imr: ReadWrite<u32, IMR::Register>),
        /// event mask register
        (0x04 => pub emr: ReadWrite<u32, EMR::Register>),
        /// rising trigger selection register
        (0x08 => pub rtsr: ReadWrite<u32, RTSR::Register>),
        /// falling trigger selection register
        (0x0C => pub ftsr: ReadWrite<u32, FTSR::Register>),
        /// software interrupt event register
        (0x10 => pub swier: ReadWrite<u32, SWIER::Register>),
        /// pending register, write 1 to clear
        (0x14 => pub pr: ReadWrite<u32, PR::Register>),
        (0x18 => @END),
    }
}

register_bitfields![u32,
    pub IMR [
        MR0 OFFSET(0) NUMBITS(1) [],
        MR1 OFFSET(1) NUMBITS(1) [],
        MR2 OFFSET(2) NUMBITS(1) [],
        MR3 OFFSET(3) NUMBITS(1) [],
        MR4 OFFSET(4) NUMBITS(1) [],
        MR5 OFFSET(5) NUMBITS(1) [],
        MR6 OFFSET(6) NUMBITS(1) [],
        MR7 OFFSET(7) NUMBITS(1) [],
        MR8 OFFSET(8) NUMBITS(1) [],
        MR9 OFFSET(9) NUMBITS(1) [],
        MR10 OFFSET(10) NUMBITS(1) [],
        MR11 OFFSET(11) NUMBITS(1) [],
        MR12 OFFSET(12) NUMBITS(1) [],
        MR13 OFFSET(13) NUMBITS(1) [],
        MR14 OFFSET(14) NUMBITS(1) [],
        MR15 OFFSET(15) NUMBITS(1) [],
        MR16 OFFSET(16) NUMBITS(1) [],
        MR17 OFFSET(17) NUMBITS(1) [],
        MR18 OFFSET(18) NUMBITS(1) [],
        MR19 OFFSET(19) NUMBITS(1) [],
        MR20 OFFSET(20) NUMBITS(1) [],
        MR21 OFFSET(21) NUMBITS(1) [],
        MR22 OFFSET(22) NUMBITS(1) [],
        /// All lines
        IM OFFSET(0) NUMBITS(23) []
    ],
    pub EMR [
        MR0 OFFSET(0) NUMBITS(1) [],
        MR1 OFFSET(1) NUMBITS(1) [],
        MR2 OFFSET(2) NUMBITS(1) [],
        MR3 OFFSET(3) NUMBITS(1) [],
        MR4 OFFSET(4) NUMBITS(1) [],
        MR5 OFFSET(5) NUMBITS(1) [],
        MR6 OFFSET(6) NUMBITS(1) [],
        MR7 OFFSET(7) NUMBITS(1) [],
        MR8 OFFSET(8) NUMBITS(1) [],
        MR9 OFFSET(9) NUMBITS(1) [],
        MR10 OFFSET(10) NUMBITS(1) [],
        MR11 OFFSET(11) NUMBITS(1) [],
        MR12 OFFSET(12) NUMBITS(1) [],
        MR13 OFFSET(13) NUMBITS(1) [],
        MR14 OFFSET(14) NUMBITS(1) [],
        MR15 OFFSET(15) NUMBITS(1) [],
        MR16 OFFSET(16) NUMBITS(1) [],
        MR17 OFFSET(17) NUMBITS(1) [],
        MR18 OFFSET(18) NUMBITS(1) [],
        MR19 OFFSET(19) NUMBITS(1) [],
        MR20 OFFSET(20) NUMBITS(1) [],
        MR21 OFFSET(21) NUMBITS(1) [],
        MR22 OFFSET(22) NUMBITS(1) [],
        /// All lines
        EM OFFSET(0) NUMBITS(23) []
    ],
    pub RTSR [
        TR0 OFFSET(0) NUMBITS(1) [],
        TR1 OFFSET(1) NUMBITS(1) [],
        TR2 OFFSET(2) NUMBITS(1) [],
        TR3 OFFSET(3) NUMBITS(1) [],
        TR4 OFFSET(4) NUMBITS(1) [],
        TR5 OFFSET(5) NUMBITS(1) [],
        TR6 OFFSET(6) NUMBITS(1) [],
        TR7 OFFSET(7) NUMBITS(1) [],
        TR8 OFFSET(8) NUMBITS(1) [],
        TR9 OFFSET(9) NUMBITS(1) [],
        TR10 OFFSET(10) NUMBITS(1) [],
        TR11 OFFSET(11) NUMBITS(1) [],
        TR12 OFFSET(12) NUMBITS(1) [],
        TR13 OFFSET(13) NUMBITS(1) [],
        TR14 OFFSET(14) NUMBITS(1) [],
        TR15 OFFSET(15) NUMBITS(1) [],
        TR16 OFFSET(16) NUMBITS(1) [],
        TR17 OFFSET(17) NUMBITS(1) [],
        TR18 OFFSET(18) NUMBITS(1) [],
        TR19 OFFSET(19) NUMBITS(1) [],
        TR20 OFFSET(20) NUMBITS(1) [],
        TR21 OFFSET(21) NUMBITS(1) [],
        TR22 OFFSET(22) NUMBITS(1) [],
        /// All lines
        RT OFFSET(0) NUMBITS(23) []
    ],
    pub FTSR [
        TR0 OFFSET(0) NUMBITS(1) [],
        TR1 OFFSET(1) NUMBITS(1) [],
        TR2 OFFSET(2) NUMBITS(1) [],
        TR3 OFFSET(3) NUMBITS(1) [],
        TR4 OFFSET(4) NUMBITS(1) [],
        TR5 OFFSET(5) NUMBITS(1) [],
        TR6 OFFSET(6) NUMBITS(1) [],
        TR7 OFFSET(7) NUMBITS(1) [],
        TR8 OFFSET(8) NUMBITS(1) [],
        TR9 OFFSET(9) NUMBITS(1) [],
        TR10 OFFSET(10) NUMBITS(1) [],
        TR11 OFFSET(11) NUMBITS(1) [],
        TR12 OFFSET(12) NUMBITS(1) [],
        TR13 OFFSET(13) NUMBITS(1) [],
        TR14 OFFSET(14) NUMBITS(1) [],
        TR15 OFFSET(15) NUMBITS(1) [],
        TR16 OFFSET(16) NUMBITS(1) [],
        TR17 OFFSET(17) NUMBITS(1) [],
        TR18 OFFSET(18) NUMBITS(1) [],
        TR19 OFFSET(19) NUMBITS(1) [],
        TR20 OFFSET(20) NUMBITS(1) [],
        TR21 OFFSET(21) NUMBITS(1) [],
        TR22 OFFSET(22) NUMBITS(1) [],
        /// All lines
        FT OFFSET(0) NUMBITS(23) []
    ],
    pub SWIER [
        SWIER0 OFFSET(0) NUMBITS(1) [],
        SWIER1 OFFSET(1) NUMBITS(1) [],
        SWIER2 OFFSET(2) NUMBITS(1) [],
        SWIER3 OFFSET(3) NUMBITS(1) [],
        SWIER4 OFFSET(4) NUMBITS(1) [],
        SWIER5 OFFSET(5) NUMBITS(1) [],
        SWIER6 OFFSET(6) NUMBITS(1) [],
        SWIER7 OFFSET(7) NUMBITS(1) [],
        SWIER8 OFFSET(8) NUMBITS(1) [],
        SWIER9 OFFSET(9) NUMBITS(1) [],
        SWIER10 OFFSET(10) NUMBITS(1) [],
        SWIER11 OFFSET(11) NUMBITS(1) [],
        SWIER12 OFFSET(12) NUMBITS(1) [],
        SWIER13 OFFSET(13) NUMBITS(1) [],
        SWIER14 OFFSET(14) NUMBITS(1) [],
        SWIER15 OFFSET(15) NUMBITS(1) [],
        SWIER16 OFFSET(16) NUMBITS(1) [],
        SWIER17 OFFSET(17) NUMBITS(1) [],
        SWIER18 OFFSET(18) NUMBITS(1) [],
        SWIER19 OFFSET(19) NUMBITS(1) [],
        SWIER20 OFFSET(20) NUMBITS(1) [],
        SWIER21 OFFSET(21) NUMBITS(1) [],
        SWIER22 OFFSET(22) NUMBITS(1) [],
        /// All lines
        SWI OFFSET(0) NUMBITS(23) []
    ],
    pub PR [
        PR0 OFFSET(0) NUMBITS(1) [],
        PR1 OFFSET(1) NUMBITS(1) [],
        PR2 OFFSET(2) NUMBITS(1) [],
        PR3 OFFSET(3) NUMBITS(1) [],
        PR4 OFFSET(4) NUMBITS(1) [],
        PR5 OFFSET(5) NUMBITS(1) [],
        PR6 OFFSET(6) NUMBITS(1) [],
        PR7 OFFSET(7) NUMBITS(1) [],
        PR8 OFFSET(8) NUMBITS(1) [],
        PR9 OFFSET(9) NUMBITS(1) [],
        PR10 OFFSET(10) NUMBITS(1) [],
        PR11 OFFSET(11) NUMBITS(1) [],
        PR12 OFFSET(12) NUMBITS(1) [],
        PR13 OFFSET(13) NUMBITS(1) [],
        PR14 OFFSET(14) NUMBITS(1) [],
        PR15 OFFSET(15) NUMBITS(1) [],
        PR16 OFFSET(16) NUMBITS(1) [],
        PR17 OFFSET(17) NUMBITS(1) [],
        PR18 OFFSET(18) NUMBITS(1) [],
        PR19 OFFSET(19) NUMBITS(1) [],
        PR20 OFFSET(20) NUMBITS(1) [],
        PR21 OFFSET(21) NUMBITS(1) [],
        PR22 OFFSET(22) NUMBITS(1) [],
        /// All lines
        PIF OFFSET(0) NUMBITS(23) []
    ]
];

pub(crate) const EXTI: StaticRef<ExtiRegisters> =
    unsafe { StaticRef::new(memory_map::EXTI_BASE as *const ExtiRegisters) };

/// Per-line names from later reference manuals.
#[allow(non_snake_case)]
pub mod legacy {
    pub mod IMR {
        pub use crate::exti::IMR::{
            MR0 as IM0,
            MR1 as IM1,
            MR2 as IM2,
            MR3 as IM3,
            MR4 as IM4,
            MR5 as IM5,
            MR6 as IM6,
            MR7 as IM7,
            MR8 as IM8,
            MR9 as IM9,
            MR10 as IM10,
            MR11 as IM11,
            MR12 as IM12,
            MR13 as IM13,
            MR14 as IM14,
            MR15 as IM15,
            MR16 as IM16,
            MR17 as IM17,
            MR18 as IM18,
            MR19 as IM19,
            MR20 as IM20,
            MR21 as IM21,
            MR22 as IM22,
        };
    }

    pub mod EMR {
        pub use crate::exti::EMR::{
            MR0 as EM0,
            MR1 as EM1,
            MR2 as EM2,
            MR3 as EM3,
            MR4 as EM4,
            MR5 as EM5,
            MR6 as EM6,
            MR7 as EM7,
            MR8 as EM8,
            MR9 as EM9,
            MR10 as EM10,
            MR11 as EM11,
            MR12 as EM12,
            MR13 as EM13,
            MR14 as EM14,
            MR15 as EM15,
            MR16 as EM16,
            MR17 as EM17,
            MR18 as EM18,
            MR19 as EM19,
            MR20 as EM20,
            MR21 as EM21,
            MR22 as EM22,
        };
    }

    pub mod RTSR {
        pub use crate::exti::RTSR::{
            TR0 as RT0,
            TR1 as RT1,
            TR2 as RT2,
            TR3 as RT3,
            TR4 as RT4,
            TR5 as RT5,
            TR6 as RT6,
            TR7 as RT7,
            TR8 as RT8,
            TR9 as RT9,
            TR10 as RT10,
            TR11 as RT11,
            TR12 as RT12,
            TR13 as RT13,
            TR14 as RT14,
            TR15 as RT15,
            TR16 as RT16,
            TR17 as RT17,
            TR18 as RT18,
            TR19 as RT19,
            TR20 as RT20,
            TR21 as RT21,
            TR22 as RT22,
        };
    }

    pub mod FTSR {
        pub use crate::exti::FTSR::{
            TR0 as FT0,
            TR1 as FT1,
            TR2 as FT2,
            TR3 as FT3,
            TR4 as FT4,
            TR5 as FT5,
            TR6 as FT6,
            TR7 as FT7,
            TR8 as FT8,
            TR9 as FT9,
            TR10 as FT10,
            TR11 as FT11,
            TR12 as FT12,
            TR13 as FT13,
            TR14 as FT14,
            TR15 as FT15,
            TR16 as FT16,
            TR17 as FT17,
            TR18 as FT18,
            TR19 as FT19,
            TR20 as FT20,
            TR21 as FT21,
            TR22 as FT22,
        };
    }

    pub mod SWIER {
        pub use crate::exti::SWIER::{
            SWIER0 as SWI0,
            SWIER1 as SWI1,
            SWIER2 as SWI2,
            SWIER3 as SWI3,
            SWIER4 as SWI4,
            SWIER5 as SWI5,
            SWIER6 as SWI6,
            SWIER7 as SWI7,
            SWIER8 as SWI8,
            SWIER9 as SWI9,
            SWIER10 as SWI10,
            SWIER11 as SWI11,
            SWIER12 as SWI12,
            SWIER13 as SWI13,
            SWIER14 as SWI14,
            SWIER15 as SWI15,
            SWIER16 as SWI16,
            SWIER17 as SWI17,
            SWIER18 as SWI18,
            SWIER19 as SWI19,
            SWIER20 as SWI20,
            SWIER21 as SWI21,
            SWIER22 as SWI22,
        };
    }

    pub mod PR {
        pub use crate::exti::PR::{
            PR0 as PIF0,
            PR1 as PIF1,
            PR2 as PIF2,
            PR3 as PIF3,
            PR4 as PIF4,
            PR5 as PIF5,
            PR6 as PIF6,
            PR7 as PIF7,
            PR8 as PIF8,
            PR9 as PIF9,
            PR10 as PIF10,
            PR11 as PIF11,
            PR12 as PIF12,
            PR13 as PIF13,
            PR14 as PIF14,
            PR15 as PIF15,
            PR16 as PIF16,
            PR17 as PIF17,
            PR18 as PIF18,
            PR19 as PIF19,
            PR20 as PIF20,
            PR21 as PIF21,
            PR22 as PIF22,
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
        assert_eq!(offset_of!(ExtiRegisters, imr), 0x00);
        assert_eq!(offset_of!(ExtiRegisters, emr), 0x04);
        assert_eq!(offset_of!(ExtiRegisters, rtsr), 0x08);
        assert_eq!(offset_of!(ExtiRegisters, ftsr), 0x0C);
        assert_eq!(offset_of!(ExtiRegisters, swier), 0x10);
        assert_eq!(offset_of!(ExtiRegisters, pr), 0x14);
        assert_eq!(size_of::<ExtiRegisters>(), 0x18);
        assert_eq!(EXTI.address(), 0x4001_3C00);
    }

    #[test]
    fn one_bit_per_line() {
        let imr = [
            mask(IMR::MR0),
            mask(IMR::MR1),
            mask(IMR::MR2),
            mask(IMR::MR3),
            mask(IMR::MR4),
            mask(IMR::MR5),
            mask(IMR::MR6),
            mask(IMR::MR7),
            mask(IMR::MR8),
            mask(IMR::MR9),
            mask(IMR::MR10),
            mask(IMR::MR11),
            mask(IMR::MR12),
            mask(IMR::MR13),
            mask(IMR::MR14),
            mask(IMR::MR15),
            mask(IMR::MR16),
            mask(IMR::MR17),
            mask(IMR::MR18),
            mask(IMR::MR19),
            mask(IMR::MR20),
            mask(IMR::MR21),
            mask(IMR::MR22),
        ];
        assert_eq!(assert_fields(32, &imr), 0x007F_FFFF);
        assert_components(mask(IMR::IM), &imr);
        let pr = [
            mask(PR::PR0),
            mask(PR::PR1),
            mask(PR::PR2),
            mask(PR::PR3),
            mask(PR::PR4),
            mask(PR::PR5),
            mask(PR::PR6),
            mask(PR::PR7),
            mask(PR::PR8),
            mask(PR::PR9),
            mask(PR::PR10),
            mask(PR::PR11),
            mask(PR::PR12),
            mask(PR::PR13),
            mask(PR::PR14),
            mask(PR::PR15),
            mask(PR::PR16),
            mask(PR::PR17),
            mask(PR::PR18),
            mask(PR::PR19),
            mask(PR::PR20),
            mask(PR::PR21),
            mask(PR::PR22),
        ];
        assert_components(mask(PR::PIF), &pr);
        for (line, m) in pr.iter().enumerate() {
            assert_eq!(*m, 1 << line);
        }
        assert_eq!(mask(EMR::EM), mask(IMR::IM));
        assert_eq!(mask(RTSR::RT), mask(FTSR::FT));
        assert_eq!(mask(SWIER::SWI), 0x007F_FFFF);
        assert_eq!(mask(RTSR::TR22), 1 << RTC_WKUP_LINE);
        assert_eq!(mask(FTSR::TR16), 1 << PVD_LINE);
    }

    #[test]
    fn legacy_names() {
        assert_eq!(mask(legacy::IMR::IM0), mask(IMR::MR0));
        assert_eq!(mask(legacy::EMR::EM22), mask(EMR::MR22));
        assert_eq!(mask(legacy::RTSR::RT13), mask(RTSR::TR13));
        assert_eq!(mask(legacy::FTSR::FT1), mask(FTSR::TR1));
        assert_eq!(mask(legacy::SWIER::SWI9), mask(SWIER::SWIER9));
        assert_eq!(legacy::PR::PIF17.shift, RTC_ALARM_LINE);
    }

    #[test]
    fn unmask_line() {
        let imr = InMemoryRegister::<u32, IMR::Register>::new(0);
        imr.modify(IMR::MR13::SET + IMR::MR0::SET);
        assert_eq!(imr.read(IMR::IM), 0x2001);
        imr.modify(legacy::IMR::IM13::CLEAR);
        assert_eq!(imr.get(), 0x1);
    }
}
