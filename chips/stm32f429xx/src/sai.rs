// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Serial audio interface.
//!
//! SAI1 has a global configuration register followed by two identical
//! audio sub-blocks, A and B.

use tock_registers::fields::FieldValue;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    pub SaiRegisters {
        /// global configuration register
        (0x00 => pub gcr: ReadWrite<u32, GCR::Register>),
        (0x04 => @END),
    },

    pub SaiBlockRegisters {
        (0x00 => pub cr1: ReadWrite<u32, CR1::Register>),
        (0x04 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// frame configuration register
        (0x08 => pub frcr: ReadWrite<u32, FRCR::Register>),
        /// slot register
        (0x0C => pub slotr: ReadWrite<u32, SLOTR::Register>),
        /// interrupt mask register
        (0x10 => pub imr: ReadWrite<u32, IMR::Register>),
        (0x14 => pub sr: ReadOnly<u32, SR::Register>),
        /// clear flag register
        (0x18 => pub clrfr: WriteOnly<u32, CLRFR::Register>),
        (0x1C => pub dr: ReadWrite<u32>),
        (0x20 => @END),
    }
}

register_bitfields![u32,
    pub GCR [
        /// Synchronization input
        SYNCIN OFFSET(0) NUMBITS(2) [],
        /// Synchronization output
        SYNCOUT OFFSET(4) NUMBITS(2) [
            None = 0,
            BlockA = 1,
            BlockB = 2
        ],
        SYNCIN_0 OFFSET(0) NUMBITS(1) [],
        SYNCIN_1 OFFSET(1) NUMBITS(1) [],
        SYNCOUT_0 OFFSET(4) NUMBITS(1) [],
        SYNCOUT_1 OFFSET(5) NUMBITS(1) []
    ],
    pub CR1 [
        /// Audio block mode
        MODE OFFSET(0) NUMBITS(2) [
            MasterTransmitter = 0,
            MasterReceiver = 1,
            SlaveTransmitter = 2,
            SlaveReceiver = 3
        ],
        /// Protocol configuration
        PRTCFG OFFSET(2) NUMBITS(2) [
            Free = 0,
            Spdif = 1,
            Ac97 = 2
        ],
        /// Data size
        DS OFFSET(5) NUMBITS(3) [
            Bits8 = 2,
            Bits10 = 3,
            Bits16 = 4,
            Bits20 = 5,
            Bits24 = 6,
            Bits32 = 7
        ],
        /// Least significant bit first
        LSBFIRST OFFSET(8) NUMBITS(1) [],
        /// Clock strobing edge
        CKSTR OFFSET(9) NUMBITS(1) [],
        /// Synchronization enable
        SYNCEN OFFSET(10) NUMBITS(2) [
            Asynchronous = 0,
            Internal = 1,
            External = 2
        ],
        /// Mono mode
        MONO OFFSET(12) NUMBITS(1) [],
        /// Output drive
        OUTDRIV OFFSET(13) NUMBITS(1) [],
        /// Audio block enable
        SAIEN OFFSET(16) NUMBITS(1) [],
        /// DMA enable
        DMAEN OFFSET(17) NUMBITS(1) [],
        /// No divider
        NODIV OFFSET(19) NUMBITS(1) [],
        /// Master clock divider
        MCKDIV OFFSET(20) NUMBITS(4) [],
        MODE_0 OFFSET(0) NUMBITS(1) [],
        MODE_1 OFFSET(1) NUMBITS(1) [],
        PRTCFG_0 OFFSET(2) NUMBITS(1) [],
        PRTCFG_1 OFFSET(3) NUMBITS(1) [],
        DS_0 OFFSET(5) NUMBITS(1) [],
        DS_1 OFFSET(6) NUMBITS(1) [],
        DS_2 OFFSET(7) NUMBITS(1) [],
        SYNCEN_0 OFFSET(10) NUMBITS(1) [],
        SYNCEN_1 OFFSET(11) NUMBITS(1) [],
        MCKDIV_0 OFFSET(20) NUMBITS(1) [],
        MCKDIV_1 OFFSET(21) NUMBITS(1) [],
        MCKDIV_2 OFFSET(22) NUMBITS(1) [],
        MCKDIV_3 OFFSET(23) NUMBITS(1) []
    ],
    pub CR2 [
        /// FIFO threshold
        FTH OFFSET(0) NUMBITS(3) [
            Empty = 0,
            Quarter = 1,
            Half = 2,
            ThreeQuarters = 3,
            Full = 4
        ],
        /// FIFO flush
        FFLUSH OFFSET(3) NUMBITS(1) [],
        /// Tristate management on data line
        TRIS OFFSET(4) NUMBITS(1) [],
        /// Mute
        MUTE OFFSET(5) NUMBITS(1) [],
        /// Mute value
        MUTEVAL OFFSET(6) NUMBITS(1) [],
        /// Mute counter
        MUTECNT OFFSET(7) NUMBITS(6) [],
        /// Complement bit
        CPL OFFSET(13) NUMBITS(1) [],
        /// Companding mode
        COMP OFFSET(14) NUMBITS(2) [
            None = 0,
            MuLaw = 2,
            ALaw = 3
        ],
        FTH_0 OFFSET(0) NUMBITS(1) [],
        FTH_1 OFFSET(1) NUMBITS(1) [],
        FTH_2 OFFSET(2) NUMBITS(1) [],
        COMP_0 OFFSET(14) NUMBITS(1) [],
        COMP_1 OFFSET(15) NUMBITS(1) []
    ],
    pub FRCR [
        /// Frame length, minus one
        FRL OFFSET(0) NUMBITS(8) [],
        /// Frame synchronization active level length, minus one
        FSALL OFFSET(8) NUMBITS(7) [],
        /// Frame synchronization definition
        FSDEF OFFSET(16) NUMBITS(1) [],
        /// Frame synchronization polarity
        FSPOL OFFSET(17) NUMBITS(1) [],
        /// Frame synchronization offset
        FSOFF OFFSET(18) NUMBITS(1) []
    ],
    pub SLOTR [
        /// First bit offset
        FBOFF OFFSET(0) NUMBITS(5) [],
        /// Slot size
        SLOTSZ OFFSET(6) NUMBITS(2) [
            DataSize = 0,
            Bits16 = 1,
            Bits32 = 2
        ],
        /// Number of slots, minus one
        NBSLOT OFFSET(8) NUMBITS(4) [],
        /// Slot enable
        SLOTEN OFFSET(16) NUMBITS(16) [],
        SLOTSZ_0 OFFSET(6) NUMBITS(1) [],
        SLOTSZ_1 OFFSET(7) NUMBITS(1) [],
        NBSLOT_0 OFFSET(8) NUMBITS(1) [],
        NBSLOT_1 OFFSET(9) NUMBITS(1) [],
        NBSLOT_2 OFFSET(10) NUMBITS(1) [],
        NBSLOT_3 OFFSET(11) NUMBITS(1) []
    ],
    pub IMR [
        /// Overrun/underrun interrupt enable
        OVRUDRIE OFFSET(0) NUMBITS(1) [],
        /// Mute detection interrupt enable
        MUTEDETIE OFFSET(1) NUMBITS(1) [],
        /// Wrong clock configuration interrupt enable
        WCKCFGIE OFFSET(2) NUMBITS(1) [],
        /// FIFO request interrupt enable
        FREQIE OFFSET(3) NUMBITS(1) [],
        /// Codec not ready interrupt enable
        CNRDYIE OFFSET(4) NUMBITS(1) [],
        /// Anticipated frame synchronization detection interrupt enable
        AFSDETIE OFFSET(5) NUMBITS(1) [],
        /// Late frame synchronization detection interrupt enable
        LFSDETIE OFFSET(6) NUMBITS(1) []
    ],
    pub SR [
        /// Overrun/underrun
        OVRUDR OFFSET(0) NUMBITS(1) [],
        /// Mute detection
        MUTEDET OFFSET(1) NUMBITS(1) [],
        /// Wrong clock configuration
        WCKCFG OFFSET(2) NUMBITS(1) [],
        /// FIFO request
        FREQ OFFSET(3) NUMBITS(1) [],
        /// Codec not ready
        CNRDY OFFSET(4) NUMBITS(1) [],
        /// Anticipated frame synchronization detection
        AFSDET OFFSET(5) NUMBITS(1) [],
        /// Late frame synchronization detection
        LFSDET OFFSET(6) NUMBITS(1) [],
        /// FIFO level
        FLVL OFFSET(16) NUMBITS(3) [
            Empty = 0,
            UpToQuarter = 1,
            UpToHalf = 2,
            UpToThreeQuarters = 3,
            UpToFull = 4,
            Full = 5
        ],
        FLVL_0 OFFSET(16) NUMBITS(1) [],
        FLVL_1 OFFSET(17) NUMBITS(1) [],
        FLVL_2 OFFSET(18) NUMBITS(1) []
    ],
    pub CLRFR [
        COVRUDR OFFSET(0) NUMBITS(1) [],
        CMUTEDET OFFSET(1) NUMBITS(1) [],
        CWCKCFG OFFSET(2) NUMBITS(1) [],
        CCNRDY OFFSET(4) NUMBITS(1) [],
        CAFSDET OFFSET(5) NUMBITS(1) [],
        CLFSDET OFFSET(6) NUMBITS(1) []
    ]
];

instances! {
    pub enum SaiBlock {
        A("SAI1_Block_A") = memory_map::SAI1_BLOCK_A_BASE,
        B("SAI1_Block_B") = memory_map::SAI1_BLOCK_B_BASE,
    }
}

impl SaiBlock {
    /// `GCR.SYNCOUT` setting that exports this block's synchronization.
    pub const fn sync_out(self) -> FieldValue<u32, GCR::Register> {
        match self {
            SaiBlock::A => GCR::SYNCOUT::BlockA,
            SaiBlock::B => GCR::SYNCOUT::BlockB,
        }
    }

    /// The other block of the pair, used for internal synchronization.
    #[must_use]
    pub const fn sibling(self) -> Self {
        match self {
            SaiBlock::A => SaiBlock::B,
            SaiBlock::B => SaiBlock::A,
        }
    }

    pub const fn interrupt(self) -> Interrupt {
        match self {
            SaiBlock::A | SaiBlock::B => Interrupt::SAI1,
        }
    }
}

/// Frame synchronization polarity bit under its old name.
#[allow(non_snake_case)]
pub mod legacy {
    pub mod FRCR {
        pub use crate::sai::FRCR::FSPOL as FSPO;
    }
}

pub(crate) const SAI1: StaticRef<SaiRegisters> =
    unsafe { StaticRef::new(memory_map::SAI1_BASE as *const SaiRegisters) };
pub(crate) const SAI1_BLOCK_A: StaticRef<SaiBlockRegisters> =
    unsafe { StaticRef::new(memory_map::SAI1_BLOCK_A_BASE as *const SaiBlockRegisters) };
pub(crate) const SAI1_BLOCK_B: StaticRef<SaiBlockRegisters> =
    unsafe { StaticRef::new(memory_map::SAI1_BLOCK_B_BASE as *const SaiBlockRegisters) };

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    use super::*;
    use crate::test_util::{assert_components, assert_fields, mask};

    #[test]
    fn layout() {
        assert_eq!(size_of::<SaiRegisters>(), 0x04);
        let offsets = [
            (offset_of!(SaiBlockRegisters, cr1), 0x00),
            (offset_of!(SaiBlockRegisters, cr2), 0x04),
            (offset_of!(SaiBlockRegisters, frcr), 0x08),
            (offset_of!(SaiBlockRegisters, slotr), 0x0C),
            (offset_of!(SaiBlockRegisters, imr), 0x10),
            (offset_of!(SaiBlockRegisters, sr), 0x14),
            (offset_of!(SaiBlockRegisters, clrfr), 0x18),
            (offset_of!(SaiBlockRegisters, dr), 0x1C),
        ];
        for (actual, expected) in offsets {
            assert_eq!(actual, expected);
        }
        assert_eq!(size_of::<SaiBlockRegisters>(), 0x20);
    }

    #[test]
    fn blocks_follow_global_register() {
        assert_eq!(SAI1_BLOCK_A.address(), SAI1.address() + 0x04);
        assert_eq!(SAI1_BLOCK_B.address(), SAI1.address() + 0x24);
        assert_eq!(SaiBlock::A.base() + size_of::<SaiBlockRegisters>(), 0x4001_5824);
        assert_eq!(SaiBlock::from_base(0x4001_5824), Some(SaiBlock::B));
    }

    #[test]
    fn fields() {
        assert_eq!(assert_fields(32, &[
            mask(GCR::SYNCIN),
            mask(GCR::SYNCOUT),
        ]), 0x33);
        assert_eq!(assert_fields(32, &[
            mask(CR1::MODE),
            mask(CR1::PRTCFG),
            mask(CR1::DS),
            mask(CR1::LSBFIRST),
            mask(CR1::CKSTR),
            mask(CR1::SYNCEN),
            mask(CR1::MONO),
            mask(CR1::OUTDRIV),
            mask(CR1::SAIEN),
            mask(CR1::DMAEN),
            mask(CR1::NODIV),
            mask(CR1::MCKDIV),
        ]), 0x00FB_3FEF);
        assert_components(mask(CR1::DS), &[mask(CR1::DS_0), mask(CR1::DS_1), mask(CR1::DS_2)]);
        assert_components(
            mask(CR1::MCKDIV),
            &[mask(CR1::MCKDIV_0), mask(CR1::MCKDIV_1), mask(CR1::MCKDIV_2), mask(CR1::MCKDIV_3)],
        );
        assert_eq!(assert_fields(32, &[
            mask(CR2::FTH),
            mask(CR2::FFLUSH),
            mask(CR2::TRIS),
            mask(CR2::MUTE),
            mask(CR2::MUTEVAL),
            mask(CR2::MUTECNT),
            mask(CR2::CPL),
            mask(CR2::COMP),
        ]), 0xFFFF);
        assert_eq!(assert_fields(32, &[
            mask(FRCR::FRL),
            mask(FRCR::FSALL),
            mask(FRCR::FSDEF),
            mask(FRCR::FSPOL),
            mask(FRCR::FSOFF),
        ]), 0x0007_7FFF);
        assert_eq!(assert_fields(32, &[
            mask(SLOTR::FBOFF),
            mask(SLOTR::SLOTSZ),
            mask(SLOTR::NBSLOT),
            mask(SLOTR::SLOTEN),
        ]), 0xFFFF_0FDF);
        assert_eq!(assert_fields(32, &[
            mask(IMR::OVRUDRIE),
            mask(IMR::MUTEDETIE),
            mask(IMR::WCKCFGIE),
            mask(IMR::FREQIE),
            mask(IMR::CNRDYIE),
            mask(IMR::AFSDETIE),
            mask(IMR::LFSDETIE),
        ]), 0x7F);
        assert_eq!(assert_fields(32, &[
            mask(SR::OVRUDR),
            mask(SR::MUTEDET),
            mask(SR::WCKCFG),
            mask(SR::FREQ),
            mask(SR::CNRDY),
            mask(SR::AFSDET),
            mask(SR::LFSDET),
            mask(SR::FLVL),
        ]), 0x0007_007F);
        assert_eq!(assert_fields(32, &[
            mask(CLRFR::COVRUDR),
            mask(CLRFR::CMUTEDET),
            mask(CLRFR::CWCKCFG),
            mask(CLRFR::CCNRDY),
            mask(CLRFR::CAFSDET),
            mask(CLRFR::CLFSDET),
        ]), 0x77);
    }

    #[test]
    fn i2s_master_transmitter() {
        let cr1 = InMemoryRegister::<u32, CR1::Register>::new(0);
        cr1.write(
            CR1::MODE::MasterTransmitter + CR1::DS::Bits16 + CR1::CKSTR::SET + CR1::MCKDIV.val(2),
        );
        assert_eq!(cr1.get(), 0x0020_0280);
        let frcr = InMemoryRegister::<u32, FRCR::Register>::new(0);
        frcr.write(FRCR::FRL.val(63) + FRCR::FSALL.val(31) + FRCR::FSDEF::SET + FRCR::FSOFF::SET);
        assert_eq!(frcr.get(), 0x0005_1F3F);
    }

    #[test]
    fn blocks() {
        assert_eq!(SaiBlock::A.sibling(), SaiBlock::B);
        assert_eq!(SaiBlock::B.sync_out().value, 2 << 4);
        assert_eq!(SaiBlock::A.interrupt().number(), 87);
        assert_eq!(SaiBlock::B.name(), "SAI1_Block_B");
    }

    #[test]
    fn legacy_names() {
        assert_eq!(mask(legacy::FRCR::FSPO), mask(FRCR::FSPOL));
        assert_eq!(legacy::FRCR::FSPO.shift, 17);
    }
}
