// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Chrom-ART accelerator (DMA2D).
//!
//! The foreground and background layers share register layouts; the
//! `FG` and `BG` prefixes only select the instance inside the block.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::static_ref::StaticRef;

/// Entries in each color lookup table.
pub const CLUT_ENTRIES: usize = 256;

register_structs! {
    pub Dma2dRegisters {
        (0x000 => pub cr: ReadWrite<u32, CR::Register>),
        (0x004 => pub isr: ReadOnly<u32, ISR::Register>),
        (0x008 => pub ifcr: ReadWrite<u32, IFCR::Register>),
        /// foreground memory address
        (0x00C => pub fgmar: ReadWrite<u32>),
        /// foreground line offset
        (0x010 => pub fgor: ReadWrite<u32, OR::Register>),
        (0x014 => pub bgmar: ReadWrite<u32>),
        (0x018 => pub bgor: ReadWrite<u32, OR::Register>),
        /// foreground pixel format converter control
        (0x01C => pub fgpfccr: ReadWrite<u32, PFCCR::Register>),
        (0x020 => pub fgcolr: ReadWrite<u32, COLR::Register>),
        (0x024 => pub bgpfccr: ReadWrite<u32, PFCCR::Register>),
        (0x028 => pub bgcolr: ReadWrite<u32, COLR::Register>),
        /// foreground CLUT memory address
        (0x02C => pub fgcmar: ReadWrite<u32>),
        (0x030 => pub bgcmar: ReadWrite<u32>),
        /// output pixel format converter control
        (0x034 => pub opfccr: ReadWrite<u32, OPFCCR::Register>),
        /// output color, laid out as ARGB8888
        (0x038 => pub ocolr: ReadWrite<u32, OCOLR::Register>),
        (0x03C => pub omar: ReadWrite<u32>),
        (0x040 => pub oor: ReadWrite<u32, OR::Register>),
        /// number of lines and pixels per line
        (0x044 => pub nlr: ReadWrite<u32, NLR::Register>),
        /// line watermark
        (0x048 => pub lwr: ReadWrite<u32, LWR::Register>),
        /// AHB master timer configuration
        (0x04C => pub amtcr: ReadWrite<u32, AMTCR::Register>),
        (0x050 => _reserved0),
        (0x400 => pub fgclut: [ReadWrite<u32, CLUT::Register>; CLUT_ENTRIES]),
        (0x800 => pub bgclut: [ReadWrite<u32, CLUT::Register>; CLUT_ENTRIES]),
        (0xC00 => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Start transfer
        START OFFSET(0) NUMBITS(1) [],
        /// Suspend transfer
        SUSP OFFSET(1) NUMBITS(1) [],
        /// Abort transfer
        ABORT OFFSET(2) NUMBITS(1) [],
        /// Transfer error interrupt enable
        TEIE OFFSET(8) NUMBITS(1) [],
        /// Transfer complete interrupt enable
        TCIE OFFSET(9) NUMBITS(1) [],
        /// Transfer watermark interrupt enable
        TWIE OFFSET(10) NUMBITS(1) [],
        /// CLUT access error interrupt enable
        CAEIE OFFSET(11) NUMBITS(1) [],
        /// CLUT transfer complete interrupt enable
        CTCIE OFFSET(12) NUMBITS(1) [],
        /// Configuration error interrupt enable
        CEIE OFFSET(13) NUMBITS(1) [],
        /// Transfer mode
        MODE OFFSET(16) NUMBITS(2) [
            MemoryToMemory = 0,
            MemoryToMemoryPfc = 1,
            MemoryToMemoryBlend = 2,
            RegisterToMemory = 3
        ]
    ],
    pub ISR [
        /// Transfer error
        TEIF OFFSET(0) NUMBITS(1) [],
        /// Transfer complete
        TCIF OFFSET(1) NUMBITS(1) [],
        /// Transfer watermark
        TWIF OFFSET(2) NUMBITS(1) [],
        /// CLUT access error
        CAEIF OFFSET(3) NUMBITS(1) [],
        /// CLUT transfer complete
        CTCIF OFFSET(4) NUMBITS(1) [],
        /// Configuration error
        CEIF OFFSET(5) NUMBITS(1) []
    ],
    pub IFCR [
        CTEIF OFFSET(0) NUMBITS(1) [],
        CTCIF OFFSET(1) NUMBITS(1) [],
        CTWIF OFFSET(2) NUMBITS(1) [],
        CAECIF OFFSET(3) NUMBITS(1) [],
        CCTCIF OFFSET(4) NUMBITS(1) [],
        CCEIF OFFSET(5) NUMBITS(1) []
    ],
    pub OR [
        /// Line offset in pixels
        LO OFFSET(0) NUMBITS(14) []
    ],
    pub PFCCR [
        /// Input color mode
        CM OFFSET(0) NUMBITS(4) [
            ARGB8888 = 0,
            RGB888 = 1,
            RGB565 = 2,
            ARGB1555 = 3,
            ARGB4444 = 4,
            L8 = 5,
            AL44 = 6,
            AL88 = 7,
            L4 = 8,
            A8 = 9,
            A4 = 10
        ],
        /// CLUT color mode
        CCM OFFSET(4) NUMBITS(1) [
            ARGB8888 = 0,
            RGB888 = 1
        ],
        /// Start CLUT loading
        START OFFSET(5) NUMBITS(1) [],
        /// CLUT size, minus one
        CS OFFSET(8) NUMBITS(8) [],
        /// Alpha mode
        AM OFFSET(16) NUMBITS(2) [
            NoModify = 0,
            Replace = 1,
            Multiply = 2
        ],
        /// Alpha value
        ALPHA OFFSET(24) NUMBITS(8) []
    ],
    pub COLR [
        BLUE OFFSET(0) NUMBITS(8) [],
        GREEN OFFSET(8) NUMBITS(8) [],
        RED OFFSET(16) NUMBITS(8) []
    ],
    pub OPFCCR [
        /// Output color mode
        CM OFFSET(0) NUMBITS(3) [
            ARGB8888 = 0,
            RGB888 = 1,
            RGB565 = 2,
            ARGB1555 = 3,
            ARGB4444 = 4
        ]
    ],
    pub OCOLR [
        BLUE OFFSET(0) NUMBITS(8) [],
        GREEN OFFSET(8) NUMBITS(8) [],
        RED OFFSET(16) NUMBITS(8) [],
        ALPHA OFFSET(24) NUMBITS(8) []
    ],
    pub NLR [
        /// Number of lines
        NL OFFSET(0) NUMBITS(16) [],
        /// Pixels per line
        PL OFFSET(16) NUMBITS(14) []
    ],
    pub LWR [
        /// Line watermark
        LW OFFSET(0) NUMBITS(16) []
    ],
    pub AMTCR [
        /// Dead time enable
        EN OFFSET(0) NUMBITS(1) [],
        /// Dead time in AHB clock cycles
        DT OFFSET(8) NUMBITS(8) []
    ],
    pub CLUT [
        BLUE OFFSET(0) NUMBITS(8) [],
        GREEN OFFSET(8) NUMBITS(8) [],
        RED OFFSET(16) NUMBITS(8) [],
        ALPHA OFFSET(24) NUMBITS(8) []
    ]
];

/// Interrupt flag clear register under its old name.
#[allow(non_snake_case)]
pub mod legacy {
    pub mod IFSR {
        pub use crate::dma2d::IFCR::{CAECIF, CCEIF, CCTCIF, CTCIF, CTEIF, CTWIF};
    }
}

pub(crate) const DMA2D: StaticRef<Dma2dRegisters> =
    unsafe { StaticRef::new(memory_map::DMA2D_BASE as *const Dma2dRegisters) };

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    use super::*;
    use crate::test_util::{assert_fields, mask};

    #[test]
    fn layout() {
        let offsets = [
            (offset_of!(Dma2dRegisters, cr), 0x000),
            (offset_of!(Dma2dRegisters, isr), 0x004),
            (offset_of!(Dma2dRegisters, ifcr), 0x008),
            (offset_of!(Dma2dRegisters, fgmar), 0x00C),
            (offset_of!(Dma2dRegisters, fgor), 0x010),
            (offset_of!(Dma2dRegisters, bgmar), 0x014),
            (offset_of!(Dma2dRegisters, bgor), 0x018),
            (offset_of!(Dma2dRegisters, fgpfccr), 0x01C),
            (offset_of!(Dma2dRegisters, fgcolr), 0x020),
            (offset_of!(Dma2dRegisters, bgpfccr), 0x024),
            (offset_of!(Dma2dRegisters, bgcolr), 0x028),
            (offset_of!(Dma2dRegisters, fgcmar), 0x02C),
            (offset_of!(Dma2dRegisters, bgcmar), 0x030),
            (offset_of!(Dma2dRegisters, opfccr), 0x034),
            (offset_of!(Dma2dRegisters, ocolr), 0x038),
            (offset_of!(Dma2dRegisters, omar), 0x03C),
            (offset_of!(Dma2dRegisters, oor), 0x040),
            (offset_of!(Dma2dRegisters, nlr), 0x044),
            (offset_of!(Dma2dRegisters, lwr), 0x048),
            (offset_of!(Dma2dRegisters, amtcr), 0x04C),
            (offset_of!(Dma2dRegisters, fgclut), 0x400),
            (offset_of!(Dma2dRegisters, bgclut), 0x800),
        ];
        for (actual, expected) in offsets {
            assert_eq!(actual, expected);
        }
        assert_eq!(size_of::<Dma2dRegisters>(), 0xC00);
    }

    #[test]
    fn clut_entries_are_word_indexed() {
        let fg = offset_of!(Dma2dRegisters, fgclut);
        let bg = offset_of!(Dma2dRegisters, bgclut);
        assert_eq!(fg + 255 * 4, 0x7FC);
        assert_eq!(bg - fg, CLUT_ENTRIES * 4);
        assert_eq!(DMA2D.address() + bg, 0x4002_B800);
    }

    #[test]
    fn fields() {
        assert_eq!(assert_fields(32, &[
            mask(CR::START),
            mask(CR::SUSP),
            mask(CR::ABORT),
            mask(CR::TEIE),
            mask(CR::TCIE),
            mask(CR::TWIE),
            mask(CR::CAEIE),
            mask(CR::CTCIE),
            mask(CR::CEIE),
            mask(CR::MODE),
        ]), 0x0003_3F07);
        assert_eq!(assert_fields(32, &[
            mask(ISR::TEIF),
            mask(ISR::TCIF),
            mask(ISR::TWIF),
            mask(ISR::CAEIF),
            mask(ISR::CTCIF),
            mask(ISR::CEIF),
        ]), 0x3F);
        assert_eq!(assert_fields(32, &[
            mask(IFCR::CTEIF),
            mask(IFCR::CTCIF),
            mask(IFCR::CTWIF),
            mask(IFCR::CAECIF),
            mask(IFCR::CCTCIF),
            mask(IFCR::CCEIF),
        ]), 0x3F);
        assert_eq!(assert_fields(32, &[
            mask(PFCCR::CM),
            mask(PFCCR::CCM),
            mask(PFCCR::START),
            mask(PFCCR::CS),
            mask(PFCCR::AM),
            mask(PFCCR::ALPHA),
        ]), 0xFF03_FF3F);
        assert_eq!(assert_fields(32, &[
            mask(OCOLR::BLUE),
            mask(OCOLR::GREEN),
            mask(OCOLR::RED),
            mask(OCOLR::ALPHA),
        ]), u32::MAX);
        assert_eq!(assert_fields(32, &[mask(NLR::NL), mask(NLR::PL)]), 0x3FFF_FFFF);
        assert_eq!(assert_fields(32, &[mask(AMTCR::EN), mask(AMTCR::DT)]), 0xFF01);
        assert_eq!(mask(OR::LO), 0x3FFF);
        assert_eq!(mask(OPFCCR::CM), 0x7);
    }

    #[test]
    fn register_to_memory_fill() {
        let cr = InMemoryRegister::<u32, CR::Register>::new(0);
        cr.write(CR::MODE::RegisterToMemory + CR::TCIE::SET + CR::START::SET);
        assert_eq!(cr.get(), 0x0003_0201);

        let pfccr = InMemoryRegister::<u32, PFCCR::Register>::new(0);
        pfccr.write(
            PFCCR::CM::L8 + PFCCR::CS.val(255) + PFCCR::AM::Replace + PFCCR::ALPHA.val(0x80),
        );
        assert_eq!(pfccr.get(), 0x8001_FF05);
        assert_eq!(pfccr.read_as_enum(PFCCR::CM), Some(PFCCR::CM::Value::L8));
    }

    #[test]
    fn legacy_names() {
        assert_eq!(mask(legacy::IFSR::CTEIF), mask(IFCR::CTEIF));
        assert_eq!(mask(legacy::IFSR::CCEIF), 1 << 5);
    }

    #[test]
    fn layer_color_and_line_watermark_fields() {
        // FGCOLR and BGCOLR
        assert_eq!(assert_fields(32, &[
            mask(COLR::BLUE),
            mask(COLR::GREEN),
            mask(COLR::RED),
        ]), 0x00FF_FFFF);
        assert_eq!(assert_fields(32, &[mask(LWR::LW)]), 0xFFFF);
    }
}
