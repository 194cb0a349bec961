// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! DMA controllers.
//!
//! Each controller has a small block of interrupt status and clear
//! registers followed by eight identical stream blocks of 0x18 bytes.
//! Streams 0 to 3 report in LISR/LIFCR, streams 4 to 7 in HISR/HIFCR, at
//! the same bit positions.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::ErrorCode;
use crate::memory_map;
use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

pub const STREAMS: usize = 8;
/// Offset of stream 0 from the controller base.
pub const STREAM_OFFSET: usize = 0x10;
/// Distance between consecutive streams.
pub const STREAM_SIZE: usize = 0x18;

register_structs! {
    /// Interrupt status and clear registers of a controller
    pub DmaRegisters {
        /// low interrupt status register
        (0x00 => pub lisr: ReadOnly<u32, LISR::Register>),
        /// high interrupt status register
        (0x04 => pub hisr: ReadOnly<u32, HISR::Register>),
        /// low interrupt flag clear register
        (0x08 => pub lifcr: WriteOnly<u32, LIFCR::Register>),
        /// high interrupt flag clear register
        (0x0C => pub hifcr: WriteOnly<u32, HIFCR::Register>),
        (0x10 => @END),
    },

    /// One stream
    pub DmaStreamRegisters {
        /// configuration register
        (0x00 => pub cr: ReadWrite<u32, CR::Register>),
        /// number of data register
        (0x04 => pub ndtr: ReadWrite<u32, NDTR::Register>),
        /// peripheral address register
        (0x08 => pub par: ReadWrite<u32>),
        /// memory 0 address register
        (0x0C => pub m0ar: ReadWrite<u32>),
        /// memory 1 address register, double buffer mode only
        (0x10 => pub m1ar: ReadWrite<u32>),
        /// FIFO control register
        (0x14 => pub fcr: ReadWrite<u32, FCR::Register>),
        (0x18 => @END),
    }
}

register_bitfields![u32,
    pub LISR [
        /// Stream 0 FIFO error interrupt flag
        FEIF0 OFFSET(0) NUMBITS(1) [],
        /// Stream 0 direct mode error interrupt flag
        DMEIF0 OFFSET(2) NUMBITS(1) [],
        /// Stream 0 transfer error interrupt flag
        TEIF0 OFFSET(3) NUMBITS(1) [],
        /// Stream 0 half transfer interrupt flag
        HTIF0 OFFSET(4) NUMBITS(1) [],
        /// Stream 0 transfer complete interrupt flag
        TCIF0 OFFSET(5) NUMBITS(1) [],
        /// Stream 1 FIFO error interrupt flag
        FEIF1 OFFSET(6) NUMBITS(1) [],
        /// Stream 1 direct mode error interrupt flag
        DMEIF1 OFFSET(8) NUMBITS(1) [],
        /// Stream 1 transfer error interrupt flag
        TEIF1 OFFSET(9) NUMBITS(1) [],
        /// Stream 1 half transfer interrupt flag
        HTIF1 OFFSET(10) NUMBITS(1) [],
        /// Stream 1 transfer complete interrupt flag
        TCIF1 OFFSET(11) NUMBITS(1) [],
        /// Stream 2 FIFO error interrupt flag
        FEIF2 OFFSET(16) NUMBITS(1) [],
        /// Stream 2 direct mode error interrupt flag
        DMEIF2 OFFSET(18) NUMBITS(1) [],
        /// Stream 2 transfer error interrupt flag
        TEIF2 OFFSET(19) NUMBITS(1) [],
        /// Stream 2 half transfer interrupt flag
        HTIF2 OFFSET(20) NUMBITS(1) [],
        /// Stream 2 transfer complete interrupt flag
        TCIF2 OFFSET(21) NUMBITS(1) [],
        /// Stream 3 FIFO error interrupt flag
        FEIF3 OFFSET(22) NUMBITS(1) [],
        /// Stream 3 direct mode error interrupt flag
        DMEIF3 OFFSET(24) NUMBITS(1) [],
        /// Stream 3 transfer error interrupt flag
        TEIF3 OFFSET(25) NUMBITS(1) [],
        /// Stream 3 half transfer interrupt flag
        HTIF3 OFFSET(26) NUMBITS(1) [],
        /// Stream 3 transfer complete interrupt flag
        TCIF3 OFFSET(27) NUMBITS(1) []
    ],
    pub HISR [
        /// Stream 4 FIFO error interrupt flag
        FEIF4 OFFSET(0) NUMBITS(1) [],
        /// Stream 4 direct mode error interrupt flag
        DMEIF4 OFFSET(2) NUMBITS(1) [],
        /// Stream 4 transfer error interrupt flag
        TEIF4 OFFSET(3) NUMBITS(1) [],
        /// Stream 4 half transfer interrupt flag
        HTIF4 OFFSET(4) NUMBITS(1) [],
        /// Stream 4 transfer complete interrupt flag
        TCIF4 OFFSET(5) NUMBITS(1) [],
        /// Stream 5 FIFO error interrupt flag
        FEIF5 OFFSET(6) NUMBITS(1) [],
        /// Stream 5 direct mode error interrupt flag
        DMEIF5 OFFSET(8) NUMBITS(1) [],
        /// Stream 5 transfer error interrupt flag
        TEIF5 OFFSET(9) NUMBITS(1) [],
        /// Stream 5 half transfer interrupt flag
        HTIF5 OFFSET(10) NUMBITS(1) [],
        /// Stream 5 transfer complete interrupt flag
        TCIF5 OFFSET(11) NUMBITS(1) [],
        /// Stream 6 FIFO error interrupt flag
        FEIF6 OFFSET(16) NUMBITS(1) [],
        /// Stream 6 direct mode error interrupt flag
        DMEIF6 OFFSET(18) NUMBITS(1) [],
        /// Stream 6 transfer error interrupt flag
        TEIF6 OFFSET(19) NUMBITS(1) [],
        /// Stream 6 half transfer interrupt flag
        HTIF6 OFFSET(20) NUMBITS(1) [],
        /// Stream 6 transfer complete interrupt flag
        TCIF6 OFFSET(21) NUMBITS(1) [],
        /// Stream 7 FIFO error interrupt flag
        FEIF7 OFFSET(22) NUMBITS(1) [],
        /// Stream 7 direct mode error interrupt flag
        DMEIF7 OFFSET(24) NUMBITS(1) [],
        /// Stream 7 transfer error interrupt flag
        TEIF7 OFFSET(25) NUMBITS(1) [],
        /// Stream 7 half transfer interrupt flag
        HTIF7 OFFSET(26) NUMBITS(1) [],
        /// Stream 7 transfer complete interrupt flag
        TCIF7 OFFSET(27) NUMBITS(1) []
    ],
    pub LIFCR [
        /// Stream 0 clear FIFO error interrupt flag
        CFEIF0 OFFSET(0) NUMBITS(1) [],
        /// Stream 0 clear direct mode error interrupt flag
        CDMEIF0 OFFSET(2) NUMBITS(1) [],
        /// Stream 0 clear transfer error interrupt flag
        CTEIF0 OFFSET(3) NUMBITS(1) [],
        /// Stream 0 clear half transfer interrupt flag
        CHTIF0 OFFSET(4) NUMBITS(1) [],
        /// Stream 0 clear transfer complete interrupt flag
        CTCIF0 OFFSET(5) NUMBITS(1) [],
        /// Stream 1 clear FIFO error interrupt flag
        CFEIF1 OFFSET(6) NUMBITS(1) [],
        /// Stream 1 clear direct mode error interrupt flag
        CDMEIF1 OFFSET(8) NUMBITS(1) [],
        /// Stream 1 clear transfer error interrupt flag
        CTEIF1 OFFSET(9) NUMBITS(1) [],
        /// Stream 1 clear half transfer interrupt flag
        CHTIF1 OFFSET(10) NUMBITS(1) [],
        /// Stream 1 clear transfer complete interrupt flag
        CTCIF1 OFFSET(11) NUMBITS(1) [],
        /// Stream 2 clear FIFO error interrupt flag
        CFEIF2 OFFSET(16) NUMBITS(1) [],
        /// Stream 2 clear direct mode error interrupt flag
        CDMEIF2 OFFSET(18) NUMBITS(1) [],
        /// Stream 2 clear transfer error interrupt flag
        CTEIF2 OFFSET(19) NUMBITS(1) [],
        /// Stream 2 clear half transfer interrupt flag
        CHTIF2 OFFSET(20) NUMBITS(1) [],
        /// Stream 2 clear transfer complete interrupt flag
        CTCIF2 OFFSET(21) NUMBITS(1) [],
        /// Stream 3 clear FIFO error interrupt flag
        CFEIF3 OFFSET(22) NUMBITS(1) [],
        /// Stream 3 clear direct mode error interrupt flag
        CDMEIF3 OFFSET(24) NUMBITS(1) [],
        /// Stream 3 clear transfer error interrupt flag
        CTEIF3 OFFSET(25) NUMBITS(1) [],
        /// Stream 3 clear half transfer interrupt flag
        CHTIF3 OFFSET(26) NUMBITS(1) [],
        /// Stream 3 clear transfer complete interrupt flag
        CTCIF3 OFFSET(27) NUMBITS(1) []
    ],
    pub HIFCR [
        /// Stream 4 clear FIFO error interrupt flag
        CFEIF4 OFFSET(0) NUMBITS(1) [],
        /// Stream 4 clear direct mode error interrupt flag
        CDMEIF4 OFFSET(2) NUMBITS(1) [],
        /// Stream 4 clear transfer error interrupt flag
        CTEIF4 OFFSET(3) NUMBITS(1) [],
        /// Stream 4 clear half transfer interrupt flag
        CHTIF4 OFFSET(4) NUMBITS(1) [],
        /// Stream 4 clear transfer complete interrupt flag
        CTCIF4 OFFSET(5) NUMBITS(1) [],
        /// Stream 5 clear FIFO error interrupt flag
        CFEIF5 OFFSET(6) NUMBITS(1) [],
        /// Stream 5 clear direct mode error interrupt flag
        CDMEIF5 OFFSET(8) NUMBITS(1) [],
        /// Stream 5 clear transfer error interrupt flag
        CTEIF5 OFFSET(9) NUMBITS(1) [],
        /// Stream 5 clear half transfer interrupt flag
        CHTIF5 OFFSET(10) NUMBITS(1) [],
        /// Stream 5 clear transfer complete interrupt flag
        CTCIF5 OFFSET(11) NUMBITS(1) [],
        /// Stream 6 clear FIFO error interrupt flag
        CFEIF6 OFFSET(16) NUMBITS(1) [],
        /// Stream 6 clear direct mode error interrupt flag
        CDMEIF6 OFFSET(18) NUMBITS(1) [],
        /// Stream 6 clear transfer error interrupt flag
        CTEIF6 OFFSET(19) NUMBITS(1) [],
        /// Stream 6 clear half transfer interrupt flag
        CHTIF6 OFFSET(20) NUMBITS(1) [],
        /// Stream 6 clear transfer complete interrupt flag
        CTCIF6 OFFSET(21) NUMBITS(1) [],
        /// Stream 7 clear FIFO error interrupt flag
        CFEIF7 OFFSET(22) NUMBITS(1) [],
        /// Stream 7 clear direct mode error interrupt flag
        CDMEIF7 OFFSET(24) NUMBITS(1) [],
        /// Stream 7 clear transfer error interrupt flag
        CTEIF7 OFFSET(25) NUMBITS(1) [],
        /// Stream 7 clear half transfer interrupt flag
        CHTIF7 OFFSET(26) NUMBITS(1) [],
        /// Stream 7 clear transfer complete interrupt flag
        CTCIF7 OFFSET(27) NUMBITS(1) []
    ],
    pub CR [
        /// Stream enable
        EN OFFSET(0) NUMBITS(1) [],
        /// Direct mode error interrupt enable
        DMEIE OFFSET(1) NUMBITS(1) [],
        /// Transfer error interrupt enable
        TEIE OFFSET(2) NUMBITS(1) [],
        /// Half transfer interrupt enable
        HTIE OFFSET(3) NUMBITS(1) [],
        /// Transfer complete interrupt enable
        TCIE OFFSET(4) NUMBITS(1) [],
        /// Peripheral flow controller
        PFCTRL OFFSET(5) NUMBITS(1) [],
        /// Data transfer direction
        DIR OFFSET(6) NUMBITS(2) [
            PeripheralToMemory = 0,
            MemoryToPeripheral = 1,
            MemoryToMemory = 2
        ],
        /// Circular mode
        CIRC OFFSET(8) NUMBITS(1) [],
        /// Peripheral increment mode
        PINC OFFSET(9) NUMBITS(1) [],
        /// Memory increment mode
        MINC OFFSET(10) NUMBITS(1) [],
        /// Peripheral data size
        PSIZE OFFSET(11) NUMBITS(2) [
            Byte = 0,
            HalfWord = 1,
            Word = 2
        ],
        /// Memory data size
        MSIZE OFFSET(13) NUMBITS(2) [
            Byte = 0,
            HalfWord = 1,
            Word = 2
        ],
        /// Peripheral increment offset size
        PINCOS OFFSET(15) NUMBITS(1) [],
        /// Priority level
        PL OFFSET(16) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        /// Double buffer mode
        DBM OFFSET(18) NUMBITS(1) [],
        /// Current target
        CT OFFSET(19) NUMBITS(1) [],
        /// Peripheral burst transfer configuration
        PBURST OFFSET(21) NUMBITS(2) [
            Single = 0,
            Incr4 = 1,
            Incr8 = 2,
            Incr16 = 3
        ],
        /// Memory burst transfer configuration
        MBURST OFFSET(23) NUMBITS(2) [
            Single = 0,
            Incr4 = 1,
            Incr8 = 2,
            Incr16 = 3
        ],
        /// Channel selection
        CHSEL OFFSET(25) NUMBITS(3) [],
        DIR_0 OFFSET(6) NUMBITS(1) [],
        DIR_1 OFFSET(7) NUMBITS(1) [],
        PSIZE_0 OFFSET(11) NUMBITS(1) [],
        PSIZE_1 OFFSET(12) NUMBITS(1) [],
        MSIZE_0 OFFSET(13) NUMBITS(1) [],
        MSIZE_1 OFFSET(14) NUMBITS(1) [],
        PL_0 OFFSET(16) NUMBITS(1) [],
        PL_1 OFFSET(17) NUMBITS(1) [],
        PBURST_0 OFFSET(21) NUMBITS(1) [],
        PBURST_1 OFFSET(22) NUMBITS(1) [],
        MBURST_0 OFFSET(23) NUMBITS(1) [],
        MBURST_1 OFFSET(24) NUMBITS(1) [],
        CHSEL_0 OFFSET(25) NUMBITS(1) [],
        CHSEL_1 OFFSET(26) NUMBITS(1) [],
        CHSEL_2 OFFSET(27) NUMBITS(1) []
    ],
    pub NDTR [
        /// Number of data items to transfer
        NDT OFFSET(0) NUMBITS(16) []
    ],
    pub FCR [
        /// FIFO threshold selection
        FTH OFFSET(0) NUMBITS(2) [
            Quarter = 0,
            Half = 1,
            ThreeQuarters = 2,
            Full = 3
        ],
        /// Direct mode disable
        DMDIS OFFSET(2) NUMBITS(1) [],
        /// FIFO status
        FS OFFSET(3) NUMBITS(3) [
            LessThanQuarter = 0,
            LessThanHalf = 1,
            LessThanThreeQuarters = 2,
            LessThanFull = 3,
            Empty = 4,
            Full = 5
        ],
        /// FIFO error interrupt enable
        FEIE OFFSET(7) NUMBITS(1) [],
        FTH_0 OFFSET(0) NUMBITS(1) [],
        FTH_1 OFFSET(1) NUMBITS(1) [],
        FS_0 OFFSET(3) NUMBITS(1) [],
        FS_1 OFFSET(4) NUMBITS(1) [],
        FS_2 OFFSET(5) NUMBITS(1) []
    ]
];

instances! {
    pub enum Dma {
        Dma1("DMA1") = memory_map::DMA1_BASE,
        Dma2("DMA2") = memory_map::DMA2_BASE,
    }
}

impl Dma {
    /// Only DMA2 reaches both ports of the bus matrix.
    pub const fn supports_memory_to_memory(self) -> bool {
        match self {
            Dma::Dma1 => false,
            Dma::Dma2 => true,
        }
    }

    /// Address of the register block of stream `stream`.
    pub const fn stream_base(self, stream: usize) -> Result<usize, ErrorCode> {
        if stream >= STREAMS {
            return Err(ErrorCode::INVAL);
        }
        Ok(self.base() + STREAM_OFFSET + STREAM_SIZE * stream)
    }

    pub const fn stream_interrupt(self, stream: usize) -> Result<Interrupt, ErrorCode> {
        let interrupts = match self {
            Dma::Dma1 => [
                Interrupt::DMA1_Stream0,
                Interrupt::DMA1_Stream1,
                Interrupt::DMA1_Stream2,
                Interrupt::DMA1_Stream3,
                Interrupt::DMA1_Stream4,
                Interrupt::DMA1_Stream5,
                Interrupt::DMA1_Stream6,
                Interrupt::DMA1_Stream7,
            ],
            Dma::Dma2 => [
                Interrupt::DMA2_Stream0,
                Interrupt::DMA2_Stream1,
                Interrupt::DMA2_Stream2,
                Interrupt::DMA2_Stream3,
                Interrupt::DMA2_Stream4,
                Interrupt::DMA2_Stream5,
                Interrupt::DMA2_Stream6,
                Interrupt::DMA2_Stream7,
            ],
        };
        if stream >= STREAMS {
            return Err(ErrorCode::INVAL);
        }
        Ok(interrupts[stream])
    }
}

/// Position of the flags of `stream` in LISR/LIFCR (streams 0 to 3) or
/// HISR/HIFCR (streams 4 to 7). Add the offset of FEIF (0), DMEIF (2), TEIF
/// (3), HTIF (4) or TCIF (5) to get a single flag.
pub const fn flag_shift(stream: usize) -> Result<usize, ErrorCode> {
    if stream >= STREAMS {
        return Err(ErrorCode::INVAL);
    }
    Ok(match stream % 4 {
        0 => 0,
        1 => 6,
        2 => 16,
        _ => 22,
    })
}

/// Whether `stream` reports in HISR/HIFCR rather than LISR/LIFCR.
pub const fn uses_high_registers(stream: usize) -> Result<bool, ErrorCode> {
    if stream >= STREAMS {
        return Err(ErrorCode::INVAL);
    }
    Ok(stream >= 4)
}

pub(crate) const DMA1: StaticRef<DmaRegisters> =
    unsafe { StaticRef::new(memory_map::DMA1_BASE as *const DmaRegisters) };
pub(crate) const DMA2: StaticRef<DmaRegisters> =
    unsafe { StaticRef::new(memory_map::DMA2_BASE as *const DmaRegisters) };

const fn stream_ref(base: usize, stream: usize) -> StaticRef<DmaStreamRegisters> {
    unsafe {
        StaticRef::new((base + STREAM_OFFSET + STREAM_SIZE * stream) as *const DmaStreamRegisters)
    }
}

pub(crate) const DMA1_STREAMS: [StaticRef<DmaStreamRegisters>; STREAMS] = [
    stream_ref(memory_map::DMA1_BASE, 0),
    stream_ref(memory_map::DMA1_BASE, 1),
    stream_ref(memory_map::DMA1_BASE, 2),
    stream_ref(memory_map::DMA1_BASE, 3),
    stream_ref(memory_map::DMA1_BASE, 4),
    stream_ref(memory_map::DMA1_BASE, 5),
    stream_ref(memory_map::DMA1_BASE, 6),
    stream_ref(memory_map::DMA1_BASE, 7),
];
pub(crate) const DMA2_STREAMS: [StaticRef<DmaStreamRegisters>; STREAMS] = [
    stream_ref(memory_map::DMA2_BASE, 0),
    stream_ref(memory_map::DMA2_BASE, 1),
    stream_ref(memory_map::DMA2_BASE, 2),
    stream_ref(memory_map::DMA2_BASE, 3),
    stream_ref(memory_map::DMA2_BASE, 4),
    stream_ref(memory_map::DMA2_BASE, 5),
    stream_ref(memory_map::DMA2_BASE, 6),
    stream_ref(memory_map::DMA2_BASE, 7),
];

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use tock_registers::interfaces::{ReadWriteable, Readable};
    use tock_registers::registers::InMemoryRegister;

    use super::*;
    use crate::test_util::{assert_components, assert_fields, mask};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(DmaRegisters, lisr), 0x00);
        assert_eq!(offset_of!(DmaRegisters, hisr), 0x04);
        assert_eq!(offset_of!(DmaRegisters, lifcr), 0x08);
        assert_eq!(offset_of!(DmaRegisters, hifcr), 0x0C);
        assert_eq!(size_of::<DmaRegisters>(), STREAM_OFFSET);

        assert_eq!(offset_of!(DmaStreamRegisters, cr), 0x00);
        assert_eq!(offset_of!(DmaStreamRegisters, ndtr), 0x04);
        assert_eq!(offset_of!(DmaStreamRegisters, par), 0x08);
        assert_eq!(offset_of!(DmaStreamRegisters, m0ar), 0x0C);
        assert_eq!(offset_of!(DmaStreamRegisters, m1ar), 0x10);
        assert_eq!(offset_of!(DmaStreamRegisters, fcr), 0x14);
        assert_eq!(size_of::<DmaStreamRegisters>(), STREAM_SIZE);
    }

    #[test]
    fn stream_addresses() {
        assert_eq!(Dma::Dma1.stream_base(0), Ok(0x4002_6010));
        assert_eq!(Dma::Dma1.stream_base(7), Ok(0x4002_60B8));
        assert_eq!(Dma::Dma2.stream_base(3), Ok(0x4002_6458));
        assert_eq!(Dma::Dma2.stream_base(8), Err(ErrorCode::INVAL));
        for stream in 0..STREAMS {
            assert_eq!(Ok(DMA1_STREAMS[stream].address()), Dma::Dma1.stream_base(stream));
            assert_eq!(Ok(DMA2_STREAMS[stream].address()), Dma::Dma2.stream_base(stream));
        }
        // The last stream ends well inside the 1 KiB controller window.
        assert!(DMA1_STREAMS[7].address() + STREAM_SIZE <= Dma::Dma2.base());
    }

    #[test]
    fn status_fields() {
        assert_eq!(assert_fields(32, &[
            mask(LISR::FEIF0),
            mask(LISR::DMEIF0),
            mask(LISR::TEIF0),
            mask(LISR::HTIF0),
            mask(LISR::TCIF0),
            mask(LISR::FEIF1),
            mask(LISR::DMEIF1),
            mask(LISR::TEIF1),
            mask(LISR::HTIF1),
            mask(LISR::TCIF1),
            mask(LISR::FEIF2),
            mask(LISR::DMEIF2),
            mask(LISR::TEIF2),
            mask(LISR::HTIF2),
            mask(LISR::TCIF2),
            mask(LISR::FEIF3),
            mask(LISR::DMEIF3),
            mask(LISR::TEIF3),
            mask(LISR::HTIF3),
            mask(LISR::TCIF3),
        ]), 0x0F7D_0F7D);
        assert_eq!(assert_fields(32, &[
            mask(HIFCR::CFEIF4),
            mask(HIFCR::CDMEIF4),
            mask(HIFCR::CTEIF4),
            mask(HIFCR::CHTIF4),
            mask(HIFCR::CTCIF4),
            mask(HIFCR::CFEIF5),
            mask(HIFCR::CDMEIF5),
            mask(HIFCR::CTEIF5),
            mask(HIFCR::CHTIF5),
            mask(HIFCR::CTCIF5),
            mask(HIFCR::CFEIF6),
            mask(HIFCR::CDMEIF6),
            mask(HIFCR::CTEIF6),
            mask(HIFCR::CHTIF6),
            mask(HIFCR::CTCIF6),
            mask(HIFCR::CFEIF7),
            mask(HIFCR::CDMEIF7),
            mask(HIFCR::CTEIF7),
            mask(HIFCR::CHTIF7),
            mask(HIFCR::CTCIF7),
        ]), 0x0F7D_0F7D);
        for stream in 0..STREAMS {
            let shift = flag_shift(stream).unwrap();
            let (feif, tcif) = match stream {
                0 => (mask(LISR::FEIF0), mask(LISR::TCIF0)),
                1 => (mask(LISR::FEIF1), mask(LISR::TCIF1)),
                2 => (mask(LISR::FEIF2), mask(LISR::TCIF2)),
                3 => (mask(LISR::FEIF3), mask(LISR::TCIF3)),
                4 => (mask(HISR::FEIF4), mask(HISR::TCIF4)),
                5 => (mask(HISR::FEIF5), mask(HISR::TCIF5)),
                6 => (mask(HISR::FEIF6), mask(HISR::TCIF6)),
                _ => (mask(HISR::FEIF7), mask(HISR::TCIF7)),
            };
            assert_eq!(feif, 1 << shift);
            assert_eq!(tcif, 1 << (shift + 5));
            assert_eq!(uses_high_registers(stream), Ok(stream >= 4));
        }
        assert_eq!(flag_shift(8), Err(ErrorCode::INVAL));
        assert_eq!(uses_high_registers(STREAMS), Err(ErrorCode::INVAL));
        assert_eq!(uses_high_registers(usize::MAX), Err(ErrorCode::INVAL));
        assert_eq!(mask(LIFCR::CHTIF2), mask(LISR::HTIF2));
    }

    #[test]
    fn stream_fields() {
        assert_eq!(assert_fields(32, &[
            mask(CR::EN),
            mask(CR::DMEIE),
            mask(CR::TEIE),
            mask(CR::HTIE),
            mask(CR::TCIE),
            mask(CR::PFCTRL),
            mask(CR::DIR),
            mask(CR::CIRC),
            mask(CR::PINC),
            mask(CR::MINC),
            mask(CR::PSIZE),
            mask(CR::MSIZE),
            mask(CR::PINCOS),
            mask(CR::PL),
            mask(CR::DBM),
            mask(CR::CT),
            mask(CR::PBURST),
            mask(CR::MBURST),
            mask(CR::CHSEL),
        ]), 0x0FEF_FFFF);
        assert_eq!(assert_fields(32, &[
            mask(FCR::FTH),
            mask(FCR::DMDIS),
            mask(FCR::FS),
            mask(FCR::FEIE),
        ]), 0xBF);
        assert_eq!(mask(NDTR::NDT), 0xFFFF);
        assert_components(
            mask(CR::CHSEL),
            &[mask(CR::CHSEL_0), mask(CR::CHSEL_1), mask(CR::CHSEL_2)],
        );
        assert_components(mask(CR::MBURST), &[mask(CR::MBURST_0), mask(CR::MBURST_1)]);
        assert_components(mask(FCR::FS), &[mask(FCR::FS_0), mask(FCR::FS_1), mask(FCR::FS_2)]);
    }

    #[test]
    fn memory_to_memory_stream() {
        let cr = InMemoryRegister::<u32, CR::Register>::new(0);
        cr.modify(
            CR::DIR::MemoryToMemory
                + CR::PINC::SET
                + CR::MINC::SET
                + CR::PSIZE::Word
                + CR::MSIZE::Word
                + CR::PL::High
                + CR::CHSEL.val(4),
        );
        assert_eq!(cr.get(), 0x0802_5680);
        assert_eq!(cr.read_as_enum(CR::DIR), Some(CR::DIR::Value::MemoryToMemory));
        assert!(Dma::Dma2.supports_memory_to_memory());
        assert!(!Dma::Dma1.supports_memory_to_memory());
    }

    #[test]
    fn interrupts() {
        assert_eq!(Dma::Dma1.stream_interrupt(7), Ok(Interrupt::DMA1_Stream7));
        assert_eq!(Dma::Dma2.stream_interrupt(0), Ok(Interrupt::DMA2_Stream0));
        assert_eq!(Dma::Dma2.stream_interrupt(9), Err(ErrorCode::INVAL));
        assert_eq!(Dma::Dma1.stream_interrupt(6).map(|i| i.number()), Ok(17));
    }
}
