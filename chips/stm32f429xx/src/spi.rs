// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Serial peripheral interfaces and I2S.
//!
//! SPI2 and SPI3 double as I2S interfaces and each has an I2S extension
//! block (I2S2ext, I2S3ext) for full-duplex audio. The extension blocks use
//! the SPI register layout but only their I2S registers are meaningful.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    pub SpiRegisters {
        /// control register 1
        (0x00 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// control register 2
        (0x04 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// status register
        (0x08 => pub sr: ReadWrite<u32, SR::Register>),
        /// data register
        (0x0C => pub dr: ReadWrite<u32, DR::Register>),
        /// CRC polynomial register
        (0x10 => pub crcpr: ReadWrite<u32, CRCPR::Register>),
        /// RX CRC register
        (0x14 => pub rxcrcr: ReadOnly<u32, RXCRCR::Register>),
        /// TX CRC register
        (0x18 => pub txcrcr: ReadOnly<u32, TXCRCR::Register>),
        /// I2S configuration register
        (0x1C => pub i2scfgr: ReadWrite<u32, I2SCFGR::Register>),
        /// I2S prescaler register
        (0x20 => pub i2spr: ReadWrite<u32, I2SPR::Register>),
        (0x24 => @END),
    }
}

register_bitfields![u32,
    pub CR1 [
        /// Clock phase
        CPHA OFFSET(0) NUMBITS(1) [],
        /// Clock polarity
        CPOL OFFSET(1) NUMBITS(1) [],
        /// Master selection
        MSTR OFFSET(2) NUMBITS(1) [],
        /// Baud rate control
        BR OFFSET(3) NUMBITS(3) [
            DivideBy2 = 0,
            DivideBy4 = 1,
            DivideBy8 = 2,
            DivideBy16 = 3,
            DivideBy32 = 4,
            DivideBy64 = 5,
            DivideBy128 = 6,
            DivideBy256 = 7
        ],
        /// SPI enable
        SPE OFFSET(6) NUMBITS(1) [],
        /// Frame format
        LSBFIRST OFFSET(7) NUMBITS(1) [],
        /// Internal slave select
        SSI OFFSET(8) NUMBITS(1) [],
        /// Software slave management
        SSM OFFSET(9) NUMBITS(1) [],
        /// Receive only
        RXONLY OFFSET(10) NUMBITS(1) [],
        /// Data frame format
        DFF OFFSET(11) NUMBITS(1) [
            EightBit = 0,
            SixteenBit = 1
        ],
        /// CRC transfer next
        CRCNEXT OFFSET(12) NUMBITS(1) [],
        /// Hardware CRC calculation enable
        CRCEN OFFSET(13) NUMBITS(1) [],
        /// Output enable in bidirectional mode
        BIDIOE OFFSET(14) NUMBITS(1) [],
        /// Bidirectional data mode enable
        BIDIMODE OFFSET(15) NUMBITS(1) []
    ],
    pub CR2 [
        /// Rx buffer DMA enable
        RXDMAEN OFFSET(0) NUMBITS(1) [],
        /// Tx buffer DMA enable
        TXDMAEN OFFSET(1) NUMBITS(1) [],
        /// SS output enable
        SSOE OFFSET(2) NUMBITS(1) [],
        /// Frame format
        FRF OFFSET(4) NUMBITS(1) [
            Motorola = 0,
            Ti = 1
        ],
        /// Error interrupt enable
        ERRIE OFFSET(5) NUMBITS(1) [],
        /// RX buffer not empty interrupt enable
        RXNEIE OFFSET(6) NUMBITS(1) [],
        /// Tx buffer empty interrupt enable
        TXEIE OFFSET(7) NUMBITS(1) []
    ],
    pub SR [
        /// Receive buffer not empty
        RXNE OFFSET(0) NUMBITS(1) [],
        /// Transmit buffer empty
        TXE OFFSET(1) NUMBITS(1) [],
        /// Channel side
        CHSIDE OFFSET(2) NUMBITS(1) [],
        /// Underrun flag
        UDR OFFSET(3) NUMBITS(1) [],
        /// CRC error flag
        CRCERR OFFSET(4) NUMBITS(1) [],
        /// Mode fault
        MODF OFFSET(5) NUMBITS(1) [],
        /// Overrun flag
        OVR OFFSET(6) NUMBITS(1) [],
        /// Busy flag
        BSY OFFSET(7) NUMBITS(1) [],
        /// Frame format error
        FRE OFFSET(8) NUMBITS(1) []
    ],
    pub DR [
        DR OFFSET(0) NUMBITS(16) []
    ],
    pub CRCPR [
        CRCPOLY OFFSET(0) NUMBITS(16) []
    ],
    pub RXCRCR [
        RXCRC OFFSET(0) NUMBITS(16) []
    ],
    pub TXCRCR [
        TXCRC OFFSET(0) NUMBITS(16) []
    ],
    pub I2SCFGR [
        /// Channel length
        CHLEN OFFSET(0) NUMBITS(1) [
            SixteenBit = 0,
            ThirtyTwoBit = 1
        ],
        /// Data length to be transferred
        DATLEN OFFSET(1) NUMBITS(2) [
            SixteenBit = 0,
            TwentyFourBit = 1,
            ThirtyTwoBit = 2
        ],
        /// Steady state clock polarity
        CKPOL OFFSET(3) NUMBITS(1) [],
        /// I2S standard selection
        I2SSTD OFFSET(4) NUMBITS(2) [
            Philips = 0,
            MsbJustified = 1,
            LsbJustified = 2,
            Pcm = 3
        ],
        /// PCM frame synchronization
        PCMSYNC OFFSET(7) NUMBITS(1) [
            Short = 0,
            Long = 1
        ],
        /// I2S configuration mode
        I2SCFG OFFSET(8) NUMBITS(2) [
            SlaveTransmit = 0,
            SlaveReceive = 1,
            MasterTransmit = 2,
            MasterReceive = 3
        ],
        /// I2S enable
        I2SE OFFSET(10) NUMBITS(1) [],
        /// I2S mode selection
        I2SMOD OFFSET(11) NUMBITS(1) []
    ],
    pub I2SPR [
        /// Linear prescaler
        I2SDIV OFFSET(0) NUMBITS(8) [],
        /// Odd factor for the prescaler
        ODD OFFSET(8) NUMBITS(1) [],
        /// Master clock output enable
        MCKOE OFFSET(9) NUMBITS(1) []
    ]
];

instances! {
    pub enum Spi {
        Spi1("SPI1") = memory_map::SPI1_BASE,
        Spi2("SPI2") = memory_map::SPI2_BASE,
        Spi3("SPI3") = memory_map::SPI3_BASE,
        Spi4("SPI4") = memory_map::SPI4_BASE,
        Spi5("SPI5") = memory_map::SPI5_BASE,
        Spi6("SPI6") = memory_map::SPI6_BASE,
        I2s2Ext("I2S2ext") = memory_map::I2S2EXT_BASE,
        I2s3Ext("I2S3ext") = memory_map::I2S3EXT_BASE,
    }
}

impl Spi {
    pub const fn supports_i2s(self) -> bool {
        match self {
            Spi::Spi2 | Spi::Spi3 | Spi::I2s2Ext | Spi::I2s3Ext => true,
            Spi::Spi1 | Spi::Spi4 | Spi::Spi5 | Spi::Spi6 => false,
        }
    }

    pub const fn is_i2s_extension(self) -> bool {
        matches!(self, Spi::I2s2Ext | Spi::I2s3Ext)
    }

    /// Full-duplex extension paired with this interface.
    pub const fn i2s_extension(self) -> Option<Spi> {
        match self {
            Spi::Spi2 => Some(Spi::I2s2Ext),
            Spi::Spi3 => Some(Spi::I2s3Ext),
            _ => None,
        }
    }

    /// Extension blocks share the interrupt of the interface they extend.
    pub const fn interrupt(self) -> Interrupt {
        match self {
            Spi::Spi1 => Interrupt::SPI1,
            Spi::Spi2 | Spi::I2s2Ext => Interrupt::SPI2,
            Spi::Spi3 | Spi::I2s3Ext => Interrupt::SPI3,
            Spi::Spi4 => Interrupt::SPI4,
            Spi::Spi5 => Interrupt::SPI5,
            Spi::Spi6 => Interrupt::SPI6,
        }
    }
}

pub(crate) const SPI1: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(memory_map::SPI1_BASE as *const SpiRegisters) };
pub(crate) const SPI2: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(memory_map::SPI2_BASE as *const SpiRegisters) };
pub(crate) const SPI3: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(memory_map::SPI3_BASE as *const SpiRegisters) };
pub(crate) const SPI4: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(memory_map::SPI4_BASE as *const SpiRegisters) };
pub(crate) const SPI5: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(memory_map::SPI5_BASE as *const SpiRegisters) };
pub(crate) const SPI6: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(memory_map::SPI6_BASE as *const SpiRegisters) };
pub(crate) const I2S2EXT: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(memory_map::I2S2EXT_BASE as *const SpiRegisters) };
pub(crate) const I2S3EXT: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(memory_map::I2S3EXT_BASE as *const SpiRegisters) };

#[allow(non_snake_case)]
pub mod legacy {
    pub mod SR {
        pub use crate::spi::SR::FRE as TIFRFE;
    }
}

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use tock_registers::interfaces::{ReadWriteable, Readable};
    use tock_registers::registers::InMemoryRegister;

    use super::*;
    use crate::test_util::{assert_fields, mask};

    #[test]
    fn layout() {
        let offsets = [
            (offset_of!(SpiRegisters, cr1), 0x00),
            (offset_of!(SpiRegisters, cr2), 0x04),
            (offset_of!(SpiRegisters, sr), 0x08),
            (offset_of!(SpiRegisters, dr), 0x0C),
            (offset_of!(SpiRegisters, crcpr), 0x10),
            (offset_of!(SpiRegisters, rxcrcr), 0x14),
            (offset_of!(SpiRegisters, txcrcr), 0x18),
            (offset_of!(SpiRegisters, i2scfgr), 0x1C),
            (offset_of!(SpiRegisters, i2spr), 0x20),
        ];
        for (actual, expected) in offsets {
            assert_eq!(actual, expected);
        }
        assert_eq!(size_of::<SpiRegisters>(), 0x24);
    }

    #[test]
    fn fields() {
        assert_eq!(assert_fields(32, &[
            mask(CR1::CPHA),
            mask(CR1::CPOL),
            mask(CR1::MSTR),
            mask(CR1::BR),
            mask(CR1::SPE),
            mask(CR1::LSBFIRST),
            mask(CR1::SSI),
            mask(CR1::SSM),
            mask(CR1::RXONLY),
            mask(CR1::DFF),
            mask(CR1::CRCNEXT),
            mask(CR1::CRCEN),
            mask(CR1::BIDIOE),
            mask(CR1::BIDIMODE),
        ]), 0xFFFF);
        assert_eq!(assert_fields(32, &[
            mask(CR2::RXDMAEN),
            mask(CR2::TXDMAEN),
            mask(CR2::SSOE),
            mask(CR2::FRF),
            mask(CR2::ERRIE),
            mask(CR2::RXNEIE),
            mask(CR2::TXEIE),
        ]), 0xF7);
        assert_eq!(assert_fields(32, &[
            mask(SR::RXNE),
            mask(SR::TXE),
            mask(SR::CHSIDE),
            mask(SR::UDR),
            mask(SR::CRCERR),
            mask(SR::MODF),
            mask(SR::OVR),
            mask(SR::BSY),
            mask(SR::FRE),
        ]), 0x1FF);
        assert_eq!(assert_fields(32, &[
            mask(I2SCFGR::CHLEN),
            mask(I2SCFGR::DATLEN),
            mask(I2SCFGR::CKPOL),
            mask(I2SCFGR::I2SSTD),
            mask(I2SCFGR::PCMSYNC),
            mask(I2SCFGR::I2SCFG),
            mask(I2SCFGR::I2SE),
            mask(I2SCFGR::I2SMOD),
        ]), 0x0FBF);
        assert_eq!(
            assert_fields(32, &[mask(I2SPR::I2SDIV), mask(I2SPR::ODD), mask(I2SPR::MCKOE)]),
            0x3FF
        );
    }

    #[test]
    fn master_configuration_composes() {
        let cr1 = InMemoryRegister::<u32, CR1::Register>::new(0);
        cr1.modify(CR1::MSTR::SET + CR1::BR::DivideBy32 + CR1::SSM::SET + CR1::SSI::SET);
        assert_eq!(cr1.get(), 0x0324);
        cr1.modify(CR1::SPE::SET);
        assert_eq!(cr1.read_as_enum(CR1::BR), Some(CR1::BR::Value::DivideBy32));
        assert!(cr1.is_set(CR1::SPE));
    }

    #[test]
    fn i2s_capabilities() {
        let i2s: usize = Spi::ALL.iter().filter(|spi| spi.supports_i2s()).count();
        assert_eq!(i2s, 4);
        assert_eq!(Spi::Spi2.i2s_extension(), Some(Spi::I2s2Ext));
        assert_eq!(Spi::Spi3.i2s_extension(), Some(Spi::I2s3Ext));
        assert_eq!(Spi::Spi1.i2s_extension(), None);
        assert!(Spi::I2s3Ext.is_i2s_extension());
        assert_eq!(Spi::I2s2Ext.interrupt(), Interrupt::SPI2);
        // The extensions sit right before and after their partners.
        assert_eq!(Spi::Spi2.base() - Spi::I2s2Ext.base(), 0x400);
        assert_eq!(Spi::I2s3Ext.base() - Spi::Spi3.base(), 0x400);
    }

    #[test]
    fn roster() {
        for spi in Spi::ALL {
            assert_eq!(Spi::from_base(spi.base()), Some(*spi));
        }
        assert_eq!(I2S2EXT.address(), 0x4000_3400);
        assert_eq!(I2S3EXT.address(), 0x4000_4000);
        assert_eq!(SPI6.address(), 0x4001_5400);
        assert_eq!(Spi::I2s2Ext.name(), "I2S2ext");
    }

    #[test]
    fn legacy_names() {
        assert_eq!(mask(legacy::SR::TIFRFE), mask(SR::FRE));
    }
}
