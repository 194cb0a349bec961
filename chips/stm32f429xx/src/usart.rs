// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Universal synchronous/asynchronous receiver transmitters.
//!
//! USART1, USART2, USART3 and USART6 have the full feature set. UART4,
//! UART5, UART7 and UART8 share the same layout but lack the synchronous
//! clock, smartcard mode and hardware flow control.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    pub UsartRegisters {
        /// status register
        (0x00 => pub sr: ReadWrite<u32, SR::Register>),
        /// data register
        (0x04 => pub dr: ReadWrite<u32, DR::Register>),
        /// baud rate register
        (0x08 => pub brr: ReadWrite<u32, BRR::Register>),
        /// control register 1
        (0x0C => pub cr1: ReadWrite<u32, CR1::Register>),
        /// control register 2
        (0x10 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// control register 3
        (0x14 => pub cr3: ReadWrite<u32, CR3::Register>),
        /// guard time and prescaler register
        (0x18 => pub gtpr: ReadWrite<u32, GTPR::Register>),
        (0x1C => @END),
    }
}

register_bitfields![u32,
    pub SR [
        /// Parity error
        PE OFFSET(0) NUMBITS(1) [],
        /// Framing error
        FE OFFSET(1) NUMBITS(1) [],
        /// Noise detected flag
        NF OFFSET(2) NUMBITS(1) [],
        /// Overrun error
        ORE OFFSET(3) NUMBITS(1) [],
        /// IDLE line detected
        IDLE OFFSET(4) NUMBITS(1) [],
        /// Read data register not empty
        RXNE OFFSET(5) NUMBITS(1) [],
        /// Transmission complete
        TC OFFSET(6) NUMBITS(1) [],
        /// Transmit data register empty
        TXE OFFSET(7) NUMBITS(1) [],
        /// LIN break detection flag
        LBD OFFSET(8) NUMBITS(1) [],
        /// CTS flag
        CTS OFFSET(9) NUMBITS(1) []
    ],
    pub DR [
        DR OFFSET(0) NUMBITS(9) []
    ],
    pub BRR [
        /// Fraction of USARTDIV
        DIV_Fraction OFFSET(0) NUMBITS(4) [],
        /// Mantissa of USARTDIV
        DIV_Mantissa OFFSET(4) NUMBITS(12) []
    ],
    pub CR1 [
        /// Send break
        SBK OFFSET(0) NUMBITS(1) [],
        /// Receiver wakeup
        RWU OFFSET(1) NUMBITS(1) [],
        /// Receiver enable
        RE OFFSET(2) NUMBITS(1) [],
        /// Transmitter enable
        TE OFFSET(3) NUMBITS(1) [],
        /// IDLE interrupt enable
        IDLEIE OFFSET(4) NUMBITS(1) [],
        /// RXNE interrupt enable
        RXNEIE OFFSET(5) NUMBITS(1) [],
        /// Transmission complete interrupt enable
        TCIE OFFSET(6) NUMBITS(1) [],
        /// TXE interrupt enable
        TXEIE OFFSET(7) NUMBITS(1) [],
        /// PE interrupt enable
        PEIE OFFSET(8) NUMBITS(1) [],
        /// Parity selection
        PS OFFSET(9) NUMBITS(1) [
            Even = 0,
            Odd = 1
        ],
        /// Parity control enable
        PCE OFFSET(10) NUMBITS(1) [],
        /// Wakeup method
        WAKE OFFSET(11) NUMBITS(1) [
            IdleLine = 0,
            AddressMark = 1
        ],
        /// Word length
        M OFFSET(12) NUMBITS(1) [
            Eight = 0,
            Nine = 1
        ],
        /// USART enable
        UE OFFSET(13) NUMBITS(1) [],
        /// Oversampling mode
        OVER8 OFFSET(15) NUMBITS(1) [
            By16 = 0,
            By8 = 1
        ]
    ],
    pub CR2 [
        /// Address of the USART node
        ADD OFFSET(0) NUMBITS(4) [],
        /// LIN break detection length
        LBDL OFFSET(5) NUMBITS(1) [],
        /// LIN break detection interrupt enable
        LBDIE OFFSET(6) NUMBITS(1) [],
        /// Last bit clock pulse
        LBCL OFFSET(8) NUMBITS(1) [],
        /// Clock phase
        CPHA OFFSET(9) NUMBITS(1) [],
        /// Clock polarity
        CPOL OFFSET(10) NUMBITS(1) [],
        /// Clock enable
        CLKEN OFFSET(11) NUMBITS(1) [],
        /// STOP bits
        STOP OFFSET(12) NUMBITS(2) [
            One = 0,
            Half = 1,
            Two = 2,
            OneAndHalf = 3
        ],
        /// LIN mode enable
        LINEN OFFSET(14) NUMBITS(1) []
    ],
    pub CR3 [
        /// Error interrupt enable
        EIE OFFSET(0) NUMBITS(1) [],
        /// IrDA mode enable
        IREN OFFSET(1) NUMBITS(1) [],
        /// IrDA low-power
        IRLP OFFSET(2) NUMBITS(1) [],
        /// Half-duplex selection
        HDSEL OFFSET(3) NUMBITS(1) [],
        /// Smartcard NACK enable
        NACK OFFSET(4) NUMBITS(1) [],
        /// Smartcard mode enable
        SCEN OFFSET(5) NUMBITS(1) [],
        /// DMA enable receiver
        DMAR OFFSET(6) NUMBITS(1) [],
        /// DMA enable transmitter
        DMAT OFFSET(7) NUMBITS(1) [],
        /// RTS enable
        RTSE OFFSET(8) NUMBITS(1) [],
        /// CTS enable
        CTSE OFFSET(9) NUMBITS(1) [],
        /// CTS interrupt enable
        CTSIE OFFSET(10) NUMBITS(1) [],
        /// One sample bit method enable
        ONEBIT OFFSET(11) NUMBITS(1) []
    ],
    pub GTPR [
        /// Prescaler value
        PSC OFFSET(0) NUMBITS(8) [],
        /// Guard time value
        GT OFFSET(8) NUMBITS(8) []
    ]
];

instances! {
    pub enum Usart {
        Usart1("USART1") = memory_map::USART1_BASE,
        Usart2("USART2") = memory_map::USART2_BASE,
        Usart3("USART3") = memory_map::USART3_BASE,
        Uart4("UART4") = memory_map::UART4_BASE,
        Uart5("UART5") = memory_map::UART5_BASE,
        Usart6("USART6") = memory_map::USART6_BASE,
        Uart7("UART7") = memory_map::UART7_BASE,
        Uart8("UART8") = memory_map::UART8_BASE,
    }
}

impl Usart {
    /// Synchronous mode with a clock output.
    pub const fn is_usart(self) -> bool {
        match self {
            Usart::Usart1 | Usart::Usart2 | Usart::Usart3 | Usart::Usart6 => true,
            Usart::Uart4 | Usart::Uart5 | Usart::Uart7 | Usart::Uart8 => false,
        }
    }

    /// Asynchronous only: no clock output, smartcard or flow control.
    pub const fn is_uart(self) -> bool {
        match self {
            Usart::Uart4 | Usart::Uart5 | Usart::Uart7 | Usart::Uart8 => true,
            Usart::Usart1 | Usart::Usart2 | Usart::Usart3 | Usart::Usart6 => false,
        }
    }

    /// Single-wire half-duplex through `CR3.HDSEL`.
    pub const fn supports_half_duplex(self) -> bool {
        match self {
            Usart::Usart1
            | Usart::Usart2
            | Usart::Usart3
            | Usart::Uart4
            | Usart::Uart5
            | Usart::Usart6
            | Usart::Uart7
            | Usart::Uart8 => true,
        }
    }

    pub const fn supports_lin(self) -> bool {
        match self {
            Usart::Usart1
            | Usart::Usart2
            | Usart::Usart3
            | Usart::Uart4
            | Usart::Uart5
            | Usart::Usart6
            | Usart::Uart7
            | Usart::Uart8 => true,
        }
    }

    pub const fn supports_irda(self) -> bool {
        match self {
            Usart::Usart1
            | Usart::Usart2
            | Usart::Usart3
            | Usart::Uart4
            | Usart::Uart5
            | Usart::Usart6
            | Usart::Uart7
            | Usart::Uart8 => true,
        }
    }

    pub const fn supports_hardware_flow_control(self) -> bool {
        self.is_usart()
    }

    pub const fn supports_smartcard(self) -> bool {
        self.is_usart()
    }

    pub const fn interrupt(self) -> Interrupt {
        match self {
            Usart::Usart1 => Interrupt::USART1,
            Usart::Usart2 => Interrupt::USART2,
            Usart::Usart3 => Interrupt::USART3,
            Usart::Uart4 => Interrupt::UART4,
            Usart::Uart5 => Interrupt::UART5,
            Usart::Usart6 => Interrupt::USART6,
            Usart::Uart7 => Interrupt::UART7,
            Usart::Uart8 => Interrupt::UART8,
        }
    }
}

pub(crate) const USART1: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(memory_map::USART1_BASE as *const UsartRegisters) };
pub(crate) const USART2: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(memory_map::USART2_BASE as *const UsartRegisters) };
pub(crate) const USART3: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(memory_map::USART3_BASE as *const UsartRegisters) };
pub(crate) const UART4: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(memory_map::UART4_BASE as *const UsartRegisters) };
pub(crate) const UART5: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(memory_map::UART5_BASE as *const UsartRegisters) };
pub(crate) const USART6: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(memory_map::USART6_BASE as *const UsartRegisters) };
pub(crate) const UART7: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(memory_map::UART7_BASE as *const UsartRegisters) };
pub(crate) const UART8: StaticRef<UsartRegisters> =
    unsafe { StaticRef::new(memory_map::UART8_BASE as *const UsartRegisters) };

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
            (offset_of!(UsartRegisters, sr), 0x00),
            (offset_of!(UsartRegisters, dr), 0x04),
            (offset_of!(UsartRegisters, brr), 0x08),
            (offset_of!(UsartRegisters, cr1), 0x0C),
            (offset_of!(UsartRegisters, cr2), 0x10),
            (offset_of!(UsartRegisters, cr3), 0x14),
            (offset_of!(UsartRegisters, gtpr), 0x18),
        ];
        for (actual, expected) in offsets {
            assert_eq!(actual, expected);
        }
        assert_eq!(size_of::<UsartRegisters>(), 0x1C);
    }

    #[test]
    fn fields() {
        assert_eq!(assert_fields(32, &[
            mask(SR::PE),
            mask(SR::FE),
            mask(SR::NF),
            mask(SR::ORE),
            mask(SR::IDLE),
            mask(SR::RXNE),
            mask(SR::TC),
            mask(SR::TXE),
            mask(SR::LBD),
            mask(SR::CTS),
        ]), 0x3FF);
        assert_eq!(mask(DR::DR), 0x1FF);
        assert_eq!(assert_fields(32, &[mask(BRR::DIV_Fraction), mask(BRR::DIV_Mantissa)]), 0xFFFF);
        assert_eq!(assert_fields(32, &[
            mask(CR1::SBK),
            mask(CR1::RWU),
            mask(CR1::RE),
            mask(CR1::TE),
            mask(CR1::IDLEIE),
            mask(CR1::RXNEIE),
            mask(CR1::TCIE),
            mask(CR1::TXEIE),
            mask(CR1::PEIE),
            mask(CR1::PS),
            mask(CR1::PCE),
            mask(CR1::WAKE),
            mask(CR1::M),
            mask(CR1::UE),
            mask(CR1::OVER8),
        ]), 0xBFFF);
        assert_eq!(assert_fields(32, &[
            mask(CR2::ADD),
            mask(CR2::LBDL),
            mask(CR2::LBDIE),
            mask(CR2::LBCL),
            mask(CR2::CPHA),
            mask(CR2::CPOL),
            mask(CR2::CLKEN),
            mask(CR2::STOP),
            mask(CR2::LINEN),
        ]), 0x7F6F);
        assert_eq!(assert_fields(32, &[
            mask(CR3::EIE),
            mask(CR3::IREN),
            mask(CR3::IRLP),
            mask(CR3::HDSEL),
            mask(CR3::NACK),
            mask(CR3::SCEN),
            mask(CR3::DMAR),
            mask(CR3::DMAT),
            mask(CR3::RTSE),
            mask(CR3::CTSE),
            mask(CR3::CTSIE),
            mask(CR3::ONEBIT),
        ]), 0xFFF);
        assert_eq!(assert_fields(32, &[mask(GTPR::PSC), mask(GTPR::GT)]), 0xFFFF);
    }

    #[test]
    fn capabilities() {
        let full = [Usart::Usart1, Usart::Usart2, Usart::Usart3, Usart::Usart6];
        for usart in Usart::ALL {
            let expected = full.contains(usart);
            assert_eq!(usart.is_usart(), expected, "{usart}");
            assert_eq!(usart.supports_hardware_flow_control(), expected);
            assert_eq!(usart.supports_smartcard(), expected);
            assert_eq!(usart.is_uart(), !expected, "{usart}");
            assert!(usart.supports_half_duplex());
            assert!(usart.supports_lin());
            assert!(usart.supports_irda());
            assert_eq!(Usart::from_base(usart.base()), Some(*usart));
        }
        assert_eq!(Usart::Uart7.interrupt().number(), 82);
        assert!(Usart::Uart4.is_uart());
        assert!(!Usart::Usart2.is_uart());
        assert!(Usart::Uart8.supports_half_duplex());
    }

    #[test]
    fn baud_rate_register() {
        // 115200 baud from 84 MHz: USARTDIV = 45.5625
        let reg = InMemoryRegister::<u32, BRR::Register>::new(0);
        reg.write(BRR::DIV_Mantissa.val(45) + BRR::DIV_Fraction.val(9));
        assert_eq!(reg.get(), 0x2D9);
        assert_eq!(reg.read(BRR::DIV_Mantissa), 45);
    }

    #[test]
    fn bindings() {
        assert_eq!(USART1.address(), 0x4001_1000);
        assert_eq!(USART6.address(), 0x4001_1400);
        assert_eq!(UART8.address(), 0x4000_7C00);
    }
}
