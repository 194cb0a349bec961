// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Inter-integrated circuit interfaces.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    pub I2cRegisters {
        /// control register 1
        (0x00 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// control register 2
        (0x04 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// own address register 1
        (0x08 => pub oar1: ReadWrite<u32, OAR1::Register>),
        /// own address register 2
        (0x0C => pub oar2: ReadWrite<u32, OAR2::Register>),
        /// data register
        (0x10 => pub dr: ReadWrite<u32, DR::Register>),
        /// status register 1
        (0x14 => pub sr1: ReadWrite<u32, SR1::Register>),
        /// status register 2, reading it after SR1 clears ADDR
        (0x18 => pub sr2: ReadOnly<u32, SR2::Register>),
        /// clock control register
        (0x1C => pub ccr: ReadWrite<u32, CCR::Register>),
        /// rise time register
        (0x20 => pub trise: ReadWrite<u32, TRISE::Register>),
        /// noise filter register
        (0x24 => pub fltr: ReadWrite<u32, FLTR::Register>),
        (0x28 => @END),
    }
}

register_bitfields![u32,
    pub CR1 [
        /// Peripheral enable
        PE OFFSET(0) NUMBITS(1) [],
        /// SMBus mode
        SMBUS OFFSET(1) NUMBITS(1) [],
        /// SMBus type
        SMBTYPE OFFSET(3) NUMBITS(1) [],
        /// ARP enable
        ENARP OFFSET(4) NUMBITS(1) [],
        /// PEC enable
        ENPEC OFFSET(5) NUMBITS(1) [],
        /// General call enable
        ENGC OFFSET(6) NUMBITS(1) [],
        /// Clock stretching disable
        NOSTRETCH OFFSET(7) NUMBITS(1) [],
        /// Start generation
        START OFFSET(8) NUMBITS(1) [],
        /// Stop generation
        STOP OFFSET(9) NUMBITS(1) [],
        /// Acknowledge enable
        ACK OFFSET(10) NUMBITS(1) [],
        /// Acknowledge/PEC position
        POS OFFSET(11) NUMBITS(1) [],
        /// Packet error checking
        PEC OFFSET(12) NUMBITS(1) [],
        /// SMBus alert
        ALERT OFFSET(13) NUMBITS(1) [],
        /// Software reset
        SWRST OFFSET(15) NUMBITS(1) []
    ],
    pub CR2 [
        /// Peripheral clock frequency in MHz
        FREQ OFFSET(0) NUMBITS(6) [],
        /// Error interrupt enable
        ITERREN OFFSET(8) NUMBITS(1) [],
        /// Event interrupt enable
        ITEVTEN OFFSET(9) NUMBITS(1) [],
        /// Buffer interrupt enable
        ITBUFEN OFFSET(10) NUMBITS(1) [],
        /// DMA requests enable
        DMAEN OFFSET(11) NUMBITS(1) [],
        /// DMA last transfer
        LAST OFFSET(12) NUMBITS(1) []
    ],
    pub OAR1 [
        /// Bit 0 of a 10-bit address
        ADD0 OFFSET(0) NUMBITS(1) [],
        /// 7-bit address, or bits 7:1 of a 10-bit address
        ADD1_7 OFFSET(1) NUMBITS(7) [],
        /// Bits 9:8 of a 10-bit address
        ADD8_9 OFFSET(8) NUMBITS(2) [],
        /// Addressing mode
        ADDMODE OFFSET(15) NUMBITS(1) [
            SevenBit = 0,
            TenBit = 1
        ]
    ],
    pub OAR2 [
        /// Dual addressing mode enable
        ENDUAL OFFSET(0) NUMBITS(1) [],
        /// Interface address in dual addressing mode
        ADD2 OFFSET(1) NUMBITS(7) []
    ],
    pub DR [
        DR OFFSET(0) NUMBITS(8) []
    ],
    pub SR1 [
        /// Start bit generated
        SB OFFSET(0) NUMBITS(1) [],
        /// Address sent or matched
        ADDR OFFSET(1) NUMBITS(1) [],
        /// Byte transfer finished
        BTF OFFSET(2) NUMBITS(1) [],
        /// 10-bit header sent
        ADD10 OFFSET(3) NUMBITS(1) [],
        /// Stop detection
        STOPF OFFSET(4) NUMBITS(1) [],
        /// Receive buffer not empty
        RXNE OFFSET(6) NUMBITS(1) [],
        /// Transmit buffer empty
        TXE OFFSET(7) NUMBITS(1) [],
        /// Bus error
        BERR OFFSET(8) NUMBITS(1) [],
        /// Arbitration lost
        ARLO OFFSET(9) NUMBITS(1) [],
        /// Acknowledge failure
        AF OFFSET(10) NUMBITS(1) [],
        /// Overrun/underrun
        OVR OFFSET(11) NUMBITS(1) [],
        /// PEC error in reception
        PECERR OFFSET(12) NUMBITS(1) [],
        /// Timeout or Tlow error
        TIMEOUT OFFSET(14) NUMBITS(1) [],
        /// SMBus alert
        SMBALERT OFFSET(15) NUMBITS(1) []
    ],
    pub SR2 [
        /// Master/slave
        MSL OFFSET(0) NUMBITS(1) [],
        /// Bus busy
        BUSY OFFSET(1) NUMBITS(1) [],
        /// Transmitter/receiver
        TRA OFFSET(2) NUMBITS(1) [],
        /// General call address
        GENCALL OFFSET(4) NUMBITS(1) [],
        /// SMBus device default address
        SMBDEFAULT OFFSET(5) NUMBITS(1) [],
        /// SMBus host header
        SMBHOST OFFSET(6) NUMBITS(1) [],
        /// Dual flag
        DUALF OFFSET(7) NUMBITS(1) [],
        /// Packet error checking register
        PEC OFFSET(8) NUMBITS(8) []
    ],
    pub CCR [
        /// Clock control in master mode
        CCR OFFSET(0) NUMBITS(12) [],
        /// Fast mode duty cycle
        DUTY OFFSET(14) NUMBITS(1) [
            Duty2 = 0,
            Duty16_9 = 1
        ],
        /// Master mode selection
        FS OFFSET(15) NUMBITS(1) [
            Standard = 0,
            Fast = 1
        ]
    ],
    pub TRISE [
        /// Maximum rise time in master mode, in PCLK1 cycles plus one
        TRISE OFFSET(0) NUMBITS(6) []
    ],
    pub FLTR [
        /// Digital noise filter length in PCLK1 cycles
        DNF OFFSET(0) NUMBITS(4) [],
        /// Analog noise filter off
        ANOFF OFFSET(4) NUMBITS(1) []
    ]
];

instances! {
    pub enum I2c {
        I2c1("I2C1") = memory_map::I2C1_BASE,
        I2c2("I2C2") = memory_map::I2C2_BASE,
        I2c3("I2C3") = memory_map::I2C3_BASE,
    }
}

impl I2c {
    pub const fn event_interrupt(self) -> Interrupt {
        match self {
            I2c::I2c1 => Interrupt::I2C1_EV,
            I2c::I2c2 => Interrupt::I2C2_EV,
            I2c::I2c3 => Interrupt::I2C3_EV,
        }
    }

    pub const fn error_interrupt(self) -> Interrupt {
        match self {
            I2c::I2c1 => Interrupt::I2C1_ER,
            I2c::I2c2 => Interrupt::I2C2_ER,
            I2c::I2c3 => Interrupt::I2C3_ER,
        }
    }
}

pub(crate) const I2C1: StaticRef<I2cRegisters> =
    unsafe { StaticRef::new(memory_map::I2C1_BASE as *const I2cRegisters) };
pub(crate) const I2C2: StaticRef<I2cRegisters> =
    unsafe { StaticRef::new(memory_map::I2C2_BASE as *const I2cRegisters) };
pub(crate) const I2C3: StaticRef<I2cRegisters> =
    unsafe { StaticRef::new(memory_map::I2C3_BASE as *const I2cRegisters) };
