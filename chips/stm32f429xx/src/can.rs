// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Controller area network (bxCAN).
//!
//! CAN1 is the master instance: the 28 filter banks live in its register
//! block and are shared with CAN2, which starts at bank `FMR.CAN2SB`. The
//! filter registers are implemented in CAN1 only, so they form a separate
//! [`CanFilterRegisters`] block at `CAN1_BASE + FILTER_OFFSET`. The same
//! offsets in the CAN2 block are reserved.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::ErrorCode;
use crate::memory_map;
use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

pub const TX_MAILBOX_COUNT: usize = 3;
pub const RX_FIFO_COUNT: usize = 2;
pub const FILTER_BANK_COUNT: usize = 28;
/// Offset of the filter registers from the CAN1 base.
pub const FILTER_OFFSET: usize = 0x200;

pub const MCR_RESET: u32 = 0x0001_0002;
pub const MSR_RESET: u32 = 0x0000_0C02;
pub const TSR_RESET: u32 = 0x1C00_0000;
pub const BTR_RESET: u32 = 0x0123_0000;

register_structs! {
    pub CanRegisters {
        /// master control register
        (0x000 => pub mcr: ReadWrite<u32, MCR::Register>),
        /// master status register
        (0x004 => pub msr: ReadWrite<u32, MSR::Register>),
        /// transmit status register
        (0x008 => pub tsr: ReadWrite<u32, TSR::Register>),
        /// receive FIFO 0 register
        (0x00C => pub rf0r: ReadWrite<u32, RF0R::Register>),
        /// receive FIFO 1 register
        (0x010 => pub rf1r: ReadWrite<u32, RF1R::Register>),
        /// interrupt enable register
        (0x014 => pub ier: ReadWrite<u32, IER::Register>),
        /// error status register
        (0x018 => pub esr: ReadWrite<u32, ESR::Register>),
        /// bit timing register, writable in initialization mode only
        (0x01C => pub btr: ReadWrite<u32, BTR::Register>),
        (0x020 => _reserved0),
        /// transmit mailboxes
        (0x180 => pub tx_mailbox: [TxMailbox; TX_MAILBOX_COUNT]),
        /// receive FIFO output mailboxes
        (0x1B0 => pub rx_fifo: [RxFifoMailbox; RX_FIFO_COUNT]),
        (0x1D0 => _reserved1),
        (0x200 => @END),
    },

    /// Filters shared by both controllers, CAN1 only
    pub CanFilterRegisters {
        /// filter master register
        (0x000 => pub fmr: ReadWrite<u32, FMR::Register>),
        /// filter mode register
        (0x004 => pub fm1r: ReadWrite<u32, FM1R::Register>),
        (0x008 => _reserved0),
        /// filter scale register
        (0x00C => pub fs1r: ReadWrite<u32, FS1R::Register>),
        (0x010 => _reserved1),
        /// filter FIFO assignment register
        (0x014 => pub ffa1r: ReadWrite<u32, FFA1R::Register>),
        (0x018 => _reserved2),
        /// filter activation register
        (0x01C => pub fa1r: ReadWrite<u32, FA1R::Register>),
        (0x020 => _reserved3),
        /// filter banks 0 to 27
        (0x040 => pub filter_bank: [FilterBank; FILTER_BANK_COUNT]),
        (0x120 => @END),
    },

    pub TxMailbox {
        /// identifier register
        (0x00 => pub tir: ReadWrite<u32, TIR::Register>),
        /// data length control and time stamp register
        (0x04 => pub tdtr: ReadWrite<u32, TDTR::Register>),
        /// low data register
        (0x08 => pub tdlr: ReadWrite<u32, TDLR::Register>),
        /// high data register
        (0x0C => pub tdhr: ReadWrite<u32, TDHR::Register>),
        (0x10 => @END),
    },

    pub RxFifoMailbox {
        /// identifier register
        (0x00 => pub rir: ReadOnly<u32, RIR::Register>),
        /// data length control and time stamp register
        (0x04 => pub rdtr: ReadOnly<u32, RDTR::Register>),
        /// low data register
        (0x08 => pub rdlr: ReadOnly<u32, RDLR::Register>),
        /// high data register
        (0x0C => pub rdhr: ReadOnly<u32, RDHR::Register>),
        (0x10 => @END),
    },

    /// Two 32-bit filters, or identifier and mask, depending on FM1R and FS1R
    pub FilterBank {
        (0x0 => pub fr1: ReadWrite<u32, FR::Register>),
        (0x4 => pub fr2: ReadWrite<u32, FR::Register>),
        (0x8 => @END),
    }
}

register_bitfields![u32,
    pub MCR [
        /// Initialization request
        INRQ OFFSET(0) NUMBITS(1) [],
        /// Sleep mode request
        SLEEP OFFSET(1) NUMBITS(1) [],
        /// Transmit FIFO priority
        TXFP OFFSET(2) NUMBITS(1) [],
        /// Receive FIFO locked mode
        RFLM OFFSET(3) NUMBITS(1) [],
        /// No automatic retransmission
        NART OFFSET(4) NUMBITS(1) [],
        /// Automatic wakeup mode
        AWUM OFFSET(5) NUMBITS(1) [],
        /// Automatic bus-off management
        ABOM OFFSET(6) NUMBITS(1) [],
        /// Time triggered communication mode
        TTCM OFFSET(7) NUMBITS(1) [],
        /// Software master reset
        RESET OFFSET(15) NUMBITS(1) [],
        /// Debug freeze
        DBF OFFSET(16) NUMBITS(1) []
    ],
    pub MSR [
        /// Initialization acknowledge
        INAK OFFSET(0) NUMBITS(1) [],
        /// Sleep acknowledge
        SLAK OFFSET(1) NUMBITS(1) [],
        /// Error interrupt
        ERRI OFFSET(2) NUMBITS(1) [],
        /// Wakeup interrupt
        WKUI OFFSET(3) NUMBITS(1) [],
        /// Sleep acknowledge interrupt
        SLAKI OFFSET(4) NUMBITS(1) [],
        /// Transmit mode
        TXM OFFSET(8) NUMBITS(1) [],
        /// Receive mode
        RXM OFFSET(9) NUMBITS(1) [],
        /// Last sample point
        SAMP OFFSET(10) NUMBITS(1) [],
        /// CAN Rx signal
        RX OFFSET(11) NUMBITS(1) []
    ],
    pub TSR [
        /// Request completed mailbox 0
        RQCP0 OFFSET(0) NUMBITS(1) [],
        /// Transmission OK of mailbox 0
        TXOK0 OFFSET(1) NUMBITS(1) [],
        /// Arbitration lost for mailbox 0
        ALST0 OFFSET(2) NUMBITS(1) [],
        /// Transmission error of mailbox 0
        TERR0 OFFSET(3) NUMBITS(1) [],
        /// Abort request for mailbox 0
        ABRQ0 OFFSET(7) NUMBITS(1) [],
        /// Request completed mailbox 1
        RQCP1 OFFSET(8) NUMBITS(1) [],
        /// Transmission OK of mailbox 1
        TXOK1 OFFSET(9) NUMBITS(1) [],
        /// Arbitration lost for mailbox 1
        ALST1 OFFSET(10) NUMBITS(1) [],
        /// Transmission error of mailbox 1
        TERR1 OFFSET(11) NUMBITS(1) [],
        /// Abort request for mailbox 1
        ABRQ1 OFFSET(15) NUMBITS(1) [],
        /// Request completed mailbox 2
        RQCP2 OFFSET(16) NUMBITS(1) [],
        /// Transmission OK of mailbox 2
        TXOK2 OFFSET(17) NUMBITS(1) [],
        /// Arbitration lost for mailbox 2
        ALST2 OFFSET(18) NUMBITS(1) [],
        /// Transmission error of mailbox 2
        TERR2 OFFSET(19) NUMBITS(1) [],
        /// Abort request for mailbox 2
        ABRQ2 OFFSET(23) NUMBITS(1) [],
        /// Mailbox code
        CODE OFFSET(24) NUMBITS(2) [],
        /// Transmit mailbox 0 empty
        TME0 OFFSET(26) NUMBITS(1) [],
        /// Transmit mailbox 1 empty
        TME1 OFFSET(27) NUMBITS(1) [],
        /// Transmit mailbox 2 empty
        TME2 OFFSET(28) NUMBITS(1) [],
        /// Lowest priority flag for mailbox 0
        LOW0 OFFSET(29) NUMBITS(1) [],
        /// Lowest priority flag for mailbox 1
        LOW1 OFFSET(30) NUMBITS(1) [],
        /// Lowest priority flag for mailbox 2
        LOW2 OFFSET(31) NUMBITS(1) [],
        /// All transmit mailboxes empty flags
        TME OFFSET(26) NUMBITS(3) [],
        /// All lowest priority flags
        LOW OFFSET(29) NUMBITS(3) []
    ],
    pub RF0R [
        /// FIFO 0 message pending
        FMP0 OFFSET(0) NUMBITS(2) [],
        /// FIFO 0 full
        FULL0 OFFSET(3) NUMBITS(1) [],
        /// FIFO 0 overrun
        FOVR0 OFFSET(4) NUMBITS(1) [],
        /// Release FIFO 0 output mailbox
        RFOM0 OFFSET(5) NUMBITS(1) []
    ],
    pub RF1R [
        /// FIFO 1 message pending
        FMP1 OFFSET(0) NUMBITS(2) [],
        /// FIFO 1 full
        FULL1 OFFSET(3) NUMBITS(1) [],
        /// FIFO 1 overrun
        FOVR1 OFFSET(4) NUMBITS(1) [],
        /// Release FIFO 1 output mailbox
        RFOM1 OFFSET(5) NUMBITS(1) []
    ],
    pub IER [
        /// Transmit mailbox empty interrupt enable
        TMEIE OFFSET(0) NUMBITS(1) [],
        /// FIFO 0 message pending interrupt enable
        FMPIE0 OFFSET(1) NUMBITS(1) [],
        /// FIFO 0 full interrupt enable
        FFIE0 OFFSET(2) NUMBITS(1) [],
        /// FIFO 0 overrun interrupt enable
        FOVIE0 OFFSET(3) NUMBITS(1) [],
        /// FIFO 1 message pending interrupt enable
        FMPIE1 OFFSET(4) NUMBITS(1) [],
        /// FIFO 1 full interrupt enable
        FFIE1 OFFSET(5) NUMBITS(1) [],
        /// FIFO 1 overrun interrupt enable
        FOVIE1 OFFSET(6) NUMBITS(1) [],
        /// Error warning interrupt enable
        EWGIE OFFSET(8) NUMBITS(1) [],
        /// Error passive interrupt enable
        EPVIE OFFSET(9) NUMBITS(1) [],
        /// Bus-off interrupt enable
        BOFIE OFFSET(10) NUMBITS(1) [],
        /// Last error code interrupt enable
        LECIE OFFSET(11) NUMBITS(1) [],
        /// Error interrupt enable
        ERRIE OFFSET(15) NUMBITS(1) [],
        /// Wakeup interrupt enable
        WKUIE OFFSET(16) NUMBITS(1) [],
        /// Sleep interrupt enable
        SLKIE OFFSET(17) NUMBITS(1) []
    ],
    pub ESR [
        /// Error warning flag
        EWGF OFFSET(0) NUMBITS(1) [],
        /// Error passive flag
        EPVF OFFSET(1) NUMBITS(1) [],
        /// Bus-off flag
        BOFF OFFSET(2) NUMBITS(1) [],
        /// Last error code
        LEC OFFSET(4) NUMBITS(3) [
            NoError = 0,
            Stuff = 1,
            Form = 2,
            Acknowledgment = 3,
            BitRecessive = 4,
            BitDominant = 5,
            Crc = 6,
            SetBySoftware = 7
        ],
        /// Transmit error counter
        TEC OFFSET(16) NUMBITS(8) [],
        /// Receive error counter
        REC OFFSET(24) NUMBITS(8) [],
        LEC_0 OFFSET(4) NUMBITS(1) [],
        LEC_1 OFFSET(5) NUMBITS(1) [],
        LEC_2 OFFSET(6) NUMBITS(1) []
    ],
    pub BTR [
        /// Baud rate prescaler, minus one
        BRP OFFSET(0) NUMBITS(10) [],
        /// Time segment 1, minus one
        TS1 OFFSET(16) NUMBITS(4) [],
        /// Time segment 2, minus one
        TS2 OFFSET(20) NUMBITS(3) [],
        /// Resynchronization jump width, minus one
        SJW OFFSET(24) NUMBITS(2) [],
        /// Loop back mode
        LBKM OFFSET(30) NUMBITS(1) [],
        /// Silent mode
        SILM OFFSET(31) NUMBITS(1) [],
        TS1_0 OFFSET(16) NUMBITS(1) [],
        TS1_1 OFFSET(17) NUMBITS(1) [],
        TS1_2 OFFSET(18) NUMBITS(1) [],
        TS1_3 OFFSET(19) NUMBITS(1) [],
        TS2_0 OFFSET(20) NUMBITS(1) [],
        TS2_1 OFFSET(21) NUMBITS(1) [],
        TS2_2 OFFSET(22) NUMBITS(1) [],
        SJW_0 OFFSET(24) NUMBITS(1) [],
        SJW_1 OFFSET(25) NUMBITS(1) []
    ],
    /// STID is the top of EXID: standard frames use bits 31:21 only
    pub TIR [
        /// Transmit mailbox request
        TXRQ OFFSET(0) NUMBITS(1) [],
        /// Remote transmission request
        RTR OFFSET(1) NUMBITS(1) [],
        /// Identifier extension
        IDE OFFSET(2) NUMBITS(1) [
            Standard = 0,
            Extended = 1
        ],
        /// Extended identifier
        EXID OFFSET(3) NUMBITS(29) [],
        /// Standard identifier
        STID OFFSET(21) NUMBITS(11) []
    ],
    pub TDTR [
        /// Data length code
        DLC OFFSET(0) NUMBITS(4) [],
        /// Transmit global time
        TGT OFFSET(8) NUMBITS(1) [],
        /// Message time stamp
        TIME OFFSET(16) NUMBITS(16) []
    ],
    pub TDLR [
        DATA0 OFFSET(0) NUMBITS(8) [],
        DATA1 OFFSET(8) NUMBITS(8) [],
        DATA2 OFFSET(16) NUMBITS(8) [],
        DATA3 OFFSET(24) NUMBITS(8) []
    ],
    pub TDHR [
        DATA4 OFFSET(0) NUMBITS(8) [],
        DATA5 OFFSET(8) NUMBITS(8) [],
        DATA6 OFFSET(16) NUMBITS(8) [],
        DATA7 OFFSET(24) NUMBITS(8) []
    ],
    pub RIR [
        /// Remote transmission request
        RTR OFFSET(1) NUMBITS(1) [],
        /// Identifier extension
        IDE OFFSET(2) NUMBITS(1) [
            Standard = 0,
            Extended = 1
        ],
        /// Extended identifier
        EXID OFFSET(3) NUMBITS(29) [],
        /// Standard identifier
        STID OFFSET(21) NUMBITS(11) []
    ],
    pub RDTR [
        /// Data length code
        DLC OFFSET(0) NUMBITS(4) [],
        /// Filter match index
        FMI OFFSET(8) NUMBITS(8) [],
        /// Message time stamp
        TIME OFFSET(16) NUMBITS(16) []
    ],
    pub RDLR [
        DATA0 OFFSET(0) NUMBITS(8) [],
        DATA1 OFFSET(8) NUMBITS(8) [],
        DATA2 OFFSET(16) NUMBITS(8) [],
        DATA3 OFFSET(24) NUMBITS(8) []
    ],
    pub RDHR [
        DATA4 OFFSET(0) NUMBITS(8) [],
        DATA5 OFFSET(8) NUMBITS(8) [],
        DATA6 OFFSET(16) NUMBITS(8) [],
        DATA7 OFFSET(24) NUMBITS(8) []
    ],
    pub FMR [
        /// Filter initialization mode
        FINIT OFFSET(0) NUMBITS(1) [],
        /// First filter bank of CAN2
        CAN2SB OFFSET(8) NUMBITS(6) []
    ],
    /// Filter bank mode: 0 identifier mask, 1 identifier list
    pub FM1R [
        FBM0 OFFSET(0) NUMBITS(1) [],
        FBM1 OFFSET(1) NUMBITS(1) [],
        FBM2 OFFSET(2) NUMBITS(1) [],
        FBM3 OFFSET(3) NUMBITS(1) [],
        FBM4 OFFSET(4) NUMBITS(1) [],
        FBM5 OFFSET(5) NUMBITS(1) [],
        FBM6 OFFSET(6) NUMBITS(1) [],
        FBM7 OFFSET(7) NUMBITS(1) [],
        FBM8 OFFSET(8) NUMBITS(1) [],
        FBM9 OFFSET(9) NUMBITS(1) [],
        FBM10 OFFSET(10) NUMBITS(1) [],
        FBM11 OFFSET(11) NUMBITS(1) [],
        FBM12 OFFSET(12) NUMBITS(1) [],
        FBM13 OFFSET(13) NUMBITS(1) [],
        FBM14 OFFSET(14) NUMBITS(1) [],
        FBM15 OFFSET(15) NUMBITS(1) [],
        FBM16 OFFSET(16) NUMBITS(1) [],
        FBM17 OFFSET(17) NUMBITS(1) [],
        FBM18 OFFSET(18) NUMBITS(1) [],
        FBM19 OFFSET(19) NUMBITS(1) [],
        FBM20 OFFSET(20) NUMBITS(1) [],
        FBM21 OFFSET(21) NUMBITS(1) [],
        FBM22 OFFSET(22) NUMBITS(1) [],
        FBM23 OFFSET(23) NUMBITS(1) [],
        FBM24 OFFSET(24) NUMBITS(1) [],
        FBM25 OFFSET(25) NUMBITS(1) [],
        FBM26 OFFSET(26) NUMBITS(1) [],
        FBM27 OFFSET(27) NUMBITS(1) []
    ],
    /// Filter bank scale: 0 dual 16-bit, 1 single 32-bit
    pub FS1R [
        FSC0 OFFSET(0) NUMBITS(1) [],
        FSC1 OFFSET(1) NUMBITS(1) [],
        FSC2 OFFSET(2) NUMBITS(1) [],
        FSC3 OFFSET(3) NUMBITS(1) [],
        FSC4 OFFSET(4) NUMBITS(1) [],
        FSC5 OFFSET(5) NUMBITS(1) [],
        FSC6 OFFSET(6) NUMBITS(1) [],
        FSC7 OFFSET(7) NUMBITS(1) [],
        FSC8 OFFSET(8) NUMBITS(1) [],
        FSC9 OFFSET(9) NUMBITS(1) [],
        FSC10 OFFSET(10) NUMBITS(1) [],
        FSC11 OFFSET(11) NUMBITS(1) [],
        FSC12 OFFSET(12) NUMBITS(1) [],
        FSC13 OFFSET(13) NUMBITS(1) [],
        FSC14 OFFSET(14) NUMBITS(1) [],
        FSC15 OFFSET(15) NUMBITS(1) [],
        FSC16 OFFSET(16) NUMBITS(1) [],
        FSC17 OFFSET(17) NUMBITS(1) [],
        FSC18 OFFSET(18) NUMBITS(1) [],
        FSC19 OFFSET(19) NUMBITS(1) [],
        FSC20 OFFSET(20) NUMBITS(1) [],
        FSC21 OFFSET(21) NUMBITS(1) [],
        FSC22 OFFSET(22) NUMBITS(1) [],
        FSC23 OFFSET(23) NUMBITS(1) [],
        FSC24 OFFSET(24) NUMBITS(1) [],
        FSC25 OFFSET(25) NUMBITS(1) [],
        FSC26 OFFSET(26) NUMBITS(1) [],
        FSC27 OFFSET(27) NUMBITS(1) []
    ],
    /// Filter bank FIFO assignment
    pub FFA1R [
        FFA0 OFFSET(0) NUMBITS(1) [],
        FFA1 OFFSET(1) NUMBITS(1) [],
        FFA2 OFFSET(2) NUMBITS(1) [],
        FFA3 OFFSET(3) NUMBITS(1) [],
        FFA4 OFFSET(4) NUMBITS(1) [],
        FFA5 OFFSET(5) NUMBITS(1) [],
        FFA6 OFFSET(6) NUMBITS(1) [],
        FFA7 OFFSET(7) NUMBITS(1) [],
        FFA8 OFFSET(8) NUMBITS(1) [],
        FFA9 OFFSET(9) NUMBITS(1) [],
        FFA10 OFFSET(10) NUMBITS(1) [],
        FFA11 OFFSET(11) NUMBITS(1) [],
        FFA12 OFFSET(12) NUMBITS(1) [],
        FFA13 OFFSET(13) NUMBITS(1) [],
        FFA14 OFFSET(14) NUMBITS(1) [],
        FFA15 OFFSET(15) NUMBITS(1) [],
        FFA16 OFFSET(16) NUMBITS(1) [],
        FFA17 OFFSET(17) NUMBITS(1) [],
        FFA18 OFFSET(18) NUMBITS(1) [],
        FFA19 OFFSET(19) NUMBITS(1) [],
        FFA20 OFFSET(20) NUMBITS(1) [],
        FFA21 OFFSET(21) NUMBITS(1) [],
        FFA22 OFFSET(22) NUMBITS(1) [],
        FFA23 OFFSET(23) NUMBITS(1) [],
        FFA24 OFFSET(24) NUMBITS(1) [],
        FFA25 OFFSET(25) NUMBITS(1) [],
        FFA26 OFFSET(26) NUMBITS(1) [],
        FFA27 OFFSET(27) NUMBITS(1) []
    ],
    /// Filter bank activation
    pub FA1R [
        FACT0 OFFSET(0) NUMBITS(1) [],
        FACT1 OFFSET(1) NUMBITS(1) [],
        FACT2 OFFSET(2) NUMBITS(1) [],
        FACT3 OFFSET(3) NUMBITS(1) [],
        FACT4 OFFSET(4) NUMBITS(1) [],
        FACT5 OFFSET(5) NUMBITS(1) [],
        FACT6 OFFSET(6) NUMBITS(1) [],
        FACT7 OFFSET(7) NUMBITS(1) [],
        FACT8 OFFSET(8) NUMBITS(1) [],
        FACT9 OFFSET(9) NUMBITS(1) [],
        FACT10 OFFSET(10) NUMBITS(1) [],
        FACT11 OFFSET(11) NUMBITS(1) [],
        FACT12 OFFSET(12) NUMBITS(1) [],
        FACT13 OFFSET(13) NUMBITS(1) [],
        FACT14 OFFSET(14) NUMBITS(1) [],
        FACT15 OFFSET(15) NUMBITS(1) [],
        FACT16 OFFSET(16) NUMBITS(1) [],
        FACT17 OFFSET(17) NUMBITS(1) [],
        FACT18 OFFSET(18) NUMBITS(1) [],
        FACT19 OFFSET(19) NUMBITS(1) [],
        FACT20 OFFSET(20) NUMBITS(1) [],
        FACT21 OFFSET(21) NUMBITS(1) [],
        FACT22 OFFSET(22) NUMBITS(1) [],
        FACT23 OFFSET(23) NUMBITS(1) [],
        FACT24 OFFSET(24) NUMBITS(1) [],
        FACT25 OFFSET(25) NUMBITS(1) [],
        FACT26 OFFSET(26) NUMBITS(1) [],
        FACT27 OFFSET(27) NUMBITS(1) []
    ],
    pub FR [
        FB0 OFFSET(0) NUMBITS(1) [],
        FB1 OFFSET(1) NUMBITS(1) [],
        FB2 OFFSET(2) NUMBITS(1) [],
        FB3 OFFSET(3) NUMBITS(1) [],
        FB4 OFFSET(4) NUMBITS(1) [],
        FB5 OFFSET(5) NUMBITS(1) [],
        FB6 OFFSET(6) NUMBITS(1) [],
        FB7 OFFSET(7) NUMBITS(1) [],
        FB8 OFFSET(8) NUMBITS(1) [],
        FB9 OFFSET(9) NUMBITS(1) [],
        FB10 OFFSET(10) NUMBITS(1) [],
        FB11 OFFSET(11) NUMBITS(1) [],
        FB12 OFFSET(12) NUMBITS(1) [],
        FB13 OFFSET(13) NUMBITS(1) [],
        FB14 OFFSET(14) NUMBITS(1) [],
        FB15 OFFSET(15) NUMBITS(1) [],
        FB16 OFFSET(16) NUMBITS(1) [],
        FB17 OFFSET(17) NUMBITS(1) [],
        FB18 OFFSET(18) NUMBITS(1) [],
        FB19 OFFSET(19) NUMBITS(1) [],
        FB20 OFFSET(20) NUMBITS(1) [],
        FB21 OFFSET(21) NUMBITS(1) [],
        FB22 OFFSET(22) NUMBITS(1) [],
        FB23 OFFSET(23) NUMBITS(1) [],
        FB24 OFFSET(24) NUMBITS(1) [],
        FB25 OFFSET(25) NUMBITS(1) [],
        FB26 OFFSET(26) NUMBITS(1) [],
        FB27 OFFSET(27) NUMBITS(1) [],
        FB28 OFFSET(28) NUMBITS(1) [],
        FB29 OFFSET(29) NUMBITS(1) [],
        FB30 OFFSET(30) NUMBITS(1) [],
        FB31 OFFSET(31) NUMBITS(1) []
    ]
];

instances! {
    pub enum Can {
        Can1("CAN1") = memory_map::CAN1_BASE,
        Can2("CAN2") = memory_map::CAN2_BASE,
    }
}

impl Can {
    /// Owner of the filter banks and of CAN2's clock.
    pub const fn is_master(self) -> bool {
        match self {
            Can::Can1 => true,
            Can::Can2 => false,
        }
    }

    /// Register block holding the filters this instance uses.
    #[must_use]
    pub const fn filter_owner(self) -> Self {
        match self {
            Can::Can1 | Can::Can2 => Can::Can1,
        }
    }

    pub const fn tx_interrupt(self) -> Interrupt {
        match self {
            Can::Can1 => Interrupt::CAN1_TX,
            Can::Can2 => Interrupt::CAN2_TX,
        }
    }

    pub const fn rx_interrupt(self, fifo: usize) -> Result<Interrupt, ErrorCode> {
        match (self, fifo) {
            (Can::Can1, 0) => Ok(Interrupt::CAN1_RX0),
            (Can::Can1, 1) => Ok(Interrupt::CAN1_RX1),
            (Can::Can2, 0) => Ok(Interrupt::CAN2_RX0),
            (Can::Can2, 1) => Ok(Interrupt::CAN2_RX1),
            _ => Err(ErrorCode::INVAL),
        }
    }

    /// Status change and error interrupt.
    pub const fn sce_interrupt(self) -> Interrupt {
        match self {
            Can::Can1 => Interrupt::CAN1_SCE,
            Can::Can2 => Interrupt::CAN2_SCE,
        }
    }
}

/// Address of filter bank `bank` in the master block.
pub const fn filter_bank_address(bank: usize) -> Result<usize, ErrorCode> {
    if bank >= FILTER_BANK_COUNT {
        return Err(ErrorCode::INVAL);
    }
    Ok(memory_map::CAN1_BASE + FILTER_OFFSET + 0x40 + 8 * bank)
}

pub(crate) const CAN1: StaticRef<CanRegisters> =
    unsafe { StaticRef::new(memory_map::CAN1_BASE as *const CanRegisters) };
pub(crate) const CAN2: StaticRef<CanRegisters> =
    unsafe { StaticRef::new(memory_map::CAN2_BASE as *const CanRegisters) };
pub(crate) const CAN_FILTER: StaticRef<CanFilterRegisters> = unsafe {
    StaticRef::new((memory_map::CAN1_BASE + FILTER_OFFSET) as *const CanFilterRegisters)
};

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;
    use tock_registers::LocalRegisterCopy;

    use super::*;
    use crate::test_util::{assert_components, assert_fields, mask};

    #[test]
    fn layout() {
        let offsets = [
            (offset_of!(CanRegisters, mcr), 0x000),
            (offset_of!(CanRegisters, msr), 0x004),
            (offset_of!(CanRegisters, tsr), 0x008),
            (offset_of!(CanRegisters, rf0r), 0x00C),
            (offset_of!(CanRegisters, rf1r), 0x010),
            (offset_of!(CanRegisters, ier), 0x014),
            (offset_of!(CanRegisters, esr), 0x018),
            (offset_of!(CanRegisters, btr), 0x01C),
            (offset_of!(CanRegisters, tx_mailbox), 0x180),
            (offset_of!(CanRegisters, rx_fifo), 0x1B0),
            (FILTER_OFFSET + offset_of!(CanFilterRegisters, fmr), 0x200),
            (FILTER_OFFSET + offset_of!(CanFilterRegisters, fm1r), 0x204),
            (FILTER_OFFSET + offset_of!(CanFilterRegisters, fs1r), 0x20C),
            (FILTER_OFFSET + offset_of!(CanFilterRegisters, ffa1r), 0x214),
            (FILTER_OFFSET + offset_of!(CanFilterRegisters, fa1r), 0x21C),
            (FILTER_OFFSET + offset_of!(CanFilterRegisters, filter_bank), 0x240),
        ];
        for (actual, expected) in offsets {
            assert_eq!(actual, expected);
        }
        assert_eq!(size_of::<CanRegisters>(), FILTER_OFFSET);
        assert_eq!(FILTER_OFFSET + size_of::<CanFilterRegisters>(), 0x320);
        assert_eq!(size_of::<TxMailbox>(), 0x10);
        assert_eq!(size_of::<RxFifoMailbox>(), 0x10);
        assert_eq!(size_of::<FilterBank>(), 0x8);
        assert_eq!(offset_of!(TxMailbox, tdhr), 0x0C);
        assert_eq!(offset_of!(RxFifoMailbox, rdtr), 0x04);
        assert_eq!(offset_of!(FilterBank, fr2), 0x4);
    }

    #[test]
    fn filter_bank_addresses() {
        for bank in 0..FILTER_BANK_COUNT {
            let expected = memory_map::CAN1_BASE + 0x240 + 8 * bank;
            assert_eq!(filter_bank_address(bank), Ok(expected));
            assert_eq!(
                CAN_FILTER.address()
                    + offset_of!(CanFilterRegisters, filter_bank)
                    + bank * size_of::<FilterBank>(),
                expected
            );
        }
        assert_eq!(filter_bank_address(27), Ok(0x4000_6718));
        assert_eq!(filter_bank_address(28), Err(ErrorCode::INVAL));
        // TX mailbox 2 and FIFO 1
        assert_eq!(offset_of!(CanRegisters, tx_mailbox) + 2 * size_of::<TxMailbox>(), 0x1A0);
        assert_eq!(offset_of!(CanRegisters, rx_fifo) + size_of::<RxFifoMailbox>(), 0x1C0);
    }

    #[test]
    fn fields() {
        assert_eq!(assert_fields(32, &[
            mask(MCR::INRQ),
            mask(MCR::SLEEP),
            mask(MCR::TXFP),
            mask(MCR::RFLM),
            mask(MCR::NART),
            mask(MCR::AWUM),
            mask(MCR::ABOM),
            mask(MCR::TTCM),
            mask(MCR::RESET),
            mask(MCR::DBF),
        ]), 0x0001_80FF);
        assert_eq!(assert_fields(32, &[
            mask(MSR::INAK),
            mask(MSR::SLAK),
            mask(MSR::ERRI),
            mask(MSR::WKUI),
            mask(MSR::SLAKI),
            mask(MSR::TXM),
            mask(MSR::RXM),
            mask(MSR::SAMP),
            mask(MSR::RX),
        ]), 0x0F1F);
        let tsr = [
            mask(TSR::RQCP0),
            mask(TSR::TXOK0),
            mask(TSR::ALST0),
            mask(TSR::TERR0),
            mask(TSR::ABRQ0),
            mask(TSR::RQCP1),
            mask(TSR::TXOK1),
            mask(TSR::ALST1),
            mask(TSR::TERR1),
            mask(TSR::ABRQ1),
            mask(TSR::RQCP2),
            mask(TSR::TXOK2),
            mask(TSR::ALST2),
            mask(TSR::TERR2),
            mask(TSR::ABRQ2),
            mask(TSR::CODE),
            mask(TSR::TME0),
            mask(TSR::TME1),
            mask(TSR::TME2),
            mask(TSR::LOW0),
            mask(TSR::LOW1),
            mask(TSR::LOW2),
        ];
        assert_eq!(assert_fields(32, &tsr), 0xFF8F_8F8F);
        assert_components(mask(TSR::TME), &[mask(TSR::TME0), mask(TSR::TME1), mask(TSR::TME2)]);
        assert_components(mask(TSR::LOW), &[mask(TSR::LOW0), mask(TSR::LOW1), mask(TSR::LOW2)]);
        assert_eq!(assert_fields(32, &[
            mask(RF1R::FMP1),
            mask(RF1R::FULL1),
            mask(RF1R::FOVR1),
            mask(RF1R::RFOM1),
        ]), 0x3B);
        assert_eq!(assert_fields(32, &[
            mask(IER::TMEIE),
            mask(IER::FMPIE0),
            mask(IER::FFIE0),
            mask(IER::FOVIE0),
            mask(IER::FMPIE1),
            mask(IER::FFIE1),
            mask(IER::FOVIE1),
            mask(IER::EWGIE),
            mask(IER::EPVIE),
            mask(IER::BOFIE),
            mask(IER::LECIE),
            mask(IER::ERRIE),
            mask(IER::WKUIE),
            mask(IER::SLKIE),
        ]), 0x0003_8F7F);
        assert_eq!(assert_fields(32, &[
            mask(ESR::EWGF),
            mask(ESR::EPVF),
            mask(ESR::BOFF),
            mask(ESR::LEC),
            mask(ESR::TEC),
            mask(ESR::REC),
        ]), 0xFFFF_0077);
        assert_eq!(assert_fields(32, &[
            mask(BTR::BRP),
            mask(BTR::TS1),
            mask(BTR::TS2),
            mask(BTR::SJW),
            mask(BTR::LBKM),
            mask(BTR::SILM),
        ]), 0xC37F_03FF);
        assert_eq!(assert_fields(32, &[mask(FMR::FINIT), mask(FMR::CAN2SB)]), 0x3F01);
        assert_eq!(mask(FM1R::FBM27), 1 << 27);
        assert_eq!(mask(FA1R::FACT0), 1);
    }

    // STID aliases the upper bits of EXID, so each identifier format is
    // checked on its own.
    #[test]
    fn identifier_formats() {
        let standard = [mask(TIR::TXRQ), mask(TIR::RTR), mask(TIR::IDE), mask(TIR::STID)];
        assert_eq!(assert_fields(32, &standard), 0xFFE0_0007);
        let extended = [mask(TIR::TXRQ), mask(TIR::RTR), mask(TIR::IDE), mask(TIR::EXID)];
        assert_eq!(assert_fields(32, &extended), 0xFFFF_FFFF);
        assert_eq!(mask(TIR::STID) & mask(TIR::EXID), mask(TIR::STID));
        assert_eq!(mask(RIR::STID), mask(TIR::STID));
        assert_eq!(mask(RIR::EXID), mask(TIR::EXID));
    }

    #[test]
    fn data_bytes() {
        assert_eq!(
            assert_fields(
                32,
                &[mask(TDLR::DATA0), mask(TDLR::DATA1), mask(TDLR::DATA2), mask(TDLR::DATA3)],
            ),
            u32::MAX
        );
        assert_eq!(
            assert_fields(
                32,
                &[mask(RDHR::DATA4), mask(RDHR::DATA5), mask(RDHR::DATA6), mask(RDHR::DATA7)],
            ),
            u32::MAX
        );
        assert_eq!(
            assert_fields(32, &[mask(RDTR::DLC), mask(RDTR::FMI), mask(RDTR::TIME)]),
            0xFFFF_FF0F
        );
    }

    #[test]
    fn standard_frame_request() {
        let tir = InMemoryRegister::<u32, TIR::Register>::new(0);
        tir.write(TIR::STID.val(0x123) + TIR::IDE::Standard + TIR::TXRQ::SET);
        assert_eq!(tir.get(), 0x2460_0001);
        assert_eq!(tir.read(TIR::EXID) >> 18, 0x123);
    }

    #[test]
    fn reset_values() {
        let mcr = LocalRegisterCopy::<u32, MCR::Register>::new(MCR_RESET);
        assert!(mcr.is_set(MCR::SLEEP));
        assert!(mcr.is_set(MCR::DBF));
        let tsr = LocalRegisterCopy::<u32, TSR::Register>::new(TSR_RESET);
        assert_eq!(tsr.read(TSR::TME), 0b111);
        let btr = LocalRegisterCopy::<u32, BTR::Register>::new(BTR_RESET);
        assert_eq!(btr.read(BTR::TS1), 3);
        assert_eq!(btr.read(BTR::TS2), 2);
        assert_eq!(btr.read(BTR::SJW), 1);
        assert_eq!(btr.read(BTR::BRP), 0);
        let msr = LocalRegisterCopy::<u32, MSR::Register>::new(MSR_RESET);
        assert!(msr.is_set(MSR::SLAK));
        assert!(msr.is_set(MSR::RX));
    }

    #[test]
    fn instances() {
        assert!(Can::Can1.is_master());
        assert!(!Can::Can2.is_master());
        assert_eq!(Can::Can2.filter_owner(), Can::Can1);
        assert_eq!(Can::Can2.rx_interrupt(1), Ok(Interrupt::CAN2_RX1));
        assert_eq!(Can::Can1.rx_interrupt(2), Err(ErrorCode::INVAL));
        assert_eq!(Can::Can1.tx_interrupt().number(), 19);
        assert_eq!(Can::Can2.sce_interrupt().number(), 66);
        assert_eq!(CAN2.address() - CAN1.address(), 0x400);
    }

    #[test]
    fn filters_live_in_can1_only() {
        assert_eq!(CAN_FILTER.address(), memory_map::CAN1_BASE + 0x200);
        // the filter block ends before CAN2 starts
        assert!(CAN_FILTER.address() + size_of::<CanFilterRegisters>() <= CAN2.address());
        // CAN2 decodes nothing past its receive mailboxes
        assert_eq!(CAN2.address() + size_of::<CanRegisters>(), memory_map::CAN2_BASE + 0x200);
        for can in Can::ALL {
            let owner = can.filter_owner();
            assert!(owner.is_master());
            assert_eq!(owner.base() + FILTER_OFFSET, CAN_FILTER.address());
        }
    }

    #[test]
    fn mailbox_and_filter_fields() {
        assert_eq!(assert_fields(32, &[
            mask(TDTR::DLC),
            mask(TDTR::TGT),
            mask(TDTR::TIME),
        ]), 0xFFFF_010F);
        assert_eq!(assert_fields(32, &[
            mask(TDHR::DATA4),
            mask(TDHR::DATA5),
            mask(TDHR::DATA6),
            mask(TDHR::DATA7),
        ]), 0xFFFF_FFFF);
        assert_eq!(assert_fields(32, &[
            mask(RDLR::DATA0),
            mask(RDLR::DATA1),
            mask(RDLR::DATA2),
            mask(RDLR::DATA3),
        ]), 0xFFFF_FFFF);
        assert_eq!(assert_fields(32, &[
            mask(RF0R::FMP0),
            mask(RF0R::FULL0),
            mask(RF0R::FOVR0),
            mask(RF0R::RFOM0),
        ]), 0x3B);
        assert_eq!(assert_fields(32, &[
            mask(FS1R::FSC0),
            mask(FS1R::FSC1),
            mask(FS1R::FSC2),
            mask(FS1R::FSC3),
            mask(FS1R::FSC4),
            mask(FS1R::FSC5),
            mask(FS1R::FSC6),
            mask(FS1R::FSC7),
            mask(FS1R::FSC8),
            mask(FS1R::FSC9),
            mask(FS1R::FSC10),
            mask(FS1R::FSC11),
            mask(FS1R::FSC12),
            mask(FS1R::FSC13),
            mask(FS1R::FSC14),
            mask(FS1R::FSC15),
            mask(FS1R::FSC16),
            mask(FS1R::FSC17),
            mask(FS1R::FSC18),
            mask(FS1R::FSC19),
            mask(FS1R::FSC20),
            mask(FS1R::FSC21),
            mask(FS1R::FSC22),
            mask(FS1R::FSC23),
            mask(FS1R::FSC24),
            mask(FS1R::FSC25),
            mask(FS1R::FSC26),
            mask(FS1R::FSC27),
        ]), 0x0FFF_FFFF);
        assert_eq!(assert_fields(32, &[
            mask(FFA1R::FFA0),
            mask(FFA1R::FFA1),
            mask(FFA1R::FFA2),
            mask(FFA1R::FFA3),
            mask(FFA1R::FFA4),
            mask(FFA1R::FFA5),
            mask(FFA1R::FFA6),
            mask(FFA1R::FFA7),
            mask(FFA1R::FFA8),
            mask(FFA1R::FFA9),
            mask(FFA1R::FFA10),
            mask(FFA1R::FFA11),
            mask(FFA1R::FFA12),
            mask(FFA1R::FFA13),
            mask(FFA1R::FFA14),
            mask(FFA1R::FFA15),
            mask(FFA1R::FFA16),
            mask(FFA1R::FFA17),
            mask(FFA1R::FFA18),
            mask(FFA1R::FFA19),
            mask(FFA1R::FFA20),
            mask(FFA1R::FFA21),
            mask(FFA1R::FFA22),
            mask(FFA1R::FFA23),
            mask(FFA1R::FFA24),
            mask(FFA1R::FFA25),
            mask(FFA1R::FFA26),
            mask(FFA1R::FFA27),
        ]), 0x0FFF_FFFF);
        // one bit per identifier or mask bit
        assert_eq!(assert_fields(32, &[
            mask(FR::FB0),
            mask(FR::FB1),
            mask(FR::FB2),
            mask(FR::FB3),
            mask(FR::FB4),
            mask(FR::FB5),
            mask(FR::FB6),
            mask(FR::FB7),
            mask(FR::FB8),
            mask(FR::FB9),
            mask(FR::FB10),
            mask(FR::FB11),
            mask(FR::FB12),
            mask(FR::FB13),
            mask(FR::FB14),
            mask(FR::FB15),
            mask(FR::FB16),
            mask(FR::FB17),
            mask(FR::FB18),
            mask(FR::FB19),
            mask(FR::FB20),
            mask(FR::FB21),
            mask(FR::FB22),
            mask(FR::FB23),
            mask(FR::FB24),
            mask(FR::FB25),
            mask(FR::FB26),
            mask(FR::FB27),
            mask(FR::FB28),
            mask(FR::FB29),
            mask(FR::FB30),
            mask(FR::FB31),
        ]), 0xFFFF_FFFF);
    }
}
