// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Secure digital input/output interface.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::ErrorCode;
use crate::memory_map;
use crate::static_ref::StaticRef;

/// Number of response registers, `RESP1` to `RESP4`.
pub const RESPONSE_REGISTERS: usize = 4;

register_structs! {
    pub SdioRegisters {
        (0x00 => pub power: ReadWrite<u32, POWER::Register>),
        (0x04 => pub clkcr: ReadWrite<u32, CLKCR::Register>),
        /// command argument
        (0x08 => pub arg: ReadWrite<u32>),
        (0x0C => pub cmd: ReadWrite<u32, CMD::Register>),
        /// index of the last command response received
        (0x10 => pub respcmd: ReadOnly<u32, RESPCMD::Register>),
        /// card status, `RESP1` first; long responses put bits 127:96 in `RESP1`
        (0x14 => pub resp: [ReadOnly<u32>; RESPONSE_REGISTERS]),
        /// data timeout in card bus clock periods
        (0x24 => pub dtimer: ReadWrite<u32>),
        (0x28 => pub dlen: ReadWrite<u32, DLEN::Register>),
        (0x2C => pub dctrl: ReadWrite<u32, DCTRL::Register>),
        (0x30 => pub dcount: ReadOnly<u32, DCOUNT::Register>),
        (0x34 => pub sta: ReadOnly<u32, STA::Register>),
        (0x38 => pub icr: ReadWrite<u32, ICR::Register>),
        (0x3C => pub mask: ReadWrite<u32, MASK::Register>),
        (0x40 => _reserved0),
        /// words remaining to be written to or read from the FIFO
        (0x48 => pub fifocnt: ReadOnly<u32, FIFOCNT::Register>),
        (0x4C => _reserved1),
        (0x80 => pub fifo: ReadWrite<u32>),
        (0x84 => @END),
    }
}

register_bitfields![u32,
    pub POWER [
        /// Power supply control
        PWRCTRL OFFSET(0) NUMBITS(2) [
            Off = 0,
            On = 3
        ]
    ],
    pub CLKCR [
        /// Clock divide factor, SDIO_CK is SDIOCLK / (CLKDIV + 2)
        CLKDIV OFFSET(0) NUMBITS(8) [],
        /// Clock enable
        CLKEN OFFSET(8) NUMBITS(1) [],
        /// Power saving configuration
        PWRSAV OFFSET(9) NUMBITS(1) [],
        /// Clock divider bypass
        BYPASS OFFSET(10) NUMBITS(1) [],
        /// Wide bus mode
        WIDBUS OFFSET(11) NUMBITS(2) [
            Bits1 = 0,
            Bits4 = 1,
            Bits8 = 2
        ],
        /// SDIO_CK dephasing selection
        NEGEDGE OFFSET(13) NUMBITS(1) [],
        /// Hardware flow control enable
        HWFC_EN OFFSET(14) NUMBITS(1) [],
        WIDBUS_0 OFFSET(11) NUMBITS(1) [],
        WIDBUS_1 OFFSET(12) NUMBITS(1) []
    ],
    pub CMD [
        /// Command index
        CMDINDEX OFFSET(0) NUMBITS(6) [],
        /// Wait for response
        WAITRESP OFFSET(6) NUMBITS(2) [
            None = 0,
            Short = 1,
            Long = 3
        ],
        /// Wait for interrupt request
        WAITINT OFFSET(8) NUMBITS(1) [],
        /// Wait for end of data transfer
        WAITPEND OFFSET(9) NUMBITS(1) [],
        /// Command path state machine enable
        CPSMEN OFFSET(10) NUMBITS(1) [],
        /// SD I/O suspend command
        SDIOSUSPEND OFFSET(11) NUMBITS(1) [],
        /// Enable CMD completion
        ENCMDCOMPL OFFSET(12) NUMBITS(1) [],
        /// Not interrupt enable
        NIEN OFFSET(13) NUMBITS(1) [],
        /// CE-ATA command
        CEATACMD OFFSET(14) NUMBITS(1) [],
        WAITRESP_0 OFFSET(6) NUMBITS(1) [],
        WAITRESP_1 OFFSET(7) NUMBITS(1) []
    ],
    pub RESPCMD [
        RESPCMD OFFSET(0) NUMBITS(6) []
    ],
    pub DLEN [
        /// Data length in bytes
        DATALENGTH OFFSET(0) NUMBITS(25) []
    ],
    pub DCTRL [
        /// Data transfer enable
        DTEN OFFSET(0) NUMBITS(1) [],
        /// Data transfer direction
        DTDIR OFFSET(1) NUMBITS(1) [
            ToCard = 0,
            FromCard = 1
        ],
        /// Data transfer mode
        DTMODE OFFSET(2) NUMBITS(1) [
            Block = 0,
            Stream = 1
        ],
        /// DMA enable
        DMAEN OFFSET(3) NUMBITS(1) [],
        /// Data block size, a power of two
        DBLOCKSIZE OFFSET(4) NUMBITS(4) [],
        /// Read wait start
        RWSTART OFFSET(8) NUMBITS(1) [],
        /// Read wait stop
        RWSTOP OFFSET(9) NUMBITS(1) [],
        /// Read wait mode
        RWMOD OFFSET(10) NUMBITS(1) [],
        /// SD I/O enable functions
        SDIOEN OFFSET(11) NUMBITS(1) [],
        DBLOCKSIZE_0 OFFSET(4) NUMBITS(1) [],
        DBLOCKSIZE_1 OFFSET(5) NUMBITS(1) [],
        DBLOCKSIZE_2 OFFSET(6) NUMBITS(1) [],
        DBLOCKSIZE_3 OFFSET(7) NUMBITS(1) []
    ],
    pub DCOUNT [
        /// Bytes still to transfer
        DATACOUNT OFFSET(0) NUMBITS(25) []
    ],
    pub STA [
        /// Command response CRC check failed
        CCRCFAIL OFFSET(0) NUMBITS(1) [],
        /// Data block CRC check failed
        DCRCFAIL OFFSET(1) NUMBITS(1) [],
        /// Command response timeout
        CTIMEOUT OFFSET(2) NUMBITS(1) [],
        /// Data timeout
        DTIMEOUT OFFSET(3) NUMBITS(1) [],
        /// Transmit FIFO underrun
        TXUNDERR OFFSET(4) NUMBITS(1) [],
        /// Receive FIFO overrun
        RXOVERR OFFSET(5) NUMBITS(1) [],
        /// Command response received
        CMDREND OFFSET(6) NUMBITS(1) [],
        /// Command sent
        CMDSENT OFFSET(7) NUMBITS(1) [],
        /// Data end
        DATAEND OFFSET(8) NUMBITS(1) [],
        /// Start bit not detected
        STBITERR OFFSET(9) NUMBITS(1) [],
        /// Data block sent or received
        DBCKEND OFFSET(10) NUMBITS(1) [],
        /// Command transfer in progress
        CMDACT OFFSET(11) NUMBITS(1) [],
        /// Data transmit in progress
        TXACT OFFSET(12) NUMBITS(1) [],
        /// Data receive in progress
        RXACT OFFSET(13) NUMBITS(1) [],
        /// Transmit FIFO half empty
        TXFIFOHE OFFSET(14) NUMBITS(1) [],
        /// Receive FIFO half full
        RXFIFOHF OFFSET(15) NUMBITS(1) [],
        /// Transmit FIFO full
        TXFIFOF OFFSET(16) NUMBITS(1) [],
        /// Receive FIFO full
        RXFIFOF OFFSET(17) NUMBITS(1) [],
        /// Transmit FIFO empty
        TXFIFOE OFFSET(18) NUMBITS(1) [],
        /// Receive FIFO empty
        RXFIFOE OFFSET(19) NUMBITS(1) [],
        /// Data available in transmit FIFO
        TXDAVL OFFSET(20) NUMBITS(1) [],
        /// Data available in receive FIFO
        RXDAVL OFFSET(21) NUMBITS(1) [],
        /// SD I/O interrupt received
        SDIOIT OFFSET(22) NUMBITS(1) [],
        /// CE-ATA command completion
        CEATAEND OFFSET(23) NUMBITS(1) []
    ],
    /// Clears the static flags of STA
    pub ICR [
        CCRCFAILC OFFSET(0) NUMBITS(1) [],
        DCRCFAILC OFFSET(1) NUMBITS(1) [],
        CTIMEOUTC OFFSET(2) NUMBITS(1) [],
        DTIMEOUTC OFFSET(3) NUMBITS(1) [],
        TXUNDERRC OFFSET(4) NUMBITS(1) [],
        RXOVERRC OFFSET(5) NUMBITS(1) [],
        CMDRENDC OFFSET(6) NUMBITS(1) [],
        CMDSENTC OFFSET(7) NUMBITS(1) [],
        DATAENDC OFFSET(8) NUMBITS(1) [],
        STBITERRC OFFSET(9) NUMBITS(1) [],
        DBCKENDC OFFSET(10) NUMBITS(1) [],
        SDIOITC OFFSET(22) NUMBITS(1) [],
        CEATAENDC OFFSET(23) NUMBITS(1) []
    ],
    pub MASK [
        CCRCFAILIE OFFSET(0) NUMBITS(1) [],
        DCRCFAILIE OFFSET(1) NUMBITS(1) [],
        CTIMEOUTIE OFFSET(2) NUMBITS(1) [],
        DTIMEOUTIE OFFSET(3) NUMBITS(1) [],
        TXUNDERRIE OFFSET(4) NUMBITS(1) [],
        RXOVERRIE OFFSET(5) NUMBITS(1) [],
        CMDRENDIE OFFSET(6) NUMBITS(1) [],
        CMDSENTIE OFFSET(7) NUMBITS(1) [],
        DATAENDIE OFFSET(8) NUMBITS(1) [],
        STBITERRIE OFFSET(9) NUMBITS(1) [],
        DBCKENDIE OFFSET(10) NUMBITS(1) [],
        CMDACTIE OFFSET(11) NUMBITS(1) [],
        TXACTIE OFFSET(12) NUMBITS(1) [],
        RXACTIE OFFSET(13) NUMBITS(1) [],
        TXFIFOHEIE OFFSET(14) NUMBITS(1) [],
        RXFIFOHFIE OFFSET(15) NUMBITS(1) [],
        TXFIFOFIE OFFSET(16) NUMBITS(1) [],
        RXFIFOFIE OFFSET(17) NUMBITS(1) [],
        TXFIFOEIE OFFSET(18) NUMBITS(1) [],
        RXFIFOEIE OFFSET(19) NUMBITS(1) [],
        TXDAVLIE OFFSET(20) NUMBITS(1) [],
        RXDAVLIE OFFSET(21) NUMBITS(1) [],
        SDIOITIE OFFSET(22) NUMBITS(1) [],
        CEATAENDIE OFFSET(23) NUMBITS(1) []
    ],
    pub FIFOCNT [
        FIFOCOUNT OFFSET(0) NUMBITS(24) []
    ]
];

/// `RESP` index holding response word `n`, where word 1 is the most
/// significant.
pub const fn response_index(n: usize) -> Result<usize, ErrorCode> {
    match n {
        1..=RESPONSE_REGISTERS => Ok(n - 1),
        _ => Err(ErrorCode::INVAL),
    }
}

/// `DCTRL.DBLOCKSIZE` encoding for a block of `bytes` bytes.
pub const fn block_size(bytes: u32) -> Result<u32, ErrorCode> {
    if !bytes.is_power_of_two() || bytes > 1 << 14 {
        return Err(ErrorCode::INVAL);
    }
    Ok(bytes.trailing_zeros())
}

pub(crate) const SDIO: StaticRef<SdioRegisters> =
    unsafe { StaticRef::new(memory_map::SDIO_BASE as *const SdioRegisters) };
