// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Ethernet MAC with its management counters, precision time protocol
//! unit and DMA controller.
//!
//! The four register groups sit at fixed offsets from the Ethernet base:
//! MAC at 0x0000, MMC at 0x0100, PTP at 0x0700 and DMA at 0x1000.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::ErrorCode;
use crate::memory_map;
use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

/// Perfect filter addresses after MAC address 0.
pub const EXTRA_MAC_ADDRESSES: usize = 3;

pub const MACCR_RESET: u32 = 0x0000_8000;
pub const MACA0HR_RESET: u32 = 0x8000_FFFF;
pub const MACAHR_RESET: u32 = 0x0000_FFFF;
pub const DMABMR_RESET: u32 = 0x0002_0101;

pub const INTERRUPT: Interrupt = Interrupt::ETH;
pub const WAKEUP_INTERRUPT: Interrupt = Interrupt::ETH_WKUP;

register_structs! {
    pub EthMacRegisters {
        /// configuration register
        (0x00 => pub maccr: ReadWrite<u32, MACCR::Register>),
        /// frame filter register
        (0x04 => pub macffr: ReadWrite<u32, MACFFR::Register>),
        /// hash table high register
        (0x08 => pub machthr: ReadWrite<u32>),
        /// hash table low register
        (0x0C => pub machtlr: ReadWrite<u32>),
        /// MII address register
        (0x10 => pub macmiiar: ReadWrite<u32, MACMIIAR::Register>),
        /// MII data register
        (0x14 => pub macmiidr: ReadWrite<u32, MACMIIDR::Register>),
        /// flow control register
        (0x18 => pub macfcr: ReadWrite<u32, MACFCR::Register>),
        /// VLAN tag register
        (0x1C => pub macvlantr: ReadWrite<u32, MACVLANTR::Register>),
        (0x20 => _reserved0),
        /// remote wakeup frame filter, written and read as eight successive words
        (0x28 => pub macrwuffr: ReadWrite<u32>),
        /// PMT control and status register
        (0x2C => pub macpmtcsr: ReadWrite<u32, MACPMTCSR::Register>),
        (0x30 => _reserved1),
        /// debug register
        (0x34 => pub macdbgr: ReadOnly<u32, MACDBGR::Register>),
        /// interrupt status register
        (0x38 => pub macsr: ReadWrite<u32, MACSR::Register>),
        /// interrupt mask register
        (0x3C => pub macimr: ReadWrite<u32, MACIMR::Register>),
        (0x40 => pub maca0hr: ReadWrite<u32, MACA0HR::Register>),
        /// address bytes 3 to 0
        (0x44 => pub maca0lr: ReadWrite<u32>),
        /// MAC addresses 1 to 3
        (0x48 => pub address: [MacAddressRegisters; EXTRA_MAC_ADDRESSES]),
        (0x60 => @END),
    },

    pub MacAddressRegisters {
        (0x0 => pub high: ReadWrite<u32, MACAHR::Register>),
        (0x4 => pub low: ReadWrite<u32>),
        (0x8 => @END),
    },

    pub EthMmcRegisters {
        /// control register
        (0x00 => pub mmccr: ReadWrite<u32, MMCCR::Register>),
        /// receive interrupt register
        (0x04 => pub mmcrir: ReadOnly<u32, MMCRIR::Register>),
        /// transmit interrupt register
        (0x08 => pub mmctir: ReadOnly<u32, MMCTIR::Register>),
        /// receive interrupt mask register
        (0x0C => pub mmcrimr: ReadWrite<u32, MMCRIMR::Register>),
        /// transmit interrupt mask register
        (0x10 => pub mmctimr: ReadWrite<u32, MMCTIMR::Register>),
        (0x14 => _reserved0),
        /// good frames transmitted after a single collision
        (0x4C => pub mmctgfsccr: ReadOnly<u32>),
        /// good frames transmitted after more than one collision
        (0x50 => pub mmctgfmsccr: ReadOnly<u32>),
        (0x54 => _reserved1),
        /// good frames transmitted
        (0x68 => pub mmctgfcr: ReadOnly<u32>),
        (0x6C => _reserved2),
        /// frames received with CRC error
        (0x94 => pub mmcrfcecr: ReadOnly<u32>),
        /// frames received with alignment error
        (0x98 => pub mmcrfaecr: ReadOnly<u32>),
        (0x9C => _reserved3),
        /// good unicast frames received
        (0xC4 => pub mmcrgufcr: ReadOnly<u32>),
        (0xC8 => @END),
    },

    pub EthPtpRegisters {
        /// time stamp control register
        (0x00 => pub ptptscr: ReadWrite<u32, PTPTSCR::Register>),
        /// subsecond increment register
        (0x04 => pub ptpssir: ReadWrite<u32, PTPSSIR::Register>),
        /// time stamp high register, seconds
        (0x08 => pub ptptshr: ReadOnly<u32>),
        /// time stamp low register
        (0x0C => pub ptptslr: ReadOnly<u32, PTPTSLR::Register>),
        /// time stamp high update register
        (0x10 => pub ptptshur: ReadWrite<u32>),
        /// time stamp low update register
        (0x14 => pub ptptslur: ReadWrite<u32, PTPTSLUR::Register>),
        /// time stamp addend register
        (0x18 => pub ptptsar: ReadWrite<u32>),
        /// target time high register
        (0x1C => pub ptptthr: ReadWrite<u32>),
        /// target time low register
        (0x20 => pub ptpttlr: ReadWrite<u32>),
        (0x24 => _reserved0),
        /// time stamp status register
        (0x28 => pub ptptssr: ReadOnly<u32, PTPTSSR::Register>),
        /// PPS control register
        (0x2C => pub ptpppscr: ReadWrite<u32, PTPPPSCR::Register>),
        (0x30 => @END),
    },

    pub EthDmaRegisters {
        /// bus mode register
        (0x00 => pub dmabmr: ReadWrite<u32, DMABMR::Register>),
        /// transmit poll demand register
        (0x04 => pub dmatpdr: ReadWrite<u32>),
        /// receive poll demand register
        (0x08 => pub dmarpdr: ReadWrite<u32>),
        /// receive descriptor list address register
        (0x0C => pub dmardlar: ReadWrite<u32>),
        /// transmit descriptor list address register
        (0x10 => pub dmatdlar: ReadWrite<u32>),
        /// status register
        (0x14 => pub dmasr: ReadWrite<u32, DMASR::Register>),
        /// operation mode register
        (0x18 => pub dmaomr: ReadWrite<u32, DMAOMR::Register>),
        /// interrupt enable register
        (0x1C => pub dmaier: ReadWrite<u32, DMAIER::Register>),
        /// missed frame and buffer overflow counter register
        (0x20 => pub dmamfbocr: ReadOnly<u32, DMAMFBOCR::Register>),
        /// receive status watchdog timer register
        (0x24 => pub dmarswtr: ReadWrite<u32, DMARSWTR::Register>),
        (0x28 => _reserved0),
        /// current host transmit descriptor
        (0x48 => pub dmachtdr: ReadOnly<u32>),
        /// current host receive descriptor
        (0x4C => pub dmachrdr: ReadOnly<u32>),
        /// current host transmit buffer address
        (0x50 => pub dmachtbar: ReadOnly<u32>),
        /// current host receive buffer address
        (0x54 => pub dmachrbar: ReadOnly<u32>),
        (0x58 => @END),
    }
}

register_bitfields![u32,
    pub MACCR [
        /// Receiver enable
        RE OFFSET(2) NUMBITS(1) [],
        /// Transmitter enable
        TE OFFSET(3) NUMBITS(1) [],
        /// Deferral check
        DC OFFSET(4) NUMBITS(1) [],
        /// Back-off limit
        BL OFFSET(5) NUMBITS(2) [],
        /// Automatic pad/CRC stripping
        APCS OFFSET(7) NUMBITS(1) [],
        /// Retry disable
        RD OFFSET(9) NUMBITS(1) [],
        /// IPv4 checksum offload
        IPCO OFFSET(10) NUMBITS(1) [],
        /// Duplex mode
        DM OFFSET(11) NUMBITS(1) [
            Half = 0,
            Full = 1
        ],
        /// Loopback mode
        LM OFFSET(12) NUMBITS(1) [],
        /// Receive own disable
        ROD OFFSET(13) NUMBITS(1) [],
        /// Fast Ethernet speed
        FES OFFSET(14) NUMBITS(1) [
            Mbps10 = 0,
            Mbps100 = 1
        ],
        /// Carrier sense disable
        CSD OFFSET(16) NUMBITS(1) [],
        /// Interframe gap, 96 bit times minus 8 per step
        IFG OFFSET(17) NUMBITS(3) [],
        /// Jabber disable
        JD OFFSET(22) NUMBITS(1) [],
        /// Watchdog disable
        WD OFFSET(23) NUMBITS(1) [],
        /// CRC stripping for type frames
        CSTF OFFSET(25) NUMBITS(1) [],
        BL_0 OFFSET(5) NUMBITS(1) [],
        BL_1 OFFSET(6) NUMBITS(1) [],
        IFG_0 OFFSET(17) NUMBITS(1) [],
        IFG_1 OFFSET(18) NUMBITS(1) [],
        IFG_2 OFFSET(19) NUMBITS(1) []
    ],
    pub MACFFR [
        /// Promiscuous mode
        PM OFFSET(0) NUMBITS(1) [],
        /// Hash unicast
        HU OFFSET(1) NUMBITS(1) [],
        /// Hash multicast
        HM OFFSET(2) NUMBITS(1) [],
        /// Destination address inverse filtering
        DAIF OFFSET(3) NUMBITS(1) [],
        /// Pass all multicast
        PAM OFFSET(4) NUMBITS(1) [],
        /// Broadcast frames disable
        BFD OFFSET(5) NUMBITS(1) [],
        /// Pass control frames
        PCF OFFSET(6) NUMBITS(2) [
            BlockAll = 0,
            BlockAllButPause = 1,
            ForwardAll = 2,
            ForwardPassingFilter = 3
        ],
        /// Source address inverse filtering
        SAIF OFFSET(8) NUMBITS(1) [],
        /// Source address filter
        SAF OFFSET(9) NUMBITS(1) [],
        /// Hash or perfect filter
        HPF OFFSET(10) NUMBITS(1) [],
        /// Receive all
        RA OFFSET(31) NUMBITS(1) []
    ],
    pub MACMIIAR [
        /// MII busy
        MB OFFSET(0) NUMBITS(1) [],
        /// MII write
        MW OFFSET(1) NUMBITS(1) [],
        /// Clock range
        CR OFFSET(2) NUMBITS(3) [
            Div42 = 0,
            Div62 = 1,
            Div16 = 2,
            Div26 = 3,
            Div102 = 4
        ],
        /// MII register
        MR OFFSET(6) NUMBITS(5) [],
        /// PHY address
        PA OFFSET(11) NUMBITS(5) []
    ],
    pub MACMIIDR [
        /// MII data
        MD OFFSET(0) NUMBITS(16) []
    ],
    pub MACFCR [
        /// Flow control busy/back pressure activate
        FCBBPA OFFSET(0) NUMBITS(1) [],
        /// Transmit flow control enable
        TFCE OFFSET(1) NUMBITS(1) [],
        /// Receive flow control enable
        RFCE OFFSET(2) NUMBITS(1) [],
        /// Unicast pause frame detect
        UPFD OFFSET(3) NUMBITS(1) [],
        /// Pause low threshold
        PLT OFFSET(4) NUMBITS(2) [
            Minus4 = 0,
            Minus28 = 1,
            Minus144 = 2,
            Minus256 = 3
        ],
        /// Zero-quanta pause disable
        ZQPD OFFSET(7) NUMBITS(1) [],
        /// Pause time
        PT OFFSET(16) NUMBITS(16) []
    ],
    pub MACVLANTR [
        /// VLAN tag identifier
        VLANTI OFFSET(0) NUMBITS(16) [],
        /// 12-bit VLAN tag comparison
        VLANTC OFFSET(16) NUMBITS(1) []
    ],
    pub MACPMTCSR [
        /// Power down
        PD OFFSET(0) NUMBITS(1) [],
        /// Magic packet enable
        MPE OFFSET(1) NUMBITS(1) [],
        /// Wakeup frame enable
        WFE OFFSET(2) NUMBITS(1) [],
        /// Magic packet received
        MPR OFFSET(5) NUMBITS(1) [],
        /// Wakeup frame received
        WFR OFFSET(6) NUMBITS(1) [],
        /// Global unicast
        GU OFFSET(9) NUMBITS(1) [],
        /// Wakeup frame filter register pointer reset
        WFFRPR OFFSET(31) NUMBITS(1) []
    ],
    pub MACDBGR [
        /// MAC MII receive protocol engine active
        MMRPEA OFFSET(0) NUMBITS(1) [],
        /// MAC small FIFO read/write controllers status
        MSFRWCS OFFSET(1) NUMBITS(2) [],
        /// Rx FIFO write controller active
        RFWRA OFFSET(4) NUMBITS(1) [],
        /// Rx FIFO read controller status
        RFRCS OFFSET(5) NUMBITS(2) [],
        /// Rx FIFO fill level
        RFFL OFFSET(8) NUMBITS(2) [
            Empty = 0,
            BelowThreshold = 1,
            AboveThreshold = 2,
            Full = 3
        ],
        /// MAC MII transmit engine active
        MMTEA OFFSET(16) NUMBITS(1) [],
        /// MAC transmit frame controller status
        MTFCS OFFSET(17) NUMBITS(2) [],
        /// MAC transmitter in pause
        MTP OFFSET(19) NUMBITS(1) [],
        /// Tx FIFO read status
        TFRS OFFSET(20) NUMBITS(2) [],
        /// Tx FIFO write active
        TFWA OFFSET(22) NUMBITS(1) [],
        /// Tx FIFO not empty
        TFNE OFFSET(24) NUMBITS(1) [],
        /// Tx FIFO full
        TFF OFFSET(25) NUMBITS(1) []
    ],
    pub MACSR [
        /// PMT status
        PMTS OFFSET(3) NUMBITS(1) [],
        /// MMC status
        MMCS OFFSET(4) NUMBITS(1) [],
        /// MMC receive status
        MMCRS OFFSET(5) NUMBITS(1) [],
        /// MMC transmit status
        MMCTS OFFSET(6) NUMBITS(1) [],
        /// Time stamp trigger status
        TSTS OFFSET(9) NUMBITS(1) []
    ],
    pub MACIMR [
        /// PMT interrupt mask
        PMTIM OFFSET(3) NUMBITS(1) [],
        /// Time stamp trigger interrupt mask
        TSTIM OFFSET(9) NUMBITS(1) []
    ],
    pub MACA0HR [
        /// Address bytes 5 and 4
        MACA0H OFFSET(0) NUMBITS(16) [],
        /// Always one
        MO OFFSET(31) NUMBITS(1) []
    ],
    /// High half of MAC address 1 to 3
    pub MACAHR [
        /// Address bytes 5 and 4
        MACAH OFFSET(0) NUMBITS(16) [],
        /// Mask byte control
        MBC OFFSET(24) NUMBITS(6) [],
        /// Source address
        SA OFFSET(30) NUMBITS(1) [],
        /// Address enable
        AE OFFSET(31) NUMBITS(1) []
    ],
    pub MMCCR [
        /// Counter reset
        CR OFFSET(0) NUMBITS(1) [],
        /// Counter stop rollover
        CSR OFFSET(1) NUMBITS(1) [],
        /// Reset on read
        ROR OFFSET(2) NUMBITS(1) [],
        /// MMC counter freeze
        MCF OFFSET(3) NUMBITS(1) [],
        /// MMC counter preset
        MCP OFFSET(4) NUMBITS(1) [],
        /// MMC counter full-half preset
        MCFHP OFFSET(5) NUMBITS(1) []
    ],
    pub MMCRIR [
        /// Received frames CRC error status
        RFCES OFFSET(5) NUMBITS(1) [],
        /// Received frames alignment error status
        RFAES OFFSET(6) NUMBITS(1) [],
        /// Received good unicast frames status
        RGUFS OFFSET(17) NUMBITS(1) []
    ],
    pub MMCTIR [
        /// Transmitted good frames single collision status
        TGFSCS OFFSET(14) NUMBITS(1) [],
        /// Transmitted good frames more than single collision status
        TGFMSCS OFFSET(15) NUMBITS(1) [],
        /// Transmitted good frames status
        TGFS OFFSET(21) NUMBITS(1) []
    ],
    pub MMCRIMR [
        RFCEM OFFSET(5) NUMBITS(1) [],
        RFAEM OFFSET(6) NUMBITS(1) [],
        RGUFM OFFSET(17) NUMBITS(1) []
    ],
    pub MMCTIMR [
        TGFSCM OFFSET(14) NUMBITS(1) [],
        TGFMSCM OFFSET(15) NUMBITS(1) [],
        TGFM OFFSET(21) NUMBITS(1) []
    ],
    pub PTPTSCR [
        /// Time stamp enable
        TSE OFFSET(0) NUMBITS(1) [],
        /// Time stamp fine or coarse update
        TSFCU OFFSET(1) NUMBITS(1) [],
        /// Time stamp system time initialize
        TSSTI OFFSET(2) NUMBITS(1) [],
        /// Time stamp system time update
        TSSTU OFFSET(3) NUMBITS(1) [],
        /// Time stamp interrupt trigger enable
        TSITE OFFSET(4) NUMBITS(1) [],
        /// Time stamp addend register update
        TTSARU OFFSET(5) NUMBITS(1) [],
        /// Time stamp snapshot for all received frames
        TSSARFE OFFSET(8) NUMBITS(1) [],
        /// Time stamp subsecond rollover
        TSSSR OFFSET(9) NUMBITS(1) [
            Binary = 0,
            Digital = 1
        ],
        /// PTP packet snooping for version 2
        TSPTPPSV2E OFFSET(10) NUMBITS(1) [],
        /// Snapshot for PTP over Ethernet frames
        TSSPTPOEFE OFFSET(11) NUMBITS(1) [],
        /// Snapshot for IPv6 frames
        TSSIPV6FE OFFSET(12) NUMBITS(1) [],
        /// Snapshot for IPv4 frames
        TSSIPV4FE OFFSET(13) NUMBITS(1) [],
        /// Snapshot for event messages only
        TSSEME OFFSET(14) NUMBITS(1) [],
        /// Snapshot for messages relevant to master
        TSSMRME OFFSET(15) NUMBITS(1) [],
        /// Time stamp clock node type
        TSCNT OFFSET(16) NUMBITS(2) [
            OrdinaryClock = 0,
            BoundaryClock = 1,
            EndToEnd = 2,
            PeerToPeer = 3
        ],
        /// Time stamp PTP frame filtering MAC address enable
        TSPFFMAE OFFSET(18) NUMBITS(1) [],
        TSCNT_0 OFFSET(16) NUMBITS(1) [],
        TSCNT_1 OFFSET(17) NUMBITS(1) []
    ],
    pub PTPSSIR [
        /// System time subsecond increment
        STSSI OFFSET(0) NUMBITS(8) []
    ],
    pub PTPTSLR [
        /// System time subseconds
        STSS OFFSET(0) NUMBITS(31) [],
        /// System time positive or negative sign
        STPNS OFFSET(31) NUMBITS(1) []
    ],
    pub PTPTSLUR [
        /// Time stamp update subseconds
        TSUSS OFFSET(0) NUMBITS(31) [],
        /// Time stamp update positive or negative sign
        TSUPNS OFFSET(31) NUMBITS(1) []
    ],
    pub PTPTSSR [
        /// Time stamp second overflow
        TSSO OFFSET(0) NUMBITS(1) [],
        /// Time stamp target time reached
        TSTTR OFFSET(1) NUMBITS(1) []
    ],
    pub PTPPPSCR [
        /// PPS frequency selection
        PPSFREQ OFFSET(0) NUMBITS(4) []
    ],
    pub DMABMR [
        /// Software reset
        SR OFFSET(0) NUMBITS(1) [],
        /// DMA arbitration
        DA OFFSET(1) NUMBITS(1) [
            RoundRobin = 0,
            RxPriority = 1
        ],
        /// Descriptor skip length
        DSL OFFSET(2) NUMBITS(5) [],
        /// Enhanced descriptor format enable
        EDFE OFFSET(7) NUMBITS(1) [],
        /// Programmable burst length
        PBL OFFSET(8) NUMBITS(6) [],
        /// Rx Tx priority ratio
        RTPR OFFSET(14) NUMBITS(2) [
            OneToOne = 0,
            TwoToOne = 1,
            ThreeToOne = 2,
            FourToOne = 3
        ],
        /// Fixed burst
        FB OFFSET(16) NUMBITS(1) [],
        /// Rx DMA programmable burst length
        RDP OFFSET(17) NUMBITS(6) [],
        /// Use separate PBL
        USP OFFSET(23) NUMBITS(1) [],
        /// 4xPBL mode
        FPM OFFSET(24) NUMBITS(1) [],
        /// Address-aligned beats
        AAB OFFSET(25) NUMBITS(1) [],
        /// Mixed burst
        MB OFFSET(26) NUMBITS(1) []
    ],
    pub DMASR [
        /// Transmit status
        TS OFFSET(0) NUMBITS(1) [],
        /// Transmit process stopped status
        TPSS OFFSET(1) NUMBITS(1) [],
        /// Transmit buffer unavailable status
        TBUS OFFSET(2) NUMBITS(1) [],
        /// Transmit jabber timeout status
        TJTS OFFSET(3) NUMBITS(1) [],
        /// Receive overflow status
        ROS OFFSET(4) NUMBITS(1) [],
        /// Transmit underflow status
        TUS OFFSET(5) NUMBITS(1) [],
        /// Receive status
        RS OFFSET(6) NUMBITS(1) [],
        /// Receive buffer unavailable status
        RBUS OFFSET(7) NUMBITS(1) [],
        /// Receive process stopped status
        RPSS OFFSET(8) NUMBITS(1) [],
        /// Receive watchdog timeout status
        RWTS OFFSET(9) NUMBITS(1) [],
        /// Early transmit status
        ETS OFFSET(10) NUMBITS(1) [],
        /// Fatal bus error status
        FBES OFFSET(13) NUMBITS(1) [],
        /// Early receive status
        ERS OFFSET(14) NUMBITS(1) [],
        /// Abnormal interrupt summary
        AIS OFFSET(15) NUMBITS(1) [],
        /// Normal interrupt summary
        NIS OFFSET(16) NUMBITS(1) [],
        /// Receive process state
        RPS OFFSET(17) NUMBITS(3) [
            Stopped = 0,
            FetchingDescriptor = 1,
            WaitingForPacket = 3,
            Suspended = 4,
            Closing = 5,
            Queuing = 7
        ],
        /// Transmit process state
        TPS OFFSET(20) NUMBITS(3) [
            Stopped = 0,
            FetchingDescriptor = 1,
            Waiting = 2,
            Reading = 3,
            Suspended = 6,
            Closing = 7
        ],
        /// Error bits status
        EBS OFFSET(23) NUMBITS(3) [],
        /// MMC status
        MMCS OFFSET(27) NUMBITS(1) [],
        /// PMT status
        PMTS OFFSET(28) NUMBITS(1) [],
        /// Time stamp trigger status
        TSTS OFFSET(29) NUMBITS(1) []
    ],
    pub DMAOMR [
        /// Start/stop receive
        SR OFFSET(1) NUMBITS(1) [],
        /// Operate on second frame
        OSF OFFSET(2) NUMBITS(1) [],
        /// Receive threshold control
        RTC OFFSET(3) NUMBITS(2) [
            Bytes64 = 0,
            Bytes32 = 1,
            Bytes96 = 2,
            Bytes128 = 3
        ],
        /// Forward undersized good frames
        FUGF OFFSET(6) NUMBITS(1) [],
        /// Forward error frames
        FEF OFFSET(7) NUMBITS(1) [],
        /// Start/stop transmission
        ST OFFSET(13) NUMBITS(1) [],
        /// Transmit threshold control
        TTC OFFSET(14) NUMBITS(3) [
            Bytes64 = 0,
            Bytes128 = 1,
            Bytes192 = 2,
            Bytes256 = 3,
            Bytes40 = 4,
            Bytes32 = 5,
            Bytes24 = 6,
            Bytes16 = 7
        ],
        /// Flush transmit FIFO
        FTF OFFSET(20) NUMBITS(1) [],
        /// Transmit store and forward
        TSF OFFSET(21) NUMBITS(1) [],
        /// Disable flushing of received frames
        DFRF OFFSET(24) NUMBITS(1) [],
        /// Receive store and forward
        RSF OFFSET(25) NUMBITS(1) [],
        /// Dropping of TCP/IP checksum error frames disable
        DTCEFD OFFSET(26) NUMBITS(1) []
    ],
    pub DMAIER [
        TIE OFFSET(0) NUMBITS(1) [],
        TPSIE OFFSET(1) NUMBITS(1) [],
        TBUIE OFFSET(2) NUMBITS(1) [],
        TJTIE OFFSET(3) NUMBITS(1) [],
        ROIE OFFSET(4) NUMBITS(1) [],
        TUIE OFFSET(5) NUMBITS(1) [],
        RIE OFFSET(6) NUMBITS(1) [],
        RBUIE OFFSET(7) NUMBITS(1) [],
        RPSIE OFFSET(8) NUMBITS(1) [],
        RWTIE OFFSET(9) NUMBITS(1) [],
        ETIE OFFSET(10) NUMBITS(1) [],
        FBEIE OFFSET(13) NUMBITS(1) [],
        ERIE OFFSET(14) NUMBITS(1) [],
        /// Abnormal interrupt summary enable
        AISE OFFSET(15) NUMBITS(1) [],
        /// Normal interrupt summary enable
        NISE OFFSET(16) NUMBITS(1) []
    ],
    pub DMAMFBOCR [
        /// Frames missed by the controller
        MFC OFFSET(0) NUMBITS(16) [],
        /// Overflow bit for missed frame counter
        OMFC OFFSET(16) NUMBITS(1) [],
        /// Frames missed by the application
        MFA OFFSET(17) NUMBITS(11) [],
        /// Overflow bit for FIFO overflow counter
        OFOC OFFSET(28) NUMBITS(1) []
    ],
    pub DMARSWTR [
        /// Receive status watchdog timer count
        RSWTC OFFSET(0) NUMBITS(8) []
    ]
];

/// Perfect filter address register pair for MAC address `n`, 1 to 3.
pub const fn mac_address_index(n: usize) -> Result<usize, ErrorCode> {
    match n {
        1..=EXTRA_MAC_ADDRESSES => Ok(n - 1),
        _ => Err(ErrorCode::INVAL),
    }
}

pub(crate) const ETH_MAC: StaticRef<EthMacRegisters> =
    unsafe { StaticRef::new(memory_map::ETH_MAC_BASE as *const EthMacRegisters) };
pub(crate) const ETH_MMC: StaticRef<EthMmcRegisters> =
    unsafe { StaticRef::new(memory_map::ETH_MMC_BASE as *const EthMmcRegisters) };
pub(crate) const ETH_PTP: StaticRef<EthPtpRegisters> =
    unsafe { StaticRef::new(memory_map::ETH_PTP_BASE as *const EthPtpRegisters) };
pub(crate) const ETH_DMA: StaticRef<EthDmaRegisters> =
    unsafe { StaticRef::new(memory_map::ETH_DMA_BASE as *const EthDmaRegisters) };

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;
    use tock_registers::LocalRegisterCopy;

    use super::*;
    use crate::test_util::{assert_components, assert_fields, mask};

    #[test]
    fn mac_layout() {
        let offsets = [
            (offset_of!(EthMacRegisters, maccr), 0x00),
            (offset_of!(EthMacRegisters, macffr), 0x04),
            (offset_of!(EthMacRegisters, machthr), 0x08),
            (offset_of!(EthMacRegisters, machtlr), 0x0C),
            (offset_of!(EthMacRegisters, macmiiar), 0x10),
            (offset_of!(EthMacRegisters, macmiidr), 0x14),
            (offset_of!(EthMacRegisters, macfcr), 0x18),
            (offset_of!(EthMacRegisters, macvlantr), 0x1C),
            (offset_of!(EthMacRegisters, macrwuffr), 0x28),
            (offset_of!(EthMacRegisters, macpmtcsr), 0x2C),
            (offset_of!(EthMacRegisters, macdbgr), 0x34),
            (offset_of!(EthMacRegisters, macsr), 0x38),
            (offset_of!(EthMacRegisters, macimr), 0x3C),
            (offset_of!(EthMacRegisters, maca0hr), 0x40),
            (offset_of!(EthMacRegisters, maca0lr), 0x44),
            (offset_of!(EthMacRegisters, address), 0x48),
        ];
        for (actual, expected) in offsets {
            assert_eq!(actual, expected);
        }
        assert_eq!(size_of::<EthMacRegisters>(), 0x60);
        // MACA3LR is the last word of the MAC block
        let a3lr = offset_of!(EthMacRegisters, address)
            + 2 * size_of::<MacAddressRegisters>()
            + offset_of!(MacAddressRegisters, low);
        assert_eq!(a3lr, 0x5C);
    }

    #[test]
    fn mmc_layout() {
        let offsets = [
            (offset_of!(EthMmcRegisters, mmccr), 0x00),
            (offset_of!(EthMmcRegisters, mmcrir), 0x04),
            (offset_of!(EthMmcRegisters, mmctir), 0x08),
            (offset_of!(EthMmcRegisters, mmcrimr), 0x0C),
            (offset_of!(EthMmcRegisters, mmctimr), 0x10),
            (offset_of!(EthMmcRegisters, mmctgfsccr), 0x4C),
            (offset_of!(EthMmcRegisters, mmctgfmsccr), 0x50),
            (offset_of!(EthMmcRegisters, mmctgfcr), 0x68),
            (offset_of!(EthMmcRegisters, mmcrfcecr), 0x94),
            (offset_of!(EthMmcRegisters, mmcrfaecr), 0x98),
            (offset_of!(EthMmcRegisters, mmcrgufcr), 0xC4),
        ];
        for (actual, expected) in offsets {
            assert_eq!(actual, expected);
        }
        assert_eq!(size_of::<EthMmcRegisters>(), 0xC8);
    }

    #[test]
    fn ptp_layout() {
        let offsets = [
            (offset_of!(EthPtpRegisters, ptptscr), 0x00),
            (offset_of!(EthPtpRegisters, ptpssir), 0x04),
            (offset_of!(EthPtpRegisters, ptptshr), 0x08),
            (offset_of!(EthPtpRegisters, ptptslr), 0x0C),
            (offset_of!(EthPtpRegisters, ptptshur), 0x10),
            (offset_of!(EthPtpRegisters, ptptslur), 0x14),
            (offset_of!(EthPtpRegisters, ptptsar), 0x18),
            (offset_of!(EthPtpRegisters, ptptthr), 0x1C),
            (offset_of!(EthPtpRegisters, ptpttlr), 0x20),
            (offset_of!(EthPtpRegisters, ptptssr), 0x28),
            (offset_of!(EthPtpRegisters, ptpppscr), 0x2C),
        ];
        for (actual, expected) in offsets {
            assert_eq!(actual, expected);
        }
        assert_eq!(size_of::<EthPtpRegisters>(), 0x30);
    }

    #[test]
    fn dma_layout() {
        let offsets = [
            (offset_of!(EthDmaRegisters, dmabmr), 0x00),
            (offset_of!(EthDmaRegisters, dmatpdr), 0x04),
            (offset_of!(EthDmaRegisters, dmarpdr), 0x08),
            (offset_of!(EthDmaRegisters, dmardlar), 0x0C),
            (offset_of!(EthDmaRegisters, dmatdlar), 0x10),
            (offset_of!(EthDmaRegisters, dmasr), 0x14),
            (offset_of!(EthDmaRegisters, dmaomr), 0x18),
            (offset_of!(EthDmaRegisters, dmaier), 0x1C),
            (offset_of!(EthDmaRegisters, dmamfbocr), 0x20),
            (offset_of!(EthDmaRegisters, dmarswtr), 0x24),
            (offset_of!(EthDmaRegisters, dmachtdr), 0x48),
            (offset_of!(EthDmaRegisters, dmachrdr), 0x4C),
            (offset_of!(EthDmaRegisters, dmachtbar), 0x50),
            (offset_of!(EthDmaRegisters, dmachrbar), 0x54),
        ];
        for (actual, expected) in offsets {
            assert_eq!(actual, expected);
        }
        assert_eq!(size_of::<EthDmaRegisters>(), 0x58);
    }

    #[test]
    fn groups_sit_at_fixed_offsets() {
        assert_eq!(ETH_MMC.address() - ETH_MAC.address(), 0x100);
        assert_eq!(ETH_PTP.address() - ETH_MAC.address(), 0x700);
        assert_eq!(ETH_DMA.address() - ETH_MAC.address(), 0x1000);
        assert!(ETH_MAC.address() + size_of::<EthMacRegisters>() <= ETH_MMC.address());
        assert!(ETH_MMC.address() + size_of::<EthMmcRegisters>() <= ETH_PTP.address());
        assert!(ETH_PTP.address() + size_of::<EthPtpRegisters>() <= ETH_DMA.address());
    }

    #[test]
    fn mac_fields() {
        assert_eq!(assert_fields(32, &[
            mask(MACCR::RE),
            mask(MACCR::TE),
            mask(MACCR::DC),
            mask(MACCR::BL),
            mask(MACCR::APCS),
            mask(MACCR::RD),
            mask(MACCR::IPCO),
            mask(MACCR::DM),
            mask(MACCR::LM),
            mask(MACCR::ROD),
            mask(MACCR::FES),
            mask(MACCR::CSD),
            mask(MACCR::IFG),
            mask(MACCR::JD),
            mask(MACCR::WD),
            mask(MACCR::CSTF),
        ]), 0x02CF_7EFC);
        assert_components(
            mask(MACCR::IFG),
            &[mask(MACCR::IFG_0), mask(MACCR::IFG_1), mask(MACCR::IFG_2)],
        );
        assert_eq!(assert_fields(32, &[
            mask(MACFFR::PM),
            mask(MACFFR::HU),
            mask(MACFFR::HM),
            mask(MACFFR::DAIF),
            mask(MACFFR::PAM),
            mask(MACFFR::BFD),
            mask(MACFFR::PCF),
            mask(MACFFR::SAIF),
            mask(MACFFR::SAF),
            mask(MACFFR::HPF),
            mask(MACFFR::RA),
        ]), 0x8000_07FF);
        assert_eq!(assert_fields(32, &[
            mask(MACMIIAR::MB),
            mask(MACMIIAR::MW),
            mask(MACMIIAR::CR),
            mask(MACMIIAR::MR),
            mask(MACMIIAR::PA),
        ]), 0xFFDF);
        assert_eq!(assert_fields(32, &[
            mask(MACFCR::FCBBPA),
            mask(MACFCR::TFCE),
            mask(MACFCR::RFCE),
            mask(MACFCR::UPFD),
            mask(MACFCR::PLT),
            mask(MACFCR::ZQPD),
            mask(MACFCR::PT),
        ]), 0xFFFF_00BF);
        assert_eq!(assert_fields(32, &[
            mask(MACPMTCSR::PD),
            mask(MACPMTCSR::MPE),
            mask(MACPMTCSR::WFE),
            mask(MACPMTCSR::MPR),
            mask(MACPMTCSR::WFR),
            mask(MACPMTCSR::GU),
            mask(MACPMTCSR::WFFRPR),
        ]), 0x8000_0267);
        assert_eq!(assert_fields(32, &[
            mask(MACDBGR::MMRPEA),
            mask(MACDBGR::MSFRWCS),
            mask(MACDBGR::RFWRA),
            mask(MACDBGR::RFRCS),
            mask(MACDBGR::RFFL),
            mask(MACDBGR::MMTEA),
            mask(MACDBGR::MTFCS),
            mask(MACDBGR::MTP),
            mask(MACDBGR::TFRS),
            mask(MACDBGR::TFWA),
            mask(MACDBGR::TFNE),
            mask(MACDBGR::TFF),
        ]), 0x037F_0377);
        assert_eq!(assert_fields(32, &[
            mask(MACSR::PMTS),
            mask(MACSR::MMCS),
            mask(MACSR::MMCRS),
            mask(MACSR::MMCTS),
            mask(MACSR::TSTS),
        ]), 0x0278);
        assert_eq!(assert_fields(32, &[
            mask(MACAHR::MACAH),
            mask(MACAHR::MBC),
            mask(MACAHR::SA),
            mask(MACAHR::AE),
        ]), 0xFF00_FFFF);
        assert_eq!(mask(MACIMR::TSTIM), mask(MACSR::TSTS));
        assert_eq!(mask(MACIMR::PMTIM), mask(MACSR::PMTS));
    }

    #[test]
    fn mmc_and_ptp_fields() {
        assert_eq!(assert_fields(32, &[
            mask(MMCCR::CR),
            mask(MMCCR::CSR),
            mask(MMCCR::ROR),
            mask(MMCCR::MCF),
            mask(MMCCR::MCP),
            mask(MMCCR::MCFHP),
        ]), 0x3F);
        assert_eq!(mask(MMCRIMR::RGUFM), mask(MMCRIR::RGUFS));
        assert_eq!(mask(MMCTIMR::TGFM), mask(MMCTIR::TGFS));
        assert_eq!(assert_fields(32, &[
            mask(PTPTSCR::TSE),
            mask(PTPTSCR::TSFCU),
            mask(PTPTSCR::TSSTI),
            mask(PTPTSCR::TSSTU),
            mask(PTPTSCR::TSITE),
            mask(PTPTSCR::TTSARU),
            mask(PTPTSCR::TSSARFE),
            mask(PTPTSCR::TSSSR),
            mask(PTPTSCR::TSPTPPSV2E),
            mask(PTPTSCR::TSSPTPOEFE),
            mask(PTPTSCR::TSSIPV6FE),
            mask(PTPTSCR::TSSIPV4FE),
            mask(PTPTSCR::TSSEME),
            mask(PTPTSCR::TSSMRME),
            mask(PTPTSCR::TSCNT),
            mask(PTPTSCR::TSPFFMAE),
        ]), 0x0007_FF3F);
        assert_eq!(assert_fields(32, &[mask(PTPTSLR::STSS), mask(PTPTSLR::STPNS)]), u32::MAX);
        assert_eq!(mask(PTPTSLUR::TSUPNS), 1 << 31);
    }

    #[test]
    fn dma_fields() {
        assert_eq!(assert_fields(32, &[
            mask(DMABMR::SR),
            mask(DMABMR::DA),
            mask(DMABMR::DSL),
            mask(DMABMR::EDFE),
            mask(DMABMR::PBL),
            mask(DMABMR::RTPR),
            mask(DMABMR::FB),
            mask(DMABMR::RDP),
            mask(DMABMR::USP),
            mask(DMABMR::FPM),
            mask(DMABMR::AAB),
            mask(DMABMR::MB),
        ]), 0x07FF_FFFF);
        let status = assert_fields(32, &[
            mask(DMASR::TS),
            mask(DMASR::TPSS),
            mask(DMASR::TBUS),
            mask(DMASR::TJTS),
            mask(DMASR::ROS),
            mask(DMASR::TUS),
            mask(DMASR::RS),
            mask(DMASR::RBUS),
            mask(DMASR::RPSS),
            mask(DMASR::RWTS),
            mask(DMASR::ETS),
            mask(DMASR::FBES),
            mask(DMASR::ERS),
            mask(DMASR::AIS),
            mask(DMASR::NIS),
            mask(DMASR::RPS),
            mask(DMASR::TPS),
            mask(DMASR::EBS),
            mask(DMASR::MMCS),
            mask(DMASR::PMTS),
            mask(DMASR::TSTS),
        ]);
        assert_eq!(status, 0x3BFF_E7FF);
        assert_eq!(assert_fields(32, &[
            mask(DMAOMR::SR),
            mask(DMAOMR::OSF),
            mask(DMAOMR::RTC),
            mask(DMAOMR::FUGF),
            mask(DMAOMR::FEF),
            mask(DMAOMR::ST),
            mask(DMAOMR::TTC),
            mask(DMAOMR::FTF),
            mask(DMAOMR::TSF),
            mask(DMAOMR::DFRF),
            mask(DMAOMR::RSF),
            mask(DMAOMR::DTCEFD),
        ]), 0x0731_E0DE);
        let enables = assert_fields(32, &[
            mask(DMAIER::TIE),
            mask(DMAIER::TPSIE),
            mask(DMAIER::TBUIE),
            mask(DMAIER::TJTIE),
            mask(DMAIER::ROIE),
            mask(DMAIER::TUIE),
            mask(DMAIER::RIE),
            mask(DMAIER::RBUIE),
            mask(DMAIER::RPSIE),
            mask(DMAIER::RWTIE),
            mask(DMAIER::ETIE),
            mask(DMAIER::FBEIE),
            mask(DMAIER::ERIE),
            mask(DMAIER::AISE),
            mask(DMAIER::NISE),
        ]);
        // every interrupt enable matches the status bit it gates
        assert_eq!(enables, status & 0x0001_FFFF);
        assert_eq!(assert_fields(32, &[
            mask(DMAMFBOCR::MFC),
            mask(DMAMFBOCR::OMFC),
            mask(DMAMFBOCR::MFA),
            mask(DMAMFBOCR::OFOC),
        ]), 0x1FFF_FFFF);
    }

    #[test]
    fn reset_values() {
        let maccr = LocalRegisterCopy::<u32, MACCR::Register>::new(MACCR_RESET);
        // reserved bit 15 reads as one
        assert_eq!(maccr.get(), 1 << 15);
        let a0 = LocalRegisterCopy::<u32, MACA0HR::Register>::new(MACA0HR_RESET);
        assert!(a0.is_set(MACA0HR::MO));
        assert_eq!(a0.read(MACA0HR::MACA0H), 0xFFFF);
        assert_eq!(MACAHR_RESET, mask(MACAHR::MACAH));
        let bmr = LocalRegisterCopy::<u32, DMABMR::Register>::new(DMABMR_RESET);
        assert_eq!(bmr.read(DMABMR::PBL), 1);
        assert_eq!(bmr.read(DMABMR::RDP), 1);
    }

    #[test]
    fn mii_read_request() {
        let miiar = InMemoryRegister::<u32, MACMIIAR::Register>::new(0);
        miiar.write(
            MACMIIAR::PA.val(1) + MACMIIAR::MR.val(1) + MACMIIAR::CR::Div102 + MACMIIAR::MB::SET,
        );
        assert_eq!(miiar.get(), 0x0851);
    }

    #[test]
    fn mdc_clock_divider_encoding() {
        let miiar = LocalRegisterCopy::<u32, MACMIIAR::Register>::new(0x0000_0010);
        assert_eq!(miiar.read_as_enum(MACMIIAR::CR), Some(MACMIIAR::CR::Value::Div102));
        let miiar = LocalRegisterCopy::<u32, MACMIIAR::Register>::new(0x0000_0008);
        assert_eq!(miiar.read_as_enum(MACMIIAR::CR), Some(MACMIIAR::CR::Value::Div16));
        // 5 to 7 are reserved
        let miiar = LocalRegisterCopy::<u32, MACMIIAR::Register>::new(0x0000_001C);
        assert_eq!(miiar.read_as_enum::<MACMIIAR::CR::Value>(MACMIIAR::CR), None);
    }

    #[test]
    fn address_filters() {
        assert_eq!(mac_address_index(1), Ok(0));
        assert_eq!(mac_address_index(3), Ok(2));
        assert_eq!(mac_address_index(0), Err(ErrorCode::INVAL));
        assert_eq!(mac_address_index(4), Err(ErrorCode::INVAL));
        assert_eq!(INTERRUPT.number(), 61);
        assert_eq!(WAKEUP_INTERRUPT.number(), 62);
    }

    #[test]
    fn vlan_mii_and_pps_fields() {
        assert_eq!(assert_fields(32, &[
            mask(MACVLANTR::VLANTI),
            mask(MACVLANTR::VLANTC),
        ]), 0x0001_FFFF);
        assert_eq!(assert_fields(32, &[mask(MACMIIDR::MD)]), 0xFFFF);
        assert_eq!(assert_fields(32, &[mask(PTPTSSR::TSSO), mask(PTPTSSR::TSTTR)]), 0x03);
        assert_eq!(assert_fields(32, &[mask(PTPPPSCR::PPSFREQ)]), 0x0F);
    }
}
