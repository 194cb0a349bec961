// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Flexible memory controller.
//!
//! The control registers are split into five groups: NOR/PSRAM chip
//! select and timing (bank 1), extended write timing (bank 1E), NAND
//! (banks 2 and 3), PC card (bank 4) and SDRAM (banks 5 and 6).

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::ErrorCode;
use crate::memory_map;
use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

/// NOR/PSRAM sub-banks of bank 1.
pub const NOR_SRAM_REGIONS: usize = 4;
/// `BWTR` words; only the even ones hold a register.
pub const BWTR_WORDS: usize = 7;
pub const SDRAM_BANKS: usize = 2;

pub const BCR1_RESET: u32 = 0x0000_30DB;
pub const BCR_RESET: u32 = 0x0000_30D2;
pub const BTR_RESET: u32 = 0x0FFF_FFFF;
pub const BWTR_RESET: u32 = 0x0FFF_FFFF;
pub const PCR_RESET: u32 = 0x0000_0018;
pub const SR_RESET: u32 = 0x0000_0040;
pub const SPACE_TIMING_RESET: u32 = 0xFCFC_FCFC;
pub const SDCR_RESET: u32 = 0x0000_02D0;
pub const SDTR_RESET: u32 = 0x0FFF_FFFF;

register_structs! {
    /// Chip select control and timing, `BTCR[2n]` and `BTCR[2n + 1]`
    pub NorSramRegion {
        (0x0 => pub bcr: ReadWrite<u32, BCR::Register>),
        (0x4 => pub btr: ReadWrite<u32, BTR::Register>),
        (0x8 => @END),
    },

    pub FmcBank1Registers {
        (0x00 => pub btcr: [NorSramRegion; NOR_SRAM_REGIONS]),
        (0x20 => @END),
    },

    pub FmcBank1ERegisters {
        /// write timing of region n at index 2n
        (0x00 => pub bwtr: [ReadWrite<u32, BWTR::Register>; BWTR_WORDS]),
        (0x1C => @END),
    },

    pub FmcBank2_3Registers {
        (0x00 => pub pcr2: ReadWrite<u32, PCR::Register>),
        (0x04 => pub sr2: ReadWrite<u32, SR::Register>),
        /// common memory space timing
        (0x08 => pub pmem2: ReadWrite<u32, PMEM::Register>),
        /// attribute memory space timing
        (0x0C => pub patt2: ReadWrite<u32, PATT::Register>),
        (0x10 => _reserved0),
        (0x14 => pub eccr2: ReadOnly<u32>),
        (0x18 => _reserved1),
        (0x20 => pub pcr3: ReadWrite<u32, PCR::Register>),
        (0x24 => pub sr3: ReadWrite<u32, SR::Register>),
        (0x28 => pub pmem3: ReadWrite<u32, PMEM::Register>),
        (0x2C => pub patt3: ReadWrite<u32, PATT::Register>),
        (0x30 => _reserved2),
        (0x34 => pub eccr3: ReadOnly<u32>),
        (0x38 => @END),
    },

    pub FmcBank4Registers {
        (0x00 => pub pcr4: ReadWrite<u32, PCR::Register>),
        (0x04 => pub sr4: ReadWrite<u32, SR::Register>),
        (0x08 => pub pmem4: ReadWrite<u32, PMEM::Register>),
        (0x0C => pub patt4: ReadWrite<u32, PATT::Register>),
        /// I/O space timing
        (0x10 => pub pio4: ReadWrite<u32, PIO::Register>),
        (0x14 => @END),
    },

    pub FmcBank5_6Registers {
        /// SDRAM control, one per bank
        (0x00 => pub sdcr: [ReadWrite<u32, SDCR::Register>; SDRAM_BANKS]),
        /// SDRAM timing, one per bank
        (0x08 => pub sdtr: [ReadWrite<u32, SDTR::Register>; SDRAM_BANKS]),
        /// SDRAM command mode
        (0x10 => pub sdcmr: ReadWrite<u32, SDCMR::Register>),
        /// SDRAM refresh timer
        (0x14 => pub sdrtr: ReadWrite<u32, SDRTR::Register>),
        (0x18 => pub sdsr: ReadOnly<u32, SDSR::Register>),
        (0x1C => @END),
    }
}

register_bitfields![u32,
    pub BCR [
        /// Memory bank enable
        MBKEN OFFSET(0) NUMBITS(1) [],
        /// Address/data multiplexing enable
        MUXEN OFFSET(1) NUMBITS(1) [],
        /// Memory type
        MTYP OFFSET(2) NUMBITS(2) [
            Sram = 0,
            Psram = 1,
            Nor = 2
        ],
        /// Memory data bus width
        MWID OFFSET(4) NUMBITS(2) [
            Bits8 = 0,
            Bits16 = 1,
            Bits32 = 2
        ],
        /// Flash access enable
        FACCEN OFFSET(6) NUMBITS(1) [],
        /// Burst enable
        BURSTEN OFFSET(8) NUMBITS(1) [],
        /// Wait signal polarity
        WAITPOL OFFSET(9) NUMBITS(1) [],
        /// Wrapped burst mode support
        WRAPMOD OFFSET(10) NUMBITS(1) [],
        /// Wait timing configuration
        WAITCFG OFFSET(11) NUMBITS(1) [],
        /// Write enable
        WREN OFFSET(12) NUMBITS(1) [],
        /// Wait enable
        WAITEN OFFSET(13) NUMBITS(1) [],
        /// Extended mode enable
        EXTMOD OFFSET(14) NUMBITS(1) [],
        /// Wait signal during asynchronous transfers
        ASYNCWAIT OFFSET(15) NUMBITS(1) [],
        /// CRAM page size
        CPSIZE OFFSET(16) NUMBITS(3) [],
        /// Write burst enable
        CBURSTRW OFFSET(19) NUMBITS(1) [],
        /// Continuous clock enable, bank 1 only
        CCLKEN OFFSET(20) NUMBITS(1) [],
        MTYP_0 OFFSET(2) NUMBITS(1) [],
        MTYP_1 OFFSET(3) NUMBITS(1) [],
        MWID_0 OFFSET(4) NUMBITS(1) [],
        MWID_1 OFFSET(5) NUMBITS(1) [],
        CPSIZE_0 OFFSET(16) NUMBITS(1) [],
        CPSIZE_1 OFFSET(17) NUMBITS(1) [],
        CPSIZE_2 OFFSET(18) NUMBITS(1) []
    ],
    pub BTR [
        /// Address setup phase duration
        ADDSET OFFSET(0) NUMBITS(4) [],
        /// Address hold phase duration
        ADDHLD OFFSET(4) NUMBITS(4) [],
        /// Data phase duration
        DATAST OFFSET(8) NUMBITS(8) [],
        /// Bus turnaround phase duration
        BUSTURN OFFSET(16) NUMBITS(4) [],
        /// Clock divide ratio
        CLKDIV OFFSET(20) NUMBITS(4) [],
        /// Data latency
        DATLAT OFFSET(24) NUMBITS(4) [],
        /// Access mode
        ACCMOD OFFSET(28) NUMBITS(2) [
            A = 0,
            B = 1,
            C = 2,
            D = 3
        ],
        ADDSET_0 OFFSET(0) NUMBITS(1) [],
        ADDSET_1 OFFSET(1) NUMBITS(1) [],
        ADDSET_2 OFFSET(2) NUMBITS(1) [],
        ADDSET_3 OFFSET(3) NUMBITS(1) [],
        ACCMOD_0 OFFSET(28) NUMBITS(1) [],
        ACCMOD_1 OFFSET(29) NUMBITS(1) []
    ],
    pub BWTR [
        ADDSET OFFSET(0) NUMBITS(4) [],
        ADDHLD OFFSET(4) NUMBITS(4) [],
        DATAST OFFSET(8) NUMBITS(8) [],
        BUSTURN OFFSET(16) NUMBITS(4) [],
        ACCMOD OFFSET(28) NUMBITS(2) [
            A = 0,
            B = 1,
            C = 2,
            D = 3
        ]
    ],
    pub PCR [
        /// Wait feature enable
        PWAITEN OFFSET(1) NUMBITS(1) [],
        /// Memory bank enable
        PBKEN OFFSET(2) NUMBITS(1) [],
        /// Memory type
        PTYP OFFSET(3) NUMBITS(1) [
            PcCard = 0,
            Nand = 1
        ],
        /// Data bus width
        PWID OFFSET(4) NUMBITS(2) [
            Bits8 = 0,
            Bits16 = 1
        ],
        /// ECC computation logic enable
        ECCEN OFFSET(6) NUMBITS(1) [],
        /// CLE to RE delay
        TCLR OFFSET(9) NUMBITS(4) [],
        /// ALE to RE delay
        TAR OFFSET(13) NUMBITS(4) [],
        /// ECC page size
        ECCPS OFFSET(17) NUMBITS(3) [
            Bytes256 = 0,
            Bytes512 = 1,
            Bytes1024 = 2,
            Bytes2048 = 3,
            Bytes4096 = 4,
            Bytes8192 = 5
        ],
        PWID_0 OFFSET(4) NUMBITS(1) [],
        PWID_1 OFFSET(5) NUMBITS(1) [],
        TCLR_0 OFFSET(9) NUMBITS(1) [],
        TCLR_1 OFFSET(10) NUMBITS(1) [],
        TCLR_2 OFFSET(11) NUMBITS(1) [],
        TCLR_3 OFFSET(12) NUMBITS(1) [],
        TAR_0 OFFSET(13) NUMBITS(1) [],
        TAR_1 OFFSET(14) NUMBITS(1) [],
        TAR_2 OFFSET(15) NUMBITS(1) [],
        TAR_3 OFFSET(16) NUMBITS(1) [],
        ECCPS_0 OFFSET(17) NUMBITS(1) [],
        ECCPS_1 OFFSET(18) NUMBITS(1) [],
        ECCPS_2 OFFSET(19) NUMBITS(1) []
    ],
    pub SR [
        /// Interrupt rising edge status
        IRS OFFSET(0) NUMBITS(1) [],
        /// Interrupt level status
        ILS OFFSET(1) NUMBITS(1) [],
        /// Interrupt falling edge status
        IFS OFFSET(2) NUMBITS(1) [],
        /// Interrupt rising edge detection enable
        IREN OFFSET(3) NUMBITS(1) [],
        /// Interrupt level detection enable
        ILEN OFFSET(4) NUMBITS(1) [],
        /// Interrupt falling edge detection enable
        IFEN OFFSET(5) NUMBITS(1) [],
        /// FIFO empty
        FEMPT OFFSET(6) NUMBITS(1) []
    ],
    pub PMEM [
        MEMSET OFFSET(0) NUMBITS(8) [],
        MEMWAIT OFFSET(8) NUMBITS(8) [],
        MEMHOLD OFFSET(16) NUMBITS(8) [],
        MEMHIZ OFFSET(24) NUMBITS(8) []
    ],
    pub PATT [
        ATTSET OFFSET(0) NUMBITS(8) [],
        ATTWAIT OFFSET(8) NUMBITS(8) [],
        ATTHOLD OFFSET(16) NUMBITS(8) [],
        ATTHIZ OFFSET(24) NUMBITS(8) []
    ],
    pub PIO [
        IOSET OFFSET(0) NUMBITS(8) [],
        IOWAIT OFFSET(8) NUMBITS(8) [],
        IOHOLD OFFSET(16) NUMBITS(8) [],
        IOHIZ OFFSET(24) NUMBITS(8) []
    ],
    pub SDCR [
        /// Number of column address bits
        NC OFFSET(0) NUMBITS(2) [
            Bits8 = 0,
            Bits9 = 1,
            Bits10 = 2,
            Bits11 = 3
        ],
        /// Number of row address bits
        NR OFFSET(2) NUMBITS(2) [
            Bits11 = 0,
            Bits12 = 1,
            Bits13 = 2
        ],
        /// Memory data bus width
        MWID OFFSET(4) NUMBITS(2) [
            Bits8 = 0,
            Bits16 = 1,
            Bits32 = 2
        ],
        /// Number of internal banks
        NB OFFSET(6) NUMBITS(1) [
            Two = 0,
            Four = 1
        ],
        /// CAS latency
        CAS OFFSET(7) NUMBITS(2) [
            OneCycle = 1,
            TwoCycles = 2,
            ThreeCycles = 3
        ],
        /// Write protection
        WP OFFSET(9) NUMBITS(1) [],
        /// SDRAM clock configuration
        SDCLK OFFSET(10) NUMBITS(2) [
            Disabled = 0,
            TwoHclk = 2,
            ThreeHclk = 3
        ],
        /// Burst read
        RBURST OFFSET(12) NUMBITS(1) [],
        /// Read pipe delay
        RPIPE OFFSET(13) NUMBITS(2) [],
        NC_0 OFFSET(0) NUMBITS(1) [],
        NC_1 OFFSET(1) NUMBITS(1) [],
        NR_0 OFFSET(2) NUMBITS(1) [],
        NR_1 OFFSET(3) NUMBITS(1) [],
        CAS_0 OFFSET(7) NUMBITS(1) [],
        CAS_1 OFFSET(8) NUMBITS(1) [],
        SDCLK_0 OFFSET(10) NUMBITS(1) [],
        SDCLK_1 OFFSET(11) NUMBITS(1) [],
        RPIPE_0 OFFSET(13) NUMBITS(1) [],
        RPIPE_1 OFFSET(14) NUMBITS(1) []
    ],
    pub SDTR [
        /// Load mode register to active delay
        TMRD OFFSET(0) NUMBITS(4) [],
        /// Exit self-refresh delay
        TXSR OFFSET(4) NUMBITS(4) [],
        /// Self refresh time
        TRAS OFFSET(8) NUMBITS(4) [],
        /// Row cycle delay
        TRC OFFSET(12) NUMBITS(4) [],
        /// Recovery delay
        TWR OFFSET(16) NUMBITS(4) [],
        /// Row precharge delay
        TRP OFFSET(20) NUMBITS(4) [],
        /// Row to column delay
        TRCD OFFSET(24) NUMBITS(4) []
    ],
    pub SDCMR [
        /// Command mode
        MODE OFFSET(0) NUMBITS(3) [
            Normal = 0,
            ClockConfigurationEnable = 1,
            PrechargeAll = 2,
            AutoRefresh = 3,
            LoadModeRegister = 4,
            SelfRefresh = 5,
            PowerDown = 6
        ],
        /// Command target bank 2
        CTB2 OFFSET(3) NUMBITS(1) [],
        /// Command target bank 1
        CTB1 OFFSET(4) NUMBITS(1) [],
        /// Number of auto-refresh, minus one
        NRFS OFFSET(5) NUMBITS(4) [],
        /// Mode register definition
        MRD OFFSET(9) NUMBITS(13) [],
        MODE_0 OFFSET(0) NUMBITS(1) [],
        MODE_1 OFFSET(1) NUMBITS(1) [],
        MODE_2 OFFSET(2) NUMBITS(1) []
    ],
    pub SDRTR [
        /// Clear refresh error flag
        CRE OFFSET(0) NUMBITS(1) [],
        /// Refresh timer count
        COUNT OFFSET(1) NUMBITS(13) [],
        /// Refresh error interrupt enable
        REIE OFFSET(14) NUMBITS(1) []
    ],
    pub SDSR [
        /// Refresh error flag
        RE OFFSET(0) NUMBITS(1) [],
        /// Status mode for bank 1
        MODES1 OFFSET(1) NUMBITS(2) [
            Normal = 0,
            SelfRefresh = 1,
            PowerDown = 2
        ],
        /// Status mode for bank 2
        MODES2 OFFSET(3) NUMBITS(2) [
            Normal = 0,
            SelfRefresh = 1,
            PowerDown = 2
        ],
        /// Busy status
        BUSY OFFSET(5) NUMBITS(1) []
    ]
];

/// `BWTR` index of NOR/PSRAM region `region`.
pub const fn bwtr_index(region: usize) -> Result<usize, ErrorCode> {
    if region >= NOR_SRAM_REGIONS {
        return Err(ErrorCode::INVAL);
    }
    Ok(2 * region)
}

/// Memory window decoded for NOR/PSRAM region `region`.
pub const fn nor_sram_window(region: usize) -> Result<usize, ErrorCode> {
    match region {
        0 => Ok(memory_map::FMC_BANK1_1),
        1 => Ok(memory_map::FMC_BANK1_2),
        2 => Ok(memory_map::FMC_BANK1_3),
        3 => Ok(memory_map::FMC_BANK1_4),
        _ => Err(ErrorCode::INVAL),
    }
}

/// Memory window of SDRAM bank `bank`, 0 for `SDNE0`.
pub const fn sdram_window(bank: usize) -> Result<usize, ErrorCode> {
    match bank {
        0 => Ok(memory_map::FMC_SDRAM_BANK1_BASE),
        1 => Ok(memory_map::FMC_SDRAM_BANK2_BASE),
        _ => Err(ErrorCode::INVAL),
    }
}

pub const INTERRUPT: Interrupt = Interrupt::FMC;

pub(crate) const FMC_BANK1: StaticRef<FmcBank1Registers> =
    unsafe { StaticRef::new(memory_map::FMC_BANK1_R_BASE as *const FmcBank1Registers) };
pub(crate) const FMC_BANK1E: StaticRef<FmcBank1ERegisters> =
    unsafe { StaticRef::new(memory_map::FMC_BANK1E_R_BASE as *const FmcBank1ERegisters) };
pub(crate) const FMC_BANK2_3: StaticRef<FmcBank2_3Registers> =
    unsafe { StaticRef::new(memory_map::FMC_BANK2_3_R_BASE as *const FmcBank2_3Registers) };
pub(crate) const FMC_BANK4: StaticRef<FmcBank4Registers> =
    unsafe { StaticRef::new(memory_map::FMC_BANK4_R_BASE as *const FmcBank4Registers) };
pub(crate) const FMC_BANK5_6: StaticRef<FmcBank5_6Registers> =
    unsafe { StaticRef::new(memory_map::FMC_BANK5_6_R_BASE as *const FmcBank5_6Registers) };
