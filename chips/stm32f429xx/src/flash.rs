// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Embedded flash interface.
//!
//! The 2 MiB array is split into two banks of twelve sectors each: four of
//! 16 KiB, one of 64 KiB and seven of 128 KiB. CR and OPTCR stay locked until
//! the matching key sequence has been written to KEYR or OPTKEYR.

use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::ErrorCode;
use crate::memory_map;
use crate::static_ref::StaticRef;

/// Option control register value as shipped.
pub const OPTCR_RESET: u32 = 0x0FFF_AAED;
pub const OPTCR1_RESET: u32 = 0x0FFF_0000;

pub const SECTORS_PER_BANK: u8 = 12;
/// Offset of bank 2 in the array.
pub const BANK2_OFFSET: usize = 0x10_0000;

register_structs! {
    pub FlashRegisters {
        /// access control register
        (0x00 => pub acr: ReadWrite<u32, ACR::Register>),
        /// key register
        (0x04 => pub keyr: WriteOnly<u32, KEYR::Register>),
        /// option key register
        (0x08 => pub optkeyr: WriteOnly<u32, OPTKEYR::Register>),
        /// status register
        (0x0C => pub sr: ReadWrite<u32, SR::Register>),
        /// control register
        (0x10 => pub cr: ReadWrite<u32, CR::Register>),
        /// option control register
        (0x14 => pub optcr: ReadWrite<u32, OPTCR::Register>),
        /// option control register 1, bank 2 write protection
        (0x18 => pub optcr1: ReadWrite<u32, OPTCR1::Register>),
        (0x1C => @END),
    }
}

register_bitfields![u32,
    pub ACR [
        /// Ratio of CPU clock period to flash access time, in wait states
        LATENCY OFFSET(0) NUMBITS(4) [
            WS0 = 0,
            WS1 = 1,
            WS2 = 2,
            WS3 = 3,
            WS4 = 4,
            WS5 = 5,
            WS6 = 6,
            WS7 = 7,
            WS8 = 8,
            WS9 = 9,
            WS10 = 10,
            WS11 = 11,
            WS12 = 12,
            WS13 = 13,
            WS14 = 14,
            WS15 = 15
        ],
        /// Prefetch enable
        PRFTEN OFFSET(8) NUMBITS(1) [],
        /// Instruction cache enable
        ICEN OFFSET(9) NUMBITS(1) [],
        /// Data cache enable
        DCEN OFFSET(10) NUMBITS(1) [],
        /// Instruction cache reset
        ICRST OFFSET(11) NUMBITS(1) [],
        /// Data cache reset
        DCRST OFFSET(12) NUMBITS(1) [],
        LATENCY_0 OFFSET(0) NUMBITS(1) [],
        LATENCY_1 OFFSET(1) NUMBITS(1) [],
        LATENCY_2 OFFSET(2) NUMBITS(1) [],
        LATENCY_3 OFFSET(3) NUMBITS(1) []
    ],
    /// Write Key1 then Key2 to unlock CR
    pub KEYR [
        KEY OFFSET(0) NUMBITS(32) [
            Key1 = 0x45670123,
            Key2 = 0xCDEF89AB
        ]
    ],
    /// Write Key1 then Key2 to unlock OPTCR
    pub OPTKEYR [
        OPTKEY OFFSET(0) NUMBITS(32) [
            Key1 = 0x08192A3B,
            Key2 = 0x4C5D6E7F
        ]
    ],
    pub SR [
        /// End of operation
        EOP OFFSET(0) NUMBITS(1) [],
        /// Operation error
        OPERR OFFSET(1) NUMBITS(1) [],
        /// Write protection error
        WRPERR OFFSET(4) NUMBITS(1) [],
        /// Programming alignment error
        PGAERR OFFSET(5) NUMBITS(1) [],
        /// Programming parallelism error
        PGPERR OFFSET(6) NUMBITS(1) [],
        /// Programming sequence error
        PGSERR OFFSET(7) NUMBITS(1) [],
        /// Proprietary readout protection error
        RDERR OFFSET(8) NUMBITS(1) [],
        /// Busy
        BSY OFFSET(16) NUMBITS(1) []
    ],
    pub CR [
        /// Programming
        PG OFFSET(0) NUMBITS(1) [],
        /// Sector erase
        SER OFFSET(1) NUMBITS(1) [],
        /// Mass erase of bank 1
        MER OFFSET(2) NUMBITS(1) [],
        /// Sector number, bit 4 selects bank 2
        SNB OFFSET(3) NUMBITS(5) [],
        /// Program size
        PSIZE OFFSET(8) NUMBITS(2) [
            X8 = 0,
            X16 = 1,
            X32 = 2,
            X64 = 3
        ],
        /// Mass erase of bank 2
        MER2 OFFSET(15) NUMBITS(1) [],
        /// Start
        STRT OFFSET(16) NUMBITS(1) [],
        /// End of operation interrupt enable
        EOPIE OFFSET(24) NUMBITS(1) [],
        /// Error interrupt enable
        ERRIE OFFSET(25) NUMBITS(1) [],
        /// Lock
        LOCK OFFSET(31) NUMBITS(1) [],
        SNB_0 OFFSET(3) NUMBITS(1) [],
        SNB_1 OFFSET(4) NUMBITS(1) [],
        SNB_2 OFFSET(5) NUMBITS(1) [],
        SNB_3 OFFSET(6) NUMBITS(1) [],
        SNB_4 OFFSET(7) NUMBITS(1) [],
        PSIZE_0 OFFSET(8) NUMBITS(1) [],
        PSIZE_1 OFFSET(9) NUMBITS(1) []
    ],
    pub OPTCR [
        /// Option lock
        OPTLOCK OFFSET(0) NUMBITS(1) [],
        /// Option start
        OPTSTRT OFFSET(1) NUMBITS(1) [],
        /// Brownout reset level
        BOR_LEV OFFSET(2) NUMBITS(2) [
            Level3 = 0,
            Level2 = 1,
            Level1 = 2,
            Off = 3
        ],
        /// Dual bank boot
        BFB2 OFFSET(4) NUMBITS(1) [],
        /// Software watchdog
        WDG_SW OFFSET(5) NUMBITS(1) [],
        /// No reset generated on entering Stop
        nRST_STOP OFFSET(6) NUMBITS(1) [],
        /// No reset generated on entering Standby
        nRST_STDBY OFFSET(7) NUMBITS(1) [],
        /// Read protect
        RDP OFFSET(8) NUMBITS(8) [
            Level0 = 0xAA,
            Level2 = 0xCC
        ],
        /// Not write protect, one bit per bank 1 sector
        nWRP OFFSET(16) NUMBITS(12) [],
        /// Dual bank on 1 MiB devices
        DB1M OFFSET(30) NUMBITS(1) [],
        /// PCROP instead of write protection on nWRP sectors
        SPRMOD OFFSET(31) NUMBITS(1) [],
        BOR_LEV_0 OFFSET(2) NUMBITS(1) [],
        BOR_LEV_1 OFFSET(3) NUMBITS(1) []
    ],
    pub OPTCR1 [
        /// Not write protect, one bit per bank 2 sector
        nWRP OFFSET(16) NUMBITS(12) []
    ]
];

/// Offset in the flash array and size of sector `n`, counting
/// bank 2 sectors from 12.
pub const fn sector(n: u8) -> Result<(usize, usize), ErrorCode> {
    if n >= 2 * SECTORS_PER_BANK {
        return Err(ErrorCode::INVAL);
    }
    let (bank, index) = if n >= SECTORS_PER_BANK {
        (BANK2_OFFSET, (n - SECTORS_PER_BANK) as usize)
    } else {
        (0, n as usize)
    };
    let (offset, size) = match index {
        0..=3 => (index * 0x4000, 0x4000),
        4 => (0x1_0000, 0x1_0000),
        _ => (0x2_0000 * (index - 4), 0x2_0000),
    };
    Ok((bank + offset, size))
}

/// Value for `CR::SNB` selecting sector `sector`.
pub const fn snb(sector: u8) -> Result<u32, ErrorCode> {
    if sector >= 2 * SECTORS_PER_BANK {
        Err(ErrorCode::INVAL)
    } else if sector >= SECTORS_PER_BANK {
        Ok((sector - SECTORS_PER_BANK) as u32 | 0x10)
    } else {
        Ok(sector as u32)
    }
}

pub(crate) const FLASH: StaticRef<FlashRegisters> =
    unsafe { StaticRef::new(memory_map::FLASH_R_BASE as *const FlashRegisters) };

#[allow(non_snake_case)]
pub mod legacy {
    pub mod SR {
        pub use crate::flash::SR::OPERR as SOP;
    }

    pub mod CR {
        pub use crate::flash::CR::MER as MER1;
    }
}

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use tock_registers::interfaces::{ReadWriteable, Readable};
    use tock_registers::registers::InMemoryRegister;
    use tock_registers::LocalRegisterCopy;

    use super::*;
    use crate::test_util::{assert_components, assert_fields, mask};

    #[test]
    fn layout() {
        let offsets = [
            (offset_of!(FlashRegisters, acr), 0x00),
            (offset_of!(FlashRegisters, keyr), 0x04),
            (offset_of!(FlashRegisters, optkeyr), 0x08),
            (offset_of!(FlashRegisters, sr), 0x0C),
            (offset_of!(FlashRegisters, cr), 0x10),
            (offset_of!(FlashRegisters, optcr), 0x14),
            (offset_of!(FlashRegisters, optcr1), 0x18),
        ];
        for (actual, expected) in offsets {
            assert_eq!(actual, expected);
        }
        assert_eq!(size_of::<FlashRegisters>(), 0x1C);
        assert_eq!(FLASH.address(), 0x4002_3C00);
    }

    #[test]
    fn fields() {
        assert_eq!(assert_fields(32, &[
            mask(ACR::LATENCY),
            mask(ACR::PRFTEN),
            mask(ACR::ICEN),
            mask(ACR::DCEN),
            mask(ACR::ICRST),
            mask(ACR::DCRST),
        ]), 0x1F0F);
        assert_eq!(assert_fields(32, &[
            mask(SR::EOP),
            mask(SR::OPERR),
            mask(SR::WRPERR),
            mask(SR::PGAERR),
            mask(SR::PGPERR),
            mask(SR::PGSERR),
            mask(SR::RDERR),
            mask(SR::BSY),
        ]), 0x0001_01F3);
        assert_eq!(assert_fields(32, &[
            mask(CR::PG),
            mask(CR::SER),
            mask(CR::MER),
            mask(CR::SNB),
            mask(CR::PSIZE),
            mask(CR::MER2),
            mask(CR::STRT),
            mask(CR::EOPIE),
            mask(CR::ERRIE),
            mask(CR::LOCK),
        ]), 0x8301_83FF);
        assert_eq!(assert_fields(32, &[
            mask(OPTCR::OPTLOCK),
            mask(OPTCR::OPTSTRT),
            mask(OPTCR::BOR_LEV),
            mask(OPTCR::BFB2),
            mask(OPTCR::WDG_SW),
            mask(OPTCR::nRST_STOP),
            mask(OPTCR::nRST_STDBY),
            mask(OPTCR::RDP),
            mask(OPTCR::nWRP),
            mask(OPTCR::DB1M),
            mask(OPTCR::SPRMOD),
        ]), 0xCFFF_FFFF);
        assert_components(
            mask(CR::SNB),
            &[mask(CR::SNB_0), mask(CR::SNB_1), mask(CR::SNB_2), mask(CR::SNB_3), mask(CR::SNB_4)],
        );
        assert_components(
            mask(ACR::LATENCY),
            &[
                mask(ACR::LATENCY_0),
                mask(ACR::LATENCY_1),
                mask(ACR::LATENCY_2),
                mask(ACR::LATENCY_3),
            ],
        );
        assert_components(mask(CR::PSIZE), &[mask(CR::PSIZE_0), mask(CR::PSIZE_1)]);
        assert_components(mask(OPTCR::BOR_LEV), &[mask(OPTCR::BOR_LEV_0), mask(OPTCR::BOR_LEV_1)]);
        assert_eq!(mask(OPTCR1::nWRP), mask(OPTCR::nWRP));
    }

    #[test]
    fn option_reset_values() {
        let optcr = LocalRegisterCopy::<u32, OPTCR::Register>::new(OPTCR_RESET);
        assert_eq!(optcr.read_as_enum(OPTCR::RDP), Some(OPTCR::RDP::Value::Level0));
        assert_eq!(optcr.read_as_enum(OPTCR::BOR_LEV), Some(OPTCR::BOR_LEV::Value::Off));
        assert_eq!(optcr.read(OPTCR::nWRP), 0xFFF);
        assert!(optcr.is_set(OPTCR::OPTLOCK));
        assert_eq!(OPTCR1_RESET, mask(OPTCR1::nWRP));
    }

    #[test]
    fn keys() {
        assert_eq!(KEYR::KEY::Key1.value, 0x4567_0123);
        assert_eq!(KEYR::KEY::Key2.value, 0xCDEF_89AB);
        assert_eq!(OPTKEYR::OPTKEY::Key1.value, 0x0819_2A3B);
        assert_eq!(OPTKEYR::OPTKEY::Key2.value, 0x4C5D_6E7F);
    }

    #[test]
    fn sector_geometry() {
        assert_eq!(sector(0), Ok((0, 0x4000)));
        assert_eq!(sector(3), Ok((0xC000, 0x4000)));
        assert_eq!(sector(4), Ok((0x1_0000, 0x1_0000)));
        assert_eq!(sector(5), Ok((0x2_0000, 0x2_0000)));
        assert_eq!(sector(11), Ok((0xE_0000, 0x2_0000)));
        assert_eq!(sector(12), Ok((0x10_0000, 0x4000)));
        assert_eq!(sector(23), Ok((0x1E_0000, 0x2_0000)));
        assert_eq!(sector(24), Err(ErrorCode::INVAL));

        let mut end = 0;
        for n in 0..24 {
            let (offset, size) = sector(n).unwrap();
            assert_eq!(offset, end);
            end += size;
        }
        assert_eq!(end, memory_map::FLASH_END + 1 - memory_map::FLASH_BASE);
    }

    #[test]
    fn sector_erase_command() {
        assert_eq!(snb(11), Ok(11));
        assert_eq!(snb(12), Ok(0x10));
        assert_eq!(snb(23), Ok(0x1B));
        assert_eq!(snb(24), Err(ErrorCode::INVAL));

        let cr = InMemoryRegister::<u32, CR::Register>::new(0);
        cr.modify(CR::SER::SET + CR::SNB.val(snb(13).unwrap()) + CR::PSIZE::X32);
        assert_eq!(cr.get(), 0x2 | (0x11 << 3) | (2 << 8));
        assert!(cr.is_set(CR::SNB_4));
    }

    #[test]
    fn legacy_names() {
        assert_eq!(mask(legacy::SR::SOP), mask(SR::OPERR));
        assert_eq!(mask(legacy::CR::MER1), 1 << 2);
        assert_eq!(mask(CR::MER2), 1 << 15);
    }
}
