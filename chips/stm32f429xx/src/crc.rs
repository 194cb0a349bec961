// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! CRC calculation unit.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::static_ref::StaticRef;

/// Generator polynomial of the unit, CRC-32/MPEG-2.
pub const POLYNOMIAL: u32 = 0x04C1_1DB7;

/// Value of DR after a reset of the unit.
pub const DR_RESET: u32 = 0xFFFF_FFFF;

register_structs! {
    pub CrcRegisters {
        /// data register
        (0x00 => pub dr: ReadWrite<u32, DR::Register>),
        /// independent data register
        (0x04 => pub idr: ReadWrite<u8, IDR::Register>),
        (0x05 => _reserved0),
        /// control register
        (0x08 => pub cr: ReadWrite<u32, CR::Register>),
        (0x0C => @END),
    }
}

register_bitfields![u32,
    pub DR [
        DR OFFSET(0) NUMBITS(32) []
    ],
    pub CR [
        /// Resets the unit and loads DR with 0xFFFF_FFFF
        RESET OFFSET(0) NUMBITS(1) []
    ]
];

register_bitfields![u8,
    pub IDR [
        IDR OFFSET(0) NUMBITS(8) []
    ]
];

pub(crate) const CRC: StaticRef<CrcRegisters> =
    unsafe { StaticRef::new(memory_map::CRC_BASE as *const CrcRegisters) };
