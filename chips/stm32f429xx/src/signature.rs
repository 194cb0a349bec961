// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Device electronic signature.
//!
//! Factory programmed, read-only words in system memory: the 96-bit unique
//! device identifier, the size of the embedded flash and the package code.

use tock_registers::interfaces::Readable;
use tock_registers::registers::ReadOnly;
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::static_ref::StaticRef;

register_structs! {
    /// Unique device identifier
    pub UidRegisters {
        (0x0 => pub uid: [ReadOnly<u32>; 3]),
        (0xC => @END),
    },

    pub FlashSizeRegisters {
        /// Flash size in KiB
        (0x0 => pub f_size: ReadOnly<u16, F_SIZE::Register>),
        (0x2 => @END),
    },

    pub PackageRegisters {
        (0x0 => pub pkg: ReadOnly<u16, PKG::Register>),
        (0x2 => @END),
    }
}

register_bitfields![u16,
    pub F_SIZE [
        F_SIZE OFFSET(0) NUMBITS(16) []
    ],
    pub PKG [
        PKG OFFSET(8) NUMBITS(3) [
            Lqfp100 = 0,
            Lqfp144 = 1,
            Lqfp176Ufbga176 = 2,
            Wlcsp143 = 3,
            Tfbga216 = 4
        ]
    ]
];

/// Snapshot of the unique device identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Uid(pub [u32; 3]);

impl Uid {
    /// X coordinate on the wafer.
    pub const fn x(&self) -> u16 {
        self.0[0] as u16
    }

    /// Y coordinate on the wafer.
    pub const fn y(&self) -> u16 {
        (self.0[0] >> 16) as u16
    }

    pub const fn wafer(&self) -> u8 {
        self.0[1] as u8
    }

    /// Lot number, seven ASCII characters.
    pub const fn lot(&self) -> [u8; 7] {
        let hi = self.0[1].to_le_bytes();
        let lo = self.0[2].to_le_bytes();
        [hi[1], hi[2], hi[3], lo[0], lo[1], lo[2], lo[3]]
    }
}

impl core::fmt::Display for Uid {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:08x}{:08x}{:08x}", self.0[2], self.0[1], self.0[0])
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Uid {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u32:08x}{=u32:08x}{=u32:08x}", self.0[2], self.0[1], self.0[0]);
    }
}

impl UidRegisters {
    pub fn read(&self) -> Uid {
        Uid([self.uid[0].get(), self.uid[1].get(), self.uid[2].get()])
    }
}

/// Flash size in bytes from the raw `F_SIZE` value.
pub const fn flash_size_bytes(f_size: u16) -> usize {
    f_size as usize * 1024
}

impl FlashSizeRegisters {
    pub fn bytes(&self) -> usize {
        flash_size_bytes(self.f_size.read(F_SIZE::F_SIZE))
    }
}

pub(crate) const UID: StaticRef<UidRegisters> =
    unsafe { StaticRef::new(memory_map::UID_BASE as *const UidRegisters) };
pub(crate) const FLASH_SIZE: StaticRef<FlashSizeRegisters> =
    unsafe { StaticRef::new(memory_map::FLASHSIZE_BASE as *const FlashSizeRegisters) };
pub(crate) const PACKAGE: StaticRef<PackageRegisters> =
    unsafe { StaticRef::new(memory_map::PACKAGE_BASE as *const PackageRegisters) };

#[cfg(test)]
mod tests {
    use core::mem::size_of;

    use tock_registers::LocalRegisterCopy;

    use super::*;
    use crate::test_util::mask16;

    #[test]
    fn layout() {
        assert_eq!(size_of::<UidRegisters>(), 12);
        assert_eq!(size_of::<FlashSizeRegisters>(), 2);
        assert_eq!(size_of::<PackageRegisters>(), 2);
        assert_eq!(UID.address(), 0x1FFF_7A10);
        assert_eq!(FLASH_SIZE.address(), 0x1FFF_7A22);
        assert_eq!(PACKAGE.address(), 0x1FFF_7BF0);
        // the flash size word follows the identifier
        assert!(UID.address() + size_of::<UidRegisters>() <= FLASH_SIZE.address());
    }

    #[test]
    fn fields() {
        assert_eq!(mask16(F_SIZE::F_SIZE), 0xFFFF);
        assert_eq!(mask16(PKG::PKG), 0x0700);
    }

    #[test]
    fn uid_decoding() {
        // lot "AB12345" on wafer 7 at (0x002A, 0x0031)
        let uid = Uid([0x0031_002A, 0x3142_4107, 0x3534_3332]);
        assert_eq!(uid.x(), 0x002A);
        assert_eq!(uid.y(), 0x0031);
        assert_eq!(uid.wafer(), 7);
        assert_eq!(&uid.lot(), b"AB12345");
    }

    #[test]
    fn flash_size() {
        assert_eq!(flash_size_bytes(2048), 2 * 1024 * 1024);
        assert_eq!(flash_size_bytes(1024), 1024 * 1024);
    }

    #[test]
    fn package_code() {
        let pkg = LocalRegisterCopy::<u16, PKG::Register>::new(0x0200);
        assert_eq!(pkg.read_as_enum(PKG::PKG), Some(PKG::PKG::Value::Lqfp176Ufbga176));
        let pkg = LocalRegisterCopy::<u16, PKG::Register>::new(0x0700);
        assert_eq!(pkg.read_as_enum::<PKG::PKG::Value>(PKG::PKG), None);
    }
}
