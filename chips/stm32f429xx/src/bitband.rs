// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Bit-band aliasing.
//!
//! The first MiB of SRAM and of the peripheral region each have a 32 MiB
//! alias region in which every word maps to one bit of the target:
//!
//! ```text
//! alias = alias_base + (address - region_base) * 32 + bit * 4
//! ```
//!
//! Writing 0 or 1 to the alias word clears or sets the bit without a
//! read-modify-write of the target.

use core::ptr;

use crate::errorcode::ErrorCode;

/// Size of each bit-band addressable region.
pub const REGION_SIZE: usize = 0x10_0000;

const SRAM_REGION: usize = 0x2000_0000;
const SRAM_ALIAS: usize = 0x2200_0000;
const PERIPH_REGION: usize = 0x4000_0000;
const PERIPH_ALIAS: usize = 0x4200_0000;

const fn alias_in(
    region: usize,
    alias: usize,
    address: usize,
    bit: u8,
) -> Result<usize, ErrorCode> {
    if bit >= 32 {
        return Err(ErrorCode::INVAL);
    }
    if address < region || address - region >= REGION_SIZE {
        return Err(ErrorCode::SIZE);
    }
    let offset = address - region;
    // the addressed byte of a word may still run past the region
    if offset + (bit as usize) / 8 >= REGION_SIZE {
        return Err(ErrorCode::SIZE);
    }
    Ok(alias + offset * 32 + (bit as usize) * 4)
}

/// Alias word of `bit` of the word at `address`, which must lie in the
/// bit-band region of SRAM.
pub const fn sram_alias(address: usize, bit: u8) -> Result<usize, ErrorCode> {
    alias_in(SRAM_REGION, SRAM_ALIAS, address, bit)
}

/// Alias word of `bit` of the word at `address`, which must lie in the
/// bit-band region of the peripheral space.
pub const fn peripheral_alias(address: usize, bit: u8) -> Result<usize, ErrorCode> {
    alias_in(PERIPH_REGION, PERIPH_ALIAS, address, bit)
}

/// Alias word of `bit` of the word at `address` in either region.
///
/// Returns `SIZE` when `address` is not bit-band addressable and `INVAL`
/// for a bit index of 32 or more.
pub const fn alias_address(address: usize, bit: u8) -> Result<usize, ErrorCode> {
    if address >= PERIPH_REGION {
        peripheral_alias(address, bit)
    } else {
        sram_alias(address, bit)
    }
}

/// Inverse of [`alias_address`]: the word-aligned target address and bit
/// index an alias word controls.
pub const fn target(alias: usize) -> Result<(usize, u8), ErrorCode> {
    let (region, offset) = if alias >= PERIPH_ALIAS && alias < PERIPH_ALIAS + REGION_SIZE * 32 {
        (PERIPH_REGION, alias - PERIPH_ALIAS)
    } else if alias >= SRAM_ALIAS && alias < SRAM_ALIAS + REGION_SIZE * 32 {
        (SRAM_REGION, alias - SRAM_ALIAS)
    } else {
        return Err(ErrorCode::SIZE);
    };
    if offset % 4 != 0 {
        return Err(ErrorCode::INVAL);
    }
    let byte = offset / 32;
    let bit_in_byte = (offset / 4) % 8;
    let word = byte & !3;
    Ok((region + word, ((byte & 3) * 8 + bit_in_byte) as u8))
}

/// Write one bit of the register at `register` through its alias word.
///
/// ## Safety
///
/// `register` must point at a bit-band addressable location that is valid
/// to write, and the caller must own the peripheral it belongs to.
pub unsafe fn write<T>(register: *const T, bit: u8, set: bool) -> Result<(), ErrorCode> {
    let alias = alias_address(register as usize, bit)?;
    ptr::write_volatile(alias as *mut u32, u32::from(set));
    Ok(())
}

/// ## Safety
///
/// Same requirements as [`write`].
pub unsafe fn set<T>(register: *const T, bit: u8) -> Result<(), ErrorCode> {
    write(register, bit, true)
}

/// ## Safety
///
/// Same requirements as [`write`].
pub unsafe fn clear<T>(register: *const T, bit: u8) -> Result<(), ErrorCode> {
    write(register, bit, false)
}

/// Read one bit of the register at `register` through its alias word.
///
/// ## Safety
///
/// `register` must point at a bit-band addressable location that is valid
/// to read and has no read side effects.
pub unsafe fn read<T>(register: *const T, bit: u8) -> Result<bool, ErrorCode> {
    let alias = alias_address(register as usize, bit)?;
    Ok(ptr::read_volatile(alias as *const u32) & 1 != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_map;

    #[test]
    fn transform_matches_reference_manual_example() {
        // RM0090 2.3.3: bit 2 of 0x2000_0300 is aliased at 0x2200_6008.
        assert_eq!(sram_alias(0x2000_0300, 2), Ok(0x2200_6008));
        // and bit 7 of 0x4001_0C00 at 0x4221_801C.
        assert_eq!(peripheral_alias(0x4001_0C00, 7), Ok(0x4221_801C));
    }

    #[test]
    fn transform_round_trips() {
        let targets = [
            (memory_map::SRAM1_BASE, 0),
            (memory_map::SRAM2_BASE + 0x40, 31),
            (memory_map::SRAM3_BASE + 0xFFFC, 17),
            (memory_map::RCC_BASE + 0x30, 0),
            (memory_map::GPIOK_BASE + 0x14, 15),
            (memory_map::BKPSRAM_BASE + 0xFFC, 9),
        ];
        for (address, bit) in targets {
            let alias = alias_address(address, bit).unwrap();
            assert_eq!(target(alias), Ok((address, bit)));
        }
    }

    #[test]
    fn every_alias_word_inverts() {
        let base = memory_map::PERIPH_BB_BASE + 0x1000;
        for i in 0..64 {
            let alias = base + 4 * i;
            let (address, bit) = target(alias).unwrap();
            assert_eq!(alias_address(address, bit), Ok(alias));
        }
    }

    #[test]
    fn rejects_out_of_region_addresses() {
        assert_eq!(alias_address(memory_map::CCMDATARAM_BASE, 0), Err(ErrorCode::SIZE));
        assert_eq!(alias_address(memory_map::DMA2D_BASE, 0), Ok(0x4256_0000));
        assert_eq!(alias_address(memory_map::USB_OTG_FS_PERIPH_BASE, 0), Err(ErrorCode::SIZE));
        assert_eq!(sram_alias(memory_map::SRAM1_BASE + REGION_SIZE, 0), Err(ErrorCode::SIZE));
        assert_eq!(sram_alias(memory_map::SRAM1_BASE, 32), Err(ErrorCode::INVAL));
        assert_eq!(target(0x2200_0002), Err(ErrorCode::INVAL));
        assert_eq!(target(0x2400_0000), Err(ErrorCode::SIZE));
    }

    #[test]
    fn rejects_addresses_past_the_region_without_overflow() {
        assert_eq!(alias_address(usize::MAX, 8), Err(ErrorCode::SIZE));
        assert_eq!(alias_address(usize::MAX, 0), Err(ErrorCode::SIZE));
        assert_eq!(sram_alias(usize::MAX - 2, 31), Err(ErrorCode::SIZE));
        let end = PERIPH_REGION + REGION_SIZE;
        assert_eq!(peripheral_alias(end, 0), Err(ErrorCode::SIZE));
        assert_eq!(peripheral_alias(end - 1, 7), Ok(PERIPH_ALIAS + REGION_SIZE * 32 - 4));
        // bit 8 lands in the byte after the region
        assert_eq!(peripheral_alias(end - 1, 8), Err(ErrorCode::SIZE));
    }
}
