// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Chip-level configuration consumed by board and architecture code.

use crate::memory_map;
use crate::nvic;

/// Properties of a specific chip in the family.
pub trait ChipSpecs {
    /// Embedded flash size in bytes
    const FLASH_SIZE: usize;
    /// Contiguous SRAM1, SRAM2 and SRAM3 sizes in bytes
    const SRAM_SIZES: [usize; 3];
    /// Core coupled data RAM size in bytes
    const CCM_SIZE: usize = memory_map::CCMDATARAM_SIZE;
    const BACKUP_SRAM_SIZE: usize = memory_map::BKPSRAM_SIZE;
    /// Implemented priority bits per NVIC priority byte
    const NVIC_PRIO_BITS: u8 = 4;
    const HAS_FPU: bool = true;
    const HAS_MPU: bool = true;
    /// Cortex-M4 revision as `(major << 8) | minor`
    const CORE_REVISION: u16;
    const DEVICE_INTERRUPTS: usize;

    /// Exceptions plus device interrupts.
    const VECTOR_TABLE_LEN: usize = 16 + Self::DEVICE_INTERRUPTS;

    /// Total SRAM excluding CCM and backup SRAM.
    fn sram_size() -> usize {
        Self::SRAM_SIZES.iter().sum()
    }
}

pub enum Stm32f429Specs {}

impl ChipSpecs for Stm32f429Specs {
    const FLASH_SIZE: usize = memory_map::FLASH_END + 1 - memory_map::FLASH_BASE;
    const SRAM_SIZES: [usize; 3] = [
        memory_map::SRAM1_SIZE,
        memory_map::SRAM2_SIZE,
        memory_map::SRAM3_SIZE,
    ];
    // r0p1
    const CORE_REVISION: u16 = 0x0001;
    const DEVICE_INTERRUPTS: usize = nvic::DEVICE_INTERRUPTS;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stm32f429() {
        assert_eq!(Stm32f429Specs::FLASH_SIZE, 2 * 1024 * 1024);
        assert_eq!(Stm32f429Specs::sram_size(), 192 * 1024);
        assert_eq!(Stm32f429Specs::CCM_SIZE, 64 * 1024);
        assert_eq!(Stm32f429Specs::BACKUP_SRAM_SIZE, 4 * 1024);
        assert_eq!(Stm32f429Specs::NVIC_PRIO_BITS, 4);
        assert!(Stm32f429Specs::HAS_FPU);
        assert!(Stm32f429Specs::HAS_MPU);
        assert_eq!(Stm32f429Specs::DEVICE_INTERRUPTS, 91);
        assert_eq!(Stm32f429Specs::VECTOR_TABLE_LEN, nvic::VECTOR_TABLE_LEN);
    }

    #[test]
    fn sram_is_contiguous() {
        assert_eq!(
            memory_map::SRAM1_BASE + Stm32f429Specs::SRAM_SIZES[0],
            memory_map::SRAM2_BASE
        );
        assert_eq!(
            memory_map::SRAM2_BASE + Stm32f429Specs::SRAM_SIZES[1],
            memory_map::SRAM3_BASE
        );
    }

    #[test]
    fn every_device_interrupt_fits_the_vector_table() {
        for interrupt in nvic::Interrupt::ALL {
            assert!(interrupt.vector_slot() < Stm32f429Specs::VECTOR_TABLE_LEN);
        }
    }
}
