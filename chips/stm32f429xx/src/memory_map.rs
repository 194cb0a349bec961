// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! STM32F429 address map.
//!
//! Every peripheral address is built from its bus domain base, so a change to
//! a domain base moves every peripheral on it. Bit-band alias bases are
//! computed with [`bitband::alias_address`](crate::bitband::alias_address).

use core::fmt;

use crate::bitband;

/// Bus domain a register block is reached through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bus {
    Ahb1,
    Ahb2,
    Ahb3,
    Apb1,
    Apb2,
    /// Cortex-M4 private peripheral bus
    Ppb,
}

impl fmt::Display for Bus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Bus::Ahb1 => "AHB1",
            Bus::Ahb2 => "AHB2",
            Bus::Ahb3 => "AHB3",
            Bus::Apb1 => "APB1",
            Bus::Apb2 => "APB2",
            Bus::Ppb => "PPB",
        };
        f.write_str(name)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Bus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u8}", *self as u8);
    }
}

// Memories

/// Up to 2 MiB of flash in two banks
pub const FLASH_BASE: usize = 0x0800_0000;
pub const FLASH_END: usize = 0x081F_FFFF;
/// 64 KiB core coupled data RAM, not bit-band addressable
pub const CCMDATARAM_BASE: usize = 0x1000_0000;
pub const CCMDATARAM_END: usize = 0x1000_FFFF;
/// 112 KiB
pub const SRAM1_BASE: usize = 0x2000_0000;
/// 16 KiB
pub const SRAM2_BASE: usize = SRAM1_BASE + 0x1_C000;
/// 64 KiB
pub const SRAM3_BASE: usize = SRAM2_BASE + 0x4000;
pub const SRAM_BASE: usize = SRAM1_BASE;
pub const SRAM1_SIZE: usize = 112 * 1024;
pub const SRAM2_SIZE: usize = 16 * 1024;
pub const SRAM3_SIZE: usize = 64 * 1024;
pub const CCMDATARAM_SIZE: usize = 64 * 1024;
pub const BKPSRAM_SIZE: usize = 4 * 1024;
pub const FLASH_OTP_BASE: usize = 0x1FFF_7800;
pub const FLASH_OTP_END: usize = 0x1FFF_7A0F;

/// Start of the peripheral region
pub const PERIPH_BASE: usize = 0x4000_0000;

// Bit-band alias bases

pub const SRAM_BB_BASE: usize = 0x2200_0000;
pub const PERIPH_BB_BASE: usize = 0x4200_0000;
pub const SRAM1_BB_BASE: usize = alias_base(SRAM1_BASE);
pub const SRAM2_BB_BASE: usize = alias_base(SRAM2_BASE);
pub const SRAM3_BB_BASE: usize = alias_base(SRAM3_BASE);
pub const BKPSRAM_BB_BASE: usize = alias_base(BKPSRAM_BASE);

// Only evaluated in constant context: a bad target fails the build.
const fn alias_base(address: usize) -> usize {
    match bitband::alias_address(address, 0) {
        Ok(alias) => alias,
        Err(_) => panic!("address is not bit-band addressable"),
    }
}

// FMC memory banks

/// NOR/PSRAM/SRAM bank 1, four 64 MiB sub-banks
pub const FMC_BANK1_BASE: usize = 0x6000_0000;
pub const FMC_BANK1_1: usize = FMC_BANK1_BASE;
pub const FMC_BANK1_2: usize = FMC_BANK1_BASE + 0x0400_0000;
pub const FMC_BANK1_3: usize = FMC_BANK1_BASE + 0x0800_0000;
pub const FMC_BANK1_4: usize = FMC_BANK1_BASE + 0x0C00_0000;
/// NAND bank 2
pub const FMC_BANK2_BASE: usize = 0x7000_0000;
/// NAND bank 3
pub const FMC_BANK3_BASE: usize = 0x8000_0000;
/// PC Card bank 4
pub const FMC_BANK4_BASE: usize = 0x9000_0000;
pub const FMC_SDRAM_BANK1_BASE: usize = 0xC000_0000;
pub const FMC_SDRAM_BANK2_BASE: usize = 0xD000_0000;

// Bus domains

pub const APB1PERIPH_BASE: usize = PERIPH_BASE;
pub const APB2PERIPH_BASE: usize = PERIPH_BASE + 0x0001_0000;
pub const AHB1PERIPH_BASE: usize = PERIPH_BASE + 0x0002_0000;
pub const AHB2PERIPH_BASE: usize = PERIPH_BASE + 0x1000_0000;
/// FMC control registers on AHB3
pub const FMC_R_BASE: usize = 0xA000_0000;

// APB1 peripherals

pub const TIM2_BASE: usize = APB1PERIPH_BASE + 0x0000;
pub const TIM3_BASE: usize = APB1PERIPH_BASE + 0x0400;
pub const TIM4_BASE: usize = APB1PERIPH_BASE + 0x0800;
pub const TIM5_BASE: usize = APB1PERIPH_BASE + 0x0C00;
pub const TIM6_BASE: usize = APB1PERIPH_BASE + 0x1000;
pub const TIM7_BASE: usize = APB1PERIPH_BASE + 0x1400;
pub const TIM12_BASE: usize = APB1PERIPH_BASE + 0x1800;
pub const TIM13_BASE: usize = APB1PERIPH_BASE + 0x1C00;
pub const TIM14_BASE: usize = APB1PERIPH_BASE + 0x2000;
pub const RTC_BASE: usize = APB1PERIPH_BASE + 0x2800;
pub const WWDG_BASE: usize = APB1PERIPH_BASE + 0x2C00;
pub const IWDG_BASE: usize = APB1PERIPH_BASE + 0x3000;
pub const I2S2EXT_BASE: usize = APB1PERIPH_BASE + 0x3400;
pub const SPI2_BASE: usize = APB1PERIPH_BASE + 0x3800;
pub const SPI3_BASE: usize = APB1PERIPH_BASE + 0x3C00;
pub const I2S3EXT_BASE: usize = APB1PERIPH_BASE + 0x4000;
pub const USART2_BASE: usize = APB1PERIPH_BASE + 0x4400;
pub const USART3_BASE: usize = APB1PERIPH_BASE + 0x4800;
pub const UART4_BASE: usize = APB1PERIPH_BASE + 0x4C00;
pub const UART5_BASE: usize = APB1PERIPH_BASE + 0x5000;
pub const I2C1_BASE: usize = APB1PERIPH_BASE + 0x5400;
pub const I2C2_BASE: usize = APB1PERIPH_BASE + 0x5800;
pub const I2C3_BASE: usize = APB1PERIPH_BASE + 0x5C00;
pub const CAN1_BASE: usize = APB1PERIPH_BASE + 0x6400;
pub const CAN2_BASE: usize = APB1PERIPH_BASE + 0x6800;
pub const PWR_BASE: usize = APB1PERIPH_BASE + 0x7000;
pub const DAC_BASE: usize = APB1PERIPH_BASE + 0x7400;
pub const UART7_BASE: usize = APB1PERIPH_BASE + 0x7800;
pub const UART8_BASE: usize = APB1PERIPH_BASE + 0x7C00;

// APB2 peripherals

pub const TIM1_BASE: usize = APB2PERIPH_BASE + 0x0000;
pub const TIM8_BASE: usize = APB2PERIPH_BASE + 0x0400;
pub const USART1_BASE: usize = APB2PERIPH_BASE + 0x1000;
pub const USART6_BASE: usize = APB2PERIPH_BASE + 0x1400;
pub const ADC1_BASE: usize = APB2PERIPH_BASE + 0x2000;
pub const ADC2_BASE: usize = APB2PERIPH_BASE + 0x2100;
pub const ADC3_BASE: usize = APB2PERIPH_BASE + 0x2200;
pub const ADC123_COMMON_BASE: usize = APB2PERIPH_BASE + 0x2300;
/// Legacy name of the ADC common block
pub const ADC_BASE: usize = ADC123_COMMON_BASE;
pub const SDIO_BASE: usize = APB2PERIPH_BASE + 0x2C00;
pub const SPI1_BASE: usize = APB2PERIPH_BASE + 0x3000;
pub const SPI4_BASE: usize = APB2PERIPH_BASE + 0x3400;
pub const SYSCFG_BASE: usize = APB2PERIPH_BASE + 0x3800;
pub const EXTI_BASE: usize = APB2PERIPH_BASE + 0x3C00;
pub const TIM9_BASE: usize = APB2PERIPH_BASE + 0x4000;
pub const TIM10_BASE: usize = APB2PERIPH_BASE + 0x4400;
pub const TIM11_BASE: usize = APB2PERIPH_BASE + 0x4800;
pub const SPI5_BASE: usize = APB2PERIPH_BASE + 0x5000;
pub const SPI6_BASE: usize = APB2PERIPH_BASE + 0x5400;
pub const SAI1_BASE: usize = APB2PERIPH_BASE + 0x5800;
pub const SAI1_BLOCK_A_BASE: usize = SAI1_BASE + 0x004;
pub const SAI1_BLOCK_B_BASE: usize = SAI1_BASE + 0x024;
pub const LTDC_BASE: usize = APB2PERIPH_BASE + 0x6800;
pub const LTDC_LAYER1_BASE: usize = LTDC_BASE + 0x84;
pub const LTDC_LAYER2_BASE: usize = LTDC_BASE + 0x104;

// AHB1 peripherals

pub const GPIOA_BASE: usize = AHB1PERIPH_BASE + 0x0000;
pub const GPIOB_BASE: usize = AHB1PERIPH_BASE + 0x0400;
pub const GPIOC_BASE: usize = AHB1PERIPH_BASE + 0x0800;
pub const GPIOD_BASE: usize = AHB1PERIPH_BASE + 0x0C00;
pub const GPIOE_BASE: usize = AHB1PERIPH_BASE + 0x1000;
pub const GPIOF_BASE: usize = AHB1PERIPH_BASE + 0x1400;
pub const GPIOG_BASE: usize = AHB1PERIPH_BASE + 0x1800;
pub const GPIOH_BASE: usize = AHB1PERIPH_BASE + 0x1C00;
pub const GPIOI_BASE: usize = AHB1PERIPH_BASE + 0x2000;
pub const GPIOJ_BASE: usize = AHB1PERIPH_BASE + 0x2400;
pub const GPIOK_BASE: usize = AHB1PERIPH_BASE + 0x2800;
pub const CRC_BASE: usize = AHB1PERIPH_BASE + 0x3000;
pub const RCC_BASE: usize = AHB1PERIPH_BASE + 0x3800;
pub const FLASH_R_BASE: usize = AHB1PERIPH_BASE + 0x3C00;
/// 4 KiB battery backed SRAM
pub const BKPSRAM_BASE: usize = AHB1PERIPH_BASE + 0x4000;
pub const DMA1_BASE: usize = AHB1PERIPH_BASE + 0x6000;
pub const DMA2_BASE: usize = AHB1PERIPH_BASE + 0x6400;
pub const ETH_BASE: usize = AHB1PERIPH_BASE + 0x8000;
pub const ETH_MAC_BASE: usize = ETH_BASE;
pub const ETH_MMC_BASE: usize = ETH_BASE + 0x0100;
pub const ETH_PTP_BASE: usize = ETH_BASE + 0x0700;
pub const ETH_DMA_BASE: usize = ETH_BASE + 0x1000;
pub const DMA2D_BASE: usize = AHB1PERIPH_BASE + 0xB000;
pub const USB_OTG_HS_PERIPH_BASE: usize = PERIPH_BASE + 0x0004_0000;

// AHB2 peripherals

pub const USB_OTG_FS_PERIPH_BASE: usize = AHB2PERIPH_BASE + 0x0000_0000;
pub const DCMI_BASE: usize = AHB2PERIPH_BASE + 0x0005_0000;
pub const RNG_BASE: usize = AHB2PERIPH_BASE + 0x0006_0800;

// AHB3 peripherals

pub const FMC_BANK1_R_BASE: usize = FMC_R_BASE + 0x0000;
pub const FMC_BANK1E_R_BASE: usize = FMC_R_BASE + 0x0104;
pub const FMC_BANK2_3_R_BASE: usize = FMC_R_BASE + 0x0060;
pub const FMC_BANK4_R_BASE: usize = FMC_R_BASE + 0x00A0;
pub const FMC_BANK5_6_R_BASE: usize = FMC_R_BASE + 0x0140;

// Cortex-M4 private peripheral bus

pub const DBGMCU_BASE: usize = 0xE004_2000;

// USB OTG register layout inside each core

pub const USB_OTG_GLOBAL_BASE: usize = 0x0000;
pub const USB_OTG_HOST_BASE: usize = 0x0400;
pub const USB_OTG_HOST_PORT_BASE: usize = 0x0440;
pub const USB_OTG_HOST_CHANNEL_BASE: usize = 0x0500;
pub const USB_OTG_HOST_CHANNEL_SIZE: usize = 0x0020;
pub const USB_OTG_DEVICE_BASE: usize = 0x0800;
pub const USB_OTG_IN_ENDPOINT_BASE: usize = 0x0900;
pub const USB_OTG_OUT_ENDPOINT_BASE: usize = 0x0B00;
pub const USB_OTG_EP_REG_SIZE: usize = 0x0020;
pub const USB_OTG_PCGCCTL_BASE: usize = 0x0E00;
pub const USB_OTG_FIFO_BASE: usize = 0x1000;
pub const USB_OTG_FIFO_SIZE: usize = 0x1000;

// Device electronic signature

pub const UID_BASE: usize = 0x1FFF_7A10;
pub const FLASHSIZE_BASE: usize = 0x1FFF_7A22;
pub const PACKAGE_BASE: usize = 0x1FFF_7BF0;

/// The address range a register block or memory occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub name: &'static str,
    pub base: usize,
    pub size: usize,
    pub bus: Bus,
}

impl Window {
    pub const fn new(name: &'static str, base: usize, size: usize, bus: Bus) -> Window {
        Window {
            name,
            base,
            size,
            bus,
        }
    }

    /// One past the last byte of the window.
    pub const fn end(&self) -> usize {
        self.base + self.size
    }

    pub const fn contains(&self, address: usize) -> bool {
        address >= self.base && address < self.end()
    }

    pub const fn overlaps(&self, other: &Window) -> bool {
        self.base < other.end() && other.base < self.end()
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} [{:#010x}, {:#010x}) on {}",
            self.name,
            self.base,
            self.end(),
            self.bus
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Window {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "{=str} [{=usize:#x}, {=usize:#x})",
            self.name,
            self.base,
            self.end()
        );
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Pairs of windows that the silicon deliberately places on top of each
/// other.
///
/// The FMC bank 1 sub-bank 1 window and SDRAM bank 1 are swapped into each
/// other's place by `SYSCFG_MEMRMP.SWP_FMC`; their fixed windows never
/// overlap, so no register block needs an entry today.
pub const INTENTIONAL_ALIASES: &[(&str, &str)] = &[];

const fn is_intentional_alias(first: &Window, second: &Window) -> bool {
    let mut index = 0;
    while index < INTENTIONAL_ALIASES.len() {
        let (left, right) = INTENTIONAL_ALIASES[index];
        if (str_eq(first.name, left) && str_eq(second.name, right))
            || (str_eq(first.name, right) && str_eq(second.name, left))
        {
            return true;
        }
        index += 1;
    }
    false
}

/// Returns the first pair of windows in `windows` that overlap without being
/// listed in [`INTENTIONAL_ALIASES`].
pub const fn first_collision(windows: &[Window]) -> Option<(Window, Window)> {
    let mut i = 0;
    while i < windows.len() {
        let mut j = i + 1;
        while j < windows.len() {
            if windows[i].overlaps(&windows[j]) && !is_intentional_alias(&windows[i], &windows[j]) {
                return Some((windows[i], windows[j]));
            }
            j += 1;
        }
        i += 1;
    }
    None
}

/// Memories and bit-band alias regions.
pub const MEMORY_REGIONS: [Window; 10] = [
    Window::new("FLASH", FLASH_BASE, FLASH_END + 1 - FLASH_BASE, Bus::Ahb1),
    Window::new("CCMDATARAM", CCMDATARAM_BASE, CCMDATARAM_SIZE, Bus::Ahb1),
    Window::new("OTP", FLASH_OTP_BASE, FLASH_OTP_END + 1 - FLASH_OTP_BASE, Bus::Ahb1),
    Window::new("SRAM1", SRAM1_BASE, SRAM1_SIZE, Bus::Ahb1),
    Window::new("SRAM2", SRAM2_BASE, SRAM2_SIZE, Bus::Ahb1),
    Window::new("SRAM3", SRAM3_BASE, SRAM3_SIZE, Bus::Ahb1),
    Window::new("SRAM_BB", SRAM_BB_BASE, bitband::REGION_SIZE * 32, Bus::Ahb1),
    Window::new("BKPSRAM", BKPSRAM_BASE, BKPSRAM_SIZE, Bus::Ahb1),
    Window::new("PERIPH_BB", PERIPH_BB_BASE, bitband::REGION_SIZE * 32, Bus::Ahb1),
    Window::new("FMC_SDRAM", FMC_SDRAM_BANK1_BASE, 0x2000_0000, Bus::Ahb3),
];

const _: () = assert!(first_collision(&MEMORY_REGIONS).is_none());
