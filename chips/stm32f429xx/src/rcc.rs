// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Reset and clock control.
//!
//! Besides the clock tree (HSI, HSE, the main PLL and the PLLI2S and PLLSAI
//! PLLs), RCC holds one reset, one enable and one low-power enable bit per
//! peripheral, grouped by bus.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::static_ref::StaticRef;

/// HSI on and ready, trimmed to the middle of its range.
pub const CR_RESET: u32 = 0x0000_0083;
/// PLLM = 16, PLLN = 192, PLLP = 2, PLLQ = 4, bit 29 reserved and set.
pub const PLLCFGR_RESET: u32 = 0x2400_3010;
pub const PLLI2SCFGR_RESET: u32 = 0x2000_3000;
pub const PLLSAICFGR_RESET: u32 = 0x2400_3000;
/// Reset flags after a power-on reset.
pub const CSR_RESET: u32 = 0x0E00_0000;

/// Internal RC oscillator frequency.
pub const HSI_FREQUENCY_HZ: u32 = 16_000_000;
pub const LSI_FREQUENCY_HZ: u32 = 32_000;

register_structs! {
    pub RccRegisters {
        /// clock control register
        (0x00 => pub cr: ReadWrite<u32, CR::Register>),
        /// PLL configuration register
        (0x04 => pub pllcfgr: ReadWrite<u32, PLLCFGR::Register>),
        /// clock configuration register
        (0x08 => pub cfgr: ReadWrite<u32, CFGR::Register>),
        /// clock interrupt register
        (0x0C => pub cir: ReadWrite<u32, CIR::Register>),
        /// AHB1 peripheral reset register
        (0x10 => pub ahb1rstr: ReadWrite<u32, AHB1RSTR::Register>),
        /// AHB2 peripheral reset register
        (0x14 => pub ahb2rstr: ReadWrite<u32, AHB2RSTR::Register>),
        /// AHB3 peripheral reset register
        (0x18 => pub ahb3rstr: ReadWrite<u32, AHB3RSTR::Register>),
        (0x1C => _reserved0),
        /// APB1 peripheral reset register
        (0x20 => pub apb1rstr: ReadWrite<u32, APB1RSTR::Register>),
        /// APB2 peripheral reset register
        (0x24 => pub apb2rstr: ReadWrite<u32, APB2RSTR::Register>),
        (0x28 => _reserved1),
        /// AHB1 peripheral clock enable register
        (0x30 => pub ahb1enr: ReadWrite<u32, AHB1ENR::Register>),
        /// AHB2 peripheral clock enable register
        (0x34 => pub ahb2enr: ReadWrite<u32, AHB2ENR::Register>),
        /// AHB3 peripheral clock enable register
        (0x38 => pub ahb3enr: ReadWrite<u32, AHB3ENR::Register>),
        (0x3C => _reserved2),
        /// APB1 peripheral clock enable register
        (0x40 => pub apb1enr: ReadWrite<u32, APB1ENR::Register>),
        /// APB2 peripheral clock enable register
        (0x44 => pub apb2enr: ReadWrite<u32, APB2ENR::Register>),
        (0x48 => _reserved3),
        /// AHB1 peripheral clock enable in low power mode register
        (0x50 => pub ahb1lpenr: ReadWrite<u32, AHB1LPENR::Register>),
        /// AHB2 peripheral clock enable in low power mode register
        (0x54 => pub ahb2lpenr: ReadWrite<u32, AHB2LPENR::Register>),
        /// AHB3 peripheral clock enable in low power mode register
        (0x58 => pub ahb3lpenr: ReadWrite<u32, AHB3LPENR::Register>),
        (0x5C => _reserved4),
        /// APB1 peripheral clock enable in low power mode register
        (0x60 => pub apb1lpenr: ReadWrite<u32, APB1LPENR::Register>),
        /// APB2 peripheral clock enable in low power mode register
        (0x64 => pub apb2lpenr: ReadWrite<u32, APB2LPENR::Register>),
        (0x68 => _reserved5),
        /// backup domain control register
        (0x70 => pub bdcr: ReadWrite<u32, BDCR::Register>),
        /// clock control and status register
        (0x74 => pub csr: ReadWrite<u32, CSR::Register>),
        (0x78 => _reserved6),
        /// spread spectrum clock generation register
        (0x80 => pub sscgr: ReadWrite<u32, SSCGR::Register>),
        /// PLLI2S configuration register
        (0x84 => pub plli2scfgr: ReadWrite<u32, PLLI2SCFGR::Register>),
        /// PLLSAI configuration register
        (0x88 => pub pllsaicfgr: ReadWrite<u32, PLLSAICFGR::Register>),
        /// dedicated clocks configuration register
        (0x8C => pub dckcfgr: ReadWrite<u32, DCKCFGR::Register>),
        (0x90 => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Internal high-speed clock enable
        HSION OFFSET(0) NUMBITS(1) [],
        /// Internal high-speed clock ready flag
        HSIRDY OFFSET(1) NUMBITS(1) [],
        /// Internal high-speed clock trimming
        HSITRIM OFFSET(3) NUMBITS(5) [],
        /// Internal high-speed clock calibration
        HSICAL OFFSET(8) NUMBITS(8) [],
        /// HSE clock enable
        HSEON OFFSET(16) NUMBITS(1) [],
        /// HSE clock ready flag
        HSERDY OFFSET(17) NUMBITS(1) [],
        /// HSE clock bypass
        HSEBYP OFFSET(18) NUMBITS(1) [],
        /// Clock security system enable
        CSSON OFFSET(19) NUMBITS(1) [],
        /// Main PLL enable
        PLLON OFFSET(24) NUMBITS(1) [],
        /// Main PLL clock ready flag
        PLLRDY OFFSET(25) NUMBITS(1) [],
        /// PLLI2S enable
        PLLI2SON OFFSET(26) NUMBITS(1) [],
        /// PLLI2S clock ready flag
        PLLI2SRDY OFFSET(27) NUMBITS(1) [],
        /// PLLSAI enable
        PLLSAION OFFSET(28) NUMBITS(1) [],
        /// PLLSAI clock ready flag
        PLLSAIRDY OFFSET(29) NUMBITS(1) [],
        HSITRIM_0 OFFSET(3) NUMBITS(1) [],
        HSITRIM_1 OFFSET(4) NUMBITS(1) [],
        HSITRIM_2 OFFSET(5) NUMBITS(1) [],
        HSITRIM_3 OFFSET(6) NUMBITS(1) [],
        HSITRIM_4 OFFSET(7) NUMBITS(1) [],
        HSICAL_0 OFFSET(8) NUMBITS(1) [],
        HSICAL_1 OFFSET(9) NUMBITS(1) [],
        HSICAL_2 OFFSET(10) NUMBITS(1) [],
        HSICAL_3 OFFSET(11) NUMBITS(1) [],
        HSICAL_4 OFFSET(12) NUMBITS(1) [],
        HSICAL_5 OFFSET(13) NUMBITS(1) [],
        HSICAL_6 OFFSET(14) NUMBITS(1) [],
        HSICAL_7 OFFSET(15) NUMBITS(1) []
    ],
    pub PLLCFGR [
        /// Division factor for the PLL input clock
        PLLM OFFSET(0) NUMBITS(6) [],
        /// Multiplication factor for the VCO
        PLLN OFFSET(6) NUMBITS(9) [],
        /// Division factor for the main system clock
        PLLP OFFSET(16) NUMBITS(2) [
            DivideBy2 = 0,
            DivideBy4 = 1,
            DivideBy6 = 2,
            DivideBy8 = 3
        ],
        /// PLL and PLLI2S entry clock source
        PLLSRC OFFSET(22) NUMBITS(1) [
            Hsi = 0,
            Hse = 1
        ],
        /// Division factor for USB OTG FS, SDIO and RNG clocks
        PLLQ OFFSET(24) NUMBITS(4) [],
        PLLM_0 OFFSET(0) NUMBITS(1) [],
        PLLM_1 OFFSET(1) NUMBITS(1) [],
        PLLM_2 OFFSET(2) NUMBITS(1) [],
        PLLM_3 OFFSET(3) NUMBITS(1) [],
        PLLM_4 OFFSET(4) NUMBITS(1) [],
        PLLM_5 OFFSET(5) NUMBITS(1) [],
        PLLN_0 OFFSET(6) NUMBITS(1) [],
        PLLN_1 OFFSET(7) NUMBITS(1) [],
        PLLN_2 OFFSET(8) NUMBITS(1) [],
        PLLN_3 OFFSET(9) NUMBITS(1) [],
        PLLN_4 OFFSET(10) NUMBITS(1) [],
        PLLN_5 OFFSET(11) NUMBITS(1) [],
        PLLN_6 OFFSET(12) NUMBITS(1) [],
        PLLN_7 OFFSET(13) NUMBITS(1) [],
        PLLN_8 OFFSET(14) NUMBITS(1) [],
        PLLP_0 OFFSET(16) NUMBITS(1) [],
        PLLP_1 OFFSET(17) NUMBITS(1) [],
        PLLQ_0 OFFSET(24) NUMBITS(1) [],
        PLLQ_1 OFFSET(25) NUMBITS(1) [],
        PLLQ_2 OFFSET(26) NUMBITS(1) [],
        PLLQ_3 OFFSET(27) NUMBITS(1) []
    ],
    pub CFGR [
        /// System clock switch
        SW OFFSET(0) NUMBITS(2) [
            Hsi = 0,
            Hse = 1,
            Pll = 2
        ],
        /// System clock switch status
        SWS OFFSET(2) NUMBITS(2) [
            Hsi = 0,
            Hse = 1,
            Pll = 2
        ],
        /// AHB prescaler
        HPRE OFFSET(4) NUMBITS(4) [
            DivideBy1 = 0,
            DivideBy2 = 8,
            DivideBy4 = 9,
            DivideBy8 = 10,
            DivideBy16 = 11,
            DivideBy64 = 12,
            DivideBy128 = 13,
            DivideBy256 = 14,
            DivideBy512 = 15
        ],
        /// APB low-speed prescaler
        PPRE1 OFFSET(10) NUMBITS(3) [
            DivideBy1 = 0,
            DivideBy2 = 4,
            DivideBy4 = 5,
            DivideBy8 = 6,
            DivideBy16 = 7
        ],
        /// APB high-speed prescaler
        PPRE2 OFFSET(13) NUMBITS(3) [
            DivideBy1 = 0,
            DivideBy2 = 4,
            DivideBy4 = 5,
            DivideBy8 = 6,
            DivideBy16 = 7
        ],
        /// HSE division factor for RTC clock
        RTCPRE OFFSET(16) NUMBITS(5) [],
        /// Microcontroller clock output 1
        MCO1 OFFSET(21) NUMBITS(2) [
            Hsi = 0,
            Lse = 1,
            Hse = 2,
            Pll = 3
        ],
        /// I2S clock selection
        I2SSRC OFFSET(23) NUMBITS(1) [
            Plli2s = 0,
            External = 1
        ],
        /// MCO1 prescaler
        MCO1PRE OFFSET(24) NUMBITS(3) [
            NoDivision = 0,
            DivideBy2 = 4,
            DivideBy3 = 5,
            DivideBy4 = 6,
            DivideBy5 = 7
        ],
        /// MCO2 prescaler
        MCO2PRE OFFSET(27) NUMBITS(3) [
            NoDivision = 0,
            DivideBy2 = 4,
            DivideBy3 = 5,
            DivideBy4 = 6,
            DivideBy5 = 7
        ],
        /// Microcontroller clock output 2
        MCO2 OFFSET(30) NUMBITS(2) [
            Sysclk = 0,
            Plli2s = 1,
            Hse = 2,
            Pll = 3
        ],
        SW_0 OFFSET(0) NUMBITS(1) [],
        SW_1 OFFSET(1) NUMBITS(1) [],
        SWS_0 OFFSET(2) NUMBITS(1) [],
        SWS_1 OFFSET(3) NUMBITS(1) [],
        HPRE_0 OFFSET(4) NUMBITS(1) [],
        HPRE_1 OFFSET(5) NUMBITS(1) [],
        HPRE_2 OFFSET(6) NUMBITS(1) [],
        HPRE_3 OFFSET(7) NUMBITS(1) [],
        PPRE1_0 OFFSET(10) NUMBITS(1) [],
        PPRE1_1 OFFSET(11) NUMBITS(1) [],
        PPRE1_2 OFFSET(12) NUMBITS(1) [],
        PPRE2_0 OFFSET(13) NUMBITS(1) [],
        PPRE2_1 OFFSET(14) NUMBITS(1) [],
        PPRE2_2 OFFSET(15) NUMBITS(1) [],
        RTCPRE_0 OFFSET(16) NUMBITS(1) [],
        RTCPRE_1 OFFSET(17) NUMBITS(1) [],
        RTCPRE_2 OFFSET(18) NUMBITS(1) [],
        RTCPRE_3 OFFSET(19) NUMBITS(1) [],
        RTCPRE_4 OFFSET(20) NUMBITS(1) [],
        MCO1_0 OFFSET(21) NUMBITS(1) [],
        MCO1_1 OFFSET(22) NUMBITS(1) [],
        MCO1PRE_0 OFFSET(24) NUMBITS(1) [],
        MCO1PRE_1 OFFSET(25) NUMBITS(1) [],
        MCO1PRE_2 OFFSET(26) NUMBITS(1) [],
        MCO2PRE_0 OFFSET(27) NUMBITS(1) [],
        MCO2PRE_1 OFFSET(28) NUMBITS(1) [],
        MCO2PRE_2 OFFSET(29) NUMBITS(1) [],
        MCO2_0 OFFSET(30) NUMBITS(1) [],
        MCO2_1 OFFSET(31) NUMBITS(1) []
    ],
    pub CIR [
        LSIRDYF OFFSET(0) NUMBITS(1) [],
        LSERDYF OFFSET(1) NUMBITS(1) [],
        HSIRDYF OFFSET(2) NUMBITS(1) [],
        HSERDYF OFFSET(3) NUMBITS(1) [],
        PLLRDYF OFFSET(4) NUMBITS(1) [],
        PLLI2SRDYF OFFSET(5) NUMBITS(1) [],
        PLLSAIRDYF OFFSET(6) NUMBITS(1) [],
        CSSF OFFSET(7) NUMBITS(1) [],
        LSIRDYIE OFFSET(8) NUMBITS(1) [],
        LSERDYIE OFFSET(9) NUMBITS(1) [],
        HSIRDYIE OFFSET(10) NUMBITS(1) [],
        HSERDYIE OFFSET(11) NUMBITS(1) [],
        PLLRDYIE OFFSET(12) NUMBITS(1) [],
        PLLI2SRDYIE OFFSET(13) NUMBITS(1) [],
        PLLSAIRDYIE OFFSET(14) NUMBITS(1) [],
        LSIRDYC OFFSET(16) NUMBITS(1) [],
        LSERDYC OFFSET(17) NUMBITS(1) [],
        HSIRDYC OFFSET(18) NUMBITS(1) [],
        HSERDYC OFFSET(19) NUMBITS(1) [],
        PLLRDYC OFFSET(20) NUMBITS(1) [],
        PLLI2SRDYC OFFSET(21) NUMBITS(1) [],
        PLLSAIRDYC OFFSET(22) NUMBITS(1) [],
        CSSC OFFSET(23) NUMBITS(1) []
    ],
    pub AHB1RSTR [
        GPIOARST OFFSET(0) NUMBITS(1) [],
        GPIOBRST OFFSET(1) NUMBITS(1) [],
        GPIOCRST OFFSET(2) NUMBITS(1) [],
        GPIODRST OFFSET(3) NUMBITS(1) [],
        GPIOERST OFFSET(4) NUMBITS(1) [],
        GPIOFRST OFFSET(5) NUMBITS(1) [],
        GPIOGRST OFFSET(6) NUMBITS(1) [],
        GPIOHRST OFFSET(7) NUMBITS(1) [],
        GPIOIRST OFFSET(8) NUMBITS(1) [],
        GPIOJRST OFFSET(9) NUMBITS(1) [],
        GPIOKRST OFFSET(10) NUMBITS(1) [],
        CRCRST OFFSET(12) NUMBITS(1) [],
        DMA1RST OFFSET(21) NUMBITS(1) [],
        DMA2RST OFFSET(22) NUMBITS(1) [],
        DMA2DRST OFFSET(23) NUMBITS(1) [],
        ETHMACRST OFFSET(25) NUMBITS(1) [],
        OTGHSRST OFFSET(29) NUMBITS(1) []
    ],
    pub AHB2RSTR [
        DCMIRST OFFSET(0) NUMBITS(1) [],
        RNGRST OFFSET(6) NUMBITS(1) [],
        OTGFSRST OFFSET(7) NUMBITS(1) []
    ],
    pub AHB3RSTR [
        FMCRST OFFSET(0) NUMBITS(1) []
    ],
    pub APB1RSTR [
        TIM2RST OFFSET(0) NUMBITS(1) [],
        TIM3RST OFFSET(1) NUMBITS(1) [],
        TIM4RST OFFSET(2) NUMBITS(1) [],
        TIM5RST OFFSET(3) NUMBITS(1) [],
        TIM6RST OFFSET(4) NUMBITS(1) [],
        TIM7RST OFFSET(5) NUMBITS(1) [],
        TIM12RST OFFSET(6) NUMBITS(1) [],
        TIM13RST OFFSET(7) NUMBITS(1) [],
        TIM14RST OFFSET(8) NUMBITS(1) [],
        WWDGRST OFFSET(11) NUMBITS(1) [],
        SPI2RST OFFSET(14) NUMBITS(1) [],
        SPI3RST OFFSET(15) NUMBITS(1) [],
        USART2RST OFFSET(17) NUMBITS(1) [],
        USART3RST OFFSET(18) NUMBITS(1) [],
        UART4RST OFFSET(19) NUMBITS(1) [],
        UART5RST OFFSET(20) NUMBITS(1) [],
        I2C1RST OFFSET(21) NUMBITS(1) [],
        I2C2RST OFFSET(22) NUMBITS(1) [],
        I2C3RST OFFSET(23) NUMBITS(1) [],
        CAN1RST OFFSET(25) NUMBITS(1) [],
        CAN2RST OFFSET(26) NUMBITS(1) [],
        PWRRST OFFSET(28) NUMBITS(1) [],
        DACRST OFFSET(29) NUMBITS(1) [],
        UART7RST OFFSET(30) NUMBITS(1) [],
        UART8RST OFFSET(31) NUMBITS(1) []
    ],
    pub APB2RSTR [
        TIM1RST OFFSET(0) NUMBITS(1) [],
        TIM8RST OFFSET(1) NUMBITS(1) [],
        USART1RST OFFSET(4) NUMBITS(1) [],
        USART6RST OFFSET(5) NUMBITS(1) [],
        ADCRST OFFSET(8) NUMBITS(1) [],
        SDIORST OFFSET(11) NUMBITS(1) [],
        SPI1RST OFFSET(12) NUMBITS(1) [],
        SPI4RST OFFSET(13) NUMBITS(1) [],
        SYSCFGRST OFFSET(14) NUMBITS(1) [],
        TIM9RST OFFSET(16) NUMBITS(1) [],
        TIM10RST OFFSET(17) NUMBITS(1) [],
        TIM11RST OFFSET(18) NUMBITS(1) [],
        SPI5RST OFFSET(20) NUMBITS(1) [],
        SPI6RST OFFSET(21) NUMBITS(1) [],
        SAI1RST OFFSET(22) NUMBITS(1) [],
        LTDCRST OFFSET(26) NUMBITS(1) []
    ],
    pub AHB1ENR [
        GPIOAEN OFFSET(0) NUMBITS(1) [],
        GPIOBEN OFFSET(1) NUMBITS(1) [],
        GPIOCEN OFFSET(2) NUMBITS(1) [],
        GPIODEN OFFSET(3) NUMBITS(1) [],
        GPIOEEN OFFSET(4) NUMBITS(1) [],
        GPIOFEN OFFSET(5) NUMBITS(1) [],
        GPIOGEN OFFSET(6) NUMBITS(1) [],
        GPIOHEN OFFSET(7) NUMBITS(1) [],
        GPIOIEN OFFSET(8) NUMBITS(1) [],
        GPIOJEN OFFSET(9) NUMBITS(1) [],
        GPIOKEN OFFSET(10) NUMBITS(1) [],
        CRCEN OFFSET(12) NUMBITS(1) [],
        BKPSRAMEN OFFSET(18) NUMBITS(1) [],
        CCMDATARAMEN OFFSET(20) NUMBITS(1) [],
        DMA1EN OFFSET(21) NUMBITS(1) [],
        DMA2EN OFFSET(22) NUMBITS(1) [],
        DMA2DEN OFFSET(23) NUMBITS(1) [],
        ETHMACEN OFFSET(25) NUMBITS(1) [],
        ETHMACTXEN OFFSET(26) NUMBITS(1) [],
        ETHMACRXEN OFFSET(27) NUMBITS(1) [],
        ETHMACPTPEN OFFSET(28) NUMBITS(1) [],
        OTGHSEN OFFSET(29) NUMBITS(1) [],
        OTGHSULPIEN OFFSET(30) NUMBITS(1) []
    ],
    pub AHB2ENR [
        DCMIEN OFFSET(0) NUMBITS(1) [],
        RNGEN OFFSET(6) NUMBITS(1) [],
        OTGFSEN OFFSET(7) NUMBITS(1) []
    ],
    pub AHB3ENR [
        FMCEN OFFSET(0) NUMBITS(1) []
    ],
    pub APB1ENR [
        TIM2EN OFFSET(0) NUMBITS(1) [],
        TIM3EN OFFSET(1) NUMBITS(1) [],
        TIM4EN OFFSET(2) NUMBITS(1) [],
        TIM5EN OFFSET(3) NUMBITS(1) [],
        TIM6EN OFFSET(4) NUMBITS(1) [],
        TIM7EN OFFSET(5) NUMBITS(1) [],
        TIM12EN OFFSET(6) NUMBITS(1) [],
        TIM13EN OFFSET(7) NUMBITS(1) [],
        TIM14EN OFFSET(8) NUMBITS(1) [],
        WWDGEN OFFSET(11) NUMBITS(1) [],
        SPI2EN OFFSET(14) NUMBITS(1) [],
        SPI3EN OFFSET(15) NUMBITS(1) [],
        USART2EN OFFSET(17) NUMBITS(1) [],
        USART3EN OFFSET(18) NUMBITS(1) [],
        UART4EN OFFSET(19) NUMBITS(1) [],
        UART5EN OFFSET(20) NUMBITS(1) [],
        I2C1EN OFFSET(21) NUMBITS(1) [],
        I2C2EN OFFSET(22) NUMBITS(1) [],
        I2C3EN OFFSET(23) NUMBITS(1) [],
        CAN1EN OFFSET(25) NUMBITS(1) [],
        CAN2EN OFFSET(26) NUMBITS(1) [],
        PWREN OFFSET(28) NUMBITS(1) [],
        DACEN OFFSET(29) NUMBITS(1) [],
        UART7EN OFFSET(30) NUMBITS(1) [],
        UART8EN OFFSET(31) NUMBITS(1) []
    ],
    pub APB2ENR [
        TIM1EN OFFSET(0) NUMBITS(1) [],
        TIM8EN OFFSET(1) NUMBITS(1) [],
        USART1EN OFFSET(4) NUMBITS(1) [],
        USART6EN OFFSET(5) NUMBITS(1) [],
        ADC1EN OFFSET(8) NUMBITS(1) [],
        ADC2EN OFFSET(9) NUMBITS(1) [],
        ADC3EN OFFSET(10) NUMBITS(1) [],
        SDIOEN OFFSET(11) NUMBITS(1) [],
        SPI1EN OFFSET(12) NUMBITS(1) [],
        SPI4EN OFFSET(13) NUMBITS(1) [],
        SYSCFGEN OFFSET(14) NUMBITS(1) [],
        TIM9EN OFFSET(16) NUMBITS(1) [],
        TIM10EN OFFSET(17) NUMBITS(1) [],
        TIM11EN OFFSET(18) NUMBITS(1) [],
        SPI5EN OFFSET(20) NUMBITS(1) [],
        SPI6EN OFFSET(21) NUMBITS(1) [],
        SAI1EN OFFSET(22) NUMBITS(1) [],
        LTDCEN OFFSET(26) NUMBITS(1) []
    ],
    pub AHB1LPENR [
        GPIOALPEN OFFSET(0) NUMBITS(1) [],
        GPIOBLPEN OFFSET(1) NUMBITS(1) [],
        GPIOCLPEN OFFSET(2) NUMBITS(1) [],
        GPIODLPEN OFFSET(3) NUMBITS(1) [],
        GPIOELPEN OFFSET(4) NUMBITS(1) [],
        GPIOFLPEN OFFSET(5) NUMBITS(1) [],
        GPIOGLPEN OFFSET(6) NUMBITS(1) [],
        GPIOHLPEN OFFSET(7) NUMBITS(1) [],
        GPIOILPEN OFFSET(8) NUMBITS(1) [],
        GPIOJLPEN OFFSET(9) NUMBITS(1) [],
        GPIOKLPEN OFFSET(10) NUMBITS(1) [],
        CRCLPEN OFFSET(12) NUMBITS(1) [],
        FLITFLPEN OFFSET(15) NUMBITS(1) [],
        SRAM1LPEN OFFSET(16) NUMBITS(1) [],
        SRAM2LPEN OFFSET(17) NUMBITS(1) [],
        BKPSRAMLPEN OFFSET(18) NUMBITS(1) [],
        SRAM3LPEN OFFSET(19) NUMBITS(1) [],
        DMA1LPEN OFFSET(21) NUMBITS(1) [],
        DMA2LPEN OFFSET(22) NUMBITS(1) [],
        DMA2DLPEN OFFSET(23) NUMBITS(1) [],
        ETHMACLPEN OFFSET(25) NUMBITS(1) [],
        ETHMACTXLPEN OFFSET(26) NUMBITS(1) [],
        ETHMACRXLPEN OFFSET(27) NUMBITS(1) [],
        ETHMACPTPLPEN OFFSET(28) NUMBITS(1) [],
        OTGHSLPEN OFFSET(29) NUMBITS(1) [],
        OTGHSULPILPEN OFFSET(30) NUMBITS(1) []
    ],
    pub AHB2LPENR [
        DCMILPEN OFFSET(0) NUMBITS(1) [],
        RNGLPEN OFFSET(6) NUMBITS(1) [],
        OTGFSLPEN OFFSET(7) NUMBITS(1) []
    ],
    pub AHB3LPENR [
        FMCLPEN OFFSET(0) NUMBITS(1) []
    ],
    pub APB1LPENR [
        TIM2LPEN OFFSET(0) NUMBITS(1) [],
        TIM3LPEN OFFSET(1) NUMBITS(1) [],
        TIM4LPEN OFFSET(2) NUMBITS(1) [],
        TIM5LPEN OFFSET(3) NUMBITS(1) [],
        TIM6LPEN OFFSET(4) NUMBITS(1) [],
        TIM7LPEN OFFSET(5) NUMBITS(1) [],
        TIM12LPEN OFFSET(6) NUMBITS(1) [],
        TIM13LPEN OFFSET(7) NUMBITS(1) [],
        TIM14LPEN OFFSET(8) NUMBITS(1) [],
        WWDGLPEN OFFSET(11) NUMBITS(1) [],
        SPI2LPEN OFFSET(14) NUMBITS(1) [],
        SPI3LPEN OFFSET(15) NUMBITS(1) [],
        USART2LPEN OFFSET(17) NUMBITS(1) [],
        USART3LPEN OFFSET(18) NUMBITS(1) [],
        UART4LPEN OFFSET(19) NUMBITS(1) [],
        UART5LPEN OFFSET(20) NUMBITS(1) [],
        I2C1LPEN OFFSET(21) NUMBITS(1) [],
        I2C2LPEN OFFSET(22) NUMBITS(1) [],
        I2C3LPEN OFFSET(23) NUMBITS(1) [],
        CAN1LPEN OFFSET(25) NUMBITS(1) [],
        CAN2LPEN OFFSET(26) NUMBITS(1) [],
        PWRLPEN OFFSET(28) NUMBITS(1) [],
        DACLPEN OFFSET(29) NUMBITS(1) [],
        UART7LPEN OFFSET(30) NUMBITS(1) [],
        UART8LPEN OFFSET(31) NUMBITS(1) []
    ],
    pub APB2LPENR [
        TIM1LPEN OFFSET(0) NUMBITS(1) [],
        TIM8LPEN OFFSET(1) NUMBITS(1) [],
        USART1LPEN OFFSET(4) NUMBITS(1) [],
        USART6LPEN OFFSET(5) NUMBITS(1) [],
        ADC1LPEN OFFSET(8) NUMBITS(1) [],
        ADC2LPEN OFFSET(9) NUMBITS(1) [],
        ADC3LPEN OFFSET(10) NUMBITS(1) [],
        SDIOLPEN OFFSET(11) NUMBITS(1) [],
        SPI1LPEN OFFSET(12) NUMBITS(1) [],
        SPI4LPEN OFFSET(13) NUMBITS(1) [],
        SYSCFGLPEN OFFSET(14) NUMBITS(1) [],
        TIM9LPEN OFFSET(16) NUMBITS(1) [],
        TIM10LPEN OFFSET(17) NUMBITS(1) [],
        TIM11LPEN OFFSET(18) NUMBITS(1) [],
        SPI5LPEN OFFSET(20) NUMBITS(1) [],
        SPI6LPEN OFFSET(21) NUMBITS(1) [],
        SAI1LPEN OFFSET(22) NUMBITS(1) [],
        LTDCLPEN OFFSET(26) NUMBITS(1) []
    ],
    pub BDCR [
        /// External low-speed oscillator enable
        LSEON OFFSET(0) NUMBITS(1) [],
        /// External low-speed oscillator ready
        LSERDY OFFSET(1) NUMBITS(1) [],
        /// External low-speed oscillator bypass
        LSEBYP OFFSET(2) NUMBITS(1) [],
        /// RTC clock source selection
        RTCSEL OFFSET(8) NUMBITS(2) [
            NoClock = 0,
            Lse = 1,
            Lsi = 2,
            Hse = 3
        ],
        /// RTC clock enable
        RTCEN OFFSET(15) NUMBITS(1) [],
        /// Backup domain software reset
        BDRST OFFSET(16) NUMBITS(1) [],
        RTCSEL_0 OFFSET(8) NUMBITS(1) [],
        RTCSEL_1 OFFSET(9) NUMBITS(1) []
    ],
    pub CSR [
        /// Internal low-speed oscillator enable
        LSION OFFSET(0) NUMBITS(1) [],
        /// Internal low-speed oscillator ready
        LSIRDY OFFSET(1) NUMBITS(1) [],
        /// Remove reset flag
        RMVF OFFSET(24) NUMBITS(1) [],
        /// BOR reset flag
        BORRSTF OFFSET(25) NUMBITS(1) [],
        /// NRST pin reset flag
        PINRSTF OFFSET(26) NUMBITS(1) [],
        /// POR/PDR reset flag
        PORRSTF OFFSET(27) NUMBITS(1) [],
        /// Software reset flag
        SFTRSTF OFFSET(28) NUMBITS(1) [],
        /// Independent watchdog reset flag
        IWDGRSTF OFFSET(29) NUMBITS(1) [],
        /// Window watchdog reset flag
        WWDGRSTF OFFSET(30) NUMBITS(1) [],
        /// Low-power reset flag
        LPWRRSTF OFFSET(31) NUMBITS(1) []
    ],
    pub SSCGR [
        /// Modulation period
        MODPER OFFSET(0) NUMBITS(13) [],
        /// Incrementation step
        INCSTEP OFFSET(13) NUMBITS(15) [],
        /// Spread select
        SPREADSEL OFFSET(30) NUMBITS(1) [
            Center = 0,
            Down = 1
        ],
        /// Spread spectrum modulation enable
        SSCGEN OFFSET(31) NUMBITS(1) []
    ],
    pub PLLI2SCFGR [
        /// Multiplication factor for the VCO
        PLLI2SN OFFSET(6) NUMBITS(9) [],
        /// Division factor for the SAI1 clock
        PLLI2SQ OFFSET(24) NUMBITS(4) [],
        /// Division factor for the I2S clocks
        PLLI2SR OFFSET(28) NUMBITS(3) []
    ],
    pub PLLSAICFGR [
        /// Multiplication factor for the VCO
        PLLSAIN OFFSET(6) NUMBITS(9) [],
        /// Division factor for the SAI1 clock
        PLLSAIQ OFFSET(24) NUMBITS(4) [],
        /// Division factor for the LCD clock
        PLLSAIR OFFSET(28) NUMBITS(3) []
    ],
    pub DCKCFGR [
        /// Division factor for the SAI1 clock from PLLI2S, minus one
        PLLI2SDIVQ OFFSET(0) NUMBITS(5) [],
        /// Division factor for the SAI1 clock from PLLSAI, minus one
        PLLSAIDIVQ OFFSET(8) NUMBITS(5) [],
        /// Division factor for the LCD clock
        PLLSAIDIVR OFFSET(16) NUMBITS(2) [
            DivideBy2 = 0,
            DivideBy4 = 1,
            DivideBy8 = 2,
            DivideBy16 = 3
        ],
        /// SAI1 block A clock source
        SAI1ASRC OFFSET(20) NUMBITS(2) [
            PllsaiQ = 0,
            Plli2sQ = 1,
            External = 2
        ],
        /// SAI1 block B clock source
        SAI1BSRC OFFSET(22) NUMBITS(2) [
            PllsaiQ = 0,
            Plli2sQ = 1,
            External = 2
        ],
        /// Timers clock prescalers selection
        TIMPRE OFFSET(24) NUMBITS(1) []
    ]
];

pub(crate) const RCC: StaticRef<RccRegisters> =
    unsafe { StaticRef::new(memory_map::RCC_BASE as *const RccRegisters) };

#[allow(non_snake_case)]
pub mod legacy {
    pub mod AHB1RSTR {
        pub use crate::rcc::AHB1RSTR::OTGHSRST as OTGHRST;
    }

    pub mod CSR {
        pub use crate::rcc::CSR::{IWDGRSTF as WDGRSTF, PINRSTF as PADRSTF};
    }
}
