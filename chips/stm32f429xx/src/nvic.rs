// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Exception and interrupt numbering.
//!
//! Core exceptions carry the negative numbers fixed by ARMv7-M; device
//! interrupts start at zero and follow the STM32F429 vector table. The
//! vector table slot of any entry is its number plus 16.

#![allow(non_camel_case_types)]

use core::fmt;

use crate::errorcode::ErrorCode;

macro_rules! interrupts {
    ($($(#[$attr:meta])* $name:ident = $number:literal,)*) => {
        /// Every exception and interrupt source of the STM32F429.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(i16)]
        pub enum Interrupt {
            $($(#[$attr])* $name = $number,)*
        }

        impl Interrupt {
            /// All sources in vector table order.
            pub const ALL: &'static [Interrupt] = &[$(Interrupt::$name,)*];

            pub const fn name(self) -> &'static str {
                match self {
                    $(Interrupt::$name => stringify!($name),)*
                }
            }

            /// Look up a source by its number. Reserved slots have no source.
            pub const fn from_number(number: i16) -> Option<Interrupt> {
                match number {
                    $($number => Some(Interrupt::$name),)*
                    _ => None,
                }
            }
        }
    };
}

interrupts! {
    /// Non maskable interrupt, also the RCC clock security system
    NonMaskableInt = -14,
    HardFault = -13,
    /// Cortex-M4 memory management
    MemoryManagement = -12,
    /// Cortex-M4 bus fault
    BusFault = -11,
    /// Cortex-M4 usage fault
    UsageFault = -10,
    /// Cortex-M4 SV call
    SVCall = -5,
    /// Cortex-M4 debug monitor
    DebugMonitor = -4,
    /// Cortex-M4 pend SV
    PendSV = -2,
    /// Cortex-M4 system tick
    SysTick = -1,
    /// Window watchdog
    WWDG = 0,
    /// PVD through EXTI line 16
    PVD = 1,
    /// Tamper and timestamp through EXTI line 21
    TAMP_STAMP = 2,
    /// RTC wakeup through EXTI line 22
    RTC_WKUP = 3,
    FLASH = 4,
    RCC = 5,
    EXTI0 = 6,
    EXTI1 = 7,
    EXTI2 = 8,
    EXTI3 = 9,
    EXTI4 = 10,
    DMA1_Stream0 = 11,
    DMA1_Stream1 = 12,
    DMA1_Stream2 = 13,
    DMA1_Stream3 = 14,
    DMA1_Stream4 = 15,
    DMA1_Stream5 = 16,
    DMA1_Stream6 = 17,
    /// ADC1, ADC2 and ADC3
    ADC = 18,
    CAN1_TX = 19,
    CAN1_RX0 = 20,
    CAN1_RX1 = 21,
    CAN1_SCE = 22,
    /// EXTI lines 5 to 9
    EXTI9_5 = 23,
    TIM1_BRK_TIM9 = 24,
    TIM1_UP_TIM10 = 25,
    TIM1_TRG_COM_TIM11 = 26,
    TIM1_CC = 27,
    TIM2 = 28,
    TIM3 = 29,
    TIM4 = 30,
    I2C1_EV = 31,
    I2C1_ER = 32,
    I2C2_EV = 33,
    I2C2_ER = 34,
    SPI1 = 35,
    SPI2 = 36,
    USART1 = 37,
    USART2 = 38,
    USART3 = 39,
    /// EXTI lines 10 to 15
    EXTI15_10 = 40,
    /// RTC alarms A and B through EXTI line 17
    RTC_Alarm = 41,
    /// USB OTG FS wakeup through EXTI line 18
    OTG_FS_WKUP = 42,
    TIM8_BRK_TIM12 = 43,
    TIM8_UP_TIM13 = 44,
    TIM8_TRG_COM_TIM14 = 45,
    TIM8_CC = 46,
    DMA1_Stream7 = 47,
    FMC = 48,
    SDIO = 49,
    TIM5 = 50,
    SPI3 = 51,
    UART4 = 52,
    UART5 = 53,
    /// TIM6 and DAC1/DAC2 underrun
    TIM6_DAC = 54,
    TIM7 = 55,
    DMA2_Stream0 = 56,
    DMA2_Stream1 = 57,
    DMA2_Stream2 = 58,
    DMA2_Stream3 = 59,
    DMA2_Stream4 = 60,
    ETH = 61,
    /// Ethernet wakeup through EXTI line 19
    ETH_WKUP = 62,
    CAN2_TX = 63,
    CAN2_RX0 = 64,
    CAN2_RX1 = 65,
    CAN2_SCE = 66,
    OTG_FS = 67,
    DMA2_Stream5 = 68,
    DMA2_Stream6 = 69,
    DMA2_Stream7 = 70,
    USART6 = 71,
    I2C3_EV = 72,
    I2C3_ER = 73,
    OTG_HS_EP1_OUT = 74,
    OTG_HS_EP1_IN = 75,
    /// USB OTG HS wakeup through EXTI line 20
    OTG_HS_WKUP = 76,
    OTG_HS = 77,
    DCMI = 78,
    // XX RESERVED XX = 79; CRYP on STM32F439
    HASH_RNG = 80,
    FPU = 81,
    UART7 = 82,
    UART8 = 83,
    SPI4 = 84,
    SPI5 = 85,
    SPI6 = 86,
    SAI1 = 87,
    LTDC = 88,
    LTDC_ER = 89,
    DMA2D = 90,
}

/// Device interrupt numbers with no source on this part.
pub const RESERVED_IRQS: [i16; 1] = [79];

/// Number of device interrupt lines, reserved ones included.
pub const DEVICE_INTERRUPTS: usize = 91;

/// Slots in the vector table: initial stack pointer, reset, 14 exception
/// slots and one per device interrupt line.
pub const VECTOR_TABLE_LEN: usize = 16 + DEVICE_INTERRUPTS;

const fn is_reserved(number: i16) -> bool {
    let mut i = 0;
    while i < RESERVED_IRQS.len() {
        if RESERVED_IRQS[i] == number {
            return true;
        }
        i += 1;
    }
    false
}

// Sources are listed in strictly ascending order, no reserved line is
// claimed, and every other line up to the last one has a source.
const _: () = {
    let all = Interrupt::ALL;
    let mut i = 1;
    while i < all.len() {
        assert!((all[i - 1] as i16) < (all[i] as i16));
        i += 1;
    }
    let mut number = 0;
    let mut device = 0;
    while number < DEVICE_INTERRUPTS as i16 {
        let present = Interrupt::from_number(number).is_some();
        assert!(present != is_reserved(number));
        if present {
            device += 1;
        }
        number += 1;
    }
    assert!(device + RESERVED_IRQS.len() == DEVICE_INTERRUPTS);
    assert!(all[all.len() - 1] as usize == DEVICE_INTERRUPTS - 1);
};

impl Interrupt {
    /// Names shared vectors were known by when each had a vector of its own.
    pub const FSMC: Interrupt = Interrupt::FMC;
    pub const RNG: Interrupt = Interrupt::HASH_RNG;
    pub const TIM6: Interrupt = Interrupt::TIM6_DAC;
    pub const DAC: Interrupt = Interrupt::TIM6_DAC;
    pub const TIM9: Interrupt = Interrupt::TIM1_BRK_TIM9;
    pub const TIM10: Interrupt = Interrupt::TIM1_UP_TIM10;
    pub const TIM11: Interrupt = Interrupt::TIM1_TRG_COM_TIM11;
    pub const TIM12: Interrupt = Interrupt::TIM8_BRK_TIM12;
    pub const TIM13: Interrupt = Interrupt::TIM8_UP_TIM13;
    pub const TIM14: Interrupt = Interrupt::TIM8_TRG_COM_TIM14;

    /// The signed number: negative for core exceptions.
    pub const fn number(self) -> i16 {
        self as i16
    }

    /// Index of this source in the vector table.
    pub const fn vector_slot(self) -> usize {
        (self as i16 + 16) as usize
    }

    pub const fn is_core_exception(self) -> bool {
        (self as i16) < 0
    }

    /// The NVIC line of a device interrupt. Core exceptions are not routed
    /// through the NVIC and have none.
    pub const fn irqn(self) -> Option<u32> {
        if self.is_core_exception() {
            None
        } else {
            Some(self as i16 as u32)
        }
    }
}

impl TryFrom<i16> for Interrupt {
    type Error = ErrorCode;

    fn try_from(number: i16) -> Result<Self, Self::Error> {
        Interrupt::from_number(number).ok_or(ErrorCode::INVAL)
    }
}

impl fmt::Display for Interrupt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.number())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Interrupt {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}({=i16})", self.name(), self.number());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_injective() {
        for (i, a) in Interrupt::ALL.iter().enumerate() {
            for b in &Interrupt::ALL[i + 1..] {
                assert_ne!(a.number(), b.number(), "{} and {}", a.name(), b.name());
            }
        }
    }

    #[test]
    fn lookup_matches_every_source() {
        for &interrupt in Interrupt::ALL {
            assert_eq!(Interrupt::from_number(interrupt.number()), Some(interrupt));
            assert_eq!(Interrupt::try_from(interrupt.number()), Ok(interrupt));
        }
    }

    #[test]
    fn reserved_and_unknown_numbers_are_rejected() {
        assert_eq!(Interrupt::try_from(79), Err(ErrorCode::INVAL));
        assert_eq!(Interrupt::try_from(91), Err(ErrorCode::INVAL));
        assert_eq!(Interrupt::try_from(-3), Err(ErrorCode::INVAL));
        assert_eq!(Interrupt::try_from(-15), Err(ErrorCode::INVAL));
    }

    #[test]
    fn vector_slots() {
        assert_eq!(Interrupt::NonMaskableInt.vector_slot(), 2);
        assert_eq!(Interrupt::HardFault.vector_slot(), 3);
        assert_eq!(Interrupt::SysTick.vector_slot(), 15);
        assert_eq!(Interrupt::WWDG.vector_slot(), 16);
        assert_eq!(Interrupt::DMA2D.vector_slot(), VECTOR_TABLE_LEN - 1);
    }

    #[test]
    fn device_numbers_match_vector_table() {
        assert_eq!(Interrupt::DMA1_Stream7.irqn(), Some(47));
        assert_eq!(Interrupt::OTG_FS.irqn(), Some(67));
        assert_eq!(Interrupt::HASH_RNG.irqn(), Some(80));
        assert_eq!(Interrupt::FPU.irqn(), Some(81));
        assert_eq!(Interrupt::LTDC_ER.irqn(), Some(89));
        assert_eq!(Interrupt::PendSV.irqn(), None);
    }

    #[test]
    fn legacy_names_share_vectors() {
        assert_eq!(Interrupt::FSMC, Interrupt::FMC);
        assert_eq!(Interrupt::TIM9.number(), 24);
        assert_eq!(Interrupt::TIM14.number(), 45);
        assert_eq!(Interrupt::DAC, Interrupt::TIM6);
    }

    #[test]
    fn core_exceptions() {
        let core = Interrupt::ALL.iter().filter(|i| i.is_core_exception()).count();
        assert_eq!(core, 9);
        assert_eq!(Interrupt::ALL.len() - core, DEVICE_INTERRUPTS - RESERVED_IRQS.len());
    }
}
