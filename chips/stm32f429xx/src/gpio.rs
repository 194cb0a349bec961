// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! General-purpose I/O ports.
//!
//! Ports A to K share one layout. Each pin owns two bits of MODER, OSPEEDR
//! and PUPDR, one bit of OTYPER, IDR, ODR and LCKR, and four bits of the
//! alternate function registers.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::static_ref::StaticRef;

register_structs! {
    /// GPIO port
    pub GpioRegisters {
        /// port mode register
        (0x00 => pub moder: ReadWrite<u32, MODER::Register>),
        /// port output type register
        (0x04 => pub otyper: ReadWrite<u32, OTYPER::Register>),
        /// port output speed register
        (0x08 => pub ospeedr: ReadWrite<u32, OSPEEDR::Register>),
        /// port pull-up/pull-down register
        (0x0C => pub pupdr: ReadWrite<u32, PUPDR::Register>),
        /// port input data register
        (0x10 => pub idr: ReadOnly<u32, IDR::Register>),
        /// port output data register
        (0x14 => pub odr: ReadWrite<u32, ODR::Register>),
        /// port bit set/reset register
        (0x18 => pub bsrr: WriteOnly<u32, BSRR::Register>),
        /// port configuration lock register
        (0x1C => pub lckr: ReadWrite<u32, LCKR::Register>),
        /// alternate function low register, pins 0 to 7
        (0x20 => pub afrl: ReadWrite<u32, AFRL::Register>),
        /// alternate function high register, pins 8 to 15
        (0x24 => pub afrh: ReadWrite<u32, AFRH::Register>),
        (0x28 => @END),
    }
}

register_bitfields![u32,
    pub MODER [
        MODER0 OFFSET(0) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ],
        MODER1 OFFSET(2) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ],
        MODER2 OFFSET(4) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ],
        MODER3 OFFSET(6) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ],
        MODER4 OFFSET(8) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ],
        MODER5 OFFSET(10) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ],
        MODER6 OFFSET(12) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ],
        MODER7 OFFSET(14) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ],
        MODER8 OFFSET(16) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ],
        MODER9 OFFSET(18) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ],
        MODER10 OFFSET(20) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ],
        MODER11 OFFSET(22) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ],
        MODER12 OFFSET(24) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ],
        MODER13 OFFSET(26) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ],
        MODER14 OFFSET(28) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ],
        MODER15 OFFSET(30) NUMBITS(2) [
            Input = 0,
            Output = 1,
            AlternateFunction = 2,
            Analog = 3
        ]
    ],
    pub OTYPER [
        OT0 OFFSET(0) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT1 OFFSET(1) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT2 OFFSET(2) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT3 OFFSET(3) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT4 OFFSET(4) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT5 OFFSET(5) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT6 OFFSET(6) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT7 OFFSET(7) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT8 OFFSET(8) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT9 OFFSET(9) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT10 OFFSET(10) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT11 OFFSET(11) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT12 OFFSET(12) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT13 OFFSET(13) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT14 OFFSET(14) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ],
        OT15 OFFSET(15) NUMBITS(1) [
            PushPull = 0,
            OpenDrain = 1
        ]
    ],
    pub OSPEEDR [
        OSPEEDR0 OFFSET(0) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        OSPEEDR1 OFFSET(2) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        OSPEEDR2 OFFSET(4) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        OSPEEDR3 OFFSET(6) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        OSPEEDR4 OFFSET(8) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        OSPEEDR5 OFFSET(10) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        OSPEEDR6 OFFSET(12) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        OSPEEDR7 OFFSET(14) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        OSPEEDR8 OFFSET(16) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        OSPEEDR9 OFFSET(18) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        OSPEEDR10 OFFSET(20) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        OSPEEDR11 OFFSET(22) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        OSPEEDR12 OFFSET(24) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        OSPEEDR13 OFFSET(26) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        OSPEEDR14 OFFSET(28) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ],
        OSPEEDR15 OFFSET(30) NUMBITS(2) [
            Low = 0,
            Medium = 1,
            High = 2,
            VeryHigh = 3
        ]
    ],
    pub PUPDR [
        PUPDR0 OFFSET(0) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ],
        PUPDR1 OFFSET(2) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ],
        PUPDR2 OFFSET(4) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ],
        PUPDR3 OFFSET(6) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ],
        PUPDR4 OFFSET(8) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ],
        PUPDR5 OFFSET(10) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ],
        PUPDR6 OFFSET(12) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ],
        PUPDR7 OFFSET(14) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ],
        PUPDR8 OFFSET(16) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ],
        PUPDR9 OFFSET(18) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ],
        PUPDR10 OFFSET(20) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ],
        PUPDR11 OFFSET(22) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ],
        PUPDR12 OFFSET(24) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ],
        PUPDR13 OFFSET(26) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ],
        PUPDR14 OFFSET(28) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ],
        PUPDR15 OFFSET(30) NUMBITS(2) [
            None = 0,
            PullUp = 1,
            PullDown = 2
        ]
    ],
    pub IDR [
        ID0 OFFSET(0) NUMBITS(1) [],
        ID1 OFFSET(1) NUMBITS(1) [],
        ID2 OFFSET(2) NUMBITS(1) [],
        ID3 OFFSET(3) NUMBITS(1) [],
        ID4 OFFSET(4) NUMBITS(1) [],
        ID5 OFFSET(5) NUMBITS(1) [],
        ID6 OFFSET(6) NUMBITS(1) [],
        ID7 OFFSET(7) NUMBITS(1) [],
        ID8 OFFSET(8) NUMBITS(1) [],
        ID9 OFFSET(9) NUMBITS(1) [],
        ID10 OFFSET(10) NUMBITS(1) [],
        ID11 OFFSET(11) NUMBITS(1) [],
        ID12 OFFSET(12) NUMBITS(1) [],
        ID13 OFFSET(13) NUMBITS(1) [],
        ID14 OFFSET(14) NUMBITS(1) [],
        ID15 OFFSET(15) NUMBITS(1) []
    ],
    pub ODR [
        OD0 OFFSET(0) NUMBITS(1) [],
        OD1 OFFSET(1) NUMBITS(1) [],
        OD2 OFFSET(2) NUMBITS(1) [],
        OD3 OFFSET(3) NUMBITS(1) [],
        OD4 OFFSET(4) NUMBITS(1) [],
        OD5 OFFSET(5) NUMBITS(1) [],
        OD6 OFFSET(6) NUMBITS(1) [],
        OD7 OFFSET(7) NUMBITS(1) [],
        OD8 OFFSET(8) NUMBITS(1) [],
        OD9 OFFSET(9) NUMBITS(1) [],
        OD10 OFFSET(10) NUMBITS(1) [],
        OD11 OFFSET(11) NUMBITS(1) [],
        OD12 OFFSET(12) NUMBITS(1) [],
        OD13 OFFSET(13) NUMBITS(1) [],
        OD14 OFFSET(14) NUMBITS(1) [],
        OD15 OFFSET(15) NUMBITS(1) []
    ],
    pub BSRR [
        BS0 OFFSET(0) NUMBITS(1) [],
        BS1 OFFSET(1) NUMBITS(1) [],
        BS2 OFFSET(2) NUMBITS(1) [],
        BS3 OFFSET(3) NUMBITS(1) [],
        BS4 OFFSET(4) NUMBITS(1) [],
        BS5 OFFSET(5) NUMBITS(1) [],
        BS6 OFFSET(6) NUMBITS(1) [],
        BS7 OFFSET(7) NUMBITS(1) [],
        BS8 OFFSET(8) NUMBITS(1) [],
        BS9 OFFSET(9) NUMBITS(1) [],
        BS10 OFFSET(10) NUMBITS(1) [],
        BS11 OFFSET(11) NUMBITS(1) [],
        BS12 OFFSET(12) NUMBITS(1) [],
        BS13 OFFSET(13) NUMBITS(1) [],
        BS14 OFFSET(14) NUMBITS(1) [],
        BS15 OFFSET(15) NUMBITS(1) [],
        BR0 OFFSET(16) NUMBITS(1) [],
        BR1 OFFSET(17) NUMBITS(1) [],
        BR2 OFFSET(18) NUMBITS(1) [],
        BR3 OFFSET(19) NUMBITS(1) [],
        BR4 OFFSET(20) NUMBITS(1) [],
        BR5 OFFSET(21) NUMBITS(1) [],
        BR6 OFFSET(22) NUMBITS(1) [],
        BR7 OFFSET(23) NUMBITS(1) [],
        BR8 OFFSET(24) NUMBITS(1) [],
        BR9 OFFSET(25) NUMBITS(1) [],
        BR10 OFFSET(26) NUMBITS(1) [],
        BR11 OFFSET(27) NUMBITS(1) [],
        BR12 OFFSET(28) NUMBITS(1) [],
        BR13 OFFSET(29) NUMBITS(1) [],
        BR14 OFFSET(30) NUMBITS(1) [],
        BR15 OFFSET(31) NUMBITS(1) []
    ],
    pub LCKR [
        LCK0 OFFSET(0) NUMBITS(1) [],
        LCK1 OFFSET(1) NUMBITS(1) [],
        LCK2 OFFSET(2) NUMBITS(1) [],
        LCK3 OFFSET(3) NUMBITS(1) [],
        LCK4 OFFSET(4) NUMBITS(1) [],
        LCK5 OFFSET(5) NUMBITS(1) [],
        LCK6 OFFSET(6) NUMBITS(1) [],
        LCK7 OFFSET(7) NUMBITS(1) [],
        LCK8 OFFSET(8) NUMBITS(1) [],
        LCK9 OFFSET(9) NUMBITS(1) [],
        LCK10 OFFSET(10) NUMBITS(1) [],
        LCK11 OFFSET(11) NUMBITS(1) [],
        LCK12 OFFSET(12) NUMBITS(1) [],
        LCK13 OFFSET(13) NUMBITS(1) [],
        LCK14 OFFSET(14) NUMBITS(1) [],
        LCK15 OFFSET(15) NUMBITS(1) [],
        /// Lock key: written 1, 0, 1 with LCK bits unchanged, then read twice
        LCKK OFFSET(16) NUMBITS(1) []
    ],
    pub AFRL [
        AFSEL0 OFFSET(0) NUMBITS(4) [],
        AFSEL1 OFFSET(4) NUMBITS(4) [],
        AFSEL2 OFFSET(8) NUMBITS(4) [],
        AFSEL3 OFFSET(12) NUMBITS(4) [],
        AFSEL4 OFFSET(16) NUMBITS(4) [],
        AFSEL5 OFFSET(20) NUMBITS(4) [],
        AFSEL6 OFFSET(24) NUMBITS(4) [],
        AFSEL7 OFFSET(28) NUMBITS(4) []
    ],
    pub AFRH [
        AFSEL8 OFFSET(0) NUMBITS(4) [],
        AFSEL9 OFFSET(4) NUMBITS(4) [],
        AFSEL10 OFFSET(8) NUMBITS(4) [],
        AFSEL11 OFFSET(12) NUMBITS(4) [],
        AFSEL12 OFFSET(16) NUMBITS(4) [],
        AFSEL13 OFFSET(20) NUMBITS(4) [],
        AFSEL14 OFFSET(24) NUMBITS(4) [],
        AFSEL15 OFFSET(28) NUMBITS(4) []
    ]
];

/// MODER after reset of port A: PA13 to PA15 in debug alternate function.
pub const GPIOA_MODER_RESET: u32 = 0xA800_0000;
/// MODER after reset of port B: PB3 and PB4 in debug alternate function.
pub const GPIOB_MODER_RESET: u32 = 0x0000_0280;
/// OSPEEDR after reset of port A: PA13 at very high speed.
pub const GPIOA_OSPEEDR_RESET: u32 = 0x0C00_0000;
/// OSPEEDR after reset of port B: PB3 at very high speed.
pub const GPIOB_OSPEEDR_RESET: u32 = 0x0000_00C0;
pub const GPIOA_PUPDR_RESET: u32 = 0x6400_0000;
pub const GPIOB_PUPDR_RESET: u32 = 0x0000_0100;

instances! {
    /// GPIO ports, in address order.
    pub enum Port {
        A("GPIOA") = memory_map::GPIOA_BASE,
        B("GPIOB") = memory_map::GPIOB_BASE,
        C("GPIOC") = memory_map::GPIOC_BASE,
        D("GPIOD") = memory_map::GPIOD_BASE,
        E("GPIOE") = memory_map::GPIOE_BASE,
        F("GPIOF") = memory_map::GPIOF_BASE,
        G("GPIOG") = memory_map::GPIOG_BASE,
        H("GPIOH") = memory_map::GPIOH_BASE,
        I("GPIOI") = memory_map::GPIOI_BASE,
        J("GPIOJ") = memory_map::GPIOJ_BASE,
        K("GPIOK") = memory_map::GPIOK_BASE,
    }
}

impl Port {
    /// Port code used by SYSCFG_EXTICRx and bit position in
    /// RCC_AHB1ENR, RCC_AHB1RSTR and RCC_AHB1LPENR.
    pub const fn index(self) -> u32 {
        match self {
            Port::A => 0,
            Port::B => 1,
            Port::C => 2,
            Port::D => 3,
            Port::E => 4,
            Port::F => 5,
            Port::G => 6,
            Port::H => 7,
            Port::I => 8,
            Port::J => 9,
            Port::K => 10,
        }
    }

    pub const fn from_index(index: u32) -> Option<Port> {
        if (index as usize) < Port::ALL.len() {
            Some(Port::ALL[index as usize])
        } else {
            None
        }
    }

    /// Reset value of MODER for this port.
    pub const fn moder_reset(self) -> u32 {
        match self {
            Port::A => GPIOA_MODER_RESET,
            Port::B => GPIOB_MODER_RESET,
            Port::C
            | Port::D
            | Port::E
            | Port::F
            | Port::G
            | Port::H
            | Port::I
            | Port::J
            | Port::K => 0,
        }
    }

    /// Reset value of OSPEEDR for this port.
    pub const fn ospeedr_reset(self) -> u32 {
        match self {
            Port::A => GPIOA_OSPEEDR_RESET,
            Port::B => GPIOB_OSPEEDR_RESET,
            Port::C
            | Port::D
            | Port::E
            | Port::F
            | Port::G
            | Port::H
            | Port::I
            | Port::J
            | Port::K => 0,
        }
    }

    /// Reset value of PUPDR for this port.
    pub const fn pupdr_reset(self) -> u32 {
        match self {
            Port::A => GPIOA_PUPDR_RESET,
            Port::B => GPIOB_PUPDR_RESET,
            Port::C
            | Port::D
            | Port::E
            | Port::F
            | Port::G
            | Port::H
            | Port::I
            | Port::J
            | Port::K => 0,
        }
    }
}

pub(crate) const GPIOA: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(memory_map::GPIOA_BASE as *const GpioRegisters) };
pub(crate) const GPIOB: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(memory_map::GPIOB_BASE as *const GpioRegisters) };
pub(crate) const GPIOC: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(memory_map::GPIOC_BASE as *const GpioRegisters) };
pub(crate) const GPIOD: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(memory_map::GPIOD_BASE as *const GpioRegisters) };
pub(crate) const GPIOE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(memory_map::GPIOE_BASE as *const GpioRegisters) };
pub(crate) const GPIOF: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(memory_map::GPIOF_BASE as *const GpioRegisters) };
pub(crate) const GPIOG: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(memory_map::GPIOG_BASE as *const GpioRegisters) };
pub(crate) const GPIOH: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(memory_map::GPIOH_BASE as *const GpioRegisters) };
pub(crate) const GPIOI: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(memory_map::GPIOI_BASE as *const GpioRegisters) };
pub(crate) const GPIOJ: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(memory_map::GPIOJ_BASE as *const GpioRegisters) };
pub(crate) const GPIOK: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(memory_map::GPIOK_BASE as *const GpioRegisters) };

/// Field names used by earlier revisions of the register map.
#[allow(non_snake_case)]
pub mod legacy {
    pub use super::OSPEEDR as OSPEEDER;

    pub mod MODER {
        pub use crate::gpio::MODER::{
            MODER0 as MODE0,
            MODER1 as MODE1,
            MODER2 as MODE2,
            MODER3 as MODE3,
            MODER4 as MODE4,
            MODER5 as MODE5,
            MODER6 as MODE6,
            MODER7 as MODE7,
            MODER8 as MODE8,
            MODER9 as MODE9,
            MODER10 as MODE10,
            MODER11 as MODE11,
            MODER12 as MODE12,
            MODER13 as MODE13,
            MODER14 as MODE14,
            MODER15 as MODE15,
        };
    }

    pub mod OSPEEDR {
        pub use crate::gpio::OSPEEDR::{
            OSPEEDR0 as OSPEED0,
            OSPEEDR1 as OSPEED1,
            OSPEEDR2 as OSPEED2,
            OSPEEDR3 as OSPEED3,
            OSPEEDR4 as OSPEED4,
            OSPEEDR5 as OSPEED5,
            OSPEEDR6 as OSPEED6,
            OSPEEDR7 as OSPEED7,
            OSPEEDR8 as OSPEED8,
            OSPEEDR9 as OSPEED9,
            OSPEEDR10 as OSPEED10,
            OSPEEDR11 as OSPEED11,
            OSPEEDR12 as OSPEED12,
            OSPEEDR13 as OSPEED13,
            OSPEEDR14 as OSPEED14,
            OSPEEDR15 as OSPEED15,
        };
    }

    pub mod PUPDR {
        pub use crate::gpio::PUPDR::{
            PUPDR0 as PUPD0,
            PUPDR1 as PUPD1,
            PUPDR2 as PUPD2,
            PUPDR3 as PUPD3,
            PUPDR4 as PUPD4,
            PUPDR5 as PUPD5,
            PUPDR6 as PUPD6,
            PUPDR7 as PUPD7,
            PUPDR8 as PUPD8,
            PUPDR9 as PUPD9,
            PUPDR10 as PUPD10,
            PUPDR11 as PUPD11,
            PUPDR12 as PUPD12,
            PUPDR13 as PUPD13,
            PUPDR14 as PUPD14,
            PUPDR15 as PUPD15,
        };
    }

    pub mod OTYPER {
        pub use crate::gpio::OTYPER::{
            OT0 as OT_0,
            OT1 as OT_1,
            OT2 as OT_2,
            OT3 as OT_3,
            OT4 as OT_4,
            OT5 as OT_5,
            OT6 as OT_6,
            OT7 as OT_7,
            OT8 as OT_8,
            OT9 as OT_9,
            OT10 as OT_10,
            OT11 as OT_11,
            OT12 as OT_12,
            OT13 as OT_13,
            OT14 as OT_14,
            OT15 as OT_15,
        };
    }

    pub mod IDR {
        pub use crate::gpio::IDR::{
            ID0 as IDR_0,
            ID1 as IDR_1,
            ID2 as IDR_2,
            ID3 as IDR_3,
            ID4 as IDR_4,
            ID5 as IDR_5,
            ID6 as IDR_6,
            ID7 as IDR_7,
            ID8 as IDR_8,
            ID9 as IDR_9,
            ID10 as IDR_10,
            ID11 as IDR_11,
            ID12 as IDR_12,
            ID13 as IDR_13,
            ID14 as IDR_14,
            ID15 as IDR_15,
        };
    }

    pub mod ODR {
        pub use crate::gpio::ODR::{
            OD0 as ODR_0,
            OD1 as ODR_1,
            OD2 as ODR_2,
            OD3 as ODR_3,
            OD4 as ODR_4,
            OD5 as ODR_5,
            OD6 as ODR_6,
            OD7 as ODR_7,
            OD8 as ODR_8,
            OD9 as ODR_9,
            OD10 as ODR_10,
            OD11 as ODR_11,
            OD12 as ODR_12,
            OD13 as ODR_13,
            OD14 as ODR_14,
            OD15 as ODR_15,
        };
    }

    pub mod BSRR {
        pub use crate::gpio::BSRR::{
            BS0 as BS_0,
            BS1 as BS_1,
            BS2 as BS_2,
            BS3 as BS_3,
            BS4 as BS_4,
            BS5 as BS_5,
            BS6 as BS_6,
            BS7 as BS_7,
            BS8 as BS_8,
            BS9 as BS_9,
            BS10 as BS_10,
            BS11 as BS_11,
            BS12 as BS_12,
            BS13 as BS_13,
            BS14 as BS_14,
            BS15 as BS_15,
            BR0 as BR_0,
            BR1 as BR_1,
            BR2 as BR_2,
            BR3 as BR_3,
            BR4 as BR_4,
            BR5 as BR_5,
            BR6 as BR_6,
            BR7 as BR_7,
            BR8 as BR_8,
            BR9 as BR_9,
            BR10 as BR_10,
            BR11 as BR_11,
            BR12 as BR_12,
            BR13 as BR_13,
            BR14 as BR_14,
            BR15 as BR_15,
        };
    }

    pub mod AFRL {
        pub use crate::gpio::AFRL::{
            AFSEL0 as AFRL0,
            AFSEL1 as AFRL1,
            AFSEL2 as AFRL2,
            AFSEL3 as AFRL3,
            AFSEL4 as AFRL4,
            AFSEL5 as AFRL5,
            AFSEL6 as AFRL6,
            AFSEL7 as AFRL7,
        };
    }

    pub mod AFRH {
        pub use crate::gpio::AFRH::{
            AFSEL8 as AFRH8,
            AFSEL9 as AFRH9,
            AFSEL10 as AFRH10,
            AFSEL11 as AFRH11,
            AFSEL12 as AFRH12,
            AFSEL13 as AFRH13,
            AFSEL14 as AFRH14,
            AFSEL15 as AFRH15,
        };
    }
}

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;
    use tock_registers::LocalRegisterCopy;

    use super::*;
    use crate::test_util::{assert_fields, mask};

    #[test]
    fn register_offsets() {
        let offsets = [
            (offset_of!(GpioRegisters, moder), 0x00),
            (offset_of!(GpioRegisters, otyper), 0x04),
            (offset_of!(GpioRegisters, ospeedr), 0x08),
            (offset_of!(GpioRegisters, pupdr), 0x0C),
            (offset_of!(GpioRegisters, idr), 0x10),
            (offset_of!(GpioRegisters, odr), 0x14),
            (offset_of!(GpioRegisters, bsrr), 0x18),
            (offset_of!(GpioRegisters, lckr), 0x1C),
            (offset_of!(GpioRegisters, afrl), 0x20),
            (offset_of!(GpioRegisters, afrh), 0x24),
        ];
        for (actual, expected) in offsets {
            assert_eq!(actual, expected);
        }
        assert_eq!(size_of::<GpioRegisters>(), 0x28);
    }

    #[test]
    fn ports_are_consecutive_windows_from_ahb1() {
        for (i, port) in Port::ALL.iter().enumerate() {
            assert_eq!(port.base(), memory_map::AHB1PERIPH_BASE + 0x400 * i);
            assert_eq!(port.index() as usize, i);
            assert_eq!(Port::from_base(port.base()), Some(*port));
            assert_eq!(Port::from_index(port.index()), Some(*port));
        }
        assert_eq!(Port::K.base(), memory_map::AHB1PERIPH_BASE + 0x2800);
        assert_eq!(Port::from_base(memory_map::AHB1PERIPH_BASE + 0x200), None);
        assert_eq!(Port::from_index(11), None);
    }

    #[test]
    fn bindings_match_ports() {
        let bindings = [
            GPIOA, GPIOB, GPIOC, GPIOD, GPIOE, GPIOF, GPIOG, GPIOH, GPIOI, GPIOJ, GPIOK,
        ];
        for (binding, port) in bindings.iter().zip(Port::ALL) {
            assert_eq!(binding.address(), port.base());
        }
    }

    #[test]
    fn per_pin_fields_tile_registers() {
        let moder = [
            mask(MODER::MODER0),
            mask(MODER::MODER1),
            mask(MODER::MODER2),
            mask(MODER::MODER3),
            mask(MODER::MODER4),
            mask(MODER::MODER5),
            mask(MODER::MODER6),
            mask(MODER::MODER7),
            mask(MODER::MODER8),
            mask(MODER::MODER9),
            mask(MODER::MODER10),
            mask(MODER::MODER11),
            mask(MODER::MODER12),
            mask(MODER::MODER13),
            mask(MODER::MODER14),
            mask(MODER::MODER15),
        ];
        assert_eq!(assert_fields(32, &moder), u32::MAX);
        let pupdr = [
            mask(PUPDR::PUPDR0),
            mask(PUPDR::PUPDR1),
            mask(PUPDR::PUPDR2),
            mask(PUPDR::PUPDR3),
            mask(PUPDR::PUPDR4),
            mask(PUPDR::PUPDR5),
            mask(PUPDR::PUPDR6),
            mask(PUPDR::PUPDR7),
            mask(PUPDR::PUPDR8),
            mask(PUPDR::PUPDR9),
            mask(PUPDR::PUPDR10),
            mask(PUPDR::PUPDR11),
            mask(PUPDR::PUPDR12),
            mask(PUPDR::PUPDR13),
            mask(PUPDR::PUPDR14),
            mask(PUPDR::PUPDR15),
        ];
        assert_eq!(assert_fields(32, &pupdr), u32::MAX);
        let bsrr = [
            mask(BSRR::BS0), mask(BSRR::BR0),
            mask(BSRR::BS1), mask(BSRR::BR1),
            mask(BSRR::BS2), mask(BSRR::BR2),
            mask(BSRR::BS3), mask(BSRR::BR3),
            mask(BSRR::BS4), mask(BSRR::BR4),
            mask(BSRR::BS5), mask(BSRR::BR5),
            mask(BSRR::BS6), mask(BSRR::BR6),
            mask(BSRR::BS7), mask(BSRR::BR7),
            mask(BSRR::BS8), mask(BSRR::BR8),
            mask(BSRR::BS9), mask(BSRR::BR9),
            mask(BSRR::BS10), mask(BSRR::BR10),
            mask(BSRR::BS11), mask(BSRR::BR11),
            mask(BSRR::BS12), mask(BSRR::BR12),
            mask(BSRR::BS13), mask(BSRR::BR13),
            mask(BSRR::BS14), mask(BSRR::BR14),
            mask(BSRR::BS15), mask(BSRR::BR15),
        ];
        assert_eq!(assert_fields(32, &bsrr), u32::MAX);
        let afrh = [
            mask(AFRH::AFSEL8),
            mask(AFRH::AFSEL9),
            mask(AFRH::AFSEL10),
            mask(AFRH::AFSEL11),
            mask(AFRH::AFSEL12),
            mask(AFRH::AFSEL13),
            mask(AFRH::AFSEL14),
            mask(AFRH::AFSEL15),
        ];
        assert_eq!(assert_fields(32, &afrh), u32::MAX);
        let lckr = [
            mask(LCKR::LCK0),
            mask(LCKR::LCK1),
            mask(LCKR::LCK2),
            mask(LCKR::LCK3),
            mask(LCKR::LCK4),
            mask(LCKR::LCK5),
            mask(LCKR::LCK6),
            mask(LCKR::LCK7),
            mask(LCKR::LCK8),
            mask(LCKR::LCK9),
            mask(LCKR::LCK10),
            mask(LCKR::LCK11),
            mask(LCKR::LCK12),
            mask(LCKR::LCK13),
            mask(LCKR::LCK14),
            mask(LCKR::LCK15),
            mask(LCKR::LCKK),
        ];
        assert_eq!(assert_fields(32, &lckr), 0x0001_FFFF);
    }

    #[test]
    fn reset_values_use_declared_fields() {
        let moder = LocalRegisterCopy::<u32, MODER::Register>::new(GPIOA_MODER_RESET);
        assert_eq!(moder.read(MODER::MODER13), 2);
        assert_eq!(moder.read(MODER::MODER14), 2);
        assert_eq!(moder.read(MODER::MODER15), 2);
        let moder = LocalRegisterCopy::<u32, MODER::Register>::new(GPIOB_MODER_RESET);
        assert_eq!(moder.read(MODER::MODER3), 2);
        assert_eq!(moder.read(MODER::MODER4), 2);
        let speed = LocalRegisterCopy::<u32, OSPEEDR::Register>::new(GPIOA_OSPEEDR_RESET);
        assert_eq!(speed.read(OSPEEDR::OSPEEDR13), 3);
        assert_eq!(speed.read(OSPEEDR::OSPEEDR14), 0);
        let speed = LocalRegisterCopy::<u32, OSPEEDR::Register>::new(GPIOB_OSPEEDR_RESET);
        assert_eq!(speed.read(OSPEEDR::OSPEEDR3), 3);
        let pull = LocalRegisterCopy::<u32, PUPDR::Register>::new(GPIOA_PUPDR_RESET);
        assert_eq!(pull.read(PUPDR::PUPDR13), 1);
        assert_eq!(pull.read(PUPDR::PUPDR14), 2);
        assert_eq!(pull.read(PUPDR::PUPDR15), 1);
        let pull = LocalRegisterCopy::<u32, PUPDR::Register>::new(GPIOB_PUPDR_RESET);
        assert_eq!(pull.read(PUPDR::PUPDR4), 1);
    }

    #[test]
    fn reset_values_per_port() {
        for port in Port::ALL {
            let (moder, ospeedr, pupdr) = match port {
                Port::A => (0xA800_0000, 0x0C00_0000, 0x6400_0000),
                Port::B => (0x0000_0280, 0x0000_00C0, 0x0000_0100),
                _ => (0, 0, 0),
            };
            assert_eq!(port.moder_reset(), moder, "{port}");
            assert_eq!(port.ospeedr_reset(), ospeedr, "{port}");
            assert_eq!(port.pupdr_reset(), pupdr, "{port}");
        }
        // the debug pins are the only ones with a non-zero reset state
        for port in Port::ALL {
            let debug = port.moder_reset() | port.ospeedr_reset() | port.pupdr_reset();
            assert_eq!(debug != 0, matches!(port, Port::A | Port::B), "{port}");
        }
    }

    #[test]
    fn named_values_compose() {
        let moder = InMemoryRegister::<u32, MODER::Register>::new(GPIOA_MODER_RESET);
        moder.modify(MODER::MODER5::Output);
        assert_eq!(moder.get(), GPIOA_MODER_RESET | (1 << 10));
        moder.modify(MODER::MODER5::Analog);
        assert_eq!(moder.get(), GPIOA_MODER_RESET | (3 << 10));
        moder.modify(MODER::MODER15::Input);
        assert_eq!(moder.get(), 0x2800_0000 | (3 << 10));

        let afr = InMemoryRegister::<u32, AFRH::Register>::new(0);
        afr.write(AFRH::AFSEL9.val(7) + AFRH::AFSEL10.val(7));
        assert_eq!(afr.get(), 0x0000_0770);
    }

    #[test]
    fn legacy_names_resolve_to_canonical_fields() {
        assert_eq!(mask(legacy::MODER::MODE7), mask(MODER::MODER7));
        assert_eq!(legacy::MODER::MODE7.shift, MODER::MODER7.shift);
        assert_eq!(mask(legacy::OSPEEDER::OSPEEDR2), mask(OSPEEDR::OSPEEDR2));
        assert_eq!(mask(legacy::OSPEEDR::OSPEED2), mask(OSPEEDR::OSPEEDR2));
        assert_eq!(mask(legacy::PUPDR::PUPD12), mask(PUPDR::PUPDR12));
        assert_eq!(mask(legacy::OTYPER::OT_3), mask(OTYPER::OT3));
        assert_eq!(mask(legacy::IDR::IDR_9), mask(IDR::ID9));
        assert_eq!(mask(legacy::ODR::ODR_15), mask(ODR::OD15));
        assert_eq!(mask(legacy::BSRR::BR_0), mask(BSRR::BR0));
        assert_eq!(mask(legacy::AFRL::AFRL1), mask(AFRL::AFSEL1));
        assert_eq!(mask(legacy::AFRH::AFRH15), mask(AFRH::AFSEL15));
        assert_eq!(legacy::MODER::MODE2::Output.value, MODER::MODER2::Output.value);
    }
}
