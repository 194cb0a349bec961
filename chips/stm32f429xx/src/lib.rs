// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Register map of the STM32F429 microcontroller.
//!
//! Every peripheral is described by a `register_structs!` layout and a set
//! of `register_bitfields!` field types. Instances are handed out once
//! through [`peripherals::Peripherals::take`]; each handle derefs to its
//! register block, whose accessors are volatile.

#![no_std]

/// Declares the instance roster of a peripheral family as an enum with its
/// base addresses.
macro_rules! instances {
    (
        $(#[$attr:meta])*
        pub enum $family:ident {
            $($(#[$vattr:meta])* $variant:ident($name:literal) = $base:expr,)*
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $family {
            $($(#[$vattr])* $variant,)*
        }

        impl $family {
            pub const ALL: &'static [$family] = &[$($family::$variant,)*];

            /// Address of the instance's register block.
            pub const fn base(self) -> usize {
                match self {
                    $($family::$variant => $base,)*
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $($family::$variant => $name,)*
                }
            }

            /// The instance whose register block starts at `base`.
            pub const fn from_base(base: usize) -> Option<$family> {
                let mut i = 0;
                while i < Self::ALL.len() {
                    if Self::ALL[i].base() == base {
                        return Some(Self::ALL[i]);
                    }
                    i += 1;
                }
                None
            }
        }

        impl core::fmt::Display for $family {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str(self.name())
            }
        }

        #[cfg(feature = "defmt")]
        impl defmt::Format for $family {
            fn format(&self, f: defmt::Formatter) {
                defmt::write!(f, "{=str}", self.name());
            }
        }
    };
}

pub mod bitband;
pub mod chip_specs;
pub mod errorcode;
pub mod memory_map;
pub mod nvic;
pub mod peripherals;
pub mod signature;
pub mod static_ref;

pub mod adc;
pub mod can;
pub mod crc;
pub mod dac;
pub mod dbgmcu;
pub mod dcmi;
pub mod dma;
pub mod dma2d;
pub mod ethernet;
pub mod exti;
pub mod flash;
pub mod fmc;
pub mod gpio;
pub mod i2c;
pub mod iwdg;
pub mod ltdc;
pub mod pwr;
pub mod rcc;
pub mod rng;
pub mod rtc;
pub mod sai;
pub mod sdio;
pub mod spi;
pub mod syscfg;
pub mod tim;
pub mod usart;
pub mod usb_otg;
pub mod wwdg;

#[cfg(test)]
mod test_util;

pub use crate::errorcode::ErrorCode;
pub use crate::nvic::Interrupt;
pub use crate::peripherals::Peripherals;
pub use crate::static_ref::StaticRef;
