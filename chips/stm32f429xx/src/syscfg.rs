// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! System configuration controller.
//!
//! Selects what is mapped at address zero, the Ethernet PHY interface and
//! which port drives each EXTI line.

use tock_registers::fields::Field;
use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::ErrorCode;
use crate::gpio::Port;
use crate::memory_map;
use crate::static_ref::StaticRef;

register_structs! {
    pub SyscfgRegisters {
        /// memory remap register
        (0x00 => pub memrmp: ReadWrite<u32, MEMRMP::Register>),
        /// peripheral mode configuration register
        (0x04 => pub pmc: ReadWrite<u32, PMC::Register>),
        /// external interrupt configuration registers 1 to 4
        (0x08 => pub exticr: [ReadWrite<u32, EXTICR::Register>; 4]),
        (0x18 => _reserved0),
        /// compensation cell control register
        (0x20 => pub cmpcr: ReadOnly<u32, CMPCR::Register>),
        (0x24 => @END),
    }
}

register_bitfields![u32,
    pub MEMRMP [
        /// Memory mapped at 0x0000_0000
        MEM_MODE OFFSET(0) NUMBITS(3) [
            MainFlash = 0,
            SystemFlash = 1,
            Fmc = 2,
            Sram = 3,
            Sdram = 4
        ],
        /// Flash bank mode selection
        FB_MODE OFFSET(8) NUMBITS(1) [],
        /// FMC memory mapping swap
        SWP_FMC OFFSET(10) NUMBITS(2) [
            Default = 0,
            SdramSwapped = 1
        ],
        MEM_MODE_0 OFFSET(0) NUMBITS(1) [],
        MEM_MODE_1 OFFSET(1) NUMBITS(1) [],
        MEM_MODE_2 OFFSET(2) NUMBITS(1) [],
        SWP_FMC_0 OFFSET(10) NUMBITS(1) [],
        SWP_FMC_1 OFFSET(11) NUMBITS(1) []
    ],
    pub PMC [
        ADC1DC2 OFFSET(16) NUMBITS(1) [],
        ADC2DC2 OFFSET(17) NUMBITS(1) [],
        ADC3DC2 OFFSET(18) NUMBITS(1) [],
        /// Ethernet PHY interface
        MII_RMII_SEL OFFSET(23) NUMBITS(1) [
            Mii = 0,
            Rmii = 1
        ]
    ],
    /// Each EXTICRn holds the sources of lines 4n to 4n + 3
    pub EXTICR [
        /// Source port of line 4n + 0
        EXTI0 OFFSET(0) NUMBITS(4) [
            PA = 0,
            PB = 1,
            PC = 2,
            PD = 3,
            PE = 4,
            PF = 5,
            PG = 6,
            PH = 7,
            PI = 8,
            PJ = 9,
            PK = 10
        ],
        /// Source port of line 4n + 1
        EXTI1 OFFSET(4) NUMBITS(4) [
            PA = 0,
            PB = 1,
            PC = 2,
            PD = 3,
            PE = 4,
            PF = 5,
            PG = 6,
            PH = 7,
            PI = 8,
            PJ = 9,
            PK = 10
        ],
        /// Source port of line 4n + 2
        EXTI2 OFFSET(8) NUMBITS(4) [
            PA = 0,
            PB = 1,
            PC = 2,
            PD = 3,
            PE = 4,
            PF = 5,
            PG = 6,
            PH = 7,
            PI = 8,
            PJ = 9,
            PK = 10
        ],
        /// Source port of line 4n + 3
        EXTI3 OFFSET(12) NUMBITS(4) [
            PA = 0,
            PB = 1,
            PC = 2,
            PD = 3,
            PE = 4,
            PF = 5,
            PG = 6,
            PH = 7,
            PI = 8,
            PJ = 9,
            PK = 10
        ]
    ],
    pub CMPCR [
        /// Compensation cell power-down
        CMP_PD OFFSET(0) NUMBITS(1) [],
        /// Compensation cell ready flag
        READY OFFSET(8) NUMBITS(1) []
    ]
];

/// Register index into `exticr` and source field for EXTI line `line`.
///
/// Only lines 0 to 15 are driven by GPIO pins; other lines return
/// `ErrorCode::INVAL`.
pub const fn exticr_field(line: u8) -> Result<(usize, Field<u32, EXTICR::Register>), ErrorCode> {
    if line >= 16 {
        return Err(ErrorCode::INVAL);
    }
    let field = match line % 4 {
        0 => EXTICR::EXTI0,
        1 => EXTICR::EXTI1,
        2 => EXTICR::EXTI2,
        _ => EXTICR::EXTI3,
    };
    Ok(((line / 4) as usize, field))
}

/// Value to write into the EXTICR source field for `port`.
pub const fn exticr_source(port: Port) -> u32 {
    port.index()
}

pub(crate) const SYSCFG: StaticRef<SyscfgRegisters> =
    unsafe { StaticRef::new(memory_map::SYSCFG_BASE as *const SyscfgRegisters) };

#[allow(non_snake_case)]
pub mod legacy {
    pub mod MEMRMP {
        pub use crate::syscfg::MEMRMP::FB_MODE as UFB_MODE;
    }

    pub mod PMC {
        pub use crate::syscfg::PMC::MII_RMII_SEL as MII_RMII;
    }
}

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use tock_registers::interfaces::{ReadWriteable, Readable};
    use tock_registers::registers::InMemoryRegister;

    use super::*;
    use crate::test_util::{assert_components, assert_fields, mask};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(SyscfgRegisters, memrmp), 0x00);
        assert_eq!(offset_of!(SyscfgRegisters, pmc), 0x04);
        assert_eq!(offset_of!(SyscfgRegisters, exticr), 0x08);
        assert_eq!(offset_of!(SyscfgRegisters, cmpcr), 0x20);
        assert_eq!(size_of::<SyscfgRegisters>(), 0x24);
        // EXTICR4
        assert_eq!(offset_of!(SyscfgRegisters, exticr) + 3 * 4, 0x14);
        assert_eq!(SYSCFG.address(), 0x4001_3800);
    }

    #[test]
    fn fields() {
        assert_eq!(assert_fields(32, &[
            mask(MEMRMP::MEM_MODE),
            mask(MEMRMP::FB_MODE),
            mask(MEMRMP::SWP_FMC),
        ]), 0x0000_0D07);
        assert_eq!(assert_fields(32, &[
            mask(PMC::ADC1DC2),
            mask(PMC::ADC2DC2),
            mask(PMC::ADC3DC2),
            mask(PMC::MII_RMII_SEL),
        ]), 0x0087_0000);
        assert_eq!(assert_fields(32, &[
            mask(EXTICR::EXTI0),
            mask(EXTICR::EXTI1),
            mask(EXTICR::EXTI2),
            mask(EXTICR::EXTI3),
        ]), 0xFFFF);
        assert_components(
            mask(MEMRMP::MEM_MODE),
            &[mask(MEMRMP::MEM_MODE_0), mask(MEMRMP::MEM_MODE_1), mask(MEMRMP::MEM_MODE_2)],
        );
        assert_components(
            mask(MEMRMP::SWP_FMC),
            &[mask(MEMRMP::SWP_FMC_0), mask(MEMRMP::SWP_FMC_1)],
        );
    }

    #[test]
    fn exti_line_addressing() {
        for line in 0..16u8 {
            let (index, field) = exticr_field(line).unwrap();
            assert_eq!(index, usize::from(line / 4));
            assert_eq!(field.shift, 4 * usize::from(line % 4));
            assert_eq!(field.mask, 0xF);
        }
        assert_eq!(exticr_field(16).err(), Some(ErrorCode::INVAL));
        assert_eq!(exticr_field(22).err(), Some(ErrorCode::INVAL));
    }

    #[test]
    fn route_pc13() {
        let exticr = InMemoryRegister::<u32, EXTICR::Register>::new(0);
        let (index, field) = exticr_field(13).unwrap();
        assert_eq!(index, 3);
        exticr.modify(field.val(exticr_source(Port::C)));
        assert_eq!(exticr.get(), 0x0020);
        assert_eq!(exticr.read_as_enum(EXTICR::EXTI1), Some(EXTICR::EXTI1::Value::PC));
        assert_eq!(exticr_source(Port::K), EXTICR::EXTI0::PK.value);
    }

    #[test]
    fn legacy_names() {
        assert_eq!(mask(legacy::PMC::MII_RMII), 1 << 23);
        assert_eq!(mask(legacy::MEMRMP::UFB_MODE), mask(MEMRMP::FB_MODE));
    }

    #[test]
    fn compensation_cell_fields() {
        assert_eq!(assert_fields(32, &[mask(CMPCR::CMP_PD), mask(CMPCR::READY)]), 0x0101);
    }
}
