// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Power controller.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::static_ref::StaticRef;

/// CR after reset: voltage scale 1.
pub const CR_RESET: u32 = 0x0000_C000;

register_structs! {
    pub PwrRegisters {
        /// power control register
        (0x0 => pub cr: ReadWrite<u32, CR::Register>),
        /// power control/status register
        (0x4 => pub csr: ReadWrite<u32, CSR::Register>),
        (0x8 => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Low-power deepsleep
        LPDS OFFSET(0) NUMBITS(1) [],
        /// Power down deepsleep
        PDDS OFFSET(1) NUMBITS(1) [],
        /// Clear wakeup flag
        CWUF OFFSET(2) NUMBITS(1) [],
        /// Clear standby flag
        CSBF OFFSET(3) NUMBITS(1) [],
        /// Power voltage detector enable
        PVDE OFFSET(4) NUMBITS(1) [],
        /// PVD level selection
        PLS OFFSET(5) NUMBITS(3) [
            Level2V0 = 0,
            Level2V1 = 1,
            Level2V3 = 2,
            Level2V5 = 3,
            Level2V6 = 4,
            Level2V7 = 5,
            Level2V8 = 6,
            Level2V9 = 7
        ],
        /// Disable backup domain write protection
        DBP OFFSET(8) NUMBITS(1) [],
        /// Flash power down in Stop mode
        FPDS OFFSET(9) NUMBITS(1) [],
        /// Low-power regulator in deepsleep under-drive mode
        LPUDS OFFSET(10) NUMBITS(1) [],
        /// Main regulator in deepsleep under-drive mode
        MRUDS OFFSET(11) NUMBITS(1) [],
        ADCDC1 OFFSET(13) NUMBITS(1) [],
        /// Regulator voltage scaling output selection
        VOS OFFSET(14) NUMBITS(2) [
            Scale3 = 1,
            Scale2 = 2,
            Scale1 = 3
        ],
        /// Over-drive enable
        ODEN OFFSET(16) NUMBITS(1) [],
        /// Over-drive switching enabled
        ODSWEN OFFSET(17) NUMBITS(1) [],
        /// Under-drive enable in stop mode
        UDEN OFFSET(18) NUMBITS(2) [
            Disabled = 0,
            Enabled = 3
        ],
        PLS_0 OFFSET(5) NUMBITS(1) [],
        PLS_1 OFFSET(6) NUMBITS(1) [],
        PLS_2 OFFSET(7) NUMBITS(1) [],
        VOS_0 OFFSET(14) NUMBITS(1) [],
        VOS_1 OFFSET(15) NUMBITS(1) [],
        UDEN_0 OFFSET(18) NUMBITS(1) [],
        UDEN_1 OFFSET(19) NUMBITS(1) []
    ],
    pub CSR [
        /// Wakeup flag
        WUF OFFSET(0) NUMBITS(1) [],
        /// Standby flag
        SBF OFFSET(1) NUMBITS(1) [],
        /// PVD output
        PVDO OFFSET(2) NUMBITS(1) [],
        /// Backup regulator ready
        BRR OFFSET(3) NUMBITS(1) [],
        /// Enable WKUP pin
        EWUP OFFSET(8) NUMBITS(1) [],
        /// Backup regulator enable
        BRE OFFSET(9) NUMBITS(1) [],
        /// Regulator voltage scaling output selection ready
        VOSRDY OFFSET(14) NUMBITS(1) [],
        /// Over-drive mode ready
        ODRDY OFFSET(16) NUMBITS(1) [],
        /// Over-drive mode switching ready
        ODSWRDY OFFSET(17) NUMBITS(1) [],
        /// Under-drive ready flag
        UDRDY OFFSET(18) NUMBITS(2) [],
        UDRDY_0 OFFSET(18) NUMBITS(1) [],
        UDRDY_1 OFFSET(19) NUMBITS(1) []
    ]
];

pub(crate) const PWR: StaticRef<PwrRegisters> =
    unsafe { StaticRef::new(memory_map::PWR_BASE as *const PwrRegisters) };

#[allow(non_snake_case)]
pub mod legacy {
    pub mod CR {
        pub use crate::pwr::CR::{VOS as PMODE, VOS_0 as PMODE_0, VOS_1 as PMODE_1};
    }

    pub mod CSR {
        pub use crate::pwr::CSR::VOSRDY as REGRDY;
    }
}
