// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Independent watchdog.
//!
//! The watchdog runs from LSI and cannot be stopped once started. PR and RLR
//! are write protected until KR receives the unlock key, and SR reports
//! while an update of either is still crossing into the LSI domain.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::static_ref::StaticRef;

/// Reset value of RLR, the longest timeout.
pub const RLR_RESET: u32 = 0x0FFF;

register_structs! {
    pub IwdgRegisters {
        /// key register
        (0x00 => pub kr: WriteOnly<u32, KR::Register>),
        /// prescaler register
        (0x04 => pub pr: ReadWrite<u32, PR::Register>),
        /// reload register
        (0x08 => pub rlr: ReadWrite<u32, RLR::Register>),
        /// status register
        (0x0C => pub sr: ReadOnly<u32, SR::Register>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub KR [
        KEY OFFSET(0) NUMBITS(16) [
            /// Starts the watchdog
            Start = 0xCCCC,
            /// Reloads the counter from RLR
            Reload = 0xAAAA,
            /// Enables writes to PR and RLR
            Unlock = 0x5555
        ]
    ],
    pub PR [
        PR OFFSET(0) NUMBITS(3) [
            DivideBy4 = 0,
            DivideBy8 = 1,
            DivideBy16 = 2,
            DivideBy32 = 3,
            DivideBy64 = 4,
            DivideBy128 = 5,
            DivideBy256 = 6
        ],
        PR_0 OFFSET(0) NUMBITS(1) [],
        PR_1 OFFSET(1) NUMBITS(1) [],
        PR_2 OFFSET(2) NUMBITS(1) []
    ],
    pub RLR [
        RL OFFSET(0) NUMBITS(12) []
    ],
    pub SR [
        /// Prescaler value update
        PVU OFFSET(0) NUMBITS(1) [],
        /// Reload value update
        RVU OFFSET(1) NUMBITS(1) []
    ]
];

pub(crate) const IWDG: StaticRef<IwdgRegisters> =
    unsafe { StaticRef::new(memory_map::IWDG_BASE as *const IwdgRegisters) };

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use tock_registers::interfaces::{Readable, Writeable};
    use tock_registers::registers::InMemoryRegister;

    use super::*;
    use crate::test_util::{assert_components, assert_fields, mask};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(IwdgRegisters, kr), 0x0);
        assert_eq!(offset_of!(IwdgRegisters, pr), 0x4);
        assert_eq!(offset_of!(IwdgRegisters, rlr), 0x8);
        assert_eq!(offset_of!(IwdgRegisters, sr), 0xC);
        assert_eq!(size_of::<IwdgRegisters>(), 0x10);
        assert_eq!(IWDG.address(), 0x4000_3000);
    }

    #[test]
    fn keys() {
        assert_eq!(KR::KEY::Start.value, 0xCCCC);
        assert_eq!(KR::KEY::Reload.value, 0xAAAA);
        assert_eq!(KR::KEY::Unlock.value, 0x5555);
        assert_eq!(mask(KR::KEY), 0xFFFF);
    }

    #[test]
    fn fields() {
        assert_components(mask(PR::PR), &[mask(PR::PR_0), mask(PR::PR_1), mask(PR::PR_2)]);
        assert_eq!(mask(RLR::RL), RLR_RESET);
        assert_eq!(assert_fields(32, &[mask(SR::PVU), mask(SR::RVU)]), 0x3);
    }

    #[test]
    fn reload_at_reset_is_the_full_field() {
        let rlr = InMemoryRegister::<u32, RLR::Register>::new(RLR_RESET);
        assert_eq!(rlr.read(RLR::RL), 0xFFF);
        let pr = InMemoryRegister::<u32, PR::Register>::new(0);
        pr.write(PR::PR::DivideBy256);
        assert_eq!(pr.get(), 6);
        assert!(pr.is_set(PR::PR_1));
        assert!(!pr.is_set(PR::PR_0));
    }
}
