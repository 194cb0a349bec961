// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! MCU debug component.
//!
//! Lives on the private peripheral bus, outside the bit-band region. Reads
//! of IDCODE work without a debugger attached.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::static_ref::StaticRef;

/// Device identifier of the STM32F42x and STM32F43x lines.
pub const DEV_ID: u32 = 0x419;

register_structs! {
    pub DbgmcuRegisters {
        /// identity code
        (0x00 => pub idcode: ReadOnly<u32, IDCODE::Register>),
        /// configuration register
        (0x04 => pub cr: ReadWrite<u32, CR::Register>),
        /// APB1 freeze register
        (0x08 => pub apb1fz: ReadWrite<u32, APB1FZ::Register>),
        /// APB2 freeze register
        (0x0C => pub apb2fz: ReadWrite<u32, APB2FZ::Register>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub IDCODE [
        /// Device identifier
        DEV_ID OFFSET(0) NUMBITS(12) [],
        /// Revision identifier
        REV_ID OFFSET(16) NUMBITS(16) [
            RevA = 0x1000,
            RevB = 0x2000,
            RevY = 0x1003,
            Rev1 = 0x1007,
            Rev3 = 0x2001
        ]
    ],
    pub CR [
        /// Debug in Sleep mode
        DBG_SLEEP OFFSET(0) NUMBITS(1) [],
        /// Debug in Stop mode
        DBG_STOP OFFSET(1) NUMBITS(1) [],
        /// Debug in Standby mode
        DBG_STANDBY OFFSET(2) NUMBITS(1) [],
        /// Trace pin assignment enable
        TRACE_IOEN OFFSET(5) NUMBITS(1) [],
        /// Trace pin assignment
        TRACE_MODE OFFSET(6) NUMBITS(2) [
            Asynchronous = 0,
            Synchronous1 = 1,
            Synchronous2 = 2,
            Synchronous4 = 3
        ]
    ],
    pub APB1FZ [
        DBG_TIM2_STOP OFFSET(0) NUMBITS(1) [],
        DBG_TIM3_STOP OFFSET(1) NUMBITS(1) [],
        DBG_TIM4_STOP OFFSET(2) NUMBITS(1) [],
        DBG_TIM5_STOP OFFSET(3) NUMBITS(1) [],
        DBG_TIM6_STOP OFFSET(4) NUMBITS(1) [],
        DBG_TIM7_STOP OFFSET(5) NUMBITS(1) [],
        DBG_TIM12_STOP OFFSET(6) NUMBITS(1) [],
        DBG_TIM13_STOP OFFSET(7) NUMBITS(1) [],
        DBG_TIM14_STOP OFFSET(8) NUMBITS(1) [],
        DBG_RTC_STOP OFFSET(10) NUMBITS(1) [],
        DBG_WWDG_STOP OFFSET(11) NUMBITS(1) [],
        DBG_IWDG_STOP OFFSET(12) NUMBITS(1) [],
        DBG_I2C1_SMBUS_TIMEOUT OFFSET(21) NUMBITS(1) [],
        DBG_I2C2_SMBUS_TIMEOUT OFFSET(22) NUMBITS(1) [],
        DBG_I2C3_SMBUS_TIMEOUT OFFSET(23) NUMBITS(1) [],
        DBG_CAN1_STOP OFFSET(25) NUMBITS(1) [],
        DBG_CAN2_STOP OFFSET(26) NUMBITS(1) []
    ],
    pub APB2FZ [
        DBG_TIM1_STOP OFFSET(0) NUMBITS(1) [],
        DBG_TIM8_STOP OFFSET(1) NUMBITS(1) [],
        DBG_TIM9_STOP OFFSET(16) NUMBITS(1) [],
        DBG_TIM10_STOP OFFSET(17) NUMBITS(1) [],
        DBG_TIM11_STOP OFFSET(18) NUMBITS(1) []
    ]
];

pub(crate) const DBGMCU: StaticRef<DbgmcuRegisters> =
    unsafe { StaticRef::new(memory_map::DBGMCU_BASE as *const DbgmcuRegisters) };

#[allow(non_snake_case)]
pub mod legacy {
    pub mod APB1FZ {
        pub use crate::dbgmcu::APB1FZ::DBG_IWDG_STOP as DBG_IWDEG_STOP;
    }
}

#[cfg(test)]
mod tests {
    use core::mem::{offset_of, size_of};

    use tock_registers::LocalRegisterCopy;

    use super::*;
    use crate::test_util::{assert_fields, mask};

    #[test]
    fn layout() {
        assert_eq!(offset_of!(DbgmcuRegisters, idcode), 0x0);
        assert_eq!(offset_of!(DbgmcuRegisters, cr), 0x4);
        assert_eq!(offset_of!(DbgmcuRegisters, apb1fz), 0x8);
        assert_eq!(offset_of!(DbgmcuRegisters, apb2fz), 0xC);
        assert_eq!(size_of::<DbgmcuRegisters>(), 0x10);
        assert_eq!(DBGMCU.address(), 0xE004_2000);
    }

    #[test]
    fn fields() {
        assert_eq!(assert_fields(32, &[mask(IDCODE::DEV_ID), mask(IDCODE::REV_ID)]), 0xFFFF_0FFF);
        assert_eq!(assert_fields(32, &[
            mask(CR::DBG_SLEEP),
            mask(CR::DBG_STOP),
            mask(CR::DBG_STANDBY),
            mask(CR::TRACE_IOEN),
            mask(CR::TRACE_MODE),
        ]), 0xE7);
        assert_eq!(assert_fields(32, &[
            mask(APB1FZ::DBG_TIM2_STOP),
            mask(APB1FZ::DBG_TIM3_STOP),
            mask(APB1FZ::DBG_TIM4_STOP),
            mask(APB1FZ::DBG_TIM5_STOP),
            mask(APB1FZ::DBG_TIM6_STOP),
            mask(APB1FZ::DBG_TIM7_STOP),
            mask(APB1FZ::DBG_TIM12_STOP),
            mask(APB1FZ::DBG_TIM13_STOP),
            mask(APB1FZ::DBG_TIM14_STOP),
            mask(APB1FZ::DBG_RTC_STOP),
            mask(APB1FZ::DBG_WWDG_STOP),
            mask(APB1FZ::DBG_IWDG_STOP),
            mask(APB1FZ::DBG_I2C1_SMBUS_TIMEOUT),
            mask(APB1FZ::DBG_I2C2_SMBUS_TIMEOUT),
            mask(APB1FZ::DBG_I2C3_SMBUS_TIMEOUT),
            mask(APB1FZ::DBG_CAN1_STOP),
            mask(APB1FZ::DBG_CAN2_STOP),
        ]), 0x06E0_1DFF);
        assert_eq!(assert_fields(32, &[
            mask(APB2FZ::DBG_TIM1_STOP),
            mask(APB2FZ::DBG_TIM8_STOP),
            mask(APB2FZ::DBG_TIM9_STOP),
            mask(APB2FZ::DBG_TIM10_STOP),
            mask(APB2FZ::DBG_TIM11_STOP),
        ]), 0x0007_0003);
    }

    #[test]
    fn idcode_decodes() {
        let idcode = LocalRegisterCopy::<u32, IDCODE::Register>::new(0x2001_6419);
        assert_eq!(idcode.read(IDCODE::DEV_ID), DEV_ID);
        assert_eq!(idcode.read_as_enum(IDCODE::REV_ID), Some(IDCODE::REV_ID::Value::Rev3));
    }

    #[test]
    fn legacy_names() {
        assert_eq!(mask(legacy::APB1FZ::DBG_IWDEG_STOP), 1 << 12);
    }
}
