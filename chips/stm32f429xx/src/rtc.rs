// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Real-time clock and backup registers.
//!
//! Calendar registers hold binary coded decimal digits. Writes to anything
//! but the backup registers need the write protection lifted through `WPR`
//! first.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::ErrorCode;
use crate::memory_map;
use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

pub const BACKUP_REGISTERS: usize = 20;

pub const DR_RESET: u32 = 0x0000_2101;
pub const ISR_RESET: u32 = 0x0000_0007;
pub const PRER_RESET: u32 = 0x007F_00FF;
pub const WUTR_RESET: u32 = 0x0000_FFFF;

pub const TAMP_STAMP_INTERRUPT: Interrupt = Interrupt::TAMP_STAMP;
pub const WAKEUP_INTERRUPT: Interrupt = Interrupt::RTC_WKUP;
pub const ALARM_INTERRUPT: Interrupt = Interrupt::RTC_Alarm;

register_structs! {
    pub RtcRegisters {
        /// time register
        (0x00 => pub tr: ReadWrite<u32, TR::Register>),
        /// date register
        (0x04 => pub dr: ReadWrite<u32, DR::Register>),
        (0x08 => pub cr: ReadWrite<u32, CR::Register>),
        /// initialization and status register
        (0x0C => pub isr: ReadWrite<u32, ISR::Register>),
        /// prescaler register
        (0x10 => pub prer: ReadWrite<u32, PRER::Register>),
        /// wakeup timer register
        (0x14 => pub wutr: ReadWrite<u32, WUTR::Register>),
        /// coarse calibration register
        (0x18 => pub calibr: ReadWrite<u32, CALIBR::Register>),
        (0x1C => pub alrmar: ReadWrite<u32, ALRMR::Register>),
        (0x20 => pub alrmbr: ReadWrite<u32, ALRMR::Register>),
        /// write protection register
        (0x24 => pub wpr: WriteOnly<u32, WPR::Register>),
        /// sub second register
        (0x28 => pub ssr: ReadOnly<u32, SSR::Register>),
        /// shift control register
        (0x2C => pub shiftr: WriteOnly<u32, SHIFTR::Register>),
        /// timestamp time register
        (0x30 => pub tstr: ReadOnly<u32, TR::Register>),
        /// timestamp date register
        (0x34 => pub tsdr: ReadOnly<u32, TSDR::Register>),
        /// timestamp sub second register
        (0x38 => pub tsssr: ReadOnly<u32, SSR::Register>),
        /// smooth calibration register
        (0x3C => pub calr: ReadWrite<u32, CALR::Register>),
        /// tamper and alternate function configuration register
        (0x40 => pub tafcr: ReadWrite<u32, TAFCR::Register>),
        (0x44 => pub alrmassr: ReadWrite<u32, ALRMSSR::Register>),
        (0x48 => pub alrmbssr: ReadWrite<u32, ALRMSSR::Register>),
        (0x4C => _reserved0),
        /// backup registers, kept in the backup domain
        (0x50 => pub bkp: [ReadWrite<u32>; BACKUP_REGISTERS]),
        (0xA0 => @END),
    }
}

register_bitfields![u32,
    pub TR [
        /// Second units in BCD
        SU OFFSET(0) NUMBITS(4) [],
        /// Second tens in BCD
        ST OFFSET(4) NUMBITS(3) [],
        /// Minute units in BCD
        MNU OFFSET(8) NUMBITS(4) [],
        /// Minute tens in BCD
        MNT OFFSET(12) NUMBITS(3) [],
        /// Hour units in BCD
        HU OFFSET(16) NUMBITS(4) [],
        /// Hour tens in BCD
        HT OFFSET(20) NUMBITS(2) [],
        /// AM/PM notation
        PM OFFSET(22) NUMBITS(1) [
            Am = 0,
            Pm = 1
        ],
        SU_0 OFFSET(0) NUMBITS(1) [],
        SU_1 OFFSET(1) NUMBITS(1) [],
        SU_2 OFFSET(2) NUMBITS(1) [],
        SU_3 OFFSET(3) NUMBITS(1) [],
        ST_0 OFFSET(4) NUMBITS(1) [],
        ST_1 OFFSET(5) NUMBITS(1) [],
        ST_2 OFFSET(6) NUMBITS(1) [],
        MNU_0 OFFSET(8) NUMBITS(1) [],
        MNU_1 OFFSET(9) NUMBITS(1) [],
        MNU_2 OFFSET(10) NUMBITS(1) [],
        MNU_3 OFFSET(11) NUMBITS(1) [],
        MNT_0 OFFSET(12) NUMBITS(1) [],
        MNT_1 OFFSET(13) NUMBITS(1) [],
        MNT_2 OFFSET(14) NUMBITS(1) [],
        HU_0 OFFSET(16) NUMBITS(1) [],
        HU_1 OFFSET(17) NUMBITS(1) [],
        HU_2 OFFSET(18) NUMBITS(1) [],
        HU_3 OFFSET(19) NUMBITS(1) [],
        HT_0 OFFSET(20) NUMBITS(1) [],
        HT_1 OFFSET(21) NUMBITS(1) []
    ],
    pub DR [
        /// Date units in BCD
        DU OFFSET(0) NUMBITS(4) [],
        /// Date tens in BCD
        DT OFFSET(4) NUMBITS(2) [],
        /// Month units in BCD
        MU OFFSET(8) NUMBITS(4) [],
        /// Month tens in BCD
        MT OFFSET(12) NUMBITS(1) [],
        /// Week day, 1 is Monday
        WDU OFFSET(13) NUMBITS(3) [],
        /// Year units in BCD
        YU OFFSET(16) NUMBITS(4) [],
        /// Year tens in BCD
        YT OFFSET(20) NUMBITS(4) [],
        DU_0 OFFSET(0) NUMBITS(1) [],
        DU_1 OFFSET(1) NUMBITS(1) [],
        DU_2 OFFSET(2) NUMBITS(1) [],
        DU_3 OFFSET(3) NUMBITS(1) [],
        DT_0 OFFSET(4) NUMBITS(1) [],
        DT_1 OFFSET(5) NUMBITS(1) [],
        MU_0 OFFSET(8) NUMBITS(1) [],
        MU_1 OFFSET(9) NUMBITS(1) [],
        MU_2 OFFSET(10) NUMBITS(1) [],
        MU_3 OFFSET(11) NUMBITS(1) [],
        WDU_0 OFFSET(13) NUMBITS(1) [],
        WDU_1 OFFSET(14) NUMBITS(1) [],
        WDU_2 OFFSET(15) NUMBITS(1) [],
        YU_0 OFFSET(16) NUMBITS(1) [],
        YU_1 OFFSET(17) NUMBITS(1) [],
        YU_2 OFFSET(18) NUMBITS(1) [],
        YU_3 OFFSET(19) NUMBITS(1) [],
        YT_0 OFFSET(20) NUMBITS(1) [],
        YT_1 OFFSET(21) NUMBITS(1) [],
        YT_2 OFFSET(22) NUMBITS(1) [],
        YT_3 OFFSET(23) NUMBITS(1) []
    ],
    pub CR [
        /// Wakeup clock selection
        WUCKSEL OFFSET(0) NUMBITS(3) [],
        /// Timestamp event active edge
        TSEDGE OFFSET(3) NUMBITS(1) [],
        /// Reference clock detection enable
        REFCKON OFFSET(4) NUMBITS(1) [],
        /// Bypass the shadow registers
        BYPSHAD OFFSET(5) NUMBITS(1) [],
        /// Hour format
        FMT OFFSET(6) NUMBITS(1) [
            Hours24 = 0,
            AmPm = 1
        ],
        /// Coarse digital calibration enable
        DCE OFFSET(7) NUMBITS(1) [],
        /// Alarm A enable
        ALRAE OFFSET(8) NUMBITS(1) [],
        /// Alarm B enable
        ALRBE OFFSET(9) NUMBITS(1) [],
        /// Wakeup timer enable
        WUTE OFFSET(10) NUMBITS(1) [],
        /// Timestamp enable
        TSE OFFSET(11) NUMBITS(1) [],
        /// Alarm A interrupt enable
        ALRAIE OFFSET(12) NUMBITS(1) [],
        /// Alarm B interrupt enable
        ALRBIE OFFSET(13) NUMBITS(1) [],
        /// Wakeup timer interrupt enable
        WUTIE OFFSET(14) NUMBITS(1) [],
        /// Timestamp interrupt enable
        TSIE OFFSET(15) NUMBITS(1) [],
        /// Add one hour (summer time change)
        ADD1H OFFSET(16) NUMBITS(1) [],
        /// Subtract one hour (winter time change)
        SUB1H OFFSET(17) NUMBITS(1) [],
        /// Backup, records the summer time change
        BKP OFFSET(18) NUMBITS(1) [],
        /// Calibration output selection
        COSEL OFFSET(19) NUMBITS(1) [],
        /// Output polarity
        POL OFFSET(20) NUMBITS(1) [],
        /// Output selection
        OSEL OFFSET(21) NUMBITS(2) [
            Disabled = 0,
            AlarmA = 1,
            AlarmB = 2,
            Wakeup = 3
        ],
        /// Calibration output enable
        COE OFFSET(23) NUMBITS(1) [],
        WUCKSEL_0 OFFSET(0) NUMBITS(1) [],
        WUCKSEL_1 OFFSET(1) NUMBITS(1) [],
        WUCKSEL_2 OFFSET(2) NUMBITS(1) [],
        OSEL_0 OFFSET(21) NUMBITS(1) [],
        OSEL_1 OFFSET(22) NUMBITS(1) []
    ],
    pub ISR [
        /// Alarm A write flag
        ALRAWF OFFSET(0) NUMBITS(1) [],
        /// Alarm B write flag
        ALRBWF OFFSET(1) NUMBITS(1) [],
        /// Wakeup timer write flag
        WUTWF OFFSET(2) NUMBITS(1) [],
        /// Shift operation pending
        SHPF OFFSET(3) NUMBITS(1) [],
        /// Initialization status
        INITS OFFSET(4) NUMBITS(1) [],
        /// Registers synchronization flag
        RSF OFFSET(5) NUMBITS(1) [],
        /// Initialization flag
        INITF OFFSET(6) NUMBITS(1) [],
        /// Initialization mode
        INIT OFFSET(7) NUMBITS(1) [],
        /// Alarm A flag
        ALRAF OFFSET(8) NUMBITS(1) [],
        /// Alarm B flag
        ALRBF OFFSET(9) NUMBITS(1) [],
        /// Wakeup timer flag
        WUTF OFFSET(10) NUMBITS(1) [],
        /// Timestamp flag
        TSF OFFSET(11) NUMBITS(1) [],
        /// Timestamp overflow flag
        TSOVF OFFSET(12) NUMBITS(1) [],
        /// Tamper 1 detection flag
        TAMP1F OFFSET(13) NUMBITS(1) [],
        /// Tamper 2 detection flag
        TAMP2F OFFSET(14) NUMBITS(1) [],
        /// Recalibration pending
        RECALPF OFFSET(16) NUMBITS(1) []
    ],
    pub PRER [
        /// Synchronous prescaler factor
        PREDIV_S OFFSET(0) NUMBITS(15) [],
        /// Asynchronous prescaler factor
        PREDIV_A OFFSET(16) NUMBITS(7) []
    ],
    pub WUTR [
        /// Wakeup auto-reload value
        WUT OFFSET(0) NUMBITS(16) []
    ],
    pub CALIBR [
        /// Digital calibration
        DC OFFSET(0) NUMBITS(5) [],
        /// Digital calibration sign
        DCS OFFSET(7) NUMBITS(1) [
            Positive = 0,
            Negative = 1
        ]
    ],
    /// Alarm A and B share this layout
    pub ALRMR [
        SU OFFSET(0) NUMBITS(4) [],
        ST OFFSET(4) NUMBITS(3) [],
        /// Seconds mask
        MSK1 OFFSET(7) NUMBITS(1) [],
        MNU OFFSET(8) NUMBITS(4) [],
        MNT OFFSET(12) NUMBITS(3) [],
        /// Minutes mask
        MSK2 OFFSET(15) NUMBITS(1) [],
        HU OFFSET(16) NUMBITS(4) [],
        HT OFFSET(20) NUMBITS(2) [],
        PM OFFSET(22) NUMBITS(1) [
            Am = 0,
            Pm = 1
        ],
        /// Hours mask
        MSK3 OFFSET(23) NUMBITS(1) [],
        DU OFFSET(24) NUMBITS(4) [],
        DT OFFSET(28) NUMBITS(2) [],
        /// Week day selection
        WDSEL OFFSET(30) NUMBITS(1) [
            Date = 0,
            WeekDay = 1
        ],
        /// Date mask
        MSK4 OFFSET(31) NUMBITS(1) []
    ],
    pub WPR [
        /// Write protection key
        KEY OFFSET(0) NUMBITS(8) [
            Key1 = 0xCA,
            Key2 = 0x53
        ]
    ],
    pub SSR [
        /// Sub second value
        SS OFFSET(0) NUMBITS(16) []
    ],
    pub SHIFTR [
        /// Subtract a fraction of a second
        SUBFS OFFSET(0) NUMBITS(15) [],
        /// Add one second
        ADD1S OFFSET(31) NUMBITS(1) []
    ],
    pub TSDR [
        DU OFFSET(0) NUMBITS(4) [],
        DT OFFSET(4) NUMBITS(2) [],
        MU OFFSET(8) NUMBITS(4) [],
        MT OFFSET(12) NUMBITS(1) [],
        WDU OFFSET(13) NUMBITS(3) []
    ],
    pub CALR [
        /// Calibration minus
        CALM OFFSET(0) NUMBITS(9) [],
        /// 16-second calibration cycle period
        CALW16 OFFSET(13) NUMBITS(1) [],
        /// 8-second calibration cycle period
        CALW8 OFFSET(14) NUMBITS(1) [],
        /// Increase frequency by 488.5 ppm
        CALP OFFSET(15) NUMBITS(1) []
    ],
    pub TAFCR [
        /// Tamper 1 detection enable
        TAMP1E OFFSET(0) NUMBITS(1) [],
        /// Active level for tamper 1
        TAMP1TRG OFFSET(1) NUMBITS(1) [],
        /// Tamper interrupt enable
        TAMPIE OFFSET(2) NUMBITS(1) [],
        /// Tamper 2 detection enable
        TAMP2E OFFSET(3) NUMBITS(1) [],
        /// Active level for tamper 2
        TAMP2TRG OFFSET(4) NUMBITS(1) [],
        /// Activate timestamp on tamper detection
        TAMPTS OFFSET(7) NUMBITS(1) [],
        /// Tamper sampling frequency
        TAMPFREQ OFFSET(8) NUMBITS(3) [],
        /// Tamper filter count
        TAMPFLT OFFSET(11) NUMBITS(2) [],
        /// Tamper precharge duration
        TAMPPRCH OFFSET(13) NUMBITS(2) [],
        /// Tamper pull-up disable
        TAMPPUDIS OFFSET(15) NUMBITS(1) [],
        /// Tamper 1 mapping
        TAMP1INSEL OFFSET(16) NUMBITS(1) [
            PC13 = 0,
            PI8 = 1
        ],
        /// Timestamp mapping
        TSINSEL OFFSET(17) NUMBITS(1) [
            PC13 = 0,
            PI8 = 1
        ],
        /// AFO_ALARM output type
        ALARMOUTTYPE OFFSET(18) NUMBITS(1) [
            OpenDrain = 0,
            PushPull = 1
        ],
        TAMPFREQ_0 OFFSET(8) NUMBITS(1) [],
        TAMPFREQ_1 OFFSET(9) NUMBITS(1) [],
        TAMPFREQ_2 OFFSET(10) NUMBITS(1) [],
        TAMPFLT_0 OFFSET(11) NUMBITS(1) [],
        TAMPFLT_1 OFFSET(12) NUMBITS(1) [],
        TAMPPRCH_0 OFFSET(13) NUMBITS(1) [],
        TAMPPRCH_1 OFFSET(14) NUMBITS(1) []
    ],
    pub ALRMSSR [
        /// Sub seconds value
        SS OFFSET(0) NUMBITS(15) [],
        /// Number of sub second bits compared
        MASKSS OFFSET(24) NUMBITS(4) []
    ]
];

/// Backup register `n`.
pub const fn backup_register_offset(n: usize) -> Result<usize, ErrorCode> {
    if n >= BACKUP_REGISTERS {
        return Err(ErrorCode::INVAL);
    }
    Ok(0x50 + 4 * n)
}

/// Older names of the backup bit and the tamper mapping bit.
#[allow(non_snake_case)]
pub mod legacy {
    pub mod CR {
        pub use crate::rtc::CR::BKP as BCK;
    }

    pub mod TAFCR {
        pub use crate::rtc::TAFCR::TAMP1INSEL as TAMPINSEL;
    }
}

pub(crate) const RTC: StaticRef<RtcRegisters> =
    unsafe { StaticRef::new(memory_map::RTC_BASE as *const RtcRegisters) };
