// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Timers.
//!
//! All fourteen timers share one register layout; smaller timers simply
//! leave the registers of features they lack reserved. The per-timer
//! predicates on [`Tim`] tell which features exist.

use tock_registers::registers::{ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::ErrorCode;
use crate::memory_map;
use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

/// Capture/compare channels on the largest timers.
pub const CHANNELS: usize = 4;

register_structs! {
    pub TimRegisters {
        /// control register 1
        (0x00 => pub cr1: ReadWrite<u32, CR1::Register>),
        /// control register 2
        (0x04 => pub cr2: ReadWrite<u32, CR2::Register>),
        /// slave mode control register
        (0x08 => pub smcr: ReadWrite<u32, SMCR::Register>),
        /// DMA/interrupt enable register
        (0x0C => pub dier: ReadWrite<u32, DIER::Register>),
        /// status register, write 0 to clear
        (0x10 => pub sr: ReadWrite<u32, SR::Register>),
        /// event generation register
        (0x14 => pub egr: WriteOnly<u32, EGR::Register>),
        /// capture/compare mode register 1
        (0x18 => pub ccmr1: ReadWrite<u32, CCMR1::Register>),
        /// capture/compare mode register 2
        (0x1C => pub ccmr2: ReadWrite<u32, CCMR2::Register>),
        /// capture/compare enable register
        (0x20 => pub ccer: ReadWrite<u32, CCER::Register>),
        /// counter
        (0x24 => pub cnt: ReadWrite<u32, CNT::Register>),
        /// prescaler
        (0x28 => pub psc: ReadWrite<u32, PSC::Register>),
        /// auto-reload register
        (0x2C => pub arr: ReadWrite<u32, ARR::Register>),
        /// repetition counter register
        (0x30 => pub rcr: ReadWrite<u32, RCR::Register>),
        /// capture/compare registers 1 to 4
        (0x34 => pub ccr: [ReadWrite<u32, CCR::Register>; CHANNELS]),
        /// break and dead-time register
        (0x44 => pub bdtr: ReadWrite<u32, BDTR::Register>),
        /// DMA control register
        (0x48 => pub dcr: ReadWrite<u32, DCR::Register>),
        /// DMA address for full transfer
        (0x4C => pub dmar: ReadWrite<u32, DMAR::Register>),
        /// option register
        (0x50 => pub or: ReadWrite<u32, OR::Register>),
        (0x54 => @END),
    }
}

register_bitfields![u32,
    pub CR1 [
        /// Counter enable
        CEN OFFSET(0) NUMBITS(1) [],
        /// Update disable
        UDIS OFFSET(1) NUMBITS(1) [],
        /// Update request source
        URS OFFSET(2) NUMBITS(1) [],
        /// One-pulse mode
        OPM OFFSET(3) NUMBITS(1) [],
        /// Direction
        DIR OFFSET(4) NUMBITS(1) [
            Up = 0,
            Down = 1
        ],
        /// Center-aligned mode selection
        CMS OFFSET(5) NUMBITS(2) [
            EdgeAligned = 0,
            CenterAligned1 = 1,
            CenterAligned2 = 2,
            CenterAligned3 = 3
        ],
        /// Auto-reload preload enable
        ARPE OFFSET(7) NUMBITS(1) [],
        /// Clock division
        CKD OFFSET(8) NUMBITS(2) [
            DivideBy1 = 0,
            DivideBy2 = 1,
            DivideBy4 = 2
        ],
        CMS_0 OFFSET(5) NUMBITS(1) [],
        CMS_1 OFFSET(6) NUMBITS(1) [],
        CKD_0 OFFSET(8) NUMBITS(1) [],
        CKD_1 OFFSET(9) NUMBITS(1) []
    ],
    pub CR2 [
        /// Capture/compare preloaded control
        CCPC OFFSET(0) NUMBITS(1) [],
        /// Capture/compare control update selection
        CCUS OFFSET(2) NUMBITS(1) [],
        /// Capture/compare DMA selection
        CCDS OFFSET(3) NUMBITS(1) [],
        /// Master mode selection
        MMS OFFSET(4) NUMBITS(3) [
            Reset = 0,
            Enable = 1,
            Update = 2,
            ComparePulse = 3,
            Compare1 = 4,
            Compare2 = 5,
            Compare3 = 6,
            Compare4 = 7
        ],
        /// TI1 selection
        TI1S OFFSET(7) NUMBITS(1) [],
        /// Output idle state 1
        OIS1 OFFSET(8) NUMBITS(1) [],
        /// Output idle state 1, complementary output
        OIS1N OFFSET(9) NUMBITS(1) [],
        /// Output idle state 2
        OIS2 OFFSET(10) NUMBITS(1) [],
        /// Output idle state 2, complementary output
        OIS2N OFFSET(11) NUMBITS(1) [],
        /// Output idle state 3
        OIS3 OFFSET(12) NUMBITS(1) [],
        /// Output idle state 3, complementary output
        OIS3N OFFSET(13) NUMBITS(1) [],
        /// Output idle state 4
        OIS4 OFFSET(14) NUMBITS(1) [],
        MMS_0 OFFSET(4) NUMBITS(1) [],
        MMS_1 OFFSET(5) NUMBITS(1) [],
        MMS_2 OFFSET(6) NUMBITS(1) []
    ],
    pub SMCR [
        /// Slave mode selection
        SMS OFFSET(0) NUMBITS(3) [
            Disabled = 0,
            Encoder1 = 1,
            Encoder2 = 2,
            Encoder3 = 3,
            Reset = 4,
            Gated = 5,
            Trigger = 6,
            ExternalClock1 = 7
        ],
        /// Trigger selection
        TS OFFSET(4) NUMBITS(3) [
            Itr0 = 0,
            Itr1 = 1,
            Itr2 = 2,
            Itr3 = 3,
            Ti1fEd = 4,
            Ti1fp1 = 5,
            Ti2fp2 = 6,
            Etrf = 7
        ],
        /// Master/slave mode
        MSM OFFSET(7) NUMBITS(1) [],
        /// External trigger filter
        ETF OFFSET(8) NUMBITS(4) [],
        /// External trigger prescaler
        ETPS OFFSET(12) NUMBITS(2) [
            Off = 0,
            DivideBy2 = 1,
            DivideBy4 = 2,
            DivideBy8 = 3
        ],
        /// External clock enable
        ECE OFFSET(14) NUMBITS(1) [],
        /// External trigger polarity
        ETP OFFSET(15) NUMBITS(1) [],
        SMS_0 OFFSET(0) NUMBITS(1) [],
        SMS_1 OFFSET(1) NUMBITS(1) [],
        SMS_2 OFFSET(2) NUMBITS(1) [],
        TS_0 OFFSET(4) NUMBITS(1) [],
        TS_1 OFFSET(5) NUMBITS(1) [],
        TS_2 OFFSET(6) NUMBITS(1) [],
        ETF_0 OFFSET(8) NUMBITS(1) [],
        ETF_1 OFFSET(9) NUMBITS(1) [],
        ETF_2 OFFSET(10) NUMBITS(1) [],
        ETF_3 OFFSET(11) NUMBITS(1) [],
        ETPS_0 OFFSET(12) NUMBITS(1) [],
        ETPS_1 OFFSET(13) NUMBITS(1) []
    ],
    pub DIER [
        /// Update interrupt enable
        UIE OFFSET(0) NUMBITS(1) [],
        /// Capture/compare 1 interrupt enable
        CC1IE OFFSET(1) NUMBITS(1) [],
        /// Capture/compare 2 interrupt enable
        CC2IE OFFSET(2) NUMBITS(1) [],
        /// Capture/compare 3 interrupt enable
        CC3IE OFFSET(3) NUMBITS(1) [],
        /// Capture/compare 4 interrupt enable
        CC4IE OFFSET(4) NUMBITS(1) [],
        /// COM interrupt enable
        COMIE OFFSET(5) NUMBITS(1) [],
        /// Trigger interrupt enable
        TIE OFFSET(6) NUMBITS(1) [],
        /// Break interrupt enable
        BIE OFFSET(7) NUMBITS(1) [],
        /// Update DMA request enable
        UDE OFFSET(8) NUMBITS(1) [],
        /// Capture/compare 1 DMA request enable
        CC1DE OFFSET(9) NUMBITS(1) [],
        /// Capture/compare 2 DMA request enable
        CC2DE OFFSET(10) NUMBITS(1) [],
        /// Capture/compare 3 DMA request enable
        CC3DE OFFSET(11) NUMBITS(1) [],
        /// Capture/compare 4 DMA request enable
        CC4DE OFFSET(12) NUMBITS(1) [],
        /// COM DMA request enable
        COMDE OFFSET(13) NUMBITS(1) [],
        /// Trigger DMA request enable
        TDE OFFSET(14) NUMBITS(1) []
    ],
    pub SR [
        /// Update interrupt flag
        UIF OFFSET(0) NUMBITS(1) [],
        /// Capture/compare 1 interrupt flag
        CC1IF OFFSET(1) NUMBITS(1) [],
        /// Capture/compare 2 interrupt flag
        CC2IF OFFSET(2) NUMBITS(1) [],
        /// Capture/compare 3 interrupt flag
        CC3IF OFFSET(3) NUMBITS(1) [],
        /// Capture/compare 4 interrupt flag
        CC4IF OFFSET(4) NUMBITS(1) [],
        /// COM interrupt flag
        COMIF OFFSET(5) NUMBITS(1) [],
        /// Trigger interrupt flag
        TIF OFFSET(6) NUMBITS(1) [],
        /// Break interrupt flag
        BIF OFFSET(7) NUMBITS(1) [],
        /// Capture/compare 1 overcapture flag
        CC1OF OFFSET(9) NUMBITS(1) [],
        /// Capture/compare 2 overcapture flag
        CC2OF OFFSET(10) NUMBITS(1) [],
        /// Capture/compare 3 overcapture flag
        CC3OF OFFSET(11) NUMBITS(1) [],
        /// Capture/compare 4 overcapture flag
        CC4OF OFFSET(12) NUMBITS(1) []
    ],
    pub EGR [
        /// Update generation
        UG OFFSET(0) NUMBITS(1) [],
        /// Capture/compare 1 generation
        CC1G OFFSET(1) NUMBITS(1) [],
        /// Capture/compare 2 generation
        CC2G OFFSET(2) NUMBITS(1) [],
        /// Capture/compare 3 generation
        CC3G OFFSET(3) NUMBITS(1) [],
        /// Capture/compare 4 generation
        CC4G OFFSET(4) NUMBITS(1) [],
        /// Capture/compare control update generation
        COMG OFFSET(5) NUMBITS(1) [],
        /// Trigger generation
        TG OFFSET(6) NUMBITS(1) [],
        /// Break generation
        BG OFFSET(7) NUMBITS(1) []
    ],
    /// Output compare and input capture views of channels 1 and 2
    pub CCMR1 [
        /// Capture/compare 1 selection
        CC1S OFFSET(0) NUMBITS(2) [
            Output = 0,
            Direct = 1,
            Indirect = 2,
            Trc = 3
        ],
        /// Output compare 1 fast enable
        OC1FE OFFSET(2) NUMBITS(1) [],
        /// Output compare 1 preload enable
        OC1PE OFFSET(3) NUMBITS(1) [],
        /// Output compare 1 mode
        OC1M OFFSET(4) NUMBITS(3) [
            Frozen = 0,
            ActiveOnMatch = 1,
            InactiveOnMatch = 2,
            Toggle = 3,
            ForceInactive = 4,
            ForceActive = 5,
            Pwm1 = 6,
            Pwm2 = 7
        ],
        /// Output compare 1 clear enable
        OC1CE OFFSET(7) NUMBITS(1) [],
        /// Capture/compare 2 selection
        CC2S OFFSET(8) NUMBITS(2) [
            Output = 0,
            Direct = 1,
            Indirect = 2,
            Trc = 3
        ],
        /// Output compare 2 fast enable
        OC2FE OFFSET(10) NUMBITS(1) [],
        /// Output compare 2 preload enable
        OC2PE OFFSET(11) NUMBITS(1) [],
        /// Output compare 2 mode
        OC2M OFFSET(12) NUMBITS(3) [
            Frozen = 0,
            ActiveOnMatch = 1,
            InactiveOnMatch = 2,
            Toggle = 3,
            ForceInactive = 4,
            ForceActive = 5,
            Pwm1 = 6,
            Pwm2 = 7
        ],
        /// Output compare 2 clear enable
        OC2CE OFFSET(15) NUMBITS(1) [],
        /// Input capture 1 prescaler
        IC1PSC OFFSET(2) NUMBITS(2) [],
        /// Input capture 1 filter
        IC1F OFFSET(4) NUMBITS(4) [],
        /// Input capture 2 prescaler
        IC2PSC OFFSET(10) NUMBITS(2) [],
        /// Input capture 2 filter
        IC2F OFFSET(12) NUMBITS(4) [],
        CC1S_0 OFFSET(0) NUMBITS(1) [],
        CC1S_1 OFFSET(1) NUMBITS(1) [],
        OC1M_0 OFFSET(4) NUMBITS(1) [],
        OC1M_1 OFFSET(5) NUMBITS(1) [],
        OC1M_2 OFFSET(6) NUMBITS(1) [],
        IC1PSC_0 OFFSET(2) NUMBITS(1) [],
        IC1PSC_1 OFFSET(3) NUMBITS(1) [],
        IC1F_0 OFFSET(4) NUMBITS(1) [],
        IC1F_1 OFFSET(5) NUMBITS(1) [],
        IC1F_2 OFFSET(6) NUMBITS(1) [],
        IC1F_3 OFFSET(7) NUMBITS(1) [],
        CC2S_0 OFFSET(8) NUMBITS(1) [],
        CC2S_1 OFFSET(9) NUMBITS(1) [],
        OC2M_0 OFFSET(12) NUMBITS(1) [],
        OC2M_1 OFFSET(13) NUMBITS(1) [],
        OC2M_2 OFFSET(14) NUMBITS(1) [],
        IC2PSC_0 OFFSET(10) NUMBITS(1) [],
        IC2PSC_1 OFFSET(11) NUMBITS(1) [],
        IC2F_0 OFFSET(12) NUMBITS(1) [],
        IC2F_1 OFFSET(13) NUMBITS(1) [],
        IC2F_2 OFFSET(14) NUMBITS(1) [],
        IC2F_3 OFFSET(15) NUMBITS(1) []
    ],
    /// Output compare and input capture views of channels 3 and 4
    pub CCMR2 [
        /// Capture/compare 3 selection
        CC3S OFFSET(0) NUMBITS(2) [
            Output = 0,
            Direct = 1,
            Indirect = 2,
            Trc = 3
        ],
        /// Output compare 3 fast enable
        OC3FE OFFSET(2) NUMBITS(1) [],
        /// Output compare 3 preload enable
        OC3PE OFFSET(3) NUMBITS(1) [],
        /// Output compare 3 mode
        OC3M OFFSET(4) NUMBITS(3) [
            Frozen = 0,
            ActiveOnMatch = 1,
            InactiveOnMatch = 2,
            Toggle = 3,
            ForceInactive = 4,
            ForceActive = 5,
            Pwm1 = 6,
            Pwm2 = 7
        ],
        /// Output compare 3 clear enable
        OC3CE OFFSET(7) NUMBITS(1) [],
        /// Capture/compare 4 selection
        CC4S OFFSET(8) NUMBITS(2) [
            Output = 0,
            Direct = 1,
            Indirect = 2,
            Trc = 3
        ],
        /// Output compare 4 fast enable
        OC4FE OFFSET(10) NUMBITS(1) [],
        /// Output compare 4 preload enable
        OC4PE OFFSET(11) NUMBITS(1) [],
        /// Output compare 4 mode
        OC4M OFFSET(12) NUMBITS(3) [
            Frozen = 0,
            ActiveOnMatch = 1,
            InactiveOnMatch = 2,
            Toggle = 3,
            ForceInactive = 4,
            ForceActive = 5,
            Pwm1 = 6,
            Pwm2 = 7
        ],
        /// Output compare 4 clear enable
        OC4CE OFFSET(15) NUMBITS(1) [],
        /// Input capture 3 prescaler
        IC3PSC OFFSET(2) NUMBITS(2) [],
        /// Input capture 3 filter
        IC3F OFFSET(4) NUMBITS(4) [],
        /// Input capture 4 prescaler
        IC4PSC OFFSET(10) NUMBITS(2) [],
        /// Input capture 4 filter
        IC4F OFFSET(12) NUMBITS(4) [],
        CC3S_0 OFFSET(0) NUMBITS(1) [],
        CC3S_1 OFFSET(1) NUMBITS(1) [],
        OC3M_0 OFFSET(4) NUMBITS(1) [],
        OC3M_1 OFFSET(5) NUMBITS(1) [],
        OC3M_2 OFFSET(6) NUMBITS(1) [],
        IC3PSC_0 OFFSET(2) NUMBITS(1) [],
        IC3PSC_1 OFFSET(3) NUMBITS(1) [],
        IC3F_0 OFFSET(4) NUMBITS(1) [],
        IC3F_1 OFFSET(5) NUMBITS(1) [],
        IC3F_2 OFFSET(6) NUMBITS(1) [],
        IC3F_3 OFFSET(7) NUMBITS(1) [],
        CC4S_0 OFFSET(8) NUMBITS(1) [],
        CC4S_1 OFFSET(9) NUMBITS(1) [],
        OC4M_0 OFFSET(12) NUMBITS(1) [],
        OC4M_1 OFFSET(13) NUMBITS(1) [],
        OC4M_2 OFFSET(14) NUMBITS(1) [],
        IC4PSC_0 OFFSET(10) NUMBITS(1) [],
        IC4PSC_1 OFFSET(11) NUMBITS(1) [],
        IC4F_0 OFFSET(12) NUMBITS(1) [],
        IC4F_1 OFFSET(13) NUMBITS(1) [],
        IC4F_2 OFFSET(14) NUMBITS(1) [],
        IC4F_3 OFFSET(15) NUMBITS(1) []
    ],
    pub CCER [
        /// Capture/compare 1 output enable
        CC1E OFFSET(0) NUMBITS(1) [],
        /// Capture/compare 1 output polarity
        CC1P OFFSET(1) NUMBITS(1) [],
        /// Capture/compare 1 complementary output enable
        CC1NE OFFSET(2) NUMBITS(1) [],
        /// Capture/compare 1 complementary output polarity
        CC1NP OFFSET(3) NUMBITS(1) [],
        /// Capture/compare 2 output enable
        CC2E OFFSET(4) NUMBITS(1) [],
        /// Capture/compare 2 output polarity
        CC2P OFFSET(5) NUMBITS(1) [],
        /// Capture/compare 2 complementary output enable
        CC2NE OFFSET(6) NUMBITS(1) [],
        /// Capture/compare 2 complementary output polarity
        CC2NP OFFSET(7) NUMBITS(1) [],
        /// Capture/compare 3 output enable
        CC3E OFFSET(8) NUMBITS(1) [],
        /// Capture/compare 3 output polarity
        CC3P OFFSET(9) NUMBITS(1) [],
        /// Capture/compare 3 complementary output enable
        CC3NE OFFSET(10) NUMBITS(1) [],
        /// Capture/compare 3 complementary output polarity
        CC3NP OFFSET(11) NUMBITS(1) [],
        /// Capture/compare 4 output enable
        CC4E OFFSET(12) NUMBITS(1) [],
        /// Capture/compare 4 output polarity
        CC4P OFFSET(13) NUMBITS(1) [],
        /// Capture/compare 4 complementary output polarity
        CC4NP OFFSET(15) NUMBITS(1) []
    ],
    pub CNT [
        /// Counter value, 16 bits except on TIM2 and TIM5
        CNT OFFSET(0) NUMBITS(32) []
    ],
    pub PSC [
        /// Prescaler value
        PSC OFFSET(0) NUMBITS(16) []
    ],
    pub ARR [
        /// Auto-reload value, 16 bits except on TIM2 and TIM5
        ARR OFFSET(0) NUMBITS(32) []
    ],
    pub RCR [
        /// Repetition counter value
        REP OFFSET(0) NUMBITS(8) []
    ],
    pub CCR [
        /// Capture/compare value, 16 bits except on TIM2 and TIM5
        CCR OFFSET(0) NUMBITS(32) []
    ],
    pub BDTR [
        /// Dead-time generator setup
        DTG OFFSET(0) NUMBITS(8) [],
        /// Lock configuration
        LOCK OFFSET(8) NUMBITS(2) [
            Off = 0,
            Level1 = 1,
            Level2 = 2,
            Level3 = 3
        ],
        /// Off-state selection for idle mode
        OSSI OFFSET(10) NUMBITS(1) [],
        /// Off-state selection for run mode
        OSSR OFFSET(11) NUMBITS(1) [],
        /// Break enable
        BKE OFFSET(12) NUMBITS(1) [],
        /// Break polarity
        BKP OFFSET(13) NUMBITS(1) [],
        /// Automatic output enable
        AOE OFFSET(14) NUMBITS(1) [],
        /// Main output enable
        MOE OFFSET(15) NUMBITS(1) [],
        DTG_0 OFFSET(0) NUMBITS(1) [],
        DTG_1 OFFSET(1) NUMBITS(1) [],
        DTG_2 OFFSET(2) NUMBITS(1) [],
        DTG_3 OFFSET(3) NUMBITS(1) [],
        DTG_4 OFFSET(4) NUMBITS(1) [],
        DTG_5 OFFSET(5) NUMBITS(1) [],
        DTG_6 OFFSET(6) NUMBITS(1) [],
        DTG_7 OFFSET(7) NUMBITS(1) [],
        LOCK_0 OFFSET(8) NUMBITS(1) [],
        LOCK_1 OFFSET(9) NUMBITS(1) []
    ],
    pub DCR [
        /// DMA base address, in registers from CR1
        DBA OFFSET(0) NUMBITS(5) [],
        /// DMA burst length, minus one
        DBL OFFSET(8) NUMBITS(5) [],
        DBA_0 OFFSET(0) NUMBITS(1) [],
        DBA_1 OFFSET(1) NUMBITS(1) [],
        DBA_2 OFFSET(2) NUMBITS(1) [],
        DBA_3 OFFSET(3) NUMBITS(1) [],
        DBA_4 OFFSET(4) NUMBITS(1) [],
        DBL_0 OFFSET(8) NUMBITS(1) [],
        DBL_1 OFFSET(9) NUMBITS(1) [],
        DBL_2 OFFSET(10) NUMBITS(1) [],
        DBL_3 OFFSET(11) NUMBITS(1) [],
        DBL_4 OFFSET(12) NUMBITS(1) []
    ],
    pub DMAR [
        /// DMA register for burst accesses
        DMAB OFFSET(0) NUMBITS(16) []
    ],
    pub OR [
        /// TIM11 input 1 remap
        TI1_RMP OFFSET(0) NUMBITS(2) [
            Gpio = 0,
            Hse = 2,
            Mco1 = 3
        ],
        /// TIM5 input 4 remap
        TI4_RMP OFFSET(6) NUMBITS(2) [
            Gpio = 0,
            Lsi = 1,
            Lse = 2,
            RtcWakeup = 3
        ],
        /// TIM2 internal trigger 1 remap
        ITR1_RMP OFFSET(10) NUMBITS(2) [
            Tim8Trgo = 0,
            PtpTrigger = 1,
            OtgFsSof = 2,
            OtgHsSof = 3
        ]
    ]
];

instances! {
    pub enum Tim {
        Tim1("TIM1") = memory_map::TIM1_BASE,
        Tim2("TIM2") = memory_map::TIM2_BASE,
        Tim3("TIM3") = memory_map::TIM3_BASE,
        Tim4("TIM4") = memory_map::TIM4_BASE,
        Tim5("TIM5") = memory_map::TIM5_BASE,
        Tim6("TIM6") = memory_map::TIM6_BASE,
        Tim7("TIM7") = memory_map::TIM7_BASE,
        Tim8("TIM8") = memory_map::TIM8_BASE,
        Tim9("TIM9") = memory_map::TIM9_BASE,
        Tim10("TIM10") = memory_map::TIM10_BASE,
        Tim11("TIM11") = memory_map::TIM11_BASE,
        Tim12("TIM12") = memory_map::TIM12_BASE,
        Tim13("TIM13") = memory_map::TIM13_BASE,
        Tim14("TIM14") = memory_map::TIM14_BASE,
    }
}

impl Tim {
    /// Number of capture/compare channels.
    pub const fn channels(self) -> u8 {
        match self {
            Tim::Tim1 | Tim::Tim2 | Tim::Tim3 | Tim::Tim4 | Tim::Tim5 | Tim::Tim8 => 4,
            Tim::Tim9 | Tim::Tim12 => 2,
            Tim::Tim10 | Tim::Tim11 | Tim::Tim13 | Tim::Tim14 => 1,
            Tim::Tim6 | Tim::Tim7 => 0,
        }
    }

    /// Whether channel `channel`, counted from 1, exists.
    pub const fn has_channel(self, channel: u8) -> bool {
        channel >= 1 && channel <= self.channels()
    }

    /// Index into `TimRegisters::ccr` of channel `channel`, counted from 1.
    pub const fn ccr_index(self, channel: u8) -> Result<usize, ErrorCode> {
        if self.has_channel(channel) {
            Ok((channel - 1) as usize)
        } else {
            Err(ErrorCode::INVAL)
        }
    }

    /// TIM1 and TIM8: complementary outputs, break input, repetition counter.
    pub const fn is_advanced(self) -> bool {
        match self {
            Tim::Tim1 | Tim::Tim8 => true,
            Tim::Tim2
            | Tim::Tim3
            | Tim::Tim4
            | Tim::Tim5
            | Tim::Tim6
            | Tim::Tim7
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    pub const fn has_32bit_counter(self) -> bool {
        match self {
            Tim::Tim2 | Tim::Tim5 => true,
            Tim::Tim1
            | Tim::Tim3
            | Tim::Tim4
            | Tim::Tim6
            | Tim::Tim7
            | Tim::Tim8
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    /// TI1, TI2 and TI3 can be XORed into TI1.
    pub const fn has_xor_input(self) -> bool {
        match self {
            Tim::Tim1 | Tim::Tim2 | Tim::Tim3 | Tim::Tim4 | Tim::Tim5 | Tim::Tim8 => true,
            Tim::Tim6
            | Tim::Tim7
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    pub const fn supports_dma(self) -> bool {
        match self {
            Tim::Tim1
            | Tim::Tim2
            | Tim::Tim3
            | Tim::Tim4
            | Tim::Tim5
            | Tim::Tim6
            | Tim::Tim7
            | Tim::Tim8 => true,
            Tim::Tim9 | Tim::Tim10 | Tim::Tim11 | Tim::Tim12 | Tim::Tim13 | Tim::Tim14 => false,
        }
    }

    /// DMA requests on capture/compare events.
    pub const fn supports_dma_cc(self) -> bool {
        match self {
            Tim::Tim1 | Tim::Tim2 | Tim::Tim3 | Tim::Tim4 | Tim::Tim5 | Tim::Tim8 => true,
            Tim::Tim6
            | Tim::Tim7
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    pub const fn supports_dma_burst(self) -> bool {
        match self {
            Tim::Tim1 | Tim::Tim2 | Tim::Tim3 | Tim::Tim4 | Tim::Tim5 | Tim::Tim8 => true,
            Tim::Tim6
            | Tim::Tim7
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    /// Drives TRGO for other timers, the ADCs or the DAC.
    pub const fn is_master(self) -> bool {
        match self {
            Tim::Tim1
            | Tim::Tim2
            | Tim::Tim3
            | Tim::Tim4
            | Tim::Tim5
            | Tim::Tim6
            | Tim::Tim7
            | Tim::Tim8 => true,
            Tim::Tim9 | Tim::Tim10 | Tim::Tim11 | Tim::Tim12 | Tim::Tim13 | Tim::Tim14 => false,
        }
    }

    pub const fn is_slave(self) -> bool {
        match self {
            Tim::Tim1
            | Tim::Tim2
            | Tim::Tim3
            | Tim::Tim4
            | Tim::Tim5
            | Tim::Tim8
            | Tim::Tim9
            | Tim::Tim12 => true,
            Tim::Tim6 | Tim::Tim7 | Tim::Tim10 | Tim::Tim11 | Tim::Tim13 | Tim::Tim14 => false,
        }
    }

    /// ETR input pin.
    pub const fn has_external_trigger(self) -> bool {
        match self {
            Tim::Tim1 | Tim::Tim2 | Tim::Tim3 | Tim::Tim4 | Tim::Tim8 => true,
            Tim::Tim5
            | Tim::Tim6
            | Tim::Tim7
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    /// Option register remaps an input.
    pub const fn has_remap(self) -> bool {
        match self {
            Tim::Tim2 | Tim::Tim5 | Tim::Tim11 => true,
            Tim::Tim1
            | Tim::Tim3
            | Tim::Tim4
            | Tim::Tim6
            | Tim::Tim7
            | Tim::Tim8
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    pub const fn has_complementary_outputs(self) -> bool {
        match self {
            Tim::Tim1 | Tim::Tim8 => true,
            Tim::Tim2
            | Tim::Tim3
            | Tim::Tim4
            | Tim::Tim5
            | Tim::Tim6
            | Tim::Tim7
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    pub const fn has_break_input(self) -> bool {
        match self {
            Tim::Tim1 | Tim::Tim8 => true,
            Tim::Tim2
            | Tim::Tim3
            | Tim::Tim4
            | Tim::Tim5
            | Tim::Tim6
            | Tim::Tim7
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    /// Up, down and center-aligned counting.
    pub const fn supports_counter_mode(self) -> bool {
        match self {
            Tim::Tim1 | Tim::Tim2 | Tim::Tim3 | Tim::Tim4 | Tim::Tim5 | Tim::Tim8 => true,
            Tim::Tim6
            | Tim::Tim7
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    pub const fn supports_clock_division(self) -> bool {
        match self {
            Tim::Tim1
            | Tim::Tim2
            | Tim::Tim3
            | Tim::Tim4
            | Tim::Tim5
            | Tim::Tim8
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => true,
            Tim::Tim6 | Tim::Tim7 => false,
        }
    }

    pub const fn has_repetition_counter(self) -> bool {
        match self {
            Tim::Tim1 | Tim::Tim8 => true,
            Tim::Tim2
            | Tim::Tim3
            | Tim::Tim4
            | Tim::Tim5
            | Tim::Tim6
            | Tim::Tim7
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    /// Clocked by the external trigger through slave mode.
    pub const fn supports_etr_mode1(self) -> bool {
        match self {
            Tim::Tim1
            | Tim::Tim2
            | Tim::Tim3
            | Tim::Tim4
            | Tim::Tim5
            | Tim::Tim8
            | Tim::Tim9
            | Tim::Tim12 => true,
            Tim::Tim6 | Tim::Tim7 | Tim::Tim10 | Tim::Tim11 | Tim::Tim13 | Tim::Tim14 => false,
        }
    }

    /// Clocked by the external trigger through ECE.
    pub const fn supports_etr_mode2(self) -> bool {
        match self {
            Tim::Tim1 | Tim::Tim2 | Tim::Tim3 | Tim::Tim4 | Tim::Tim8 => true,
            Tim::Tim5
            | Tim::Tim6
            | Tim::Tim7
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    pub const fn supports_tix_clock(self) -> bool {
        match self {
            Tim::Tim1
            | Tim::Tim2
            | Tim::Tim3
            | Tim::Tim4
            | Tim::Tim5
            | Tim::Tim8
            | Tim::Tim9
            | Tim::Tim12 => true,
            Tim::Tim6 | Tim::Tim7 | Tim::Tim10 | Tim::Tim11 | Tim::Tim13 | Tim::Tim14 => false,
        }
    }

    pub const fn supports_itrx_clock(self) -> bool {
        match self {
            Tim::Tim1
            | Tim::Tim2
            | Tim::Tim3
            | Tim::Tim4
            | Tim::Tim5
            | Tim::Tim8
            | Tim::Tim9
            | Tim::Tim12 => true,
            Tim::Tim6 | Tim::Tim7 | Tim::Tim10 | Tim::Tim11 | Tim::Tim13 | Tim::Tim14 => false,
        }
    }

    /// OCxREF cleared from ETRF.
    pub const fn supports_ocxref_clear(self) -> bool {
        match self {
            Tim::Tim1 | Tim::Tim2 | Tim::Tim3 | Tim::Tim4 | Tim::Tim8 => true,
            Tim::Tim5
            | Tim::Tim6
            | Tim::Tim7
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    pub const fn supports_encoder(self) -> bool {
        match self {
            Tim::Tim1 | Tim::Tim2 | Tim::Tim3 | Tim::Tim4 | Tim::Tim5 | Tim::Tim8 => true,
            Tim::Tim6
            | Tim::Tim7
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    pub const fn supports_hall_sensor(self) -> bool {
        match self {
            Tim::Tim1 | Tim::Tim2 | Tim::Tim3 | Tim::Tim4 | Tim::Tim5 | Tim::Tim8 => true,
            Tim::Tim6
            | Tim::Tim7
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    pub const fn supports_commutation_event(self) -> bool {
        match self {
            Tim::Tim1 | Tim::Tim8 => true,
            Tim::Tim2
            | Tim::Tim3
            | Tim::Tim4
            | Tim::Tim5
            | Tim::Tim6
            | Tim::Tim7
            | Tim::Tim9
            | Tim::Tim10
            | Tim::Tim11
            | Tim::Tim12
            | Tim::Tim13
            | Tim::Tim14 => false,
        }
    }

    /// Update interrupt. Several timers share a vector with TIM1 or TIM8
    /// events.
    pub const fn interrupt(self) -> Interrupt {
        match self {
            Tim::Tim1 | Tim::Tim10 => Interrupt::TIM1_UP_TIM10,
            Tim::Tim2 => Interrupt::TIM2,
            Tim::Tim3 => Interrupt::TIM3,
            Tim::Tim4 => Interrupt::TIM4,
            Tim::Tim5 => Interrupt::TIM5,
            Tim::Tim6 => Interrupt::TIM6_DAC,
            Tim::Tim7 => Interrupt::TIM7,
            Tim::Tim8 | Tim::Tim13 => Interrupt::TIM8_UP_TIM13,
            Tim::Tim9 => Interrupt::TIM1_BRK_TIM9,
            Tim::Tim11 => Interrupt::TIM1_TRG_COM_TIM11,
            Tim::Tim12 => Interrupt::TIM8_BRK_TIM12,
            Tim::Tim14 => Interrupt::TIM8_TRG_COM_TIM14,
        }
    }
}

pub(crate) const TIM1: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(memory_map::TIM1_BASE as *const TimRegisters) };
pub(crate) const TIM2: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(memory_map::TIM2_BASE as *const TimRegisters) };
pub(crate) const TIM3: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(memory_map::TIM3_BASE as *const TimRegisters) };
pub(crate) const TIM4: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(memory_map::TIM4_BASE as *const TimRegisters) };
pub(crate) const TIM5: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(memory_map::TIM5_BASE as *const TimRegisters) };
pub(crate) const TIM6: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(memory_map::TIM6_BASE as *const TimRegisters) };
pub(crate) const TIM7: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(memory_map::TIM7_BASE as *const TimRegisters) };
pub(crate) const TIM8: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(memory_map::TIM8_BASE as *const TimRegisters) };
pub(crate) const TIM9: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(memory_map::TIM9_BASE as *const TimRegisters) };
pub(crate) const TIM10: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(memory_map::TIM10_BASE as *const TimRegisters) };
pub(crate) const TIM11: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(memory_map::TIM11_BASE as *const TimRegisters) };
pub(crate) const TIM12: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(memory_map::TIM12_BASE as *const TimRegisters) };
pub(crate) const TIM13: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(memory_map::TIM13_BASE as *const TimRegisters) };
pub(crate) const TIM14: StaticRef<TimRegisters> =
    unsafe { StaticRef::new(memory_map::TIM14_BASE as *const TimRegisters) };
