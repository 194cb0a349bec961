// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! LCD-TFT display controller.
//!
//! Timing registers hold accumulated values: each one adds the previous
//! stage's width or height, minus one.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

register_structs! {
    pub LtdcRegisters {
        (0x00 => _reserved0),
        /// synchronization size configuration
        (0x08 => pub sscr: ReadWrite<u32, SSCR::Register>),
        /// back porch configuration
        (0x0C => pub bpcr: ReadWrite<u32, BPCR::Register>),
        /// active width configuration
        (0x10 => pub awcr: ReadWrite<u32, AWCR::Register>),
        /// total width configuration
        (0x14 => pub twcr: ReadWrite<u32, TWCR::Register>),
        /// global control register
        (0x18 => pub gcr: ReadWrite<u32, GCR::Register>),
        (0x1C => _reserved1),
        /// shadow reload configuration
        (0x24 => pub srcr: ReadWrite<u32, SRCR::Register>),
        (0x28 => _reserved2),
        /// background color configuration
        (0x2C => pub bccr: ReadWrite<u32, BCCR::Register>),
        (0x30 => _reserved3),
        (0x34 => pub ier: ReadWrite<u32, IER::Register>),
        (0x38 => pub isr: ReadOnly<u32, ISR::Register>),
        (0x3C => pub icr: WriteOnly<u32, ICR::Register>),
        /// line interrupt position configuration
        (0x40 => pub lipcr: ReadWrite<u32, LIPCR::Register>),
        /// current position status
        (0x44 => pub cpsr: ReadOnly<u32, CPSR::Register>),
        /// current display status
        (0x48 => pub cdsr: ReadOnly<u32, CDSR::Register>),
        (0x4C => @END),
    },

    pub LtdcLayerRegisters {
        (0x00 => pub cr: ReadWrite<u32, LCR::Register>),
        /// window horizontal position configuration
        (0x04 => pub whpcr: ReadWrite<u32, WHPCR::Register>),
        /// window vertical position configuration
        (0x08 => pub wvpcr: ReadWrite<u32, WVPCR::Register>),
        /// color keying configuration
        (0x0C => pub ckcr: ReadWrite<u32, CKCR::Register>),
        /// pixel format configuration
        (0x10 => pub pfcr: ReadWrite<u32, PFCR::Register>),
        /// constant alpha configuration
        (0x14 => pub cacr: ReadWrite<u32, CACR::Register>),
        /// default color configuration
        (0x18 => pub dccr: ReadWrite<u32, DCCR::Register>),
        /// blending factors configuration
        (0x1C => pub bfcr: ReadWrite<u32, BFCR::Register>),
        (0x20 => _reserved0),
        /// color frame buffer start address
        (0x28 => pub cfbar: ReadWrite<u32>),
        /// color frame buffer length
        (0x2C => pub cfblr: ReadWrite<u32, CFBLR::Register>),
        /// color frame buffer line number
        (0x30 => pub cfblnr: ReadWrite<u32, CFBLNR::Register>),
        (0x34 => _reserved1),
        /// CLUT write register
        (0x40 => pub clutwr: WriteOnly<u32, CLUTWR::Register>),
        (0x44 => @END),
    }
}

register_bitfields![u32,
    pub SSCR [
        /// Vertical synchronization height
        VSH OFFSET(0) NUMBITS(11) [],
        /// Horizontal synchronization width
        HSW OFFSET(16) NUMBITS(12) []
    ],
    pub BPCR [
        /// Accumulated vertical back porch
        AVBP OFFSET(0) NUMBITS(11) [],
        /// Accumulated horizontal back porch
        AHBP OFFSET(16) NUMBITS(12) []
    ],
    pub AWCR [
        /// Accumulated active height
        AAH OFFSET(0) NUMBITS(11) [],
        /// Accumulated active width
        AAW OFFSET(16) NUMBITS(12) []
    ],
    pub TWCR [
        /// Total height
        TOTALH OFFSET(0) NUMBITS(11) [],
        /// Total width
        TOTALW OFFSET(16) NUMBITS(12) []
    ],
    pub GCR [
        /// LCD-TFT controller enable
        LTDCEN OFFSET(0) NUMBITS(1) [],
        /// Dither blue width
        DBW OFFSET(4) NUMBITS(3) [],
        /// Dither green width
        DGW OFFSET(8) NUMBITS(3) [],
        /// Dither red width
        DRW OFFSET(12) NUMBITS(3) [],
        /// Dither enable
        DEN OFFSET(16) NUMBITS(1) [],
        /// Pixel clock polarity
        PCPOL OFFSET(28) NUMBITS(1) [],
        /// Data enable polarity
        DEPOL OFFSET(29) NUMBITS(1) [],
        /// Vertical synchronization polarity
        VSPOL OFFSET(30) NUMBITS(1) [],
        /// Horizontal synchronization polarity
        HSPOL OFFSET(31) NUMBITS(1) [],
        DBW_0 OFFSET(4) NUMBITS(1) [],
        DBW_1 OFFSET(5) NUMBITS(1) [],
        DBW_2 OFFSET(6) NUMBITS(1) [],
        DGW_0 OFFSET(8) NUMBITS(1) [],
        DGW_1 OFFSET(9) NUMBITS(1) [],
        DGW_2 OFFSET(10) NUMBITS(1) [],
        DRW_0 OFFSET(12) NUMBITS(1) [],
        DRW_1 OFFSET(13) NUMBITS(1) [],
        DRW_2 OFFSET(14) NUMBITS(1) []
    ],
    pub SRCR [
        /// Immediate reload
        IMR OFFSET(0) NUMBITS(1) [],
        /// Vertical blanking reload
        VBR OFFSET(1) NUMBITS(1) []
    ],
    pub BCCR [
        BCBLUE OFFSET(0) NUMBITS(8) [],
        BCGREEN OFFSET(8) NUMBITS(8) [],
        BCRED OFFSET(16) NUMBITS(8) []
    ],
    pub IER [
        /// Line interrupt enable
        LIE OFFSET(0) NUMBITS(1) [],
        /// FIFO underrun interrupt enable
        FUIE OFFSET(1) NUMBITS(1) [],
        /// Transfer error interrupt enable
        TERRIE OFFSET(2) NUMBITS(1) [],
        /// Register reload interrupt enable
        RRIE OFFSET(3) NUMBITS(1) []
    ],
    pub ISR [
        /// Line interrupt flag
        LIF OFFSET(0) NUMBITS(1) [],
        /// FIFO underrun interrupt flag
        FUIF OFFSET(1) NUMBITS(1) [],
        /// Transfer error interrupt flag
        TERRIF OFFSET(2) NUMBITS(1) [],
        /// Register reload interrupt flag
        RRIF OFFSET(3) NUMBITS(1) []
    ],
    pub ICR [
        CLIF OFFSET(0) NUMBITS(1) [],
        CFUIF OFFSET(1) NUMBITS(1) [],
        CTERRIF OFFSET(2) NUMBITS(1) [],
        CRRIF OFFSET(3) NUMBITS(1) []
    ],
    pub LIPCR [
        /// Line interrupt position
        LIPOS OFFSET(0) NUMBITS(11) []
    ],
    pub CPSR [
        /// Current Y position
        CYPOS OFFSET(0) NUMBITS(16) [],
        /// Current X position
        CXPOS OFFSET(16) NUMBITS(16) []
    ],
    pub CDSR [
        /// Vertical data enable display status
        VDES OFFSET(0) NUMBITS(1) [],
        /// Horizontal data enable display status
        HDES OFFSET(1) NUMBITS(1) [],
        /// Vertical synchronization display status
        VSYNCS OFFSET(2) NUMBITS(1) [],
        /// Horizontal synchronization display status
        HSYNCS OFFSET(3) NUMBITS(1) []
    ],
    /// Layer control register
    pub LCR [
        /// Layer enable
        LEN OFFSET(0) NUMBITS(1) [],
        /// Color keying enable
        COLKEN OFFSET(1) NUMBITS(1) [],
        /// Color lookup table enable
        CLUTEN OFFSET(4) NUMBITS(1) []
    ],
    pub WHPCR [
        /// Window horizontal start position
        WHSTPOS OFFSET(0) NUMBITS(12) [],
        /// Window horizontal stop position
        WHSPPOS OFFSET(16) NUMBITS(12) []
    ],
    pub WVPCR [
        /// Window vertical start position
        WVSTPOS OFFSET(0) NUMBITS(11) [],
        /// Window vertical stop position
        WVSPPOS OFFSET(16) NUMBITS(11) []
    ],
    pub CKCR [
        CKBLUE OFFSET(0) NUMBITS(8) [],
        CKGREEN OFFSET(8) NUMBITS(8) [],
        CKRED OFFSET(16) NUMBITS(8) []
    ],
    pub PFCR [
        /// Pixel format
        PF OFFSET(0) NUMBITS(3) [
            ARGB8888 = 0,
            RGB888 = 1,
            RGB565 = 2,
            ARGB1555 = 3,
            ARGB4444 = 4,
            L8 = 5,
            AL44 = 6,
            AL88 = 7
        ]
    ],
    pub CACR [
        /// Constant alpha
        CONSTA OFFSET(0) NUMBITS(8) []
    ],
    pub DCCR [
        DCBLUE OFFSET(0) NUMBITS(8) [],
        DCGREEN OFFSET(8) NUMBITS(8) [],
        DCRED OFFSET(16) NUMBITS(8) [],
        DCALPHA OFFSET(24) NUMBITS(8) []
    ],
    pub BFCR [
        /// Blending factor 2
        BF2 OFFSET(0) NUMBITS(3) [
            OneMinusConstantAlpha = 5,
            OneMinusPixelAlphaTimesConstantAlpha = 7
        ],
        /// Blending factor 1
        BF1 OFFSET(8) NUMBITS(3) [
            ConstantAlpha = 4,
            PixelAlphaTimesConstantAlpha = 6
        ]
    ],
    pub CFBLR [
        /// Line length in bytes, plus three
        CFBLL OFFSET(0) NUMBITS(13) [],
        /// Pitch in bytes
        CFBP OFFSET(16) NUMBITS(13) []
    ],
    pub CFBLNR [
        /// Number of lines
        CFBLNBR OFFSET(0) NUMBITS(11) []
    ],
    pub CLUTWR [
        BLUE OFFSET(0) NUMBITS(8) [],
        GREEN OFFSET(8) NUMBITS(8) [],
        RED OFFSET(16) NUMBITS(8) [],
        /// CLUT address
        CLUTADD OFFSET(24) NUMBITS(8) []
    ]
];

instances! {
    pub enum Layer {
        Layer1("LTDC_Layer1") = memory_map::LTDC_LAYER1_BASE,
        Layer2("LTDC_Layer2") = memory_map::LTDC_LAYER2_BASE,
    }
}

impl Layer {
    /// Blending order, layer 1 sits below layer 2.
    pub const fn index(self) -> usize {
        match self {
            Layer::Layer1 => 0,
            Layer::Layer2 => 1,
        }
    }
}

/// Bytes per pixel of a layer pixel format.
pub const fn bytes_per_pixel(format: PFCR::PF::Value) -> u32 {
    match format {
        PFCR::PF::Value::ARGB8888 => 4,
        PFCR::PF::Value::RGB888 => 3,
        PFCR::PF::Value::RGB565
        | PFCR::PF::Value::ARGB1555
        | PFCR::PF::Value::ARGB4444
        | PFCR::PF::Value::AL88 => 2,
        PFCR::PF::Value::L8 | PFCR::PF::Value::AL44 => 1,
    }
}

pub const INTERRUPT: Interrupt = Interrupt::LTDC;
pub const ERROR_INTERRUPT: Interrupt = Interrupt::LTDC_ER;

pub(crate) const LTDC: StaticRef<LtdcRegisters> =
    unsafe { StaticRef::new(memory_map::LTDC_BASE as *const LtdcRegisters) };
pub(crate) const LTDC_LAYER1: StaticRef<LtdcLayerRegisters> =
    unsafe { StaticRef::new(memory_map::LTDC_LAYER1_BASE as *const LtdcLayerRegisters) };
pub(crate) const LTDC_LAYER2: StaticRef<LtdcLayerRegisters> =
    unsafe { StaticRef::new(memory_map::LTDC_LAYER2_BASE as *const LtdcLayerRegisters) };
