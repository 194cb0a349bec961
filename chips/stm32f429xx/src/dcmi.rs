// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Digital camera interface.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::memory_map;
use crate::static_ref::StaticRef;

register_structs! {
    pub DcmiRegisters {
        (0x00 => pub cr: ReadWrite<u32, CR::Register>),
        (0x04 => pub sr: ReadOnly<u32, SR::Register>),
        /// raw interrupt status
        (0x08 => pub ris: ReadOnly<u32, RIS::Register>),
        (0x0C => pub ier: ReadWrite<u32, IER::Register>),
        /// masked interrupt status
        (0x10 => pub mis: ReadOnly<u32, MIS::Register>),
        (0x14 => pub icr: WriteOnly<u32, ICR::Register>),
        /// embedded synchronization codes
        (0x18 => pub escr: ReadWrite<u32, ESCR::Register>),
        (0x1C => pub esur: ReadWrite<u32, ESUR::Register>),
        /// crop window start
        (0x20 => pub cwstrt: ReadWrite<u32, CWSTRT::Register>),
        /// crop window size
        (0x24 => pub cwsize: ReadWrite<u32, CWSIZE::Register>),
        (0x28 => pub dr: ReadOnly<u32, DR::Register>),
        (0x2C => @END),
    }
}

register_bitfields![u32,
    pub CR [
        /// Capture enable
        CAPTURE OFFSET(0) NUMBITS(1) [],
        /// Capture mode
        CM OFFSET(1) NUMBITS(1) [
            Continuous = 0,
            Snapshot = 1
        ],
        /// Crop feature
        CROP OFFSET(2) NUMBITS(1) [],
        /// JPEG format
        JPEG OFFSET(3) NUMBITS(1) [],
        /// Embedded synchronization select
        ESS OFFSET(4) NUMBITS(1) [],
        /// Pixel clock polarity
        PCKPOL OFFSET(5) NUMBITS(1) [],
        /// Horizontal synchronization polarity
        HSPOL OFFSET(6) NUMBITS(1) [],
        /// Vertical synchronization polarity
        VSPOL OFFSET(7) NUMBITS(1) [],
        /// Frame capture rate control
        FCRC OFFSET(8) NUMBITS(2) [
            All = 0,
            Alternate = 1,
            OneInFour = 2
        ],
        /// Extended data mode
        EDM OFFSET(10) NUMBITS(2) [
            Bits8 = 0,
            Bits10 = 1,
            Bits12 = 2,
            Bits14 = 3
        ],
        /// DCMI enable
        ENABLE OFFSET(14) NUMBITS(1) [],
        FCRC_0 OFFSET(8) NUMBITS(1) [],
        FCRC_1 OFFSET(9) NUMBITS(1) [],
        EDM_0 OFFSET(10) NUMBITS(1) [],
        EDM_1 OFFSET(11) NUMBITS(1) []
    ],
    pub SR [
        HSYNC OFFSET(0) NUMBITS(1) [],
        VSYNC OFFSET(1) NUMBITS(1) [],
        /// FIFO not empty
        FNE OFFSET(2) NUMBITS(1) []
    ],
    pub RIS [
        /// Capture complete raw flag
        FRAME_RIS OFFSET(0) NUMBITS(1) [],
        /// Overrun raw flag
        OVR_RIS OFFSET(1) NUMBITS(1) [],
        /// Synchronization error raw flag
        ERR_RIS OFFSET(2) NUMBITS(1) [],
        /// VSYNC raw flag
        VSYNC_RIS OFFSET(3) NUMBITS(1) [],
        /// Line raw flag
        LINE_RIS OFFSET(4) NUMBITS(1) []
    ],
    pub IER [
        /// Capture complete interrupt enable
        FRAME_IE OFFSET(0) NUMBITS(1) [],
        /// Overrun interrupt enable
        OVR_IE OFFSET(1) NUMBITS(1) [],
        /// Synchronization error interrupt enable
        ERR_IE OFFSET(2) NUMBITS(1) [],
        /// VSYNC interrupt enable
        VSYNC_IE OFFSET(3) NUMBITS(1) [],
        /// Line interrupt enable
        LINE_IE OFFSET(4) NUMBITS(1) []
    ],
    pub MIS [
        /// Capture complete masked flag
        FRAME_MIS OFFSET(0) NUMBITS(1) [],
        /// Overrun masked flag
        OVR_MIS OFFSET(1) NUMBITS(1) [],
        /// Synchronization error masked flag
        ERR_MIS OFFSET(2) NUMBITS(1) [],
        /// VSYNC masked flag
        VSYNC_MIS OFFSET(3) NUMBITS(1) [],
        /// Line masked flag
        LINE_MIS OFFSET(4) NUMBITS(1) []
    ],
    pub ICR [
        /// Capture complete flag clear
        FRAME_ISC OFFSET(0) NUMBITS(1) [],
        /// Overrun flag clear
        OVR_ISC OFFSET(1) NUMBITS(1) [],
        /// Synchronization error flag clear
        ERR_ISC OFFSET(2) NUMBITS(1) [],
        /// VSYNC flag clear
        VSYNC_ISC OFFSET(3) NUMBITS(1) [],
        /// Line flag clear
        LINE_ISC OFFSET(4) NUMBITS(1) []
    ],
    pub ESCR [
        /// Frame start delimiter code
        FSC OFFSET(0) NUMBITS(8) [],
        /// Line start delimiter code
        LSC OFFSET(8) NUMBITS(8) [],
        /// Line end delimiter code
        LEC OFFSET(16) NUMBITS(8) [],
        /// Frame end delimiter code
        FEC OFFSET(24) NUMBITS(8) []
    ],
    pub ESUR [
        /// Frame start delimiter unmask
        FSU OFFSET(0) NUMBITS(8) [],
        /// Line start delimiter unmask
        LSU OFFSET(8) NUMBITS(8) [],
        /// Line end delimiter unmask
        LEU OFFSET(16) NUMBITS(8) [],
        /// Frame end delimiter unmask
        FEU OFFSET(24) NUMBITS(8) []
    ],
    pub CWSTRT [
        /// Horizontal offset in pixel clocks
        HOFFCNT OFFSET(0) NUMBITS(14) [],
        /// Vertical start line
        VST OFFSET(16) NUMBITS(13) []
    ],
    pub CWSIZE [
        /// Capture count in pixel clocks, minus one
        CAPCNT OFFSET(0) NUMBITS(14) [],
        /// Vertical line count, minus one
        VLINE OFFSET(16) NUMBITS(14) []
    ],
    pub DR [
        BYTE0 OFFSET(0) NUMBITS(8) [],
        BYTE1 OFFSET(8) NUMBITS(8) [],
        BYTE2 OFFSET(16) NUMBITS(8) [],
        BYTE3 OFFSET(24) NUMBITS(8) []
    ]
];

/// Overrun flags under their old name.
#[allow(non_snake_case)]
pub mod legacy {
    pub mod RIS {
        pub use crate::dcmi::RIS::OVR_RIS as OVF_RIS;
    }

    pub mod IER {
        pub use crate::dcmi::IER::OVR_IE as OVF_IE;
    }

    pub mod MIS {
        pub use crate::dcmi::MIS::OVR_MIS as OVF_MIS;
    }

    pub mod ICR {
        pub use crate::dcmi::ICR::OVR_ISC as OVF_ISC;
    }
}

pub(crate) const DCMI: StaticRef<DcmiRegisters> =
    unsafe { StaticRef::new(memory_map::DCMI_BASE as *const DcmiRegisters) };
