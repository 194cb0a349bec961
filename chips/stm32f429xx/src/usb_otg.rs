// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! USB on-the-go controllers.
//!
//! Both cores share one register layout. Each core is split into a global
//! block, a host block followed by the host port register and up to
//! [`HS_HOST_CHANNELS`] channel blocks, a device block with its IN and OUT
//! endpoint blocks, the power and clock gating register, and one 4 KiB
//! window per transmit FIFO. The full-speed core implements a subset of
//! the endpoints, channels and FIFO memory.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::errorcode::ErrorCode;
use crate::memory_map;
use crate::nvic::Interrupt;
use crate::static_ref::StaticRef;

/// Device IN endpoint transmit FIFO size registers after endpoint 0.
pub const DIEPTXF_COUNT: usize = 15;

pub const FS_ENDPOINTS: usize = 4;
pub const FS_HOST_CHANNELS: usize = 8;
pub const FS_FIFO_BYTES: usize = 1280;
pub const HS_ENDPOINTS: usize = 6;
pub const HS_HOST_CHANNELS: usize = 12;
pub const HS_FIFO_BYTES: usize = 4096;

/// Address space each core decodes.
pub const CORE_SIZE: usize = 0x4_0000;

pub const GUSBCFG_RESET: u32 = 0x0000_0A00;
pub const GRSTCTL_RESET: u32 = 0x8000_0000;
pub const GRXFSIZ_RESET: u32 = 0x0000_0200;
pub const GNPTXFSIZ_RESET: u32 = 0x0200_0200;
pub const HPTXFSIZ_RESET: u32 = 0x0200_0600;
pub const DIEPTXF_RESET: u32 = 0x0200_0400;

register_structs! {
    pub OtgGlobalRegisters {
        /// control and status register
        (0x000 => pub gotgctl: ReadWrite<u32, GOTGCTL::Register>),
        /// interrupt register
        (0x004 => pub gotgint: ReadWrite<u32, GOTGINT::Register>),
        /// AHB configuration register
        (0x008 => pub gahbcfg: ReadWrite<u32, GAHBCFG::Register>),
        /// USB configuration register
        (0x00C => pub gusbcfg: ReadWrite<u32, GUSBCFG::Register>),
        /// reset register
        (0x010 => pub grstctl: ReadWrite<u32, GRSTCTL::Register>),
        /// core interrupt register
        (0x014 => pub gintsts: ReadWrite<u32, GINTSTS::Register>),
        /// interrupt mask register
        (0x018 => pub gintmsk: ReadWrite<u32, GINTMSK::Register>),
        /// receive status debug read
        (0x01C => pub grxstsr: ReadOnly<u32, GRXSTS::Register>),
        /// receive status read and pop
        (0x020 => pub grxstsp: ReadOnly<u32, GRXSTS::Register>),
        /// receive FIFO size register
        (0x024 => pub grxfsiz: ReadWrite<u32, GRXFSIZ::Register>),
        /// HNPTXFSIZ in host mode, DIEPTXF0 in device mode
        (0x028 => pub gnptxfsiz: ReadWrite<u32, GNPTXFSIZ::Register>),
        /// non-periodic transmit FIFO and queue status
        (0x02C => pub hnptxsts: ReadOnly<u32, HNPTXSTS::Register>),
        (0x030 => _reserved0),
        /// general core configuration register
        (0x038 => pub gccfg: ReadWrite<u32, GCCFG::Register>),
        /// core ID register
        (0x03C => pub cid: ReadWrite<u32>),
        (0x040 => _reserved1),
        /// host periodic transmit FIFO size register
        (0x100 => pub hptxfsiz: ReadWrite<u32, HPTXFSIZ::Register>),
        /// transmit FIFO size of IN endpoints 1 to 15
        (0x104 => pub dieptxf: [ReadWrite<u32, DIEPTXF::Register>; DIEPTXF_COUNT]),
        (0x140 => @END),
    },

    pub OtgHostRegisters {
        /// host configuration register
        (0x00 => pub hcfg: ReadWrite<u32, HCFG::Register>),
        /// host frame interval register
        (0x04 => pub hfir: ReadWrite<u32, HFIR::Register>),
        /// host frame number and frame time remaining
        (0x08 => pub hfnum: ReadOnly<u32, HFNUM::Register>),
        (0x0C => _reserved0),
        /// host periodic transmit FIFO and queue status
        (0x10 => pub hptxsts: ReadWrite<u32, HPTXSTS::Register>),
        /// host all channels interrupt register
        (0x14 => pub haint: ReadOnly<u32, HAINT::Register>),
        (0x18 => pub haintmsk: ReadWrite<u32, HAINTMSK::Register>),
        (0x1C => @END),
    },

    pub OtgHostPortRegisters {
        /// host port control and status register
        (0x0 => pub hprt: ReadWrite<u32, HPRT::Register>),
        (0x4 => @END),
    },

    pub OtgHostChannelRegisters {
        /// characteristics register
        (0x00 => pub hcchar: ReadWrite<u32, HCCHAR::Register>),
        /// split control register
        (0x04 => pub hcsplt: ReadWrite<u32, HCSPLT::Register>),
        /// interrupt register
        (0x08 => pub hcint: ReadWrite<u32, HCINT::Register>),
        /// interrupt mask register
        (0x0C => pub hcintmsk: ReadWrite<u32, HCINTMSK::Register>),
        /// transfer size register
        (0x10 => pub hctsiz: ReadWrite<u32, HCTSIZ::Register>),
        /// DMA address register
        (0x14 => pub hcdma: ReadWrite<u32>),
        (0x18 => _reserved0),
        (0x20 => @END),
    },

    pub OtgDeviceRegisters {
        /// device configuration register
        (0x00 => pub dcfg: ReadWrite<u32, DCFG::Register>),
        /// device control register
        (0x04 => pub dctl: ReadWrite<u32, DCTL::Register>),
        /// device status register
        (0x08 => pub dsts: ReadOnly<u32, DSTS::Register>),
        (0x0C => _reserved0),
        /// IN endpoint common interrupt mask
        (0x10 => pub diepmsk: ReadWrite<u32, DIEPMSK::Register>),
        /// OUT endpoint common interrupt mask
        (0x14 => pub doepmsk: ReadWrite<u32, DOEPMSK::Register>),
        /// all endpoints interrupt register
        (0x18 => pub daint: ReadOnly<u32, DAINT::Register>),
        (0x1C => pub daintmsk: ReadWrite<u32, DAINTMSK::Register>),
        (0x20 => _reserved1),
        /// VBUS discharge time register
        (0x28 => pub dvbusdis: ReadWrite<u32, DVBUSDIS::Register>),
        /// VBUS pulsing time register
        (0x2C => pub dvbuspulse: ReadWrite<u32, DVBUSPULSE::Register>),
        /// threshold control register
        (0x30 => pub dthrctl: ReadWrite<u32, DTHRCTL::Register>),
        /// IN endpoint FIFO empty interrupt mask
        (0x34 => pub diepempmsk: ReadWrite<u32, DIEPEMPMSK::Register>),
        /// each endpoint interrupt register
        (0x38 => pub deachint: ReadWrite<u32, DEACHINT::Register>),
        (0x3C => pub deachmsk: ReadWrite<u32, DEACHMSK::Register>),
        (0x40 => _reserved2),
        /// IN endpoint 1 interrupt mask
        (0x44 => pub diepeachmsk1: ReadWrite<u32, DIEPEACHMSK1::Register>),
        (0x48 => _reserved3),
        /// OUT endpoint 1 interrupt mask
        (0x84 => pub doepeachmsk1: ReadWrite<u32, DOEPEACHMSK1::Register>),
        (0x88 => @END),
    },

    pub OtgInEndpointRegisters {
        (0x00 => pub diepctl: ReadWrite<u32, DIEPCTL::Register>),
        (0x04 => _reserved0),
        (0x08 => pub diepint: ReadWrite<u32, DIEPINT::Register>),
        (0x0C => _reserved1),
        (0x10 => pub dieptsiz: ReadWrite<u32, DIEPTSIZ::Register>),
        (0x14 => pub diepdma: ReadWrite<u32>),
        /// transmit FIFO status
        (0x18 => pub dtxfsts: ReadOnly<u32, DTXFSTS::Register>),
        (0x1C => _reserved2),
        (0x20 => @END),
    },

    pub OtgOutEndpointRegisters {
        (0x00 => pub doepctl: ReadWrite<u32, DOEPCTL::Register>),
        (0x04 => _reserved0),
        (0x08 => pub doepint: ReadWrite<u32, DOEPINT::Register>),
        (0x0C => _reserved1),
        (0x10 => pub doeptsiz: ReadWrite<u32, DOEPTSIZ::Register>),
        (0x14 => pub doepdma: ReadWrite<u32>),
        (0x18 => _reserved2),
        (0x20 => @END),
    },

    pub OtgPowerClockRegisters {
        (0x0 => pub pcgcctl: ReadWrite<u32, PCGCCTL::Register>),
        (0x4 => @END),
    }
}

register_bitfields![u32,
    pub GOTGCTL [
        /// Session request success
        SRQSCS OFFSET(0) NUMBITS(1) [],
        /// Session request
        SRQ OFFSET(1) NUMBITS(1) [],
        /// Host negotiation success
        HNGSCS OFFSET(8) NUMBITS(1) [],
        /// HNP request
        HNPRQ OFFSET(9) NUMBITS(1) [],
        /// Host set HNP enable
        HSHNPEN OFFSET(10) NUMBITS(1) [],
        /// Device HNP enabled
        DHNPEN OFFSET(11) NUMBITS(1) [],
        /// Connector ID status
        CIDSTS OFFSET(16) NUMBITS(1) [
            A = 0,
            B = 1
        ],
        /// Long or short debounce time
        DBCT OFFSET(17) NUMBITS(1) [],
        /// A-session valid
        ASVLD OFFSET(18) NUMBITS(1) [],
        /// B-session valid
        BSVLD OFFSET(19) NUMBITS(1) []
    ],
    pub GOTGINT [
        /// Session end detected
        SEDET OFFSET(2) NUMBITS(1) [],
        /// Session request success status change
        SRSSCHG OFFSET(8) NUMBITS(1) [],
        /// Host negotiation success status change
        HNSSCHG OFFSET(9) NUMBITS(1) [],
        /// Host negotiation detected
        HNGDET OFFSET(17) NUMBITS(1) [],
        /// A-device timeout change
        ADTOCHG OFFSET(18) NUMBITS(1) [],
        /// Debounce done
        DBCDNE OFFSET(19) NUMBITS(1) []
    ],
    pub GAHBCFG [
        /// Global interrupt mask
        GINT OFFSET(0) NUMBITS(1) [],
        /// Burst length
        HBSTLEN OFFSET(1) NUMBITS(4) [
            Single = 0,
            Incr = 1,
            Incr4 = 3,
            Incr8 = 5,
            Incr16 = 7
        ],
        /// DMA enable
        DMAEN OFFSET(5) NUMBITS(1) [],
        /// TxFIFO empty level
        TXFELVL OFFSET(7) NUMBITS(1) [
            Half = 0,
            Empty = 1
        ],
        /// Periodic TxFIFO empty level
        PTXFELVL OFFSET(8) NUMBITS(1) [
            Half = 0,
            Empty = 1
        ],
        HBSTLEN_0 OFFSET(1) NUMBITS(1) [],
        HBSTLEN_1 OFFSET(2) NUMBITS(1) [],
        HBSTLEN_2 OFFSET(3) NUMBITS(1) [],
        HBSTLEN_3 OFFSET(4) NUMBITS(1) []
    ],
    pub GUSBCFG [
        /// Timeout calibration
        TOCAL OFFSET(0) NUMBITS(3) [],
        /// Full-speed serial transceiver select
        PHYSEL OFFSET(6) NUMBITS(1) [],
        /// SRP capable
        SRPCAP OFFSET(8) NUMBITS(1) [],
        /// HNP capable
        HNPCAP OFFSET(9) NUMBITS(1) [],
        /// USB turnaround time
        TRDT OFFSET(10) NUMBITS(4) [],
        /// PHY low-power clock select
        PHYLPCS OFFSET(15) NUMBITS(1) [],
        /// ULPI FS/LS select
        ULPIFSLS OFFSET(17) NUMBITS(1) [],
        /// ULPI auto-resume
        ULPIAR OFFSET(18) NUMBITS(1) [],
        /// ULPI clock suspend mode
        ULPICSM OFFSET(19) NUMBITS(1) [],
        /// ULPI external VBUS drive
        ULPIEVBUSD OFFSET(20) NUMBITS(1) [],
        /// ULPI external VBUS indicator
        ULPIEVBUSI OFFSET(21) NUMBITS(1) [],
        /// TermSel DLine pulsing selection
        TSDPS OFFSET(22) NUMBITS(1) [],
        /// Indicator complement
        PCCI OFFSET(23) NUMBITS(1) [],
        /// Indicator pass through
        PTCI OFFSET(24) NUMBITS(1) [],
        /// ULPI interface protect disable
        ULPIIPD OFFSET(25) NUMBITS(1) [],
        /// Force host mode
        FHMOD OFFSET(29) NUMBITS(1) [],
        /// Force device mode
        FDMOD OFFSET(30) NUMBITS(1) [],
        /// Corrupt Tx packet
        CTXPKT OFFSET(31) NUMBITS(1) [],
        TOCAL_0 OFFSET(0) NUMBITS(1) [],
        TOCAL_1 OFFSET(1) NUMBITS(1) [],
        TOCAL_2 OFFSET(2) NUMBITS(1) [],
        TRDT_0 OFFSET(10) NUMBITS(1) [],
        TRDT_1 OFFSET(11) NUMBITS(1) [],
        TRDT_2 OFFSET(12) NUMBITS(1) [],
        TRDT_3 OFFSET(13) NUMBITS(1) []
    ],
    pub GRSTCTL [
        /// Core soft reset
        CSRST OFFSET(0) NUMBITS(1) [],
        /// HCLK soft reset
        HSRST OFFSET(1) NUMBITS(1) [],
        /// Host frame counter reset
        FCRST OFFSET(2) NUMBITS(1) [],
        /// RxFIFO flush
        RXFFLSH OFFSET(4) NUMBITS(1) [],
        /// TxFIFO flush
        TXFFLSH OFFSET(5) NUMBITS(1) [],
        /// TxFIFO number
        TXFNUM OFFSET(6) NUMBITS(5) [
            All = 0x10
        ],
        /// DMA request signal
        DMAREQ OFFSET(30) NUMBITS(1) [],
        /// AHB master idle
        AHBIDL OFFSET(31) NUMBITS(1) [],
        TXFNUM_0 OFFSET(6) NUMBITS(1) [],
        TXFNUM_1 OFFSET(7) NUMBITS(1) [],
        TXFNUM_2 OFFSET(8) NUMBITS(1) [],
        TXFNUM_3 OFFSET(9) NUMBITS(1) [],
        TXFNUM_4 OFFSET(10) NUMBITS(1) []
    ],
    pub GINTSTS [
        /// Current mode of operation
        CMOD OFFSET(0) NUMBITS(1) [
            Device = 0,
            Host = 1
        ],
        /// Mode mismatch interrupt
        MMIS OFFSET(1) NUMBITS(1) [],
        /// OTG interrupt
        OTGINT OFFSET(2) NUMBITS(1) [],
        /// Start of frame
        SOF OFFSET(3) NUMBITS(1) [],
        /// RxFIFO non-empty
        RXFLVL OFFSET(4) NUMBITS(1) [],
        /// Non-periodic TxFIFO empty
        NPTXFE OFFSET(5) NUMBITS(1) [],
        /// Global IN non-periodic NAK effective
        GINAKEFF OFFSET(6) NUMBITS(1) [],
        /// Global OUT NAK effective
        BOUTNAKEFF OFFSET(7) NUMBITS(1) [],
        /// Early suspend
        ESUSP OFFSET(10) NUMBITS(1) [],
        /// USB suspend
        USBSUSP OFFSET(11) NUMBITS(1) [],
        /// USB reset
        USBRST OFFSET(12) NUMBITS(1) [],
        /// Enumeration done
        ENUMDNE OFFSET(13) NUMBITS(1) [],
        /// Isochronous OUT packet dropped
        ISOODRP OFFSET(14) NUMBITS(1) [],
        /// End of periodic frame
        EOPF OFFSET(15) NUMBITS(1) [],
        /// IN endpoint interrupt
        IEPINT OFFSET(18) NUMBITS(1) [],
        /// OUT endpoint interrupt
        OEPINT OFFSET(19) NUMBITS(1) [],
        /// Incomplete isochronous IN transfer
        IISOIXFR OFFSET(20) NUMBITS(1) [],
        /// Incomplete periodic or isochronous OUT transfer
        PXFR_INCOMPISOOUT OFFSET(21) NUMBITS(1) [],
        /// Data fetch suspended
        DATAFSUSP OFFSET(22) NUMBITS(1) [],
        /// Host port interrupt
        HPRTINT OFFSET(24) NUMBITS(1) [],
        /// Host channels interrupt
        HCINT OFFSET(25) NUMBITS(1) [],
        /// Periodic TxFIFO empty
        PTXFE OFFSET(26) NUMBITS(1) [],
        /// Connector ID status change
        CIDSCHG OFFSET(28) NUMBITS(1) [],
        /// Disconnect detected
        DISCINT OFFSET(29) NUMBITS(1) [],
        /// Session request or new session detected
        SRQINT OFFSET(30) NUMBITS(1) [],
        /// Resume or remote wakeup detected
        WKUINT OFFSET(31) NUMBITS(1) []
    ],
    pub GINTMSK [
        MMISM OFFSET(1) NUMBITS(1) [],
        OTGINT OFFSET(2) NUMBITS(1) [],
        SOFM OFFSET(3) NUMBITS(1) [],
        RXFLVLM OFFSET(4) NUMBITS(1) [],
        NPTXFEM OFFSET(5) NUMBITS(1) [],
        GINAKEFFM OFFSET(6) NUMBITS(1) [],
        GONAKEFFM OFFSET(7) NUMBITS(1) [],
        ESUSPM OFFSET(10) NUMBITS(1) [],
        USBSUSPM OFFSET(11) NUMBITS(1) [],
        USBRST OFFSET(12) NUMBITS(1) [],
        ENUMDNEM OFFSET(13) NUMBITS(1) [],
        ISOODRPM OFFSET(14) NUMBITS(1) [],
        EOPFM OFFSET(15) NUMBITS(1) [],
        /// Endpoint mismatch interrupt mask
        EPMISM OFFSET(17) NUMBITS(1) [],
        IEPINT OFFSET(18) NUMBITS(1) [],
        OEPINT OFFSET(19) NUMBITS(1) [],
        IISOIXFRM OFFSET(20) NUMBITS(1) [],
        PXFRM_IISOOXFRM OFFSET(21) NUMBITS(1) [],
        FSUSPM OFFSET(22) NUMBITS(1) [],
        PRTIM OFFSET(24) NUMBITS(1) [],
        HCIM OFFSET(25) NUMBITS(1) [],
        PTXFEM OFFSET(26) NUMBITS(1) [],
        CIDSCHGM OFFSET(28) NUMBITS(1) [],
        DISCINT OFFSET(29) NUMBITS(1) [],
        SRQIM OFFSET(30) NUMBITS(1) [],
        WUIM OFFSET(31) NUMBITS(1) []
    ],
    /// Receive status, read with GRXSTSR or popped with GRXSTSP. CHNUM is the
    /// host mode name of EPNUM
    pub GRXSTS [
        /// Endpoint number, device mode
        EPNUM OFFSET(0) NUMBITS(4) [],
        /// Byte count
        BCNT OFFSET(4) NUMBITS(11) [],
        /// Data PID
        DPID OFFSET(15) NUMBITS(2) [
            Data0 = 0,
            Data2 = 1,
            Data1 = 2,
            MData = 3
        ],
        /// Packet status
        PKTSTS OFFSET(17) NUMBITS(4) [],
        /// Frame number
        FRMNUM OFFSET(21) NUMBITS(4) [],
        /// Channel number, host mode
        CHNUM OFFSET(0) NUMBITS(4) []
    ],
    pub GRXFSIZ [
        /// RxFIFO depth in words
        RXFD OFFSET(0) NUMBITS(16) []
    ],
    /// Host non-periodic and device endpoint 0 transmit FIFO size
    pub GNPTXFSIZ [
        /// Non-periodic TxFIFO start address, host mode
        NPTXFSA OFFSET(0) NUMBITS(16) [],
        /// Non-periodic TxFIFO depth, host mode
        NPTXFD OFFSET(16) NUMBITS(16) [],
        /// Endpoint 0 TxFIFO start address, device mode
        TX0FSA OFFSET(0) NUMBITS(16) [],
        /// Endpoint 0 TxFIFO depth, device mode
        TX0FD OFFSET(16) NUMBITS(16) []
    ],
    pub HNPTXSTS [
        /// Non-periodic TxFIFO space available
        NPTXFSAV OFFSET(0) NUMBITS(16) [],
        /// Non-periodic transmit request queue space available
        NPTQXSAV OFFSET(16) NUMBITS(8) [],
        /// Top of the non-periodic transmit request queue
        NPTXQTOP OFFSET(24) NUMBITS(7) []
    ],
    pub GCCFG [
        /// Power down, transceiver active when set
        PWRDWN OFFSET(16) NUMBITS(1) [],
        /// VBUS sensing A device
        VBUSASEN OFFSET(18) NUMBITS(1) [],
        /// VBUS sensing B device
        VBUSBSEN OFFSET(19) NUMBITS(1) [],
        /// SOF output enable
        SOFOUTEN OFFSET(20) NUMBITS(1) [],
        /// VBUS sensing disable
        NOVBUSSENS OFFSET(21) NUMBITS(1) []
    ],
    pub HPTXFSIZ [
        /// Host periodic TxFIFO start address
        PTXSA OFFSET(0) NUMBITS(16) [],
        /// Host periodic TxFIFO depth
        PTXFD OFFSET(16) NUMBITS(16) []
    ],
    pub DIEPTXF [
        /// IN endpoint FIFO start address
        INEPTXSA OFFSET(0) NUMBITS(16) [],
        /// IN endpoint TxFIFO depth
        INEPTXFD OFFSET(16) NUMBITS(16) []
    ],
    pub HCFG [
        /// FS/LS PHY clock select
        FSLSPCS OFFSET(0) NUMBITS(2) [
            Clock48MHz = 1,
            Clock6MHz = 2
        ],
        /// FS- and LS-only support
        FSLSS OFFSET(2) NUMBITS(1) []
    ],
    pub HFIR [
        /// Frame interval
        FRIVL OFFSET(0) NUMBITS(16) []
    ],
    pub HFNUM [
        /// Frame number
        FRNUM OFFSET(0) NUMBITS(16) [],
        /// Frame time remaining
        FTREM OFFSET(16) NUMBITS(16) []
    ],
    pub HPTXSTS [
        /// Periodic TxFIFO space available
        PTXFSAVL OFFSET(0) NUMBITS(16) [],
        /// Periodic transmit request queue space available
        PTXQSAV OFFSET(16) NUMBITS(8) [],
        /// Top of the periodic transmit request queue
        PTXQTOP OFFSET(24) NUMBITS(8) []
    ],
    pub HAINT [
        /// Channel interrupts
        HAINT OFFSET(0) NUMBITS(16) []
    ],
    pub HAINTMSK [
        /// Channel interrupt mask
        HAINTM OFFSET(0) NUMBITS(16) []
    ],
    pub HPRT [
        /// Port connect status
        PCSTS OFFSET(0) NUMBITS(1) [],
        /// Port connect detected
        PCDET OFFSET(1) NUMBITS(1) [],
        /// Port enable
        PENA OFFSET(2) NUMBITS(1) [],
        /// Port enable/disable change
        PENCHNG OFFSET(3) NUMBITS(1) [],
        /// Port overcurrent active
        POCA OFFSET(4) NUMBITS(1) [],
        /// Port overcurrent change
        POCCHNG OFFSET(5) NUMBITS(1) [],
        /// Port resume
        PRES OFFSET(6) NUMBITS(1) [],
        /// Port suspend
        PSUSP OFFSET(7) NUMBITS(1) [],
        /// Port reset
        PRST OFFSET(8) NUMBITS(1) [],
        /// Port line status
        PLSTS OFFSET(10) NUMBITS(2) [],
        /// Port power
        PPWR OFFSET(12) NUMBITS(1) [],
        /// Port test control
        PTCTL OFFSET(13) NUMBITS(4) [],
        /// Port speed
        PSPD OFFSET(17) NUMBITS(2) [
            HighSpeed = 0,
            FullSpeed = 1,
            LowSpeed = 2
        ],
        PLSTS_0 OFFSET(10) NUMBITS(1) [],
        PLSTS_1 OFFSET(11) NUMBITS(1) [],
        PTCTL_0 OFFSET(13) NUMBITS(1) [],
        PTCTL_1 OFFSET(14) NUMBITS(1) [],
        PTCTL_2 OFFSET(15) NUMBITS(1) [],
        PTCTL_3 OFFSET(16) NUMBITS(1) [],
        PSPD_0 OFFSET(17) NUMBITS(1) [],
        PSPD_1 OFFSET(18) NUMBITS(1) []
    ],
    pub HCCHAR [
        /// Maximum packet size
        MPSIZ OFFSET(0) NUMBITS(11) [],
        /// Endpoint number
        EPNUM OFFSET(11) NUMBITS(4) [],
        /// Endpoint direction
        EPDIR OFFSET(15) NUMBITS(1) [
            Out = 0,
            In = 1
        ],
        /// Low-speed device
        LSDEV OFFSET(17) NUMBITS(1) [],
        /// Endpoint type
        EPTYP OFFSET(18) NUMBITS(2) [
            Control = 0,
            Isochronous = 1,
            Bulk = 2,
            Interrupt = 3
        ],
        /// Multicount
        MC OFFSET(20) NUMBITS(2) [],
        /// Device address
        DAD OFFSET(22) NUMBITS(7) [],
        /// Odd frame
        ODDFRM OFFSET(29) NUMBITS(1) [],
        /// Channel disable
        CHDIS OFFSET(30) NUMBITS(1) [],
        /// Channel enable
        CHENA OFFSET(31) NUMBITS(1) [],
        EPTYP_0 OFFSET(18) NUMBITS(1) [],
        EPTYP_1 OFFSET(19) NUMBITS(1) [],
        MC_0 OFFSET(20) NUMBITS(1) [],
        MC_1 OFFSET(21) NUMBITS(1) []
    ],
    pub HCSPLT [
        /// Port address
        PRTADDR OFFSET(0) NUMBITS(7) [],
        /// Hub address
        HUBADDR OFFSET(7) NUMBITS(7) [],
        /// Transaction position
        XACTPOS OFFSET(14) NUMBITS(2) [],
        /// Do complete split
        COMPLSPLT OFFSET(16) NUMBITS(1) [],
        /// Split enable
        SPLITEN OFFSET(31) NUMBITS(1) []
    ],
    pub HCINT [
        /// Transfer completed
        XFRC OFFSET(0) NUMBITS(1) [],
        /// Channel halted
        CHH OFFSET(1) NUMBITS(1) [],
        /// AHB error
        AHBERR OFFSET(2) NUMBITS(1) [],
        /// STALL response received
        STALL OFFSET(3) NUMBITS(1) [],
        /// NAK response received
        NAK OFFSET(4) NUMBITS(1) [],
        /// ACK response received or transmitted
        ACK OFFSET(5) NUMBITS(1) [],
        /// NYET response received
        NYET OFFSET(6) NUMBITS(1) [],
        /// Transaction error
        TXERR OFFSET(7) NUMBITS(1) [],
        /// Babble error
        BBERR OFFSET(8) NUMBITS(1) [],
        /// Frame overrun
        FRMOR OFFSET(9) NUMBITS(1) [],
        /// Data toggle error
        DTERR OFFSET(10) NUMBITS(1) []
    ],
    pub HCINTMSK [
        XFRCM OFFSET(0) NUMBITS(1) [],
        CHHM OFFSET(1) NUMBITS(1) [],
        AHBERRM OFFSET(2) NUMBITS(1) [],
        STALLM OFFSET(3) NUMBITS(1) [],
        NAKM OFFSET(4) NUMBITS(1) [],
        ACKM OFFSET(5) NUMBITS(1) [],
        NYETM OFFSET(6) NUMBITS(1) [],
        TXERRM OFFSET(7) NUMBITS(1) [],
        BBERRM OFFSET(8) NUMBITS(1) [],
        FRMORM OFFSET(9) NUMBITS(1) [],
        DTERRM OFFSET(10) NUMBITS(1) []
    ],
    pub HCTSIZ [
        /// Transfer size
        XFRSIZ OFFSET(0) NUMBITS(19) [],
        /// Packet count
        PKTCNT OFFSET(19) NUMBITS(10) [],
        /// Data PID
        DPID OFFSET(29) NUMBITS(2) [
            Data0 = 0,
            Data2 = 1,
            Data1 = 2,
            MData = 3
        ],
        /// Do ping
        DOPNG OFFSET(31) NUMBITS(1) []
    ],
    pub DCFG [
        /// Device speed
        DSPD OFFSET(0) NUMBITS(2) [
            HighSpeed = 0,
            FullSpeedExternal = 1,
            FullSpeedInternal = 3
        ],
        /// Non-zero-length status OUT handshake
        NZLSOHSK OFFSET(2) NUMBITS(1) [],
        /// Device address
        DAD OFFSET(4) NUMBITS(7) [],
        /// Periodic frame interval
        PFIVL OFFSET(11) NUMBITS(2) [
            Percent80 = 0,
            Percent85 = 1,
            Percent90 = 2,
            Percent95 = 3
        ],
        /// Periodic schedule interval
        PERSCHIVL OFFSET(24) NUMBITS(2) [],
        DSPD_0 OFFSET(0) NUMBITS(1) [],
        DSPD_1 OFFSET(1) NUMBITS(1) [],
        PFIVL_0 OFFSET(11) NUMBITS(1) [],
        PFIVL_1 OFFSET(12) NUMBITS(1) [],
        PERSCHIVL_0 OFFSET(24) NUMBITS(1) [],
        PERSCHIVL_1 OFFSET(25) NUMBITS(1) []
    ],
    pub DCTL [
        /// Remote wakeup signaling
        RWUSIG OFFSET(0) NUMBITS(1) [],
        /// Soft disconnect
        SDIS OFFSET(1) NUMBITS(1) [],
        /// Global IN NAK status
        GINSTS OFFSET(2) NUMBITS(1) [],
        /// Global OUT NAK status
        GONSTS OFFSET(3) NUMBITS(1) [],
        /// Test control
        TCTL OFFSET(4) NUMBITS(3) [],
        /// Set global IN NAK
        SGINAK OFFSET(7) NUMBITS(1) [],
        /// Clear global IN NAK
        CGINAK OFFSET(8) NUMBITS(1) [],
        /// Set global OUT NAK
        SGONAK OFFSET(9) NUMBITS(1) [],
        /// Clear global OUT NAK
        CGONAK OFFSET(10) NUMBITS(1) [],
        /// Power-on programming done
        POPRGDNE OFFSET(11) NUMBITS(1) [],
        TCTL_0 OFFSET(4) NUMBITS(1) [],
        TCTL_1 OFFSET(5) NUMBITS(1) [],
        TCTL_2 OFFSET(6) NUMBITS(1) []
    ],
    pub DSTS [
        /// Suspend status
        SUSPSTS OFFSET(0) NUMBITS(1) [],
        /// Enumerated speed
        ENUMSPD OFFSET(1) NUMBITS(2) [
            HighSpeed = 0,
            FullSpeed = 3
        ],
        /// Erratic error
        EERR OFFSET(3) NUMBITS(1) [],
        /// Frame number of the received SOF
        FNSOF OFFSET(8) NUMBITS(14) []
    ],
    pub DIEPMSK [
        /// Transfer completed interrupt mask
        XFRCM OFFSET(0) NUMBITS(1) [],
        /// Endpoint disabled interrupt mask
        EPDM OFFSET(1) NUMBITS(1) [],
        /// Timeout condition mask
        TOM OFFSET(3) NUMBITS(1) [],
        /// IN token received when TxFIFO empty mask
        ITTXFEMSK OFFSET(4) NUMBITS(1) [],
        /// IN token received with EP mismatch mask
        INEPNMM OFFSET(5) NUMBITS(1) [],
        /// IN endpoint NAK effective mask
        INEPNEM OFFSET(6) NUMBITS(1) [],
        /// FIFO underrun mask
        TXFURM OFFSET(8) NUMBITS(1) [],
        /// BNA interrupt mask
        BIM OFFSET(9) NUMBITS(1) []
    ],
    pub DOEPMSK [
        /// Transfer completed interrupt mask
        XFRCM OFFSET(0) NUMBITS(1) [],
        /// Endpoint disabled interrupt mask
        EPDM OFFSET(1) NUMBITS(1) [],
        /// SETUP phase done mask
        STUPM OFFSET(3) NUMBITS(1) [],
        /// OUT token received when endpoint disabled mask
        OTEPDM OFFSET(4) NUMBITS(1) [],
        /// Back-to-back SETUP packets received mask
        B2BSTUP OFFSET(6) NUMBITS(1) [],
        /// OUT packet error mask
        OPEM OFFSET(8) NUMBITS(1) [],
        /// BNA interrupt mask
        BOIM OFFSET(9) NUMBITS(1) []
    ],
    pub DAINT [
        /// IN endpoint interrupt bits
        IEPINT OFFSET(0) NUMBITS(16) [],
        /// OUT endpoint interrupt bits
        OEPINT OFFSET(16) NUMBITS(16) []
    ],
    pub DAINTMSK [
        /// IN endpoint interrupt mask
        IEPM OFFSET(0) NUMBITS(16) [],
        /// OUT endpoint interrupt mask
        OEPM OFFSET(16) NUMBITS(16) []
    ],
    pub DVBUSDIS [
        /// VBUS discharge time
        VBUSDT OFFSET(0) NUMBITS(16) []
    ],
    pub DVBUSPULSE [
        /// VBUS pulsing time
        DVBUSP OFFSET(0) NUMBITS(12) []
    ],
    pub DTHRCTL [
        /// Nonisochronous IN endpoints threshold enable
        NONISOTHREN OFFSET(0) NUMBITS(1) [],
        /// ISO IN endpoint threshold enable
        ISOTHREN OFFSET(1) NUMBITS(1) [],
        /// Transmit threshold length
        TXTHRLEN OFFSET(2) NUMBITS(9) [],
        /// Receive threshold enable
        RXTHREN OFFSET(16) NUMBITS(1) [],
        /// Receive threshold length
        RXTHRLEN OFFSET(17) NUMBITS(9) [],
        /// Arbiter parking enable
        ARPEN OFFSET(27) NUMBITS(1) []
    ],
    pub DIEPEMPMSK [
        /// IN endpoint TxFIFO empty interrupt mask
        INEPTXFEM OFFSET(0) NUMBITS(16) []
    ],
    pub DEACHINT [
        /// IN endpoint 1 interrupt
        IEP1INT OFFSET(1) NUMBITS(1) [],
        /// OUT endpoint 1 interrupt
        OEP1INT OFFSET(17) NUMBITS(1) []
    ],
    pub DEACHMSK [
        /// IN endpoint 1 interrupt mask
        IEP1INTM OFFSET(1) NUMBITS(1) [],
        /// OUT endpoint 1 interrupt mask
        OEP1INTM OFFSET(17) NUMBITS(1) []
    ],
    pub DIEPEACHMSK1 [
        /// Transfer completed interrupt mask
        XFRCM OFFSET(0) NUMBITS(1) [],
        /// Endpoint disabled interrupt mask
        EPDM OFFSET(1) NUMBITS(1) [],
        /// Timeout condition mask
        TOM OFFSET(3) NUMBITS(1) [],
        /// IN token received when TxFIFO empty mask
        ITTXFEMSK OFFSET(4) NUMBITS(1) [],
        /// IN token received with EP mismatch mask
        INEPNMM OFFSET(5) NUMBITS(1) [],
        /// IN endpoint NAK effective mask
        INEPNEM OFFSET(6) NUMBITS(1) [],
        /// FIFO underrun mask
        TXFURM OFFSET(8) NUMBITS(1) [],
        /// BNA interrupt mask
        BIM OFFSET(9) NUMBITS(1) [],
        /// NAK interrupt mask
        NAKM OFFSET(13) NUMBITS(1) []
    ],
    pub DOEPEACHMSK1 [
        XFRCM OFFSET(0) NUMBITS(1) [],
        EPDM OFFSET(1) NUMBITS(1) [],
        /// AHB error mask
        AHBERRM OFFSET(2) NUMBITS(1) [],
        STUPM OFFSET(3) NUMBITS(1) [],
        OTEPDM OFFSET(4) NUMBITS(1) [],
        B2BSTUPM OFFSET(6) NUMBITS(1) [],
        /// OUT packet error mask
        OUTPKTERRM OFFSET(8) NUMBITS(1) [],
        BOIM OFFSET(9) NUMBITS(1) [],
        /// Bubble error interrupt mask
        BERRM OFFSET(12) NUMBITS(1) [],
        /// NAK interrupt mask
        NAKM OFFSET(13) NUMBITS(1) [],
        /// NYET interrupt mask
        NYETM OFFSET(14) NUMBITS(1) []
    ],
    pub DIEPCTL [
        /// Maximum packet size in bytes
        MPSIZ OFFSET(0) NUMBITS(11) [],
        /// USB active endpoint
        USBAEP OFFSET(15) NUMBITS(1) [],
        /// Even/odd frame or data PID
        EONUM_DPID OFFSET(16) NUMBITS(1) [],
        /// NAK status
        NAKSTS OFFSET(17) NUMBITS(1) [],
        /// Endpoint type
        EPTYP OFFSET(18) NUMBITS(2) [
            Control = 0,
            Isochronous = 1,
            Bulk = 2,
            Interrupt = 3
        ],
        /// STALL handshake
        STALL OFFSET(21) NUMBITS(1) [],
        /// TxFIFO number
        TXFNUM OFFSET(22) NUMBITS(4) [],
        /// Clear NAK
        CNAK OFFSET(26) NUMBITS(1) [],
        /// Set NAK
        SNAK OFFSET(27) NUMBITS(1) [],
        /// Set DATA0 PID or even frame
        SD0PID_SEVNFRM OFFSET(28) NUMBITS(1) [],
        /// Set odd frame
        SODDFRM OFFSET(29) NUMBITS(1) [],
        /// Endpoint disable
        EPDIS OFFSET(30) NUMBITS(1) [],
        /// Endpoint enable
        EPENA OFFSET(31) NUMBITS(1) [],
        EPTYP_0 OFFSET(18) NUMBITS(1) [],
        EPTYP_1 OFFSET(19) NUMBITS(1) [],
        TXFNUM_0 OFFSET(22) NUMBITS(1) [],
        TXFNUM_1 OFFSET(23) NUMBITS(1) [],
        TXFNUM_2 OFFSET(24) NUMBITS(1) [],
        TXFNUM_3 OFFSET(25) NUMBITS(1) []
    ],
    pub DIEPINT [
        /// Transfer completed
        XFRC OFFSET(0) NUMBITS(1) [],
        /// Endpoint disabled
        EPDISD OFFSET(1) NUMBITS(1) [],
        /// Timeout condition
        TOC OFFSET(3) NUMBITS(1) [],
        /// IN token received when TxFIFO is empty
        ITTXFE OFFSET(4) NUMBITS(1) [],
        /// IN endpoint NAK effective
        INEPNE OFFSET(6) NUMBITS(1) [],
        /// Transmit FIFO empty
        TXFE OFFSET(7) NUMBITS(1) [],
        /// Transmit FIFO underrun
        TXFIFOUDRN OFFSET(8) NUMBITS(1) [],
        /// Buffer not available
        BNA OFFSET(9) NUMBITS(1) [],
        /// Packet dropped status
        PKTDRPSTS OFFSET(11) NUMBITS(1) [],
        /// Babble error
        BERR OFFSET(12) NUMBITS(1) [],
        /// NAK interrupt
        NAK OFFSET(13) NUMBITS(1) []
    ],
    pub DIEPTSIZ [
        /// Transfer size
        XFRSIZ OFFSET(0) NUMBITS(19) [],
        /// Packet count
        PKTCNT OFFSET(19) NUMBITS(10) [],
        /// Multicount
        MCNT OFFSET(29) NUMBITS(2) []
    ],
    pub DTXFSTS [
        /// IN endpoint TxFIFO space available in words
        INEPTFSAV OFFSET(0) NUMBITS(16) []
    ],
    pub DOEPCTL [
        /// Maximum packet size in bytes
        MPSIZ OFFSET(0) NUMBITS(11) [],
        /// USB active endpoint
        USBAEP OFFSET(15) NUMBITS(1) [],
        /// Even/odd frame or data PID
        EONUM_DPID OFFSET(16) NUMBITS(1) [],
        /// NAK status
        NAKSTS OFFSET(17) NUMBITS(1) [],
        /// Endpoint type
        EPTYP OFFSET(18) NUMBITS(2) [
            Control = 0,
            Isochronous = 1,
            Bulk = 2,
            Interrupt = 3
        ],
        /// Snoop mode
        SNPM OFFSET(20) NUMBITS(1) [],
        /// STALL handshake
        STALL OFFSET(21) NUMBITS(1) [],
        /// Clear NAK
        CNAK OFFSET(26) NUMBITS(1) [],
        /// Set NAK
        SNAK OFFSET(27) NUMBITS(1) [],
        /// Set DATA0 PID or even frame
        SD0PID_SEVNFRM OFFSET(28) NUMBITS(1) [],
        /// Set odd frame
        SODDFRM OFFSET(29) NUMBITS(1) [],
        /// Endpoint disable
        EPDIS OFFSET(30) NUMBITS(1) [],
        /// Endpoint enable
        EPENA OFFSET(31) NUMBITS(1) [],
        EPTYP_0 OFFSET(18) NUMBITS(1) [],
        EPTYP_1 OFFSET(19) NUMBITS(1) []
    ],
    pub DOEPINT [
        /// Transfer completed
        XFRC OFFSET(0) NUMBITS(1) [],
        /// Endpoint disabled
        EPDISD OFFSET(1) NUMBITS(1) [],
        /// SETUP phase done
        STUP OFFSET(3) NUMBITS(1) [],
        /// OUT token received when endpoint disabled
        OTEPDIS OFFSET(4) NUMBITS(1) [],
        /// Back-to-back SETUP packets received
        B2BSTUP OFFSET(6) NUMBITS(1) [],
        /// NYET interrupt
        NYET OFFSET(14) NUMBITS(1) []
    ],
    /// Endpoint 0 only implements XFRSIZ[6:0] and PKTCNT[0]
    pub DOEPTSIZ [
        /// Transfer size
        XFRSIZ OFFSET(0) NUMBITS(19) [],
        /// Packet count
        PKTCNT OFFSET(19) NUMBITS(10) [],
        /// SETUP packet count
        STUPCNT OFFSET(29) NUMBITS(2) []
    ],
    pub PCGCCTL [
        /// Stop PHY clock
        STPPCLK OFFSET(0) NUMBITS(1) [],
        /// Gate HCLK
        GATEHCLK OFFSET(1) NUMBITS(1) [],
        /// PHY suspended
        PHYSUSP OFFSET(4) NUMBITS(1) []
    ]
];

instances! {
    pub enum UsbOtg {
        Fs("USB_OTG_FS") = memory_map::USB_OTG_FS_PERIPH_BASE,
        Hs("USB_OTG_HS") = memory_map::USB_OTG_HS_PERIPH_BASE,
    }
}

impl UsbOtg {
    /// Bidirectional endpoints, endpoint 0 included.
    pub const fn endpoints(self) -> usize {
        match self {
            UsbOtg::Fs => FS_ENDPOINTS,
            UsbOtg::Hs => HS_ENDPOINTS,
        }
    }

    pub const fn host_channels(self) -> usize {
        match self {
            UsbOtg::Fs => FS_HOST_CHANNELS,
            UsbOtg::Hs => HS_HOST_CHANNELS,
        }
    }

    /// Dedicated FIFO RAM shared by reception and all transmit FIFOs.
    pub const fn fifo_bytes(self) -> usize {
        match self {
            UsbOtg::Fs => FS_FIFO_BYTES,
            UsbOtg::Hs => HS_FIFO_BYTES,
        }
    }

    /// External high-speed PHY through ULPI.
    pub const fn has_ulpi(self) -> bool {
        match self {
            UsbOtg::Fs => false,
            UsbOtg::Hs => true,
        }
    }

    /// Internal DMA, programmed through `GAHBCFG.DMAEN`.
    pub const fn has_dma(self) -> bool {
        match self {
            UsbOtg::Fs => false,
            UsbOtg::Hs => true,
        }
    }

    /// Endpoint 1 raises its own IN and OUT interrupts.
    pub const fn has_endpoint1_interrupts(self) -> bool {
        match self {
            UsbOtg::Fs => false,
            UsbOtg::Hs => true,
        }
    }

    pub const fn interrupt(self) -> Interrupt {
        match self {
            UsbOtg::Fs => Interrupt::OTG_FS,
            UsbOtg::Hs => Interrupt::OTG_HS,
        }
    }

    pub const fn wakeup_interrupt(self) -> Interrupt {
        match self {
            UsbOtg::Fs => Interrupt::OTG_FS_WKUP,
            UsbOtg::Hs => Interrupt::OTG_HS_WKUP,
        }
    }

    pub const fn global_base(self) -> usize {
        self.base() + memory_map::USB_OTG_GLOBAL_BASE
    }

    pub const fn host_base(self) -> usize {
        self.base() + memory_map::USB_OTG_HOST_BASE
    }

    pub const fn host_port_base(self) -> usize {
        self.base() + memory_map::USB_OTG_HOST_PORT_BASE
    }

    pub const fn device_base(self) -> usize {
        self.base() + memory_map::USB_OTG_DEVICE_BASE
    }

    pub const fn power_clock_base(self) -> usize {
        self.base() + memory_map::USB_OTG_PCGCCTL_BASE
    }

    /// Register block of host channel `channel`.
    pub const fn host_channel_base(self, channel: usize) -> Result<usize, ErrorCode> {
        if channel >= self.host_channels() {
            return Err(ErrorCode::INVAL);
        }
        Ok(self.base()
            + memory_map::USB_OTG_HOST_CHANNEL_BASE
            + channel * memory_map::USB_OTG_HOST_CHANNEL_SIZE)
    }

    /// Register block of IN endpoint `endpoint`.
    pub const fn in_endpoint_base(self, endpoint: usize) -> Result<usize, ErrorCode> {
        if endpoint >= self.endpoints() {
            return Err(ErrorCode::INVAL);
        }
        Ok(self.base()
            + memory_map::USB_OTG_IN_ENDPOINT_BASE
            + endpoint * memory_map::USB_OTG_EP_REG_SIZE)
    }

    /// Register block of OUT endpoint `endpoint`.
    pub const fn out_endpoint_base(self, endpoint: usize) -> Result<usize, ErrorCode> {
        if endpoint >= self.endpoints() {
            return Err(ErrorCode::INVAL);
        }
        Ok(self.base()
            + memory_map::USB_OTG_OUT_ENDPOINT_BASE
            + endpoint * memory_map::USB_OTG_EP_REG_SIZE)
    }

    /// Push/pop window of FIFO `n`: endpoint `n` in device mode, channel
    /// `n` in host mode. Every word access in the window goes to the FIFO.
    pub const fn fifo_base(self, n: usize) -> Result<usize, ErrorCode> {
        if n >= self.host_channels() {
            return Err(ErrorCode::INVAL);
        }
        Ok(self.base() + memory_map::USB_OTG_FIFO_BASE + n * memory_map::USB_OTG_FIFO_SIZE)
    }

    /// `dieptxf` index sizing the transmit FIFO of IN endpoint `endpoint`.
    /// Endpoint 0 is sized through `gnptxfsiz`.
    pub const fn dieptxf_index(self, endpoint: usize) -> Result<usize, ErrorCode> {
        if endpoint == 0 || endpoint >= self.endpoints() {
            return Err(ErrorCode::INVAL);
        }
        Ok(endpoint - 1)
    }
}

const fn block<T>(address: usize) -> StaticRef<T> {
    unsafe { StaticRef::new(address as *const T) }
}

impl UsbOtg {
    pub(crate) const fn global(self) -> StaticRef<OtgGlobalRegisters> {
        block(self.global_base())
    }

    pub(crate) const fn host(self) -> StaticRef<OtgHostRegisters> {
        block(self.host_base())
    }

    pub(crate) const fn host_port(self) -> StaticRef<OtgHostPortRegisters> {
        block(self.host_port_base())
    }

    pub(crate) const fn device(self) -> StaticRef<OtgDeviceRegisters> {
        block(self.device_base())
    }

    pub(crate) const fn power_clock(self) -> StaticRef<OtgPowerClockRegisters> {
        block(self.power_clock_base())
    }

    pub(crate) fn host_channel(
        self,
        channel: usize,
    ) -> Result<StaticRef<OtgHostChannelRegisters>, ErrorCode> {
        self.host_channel_base(channel).map(block)
    }

    pub(crate) fn in_endpoint(
        self,
        endpoint: usize,
    ) -> Result<StaticRef<OtgInEndpointRegisters>, ErrorCode> {
        self.in_endpoint_base(endpoint).map(block)
    }

    pub(crate) fn out_endpoint(
        self,
        endpoint: usize,
    ) -> Result<StaticRef<OtgOutEndpointRegisters>, ErrorCode> {
        self.out_endpoint_base(endpoint).map(block)
    }

    /// Word-wide push/pop port of FIFO `n`.
    pub(crate) fn fifo(self, n: usize) -> Result<StaticRef<ReadWrite<u32>>, ErrorCode> {
        self.fifo_base(n).map(block)
    }
}

pub(crate) const OTG_FS: StaticRef<OtgGlobalRegisters> = UsbOtg::Fs.global();
pub(crate) const OTG_HS: StaticRef<OtgGlobalRegisters> = UsbOtg::Hs.global();

/// Combined FIFO size register under its current CMSIS name.
#[allow(non_snake_case)]
pub mod legacy {
    pub use crate::usb_otg::GNPTXFSIZ as DIEPTXF0_HNPTXFSIZ;

    pub mod GINTSTS {
        pub use crate::usb_otg::GINTSTS::PXFR_INCOMPISOOUT as INCOMPISOOUT;
    }
}
