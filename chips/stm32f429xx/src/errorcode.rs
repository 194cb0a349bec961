// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Standard error enum for fallible register-map lookups.

use core::fmt;

/// Standard errors.
///
/// The register map itself cannot fail at runtime. The lookup helpers that
/// take a number from a caller return `INVAL` for an index that names no
/// instance, channel or endpoint, and `SIZE` for an address outside a
/// region.
///
/// The remaining variants are never produced here. They are kept with the
/// kernel's discriminants so a code from this crate converts to the same
/// `usize` that Tock capsules and syscall return values carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum ErrorCode {
    /// Generic failure condition
    FAIL = 0,
    /// Underlying system is busy; retry
    BUSY = 1,
    /// The state requested is already set
    ALREADY = 2,
    /// The component is powered down
    OFF = 3,
    /// Reservation required before use
    RESERVE = 4,
    /// An invalid parameter was passed
    INVAL = 5,
    /// Parameter passed was too large
    SIZE = 6,
    /// Operation canceled by a call
    CANCEL = 7,
    /// Memory required not available
    NOMEM = 8,
    /// Operation or command is unsupported
    NOSUPPORT = 9,
    /// Device does not exist
    NODEVICE = 10,
    /// Device is not physically installed
    UNINSTALLED = 11,
    /// Packet transmission not acknowledged
    NOACK = 12,
}

impl From<ErrorCode> for usize {
    fn from(err: ErrorCode) -> usize {
        err as usize
    }
}

impl TryFrom<usize> for ErrorCode {
    type Error = ();

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::FAIL),
            1 => Ok(ErrorCode::BUSY),
            2 => Ok(ErrorCode::ALREADY),
            3 => Ok(ErrorCode::OFF),
            4 => Ok(ErrorCode::RESERVE),
            5 => Ok(ErrorCode::INVAL),
            6 => Ok(ErrorCode::SIZE),
            7 => Ok(ErrorCode::CANCEL),
            8 => Ok(ErrorCode::NOMEM),
            9 => Ok(ErrorCode::NOSUPPORT),
            10 => Ok(ErrorCode::NODEVICE),
            11 => Ok(ErrorCode::UNINSTALLED),
            12 => Ok(ErrorCode::NOACK),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let description = match self {
            ErrorCode::FAIL => "generic failure",
            ErrorCode::BUSY => "busy",
            ErrorCode::ALREADY => "already set",
            ErrorCode::OFF => "powered down",
            ErrorCode::RESERVE => "reservation required",
            ErrorCode::INVAL => "invalid parameter",
            ErrorCode::SIZE => "parameter too large",
            ErrorCode::CANCEL => "canceled",
            ErrorCode::NOMEM => "out of memory",
            ErrorCode::NOSUPPORT => "unsupported",
            ErrorCode::NODEVICE => "no such device",
            ErrorCode::UNINSTALLED => "not installed",
            ErrorCode::NOACK => "not acknowledged",
        };
        write!(f, "{self:?} ({description})")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ErrorCode {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ErrorCode({=usize})", *self as usize);
    }
}
