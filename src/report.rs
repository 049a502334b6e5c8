//! Diagnostic report for FAPI validation.
//!
//! A [`ValidationReport`] records up to [`REPORT_CAPACITY`] detailed [`FieldViolation`]s
//! and counts every failing check in `total_violations`, including the ones that did not
//! fit. The buffer is inline: recording never allocates.

use std::fmt;

/// Maximum number of detailed violations stored in a report.
pub const REPORT_CAPACITY: usize = 4;

/// Top-level FAPI message families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    DlTtiRequest,
    UlTtiRequest,
    UlDciRequest,
    TxDataRequest,
    RxDataIndication,
    CrcIndication,
    RachIndication,
    UciIndication,
    SlotIndication,
    ErrorIndication,
}

impl MessageKind {
    /// SCF-222 message type identifier.
    pub const fn id(self) -> u8 {
        match self {
            MessageKind::ErrorIndication => 0x07,
            MessageKind::DlTtiRequest => 0x80,
            MessageKind::UlTtiRequest => 0x81,
            MessageKind::SlotIndication => 0x82,
            MessageKind::UlDciRequest => 0x83,
            MessageKind::TxDataRequest => 0x84,
            MessageKind::RxDataIndication => 0x85,
            MessageKind::CrcIndication => 0x86,
            MessageKind::UciIndication => 0x87,
            MessageKind::RachIndication => 0x89,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MessageKind::DlTtiRequest => "DL_TTI.request",
            MessageKind::UlTtiRequest => "UL_TTI.request",
            MessageKind::UlDciRequest => "UL_DCI.request",
            MessageKind::TxDataRequest => "Tx_Data.request",
            MessageKind::RxDataIndication => "RX_Data.indication",
            MessageKind::CrcIndication => "CRC.indication",
            MessageKind::RachIndication => "RACH.indication",
            MessageKind::UciIndication => "UCI.indication",
            MessageKind::SlotIndication => "SLOT.indication",
            MessageKind::ErrorIndication => "ERROR.indication",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// PDU variants carried by FAPI messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PduKind {
    Pdcch,
    Pdsch,
    CsiRs,
    Ssb,
    Prach,
    Pusch,
    Pucch,
    UciPusch,
    UciPucchFormat01,
    UciPucchFormat234,
    Crc,
    RxData,
    RachOccasion,
    TxData,
}

impl PduKind {
    pub const fn name(self) -> &'static str {
        match self {
            PduKind::Pdcch => "PDCCH",
            PduKind::Pdsch => "PDSCH",
            PduKind::CsiRs => "CSI-RS",
            PduKind::Ssb => "SSB",
            PduKind::Prach => "PRACH",
            PduKind::Pusch => "PUSCH",
            PduKind::Pucch => "PUCCH",
            PduKind::UciPusch => "UCI PUSCH",
            PduKind::UciPucchFormat01 => "UCI PUCCH format 0/1",
            PduKind::UciPucchFormat234 => "UCI PUCCH format 2/3/4",
            PduKind::Crc => "CRC",
            PduKind::RxData => "RX_Data",
            PduKind::RachOccasion => "RACH occasion",
            PduKind::TxData => "Tx_Data",
        }
    }
}

impl fmt::Display for PduKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One failed field check.
///
/// `pdu` is `None` for message-scoped fields (sfn, slot, group counts). `expected` is `None`
/// for enumerated-set and dual-encoding checks, where no single static range applies; equality
/// checks report `(expected, expected)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub value: i32,
    pub property: &'static str,
    pub message: MessageKind,
    pub pdu: Option<PduKind>,
    pub expected: Option<(i32, i32)>,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(pdu) = self.pdu {
            write!(f, " {} PDU", pdu)?;
        }
        write!(f, ": property \"{}\" has value {}", self.property, self.value)?;
        if let Some((min, max)) = self.expected {
            write!(f, ", expected [{}, {}]", min, max)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldViolation {}

/// Accumulated result of validating one message.
///
/// Created per top-level validation with the message's `(sfn, slot)`, borrowed mutably down
/// the whole validator tree, and handed back to the caller only when something failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{total_violations} FAPI violation(s) at sfn {sfn} slot {slot}")]
pub struct ValidationReport {
    sfn: u16,
    slot: u16,
    violations: [Option<FieldViolation>; REPORT_CAPACITY],
    len: usize,
    total_violations: u32,
}

impl ValidationReport {
    pub fn new(sfn: u16, slot: u16) -> Self {
        ValidationReport {
            sfn,
            slot,
            violations: [None; REPORT_CAPACITY],
            len: 0,
            total_violations: 0,
        }
    }

    /// Counts the violation and stores it if there is room left.
    pub fn record(&mut self, violation: FieldViolation) {
        self.total_violations = self.total_violations.saturating_add(1);
        if self.len < REPORT_CAPACITY {
            self.violations[self.len] = Some(violation);
            self.len += 1;
        }
        #[cfg(feature = "check_profile")]
        crate::profile::record_failure(violation.property);
    }

    pub fn sfn(&self) -> u16 {
        self.sfn
    }

    pub fn slot(&self) -> u16 {
        self.slot
    }

    /// Stored violations, in the order the checks ran.
    pub fn violations(&self) -> impl Iterator<Item = &FieldViolation> + '_ {
        self.violations[..self.len].iter().flatten()
    }

    /// Number of stored violations (at most [`REPORT_CAPACITY`]).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of failed checks, stored or not.
    pub fn total_violations(&self) -> u32 {
        self.total_violations
    }

    /// True when some failures were counted but not stored.
    pub fn is_truncated(&self) -> bool {
        u32::try_from(self.len).map_or(true, |len| len < self.total_violations)
    }

    /// Convenience lookup used mostly by callers that filter on a property name.
    pub fn find(&self, property: &str) -> Option<&FieldViolation> {
        self.violations().find(|v| v.property == property)
    }

    /// Writes a multi-line summary: header, one line per stored violation, truncation note.
    pub fn describe(&self, f: &mut impl fmt::Write) -> fmt::Result {
        writeln!(f, "{}", self)?;
        for v in self.violations() {
            writeln!(f, "  {}", v)?;
        }
        if self.is_truncated() {
            let stored = u32::try_from(self.len).unwrap_or(u32::MAX);
            writeln!(f, "  ({} more not recorded)", self.total_violations - stored)?;
        }
        Ok(())
    }
}
