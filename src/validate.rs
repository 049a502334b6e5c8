//! Message validators.
//!
//! Each validator builds a [`ValidationReport`] for the message's `(sfn, slot)`, checks the
//! message-scoped fields, dispatches every PDU to its validator and returns the report only if
//! something failed. Validation is stateless: concurrent calls on different messages need no
//! synchronisation.

use crate::check::{check_one_of, check_range, len_value, Scope};
use crate::dl::{validate_csi_rs_pdu, validate_pdcch_pdu, validate_pdsch_pdu, validate_ssb_pdu};
use crate::indication::{validate_crc_pdu, validate_rach_occasion, validate_rx_data_pdu, validate_tx_data_pdu};
use crate::message::{
    error_code, CrcIndication, DlTtiPdu, DlTtiRequest, ErrorIndication, FapiMessage, RachIndication,
    RxDataIndication, SlotIndication, TxDataRequest, UciIndication, UciPdu, UlDciRequest, UlTtiPdu,
    UlTtiRequest,
};
use crate::report::{MessageKind, ValidationReport};
use crate::uci::{validate_uci_pucch_format01_pdu, validate_uci_pucch_format234_pdu, validate_uci_pusch_pdu};
use crate::ul::{validate_prach_pdu, validate_pucch_pdu, validate_pusch_pdu};

/// `Ok(())` when every check passed, otherwise the accumulated report.
pub type ValidationResult = Result<(), ValidationReport>;

pub const MAX_SFN: i64 = 1023;
/// Highest slot index (120 kHz SCS has 80 slots per frame, 240 kHz has 160).
pub const MAX_SLOT: i64 = 159;
pub const MAX_PDU_GROUPS: i64 = 3822;

/// Message types an ERROR.indication may refer to.
const ERROR_INDICATION_MESSAGE_IDS: &[i64] = &[0x00, 0x02, 0x04, 0x05, 0x80, 0x81, 0x83, 0x84];

fn validate_sfn_slot(sfn: u16, slot: u16, scope: Scope, report: &mut ValidationReport) -> bool {
    let mut ok = true;
    ok &= check_range(0, MAX_SFN, sfn, "sfn", scope, report);
    ok &= check_range(0, MAX_SLOT, slot, "slot", scope, report);
    ok
}

fn finish(ok: bool, kind: MessageKind, report: ValidationReport) -> ValidationResult {
    if ok {
        return Ok(());
    }
    tracing::debug!(
        kind = %kind,
        sfn = report.sfn(),
        slot = report.slot(),
        total_violations = report.total_violations(),
        "FAPI message failed validation"
    );
    for violation in report.violations() {
        tracing::trace!(%violation, "FAPI field violation");
    }
    Err(report)
}

/// Validates a DL_TTI.request and all its PDCCH, PDSCH, CSI-RS and SSB PDUs.
pub fn validate_dl_tti_request(msg: &DlTtiRequest) -> ValidationResult {
    let kind = MessageKind::DlTtiRequest;
    let scope = Scope::message(kind);
    let mut report = ValidationReport::new(msg.sfn, msg.slot);

    let mut ok = validate_sfn_slot(msg.sfn, msg.slot, scope, &mut report);
    ok &= check_range(0, MAX_PDU_GROUPS, len_value(msg.pdu_groups.len()), "Number of PDU groups", scope, &mut report);

    for pdu in &msg.pdus {
        ok &= match pdu {
            DlTtiPdu::Pdcch(p) => validate_pdcch_pdu(p, kind, &mut report),
            DlTtiPdu::Pdsch(p) => validate_pdsch_pdu(p, kind, &mut report),
            DlTtiPdu::CsiRs(p) => validate_csi_rs_pdu(p, kind, &mut report),
            DlTtiPdu::Ssb(p) => validate_ssb_pdu(p, kind, &mut report),
        };
    }
    finish(ok, kind, report)
}

/// Validates an UL_TTI.request and all its PRACH, PUSCH and PUCCH PDUs.
pub fn validate_ul_tti_request(msg: &UlTtiRequest) -> ValidationResult {
    let kind = MessageKind::UlTtiRequest;
    let scope = Scope::message(kind);
    let mut report = ValidationReport::new(msg.sfn, msg.slot);

    let mut ok = validate_sfn_slot(msg.sfn, msg.slot, scope, &mut report);
    ok &= check_range(0, MAX_PDU_GROUPS, len_value(msg.pdu_groups.len()), "Number of PDU groups", scope, &mut report);

    for pdu in &msg.pdus {
        ok &= match pdu {
            UlTtiPdu::Prach(p) => validate_prach_pdu(p, kind, &mut report),
            UlTtiPdu::Pusch(p) => validate_pusch_pdu(p, kind, &mut report),
            UlTtiPdu::Pucch(p) => validate_pucch_pdu(p, kind, &mut report),
        };
    }
    finish(ok, kind, report)
}

pub fn validate_ul_dci_request(msg: &UlDciRequest) -> ValidationResult {
    let kind = MessageKind::UlDciRequest;
    let mut report = ValidationReport::new(msg.sfn, msg.slot);

    let mut ok = validate_sfn_slot(msg.sfn, msg.slot, Scope::message(kind), &mut report);
    for pdu in &msg.pdus {
        ok &= validate_pdcch_pdu(pdu, kind, &mut report);
    }
    finish(ok, kind, report)
}

pub fn validate_tx_data_request(msg: &TxDataRequest) -> ValidationResult {
    let kind = MessageKind::TxDataRequest;
    let mut report = ValidationReport::new(msg.sfn, msg.slot);

    let mut ok = validate_sfn_slot(msg.sfn, msg.slot, Scope::message(kind), &mut report);
    for pdu in &msg.pdus {
        ok &= validate_tx_data_pdu(pdu, kind, &mut report);
    }
    finish(ok, kind, report)
}

pub fn validate_rx_data_indication(msg: &RxDataIndication) -> ValidationResult {
    let kind = MessageKind::RxDataIndication;
    let mut report = ValidationReport::new(msg.sfn, msg.slot);

    let mut ok = validate_sfn_slot(msg.sfn, msg.slot, Scope::message(kind), &mut report);
    for pdu in &msg.pdus {
        ok &= validate_rx_data_pdu(pdu, kind, &mut report);
    }
    finish(ok, kind, report)
}

pub fn validate_crc_indication(msg: &CrcIndication) -> ValidationResult {
    let kind = MessageKind::CrcIndication;
    let mut report = ValidationReport::new(msg.sfn, msg.slot);

    let mut ok = validate_sfn_slot(msg.sfn, msg.slot, Scope::message(kind), &mut report);
    for pdu in &msg.pdus {
        ok &= validate_crc_pdu(pdu, kind, &mut report);
    }
    finish(ok, kind, report)
}

pub fn validate_rach_indication(msg: &RachIndication) -> ValidationResult {
    let kind = MessageKind::RachIndication;
    let mut report = ValidationReport::new(msg.sfn, msg.slot);

    let mut ok = validate_sfn_slot(msg.sfn, msg.slot, Scope::message(kind), &mut report);
    for occasion in &msg.occasions {
        ok &= validate_rach_occasion(occasion, kind, &mut report);
    }
    finish(ok, kind, report)
}

/// Validates a UCI.indication and all its UCI-over-PUSCH and UCI-over-PUCCH PDUs.
pub fn validate_uci_indication(msg: &UciIndication) -> ValidationResult {
    let kind = MessageKind::UciIndication;
    let mut report = ValidationReport::new(msg.sfn, msg.slot);

    let mut ok = validate_sfn_slot(msg.sfn, msg.slot, Scope::message(kind), &mut report);
    for pdu in &msg.pdus {
        ok &= match pdu {
            UciPdu::Pusch(p) => validate_uci_pusch_pdu(p, kind, &mut report),
            UciPdu::PucchFormat01(p) => validate_uci_pucch_format01_pdu(p, kind, &mut report),
            UciPdu::PucchFormat234(p) => validate_uci_pucch_format234_pdu(p, kind, &mut report),
        };
    }
    finish(ok, kind, report)
}

pub fn validate_slot_indication(msg: &SlotIndication) -> ValidationResult {
    let kind = MessageKind::SlotIndication;
    let mut report = ValidationReport::new(msg.sfn, msg.slot);
    let ok = validate_sfn_slot(msg.sfn, msg.slot, Scope::message(kind), &mut report);
    finish(ok, kind, report)
}

/// Validates an ERROR.indication. The expected SFN/slot are only meaningful for the
/// out-of-sync and invalid-SFN error codes.
pub fn validate_error_indication(msg: &ErrorIndication) -> ValidationResult {
    let kind = MessageKind::ErrorIndication;
    let scope = Scope::message(kind);
    let mut report = ValidationReport::new(msg.sfn, msg.slot);

    let mut ok = validate_sfn_slot(msg.sfn, msg.slot, scope, &mut report);
    ok &= check_one_of(ERROR_INDICATION_MESSAGE_IDS, msg.message_id, "Message ID", scope, &mut report);
    ok &= check_range(
        0,
        i64::from(error_code::PHY_PROFILE_INCOMPATIBLE_RAT_CONFIG),
        msg.error_code,
        "Error code",
        scope,
        &mut report,
    );
    if matches!(msg.error_code, error_code::SFN_OUT_OF_SYNC | error_code::MSG_INVALID_SFN) {
        ok &= check_range(0, MAX_SFN, msg.expected_sfn, "Expected SFN", scope, &mut report);
        ok &= check_range(0, MAX_SLOT, msg.expected_slot, "Expected slot", scope, &mut report);
    }
    finish(ok, kind, report)
}

/// Validates any message, dispatching on its type.
pub fn validate_message(msg: &FapiMessage) -> ValidationResult {
    match msg {
        FapiMessage::DlTti(m) => validate_dl_tti_request(m),
        FapiMessage::UlTti(m) => validate_ul_tti_request(m),
        FapiMessage::UlDci(m) => validate_ul_dci_request(m),
        FapiMessage::TxData(m) => validate_tx_data_request(m),
        FapiMessage::RxData(m) => validate_rx_data_indication(m),
        FapiMessage::Crc(m) => validate_crc_indication(m),
        FapiMessage::Rach(m) => validate_rach_indication(m),
        FapiMessage::Uci(m) => validate_uci_indication(m),
        FapiMessage::Slot(m) => validate_slot_indication(m),
        FapiMessage::Error(m) => validate_error_indication(m),
    }
}
