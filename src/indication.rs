//! CRC, RX_Data and RACH indication PDUs, and Tx_Data.request PDUs.

use crate::check::{check_equals, check_range, check_range_or_sentinel, len_value, Scope};
use crate::pdu::{rx_data_tag, sentinel, CrcPdu, RachOccasion, RachPreamble, RxDataPdu, TxDataPdu};
use crate::report::{MessageKind, PduKind, ValidationReport};
use crate::uci::validate_measurements;

/// Validates a CRC.indication PDU.
///
/// The code block CRC status is a packed bitmap: one byte per started group of 8 code blocks.
pub fn validate_crc_pdu(pdu: &CrcPdu, message: MessageKind, report: &mut ValidationReport) -> bool {
    let scope = Scope::pdu(message, PduKind::Crc);
    let mut ok = true;

    ok &= check_range_or_sentinel(0, 63, sentinel::U8_UNUSED, pdu.rapid, "RAPID", scope, report);
    ok &= check_range(0, 15, pdu.harq_id, "HARQ ID", scope, report);
    ok &= check_range(0, 1, pdu.tb_crc_status, "TB CRC status", scope, report);
    ok &= check_equals(
        i64::from(pdu.num_cb.div_ceil(8)),
        len_value(pdu.cb_crc_status.len()),
        "CB CRC status size",
        scope,
        report,
    );
    ok &= validate_measurements(&pdu.measurements, scope, report);
    ok
}

/// Validates an RX_Data.indication PDU. An inline payload must be as long as `pdu_length`.
pub fn validate_rx_data_pdu(pdu: &RxDataPdu, message: MessageKind, report: &mut ValidationReport) -> bool {
    let scope = Scope::pdu(message, PduKind::RxData);
    let mut ok = true;

    ok &= check_range_or_sentinel(0, 63, sentinel::U8_UNUSED, pdu.rapid, "RAPID", scope, report);
    ok &= check_range(0, 15, pdu.harq_id, "HARQ ID", scope, report);
    ok &= check_range(0, 2, pdu.pdu_tag, "PDU tag", scope, report);
    if pdu.pdu_tag == rx_data_tag::PAYLOAD {
        ok &= check_equals(pdu.pdu_length, len_value(pdu.payload.len()), "PDU length", scope, report);
    }
    ok
}

/// Validates one RACH occasion of a RACH.indication and every preamble detected in it.
pub fn validate_rach_occasion(occasion: &RachOccasion, message: MessageKind, report: &mut ValidationReport) -> bool {
    let scope = Scope::pdu(message, PduKind::RachOccasion);
    let mut ok = true;

    ok &= check_range(0, 13, occasion.symbol_index, "Symbol index", scope, report);
    ok &= check_range(0, 79, occasion.slot_index, "Slot index", scope, report);
    ok &= check_range(0, 7, occasion.ra_index, "RA index", scope, report);
    ok &= check_range_or_sentinel(0, 170_000, sentinel::U32_UNUSED, occasion.avg_rssi, "AVG RSSI", scope, report);
    ok &= check_range_or_sentinel(0, 1280, sentinel::U16_UNUSED, occasion.rsrp, "RSRP", scope, report);
    ok &= check_range_or_sentinel(0, 254, sentinel::U8_UNUSED, occasion.avg_snr, "AVG SNR", scope, report);
    ok &= check_range(1, 64, len_value(occasion.preambles.len()), "Number of preambles", scope, report);
    for preamble in &occasion.preambles {
        ok &= validate_rach_preamble(preamble, scope, report);
    }
    ok
}

fn validate_rach_preamble(preamble: &RachPreamble, scope: Scope, report: &mut ValidationReport) -> bool {
    let mut ok = true;
    ok &= check_range(0, 63, preamble.preamble_index, "Preamble index", scope, report);
    ok &= check_range_or_sentinel(
        0,
        3846,
        sentinel::U16_UNUSED,
        preamble.timing_advance_offset,
        "Timing advance offset",
        scope,
        report,
    );
    ok &= check_range_or_sentinel(
        0,
        2_005_000,
        sentinel::U32_UNUSED,
        preamble.timing_advance_offset_ns,
        "Timing advance offset in ns",
        scope,
        report,
    );
    ok &= check_range_or_sentinel(0, 170_000, sentinel::U32_UNUSED, preamble.preamble_pwr, "Preamble power", scope, report);
    ok &= check_range_or_sentinel(0, 254, sentinel::U8_UNUSED, preamble.preamble_snr, "Preamble SNR", scope, report);
    ok
}

/// Validates a Tx_Data.request PDU: its declared length must be the sum of its TLV lengths.
pub fn validate_tx_data_pdu(pdu: &TxDataPdu, message: MessageKind, report: &mut ValidationReport) -> bool {
    let scope = Scope::pdu(message, PduKind::TxData);
    let mut ok = true;

    ok &= check_range(0, 1, pdu.cw_index, "CW index", scope, report);
    ok &= check_range(1, 2, len_value(pdu.tlvs.len()), "Number of TLVs", scope, report);
    for tlv in &pdu.tlvs {
        ok &= check_range(0, 2, tlv.tag, "TLV tag", scope, report);
    }
    let payload_len = pdu
        .tlvs
        .iter()
        .fold(0i64, |acc, tlv| acc.saturating_add(i64::from(tlv.length)));
    ok &= check_equals(payload_len, pdu.pdu_length, "PDU length", scope, report);
    ok
}
