//! UCI.indication PDU validators: UCI carried on PUSCH, on PUCCH formats 0/1 and on PUCCH
//! formats 2/3/4 (SCF-222 v4.0 section 3.4.9).
//!
//! HARQ and CSI reports declare an expected bit length and a detection status. A failed
//! detection (CRC failure, DTX) must come with an empty payload; any other status, including
//! "DTX not checked", must come with exactly the expected number of bits.

use crate::check::{check_equals, check_range, check_range_or_sentinel, len_value, Scope};
use crate::pdu::{
    detection_status, sentinel, uci_pucch_bitmap, uci_pusch_bitmap, UciPart, UciPucchFormat01Pdu,
    UciPucchFormat234Pdu, UciPuschPdu, UlMeasurements,
};
use crate::report::{MessageKind, PduKind, ValidationReport};
use crate::ul::MAX_UCI_BIT_LENGTH;

/// Diagnostic names of one HARQ/CSI report.
struct PartProperties {
    detection_status: &'static str,
    bit_length: &'static str,
    payload_size: &'static str,
}

const HARQ: PartProperties = PartProperties {
    detection_status: "HARQ detection status",
    bit_length: "HARQ bit length",
    payload_size: "HARQ payload size",
};

const CSI_PART1: PartProperties = PartProperties {
    detection_status: "CSI part 1 detection status",
    bit_length: "CSI part 1 bit length",
    payload_size: "CSI part 1 payload size",
};

const CSI_PART2: PartProperties = PartProperties {
    detection_status: "CSI part 2 detection status",
    bit_length: "CSI part 2 bit length",
    payload_size: "CSI part 2 payload size",
};

/// Validates the uplink measurement block shared by UCI and CRC PDUs.
///
/// UL SINR is not checked: every `i16` is a legal report.
pub(crate) fn validate_measurements(m: &UlMeasurements, scope: Scope, report: &mut ValidationReport) -> bool {
    let mut ok = true;
    ok &= check_range_or_sentinel(
        0,
        63,
        sentinel::U16_UNUSED,
        m.timing_advance_offset,
        "Timing advance offset",
        scope,
        report,
    );
    ok &= check_range_or_sentinel(
        -16800,
        16800,
        sentinel::PROFILE_SSS_UNUSED,
        m.timing_advance_offset_ns,
        "Timing advance offset in ns",
        scope,
        report,
    );
    ok &= check_range_or_sentinel(0, 1280, sentinel::U16_UNUSED, m.rssi, "RSSI", scope, report);
    ok &= check_range_or_sentinel(0, 1280, sentinel::U16_UNUSED, m.rsrp, "RSRP", scope, report);
    ok
}

fn validate_uci_part(
    part: &UciPart,
    properties: &PartProperties,
    scope: Scope,
    report: &mut ValidationReport,
) -> bool {
    let mut ok = true;
    ok &= check_range(1, 5, part.detection_status, properties.detection_status, scope, report);
    ok &= check_range(1, MAX_UCI_BIT_LENGTH, part.expected_bit_length, properties.bit_length, scope, report);

    let expected_len = if detection_status::is_failure(part.detection_status) {
        0
    } else {
        i64::from(part.expected_bit_length)
    };
    ok &= check_equals(expected_len, len_value(part.payload.len()), properties.payload_size, scope, report);
    ok
}

/// Validates a UCI-over-PUSCH PDU of a UCI.indication.
pub fn validate_uci_pusch_pdu(pdu: &UciPuschPdu, message: MessageKind, report: &mut ValidationReport) -> bool {
    let scope = Scope::pdu(message, PduKind::UciPusch);
    let mut ok = validate_measurements(&pdu.measurements, scope, report);

    if pdu.pdu_bitmap & uci_pusch_bitmap::HARQ != 0 {
        ok &= validate_uci_part(&pdu.harq, &HARQ, scope, report);
    }
    if pdu.pdu_bitmap & uci_pusch_bitmap::CSI_PART1 != 0 {
        ok &= validate_uci_part(&pdu.csi_part1, &CSI_PART1, scope, report);
    }
    if pdu.pdu_bitmap & uci_pusch_bitmap::CSI_PART2 != 0 {
        ok &= validate_uci_part(&pdu.csi_part2, &CSI_PART2, scope, report);
    }
    ok
}

/// Validates a UCI-over-PUCCH format 0/1 PDU of a UCI.indication.
pub fn validate_uci_pucch_format01_pdu(
    pdu: &UciPucchFormat01Pdu,
    message: MessageKind,
    report: &mut ValidationReport,
) -> bool {
    let scope = Scope::pdu(message, PduKind::UciPucchFormat01);
    let mut ok = true;

    ok &= check_range(0, 1, pdu.pucch_format, "PUCCH format", scope, report);
    ok &= validate_measurements(&pdu.measurements, scope, report);

    if pdu.pdu_bitmap & uci_pucch_bitmap::SR != 0 {
        ok &= check_range(0, 1, pdu.sr.sr_indication, "SR indication", scope, report);
        ok &= check_range_or_sentinel(
            0,
            1,
            sentinel::U8_UNUSED,
            pdu.sr.sr_confidence_level,
            "SR confidence level",
            scope,
            report,
        );
    }

    if pdu.pdu_bitmap & uci_pucch_bitmap::HARQ != 0 {
        let harq = &pdu.harq;
        ok &= check_range(1, 2, len_value(harq.harq_values.len()), "Number of HARQ bits", scope, report);
        ok &= check_range_or_sentinel(
            0,
            1,
            sentinel::U8_UNUSED,
            harq.harq_confidence_level,
            "HARQ confidence level",
            scope,
            report,
        );
        for &value in &harq.harq_values {
            ok &= check_range(0, 2, value, "HARQ value", scope, report);
        }
    }
    ok
}

/// Validates a UCI-over-PUCCH format 2/3/4 PDU of a UCI.indication.
pub fn validate_uci_pucch_format234_pdu(
    pdu: &UciPucchFormat234Pdu,
    message: MessageKind,
    report: &mut ValidationReport,
) -> bool {
    let scope = Scope::pdu(message, PduKind::UciPucchFormat234);
    let mut ok = true;

    ok &= check_range(0, 2, pdu.pucch_format, "PUCCH format", scope, report);
    ok &= validate_measurements(&pdu.measurements, scope, report);

    if pdu.pdu_bitmap & uci_pucch_bitmap::SR != 0 {
        ok &= check_range(1, 4, pdu.sr.sr_bit_len, "SR bit length", scope, report);
        ok &= check_equals(pdu.sr.sr_bit_len, len_value(pdu.sr.payload.len()), "SR payload size", scope, report);
    }
    if pdu.pdu_bitmap & uci_pucch_bitmap::HARQ != 0 {
        ok &= validate_uci_part(&pdu.harq, &HARQ, scope, report);
    }
    if pdu.pdu_bitmap & uci_pucch_bitmap::CSI_PART1 != 0 {
        ok &= validate_uci_part(&pdu.csi_part1, &CSI_PART1, scope, report);
    }
    if pdu.pdu_bitmap & uci_pucch_bitmap::CSI_PART2 != 0 {
        ok &= validate_uci_part(&pdu.csi_part2, &CSI_PART2, scope, report);
    }
    ok
}
