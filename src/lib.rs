//! # fapi-validator: SCF-222 5G FAPI conformance checks
//!
//! Validates PHY/MAC FAPI messages (SCF-222 v4.0) field by field against the ranges,
//! enumerated sets and cross-field rules of the interface, and reports what failed.
//!
//! ## Messages
//!
//! - **Requests**: DL_TTI (PDCCH, PDSCH, CSI-RS, SSB PDUs), UL_TTI (PRACH, PUSCH, PUCCH),
//!   UL_DCI (PDCCH), Tx_Data
//! - **Indications**: SLOT, RX_Data, CRC, UCI (PUSCH, PUCCH format 0/1, PUCCH format 2/3/4),
//!   RACH, ERROR
//!
//! ## Rules
//!
//! - Static ranges, enumerated sets and divisibility (`check_range`, `check_one_of`,
//!   `check_divisible`)
//! - "Not used" sentinels (255, 65535, 0xFFFFFFFF, -32768)
//! - Dual-encoded power offsets: exactly one of the legacy NR field and the SSS-profile field is
//!   in use
//! - Sub-records gated by the PDU presence bitmap and by the PDSCH/PUSCH transmission type
//! - PUCCH limits per format
//! - UCI payload sizes conditioned on the detection status
//!
//! ## Report
//!
//! Validation is non-short-circuit: every check runs. The first [`REPORT_CAPACITY`] violations
//! are stored with their value, property name, message, PDU and expected range; every failure is
//! counted in [`ValidationReport::total_violations`]. A valid message yields `Ok(())`.
//!
//! ```
//! use fapi_validator::{validate_slot_indication, SlotIndication};
//!
//! let report = validate_slot_indication(&SlotIndication { sfn: 1024, slot: 3 }).unwrap_err();
//! assert_eq!(report.total_violations(), 1);
//! assert_eq!(report.find("sfn").map(|v| v.expected), Some(Some((0, 1023))));
//! ```
//!
//! Failures are logged through `tracing` at debug level (one event per message) and trace level
//! (one event per stored violation). Build with `--features check_profile` to count failures per
//! property (see [`get_check_profile`]).

pub mod check;
pub mod dl;
pub mod indication;
pub mod message;
pub mod pdu;
pub mod profile;
pub mod report;
pub mod uci;
pub mod ul;
pub mod validate;

pub use check::{
    check_divisible, check_dual_encoding, check_equals, check_one_of, check_range,
    check_range_or_sentinel, Encoded, Scope,
};
pub use dl::{validate_csi_rs_pdu, validate_pdcch_pdu, validate_pdsch_pdu, validate_ssb_pdu};
pub use indication::{validate_crc_pdu, validate_rach_occasion, validate_rx_data_pdu, validate_tx_data_pdu};
pub use message::{
    CrcIndication, DlTtiPdu, DlTtiRequest, ErrorIndication, FapiMessage, PduGroup, RachIndication,
    RxDataIndication, SlotIndication, TxDataRequest, UciIndication, UciPdu, UlDciRequest, UlTtiPdu,
    UlTtiRequest,
};
pub use profile::{get_check_profile, reset_check_profile};
pub use report::{FieldViolation, MessageKind, PduKind, ValidationReport, REPORT_CAPACITY};
pub use uci::{validate_uci_pucch_format01_pdu, validate_uci_pucch_format234_pdu, validate_uci_pusch_pdu};
pub use ul::{validate_prach_pdu, validate_pucch_pdu, validate_pusch_pdu};
pub use validate::{
    validate_crc_indication, validate_dl_tti_request, validate_error_indication, validate_message,
    validate_rach_indication, validate_rx_data_indication, validate_slot_indication,
    validate_tx_data_request, validate_uci_indication, validate_ul_dci_request,
    validate_ul_tti_request, ValidationResult,
};
