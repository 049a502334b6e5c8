//! Top-level FAPI message views.
//!
//! Messages that carry more than one PDU variant hold a tagged enum per PDU, so dispatch in
//! the message validators is an exhaustive `match` and an unknown PDU type cannot reach it.

use crate::pdu::{
    CrcPdu, CsiRsPdu, PdcchPdu, PdschPdu, PrachPdu, PucchPdu, PuschPdu, RachOccasion, RxDataPdu,
    SsbPdu, TxDataPdu, UciPucchFormat01Pdu, UciPucchFormat234Pdu, UciPuschPdu,
};
use crate::report::{MessageKind, PduKind};

/// Indices of the PDUs of one UE group, as listed at the end of DL_TTI / UL_TTI requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PduGroup {
    pub pdu_indices: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DlTtiPdu {
    Pdcch(PdcchPdu),
    Pdsch(PdschPdu),
    CsiRs(CsiRsPdu),
    Ssb(SsbPdu),
}

impl DlTtiPdu {
    pub fn kind(&self) -> PduKind {
        match self {
            DlTtiPdu::Pdcch(_) => PduKind::Pdcch,
            DlTtiPdu::Pdsch(_) => PduKind::Pdsch,
            DlTtiPdu::CsiRs(_) => PduKind::CsiRs,
            DlTtiPdu::Ssb(_) => PduKind::Ssb,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UlTtiPdu {
    Prach(PrachPdu),
    Pusch(PuschPdu),
    Pucch(PucchPdu),
}

impl UlTtiPdu {
    pub fn kind(&self) -> PduKind {
        match self {
            UlTtiPdu::Prach(_) => PduKind::Prach,
            UlTtiPdu::Pusch(_) => PduKind::Pusch,
            UlTtiPdu::Pucch(_) => PduKind::Pucch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciPdu {
    Pusch(UciPuschPdu),
    PucchFormat01(UciPucchFormat01Pdu),
    PucchFormat234(UciPucchFormat234Pdu),
}

impl UciPdu {
    pub fn kind(&self) -> PduKind {
        match self {
            UciPdu::Pusch(_) => PduKind::UciPusch,
            UciPdu::PucchFormat01(_) => PduKind::UciPucchFormat01,
            UciPdu::PucchFormat234(_) => PduKind::UciPucchFormat234,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DlTtiRequest {
    pub sfn: u16,
    pub slot: u16,
    pub pdus: Vec<DlTtiPdu>,
    pub pdu_groups: Vec<PduGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UlTtiRequest {
    pub sfn: u16,
    pub slot: u16,
    pub pdus: Vec<UlTtiPdu>,
    pub pdu_groups: Vec<PduGroup>,
}

/// UL_DCI.request: PDCCH PDUs carrying uplink grants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UlDciRequest {
    pub sfn: u16,
    pub slot: u16,
    pub pdus: Vec<PdcchPdu>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxDataRequest {
    pub sfn: u16,
    pub slot: u16,
    pub pdus: Vec<TxDataPdu>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RxDataIndication {
    pub sfn: u16,
    pub slot: u16,
    pub pdus: Vec<RxDataPdu>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrcIndication {
    pub sfn: u16,
    pub slot: u16,
    pub pdus: Vec<CrcPdu>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RachIndication {
    pub sfn: u16,
    pub slot: u16,
    pub occasions: Vec<RachOccasion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UciIndication {
    pub sfn: u16,
    pub slot: u16,
    pub pdus: Vec<UciPdu>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotIndication {
    pub sfn: u16,
    pub slot: u16,
}

/// ERROR.indication error codes. Only `SFN_OUT_OF_SYNC` and `MSG_INVALID_SFN` carry the
/// SFN/slot the PHY expected.
pub mod error_code {
    pub const MSG_OK: u8 = 0x00;
    pub const MSG_INVALID_STATE: u8 = 0x01;
    pub const MSG_INVALID_CONFIG: u8 = 0x02;
    pub const SFN_OUT_OF_SYNC: u8 = 0x03;
    pub const MSG_SLOT_ERR: u8 = 0x04;
    pub const MSG_BCH_MISSING: u8 = 0x05;
    pub const MSG_INVALID_SFN: u8 = 0x06;
    pub const MSG_UL_DCI_ERR: u8 = 0x07;
    pub const MSG_TX_ERR: u8 = 0x08;
    pub const MSG_INVALID_PHY_ID: u8 = 0x09;
    pub const MSG_UNINSTANTIATED_PHY: u8 = 0x0a;
    pub const MSG_INVALID_DFE_PROFILE: u8 = 0x0b;
    pub const PHY_PROFILE_INCOMPATIBLE_RAT_CONFIG: u8 = 0x0c;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorIndication {
    pub sfn: u16,
    pub slot: u16,
    /// Message type of the request that triggered the error.
    pub message_id: u8,
    pub error_code: u8,
    pub expected_sfn: u16,
    pub expected_slot: u16,
}

/// Any message the validator understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FapiMessage {
    DlTti(DlTtiRequest),
    UlTti(UlTtiRequest),
    UlDci(UlDciRequest),
    TxData(TxDataRequest),
    RxData(RxDataIndication),
    Crc(CrcIndication),
    Rach(RachIndication),
    Uci(UciIndication),
    Slot(SlotIndication),
    Error(ErrorIndication),
}

impl FapiMessage {
    pub fn kind(&self) -> MessageKind {
        match self {
            FapiMessage::DlTti(_) => MessageKind::DlTtiRequest,
            FapiMessage::UlTti(_) => MessageKind::UlTtiRequest,
            FapiMessage::UlDci(_) => MessageKind::UlDciRequest,
            FapiMessage::TxData(_) => MessageKind::TxDataRequest,
            FapiMessage::RxData(_) => MessageKind::RxDataIndication,
            FapiMessage::Crc(_) => MessageKind::CrcIndication,
            FapiMessage::Rach(_) => MessageKind::RachIndication,
            FapiMessage::Uci(_) => MessageKind::UciIndication,
            FapiMessage::Slot(_) => MessageKind::SlotIndication,
            FapiMessage::Error(_) => MessageKind::ErrorIndication,
        }
    }

    /// `(sfn, slot)` the message refers to.
    pub fn sfn_slot(&self) -> (u16, u16) {
        match self {
            FapiMessage::DlTti(m) => (m.sfn, m.slot),
            FapiMessage::UlTti(m) => (m.sfn, m.slot),
            FapiMessage::UlDci(m) => (m.sfn, m.slot),
            FapiMessage::TxData(m) => (m.sfn, m.slot),
            FapiMessage::RxData(m) => (m.sfn, m.slot),
            FapiMessage::Crc(m) => (m.sfn, m.slot),
            FapiMessage::Rach(m) => (m.sfn, m.slot),
            FapiMessage::Uci(m) => (m.sfn, m.slot),
            FapiMessage::Slot(m) => (m.sfn, m.slot),
            FapiMessage::Error(m) => (m.sfn, m.slot),
        }
    }
}
