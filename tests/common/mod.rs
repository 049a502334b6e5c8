//! Literal, valid FAPI fixtures shared by the integration tests.
//!
//! Every builder returns a PDU or message that passes validation; tests break one field at a
//! time to exercise a single rule.

#![allow(dead_code)]

use fapi_validator::pdu::*;
use fapi_validator::{
    CrcIndication, DlTtiPdu, DlTtiRequest, RachIndication, RxDataIndication, TxDataRequest,
    UciIndication, UciPdu, UlTtiPdu, UlTtiRequest, ValidationReport,
};

pub const SFN: u16 = 512;
pub const SLOT: u16 = 7;

pub fn report() -> ValidationReport {
    ValidationReport::new(SFN, SLOT)
}

/// Property names of the stored violations, in check order.
pub fn properties(report: &ValidationReport) -> Vec<&'static str> {
    report.violations().map(|v| v.property).collect()
}

/// One static range of a PDU: how to write the field, the property it is reported under and
/// its legal bounds.
pub struct Bound<P> {
    pub set: fn(&mut P, i64) -> bool,
    pub property: &'static str,
    pub range: (i32, i32),
}

/// Builds a [`Bound`] whose setter writes a single field.
#[macro_export]
macro_rules! bound {
    (|$p:ident: $pdu:ty| $place:expr, $property:expr, $min:expr, $max:expr) => {
        $crate::common::Bound::<$pdu> {
            set: |$p: &mut $pdu, value: i64| $crate::common::put(&mut $place, value),
            property: $property,
            range: ($min, $max),
        }
    };
}

/// Writes `value` into `field` if its type can hold it.
pub fn put<T: TryFrom<i64>>(field: &mut T, value: i64) -> bool {
    match T::try_from(value) {
        Ok(v) => {
            *field = v;
            true
        }
        Err(_) => false,
    }
}

/// For every bound, `min` and `max` pass while `min - 1` and `max + 1` fail with the
/// `(min, max)` range. An edge the field type cannot represent is skipped.
pub fn assert_bounds<P: Clone>(valid: &P, bounds: &[Bound<P>], validate: impl Fn(&P, &mut ValidationReport) -> bool) {
    for bound in bounds {
        let (min, max) = bound.range;
        let property = bound.property;

        for value in [min, max] {
            let mut pdu = valid.clone();
            assert!((bound.set)(&mut pdu, i64::from(value)), "{property} = {value} does not fit");
            let mut r = report();
            assert!(validate(&pdu, &mut r), "{property} = {value} rejected: {:?}", properties(&r));
        }

        for value in [i64::from(min) - 1, i64::from(max) + 1] {
            let mut pdu = valid.clone();
            if !(bound.set)(&mut pdu, value) {
                continue;
            }
            let mut r = report();
            assert!(!validate(&pdu, &mut r), "{property} = {value} accepted");
            assert_eq!(properties(&r), vec![property], "{property} = {value}");
            let v = r.find(property).expect("violation");
            assert_eq!((i64::from(v.value), v.expected), (value, Some((min, max))), "{property}");
        }
    }
}

pub fn dl_dci() -> DlDci {
    DlDci {
        rnti: 0x4601,
        nid_pdcch_data: 1,
        nid_pdcch_dmrs: 1,
        nrnti_pdcch_data: 0,
        cce_index: 0,
        aggregation_level: 4,
        beta_pdcch_1_0: 0,
        power_control_offset_ss_profile_nr: 0,
        payload_size_bits: 40,
        payload: vec![0x12, 0x34, 0x56, 0x78, 0x9a],
        maintenance: DciMaintenance {
            dci_index: 0,
            collocated_al16_candidate: 0,
            pdcch_dmrs_power_offset_profile_sss: -32768,
            pdcch_data_power_offset_profile_sss: -32768,
        },
    }
}

pub fn pdcch_pdu() -> PdcchPdu {
    PdcchPdu {
        coreset_bwp_size: 48,
        coreset_bwp_start: 0,
        scs: 1,
        cyclic_prefix: 0,
        start_symbol_index: 0,
        duration_symbols: 1,
        freq_domain_resource: [0xff, 0, 0, 0, 0, 0],
        cce_reg_mapping_type: cce_reg_mapping::NON_INTERLEAVED,
        reg_bundle_size: 6,
        interleaver_size: 0,
        coreset_type: 0,
        shift_index: 0,
        precoder_granularity: 0,
        dl_dci: vec![dl_dci()],
    }
}

pub fn pdsch_pdu() -> PdschPdu {
    PdschPdu {
        pdu_bitmap: 0,
        rnti: 0x4601,
        pdu_index: 0,
        bwp_size: 273,
        bwp_start: 0,
        scs: 1,
        cyclic_prefix: 0,
        codewords: vec![PdschCodeword {
            target_code_rate: 1200,
            qam_mod_order: 2,
            mcs_index: 0,
            mcs_table: 0,
            rv_index: 0,
            tb_size: 1024,
        }],
        nid_pdsch: 0,
        num_layers: 1,
        transmission_scheme: 0,
        ref_point: 0,
        dl_dmrs_symb_pos: 0x0004,
        dmrs_config_type: 0,
        pdsch_dmrs_scrambling_id: 0,
        nscid: 0,
        num_dmrs_cdm_grps_no_data: 1,
        dmrs_ports: 1,
        resource_alloc: 1,
        rb_start: 0,
        rb_size: 10,
        vrb_to_prb_mapping: 0,
        start_symbol_index: 2,
        nr_of_symbols: 12,
        ptrs: PdschPtrs::default(),
        cbg_retx_ctrl: PdschCbgRetxCtrl::default(),
        power_control_offset_profile_nr: 8,
        power_control_offset_ss_profile_nr: 1,
        is_last_cb_present: 0,
        is_inline_tb_crc: 0,
        dl_tb_crc_cw: [0, 0],
        maintenance: PdschMaintenance {
            trans_type: 0,
            coreset_start_point: 0,
            initial_dl_bwp_size: 0,
            ldpc_base_graph: 1,
            tb_size_lbrm_bytes: 0,
            tb_crc_required: 0,
            pdsch_dmrs_power_offset_profile_sss: -32768,
            pdsch_data_power_offset_profile_sss: -32768,
        },
    }
}

pub fn csi_rs_pdu() -> CsiRsPdu {
    CsiRsPdu {
        scs: 1,
        cyclic_prefix: 0,
        start_rb: 0,
        num_rbs: 52,
        csi_type: 1,
        row: 1,
        freq_domain: 0x1,
        symb_l0: 4,
        symb_l1: 8,
        cdm_type: 0,
        freq_density: 1,
        scramb_id: 0,
        power_control_offset_profile_nr: 8,
        power_control_offset_ss_profile_nr: 1,
        maintenance: CsiRsMaintenance { csi_rs_pdu_index: 0, csi_rs_power_offset_profile_sss: -32768 },
    }
}

pub fn ssb_pdu() -> SsbPdu {
    SsbPdu {
        phys_cell_id: 500,
        beta_pss_profile_nr: 0,
        ssb_block_index: 0,
        ssb_subcarrier_offset: 0,
        ssb_offset_point_a: 0,
        bch_payload_flag: bch_payload_flag::MAC_FULL,
        bch_payload: 0x00ab_cdef,
        mib: SsbMib::default(),
        maintenance: SsbMaintenance {
            ssb_pdu_index: 0,
            case: 1,
            scs: 1,
            lmax: 8,
            beta_pss_profile_sss: -32768,
            ss_pbch_block_power_scaling: 0,
        },
    }
}

pub fn prach_pdu() -> PrachPdu {
    PrachPdu {
        phys_cell_id: 500,
        num_prach_ocas: 1,
        prach_format: 0,
        index_fd_ra: 0,
        prach_start_symbol: 0,
        num_cs: 13,
        maintenance: PrachMaintenance {
            handle: 1,
            prach_config_scope: 0,
            prach_res_config_index: 0,
            num_fd_ra: 1,
            start_preamble_index: 255,
            num_preamble_indices: 64,
        },
    }
}

pub fn pusch_pdu() -> PuschPdu {
    PuschPdu {
        pdu_bitmap: pusch_bitmap::DATA,
        rnti: 0x4601,
        handle: 2,
        bwp_size: 273,
        bwp_start: 0,
        scs: 1,
        cyclic_prefix: 0,
        target_code_rate: 1200,
        qam_mod_order: 2,
        mcs_index: 0,
        mcs_table: 0,
        transform_precoding: 1,
        nid_pusch: 0,
        num_layers: 1,
        ul_dmrs_symb_pos: 0x0004,
        dmrs_config_type: 0,
        pusch_dmrs_scrambling_id: 0,
        pusch_dmrs_identity: 0,
        nscid: 0,
        num_dmrs_cdm_grps_no_data: 2,
        dmrs_ports: 1,
        resource_alloc: 1,
        rb_start: 0,
        rb_size: 10,
        vrb_to_prb_mapping: 0,
        intra_slot_frequency_hopping: 0,
        tx_direct_current_location: 0,
        uplink_frequency_shift_7p5khz: 0,
        start_symbol_index: 0,
        nr_of_symbols: 14,
        data: PuschData { rv_index: 0, harq_process_id: 3, new_data: 1, tb_size: 1024, num_cb: 1 },
        uci: PuschUci::default(),
        ptrs: PuschPtrs::default(),
        dfts_ofdm: PuschDftsOfdm::default(),
        maintenance: PuschMaintenance {
            pusch_trans_type: 0,
            delta_bwp0_start_from_active_bwp: 0,
            initial_ul_bwp_size: 0,
            group_or_sequence_hopping: 0,
            pusch_second_hop_prb: 0,
            ldpc_base_graph: 1,
            tb_size_lbrm_bytes: 0,
        },
    }
}

/// A valid PUCCH PDU of the given format (0 to 4).
pub fn pucch_pdu(format: u8) -> PucchPdu {
    let short = matches!(format, pucch_format::FORMAT_0 | pucch_format::FORMAT_2);
    let small_payload = matches!(format, pucch_format::FORMAT_0 | pucch_format::FORMAT_1);
    PucchPdu {
        rnti: 0x4601,
        handle: 3,
        bwp_size: 273,
        bwp_start: 0,
        scs: 1,
        cyclic_prefix: 0,
        format_type: format,
        multi_slot_tx_indicator: 0,
        pi2_bpsk: 0,
        prb_start: 0,
        prb_size: 1,
        start_symbol_index: if short { 12 } else { 0 },
        nr_of_symbols: if short { 2 } else { 14 },
        freq_hop_flag: 0,
        second_hop_prb: 0,
        pucch_group_hopping: 0,
        nid_pucch_hopping: 0,
        initial_cyclic_shift: 0,
        nid_pucch_scrambling: 0,
        time_domain_occ_index: 0,
        pre_dft_occ_idx: 0,
        pre_dft_occ_len: 2,
        add_dmrs_flag: 0,
        nid0_pucch_dmrs_scrambling: 0,
        m0_pucch_dmrs_cyclic_shift: 0,
        sr_bit_len: 0,
        bit_len_harq: 1,
        csi_part1_bit_length: 0,
        maintenance: PucchMaintenance {
            max_code_rate: if small_payload { 255 } else { 0 },
            ul_bwp_id: 0,
        },
    }
}

pub fn measurements() -> UlMeasurements {
    UlMeasurements {
        ul_sinr_metric: 100,
        timing_advance_offset: 31,
        timing_advance_offset_ns: 0,
        rssi: 800,
        rsrp: 65535,
    }
}

/// A decoded report of `bits` bits with CRC pass.
pub fn uci_part(bits: u16) -> UciPart {
    UciPart {
        detection_status: detection_status::CRC_PASS,
        expected_bit_length: bits,
        payload: BitPayload::zeros(usize::from(bits)),
    }
}

pub fn uci_pusch_pdu() -> UciPuschPdu {
    UciPuschPdu {
        pdu_bitmap: uci_pusch_bitmap::HARQ,
        handle: 4,
        rnti: 0x4601,
        measurements: measurements(),
        harq: uci_part(2),
        csi_part1: UciPart::default(),
        csi_part2: UciPart::default(),
    }
}

pub fn uci_pucch_format01_pdu() -> UciPucchFormat01Pdu {
    UciPucchFormat01Pdu {
        pdu_bitmap: uci_pucch_bitmap::SR | uci_pucch_bitmap::HARQ,
        handle: 5,
        rnti: 0x4601,
        pucch_format: 0,
        measurements: measurements(),
        sr: SrPucchFormat01 { sr_indication: 1, sr_confidence_level: 255 },
        harq: HarqPucchFormat01 { harq_confidence_level: 0, harq_values: vec![1] },
    }
}

pub fn uci_pucch_format234_pdu() -> UciPucchFormat234Pdu {
    UciPucchFormat234Pdu {
        pdu_bitmap: uci_pucch_bitmap::HARQ | uci_pucch_bitmap::CSI_PART1,
        handle: 6,
        rnti: 0x4601,
        pucch_format: 0,
        measurements: measurements(),
        sr: SrPucchFormat234::default(),
        harq: uci_part(4),
        csi_part1: uci_part(10),
        csi_part2: UciPart::default(),
    }
}

pub fn crc_pdu() -> CrcPdu {
    CrcPdu {
        handle: 2,
        rnti: 0x4601,
        rapid: 255,
        harq_id: 3,
        tb_crc_status: 0,
        num_cb: 0,
        cb_crc_status: Vec::new(),
        measurements: measurements(),
    }
}

pub fn rx_data_pdu() -> RxDataPdu {
    RxDataPdu {
        handle: 2,
        rnti: 0x4601,
        rapid: 255,
        harq_id: 3,
        pdu_tag: rx_data_tag::PAYLOAD,
        pdu_length: 4,
        payload: vec![1, 2, 3, 4],
    }
}

pub fn rach_occasion() -> RachOccasion {
    RachOccasion {
        handle: 1,
        symbol_index: 0,
        slot_index: 0,
        ra_index: 0,
        avg_rssi: 0xFFFF_FFFF,
        rsrp: 65535,
        avg_snr: 255,
        preambles: vec![RachPreamble {
            preamble_index: 5,
            timing_advance_offset: 10,
            timing_advance_offset_ns: 0xFFFF_FFFF,
            preamble_pwr: 1000,
            preamble_snr: 255,
        }],
    }
}

pub fn tx_data_pdu() -> TxDataPdu {
    TxDataPdu { pdu_length: 100, pdu_index: 0, cw_index: 0, tlvs: vec![TxDataTlv { tag: 0, length: 100 }] }
}

pub fn dl_tti_request() -> DlTtiRequest {
    DlTtiRequest {
        sfn: SFN,
        slot: SLOT,
        pdus: vec![
            DlTtiPdu::Pdcch(pdcch_pdu()),
            DlTtiPdu::Pdsch(pdsch_pdu()),
            DlTtiPdu::CsiRs(csi_rs_pdu()),
            DlTtiPdu::Ssb(ssb_pdu()),
        ],
        pdu_groups: Vec::new(),
    }
}

pub fn ul_tti_request() -> UlTtiRequest {
    UlTtiRequest {
        sfn: SFN,
        slot: SLOT,
        pdus: vec![
            UlTtiPdu::Prach(prach_pdu()),
            UlTtiPdu::Pusch(pusch_pdu()),
            UlTtiPdu::Pucch(pucch_pdu(pucch_format::FORMAT_1)),
        ],
        pdu_groups: Vec::new(),
    }
}

pub fn uci_indication() -> UciIndication {
    UciIndication {
        sfn: SFN,
        slot: SLOT,
        pdus: vec![
            UciPdu::Pusch(uci_pusch_pdu()),
            UciPdu::PucchFormat01(uci_pucch_format01_pdu()),
            UciPdu::PucchFormat234(uci_pucch_format234_pdu()),
        ],
    }
}

pub fn crc_indication() -> CrcIndication {
    CrcIndication { sfn: SFN, slot: SLOT, pdus: vec![crc_pdu()] }
}

pub fn rx_data_indication() -> RxDataIndication {
    RxDataIndication { sfn: SFN, slot: SLOT, pdus: vec![rx_data_pdu()] }
}

pub fn rach_indication() -> RachIndication {
    RachIndication { sfn: SFN, slot: SLOT, occasions: vec![rach_occasion()] }
}

pub fn tx_data_request() -> TxDataRequest {
    TxDataRequest { sfn: SFN, slot: SLOT, pdus: vec![tx_data_pdu()] }
}
