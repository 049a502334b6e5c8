//! Downlink PDU validators: PDCCH, PDSCH, CSI-RS and SSB (SCF-222 v4.0 section 3.4.2).
//!
//! Checks run in field-table order and never short-circuit, so one call reports every
//! independent problem of the PDU (up to the report capacity).

use crate::check::{
    check_divisible, check_dual_encoding, check_one_of, check_range, check_range_or_sentinel,
    len_value, Encoded, Scope,
};
use crate::pdu::{
    bch_payload_flag, cce_reg_mapping, pdsch_bitmap, sentinel, CsiRsPdu, DlDci, PdcchPdu,
    PdschCodeword, PdschPdu, SsbPdu,
};
use crate::report::{MessageKind, PduKind, ValidationReport};

/// Most DCIs a single PDCCH PDU may carry.
pub const MAX_DCI_PER_PDCCH: i64 = 64;
/// Largest DCI payload in bits.
pub const MAX_DCI_PAYLOAD_BITS: i64 = 128;

const AGGREGATION_LEVELS: &[i64] = &[1, 2, 4, 8, 16];
const PDSCH_QAM_MOD_ORDERS: &[i64] = &[2, 4, 6, 8];
const MAX_CBG_PER_TB: &[i64] = &[2, 4, 6, 8];

fn profile_sss(value: i16) -> Encoded {
    Encoded::new(value, -32767, 32767, sentinel::PROFILE_SSS_UNUSED)
}

/// Validates a PDCCH PDU. Used by DL_TTI.request and UL_DCI.request.
pub fn validate_pdcch_pdu(pdu: &PdcchPdu, message: MessageKind, report: &mut ValidationReport) -> bool {
    let scope = Scope::pdu(message, PduKind::Pdcch);
    let mut ok = true;

    ok &= check_range(1, 275, pdu.coreset_bwp_size, "Coreset BWP size", scope, report);
    ok &= check_range(0, 274, pdu.coreset_bwp_start, "Coreset BWP start", scope, report);
    ok &= check_range(0, 4, pdu.scs, "Subcarrier spacing", scope, report);
    ok &= check_range(0, 1, pdu.cyclic_prefix, "Cyclic prefix", scope, report);
    ok &= check_range(0, 13, pdu.start_symbol_index, "Start symbol index", scope, report);
    ok &= check_range(1, 3, pdu.duration_symbols, "Duration symbols", scope, report);
    ok &= check_range(0, 1, pdu.cce_reg_mapping_type, "CCE REG mapping type", scope, report);
    ok &= validate_reg_bundle_size(pdu, scope, report);
    if pdu.cce_reg_mapping_type == cce_reg_mapping::INTERLEAVED {
        ok &= check_one_of(&[2, 3, 6], pdu.interleaver_size, "Interleaver size", scope, report);
    }
    ok &= check_range(0, 1, pdu.coreset_type, "Coreset type", scope, report);
    ok &= check_range(0, 275, pdu.shift_index, "Shift index", scope, report);
    ok &= check_range(0, 1, pdu.precoder_granularity, "Precoder granularity", scope, report);
    ok &= check_range(1, MAX_DCI_PER_PDCCH, len_value(pdu.dl_dci.len()), "Number of DCIs", scope, report);

    for dci in &pdu.dl_dci {
        ok &= validate_dl_dci(dci, scope, report);
    }
    ok
}

/// REG bundle size depends on the mapping type and, when interleaved, on the CORESET duration.
/// An unknown mapping type is already reported by its own check.
fn validate_reg_bundle_size(pdu: &PdcchPdu, scope: Scope, report: &mut ValidationReport) -> bool {
    let allowed: &[i64] = match (pdu.cce_reg_mapping_type, pdu.duration_symbols) {
        (cce_reg_mapping::NON_INTERLEAVED, _) => &[6],
        (cce_reg_mapping::INTERLEAVED, 1 | 2) => &[2, 6],
        (cce_reg_mapping::INTERLEAVED, 3) => &[3, 6],
        (cce_reg_mapping::INTERLEAVED, _) => &[2, 3, 6],
        _ => return true,
    };
    check_one_of(allowed, pdu.reg_bundle_size, "REG bundle size", scope, report)
}

fn validate_dl_dci(dci: &DlDci, scope: Scope, report: &mut ValidationReport) -> bool {
    let mut ok = true;

    // RNTI, NID PDCCH data/DMRS and the scrambling RNTI use their whole 16-bit range.
    ok &= check_range(0, 135, dci.cce_index, "CCE index", scope, report);
    ok &= check_one_of(AGGREGATION_LEVELS, dci.aggregation_level, "Aggregation level", scope, report);
    ok &= check_range(0, 17, dci.beta_pdcch_1_0, "Beta PDCCH 1_0", scope, report);
    ok &= check_dual_encoding(
        Encoded::new(dci.power_control_offset_ss_profile_nr, -8, 8, sentinel::PDCCH_PROFILE_NR_UNUSED),
        profile_sss(dci.maintenance.pdcch_dmrs_power_offset_profile_sss),
        "DMRS Power offset",
        scope,
        report,
    );
    ok &= check_range(1, MAX_DCI_PAYLOAD_BITS, dci.payload_size_bits, "Payload size", scope, report);
    ok &= check_range(0, 1, dci.maintenance.collocated_al16_candidate, "Collocated AL16 candidate", scope, report);
    // The data power offset SSS spans the full i16 range: -32768 selects the NR profile and
    // every other value is a legal offset.
    ok
}

/// Validates a PDSCH PDU of a DL_TTI.request.
///
/// PTRS and CBG retransmission control parameters are only checked when their presence bit is
/// set in `pdu_bitmap`. The maintenance CORESET start point and initial DL BWP size only apply
/// to some transmission types.
pub fn validate_pdsch_pdu(pdu: &PdschPdu, message: MessageKind, report: &mut ValidationReport) -> bool {
    let scope = Scope::pdu(message, PduKind::Pdsch);
    let mut ok = true;

    ok &= check_range(1, 275, pdu.bwp_size, "BWP size", scope, report);
    ok &= check_range(0, 274, pdu.bwp_start, "BWP start", scope, report);
    ok &= check_range(0, 4, pdu.scs, "Subcarrier spacing", scope, report);
    ok &= check_range(0, 1, pdu.cyclic_prefix, "Cyclic prefix", scope, report);
    ok &= check_range(1, 2, len_value(pdu.codewords.len()), "Number of codewords", scope, report);
    for cw in &pdu.codewords {
        ok &= validate_pdsch_codeword(cw, scope, report);
    }
    ok &= check_range(0, 1023, pdu.nid_pdsch, "NID PDSCH", scope, report);
    ok &= check_range(1, 8, pdu.num_layers, "Number of layers", scope, report);
    ok &= check_range(0, 0, pdu.transmission_scheme, "Transmission scheme", scope, report);
    ok &= check_range(0, 1, pdu.ref_point, "Reference point", scope, report);
    ok &= check_range(0, 16383, pdu.dl_dmrs_symb_pos, "DMRS symbol position", scope, report);
    ok &= check_range(0, 1, pdu.dmrs_config_type, "DMRS config type", scope, report);
    ok &= check_range(0, 1, pdu.nscid, "NSCID", scope, report);
    ok &= check_range(1, 3, pdu.num_dmrs_cdm_grps_no_data, "Number of DMRS CDM groups without data", scope, report);
    ok &= check_range(0, 4095, pdu.dmrs_ports, "DMRS ports", scope, report);
    ok &= check_range(0, 1, pdu.resource_alloc, "Resource allocation type", scope, report);
    ok &= check_range(0, 274, pdu.rb_start, "RB start", scope, report);
    ok &= check_range(1, 275, pdu.rb_size, "RB size", scope, report);
    ok &= check_range(0, 2, pdu.vrb_to_prb_mapping, "VRB-to-PRB mapping", scope, report);
    ok &= check_range(0, 13, pdu.start_symbol_index, "Start symbol index", scope, report);
    ok &= check_range(1, 14, pdu.nr_of_symbols, "Number of symbols", scope, report);

    if pdu.pdu_bitmap & pdsch_bitmap::PTRS != 0 {
        let ptrs = &pdu.ptrs;
        ok &= check_range(0, 63, ptrs.ptrs_port_index, "PTRS port index", scope, report);
        ok &= check_range(0, 2, ptrs.ptrs_time_density, "PTRS time density", scope, report);
        ok &= check_range(0, 1, ptrs.ptrs_freq_density, "PTRS frequency density", scope, report);
        ok &= check_range(0, 3, ptrs.ptrs_re_offset, "PTRS RE offset", scope, report);
        ok &= check_range(0, 3, ptrs.n_epre_ratio_of_pdsch_to_ptrs, "EPRE ratio PDSCH to PTRS", scope, report);
    }
    if pdu.pdu_bitmap & pdsch_bitmap::CBG_RETX_CTRL != 0 {
        ok &= check_one_of(
            MAX_CBG_PER_TB,
            pdu.cbg_retx_ctrl.max_num_cbg_per_tb,
            "Maximum number of CBGs per TB",
            scope,
            report,
        );
    }

    let maintenance = &pdu.maintenance;
    ok &= check_dual_encoding(
        Encoded::new(pdu.power_control_offset_profile_nr, 0, 23, sentinel::U8_UNUSED),
        profile_sss(maintenance.pdsch_data_power_offset_profile_sss),
        "Power control offset profile",
        scope,
        report,
    );
    ok &= check_dual_encoding(
        Encoded::new(pdu.power_control_offset_ss_profile_nr, 0, 3, sentinel::U8_UNUSED),
        profile_sss(maintenance.pdsch_dmrs_power_offset_profile_sss),
        "Power control offset SS profile",
        scope,
        report,
    );
    ok &= check_range(0, 3, pdu.is_last_cb_present, "Is last CB present", scope, report);
    ok &= check_range(0, 1, pdu.is_inline_tb_crc, "Is inline TB CRC", scope, report);

    ok &= check_range(0, 5, maintenance.trans_type, "Transmission type", scope, report);
    if matches!(maintenance.trans_type, 1 | 3 | 4) {
        ok &= check_range(0, 274, maintenance.coreset_start_point, "Coreset start point", scope, report);
    }
    if matches!(maintenance.trans_type, 2 | 3) {
        ok &= check_range(1, 275, maintenance.initial_dl_bwp_size, "Initial DL BWP size", scope, report);
    }
    ok &= check_range(1, 2, maintenance.ldpc_base_graph, "LDPC base graph", scope, report);
    ok &= check_range(0, 1, maintenance.tb_crc_required, "TB CRC required", scope, report);
    ok
}

fn validate_pdsch_codeword(cw: &PdschCodeword, scope: Scope, report: &mut ValidationReport) -> bool {
    let mut ok = true;
    ok &= check_one_of(PDSCH_QAM_MOD_ORDERS, cw.qam_mod_order, "QAM modulation order", scope, report);
    ok &= check_range(0, 31, cw.mcs_index, "MCS index", scope, report);
    ok &= check_range(0, 2, cw.mcs_table, "MCS table", scope, report);
    ok &= check_range(0, 3, cw.rv_index, "Redundancy version index", scope, report);
    ok
}

/// Validates a CSI-RS PDU of a DL_TTI.request.
pub fn validate_csi_rs_pdu(pdu: &CsiRsPdu, message: MessageKind, report: &mut ValidationReport) -> bool {
    let scope = Scope::pdu(message, PduKind::CsiRs);
    let mut ok = true;

    ok &= check_range(0, 4, pdu.scs, "Subcarrier spacing", scope, report);
    ok &= check_range(0, 1, pdu.cyclic_prefix, "Cyclic prefix", scope, report);
    ok &= check_range(0, 274, pdu.start_rb, "Start RB", scope, report);
    ok &= check_divisible(pdu.num_rbs, 4, 24, 276, "Number of RBs", scope, report);
    ok &= check_range(0, 2, pdu.csi_type, "CSI type", scope, report);
    ok &= check_range(1, 18, pdu.row, "Row", scope, report);
    ok &= check_range(0, 13, pdu.symb_l0, "Symbol L0", scope, report);
    ok &= check_range(2, 12, pdu.symb_l1, "Symbol L1", scope, report);
    ok &= check_range(0, 3, pdu.cdm_type, "CDM type", scope, report);
    ok &= check_range(0, 3, pdu.freq_density, "Frequency density", scope, report);
    ok &= check_range(0, 1023, pdu.scramb_id, "Scrambling ID", scope, report);
    ok &= check_dual_encoding(
        Encoded::new(pdu.power_control_offset_profile_nr, 0, 23, sentinel::U8_UNUSED),
        profile_sss(pdu.maintenance.csi_rs_power_offset_profile_sss),
        "Power control offset profile",
        scope,
        report,
    );
    ok &= check_range_or_sentinel(
        0,
        3,
        sentinel::U8_UNUSED,
        pdu.power_control_offset_ss_profile_nr,
        "Power control offset SS profile",
        scope,
        report,
    );
    ok
}

/// Validates an SSB PDU of a DL_TTI.request. MIB parameters are only checked when the PHY
/// builds the BCH payload.
pub fn validate_ssb_pdu(pdu: &SsbPdu, message: MessageKind, report: &mut ValidationReport) -> bool {
    let scope = Scope::pdu(message, PduKind::Ssb);
    let mut ok = true;

    ok &= check_range(0, 1007, pdu.phys_cell_id, "Physical cell ID", scope, report);
    ok &= check_dual_encoding(
        Encoded::new(pdu.beta_pss_profile_nr, 0, 1, sentinel::U8_UNUSED),
        profile_sss(pdu.maintenance.beta_pss_profile_sss),
        "Beta PSS profile",
        scope,
        report,
    );
    ok &= check_range(0, 63, pdu.ssb_block_index, "SSB block index", scope, report);
    ok &= check_range(0, 31, pdu.ssb_subcarrier_offset, "SSB subcarrier offset", scope, report);
    ok &= check_range(0, 2199, pdu.ssb_offset_point_a, "SSB offset point A", scope, report);
    ok &= check_range(0, 2, pdu.bch_payload_flag, "BCH payload flag", scope, report);

    if pdu.bch_payload_flag == bch_payload_flag::PHY_FULL {
        let mib = &pdu.mib;
        ok &= check_range(0, 1, mib.dmrs_type_a_position, "DMRS type A position", scope, report);
        ok &= check_range(0, 1, mib.cell_barred, "Cell barred", scope, report);
        ok &= check_range(0, 1, mib.intra_freq_reselection, "Intra frequency reselection", scope, report);
    }

    let maintenance = &pdu.maintenance;
    ok &= check_range(0, 4, maintenance.case, "SSB pattern case", scope, report);
    ok &= check_range(0, 4, maintenance.scs, "Subcarrier spacing", scope, report);
    ok &= check_one_of(&[4, 8, 64], maintenance.lmax, "Lmax", scope, report);
    ok
}
