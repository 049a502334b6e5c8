//! Uplink PDU validators: PRACH, PUSCH and PUCCH (SCF-222 v4.0 section 3.4.3).

use crate::check::{check_one_of, check_range, check_range_or_sentinel, len_value, Scope};
use crate::pdu::{pucch_format, pusch_bitmap, sentinel, PrachPdu, PucchPdu, PuschPdu};
use crate::report::{MessageKind, PduKind, ValidationReport};

/// Largest UCI payload (HARQ-ACK or CSI part 1) in bits.
pub const MAX_UCI_BIT_LENGTH: i64 = 1706;

const PUSCH_QAM_MOD_ORDERS: &[i64] = &[1, 2, 4, 6, 8];

/// Validates a PRACH PDU of an UL_TTI.request.
pub fn validate_prach_pdu(pdu: &PrachPdu, message: MessageKind, report: &mut ValidationReport) -> bool {
    let scope = Scope::pdu(message, PduKind::Prach);
    let mut ok = true;

    ok &= check_range(0, 1007, pdu.phys_cell_id, "Physical cell ID", scope, report);
    ok &= check_range(1, 7, pdu.num_prach_ocas, "Number of PRACH occasions", scope, report);
    ok &= check_range(0, 13, pdu.prach_format, "PRACH format", scope, report);
    ok &= check_range(0, 7, pdu.index_fd_ra, "Frequency domain occasion index", scope, report);
    ok &= check_range(0, 13, pdu.prach_start_symbol, "PRACH start symbol", scope, report);
    ok &= check_range(0, 419, pdu.num_cs, "Zero correlation zone config", scope, report);

    let maintenance = &pdu.maintenance;
    ok &= check_range(0, 1, maintenance.prach_config_scope, "PRACH config scope", scope, report);
    ok &= check_range(1, 8, maintenance.num_fd_ra, "Number of frequency domain occasions", scope, report);
    ok &= check_range_or_sentinel(
        0,
        63,
        sentinel::U8_UNUSED,
        maintenance.start_preamble_index,
        "Start preamble index",
        scope,
        report,
    );
    ok &= check_range(1, 64, maintenance.num_preamble_indices, "Number of preamble indices", scope, report);
    ok
}

/// Validates a PUSCH PDU of an UL_TTI.request.
///
/// The data, UCI, PTRS and DFT-s-OFDM sub-records are gated by their `pdu_bitmap` bits.
pub fn validate_pusch_pdu(pdu: &PuschPdu, message: MessageKind, report: &mut ValidationReport) -> bool {
    let scope = Scope::pdu(message, PduKind::Pusch);
    let mut ok = true;

    ok &= check_range(1, 275, pdu.bwp_size, "BWP size", scope, report);
    ok &= check_range(0, 274, pdu.bwp_start, "BWP start", scope, report);
    ok &= check_range(0, 4, pdu.scs, "Subcarrier spacing", scope, report);
    ok &= check_range(0, 1, pdu.cyclic_prefix, "Cyclic prefix", scope, report);
    ok &= check_one_of(PUSCH_QAM_MOD_ORDERS, pdu.qam_mod_order, "QAM modulation order", scope, report);
    ok &= check_range(0, 31, pdu.mcs_index, "MCS index", scope, report);
    ok &= check_range(0, 4, pdu.mcs_table, "MCS table", scope, report);
    ok &= check_range(0, 1, pdu.transform_precoding, "Transform precoding", scope, report);
    ok &= check_range(0, 1023, pdu.nid_pusch, "NID PUSCH", scope, report);
    ok &= check_range(1, 4, pdu.num_layers, "Number of layers", scope, report);
    ok &= check_range(0, 16383, pdu.ul_dmrs_symb_pos, "DMRS symbol position", scope, report);
    ok &= check_range(0, 1, pdu.dmrs_config_type, "DMRS config type", scope, report);
    ok &= check_range(0, 1007, pdu.pusch_dmrs_identity, "PUSCH DMRS identity", scope, report);
    ok &= check_range(0, 1, pdu.nscid, "NSCID", scope, report);
    ok &= check_range(1, 3, pdu.num_dmrs_cdm_grps_no_data, "Number of DMRS CDM groups without data", scope, report);
    ok &= check_range(0, 4095, pdu.dmrs_ports, "DMRS ports", scope, report);
    ok &= check_range(0, 1, pdu.resource_alloc, "Resource allocation type", scope, report);
    ok &= check_range(0, 274, pdu.rb_start, "RB start", scope, report);
    ok &= check_range(1, 275, pdu.rb_size, "RB size", scope, report);
    ok &= check_range(0, 0, pdu.vrb_to_prb_mapping, "VRB-to-PRB mapping", scope, report);
    ok &= check_range(0, 1, pdu.intra_slot_frequency_hopping, "Intra-slot frequency hopping", scope, report);
    ok &= check_range(0, 4095, pdu.tx_direct_current_location, "TX direct current location", scope, report);
    ok &= check_range(0, 1, pdu.uplink_frequency_shift_7p5khz, "Uplink frequency shift 7p5kHz", scope, report);
    ok &= check_range(0, 13, pdu.start_symbol_index, "Start symbol index", scope, report);
    ok &= check_range(1, 14, pdu.nr_of_symbols, "Number of symbols", scope, report);

    if pdu.pdu_bitmap & pusch_bitmap::DATA != 0 {
        let data = &pdu.data;
        ok &= check_range(0, 3, data.rv_index, "Redundancy version index", scope, report);
        ok &= check_range(0, 15, data.harq_process_id, "HARQ process ID", scope, report);
        ok &= check_range(0, 1, data.new_data, "New data indicator", scope, report);
    }

    if pdu.pdu_bitmap & pusch_bitmap::UCI != 0 {
        let uci = &pdu.uci;
        ok &= check_range(0, MAX_UCI_BIT_LENGTH, uci.harq_ack_bit_length, "HARQ ACK bit length", scope, report);
        ok &= check_range(0, MAX_UCI_BIT_LENGTH, uci.csi_part1_bit_length, "CSI part 1 bit length", scope, report);
        ok &= check_range(0, 3, uci.alpha_scaling, "Alpha scaling", scope, report);
        ok &= check_range(0, 15, uci.beta_offset_harq_ack, "Beta offset HARQ ACK", scope, report);
        ok &= check_range(0, 18, uci.beta_offset_csi1, "Beta offset CSI part 1", scope, report);
        ok &= check_range(0, 18, uci.beta_offset_csi2, "Beta offset CSI part 2", scope, report);
    }

    if pdu.pdu_bitmap & pusch_bitmap::PTRS != 0 {
        let ptrs = &pdu.ptrs;
        ok &= check_range(1, 2, len_value(ptrs.port_info.len()), "Number of PTRS ports", scope, report);
        for port in &ptrs.port_info {
            ok &= check_range(0, 11, port.ptrs_dmrs_port, "PTRS DMRS port", scope, report);
            ok &= check_range(0, 11, port.ptrs_re_offset, "PTRS RE offset", scope, report);
        }
        ok &= check_range(0, 2, ptrs.ptrs_time_density, "PTRS time density", scope, report);
        ok &= check_range(0, 1, ptrs.ptrs_freq_density, "PTRS frequency density", scope, report);
        ok &= check_range(0, 3, ptrs.ul_ptrs_power, "UL PTRS power", scope, report);
    }

    if pdu.pdu_bitmap & pusch_bitmap::DFTS_OFDM != 0 {
        let dfts = &pdu.dfts_ofdm;
        ok &= check_range(0, 29, dfts.low_papr_group_number, "Low PAPR group number", scope, report);
        ok &= check_range(0, 1007, dfts.low_papr_sequence_number, "Low PAPR sequence number", scope, report);
        ok &= check_range(1, 8, dfts.ul_ptrs_sample_density, "UL PTRS sample density", scope, report);
        ok &= check_range(
            1,
            4,
            dfts.ul_ptrs_time_density_transform_precoding,
            "UL PTRS time density transform precoding",
            scope,
            report,
        );
    }

    let maintenance = &pdu.maintenance;
    ok &= check_range(0, 2, maintenance.pusch_trans_type, "PUSCH transmission type", scope, report);
    if maintenance.pusch_trans_type == 1 {
        ok &= check_range(
            0,
            274,
            maintenance.delta_bwp0_start_from_active_bwp,
            "Delta BWP0 start from active BWP",
            scope,
            report,
        );
    }
    if matches!(maintenance.pusch_trans_type, 1 | 2) {
        ok &= check_range(1, 275, maintenance.initial_ul_bwp_size, "Initial UL BWP size", scope, report);
    }
    ok &= check_range(0, 2, maintenance.group_or_sequence_hopping, "Group or sequence hopping", scope, report);
    ok &= check_range(0, 274, maintenance.pusch_second_hop_prb, "PUSCH second hop PRB", scope, report);
    ok &= check_range(1, 2, maintenance.ldpc_base_graph, "LDPC base graph", scope, report);
    ok
}

/// Validates a PUCCH PDU of an UL_TTI.request.
///
/// Formats 0 to 4 share one PDU layout but constrain it differently: symbol count, PRB size,
/// SR/HARQ/CSI bit lengths and the maximum code rate all take their legal range from
/// `format_type`, and several fields only exist for some formats. Format-independent fields are
/// checked first; an out-of-range format is reported once and the format-dependent fields are
/// then skipped.
pub fn validate_pucch_pdu(pdu: &PucchPdu, message: MessageKind, report: &mut ValidationReport) -> bool {
    let scope = Scope::pdu(message, PduKind::Pucch);
    let mut ok = true;

    ok &= check_range(0, 4, pdu.format_type, "Format type", scope, report);
    ok &= check_range(0, 3, pdu.multi_slot_tx_indicator, "Multi slot TX indicator", scope, report);
    ok &= check_range(0, 1, pdu.pi2_bpsk, "Pi/2 BPSK", scope, report);
    ok &= check_range(1, 275, pdu.bwp_size, "BWP size", scope, report);
    ok &= check_range(0, 274, pdu.bwp_start, "BWP start", scope, report);
    ok &= check_range(0, 4, pdu.scs, "Subcarrier spacing", scope, report);
    ok &= check_range(0, 1, pdu.cyclic_prefix, "Cyclic prefix", scope, report);
    ok &= check_range(0, 274, pdu.prb_start, "PRB start", scope, report);
    ok &= check_range(0, 13, pdu.start_symbol_index, "Start symbol index", scope, report);
    ok &= check_range(0, 1, pdu.freq_hop_flag, "Frequency hopping flag", scope, report);
    ok &= check_range(0, 274, pdu.second_hop_prb, "Second hop PRB", scope, report);
    ok &= check_range(0, 2, pdu.pucch_group_hopping, "PUCCH group hopping", scope, report);
    ok &= check_range(0, 1023, pdu.nid_pucch_hopping, "NID PUCCH hopping", scope, report);
    ok &= check_range(0, 4, pdu.maintenance.ul_bwp_id, "UL BWP ID", scope, report);

    let Some(limits) = PucchFormatLimits::for_format(pdu.format_type) else {
        return false;
    };

    ok &= check_range(1, limits.max_prb_size, pdu.prb_size, "PRB size", scope, report);
    ok &= check_range(limits.min_symbols, limits.max_symbols, pdu.nr_of_symbols, "Number of symbols", scope, report);

    let format = pdu.format_type;
    if matches!(format, pucch_format::FORMAT_0 | pucch_format::FORMAT_1) {
        ok &= check_range(0, 11, pdu.initial_cyclic_shift, "Initial cyclic shift", scope, report);
    } else {
        ok &= check_range(0, 1023, pdu.nid_pucch_scrambling, "NID PUCCH scrambling", scope, report);
    }
    if format == pucch_format::FORMAT_1 {
        ok &= check_range(0, 6, pdu.time_domain_occ_index, "Time domain OCC index", scope, report);
    }
    if format == pucch_format::FORMAT_4 {
        ok &= check_range(0, 3, pdu.pre_dft_occ_idx, "Pre-DFT OCC index", scope, report);
        ok &= check_one_of(&[2, 4], pdu.pre_dft_occ_len, "Pre-DFT OCC length", scope, report);
        ok &= check_range(0, 9, pdu.m0_pucch_dmrs_cyclic_shift, "M0 PUCCH DMRS cyclic shift", scope, report);
    }
    if matches!(format, pucch_format::FORMAT_3 | pucch_format::FORMAT_4) {
        ok &= check_range(0, 1, pdu.add_dmrs_flag, "Additional DMRS flag", scope, report);
    }

    ok &= check_range(0, limits.max_sr_bits, pdu.sr_bit_len, "SR bit length", scope, report);
    ok &= check_range(0, limits.max_harq_bits, pdu.bit_len_harq, "HARQ bit length", scope, report);
    ok &= check_range(0, limits.max_csi_part1_bits, pdu.csi_part1_bit_length, "CSI part 1 bit length", scope, report);

    let (min_rate, max_rate) = limits.max_code_rate;
    ok &= check_range(min_rate, max_rate, pdu.maintenance.max_code_rate, "Maximum code rate", scope, report);
    ok
}

/// Per-format ranges of the PUCCH fields whose legality depends on the format.
struct PucchFormatLimits {
    max_prb_size: i64,
    min_symbols: i64,
    max_symbols: i64,
    max_sr_bits: i64,
    max_harq_bits: i64,
    max_csi_part1_bits: i64,
    max_code_rate: (i64, i64),
}

impl PucchFormatLimits {
    fn for_format(format: u8) -> Option<Self> {
        const SHORT: (i64, i64) = (1, 2);
        const LONG: (i64, i64) = (4, 14);
        let (max_prb_size, (min_symbols, max_symbols)) = match format {
            pucch_format::FORMAT_0 => (1, SHORT),
            pucch_format::FORMAT_1 => (1, LONG),
            pucch_format::FORMAT_2 => (16, SHORT),
            pucch_format::FORMAT_3 => (16, LONG),
            pucch_format::FORMAT_4 => (1, LONG),
            _ => return None,
        };
        let small_payload = matches!(format, pucch_format::FORMAT_0 | pucch_format::FORMAT_1);
        Some(if small_payload {
            PucchFormatLimits {
                max_prb_size,
                min_symbols,
                max_symbols,
                max_sr_bits: 1,
                max_harq_bits: 2,
                max_csi_part1_bits: 0,
                max_code_rate: (sentinel::U8_UNUSED, sentinel::U8_UNUSED),
            }
        } else {
            PucchFormatLimits {
                max_prb_size,
                min_symbols,
                max_symbols,
                max_sr_bits: 4,
                max_harq_bits: MAX_UCI_BIT_LENGTH,
                max_csi_part1_bits: MAX_UCI_BIT_LENGTH,
                max_code_rate: (0, 7),
            }
        })
    }
}
