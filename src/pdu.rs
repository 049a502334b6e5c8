//! Already-decoded PDU views consumed by the validators.
//!
//! Selector fields (formats, mapping types, detection statuses) stay raw integers so that any
//! value coming off the wire, legal or not, is representable. Named constants below give the
//! legal values their SCF-222 meaning. Fields whose whole representation is legal are kept
//! where they help identify a PDU but are never checked.

/// Presence bitmap bits of the PDSCH PDU.
pub mod pdsch_bitmap {
    pub const PTRS: u16 = 1 << 0;
    pub const CBG_RETX_CTRL: u16 = 1 << 1;
}

/// Presence bitmap bits of the PUSCH PDU.
pub mod pusch_bitmap {
    pub const DATA: u16 = 1 << 0;
    pub const UCI: u16 = 1 << 1;
    pub const PTRS: u16 = 1 << 2;
    pub const DFTS_OFDM: u16 = 1 << 3;
}

/// Presence bitmap bits of the UCI-over-PUSCH PDU (bit 0 is unused).
pub mod uci_pusch_bitmap {
    pub const HARQ: u8 = 1 << 1;
    pub const CSI_PART1: u8 = 1 << 2;
    pub const CSI_PART2: u8 = 1 << 3;
}

/// Presence bitmap bits of the UCI-over-PUCCH PDUs.
pub mod uci_pucch_bitmap {
    pub const SR: u8 = 1 << 0;
    pub const HARQ: u8 = 1 << 1;
    /// Formats 2/3/4 only.
    pub const CSI_PART1: u8 = 1 << 2;
    /// Formats 2/3/4 only.
    pub const CSI_PART2: u8 = 1 << 3;
}

/// PDCCH CCE-to-REG mapping types.
pub mod cce_reg_mapping {
    pub const NON_INTERLEAVED: u8 = 0;
    pub const INTERLEAVED: u8 = 1;
}

/// PUCCH formats as carried in `PucchPdu::format_type`.
pub mod pucch_format {
    pub const FORMAT_0: u8 = 0;
    pub const FORMAT_1: u8 = 1;
    pub const FORMAT_2: u8 = 2;
    pub const FORMAT_3: u8 = 3;
    pub const FORMAT_4: u8 = 4;
}

/// UCI detection outcomes.
pub mod detection_status {
    pub const CRC_PASS: u8 = 1;
    pub const CRC_FAILURE: u8 = 2;
    pub const DTX: u8 = 3;
    /// UCI detected (small block lengths without CRC).
    pub const NO_DTX: u8 = 4;
    /// The PHY did not run DTX detection; the decoded bits are still reported.
    pub const DTX_NOT_CHECKED: u8 = 5;

    /// Statuses after which no payload is reported.
    pub const fn is_failure(status: u8) -> bool {
        matches!(status, CRC_FAILURE | DTX)
    }
}

/// SSB BCH payload origins.
pub mod bch_payload_flag {
    pub const MAC_FULL: u8 = 0;
    pub const MAC_PARTIAL: u8 = 1;
    pub const PHY_FULL: u8 = 2;
}

/// RX_Data PDU tags.
pub mod rx_data_tag {
    pub const PAYLOAD: u8 = 0;
    pub const OFFSET: u8 = 1;
    pub const CUSTOM: u8 = 2;
}

/// Sentinels for "not used / use the other field" encodings.
pub mod sentinel {
    pub const PROFILE_SSS_UNUSED: i64 = -32768;
    pub const U8_UNUSED: i64 = 255;
    pub const U16_UNUSED: i64 = 65535;
    pub const U32_UNUSED: i64 = 0xFFFF_FFFF;
    pub const PDCCH_PROFILE_NR_UNUSED: i64 = -127;
}

/// Bit-granular UCI payload as realized by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitPayload {
    bytes: Vec<u8>,
    len: usize,
}

impl BitPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bits(bits: &[bool]) -> Self {
        let mut payload = BitPayload { bytes: vec![0; bits.len().div_ceil(8)], len: bits.len() };
        for (i, &bit) in bits.iter().enumerate() {
            if bit {
                payload.bytes[i / 8] |= 1 << (i % 8);
            }
        }
        payload
    }

    /// A payload of `len` zero bits.
    pub fn zeros(len: usize) -> Self {
        BitPayload { bytes: vec![0; len.div_ceil(8)], len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bit(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        self.bytes.get(index / 8).map(|b| (b >> (index % 8)) & 1 != 0)
    }
}

// --- DL_TTI.request / UL_DCI.request PDUs ---

/// PDCCH PDU: one CORESET and the DCIs it carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdcchPdu {
    pub coreset_bwp_size: u16,
    pub coreset_bwp_start: u16,
    pub scs: u8,
    pub cyclic_prefix: u8,
    pub start_symbol_index: u8,
    pub duration_symbols: u8,
    /// Bitmap of 6-RB groups; every value is legal.
    pub freq_domain_resource: [u8; 6],
    pub cce_reg_mapping_type: u8,
    pub reg_bundle_size: u8,
    pub interleaver_size: u8,
    pub coreset_type: u8,
    pub shift_index: u16,
    pub precoder_granularity: u8,
    pub dl_dci: Vec<DlDci>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DlDci {
    pub rnti: u16,
    pub nid_pdcch_data: u16,
    pub nid_pdcch_dmrs: u16,
    pub nrnti_pdcch_data: u16,
    pub cce_index: u8,
    pub aggregation_level: u8,
    pub beta_pdcch_1_0: u8,
    /// dB in `[-8, 8]`, or -127 when the SSS profile in the maintenance record applies.
    pub power_control_offset_ss_profile_nr: i8,
    pub payload_size_bits: u16,
    pub payload: Vec<u8>,
    pub maintenance: DciMaintenance,
}

/// PDCCH maintenance v3 parameters of one DCI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DciMaintenance {
    pub dci_index: u16,
    pub collocated_al16_candidate: u8,
    /// -32768 when the NR profile applies.
    pub pdcch_dmrs_power_offset_profile_sss: i16,
    pub pdcch_data_power_offset_profile_sss: i16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdschPdu {
    pub pdu_bitmap: u16,
    pub rnti: u16,
    pub pdu_index: u16,
    pub bwp_size: u16,
    pub bwp_start: u16,
    pub scs: u8,
    pub cyclic_prefix: u8,
    pub codewords: Vec<PdschCodeword>,
    pub nid_pdsch: u16,
    pub num_layers: u8,
    pub transmission_scheme: u8,
    pub ref_point: u8,
    pub dl_dmrs_symb_pos: u16,
    pub dmrs_config_type: u8,
    pub pdsch_dmrs_scrambling_id: u16,
    pub nscid: u8,
    pub num_dmrs_cdm_grps_no_data: u8,
    pub dmrs_ports: u16,
    pub resource_alloc: u8,
    pub rb_start: u16,
    pub rb_size: u16,
    pub vrb_to_prb_mapping: u8,
    pub start_symbol_index: u8,
    pub nr_of_symbols: u8,
    pub ptrs: PdschPtrs,
    pub cbg_retx_ctrl: PdschCbgRetxCtrl,
    /// 0..=23 maps to -8..=15 dB; 255 when the SSS profile applies.
    pub power_control_offset_profile_nr: u8,
    /// 0..=3 maps to -3, 0, 3, 6 dB; 255 when the SSS profile applies.
    pub power_control_offset_ss_profile_nr: u8,
    pub is_last_cb_present: u8,
    pub is_inline_tb_crc: u8,
    pub dl_tb_crc_cw: [u32; 2],
    pub maintenance: PdschMaintenance,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdschCodeword {
    pub target_code_rate: u16,
    pub qam_mod_order: u8,
    pub mcs_index: u8,
    pub mcs_table: u8,
    pub rv_index: u8,
    pub tb_size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdschPtrs {
    pub ptrs_port_index: u8,
    pub ptrs_time_density: u8,
    pub ptrs_freq_density: u8,
    pub ptrs_re_offset: u8,
    pub n_epre_ratio_of_pdsch_to_ptrs: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdschCbgRetxCtrl {
    pub max_num_cbg_per_tb: u8,
    pub cbg_tx_information: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdschMaintenance {
    pub trans_type: u8,
    pub coreset_start_point: u16,
    pub initial_dl_bwp_size: u16,
    pub ldpc_base_graph: u8,
    pub tb_size_lbrm_bytes: u32,
    pub tb_crc_required: u8,
    pub pdsch_dmrs_power_offset_profile_sss: i16,
    pub pdsch_data_power_offset_profile_sss: i16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsiRsPdu {
    pub scs: u8,
    pub cyclic_prefix: u8,
    pub start_rb: u16,
    pub num_rbs: u16,
    pub csi_type: u8,
    pub row: u8,
    pub freq_domain: u16,
    pub symb_l0: u8,
    pub symb_l1: u8,
    pub cdm_type: u8,
    pub freq_density: u8,
    pub scramb_id: u16,
    pub power_control_offset_profile_nr: u8,
    pub power_control_offset_ss_profile_nr: u8,
    pub maintenance: CsiRsMaintenance,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsiRsMaintenance {
    pub csi_rs_pdu_index: u16,
    pub csi_rs_power_offset_profile_sss: i16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SsbPdu {
    pub phys_cell_id: u16,
    /// 0 or 1 (0 dB / 3 dB); 255 when the SSS profile applies.
    pub beta_pss_profile_nr: u8,
    pub ssb_block_index: u8,
    pub ssb_subcarrier_offset: u8,
    pub ssb_offset_point_a: u16,
    pub bch_payload_flag: u8,
    /// MAC-generated payload; used when the flag is not [`bch_payload_flag::PHY_FULL`].
    pub bch_payload: u32,
    /// PHY-generated MIB parameters; used when the flag is [`bch_payload_flag::PHY_FULL`].
    pub mib: SsbMib,
    pub maintenance: SsbMaintenance,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SsbMib {
    pub dmrs_type_a_position: u8,
    pub pdcch_config_sib1: u8,
    pub cell_barred: u8,
    pub intra_freq_reselection: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SsbMaintenance {
    pub ssb_pdu_index: u16,
    pub case: u8,
    pub scs: u8,
    pub lmax: u8,
    pub beta_pss_profile_sss: i16,
    pub ss_pbch_block_power_scaling: i16,
}

// --- UL_TTI.request PDUs ---

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrachPdu {
    pub phys_cell_id: u16,
    pub num_prach_ocas: u8,
    pub prach_format: u8,
    pub index_fd_ra: u8,
    pub prach_start_symbol: u8,
    pub num_cs: u16,
    pub maintenance: PrachMaintenance,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrachMaintenance {
    pub handle: u32,
    pub prach_config_scope: u8,
    pub prach_res_config_index: u16,
    pub num_fd_ra: u8,
    /// 255 when all preambles are used.
    pub start_preamble_index: u8,
    pub num_preamble_indices: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuschPdu {
    pub pdu_bitmap: u16,
    pub rnti: u16,
    pub handle: u32,
    pub bwp_size: u16,
    pub bwp_start: u16,
    pub scs: u8,
    pub cyclic_prefix: u8,
    pub target_code_rate: u16,
    pub qam_mod_order: u8,
    pub mcs_index: u8,
    pub mcs_table: u8,
    pub transform_precoding: u8,
    pub nid_pusch: u16,
    pub num_layers: u8,
    pub ul_dmrs_symb_pos: u16,
    pub dmrs_config_type: u8,
    pub pusch_dmrs_scrambling_id: u16,
    pub pusch_dmrs_identity: u16,
    pub nscid: u8,
    pub num_dmrs_cdm_grps_no_data: u8,
    pub dmrs_ports: u16,
    pub resource_alloc: u8,
    pub rb_start: u16,
    pub rb_size: u16,
    pub vrb_to_prb_mapping: u8,
    pub intra_slot_frequency_hopping: u8,
    pub tx_direct_current_location: u16,
    pub uplink_frequency_shift_7p5khz: u8,
    pub start_symbol_index: u8,
    pub nr_of_symbols: u8,
    pub data: PuschData,
    pub uci: PuschUci,
    pub ptrs: PuschPtrs,
    pub dfts_ofdm: PuschDftsOfdm,
    pub maintenance: PuschMaintenance,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuschData {
    pub rv_index: u8,
    pub harq_process_id: u8,
    pub new_data: u8,
    pub tb_size: u32,
    pub num_cb: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuschUci {
    pub harq_ack_bit_length: u16,
    pub csi_part1_bit_length: u16,
    pub flag_csi_part2: u16,
    pub alpha_scaling: u8,
    pub beta_offset_harq_ack: u8,
    pub beta_offset_csi1: u8,
    pub beta_offset_csi2: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuschPtrs {
    pub port_info: Vec<PuschPtrsPort>,
    pub ptrs_time_density: u8,
    pub ptrs_freq_density: u8,
    pub ul_ptrs_power: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuschPtrsPort {
    pub ptrs_port_index: u16,
    pub ptrs_dmrs_port: u8,
    pub ptrs_re_offset: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuschDftsOfdm {
    pub low_papr_group_number: u8,
    pub low_papr_sequence_number: u16,
    pub ul_ptrs_sample_density: u8,
    pub ul_ptrs_time_density_transform_precoding: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuschMaintenance {
    pub pusch_trans_type: u8,
    pub delta_bwp0_start_from_active_bwp: u16,
    pub initial_ul_bwp_size: u16,
    pub group_or_sequence_hopping: u8,
    pub pusch_second_hop_prb: u16,
    pub ldpc_base_graph: u8,
    pub tb_size_lbrm_bytes: u32,
}

/// PUCCH PDU for formats 0 to 4; which fields matter depends on `format_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PucchPdu {
    pub rnti: u16,
    pub handle: u32,
    pub bwp_size: u16,
    pub bwp_start: u16,
    pub scs: u8,
    pub cyclic_prefix: u8,
    pub format_type: u8,
    pub multi_slot_tx_indicator: u8,
    pub pi2_bpsk: u8,
    pub prb_start: u16,
    pub prb_size: u16,
    pub start_symbol_index: u8,
    pub nr_of_symbols: u8,
    pub freq_hop_flag: u8,
    pub second_hop_prb: u16,
    pub pucch_group_hopping: u8,
    pub nid_pucch_hopping: u16,
    pub initial_cyclic_shift: u16,
    pub nid_pucch_scrambling: u16,
    pub time_domain_occ_index: u8,
    pub pre_dft_occ_idx: u8,
    pub pre_dft_occ_len: u8,
    pub add_dmrs_flag: u8,
    pub nid0_pucch_dmrs_scrambling: u16,
    pub m0_pucch_dmrs_cyclic_shift: u8,
    pub sr_bit_len: u8,
    pub bit_len_harq: u16,
    pub csi_part1_bit_length: u16,
    pub maintenance: PucchMaintenance,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PucchMaintenance {
    pub max_code_rate: u8,
    pub ul_bwp_id: u8,
}

// --- Indication PDUs ---

/// Uplink measurements reported alongside UCI and CRC results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UlMeasurements {
    /// 0.002 dB steps; every value is legal (-32768 is "invalid" and reported as such).
    pub ul_sinr_metric: i16,
    pub timing_advance_offset: u16,
    pub timing_advance_offset_ns: i16,
    pub rssi: u16,
    pub rsrp: u16,
}

/// HARQ, CSI part 1 or CSI part 2 report: what was expected and what was decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UciPart {
    pub detection_status: u8,
    pub expected_bit_length: u16,
    pub payload: BitPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UciPuschPdu {
    pub pdu_bitmap: u8,
    pub handle: u32,
    pub rnti: u16,
    pub measurements: UlMeasurements,
    pub harq: UciPart,
    pub csi_part1: UciPart,
    pub csi_part2: UciPart,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SrPucchFormat01 {
    pub sr_indication: u8,
    pub sr_confidence_level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarqPucchFormat01 {
    pub harq_confidence_level: u8,
    pub harq_values: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UciPucchFormat01Pdu {
    pub pdu_bitmap: u8,
    pub handle: u32,
    pub rnti: u16,
    /// 0 = format 0, 1 = format 1.
    pub pucch_format: u8,
    pub measurements: UlMeasurements,
    pub sr: SrPucchFormat01,
    pub harq: HarqPucchFormat01,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SrPucchFormat234 {
    pub sr_bit_len: u8,
    pub payload: BitPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UciPucchFormat234Pdu {
    pub pdu_bitmap: u8,
    pub handle: u32,
    pub rnti: u16,
    /// 0 = format 2, 1 = format 3, 2 = format 4.
    pub pucch_format: u8,
    pub measurements: UlMeasurements,
    pub sr: SrPucchFormat234,
    pub harq: UciPart,
    pub csi_part1: UciPart,
    pub csi_part2: UciPart,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrcPdu {
    pub handle: u32,
    pub rnti: u16,
    /// 255 when the PUSCH was not scheduled by a random access response.
    pub rapid: u8,
    pub harq_id: u8,
    pub tb_crc_status: u8,
    pub num_cb: u16,
    /// One bit per code block, packed.
    pub cb_crc_status: Vec<u8>,
    pub measurements: UlMeasurements,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RxDataPdu {
    pub handle: u32,
    pub rnti: u16,
    pub rapid: u8,
    pub harq_id: u8,
    pub pdu_tag: u8,
    pub pdu_length: u32,
    /// Inline payload; only present for [`rx_data_tag::PAYLOAD`].
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RachOccasion {
    pub handle: u16,
    pub symbol_index: u8,
    pub slot_index: u8,
    pub ra_index: u8,
    pub avg_rssi: u32,
    pub rsrp: u16,
    pub avg_snr: u8,
    pub preambles: Vec<RachPreamble>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RachPreamble {
    pub preamble_index: u8,
    pub timing_advance_offset: u16,
    pub timing_advance_offset_ns: u32,
    pub preamble_pwr: u32,
    pub preamble_snr: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxDataPdu {
    pub pdu_length: u32,
    pub pdu_index: u16,
    pub cw_index: u8,
    pub tlvs: Vec<TxDataTlv>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxDataTlv {
    pub tag: u16,
    pub length: u32,
}
