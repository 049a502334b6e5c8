//! Benchmark: validate a busy slot (DL_TTI + UL_TTI + UCI.indication), once fully valid and
//! once with violations in every PDU so the report saturates.
//!
//! With `--features check_profile`, the per-property failure counters of the invalid run are
//! printed to stderr.

#[cfg(feature = "check_profile")]
use fapi_validator::{get_check_profile, reset_check_profile};
use fapi_validator::pdu::*;
use fapi_validator::{
    validate_dl_tti_request, validate_message, validate_uci_indication, validate_ul_tti_request, DlTtiPdu,
    DlTtiRequest, FapiMessage, PduGroup, UciIndication, UciPdu, UlTtiPdu, UlTtiRequest,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const PDUS_PER_KIND: usize = 16;
const SSS_UNUSED: i16 = -32768;

fn dl_tti_request() -> DlTtiRequest {
    let pdcch = PdcchPdu {
        coreset_bwp_size: 48,
        duration_symbols: 1,
        reg_bundle_size: 6,
        dl_dci: vec![DlDci {
            aggregation_level: 4,
            payload_size_bits: 40,
            payload: vec![0; 5],
            maintenance: DciMaintenance { pdcch_dmrs_power_offset_profile_sss: SSS_UNUSED, ..Default::default() },
            ..Default::default()
        }],
        ..Default::default()
    };
    let pdsch = PdschPdu {
        bwp_size: 273,
        codewords: vec![PdschCodeword { qam_mod_order: 2, tb_size: 1024, ..Default::default() }],
        num_layers: 1,
        num_dmrs_cdm_grps_no_data: 1,
        rb_size: 10,
        start_symbol_index: 2,
        nr_of_symbols: 12,
        power_control_offset_profile_nr: 8,
        power_control_offset_ss_profile_nr: 1,
        maintenance: PdschMaintenance {
            ldpc_base_graph: 1,
            pdsch_dmrs_power_offset_profile_sss: SSS_UNUSED,
            pdsch_data_power_offset_profile_sss: SSS_UNUSED,
            ..Default::default()
        },
        ..Default::default()
    };
    let csi_rs = CsiRsPdu {
        num_rbs: 52,
        row: 1,
        symb_l1: 8,
        power_control_offset_profile_nr: 8,
        power_control_offset_ss_profile_nr: 1,
        maintenance: CsiRsMaintenance { csi_rs_power_offset_profile_sss: SSS_UNUSED, ..Default::default() },
        ..Default::default()
    };
    let ssb = SsbPdu {
        phys_cell_id: 500,
        maintenance: SsbMaintenance { lmax: 8, beta_pss_profile_sss: SSS_UNUSED, ..Default::default() },
        ..Default::default()
    };
    DlTtiRequest {
        sfn: 512,
        slot: 7,
        pdus: vec![DlTtiPdu::Pdcch(pdcch), DlTtiPdu::Pdsch(pdsch), DlTtiPdu::CsiRs(csi_rs), DlTtiPdu::Ssb(ssb)],
        pdu_groups: Vec::new(),
    }
}

fn ul_tti_request() -> UlTtiRequest {
    let prach = PrachPdu {
        num_prach_ocas: 1,
        num_cs: 13,
        maintenance: PrachMaintenance {
            num_fd_ra: 1,
            start_preamble_index: 255,
            num_preamble_indices: 64,
            ..Default::default()
        },
        ..Default::default()
    };
    let pusch = PuschPdu {
        pdu_bitmap: pusch_bitmap::DATA,
        bwp_size: 273,
        qam_mod_order: 2,
        num_layers: 1,
        num_dmrs_cdm_grps_no_data: 2,
        rb_size: 10,
        nr_of_symbols: 14,
        data: PuschData { harq_process_id: 3, new_data: 1, tb_size: 1024, num_cb: 1, ..Default::default() },
        maintenance: PuschMaintenance { ldpc_base_graph: 1, ..Default::default() },
        ..Default::default()
    };
    let pucch = PucchPdu {
        bwp_size: 273,
        format_type: pucch_format::FORMAT_1,
        prb_size: 1,
        nr_of_symbols: 14,
        bit_len_harq: 1,
        maintenance: PucchMaintenance { max_code_rate: 255, ..Default::default() },
        ..Default::default()
    };
    UlTtiRequest {
        sfn: 512,
        slot: 7,
        pdus: vec![UlTtiPdu::Prach(prach), UlTtiPdu::Pusch(pusch), UlTtiPdu::Pucch(pucch)],
        pdu_groups: Vec::new(),
    }
}

fn uci_indication() -> UciIndication {
    let decoded = |bits: u16| UciPart {
        detection_status: detection_status::CRC_PASS,
        expected_bit_length: bits,
        payload: BitPayload::zeros(usize::from(bits)),
    };
    let pusch = UciPuschPdu { pdu_bitmap: uci_pusch_bitmap::HARQ, harq: decoded(2), ..Default::default() };
    let format01 = UciPucchFormat01Pdu {
        pdu_bitmap: uci_pucch_bitmap::SR | uci_pucch_bitmap::HARQ,
        sr: SrPucchFormat01 { sr_indication: 1, sr_confidence_level: 255 },
        harq: HarqPucchFormat01 { harq_confidence_level: 0, harq_values: vec![1] },
        ..Default::default()
    };
    let format234 = UciPucchFormat234Pdu {
        pdu_bitmap: uci_pucch_bitmap::HARQ | uci_pucch_bitmap::CSI_PART1,
        harq: decoded(4),
        csi_part1: decoded(10),
        ..Default::default()
    };
    UciIndication {
        sfn: 512,
        slot: 7,
        pdus: vec![UciPdu::Pusch(pusch), UciPdu::PucchFormat01(format01), UciPdu::PucchFormat234(format234)],
    }
}

fn busy_dl_tti() -> DlTtiRequest {
    let mut msg = dl_tti_request();
    let pdus = msg.pdus.clone();
    for _ in 1..PDUS_PER_KIND {
        msg.pdus.extend(pdus.iter().cloned());
    }
    msg.pdu_groups = (0..PDUS_PER_KIND as u16).map(|i| PduGroup { pdu_indices: vec![i * 4, i * 4 + 1] }).collect();
    msg
}

fn busy_ul_tti() -> UlTtiRequest {
    let mut msg = ul_tti_request();
    let pdus = msg.pdus.clone();
    for _ in 1..PDUS_PER_KIND {
        msg.pdus.extend(pdus.iter().cloned());
    }
    msg
}

fn broken_dl_tti() -> DlTtiRequest {
    let mut msg = busy_dl_tti();
    for pdu in &mut msg.pdus {
        match pdu {
            DlTtiPdu::Pdcch(p) => p.dl_dci[0].aggregation_level = 3,
            DlTtiPdu::Pdsch(p) => p.maintenance.ldpc_base_graph = 0,
            DlTtiPdu::CsiRs(p) => p.num_rbs = 25,
            DlTtiPdu::Ssb(p) => p.maintenance.lmax = 16,
        }
    }
    msg
}

fn broken_ul_tti() -> UlTtiRequest {
    let mut msg = busy_ul_tti();
    for pdu in &mut msg.pdus {
        match pdu {
            UlTtiPdu::Prach(p) => p.num_prach_ocas = 0,
            UlTtiPdu::Pusch(p) => p.num_layers = 5,
            UlTtiPdu::Pucch(p) => p.nr_of_symbols = 2,
        }
    }
    msg
}

fn bench_validate(c: &mut Criterion) {
    let dl = busy_dl_tti();
    let ul = busy_ul_tti();
    let mut uci = uci_indication();
    let uci_pdus: Vec<UciPdu> = uci.pdus.clone();
    for _ in 1..PDUS_PER_KIND {
        uci.pdus.extend(uci_pdus.iter().cloned());
    }

    c.bench_function("validate_dl_tti_valid", |b| {
        b.iter(|| validate_dl_tti_request(black_box(&dl)))
    });
    c.bench_function("validate_ul_tti_valid", |b| {
        b.iter(|| validate_ul_tti_request(black_box(&ul)))
    });
    c.bench_function("validate_uci_valid", |b| {
        b.iter(|| validate_uci_indication(black_box(&uci)))
    });

    let slot = [
        FapiMessage::DlTti(broken_dl_tti()),
        FapiMessage::UlTti(broken_ul_tti()),
        FapiMessage::Uci(uci),
    ];

    #[cfg(feature = "check_profile")]
    reset_check_profile();

    c.bench_function("validate_slot_with_violations", |b| {
        b.iter(|| {
            for msg in black_box(&slot) {
                let _ = validate_message(msg);
            }
        })
    });

    #[cfg(feature = "check_profile")]
    {
        let mut counts: Vec<_> = get_check_profile().into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        eprintln!("check profile (property: failures):");
        for (property, n) in counts {
            eprintln!("  {property}: {n}");
        }
    }
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
