//! PDU fuzz target: build DL/UL/UCI PDUs from arbitrary bytes and validate them.
//! Validation must never panic, and a message is `Ok` exactly when nothing was recorded.
//! Build with: cargo fuzz run pdu_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
mod build {
    use fapi_validator::pdu::*;
    use fapi_validator::{DlTtiPdu, DlTtiRequest, UciIndication, UciPdu, UlTtiPdu, UlTtiRequest};

    /// Reads fields off the input, yielding zeros once it is exhausted.
    pub struct Bytes<'a>(pub &'a [u8]);

    impl Bytes<'_> {
        pub fn u8(&mut self) -> u8 {
            match self.0.split_first() {
                Some((&b, rest)) => {
                    self.0 = rest;
                    b
                }
                None => 0,
            }
        }

        pub fn u16(&mut self) -> u16 {
            u16::from_le_bytes([self.u8(), self.u8()])
        }

        pub fn i16(&mut self) -> i16 {
            i16::from_le_bytes([self.u8(), self.u8()])
        }

        pub fn u32(&mut self) -> u32 {
            u32::from_le_bytes([self.u8(), self.u8(), self.u8(), self.u8()])
        }

        pub fn count(&mut self, max: u8) -> usize {
            usize::from(self.u8() % (max + 1))
        }

        pub fn bits(&mut self) -> BitPayload {
            let len = usize::from(self.u16() % 2048);
            BitPayload::zeros(len)
        }

        fn uci_part(&mut self) -> UciPart {
            UciPart { detection_status: self.u8(), expected_bit_length: self.u16(), payload: self.bits() }
        }

        fn measurements(&mut self) -> UlMeasurements {
            UlMeasurements {
                ul_sinr_metric: self.i16(),
                timing_advance_offset: self.u16(),
                timing_advance_offset_ns: self.i16(),
                rssi: self.u16(),
                rsrp: self.u16(),
            }
        }

        fn pdcch(&mut self) -> PdcchPdu {
            let mut pdu = PdcchPdu {
                coreset_bwp_size: self.u16(),
                coreset_bwp_start: self.u16(),
                scs: self.u8(),
                cyclic_prefix: self.u8(),
                start_symbol_index: self.u8(),
                duration_symbols: self.u8(),
                cce_reg_mapping_type: self.u8(),
                reg_bundle_size: self.u8(),
                interleaver_size: self.u8(),
                coreset_type: self.u8(),
                shift_index: self.u16(),
                precoder_granularity: self.u8(),
                ..PdcchPdu::default()
            };
            for _ in 0..self.count(3) {
                let dci = DlDci {
                    cce_index: self.u8(),
                    aggregation_level: self.u8(),
                    beta_pdcch_1_0: self.u8(),
                    power_control_offset_ss_profile_nr: self.u8() as i8,
                    payload_size_bits: self.u16(),
                    maintenance: DciMaintenance {
                        collocated_al16_candidate: self.u8(),
                        pdcch_dmrs_power_offset_profile_sss: self.i16(),
                        pdcch_data_power_offset_profile_sss: self.i16(),
                        ..DciMaintenance::default()
                    },
                    ..DlDci::default()
                };
                pdu.dl_dci.push(dci);
            }
            pdu
        }

        fn pdsch(&mut self) -> PdschPdu {
            let mut pdu = PdschPdu {
                pdu_bitmap: self.u16(),
                bwp_size: self.u16(),
                bwp_start: self.u16(),
                num_layers: self.u8(),
                rb_start: self.u16(),
                rb_size: self.u16(),
                nr_of_symbols: self.u8(),
                power_control_offset_profile_nr: self.u8(),
                power_control_offset_ss_profile_nr: self.u8(),
                ..PdschPdu::default()
            };
            pdu.ptrs.ptrs_time_density = self.u8();
            pdu.cbg_retx_ctrl.max_num_cbg_per_tb = self.u8();
            pdu.maintenance.trans_type = self.u8();
            pdu.maintenance.coreset_start_point = self.u16();
            pdu.maintenance.initial_dl_bwp_size = self.u16();
            pdu.maintenance.pdsch_data_power_offset_profile_sss = self.i16();
            pdu.maintenance.pdsch_dmrs_power_offset_profile_sss = self.i16();
            for _ in 0..self.count(3) {
                pdu.codewords.push(PdschCodeword {
                    qam_mod_order: self.u8(),
                    mcs_index: self.u8(),
                    ..PdschCodeword::default()
                });
            }
            pdu
        }

        fn csi_rs(&mut self) -> CsiRsPdu {
            CsiRsPdu {
                start_rb: self.u16(),
                num_rbs: self.u16(),
                row: self.u8(),
                power_control_offset_profile_nr: self.u8(),
                power_control_offset_ss_profile_nr: self.u8(),
                maintenance: CsiRsMaintenance { csi_rs_pdu_index: 0, csi_rs_power_offset_profile_sss: self.i16() },
                ..CsiRsPdu::default()
            }
        }

        fn ssb(&mut self) -> SsbPdu {
            let mut pdu = SsbPdu {
                phys_cell_id: self.u16(),
                beta_pss_profile_nr: self.u8(),
                bch_payload_flag: self.u8(),
                ..SsbPdu::default()
            };
            pdu.mib.cell_barred = self.u8();
            pdu.maintenance.lmax = self.u8();
            pdu.maintenance.beta_pss_profile_sss = self.i16();
            pdu
        }

        fn pusch(&mut self) -> PuschPdu {
            let mut pdu = PuschPdu {
                pdu_bitmap: self.u16(),
                bwp_size: self.u16(),
                qam_mod_order: self.u8(),
                num_layers: self.u8(),
                rb_size: self.u16(),
                ..PuschPdu::default()
            };
            for _ in 0..self.count(3) {
                pdu.ptrs.port_info.push(PuschPtrsPort {
                    ptrs_port_index: self.u16(),
                    ptrs_dmrs_port: self.u8(),
                    ptrs_re_offset: self.u8(),
                });
            }
            pdu.uci.harq_ack_bit_length = self.u16();
            pdu.dfts_ofdm.ul_ptrs_sample_density = self.u8();
            pdu.maintenance.pusch_trans_type = self.u8();
            pdu.maintenance.initial_ul_bwp_size = self.u16();
            pdu
        }

        fn pucch(&mut self) -> PucchPdu {
            let mut pdu = PucchPdu {
                format_type: self.u8(),
                prb_size: self.u16(),
                nr_of_symbols: self.u8(),
                initial_cyclic_shift: self.u16(),
                pre_dft_occ_len: self.u8(),
                sr_bit_len: self.u8(),
                bit_len_harq: self.u16(),
                csi_part1_bit_length: self.u16(),
                ..PucchPdu::default()
            };
            pdu.maintenance.max_code_rate = self.u8();
            pdu
        }

        pub fn dl_tti(&mut self) -> DlTtiRequest {
            let mut msg = DlTtiRequest { sfn: self.u16(), slot: self.u16(), ..DlTtiRequest::default() };
            for _ in 0..self.count(8) {
                let pdu = match self.u8() % 4 {
                    0 => DlTtiPdu::Pdcch(self.pdcch()),
                    1 => DlTtiPdu::Pdsch(self.pdsch()),
                    2 => DlTtiPdu::CsiRs(self.csi_rs()),
                    _ => DlTtiPdu::Ssb(self.ssb()),
                };
                msg.pdus.push(pdu);
            }
            msg
        }

        pub fn ul_tti(&mut self) -> UlTtiRequest {
            let mut msg = UlTtiRequest { sfn: self.u16(), slot: self.u16(), ..UlTtiRequest::default() };
            for _ in 0..self.count(8) {
                let pdu = match self.u8() % 3 {
                    0 => UlTtiPdu::Prach(PrachPdu {
                        num_prach_ocas: self.u8(),
                        num_cs: self.u16(),
                        ..PrachPdu::default()
                    }),
                    1 => UlTtiPdu::Pusch(self.pusch()),
                    _ => UlTtiPdu::Pucch(self.pucch()),
                };
                msg.pdus.push(pdu);
            }
            msg
        }

        pub fn uci(&mut self) -> UciIndication {
            let mut msg = UciIndication { sfn: self.u16(), slot: self.u16(), ..UciIndication::default() };
            for _ in 0..self.count(8) {
                let pdu = match self.u8() % 3 {
                    0 => UciPdu::Pusch(UciPuschPdu {
                        pdu_bitmap: self.u8(),
                        measurements: self.measurements(),
                        harq: self.uci_part(),
                        csi_part1: self.uci_part(),
                        csi_part2: self.uci_part(),
                        ..UciPuschPdu::default()
                    }),
                    1 => {
                        let mut pdu = UciPucchFormat01Pdu {
                            pdu_bitmap: self.u8(),
                            pucch_format: self.u8(),
                            measurements: self.measurements(),
                            ..UciPucchFormat01Pdu::default()
                        };
                        for _ in 0..self.count(3) {
                            pdu.harq.harq_values.push(self.u8());
                        }
                        UciPdu::PucchFormat01(pdu)
                    }
                    _ => UciPdu::PucchFormat234(UciPucchFormat234Pdu {
                        pdu_bitmap: self.u8(),
                        pucch_format: self.u8(),
                        measurements: self.measurements(),
                        sr: SrPucchFormat234 { sr_bit_len: self.u8(), payload: self.bits() },
                        harq: self.uci_part(),
                        csi_part1: self.uci_part(),
                        csi_part2: self.uci_part(),
                        ..UciPucchFormat234Pdu::default()
                    }),
                };
                msg.pdus.push(pdu);
            }
            msg
        }
    }
}

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    use fapi_validator::{validate_message, FapiMessage, REPORT_CAPACITY};

    let mut bytes = build::Bytes(data);
    let msg = match bytes.u8() % 3 {
        0 => FapiMessage::DlTti(bytes.dl_tti()),
        1 => FapiMessage::UlTti(bytes.ul_tti()),
        _ => FapiMessage::Uci(bytes.uci()),
    };
    if let Err(report) = validate_message(&msg) {
        assert!(report.total_violations() > 0);
        assert!(report.len() <= REPORT_CAPACITY);
        assert_eq!((report.sfn(), report.slot()), msg.sfn_slot());
    }
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run pdu_fuzz");
}
