use amlab::dsp::channel::AwgnChannel;
use amlab::dsp::envelope::{detect, remove_dc};
use amlab::dsp::modulate::modulate_am;
use amlab::dsp::stats::{mean, pearson, tone_amplitude};
use amlab::dsp::{TimeGrid, Tone};
use amlab::{AmConfig, AmError, AmPipeline};
use rand::SeedableRng;
use rand_pcg::Pcg64;

const SETTLE_SECS: f64 = 0.25;

#[test]
fn reference_scenario_at_40_db_tracks_message() {
    let config = AmConfig::default().snr_db(40.0).seed(2024);
    let pipeline = AmPipeline::new(config).unwrap();
    let output = pipeline.run(&mut pipeline.rng()).unwrap();

    let recovery = output.recovery(SETTLE_SECS).unwrap();
    assert!(
        recovery.correlation >= 0.98,
        "correlation {} at lag {}",
        recovery.correlation,
        recovery.lag
    );

    // a 4th-order 10 Hz Butterworth delays 2 Hz by about 42 ms
    let delay_ms = recovery.lag as f64 * output.grid.dt() * 1e3;
    assert!((30.0..55.0).contains(&delay_ms), "delay {delay_ms} ms");

    // without delay compensation the same estimate scores visibly worse
    let skip = output.grid.samples_in(SETTLE_SECS);
    let zero_lag = pearson(&output.message[skip..], &output.estimate[skip..]).unwrap();
    assert!(zero_lag < recovery.correlation);
}

#[test]
fn default_scenario_at_5_db_still_recovers_message() {
    let pipeline = AmPipeline::new(AmConfig::default().seed(5)).unwrap();
    let output = pipeline.run(&mut pipeline.rng()).unwrap();

    let recovery = output.recovery(SETTLE_SECS).unwrap();
    assert!(recovery.correlation >= 0.9, "correlation {}", recovery.correlation);

    // the channel really did add noise
    assert_ne!(output.received, output.transmitted);
}

#[test]
fn transmitted_spectrum_shows_carrier_and_sidebands() {
    let pipeline = AmPipeline::new(AmConfig::default().seed(1)).unwrap();
    let output = pipeline.run(&mut pipeline.rng()).unwrap();

    let spectrum = &output.spectrum;
    assert_eq!(spectrum.bin_spacing(), 1.0);
    assert_eq!(spectrum.peak().unwrap().0, 1_000.0);

    let carrier = spectrum.magnitude_at(1_000.0).unwrap();
    let lower = spectrum.magnitude_at(998.0).unwrap();
    let upper = spectrum.magnitude_at(1_002.0).unwrap();
    assert!((lower / carrier - 0.35).abs() < 1e-6);
    assert!((upper / carrier - 0.35).abs() < 1e-6);

    // display band stops at 2 kHz
    let band = spectrum.band(2_000.0);
    assert_eq!(band.last().unwrap().0, 2_000.0);
}

#[test]
fn zero_modulation_index_leaves_only_noise() {
    let grid = TimeGrid::new(10_000.0, 1.0).unwrap();
    let message = Tone::sine(2.0).render(&grid);
    let carrier = Tone::cosine(1_000.0).render(&grid);
    let channel = AwgnChannel::new(40.0).unwrap();

    let residue = |mu: f64| {
        let transmitted = modulate_am(&message, &carrier, mu).unwrap();
        let received = channel
            .transmit(&transmitted, &mut Pcg64::seed_from_u64(11))
            .unwrap();
        remove_dc(&detect(&received))
    };

    let unmodulated = residue(0.0);
    assert_eq!(unmodulated.len(), grid.len());
    assert!(mean(&unmodulated).abs() < 1e-9);
    let silent = tone_amplitude(&unmodulated, 2.0, grid.sample_rate());
    assert!(silent < 0.01, "2 Hz component {silent} with mu = 0");

    let modulated = residue(0.7);
    let present = tone_amplitude(&modulated, 2.0, grid.sample_rate());
    assert!((present - 0.7).abs() < 0.02, "2 Hz component {present} with mu = 0.7");
}

#[test]
fn zero_modulation_index_is_rejected_by_config() {
    let err = AmPipeline::new(AmConfig::default().modulation_index(0.0)).unwrap_err();
    assert!(matches!(
        err,
        AmError::InvalidParameter {
            name: "modulation_index",
            ..
        }
    ));
}

#[test]
fn noiseless_chain_passes_transmit_signal_through_channel() {
    let pipeline = AmPipeline::new(AmConfig::default().snr_db(f64::INFINITY)).unwrap();
    let output = pipeline.run(&mut pipeline.rng()).unwrap();
    assert_eq!(output.received, output.transmitted);

    let recovery = output.recovery(SETTLE_SECS).unwrap();
    assert!(recovery.correlation >= 0.95);
}
