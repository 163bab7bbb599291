//! Statistical and reproducibility checks for `PricerRng`.

use super::PricerRng;

#[test]
fn test_same_seed_same_sequence() {
    let mut rng1 = PricerRng::from_seed(7);
    let mut rng2 = PricerRng::from_seed(7);
    for _ in 0..100 {
        assert_eq!(rng1.gen_uniform().to_bits(), rng2.gen_uniform().to_bits());
        assert_eq!(rng1.gen_normal().to_bits(), rng2.gen_normal().to_bits());
    }
}

#[test]
fn test_different_seeds_differ() {
    let mut rng1 = PricerRng::from_seed(1);
    let mut rng2 = PricerRng::from_seed(2);
    let a: Vec<f64> = (0..10).map(|_| rng1.gen_uniform()).collect();
    let b: Vec<f64> = (0..10).map(|_| rng2.gen_uniform()).collect();
    assert_ne!(a, b);
}

#[test]
fn test_uniform_range_and_mean() {
    let mut rng = PricerRng::from_seed(42);
    let n = 100_000;
    let mut sum = 0.0;
    for _ in 0..n {
        let u = rng.gen_uniform();
        assert!((0.0..1.0).contains(&u));
        sum += u;
    }
    let mean = sum / n as f64;
    assert!((mean - 0.5).abs() < 0.01, "uniform mean {} too far from 0.5", mean);
}

#[test]
fn test_normal_moments() {
    let mut rng = PricerRng::from_seed(42);
    let mut buffer = vec![0.0; 100_000];
    rng.fill_normal(&mut buffer);

    let n = buffer.len() as f64;
    let mean = buffer.iter().sum::<f64>() / n;
    let variance = buffer.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);

    assert!(mean.abs() < 0.02, "normal mean {} too far from 0", mean);
    assert!((variance - 1.0).abs() < 0.02, "normal variance {} too far from 1", variance);
}

#[test]
fn test_sign_is_balanced() {
    let mut rng = PricerRng::from_seed(2024);
    let n = 100_000;
    let mut total = 0.0;
    for _ in 0..n {
        let s = rng.gen_sign();
        assert!(s == 1.0 || s == -1.0);
        total += s;
    }
    assert!((total / n as f64).abs() < 0.02, "sign mean {} not balanced", total / n as f64);
}

#[test]
fn test_from_entropy_records_seed() {
    let mut rng = PricerRng::from_entropy();
    let mut replay = PricerRng::from_seed(rng.seed());
    assert_eq!(rng.gen_uniform(), replay.gen_uniform());
}

#[test]
fn test_fill_normal_empty_buffer() {
    let mut rng = PricerRng::from_seed(1);
    let mut buffer: Vec<f64> = Vec::new();
    rng.fill_normal(&mut buffer);
    assert!(buffer.is_empty());
}
