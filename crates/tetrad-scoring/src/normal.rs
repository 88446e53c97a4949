//! Standard normal distribution function.

/// Cumulative distribution function of the standard normal, Phi(z).
///
/// Zelen & Severo rational-polynomial approximation (Abramowitz & Stegun
/// 26.2.17), absolute error below 7.5e-8. Integer percentiles need far
/// less.
pub fn standard_normal_cdf(z: f64) -> f64 {
    const P: f64 = 0.2316419;
    // 1/sqrt(2*pi) at the precision the published coefficients carry.
    const D: f64 = 0.3989423;
    const B1: f64 = 0.3193815;
    const B2: f64 = -0.3565638;
    const B3: f64 = 1.781478;
    const B4: f64 = -1.821256;
    const B5: f64 = 1.330274;

    let t = 1.0 / (1.0 + P * z.abs());
    let density = D * (-z * z / 2.0).exp();
    let upper_tail = density * t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))));

    if z >= 0.0 { 1.0 - upper_tail } else { upper_tail }
}
