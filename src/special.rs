//! Special functions for the hydrogen eigenfunctions.
//!
//! Generalized Laguerre polynomials L_k^α(x) for the radial part and associated
//! Legendre functions P_l^m(x) (Condon–Shortley phase included) for the angular part.
//! Factorials are carried in the log domain so ratios like (n-l-1)!/(n+l)! stay finite.

/// ln(k!) by direct summation, exact to rounding for the k used here.
pub fn ln_factorial(k: u32) -> f64 {
    (2..=k).map(|i| (i as f64).ln()).sum()
}

/// k! as a float. Overflows to infinity for k > 170.
pub fn factorial(k: u32) -> f64 {
    (2..=k).map(|i| i as f64).product()
}

/// Double factorial k!! = k (k-2) (k-4) ...
pub fn double_factorial(k: u32) -> f64 {
    let mut result = 1.0;
    let mut i = k;
    while i > 1 {
        result *= i as f64;
        i -= 2;
    }
    result
}

/// Generalized Laguerre polynomial L_k^α(x) by the three-term recurrence
///
/// (i) L_i = (2i - 1 + α - x) L_{i-1} - (i - 1 + α) L_{i-2}
pub fn laguerre(k: u32, alpha: f64, x: f64) -> f64 {
    if k == 0 {
        return 1.0;
    }
    let mut l0 = 1.0;
    let mut l1 = 1.0 + alpha - x;
    for i in 2..=k {
        let i_f = i as f64;
        let l_new = ((2.0 * i_f - 1.0 + alpha - x) * l1 - (i_f - 1.0 + alpha) * l0) / i_f;
        l0 = l1;
        l1 = l_new;
    }
    l1
}

/// Associated Legendre function P_l^m(x) for 0 ≤ m ≤ l, |x| ≤ 1,
/// including the (−1)^m Condon–Shortley phase.
pub fn associated_legendre(l: u32, m: u32, x: f64) -> f64 {
    if m > l {
        return 0.0;
    }
    let m_f = m as f64;
    let sign = if m % 2 == 0 { 1.0 } else { -1.0 };
    let pmm = sign
        * double_factorial((2 * m).saturating_sub(1))
        * (1.0 - x * x).max(0.0).powf(m_f / 2.0);
    if l == m {
        return pmm;
    }

    let pm1m = x * (2.0 * m_f + 1.0) * pmm;
    if l == m + 1 {
        return pm1m;
    }

    let mut p_prev = pmm;
    let mut p_curr = pm1m;
    for i in (m + 2)..=l {
        let i_f = i as f64;
        let p_next = ((2.0 * i_f - 1.0) * x * p_curr - (i_f + m_f - 1.0) * p_prev) / (i_f - m_f);
        p_prev = p_curr;
        p_curr = p_next;
    }
    p_curr
}
