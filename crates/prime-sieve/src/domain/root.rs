//! Integer square root for the outer loop bound
//!
//! `sqrt` on `f64` is only exact up to 2^52; above that the truncated result
//! can be one off in either direction, which would drop the last candidate
//! factor. The float estimate is corrected until `r*r <= n < (r+1)*(r+1)`.

/// Largest `r` such that `r * r <= n`
pub fn integer_sqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }

    let mut r = (n as f64).sqrt() as usize;

    // Overflowing square is always above n
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }

    r
}
