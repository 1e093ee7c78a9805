//! Evenly spaced time grids.

use vdp_core::Real;

/// `num` evenly spaced samples over `[start, end]`, both endpoints included.
///
/// `num == 1` yields `[start]`; `num == 0` yields an empty grid. The last
/// sample is exactly `end`.
pub fn linspace(start: Real, end: Real, num: usize) -> Vec<Real> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = num - 1;
            let step = (end - start) / last as Real;
            (0..num)
                .map(|i| if i == last { end } else { start + step * i as Real })
                .collect()
        }
    }
}
