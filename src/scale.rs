//! Scale construction: categorical band/point scales for X and a linear
//! scale with "niced" domains for Y.
//!
//! Positions are keyed by point index, not label value, so repeated labels
//! keep distinct slots in source order.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// A categorical scale partitioning the range into equal-width bands with
/// inner and outer padding, used for bar positioning.
#[derive(Debug, Clone)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    step: f64,
    start: f64,
    bandwidth: f64,
}

impl BandScale {
    /// `padding` sets both inner and outer padding as a fraction of the step.
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let n = domain.len() as f64;
        let (r0, r1) = range;
        let step = (r1 - r0) / f64::max(1.0, n - padding + padding * 2.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);
        Self { domain, range, step, start, bandwidth }
    }

    /// Left edge of the band for the point at `index`.
    pub fn position(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// A categorical scale placing each point at a single position, used for
/// line-chart X positioning. Equivalent to a band scale with zero-width
/// bands (inner padding of one).
#[derive(Debug, Clone)]
pub struct PointScale {
    domain: Vec<String>,
    range: (f64, f64),
    step: f64,
    start: f64,
}

impl PointScale {
    pub fn new(domain: Vec<String>, range: (f64, f64)) -> Self {
        let n = domain.len() as f64;
        let (r0, r1) = range;
        let step = (r1 - r0) / f64::max(1.0, n - 1.0);
        let start = r0 + (r1 - r0 - step * (n - 1.0)) * 0.5;
        Self { domain, range, step, start }
    }

    pub fn position(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// A continuous linear scale mapping a numeric domain onto a pixel range.
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range. A zero-span domain yields a
    /// non-finite result; callers guard where it matters.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round the domain outward to tick-aligned boundaries.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut lo, mut hi) = self.domain;
        let mut prestep = 0.0;
        loop {
            let step = tick_increment(lo, hi, count);
            if step == prestep || step == 0.0 || !step.is_finite() {
                break;
            }
            if step > 0.0 {
                lo = (lo / step).floor() * step;
                hi = (hi / step).ceil() * step;
            } else {
                lo = (lo * step).ceil() / step;
                hi = (hi * step).floor() / step;
            }
            prestep = step;
        }
        self.domain = (lo, hi);
        self
    }

    /// Roughly `count` round tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = self.domain;
        if lo == hi {
            return if count > 0 { vec![lo] } else { Vec::new() };
        }
        let step = tick_increment(lo, hi, count);
        if step == 0.0 || !step.is_finite() {
            return Vec::new();
        }
        if step > 0.0 {
            let first = (lo / step).ceil();
            let last = (hi / step).floor();
            if last < first {
                return Vec::new();
            }
            (0..=(last - first) as usize)
                .map(|i| (first + i as f64) * step)
                .collect()
        } else {
            let inv = -step;
            let first = (lo * inv).ceil();
            let last = (hi * inv).floor();
            if last < first {
                return Vec::new();
            }
            (0..=(last - first) as usize)
                .map(|i| (first + i as f64) / inv)
                .collect()
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Tick spacing for roughly `count` ticks over `[start, stop]`, snapped to
/// 1/2/5 times a power of ten. Sub-unit steps are returned as negative
/// reciprocals so the integer arithmetic in `nice`/`ticks` stays exact.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / f64::max(0.0, count as f64);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}
