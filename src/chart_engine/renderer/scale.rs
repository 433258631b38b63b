use crate::types::AxisDomain;

/// 自动值域两端留白比例
pub const DOMAIN_PADDING: f64 = 0.05;

/// 线性比例尺：值域 → 像素区间
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    pub fn contains(&self, value: f64) -> bool {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        value >= lo && value <= hi
    }

    /// 柱状图的起点：0 在值域内时从 0 出发，否则从值域下界出发
    pub fn baseline(&self) -> f64 {
        if self.contains(0.0) {
            0.0
        } else {
            self.domain.0.min(self.domain.1)
        }
    }
}

/// 计算一条坐标轴的值域
///
/// Fixed 原样使用；Auto 取全部有限值的范围并两端各留 5%，
/// 退化区间（所有值相同）上下各扩 1，没有任何有限值时回落到 [0, 1]。
/// ZeroBased 把 0 纳入范围，只在远离 0 的一端留白。
pub fn resolve_domain<I>(domain: &AxisDomain, values: I) -> (f64, f64)
where
    I: IntoIterator<Item = f64>,
{
    let finite_range = |values: I| {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        (min.is_finite() && max.is_finite()).then_some((min, max))
    };
    match *domain {
        AxisDomain::Fixed { min, max } => (min, max),
        AxisDomain::Auto => {
            let Some((min, max)) = finite_range(values) else {
                return (0.0, 1.0);
            };
            if min == max {
                return (min - 1.0, max + 1.0);
            }
            let pad = (max - min) * DOMAIN_PADDING;
            (min - pad, max + pad)
        }
        AxisDomain::ZeroBased => {
            let Some((min, max)) = finite_range(values) else {
                return (0.0, 1.0);
            };
            let (lo, hi) = (min.min(0.0), max.max(0.0));
            if lo == hi {
                return (0.0, 1.0);
            }
            let pad = (hi - lo) * DOMAIN_PADDING;
            let lo = if lo < 0.0 { lo - pad } else { 0.0 };
            let hi = if hi > 0.0 { hi + pad } else { 0.0 };
            (lo, hi)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_domain_pads_five_percent() {
        let (lo, hi) = resolve_domain(&AxisDomain::Auto, vec![0.0, 100.0, f64::NAN]);
        assert!((lo + 5.0).abs() < 1e-9);
        assert!((hi - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_and_empty_domains() {
        assert_eq!(resolve_domain(&AxisDomain::Auto, vec![50.0, 50.0]), (49.0, 51.0));
        assert_eq!(resolve_domain(&AxisDomain::Auto, Vec::<f64>::new()), (0.0, 1.0));
        assert_eq!(
            resolve_domain(&AxisDomain::Fixed { min: -100.0, max: 0.0 }, vec![5.0]),
            (-100.0, 0.0)
        );
    }

    #[test]
    fn test_zero_based_domain_anchors_bars_at_zero() {
        let (lo, hi) = resolve_domain(&AxisDomain::ZeroBased, vec![1500.0, 2500.0]);
        assert_eq!(lo, 0.0);
        assert!((hi - 2625.0).abs() < 1e-9);
        assert_eq!(LinearScale::new((lo, hi), (0.0, 1.0)).baseline(), 0.0);
        assert_eq!(resolve_domain(&AxisDomain::ZeroBased, vec![0.0, 0.0]), (0.0, 1.0));
        assert_eq!(resolve_domain(&AxisDomain::ZeroBased, vec![f64::NAN]), (0.0, 1.0));
    }

    #[test]
    fn test_scale_maps_and_inverts() {
        let y = LinearScale::new((0.0, 100.0), (250.0, 10.0));
        assert_eq!(y.map(0.0), 250.0);
        assert_eq!(y.map(100.0), 10.0);
        assert_eq!(y.map(50.0), 130.0);
        assert!(y.contains(100.0));
        assert!(!y.contains(-0.1));
    }

    #[test]
    fn test_baseline() {
        assert_eq!(LinearScale::new((-5.0, 5.0), (0.0, 1.0)).baseline(), 0.0);
        assert_eq!(LinearScale::new((90.0, 110.0), (0.0, 1.0)).baseline(), 90.0);
    }
}
