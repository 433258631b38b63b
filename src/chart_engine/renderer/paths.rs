use crate::types::Curve;
use std::fmt::Write;

pub type Point = (f64, f64);

/// 按 null 切分为连续片段，null 处断开
pub fn split_segments(xs: &[f64], ys: &[Option<f64>]) -> Vec<Vec<Point>> {
    let mut segments = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    for (x, y) in xs.iter().zip(ys) {
        match y {
            Some(y) if y.is_finite() => current.push((*x, *y)),
            _ => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn sign(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// 单调三次插值的切线（Fritsch-Carlson 形式）
fn monotone_tangents(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    if n < 2 {
        return vec![0.0; n];
    }
    let widths: Vec<f64> = points.windows(2).map(|w| w[1].0 - w[0].0).collect();
    let slopes: Vec<f64> = points
        .windows(2)
        .zip(&widths)
        .map(|(w, h)| if *h == 0.0 { 0.0 } else { (w[1].1 - w[0].1) / h })
        .collect();

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        let (s0, s1) = (slopes[i - 1], slopes[i]);
        let (h0, h1) = (widths[i - 1], widths[i]);
        if s0 * s1 <= 0.0 || h0 + h1 == 0.0 {
            continue;
        }
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        tangents[i] = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    }
    if n == 2 {
        tangents[0] = slopes[0];
        tangents[1] = slopes[0];
    } else {
        tangents[0] = (3.0 * slopes[0] - tangents[1]) / 2.0;
        tangents[n - 1] = (3.0 * slopes[n - 2] - tangents[n - 2]) / 2.0;
    }
    tangents
}

fn write_monotone(d: &mut String, points: &[Point]) -> std::fmt::Result {
    let tangents = monotone_tangents(points);
    for i in 1..points.len() {
        let (x0, y0) = points[i - 1];
        let (x1, y1) = points[i];
        let dx = (x1 - x0) / 3.0;
        write!(
            d,
            " C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            x0 + dx,
            y0 + dx * tangents[i - 1],
            x1 - dx,
            y1 - dx * tangents[i],
            x1,
            y1
        )?;
    }
    Ok(())
}

/// 阶梯：在相邻两点的横向中点处跳变
fn write_step(d: &mut String, points: &[Point]) -> std::fmt::Result {
    for i in 1..points.len() {
        let (x0, y0) = points[i - 1];
        let (x1, y1) = points[i];
        let xm = (x0 + x1) / 2.0;
        write!(d, " L{:.2},{:.2} L{:.2},{:.2} L{:.2},{:.2}", xm, y0, xm, y1, x1, y1)?;
    }
    Ok(())
}

fn write_curve(d: &mut String, points: &[Point], curve: Curve) -> std::fmt::Result {
    match (curve, points.len()) {
        (_, 0 | 1) => Ok(()),
        (Curve::Monotone, 2) => write!(d, " L{:.2},{:.2}", points[1].0, points[1].1),
        (Curve::Monotone, _) => write_monotone(d, points),
        (Curve::Step, _) => write_step(d, points),
    }
}

/// 折线路径，每个片段一个 M 子路径
pub fn line_path(segments: &[Vec<Point>], curve: Curve) -> Result<String, std::fmt::Error> {
    let mut d = String::new();
    for segment in segments {
        let Some(&(x, y)) = segment.first() else {
            continue;
        };
        if !d.is_empty() {
            d.push(' ');
        }
        write!(d, "M{:.2},{:.2}", x, y)?;
        write_curve(&mut d, segment, curve)?;
    }
    Ok(d)
}

/// 面积路径：曲线与基线之间闭合
pub fn area_path(
    segments: &[Vec<Point>],
    curve: Curve,
    baseline_y: f64,
) -> Result<String, std::fmt::Error> {
    let mut d = String::new();
    for segment in segments {
        let (Some(&(x_first, y_first)), Some(&(x_last, _))) = (segment.first(), segment.last())
        else {
            continue;
        };
        if !d.is_empty() {
            d.push(' ');
        }
        write!(d, "M{:.2},{:.2}", x_first, y_first)?;
        write_curve(&mut d, segment, curve)?;
        write!(
            d,
            " L{:.2},{:.2} L{:.2},{:.2} Z",
            x_last, baseline_y, x_first, baseline_y
        )?;
    }
    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nulls_split_segments() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [Some(1.0), None, Some(2.0), Some(3.0), None];
        let segments = split_segments(&xs, &ys);
        assert_eq!(segments, vec![vec![(0.0, 1.0)], vec![(2.0, 2.0), (3.0, 3.0)]]);

        let d = line_path(&segments, Curve::Monotone).unwrap();
        assert_eq!(d.matches('M').count(), 2);
    }

    #[test]
    fn test_step_path_jumps_at_midpoint() {
        let d = line_path(&[vec![(0.0, 10.0), (10.0, 20.0)]], Curve::Step).unwrap();
        assert_eq!(d, "M0.00,10.00 L5.00,10.00 L5.00,20.00 L10.00,20.00");
    }

    #[test]
    fn test_monotone_keeps_flat_runs_flat() {
        let points = vec![(0.0, 5.0), (1.0, 5.0), (2.0, 5.0), (3.0, 9.0)];
        let tangents = monotone_tangents(&points);
        assert_eq!(tangents[1], 0.0);
        assert_eq!(tangents[2], 0.0);
        let d = line_path(&[points], Curve::Monotone).unwrap();
        assert_eq!(d.matches('C').count(), 3);
    }

    #[test]
    fn test_area_closes_on_baseline() {
        let d = area_path(&[vec![(0.0, 1.0), (4.0, 2.0)]], Curve::Monotone, 9.0).unwrap();
        assert!(d.ends_with("L4.00,9.00 L0.00,9.00 Z"));
    }
}
