//! Pure layout math for the SVG charts: scales, plot coordinates, paths and
//! doughnut arcs. No DOM access, so everything here is unit tested.

use std::f64::consts::PI;

/// Drawing surface of a cartesian chart with margins for the axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            left: 64.0,
            right: 16.0,
            top: 16.0,
            bottom: 40.0,
        }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    pub fn baseline(&self) -> f64 {
        self.top + self.inner_height()
    }

    /// x of point `index` out of `count`, spread edge to edge
    pub fn x_for(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.inner_width() / 2.0;
        }
        self.left + self.inner_width() * index as f64 / (count - 1) as f64
    }

    /// Left edge and width of category band `index` out of `count`
    pub fn band(&self, index: usize, count: usize) -> (f64, f64) {
        let width = self.inner_width() / count.max(1) as f64;
        (self.left + width * index as f64, width)
    }

    pub fn y_for(&self, value: f64, scale: &ValueScale) -> f64 {
        self.top + self.inner_height() * (1.0 - scale.fraction(value))
    }

    /// Index of the point closest to `x` (for hover)
    pub fn nearest_index(&self, x: f64, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        if count == 1 {
            return Some(0);
        }
        let step = self.inner_width() / (count - 1) as f64;
        if step <= 0.0 {
            return Some(0);
        }
        let raw = ((x - self.left) / step).round();
        Some(raw.clamp(0.0, (count - 1) as f64) as usize)
    }
}

/// Linear value axis with rounded bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

impl ValueScale {
    /// Scale covering `lo..=hi` and zero, split into about `ticks` steps
    pub fn nice(lo: f64, hi: f64, ticks: usize) -> Self {
        let lo = if lo.is_finite() { lo.min(0.0) } else { 0.0 };
        let hi = if hi.is_finite() { hi.max(lo) } else { lo };
        let step = nice_step((hi - lo) / ticks.max(1) as f64);
        let min = (lo / step).floor() * step;
        let mut max = (hi / step).ceil() * step;
        if max <= min {
            max = min + step;
        }
        Self { min, max, step }
    }

    pub fn fixed(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (value - self.min) / span
    }

    pub fn ticks(&self) -> Vec<f64> {
        let mut out = Vec::new();
        if self.step <= 0.0 {
            return out;
        }
        let mut k = 0.0;
        loop {
            let v = self.min + self.step * k;
            if v > self.max + self.step * 1e-9 {
                break;
            }
            out.push(v);
            k += 1.0;
        }
        out
    }
}

/// SVG path through `points`; a `None` breaks the line
pub fn line_path(points: &[Option<(f64, f64)>]) -> String {
    let mut path = String::new();
    let mut pen_down = false;
    for point in points {
        match point {
            Some((x, y)) => {
                let cmd = if pen_down { 'L' } else { 'M' };
                if !path.is_empty() {
                    path.push(' ');
                }
                path.push_str(&format!("{}{:.1},{:.1}", cmd, x, y));
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    path
}

/// Closed area between `upper` and `lower` over the indices where both exist
pub fn band_path(upper: &[Option<(f64, f64)>], lower: &[Option<(f64, f64)>]) -> Option<String> {
    let pairs: Vec<((f64, f64), (f64, f64))> = upper
        .iter()
        .zip(lower)
        .filter_map(|(u, l)| Some(((*u)?, (*l)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }
    let forward = pairs.iter().map(|(u, _)| Some(*u));
    let backward = pairs.iter().rev().map(|(_, l)| Some(*l));
    let outline: Vec<Option<(f64, f64)>> = forward.chain(backward).collect();
    Some(format!("{} Z", line_path(&outline)))
}

/// Angular extent of one doughnut slice, radians clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSlice {
    pub start: f64,
    pub end: f64,
    /// Share of the total in percent
    pub percent: f64,
}

impl ArcSlice {
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn is_empty(&self) -> bool {
        self.end - self.start <= 0.0
    }
}

/// Slices proportional to `values`; negative values count as zero
pub fn doughnut_slices(values: &[f64]) -> Vec<ArcSlice> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let mut angle = -PI / 2.0;
    values
        .iter()
        .map(|v| {
            let share = if total > 0.0 { v.max(0.0) / total } else { 0.0 };
            let start = angle;
            angle += share * 2.0 * PI;
            ArcSlice {
                start,
                end: angle,
                percent: share * 100.0,
            }
        })
        .collect()
}

pub fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Ring segment between `inner` and `outer` radius
pub fn arc_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    if sweep >= 2.0 * PI - 1e-9 {
        // a full ring cannot be drawn as one arc
        let mid = start + PI;
        return format!(
            "{} {}",
            arc_path(cx, cy, outer, inner, start, mid),
            arc_path(cx, cy, outer, inner, mid, end)
        );
    }
    let large = if sweep > PI { 1 } else { 0 };
    let (x0, y0) = polar(cx, cy, outer, start);
    let (x1, y1) = polar(cx, cy, outer, end);
    let (x2, y2) = polar(cx, cy, inner, end);
    let (x3, y3) = polar(cx, cy, inner, start);
    format!(
        "M{:.2},{:.2} A{:.2},{:.2} 0 {} 1 {:.2},{:.2} L{:.2},{:.2} A{:.2},{:.2} 0 {} 0 {:.2},{:.2} Z",
        x0, y0, outer, outer, large, x1, y1, x2, y2, inner, inner, large, x3, y3
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_scale() {
        let scale = ValueScale::nice(100.0, 165.0, 5);
        assert_eq!(scale.min, 0.0);
        assert_eq!(scale.step, 50.0);
        assert_eq!(scale.max, 200.0);
        assert_eq!(scale.ticks(), vec![0.0, 50.0, 100.0, 150.0, 200.0]);
    }

    #[test]
    fn test_scale_degenerate_input() {
        let scale = ValueScale::nice(0.0, 0.0, 5);
        assert!(scale.max > scale.min);
        let scale = ValueScale::nice(f64::NAN, f64::INFINITY, 5);
        assert!(scale.max > scale.min);
        assert_eq!(ValueScale::fixed(0.0, 0.0, 1.0).fraction(5.0), 0.0);
    }

    #[test]
    fn test_negative_values_extend_scale() {
        let scale = ValueScale::nice(-30.0, 70.0, 5);
        assert!(scale.min <= -30.0);
        assert!(scale.max >= 70.0);
    }

    #[test]
    fn test_plot_positions() {
        let area = PlotArea::new(480.0, 256.0);
        assert_eq!(area.inner_width(), 400.0);
        assert_eq!(area.inner_height(), 200.0);
        assert_eq!(area.x_for(0, 5), 64.0);
        assert_eq!(area.x_for(4, 5), 464.0);
        assert_eq!(area.x_for(0, 1), 264.0);

        let scale = ValueScale::fixed(0.0, 100.0, 20.0);
        assert_eq!(area.y_for(0.0, &scale), 216.0);
        assert_eq!(area.y_for(100.0, &scale), 16.0);

        assert_eq!(area.band(1, 4), (164.0, 100.0));
        assert_eq!(area.nearest_index(170.0, 5), Some(1));
        assert_eq!(area.nearest_index(-50.0, 5), Some(0));
        assert_eq!(area.nearest_index(900.0, 5), Some(4));
        assert_eq!(area.nearest_index(100.0, 0), None);
    }

    #[test]
    fn test_line_path_breaks_on_gaps() {
        let path = line_path(&[Some((0.0, 1.0)), Some((2.0, 3.0)), None, Some((4.0, 5.0))]);
        assert_eq!(path, "M0.0,1.0 L2.0,3.0 M4.0,5.0");
        assert_eq!(line_path(&[None, None]), "");
    }

    #[test]
    fn test_band_path() {
        let upper = [None, Some((1.0, 1.0)), Some((2.0, 0.0))];
        let lower = [None, Some((1.0, 1.0)), Some((2.0, 2.0))];
        assert_eq!(
            band_path(&upper, &lower).as_deref(),
            Some("M1.0,1.0 L2.0,0.0 L2.0,2.0 L1.0,1.0 Z")
        );
        assert_eq!(band_path(&upper[..2], &lower[..2]), None);
    }

    #[test]
    fn test_doughnut_slices() {
        let slices = doughnut_slices(&[1.0, 3.0, -2.0]);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].percent, 25.0);
        assert_eq!(slices[1].percent, 75.0);
        assert_eq!(slices[2].percent, 0.0);
        assert!(slices[2].is_empty());
        assert!((slices[1].end - (-PI / 2.0 + 2.0 * PI)).abs() < 1e-9);

        let empty = doughnut_slices(&[0.0, 0.0]);
        assert!(empty.iter().all(|s| s.is_empty() && s.percent == 0.0));
    }

    #[test]
    fn test_full_ring_arc_is_split() {
        let path = arc_path(50.0, 50.0, 40.0, 20.0, -PI / 2.0, 3.0 * PI / 2.0);
        assert_eq!(path.matches('Z').count(), 2);
    }
}
