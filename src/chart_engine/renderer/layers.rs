use super::paths::{area_path, line_path, split_segments};
use super::scale::LinearScale;
use super::svg::SvgWriter;
use crate::types::{
    AxisId, ColorRule, Curve, LinePosition, ReferenceLine, RenderConfig, SeriesSpec, SeriesStyle,
};

const LABEL_FONT_SIZE: u32 = 11;
const PLACEHOLDER_FONT_SIZE: u32 = 14;
const PLACEHOLDER_COLOR: &str = "#9ca3af";
/// 柱宽占单根 K 线间距的上限
const MAX_BAR_FILL: f64 = 0.8;

/// 一条序列的数据：数值列与可选的着色用布尔列
#[derive(Debug, Clone, Default)]
pub struct SeriesData {
    pub values: Vec<Option<f64>>,
    pub flags: Option<Vec<Option<bool>>>,
}

/// 绘图区：横轴比例尺与左右纵轴比例尺
#[derive(Debug, Clone)]
pub struct PlotArea {
    pub len: usize,
    pub x: LinearScale,
    pub left: LinearScale,
    pub right: Option<LinearScale>,
    pub top: f64,
    pub bottom: f64,
    pub x_start: f64,
    pub x_end: f64,
}

impl PlotArea {
    pub fn y(&self, axis: AxisId) -> &LinearScale {
        match axis {
            AxisId::Left => &self.left,
            AxisId::Right => self.right.as_ref().unwrap_or(&self.left),
        }
    }

    pub fn xs(&self) -> Vec<f64> {
        (0..self.len).map(|i| self.x.map(i as f64)).collect()
    }

    fn band_width(&self) -> f64 {
        (self.x_end - self.x_start) / self.len.max(1) as f64
    }
}

pub fn draw_background(svg: &mut SvgWriter, config: &RenderConfig) -> std::fmt::Result {
    if let Some(fill) = &config.background {
        svg.rect(0.0, 0.0, config.width as f64, config.height as f64, fill, 1.0)?;
    }
    Ok(())
}

/// 虚线网格
pub fn draw_grid(svg: &mut SvgWriter, config: &RenderConfig) -> std::fmt::Result {
    let (x0, y0) = (config.margin_left, config.margin_top);
    let (w, h) = (config.plot_width(), config.plot_height());
    svg.open_group("grid", None)?;
    for row in 0..=config.grid_rows {
        let y = y0 + h * row as f64 / config.grid_rows.max(1) as f64;
        svg.line((x0, y), (x0 + w, y), &config.grid_color, config.grid_opacity, true)?;
    }
    for col in 0..=config.grid_cols {
        let x = x0 + w * col as f64 / config.grid_cols.max(1) as f64;
        svg.line((x, y0), (x, y0 + h), &config.grid_color, config.grid_opacity, true)?;
    }
    svg.close_group();
    Ok(())
}

fn point_color<'a>(spec: &'a SeriesSpec, data: &SeriesData, row: usize, value: f64) -> &'a str {
    match &spec.color_rule {
        ColorRule::Fixed => &spec.color,
        ColorRule::SignOf { positive, negative } => {
            if value > 0.0 {
                positive
            } else {
                negative
            }
        }
        ColorRule::Flag { on, off, .. } => {
            let flag = data
                .flags
                .as_ref()
                .and_then(|flags| flags.get(row).copied().flatten())
                .unwrap_or(false);
            if flag {
                on
            } else {
                off
            }
        }
    }
}

/// 按样式绘制一条序列
pub fn draw_series(
    svg: &mut SvgWriter,
    area: &PlotArea,
    spec: &SeriesSpec,
    data: &SeriesData,
) -> std::fmt::Result {
    let y_scale = area.y(spec.axis);
    let xs = area.xs();

    svg.open_group(spec.style.as_str(), Some(&spec.field))?;
    match spec.style {
        SeriesStyle::Line { curve } => {
            let ys: Vec<Option<f64>> = data.values.iter().map(|v| v.map(|v| y_scale.map(v))).collect();
            let d = line_path(&split_segments(&xs, &ys), curve)?;
            if !d.is_empty() {
                svg.stroke_path(&d, &spec.color, spec.stroke_width, spec.opacity)?;
            }
        }
        SeriesStyle::Area { fill_opacity } => {
            let ys: Vec<Option<f64>> = data.values.iter().map(|v| v.map(|v| y_scale.map(v))).collect();
            let floor = y_scale.domain.0.min(y_scale.domain.1);
            let d = area_path(
                &split_segments(&xs, &ys),
                Curve::Monotone,
                y_scale.map(floor),
            )?;
            if !d.is_empty() {
                svg.fill_path(&d, &spec.color, fill_opacity * spec.opacity)?;
            }
        }
        SeriesStyle::Bar { width } => {
            let width = width.min(area.band_width() * MAX_BAR_FILL);
            let base = y_scale.map(y_scale.baseline());
            for (row, (x, value)) in xs.iter().zip(&data.values).enumerate() {
                let Some(value) = value.filter(|v| v.is_finite()) else {
                    continue;
                };
                let y = y_scale.map(value);
                svg.rect(
                    x - width / 2.0,
                    y.min(base),
                    width,
                    (y - base).abs(),
                    point_color(spec, data, row, value),
                    spec.opacity,
                )?;
            }
        }
        SeriesStyle::Scatter { radius } => {
            for (row, (x, value)) in xs.iter().zip(&data.values).enumerate() {
                let Some(value) = value.filter(|v| v.is_finite()) else {
                    continue;
                };
                svg.circle(
                    *x,
                    y_scale.map(value),
                    radius,
                    point_color(spec, data, row, value),
                    spec.opacity,
                )?;
            }
        }
    }
    svg.close_group();
    Ok(())
}

/// 参考线；超出值域或样本范围的线不绘制
pub fn draw_reference_line(
    svg: &mut SvgWriter,
    area: &PlotArea,
    line: &ReferenceLine,
) -> std::fmt::Result {
    match line.position {
        LinePosition::Horizontal { y } => {
            let scale = area.y(line.axis);
            if !scale.contains(y) {
                return Ok(());
            }
            let py = scale.map(y);
            svg.line((area.x_start, py), (area.x_end, py), &line.color, 1.0, line.dashed)?;
            if let Some(label) = &line.label {
                svg.text(area.x_end - 20.0, py - 4.0, label, &line.color, LABEL_FONT_SIZE)?;
            }
        }
        LinePosition::Vertical { t } => {
            if t < 0 || t as usize >= area.len {
                return Ok(());
            }
            let px = area.x.map(t as f64);
            svg.line((px, area.top), (px, area.bottom), &line.color, 1.0, line.dashed)?;
            if let Some(label) = &line.label {
                svg.text(px, area.top + LABEL_FONT_SIZE as f64, label, &line.color, LABEL_FONT_SIZE)?;
            }
        }
    }
    Ok(())
}

/// 占位：空白画框 + 居中提示
pub fn draw_placeholder(
    svg: &mut SvgWriter,
    config: &RenderConfig,
    message: &str,
) -> std::fmt::Result {
    svg.open_group("placeholder", None)?;
    svg.text(
        config.width as f64 / 2.0,
        config.height as f64 / 2.0,
        message,
        PLACEHOLDER_COLOR,
        PLACEHOLDER_FONT_SIZE,
    )?;
    svg.close_group();
    Ok(())
}
