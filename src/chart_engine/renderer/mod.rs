mod layers;
mod paths;
mod scale;
mod svg;

pub use scale::{resolve_domain, LinearScale, DOMAIN_PADDING};

use crate::chart_engine::plan::{chart_header, PLACEHOLDER_MESSAGE};
use crate::error::{GeneratorError, ViewerError};
use crate::types::{
    AxisDomain, AxisId, ChartHeader, ChartPlan, ColorRule, ConceptChart, RenderConfig,
    RenderedChart, Scenario,
};
use layers::{PlotArea, SeriesData};
use std::collections::HashMap;
use svg::SvgWriter;
use tracing::debug;

fn load_series_data(
    chart: &ConceptChart,
    plan: &ChartPlan,
) -> Result<HashMap<String, SeriesData>, ViewerError> {
    let available = chart.fields();
    let required = plan.required_fields();
    if required
        .iter()
        .any(|field| !available.iter().any(|name| name == field))
    {
        return Err(GeneratorError::SchemaMismatch {
            kind: chart.kind().as_str().to_string(),
            expected: required.iter().map(|f| f.to_string()).collect(),
            found: available,
        }
        .into());
    }

    let mut data = HashMap::new();
    for series in &plan.series {
        if data.contains_key(&series.field) {
            continue;
        }
        let flags = match &series.color_rule {
            ColorRule::Flag { field, .. } => Some(chart.column_bool(field)?),
            _ => None,
        };
        data.insert(
            series.field.clone(),
            SeriesData {
                values: chart.column_f64(&series.field)?,
                flags,
            },
        );
    }
    Ok(data)
}

fn axis_domain(plan: &ChartPlan, axis: AxisId, data: &HashMap<String, SeriesData>) -> (f64, f64) {
    let domain = plan
        .axis(axis)
        .map(|spec| spec.domain)
        .unwrap_or(AxisDomain::Auto);
    let values = plan
        .series_on(axis)
        .filter_map(|series| data.get(&series.field))
        .flat_map(|series| series.values.iter().flatten().copied());
    resolve_domain(&domain, values)
}

fn plot_area(
    plan: &ChartPlan,
    len: usize,
    data: &HashMap<String, SeriesData>,
    config: &RenderConfig,
) -> PlotArea {
    let x_start = config.margin_left;
    let x_end = config.margin_left + config.plot_width();
    let top = config.margin_top;
    let bottom = config.margin_top + config.plot_height();

    let x = LinearScale::new((0.0, len.saturating_sub(1).max(1) as f64), (x_start, x_end));
    let left = LinearScale::new(axis_domain(plan, AxisId::Left, data), (bottom, top));
    let right = (plan.dual_axis || plan.series_on(AxisId::Right).next().is_some())
        .then(|| LinearScale::new(axis_domain(plan, AxisId::Right, data), (bottom, top)));

    PlotArea {
        len,
        x,
        left,
        right,
        top,
        bottom,
        x_start,
        x_end,
    }
}

/// 按绘图方案把样本渲染为独立的 SVG 文档
///
/// 占位方案只绘制居中提示；方案引用的字段必须都存在于样本中。
pub fn render(
    chart: &ConceptChart,
    plan: &ChartPlan,
    config: &RenderConfig,
) -> Result<RenderedChart, ViewerError> {
    let header = chart_header(Some(chart.kind()), chart.kind().as_str(), chart.scenario());
    if let Some(message) = &plan.placeholder {
        return render_placeholder(header, message, config);
    }

    let data = load_series_data(chart, plan)?;
    let area = plot_area(plan, chart.len(), &data, config);

    let mut svg = SvgWriter::begin(config.width, config.height)?;
    layers::draw_background(&mut svg, config)?;
    layers::draw_grid(&mut svg, config)?;
    for series in &plan.series {
        if let Some(series_data) = data.get(&series.field) {
            layers::draw_series(&mut svg, &area, series, series_data)?;
        }
    }
    svg.open_group("reference", None)?;
    for line in plan.lines_for(chart.scenario()) {
        layers::draw_reference_line(&mut svg, &area, line)?;
    }
    svg.close_group();

    debug!(
        kind = %chart.kind(),
        scenario = %chart.scenario(),
        series = plan.series.len(),
        "rendered chart"
    );
    Ok(RenderedChart {
        header,
        svg: svg.finish(),
        width: config.width,
        height: config.height,
    })
}

/// 无法识别的指标：以原始名称作标题，绘制占位画框
pub fn render_unsupported(
    raw_kind: &str,
    scenario: Scenario,
    config: &RenderConfig,
) -> Result<RenderedChart, ViewerError> {
    render_placeholder(
        chart_header(None, raw_kind, scenario),
        PLACEHOLDER_MESSAGE,
        config,
    )
}

fn render_placeholder(
    header: ChartHeader,
    message: &str,
    config: &RenderConfig,
) -> Result<RenderedChart, ViewerError> {
    let mut svg = SvgWriter::begin(config.width, config.height)?;
    layers::draw_background(&mut svg, config)?;
    layers::draw_placeholder(&mut svg, config, message)?;
    Ok(RenderedChart {
        header,
        svg: svg.finish(),
        width: config.width,
        height: config.height,
    })
}
