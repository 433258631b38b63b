use super::chart_plan::{
    AxisDomain, AxisSpec, ChartPlan, ColorRule, ConditionalAnnotation, LinePosition,
    ReferenceLine, SeriesSpec, SeriesStyle,
};
use super::samples::SamplePoint;
use super::views::{
    ChapterState, ChapterView, NavLink, SectionLayout, SectionView, SidebarEntry, SidebarView,
};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use pyo3_stub_gen::{PyStubType, TypeInfo};

// 以字典形式交给 Python 的类型，存根中统一标注为 dict
macro_rules! impl_dict_stub {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PyStubType for $ty {
                fn type_output() -> TypeInfo {
                    TypeInfo::builtin("dict")
                }
            }
        )*
    };
}

impl_dict_stub!(
    SamplePoint,
    SeriesSpec,
    AxisSpec,
    ReferenceLine,
    ConditionalAnnotation,
    ChartPlan,
    SectionLayout,
    SectionView,
    ChapterView,
    ChapterState,
    SidebarView,
);

// SamplePoint
impl<'py> IntoPyObject<'py> for SamplePoint {
    type Target = PyDict;
    type Output = Bound<'py, PyDict>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("t", self.t)?;
        for (field, value) in self.values {
            dict.set_item(field, value)?;
        }
        for (field, flag) in self.flags {
            dict.set_item(field, flag)?;
        }
        Ok(dict)
    }
}

fn style_dict<'py>(py: Python<'py>, style: &SeriesStyle) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("type", style.as_str())?;
    match style {
        SeriesStyle::Line { .. } => {}
        SeriesStyle::Area { fill_opacity } => dict.set_item("fill_opacity", fill_opacity)?,
        SeriesStyle::Bar { width } => dict.set_item("width", width)?,
        SeriesStyle::Scatter { radius } => dict.set_item("radius", radius)?,
    }
    Ok(dict)
}

fn color_rule_dict<'py>(py: Python<'py>, rule: &ColorRule) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    match rule {
        ColorRule::Fixed => dict.set_item("type", "fixed")?,
        ColorRule::SignOf { positive, negative } => {
            dict.set_item("type", "sign_of")?;
            dict.set_item("positive", positive)?;
            dict.set_item("negative", negative)?;
        }
        ColorRule::Flag { field, on, off } => {
            dict.set_item("type", "flag")?;
            dict.set_item("field", field)?;
            dict.set_item("on", on)?;
            dict.set_item("off", off)?;
        }
    }
    Ok(dict)
}

// SeriesSpec
impl<'py> IntoPyObject<'py> for SeriesSpec {
    type Target = PyDict;
    type Output = Bound<'py, PyDict>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("field", &self.field)?;
        dict.set_item("label", &self.label)?;
        dict.set_item("style", style_dict(py, &self.style)?)?;
        dict.set_item("color", &self.color)?;
        dict.set_item("stroke_width", self.stroke_width)?;
        dict.set_item("opacity", self.opacity)?;
        dict.set_item("axis", self.axis.as_str())?;
        dict.set_item("color_rule", color_rule_dict(py, &self.color_rule)?)?;
        Ok(dict)
    }
}

// AxisSpec
impl<'py> IntoPyObject<'py> for AxisSpec {
    type Target = PyDict;
    type Output = Bound<'py, PyDict>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("id", self.id.as_str())?;
        match self.domain {
            AxisDomain::Auto => dict.set_item("domain", "auto")?,
            AxisDomain::ZeroBased => dict.set_item("domain", (0.0, "auto"))?,
            AxisDomain::Fixed { min, max } => dict.set_item("domain", (min, max))?,
        }
        Ok(dict)
    }
}

// ReferenceLine
impl<'py> IntoPyObject<'py> for ReferenceLine {
    type Target = PyDict;
    type Output = Bound<'py, PyDict>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        match self.position {
            LinePosition::Horizontal { y } => {
                dict.set_item("orientation", "horizontal")?;
                dict.set_item("y", y)?;
            }
            LinePosition::Vertical { t } => {
                dict.set_item("orientation", "vertical")?;
                dict.set_item("t", t)?;
            }
        }
        dict.set_item("label", self.label)?;
        dict.set_item("color", self.color)?;
        dict.set_item("dashed", self.dashed)?;
        dict.set_item("axis", self.axis.as_str())?;
        Ok(dict)
    }
}

// ConditionalAnnotation
impl<'py> IntoPyObject<'py> for ConditionalAnnotation {
    type Target = PyDict;
    type Output = Bound<'py, PyDict>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        let scenarios: Vec<&str> = self.scenarios.iter().map(|s| s.as_str()).collect();
        dict.set_item("scenarios", scenarios)?;
        dict.set_item("line", self.line)?;
        Ok(dict)
    }
}

// ChartPlan
impl<'py> IntoPyObject<'py> for ChartPlan {
    type Target = PyDict;
    type Output = Bound<'py, PyDict>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("kind", self.kind.map(|kind| kind.as_str()))?;
        dict.set_item("family", self.family.as_str())?;
        dict.set_item("series", PyList::new(py, self.series)?)?;
        dict.set_item("axes", PyList::new(py, self.axes)?)?;
        dict.set_item("dual_axis", self.dual_axis)?;
        dict.set_item("reference_lines", PyList::new(py, self.reference_lines)?)?;
        dict.set_item("annotations", PyList::new(py, self.annotations)?)?;
        dict.set_item("placeholder", self.placeholder)?;
        Ok(dict)
    }
}

// SectionLayout
impl<'py> IntoPyObject<'py> for SectionLayout {
    type Target = PyDict;
    type Output = Bound<'py, PyDict>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("layout", self.name())?;
        match self {
            SectionLayout::Narrative { text, chart } => {
                dict.set_item("text", text)?;
                dict.set_item("chart", chart)?;
            }
            SectionLayout::CaseStudy {
                heading,
                text,
                chart,
            } => {
                dict.set_item("heading", heading)?;
                dict.set_item("text", text)?;
                dict.set_item("chart", chart)?;
            }
            SectionLayout::HistoricalReview {
                banner,
                asset,
                date,
                text,
            } => {
                dict.set_item("banner", banner)?;
                dict.set_item("asset", asset)?;
                dict.set_item("date", date)?;
                dict.set_item("text", text)?;
            }
            SectionLayout::TipCallout { heading, items } => {
                dict.set_item("heading", heading)?;
                dict.set_item("items", items)?;
            }
            SectionLayout::SignalList { items, sell } => {
                dict.set_item("items", items)?;
                dict.set_item("sell", sell)?;
            }
            SectionLayout::ProcessTimeline { steps } => dict.set_item("steps", steps)?,
            SectionLayout::DisciplineWarning { items } => dict.set_item("items", items)?,
        }
        Ok(dict)
    }
}

// SectionView
impl<'py> IntoPyObject<'py> for SectionView {
    type Target = PyDict;
    type Output = Bound<'py, PyDict>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("title", self.title)?;
        dict.set_item("type", self.section_type.as_str())?;
        dict.set_item("warning_marker", self.warning_marker)?;
        dict.set_item("body", self.layout)?;
        Ok(dict)
    }
}

// NavLink
impl<'py> IntoPyObject<'py> for NavLink {
    type Target = PyDict;
    type Output = Bound<'py, PyDict>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("module_id", self.module_id)?;
        dict.set_item("title", self.title)?;
        Ok(dict)
    }
}

// ChapterView
impl<'py> IntoPyObject<'py> for ChapterView {
    type Target = PyDict;
    type Output = Bound<'py, PyDict>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("index", self.index)?;
        dict.set_item("module_id", self.module_id)?;
        dict.set_item("title", self.title)?;
        dict.set_item("subtitle", self.subtitle)?;
        dict.set_item("description", self.description)?;
        dict.set_item("completed", self.completed)?;
        dict.set_item("sections", PyList::new(py, self.sections)?)?;
        dict.set_item("prev", self.prev)?;
        dict.set_item("next", self.next)?;
        dict.set_item("course_finished", self.course_finished)?;
        Ok(dict)
    }
}

// ChapterState
impl<'py> IntoPyObject<'py> for ChapterState {
    type Target = PyDict;
    type Output = Bound<'py, PyDict>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        match self {
            ChapterState::Loading => {
                dict.set_item("state", "loading")?;
                dict.set_item("chapter", py.None())?;
            }
            ChapterState::Ready(view) => {
                dict.set_item("state", "ready")?;
                dict.set_item("chapter", *view)?;
            }
        }
        Ok(dict)
    }
}

// SidebarEntry
impl<'py> IntoPyObject<'py> for SidebarEntry {
    type Target = PyDict;
    type Output = Bound<'py, PyDict>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("module_id", self.module_id)?;
        dict.set_item("title", self.title)?;
        dict.set_item("active", self.active)?;
        dict.set_item("completed", self.completed)?;
        Ok(dict)
    }
}

// SidebarView
impl<'py> IntoPyObject<'py> for SidebarView {
    type Target = PyDict;
    type Output = Bound<'py, PyDict>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("entries", PyList::new(py, self.entries)?)?;
        dict.set_item("completed_count", self.completed_count)?;
        dict.set_item("total", self.total)?;
        dict.set_item("progress_percent", self.progress_percent)?;
        Ok(dict)
    }
}
