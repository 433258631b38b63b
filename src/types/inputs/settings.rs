#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3_stub_gen::derive::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// 场景生成配置
///
/// seed 为 None 时每次生成都是新的噪声；固定 seed 则可复现。
/// length 为 None 或 0 时使用指标自身的默认长度。
#[cfg_attr(feature = "python", gen_stub_pyclass)]
#[cfg_attr(feature = "python", pyclass(get_all, set_all))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub seed: Option<u64>,
    pub length: Option<usize>,
}

impl GenerateConfig {
    pub fn new(seed: Option<u64>, length: Option<usize>) -> Self {
        Self { seed, length }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed), None)
    }

    pub fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        }
    }

    /// 第 index 个组合使用的派生配置（批量生成时每个任务独立取种子）
    pub fn derive(&self, index: usize) -> Self {
        Self {
            seed: self.seed.map(|s| s.wrapping_add(index as u64)),
            length: self.length,
        }
    }
}

/// 渲染配置（画布尺寸、边距、网格）
#[cfg_attr(feature = "python", gen_stub_pyclass)]
#[cfg_attr(feature = "python", pyclass(get_all, set_all))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub grid_color: String,
    pub grid_opacity: f64,
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub background: Option<String>,
}

impl RenderConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// 绘图区宽度（扣除左右边距）
    pub fn plot_width(&self) -> f64 {
        (self.width as f64 - self.margin_left - self.margin_right).max(1.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height as f64 - self.margin_top - self.margin_bottom).max(1.0)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 260,
            margin_top: 10.0,
            margin_right: 10.0,
            margin_bottom: 0.0,
            margin_left: 10.0,
            grid_color: "#374151".to_string(),
            grid_opacity: 0.3,
            grid_rows: 4,
            grid_cols: 6,
            background: None,
        }
    }
}

/// 查看器整体配置
#[cfg_attr(feature = "python", gen_stub_pyclass)]
#[cfg_attr(feature = "python", pyclass(get_all, set_all))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub catalog_path: String,
    pub progress_path: String,
    pub generate: GenerateConfig,
    pub render: RenderConfig,
}

impl ViewerConfig {
    pub fn new(
        catalog_path: impl Into<String>,
        progress_path: impl Into<String>,
        generate: GenerateConfig,
        render: RenderConfig,
    ) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            progress_path: progress_path.into(),
            generate,
            render,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new(
            "modules.json",
            "completed_modules.json",
            GenerateConfig::default(),
            RenderConfig::default(),
        )
    }
}

#[cfg(feature = "python")]
#[gen_stub_pymethods]
#[pymethods]
impl GenerateConfig {
    #[new]
    #[pyo3(signature = (*, seed=None, length=None))]
    pub fn py_new(seed: Option<u64>, length: Option<usize>) -> Self {
        Self::new(seed, length)
    }
}

#[cfg(feature = "python")]
#[gen_stub_pymethods]
#[pymethods]
impl RenderConfig {
    #[new]
    #[pyo3(signature = (*, width=640, height=260))]
    pub fn py_new(width: u32, height: u32) -> Self {
        Self::new(width, height)
    }
}

#[cfg(feature = "python")]
#[gen_stub_pymethods]
#[pymethods]
impl ViewerConfig {
    #[new]
    #[pyo3(signature = (
        *,
        catalog_path="modules.json".to_string(),
        progress_path="completed_modules.json".to_string(),
        generate=GenerateConfig::default(),
        render=RenderConfig::default()
    ))]
    pub fn py_new(
        catalog_path: String,
        progress_path: String,
        generate: GenerateConfig,
        render: RenderConfig,
    ) -> Self {
        Self::new(catalog_path, progress_path, generate, render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let draw = |config: &GenerateConfig| {
            let mut rng = config.make_rng();
            (0..8).map(|_| rng.random::<f64>()).collect::<Vec<f64>>()
        };
        let a = draw(&GenerateConfig::seeded(42));
        assert_eq!(a, draw(&GenerateConfig::seeded(42)));
        // 同一个 RNG 连续取值互不相同
        assert!(a.windows(2).all(|pair| pair[0] != pair[1]));
        assert_ne!(a, draw(&GenerateConfig::seeded(43)));
    }

    #[test]
    fn test_derive_offsets_seed() {
        let config = GenerateConfig::seeded(7);
        assert_eq!(config.derive(3).seed, Some(10));
        assert_eq!(GenerateConfig::default().derive(3).seed, None);
    }

    #[test]
    fn test_viewer_config_from_partial_json() {
        let config: ViewerConfig =
            serde_json::from_str(r#"{"catalog_path": "content.json", "generate": {"seed": 1}}"#)
                .unwrap();
        assert_eq!(config.catalog_path, "content.json");
        assert_eq!(config.progress_path, "completed_modules.json");
        assert_eq!(config.generate.seed, Some(1));
        assert_eq!(config.render.width, 640);
    }
}
