//! 由短边与宽高比计算图像尺寸

use pyo3::{
    pyclass, pymethods,
    types::{PyAnyMethods, PyDict, PyType},
    Bound, Py, PyResult, Python,
};

use crate::core::{
    category::CATEGORY_GVF,
    types::{NODE_FLOAT, NODE_INT},
    PromptServer,
};

/// 由短边长度与宽高比计算 (width, height)
#[pyclass(subclass)]
pub struct SizeFromAspectRatio {}

impl PromptServer for SizeFromAspectRatio {}

#[pymethods]
impl SizeFromAspectRatio {
    #[new]
    fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .try_init();
        Self {}
    }

    #[classmethod]
    #[pyo3(name = "INPUT_TYPES")]
    fn input_types(_cls: &Bound<'_, PyType>) -> PyResult<Py<PyDict>> {
        Python::with_gil(|py| {
            let dict = PyDict::new(py);
            dict.set_item("required", {
                let required = PyDict::new(py);
                required.set_item(
                    "side_length",
                    (NODE_INT, {
                        let side_length = PyDict::new(py);
                        side_length.set_item("default", 512)?;
                        side_length.set_item("min", 1)?;
                        side_length.set_item("max", 8192)?;
                        side_length.set_item("step", 8)?;
                        side_length
                    }),
                )?;
                required.set_item(
                    "aspect_ratio",
                    (NODE_FLOAT, {
                        let aspect_ratio = PyDict::new(py);
                        aspect_ratio.set_item("default", 1.0)?;
                        aspect_ratio.set_item("min", 0.1)?;
                        aspect_ratio.set_item("max", 10.0)?;
                        aspect_ratio.set_item("step", 0.01)?;
                        aspect_ratio
                    }),
                )?;
                required
            })?;
            Ok(dict.into())
        })
    }

    #[classattr]
    #[pyo3(name = "INPUT_IS_LIST")]
    fn input_is_list() -> bool {
        false
    }

    #[classattr]
    #[pyo3(name = "RETURN_TYPES")]
    fn return_types() -> (&'static str, &'static str) {
        (NODE_INT, NODE_INT)
    }

    #[classattr]
    #[pyo3(name = "RETURN_NAMES")]
    fn return_names() -> (&'static str, &'static str) {
        ("width", "height")
    }

    #[classattr]
    #[pyo3(name = "OUTPUT_IS_LIST")]
    fn output_is_list() -> (bool, bool) {
        (false, false)
    }

    #[classattr]
    #[pyo3(name = "CATEGORY")]
    const CATEGORY: &'static str = CATEGORY_GVF;

    #[classattr]
    #[pyo3(name = "DESCRIPTION")]
    fn description() -> &'static str {
        "Computes width and height from a short side length and an aspect ratio."
    }

    #[classattr]
    #[pyo3(name = "FUNCTION")]
    const FUNCTION: &'static str = "execute";

    #[pyo3(name = "execute")]
    fn execute(&mut self, side_length: i64, aspect_ratio: f64) -> PyResult<(i64, i64)> {
        Ok(self.size_from_aspect(side_length, aspect_ratio))
    }
}

impl SizeFromAspectRatio {
    /// 宽高比为 1.0 时两个分支结果一致
    fn size_from_aspect(&self, side_length: i64, aspect_ratio: f64) -> (i64, i64) {
        if aspect_ratio > 1.0 {
            (side_length, (side_length as f64 * aspect_ratio) as i64)
        } else {
            ((side_length as f64 * aspect_ratio) as i64, side_length)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_aspect() {
        let node = SizeFromAspectRatio {};
        assert_eq!(node.size_from_aspect(512, 2.0), (512, 1024));
    }

    #[test]
    fn test_tall_aspect() {
        let node = SizeFromAspectRatio {};
        assert_eq!(node.size_from_aspect(512, 0.5), (256, 512));
    }

    #[test]
    fn test_square_takes_else_branch() {
        let node = SizeFromAspectRatio {};
        assert_eq!(node.size_from_aspect(512, 1.0), (512, 512));
    }

    #[test]
    fn test_truncates_toward_zero() {
        let node = SizeFromAspectRatio {};
        // 333 * 1.5 = 499.5 -> 499
        assert_eq!(node.size_from_aspect(333, 1.5), (333, 499));
        // 333 * 0.4 = 133.2 -> 133
        assert_eq!(node.size_from_aspect(333, 0.4), (133, 333));
    }
}
