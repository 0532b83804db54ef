//! 按宽高比范围裁剪图像

use candle_core::Device;
use log::error;
use pyo3::{
    pyclass, pymethods,
    types::{PyAnyMethods, PyDict, PyType},
    Bound, Py, PyAny, PyErr, PyResult, Python,
};

use crate::{
    core::{
        category::CATEGORY_GVF,
        types::{NODE_FLOAT, NODE_IMAGE, NODE_INT},
        utils::crop_to_aspect_range,
        PromptServer,
    },
    error::Error,
    wrapper::torch::tensor::TensorWrapper,
};

/// 按宽高比范围裁剪图像, 仅在越界时裁剪
///
/// min_aspect > max_aspect 时行为未定义, 由调用方保证
#[pyclass(subclass)]
pub struct CropToAspectRatioMinMax {
    device: Device,
}

impl PromptServer for CropToAspectRatioMinMax {}

#[pymethods]
impl CropToAspectRatioMinMax {
    #[new]
    fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .try_init();
        Self {
            device: Device::Cpu,
        }
    }

    #[classmethod]
    #[pyo3(name = "INPUT_TYPES")]
    fn input_types(_cls: &Bound<'_, PyType>) -> PyResult<Py<PyDict>> {
        Python::with_gil(|py| {
            let dict = PyDict::new(py);
            dict.set_item("required", {
                let required = PyDict::new(py);
                required.set_item(
                    "images",
                    (NODE_IMAGE, {
                        let images = PyDict::new(py);
                        images.set_item("tooltip", "Input image batch")?;
                        images
                    }),
                )?;
                required.set_item(
                    "min_aspect",
                    (NODE_FLOAT, {
                        let min_aspect = PyDict::new(py);
                        min_aspect.set_item("default", 0.6666666666666)?;
                        min_aspect.set_item("min", 0.1)?;
                        min_aspect.set_item("max", 10.0)?;
                        min_aspect.set_item("step", 0.01)?;
                        min_aspect
                    }),
                )?;
                required.set_item(
                    "max_aspect",
                    (NODE_FLOAT, {
                        let max_aspect = PyDict::new(py);
                        max_aspect.set_item("default", 1.5)?;
                        max_aspect.set_item("min", 0.0)?;
                        max_aspect.set_item("max", 10.0)?;
                        max_aspect.set_item("step", 0.01)?;
                        max_aspect
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
    fn return_types() -> (&'static str, &'static str, &'static str) {
        (NODE_IMAGE, NODE_INT, NODE_INT)
    }

    #[classattr]
    #[pyo3(name = "RETURN_NAMES")]
    fn return_names() -> (&'static str, &'static str, &'static str) {
        ("image", "width", "height")
    }

    #[classattr]
    #[pyo3(name = "OUTPUT_IS_LIST")]
    fn output_is_list() -> (bool, bool, bool) {
        (false, false, false)
    }

    #[classattr]
    #[pyo3(name = "CATEGORY")]
    const CATEGORY: &'static str = CATEGORY_GVF;

    #[classattr]
    #[pyo3(name = "DESCRIPTION")]
    fn description() -> &'static str {
        "Crops an image to a max and min aspect ratio, only if such is needed."
    }

    #[classattr]
    #[pyo3(name = "FUNCTION")]
    const FUNCTION: &'static str = "execute";

    #[pyo3(name = "execute")]
    fn execute<'py>(
        &mut self,
        py: Python<'py>,
        images: Bound<'py, PyAny>,
        min_aspect: f64,
        max_aspect: f64,
    ) -> PyResult<(Bound<'py, PyAny>, usize, usize)> {
        let result = self.crop(py, images, min_aspect, max_aspect);

        match result {
            Ok(v) => Ok(v),
            Err(e) => {
                error!("crop to aspect ratio min/max failed, {e}");
                if let Err(e) = self.send_error(
                    py,
                    "CROP_TO_ASPECT_RATIO_MIN_MAX_ERROR".to_string(),
                    e.to_string(),
                ) {
                    error!("send error failed, {e}");
                    return Err(PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
                        e.to_string(),
                    ));
                };
                Err(PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
                    e.to_string(),
                ))
            }
        }
    }
}

impl CropToAspectRatioMinMax {
    /// 单轴居中裁剪, 返回裁剪前的宽高
    fn crop<'py>(
        &self,
        py: Python<'py>,
        images: Bound<'py, PyAny>,
        min_aspect: f64,
        max_aspect: f64,
    ) -> Result<(Bound<'py, PyAny>, usize, usize), Error> {
        // images: NHWC
        let dims: Vec<usize> = images.getattr("shape")?.extract()?;
        if dims.len() != 4 {
            return Err(Error::InvalidParameter(format!(
                "expected NHWC image batch, got {} dims",
                dims.len()
            )));
        }
        let (height, width) = (dims[1], dims[2]);
        let aspect = width as f64 / height as f64;

        // 已满足约束, 返回原对象
        if min_aspect <= aspect && aspect <= max_aspect {
            return Ok((images, width, height));
        }

        let tensor = TensorWrapper::<f32>::new(&images, &self.device)?.into_tensor();
        let (tensor, width, height) = crop_to_aspect_range(&tensor, min_aspect, max_aspect)?;
        let images = TensorWrapper::<f32>::from_tensor(tensor).to_py_tensor(py)?;

        Ok((images, width, height))
    }
}
