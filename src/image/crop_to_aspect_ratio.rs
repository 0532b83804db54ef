//! 按目标宽高比裁剪图像

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

/// 按目标宽高比裁剪图像
///
/// 宽高比完全相等时原样返回输入
#[pyclass(subclass)]
pub struct CropToAspectRatio {
    device: Device,
}

impl PromptServer for CropToAspectRatio {}

#[pymethods]
impl CropToAspectRatio {
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
                    "target_aspect",
                    (NODE_FLOAT, {
                        let target_aspect = PyDict::new(py);
                        target_aspect.set_item("default", 0.6666666666666)?;
                        target_aspect.set_item("min", 0.1)?;
                        target_aspect.set_item("max", 10.0)?;
                        target_aspect.set_item("step", 0.01)?;
                        target_aspect
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
        "Crops an image to a specific aspect ratio."
    }

    #[classattr]
    #[pyo3(name = "FUNCTION")]
    const FUNCTION: &'static str = "execute";

    #[pyo3(name = "execute")]
    fn execute<'py>(
        &mut self,
        py: Python<'py>,
        images: Bound<'py, PyAny>,
        target_aspect: f64,
    ) -> PyResult<(Bound<'py, PyAny>, usize, usize)> {
        let result = self.crop(py, images, target_aspect);

        match result {
            Ok(v) => Ok(v),
            Err(e) => {
                error!("crop to aspect ratio failed, {e}");
                if let Err(e) =
                    self.send_error(py, "CROP_TO_ASPECT_RATIO_ERROR".to_string(), e.to_string())
                {
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

impl CropToAspectRatio {
    /// 单轴居中裁剪, 返回裁剪前的宽高
    fn crop<'py>(
        &self,
        py: Python<'py>,
        images: Bound<'py, PyAny>,
        target_aspect: f64,
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
        if aspect == target_aspect {
            return Ok((images, width, height));
        }

        let tensor = TensorWrapper::<f32>::new(&images, &self.device)?.into_tensor();
        let (tensor, width, height) =
            crop_to_aspect_range(&tensor, target_aspect, target_aspect)?;
        let images = TensorWrapper::<f32>::from_tensor(tensor).to_py_tensor(py)?;

        Ok((images, width, height))
    }
}
