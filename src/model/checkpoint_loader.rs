//! 加载模型检查点

use log::error;
use pyo3::{
    exceptions::PyRuntimeError,
    pyclass, pymethods,
    types::{PyAnyMethods, PyDict, PyType},
    Bound, Py, PyAny, PyErr, PyResult, Python,
};

use crate::{
    core::{
        category::CATEGORY_GVF,
        types::{NODE_CLIP, NODE_MODEL, NODE_STRING, NODE_VAE},
        PromptServer,
    },
    error::Error,
    wrapper::comfy::{folder_paths, sd},
};

/// 加载检查点并同时输出它的名称
///
/// 路径解析与模型加载均委托给宿主端
#[pyclass(subclass)]
pub struct CheckpointLoaderWithName {}

impl PromptServer for CheckpointLoaderWithName {}

#[pymethods]
impl CheckpointLoaderWithName {
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
            let ckpt_names = folder_paths::get_filename_list(py, "checkpoints")
                .map_err(|e| PyErr::new::<PyRuntimeError, _>(e.to_string()))?;

            let dict = PyDict::new(py);
            dict.set_item("required", {
                let required = PyDict::new(py);
                required.set_item(
                    "ckpt_name",
                    (ckpt_names, {
                        let ckpt_name = PyDict::new(py);
                        ckpt_name.set_item("tooltip", "The name of the checkpoint to load.")?;
                        ckpt_name
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
    fn return_types() -> (&'static str, &'static str, &'static str, &'static str) {
        (NODE_MODEL, NODE_CLIP, NODE_VAE, NODE_STRING)
    }

    #[classattr]
    #[pyo3(name = "RETURN_NAMES")]
    fn return_names() -> (&'static str, &'static str, &'static str, &'static str) {
        ("model", "clip", "vae", "ckpt_name")
    }

    #[classattr]
    #[pyo3(name = "OUTPUT_IS_LIST")]
    fn output_is_list() -> (bool, bool, bool, bool) {
        (false, false, false, false)
    }

    #[classattr]
    #[pyo3(name = "CATEGORY")]
    const CATEGORY: &'static str = CATEGORY_GVF;

    #[classattr]
    #[pyo3(name = "DESCRIPTION")]
    fn description() -> &'static str {
        "Loads a checkpoint and passes its name through."
    }

    #[classattr]
    #[pyo3(name = "FUNCTION")]
    const FUNCTION: &'static str = "execute";

    #[pyo3(name = "execute")]
    #[allow(clippy::type_complexity)]
    fn execute<'py>(
        &mut self,
        py: Python<'py>,
        ckpt_name: String,
    ) -> PyResult<(Bound<'py, PyAny>, Bound<'py, PyAny>, Bound<'py, PyAny>, String)> {
        let result = self.load_checkpoint(py, &ckpt_name);

        match result {
            Ok(v) => Ok(v),
            Err(e) => {
                error!("load checkpoint failed, {e}");
                if let Err(e) =
                    self.send_error(py, "LOAD_CHECKPOINT_ERROR".to_string(), e.to_string())
                {
                    error!("send error failed, {e}");
                    return Err(PyErr::new::<PyRuntimeError, _>(e.to_string()));
                };
                Err(PyErr::new::<PyRuntimeError, _>(e.to_string()))
            }
        }
    }
}

impl CheckpointLoaderWithName {
    /// 解析路径并加载, 名称原样向后传递
    #[allow(clippy::type_complexity)]
    fn load_checkpoint<'py>(
        &self,
        py: Python<'py>,
        ckpt_name: &str,
    ) -> Result<(Bound<'py, PyAny>, Bound<'py, PyAny>, Bound<'py, PyAny>, String), Error> {
        let ckpt_path = folder_paths::get_full_path(py, "checkpoints", ckpt_name)?;
        let embedding_directory = folder_paths::get_folder_paths(py, "embeddings")?;

        let artifacts =
            sd::load_checkpoint_guess_config(py, &ckpt_path, Some(embedding_directory))?;

        Ok((
            artifacts.model,
            artifacts.clip,
            artifacts.vae,
            ckpt_name.to_string(),
        ))
    }
}
