//! 模型

use pyo3::{
    types::{PyModule, PyModuleMethods},
    Bound, PyResult, Python,
};

mod checkpoint_loader;
pub use checkpoint_loader::CheckpointLoaderWithName;

/// 模型模块
pub fn submodule(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let submodule = PyModule::new(py, "model")?;
    submodule.add_class::<CheckpointLoaderWithName>()?;
    Ok(submodule)
}
