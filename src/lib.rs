use pyo3::{
    pymodule,
    types::{PyDict, PyDictMethods, PyModule, PyModuleMethods},
    Bound, PyResult, Python,
};

pub mod core;
mod error;
pub mod image;
pub mod logic;
pub mod model;
mod register;
pub mod wrapper;

/// A Python module implemented in Rust.
#[pymodule]
#[pyo3(name = "ComfyUI_Gvf")] // 需要与包名保持一致
fn py_init(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_submodule(&image::submodule(py)?)?;
    m.add_submodule(&logic::submodule(py)?)?;
    m.add_submodule(&model::submodule(py)?)?;

    // 注册 ComfyUI NODE_CLASS_MAPPINGS/NODE_DISPLAY_NAME_MAPPINGS
    let node_mapping = PyDict::new(py);
    let name_mapping = PyDict::new(py);
    for node in register::node_register(py)? {
        node_mapping.set_item(node.0, &node.1)?;
        name_mapping.set_item(node.0, node.2)?;
    }

    m.add("NODE_CLASS_MAPPINGS", node_mapping)?;
    m.add("NODE_DISPLAY_NAME_MAPPINGS", name_mapping)?;
    Ok(())
}
