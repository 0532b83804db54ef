//! 逻辑

use pyo3::{
    types::{PyModule, PyModuleMethods},
    Bound, PyResult, Python,
};

mod if_else_values;
pub use if_else_values::IfElseValues;

mod if_else_values_int;
pub use if_else_values_int::IfElseValuesInt;

/// 逻辑模块
pub fn submodule(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let submodule = PyModule::new(py, "logic")?;
    submodule.add_class::<IfElseValues>()?;
    submodule.add_class::<IfElseValuesInt>()?;
    Ok(submodule)
}
