//! 浮点二选一

use pyo3::{
    pyclass, pymethods,
    types::{PyAnyMethods, PyDict, PyType},
    Bound, Py, PyResult, Python,
};

use crate::core::{
    category::CATEGORY_GVF,
    types::{NODE_BOOL, NODE_FLOAT},
    PromptServer,
};

/// 条件为真返回第一个值, 否则返回第二个值
#[pyclass(subclass)]
pub struct IfElseValues {}

impl PromptServer for IfElseValues {}

#[pymethods]
impl IfElseValues {
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
                    "if_true",
                    (NODE_FLOAT, {
                        let if_true = PyDict::new(py);
                        if_true.set_item("default", 1.0)?;
                        if_true.set_item("min", 0.1)?;
                        if_true.set_item("max", 10.0)?;
                        if_true.set_item("step", 0.01)?;
                        if_true
                    }),
                )?;
                required.set_item(
                    "if_false",
                    (NODE_FLOAT, {
                        let if_false = PyDict::new(py);
                        if_false.set_item("default", 0.0)?;
                        if_false.set_item("min", 0.1)?;
                        if_false.set_item("max", 10.0)?;
                        if_false.set_item("step", 0.01)?;
                        if_false
                    }),
                )?;
                required.set_item(
                    "condition",
                    (NODE_BOOL, {
                        let condition = PyDict::new(py);
                        condition.set_item("default", false)?;
                        condition
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
    fn return_types() -> (&'static str,) {
        (NODE_FLOAT,)
    }

    #[classattr]
    #[pyo3(name = "RETURN_NAMES")]
    fn return_names() -> (&'static str,) {
        ("value",)
    }

    #[classattr]
    #[pyo3(name = "OUTPUT_IS_LIST")]
    fn output_is_list() -> (bool,) {
        (false,)
    }

    #[classattr]
    #[pyo3(name = "CATEGORY")]
    const CATEGORY: &'static str = CATEGORY_GVF;

    #[classattr]
    #[pyo3(name = "DESCRIPTION")]
    fn description() -> &'static str {
        "Return the first value if true, otherwise the second."
    }

    #[classattr]
    #[pyo3(name = "FUNCTION")]
    const FUNCTION: &'static str = "execute";

    #[pyo3(name = "execute")]
    fn execute(&mut self, if_true: f64, if_false: f64, condition: bool) -> PyResult<(f64,)> {
        Ok((self.select(if_true, if_false, condition),))
    }
}

impl IfElseValues {
    fn select(&self, if_true: f64, if_false: f64, condition: bool) -> f64 {
        if condition {
            if_true
        } else {
            if_false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        let node = IfElseValues {};
        assert_eq!(node.select(5.0, 1.0, true), 5.0);
        assert_eq!(node.select(5.0, 1.0, false), 1.0);
    }
}
