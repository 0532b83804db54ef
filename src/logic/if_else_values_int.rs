//! 整数二选一

use pyo3::{
    pyclass, pymethods,
    types::{PyAnyMethods, PyDict, PyType},
    Bound, Py, PyResult, Python,
};

use crate::core::{
    category::CATEGORY_GVF,
    types::{NODE_BOOL, NODE_INT, NODE_INT_MAX},
    PromptServer,
};

/// 条件为真返回第一个值, 否则返回第二个值
///
/// 与浮点版相互独立, 不做数值域转换
#[pyclass(subclass)]
pub struct IfElseValuesInt {}

impl PromptServer for IfElseValuesInt {}

#[pymethods]
impl IfElseValuesInt {
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
                    (NODE_INT, {
                        let if_true = PyDict::new(py);
                        if_true.set_item("default", 1)?;
                        if_true.set_item("min", 0)?;
                        if_true.set_item("max", NODE_INT_MAX)?;
                        if_true.set_item("step", 1)?;
                        if_true
                    }),
                )?;
                required.set_item(
                    "if_false",
                    (NODE_INT, {
                        let if_false = PyDict::new(py);
                        if_false.set_item("default", 0)?;
                        if_false.set_item("min", 0)?;
                        if_false.set_item("max", NODE_INT_MAX)?;
                        if_false.set_item("step", 1)?;
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
        (NODE_INT,)
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
    fn execute(&mut self, if_true: i64, if_false: i64, condition: bool) -> PyResult<(i64,)> {
        Ok((self.select(if_true, if_false, condition),))
    }
}

impl IfElseValuesInt {
    fn select(&self, if_true: i64, if_false: i64, condition: bool) -> i64 {
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
        let node = IfElseValuesInt {};
        assert_eq!(node.select(5, 1, true), 5);
        assert_eq!(node.select(5, 1, false), 1);
    }
}
