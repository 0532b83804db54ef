//! Convert to Python object wrapper
//! 依赖:
//! - python: torch

use std::marker::PhantomData;

use candle_core::{Device, Tensor, WithDType};
use numpy::{Element, PyArray, PyArrayDyn, PyArrayMethods, PyUntypedArrayMethods};
use pyo3::{
    exceptions::PyRuntimeError, types::PyAnyMethods, Bound, IntoPyObject, PyAny, PyErr, PyResult,
    Python,
};

use crate::error::Error;

pub struct TensorWrapper<T>
where
    T: Element + WithDType,
{
    tensor: Tensor,
    _marker: PhantomData<T>,
}

impl<T> TensorWrapper<T>
where
    T: Element + WithDType,
{
    pub fn new<'py>(py_any: &Bound<'py, PyAny>, device: &Device) -> PyResult<Self> {
        let tensor = Self::torch_to_candle(py_any, device)
            .map_err(|e| PyErr::new::<PyRuntimeError, _>(e.to_string()))?;

        Ok(Self {
            tensor,
            _marker: PhantomData,
        })
    }

    /// The dimension size for this tensor on each axis.
    pub fn dims(&self) -> &[usize] {
        self.tensor.dims()
    }

    pub fn from_tensor(tensor: Tensor) -> Self {
        Self {
            tensor,
            _marker: PhantomData,
        }
    }

    pub fn into_tensor(self) -> Tensor {
        self.tensor
    }

    /// 从 Python torch.Tensor 转为 Rust candle_core::Tensor
    fn torch_to_candle<'py>(
        torch_tensor: &Bound<'py, PyAny>,
        device: &Device,
    ) -> Result<Tensor, Error> {
        // 用 .numpy() 得到 numpy array
        let np = torch_tensor.call_method0("numpy")?;

        let arr = np
            .downcast::<PyArrayDyn<T>>()
            .map_err(|e| Error::PyDowncastError(e.to_string()))?;

        let shape = arr.shape().to_vec();
        let data = arr.to_vec()?;

        let tensor = Tensor::from_vec(data, shape, device)?;
        Ok(tensor)
    }
}

impl<T> TensorWrapper<T>
where
    T: Element + WithDType,
{
    /// 转换为python对象
    ///
    /// 将数组转换为 python 的 tensor
    /// ```python,ignore
    /// import torch
    /// tensor = torch.tensor(data)
    /// ```
    pub fn to_py_tensor<'py>(self, py: Python<'py>) -> PyResult<Bound<'py, PyAny>> {
        let data = self.into_pyobject(py)?;

        let torch = py.import("torch")?;
        torch.getattr("tensor")?.call1((data,))
    }
}

impl<T> From<Tensor> for TensorWrapper<T>
where
    T: Element + WithDType,
{
    fn from(value: Tensor) -> Self {
        TensorWrapper::from_tensor(value)
    }
}

impl<'py, T> IntoPyObject<'py> for TensorWrapper<T>
where
    T: Element + WithDType,
{
    type Target = PyArrayDyn<T>; // the Python type
    type Output = Bound<'py, Self::Target>; // in most cases this will be `Bound`
    type Error = PyErr; // the conversion error type, has to be convertable to `PyErr`

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let tensor = self.into_tensor();
        let shape = tensor.dims();

        let data = tensor
            .flatten_all()
            .map_err(|e| PyErr::new::<PyRuntimeError, _>(e.to_string()))?
            .to_vec1::<T>()
            .map_err(|e| PyErr::new::<PyRuntimeError, _>(e.to_string()))?;

        // 创建数组并重新排列维度
        let array = PyArray::from_iter(py, data)
            .reshape(shape)
            .map_err(|e| PyErr::new::<PyRuntimeError, _>(e.to_string()))?;

        Ok(array)
    }
}
