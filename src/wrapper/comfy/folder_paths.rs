//! folder_paths 模块包装
//! 依赖:
//! - python: folder_paths

use pyo3::{
    types::{PyAnyMethods, PyModule},
    Bound, PyAny, Python,
};

use crate::error::Error;

/// 列出指定模型目录下可用的文件名
pub fn get_filename_list(py: Python<'_>, folder_name: &str) -> Result<Vec<String>, Error> {
    let folder_paths = PyModule::import(py, "folder_paths")?;
    let names = folder_paths
        .getattr("get_filename_list")?
        .call1((folder_name,))?;
    Ok(names.extract()?)
}

/// 将模型文件名解析为完整路径
///
/// 宿主端未找到文件时返回 None, 这里转为 CheckpointNotFound
pub fn get_full_path(py: Python<'_>, folder_name: &str, filename: &str) -> Result<String, Error> {
    let folder_paths = PyModule::import(py, "folder_paths")?;
    let path = folder_paths
        .getattr("get_full_path")?
        .call1((folder_name, filename))?;

    if path.is_none() {
        return Err(Error::CheckpointNotFound(filename.to_string()));
    }
    Ok(path.extract()?)
}

/// 获取指定模型目录的搜索路径列表
pub fn get_folder_paths<'py>(
    py: Python<'py>,
    folder_name: &str,
) -> Result<Bound<'py, PyAny>, Error> {
    let folder_paths = PyModule::import(py, "folder_paths")?;
    Ok(folder_paths
        .getattr("get_folder_paths")?
        .call1((folder_name,))?)
}
