//! comfy.sd 模块包装
//! 依赖:
//! - python: comfy.sd

use pyo3::{
    types::{PyAnyMethods, PyDict, PyModule},
    Bound, PyAny, Python,
};

use crate::error::Error;

/// 检查点加载结果
///
/// load_checkpoint_guess_config 还会返回 clip vision 等额外条目, 这里只保留前三项
#[derive(Debug)]
pub struct CheckpointArtifacts<'py> {
    pub model: Bound<'py, PyAny>,
    pub clip: Bound<'py, PyAny>,
    pub vae: Bound<'py, PyAny>,
}

/// 调用 comfy.sd.load_checkpoint_guess_config 加载检查点
///
/// 加载失败时宿主端异常原样向上传播
pub fn load_checkpoint_guess_config<'py>(
    py: Python<'py>,
    ckpt_path: &str,
    embedding_directory: Option<Bound<'py, PyAny>>,
) -> Result<CheckpointArtifacts<'py>, Error> {
    let sd = PyModule::import(py, "comfy.sd")?;

    let kwargs = PyDict::new(py);
    kwargs.set_item("output_vae", true)?;
    kwargs.set_item("output_clip", true)?;
    if let Some(embedding_directory) = embedding_directory {
        kwargs.set_item("embedding_directory", embedding_directory)?;
    }

    let out = sd
        .getattr("load_checkpoint_guess_config")?
        .call((ckpt_path,), Some(&kwargs))?;

    Ok(CheckpointArtifacts {
        model: out.get_item(0)?,
        clip: out.get_item(1)?,
        vae: out.get_item(2)?,
    })
}
