//! 图片

use pyo3::{
    types::{PyModule, PyModuleMethods},
    Bound, PyResult, Python,
};

mod crop_to_aspect_ratio;
pub use crop_to_aspect_ratio::CropToAspectRatio;

mod crop_to_aspect_ratio_min_max;
pub use crop_to_aspect_ratio_min_max::CropToAspectRatioMinMax;

mod size_from_aspect_ratio;
pub use size_from_aspect_ratio::SizeFromAspectRatio;

/// 图片模块
pub fn submodule(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let submodule = PyModule::new(py, "image")?;
    submodule.add_class::<CropToAspectRatio>()?;
    submodule.add_class::<CropToAspectRatioMinMax>()?;
    submodule.add_class::<SizeFromAspectRatio>()?;
    Ok(submodule)
}
