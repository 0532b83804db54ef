//! 节点注册

use pyo3::{PyResult, Python};

use crate::{
    core::node::NodeRegister,
    image::{CropToAspectRatio, CropToAspectRatioMinMax, SizeFromAspectRatio},
    logic::{IfElseValues, IfElseValuesInt},
    model::CheckpointLoaderWithName,
};

pub fn node_register(py: Python<'_>) -> PyResult<Vec<NodeRegister<'_>>> {
    let nodes: Vec<NodeRegister> = vec![
        // image
        NodeRegister(
            "CropToAspectRatioMinMax",
            py.get_type::<CropToAspectRatioMinMax>(),
            "Crop Image to Min/Max Aspect Ratio",
        ),
        NodeRegister(
            "CropToAspectRatio",
            py.get_type::<CropToAspectRatio>(),
            "Crop Image to Aspect Ratio",
        ),
        NodeRegister(
            "SizeFromAspectRatio",
            py.get_type::<SizeFromAspectRatio>(),
            "Image Size from Aspect Ratio",
        ),
        // logic
        NodeRegister(
            "IfElseValues",
            py.get_type::<IfElseValues>(),
            "If else with two float values",
        ),
        NodeRegister(
            "IfElseValuesInt",
            py.get_type::<IfElseValuesInt>(),
            "If else with two int values",
        ),
        // model
        NodeRegister(
            "CheckpointLoaderWithName",
            py.get_type::<CheckpointLoaderWithName>(),
            "Load Checkpoint with Name",
        ),
    ];
    Ok(nodes)
}
