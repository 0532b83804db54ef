//! comfyui 宿主 API 包装
pub mod folder_paths;
pub mod sd;
