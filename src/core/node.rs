//! 节点注册表

use pyo3::{types::PyType, Bound};

/// 节点注册项: (节点标识, 节点类型, 显示名称)
///
/// 标识与显示名称在模块初始化时写入
/// NODE_CLASS_MAPPINGS/NODE_DISPLAY_NAME_MAPPINGS, 之后只读
pub struct NodeRegister<'py>(
    pub &'static str,
    pub Bound<'py, PyType>,
    pub &'static str,
);
