//! 节点分类
//!
//! 所有节点挂在同一个菜单根下

pub const CATEGORY_GVF: &str = "gvf";
