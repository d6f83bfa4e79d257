//! # R-tree 空间索引数据结构
//!
//! 动态的内存二维空间索引：为任意带边界框的对象提供插入、
//! 区域查询与按相等性删除，查询沿节点边界剪枝，不必扫描
//! 全部对象。
//!
//! ## 主要特性
//!
//! - 轴对齐边界框的动态索引，树随桶的就地分裂向下生长
//! - 溢出桶的二路分裂启发式（按轴跨度选种子，按面积与重叠计分分配）
//! - 迭代与递归两种区域查询遍历，结果一致
//! - 按相等性删除，不做分区合并或再平衡
//!
//! ## 使用示例
//!
//! ### 基础用法
//! ```rust
//! use boxtree::{RTree, Rectangle};
//!
//! let mut tree = RTree::new(4);
//! tree.insert(Rectangle::new(0.0, 0.0, 10.0, 10.0));
//! tree.insert(Rectangle::new(20.0, 20.0, 30.0, 30.0));
//!
//! let hits = tree.query(&Rectangle::new(5.0, 5.0, 25.0, 25.0));
//! assert_eq!(hits.len(), 2);
//! ```
//!
//! ### 自定义对象
//! ```rust
//! use boxtree::{Bounded, RTree, Rectangle};
//!
//! struct City {
//!     name: &'static str,
//!     location: Rectangle,
//! }
//!
//! impl Bounded for City {
//!     fn bounds(&self) -> Rectangle {
//!         self.location
//!     }
//! }
//!
//! let mut tree = RTree::new(8);
//! tree.insert(City {
//!     name: "Shenzhen",
//!     location: Rectangle::from_point(114.06, 22.54),
//! });
//!
//! let hits = tree.query(&Rectangle::new(110.0, 20.0, 120.0, 25.0));
//! assert_eq!(hits[0].name, "Shenzhen");
//! ```
//!
//! ### 删除对象
//! ```rust
//! use boxtree::{RTree, Rectangle};
//!
//! let mut tree = RTree::new(4);
//! let rect = Rectangle::new(0.0, 0.0, 1.0, 1.0);
//! tree.insert(rect);
//!
//! assert!(tree.remove(&rect));
//! assert!(tree.is_empty());
//! ```

pub mod rectangle;
pub mod node;
pub mod rtree;
pub mod algorithms;

#[cfg(test)]
mod testutil;

// 重新导出主要的公共接口
pub use node::{Node, NodeId, NodeKind};
pub use rectangle::{Bounded, Rectangle};
pub use rtree::{NodeRef, OrphanError, RTree};
