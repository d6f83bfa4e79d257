use derive_more::Display;

use crate::rectangle::Rectangle;

/// 节点在arena中的编号
///
/// 节点之间的所有引用（父节点、桶的子节点、目录的分区）都通过编号间接表示，
/// 由RTree内部的arena负责解析。节点销毁后其编号槽位可能被后续节点复用。
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "node#{}", _0)]
pub struct NodeId(pub(crate) usize);

/// 节点形态 - 用标签联合区分三种节点，使非法状态无法表示
///
/// 桶的子节点列表和目录的分区数组不可能同时存在；
/// 目录的分区数量被类型固定为2，分裂之外的路径无法改变它。
#[derive(Debug, Clone)]
pub enum NodeKind<T> {
    /// 桶节点：直接持有若干对象叶子，数量由容量上限约束
    Bucket { children: Vec<NodeId> },
    /// 目录节点：溢出分裂后恰好持有两个分区
    Directory { partitions: [NodeId; 2] },
    /// 对象叶子：包装一个用户对象
    Leaf { payload: T },
}

/// R-tree节点
///
/// bounds始终包含节点下方所有对象边界框的并集（只会随插入扩大，删除不收缩）。
/// parent是非拥有的反向引用，仅用于分离操作；所有权只沿子节点方向存在。
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// 节点的最小边界矩形
    pub bounds: Rectangle,
    /// 父节点编号（根节点为None）
    pub parent: Option<NodeId>,
    /// 节点形态与内容
    pub kind: NodeKind<T>,
}

impl<T> Node<T> {
    /// 创建空的桶节点
    ///
    /// 新桶使用EMPTY占位边界，收养第一个子节点时占位值会被真实边界取代。
    pub fn new_bucket(parent: Option<NodeId>) -> Self {
        Node {
            bounds: Rectangle::EMPTY,
            parent,
            kind: NodeKind::Bucket {
                children: Vec::new(),
            },
        }
    }

    /// 创建对象叶子节点
    ///
    /// 边界框在插入时捕获一次，之后不再读取对象本身。
    pub fn new_leaf(payload: T, bounds: Rectangle) -> Self {
        Node {
            bounds,
            parent: None,
            kind: NodeKind::Leaf { payload },
        }
    }

    /// 检查是否为桶节点
    pub fn is_bucket(&self) -> bool {
        matches!(self.kind, NodeKind::Bucket { .. })
    }

    /// 检查是否为目录节点
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// 检查是否为对象叶子
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// 获取桶节点的子节点编号列表（非桶节点返回None）
    pub fn children(&self) -> Option<&[NodeId]> {
        match &self.kind {
            NodeKind::Bucket { children } => Some(children),
            _ => None,
        }
    }

    /// 获取目录节点的两个分区编号（非目录节点返回None）
    pub fn partitions(&self) -> Option<[NodeId; 2]> {
        match &self.kind {
            NodeKind::Directory { partitions } => Some(*partitions),
            _ => None,
        }
    }

    /// 获取对象叶子携带的用户对象（非叶子节点返回None）
    pub fn payload(&self) -> Option<&T> {
        match &self.kind {
            NodeKind::Leaf { payload } => Some(payload),
            _ => None,
        }
    }
}
