use crate::node::{Node, NodeId, NodeKind};
use crate::rectangle::Rectangle;

/// 孤儿节点错误 - 试图分离一个没有父节点的节点
///
/// 只有根节点没有父节点，而公开操作从不分离根节点，
/// 所以这个错误标志着内部逻辑错误，立即上报，不做重试。
#[derive(Debug, thiserror::Error)]
#[error("Cannot detach a node that has no parent")]
pub struct OrphanError;

/// R-tree主结构
///
/// 所有节点集中存放在arena中，节点之间通过NodeId相互引用。
/// 根节点在构造时创建且永远不变：树通过桶的就地分裂向下生长，
/// 而不是向上抬升根节点。
#[derive(Debug, Clone)]
pub struct RTree<T> {
    /// 节点arena，None表示已释放的空槽
    nodes: Vec<Option<Node<T>>>,
    /// 空槽编号列表，释放的槽位优先复用
    free: Vec<NodeId>,
    /// 根节点编号（桶或目录，永远不是对象叶子）
    root: NodeId,
    /// 桶的容量上限M：子节点数超过M时触发分裂
    capacity: usize,
}

impl<T> RTree<T> {
    /// 创建新的R-tree
    ///
    /// 根节点是一个空桶，使用EMPTY占位边界。
    /// 容量必须大于1：容量为1的桶在每次插入后都会立即溢出。
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 2, "Capacity must be at least 2");

        let mut tree = RTree {
            nodes: Vec::new(),
            free: Vec::new(),
            root: NodeId(0),
            capacity,
        };
        tree.root = tree.alloc(Node::new_bucket(None));
        tree
    }

    /// 检查R-tree是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 获取存储的对象数量
    pub fn len(&self) -> usize {
        self.count_objects(self.root)
    }

    /// 统计子树中的对象叶子数量
    fn count_objects(&self, id: NodeId) -> usize {
        match &self.node(id).kind {
            NodeKind::Leaf { .. } => 1,
            NodeKind::Bucket { children } => {
                children.iter().map(|&child| self.count_objects(child)).sum()
            }
            NodeKind::Directory { partitions } => {
                self.count_objects(partitions[0]) + self.count_objects(partitions[1])
            }
        }
    }

    /// 获取树的深度（根节点还是桶时为1）
    pub fn depth(&self) -> usize {
        self.depth_of(self.root)
    }

    /// 计算子树的深度，对象叶子不计入层数
    fn depth_of(&self, id: NodeId) -> usize {
        match &self.node(id).kind {
            NodeKind::Leaf { .. } | NodeKind::Bucket { .. } => 1,
            NodeKind::Directory { partitions } => {
                1 + self.depth_of(partitions[0]).max(self.depth_of(partitions[1]))
            }
        }
    }

    /// 获取桶的容量上限
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 获取根节点的边界（空树返回EMPTY占位值）
    pub fn root_bounds(&self) -> Rectangle {
        self.node(self.root).bounds
    }

    /// 获取根节点的只读视图
    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef {
            tree: self,
            id: self.root,
        }
    }

    /// 内部方法：获取根节点编号
    pub(crate) fn root_id(&self) -> NodeId {
        self.root
    }

    /// 内部方法：在arena中分配一个节点，返回其编号
    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// 内部方法：释放节点占用的槽位，编号进入复用列表
    pub(crate) fn release(&mut self, id: NodeId) {
        self.nodes[id.0] = None;
        self.free.push(id);
    }

    /// 内部方法：按编号访问节点
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        match &self.nodes[id.0] {
            Some(node) => node,
            None => panic!("Stale node id: {}", id),
        }
    }

    /// 内部方法：按编号访问节点（可变）
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.nodes[id.0] {
            Some(node) => node,
            None => panic!("Stale node id: {}", id),
        }
    }

    /// 内部方法：把节点收养为桶的子节点
    ///
    /// 设置子节点的父引用，并用子节点的边界扩展桶的边界。
    pub(crate) fn adopt_child(&mut self, parent: NodeId, child: NodeId) {
        let child_bounds = self.node(child).bounds;
        let expanded = self.node(parent).bounds.union(&child_bounds);
        self.adopt_child_with_bounds(parent, child, expanded);
    }

    /// 内部方法：收养子节点并直接写入桶的新边界
    ///
    /// 分裂过程中调用方已经算好并集，不再重复计算。
    pub(crate) fn adopt_child_with_bounds(
        &mut self,
        parent: NodeId,
        child: NodeId,
        bounds: Rectangle,
    ) {
        self.node_mut(child).parent = Some(parent);

        let node = self.node_mut(parent);
        match &mut node.kind {
            NodeKind::Bucket { children } => children.push(child),
            _ => panic!("Adoption target must be a bucket: {}", parent),
        }
        node.bounds = bounds;
    }

    /// 内部方法：把子节点从桶中移出
    ///
    /// 清除子节点的父引用。桶的边界不收缩。
    /// 目录的分区被类型固定为2个，不存在从目录分离的路径。
    pub(crate) fn detach_child(&mut self, parent: NodeId, child: NodeId) {
        let node = self.node_mut(parent);
        match &mut node.kind {
            NodeKind::Bucket { children } => {
                children.retain(|&c| c != child);
            }
            _ => panic!("Detach target must be a bucket: {}", parent),
        }
        self.node_mut(child).parent = None;
    }

    /// 内部方法：把节点从其父节点中分离
    ///
    /// 节点没有父节点时返回OrphanError。
    pub(crate) fn detach(&mut self, id: NodeId) -> Result<(), OrphanError> {
        match self.node(id).parent {
            Some(parent) => {
                self.detach_child(parent, id);
                Ok(())
            }
            None => Err(OrphanError),
        }
    }
}

/// 树节点的只读视图
///
/// 把arena中的节点和它所属的树绑定在一起，
/// 供诊断与可视化消费者逐层浏览树结构。
pub struct NodeRef<'a, T> {
    tree: &'a RTree<T>,
    id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    /// 节点编号
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// 节点的边界矩形
    pub fn bounds(&self) -> Rectangle {
        self.tree.node(self.id).bounds
    }

    /// 父节点视图（根节点返回None）
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.tree.node(self.id).parent.map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    /// 是否为桶节点
    pub fn is_bucket(&self) -> bool {
        self.tree.node(self.id).is_bucket()
    }

    /// 是否为目录节点
    pub fn is_directory(&self) -> bool {
        self.tree.node(self.id).is_directory()
    }

    /// 是否为对象叶子
    pub fn is_leaf(&self) -> bool {
        self.tree.node(self.id).is_leaf()
    }

    /// 桶的子节点视图列表（非桶节点返回空列表）
    pub fn children(&self) -> Vec<NodeRef<'a, T>> {
        match self.tree.node(self.id).children() {
            Some(children) => children
                .iter()
                .map(|&id| NodeRef {
                    tree: self.tree,
                    id,
                })
                .collect(),
            None => Vec::new(),
        }
    }

    /// 目录的两个分区视图（非目录节点返回None）
    pub fn partitions(&self) -> Option<[NodeRef<'a, T>; 2]> {
        self.tree.node(self.id).partitions().map(|[a, b]| {
            [
                NodeRef {
                    tree: self.tree,
                    id: a,
                },
                NodeRef {
                    tree: self.tree,
                    id: b,
                },
            ]
        })
    }

    /// 对象叶子携带的用户对象（非叶子节点返回None）
    pub fn payload(&self) -> Option<&'a T> {
        self.tree.node(self.id).payload()
    }
}
