use crate::node::{Node, NodeId, NodeKind};
use crate::rectangle::{Bounded, Rectangle};
use crate::rtree::RTree;

/// 插入操作相关算法
impl<T: Bounded> RTree<T> {
    /// 插入一个对象
    ///
    /// 对象的边界框在此刻捕获一次，之后树不再读取对象本身。
    /// 沿途每个节点的边界只会扩大，删除也不会让它收缩。
    pub fn insert(&mut self, object: T) {
        let bounds = object.bounds();
        let leaf = self.alloc(Node::new_leaf(object, bounds));
        self.place(self.root_id(), leaf);
    }

    /// 递归下降，把对象叶子放进树里
    fn place(&mut self, target: NodeId, node: NodeId) {
        // 先只读地取出路由信息，再做可变操作
        let route = match &self.node(target).kind {
            NodeKind::Bucket { .. } => None,
            NodeKind::Directory { partitions } => Some(*partitions),
            NodeKind::Leaf { .. } => {
                panic!("Placement target must be a bucket or directory: {}", target)
            }
        };

        match route {
            None => {
                // 桶直接收养；子节点数超过容量就地分裂
                self.adopt_child(target, node);
                if self.bucket_len(target) > self.capacity() {
                    self.split(target);
                }
            }
            Some([first, second]) => {
                let bounds = self.node(node).bounds;
                let chosen = self.choose_partition(first, second, &bounds);
                self.place(chosen, node);

                // 回溯时用选中分区的最新边界扩展自身
                let chosen_bounds = self.node(chosen).bounds;
                let target_node = self.node_mut(target);
                target_node.bounds = target_node.bounds.union(&chosen_bounds);
            }
        }
    }

    /// 在目录的两个分区中选择下降目标
    ///
    /// 取第一个与待放置边界重叠的分区；都不重叠时取中心距离
    /// 更近的分区，距离相等时取第一个分区。
    fn choose_partition(&self, first: NodeId, second: NodeId, bounds: &Rectangle) -> NodeId {
        let first_bounds = self.node(first).bounds;
        if first_bounds.intersects(bounds) {
            return first;
        }
        let second_bounds = self.node(second).bounds;
        if second_bounds.intersects(bounds) {
            return second;
        }

        if first_bounds.center_distance(bounds) <= second_bounds.center_distance(bounds) {
            first
        } else {
            second
        }
    }

    /// 桶的直接子节点数量
    fn bucket_len(&self, id: NodeId) -> usize {
        match self.node(id).children() {
            Some(children) => children.len(),
            None => panic!("Expected a bucket: {}", id),
        }
    }
}
