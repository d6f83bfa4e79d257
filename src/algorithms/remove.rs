use crate::node::{NodeId, NodeKind};
use crate::rectangle::Bounded;
use crate::rtree::RTree;

/// 删除操作相关算法
impl<T: Bounded + PartialEq> RTree<T> {
    /// 按相等性删除一个对象
    ///
    /// 以对象自身的边界作为查询区域，按遍历顺序取第一个
    /// 对象相等的叶子分离并释放，返回true；没有匹配时
    /// 静默返回false。祖先的边界不收缩，分区不合并，
    /// 目录节点一旦建立就不再回收。
    pub fn remove(&mut self, object: &T) -> bool {
        let target = match self.find_match(object) {
            Some(id) => id,
            None => return false,
        };

        if self.detach(target).is_err() {
            panic!("Matched object leaf has no parent: {}", target);
        }
        self.release(target);
        true
    }

    /// 迭代遍历，定位第一个边界相交且对象相等的叶子
    ///
    /// 与区域查询同一套栈遍历，匹配即停。
    fn find_match(&self, object: &T) -> Option<NodeId> {
        let region = object.bounds();

        let mut stack = vec![self.root_id()];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if !node.bounds.intersects(&region) {
                continue;
            }

            match &node.kind {
                NodeKind::Directory { partitions } => {
                    stack.push(partitions[0]);
                    stack.push(partitions[1]);
                }
                NodeKind::Bucket { children } => {
                    for &child in children {
                        let leaf = self.node(child);
                        if !leaf.bounds.intersects(&region) {
                            continue;
                        }
                        match &leaf.kind {
                            NodeKind::Leaf { payload } if payload == object => {
                                return Some(child);
                            }
                            NodeKind::Leaf { .. } => {}
                            _ => panic!("Bucket child must be an object leaf: {}", child),
                        }
                    }
                }
                NodeKind::Leaf { .. } => {
                    panic!("Traversal reached a detached object leaf: {}", id)
                }
            }
        }

        None
    }
}
