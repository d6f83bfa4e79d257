use crate::node::{NodeId, NodeKind};
use crate::rectangle::Rectangle;
use crate::rtree::RTree;

/// 区域查询相关算法
impl<T> RTree<T> {
    /// 查询与区域相交的所有对象
    ///
    /// 基于显式栈的迭代遍历：边界与区域不相交的节点连同
    /// 整棵子树一起剪掉。返回对象的引用，顺序不作保证。
    pub fn query(&self, region: &Rectangle) -> Vec<&T> {
        let mut results = Vec::new();
        self.query_into(region, &mut results);
        results
    }

    /// 查询与区域相交的所有对象，结果写入调用方提供的缓冲区
    ///
    /// 缓冲区在调用开始时清空一次，便于在批量查询中复用分配。
    pub fn query_into<'a>(&'a self, region: &Rectangle, results: &mut Vec<&'a T>) {
        results.clear();

        let mut stack = vec![self.root_id()];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if !node.bounds.intersects(region) {
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
                        if leaf.bounds.intersects(region) {
                            match &leaf.kind {
                                NodeKind::Leaf { payload } => results.push(payload),
                                _ => panic!("Bucket child must be an object leaf: {}", child),
                            }
                        }
                    }
                }
                NodeKind::Leaf { .. } => {
                    panic!("Traversal reached a detached object leaf: {}", id)
                }
            }
        }
    }

    /// 查询与区域相交的所有对象（递归版本）
    ///
    /// 与迭代版本返回同一组对象，只是遍历方式不同。
    pub fn query_recursive(&self, region: &Rectangle) -> Vec<&T> {
        // 累加器只在入口创建一次，递归过程只追加
        let mut results = Vec::new();
        self.query_subtree(self.root_id(), region, &mut results);
        results
    }

    /// 递归收集子树中与区域相交的对象
    fn query_subtree<'a>(&'a self, id: NodeId, region: &Rectangle, results: &mut Vec<&'a T>) {
        let node = self.node(id);
        if !node.bounds.intersects(region) {
            return;
        }

        match &node.kind {
            NodeKind::Directory { partitions } => {
                self.query_subtree(partitions[0], region, results);
                self.query_subtree(partitions[1], region, results);
            }
            NodeKind::Bucket { children } => {
                for &child in children {
                    let leaf = self.node(child);
                    if leaf.bounds.intersects(region) {
                        match &leaf.kind {
                            NodeKind::Leaf { payload } => results.push(payload),
                            _ => panic!("Bucket child must be an object leaf: {}", child),
                        }
                    }
                }
            }
            NodeKind::Leaf { .. } => {
                panic!("Traversal reached a detached object leaf: {}", id)
            }
        }
    }
}
