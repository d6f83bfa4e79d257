use crate::node::{Node, NodeId, NodeKind};
use crate::rtree::RTree;

/// 分配轮次上限，退化输入下兜底保证终止
const SPLIT_SAFETY_CAP: usize = 1000;

/// 溢出分裂算法
impl<T> RTree<T> {
    /// 内部方法：把溢出的桶就地分裂为带两个分区的目录
    ///
    /// 全部子节点重新分配进两个新建的分区桶。节点自身的边界
    /// 保持插入时累积的值不变，它已经包含两个分区的并集。
    pub(crate) fn split(&mut self, target: NodeId) {
        // 子节点列表整体取出为自有序列，删减都在它上面进行
        let mut remaining = match &mut self.node_mut(target).kind {
            NodeKind::Bucket { children } => std::mem::take(children),
            _ => panic!("Split target must be a bucket: {}", target),
        };

        let (low, high) = self.pick_seeds(&remaining);
        let seed_a = remaining[low];
        let seed_b = remaining[high];
        // 先移除靠后的下标，靠前的下标不受位移影响
        if low > high {
            remaining.remove(low);
            remaining.remove(high);
        } else {
            remaining.remove(high);
            remaining.remove(low);
        }

        // 两个分区桶以各自种子的边界起步
        let a = self.alloc(Node::new_bucket(Some(target)));
        let b = self.alloc(Node::new_bucket(Some(target)));
        self.adopt_child(a, seed_a);
        self.adopt_child(b, seed_b);

        self.distribute(a, b, &mut remaining);

        // 剩下的子节点（通常是奇数时落单的最后一个）按列表顺序兜底分派
        for child in remaining {
            let receiver = self.nearest_partition(a, b, child);
            self.adopt_child(receiver, child);
        }

        self.node_mut(target).kind = NodeKind::Directory { partitions: [a, b] };
    }

    /// 在全部子节点中选出两个分区的种子下标
    ///
    /// 取跨度更大的轴（相等时X轴优先），该轴低边最小者作为A的种子，
    /// 高边最大者作为B的种子。两个种子重合时（单个子节点横跨整条轴），
    /// B改用其余子节点中该轴高边最大的一个。
    fn pick_seeds(&self, children: &[NodeId]) -> (usize, usize) {
        let (x_low, x_high) = self.axis_extremes(children, 0);
        let (y_low, y_high) = self.axis_extremes(children, 1);

        let x_span =
            self.node(children[x_high]).bounds.max[0] - self.node(children[x_low]).bounds.min[0];
        let y_span =
            self.node(children[y_high]).bounds.max[1] - self.node(children[y_low]).bounds.min[1];

        let (low, mut high, axis) = if x_span >= y_span {
            (x_low, x_high, 0)
        } else {
            (y_low, y_high, 1)
        };

        if low == high {
            let mut best = if low == 0 { 1 } else { 0 };
            for i in (best + 1)..children.len() {
                if i == low {
                    continue;
                }
                if self.node(children[i]).bounds.max[axis]
                    > self.node(children[best]).bounds.max[axis]
                {
                    best = i;
                }
            }
            high = best;
        }

        (low, high)
    }

    /// 求子节点在某条轴上低边最小与高边最大的下标
    ///
    /// 严格比较，列表中靠前者赢得并列。
    fn axis_extremes(&self, children: &[NodeId], axis: usize) -> (usize, usize) {
        let mut low = 0;
        let mut high = 0;
        let mut min_edge = self.node(children[0]).bounds.min[axis];
        let mut max_edge = self.node(children[0]).bounds.max[axis];

        for (i, &child) in children.iter().enumerate().skip(1) {
            let bounds = self.node(child).bounds;
            if bounds.min[axis] < min_edge {
                min_edge = bounds.min[axis];
                low = i;
            }
            if bounds.max[axis] > max_edge {
                max_edge = bounds.max[axis];
                high = i;
            }
        }

        (low, high)
    }

    /// 逐轮分配剩余子节点，每轮两个（两端候选重合时只有一个）
    fn distribute(&mut self, a: NodeId, b: NodeId, remaining: &mut Vec<NodeId>) {
        let mut rounds = 0;
        while remaining.len() > 1 && rounds < SPLIT_SAFETY_CAP {
            rounds += 1;

            let (x_low, x_high) = self.axis_extremes(remaining, 0);
            let (y_low, y_high) = self.axis_extremes(remaining, 1);

            let a_bounds = self.node(a).bounds;
            let b_bounds = self.node(b).bounds;

            // 每条轴的假想结果：低边候选进A，高边候选进B
            let x_to_a = a_bounds.union(&self.node(remaining[x_low]).bounds);
            let x_to_b = b_bounds.union(&self.node(remaining[x_high]).bounds);
            let y_to_a = a_bounds.union(&self.node(remaining[y_low]).bounds);
            let y_to_b = b_bounds.union(&self.node(remaining[y_high]).bounds);

            // 面积和严格更小计1分，两个假想框互不重叠再计1分
            let x_area = x_to_a.area() + x_to_b.area();
            let y_area = y_to_a.area() + y_to_b.area();
            let mut x_score = 0;
            let mut y_score = 0;
            if x_area < y_area {
                x_score += 1;
            } else if y_area < x_area {
                y_score += 1;
            }
            if !x_to_a.intersects(&x_to_b) {
                x_score += 1;
            }
            if !y_to_a.intersects(&y_to_b) {
                y_score += 1;
            }

            // 平分时X轴优先
            let (low, high, to_a, to_b) = if x_score >= y_score {
                (x_low, x_high, x_to_a, x_to_b)
            } else {
                (y_low, y_high, y_to_a, y_to_b)
            };

            if low == high {
                // 同一个子节点占据两端候选，本轮只分给A
                let child = remaining.remove(low);
                self.adopt_child_with_bounds(a, child, to_a);
                continue;
            }

            let low_child = remaining[low];
            let high_child = remaining[high];
            if low > high {
                remaining.remove(low);
                remaining.remove(high);
            } else {
                remaining.remove(high);
                remaining.remove(low);
            }
            self.adopt_child_with_bounds(a, low_child, to_a);
            self.adopt_child_with_bounds(b, high_child, to_b);
        }
    }

    /// 为落单的子节点选择接收分区
    ///
    /// 与A重叠进A，与B重叠进B；都不重叠时取中心距离更近的分区，
    /// 距离相等时A胜出。
    fn nearest_partition(&self, a: NodeId, b: NodeId, child: NodeId) -> NodeId {
        let bounds = self.node(child).bounds;
        let a_bounds = self.node(a).bounds;
        let b_bounds = self.node(b).bounds;

        if a_bounds.intersects(&bounds) {
            a
        } else if b_bounds.intersects(&bounds) {
            b
        } else if a_bounds.center_distance(&bounds) <= b_bounds.center_distance(&bounds) {
            a
        } else {
            b
        }
    }
}
