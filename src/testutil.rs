use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::rectangle::{Bounded, Rectangle};
use crate::rtree::{NodeRef, RTree};

/// 带编号的测试对象，编号参与相等性比较
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub id: u32,
    pub bounds: Rectangle,
}

impl Item {
    pub fn new(id: u32, bounds: Rectangle) -> Self {
        Item { id, bounds }
    }
}

impl Bounded for Item {
    fn bounds(&self) -> Rectangle {
        self.bounds
    }
}

/// 固定的8个测试矩形
///
/// 前5个构成标准分裂场景：容量4时第5个触发根分裂。
/// 后3个依次检验重叠路由、最近中心路由与嵌套分裂。
pub fn scenario_rects() -> [Rectangle; 8] {
    [
        Rectangle::new(1.0, -3.0, 3.0, -1.0),
        Rectangle::new(-3.0, -2.0, -2.0, -1.0),
        Rectangle::new(-4.0, 0.0, -2.0, 2.0),
        Rectangle::new(2.0, 0.0, 4.0, 2.0),
        Rectangle::new(-1.0, 2.0, 0.0, 3.0),
        Rectangle::new(-1.0, -1.0, 0.0, 0.0),
        Rectangle::new(2.0, 3.0, 3.0, 4.0),
        Rectangle::new(-3.0, -4.0, -2.0, -3.0),
    ]
}

/// 固定场景矩形对应的测试对象，编号即下标
pub fn scenario_items() -> [Item; 8] {
    let rects = scenario_rects();
    std::array::from_fn(|i| Item::new(i as u32, rects[i]))
}

/// 用固定随机种子生成测试对象
pub fn random_items(count: usize, seed: u64) -> Vec<Item> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let x = rng.gen_range(-100.0..100.0);
            let y = rng.gen_range(-100.0..100.0);
            let w = rng.gen_range(0.5..8.0);
            let h = rng.gen_range(0.5..8.0);
            Item::new(i as u32, Rectangle::new(x, y, x + w, y + h))
        })
        .collect()
}

/// 用固定随机种子生成查询区域
pub fn random_regions(count: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = rng.gen_range(-110.0..90.0);
            let y = rng.gen_range(-110.0..90.0);
            let w = rng.gen_range(1.0..40.0);
            let h = rng.gen_range(1.0..40.0);
            Rectangle::new(x, y, x + w, y + h)
        })
        .collect()
}

/// 提取查询结果的编号并排序
pub fn result_ids(results: &[&Item]) -> Vec<u32> {
    let mut ids: Vec<u32> = results.iter().map(|item| item.id).collect();
    ids.sort_unstable();
    ids
}

/// 线性扫描求与区域相交的对象编号，作为树查询的参照
pub fn scan_ids(items: &[Item], region: &Rectangle) -> Vec<u32> {
    let mut ids: Vec<u32> = items
        .iter()
        .filter(|item| item.bounds.intersects(region))
        .map(|item| item.id)
        .collect();
    ids.sort_unstable();
    ids
}

/// 校验整棵树的结构不变式
///
/// 桶的子节点只能是对象叶子且数量不超过容量；
/// 父引用与所属容器一致；节点边界包含其下所有内容的边界。
pub fn check_invariants<T>(tree: &RTree<T>) {
    fn walk<T>(capacity: usize, node: NodeRef<'_, T>) {
        if let Some(partitions) = node.partitions() {
            for partition in partitions {
                assert_eq!(
                    partition.parent().map(|p| p.id()),
                    Some(node.id()),
                    "Partition {} has wrong parent",
                    partition.id()
                );
                assert!(
                    node.bounds().contains(&partition.bounds()),
                    "Node {} bounds {} do not contain partition {} bounds {}",
                    node.id(),
                    node.bounds(),
                    partition.id(),
                    partition.bounds()
                );
                walk(capacity, partition);
            }
        } else if node.is_bucket() {
            let children = node.children();
            assert!(
                children.len() <= capacity,
                "Bucket {} holds {} children over capacity {}",
                node.id(),
                children.len(),
                capacity
            );
            for child in children {
                assert!(
                    child.is_leaf(),
                    "Bucket child {} is not an object leaf",
                    child.id()
                );
                assert_eq!(
                    child.parent().map(|p| p.id()),
                    Some(node.id()),
                    "Child {} has wrong parent",
                    child.id()
                );
                assert!(
                    node.bounds().contains(&child.bounds()),
                    "Bucket {} bounds {} do not contain child {} bounds {}",
                    node.id(),
                    node.bounds(),
                    child.id(),
                    child.bounds()
                );
            }
        }
    }

    walk(tree.capacity(), tree.root());
}
