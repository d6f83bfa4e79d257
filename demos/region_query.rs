//! 区域查询演示
//!
//! 构建一棵小树并打印结构，演示两种遍历方式的区域查询、
//! 查询结果的JSON导出以及按相等性删除。

use boxtree::{Bounded, RTree, Rectangle};
use serde::Serialize;

/// 演示用的地块对象
#[derive(Debug, Clone, PartialEq, Serialize)]
struct Parcel {
    name: &'static str,
    bounds: Rectangle,
}

impl Parcel {
    fn new(name: &'static str, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Parcel {
            name,
            bounds: Rectangle::new(x1, y1, x2, y2),
        }
    }
}

impl Bounded for Parcel {
    fn bounds(&self) -> Rectangle {
        self.bounds
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = RTree::new(4);

    // 插入一批地块，容量4足以触发分裂形成多层结构
    let parcels = vec![
        Parcel::new("warehouse-a", 10.0, 10.0, 20.0, 20.0),
        Parcel::new("warehouse-b", 25.0, 12.0, 35.0, 22.0),
        Parcel::new("market", 40.0, 8.0, 50.0, 18.0),
        Parcel::new("depot", 12.0, 30.0, 22.0, 40.0),
        Parcel::new("park", 28.0, 32.0, 38.0, 42.0),
        Parcel::new("harbor", 45.0, 30.0, 55.0, 40.0),
        Parcel::new("plaza", 15.0, 50.0, 25.0, 60.0),
        Parcel::new("station", 35.0, 52.0, 45.0, 62.0),
        Parcel::new("airport", 60.0, 15.0, 75.0, 30.0),
        Parcel::new("campus", 62.0, 45.0, 72.0, 55.0),
    ];
    for parcel in &parcels {
        tree.insert(parcel.clone());
    }

    println!("共插入 {} 个地块，树深度 {}", tree.len(), tree.depth());
    tree.print_structure();

    // 迭代遍历查询
    let region = Rectangle::new(20.0, 25.0, 50.0, 45.0);
    let hits = tree.query(&region);
    println!("\n区域 {} 命中 {} 个地块:", region, hits.len());
    for parcel in &hits {
        println!("  ✓ {} at {}", parcel.name, parcel.bounds);
    }

    // 递归遍历得到同一组结果
    let recursive_hits = tree.query_recursive(&region);
    println!("递归遍历命中 {} 个地块", recursive_hits.len());

    // 查询结果导出为JSON
    let json = serde_json::to_string_pretty(&hits)?;
    println!("\n查询结果JSON:\n{}", json);

    // 按相等性删除后再查询
    let removed = tree.remove(&parcels[4]);
    println!("\n删除 {}: {}", parcels[4].name, removed);
    let hits_after = tree.query(&region);
    println!("删除后同一区域命中 {} 个地块", hits_after.len());

    Ok(())
}
