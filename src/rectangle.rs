use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 轴对齐矩形边界框 - 表示R-tree中节点与对象的最小边界矩形(MBR)
///
/// 所有区间都是闭区间：仅共享一条边或一个角的两个矩形也算相交。
#[derive(Debug, Clone, Copy, PartialEq, Display, Serialize, Deserialize)]
#[display(fmt = "[{}, {}] - [{}, {}]", "min[0]", "min[1]", "max[0]", "max[1]")]
pub struct Rectangle {
    pub min: [f64; 2],  // [x_min, y_min]
    pub max: [f64; 2],  // [x_max, y_max]
}

impl Rectangle {
    /// 空矩形哨兵值 - 与任何矩形求并集返回对方，与任何矩形都不相交
    ///
    /// 用作空树根节点的占位边界。
    pub const EMPTY: Rectangle = Rectangle {
        min: [f64::INFINITY, f64::INFINITY],
        max: [f64::NEG_INFINITY, f64::NEG_INFINITY],
    };

    /// 创建新的矩形
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        assert!(x_min <= x_max && y_min <= y_max, "Invalid rectangle bounds");
        Rectangle {
            min: [x_min, y_min],
            max: [x_max, y_max],
        }
    }

    /// 创建一个点矩形
    pub fn from_point(x: f64, y: f64) -> Self {
        Rectangle {
            min: [x, y],
            max: [x, y],
        }
    }

    /// 矩形宽度（空矩形返回0）
    pub fn width(&self) -> f64 {
        (self.max[0] - self.min[0]).max(0.0)
    }

    /// 矩形高度（空矩形返回0）
    pub fn height(&self) -> f64 {
        (self.max[1] - self.min[1]).max(0.0)
    }

    /// 计算矩形面积
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// 计算两个矩形的并集MBR
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        Rectangle {
            min: [
                self.min[0].min(other.min[0]),
                self.min[1].min(other.min[1])
            ],
            max: [
                self.max[0].max(other.max[0]),
                self.max[1].max(other.max[1])
            ],
        }
    }

    /// 判断两个矩形是否相交（闭区间，共享边界也算相交）
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.min[0] <= other.max[0] && self.max[0] >= other.min[0] &&
        self.min[1] <= other.max[1] && self.max[1] >= other.min[1]
    }

    /// 判断当前矩形是否完全包含另一个矩形
    pub fn contains(&self, other: &Rectangle) -> bool {
        self.min[0] <= other.min[0] && self.min[1] <= other.min[1] &&
        self.max[0] >= other.max[0] && self.max[1] >= other.max[1]
    }

    /// 计算矩形中心点
    pub fn center(&self) -> [f64; 2] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
        ]
    }

    /// 计算两个矩形中心点之间的欧几里得距离
    pub fn center_distance(&self, other: &Rectangle) -> f64 {
        let a = self.center();
        let b = other.center();
        let dx = a[0] - b[0];
        let dy = a[1] - b[1];
        (dx * dx + dy * dy).sqrt()
    }

    /// 判断矩形是否为空（不包含任何点，例如EMPTY哨兵）
    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0] || self.min[1] > self.max[1]
    }
}

/// 空间对象接口 - 插入R-tree的对象必须能报告自身的边界框
pub trait Bounded {
    /// 返回对象的轴对齐边界框
    fn bounds(&self) -> Rectangle;
}

impl Bounded for Rectangle {
    fn bounds(&self) -> Rectangle {
        *self
    }
}

impl Bounded for geo::Rect<f64> {
    fn bounds(&self) -> Rectangle {
        Rectangle::new(self.min().x, self.min().y, self.max().x, self.max().y)
    }
}

impl Bounded for geo::Point<f64> {
    fn bounds(&self) -> Rectangle {
        Rectangle::from_point(self.x(), self.y())
    }
}

impl From<geo::Rect<f64>> for Rectangle {
    fn from(rect: geo::Rect<f64>) -> Self {
        rect.bounds()
    }
}

impl From<geo::Point<f64>> for Rectangle {
    fn from(point: geo::Point<f64>) -> Self {
        point.bounds()
    }
}
