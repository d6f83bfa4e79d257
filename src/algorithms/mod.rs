// 算法模块声明文件
// 每个子模块以impl块的形式为RTree提供一类操作

pub mod debug;
pub mod insert;
pub mod remove;
pub mod search;
pub mod split;
