use crate::rtree::{NodeRef, RTree};

/// 树结构诊断功能
impl<T> RTree<T> {
    /// 打印完整的树结构用于调试
    ///
    /// 逐层打印每个节点的种类、编号与边界，
    /// 用于观察分裂后的分区形态。
    pub fn print_structure(&self) {
        println!("=== R-tree Structure ===");
        print!("{}", self.structure_string());
        println!("=== End ===");
    }

    /// 生成树结构的文本描述，每行一个节点，缩进表示层级
    pub fn structure_string(&self) -> String {
        fn write_node<T>(node: NodeRef<'_, T>, depth: usize, out: &mut String) {
            let indent = "  ".repeat(depth);
            if let Some([a, b]) = node.partitions() {
                out.push_str(&format!(
                    "{}directory {} bounds={}\n",
                    indent,
                    node.id(),
                    node.bounds()
                ));
                write_node(a, depth + 1, out);
                write_node(b, depth + 1, out);
            } else if node.is_bucket() {
                let children = node.children();
                out.push_str(&format!(
                    "{}bucket {} bounds={} children={}\n",
                    indent,
                    node.id(),
                    node.bounds(),
                    children.len()
                ));
                for child in children {
                    write_node(child, depth + 1, out);
                }
            } else {
                out.push_str(&format!(
                    "{}object {} bounds={}\n",
                    indent,
                    node.id(),
                    node.bounds()
                ));
            }
        }

        let mut out = String::new();
        write_node(self.root(), 0, &mut out);
        out
    }
}
