//! 快速性能测试 - 用于开发过程中的快速验证
//!
//! 直接计时并打印每项操作的吞吐，不走criterion的统计流程。

use boxtree::{Bounded, RTree, Rectangle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

const QUICK_TEST_SIZE: usize = 10_000;
const FULL_TEST_SIZE: usize = 100_000;

fn main() {
    println!("🚀 R-tree 快速性能测试");
    println!("{}", "=".repeat(50));

    run_suite(
        "Quick Test",
        &BenchConfig {
            size: QUICK_TEST_SIZE,
            capacity: 16,
            seed: 42,
        },
    );

    println!("\n🔥 完整性能测试");
    println!("{}", "=".repeat(50));

    run_suite(
        "Full Test",
        &BenchConfig {
            size: FULL_TEST_SIZE,
            capacity: 16,
            seed: 42,
        },
    );
}

#[derive(Debug)]
struct BenchConfig {
    size: usize,
    capacity: usize,
    seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    id: i32,
    rect: Rectangle,
}

impl Bounded for Entry {
    fn bounds(&self) -> Rectangle {
        self.rect
    }
}

fn run_suite(suite_name: &str, config: &BenchConfig) {
    println!("\n📊 {} ({} 条目)", suite_name, config.size);
    println!("{}", "-".repeat(40));
    println!("BenchConfig: {:#?}", config);

    let test_data = generate_test_data(config.size, config.seed);

    // 1. 插入测试
    let start = Instant::now();
    let mut tree = RTree::new(config.capacity);
    for entry in &test_data {
        tree.insert(*entry);
    }
    print_result("insert", config.size, start.elapsed());

    // 2. 单点查询测试
    let start = Instant::now();
    let mut results = Vec::new();
    for entry in &test_data {
        tree.query_into(&entry.rect, &mut results);
    }
    print_result("query-item", config.size, start.elapsed());

    // 3. 区域查询测试
    for coverage in [1.0, 5.0, 10.0] {
        let queries = generate_query_rects(1000, coverage, config.seed);
        let start = Instant::now();
        for query in &queries {
            let _hits = tree.query(query);
        }
        print_result(&format!("query-{}%", coverage as u32), 1000, start.elapsed());
    }

    // 4. 删除一半
    let half = config.size / 2;
    let start = Instant::now();
    for entry in &test_data[..half] {
        tree.remove(entry);
    }
    print_result("remove-half", half, start.elapsed());

    // 5. 重新插入
    let start = Instant::now();
    for entry in &test_data[..half] {
        tree.insert(*entry);
    }
    print_result("reinsert-half", half, start.elapsed());

    // 6. 删除全部
    let start = Instant::now();
    for entry in &test_data {
        tree.remove(entry);
    }
    print_result("remove-all", config.size, start.elapsed());
}

fn generate_test_data(count: usize, seed: u64) -> Vec<Entry> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(count);

    for i in 0..count {
        let x = rng.gen_range(0.0..1000.0);
        let y = rng.gen_range(0.0..1000.0);
        data.push(Entry {
            id: i as i32,
            rect: Rectangle::new(x, y, x + 1.0, y + 1.0),
        });
    }

    data
}

fn generate_query_rects(count: usize, coverage_percent: f64, seed: u64) -> Vec<Rectangle> {
    let mut rng = StdRng::seed_from_u64(seed + 1000);
    let mut queries = Vec::with_capacity(count);

    let query_size = 1000.0 * (coverage_percent / 100.0).sqrt();

    for _ in 0..count {
        let x = rng.gen_range(0.0..(1000.0 - query_size));
        let y = rng.gen_range(0.0..(1000.0 - query_size));
        queries.push(Rectangle::new(x, y, x + query_size, y + query_size));
    }

    queries
}

fn print_result(operation: &str, ops: usize, duration: Duration) {
    let millis = duration.as_millis();
    let ops_per_sec = ops as f64 / duration.as_secs_f64();
    let ns_per_op = duration.as_nanos() / ops as u128;

    println!(
        "{:<15} {:>8} ops in {}ms, {:>10.0}/sec, {} ns/op",
        format!("{}:", operation),
        format_number(ops),
        millis,
        ops_per_sec,
        ns_per_op
    );
}

fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
