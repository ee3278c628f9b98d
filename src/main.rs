use std::env;
use std::fs;

use spantree::SpanningTree;

fn main() {
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| String::from("points.csv"));
    let contents = fs::read_to_string(&path).expect("Unable to read points file");

    let mut tree = SpanningTree::new();
    for line in contents.lines() {
        let mut coords = line.split(',').map(|num| num.trim().parse::<f64>().unwrap());
        let x = coords.next().expect("Expected an x coordinate");
        let y = coords.next().expect("Expected a y coordinate");
        tree.add_vertex(x, y);
    }

    for edge in tree.edges() {
        println!("{} -- {}  ({:.3})", edge.left_id, edge.right_id, edge.weight);
    }
    println!("total weight: {:.3}", tree.total_weight());
}
