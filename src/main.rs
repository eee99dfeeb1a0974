//! Demo walkthrough: build a small float-valued tree, dump it, delete the
//! root (the two-children case), and dump it again.

use ordered_float::OrderedFloat;
use sentinel_bst::Tree;

fn main() {
    tracing_subscriber::fmt().init();

    let mut tree = Tree::new();
    for value in [3.0, 2.0, 11.0, 13.0, 12.0, 8.0, 9.0, 8.5, 2.5] {
        tree.insert(OrderedFloat(value));
    }
    tree.print();

    // Deleting the root exercises predecessor promotion through the
    // sentinel parent: 2.5 (max of the left subtree) becomes the new root.
    tree.delete(&OrderedFloat(3.0));

    println!("\nAfter delete:");
    tree.print();
}
