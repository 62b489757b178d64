use bst::{Order, Tree};

use quickcheck::quickcheck;

use crate::Op;

fn build(ops: &[Op<i16>]) -> Tree<i16> {
    let mut tree = Tree::new();
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(*k);
            }
            Op::Remove(k) => {
                tree.delete(k);
            }
        }
    }

    tree
}

fn recursive(tree: &Tree<i16>, order: Order) -> Vec<i16> {
    let mut keys = Vec::new();
    tree.traverse_recursive(order, |key| keys.push(*key));
    keys
}

fn iterative(tree: &Tree<i16>, order: Order) -> Vec<i16> {
    let mut keys = Vec::new();
    tree.traverse(order, |key| keys.push(*key));
    keys
}

quickcheck! {
    fn forms_agree(ops: Vec<Op<i16>>) -> bool {
        let tree = build(&ops);

        Order::ALL
            .iter()
            .all(|&order| recursive(&tree, order) == iterative(&tree, order))
    }

    fn in_order_is_strictly_ascending(ops: Vec<Op<i16>>) -> bool {
        let tree = build(&ops);
        let keys = iterative(&tree, Order::InOrder);

        keys.windows(2).all(|pair| pair[0] < pair[1])
            && keys.len() == tree.len()
            && tree.iter().copied().eq(keys)
    }

    fn every_order_visits_every_key_once(ops: Vec<Op<i16>>) -> bool {
        let tree = build(&ops);
        let sorted = iterative(&tree, Order::InOrder);

        Order::ALL.iter().all(|&order| {
            let mut keys = iterative(&tree, order);
            keys.sort_unstable();
            keys == sorted
        })
    }

    fn pre_order_starts_at_root_and_post_order_ends_there(ops: Vec<Op<i16>>) -> bool {
        let tree = build(&ops);

        iterative(&tree, Order::PreOrder).first() == tree.root()
            && iterative(&tree, Order::PostOrder).last() == tree.root()
            && iterative(&tree, Order::LevelOrder).first() == tree.root()
    }

    fn pre_order_rebuilds_shape(ops: Vec<Op<i16>>) -> bool {
        let tree = build(&ops);
        let pre_order = iterative(&tree, Order::PreOrder);
        let rebuilt: Tree<_> = pre_order.iter().copied().collect();

        iterative(&rebuilt, Order::PreOrder) == pre_order
            && iterative(&rebuilt, Order::PostOrder) == iterative(&tree, Order::PostOrder)
    }

    fn clone_keeps_shape(ops: Vec<Op<i16>>) -> bool {
        let tree = build(&ops);
        let copy = tree.clone();

        Order::ALL
            .iter()
            .all(|&order| iterative(&copy, order) == iterative(&tree, order))
            && copy.height() == tree.height()
    }
}

#[test]
fn scenario_from_sample_session() {
    let mut tree: Tree<i16> = [50, 30, 20, 40, 70, 60, 80].into_iter().collect();
    tree.delete(&20);
    tree.delete(&30);
    tree.delete(&50);

    assert_eq!(recursive(&tree, Order::InOrder), [40, 60, 70, 80]);
    assert_eq!(recursive(&tree, Order::PreOrder), [60, 40, 70, 80]);
    assert_eq!(recursive(&tree, Order::PostOrder), [40, 80, 70, 60]);
    assert_eq!(recursive(&tree, Order::LevelOrder), [60, 40, 70, 80]);
}
