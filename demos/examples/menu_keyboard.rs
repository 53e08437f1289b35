// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation of a menubar with submenus and a radio group.
//!
//! This example shows how to combine:
//! - `understory_tree_walker` for the host tree and document-order walks,
//! - `understory_key_walker` for mapping keys to directions and resolving
//!   the next focus target.
//!
//! Run:
//! - `cargo run -p understory_demos --example menu_keyboard`

use understory_key_walker::keys::{Key, KeyMap, Orientation};
use understory_key_walker::{Direction, GroupDirection, NavigationConfig, get_target, navigate_group};
use understory_tree_walker::{
    AcceptAll, ElementFlags, NodeData, NodeId, NodeTree, TreeWalker, WhatToShow,
};

fn label(tree: &NodeTree, id: Option<NodeId>) -> &'static str {
    id.and_then(|id| tree.tag(id)).unwrap_or("<none>")
}

fn main() {
    // menubar
    //   File -> [New, Open, Save(disabled)]
    //   Edit -> [Undo, Redo]
    //   View(hidden)
    //   Help
    let mut tree = NodeTree::new();
    let menubar = tree.insert(None, NodeData::element("menubar"));
    let file = tree.insert(Some(menubar), NodeData::element("File"));
    let edit = tree.insert(Some(menubar), NodeData::element("Edit"));
    tree.insert(
        Some(menubar),
        NodeData::element("View").with_flags(ElementFlags::HIDDEN),
    );
    let help = tree.insert(Some(menubar), NodeData::element("Help"));

    tree.insert(Some(file), NodeData::element("New"));
    tree.insert(Some(file), NodeData::element("Open"));
    tree.insert(
        Some(file),
        NodeData::element("Save").with_flags(ElementFlags::DISABLED),
    );
    tree.insert(Some(edit), NodeData::element("Undo"));
    tree.insert(Some(edit), NodeData::element("Redo"));
    // A text label inside Help; not an element, so the default mask hides it.
    tree.insert(Some(help), NodeData::text());

    // Document order over every node.
    let mut walker = TreeWalker::new(&tree, menubar, WhatToShow::ALL, AcceptAll)
        .expect("menubar is alive");
    let order: Vec<_> = walker
        .following(&tree)
        .filter_map(Result::ok)
        .map(|id| tree.tag(id).unwrap_or("?"))
        .collect();
    println!("document order: {order:?}");

    // Menubar keys: Left/Right along the bar, Down/Up into a submenu.
    let bar_keys = KeyMap::new(Orientation::Horizontal).with_nested(true);
    let mut bar = NavigationConfig::hierarchical(menubar).with_cycle(true);

    let mut focus = file;
    for key in [Key::ArrowRight, Key::ArrowRight, Key::ArrowRight, Key::End] {
        let Some(direction) = bar_keys.direction_for(key) else {
            continue;
        };
        let target = get_target(&mut bar, &tree, focus, direction);
        println!(
            "{:>6} on {:<6} -> {:?} -> {}",
            format!("{key:?}"),
            label(&tree, Some(focus)),
            direction,
            label(&tree, target.ok().flatten()),
        );
        if let Ok(Some(next)) = target {
            focus = next;
        }
    }

    // Open the File submenu from the bar, then walk it with a vertical map.
    let down = bar_keys
        .direction_for(Key::ArrowDown)
        .expect("nested horizontal maps handle ArrowDown");
    let opened = get_target(&mut bar, &tree, file, down).expect("File is inside the menubar");
    println!("ArrowDown on File -> {}", label(&tree, opened));

    let menu_keys = KeyMap::new(Orientation::Vertical);
    let mut menu = NavigationConfig::hierarchical(file).with_cycle(true);
    if let Some(mut item) = opened {
        for key in [Key::ArrowDown, Key::ArrowDown, Key::ArrowUp, Key::Home] {
            let Some(direction) = menu_keys.direction_for(key) else {
                continue;
            };
            match get_target(&mut menu, &tree, item, direction) {
                Ok(target) => {
                    println!(
                        "{:>9} on {:<4} -> {}",
                        format!("{key:?}"),
                        label(&tree, Some(item)),
                        label(&tree, target),
                    );
                    if let Some(target) = target {
                        item = target;
                    }
                }
                Err(err) => println!("{key:?} failed: {err}"),
            }
        }
    }

    // A flat radio group in arbitrary order, not tied to tree structure.
    let mut radios = NavigationConfig::group([help, edit, file]).with_cycle(true);
    let mut checked = help;
    for _ in 0..4 {
        let next = navigate_group(&radios, &tree, checked, GroupDirection::Next)
            .expect("group navigation cannot fail on a live tree");
        println!("radio Next from {} -> {}", label(&tree, Some(checked)), label(&tree, next));
        if let Some(next) = next {
            checked = next;
        }
    }

    // Hierarchy-only directions are refused for groups.
    let refused = radios.target(&tree, checked, Direction::Child);
    println!("Child in a group -> {refused:?}");
}
