use super::keywords::{ArgKind, arg_kind, split_prefix, strip_prefix};
use super::*;

fn leaf_with_type(tree: &mut Tree) -> (NodeId, NodeId) {
    let leaf = tree.alloc("leaf", Some("name".into()));
    let ty = tree.alloc("type", Some("string".into()));
    tree.attach(leaf, ty).unwrap();
    (leaf, ty)
}

#[test]
fn test_new_tree_has_named_root() {
    let tree = Tree::new("test", "module");
    let root = tree.root();
    assert_eq!(tree.keyword(root), "module");
    assert_eq!(tree.argument(root), Some("test"));
    assert_eq!(tree.source(), "test");
    assert!(tree.parent(root).is_none());
}

#[test]
fn test_attach_sets_both_links() {
    let mut tree = Tree::new("test", "module");
    let (leaf, ty) = leaf_with_type(&mut tree);
    assert_eq!(tree.children(leaf), &[ty]);
    assert_eq!(tree.parent(ty), Some(leaf));
}

#[test]
fn test_attach_moves_node_between_parents() {
    let mut tree = Tree::new("test", "module");
    let (leaf, ty) = leaf_with_type(&mut tree);
    let other = tree.alloc("leaf", Some("other".into()));

    tree.attach(other, ty).unwrap();

    assert!(tree.children(leaf).is_empty());
    assert_eq!(tree.children(other), &[ty]);
    assert_eq!(tree.parent(ty), Some(other));
}

#[test]
fn test_attach_rejects_cycles() {
    let mut tree = Tree::new("test", "module");
    let (leaf, ty) = leaf_with_type(&mut tree);

    assert!(matches!(tree.attach(ty, leaf), Err(Error::InvalidArgument(_))));
    assert!(matches!(tree.attach(leaf, leaf), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_attach_rejects_root() {
    let mut tree = Tree::new("test", "module");
    let (leaf, _) = leaf_with_type(&mut tree);
    let root = tree.root();
    assert!(tree.attach(leaf, root).is_err());
}

#[test]
fn test_dangling_parent_link_is_not_a_parent() {
    let mut tree = Tree::new("test", "module");
    let container = tree.alloc("container", Some("c".into()));
    let leaf = tree.alloc("leaf", Some("l".into()));
    tree.set_parent(leaf, Some(container));

    assert_eq!(tree.parent(leaf), None);
    // no false cycle through the unlisted link
    tree.attach(leaf, container).unwrap();
}

#[test]
fn test_replace_children_detaches_previous() {
    let mut tree = Tree::new("test", "module");
    let root = tree.root();
    let (leaf, _) = leaf_with_type(&mut tree);
    tree.attach(root, leaf).unwrap();
    let prefix = tree.alloc("prefix", Some("t".into()));

    tree.replace_children(root, &[prefix]).unwrap();

    assert_eq!(tree.children(root), &[prefix]);
    assert_eq!(tree.parent(leaf), None);
}

#[test]
fn test_snapshot_and_import_preserve_shape() {
    let mut tree = Tree::new("test", "module");
    let (leaf, _) = leaf_with_type(&mut tree);
    let snapshot = tree.snapshot(leaf);

    let mut other = Tree::new("other", "module");
    let copy = other.import(&snapshot);

    assert_eq!(other.snapshot(copy), snapshot);
    assert_eq!(other.parent(copy), None);
    assert_eq!(other.keyword(other.children(copy)[0]), "type");
}

#[test]
fn test_deep_copy_from_leaves_source_intact() {
    let mut tree = Tree::new("test", "module");
    let (leaf, _) = leaf_with_type(&mut tree);
    tree.attach(tree.root(), leaf).unwrap();

    let mut other = Tree::new("other", "module");
    let copy = other.deep_copy_from(&tree, leaf);

    assert_eq!(other.snapshot(copy), tree.snapshot(leaf));
    assert_eq!(tree.parent(leaf), Some(tree.root()));
}

#[test]
fn test_from_statement_adopts_top() {
    let top = Statement::new("submodule")
        .with_argument("sub")
        .with_child(Statement::new("belongs-to").with_argument("main"));
    let tree = Tree::from_statement(&top);

    assert_eq!(tree.keyword(tree.root()), "submodule");
    assert_eq!(tree.source(), "sub");
    assert_eq!(tree.snapshot(tree.root()), top);
}

#[test]
fn test_prefix_helpers() {
    assert_eq!(split_prefix("ext:c-define"), (Some("ext"), "c-define"));
    assert_eq!(split_prefix("leaf"), (None, "leaf"));
    assert_eq!(strip_prefix("a:b:c"), "b:c");
}

#[test]
fn test_arg_kind_table() {
    assert_eq!(arg_kind("prefix"), ArgKind::Identifier);
    assert_eq!(arg_kind("namespace"), ArgKind::Text);
    assert_eq!(arg_kind("ext:c-define"), ArgKind::Text);
}
