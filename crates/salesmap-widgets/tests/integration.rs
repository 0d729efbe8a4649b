//! Integration tests for salesmap-widgets.
//!
//! Renders whole charts into a `Scene` and checks the resulting tree.

use proptest::prelude::*;
use salesmap_core::{Event, Point, TreeNode};
use salesmap_widgets::{
    render_chart, Element, InfoField, Scene, SceneTooltip, SharedTooltip,
};
use salesmap_yaml::ChartConfig;
use std::cell::RefCell;
use std::rc::Rc;

fn render(root: &TreeNode) -> (Scene, Rc<RefCell<SceneTooltip>>) {
    let mut scene = Scene::new(Element::svg().id("graph"));
    let target = scene.root();
    let tooltip = Rc::new(RefCell::new(SceneTooltip::new()));
    let shared: SharedTooltip = tooltip.clone();
    render_chart(&ChartConfig::default(), root, &mut scene, &target, shared).unwrap();
    (scene, tooltip)
}

fn with_class(scene: &Scene, class: &str) -> Vec<usize> {
    scene
        .descendants(scene.root())
        .into_iter()
        .filter(|&id| scene.element(id).is_some_and(|el| el.has_class(class)))
        .collect()
}

fn attr_f64(scene: &Scene, id: usize, name: &str) -> f64 {
    scene
        .element(id)
        .and_then(|el| el.get_attr(name))
        .and_then(|v| v.parse().ok())
        .unwrap()
}

fn consoles() -> TreeNode {
    TreeNode::branch(
        "Video Game Sales Data Top 100",
        vec![
            TreeNode::branch(
                "Wii",
                vec![
                    TreeNode::leaf("Wii Sports", "Wii", 82.53),
                    TreeNode::leaf("Mario Kart Wii", "Wii", 35.52),
                ],
            ),
            TreeNode::branch(
                "GB",
                vec![
                    TreeNode::leaf("Pokemon Red/Pokemon Blue", "GB", 31.37),
                    TreeNode::leaf("Tetris", "GB", 30.26),
                ],
            ),
            TreeNode::branch("NES", vec![TreeNode::leaf("Super Mario Bros.", "NES", 40.24)]),
        ],
    )
}

#[test]
fn test_every_leaf_gets_tile_and_words() {
    let (scene, _) = render(&consoles());
    assert_eq!(with_class(&scene, "tile").len(), 5);
    // 2 + 3 + 3 + 1 + 3 words
    assert_eq!(with_class(&scene, "node-name").len(), 12);
    assert_eq!(with_class(&scene, "legend-item").len(), 3);
}

#[test]
fn test_tiles_of_a_category_share_a_fill() {
    let (scene, _) = render(&consoles());
    let tiles = with_class(&scene, "tile");
    let fill_of = |name: &str| {
        tiles
            .iter()
            .map(|&id| scene.element(id).unwrap())
            .find(|el| el.get_attr("data-name") == Some(name))
            .and_then(|el| el.get_attr("fill"))
            .map(str::to_string)
            .unwrap()
    };
    assert_eq!(fill_of("Wii Sports"), fill_of("Mario Kart Wii"));
    assert_ne!(fill_of("Wii Sports"), fill_of("Tetris"));
}

#[test]
fn test_hover_on_label_matches_hover_on_tile() {
    let (scene, tooltip) = render(&consoles());
    let tile = with_class(&scene, "tile")[0];
    let label = with_class(&scene, "node-name")[0];
    let at = Point::new(300.0, 200.0);

    scene.dispatch(tile, &Event::PointerEnter { position: at }).unwrap();
    let from_tile = tooltip.borrow().clone();
    scene.dispatch(tile, &Event::PointerLeave).unwrap();
    assert!(!tooltip.borrow().is_visible());

    scene.dispatch(label, &Event::PointerEnter { position: at }).unwrap();
    assert_eq!(*tooltip.borrow(), from_tile);
    assert_eq!(tooltip.borrow().info(InfoField::Name), Some("Wii Sports"));
    assert_eq!(tooltip.borrow().style("left"), Some("310px"));
}

proptest! {
    #[test]
    fn prop_tiles_stay_in_treemap_region(values in prop::collection::vec(0.0f64..50.0, 1..30)) {
        let root = TreeNode::branch(
            "root",
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| TreeNode::leaf(&format!("game {i}"), &format!("c{}", i % 4), v))
                .collect(),
        );
        let (scene, _) = render(&root);
        let tiles = with_class(&scene, "tile");
        prop_assert_eq!(tiles.len(), values.len());
        for id in tiles {
            let (x, y) = (attr_f64(&scene, id, "x"), attr_f64(&scene, id, "y"));
            let (w, h) = (attr_f64(&scene, id, "width"), attr_f64(&scene, id, "height"));
            prop_assert!(w >= 0.0 && h >= 0.0);
            prop_assert!(x >= -1.0 && x + w <= 801.0);
            prop_assert!(y >= -1.0 && y + h <= 721.0);
        }
    }
}
