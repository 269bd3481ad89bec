use narwhal_layout::{Algorithm, Band, Error, Graph, Node, Point, TieredOptions, layout};

fn coords(graph: &Graph) -> Vec<(String, (f64, f64))> {
    layout(graph, &Algorithm::default())
        .positions
        .into_iter()
        .map(|(id, p)| (id, (p.x, p.y)))
        .collect()
}

#[test]
fn tiered_layout_centers_a_row_of_three() {
    let g = Graph::new(vec![
        Node::new("a", Band::Row(0)),
        Node::new("b", Band::Row(0)),
        Node::new("c", Band::Row(0)),
    ]);
    assert_eq!(
        coords(&g),
        vec![
            ("a".to_string(), (-200.0, 0.0)),
            ("b".to_string(), (0.0, 0.0)),
            ("c".to_string(), (200.0, 0.0)),
        ]
    );
}

#[test]
fn tiered_layout_stacks_rows_by_tier() {
    let g = Graph::new(vec![
        Node::new("srv", Band::Row(2)),
        Node::new("sw", Band::Row(1)),
        Node::new("fw", Band::Row(0)),
    ]);
    assert_eq!(
        coords(&g),
        vec![
            ("srv".to_string(), (0.0, 300.0)),
            ("sw".to_string(), (0.0, 150.0)),
            ("fw".to_string(), (0.0, 0.0)),
        ]
    );
}

#[test]
fn tiered_layout_wraps_grid_rows() {
    let nodes = (0..6)
        .map(|i| Node::new(format!("ws{i}"), Band::Grid(3)))
        .collect();
    let result = layout(&Graph::new(nodes), &Algorithm::default());

    assert_eq!(result.get("ws0"), Some(Point { x: -300.0, y: 450.0 }));
    assert_eq!(result.get("ws3"), Some(Point { x: 300.0, y: 450.0 }));
    assert_eq!(result.get("ws4"), Some(Point { x: -100.0, y: 600.0 }));
    assert_eq!(result.get("ws5"), Some(Point { x: 100.0, y: 600.0 }));
}

#[test]
fn tiered_layout_puts_side_lane_right_of_hierarchy() {
    let g = Graph::new(vec![
        Node::new("printer", Band::Side),
        Node::new("core", Band::Row(0)),
        Node::new("ap", Band::Side),
    ]);
    assert_eq!(
        coords(&g),
        vec![
            ("printer".to_string(), (400.0, 150.0)),
            ("core".to_string(), (0.0, 0.0)),
            ("ap".to_string(), (400.0, 300.0)),
        ]
    );
}

#[test]
fn tiered_layout_honors_custom_spacing() {
    let g = Graph::new(vec![
        Node::new("a", Band::Row(1)),
        Node::new("b", Band::Row(1)),
        Node::new("c", Band::Grid(2)),
        Node::new("d", Band::Grid(2)),
        Node::new("e", Band::Grid(2)),
    ]);
    let opts = TieredOptions::new(50.0, 10.0, 2).unwrap();
    let result = layout(&g, &Algorithm::Tiered(opts));
    assert_eq!(result.get("a"), Some(Point { x: -25.0, y: 10.0 }));
    assert_eq!(result.get("b"), Some(Point { x: 25.0, y: 10.0 }));
    assert_eq!(result.get("c"), Some(Point { x: -25.0, y: 20.0 }));
    assert_eq!(result.get("d"), Some(Point { x: 25.0, y: 20.0 }));
    assert_eq!(result.get("e"), Some(Point { x: 0.0, y: 30.0 }));
}

#[test]
fn tiered_layout_is_deterministic() {
    let g = Graph::new(vec![
        Node::new("r", Band::Row(0)),
        Node::new("w1", Band::Grid(3)),
        Node::new("w2", Band::Grid(3)),
        Node::new("x", Band::Side),
    ]);
    let first = layout(&g, &Algorithm::default());
    let second = layout(&g, &Algorithm::default());
    assert_eq!(first.positions.len(), second.positions.len());
    for ((id_a, a), (id_b, b)) in first.positions.iter().zip(second.positions.iter()) {
        assert_eq!(id_a, id_b);
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }
}

#[test]
fn tiered_layout_handles_an_empty_graph() {
    assert!(
        layout(&Graph::default(), &Algorithm::default())
            .positions
            .is_empty()
    );
}

#[test]
fn tiered_layout_keeps_duplicate_ids_positional() {
    let g = Graph::new(vec![Node::new("a", Band::Row(0)), Node::new("a", Band::Side)]);
    let result = layout(&g, &Algorithm::default());
    let points: Vec<Point> = result.points().collect();
    assert_eq!(
        points,
        vec![Point { x: 0.0, y: 0.0 }, Point { x: 400.0, y: 150.0 }]
    );
}

#[test]
fn tiered_options_reject_bad_values() {
    for (h, v, cols) in [(f64::NAN, 150.0, 4), (200.0, -1.0, 4), (200.0, 150.0, 0)] {
        assert!(matches!(
            TieredOptions::new(h, v, cols),
            Err(Error::InvalidOptions { .. })
        ));
    }
    assert_eq!(
        TieredOptions::new(200.0, 150.0, 4).unwrap(),
        TieredOptions::default()
    );
}
