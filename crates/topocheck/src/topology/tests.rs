use super::*;

const ALL: [Location; 4] = [
    Location::None,
    Location::Interior,
    Location::Boundary,
    Location::Exterior,
];

#[test]
fn location_merge_is_commutative_and_idempotent() {
    for a in ALL {
        assert_eq!(Location::merge(a, a), a);
        assert_eq!(Location::merge(Location::None, a), a);
        for b in ALL {
            assert_eq!(Location::merge(a, b), Location::merge(b, a));
        }
    }
    assert_eq!(
        Location::merge(Location::Interior, Location::Boundary),
        Location::Boundary
    );
}

#[test]
fn label_merge_keeps_arguments_apart() {
    let a = Label::on(0, Location::Interior);
    let b = Label::on(1, Location::Boundary);
    let m = Label::merge(a, b);
    assert_eq!(m.location(0), Location::Interior);
    assert_eq!(m.location(1), Location::Boundary);
    assert_eq!(Label::merge(m, m), m);
    assert_eq!(Label::merge(a, b), Label::merge(b, a));
}

#[test]
fn flip_swaps_sides_only() {
    let l = Label::area(0, Location::Boundary, Location::Exterior, Location::Interior);
    let f = l.flip();
    assert_eq!(f.side(0, Position::Left), Location::Interior);
    assert_eq!(f.side(0, Position::Right), Location::Exterior);
    assert_eq!(f.location(0), Location::Boundary);
    assert!(f.is_area_for(0));
    assert!(!f.is_area_for(1));
    assert_eq!(f.flip(), l);
}

#[test]
fn boundary_rules_differ_on_shared_endpoints() {
    use BoundaryNodeRule::*;
    assert_eq!(Mod2.location(1), Location::Boundary);
    assert_eq!(Mod2.location(2), Location::Interior);
    assert_eq!(Mod2.location(3), Location::Boundary);
    assert_eq!(AtMostOne.location(1), Location::Boundary);
    assert_eq!(AtMostOne.location(2), Location::Exterior);
    assert!(EndPoint.is_in_boundary(4));
    assert!(!Multivalent.is_in_boundary(1));
    assert!(Multivalent.is_in_boundary(2));
    assert_eq!(BoundaryNodeRule::default(), Mod2);
}
