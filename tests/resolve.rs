use sweep2d::math::{Point, Vector};
use sweep2d::query::{self, Overlap};
use sweep2d::shape::Shape;

#[test]
fn rectangle_stops_exactly_at_touching() {
    let moving = Shape::rect(Point::new(0, 0), Vector::new(2, 2));
    let obstacle = Shape::rect(Point::new(5, 0), Vector::new(2, 2));

    let collision = query::resolve(&moving, &obstacle, Vector::new(10, 0));

    assert!(collision.colliding);
    assert_eq!(collision.resolved, Vector::new(3, 0));
    assert_eq!(collision.remainder, Vector::new(7, 0));
}

#[test]
fn zero_delta_is_identity_even_when_overlapping() {
    let moving = Shape::rect(Point::new(0, 0), Vector::new(2, 2));
    let obstacle = Shape::rect(Point::new(1, 0), Vector::new(2, 2));
    assert!(moving.is_colliding(&obstacle));

    let collision = query::resolve(&moving, &obstacle, Vector::new(0, 0));

    assert!(!collision.colliding);
    assert_eq!(collision.resolved, Vector::new(0, 0));
    assert_eq!(collision.remainder, Vector::new(0, 0));
}

#[test]
fn unobstructed_displacement_passes_whole() {
    let moving = Shape::rect(Point::new(0, 0), Vector::new(2, 2));
    let obstacle = Shape::rect(Point::new(10, 0), Vector::new(2, 2));

    let collision = query::resolve(&moving, &obstacle, Vector::new(2, 0));

    assert!(!collision.colliding);
    assert_eq!(collision.resolved, Vector::new(2, 0));
    assert_eq!(collision.remainder, Vector::new(0, 0));
}

#[test]
fn displacement_ending_exactly_at_touching_is_safe() {
    let moving = Shape::circle(Point::new(0, 0), 5);
    let obstacle = Shape::circle(Point::new(20, 0), 5);

    // Lands at center distance 10, exactly the sum of the radii.
    let exact = query::resolve(&moving, &obstacle, Vector::new(10, 0));
    assert!(!exact.colliding);
    assert_eq!(exact.resolved, Vector::new(10, 0));
    assert_eq!(exact.remainder, Vector::new(0, 0));

    // One step further penetrates; the resolver stops at touching.
    let blocked = query::resolve(&moving, &obstacle, Vector::new(11, 0));
    assert!(blocked.colliding);
    assert_eq!(blocked.resolved, Vector::new(10, 0));
    assert_eq!(blocked.remainder, Vector::new(1, 0));
}

#[test]
fn per_axis_resolution_slides_along_a_wall() {
    let mut moving = Shape::rect(Point::new(0, 0), Vector::new(2, 2));
    let wall = Shape::rect(Point::new(5, -10), Vector::new(2, 30));

    let first = query::resolve(&moving, &wall, Vector::new(6, 6));
    assert!(first.colliding);
    assert_eq!(first.resolved, Vector::new(3, 3));
    assert_eq!(first.remainder, Vector::new(3, 3));
    moving.translate(&first.resolved);

    // Retry the blocked remainder one axis at a time.
    let horizontal = query::resolve(&moving, &wall, Vector::new(first.remainder.x, 0));
    assert!(horizontal.colliding);
    assert_eq!(horizontal.resolved, Vector::new(0, 0));
    moving.translate(&horizontal.resolved);

    let vertical = query::resolve(&moving, &wall, Vector::new(0, first.remainder.y));
    assert!(!vertical.colliding);
    assert_eq!(vertical.resolved, Vector::new(0, 3));
    moving.translate(&vertical.resolved);

    // Stopped flush against the wall on x, full movement on y.
    assert_eq!(moving.position(), Point::new(3, 6));
}

#[test]
fn degenerate_obstacles_act_as_points() {
    let moving = Shape::circle(Point::new(0, 0), 2);

    let point_circle = Shape::circle(Point::new(5, 0), 0);
    let collision = query::resolve(&moving, &point_circle, Vector::new(6, 0));
    assert!(collision.colliding);
    assert_eq!(collision.resolved, Vector::new(3, 0));

    let point_segment = Shape::segment(Point::new(5, 0), Point::new(5, 0));
    let collision = query::resolve(&moving, &point_segment, Vector::new(6, 0));
    assert!(collision.colliding);
    assert_eq!(collision.resolved, Vector::new(3, 0));
}

#[test]
fn moving_deeper_into_an_overlap_is_blocked_immediately() {
    let moving = Shape::rect(Point::new(0, 0), Vector::new(2, 2));
    let obstacle = Shape::rect(Point::new(1, 0), Vector::new(2, 2));

    let collision = query::resolve(&moving, &obstacle, Vector::new(5, 0));
    assert!(collision.colliding);
    assert_eq!(collision.resolved, Vector::new(0, 0));
    assert_eq!(collision.remainder, Vector::new(5, 0));
}

#[test]
fn moving_out_of_an_overlap_is_allowed() {
    let moving = Shape::rect(Point::new(0, 0), Vector::new(2, 2));
    let obstacle = Shape::rect(Point::new(1, 0), Vector::new(2, 2));

    let collision = query::resolve(&moving, &obstacle, Vector::new(-5, 0));
    assert!(!collision.colliding);
    assert_eq!(collision.resolved, Vector::new(-5, 0));
}

fn random_coord(rng: &mut oorandom::Rand32) -> i32 {
    rng.rand_range(0..41) as i32 - 20
}

fn random_obstacle(rng: &mut oorandom::Rand32) -> Shape {
    let position = Point::new(random_coord(rng), random_coord(rng));
    match rng.rand_range(0..3) {
        0 => Shape::circle(position, rng.rand_range(0..9) as i32),
        1 => Shape::rect(
            position,
            Vector::new(rng.rand_range(0..9) as i32, rng.rand_range(0..9) as i32),
        ),
        _ => Shape::segment(position, Point::new(random_coord(rng), random_coord(rng))),
    }
}

#[test]
fn resolved_displacements_are_bounded_and_safe() {
    let mut rng = oorandom::Rand32::new(11);

    for _ in 0..500 {
        let mut moving = Shape::circle(
            Point::new(random_coord(&mut rng), random_coord(&mut rng)),
            rng.rand_range(0..7) as i32,
        );
        let obstacle = random_obstacle(&mut rng);
        let delta = Vector::new(
            rng.rand_range(0..31) as i32 - 15,
            rng.rand_range(0..31) as i32 - 15,
        );

        // The safety property assumes a valid starting position.
        if query::overlap(&moving, &obstacle).unwrap() == Overlap::Penetrating {
            continue;
        }

        let collision = query::resolve(&moving, &obstacle, delta);

        // Never larger than the request, never opposite to it.
        assert!(collision.resolved.x.abs() <= delta.x.abs());
        assert!(collision.resolved.y.abs() <= delta.y.abs());
        assert!(i64::from(collision.resolved.x) * i64::from(delta.x) >= 0);
        assert!(i64::from(collision.resolved.y) * i64::from(delta.y) >= 0);
        assert_eq!(collision.remainder, delta - collision.resolved);
        if !collision.colliding {
            assert_eq!(collision.resolved, delta);
        }

        // Applying the resolved delta never ends up penetrating.
        moving.translate(&collision.resolved);
        let after = query::overlap(&moving, &obstacle).unwrap();
        assert_ne!(
            after,
            Overlap::Penetrating,
            "unsafe resolution against {:?} for delta {:?}",
            obstacle,
            delta
        );
    }
}
