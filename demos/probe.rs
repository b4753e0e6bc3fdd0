//! Prints a handful of geoprim relation queries.
//!
//! Usage:
//! ```text
//! cargo run --example probe                # every case
//! cargo run --example probe -- cuboid      # one case: lines | planes | sphere | cuboid | polygon
//! RUST_LOG=geoprim=trace cargo run --example probe
//! ```

use geoprim::prelude::*;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for geoprim.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geoprim=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("probe=info".parse().unwrap_or_default())
        .add_directive("geoprim=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let selected = std::env::args().nth(1);
    let wants = |name: &str| selected.as_deref().map_or(true, |s| s == name);

    if wants("lines") {
        lines();
    }
    if wants("planes") {
        planes()?;
    }
    if wants("sphere") {
        sphere();
    }
    if wants("cuboid") {
        cuboid()?;
    }
    if wants("polygon") {
        polygon()?;
    }
    Ok(())
}

fn lines() {
    let x_axis = Line::new(Location::ORIGIN, Direction::LEFT);
    let ray = Ray::new(Location::new(3.0, 5.0, 0.0), Direction::DOWN);
    let segment = BoundedRay::new(Location::new(0.0, 1.0, 2.0), Location::new(0.0, 1.0, -2.0));

    tracing::info!(crossing = ?x_axis.intersection_with(&ray), "line x ray");
    tracing::info!(
        distance = segment.distance_from(&x_axis),
        mirrored = x_axis.distance_from(&segment),
        "segment above the x axis"
    );
    println!("{x_axis}\n{ray}\n{segment:.2}");
}

fn planes() -> Result<()> {
    let floor: Plane = "Plane[Normal: <0, 1, 0>; PointClosestToOrigin: <0, -1, 0>]".parse()?;
    let wall = Plane::new(Direction::LEFT, Location::new(2.0, 0.0, 0.0));
    let ray = Ray::new(Location::new(0.0, 4.0, 0.0), Direction::new(1.0, -1.0, 0.0));

    tracing::info!(seam = ?floor.intersection_with(&wall), "floor x wall");
    tracing::info!(hit = ?ray.intersection_with(&floor), reflected = ?ray.reflected_by(&floor), "ray onto floor");
    println!("{floor}\n{wall:.3}");
    Ok(())
}

fn sphere() {
    let sphere = Sphere::new(Location::new(0.0, 0.0, 5.0), 2.0);
    let ray = Ray::new(Location::ORIGIN, Direction::FORWARD);

    tracing::info!(hits = ?sphere.intersection_with(&ray), "ray through sphere");
    tracing::info!(bounce = ?sphere.reflection_of_ray(&ray), "reflection");
    tracing::info!(
        volume = sphere.volume(),
        surface_area = sphere.surface_area(),
        "closed forms"
    );
    println!("{sphere}");
}

fn cuboid() -> Result<()> {
    let cuboid = OriginCuboid::new(7.2, 13.6, 1.4);
    let probe = Location::new(4.6, 0.0, 0.0);

    tracing::info!(
        distance = cuboid.distance_from(&probe),
        contained = cuboid.contains(&Location::new(3.6, 6.8, 0.7)),
        "measured box"
    );
    for side in CardinalOrientation::ALL {
        tracing::info!(plane = %cuboid.side_surface_plane(side)?, ?side, "face");
    }
    println!("{cuboid}");
    Ok(())
}

fn polygon() -> Result<()> {
    let vertices = [
        Location::new(-1.0, 0.0, -1.0),
        Location::new(-1.0, 0.0, 1.0),
        Location::new(0.0, 0.0, 1.0),
        Location::new(0.0, 0.0, 0.0),
        Location::new(1.0, 0.0, 0.0),
        Location::new(1.0, 0.0, -1.0),
    ];
    let polygon = Polygon::new(&vertices)?;

    tracing::info!(
        normal = %polygon.normal(),
        area = polygon.area(),
        notch = polygon.contains(Location::new(0.5, 0.0, 0.5)),
        "l-shaped polygon"
    );
    println!("{polygon}");
    Ok(())
}
