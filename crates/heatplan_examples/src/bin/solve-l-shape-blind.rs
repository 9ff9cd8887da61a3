use glam::IVec3;
use heatplan::prelude::*;
use heatplan_examples::{init_tracing, render_l_shape_to_png};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // L-shaped room: 4m back wall (wall A), 3m side wall (wall B), and a
    // blind corner cabinet joining them at the origin. The water line sits
    // on wall A at 95cm height; gas is further down the same wall.
    let room = Room::new(400, 300, 260)
        .with_wall_b_length(300)
        .with_utility(Utility::new(UtilityKind::Water, IVec3::new(200, 95, 0)))
        .with_utility(Utility::at_x(UtilityKind::Gas, 300));

    // Wet and hot work follow their lines onto arm A; the monoliths stack
    // on arm B; the drawer cabinet balances toward the emptier arm.
    let wishlist = vec![
        WishItem::new(FixtureKind::SinkCabinet, 60),
        WishItem::new(FixtureKind::StoveCabinet, 60),
        WishItem::new(FixtureKind::Fridge, 60),
        WishItem::new(FixtureKind::Pantry, 60),
        WishItem::new(FixtureKind::Dishwasher, 60),
        WishItem::new(FixtureKind::DrawerCabinet, 45),
    ];

    let solver = DualSpanSolver::try_new(room, CornerUnit::Blind, SolverConfig::default())?;
    let result = solver.solve(&wishlist);

    info!(
        "Corner {} ({}cm); arm A placed {}, arm B placed {}.",
        result.corner.unit,
        result.corner.size_cm,
        result.arm_a.volumes.len(),
        result.arm_b.volumes.len()
    );
    for volume in &result.volumes {
        // Map the global position back onto its arm for the report.
        let placement = match solver.arm_position_of(volume.position()) {
            Some((arm, local)) => format!("arm {arm:?} at {local}cm"),
            None => "corner".to_string(),
        };
        info!(
            "{:>14} at global ({:>3}, {:>3}), {}",
            volume.function.to_string(),
            volume.x,
            volume.z,
            placement
        );
    }

    render_l_shape_to_png(&result, solver.room(), 3, "solve-l-shape-blind.png")?;

    Ok(())
}
