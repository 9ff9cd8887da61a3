use heatplan::prelude::*;
use heatplan_examples::{init_tracing, render_field_to_png, render_volumes_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // One 4m wall, water line at 100cm, gas line at 300cm.
    let room = Room::new(400, 300, 260)
        .with_utility(Utility::at_x(UtilityKind::Water, 100))
        .with_utility(Utility::at_x(UtilityKind::Gas, 300));

    // Anchors are beam-searched; the dishwasher fills a gap afterwards.
    let wishlist = vec![
        WishItem::new(FixtureKind::SinkCabinet, 60),
        WishItem::new(FixtureKind::StoveCabinet, 60),
        WishItem::new(FixtureKind::Fridge, 60),
        WishItem::new(FixtureKind::Dishwasher, 60),
    ];

    let solver = BeamSolver::try_new(room, SolverConfig::default())?;
    let result = solver.solve(&wishlist);

    for volume in &result.volumes {
        let score = match volume.meta.heatmap_score {
            Some(score) => format!(" (score {score:.0})"),
            None => String::new(),
        };
        info!(
            "{:>14} at {:>3}cm, {}cm wide, {}cm tall{}",
            volume.function.to_string(),
            volume.x,
            volume.width_cm,
            volume.meta.height_cm,
            score
        );
    }
    info!(
        "Beam kept {} branches, best total {:.0}.",
        result.debug.beam_final_size, result.debug.best_score
    );

    // The placed run, plus the combined field the sink was scored on.
    render_volumes_to_png(
        &result.volumes,
        &RenderConfig::new((1200, 200), solver.room().width_cm),
        "solve-straight-run.png",
    )?;
    let combined = solver
        .static_layers()
        .combined_for(FixtureKind::SinkCabinet);
    render_field_to_png(
        &combined,
        &RenderConfig::new((1200, 120), solver.room().width_cm),
        "solve-straight-run-field.png",
    )?;

    Ok(())
}
