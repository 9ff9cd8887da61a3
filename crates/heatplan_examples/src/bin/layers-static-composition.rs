use heatplan::prelude::*;
use heatplan_examples::{
    init_tracing, render_field_to_png, render_layer_stack_to_png, RenderConfig,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A 4m back wall with water and gas lines, a window over the future
    // sink area, and the entry door on the right wall.
    let room = Room::new(400, 300, 260)
        .with_utility(Utility::at_x(UtilityKind::Water, 100))
        .with_utility(Utility::at_x(UtilityKind::Gas, 300))
        .with_window(Opening::new(Wall::Back, 60, 80, 120))
        .with_door(Opening::new(Wall::Right, 0, 90, 210));

    // Every static layer is built once per room and reused across the
    // whole solve.
    let layers = StaticLayers::build(&room);

    let config = RenderConfig::new((1200, 840), room.width_cm);
    render_layer_stack_to_png(
        &[
            ("architecture", &layers.architecture),
            ("installation water", &layers.installation_water),
            ("installation gas", &layers.installation_gas),
            ("ergonomics standard", &layers.ergonomics_standard),
            ("ergonomics monolith", &layers.ergonomics_monolith),
            ("traffic", &layers.traffic),
            ("light", &layers.light),
        ],
        &config,
        "layers-static-composition.png",
    )?;

    // The combined view is what the solver actually scans, here weighted
    // for a sink cabinet.
    let combined = layers.combined_for(FixtureKind::SinkCabinet);
    render_field_to_png(
        &combined,
        &RenderConfig::new((1200, 160), room.width_cm),
        "layers-static-composition-combined.png",
    )?;

    info!(
        "Best 60cm sink window: {}cm",
        combined.find_best_position(60)
    );

    Ok(())
}
