use heatplan::prelude::*;
use heatplan_examples::{init_tracing, render_layer_stack_to_png, RenderConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Wall span and output image
    let span_cm = 400;
    let image_size = (1200, 360);

    // Two committed placements act as field emitters:
    // - sink cabinet over 70..130
    // - stove cabinet over 270..330
    let emitters = vec![
        FieldEmitter::new(70, 60, FixtureKind::SinkCabinet),
        FieldEmitter::new(270, 60, FixtureKind::StoveCabinet),
    ];

    // Each later item sees its own view of those emitters:
    // - the dishwasher is pulled toward the sink (short plumbing runs)
    // - the fridge is pushed away from the stove
    // - the hood is pulled hard over the stove
    let dishwasher = compute_dynamic_fields(&emitters, FixtureKind::Dishwasher, span_cm);
    let fridge = compute_dynamic_fields(&emitters, FixtureKind::Fridge, span_cm);
    let hood = compute_dynamic_fields(&emitters, FixtureKind::Hood, span_cm);

    for (name, field) in [
        ("dishwasher", &dishwasher),
        ("fridge", &fridge),
        ("hood", &hood),
    ] {
        let best = field.find_best_position(60);
        info!(
            "Best 60cm window for the {}: {}cm (center value {:.1})",
            name,
            best,
            field.get(best + 30)
        );
    }

    let config = RenderConfig::new(image_size, span_cm);
    render_layer_stack_to_png(
        &[
            ("dishwasher target", &dishwasher),
            ("fridge target", &fridge),
            ("hood target", &hood),
        ],
        &config,
        "fields-attraction-repulsion.png",
    )?;

    Ok(())
}
