#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{
    init_tracing, kind_color, render_field_to_png, render_l_shape_to_png,
    render_layer_stack_to_png, render_volumes_to_png, RenderConfig,
};
