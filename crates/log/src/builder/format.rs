//! Format layer creation macros

/// Text layer (`pretty` or `compact`) with the display toggles applied,
/// boxed so every format yields the same layer type.
macro_rules! create_fmt_layer {
    ($format:ident, $display:expr, $writer:expr) => {{
        let display = $display;
        let layer = tracing_subscriber::fmt::layer()
            .$format()
            .with_writer($writer)
            .with_ansi(display.colors)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source)
            .with_thread_ids(display.thread_ids)
            .with_thread_names(display.thread_names);

        if display.time {
            tracing_subscriber::Layer::boxed(layer)
        } else {
            tracing_subscriber::Layer::boxed(layer.without_time())
        }
    }};
}

/// JSON layer (has additional options)
macro_rules! create_json_layer {
    ($display:expr, $writer:expr) => {{
        let display = $display;
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer($writer)
            .with_current_span(true)
            .with_span_list(display.span_list)
            .flatten_event(display.flatten)
            .with_ansi(false)
            .with_target(display.target)
            .with_file(display.source)
            .with_line_number(display.source)
            .with_thread_ids(display.thread_ids)
            .with_thread_names(display.thread_names);

        if display.time {
            tracing_subscriber::Layer::boxed(layer)
        } else {
            tracing_subscriber::Layer::boxed(layer.without_time())
        }
    }};
}
