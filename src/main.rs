use debug_print::color::Color;
use debug_print::tracer::ObjectTracer;
use debug_print::{
    config, log_writer, popup_error_message, popup_message, popup_warning_message,
    print_error_message, print_message, print_struct, print_variable, print_warning_message,
    reflect_enum, reflect_record, trace_function, PopupIcon,
};

// Object-lifetime tracing: the tracer field brackets the owner's lifetime.
struct Widget {
    _tracer: ObjectTracer,
}

impl Widget {
    fn new() -> Self {
        Self { _tracer: ObjectTracer::new("Widget") }
    }
}

enum Direction {
    North,
    South,
    East,
    West,
}
reflect_enum!(Direction { North, South, East, West });

struct Vec3 {
    x: f32,
    y: f32,
    z: f32,
}
reflect_record!(Vec3 { x, y, z });

struct Player {
    id: i32,
    hp: f32,
    dir: Direction,
}
reflect_record!(Player { id, hp, dir });

struct Transform {
    position: Vec3,
    scale: Vec3,
    rotation: f32,
}
reflect_record!(Transform { position, scale, rotation });

fn main() {
    trace_function!();

    // ----- configuration -----
    config::set_log_path("./logs/");
    config::set_exit_on_error(false);
    config::set_message_color(Color::DEFAULT);
    config::set_warning_color(Color::YELLOW);
    config::set_error_color(Color::BRIGHT_RED);
    config::set_popup_message_color(Color::DEFAULT);
    config::set_popup_warning_color(Color::YELLOW);
    config::set_popup_error_color(Color::BRIGHT_RED);

    // ----- object-lifetime tracing -----
    let _widget = Widget::new();

    // ----- plain messages -----
    print_message!("print_message: plain message\n");

    // ----- variable dumping -----
    let count = 10;
    let samples = [1, 2, 3];
    let names = vec!["Alice".to_string(), "Bob".to_string()];
    let weights: Vec<f32> = vec![3.14, 2.71, 1.61];
    let heading = Direction::East;
    let route = [Direction::North, Direction::East, Direction::South, Direction::West];

    print_variable!(count);
    print_variable!(samples);
    print_variable!(names);
    print_variable!(weights);
    print_variable!(heading); // prints "East", not a numeric value
    print_variable!(route);

    // ----- struct dumping -----
    let vec = Vec3 { x: 1.0, y: 2.0, z: 3.0 };
    let player = Player { id: 1, hp: 100.0, dir: Direction::North };
    let transform = Transform {
        position: Vec3 { x: 0.0, y: 1.0, z: 0.0 },
        scale: Vec3 { x: 1.0, y: 1.0, z: 1.0 },
        rotation: 45.0,
    };
    print_struct!(vec);
    print_struct!(player); // enum member rendered by variant name
    print_struct!(transform); // nested Vec3 rendered recursively

    // ----- warnings and errors -----
    print_warning_message!("print_warning_message: warning message\n");
    print_error_message!("print_error_message: error message\n");

    // ----- popups -----
    popup_message!("popup_message: plain popup");
    popup_message!("popup_message: popup with info icon", PopupIcon::Info);
    popup_warning_message!("popup_warning_message: warning popup\n");
    popup_error_message!("popup_error_message: error popup\n");

    // ----- log accumulation -----
    log_writer::add("[INFO]    application started");
    log_writer::add("[WARNING] sample warning entry");
    log_writer::add("[ERROR]   sample error entry");

    print_message!("\n--- accumulated log entries ---\n");
    for entry in log_writer::entries() {
        print_message!(format!("{}\n", entry));
    }
    print_message!("-------------------------------\n\n");

    match log_writer::write_to_file(config::snapshot().log_path) {
        Ok(path) => print_message!(format!("log written to {}\n", path.display())),
        Err(err) => print_message!(format!("log write failed: {}\n", err)),
    }
}
