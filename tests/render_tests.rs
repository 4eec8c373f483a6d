use debug_print::shape::{Inspect, Shape};
use debug_print::string_table::{self, KEY_SEPARATOR};
use debug_print::value_printer::format_variable;
use debug_print::{reflect_enum, reflect_record};

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

struct Inventory {
    owner: String,
    items: Vec<i32>,
}
reflect_record!(Inventory { owner, items });

fn separator() -> String {
    string_table::get(KEY_SEPARATOR)
}

#[test]
fn test_scalar_renders_one_line() {
    let text = format_variable("answer", &42i32.shape());
    assert_eq!(text, "variable: answer  value: 42\n");
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_scalar_kinds_use_display_text() {
    assert_eq!(
        format_variable("ratio", &2.5f64.shape()),
        "variable: ratio  value: 2.5\n"
    );
    assert_eq!(
        format_variable("ready", &true.shape()),
        "variable: ready  value: true\n"
    );
    assert_eq!(
        format_variable("name", &"Alice".shape()),
        "variable: name  value: Alice\n"
    );
}

#[test]
fn test_enum_renders_variant_name_not_number() {
    let text = format_variable("heading", &Direction::East.shape());
    assert_eq!(text, "variable: heading  value: East\n");
    assert!(!text.contains(|c: char| c.is_ascii_digit()));
}

#[test]
fn test_fixed_array_layout() {
    let samples = [1, 2, 3];
    let text = format_variable("samples", &samples.shape());
    assert_eq!(text, "variablesamples[3]: \n[0]: 1\n[1]: 2\n[2]: 3\n");
}

#[test]
fn test_dynamic_sequence_layout() {
    let names = vec!["Alice".to_string(), "Bob".to_string()];
    let text = format_variable("names", &names.shape());
    assert_eq!(text, "variablenames[2]: \n[0]: Alice\n[1]: Bob\n");
}

#[test]
fn test_sequence_indices_are_ascending_and_contiguous() {
    let values: Vec<u32> = (0..5).map(|n| n * 10).collect();
    let text = format_variable("values", &values.shape());

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6, "one header line plus one line per element");
    assert!(lines[0].contains("[5]"), "header states the element count");
    for (index, line) in lines[1..].iter().enumerate() {
        assert!(
            line.starts_with(&format!("[{}]: ", index)),
            "element line {index} out of order: {line}"
        );
    }
}

#[test]
fn test_empty_sequence_renders_header_only() {
    let empty: Vec<i32> = Vec::new();
    let text = format_variable("empty", &empty.shape());
    assert_eq!(text, "variableempty[0]: \n");
}

#[test]
fn test_record_layout_matches_declaration_order() {
    let position = Vec3 { x: 1.0, y: 2.0, z: 3.0 };
    let text = format_variable("position", &position.shape());

    let expected = format!(
        "{sep}variable: position\n\
         variable: x  value: 1\n\
         variable: y  value: 2\n\
         variable: z  value: 3\n\
         {sep}",
        sep = separator()
    );
    assert_eq!(text, expected);
}

#[test]
fn test_record_enum_field_renders_variant_name() {
    let player = Player { id: 1, hp: 100.0, dir: Direction::North };
    let text = format_variable("player", &player.shape());

    assert!(text.contains("variable: id  value: 1\n"));
    assert!(text.contains("variable: hp  value: 100\n"));
    assert!(text.contains("variable: dir  value: North\n"));
}

#[test]
fn test_nested_record_indents_one_unit_per_level() {
    let transform = Transform {
        position: Vec3 { x: 0.0, y: 1.0, z: 0.0 },
        scale: Vec3 { x: 1.0, y: 1.0, z: 1.0 },
        rotation: 45.0,
    };
    let text = format_variable("transform", &transform.shape());

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "variable: transform");
    assert_eq!(lines[2], "variable: position");
    assert_eq!(lines[3], "  variable: x  value: 0");
    assert_eq!(lines[4], "  variable: y  value: 1");
    assert_eq!(lines[5], "  variable: z  value: 0");
    assert_eq!(lines[6], "variable: scale");
    assert_eq!(lines[7], "  variable: x  value: 1");
    assert_eq!(lines[8], "  variable: y  value: 1");
    assert_eq!(lines[9], "  variable: z  value: 1");
    assert_eq!(lines[10], "variable: rotation  value: 45");
}

#[test]
fn test_indentation_returns_to_parent_after_nested_record() {
    let transform = Transform {
        position: Vec3 { x: 0.0, y: 0.0, z: 0.0 },
        scale: Vec3 { x: 1.0, y: 1.0, z: 1.0 },
        rotation: 0.0,
    };
    let text = format_variable("transform", &transform.shape());

    let lines: Vec<&str> = text.lines().collect();
    let scale_line = lines
        .iter()
        .find(|line| line.ends_with(": scale"))
        .expect("scale field line");
    assert!(
        !scale_line.starts_with(' '),
        "sibling of a nested record must sit at the parent indent"
    );
}

#[test]
fn test_sequence_field_inside_record() {
    let inventory = Inventory {
        owner: "potion seller".to_string(),
        items: vec![7, 11],
    };
    let text = format_variable("inventory", &inventory.shape());

    assert!(text.contains("variable: owner  value: potion seller\n"));
    assert!(text.contains("variableitems[2]: \n"));
    assert!(text.contains("[0]: 7\n"));
    assert!(text.contains("[1]: 11\n"));
}

#[test]
fn test_record_elements_inside_sequence() {
    let points = [
        Vec3 { x: 1.0, y: 2.0, z: 3.0 },
        Vec3 { x: 4.0, y: 5.0, z: 6.0 },
    ];
    let text = format_variable("points", &points.shape());

    assert!(text.starts_with("variablepoints[2]: \n[0]: \n"));
    assert!(text.contains("  variable: x  value: 1\n"));
    assert!(text.contains("[1]: \n"));
    assert!(text.contains("  variable: z  value: 6\n"));
}

#[test]
fn test_enum_sequence_elements_render_variant_names() {
    let route = [Direction::North, Direction::South, Direction::West];
    let text = format_variable("route", &route.shape());
    assert_eq!(
        text,
        "variableroute[3]: \n[0]: North\n[1]: South\n[2]: West\n"
    );
}

#[test]
fn test_classification_is_stable_across_calls() {
    let value = 5u8;
    assert_eq!(value.shape(), value.shape());
    assert_eq!(value.shape(), Shape::Scalar("5".to_string()));
}
