use crate::color::Color;
use crate::config;
use crate::console;
use crate::shape::{Inspect, RecordInspect, Shape};
use crate::string_table::{
    self, KEY_CLOSE_BRACKET, KEY_OPEN_BRACKET, KEY_PAIR_SEPARATOR, KEY_SEPARATOR, KEY_VALUE,
    KEY_VARIABLE,
};

/// The value renderer.
///
/// A top-level print classifies the value once, renders the resulting
/// [`Shape`] into a single buffer with the per-category layout rules, and
/// emits the buffer as one console write. Nested records indent by one
/// two-space unit per level.

/// Spaces prepended per nesting level.
const INDENT_UNIT: &str = "  ";

// Labels are snapshotted once per top-level render so a concurrent language
// switch cannot produce a mixed-locale block.
struct Labels {
    separator: String,
    pair: String,
    variable: String,
    value: String,
    open: String,
    close: String,
}

impl Labels {
    fn load() -> Self {
        Self {
            separator: string_table::get(KEY_SEPARATOR),
            pair: string_table::get(KEY_PAIR_SEPARATOR),
            variable: string_table::get(KEY_VARIABLE),
            value: string_table::get(KEY_VALUE),
            open: string_table::get(KEY_OPEN_BRACKET),
            close: string_table::get(KEY_CLOSE_BRACKET),
        }
    }
}

/// Renders a classified value into its textual form.
///
/// This is the pure core of the library; the `print_*` functions wrap it
/// with a console write.
///
/// # Examples
///
/// ```
/// use debug_print::shape::Inspect;
/// use debug_print::value_printer::format_variable;
///
/// let shape = 10i32.shape();
/// assert_eq!(format_variable("a", &shape), "variable: a  value: 10\n");
/// ```
pub fn format_variable(name: &str, shape: &Shape) -> String {
    let labels = Labels::load();
    let mut out = String::new();

    match shape {
        Shape::Scalar(text) => push_value_line(&mut out, &labels, 0, name, text),
        Shape::Enum(variant) => push_value_line(&mut out, &labels, 0, name, variant),
        Shape::FixedArray(items) | Shape::DynamicSequence(items) => {
            push_sequence(&mut out, &labels, 0, name, items);
        }
        Shape::Record(fields) => {
            out.push_str(&labels.separator);
            out.push_str(&format!("{}{}{}\n", labels.variable, labels.pair, name));
            push_record_fields(&mut out, &labels, 0, fields);
            out.push_str(&labels.separator);
        }
    }
    out
}

// "<variable>: <name>  <value>: <text>\n", indented.
fn push_value_line(out: &mut String, labels: &Labels, indent: usize, name: &str, text: &str) {
    out.push_str(&format!(
        "{}{}{}{}  {}{}{}\n",
        INDENT_UNIT.repeat(indent),
        labels.variable,
        labels.pair,
        name,
        labels.value,
        labels.pair,
        text,
    ));
}

// Header "<variable><name>[<count>]: " then one "[<index>]: <element>" line
// per element, indices ascending from zero.
fn push_sequence(out: &mut String, labels: &Labels, indent: usize, name: &str, items: &[Shape]) {
    let pad = INDENT_UNIT.repeat(indent);
    out.push_str(&format!(
        "{}{}{}{}{}{}{}\n",
        pad,
        labels.variable,
        name,
        labels.open,
        items.len(),
        labels.close,
        labels.pair,
    ));

    for (index, item) in items.iter().enumerate() {
        match item {
            Shape::Scalar(text) => push_element_line(out, labels, &pad, index, text),
            Shape::Enum(variant) => push_element_line(out, labels, &pad, index, variant),
            // Composite elements get a bare index line and recurse one
            // level deeper.
            Shape::Record(fields) => {
                push_element_line(out, labels, &pad, index, "");
                push_record_fields(out, labels, indent + 1, fields);
            }
            Shape::FixedArray(nested) | Shape::DynamicSequence(nested) => {
                push_element_line(out, labels, &pad, index, "");
                push_sequence(out, labels, indent + 1, "", nested);
            }
        }
    }
}

fn push_element_line(out: &mut String, labels: &Labels, pad: &str, index: usize, text: &str) {
    out.push_str(&format!(
        "{}{}{}{}{}{}\n",
        pad, labels.open, index, labels.close, labels.pair, text,
    ));
}

fn push_record_fields(
    out: &mut String,
    labels: &Labels,
    indent: usize,
    fields: &[(&'static str, Shape)],
) {
    for (field_name, field_shape) in fields {
        match field_shape {
            // A nested record prints its name line here and its fields one
            // level deeper; the indent returns to this level afterwards.
            Shape::Record(nested) => {
                out.push_str(&format!(
                    "{}{}{}{}\n",
                    INDENT_UNIT.repeat(indent),
                    labels.variable,
                    labels.pair,
                    field_name,
                ));
                push_record_fields(out, labels, indent + 1, nested);
            }
            Shape::Scalar(text) => push_value_line(out, labels, indent, field_name, text),
            Shape::Enum(variant) => push_value_line(out, labels, indent, field_name, variant),
            Shape::FixedArray(items) | Shape::DynamicSequence(items) => {
                push_sequence(out, labels, indent, field_name, items);
            }
        }
    }
}

/// Prints a variable in the configured message color.
pub fn print_variable<T: Inspect + ?Sized>(name: &str, value: &T) {
    print_variable_color(name, value, config::snapshot().message_color);
}

/// Prints a variable in an explicit color.
pub fn print_variable_color<T: Inspect + ?Sized>(name: &str, value: &T, color: Color) {
    let text = format_variable(name, &value.shape());
    console::write_message(&text, color);
}

/// Prints a record with the record layout (separator-framed header and
/// per-field lines). Only types declared through
/// [`reflect_record!`](crate::reflect_record) are accepted.
pub fn print_struct<T: RecordInspect + ?Sized>(name: &str, value: &T) {
    print_struct_color(name, value, config::snapshot().message_color);
}

/// Prints a record in an explicit color.
pub fn print_struct_color<T: RecordInspect + ?Sized>(name: &str, value: &T, color: Color) {
    let text = format_variable(name, &value.shape());
    console::write_message(&text, color);
}

/// Prints a variable with its name captured from the expression, optionally
/// in an explicit color.
///
/// # Examples
///
/// ```
/// use debug_print::print_variable;
///
/// let count = 3;
/// print_variable!(count);
/// ```
#[macro_export]
macro_rules! print_variable {
    ($variable:expr) => {
        $crate::value_printer::print_variable(stringify!($variable), &$variable)
    };
    ($variable:expr, $color:expr) => {
        $crate::value_printer::print_variable_color(stringify!($variable), &$variable, $color)
    };
}

/// Prints a record declared through [`reflect_record!`](crate::reflect_record),
/// optionally in an explicit color. Passing any other shape fails to
/// compile.
#[macro_export]
macro_rules! print_struct {
    ($variable:expr) => {
        $crate::value_printer::print_struct(stringify!($variable), &$variable)
    };
    ($variable:expr, $color:expr) => {
        $crate::value_printer::print_struct_color(stringify!($variable), &$variable, $color)
    };
}
