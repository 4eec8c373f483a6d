//! # Debug Print
//!
//! A colored debug-output utility library: variable and struct dumpers,
//! console and popup message macros, function-entry/exit tracers, and an
//! internationalized label table.
//!
//! ## Key Features
//!
//! * Generic value dumping without per-type code: values are classified
//!   into shape categories (scalar, enum, fixed array, dynamic sequence,
//!   record) and rendered with per-category layout rules
//! * Truecolor console output with a cached terminal-capability probe
//! * Call-site capture (file, line, function) for warning and error blocks
//! * RAII tracers that print scope entry, exit, and elapsed time
//! * Locale-keyed label table loaded from JSON resources, with built-in
//!   fallbacks
//! * In-memory log accumulator with timestamped file output
//!
//! ## Main Components
//!
//! * `shape` / `value_printer`: the classification and rendering engine
//! * `console`: colored stdout/stderr sink and message operations
//! * `popup`: message dialogs (native with the `popup` feature)
//! * `log_writer`: log accumulation and persistence
//! * `config`: process-scoped settings (colors, exit-on-error, log path)
//! * `string_table`: every user-facing label, per language
//!
//! ## Quick Start
//!
//! ```
//! use debug_print::{print_message, print_variable, print_struct, reflect_record};
//!
//! struct Vec3 {
//!     x: f32,
//!     y: f32,
//!     z: f32,
//! }
//! reflect_record!(Vec3 { x, y, z });
//!
//! let position = Vec3 { x: 1.0, y: 2.0, z: 3.0 };
//! let count = 3;
//!
//! print_message!("starting up\n");
//! print_variable!(count);
//! print_struct!(position);
//! ```

pub mod clock;
pub mod color;
pub mod config;
pub mod console;
pub mod log_writer;
pub mod popup;
pub mod shape;
pub mod string_table;
pub mod tracer;
pub mod value_printer;

pub use clock::Stopwatch;
pub use color::Color;
pub use console::CallSite;
pub use log_writer::LogWriter;
pub use popup::PopupIcon;
pub use shape::{Inspect, RecordInspect, Shape};
pub use string_table::StringTable;
pub use tracer::{FunctionTracer, ObjectTracer};
