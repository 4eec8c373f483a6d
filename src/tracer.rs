use crate::clock::{self, Stopwatch};
use crate::color::Color;
use crate::console::{self, CallSite};
use crate::string_table::{
    self, KEY_ELAPSED_TIME, KEY_END_FUNCTION, KEY_END_OBJECT, KEY_FILE, KEY_LINE_NUMBER,
    KEY_PAIR_SEPARATOR, KEY_SECONDS, KEY_SEPARATOR, KEY_START_FUNCTION, KEY_START_OBJECT,
};

/// Scope-exit instrumentation.
///
/// Both tracers are guards: construction prints the entry message, the
/// guaranteed drop at scope exit prints the exit message. Each side is one
/// console write.

/// Traces a function body: entry block with datetime and call site on
/// construction, exit block with elapsed seconds on drop.
///
/// Usually created through [`trace_function!`](crate::trace_function),
/// which captures the call site and keeps the guard alive for the rest of
/// the enclosing block.
pub struct FunctionTracer {
    color: Color,
    watch: Stopwatch,
}

impl FunctionTracer {
    pub fn new(site: CallSite) -> Self {
        Self::with_color(site, Color::DEFAULT)
    }

    pub fn with_color(site: CallSite, color: Color) -> Self {
        let watch = Stopwatch::start();
        let pair = string_table::get(KEY_PAIR_SEPARATOR);

        let mut out = String::new();
        out.push_str(&string_table::get(KEY_SEPARATOR));
        out.push_str(&clock::datetime_string());
        out.push('\n');
        out.push_str(&format!("{}{}{}\n", string_table::get(KEY_FILE), pair, site.file));
        out.push_str(&format!(
            "{}{}{}\n",
            string_table::get(KEY_LINE_NUMBER),
            pair,
            site.line
        ));
        out.push_str(site.function);
        out.push('\n');
        out.push_str(&string_table::get(KEY_START_FUNCTION));
        console::write_message(&out, color);

        Self { color, watch }
    }
}

impl Drop for FunctionTracer {
    fn drop(&mut self) {
        let mut out = String::new();
        out.push_str(&string_table::get(KEY_END_FUNCTION));
        out.push_str(&string_table::get(KEY_ELAPSED_TIME));
        out.push_str(&string_table::get(KEY_PAIR_SEPARATOR));
        out.push_str(&self.watch.elapsed_seconds_string());
        out.push_str(&string_table::get(KEY_SECONDS));
        out.push('\n');
        out.push_str(&string_table::get(KEY_SEPARATOR));
        console::write_message(&out, self.color);
    }
}

/// Traces an object's lifetime. Meant to live as a field of the traced
/// type: the field's construction and drop bracket the owner's.
///
/// ```
/// use debug_print::tracer::ObjectTracer;
///
/// struct Widget {
///     _tracer: ObjectTracer,
/// }
///
/// let _widget = Widget { _tracer: ObjectTracer::new("Widget") };
/// // "Widget constructed" now, "Widget dropped" at scope exit
/// ```
pub struct ObjectTracer {
    name: &'static str,
    color: Color,
}

impl ObjectTracer {
    pub fn new(name: &'static str) -> Self {
        Self::with_color(name, Color::GREEN)
    }

    pub fn with_color(name: &'static str, color: Color) -> Self {
        console::write_message(
            &format!("{}{}", name, string_table::get(KEY_START_OBJECT)),
            color,
        );
        Self { name, color }
    }
}

impl Drop for ObjectTracer {
    fn drop(&mut self) {
        console::write_message(
            &format!("{}{}", self.name, string_table::get(KEY_END_OBJECT)),
            self.color,
        );
    }
}

/// Traces the enclosing block: prints the entry block now and the exit
/// block with elapsed time when the block ends. Optionally takes a color.
#[macro_export]
macro_rules! trace_function {
    () => {
        let _function_tracer = $crate::tracer::FunctionTracer::new($crate::call_site!());
    };
    ($color:expr) => {
        let _function_tracer =
            $crate::tracer::FunctionTracer::with_color($crate::call_site!(), $color);
    };
}
