/// Shape classification for the value formatter.
///
/// Every printable value is classified exactly once, before any rendering
/// happens, into the closed set of categories below. Each category maps to
/// one layout rule in `value_printer`. Classification is total over the
/// supported types and mutually exclusive: the categories are separate
/// `Inspect` impls, and trait coherence guarantees a type matches at most
/// one of them. A type with no impl cannot reach the formatter at all; the
/// rejection happens at compile time.
///
/// Category resolution, in the order a new type should be considered:
///
/// 1. `Enum` for named discrete values, opted in via [`reflect_enum!`](crate::reflect_enum).
/// 2. `FixedArray` for `[T; N]`.
/// 3. `DynamicSequence` for `Vec<T>` and slices.
/// 4. `Record` for plain aggregates, opted in via [`reflect_record!`](crate::reflect_record).
/// 5. `Scalar` for the built-in primitives with a textual conversion.

/// The classified form of a value, ready for rendering.
///
/// Scalar text is captured at classification time, so a `Shape` borrows
/// nothing from the value it was built from.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A value with a built-in textual conversion.
    Scalar(String),
    /// A named discrete value; carries the variant's declared name.
    Enum(&'static str),
    /// A homogeneous sequence whose length is part of the type.
    FixedArray(Vec<Shape>),
    /// A homogeneous sequence with a runtime length.
    DynamicSequence(Vec<Shape>),
    /// An aggregate with named fields, in declaration order.
    Record(Vec<(&'static str, Shape)>),
}

/// Classifies a value into its [`Shape`].
///
/// Implemented for the primitive scalars, arrays, `Vec`, slices, and
/// references; user enums and records opt in through
/// [`reflect_enum!`](crate::reflect_enum) and
/// [`reflect_record!`](crate::reflect_record).
pub trait Inspect {
    /// Produces the classified form of `self`. Pure; called once per
    /// top-level format operation.
    fn shape(&self) -> Shape;
}

/// Marker for types classified as `Record`.
///
/// Only [`reflect_record!`](crate::reflect_record) implements this, which
/// makes the record formatter reject scalars, enums, and sequences at
/// compile time. Polymorphic types (trait objects, types hiding fields
/// behind accessors) cannot be declared through the macro, so they never
/// reach the formatter as records.
pub trait RecordInspect: Inspect {}

macro_rules! scalar_inspect {
    ($($scalar:ty),+ $(,)?) => {
        $(
            impl Inspect for $scalar {
                fn shape(&self) -> Shape {
                    Shape::Scalar(self.to_string())
                }
            }
        )+
    };
}

scalar_inspect!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl Inspect for str {
    fn shape(&self) -> Shape {
        Shape::Scalar(self.to_string())
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape {
        Shape::FixedArray(self.iter().map(Inspect::shape).collect())
    }
}

impl<T: Inspect> Inspect for [T] {
    fn shape(&self) -> Shape {
        Shape::DynamicSequence(self.iter().map(Inspect::shape).collect())
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn shape(&self) -> Shape {
        Shape::DynamicSequence(self.iter().map(Inspect::shape).collect())
    }
}

/// Classifies a struct as a `Record`, listing its fields in declaration
/// order.
///
/// The struct must be a plain aggregate: every listed field is read
/// directly and must itself implement
/// [`Inspect`](crate::shape::Inspect). A field without an impl fails to
/// compile, which is how unsupported shapes are rejected before any output
/// is produced.
///
/// # Examples
///
/// ```
/// use debug_print::reflect_record;
/// use debug_print::shape::{Inspect, Shape};
///
/// struct Vec3 {
///     x: f32,
///     y: f32,
///     z: f32,
/// }
/// reflect_record!(Vec3 { x, y, z });
///
/// let v = Vec3 { x: 1.0, y: 2.0, z: 3.0 };
/// assert!(matches!(v.shape(), Shape::Record(fields) if fields.len() == 3));
/// ```
#[macro_export]
macro_rules! reflect_record {
    ($record:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::shape::Inspect for $record {
            fn shape(&self) -> $crate::shape::Shape {
                $crate::shape::Shape::Record(vec![
                    $((stringify!($field), $crate::shape::Inspect::shape(&self.$field))),+
                ])
            }
        }

        impl $crate::shape::RecordInspect for $record {}
    };
}

/// Classifies a unit-variant enum as an `Enum`, rendering each value by its
/// declared variant name rather than any numeric backing value.
///
/// # Examples
///
/// ```
/// use debug_print::reflect_enum;
/// use debug_print::shape::{Inspect, Shape};
///
/// enum Direction { North, South, East, West }
/// reflect_enum!(Direction { North, South, East, West });
///
/// assert_eq!(Direction::East.shape(), Shape::Enum("East"));
/// ```
#[macro_export]
macro_rules! reflect_enum {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::shape::Inspect for $name {
            fn shape(&self) -> $crate::shape::Shape {
                match self {
                    $($name::$variant => $crate::shape::Shape::Enum(stringify!($variant))),+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        left: i32,
        right: i32,
    }
    crate::reflect_record!(Pair { left, right });

    enum Light {
        Red,
        Green,
    }
    crate::reflect_enum!(Light { Red, Green });

    #[test]
    fn test_scalars_capture_display_text() {
        assert_eq!(42i32.shape(), Shape::Scalar("42".to_string()));
        assert_eq!(true.shape(), Shape::Scalar("true".to_string()));
        assert_eq!("hi".shape(), Shape::Scalar("hi".to_string()));
        assert_eq!(2.5f64.shape(), Shape::Scalar("2.5".to_string()));
    }

    #[test]
    fn test_array_is_fixed_and_vec_is_dynamic() {
        assert!(matches!([1, 2, 3].shape(), Shape::FixedArray(items) if items.len() == 3));
        assert!(matches!(vec![1, 2].shape(), Shape::DynamicSequence(items) if items.len() == 2));
    }

    #[test]
    fn test_enum_carries_variant_name() {
        assert_eq!(Light::Red.shape(), Shape::Enum("Red"));
        assert_eq!(Light::Green.shape(), Shape::Enum("Green"));
    }

    #[test]
    fn test_record_fields_keep_declaration_order() {
        let pair = Pair { left: -1, right: 7 };
        let Shape::Record(fields) = pair.shape() else {
            panic!("expected a record shape");
        };
        assert_eq!(fields[0], ("left", Shape::Scalar("-1".to_string())));
        assert_eq!(fields[1], ("right", Shape::Scalar("7".to_string())));
    }
}
