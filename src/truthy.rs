//! Explicit truthiness, used by [`if_truthy`](crate::if_truthy).
//!
//! A value is truthy when it is present and, for numbers, text and
//! collections, non-zero or non-empty. There is no blanket impl: a type opts in.

use serde_json::Value;

pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_int {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f.is_truthy()),
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers() {
        assert!(1i32.is_truthy());
        assert!(!0u64.is_truthy());
        assert!((-0.5f64).is_truthy());
        assert!(!0.0f32.is_truthy());
        assert!(!f64::NAN.is_truthy());
    }

    #[test]
    fn text_and_collections() {
        assert!("a".is_truthy());
        assert!(!"".is_truthy());
        assert!(!String::new().is_truthy());
        assert!(vec![0].is_truthy());
        assert!(!Vec::<u8>::new().is_truthy());
        assert!(!(&[] as &[i32]).is_truthy());
    }

    #[test]
    fn options_look_through() {
        assert!(Some(true).is_truthy());
        assert!(!Some(0).is_truthy());
        assert!(!None::<i32>.is_truthy());
    }

    #[test]
    fn json_values() {
        assert!(!json!(null).is_truthy());
        assert!(!json!(0).is_truthy());
        assert!(json!(8888).is_truthy());
        assert!(!json!("").is_truthy());
        assert!(json!([1]).is_truthy());
        assert!(!json!({}).is_truthy());
        assert!(json!({"port": 1}).is_truthy());
    }
}
