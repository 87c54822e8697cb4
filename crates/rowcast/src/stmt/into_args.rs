use super::Primitive;

use rowcast_core::{stmt::Value, Result};

/// A single value bound to a `?` placeholder.
pub trait IntoArg {
    fn into_arg(self) -> Result<Value>;
}

impl<T: Primitive> IntoArg for T {
    fn into_arg(self) -> Result<Value> {
        Ok(self.to_value("?")?.unwrap_or(Value::Null))
    }
}

impl IntoArg for &str {
    fn into_arg(self) -> Result<Value> {
        Ok(Value::Text(self.to_string()))
    }
}

impl IntoArg for Value {
    fn into_arg(self) -> Result<Value> {
        Ok(self)
    }
}

/// The argument list bound to a filter clause.
pub trait IntoArgs {
    fn into_args(self) -> Result<Vec<Value>>;
}

impl IntoArgs for () {
    fn into_args(self) -> Result<Vec<Value>> {
        Ok(vec![])
    }
}

impl<T: IntoArg, const N: usize> IntoArgs for [T; N] {
    fn into_args(self) -> Result<Vec<Value>> {
        self.into_iter().map(IntoArg::into_arg).collect()
    }
}

impl<T: IntoArg> IntoArgs for Vec<T> {
    fn into_args(self) -> Result<Vec<Value>> {
        self.into_iter().map(IntoArg::into_arg).collect()
    }
}

impl<T: IntoArg + Clone> IntoArgs for &[T] {
    fn into_args(self) -> Result<Vec<Value>> {
        self.iter().cloned().map(IntoArg::into_arg).collect()
    }
}

macro_rules! impl_into_args_for_tuple {
    ( $( $name:ident ),+ ) => {
        impl< $( $name: IntoArg ),+ > IntoArgs for ( $( $name, )+ ) {
            #[allow(non_snake_case)]
            fn into_args(self) -> Result<Vec<Value>> {
                let ( $( $name, )+ ) = self;
                Ok(vec![ $( $name.into_arg()? ),+ ])
            }
        }
    };
}

impl_into_args_for_tuple!(A);
impl_into_args_for_tuple!(A, B);
impl_into_args_for_tuple!(A, B, C);
impl_into_args_for_tuple!(A, B, C, D);
impl_into_args_for_tuple!(A, B, C, D, E);
impl_into_args_for_tuple!(A, B, C, D, E, F);
