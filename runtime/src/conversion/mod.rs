//! Type-keyed conversion between object representations.
//!
//! A [`Converter`] holds at most one conversion function per
//! `(input type, output type)` pair and dispatches on the static types
//! of the values it is handed. Every function receives a [`Scope`],
//! through which it can reach the caller's [`Meta`] and run nested
//! conversions with the same converter.
//!
//! ```
//! use std::sync::Arc;
//!
//! use runtime::conversion::Converter;
//! use runtime::{ObjectRef, RawExtension, Unknown};
//!
//! let converter = Converter::with_embedded_conversions().unwrap();
//!
//! let unknown: ObjectRef = Arc::new(Unknown::from_bytes(br#"{"a":1}"#));
//! let obj = Some(unknown);
//! let mut ext = RawExtension::default();
//! converter.convert(&obj, &mut ext, None).unwrap();
//!
//! assert_eq!(ext.raw(), Some(br#"{"a":1}"#.as_slice()));
//! ```

pub mod embedded;

use std::{
    any::{Any, TypeId, type_name},
    collections::{HashMap, hash_map::Entry},
    fmt::{Debug, Formatter},
};

use meta::GroupVersion;
use tracing::trace;

use crate::error::{Error, Result};

/// Signature of a registered conversion function.
pub type ConversionFunc<In, Out> = fn(&In, &mut Out, &mut Scope<'_>) -> Result<()>;

/// Caller supplied context for a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Meta {
    pub src_version: Option<GroupVersion>,
    pub dest_version: Option<GroupVersion>,
}

/// State threaded through one top-level [`Converter::convert`] call.
pub struct Scope<'a> {
    converter: &'a Converter,
    meta: Option<&'a Meta>,
}

impl<'a> Scope<'a> {
    pub fn meta(&self) -> Option<&'a Meta> {
        self.meta
    }

    /// Convert a nested value with the converter that owns this scope.
    pub fn convert<In: Any, Out: Any>(&mut self, input: &In, out: &mut Out) -> Result<()> {
        let converter = self.converter;
        converter.dispatch(input, out, self)
    }
}

impl Debug for Scope<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope").field("meta", &self.meta).finish_non_exhaustive()
    }
}

trait ErasedConversion: Send + Sync {
    fn call(&self, input: &dyn Any, out: &mut dyn Any, scope: &mut Scope<'_>) -> Result<()>;
}

struct Registered<In, Out> {
    func: ConversionFunc<In, Out>,
}

impl<In: Any, Out: Any> ErasedConversion for Registered<In, Out> {
    fn call(&self, input: &dyn Any, out: &mut dyn Any, scope: &mut Scope<'_>) -> Result<()> {
        // Entries are keyed by their own type pair, so a failed downcast
        // means the pair has no function here.
        let not_found = || Error::ConversionNotFound {
            from: type_name::<In>(),
            to: type_name::<Out>(),
        };
        let input = input.downcast_ref::<In>().ok_or_else(not_found)?;
        let out = out.downcast_mut::<Out>().ok_or_else(not_found)?;
        (self.func)(input, out, scope)
    }
}

fn key<In: Any, Out: Any>() -> (TypeId, TypeId) {
    (TypeId::of::<In>(), TypeId::of::<Out>())
}

/// Registry of conversion functions keyed by input and output type.
#[derive(Default)]
pub struct Converter {
    conversions: HashMap<(TypeId, TypeId), Box<dyn ErasedConversion>>,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A converter with the Object/RawExtension bridge already registered.
    pub fn with_embedded_conversions() -> Result<Self> {
        let mut converter = Self::new();
        embedded::register_embedded_conversions(&mut converter)?;
        Ok(converter)
    }

    /// Register `func` for converting `In` into `Out`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateConversion`] if the pair is already taken.
    pub fn register<In: Any, Out: Any>(&mut self, func: ConversionFunc<In, Out>) -> Result<()> {
        match self.conversions.entry(key::<In, Out>()) {
            Entry::Occupied(_) => Err(Error::DuplicateConversion {
                from: type_name::<In>(),
                to: type_name::<Out>(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(Box::new(Registered { func }));
                Ok(())
            }
        }
    }

    pub fn has_conversion<In: Any, Out: Any>(&self) -> bool {
        self.conversions.contains_key(&key::<In, Out>())
    }

    /// Convert `input` into `out` with the function registered for the pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConversionNotFound`] for an unregistered pair, or
    /// whatever the conversion function itself returns.
    pub fn convert<In: Any, Out: Any>(
        &self,
        input: &In,
        out: &mut Out,
        meta: Option<&Meta>,
    ) -> Result<()> {
        let mut scope = Scope {
            converter: self,
            meta,
        };
        self.dispatch(input, out, &mut scope)
    }

    fn dispatch<In: Any, Out: Any>(
        &self,
        input: &In,
        out: &mut Out,
        scope: &mut Scope<'_>,
    ) -> Result<()> {
        let conversion = self
            .conversions
            .get(&key::<In, Out>())
            .ok_or(Error::ConversionNotFound {
                from: type_name::<In>(),
                to: type_name::<Out>(),
            })?;
        trace!(from = type_name::<In>(), to = type_name::<Out>(), "converting");
        conversion.call(input, out, scope)
    }
}

impl Debug for Converter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("conversions", &self.conversions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Celsius(f64);

    #[derive(Debug, Default, PartialEq)]
    struct Fahrenheit(f64);

    #[derive(Debug, Default, PartialEq)]
    struct Reading {
        label: String,
        temperature: Celsius,
    }

    #[derive(Debug, Default, PartialEq)]
    struct Report {
        label: String,
        temperature: Fahrenheit,
    }

    fn celsius_to_fahrenheit(
        input: &Celsius,
        out: &mut Fahrenheit,
        _scope: &mut Scope<'_>,
    ) -> Result<()> {
        out.0 = input.0 * 9.0 / 5.0 + 32.0;
        Ok(())
    }

    fn reading_to_report(input: &Reading, out: &mut Report, scope: &mut Scope<'_>) -> Result<()> {
        out.label = match scope.meta().and_then(|meta| meta.dest_version.as_ref()) {
            Some(version) => format!("{}@{}", input.label, version),
            None => input.label.clone(),
        };
        scope.convert(&input.temperature, &mut out.temperature)
    }

    fn converter() -> Converter {
        let mut converter = Converter::new();
        converter
            .register::<Celsius, Fahrenheit>(celsius_to_fahrenheit)
            .unwrap();
        converter.register::<Reading, Report>(reading_to_report).unwrap();
        converter
    }

    #[test]
    fn test_convert_registered_pair() {
        let converter = converter();
        let mut out = Fahrenheit::default();

        converter.convert(&Celsius(100.0), &mut out, None).unwrap();
        assert_eq!(out, Fahrenheit(212.0));
    }

    #[test]
    fn test_nested_conversion_through_scope() {
        let converter = converter();
        let input = Reading {
            label: "probe".to_string(),
            temperature: Celsius(0.0),
        };
        let meta = Meta {
            src_version: None,
            dest_version: Some(GroupVersion::new("sensors", "v2")),
        };

        let mut out = Report::default();
        converter.convert(&input, &mut out, Some(&meta)).unwrap();
        assert_eq!(
            out,
            Report {
                label: "probe@sensors/v2".to_string(),
                temperature: Fahrenheit(32.0),
            }
        );

        let mut out = Report::default();
        converter.convert(&input, &mut out, None).unwrap();
        assert_eq!(out.label, "probe");
    }

    #[test]
    fn test_convert_missing_pair() {
        let converter = converter();
        let mut out = Celsius::default();

        let err = converter.convert(&Fahrenheit(0.0), &mut out, None).unwrap_err();
        assert!(matches!(err, Error::ConversionNotFound { .. }));
        assert!(!converter.has_conversion::<Fahrenheit, Celsius>());
        assert!(converter.has_conversion::<Celsius, Fahrenheit>());
    }

    #[test]
    fn test_register_duplicate_pair() {
        let mut converter = converter();

        let err = converter
            .register::<Celsius, Fahrenheit>(celsius_to_fahrenheit)
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateConversion { .. }));
    }

    #[test]
    fn test_erased_call_with_other_types_is_not_found() {
        let converter = converter();
        let mut scope = Scope {
            converter: &converter,
            meta: None,
        };
        let registered = Registered::<Celsius, Fahrenheit> {
            func: celsius_to_fahrenheit,
        };
        let erased: Box<dyn ErasedConversion> = Box::new(registered);

        let mut out = Celsius::default();
        let err = erased.call(&Fahrenheit(1.0), &mut out, &mut scope).unwrap_err();
        assert!(matches!(err, Error::ConversionNotFound { .. }));
        assert_eq!(out, Celsius::default());
    }

    #[test]
    fn test_with_embedded_conversions() {
        use crate::extension::RawExtension;
        use crate::object::ObjectRef;

        let converter = Converter::with_embedded_conversions().unwrap();
        assert!(converter.has_conversion::<Option<ObjectRef>, RawExtension>());
        assert!(converter.has_conversion::<RawExtension, Option<ObjectRef>>());
        assert_eq!(format!("{:?}", converter), "Converter { conversions: 2 }");
    }
}
