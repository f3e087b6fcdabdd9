//! Conversions between a plain object slot and a [`RawExtension`].
//!
//! Both functions are total: every input produces an output and `Ok(())`.
//! Bytes that were never decoded are carried across untouched in both
//! directions.

use std::sync::Arc;

use crate::NULL;
use crate::conversion::{Converter, Scope};
use crate::error::Result;
use crate::extension::RawExtension;
use crate::object::ObjectRef;
use crate::unknown::{Unknown, is_null_or_empty};

/// Place an object into an extension slot.
///
/// - no object: the slot holds the `null` marker bytes
/// - an [`Unknown`] with bytes: the bytes are copied, not re-encoded
/// - an [`Unknown`] without bytes: whatever typed value `out` already
///   held is kept; otherwise the slot is emptied
/// - anything else: the slot holds the object itself
pub fn object_to_raw_extension(
    input: &Option<ObjectRef>,
    out: &mut RawExtension,
    _scope: &mut Scope<'_>,
) -> Result<()> {
    let Some(obj) = input else {
        *out = RawExtension::Raw(NULL.to_vec());
        return Ok(());
    };

    let obj = match obj.as_unknown() {
        Some(unknown) => match unknown.raw() {
            Some(raw) => {
                *out = RawExtension::Raw(raw.to_vec());
                return Ok(());
            }
            // Nothing to carry over; fall back to the destination's typed value.
            None => out.object().cloned(),
        },
        None => Some(Arc::clone(obj)),
    };

    *out = match obj {
        Some(obj) => RawExtension::Typed(obj),
        None => RawExtension::Empty,
    };
    Ok(())
}

/// Take an object out of an extension slot.
///
/// A typed value wins over raw bytes. Missing bytes and `null` give no
/// object; any other bytes come back wrapped in an [`Unknown`].
pub fn raw_extension_to_object(
    input: &RawExtension,
    out: &mut Option<ObjectRef>,
    _scope: &mut Scope<'_>,
) -> Result<()> {
    *out = match input {
        RawExtension::Typed(obj) => Some(Arc::clone(obj)),
        RawExtension::Raw(raw) if !is_null_or_empty(raw) => {
            let unknown: ObjectRef = Arc::new(Unknown::new(raw.clone()));
            Some(unknown)
        }
        _ => None,
    };
    Ok(())
}

/// Register both directions of the bridge on `converter`.
pub fn register_embedded_conversions(converter: &mut Converter) -> Result<()> {
    converter.register::<Option<ObjectRef>, RawExtension>(object_to_raw_extension)?;
    converter.register::<RawExtension, Option<ObjectRef>>(raw_extension_to_object)?;
    Ok(())
}
