#![forbid(unsafe_code)]

//! Quote action: reference a post from the reply box.

use core::fmt::Display;

use tracing::debug;

use crate::panel::{FloatingSurface, TextField};

/// Reference token inserted for post `id`.
#[must_use]
pub fn quote_reference(id: impl Display) -> String {
    format!(">>{id}\n")
}

/// Append a `>>id` reference to `field`, pop `form` into floating mode if it
/// is docked, and focus the field.
///
/// Always returns `false` so it can back an inline click handler that must
/// suppress the link's default navigation.
pub fn quote<F, T>(form: &mut F, field: &mut T, id: impl Display) -> bool
where
    F: FloatingSurface + ?Sized,
    T: TextField + ?Sized,
{
    let reference = quote_reference(id);
    field.append(&reference);
    if !form.is_floating() {
        form.set_floating(true);
    }
    field.focus();
    debug!(target: "postform::quote", reference = reference.trim_end(), "quoted post");
    false
}
