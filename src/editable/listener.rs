//! Change notification for a field's owner.

/// Identifies a field to its listener.
pub type FieldId = u32;

/// Receives the new text after a successful edit.
///
/// Closures of the form `FnMut(FieldId, &str)` implement this directly.
pub trait ChangeListener {
    fn on_value_changed(&mut self, field: FieldId, text: &str);
}

impl<F> ChangeListener for F
where
    F: FnMut(FieldId, &str),
{
    fn on_value_changed(&mut self, field: FieldId, text: &str) {
        self(field, text)
    }
}
