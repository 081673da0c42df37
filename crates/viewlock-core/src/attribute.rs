//! By-name field access on foreign objects.
//!
//! Some host objects keep the state we need in fields their public contract
//! does not expose (the orbit camera's standoff distance, the flag fields of
//! nested editor objects). [`FieldAccess`] is the capability seam for those
//! objects: an implementation enumerates the concrete type's fields by name,
//! public and non-public alike, and hands them out as [`Any`] references.
//!
//! The free functions on top treat every failure as an ordinary absent value.
//! A missing field or a runtime type mismatch yields `None`/`false`, never a
//! panic, so a tracking tick that races a scene change degrades instead of
//! crashing. No rollback is provided here; callers that need one snapshot
//! the fields first.

use std::any::Any;

/// By-name access to the fields of a foreign object.
pub trait FieldAccess: Any {
    /// Returns self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns self as mutable `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Names of all fields reachable through this accessor, declaration
    /// order, non-public fields included.
    fn field_names(&self) -> &'static [&'static str];

    /// Borrows a field by name. `None` if no such field exists.
    fn field(&self, name: &str) -> Option<&dyn Any>;

    /// Mutably borrows a field by name. `None` if no such field exists.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Any>;

    /// Borrows a nested foreign sub-object by name.
    ///
    /// Default is `None`; objects that hold other introspectable objects
    /// override this.
    fn nested_mut(&mut self, _name: &str) -> Option<&mut dyn FieldAccess> {
        None
    }
}

/// Reads a field by name, checking the runtime type.
///
/// Returns `None` when the field is absent or its type is not `T`.
#[must_use]
pub fn try_get<T: Any + Copy>(obj: &dyn FieldAccess, name: &str) -> Option<T> {
    obj.field(name)?.downcast_ref::<T>().copied()
}

/// Writes a field by name, checking the runtime type.
///
/// Returns `false` when the field is absent or its type is not `T`; the
/// object is left untouched in that case.
pub fn try_set<T: Any>(obj: &mut dyn FieldAccess, name: &str, value: T) -> bool {
    match obj.field_mut(name).and_then(|f| f.downcast_mut::<T>()) {
        Some(slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}

/// Clears the first boolean field whose name contains one of `keywords`
/// (case-insensitive).
///
/// Returns whether a field was modified. Non-boolean fields with matching
/// names are skipped.
pub fn clear_first_flag(obj: &mut dyn FieldAccess, keywords: &[&str]) -> bool {
    for &name in obj.field_names() {
        let lower = name.to_ascii_lowercase();
        if !keywords
            .iter()
            .any(|k| lower.contains(&k.to_ascii_lowercase()))
        {
            continue;
        }
        if !obj.field(name).map_or(false, |f| f.is::<bool>()) {
            continue;
        }
        if try_set(obj, name, false) {
            log::debug!("cleared flag field '{name}'");
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    struct Probe {
        pub speed: f32,
        offset: Vec3,
        check_new_items: bool,
        label: String,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                speed: 2.5,
                offset: Vec3::new(1.0, 2.0, 3.0),
                check_new_items: true,
                label: "probe".to_string(),
            }
        }
    }

    impl FieldAccess for Probe {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }

        fn field_names(&self) -> &'static [&'static str] {
            &["speed", "offset", "check_new_items", "label"]
        }

        fn field(&self, name: &str) -> Option<&dyn Any> {
            match name {
                "speed" => Some(&self.speed),
                "offset" => Some(&self.offset),
                "check_new_items" => Some(&self.check_new_items),
                "label" => Some(&self.label),
                _ => None,
            }
        }

        fn field_mut(&mut self, name: &str) -> Option<&mut dyn Any> {
            match name {
                "speed" => Some(&mut self.speed),
                "offset" => Some(&mut self.offset),
                "check_new_items" => Some(&mut self.check_new_items),
                "label" => Some(&mut self.label),
                _ => None,
            }
        }
    }

    #[test]
    fn test_try_get_hit() {
        let probe = Probe::new();
        assert_eq!(try_get::<f32>(&probe, "speed"), Some(2.5));
        assert_eq!(try_get::<Vec3>(&probe, "offset"), Some(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_try_get_absent_field() {
        let probe = Probe::new();
        assert_eq!(try_get::<f32>(&probe, "velocity"), None);
    }

    #[test]
    fn test_try_get_type_mismatch() {
        let probe = Probe::new();
        // Field exists, but as f32; asking for Vec3 is absent, not a panic.
        assert_eq!(try_get::<Vec3>(&probe, "speed"), None);
    }

    #[test]
    fn test_try_set_hit_and_miss() {
        let mut probe = Probe::new();
        assert!(try_set(&mut probe, "speed", 9.0f32));
        assert_eq!(probe.speed, 9.0);

        assert!(!try_set(&mut probe, "speed", Vec3::ZERO));
        assert_eq!(probe.speed, 9.0);

        assert!(!try_set(&mut probe, "velocity", 1.0f32));
    }

    #[test]
    fn test_clear_first_flag() {
        let mut probe = Probe::new();
        assert!(clear_first_flag(&mut probe, &["new", "check"]));
        assert!(!probe.check_new_items);

        // Already false; the scan still counts the write as a modification.
        assert!(clear_first_flag(&mut probe, &["check"]));
    }

    #[test]
    fn test_clear_first_flag_no_match() {
        let mut probe = Probe::new();
        assert!(!clear_first_flag(&mut probe, &["gravity"]));
        assert!(probe.check_new_items);
    }
}
