//! Physics-editor flag clearing for scene items.
//!
//! Some host items carry a pose controller whose nested editor objects keep
//! re-registering new physics bones and colliders every frame. Clearing the
//! editors' scan flags stops that. The editors are not part of any public
//! contract, so everything goes through the field accessor.

use viewlock_core::attribute::{clear_first_flag, FieldAccess};
use viewlock_core::scene::Scene;

/// Item-name substring (case-insensitive) marking a physics-bone item.
pub const PHYSICS_ITEM_MARKER: &str = "dynamic bone";

/// Editor flag-name keywords to clear.
pub const EDITOR_FLAG_KEYWORDS: [&str; 2] = ["new", "check"];

/// Names of the editor objects nested inside a pose controller.
const EDITOR_FIELDS: [&str; 2] = ["colliders_editor", "bones_editor"];

/// Clears the scan flags on every physics-bone item's nested editors.
///
/// Items without a pose controller, or whose editors expose no matching
/// boolean field, are skipped. Returns the number of items modified.
pub fn disable_physics_editors(scene: &mut Scene) -> usize {
    let mut modified = 0;
    let mut checked = 0;

    for item in scene.items_mut() {
        checked += 1;
        if !item
            .name()
            .to_ascii_lowercase()
            .contains(PHYSICS_ITEM_MARKER)
        {
            continue;
        }
        let Some(controller) = item.pose_controller_mut() else {
            continue;
        };

        let mut touched = false;
        for editor_field in EDITOR_FIELDS {
            if let Some(editor) = controller.nested_mut(editor_field) {
                touched |= clear_first_flag(editor, &EDITOR_FLAG_KEYWORDS);
            }
        }
        if touched {
            modified += 1;
        }
    }

    log::info!("checked {checked} items, disabled physics editors on {modified}");
    modified
}
