//! Head-geometry visibility suppression.
//!
//! With the camera pinned inside an actor's head, the actor's own head
//! geometry occludes the view. The suppressor disables exactly the
//! renderables it classifies as head-related and records their handles so
//! restore can re-enable that set — no more, no less.
//!
//! Classification is an OR of two tests: name keywords catch anatomically
//! named meshes wherever they sit (hair strands extend well away from the
//! head), and spatial proximity catches internally or third-party named
//! meshes that carry no recognizable keyword but sit inside the head.

use glam::Vec3;

use viewlock_core::scene::{ActorId, RenderableId, Scene};

/// Case-insensitive name substrings marking a renderable as head-related.
///
/// Mixed English and romanized internal names: mayu = brow, hitomi = iris,
/// sita/shita = tongue, o_tang = tongue mesh prefix.
pub const HEAD_KEYWORDS: [&str; 13] = [
    "head", "face", "hair", "eye", "mayu", "hitomi", "sclera", "tongue", "sita", "shita", "tooth",
    "teeth", "o_tang",
];

/// Returns whether a part name matches one of [`HEAD_KEYWORDS`].
#[must_use]
pub fn name_matches_head(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    HEAD_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Disables head-related renderables and restores exactly what it disabled.
#[derive(Debug, Default)]
pub struct VisibilitySuppressor {
    hidden: Vec<RenderableId>,
}

impl VisibilitySuppressor {
    /// Creates a suppressor with an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handles currently held, in the order they were hidden.
    #[must_use]
    pub fn hidden(&self) -> &[RenderableId] {
        &self.hidden
    }

    /// Hides every enabled renderable of `actor` classified as head-related.
    ///
    /// Parts already disabled before the call are skipped entirely: never
    /// touched, never recorded, so restore cannot re-enable something the
    /// operator or another system hid on purpose. Any previously held set is
    /// restored first, so the set is always built fresh.
    ///
    /// Returns the number of parts hidden.
    pub fn suppress(&mut self, scene: &mut Scene, actor: ActorId, threshold: f32) -> usize {
        if !self.hidden.is_empty() {
            self.restore(scene);
        }

        let Ok(head_pose) = scene.head_pose(actor) else {
            log::warn!("suppression skipped: no head joint on actor");
            return 0;
        };
        let head_center = head_pose.position;

        let to_hide: Vec<usize> = match scene.actor(actor) {
            Some(a) => a
                .renderables()
                .iter()
                .enumerate()
                .filter(|(_, r)| {
                    r.is_enabled() && Self::is_head_related(r.name(), r.bounds_center(), head_center, threshold)
                })
                .map(|(i, _)| i)
                .collect(),
            None => return 0,
        };

        let Some(a) = scene.actor_mut(actor) else {
            return 0;
        };
        for &index in &to_hide {
            if let Some(r) = a.renderable_mut(index) {
                r.set_enabled(false);
                self.hidden.push(RenderableId { actor, index });
            }
        }

        log::info!("suppressed {} head-related renderables", self.hidden.len());
        self.hidden.len()
    }

    /// Re-enables exactly the held handles, then clears the set.
    ///
    /// Safe to call with an empty set; touches nothing outside the set.
    /// Returns the number of parts re-enabled.
    pub fn restore(&mut self, scene: &mut Scene) -> usize {
        let mut shown = 0;
        for id in self.hidden.drain(..) {
            if let Some(r) = scene
                .actor_mut(id.actor)
                .and_then(|a| a.renderable_mut(id.index))
            {
                r.set_enabled(true);
                shown += 1;
            }
        }
        if shown > 0 {
            log::info!("restored {shown} suppressed renderables");
        }
        shown
    }

    fn is_head_related(name: &str, bounds_center: Vec3, head_center: Vec3, threshold: f32) -> bool {
        name_matches_head(name) || bounds_center.distance(head_center) < threshold
    }
}
