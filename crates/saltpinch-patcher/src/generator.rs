//! Recipe overlay generation
//!
//! A single pass over the winning recipes. A recipe is patched when all of:
//!
//! 1. one of its ingredient lines is the sentinel ingredient,
//! 2. its created object resolves to an ingestible,
//! 3. that ingestible is flagged as food.
//!
//! The overlay is a copy of the winning recipe with the first sentinel
//! ingredient line pointing at the replacement item.

use saltpinch_record::{Category, FormKey, Record};
use saltpinch_store::{RecordStore, WinningView};

/// Per-run counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchStats {
    /// Winning recipes examined
    pub scanned: usize,
    /// Recipes without the sentinel ingredient
    pub without_sentinel: usize,
    /// Recipes whose product is not an ingestible
    pub not_ingestible: usize,
    /// Recipes whose ingestible product is not food
    pub not_food: usize,
    /// Overlays produced
    pub patched: usize,
}

/// Overlays produced by one pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedPatch {
    /// Overlay records, in priority order of their source recipes
    pub overlays: Vec<Record>,
    /// Counters
    pub stats: PatchStats,
}

/// Outcome of the three-stage filter for one recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Patch,
    WithoutSentinel,
    NotIngestible,
    NotFood,
}

/// Generates recipe overlays replacing a sentinel ingredient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchGenerator {
    sentinel: FormKey,
}

impl PatchGenerator {
    /// Create generator replacing `sentinel`
    #[inline]
    #[must_use]
    pub fn new(sentinel: FormKey) -> Self {
        Self { sentinel }
    }

    /// Ingredient being replaced
    #[inline]
    #[must_use]
    pub fn sentinel(&self) -> &FormKey {
        &self.sentinel
    }

    /// Generate overlays from the store's current winning view
    #[must_use]
    pub fn generate(&self, store: &RecordStore, target: &FormKey) -> GeneratedPatch {
        self.generate_in(&store.winning_view(), target)
    }

    /// Generate overlays from an existing winning view
    #[must_use]
    pub fn generate_in(&self, view: &WinningView<'_>, target: &FormKey) -> GeneratedPatch {
        let mut patch = GeneratedPatch::default();

        for recipe in view.of_category(Category::ConstructibleObject) {
            patch.stats.scanned += 1;

            match self.evaluate(view, recipe) {
                Verdict::Patch => {
                    tracing::debug!(
                        "Redirecting {} in {} ({}) to {}",
                        self.sentinel,
                        recipe.form_key,
                        recipe.editor_id.as_deref().unwrap_or("<no editor id>"),
                        target
                    );
                    patch.overlays.push(self.redirect(recipe, target));
                    patch.stats.patched += 1;
                }
                Verdict::WithoutSentinel => patch.stats.without_sentinel += 1,
                Verdict::NotIngestible => {
                    tracing::trace!("Skipping {}: product is not an ingestible", recipe.form_key);
                    patch.stats.not_ingestible += 1;
                }
                Verdict::NotFood => {
                    tracing::trace!("Skipping {}: product is not food", recipe.form_key);
                    patch.stats.not_food += 1;
                }
            }
        }

        patch
    }

    fn evaluate(&self, view: &WinningView<'_>, recipe: &Record) -> Verdict {
        let Some(cobj) = recipe.as_constructible_object() else {
            return Verdict::WithoutSentinel;
        };
        if !cobj.uses_item(&self.sentinel) {
            return Verdict::WithoutSentinel;
        }

        let product = cobj
            .created_object
            .as_ref()
            .and_then(|key| view.resolve(key, Category::Ingestible))
            .and_then(Record::as_ingestible);

        match product {
            None => Verdict::NotIngestible,
            Some(alch) if !alch.is_food() => Verdict::NotFood,
            Some(_) => Verdict::Patch,
        }
    }

    fn redirect(&self, recipe: &Record, target: &FormKey) -> Record {
        let mut overlay = recipe.clone();
        if let Some(entry) = overlay
            .as_constructible_object_mut()
            .and_then(|cobj| cobj.first_entry_mut(&self.sentinel))
        {
            entry.item = target.clone();
        }
        overlay
    }
}
