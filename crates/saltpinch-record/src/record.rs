//! Records and their category tags
//!
//! A [`Record`] pairs a stable [`FormKey`] with a [`RecordBody`]. The body is
//! an explicit tagged variant per [`Category`]: resolving a link "as an
//! ingestible" is a tag match plus payload access.

use std::fmt::{self, Display, Formatter};

use crate::{ConstructibleObject, FormKey, GenericItem, Ingestible, Keyword};

/// Category tag of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum Category {
    /// Crafting recipe (COBJ)
    ConstructibleObject,
    /// Food, potion or poison (ALCH)
    Ingestible,
    /// Alchemy ingredient (INGR)
    Ingredient,
    /// Miscellaneous item (MISC)
    MiscItem,
    /// Book or note (BOOK)
    Book,
    /// Weapon (WEAP)
    Weapon,
    /// Armor (ARMO)
    Armor,
    /// Arrow or bolt (AMMO)
    Ammunition,
    /// Key (KEYM)
    Key,
    /// Scroll (SCRL)
    Scroll,
    /// Soul gem (SLGM)
    SoulGem,
    /// Carryable light (LIGH)
    Light,
    /// Alchemy apparatus (APPA)
    AlchemicalApparatus,
    /// Keyword (KYWD)
    Keyword,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 14] = [
        Self::ConstructibleObject,
        Self::Ingestible,
        Self::Ingredient,
        Self::MiscItem,
        Self::Book,
        Self::Weapon,
        Self::Armor,
        Self::Ammunition,
        Self::Key,
        Self::Scroll,
        Self::SoulGem,
        Self::Light,
        Self::AlchemicalApparatus,
        Self::Keyword,
    ];

    /// Whether records of this category can be held in an inventory or used
    /// as a recipe ingredient
    #[inline]
    #[must_use]
    pub const fn is_item(self) -> bool {
        !matches!(self, Self::ConstructibleObject | Self::Keyword)
    }

    /// Four-letter record signature
    #[must_use]
    pub const fn signature(self) -> &'static str {
        match self {
            Self::ConstructibleObject => "COBJ",
            Self::Ingestible => "ALCH",
            Self::Ingredient => "INGR",
            Self::MiscItem => "MISC",
            Self::Book => "BOOK",
            Self::Weapon => "WEAP",
            Self::Armor => "ARMO",
            Self::Ammunition => "AMMO",
            Self::Key => "KEYM",
            Self::Scroll => "SCRL",
            Self::SoulGem => "SLGM",
            Self::Light => "LIGH",
            Self::AlchemicalApparatus => "APPA",
            Self::Keyword => "KYWD",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.signature())
    }
}

/// Typed payload of a record, tagged by category
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "category")]
pub enum RecordBody {
    /// Crafting recipe
    ConstructibleObject(ConstructibleObject),
    /// Food, potion or poison
    Ingestible(Ingestible),
    /// Alchemy ingredient
    Ingredient(GenericItem),
    /// Miscellaneous item
    MiscItem(GenericItem),
    /// Book or note
    Book(GenericItem),
    /// Weapon
    Weapon(GenericItem),
    /// Armor
    Armor(GenericItem),
    /// Arrow or bolt
    Ammunition(GenericItem),
    /// Key
    Key(GenericItem),
    /// Scroll
    Scroll(GenericItem),
    /// Soul gem
    SoulGem(GenericItem),
    /// Carryable light
    Light(GenericItem),
    /// Alchemy apparatus
    AlchemicalApparatus(GenericItem),
    /// Keyword
    Keyword(Keyword),
}

impl RecordBody {
    /// Category tag of this body
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::ConstructibleObject(_) => Category::ConstructibleObject,
            Self::Ingestible(_) => Category::Ingestible,
            Self::Ingredient(_) => Category::Ingredient,
            Self::MiscItem(_) => Category::MiscItem,
            Self::Book(_) => Category::Book,
            Self::Weapon(_) => Category::Weapon,
            Self::Armor(_) => Category::Armor,
            Self::Ammunition(_) => Category::Ammunition,
            Self::Key(_) => Category::Key,
            Self::Scroll(_) => Category::Scroll,
            Self::SoulGem(_) => Category::SoulGem,
            Self::Light(_) => Category::Light,
            Self::AlchemicalApparatus(_) => Category::AlchemicalApparatus,
            Self::Keyword(_) => Category::Keyword,
        }
    }
}

/// One record as stored in a layer
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// Stable key shared by every override of this record
    pub form_key: FormKey,

    /// Human-readable identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_id: Option<String>,

    /// Typed payload
    pub body: RecordBody,
}

impl Record {
    /// Create record
    #[inline]
    #[must_use]
    pub fn new(form_key: FormKey, editor_id: Option<String>, body: RecordBody) -> Self {
        Self {
            form_key,
            editor_id,
            body,
        }
    }

    /// Category tag
    #[inline]
    #[must_use]
    pub fn category(&self) -> Category {
        self.body.category()
    }

    /// Recipe payload, if this is a recipe
    #[inline]
    #[must_use]
    pub fn as_constructible_object(&self) -> Option<&ConstructibleObject> {
        match &self.body {
            RecordBody::ConstructibleObject(cobj) => Some(cobj),
            _ => None,
        }
    }

    /// Mutable recipe payload, if this is a recipe
    #[inline]
    pub fn as_constructible_object_mut(&mut self) -> Option<&mut ConstructibleObject> {
        match &mut self.body {
            RecordBody::ConstructibleObject(cobj) => Some(cobj),
            _ => None,
        }
    }

    /// Ingestible payload, if this is an ingestible
    #[inline]
    #[must_use]
    pub fn as_ingestible(&self) -> Option<&Ingestible> {
        match &self.body {
            RecordBody::Ingestible(alch) => Some(alch),
            _ => None,
        }
    }

    /// Every form key this record links to (not including its own key)
    #[must_use]
    pub fn links(&self) -> Vec<&FormKey> {
        match &self.body {
            RecordBody::ConstructibleObject(cobj) => cobj.links(),
            _ => Vec::new(),
        }
    }
}
