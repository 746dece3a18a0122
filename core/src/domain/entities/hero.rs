//! Hero entity, the CRUD resource exposed by the API.

use serde::{Deserialize, Serialize};

use super::user::Actor;

/// Hero entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Unique identifier for the hero
    pub id: i32,

    /// Public hero name
    pub name: String,

    /// Civilian identity
    pub secret_name: String,

    /// Age in years, if known
    pub age: Option<i32>,

    /// User that created the hero; cleared when that user is deleted
    pub owner_id: Option<i32>,
}

impl Hero {
    /// Whether `actor` may modify or delete this hero
    pub fn can_be_managed_by(&self, actor: &Actor) -> bool {
        actor.is_admin || self.owner_id == Some(actor.user_id)
    }

    /// Apply a partial update; `None` fields are left untouched
    pub fn apply(&mut self, changes: HeroChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(secret_name) = changes.secret_name {
            self.secret_name = secret_name;
        }
        if let Some(age) = changes.age {
            self.age = Some(age);
        }
    }
}

/// Client-supplied fields for a new hero
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeroDraft {
    pub name: String,
    pub secret_name: String,
    pub age: Option<i32>,
}

/// Hero data ready to be persisted; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
    pub secret_name: String,
    pub age: Option<i32>,
    pub owner_id: Option<i32>,
}

impl NewHero {
    pub fn from_draft(draft: HeroDraft, owner_id: i32) -> Self {
        Self {
            name: draft.name,
            secret_name: draft.secret_name,
            age: draft.age,
            owner_id: Some(owner_id),
        }
    }

    /// Materialises the hero with a store-assigned id
    pub fn into_hero(self, id: i32) -> Hero {
        Hero {
            id,
            name: self.name,
            secret_name: self.secret_name,
            age: self.age,
            owner_id: self.owner_id,
        }
    }
}

/// Partial update of a hero
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeroChanges {
    pub name: Option<String>,
    pub secret_name: Option<String>,
    pub age: Option<i32>,
}

impl HeroChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.secret_name.is_none() && self.age.is_none()
    }
}
