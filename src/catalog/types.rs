use serde::{Deserialize, Serialize};

/// Enemy definition from `enemies.json`.
///
/// Field names follow the JSON data files, which mix camelCase with a stray
/// `IntDie`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(rename = "strDie", default)]
    pub str_die: i32,
    #[serde(rename = "dexDie", default)]
    pub dex_die: i32,
    #[serde(rename = "IntDie", alias = "intDie", default)]
    pub int_die: i32,
    #[serde(rename = "enemyBallDamage", default)]
    pub enemy_ball_damage: i32,
    #[serde(rename = "enemyEnerDamage", default)]
    pub enemy_ener_damage: i32,
    #[serde(rename = "enemyExplDamage", default)]
    pub enemy_expl_damage: i32,
    #[serde(rename = "playerRangedDamage", default)]
    pub player_ranged_damage: i32,
    #[serde(rename = "playerCloseDamage", default)]
    pub player_close_damage: i32,
    #[serde(rename = "itemDrop", default)]
    pub item_drop: i32,
    #[serde(default)]
    pub initiative: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ammo_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ammo_capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fire_rate: Option<String>,
    #[serde(default)]
    pub jammed: bool,
    pub slots: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ammo: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gear {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub slots: u32,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heal: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<String>,
    #[serde(default)]
    pub single_use: bool,
}

/// Cybernetic implant picked at character creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Implant {
    pub name: String,
    #[serde(default)]
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub desc: String,
}

/// Loot an enemy can leave behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "drop", rename_all = "snake_case")]
pub enum DropItem {
    Weapon(Weapon),
    Gear(Gear),
}

impl DropItem {
    pub fn name(&self) -> &str {
        match self {
            DropItem::Weapon(w) => &w.name,
            DropItem::Gear(g) => &g.name,
        }
    }

    /// The item's own type string from the catalog (e.g. "ranged", "medkit").
    pub fn kind(&self) -> &str {
        match self {
            DropItem::Weapon(w) => &w.kind,
            DropItem::Gear(g) => &g.kind,
        }
    }

    pub fn slots(&self) -> u32 {
        match self {
            DropItem::Weapon(w) => w.slots,
            DropItem::Gear(g) => g.slots,
        }
    }
}

impl From<Weapon> for DropItem {
    fn from(w: Weapon) -> Self {
        DropItem::Weapon(w)
    }
}

impl From<Gear> for DropItem {
    fn from(g: Gear) -> Self {
        DropItem::Gear(g)
    }
}
