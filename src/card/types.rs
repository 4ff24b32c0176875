use serde::{Deserialize, Serialize};

/// Mana colors producible by the five basic land types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManaColor {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl ManaColor {
    pub const ALL: [ManaColor; 5] = [
        ManaColor::White,
        ManaColor::Blue,
        ManaColor::Black,
        ManaColor::Red,
        ManaColor::Green,
    ];

    /// Convert to the single character representation
    pub fn to_char(&self) -> char {
        match self {
            ManaColor::White => 'W',
            ManaColor::Blue => 'U',
            ManaColor::Black => 'B',
            ManaColor::Red => 'R',
            ManaColor::Green => 'G',
        }
    }
}

/// Basic land types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandType {
    Plains,
    Island,
    Swamp,
    Mountain,
    Forest,
}

impl LandType {
    pub const ALL: [LandType; 5] = [
        LandType::Plains,
        LandType::Island,
        LandType::Swamp,
        LandType::Mountain,
        LandType::Forest,
    ];

    /// Each basic land type produces exactly one color of mana
    pub fn mana_color(&self) -> ManaColor {
        match self {
            LandType::Plains => ManaColor::White,
            LandType::Island => ManaColor::Blue,
            LandType::Swamp => ManaColor::Black,
            LandType::Mountain => ManaColor::Red,
            LandType::Forest => ManaColor::Green,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LandType::Plains => "plains",
            LandType::Island => "island",
            LandType::Swamp => "swamp",
            LandType::Mountain => "mountain",
            LandType::Forest => "forest",
        }
    }
}

/// Stable identity handle for a card.
///
/// Two cards with equal fields are still different cards; every membership,
/// duplicate, and removal check compares ids, never field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(u32);

impl CardId {
    pub const fn new(raw: u32) -> Self {
        CardId(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// State shared by both card variants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseCard {
    pub id: CardId,
    pub tapped: bool,
    pub on_table: bool,
}

impl BaseCard {
    /// New cards start untapped and in hand
    pub fn new(id: CardId) -> Self {
        BaseCard {
            id,
            tapped: false,
            on_table: false,
        }
    }
}

/// Land card: produces one fixed color of mana while untapped on the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandCard {
    #[serde(flatten)]
    pub base: BaseCard,
    pub land_type: LandType,
}

impl LandCard {
    pub fn new(id: CardId, land_type: LandType) -> Self {
        LandCard {
            base: BaseCard::new(id),
            land_type,
        }
    }

    pub fn mana_color(&self) -> ManaColor {
        self.land_type.mana_color()
    }
}

/// Creature card with a plain multiset of colored mana as its cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatureCard {
    #[serde(flatten)]
    pub base: BaseCard,
    pub name: String,
    pub cost: Vec<ManaColor>,
    pub power: u32,
    pub toughness: u32,
    pub summoning_sick: bool,
}

impl CreatureCard {
    /// New creatures are summoning sick until their controller's next
    /// prepared turn
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        cost: Vec<ManaColor>,
        power: u32,
        toughness: u32,
    ) -> Self {
        CreatureCard {
            base: BaseCard::new(id),
            name: name.into(),
            cost,
            power,
            toughness,
            summoning_sick: true,
        }
    }

    /// How many mana of the given color the cost requires
    pub fn cost_of(&self, color: ManaColor) -> u32 {
        self.cost.iter().filter(|&&c| c == color).count() as u32
    }

    /// Power plus toughness, used only for display and summoning heuristics
    pub fn total_cost(&self) -> u32 {
        self.power + self.toughness
    }

    pub fn has_summoning_sickness(&self) -> bool {
        self.summoning_sick
    }

    pub fn set_summoning_sickness(&mut self) {
        self.summoning_sick = true;
    }

    pub fn clear_summoning_sickness(&mut self) {
        self.summoning_sick = false;
    }
}

/// Unified card enum
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "card_type", rename_all = "lowercase")]
pub enum Card {
    Land(LandCard),
    Creature(CreatureCard),
}

impl Card {
    fn base(&self) -> &BaseCard {
        match self {
            Card::Land(land) => &land.base,
            Card::Creature(creature) => &creature.base,
        }
    }

    fn base_mut(&mut self) -> &mut BaseCard {
        match self {
            Card::Land(land) => &mut land.base,
            Card::Creature(creature) => &mut creature.base,
        }
    }

    pub fn id(&self) -> CardId {
        self.base().id
    }

    pub fn is_tapped(&self) -> bool {
        self.base().tapped
    }

    pub fn is_on_table(&self) -> bool {
        self.base().on_table
    }

    pub fn tap(&mut self) {
        self.base_mut().tapped = true;
    }

    pub fn untap(&mut self) {
        self.base_mut().tapped = false;
    }

    /// One-way move from hand to table; only destruction removes a card
    /// from play afterwards
    pub fn put_on_table(&mut self) {
        self.base_mut().on_table = true;
    }

    pub fn as_land(&self) -> Option<&LandCard> {
        match self {
            Card::Land(land) => Some(land),
            Card::Creature(_) => None,
        }
    }

    pub fn as_creature(&self) -> Option<&CreatureCard> {
        match self {
            Card::Creature(creature) => Some(creature),
            Card::Land(_) => None,
        }
    }

    pub fn as_creature_mut(&mut self) -> Option<&mut CreatureCard> {
        match self {
            Card::Creature(creature) => Some(creature),
            Card::Land(_) => None,
        }
    }
}
